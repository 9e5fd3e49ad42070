mod repository;

use async_trait::async_trait;
use paytrack_core::{
    NewPayment, Payment, PaymentError, PaymentFilter, PaymentId, PaymentPatch, PaymentStore,
};
use tokio::sync::RwLock;
use tracing::info;

pub use repository::PaymentRepository;

#[derive(Debug, Default)]
pub struct InMemoryPaymentStore {
    repository: RwLock<PaymentRepository>,
}

impl InMemoryPaymentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentStore for InMemoryPaymentStore {
    async fn add(&self, payment: NewPayment) -> Payment {
        self.repository.write().await.add(payment)
    }

    async fn get(&self, filter: &PaymentFilter) -> Vec<Payment> {
        self.repository.read().await.get(filter)
    }

    async fn get_by_id(&self, id: &PaymentId) -> Result<Payment, PaymentError> {
        self.repository.read().await.get_by_id(id)
    }

    async fn update(&self, patch: PaymentPatch) -> Result<Payment, PaymentError> {
        self.repository.write().await.update(patch)
    }

    async fn delete(&self, id: &PaymentId) -> Result<Payment, PaymentError> {
        self.repository.write().await.delete(id)
    }

    async fn clear(&self) {
        let mut repository = self.repository.write().await;
        info!(dropped = repository.len(), "payment store cleared");
        repository.clear();
    }
}
