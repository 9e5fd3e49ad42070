use std::sync::Arc;

use paytrack_core::{Payment, PaymentError, PaymentFilter, PaymentId, PaymentStore};
use paytrack_platform::{
    ContractPayments, CreatePaymentInput, GetContractPaymentsInput, GetPaymentsInput,
    UpdatePaymentInput,
};

#[derive(Clone)]
pub struct PaymentApi {
    store: Arc<dyn PaymentStore>,
}

impl PaymentApi {
    pub fn new(store: Arc<dyn PaymentStore>) -> Self {
        Self { store }
    }

    pub async fn create_payment(&self, payment: CreatePaymentInput) -> Payment {
        self.store.add(payment.into()).await
    }

    pub async fn update_payment(&self, update: UpdatePaymentInput) -> Result<Payment, PaymentError> {
        self.store.update(update.into()).await
    }

    pub async fn delete_payment(&self, id: PaymentId) -> Result<Payment, PaymentError> {
        self.store.delete(&id).await
    }

    pub async fn payments(&self, filters: GetPaymentsInput) -> Vec<Payment> {
        self.store.get(&PaymentFilter::from(filters)).await
    }

    pub async fn contract_payments(
        &self,
        filters: GetContractPaymentsInput,
    ) -> Result<ContractPayments, PaymentError> {
        let contract_id = filters.contract_id.clone();
        let items = self.store.get(&PaymentFilter::from(filters)).await;
        ContractPayments::from_items(&contract_id, items)
    }
}
