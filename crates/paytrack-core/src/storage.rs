use async_trait::async_trait;

use crate::error::PaymentError;
use crate::filter::PaymentFilter;
use crate::models::{NewPayment, Payment, PaymentId, PaymentPatch};

#[async_trait]
pub trait PaymentStore: Send + Sync {
    async fn add(&self, payment: NewPayment) -> Payment;
    async fn get(&self, filter: &PaymentFilter) -> Vec<Payment>;
    async fn get_by_id(&self, id: &PaymentId) -> Result<Payment, PaymentError>;
    async fn update(&self, patch: PaymentPatch) -> Result<Payment, PaymentError>;
    async fn delete(&self, id: &PaymentId) -> Result<Payment, PaymentError>;
    async fn clear(&self);
}
