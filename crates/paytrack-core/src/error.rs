use thiserror::Error;

use crate::models::PaymentId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    #[error("Payment not found: {id}")]
    NotFound { id: PaymentId },
    #[error("Sum of payments for contract {contract_id} exceeds the supported range")]
    SumOverflow { contract_id: String },
}
