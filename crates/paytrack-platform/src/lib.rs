pub mod config;
pub mod contracts;

pub use config::ServiceConfig;
pub use contracts::{
    ContractPayments, CreatePaymentInput, GetContractPaymentsInput, GetPaymentsInput,
    TimeIntervalInput, UpdatePaymentInput,
};
