pub mod error;
pub mod filter;
pub mod models;
pub mod storage;

pub use error::PaymentError;
pub use filter::{PaymentFilter, TimeInterval};
pub use models::{NewPayment, Payment, PaymentId, PaymentPatch};
pub use storage::PaymentStore;
