use chrono::{DateTime, Utc};
use paytrack_core::{
    NewPayment, Payment, PaymentError, PaymentFilter, PaymentId, PaymentPatch, TimeInterval,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentInput {
    pub contract_id: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub value: Decimal,
    pub time: DateTime<Utc>,
}

impl From<CreatePaymentInput> for NewPayment {
    fn from(input: CreatePaymentInput) -> Self {
        Self {
            contract_id: input.contract_id,
            description: input.description,
            value: input.value,
            time: input.time,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePaymentInput {
    pub id: PaymentId,
    #[serde(default)]
    pub contract_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub value: Option<Decimal>,
    #[serde(default)]
    pub time: Option<DateTime<Utc>>,
}

impl From<UpdatePaymentInput> for PaymentPatch {
    fn from(input: UpdatePaymentInput) -> Self {
        Self {
            contract_id: input.contract_id,
            description: input.description,
            value: input.value,
            time: input.time,
            ..PaymentPatch::new(input.id)
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimeIntervalInput {
    #[serde(default)]
    pub after: Option<DateTime<Utc>>,
    #[serde(default)]
    pub before: Option<DateTime<Utc>>,
}

impl From<TimeIntervalInput> for TimeInterval {
    fn from(input: TimeIntervalInput) -> Self {
        Self {
            after: input.after,
            before: input.before,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPaymentsInput {
    #[serde(default)]
    pub ids: Option<Vec<PaymentId>>,
    #[serde(default)]
    pub contract_ids: Option<Vec<String>>,
    #[serde(default)]
    pub time_interval: Option<TimeIntervalInput>,
}

impl From<GetPaymentsInput> for PaymentFilter {
    fn from(input: GetPaymentsInput) -> Self {
        Self {
            ids: input.ids,
            contract_ids: input.contract_ids,
            time_interval: input.time_interval.map(TimeInterval::from),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetContractPaymentsInput {
    pub contract_id: String,
    #[serde(default)]
    pub time_interval: Option<TimeIntervalInput>,
}

impl From<GetContractPaymentsInput> for PaymentFilter {
    fn from(input: GetContractPaymentsInput) -> Self {
        PaymentFilter::by_contract(
            input.contract_id,
            input.time_interval.map(TimeInterval::from),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractPayments {
    #[serde(with = "rust_decimal::serde::float")]
    pub sum: Decimal,
    pub items: Vec<Payment>,
}

impl ContractPayments {
    pub fn from_items(contract_id: &str, items: Vec<Payment>) -> Result<Self, PaymentError> {
        let sum = items
            .iter()
            .try_fold(Decimal::ZERO, |sum, payment| sum.checked_add(payment.value))
            .ok_or_else(|| PaymentError::SumOverflow {
                contract_id: contract_id.to_string(),
            })?;

        Ok(Self { sum, items })
    }
}
