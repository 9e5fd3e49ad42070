use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentId(String);

impl PaymentId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for PaymentId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for PaymentId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for PaymentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: PaymentId,
    pub contract_id: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub value: Decimal,
    pub time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Payment {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPayment {
    pub contract_id: String,
    pub description: String,
    pub value: Decimal,
    pub time: DateTime<Utc>,
}

impl NewPayment {
    pub fn into_payment(self, id: PaymentId, created_at: DateTime<Utc>) -> Payment {
        Payment {
            id,
            contract_id: self.contract_id,
            description: self.description,
            value: self.value,
            time: self.time,
            created_at,
            updated_at: None,
            deleted_at: None,
        }
    }
}

/// `deleted_at` is doubly optional: `Some(None)` clears the soft-delete
/// marker, `Some(Some(t))` sets it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentPatch {
    pub id: PaymentId,
    pub contract_id: Option<String>,
    pub description: Option<String>,
    pub value: Option<Decimal>,
    pub time: Option<DateTime<Utc>>,
    pub deleted_at: Option<Option<DateTime<Utc>>>,
}

impl PaymentPatch {
    pub fn new(id: PaymentId) -> Self {
        Self {
            id,
            contract_id: None,
            description: None,
            value: None,
            time: None,
            deleted_at: None,
        }
    }

    pub fn soft_delete(id: PaymentId, at: DateTime<Utc>) -> Self {
        Self {
            deleted_at: Some(Some(at)),
            ..Self::new(id)
        }
    }

    pub fn apply(&self, base: &Payment, now: DateTime<Utc>) -> Payment {
        let mut next = Payment {
            updated_at: Some(now),
            ..base.clone()
        };

        next.id = self.id.clone();
        if let Some(contract_id) = &self.contract_id {
            next.contract_id = contract_id.clone();
        }
        if let Some(description) = &self.description {
            next.description = description.clone();
        }
        if let Some(value) = self.value {
            next.value = value;
        }
        if let Some(time) = self.time {
            next.time = time;
        }
        if let Some(deleted_at) = self.deleted_at {
            next.deleted_at = deleted_at;
        }

        next
    }
}
