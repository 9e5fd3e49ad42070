use chrono::{DateTime, Utc};

use crate::models::{Payment, PaymentId};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeInterval {
    pub after: Option<DateTime<Utc>>,
    pub before: Option<DateTime<Utc>>,
}

impl TimeInterval {
    pub fn after(at: DateTime<Utc>) -> Self {
        Self {
            after: Some(at),
            before: None,
        }
    }

    pub fn before(at: DateTime<Utc>) -> Self {
        Self {
            after: None,
            before: Some(at),
        }
    }

    pub fn between(after: DateTime<Utc>, before: DateTime<Utc>) -> Self {
        Self {
            after: Some(after),
            before: Some(before),
        }
    }

    pub fn contains(&self, time: DateTime<Utc>) -> bool {
        match (self.after, self.before) {
            (Some(after), Some(before)) => after <= time && time <= before,
            (Some(after), None) => time >= after,
            (None, Some(before)) => time <= before,
            (None, None) => true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentFilter {
    pub ids: Option<Vec<PaymentId>>,
    pub contract_ids: Option<Vec<String>>,
    pub time_interval: Option<TimeInterval>,
}

impl PaymentFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn by_id(id: PaymentId) -> Self {
        Self {
            ids: Some(vec![id]),
            ..Self::default()
        }
    }

    pub fn by_contract(contract_id: impl Into<String>, time_interval: Option<TimeInterval>) -> Self {
        Self {
            contract_ids: Some(vec![contract_id.into()]),
            time_interval,
            ..Self::default()
        }
    }

    pub fn matches(&self, payment: &Payment) -> bool {
        let id_ok = self
            .ids
            .as_ref()
            .is_none_or(|ids| ids.contains(&payment.id));
        let contract_ok = self
            .contract_ids
            .as_ref()
            .is_none_or(|contract_ids| contract_ids.contains(&payment.contract_id));
        let time_ok = self
            .time_interval
            .is_none_or(|interval| interval.contains(payment.time));

        id_ok && contract_ok && time_ok
    }
}
