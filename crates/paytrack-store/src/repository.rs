use chrono::Utc;
use paytrack_core::{NewPayment, Payment, PaymentError, PaymentFilter, PaymentId, PaymentPatch};
use tracing::debug;

#[derive(Debug, Default)]
pub struct PaymentRepository {
    store: Vec<Payment>,
}

impl PaymentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn add(&mut self, payment: NewPayment) -> Payment {
        let created = payment.into_payment(PaymentId::generate(), Utc::now());
        debug!(id = %created.id, contract_id = %created.contract_id, "payment added");

        self.store.push(created.clone());
        created
    }

    pub fn get(&self, filter: &PaymentFilter) -> Vec<Payment> {
        self.store
            .iter()
            .filter(|payment| filter.matches(payment))
            .cloned()
            .collect()
    }

    pub fn get_by_id(&self, id: &PaymentId) -> Result<Payment, PaymentError> {
        let mut matches = self.get(&PaymentFilter::by_id(id.clone()));

        if matches.len() != 1 {
            return Err(PaymentError::NotFound { id: id.clone() });
        }

        Ok(matches.remove(0))
    }

    pub fn update(&mut self, patch: PaymentPatch) -> Result<Payment, PaymentError> {
        let found = self.get_by_id(&patch.id)?;
        let updated = patch.apply(&found, Utc::now());

        for payment in self.store.iter_mut().filter(|payment| payment.id == patch.id) {
            *payment = updated.clone();
        }
        debug!(id = %updated.id, deleted = updated.is_deleted(), "payment updated");

        Ok(updated)
    }

    pub fn delete(&mut self, id: &PaymentId) -> Result<Payment, PaymentError> {
        self.update(PaymentPatch::soft_delete(id.clone(), Utc::now()))
    }

    pub fn clear(&mut self) {
        self.store.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone};
    use paytrack_core::TimeInterval;
    use rust_decimal::Decimal;

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    fn new_payment(contract_id: &str, value: i64, millis: i64) -> NewPayment {
        NewPayment {
            contract_id: contract_id.to_string(),
            description: "Fake description".to_string(),
            value: Decimal::new(value, 0),
            time: at(millis),
        }
    }

    fn seeded() -> (PaymentRepository, Vec<Payment>) {
        let mut repository = PaymentRepository::new();
        let payments = vec![
            repository.add(new_payment("contract-1", 123, 1)),
            repository.add(new_payment("contract-2", 123, 2)),
            repository.add(new_payment("contract-1", 123, 3)),
        ];
        (repository, payments)
    }

    #[test]
    fn add_generates_id_and_created_at() {
        let mut repository = PaymentRepository::new();
        let before = Utc::now();

        let created = repository.add(new_payment("c1", 123, 1));

        assert!(!created.id.as_str().is_empty());
        assert!(created.created_at >= before);
        assert_eq!(created.value, Decimal::new(123, 0));
        assert_eq!(created.contract_id, "c1");
        assert_eq!(created.time, at(1));
        assert!(created.updated_at.is_none());
        assert!(created.deleted_at.is_none());
        assert_eq!(repository.len(), 1);
    }

    #[test]
    fn get_without_filters_returns_insertion_order() {
        let (repository, payments) = seeded();
        assert_eq!(repository.get(&PaymentFilter::all()), payments);
    }

    #[test]
    fn get_by_ids() {
        let (repository, payments) = seeded();

        let filter = PaymentFilter::by_id(payments[1].id.clone());
        assert_eq!(repository.get(&filter), vec![payments[1].clone()]);

        let unknown = PaymentFilter::by_id(PaymentId::from("never-issued"));
        assert!(repository.get(&unknown).is_empty());
    }

    #[test]
    fn get_by_contract_ids_keeps_order() {
        let (repository, payments) = seeded();

        let filter = PaymentFilter::by_contract("contract-1", None);

        assert_eq!(
            repository.get(&filter),
            vec![payments[0].clone(), payments[2].clone()]
        );
    }

    #[test]
    fn get_by_time_interval() {
        let (repository, payments) = seeded();
        let with_interval = |interval| PaymentFilter {
            time_interval: Some(interval),
            ..PaymentFilter::default()
        };

        assert_eq!(
            repository.get(&with_interval(TimeInterval::after(at(2)))),
            payments[1..].to_vec()
        );
        assert_eq!(
            repository.get(&with_interval(TimeInterval::before(at(2)))),
            payments[..2].to_vec()
        );
        assert_eq!(
            repository.get(&with_interval(TimeInterval::between(at(1), at(2)))),
            payments[..2].to_vec()
        );
    }

    #[test]
    fn get_with_unbounded_interval_does_not_filter() {
        let (repository, payments) = seeded();
        let filter = PaymentFilter {
            time_interval: Some(TimeInterval::default()),
            ..PaymentFilter::default()
        };

        assert_eq!(repository.get(&filter), payments);
    }

    #[test]
    fn get_with_empty_contract_list_matches_nothing() {
        let (repository, _) = seeded();
        let filter = PaymentFilter {
            contract_ids: Some(Vec::new()),
            ..PaymentFilter::default()
        };

        assert!(repository.get(&filter).is_empty());
    }

    #[test]
    fn get_by_id_finds_single_payment() {
        let (repository, payments) = seeded();
        assert_eq!(repository.get_by_id(&payments[2].id), Ok(payments[2].clone()));
    }

    #[test]
    fn get_by_id_fails_for_unknown_id() {
        let (repository, _) = seeded();
        let err = repository.get_by_id(&PaymentId::from("falseId")).unwrap_err();

        assert_eq!(
            err,
            PaymentError::NotFound {
                id: PaymentId::from("falseId")
            }
        );
        assert_eq!(err.to_string(), "Payment not found: falseId");
    }

    #[test]
    fn update_overlays_fields_and_stamps_updated_at() {
        let (mut repository, payments) = seeded();
        let original = payments[0].clone();

        let updated = repository
            .update(PaymentPatch {
                value: Some(Decimal::new(1234, 0)),
                ..PaymentPatch::new(original.id.clone())
            })
            .unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.value, Decimal::new(1234, 0));
        assert_eq!(updated.contract_id, original.contract_id);
        assert_eq!(updated.description, original.description);
        assert_eq!(updated.time, original.time);
        assert_eq!(updated.created_at, original.created_at);
        assert!(updated.updated_at.unwrap() >= original.created_at);
        assert!(updated.deleted_at.is_none());
        assert_eq!(repository.get_by_id(&original.id), Ok(updated));
    }

    #[test]
    fn update_replaces_in_place() {
        let (mut repository, payments) = seeded();

        let updated = repository
            .update(PaymentPatch {
                contract_id: Some("contract-9".to_string()),
                description: Some("Updated fake description".to_string()),
                time: Some(at(5)),
                ..PaymentPatch::new(payments[1].id.clone())
            })
            .unwrap();

        let all = repository.get(&PaymentFilter::all());
        assert_eq!(all.len(), 3);
        assert_eq!(all[1], updated);
        assert_eq!(all[0], payments[0]);
        assert_eq!(all[2], payments[2]);
    }

    #[test]
    fn successive_updates_never_move_updated_at_backwards() {
        let (mut repository, payments) = seeded();
        let id = payments[0].id.clone();

        let first = repository.update(PaymentPatch::new(id.clone())).unwrap();
        let second = repository.update(PaymentPatch::new(id)).unwrap();

        assert!(second.updated_at >= first.updated_at);
    }

    #[test]
    fn update_of_unknown_id_leaves_store_untouched() {
        let (mut repository, payments) = seeded();

        let result = repository.update(PaymentPatch {
            value: Some(Decimal::ONE),
            ..PaymentPatch::new(PaymentId::from("falseId"))
        });

        assert!(matches!(result, Err(PaymentError::NotFound { .. })));
        assert_eq!(repository.get(&PaymentFilter::all()), payments);
    }

    #[test]
    fn delete_is_soft_and_record_stays_visible() {
        let (mut repository, payments) = seeded();
        let id = payments[0].id.clone();

        let deleted = repository.delete(&id).unwrap();

        assert_eq!(deleted.id, id);
        assert!(deleted.deleted_at.is_some());
        assert!(deleted.updated_at.is_some());
        assert_eq!(deleted.value, payments[0].value);
        assert_eq!(repository.get_by_id(&id), Ok(deleted.clone()));
        assert_eq!(repository.get(&PaymentFilter::all()).len(), 3);
        assert_eq!(
            repository.get(&PaymentFilter::by_contract("contract-1", None))[0],
            deleted
        );
    }

    #[test]
    fn delete_of_unknown_id_fails() {
        let (mut repository, _) = seeded();
        assert!(matches!(
            repository.delete(&PaymentId::from("falseId")),
            Err(PaymentError::NotFound { .. })
        ));
    }

    #[test]
    fn deleted_payment_can_be_restored_with_explicit_patch() {
        let (mut repository, payments) = seeded();
        let id = payments[0].id.clone();
        repository.delete(&id).unwrap();

        let restored = repository
            .update(PaymentPatch {
                deleted_at: Some(None),
                ..PaymentPatch::new(id)
            })
            .unwrap();

        assert!(!restored.is_deleted());
    }

    #[test]
    fn clear_empties_store() {
        let (mut repository, _) = seeded();
        repository.clear();

        assert!(repository.is_empty());
        assert!(repository.get(&PaymentFilter::all()).is_empty());
    }
}
