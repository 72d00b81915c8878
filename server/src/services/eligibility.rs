//! Decides whether a user may read hotel inventory.
//!
//! Checks run strictly in this order and stop at the first failure:
//!
//! 1. the user has an enrollment,
//! 2. at least one hotel exists,
//! 3. the user has a ticket,
//! 4. the ticket is paid, in-person and includes a hotel stay.
//!
//! The order is observable: a user with a reserved ticket and no hotels in the
//! system gets `NotFound`, not `PaymentRequired`.

use std::sync::Arc;

use tracing::{debug, warn};

use super::GateError;
use crate::repositories::{EnrollmentLookup, HotelReadStore, StoreError, TicketLookup};

#[derive(Clone)]
pub struct EligibilityPipeline {
    enrollments: Arc<dyn EnrollmentLookup>,
    tickets: Arc<dyn TicketLookup>,
    hotels: Arc<dyn HotelReadStore>,
}

impl EligibilityPipeline {
    pub fn new(
        enrollments: Arc<dyn EnrollmentLookup>,
        tickets: Arc<dyn TicketLookup>,
        hotels: Arc<dyn HotelReadStore>,
    ) -> Self {
        Self {
            enrollments,
            tickets,
            hotels,
        }
    }

    pub async fn check_eligibility(&self, user_id: i32) -> Result<(), GateError> {
        self.enrollments
            .get_one_with_address_by_user_id(user_id)
            .await
            .map_err(|e| lookup_failed(user_id, "enrollment", &e))?;

        let has_hotels = self
            .hotels
            .has_hotels()
            .await
            .map_err(|e| lookup_failed(user_id, "inventory", &e))?;
        if !has_hotels {
            debug!(user_id, step = "inventory", "No hotels available");
            return Err(GateError::NotFound);
        }

        let ticket = self
            .tickets
            .get_ticket_by_user_id(user_id)
            .await
            .map_err(|e| lookup_failed(user_id, "ticket", &e))?;

        if !ticket.grants_hotel_access() {
            debug!(
                user_id,
                status = ?ticket.ticket.status,
                is_remote = ticket.ticket_type.is_remote,
                includes_hotel = ticket.ticket_type.includes_hotel,
                "Ticket does not grant hotel access"
            );
            return Err(GateError::PaymentRequired);
        }

        Ok(())
    }
}

fn lookup_failed(user_id: i32, step: &'static str, error: &StoreError) -> GateError {
    match error {
        StoreError::NotFound(_) => debug!(user_id, step, "Eligibility lookup found nothing"),
        StoreError::Database(e) => warn!(user_id, step, error = ?e, "Eligibility lookup failed"),
    }
    GateError::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TicketStatus;
    use crate::test_support::InMemoryStore;

    const USER: i32 = 1;

    fn pipeline(store: &Arc<InMemoryStore>) -> EligibilityPipeline {
        EligibilityPipeline::new(store.clone(), store.clone(), store.clone())
    }

    fn eligible_store() -> Arc<InMemoryStore> {
        let store = InMemoryStore::new();
        store.enroll(USER);
        store.give_ticket(USER, TicketStatus::Paid, false, true);
        store.add_hotel("Hotel 1");
        store.add_hotel("Hotel 2");
        Arc::new(store)
    }

    #[tokio::test]
    async fn test_missing_enrollment_is_not_found_regardless_of_other_state() {
        let store = InMemoryStore::new();
        store.give_ticket(USER, TicketStatus::Paid, false, true);
        store.add_hotel("Hotel 1");
        let store = Arc::new(store);

        assert_eq!(pipeline(&store).check_eligibility(USER).await, Err(GateError::NotFound));
    }

    #[tokio::test]
    async fn test_missing_ticket_is_not_found() {
        let store = InMemoryStore::new();
        store.enroll(USER);
        store.add_hotel("Hotel 1");
        let store = Arc::new(store);

        assert_eq!(pipeline(&store).check_eligibility(USER).await, Err(GateError::NotFound));
    }

    #[tokio::test]
    async fn test_empty_inventory_is_not_found() {
        let store = InMemoryStore::new();
        store.enroll(USER);
        store.give_ticket(USER, TicketStatus::Paid, false, true);
        let store = Arc::new(store);

        assert_eq!(pipeline(&store).check_eligibility(USER).await, Err(GateError::NotFound));
    }

    #[tokio::test]
    async fn test_inventory_is_checked_before_ticket_payment() {
        let store = InMemoryStore::new();
        store.enroll(USER);
        store.give_ticket(USER, TicketStatus::Reserved, false, true);
        let store = Arc::new(store);

        assert_eq!(pipeline(&store).check_eligibility(USER).await, Err(GateError::NotFound));
    }

    #[tokio::test]
    async fn test_reserved_ticket_requires_payment_for_every_ticket_type() {
        for (is_remote, includes_hotel) in [(false, true), (true, true), (false, false), (true, false)] {
            let store = InMemoryStore::new();
            store.enroll(USER);
            store.give_ticket(USER, TicketStatus::Reserved, is_remote, includes_hotel);
            store.add_hotel("Hotel 1");
            let store = Arc::new(store);

            assert_eq!(
                pipeline(&store).check_eligibility(USER).await,
                Err(GateError::PaymentRequired)
            );
        }
    }

    #[tokio::test]
    async fn test_paid_remote_ticket_requires_payment() {
        let store = InMemoryStore::new();
        store.enroll(USER);
        store.give_ticket(USER, TicketStatus::Paid, true, true);
        store.add_hotel("Hotel 1");
        let store = Arc::new(store);

        assert_eq!(
            pipeline(&store).check_eligibility(USER).await,
            Err(GateError::PaymentRequired)
        );
    }

    #[tokio::test]
    async fn test_paid_ticket_without_hotel_requires_payment() {
        let store = InMemoryStore::new();
        store.enroll(USER);
        store.give_ticket(USER, TicketStatus::Paid, false, false);
        store.add_hotel("Hotel 1");
        let store = Arc::new(store);

        assert_eq!(
            pipeline(&store).check_eligibility(USER).await,
            Err(GateError::PaymentRequired)
        );
    }

    #[tokio::test]
    async fn test_paid_in_person_hotel_ticket_is_eligible() {
        let store = eligible_store();

        assert_eq!(pipeline(&store).check_eligibility(USER).await, Ok(()));
    }

    #[tokio::test]
    async fn test_storage_failure_is_reported_as_not_found() {
        let store = eligible_store();
        store.fail_reads(true);

        assert_eq!(pipeline(&store).check_eligibility(USER).await, Err(GateError::NotFound));
    }

    #[tokio::test]
    async fn test_eligibility_is_per_user() {
        let store = eligible_store();

        assert_eq!(pipeline(&store).check_eligibility(USER + 1).await, Err(GateError::NotFound));
        assert_eq!(pipeline(&store).check_eligibility(USER).await, Ok(()));
    }
}
