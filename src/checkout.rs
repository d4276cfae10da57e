//! Checkout submission stub.
//!
//! There is no order backend yet: submission simulates the round-trip with a
//! short delay, logs the order, and clears the cart on success.

use std::time::Duration;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::cart::CartStore;

/// Simulated round-trip latency of the order submission.
const SUBMIT_DELAY: Duration = Duration::from_millis(800);

/// Contact details captured by the checkout form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactDetails {
    /// Customer name.
    pub name: String,

    /// Customer email.
    pub email: String,

    /// Customer phone, optional on the form.
    pub phone: Option<String>,
}

/// Confirmation of a submitted order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderConfirmation {
    /// Number of cart lines submitted.
    pub lines: usize,

    /// Total units submitted.
    pub total_items: u64,

    /// Total order amount.
    pub total_amount: Decimal,
}

/// Submit the cart contents as an order and clear the cart on success.
pub async fn submit_order(store: &mut CartStore, contact: &ContactDetails) -> OrderConfirmation {
    tokio::time::sleep(SUBMIT_DELAY).await;

    let confirmation = OrderConfirmation {
        lines: store.items().len(),
        total_items: store.total_items(),
        total_amount: store.total_amount(),
    };

    tracing::info!(
        name = %contact.name,
        email = %contact.email,
        lines = confirmation.lines,
        total_items = confirmation.total_items,
        total_amount = %confirmation.total_amount,
        "order submitted"
    );

    store.clear();

    confirmation
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::cart::AddToCart;
    use crate::storage::MemoryCartStorage;

    use super::*;

    fn contact() -> ContactDetails {
        ContactDetails {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: None,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn submission_clears_the_cart() -> TestResult {
        let mut store = CartStore::open(Box::new(MemoryCartStorage::new()))?;

        store.add(AddToCart::new(1, "Hoodie", Decimal::from(100)), 2);

        let confirmation = submit_order(&mut store, &contact()).await;

        assert_eq!(confirmation.lines, 1);
        assert_eq!(confirmation.total_items, 2);
        assert_eq!(confirmation.total_amount, Decimal::from(200));
        assert!(store.items().is_empty());

        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn empty_cart_submission_reports_zero_lines() -> TestResult {
        let mut store = CartStore::open(Box::new(MemoryCartStorage::new()))?;

        let confirmation = submit_order(&mut store, &contact()).await;

        assert_eq!(confirmation.lines, 0);
        assert_eq!(confirmation.total_amount, Decimal::ZERO);

        Ok(())
    }
}
