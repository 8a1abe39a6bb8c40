use alloy_primitives::U256;
use thiserror::Error;

pub const MIN_TICKETS: u8 = 1;
pub const MAX_TICKETS: u8 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntentError {
    #[error("ticket quantity must be between {MIN_TICKETS} and {MAX_TICKETS}, got {0}")]
    OutOfRange(i64),
}

/// Number of tickets to buy in one transaction, always within 1..=10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quantity(u8);

impl Quantity {
    pub fn new(n: i64) -> Result<Self, IntentError> {
        if (MIN_TICKETS as i64..=MAX_TICKETS as i64).contains(&n) {
            Ok(Self(n as u8))
        } else {
            Err(IntentError::OutOfRange(n))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self(MIN_TICKETS)
    }
}

/// What the operator intends to buy. Only the quantity is local state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PurchaseIntent {
    pub quantity: Quantity,
}

impl PurchaseIntent {
    /// Set a new quantity. Out-of-range input keeps the previous value.
    pub fn set_quantity(&mut self, n: i64) -> Result<Quantity, IntentError> {
        let quantity = Quantity::new(n)?;
        self.quantity = quantity;
        Ok(quantity)
    }

    /// Exact total in base units: price × quantity.
    /// None if the product doesn't fit in 256 bits.
    pub fn total_cost(&self, ticket_price: U256) -> Option<U256> {
        ticket_price.checked_mul(U256::from(self.quantity.get()))
    }
}
