mod lottery;

pub use lottery::LotteryContract;

use alloy_primitives::{Address, TxHash, U256};
use std::future::Future;
use thiserror::Error;
use tracing::{debug, warn};

use crate::state::LotterySnapshot;

/// Public fields the page reads from the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractField {
    RemainingTickets,
    CurrentWinningReward,
    TicketPrice,
    TicketCommission,
    Expiration,
}

impl ContractField {
    pub const ALL: [ContractField; 5] = [
        Self::RemainingTickets,
        Self::CurrentWinningReward,
        Self::TicketPrice,
        Self::TicketCommission,
        Self::Expiration,
    ];

    /// Getter name on the contract.
    pub fn name(&self) -> &'static str {
        match self {
            Self::RemainingTickets => "RemainingTickets",
            Self::CurrentWinningReward => "CurrentWinningReward",
            Self::TicketPrice => "ticketPrice",
            Self::TicketCommission => "ticketCommission",
            Self::Expiration => "expiration",
        }
    }
}

#[derive(Debug, Error)]
pub enum ContractError {
    #[error("reading {field}: {message}")]
    Read { field: &'static str, message: String },

    #[error("{field} = {value} does not fit")]
    OutOfRange { field: &'static str, value: U256 },
}

/// Why a purchase didn't go through.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PurchaseFailure {
    #[error("insufficient funds")]
    InsufficientFunds,

    #[error("signing was declined")]
    SigningDeclined,

    #[error("rejected by the contract: {0}")]
    Rejected(String),

    #[error("timed out waiting for the transaction")]
    Timeout,

    #[error("network error: {0}")]
    Network(String),

    #[error("no wallet connected")]
    NoWallet,
}

impl PurchaseFailure {
    /// Classify a provider/contract error message.
    pub fn from_message(message: &str) -> Self {
        let lower = message.to_ascii_lowercase();
        if lower.contains("insufficient funds") {
            Self::InsufficientFunds
        } else if lower.contains("user rejected")
            || lower.contains("user denied")
            || lower.contains("declined")
        {
            Self::SigningDeclined
        } else if lower.contains("revert") || lower.contains("execution reverted") {
            Self::Rejected(message.to_string())
        } else {
            Self::Network(message.to_string())
        }
    }
}

/// Who is buying. `account` is None in read-only mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    pub account: Option<Address>,
}

impl Session {
    pub fn read_only() -> Self {
        Self { account: None }
    }

    pub fn with_account(account: Address) -> Self {
        Self {
            account: Some(account),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.account.is_some()
    }
}

/// Source of contract state and the one mutating call.
pub trait ContractDataSource: Send + Sync + 'static {
    /// Read one field as raw base units.
    fn read(&self, field: ContractField) -> impl Future<Output = Result<U256, ContractError>> + Send;

    /// Submit `BuyTickets` carrying `value` base units. Resolves once the
    /// transaction is mined (or fails).
    fn buy_tickets(&self, value: U256) -> impl Future<Output = Result<TxHash, PurchaseFailure>> + Send;

    /// Read all fields concurrently. A failed read leaves that field absent.
    fn snapshot(&self) -> impl Future<Output = LotterySnapshot> + Send {
        async move {
            let (remaining, pool, price, commission, expiration) = tokio::join!(
                self.read(ContractField::RemainingTickets),
                self.read(ContractField::CurrentWinningReward),
                self.read(ContractField::TicketPrice),
                self.read(ContractField::TicketCommission),
                self.read(ContractField::Expiration),
            );

            let snapshot = LotterySnapshot {
                remaining_tickets: narrow(ContractField::RemainingTickets, remaining),
                current_pool: present(pool),
                ticket_price: present(price),
                ticket_commission: present(commission),
                expiration: narrow(ContractField::Expiration, expiration),
            };
            debug!(?snapshot, "snapshot refreshed");
            snapshot
        }
    }
}

fn present(result: Result<U256, ContractError>) -> Option<U256> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(error = %e, "field unavailable");
            None
        }
    }
}

/// Fit a raw value into a smaller integer; anything that doesn't fit is treated as absent.
fn narrow<T: TryFrom<U256>>(field: ContractField, result: Result<U256, ContractError>) -> Option<T> {
    let value = present(result)?;
    match T::try_from(value) {
        Ok(v) => Some(v),
        Err(_) => {
            let e = ContractError::OutOfRange {
                field: field.name(),
                value,
            };
            warn!(error = %e, "field unavailable");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FixedSource {
        fields: HashMap<ContractField, U256>,
    }

    impl ContractDataSource for FixedSource {
        async fn read(&self, field: ContractField) -> Result<U256, ContractError> {
            self.fields.get(&field).copied().ok_or(ContractError::Read {
                field: field.name(),
                message: "not deployed".to_string(),
            })
        }

        async fn buy_tickets(&self, _value: U256) -> Result<TxHash, PurchaseFailure> {
            Err(PurchaseFailure::NoWallet)
        }
    }

    #[tokio::test]
    async fn test_snapshot_all_fields() {
        let fields = HashMap::from([
            (ContractField::RemainingTickets, U256::from(42u64)),
            (ContractField::CurrentWinningReward, U256::from(9_000u64)),
            (ContractField::TicketPrice, U256::from(100u64)),
            (ContractField::TicketCommission, U256::from(3u64)),
            (ContractField::Expiration, U256::from(1_700_000_000u64)),
        ]);
        let snap = FixedSource { fields }.snapshot().await;

        assert_eq!(snap.remaining_tickets, Some(42));
        assert_eq!(snap.current_pool, Some(U256::from(9_000u64)));
        assert_eq!(snap.ticket_price, Some(U256::from(100u64)));
        assert_eq!(snap.ticket_commission, Some(U256::from(3u64)));
        assert_eq!(snap.expiration, Some(1_700_000_000));
    }

    #[tokio::test]
    async fn test_snapshot_missing_and_oversized_fields() {
        let fields = HashMap::from([
            (ContractField::TicketPrice, U256::from(100u64)),
            (ContractField::Expiration, U256::MAX),
        ]);
        let snap = FixedSource { fields }.snapshot().await;

        assert_eq!(snap.ticket_price, Some(U256::from(100u64)));
        assert_eq!(snap.remaining_tickets, None);
        assert_eq!(snap.current_pool, None);
        // Doesn't fit in i64: treated as not loaded
        assert_eq!(snap.expiration, None);
    }

    #[test]
    fn test_field_names() {
        let names: Vec<_> = ContractField::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(
            names,
            vec![
                "RemainingTickets",
                "CurrentWinningReward",
                "ticketPrice",
                "ticketCommission",
                "expiration"
            ]
        );
    }

    #[test]
    fn test_classify_failures() {
        assert_eq!(
            PurchaseFailure::from_message("insufficient funds for gas * price + value"),
            PurchaseFailure::InsufficientFunds
        );
        assert_eq!(
            PurchaseFailure::from_message("User rejected the request."),
            PurchaseFailure::SigningDeclined
        );
        assert!(matches!(
            PurchaseFailure::from_message("execution reverted: sold out"),
            PurchaseFailure::Rejected(_)
        ));
        assert!(matches!(
            PurchaseFailure::from_message("connection refused"),
            PurchaseFailure::Network(_)
        ));
    }

    #[test]
    fn test_session() {
        assert!(!Session::read_only().is_connected());
        assert!(Session::with_account(Address::ZERO).is_connected());
    }
}
