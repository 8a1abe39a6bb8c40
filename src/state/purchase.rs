use alloy_primitives::{TxHash, U256};

use super::notification::ToastId;
use super::snapshot::LotterySnapshot;
use crate::contract::{PurchaseFailure, Session};

/// Why the buy button is not clickable right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuyBlocked {
    /// A purchase is already in flight
    InFlight,
    NoWallet,
    /// No tickets left, or the count hasn't loaded
    SoldOut,
    /// Expiration passed, or hasn't loaded
    SaleClosed,
    /// Ticket price hasn't loaded
    PriceUnknown,
}

/// Evaluate the buy preconditions at `now_secs`.
/// Returns the ticket price when the button is enabled.
pub fn check_purchase(
    snapshot: &LotterySnapshot,
    session: &Session,
    flow: &PurchaseFlow,
    now_secs: i64,
) -> Result<U256, BuyBlocked> {
    if flow.in_flight() {
        return Err(BuyBlocked::InFlight);
    }
    if !snapshot.tickets_available() {
        return Err(BuyBlocked::SoldOut);
    }
    if !snapshot.sale_open(now_secs) {
        return Err(BuyBlocked::SaleClosed);
    }
    if !session.is_connected() {
        return Err(BuyBlocked::NoWallet);
    }
    snapshot.ticket_price.ok_or(BuyBlocked::PriceUnknown)
}

/// Lifecycle of the buy-tickets action.
///
/// `Idle → Pending → Succeeded | Failed`, and a fresh click from any
/// resting state starts a new `Pending`. Only one purchase is ever in flight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PurchaseState {
    #[default]
    Idle,
    Pending {
        /// Toast to resolve when the call returns
        toast: ToastId,
    },
    Succeeded {
        tx_hash: TxHash,
    },
    Failed {
        reason: PurchaseFailure,
    },
}

#[derive(Debug, Default)]
pub struct PurchaseFlow {
    state: PurchaseState,
}

impl PurchaseFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PurchaseState {
        &self.state
    }

    pub fn in_flight(&self) -> bool {
        matches!(self.state, PurchaseState::Pending { .. })
    }

    /// Enter `Pending`. Returns false (and changes nothing) if a purchase
    /// is already in flight.
    pub fn begin(&mut self, toast: ToastId) -> bool {
        if self.in_flight() {
            return false;
        }
        self.state = PurchaseState::Pending { toast };
        true
    }

    /// Settle the in-flight purchase. Returns the pending toast to replace,
    /// or None if nothing was in flight.
    pub fn resolve(&mut self, outcome: Result<TxHash, PurchaseFailure>) -> Option<ToastId> {
        let PurchaseState::Pending { toast } = self.state else {
            return None;
        };
        self.state = match outcome {
            Ok(tx_hash) => PurchaseState::Succeeded { tx_hash },
            Err(reason) => PurchaseState::Failed { reason },
        };
        Some(toast)
    }
}
