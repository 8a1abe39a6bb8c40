use alloy_primitives::TxHash;

use crate::contract::PurchaseFailure;
use crate::state::LotterySnapshot;

// Everything the page reacts to arrives as one of these, over a single channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    // Fresh read of the contract fields (replaces the previous one wholesale)
    Snapshot(LotterySnapshot),

    // Timer tick (every second)
    Tick,

    // Operator typed a ticket quantity (not yet range-checked)
    SetQuantity(i64),

    // Operator clicked "Buy Tickets"
    Buy,

    // Operator typed something we don't understand
    BadInput(String),

    // The in-flight purchase finished
    PurchaseResolved(Result<TxHash, PurchaseFailure>),

    // Ctrl+C, "quit", or stdin closed
    Shutdown,
}
