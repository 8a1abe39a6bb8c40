mod countdown;
mod intent;
mod notification;
mod purchase;
mod snapshot;

pub use countdown::{Countdown, CountdownState};
pub use intent::{IntentError, PurchaseIntent, Quantity, MAX_TICKETS, MIN_TICKETS};
pub use notification::{Notifier, Toast, ToastId, ToastKind};
pub use purchase::{check_purchase, BuyBlocked, PurchaseFlow, PurchaseState};
pub use snapshot::LotterySnapshot;
