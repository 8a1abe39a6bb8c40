use alloy_primitives::TxHash;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::contract::{ContractDataSource, PurchaseFailure, Session};
use crate::events::Event;
use crate::present::{PageData, PageView};
use crate::state::{
    check_purchase, BuyBlocked, Countdown, LotterySnapshot, Notifier, PurchaseFlow, PurchaseIntent,
};

const PENDING_MESSAGE: &str = "Buying your tickets ...";
const SUCCESS_MESSAGE: &str = "Tickets purchased successfully!";
const FAILURE_MESSAGE: &str = "Something went wrong!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// The lottery page: owns all UI state and reacts to one event at a time.
pub struct App<S> {
    source: Arc<S>,
    session: Session,
    currency: String,
    snapshot: LotterySnapshot,
    countdown: Countdown,
    intent: PurchaseIntent,
    flow: PurchaseFlow,
    notifier: Notifier,
    /// Handed to purchase tasks so their outcome comes back as an event
    tx: mpsc::Sender<Event>,
}

impl<S: ContractDataSource> App<S> {
    pub fn new(
        source: Arc<S>,
        session: Session,
        currency: impl Into<String>,
        tx: mpsc::Sender<Event>,
    ) -> Self {
        Self {
            source,
            session,
            currency: currency.into(),
            snapshot: LotterySnapshot::default(),
            countdown: Countdown::new(),
            intent: PurchaseIntent::default(),
            flow: PurchaseFlow::new(),
            notifier: Notifier::new(),
            tx,
        }
    }

    /// Apply one event. `now` is wall-clock unix seconds.
    pub fn handle(&mut self, event: Event, now: i64) -> Control {
        match event {
            Event::Snapshot(snapshot) => {
                self.snapshot = snapshot;
                self.countdown.tick(self.snapshot.expiration, now);
            }
            Event::Tick => {
                self.countdown.tick(self.snapshot.expiration, now);
                self.notifier.prune();
            }
            Event::SetQuantity(n) => {
                if let Err(e) = self.intent.set_quantity(n) {
                    self.notifier.alert(e.to_string());
                }
            }
            Event::Buy => self.click_buy(now),
            Event::BadInput(input) => {
                self.notifier.alert(format!("Unknown command: {input}"));
            }
            Event::PurchaseResolved(outcome) => self.settle(outcome),
            Event::Shutdown => return Control::Quit,
        }
        Control::Continue
    }

    fn click_buy(&mut self, now: i64) {
        let price = match check_purchase(&self.snapshot, &self.session, &self.flow, now) {
            Ok(price) => price,
            Err(BuyBlocked::NoWallet) => {
                self.notifier
                    .alert(format!("{FAILURE_MESSAGE} ({})", PurchaseFailure::NoWallet));
                return;
            }
            // Button is disabled: the click does nothing
            Err(blocked) => {
                debug!(?blocked, "buy ignored");
                return;
            }
        };

        let Some(value) = self.intent.total_cost(price) else {
            warn!(%price, quantity = self.intent.quantity.get(), "total cost overflows");
            return;
        };

        let toast = self.notifier.loading(PENDING_MESSAGE);
        if !self.flow.begin(toast) {
            return;
        }
        info!(%value, quantity = self.intent.quantity.get(), "buying tickets");

        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let outcome = source.buy_tickets(value).await;
            let _ = tx.send(Event::PurchaseResolved(outcome)).await;
        });
    }

    fn settle(&mut self, outcome: Result<TxHash, PurchaseFailure>) {
        let Some(toast) = self.flow.resolve(outcome.clone()) else {
            debug!("purchase outcome with nothing in flight");
            return;
        };

        match outcome {
            Ok(tx_hash) => {
                info!(%tx_hash, "tickets purchased");
                self.notifier.success(toast, SUCCESS_MESSAGE);
            }
            Err(reason) => {
                warn!(%reason, "purchase failed");
                self.notifier.error(toast, format!("{FAILURE_MESSAGE} ({reason})"));
            }
        }
    }

    pub fn view(&self, now: i64) -> PageView {
        PageView::build(PageData {
            snapshot: &self.snapshot,
            countdown: self.countdown.current(),
            intent: &self.intent,
            buy: check_purchase(&self.snapshot, &self.session, &self.flow, now),
            toasts: self.notifier.toasts(),
            currency: &self.currency,
        })
    }

    pub fn snapshot(&self) -> &LotterySnapshot {
        &self.snapshot
    }

    pub fn flow(&self) -> &PurchaseFlow {
        &self.flow
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn intent(&self) -> &PurchaseIntent {
        &self.intent
    }
}
