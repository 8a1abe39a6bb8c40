use alloy_primitives::U256;
use std::fmt::Write;

use super::countdown::CountdownView;
use super::format;
use crate::config::PRIVATE_KEY_ENV;
use crate::state::{
    BuyBlocked, CountdownState, LotterySnapshot, PurchaseIntent, Toast, ToastKind, MAX_TICKETS,
    MIN_TICKETS,
};

/// Borrowed inputs for one render.
#[derive(Debug, Clone, Copy)]
pub struct PageData<'a> {
    pub snapshot: &'a LotterySnapshot,
    pub countdown: Option<CountdownState>,
    pub intent: &'a PurchaseIntent,
    /// Result of the purchase gate for this instant
    pub buy: Result<U256, BuyBlocked>,
    pub toasts: &'a [Toast],
    pub currency: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonState {
    Enabled,
    Disabled(BuyBlocked),
}

/// Everything the page shows, already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub loading: bool,
    pub pool: String,
    pub remaining: String,
    pub countdown: Option<CountdownView>,
    pub price: String,
    pub quantity: u8,
    pub total: String,
    pub commission: String,
    pub button: ButtonState,
    pub toasts: Vec<(ToastKind, String)>,
}

impl PageView {
    pub fn build(data: PageData<'_>) -> Self {
        let snap = data.snapshot;
        let total = snap
            .ticket_price
            .and_then(|price| data.intent.total_cost(price));

        Self {
            loading: !snap.is_loaded(),
            pool: format::amount(snap.current_pool, data.currency),
            remaining: format::count(snap.remaining_tickets),
            countdown: data.countdown.map(CountdownView::from_state),
            price: format::amount(snap.ticket_price, data.currency),
            quantity: data.intent.quantity.get(),
            total: format::amount(total, data.currency),
            commission: format::amount(snap.ticket_commission, data.currency),
            button: match data.buy {
                Ok(_) => ButtonState::Enabled,
                Err(blocked) => ButtonState::Disabled(blocked),
            },
            toasts: data
                .toasts
                .iter()
                .map(|t| (t.kind, t.message.clone()))
                .collect(),
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        for (kind, message) in &self.toasts {
            let icon = match kind {
                ToastKind::Loading => "…",
                ToastKind::Success => "✔",
                ToastKind::Error => "✖",
            };
            let _ = writeln!(out, "[{icon}] {message}");
        }
        if !self.toasts.is_empty() {
            out.push('\n');
        }

        if self.loading {
            out.push_str("Loading lottery...\n");
            return out;
        }

        let _ = writeln!(out, "=== The Next Draw ===");
        let _ = writeln!(out, "Total Pool:         {}", self.pool);
        let _ = writeln!(out, "Tickets Remaining:  {}", self.remaining);
        out.push('\n');
        match &self.countdown {
            Some(countdown) => out.push_str(&countdown.render()),
            None => out.push_str("Time Remaining\n  -\n"),
        }
        out.push('\n');

        let _ = writeln!(out, "Ticket Price:       {}", self.price);
        let _ = writeln!(out, "TICKETS:            {}", self.quantity);
        let _ = writeln!(out, "Total Cost Of Tickets: {}", self.total);
        let _ = writeln!(out, "Service Fees:       {}", self.commission);
        let _ = writeln!(out, "+ Network Fees:     TBC");
        out.push('\n');

        match &self.button {
            ButtonState::Enabled => out.push_str("[ Buy Tickets ]  (type `buy`)\n"),
            ButtonState::Disabled(blocked) => {
                let _ = writeln!(out, "( Buy Tickets )  disabled: {}", blocked_hint(*blocked));
            }
        }
        let _ = writeln!(
            out,
            "Enter a quantity ({MIN_TICKETS}-{MAX_TICKETS}), `buy`, or `quit`."
        );
        out
    }
}

fn blocked_hint(blocked: BuyBlocked) -> String {
    match blocked {
        BuyBlocked::InFlight => "purchase in progress".to_string(),
        BuyBlocked::NoWallet => format!("connect a wallet ({PRIVATE_KEY_ENV}) to buy tickets"),
        BuyBlocked::SoldOut => "no tickets remaining".to_string(),
        BuyBlocked::SaleClosed => "ticket sales have closed".to_string(),
        BuyBlocked::PriceUnknown => "ticket price not loaded".to_string(),
    }
}
