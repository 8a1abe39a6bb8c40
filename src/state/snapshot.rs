use alloy_primitives::U256;

/// Latest copy of the contract's public fields.
/// Every field is `None` until it has been read at least once.
/// Replaced wholesale on each refresh, never patched field by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LotterySnapshot {
    /// Tickets still for sale in this draw
    pub remaining_tickets: Option<u64>,
    /// Current prize pool in base units (wei)
    pub current_pool: Option<U256>,
    /// Price of one ticket in base units
    pub ticket_price: Option<U256>,
    /// Flat commission in base units
    pub ticket_commission: Option<U256>,
    /// Sale closes at this unix timestamp (seconds)
    pub expiration: Option<i64>,
}

impl LotterySnapshot {
    /// True once any field has arrived.
    pub fn is_loaded(&self) -> bool {
        self.remaining_tickets.is_some()
            || self.current_pool.is_some()
            || self.ticket_price.is_some()
            || self.ticket_commission.is_some()
            || self.expiration.is_some()
    }

    /// Sale still open at `now_secs`. Unknown expiration counts as closed.
    pub fn sale_open(&self, now_secs: i64) -> bool {
        self.expiration.is_some_and(|exp| exp > now_secs)
    }

    /// Tickets left to buy. Unknown count counts as sold out.
    pub fn tickets_available(&self) -> bool {
        self.remaining_tickets.is_some_and(|n| n > 0)
    }
}
