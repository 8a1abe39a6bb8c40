use anyhow::Result;
use chrono::{TimeZone, Utc};
use std::time::Instant;

use lottery_rs::config::Config;
use lottery_rs::contract::{ContractDataSource, LotteryContract};
use lottery_rs::present::format;
use lottery_rs::state::CountdownState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let path = std::env::args().nth(1).unwrap_or_else(|| "config.toml".to_string());
    let cfg = Config::load(&path)?;
    let currency = cfg.display.currency.as_str();

    // Read-only: never needs a key
    let contract = LotteryContract::connect(
        &cfg.contract.rpc_url,
        cfg.contract_address()?,
        None,
        cfg.purchase_timeout(),
    )?;
    println!("Contract: {}", contract.address());

    let start = Instant::now();
    let snap = contract.snapshot().await;
    println!("Read in {}ms\n", start.elapsed().as_millis());

    let raw = |v: Option<alloy_primitives::U256>| v.map_or("-".to_string(), |v| v.to_string());
    println!("RemainingTickets:     {}", format::count(snap.remaining_tickets));
    println!(
        "CurrentWinningReward: {} ({} wei)",
        format::amount(snap.current_pool, currency),
        raw(snap.current_pool)
    );
    println!(
        "ticketPrice:          {} ({} wei)",
        format::amount(snap.ticket_price, currency),
        raw(snap.ticket_price)
    );
    println!(
        "ticketCommission:     {} ({} wei)",
        format::amount(snap.ticket_commission, currency),
        raw(snap.ticket_commission)
    );

    match snap.expiration {
        Some(exp) => {
            let closes = Utc
                .timestamp_opt(exp, 0)
                .single()
                .map_or_else(|| "out of range".to_string(), |t| t.to_rfc3339());
            let left = CountdownState::compute(exp, Utc::now().timestamp());
            println!("expiration:           {} ({})", exp, closes);
            if left.completed {
                println!("Ticket sales have closed for this draw");
            } else {
                println!(
                    "Time remaining:       {}h {}m {}s",
                    left.hours, left.minutes, left.seconds
                );
            }
        }
        None => println!("expiration:           -"),
    }

    Ok(())
}
