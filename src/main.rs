use anyhow::Result;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lottery_rs::app::{App, Control};
use lottery_rs::config::{self, Config};
use lottery_rs::contract::LotteryContract;
use lottery_rs::events::Event;
use lottery_rs::feeds::{clock, operator, snapshot};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let path = std::env::args().nth(1).unwrap_or_else(|| "config.toml".to_string());
    let cfg = Config::load(&path)?;

    // Logs go to stderr so they don't tear up the page on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&cfg.general.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();
    info!(config = ?cfg, "loaded config");

    let private_key = config::private_key();
    let contract = LotteryContract::connect(
        &cfg.contract.rpc_url,
        cfg.contract_address()?,
        private_key.as_deref(),
        cfg.purchase_timeout(),
    )?;
    let session = contract.session();
    let contract = Arc::new(contract);

    // Create the event channel
    let (tx, mut rx) = mpsc::channel::<Event>(100);

    // Start feeds
    snapshot::spawn(Arc::clone(&contract), cfg.refresh_interval(), tx.clone());
    clock::spawn(tx.clone());
    operator::spawn(tx.clone());
    operator::spawn_ctrl_c(tx.clone());

    let mut app = App::new(contract, session, cfg.display.currency.clone(), tx);

    // Main event loop
    while let Some(event) = rx.recv().await {
        let now = chrono::Utc::now().timestamp();
        if app.handle(event, now) == Control::Quit {
            info!("shutting down");
            break;
        }
        print!("{CLEAR_SCREEN}{}", app.view(now).render());
    }

    Ok(())
}
