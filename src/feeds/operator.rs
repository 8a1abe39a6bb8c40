use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::debug;

use crate::events::Event;

/// Turn one line of operator input into an event. Blank lines are ignored.
pub fn parse_line(line: &str) -> Option<Event> {
    let input = line.trim();
    if input.is_empty() {
        return None;
    }

    let event = match input.to_ascii_lowercase().as_str() {
        "buy" | "b" => Event::Buy,
        "quit" | "q" | "exit" => Event::Shutdown,
        other => match other.parse::<i64>() {
            Ok(n) => Event::SetQuantity(n),
            Err(_) => Event::BadInput(input.to_string()),
        },
    };
    Some(event)
}

/// Spawns a task reading commands from stdin. EOF counts as quit.
pub fn spawn(tx: mpsc::Sender<Event>) {
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            let event = match lines.next_line().await {
                Ok(Some(line)) => match parse_line(&line) {
                    Some(event) => event,
                    None => continue,
                },
                Ok(None) => Event::Shutdown,
                Err(e) => {
                    debug!("[operator] stdin error: {}", e);
                    Event::Shutdown
                }
            };

            let quit = event == Event::Shutdown;
            if tx.send(event).await.is_err() || quit {
                break;
            }
        }
    });
}

/// Spawns a task that turns Ctrl+C into a Shutdown event.
pub fn spawn_ctrl_c(tx: mpsc::Sender<Event>) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = tx.send(Event::Shutdown).await;
        }
    });
}
