use std::fmt::Write;

use crate::state::CountdownState;

const OPEN_HEADING: &str = "Time Remaining";
const CLOSED_HEADING: &str = "Ticket sales have now closed for this draw";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownStyle {
    Neutral,
    /// Sales closed: draw attention
    Alert,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownView {
    pub heading: &'static str,
    pub style: CountdownStyle,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl CountdownView {
    pub fn from_state(state: CountdownState) -> Self {
        let (heading, style) = if state.completed {
            (CLOSED_HEADING, CountdownStyle::Alert)
        } else {
            (OPEN_HEADING, CountdownStyle::Neutral)
        };
        Self {
            heading,
            style,
            hours: state.hours,
            minutes: state.minutes,
            seconds: state.seconds,
        }
    }

    pub fn render(&self) -> String {
        let (on, off) = match self.style {
            CountdownStyle::Neutral => ("", ""),
            // bold red, blinking
            CountdownStyle::Alert => ("\x1b[1;5;31m", "\x1b[0m"),
        };

        let mut out = String::new();
        let _ = writeln!(out, "{on}{}{off}", self.heading);
        let _ = writeln!(
            out,
            "  {on}{:>4}{off} hours  {on}{:>2}{off} minutes  {on}{:>2}{off} seconds",
            self.hours, self.minutes, self.seconds
        );
        out
    }
}
