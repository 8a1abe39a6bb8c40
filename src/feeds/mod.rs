pub mod clock;
pub mod operator;
pub mod snapshot;
