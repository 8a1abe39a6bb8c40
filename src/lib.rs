pub mod app;
pub mod config;
pub mod contract;
pub mod events;
pub mod feeds;
pub mod present;
pub mod state;
