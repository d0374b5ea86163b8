#![no_std]

mod contract;
mod events;
mod rebalance;
mod storage;
mod swap;
mod trading;


pub use crate::contract::{Trading, TradingClient};
pub use crate::storage::Config;
