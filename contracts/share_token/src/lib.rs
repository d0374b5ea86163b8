#![no_std]

mod admin;
mod allowance;
mod balance;
mod contract;
mod metadata;
mod storage_types;


pub use crate::contract::{ShareToken, ShareTokenClient};
