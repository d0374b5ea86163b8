#![no_std]

mod container;
mod contract;
mod events;
mod storage;
mod utils;


pub use crate::contract::{Container, ContainerClient};
pub use crate::storage::Config;
