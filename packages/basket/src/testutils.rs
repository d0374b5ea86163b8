//! Test doubles for the external collaborators of the basket contracts.

pub mod events;
pub mod price_feed;
pub mod swap_router;

pub use events::{count_events, last_event};
pub use price_feed::{MockPriceFeed, MockPriceFeedClient};
pub use swap_router::{MockSwapRouter, MockSwapRouterClient, PRICE_SCALE};
