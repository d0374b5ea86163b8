//! Client-side views of the contracts the basket system calls across
//! contract boundaries. Only the entry points a caller needs are declared.

pub mod container;
pub mod price_feed;
pub mod price_oracle;
pub mod share_token;
pub mod swap_router;
pub mod trading;

pub use container::ContainerClient;
pub use price_feed::PriceFeedClient;
pub use price_oracle::PriceOracleClient;
pub use share_token::ShareTokenClient;
pub use swap_router::SwapRouterClient;
pub use trading::TradingClient;
