pub mod basket;
pub mod container;
pub mod oracle;
pub mod trading;

pub use basket::{AssetAllocation, AssetBalance};
pub use container::{
    validate_min_deposit_usd, ContainerParams, ContainerRole, OperationalState, WithdrawalStatus,
};
pub use oracle::{Asset, PriceData};
pub use trading::TradingRole;
