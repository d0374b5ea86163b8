use soroban_sdk::{contracttype, log, Env, String};

use crate::{
    constants::{MAX_MIN_DEPOSIT_USD, MAX_PERCENTAGE},
    error::{BasketResult, ErrorCode},
    validate,
};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContainerParams {
    // Share token
    pub share_name: String,
    pub share_symbol: String,
    /// Shares minted to the manager against the initial deposit
    pub initial_share_supply: i128,
    // Container
    pub entry_fee_pct: u32,
    pub exit_fee_pct: u32,
    /// Smallest accepted deposit, in whole US dollars
    pub min_deposit_usd: i128,
}

impl ContainerParams {
    pub fn validate(&self, env: &Env) -> BasketResult {
        validate!(
            env,
            self.initial_share_supply > 0,
            ErrorCode::InvalidShareSupply,
            "Initial share supply must be positive"
        )?;
        validate!(
            env,
            self.entry_fee_pct < MAX_PERCENTAGE && self.exit_fee_pct < MAX_PERCENTAGE,
            ErrorCode::InvalidFee,
            "Fees must be below 100 percent"
        )?;
        validate_min_deposit_usd(env, self.min_deposit_usd)
    }
}

pub fn validate_min_deposit_usd(env: &Env, min_deposit_usd: i128) -> BasketResult {
    validate!(
        env,
        min_deposit_usd > 0 && min_deposit_usd <= MAX_MIN_DEPOSIT_USD,
        ErrorCode::InvalidMinimumDeposit,
        "Minimum deposit of {} USD is out of range",
        min_deposit_usd
    )
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OperationalState {
    Active,
    Paused,
    Closed,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ContainerRole {
    Admin,
    Manager,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WithdrawalStatus {
    Idle,
    /// Base currency owed to the holder, ready to be withdrawn
    Pending(i128),
}

impl WithdrawalStatus {
    pub fn amount(&self) -> i128 {
        match self {
            WithdrawalStatus::Idle => 0,
            WithdrawalStatus::Pending(amount) => *amount,
        }
    }
}
