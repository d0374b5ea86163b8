use basket::{
    constants::{
        BALANCE_BUMP_AMOUNT, BALANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
        PERSISTENT_LIFETIME_THRESHOLD,
    },
    error::ErrorCode,
    types::{AssetAllocation, ContainerRole, OperationalState, WithdrawalStatus},
};
use soroban_sdk::{contracttype, log, panic_with_error, Address, Env, Vec};

#[derive(Clone)]
#[contracttype]
pub struct RoleKey {
    pub role: ContainerRole,
    pub account: Address,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    Initialized,
    State,
    Basket,
    Role(RoleKey),
    Whitelist(Address),
    Withdrawal(Address),
    TotalPending,
    ReservedBalance,
}

// ################################################################
//                             Config
// ################################################################

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub factory: Address,
    pub admin: Address,
    pub manager: Address,
    pub base_token: Address,
    pub share_token: Address,
    pub trading: Address,
    pub price_oracle: Address,
    pub entry_fee_pct: u32,
    pub exit_fee_pct: u32,
    /// Whole US dollars
    pub min_deposit_usd: i128,
    /// Base currency per share at creation, scaled by `RATE_PRECISION`
    pub creation_rate: i128,
}

/// Full record returned by `query_container`
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContainerInfo {
    pub config: Config,
    pub basket: Vec<AssetAllocation>,
    pub state: OperationalState,
    pub total_pending: i128,
    pub reserved_balance: i128,
}

pub fn save_config(env: &Env, config: Config) {
    env.storage().persistent().set(&DataKey::Config, &config);
    env.storage().persistent().extend_ttl(
        &DataKey::Config,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_config(env: &Env) -> Config {
    let config = env
        .storage()
        .persistent()
        .get(&DataKey::Config)
        .unwrap_or_else(|| {
            log!(env, "Container: Config not set");
            panic_with_error!(env, ErrorCode::NotInitialized)
        });

    env.storage().persistent().extend_ttl(
        &DataKey::Config,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );

    config
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Initialized)
        .unwrap_or(false)
}

pub fn set_initialized(env: &Env) {
    env.storage().persistent().set(&DataKey::Initialized, &true);

    env.storage().persistent().extend_ttl(
        &DataKey::Initialized,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

// ################################################################
//                             State
// ################################################################

pub fn get_state(env: &Env) -> OperationalState {
    env.storage()
        .instance()
        .get(&DataKey::State)
        .unwrap_or(OperationalState::Active)
}

pub fn save_state(env: &Env, state: OperationalState) {
    env.storage().instance().set(&DataKey::State, &state);
}

pub fn get_basket(env: &Env) -> Vec<AssetAllocation> {
    let basket = env
        .storage()
        .persistent()
        .get(&DataKey::Basket)
        .unwrap_or(Vec::new(env));

    if env.storage().persistent().has(&DataKey::Basket) {
        env.storage().persistent().extend_ttl(
            &DataKey::Basket,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    }

    basket
}

pub fn save_basket(env: &Env, basket: &Vec<AssetAllocation>) {
    env.storage().persistent().set(&DataKey::Basket, basket);
    env.storage().persistent().extend_ttl(
        &DataKey::Basket,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

// ################################################################
//                             Access
// ################################################################

pub fn has_role(env: &Env, role: ContainerRole, account: &Address) -> bool {
    let key = DataKey::Role(RoleKey {
        role,
        account: account.clone(),
    });
    let granted = env.storage().persistent().get(&key).unwrap_or(false);
    if granted {
        env.storage().persistent().extend_ttl(
            &key,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    }
    granted
}

pub fn save_role(env: &Env, role: ContainerRole, account: &Address) {
    let key = DataKey::Role(RoleKey {
        role,
        account: account.clone(),
    });
    env.storage().persistent().set(&key, &true);
    env.storage().persistent().extend_ttl(
        &key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn is_whitelisted(env: &Env, account: &Address) -> bool {
    let key = DataKey::Whitelist(account.clone());
    let whitelisted = env.storage().persistent().get(&key).unwrap_or(false);
    if whitelisted {
        env.storage().persistent().extend_ttl(
            &key,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    }
    whitelisted
}

pub fn save_whitelisted(env: &Env, account: &Address, whitelisted: bool) {
    let key = DataKey::Whitelist(account.clone());
    if whitelisted {
        env.storage().persistent().set(&key, &true);
        env.storage().persistent().extend_ttl(
            &key,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    } else {
        env.storage().persistent().remove(&key);
    }
}

// ################################################################
//                             Withdrawals
// ################################################################

pub fn get_withdrawal(env: &Env, holder: &Address) -> WithdrawalStatus {
    let key = DataKey::Withdrawal(holder.clone());
    match env.storage().persistent().get::<DataKey, WithdrawalStatus>(&key) {
        Some(status) => {
            env.storage().persistent().extend_ttl(
                &key,
                BALANCE_LIFETIME_THRESHOLD,
                BALANCE_BUMP_AMOUNT,
            );
            status
        }
        None => WithdrawalStatus::Idle,
    }
}

pub fn save_withdrawal(env: &Env, holder: &Address, status: WithdrawalStatus) {
    let key = DataKey::Withdrawal(holder.clone());
    env.storage().persistent().set(&key, &status);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

pub fn get_total_pending(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalPending)
        .unwrap_or(0)
}

pub fn save_total_pending(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::TotalPending, &amount);
}

/// Base currency held for holders after the container was closed
pub fn get_reserved_balance(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::ReservedBalance)
        .unwrap_or(0)
}

pub fn save_reserved_balance(env: &Env, amount: i128) {
    env.storage()
        .instance()
        .set(&DataKey::ReservedBalance, &amount);
}
