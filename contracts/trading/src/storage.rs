use basket::{
    constants::{
        BALANCE_BUMP_AMOUNT, BALANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
        PERSISTENT_LIFETIME_THRESHOLD,
    },
    error::ErrorCode,
    math::safe_math::SafeMath,
    ok_or_panic,
    types::{OperationalState, TradingRole},
};
use soroban_sdk::{contracttype, log, panic_with_error, Address, Env, Vec};

#[derive(Clone)]
#[contracttype]
pub struct BalanceKey {
    pub asset: Address,
    pub owner: Address,
}

#[derive(Clone)]
#[contracttype]
pub struct RoleKey {
    pub role: TradingRole,
    pub account: Address,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    Initialized,
    State,
    Balance(BalanceKey),
    AssetsOwned(Address),
    Role(RoleKey),
}

// ################################################################
//                             Config
// ################################################################

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub admin: Address,
    /// Currency every basket asset is bought with and sold into
    pub base_token: Address,
    pub router: Address,
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
            log!(env, "Trading: Config not set");
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

// ################################################################
//                             Roles
// ################################################################

pub fn has_role(env: &Env, role: TradingRole, account: &Address) -> bool {
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

pub fn save_role(env: &Env, role: TradingRole, account: &Address) {
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

pub fn remove_role(env: &Env, role: TradingRole, account: &Address) {
    env.storage().persistent().remove(&DataKey::Role(RoleKey {
        role,
        account: account.clone(),
    }));
}

// ################################################################
//                             Ledger
// ################################################################

pub fn get_balance(env: &Env, asset: &Address, owner: &Address) -> i128 {
    let key = DataKey::Balance(BalanceKey {
        asset: asset.clone(),
        owner: owner.clone(),
    });
    if let Some(balance) = env.storage().persistent().get::<DataKey, i128>(&key) {
        env.storage().persistent().extend_ttl(
            &key,
            BALANCE_LIFETIME_THRESHOLD,
            BALANCE_BUMP_AMOUNT,
        );
        balance
    } else {
        0
    }
}

fn save_balance(env: &Env, asset: &Address, owner: &Address, amount: i128) {
    let key = DataKey::Balance(BalanceKey {
        asset: asset.clone(),
        owner: owner.clone(),
    });
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

pub fn credit_balance(env: &Env, asset: &Address, owner: &Address, amount: i128) {
    let balance = ok_or_panic!(env, get_balance(env, asset, owner).safe_add(amount, env));
    save_balance(env, asset, owner, balance);

    let mut assets = get_assets_owned(env, owner);
    if balance > 0 && !assets.contains(asset) {
        assets.push_back(asset.clone());
        save_assets_owned(env, owner, &assets);
    }
}

pub fn debit_balance(env: &Env, asset: &Address, owner: &Address, amount: i128) {
    let balance = get_balance(env, asset, owner);
    if balance < amount {
        log!(env, "Trading: amount > asset balance");
        panic_with_error!(env, ErrorCode::AmountExceedsBalance);
    }
    let remaining = balance - amount;
    save_balance(env, asset, owner, remaining);

    if remaining == 0 {
        let mut assets = get_assets_owned(env, owner);
        if let Some(index) = assets.first_index_of(asset) {
            assets.remove(index);
            save_assets_owned(env, owner, &assets);
        }
    }
}

/// Assets `owner` currently holds a balance of, in acquisition order
pub fn get_assets_owned(env: &Env, owner: &Address) -> Vec<Address> {
    let key = DataKey::AssetsOwned(owner.clone());
    match env.storage().persistent().get::<DataKey, Vec<Address>>(&key) {
        Some(assets) => {
            env.storage().persistent().extend_ttl(
                &key,
                PERSISTENT_LIFETIME_THRESHOLD,
                PERSISTENT_BUMP_AMOUNT,
            );
            assets
        }
        None => Vec::new(env),
    }
}

fn save_assets_owned(env: &Env, owner: &Address, assets: &Vec<Address>) {
    let key = DataKey::AssetsOwned(owner.clone());
    env.storage().persistent().set(&key, assets);
    env.storage().persistent().extend_ttl(
        &key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}
