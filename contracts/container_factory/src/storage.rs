use basket::{
    constants::{PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD},
    error::ErrorCode,
};
use soroban_sdk::{
    contracttype, log, panic_with_error, Address, BytesN, ConversionError, Env, TryFromVal, Val,
    Vec,
};

#[derive(Clone, Copy)]
#[repr(u32)]
pub enum DataKey {
    Config = 1,
    ContainerVec = 2,
    Initialized = 3,
}

impl TryFromVal<Env, DataKey> for Val {
    type Error = ConversionError;

    fn try_from_val(_env: &Env, v: &DataKey) -> Result<Self, Self::Error> {
        Ok((*v as u32).into())
    }
}

/// Registry entry marking an address deployed by this factory
#[derive(Clone)]
#[contracttype]
pub struct ContainerKey {
    pub(crate) container: Address,
}

// ################################################################
//                             Config
// ################################################################

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub admin: Address,
    pub container_wasm_hash: BytesN<32>,
    pub share_token_wasm_hash: BytesN<32>,
    /// Currency every container is denominated in
    pub base_token: Address,
    pub trading: Address,
    /// Price adapter handed to newly created containers
    pub price_oracle: Address,
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
            log!(env, "Factory: Config not set");
            panic_with_error!(env, ErrorCode::NotInitialized)
        });

    env.storage().persistent().extend_ttl(
        &DataKey::Config,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );

    config
}

pub fn get_container_vec(env: &Env) -> Vec<Address> {
    let container_vec = env
        .storage()
        .persistent()
        .get(&DataKey::ContainerVec)
        .unwrap_or_else(|| {
            log!(env, "Factory: get_container_vec: container vector not found");
            panic_with_error!(env, ErrorCode::NotInitialized)
        });

    env.storage().persistent().extend_ttl(
        &DataKey::ContainerVec,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );

    container_vec
}

pub fn save_container_vec(env: &Env, container_vec: Vec<Address>) {
    env.storage()
        .persistent()
        .set(&DataKey::ContainerVec, &container_vec);
    env.storage().persistent().extend_ttl(
        &DataKey::ContainerVec,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

fn register_container(env: &Env, container: &Address) {
    let key = ContainerKey {
        container: container.clone(),
    };
    env.storage().persistent().set(&key, &true);
    env.storage().persistent().extend_ttl(
        &key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

/// Registers `container` and appends it to the ordered list
pub fn add_container(env: &Env, container: &Address) {
    register_container(env, container);

    let mut container_vec = get_container_vec(env);
    container_vec.push_back(container.clone());
    save_container_vec(env, container_vec);
}

pub fn is_registered(env: &Env, container: &Address) -> bool {
    let key = ContainerKey {
        container: container.clone(),
    };
    let registered = env.storage().persistent().get(&key).unwrap_or(false);
    if registered {
        env.storage().persistent().extend_ttl(
            &key,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    }
    registered
}

pub fn is_initialized(e: &Env) -> bool {
    e.storage()
        .persistent()
        .get(&DataKey::Initialized)
        .unwrap_or(false)
}

pub fn set_initialized(e: &Env) {
    e.storage().persistent().set(&DataKey::Initialized, &true);

    e.storage().persistent().extend_ttl(
        &DataKey::Initialized,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}
