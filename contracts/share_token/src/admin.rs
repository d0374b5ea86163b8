use basket::error::ErrorCode;
use soroban_sdk::{log, panic_with_error, Address, Env};

use crate::storage_types::DataKey;

pub fn read_administrator(env: &Env) -> Address {
    let key = DataKey::Admin;
    env.storage().instance().get(&key).unwrap_or_else(|| {
        log!(env, "Share Token: Admin not set");
        panic_with_error!(env, ErrorCode::NotInitialized)
    })
}

pub fn write_administrator(env: &Env, id: &Address) {
    let key = DataKey::Admin;
    env.storage().instance().set(&key, id);
}

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Paused)
        .unwrap_or(false)
}

pub fn write_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
}

pub fn check_not_paused(env: &Env) {
    if is_paused(env) {
        log!(env, "Share Token: token is paused");
        panic_with_error!(env, ErrorCode::OperationPaused);
    }
}
