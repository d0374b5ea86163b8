use soroban_sdk::{xdr::ToXdr, Address, Bytes, BytesN, Env, String};

/// Salt of the `index`-th container. Every deployment lands on a fresh
/// address since the index only grows.
pub fn container_salt(env: &Env, index: u32) -> BytesN<32> {
    let mut salt = Bytes::new(env);
    salt.append(&Bytes::from_slice(env, b"container"));
    salt.append(&index.to_xdr(env));
    env.crypto().sha256(&salt).into()
}

pub fn share_token_salt(env: &Env, container: &Address) -> BytesN<32> {
    let mut salt = Bytes::new(env);
    salt.append(&Bytes::from_slice(env, b"share"));
    salt.append(&container.clone().to_xdr(env));
    env.crypto().sha256(&salt).into()
}

pub fn deploy_container_contract(env: &Env, wasm_hash: BytesN<32>, index: u32) -> Address {
    env.deployer()
        .with_current_contract(container_salt(env, index))
        .deploy_v2(wasm_hash, ())
}

/// Deploys the share token of `container`, administered by the container
pub fn deploy_share_token_contract(
    env: &Env,
    wasm_hash: BytesN<32>,
    container: &Address,
    decimals: u32,
    name: String,
    symbol: String,
) -> Address {
    env.deployer()
        .with_current_contract(share_token_salt(env, container))
        .deploy_v2(wasm_hash, (container.clone(), decimals, name, symbol))
}
