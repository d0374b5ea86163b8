use soroban_sdk::{contractclient, Address, Env};

/// External liquidity venue. `amount_in` of `asset_in` must be transferred to
/// the router before `swap_exact_in` is invoked; the output is sent to `to`.
#[contractclient(name = "SwapRouterClient")]
pub trait SwapRouterInterface {
    fn swap_exact_in(
        env: Env,
        asset_in: Address,
        asset_out: Address,
        amount_in: i128,
        to: Address,
    ) -> i128;

    fn quote(env: Env, asset_in: Address, asset_out: Address, amount_in: i128) -> i128;
}
