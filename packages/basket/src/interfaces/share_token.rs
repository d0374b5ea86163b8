use soroban_sdk::{contractclient, Address, Env};

#[contractclient(name = "ShareTokenClient")]
pub trait ShareTokenInterface {
    fn mint(env: Env, to: Address, amount: i128);

    fn burn_from(env: Env, spender: Address, from: Address, amount: i128);

    fn balance(env: Env, id: Address) -> i128;

    fn allowance(env: Env, from: Address, spender: Address) -> i128;

    fn total_supply(env: Env) -> i128;

    fn pause(env: Env);

    fn unpause(env: Env);
}
