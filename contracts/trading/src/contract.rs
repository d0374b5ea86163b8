use basket::{
    constants::{FULL_SHARE_PCT, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD},
    error::ErrorCode,
    math::{
        allocation::{sell_amount, split_by_allocation, validate_allocations},
        safe_math::SafeMath,
    },
    ok_or_panic,
    types::{AssetAllocation, AssetBalance, OperationalState, TradingRole},
};
use soroban_sdk::{
    contract, contractimpl, contractmeta, log, panic_with_error, token, Address, Env, Vec,
};

use crate::{
    events::TradingEvents,
    rebalance::{plan_rebalance, split_by_weight, Holding, RebalanceLeg},
    storage::{
        credit_balance, debit_balance, get_assets_owned, get_balance, get_config, get_state,
        has_role, is_initialized, remove_role, save_config, save_role, save_state,
        set_initialized, Config,
    },
    swap::{quote_in_base, swap_exact_in},
    trading::TradingTrait,
};

contractmeta!(
    key = "Description",
    val = "Shared execution engine buying, selling and rebalancing baskets of assets"
);

#[contract]
pub struct Trading;

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn check_admin(env: &Env, sender: &Address) {
    if !has_role(env, TradingRole::Admin, sender) {
        log!(env, "Trading: sender is not an admin");
        panic_with_error!(env, ErrorCode::NotAuthorized);
    }
}

fn check_trader(env: &Env, owner: &Address) {
    if !has_role(env, TradingRole::Trader, owner) {
        log!(env, "Trading: owner is missing the trader role");
        panic_with_error!(env, ErrorCode::NotAuthorized);
    }
}

fn check_active(env: &Env) {
    if get_state(env) != OperationalState::Active {
        log!(env, "Trading: engine is paused");
        panic_with_error!(env, ErrorCode::OperationPaused);
    }
}

#[contractimpl]
impl TradingTrait for Trading {
    fn initialize(env: Env, admin: Address, base_token: Address, router: Address) {
        if is_initialized(&env) {
            log!(
                &env,
                "Trading: Initialize: initializing contract twice is not allowed"
            );
            panic_with_error!(&env, ErrorCode::AlreadyInitialized);
        }

        set_initialized(&env);

        save_config(
            &env,
            Config {
                admin: admin.clone(),
                base_token: base_token.clone(),
                router: router.clone(),
            },
        );
        save_role(&env, TradingRole::Admin, &admin);
        save_state(&env, OperationalState::Active);

        TradingEvents::initialize(&env, admin, base_token, router);
    }

    fn grant_role(env: Env, sender: Address, role: TradingRole, account: Address) {
        sender.require_auth();
        bump_instance(&env);

        let allowed = has_role(&env, TradingRole::Admin, &sender)
            || (role == TradingRole::Trader && has_role(&env, TradingRole::Registrar, &sender));
        if !allowed {
            log!(&env, "Trading: sender can not grant this role");
            panic_with_error!(&env, ErrorCode::NotAuthorized);
        }

        save_role(&env, role, &account);

        TradingEvents::role_granted(&env, role, account);
    }

    fn revoke_role(env: Env, sender: Address, role: TradingRole, account: Address) {
        sender.require_auth();
        bump_instance(&env);
        check_admin(&env, &sender);

        remove_role(&env, role, &account);

        TradingEvents::role_revoked(&env, role, account);
    }

    fn pause(env: Env, sender: Address) {
        sender.require_auth();
        bump_instance(&env);
        check_admin(&env, &sender);

        if get_state(&env) != OperationalState::Active {
            log!(&env, "Trading: engine is already paused");
            panic_with_error!(&env, ErrorCode::InvalidStateTransition);
        }
        save_state(&env, OperationalState::Paused);

        TradingEvents::paused(&env, sender);
    }

    fn unpause(env: Env, sender: Address) {
        sender.require_auth();
        bump_instance(&env);
        check_admin(&env, &sender);

        if get_state(&env) != OperationalState::Paused {
            log!(&env, "Trading: engine is not paused");
            panic_with_error!(&env, ErrorCode::InvalidStateTransition);
        }
        save_state(&env, OperationalState::Active);

        TradingEvents::unpaused(&env, sender);
    }

    fn update_router(env: Env, sender: Address, router: Address) {
        sender.require_auth();
        bump_instance(&env);
        check_admin(&env, &sender);

        let config = get_config(&env);
        save_config(
            &env,
            Config {
                router: router.clone(),
                ..config
            },
        );

        TradingEvents::update_router(&env, router);
    }

    fn transfer_to(env: Env, sender: Address, to: Address, amount: i128) {
        sender.require_auth();
        bump_instance(&env);
        check_admin(&env, &sender);

        if amount <= 0 {
            log!(&env, "Trading: transfer amount must be positive");
            panic_with_error!(&env, ErrorCode::InvalidAmount);
        }

        let config = get_config(&env);
        token::Client::new(&env, &config.base_token).transfer(
            &env.current_contract_address(),
            &to,
            &amount,
        );

        TradingEvents::transfer(&env, to, amount);
    }

    // ################################################################
    //                             Trading
    // ################################################################

    fn buy_asset_list(
        env: Env,
        owner: Address,
        allocations: Vec<AssetAllocation>,
        amount_in: i128,
    ) -> Vec<AssetBalance> {
        owner.require_auth();
        bump_instance(&env);
        check_active(&env);

        let config = get_config(&env);
        ok_or_panic!(
            &env,
            validate_allocations(&env, &allocations, &config.base_token)
        );

        if amount_in <= 0 {
            log!(&env, "Trading: buy amount must be positive");
            panic_with_error!(&env, ErrorCode::InvalidAmount);
        }

        token::Client::new(&env, &config.base_token).transfer(
            &owner,
            &env.current_contract_address(),
            &amount_in,
        );

        let legs = ok_or_panic!(&env, split_by_allocation(&env, &allocations, amount_in));

        let mut received: Vec<AssetBalance> = Vec::new(&env);
        for (allocation, leg) in allocations.iter().zip(legs.iter()) {
            if leg == 0 {
                continue;
            }

            let amount_out = swap_exact_in(
                &env,
                &config,
                &config.base_token,
                &allocation.asset,
                leg,
            );
            credit_balance(&env, &allocation.asset, &owner, amount_out);

            TradingEvents::trade_asset(
                &env,
                owner.clone(),
                config.base_token.clone(),
                allocation.asset.clone(),
                leg,
                amount_out,
            );

            received.push_back(AssetBalance {
                asset: allocation.asset,
                balance: amount_out,
            });
        }

        received
    }

    fn sell_asset_list(
        env: Env,
        owner: Address,
        allocations: Vec<AssetAllocation>,
        share_pct: i128,
    ) -> i128 {
        owner.require_auth();
        bump_instance(&env);
        check_trader(&env, &owner);
        check_active(&env);

        let config = get_config(&env);
        ok_or_panic!(
            &env,
            validate_allocations(&env, &allocations, &config.base_token)
        );

        if share_pct > FULL_SHARE_PCT {
            log!(&env, "Trading: Share percentage > 100");
            panic_with_error!(&env, ErrorCode::ShareTooHigh);
        }

        let mut proceeds: i128 = 0;
        for allocation in allocations.iter() {
            let balance = get_balance(&env, &allocation.asset, &owner);
            let amount = ok_or_panic!(&env, sell_amount(&env, balance, share_pct));
            if amount == 0 {
                continue;
            }

            let amount_out = swap_exact_in(
                &env,
                &config,
                &allocation.asset,
                &config.base_token,
                amount,
            );
            debit_balance(&env, &allocation.asset, &owner, amount);
            proceeds = ok_or_panic!(&env, proceeds.safe_add(amount_out, &env));

            TradingEvents::trade_asset(
                &env,
                owner.clone(),
                allocation.asset.clone(),
                config.base_token.clone(),
                amount,
                amount_out,
            );
        }

        if proceeds > 0 {
            token::Client::new(&env, &config.base_token).transfer(
                &env.current_contract_address(),
                &owner,
                &proceeds,
            );
        }

        proceeds
    }

    fn rebalance_asset_list(env: Env, owner: Address, allocations: Vec<AssetAllocation>) {
        owner.require_auth();
        bump_instance(&env);
        check_trader(&env, &owner);
        check_active(&env);

        let config = get_config(&env);
        ok_or_panic!(
            &env,
            validate_allocations(&env, &allocations, &config.base_token)
        );

        // current positions first, then targets the owner does not hold yet
        let mut holdings: Vec<Holding> = Vec::new(&env);
        let mut seen: Vec<Address> = Vec::new(&env);
        for asset in get_assets_owned(&env, &owner).iter() {
            let balance = get_balance(&env, &asset, &owner);
            let target_pct = allocations
                .iter()
                .find(|allocation| allocation.asset == asset)
                .map(|allocation| allocation.percentage)
                .unwrap_or(0);
            if balance == 0 && target_pct == 0 {
                continue;
            }

            holdings.push_back(Holding {
                asset: asset.clone(),
                balance,
                value: quote_in_base(&env, &config, &asset, balance),
                target_pct,
            });
            seen.push_back(asset);
        }
        for allocation in allocations.iter() {
            if !seen.contains(&allocation.asset) {
                holdings.push_back(Holding {
                    asset: allocation.asset,
                    balance: 0,
                    value: 0,
                    target_pct: allocation.percentage,
                });
            }
        }

        let (sells, deficits) = ok_or_panic!(&env, plan_rebalance(&env, &holdings));

        let mut proceeds: i128 = 0;
        for leg in sells.iter() {
            let amount_out =
                swap_exact_in(&env, &config, &leg.asset, &config.base_token, leg.amount);
            debit_balance(&env, &leg.asset, &owner, leg.amount);
            proceeds = ok_or_panic!(&env, proceeds.safe_add(amount_out, &env));

            TradingEvents::trade_asset(
                &env,
                owner.clone(),
                leg.asset.clone(),
                config.base_token.clone(),
                leg.amount,
                amount_out,
            );
        }

        if proceeds == 0 {
            return;
        }

        // rounding can leave proceeds without any deficit to fill
        let buys = if deficits.is_empty() {
            let legs = ok_or_panic!(&env, split_by_allocation(&env, &allocations, proceeds));
            let mut buys = Vec::new(&env);
            for (allocation, amount) in allocations.iter().zip(legs.iter()) {
                buys.push_back(RebalanceLeg {
                    asset: allocation.asset,
                    amount,
                });
            }
            buys
        } else {
            ok_or_panic!(&env, split_by_weight(&env, &deficits, proceeds))
        };

        for leg in buys.iter() {
            if leg.amount == 0 {
                continue;
            }

            let amount_out =
                swap_exact_in(&env, &config, &config.base_token, &leg.asset, leg.amount);
            credit_balance(&env, &leg.asset, &owner, amount_out);

            TradingEvents::trade_asset(
                &env,
                owner.clone(),
                config.base_token.clone(),
                leg.asset.clone(),
                leg.amount,
                amount_out,
            );
        }
    }

    fn swap_asset(
        env: Env,
        owner: Address,
        amount_in: i128,
        asset_from: Address,
        asset_to: Address,
    ) -> i128 {
        owner.require_auth();
        bump_instance(&env);
        check_active(&env);

        let config = get_config(&env);
        if asset_from == asset_to
            || asset_from == config.base_token
            || asset_to == config.base_token
        {
            log!(&env, "Trading: swap legs must be two distinct basket assets");
            panic_with_error!(&env, ErrorCode::InvalidAsset);
        }

        if amount_in <= 0 {
            log!(&env, "Trading: swap amount must be positive");
            panic_with_error!(&env, ErrorCode::InvalidAmount);
        }

        if amount_in > get_balance(&env, &asset_from, &owner) {
            log!(&env, "Trading: amount > asset balance");
            panic_with_error!(&env, ErrorCode::AmountExceedsBalance);
        }

        let amount_out = swap_exact_in(&env, &config, &asset_from, &asset_to, amount_in);
        debit_balance(&env, &asset_from, &owner, amount_in);
        credit_balance(&env, &asset_to, &owner, amount_out);

        TradingEvents::trade_asset(&env, owner, asset_from, asset_to, amount_in, amount_out);

        amount_out
    }

    // ################################################################
    //                             Queries
    // ################################################################

    fn get_asset_balance(env: Env, asset: Address, owner: Address) -> i128 {
        bump_instance(&env);
        get_balance(&env, &asset, &owner)
    }

    fn get_assets_owned(env: Env, owner: Address) -> Vec<AssetBalance> {
        bump_instance(&env);

        let mut assets: Vec<AssetBalance> = Vec::new(&env);
        for asset in get_assets_owned(&env, &owner).iter() {
            let balance = get_balance(&env, &asset, &owner);
            assets.push_back(AssetBalance { asset, balance });
        }
        assets
    }

    fn get_portfolio_value(env: Env, owner: Address) -> i128 {
        bump_instance(&env);

        let config = get_config(&env);
        let mut value: i128 = 0;
        for asset in get_assets_owned(&env, &owner).iter() {
            let balance = get_balance(&env, &asset, &owner);
            let quote = quote_in_base(&env, &config, &asset, balance);
            value = ok_or_panic!(&env, value.safe_add(quote, &env));
        }
        value
    }

    fn has_role(env: Env, role: TradingRole, account: Address) -> bool {
        bump_instance(&env);
        has_role(&env, role, &account)
    }

    fn get_state(env: Env) -> OperationalState {
        bump_instance(&env);
        get_state(&env)
    }

    fn query_config(env: Env) -> Config {
        bump_instance(&env);
        get_config(&env)
    }
}
