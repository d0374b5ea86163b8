use basket::{
    constants::{
        FULL_SHARE_PCT, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, MIN_WITHDRAWAL_AMOUNT,
    },
    error::{BasketResult, ErrorCode},
    interfaces::{PriceOracleClient, ShareTokenClient, TradingClient},
    math::{
        allocation::validate_allocations,
        oracle::{meets_minimum_usd, min_deposit_amount},
        safe_math::SafeMath,
        shares::{
            creation_rate, exit_fee, liquidation_pct, reserved_claim, share_rate,
            shares_for_deposit, split_entry_fee,
        },
    },
    ok_or_panic, safe_decrement, safe_increment,
    types::{
        validate_min_deposit_usd, AssetAllocation, ContainerParams, ContainerRole,
        OperationalState, WithdrawalStatus,
    },
};
use soroban_sdk::{
    contract, contractimpl, contractmeta, log, panic_with_error, token, Address, Env, Vec,
};

use crate::{
    container::ContainerTrait,
    events::ContainerEvents,
    storage::{
        get_basket, get_config, get_reserved_balance, get_state, get_total_pending,
        get_withdrawal, has_role, is_initialized, is_whitelisted, save_basket, save_config,
        save_reserved_balance, save_role, save_state, save_total_pending, save_whitelisted,
        save_withdrawal, set_initialized, Config, ContainerInfo,
    },
    utils::{authorize_base_pull, check_state, Operation},
};

contractmeta!(
    key = "Description",
    val = "Basket vault issuing shares against a managed allocation of assets"
);

#[contract]
pub struct Container;

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn check_role(env: &Env, role: ContainerRole, sender: &Address) {
    if !has_role(env, role, sender) {
        log!(env, "Container: sender is missing role {}", role);
        panic_with_error!(env, ErrorCode::NotAuthorized);
    }
}

/// Buys `basket` with `amount` base currency held by the container
fn buy_basket(env: &Env, config: &Config, basket: &Vec<AssetAllocation>, amount: i128) {
    authorize_base_pull(env, &config.base_token, &config.trading, amount);
    TradingClient::new(env, &config.trading).buy_asset_list(
        &env.current_contract_address(),
        basket,
        &amount,
    );
}

fn sell_basket(env: &Env, config: &Config, share_pct: i128) -> i128 {
    TradingClient::new(env, &config.trading).sell_asset_list(
        &env.current_contract_address(),
        &get_basket(env),
        &share_pct,
    )
}

fn queue_withdrawal(env: &Env, holder: &Address, proceeds: i128) -> BasketResult {
    let mut pending = get_withdrawal(env, holder).amount();
    safe_increment!(pending, proceeds, env);
    if pending > 0 {
        save_withdrawal(env, holder, WithdrawalStatus::Pending(pending));
    }

    let mut total_pending = get_total_pending(env);
    safe_increment!(total_pending, proceeds, env);
    save_total_pending(env, total_pending);

    Ok(())
}

fn settle_withdrawal(env: &Env, holder: &Address) -> BasketResult<i128> {
    let amount = get_withdrawal(env, holder).amount();
    if amount <= 0 {
        log!(env, "Container: nothing to withdraw");
        return Err(ErrorCode::NoAmountToWithdraw);
    }
    save_withdrawal(env, holder, WithdrawalStatus::Idle);

    let mut total_pending = get_total_pending(env);
    safe_decrement!(total_pending, amount, env);
    save_total_pending(env, total_pending);

    Ok(amount)
}

#[contractimpl]
impl ContainerTrait for Container {
    #[allow(clippy::too_many_arguments)]
    fn initialize(
        env: Env,
        factory: Address,
        admin: Address,
        manager: Address,
        params: ContainerParams,
        basket: Vec<AssetAllocation>,
        base_token: Address,
        share_token: Address,
        trading: Address,
        price_oracle: Address,
        initial_deposit: i128,
    ) {
        if is_initialized(&env) {
            log!(
                &env,
                "Container: Initialize: initializing contract twice is not allowed"
            );
            panic_with_error!(&env, ErrorCode::AlreadyInitialized);
        }
        factory.require_auth();

        ok_or_panic!(&env, params.validate(&env));
        ok_or_panic!(&env, validate_allocations(&env, &basket, &base_token));

        if initial_deposit <= 0 {
            log!(&env, "Container: Initialize: initial deposit must be positive");
            panic_with_error!(&env, ErrorCode::InvalidAmount);
        }
        let creation_rate = ok_or_panic!(
            &env,
            creation_rate(&env, initial_deposit, params.initial_share_supply)
        );
        if creation_rate == 0 {
            log!(&env, "Container: Initialize: initial deposit too small for the supply");
            panic_with_error!(&env, ErrorCode::InvalidAmount);
        }

        set_initialized(&env);

        let config = Config {
            factory,
            admin: admin.clone(),
            manager: manager.clone(),
            base_token,
            share_token: share_token.clone(),
            trading,
            price_oracle,
            entry_fee_pct: params.entry_fee_pct,
            exit_fee_pct: params.exit_fee_pct,
            min_deposit_usd: params.min_deposit_usd,
            creation_rate,
        };
        save_config(&env, config.clone());
        save_role(&env, ContainerRole::Admin, &admin);
        save_role(&env, ContainerRole::Manager, &manager);
        save_basket(&env, &basket);
        save_state(&env, OperationalState::Active);

        ShareTokenClient::new(&env, &share_token).mint(&manager, &params.initial_share_supply);
        buy_basket(&env, &config, &basket, initial_deposit);

        ContainerEvents::initialize(&env, manager, share_token, initial_deposit);
    }

    // ################################################################
    //                             Investor
    // ################################################################

    fn deposit(env: Env, investor: Address, amount: i128) -> i128 {
        investor.require_auth();
        bump_instance(&env);
        check_state(&env, Operation::Deposit);

        if amount <= 0 {
            log!(&env, "Container: Deposit: amount must be positive");
            panic_with_error!(&env, ErrorCode::InvalidAmount);
        }

        let config = get_config(&env);
        let base = token::Client::new(&env, &config.base_token);

        let oracle = PriceOracleClient::new(&env, &config.price_oracle);
        let enough = ok_or_panic!(
            &env,
            meets_minimum_usd(
                &env,
                amount,
                base.decimals(),
                oracle.get_latest_price(),
                oracle.decimals(),
                config.min_deposit_usd,
            )
        );
        if !enough {
            log!(
                &env,
                "Container: Deposit: worth less than {} USD",
                config.min_deposit_usd
            );
            panic_with_error!(&env, ErrorCode::MinimumAmountRequired);
        }

        let share_token = ShareTokenClient::new(&env, &config.share_token);
        let nav = TradingClient::new(&env, &config.trading)
            .get_portfolio_value(&env.current_contract_address());
        let shares = ok_or_panic!(
            &env,
            shares_for_deposit(
                &env,
                amount,
                nav,
                share_token.total_supply(),
                config.creation_rate,
            )
        );
        if shares == 0 {
            log!(&env, "Container: Deposit: amount buys no shares");
            panic_with_error!(&env, ErrorCode::AmountTooLow);
        }

        let (investor_shares, fee_shares) = if is_whitelisted(&env, &investor) {
            (shares, 0)
        } else {
            ok_or_panic!(&env, split_entry_fee(&env, shares, config.entry_fee_pct))
        };

        base.transfer(&investor, &env.current_contract_address(), &amount);
        buy_basket(&env, &config, &get_basket(&env), amount);

        share_token.mint(&investor, &investor_shares);
        if fee_shares > 0 {
            share_token.mint(&config.manager, &fee_shares);
        }

        ContainerEvents::deposited(&env, investor, amount, investor_shares);

        investor_shares
    }

    fn withdrawal_request(env: Env, holder: Address, share_amount: i128) -> i128 {
        holder.require_auth();
        bump_instance(&env);
        check_state(&env, Operation::Withdraw);

        if share_amount <= MIN_WITHDRAWAL_AMOUNT {
            log!(&env, "Container: Withdrawal: share amount too low");
            panic_with_error!(&env, ErrorCode::AmountTooLow);
        }

        let config = get_config(&env);
        let container = env.current_contract_address();
        let share_token = ShareTokenClient::new(&env, &config.share_token);

        if share_token.balance(&holder) < share_amount {
            log!(&env, "Container: Withdrawal: share balance too low");
            panic_with_error!(&env, ErrorCode::InsufficientBalance);
        }
        if share_token.allowance(&holder, &container) < share_amount {
            log!(&env, "Container: Withdrawal: container allowance too low");
            panic_with_error!(&env, ErrorCode::InsufficientAllowance);
        }

        let total_supply = share_token.total_supply();
        let fee_shares = if is_whitelisted(&env, &holder) {
            0
        } else {
            ok_or_panic!(&env, exit_fee(&env, share_amount, config.exit_fee_pct))
        };
        let net_shares = ok_or_panic!(&env, share_amount.safe_sub(fee_shares, &env));

        let proceeds = if get_state(&env) == OperationalState::Closed {
            let reserved = get_reserved_balance(&env);
            let claim = ok_or_panic!(
                &env,
                reserved_claim(&env, reserved, net_shares, total_supply)
            );
            save_reserved_balance(&env, ok_or_panic!(&env, reserved.safe_sub(claim, &env)));
            claim
        } else {
            let share_pct = ok_or_panic!(&env, liquidation_pct(&env, net_shares, total_supply));
            sell_basket(&env, &config, share_pct)
        };

        share_token.burn_from(&container, &holder, &share_amount);
        if fee_shares > 0 {
            share_token.mint(&config.manager, &fee_shares);
        }

        ok_or_panic!(&env, queue_withdrawal(&env, &holder, proceeds));

        ContainerEvents::withdrawal_requested(&env, holder, share_amount, proceeds);

        proceeds
    }

    fn withdraw(env: Env, holder: Address) -> i128 {
        holder.require_auth();
        bump_instance(&env);
        check_state(&env, Operation::Withdraw);

        let config = get_config(&env);
        let amount = ok_or_panic!(&env, settle_withdrawal(&env, &holder));

        token::Client::new(&env, &config.base_token).transfer(
            &env.current_contract_address(),
            &holder,
            &amount,
        );

        ContainerEvents::withdrawal_sent(&env, holder, amount);

        amount
    }

    // ################################################################
    //                             Manager
    // ################################################################

    fn set_asset_list(env: Env, sender: Address, basket: Vec<AssetAllocation>) {
        sender.require_auth();
        bump_instance(&env);
        check_role(&env, ContainerRole::Manager, &sender);
        check_state(&env, Operation::ManageBasket);

        let config = get_config(&env);
        ok_or_panic!(&env, validate_allocations(&env, &basket, &config.base_token));

        let proceeds = sell_basket(&env, &config, FULL_SHARE_PCT);
        save_basket(&env, &basket);
        if proceeds > 0 {
            buy_basket(&env, &config, &basket, proceeds);
        }

        ContainerEvents::asset_list_updated(&env, basket);
    }

    fn rebalance_asset_list(env: Env, sender: Address, basket: Vec<AssetAllocation>) {
        sender.require_auth();
        bump_instance(&env);
        check_role(&env, ContainerRole::Manager, &sender);
        check_state(&env, Operation::ManageBasket);

        let config = get_config(&env);
        ok_or_panic!(&env, validate_allocations(&env, &basket, &config.base_token));

        TradingClient::new(&env, &config.trading)
            .rebalance_asset_list(&env.current_contract_address(), &basket);
        save_basket(&env, &basket);

        ContainerEvents::asset_list_updated(&env, basket);
    }

    fn close_container(env: Env, sender: Address) -> i128 {
        sender.require_auth();
        bump_instance(&env);
        check_role(&env, ContainerRole::Manager, &sender);
        check_state(&env, Operation::ManageBasket);

        let config = get_config(&env);
        let reserved = sell_basket(&env, &config, FULL_SHARE_PCT);

        save_reserved_balance(&env, reserved);
        save_state(&env, OperationalState::Closed);

        log!(&env, "Container: closed with {} in reserve", reserved);
        ContainerEvents::container_closed(&env, reserved);

        reserved
    }

    fn include_in_whitelist(env: Env, sender: Address, account: Address) {
        sender.require_auth();
        bump_instance(&env);
        check_role(&env, ContainerRole::Manager, &sender);

        save_whitelisted(&env, &account, true);

        ContainerEvents::whitelist_updated(&env, account, true);
    }

    fn remove_from_whitelist(env: Env, sender: Address, account: Address) {
        sender.require_auth();
        bump_instance(&env);
        check_role(&env, ContainerRole::Manager, &sender);

        save_whitelisted(&env, &account, false);

        ContainerEvents::whitelist_updated(&env, account, false);
    }

    // ################################################################
    //                             Admin
    // ################################################################

    fn pause(env: Env, sender: Address) {
        sender.require_auth();
        bump_instance(&env);
        check_role(&env, ContainerRole::Admin, &sender);
        check_state(&env, Operation::Pause);

        save_state(&env, OperationalState::Paused);
        ShareTokenClient::new(&env, &get_config(&env).share_token).pause();

        ContainerEvents::paused(&env, sender);
    }

    fn unpause(env: Env, sender: Address) {
        sender.require_auth();
        bump_instance(&env);
        check_role(&env, ContainerRole::Admin, &sender);
        check_state(&env, Operation::Unpause);

        save_state(&env, OperationalState::Active);
        ShareTokenClient::new(&env, &get_config(&env).share_token).unpause();

        ContainerEvents::unpaused(&env, sender);
    }

    fn set_min_deposit_usd(env: Env, sender: Address, min_deposit_usd: i128) {
        sender.require_auth();
        bump_instance(&env);
        check_role(&env, ContainerRole::Admin, &sender);

        ok_or_panic!(&env, validate_min_deposit_usd(&env, min_deposit_usd));

        let config = get_config(&env);
        save_config(
            &env,
            Config {
                min_deposit_usd,
                ..config
            },
        );

        ContainerEvents::min_deposit_updated(&env, min_deposit_usd);
    }

    fn set_price_oracle(env: Env, sender: Address, price_oracle: Address) {
        sender.require_auth();
        bump_instance(&env);
        check_role(&env, ContainerRole::Admin, &sender);

        let config = get_config(&env);
        save_config(
            &env,
            Config {
                price_oracle: price_oracle.clone(),
                ..config
            },
        );

        ContainerEvents::new_price_feed_address(&env, price_oracle);
    }

    // ################################################################
    //                             Queries
    // ################################################################

    fn in_whitelist(env: Env, account: Address) -> bool {
        is_whitelisted(&env, &account)
    }

    fn get_manager(env: Env) -> Address {
        get_config(&env).manager
    }

    fn get_entry_fee(env: Env) -> u32 {
        get_config(&env).entry_fee_pct
    }

    fn get_exit_fee(env: Env) -> u32 {
        get_config(&env).exit_fee_pct
    }

    fn get_min_deposit_usd(env: Env) -> i128 {
        get_config(&env).min_deposit_usd
    }

    fn get_min_deposit_amount(env: Env) -> i128 {
        let config = get_config(&env);
        let oracle = PriceOracleClient::new(&env, &config.price_oracle);
        ok_or_panic!(
            &env,
            min_deposit_amount(
                &env,
                token::Client::new(&env, &config.base_token).decimals(),
                oracle.get_latest_price(),
                oracle.decimals(),
                config.min_deposit_usd,
            )
        )
    }

    fn get_price_oracle(env: Env) -> Address {
        get_config(&env).price_oracle
    }

    fn get_share_token(env: Env) -> Address {
        get_config(&env).share_token
    }

    fn get_asset_list(env: Env) -> Vec<AssetAllocation> {
        get_basket(&env)
    }

    fn get_share_rate(env: Env) -> i128 {
        let config = get_config(&env);
        let nav = Self::get_nav(env.clone());
        let total_supply = ShareTokenClient::new(&env, &config.share_token).total_supply();
        ok_or_panic!(
            &env,
            share_rate(&env, nav, total_supply, config.creation_rate)
        )
    }

    fn get_nav(env: Env) -> i128 {
        if get_state(&env) == OperationalState::Closed {
            return get_reserved_balance(&env);
        }
        TradingClient::new(&env, &get_config(&env).trading)
            .get_portfolio_value(&env.current_contract_address())
    }

    fn get_pending_withdrawal(env: Env, holder: Address) -> i128 {
        get_withdrawal(&env, &holder).amount()
    }

    fn get_withdrawal_status(env: Env, holder: Address) -> WithdrawalStatus {
        get_withdrawal(&env, &holder)
    }

    fn get_total_pending(env: Env) -> i128 {
        get_total_pending(&env)
    }

    fn get_reserved_balance(env: Env) -> i128 {
        get_reserved_balance(&env)
    }

    fn get_share_balance(env: Env, holder: Address) -> i128 {
        ShareTokenClient::new(&env, &get_config(&env).share_token).balance(&holder)
    }

    fn is_active(env: Env) -> bool {
        get_state(&env) == OperationalState::Active
    }

    fn get_state(env: Env) -> OperationalState {
        get_state(&env)
    }

    fn query_container(env: Env) -> ContainerInfo {
        ContainerInfo {
            config: get_config(&env),
            basket: get_basket(&env),
            state: get_state(&env),
            total_pending: get_total_pending(&env),
            reserved_balance: get_reserved_balance(&env),
        }
    }
}
