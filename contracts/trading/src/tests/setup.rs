use basket::{
    testutils::{MockSwapRouter, MockSwapRouterClient, PRICE_SCALE},
    types::{AssetAllocation, TradingRole},
};
use soroban_sdk::{testutils::Address as _, token, Address, Env, Vec};

use crate::contract::{Trading, TradingClient};

pub const ROUTER_LIQUIDITY: i128 = 1_000_000_0000000;

pub fn deploy_token_contract<'a>(env: &Env, admin: &Address) -> token::Client<'a> {
    token::Client::new(
        env,
        &env.register_stellar_asset_contract_v2(admin.clone())
            .address(),
    )
}

pub fn mint(env: &Env, token: &Address, to: &Address, amount: i128) {
    token::StellarAssetClient::new(env, token).mint(to, &amount);
}

pub fn deploy_trading_contract<'a>(
    env: &Env,
    admin: &Address,
    base_token: &Address,
    router: &Address,
) -> TradingClient<'a> {
    let trading = TradingClient::new(env, &env.register(Trading, ()));
    trading.initialize(admin, base_token, router);
    trading
}

pub struct TradingTest<'a> {
    pub env: Env,
    pub admin: Address,
    pub base: token::Client<'a>,
    pub router: MockSwapRouterClient<'a>,
    pub trading: TradingClient<'a>,
    /// Basket assets priced 2.0, 0.5, 1.0 and 4.0 in base currency
    pub assets: Vec<Address>,
}

impl<'a> TradingTest<'a> {
    pub fn setup() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.cost_estimate().budget().reset_unlimited();

        let admin = Address::generate(&env);
        let base = deploy_token_contract(&env, &admin);
        let router = MockSwapRouterClient::new(&env, &env.register(MockSwapRouter, ()));
        router.set_price(&base.address, &PRICE_SCALE);
        mint(&env, &base.address, &router.address, ROUTER_LIQUIDITY);

        let mut assets = Vec::new(&env);
        for price in [2 * PRICE_SCALE, PRICE_SCALE / 2, PRICE_SCALE, 4 * PRICE_SCALE] {
            let asset = deploy_token_contract(&env, &admin).address;
            router.set_price(&asset, &price);
            mint(&env, &asset, &router.address, ROUTER_LIQUIDITY);
            assets.push_back(asset);
        }

        let trading = deploy_trading_contract(&env, &admin, &base.address, &router.address);

        TradingTest {
            env,
            admin,
            base,
            router,
            trading,
            assets,
        }
    }

    pub fn asset(&self, index: u32) -> Address {
        self.assets.get_unchecked(index)
    }

    /// Allocation over the first assets, in order
    pub fn basket(&self, percentages: &[u32]) -> Vec<AssetAllocation> {
        let mut allocations = Vec::new(&self.env);
        for (i, percentage) in percentages.iter().enumerate() {
            allocations.push_back(AssetAllocation {
                asset: self.asset(i as u32),
                percentage: *percentage,
            });
        }
        allocations
    }

    /// A funded account holding the trader role
    pub fn trader(&self, funds: i128) -> Address {
        let trader = Address::generate(&self.env);
        if funds > 0 {
            mint(&self.env, &self.base.address, &trader, funds);
        }
        self.trading
            .grant_role(&self.admin, &TradingRole::Trader, &trader);
        trader
    }
}
