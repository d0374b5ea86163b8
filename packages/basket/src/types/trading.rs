use soroban_sdk::contracttype;

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TradingRole {
    /// Grants and revokes roles, pauses the engine
    Admin,
    /// Sells and rebalances its own holdings
    Trader,
    /// May grant the Trader role (held by the container factory)
    Registrar,
}
