// ################################################################
//                             TTL
// ################################################################

pub const DAY_IN_LEDGERS: u32 = 17280;

pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const BALANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const BALANCE_LIFETIME_THRESHOLD: u32 = BALANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

// ################################################################
//                             Precision
// ################################################################

/// Allocation percentages are whole numbers that sum to this value
pub const MAX_PERCENTAGE: u32 = 100;
pub const MAX_PERCENTAGE_I128: i128 = 100;

/// Scale of fractional percentages (sell share, liquidation percentage)
pub const PERCENTAGE_PRECISION: i128 = 1_000_000_000_000_000_000; // expo = -18

/// A share percentage of `FULL_SHARE_PCT` liquidates an entire holding
pub const FULL_SHARE_PCT: i128 = MAX_PERCENTAGE_I128 * PERCENTAGE_PRECISION;

/// Scale of the base-currency-per-share rate
pub const RATE_PRECISION: i128 = 1_000_000_000_000_000_000; // expo = -18

// ################################################################
//                             Limits
// ################################################################

/// Withdrawal requests must burn strictly more shares than this
pub const MIN_WITHDRAWAL_AMOUNT: i128 = 10_000;

/// Upper bound of a container's USD deposit floor (whole dollars)
pub const MAX_MIN_DEPOSIT_USD: i128 = 1_000_000;

pub const MAX_TOKEN_DECIMALS: u32 = 18;

/// Default age after which an oracle price is rejected (seconds)
pub const DEFAULT_MAX_PRICE_AGE: u64 = 60 * 60;
