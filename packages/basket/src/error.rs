use soroban_sdk::contracterror;

pub type BasketResult<T = ()> = core::result::Result<T, ErrorCode>;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    // Validation
    InvalidAllocation = 1,
    AmountTooLow = 2,
    ShareTooHigh = 3,
    InvalidFee = 4,
    InvalidAmount = 5,
    InvalidMinimumDeposit = 6,
    MinimumAmountRequired = 7,
    InvalidAsset = 8,
    InvalidShareSupply = 9,
    InvalidDecimals = 10,
    // Authorization
    NotAuthorized = 20,
    // State
    AlreadyInitialized = 30,
    NotInitialized = 31,
    ContainerNotActive = 32,
    OperationPaused = 33,
    InvalidStateTransition = 34,
    // Insufficient funds
    InsufficientBalance = 40,
    InsufficientAllowance = 41,
    AmountExceedsBalance = 42,
    NoAmountToWithdraw = 43,
    InsufficientFunds = 44,
    // External calls
    OracleUnavailable = 50,
    OracleNonPositive = 51,
    OracleStale = 52,
    SwapFailed = 53,
    // Math
    MathError = 60,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorCategory {
    Validation,
    Authorization,
    State,
    InsufficientFunds,
    ExternalCall,
    Math,
}

impl ErrorCode {
    pub fn category(&self) -> ErrorCategory {
        match *self as u32 {
            1..=19 => ErrorCategory::Validation,
            20..=29 => ErrorCategory::Authorization,
            30..=39 => ErrorCategory::State,
            40..=49 => ErrorCategory::InsufficientFunds,
            50..=59 => ErrorCategory::ExternalCall,
            _ => ErrorCategory::Math,
        }
    }
}
