use basket::{error::ErrorCode, types::OperationalState};
use soroban_sdk::{
    auth::{ContractContext, InvokerContractAuthEntry, SubContractInvocation},
    log, panic_with_error, vec, Address, Env, IntoVal, Symbol,
};

use crate::storage::get_state;

/// Groups of entry points sharing the same state requirements
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Deposit,
    Withdraw,
    ManageBasket,
    Pause,
    Unpause,
}

pub fn check_state(env: &Env, operation: Operation) {
    let state = get_state(env);

    let error = match (operation, state) {
        (Operation::Unpause, OperationalState::Paused) => return,
        (Operation::Unpause, OperationalState::Active) => ErrorCode::InvalidStateTransition,
        (Operation::Pause, OperationalState::Paused) => ErrorCode::InvalidStateTransition,
        (_, OperationalState::Active) => return,
        (Operation::Withdraw, OperationalState::Closed) => return,
        (_, OperationalState::Paused) => ErrorCode::OperationPaused,
        (_, OperationalState::Closed) => ErrorCode::ContainerNotActive,
    };

    log!(env, "Container: operation not allowed in state {}", state);
    panic_with_error!(env, error);
}

/// Pre-authorizes the base currency transfer `trading` performs on this
/// container's behalf while buying its basket.
pub fn authorize_base_pull(env: &Env, base_token: &Address, trading: &Address, amount: i128) {
    env.authorize_as_current_contract(vec![
        env,
        InvokerContractAuthEntry::Contract(SubContractInvocation {
            context: ContractContext {
                contract: base_token.clone(),
                fn_name: Symbol::new(env, "transfer"),
                args: (env.current_contract_address(), trading.clone(), amount).into_val(env),
            },
            sub_invocations: vec![env],
        }),
    ]);
}
