use soroban_sdk::{testutils::Events, Address, Env, Symbol, TryFromVal, Val, Vec};

fn is_named(env: &Env, topics: &Vec<Val>, name: &Symbol) -> bool {
    match topics.get(0) {
        Some(topic) => Symbol::try_from_val(env, &topic).is_ok_and(|symbol| symbol == *name),
        None => false,
    }
}

/// Number of events named `name` the contract published in the last invocation
pub fn count_events(env: &Env, contract: &Address, name: &str) -> u32 {
    let name = Symbol::new(env, name);
    let mut count = 0;
    for (id, topics, _) in env.events().all().iter() {
        if id == *contract && is_named(env, &topics, &name) {
            count += 1;
        }
    }
    count
}

/// Topics and data of the latest event named `name` the contract published
/// in the last invocation
pub fn last_event(env: &Env, contract: &Address, name: &str) -> Option<(Vec<Val>, Val)> {
    let name = Symbol::new(env, name);
    let mut found = None;
    for (id, topics, data) in env.events().all().iter() {
        if id == *contract && is_named(env, &topics, &name) {
            found = Some((topics, data));
        }
    }
    found
}
