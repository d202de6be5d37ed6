use soroban_sdk::{symbol_short, Address, Bytes, Env, String};

pub(crate) fn fund(env: &Env, beneficiary: Address, amount: i128) {
    let topics = (symbol_short!("fund"), beneficiary);
    env.events().publish(topics, (amount,));
}

pub(crate) fn withdraw(env: &Env, account: Address, amount: i128) {
    let topics = (symbol_short!("withdraw"), account);
    env.events().publish(topics, (amount,));
}

pub(crate) fn any_call(env: &Env, from: Address, to_chain_id: u64, to: String, payload: Bytes) {
    let topics = (symbol_short!("any_call"), from);
    env.events().publish(topics, (to_chain_id, to, payload));
}

pub(crate) fn refund_mpc(env: &Env, receiver: Address, amount: i128) {
    let topics = (symbol_short!("refund"), receiver);
    env.events().publish(topics, (amount,));
}

pub(crate) fn change_mpc(env: &Env, old_mpc: Address, new_mpc: Address, unlock_time: u64) {
    let topics = (symbol_short!("mpc"), symbol_short!("change"));
    env.events().publish(topics, (old_mpc, new_mpc, unlock_time));
}

pub(crate) fn apply_mpc(env: &Env, old_mpc: Address, new_mpc: Address, applied_at: u64) {
    let topics = (symbol_short!("mpc"), symbol_short!("applied"));
    env.events().publish(topics, (old_mpc, new_mpc, applied_at));
}

pub(crate) fn set_blacklist(env: &Env, account: Address, flag: bool) {
    let topics = (symbol_short!("blacklist"), account);
    env.events().publish(topics, (flag,));
}

pub(crate) fn set_whitelist(
    env: &Env,
    source: Address,
    chain_id: u64,
    dest: String,
    flag: bool,
) {
    let topics = (symbol_short!("whitelist"), source);
    env.events().publish(topics, (chain_id, dest, flag));
}
