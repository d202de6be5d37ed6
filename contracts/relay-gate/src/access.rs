use relay_soroban_std::ensure;
use soroban_sdk::{Address, Env, String, Vec};

use crate::error::ContractError;
use crate::event;
use crate::storage_types::{DataKey, RouteIndexKey, RouteKey};

pub fn is_blacklisted(env: &Env, account: Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Blacklisted(account))
        .unwrap_or(false)
}

/// Overwrite the blacklist flag for an account. Unlike the whitelist,
/// writing the current value again is accepted.
pub fn set_blacklist(env: &Env, account: Address, flag: bool) {
    env.storage()
        .persistent()
        .set(&DataKey::Blacklisted(account.clone()), &flag);

    event::set_blacklist(env, account, flag);
}

pub fn is_in_whitelist(env: &Env, source: Address, chain_id: u64, dest: String) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Whitelisted(RouteKey {
            source,
            chain_id,
            dest,
        }))
        .unwrap_or(false)
}

/// Flip the whitelist flag for a route and keep the per-(source, chain)
/// destination index in sync: append on enabling, remove and compact on
/// disabling. The index never holds duplicates because same-value writes
/// are rejected.
pub fn set_whitelist(
    env: &Env,
    source: Address,
    chain_id: u64,
    dest: String,
    flag: bool,
) -> Result<(), ContractError> {
    let key = DataKey::Whitelisted(RouteKey {
        source: source.clone(),
        chain_id,
        dest: dest.clone(),
    });

    let current: bool = env.storage().persistent().get(&key).unwrap_or(false);

    ensure!(current != flag, ContractError::NoChange);

    env.storage().persistent().set(&key, &flag);

    let index_key = DataKey::WhitelistIndex(RouteIndexKey {
        source: source.clone(),
        chain_id,
    });

    let mut index: Vec<String> = env
        .storage()
        .persistent()
        .get(&index_key)
        .unwrap_or_else(|| Vec::new(env));

    if flag {
        index.push_back(dest.clone());
    } else if let Some(position) = index.first_index_of(dest.clone()) {
        index.remove(position);
    }

    env.storage().persistent().set(&index_key, &index);

    event::set_whitelist(env, source, chain_id, dest, flag);

    Ok(())
}

pub fn whitelist_length(env: &Env, source: Address, chain_id: u64) -> u32 {
    whitelist_index(env, source, chain_id).len()
}

pub fn whitelist_at(
    env: &Env,
    source: Address,
    chain_id: u64,
    index: u32,
) -> Result<String, ContractError> {
    whitelist_index(env, source, chain_id)
        .get(index)
        .ok_or(ContractError::IndexOutOfRange)
}

/// A route may be relayed only if its source is not blacklisted and the
/// exact (source, chain, destination) triple is whitelisted.
pub fn is_route_allowed(env: &Env, source: Address, chain_id: u64, dest: String) -> bool {
    !is_blacklisted(env, source.clone()) && is_in_whitelist(env, source, chain_id, dest)
}

fn whitelist_index(env: &Env, source: Address, chain_id: u64) -> Vec<String> {
    env.storage()
        .persistent()
        .get(&DataKey::WhitelistIndex(RouteIndexKey { source, chain_id }))
        .unwrap_or_else(|| Vec::new(env))
}
