use relay_soroban_std::ensure;
use relay_soroban_std::ttl::extend_instance_ttl;
use soroban_sdk::{contract, contractimpl, Address, Bytes, Env, String, Vec};

use crate::error::ContractError;
use crate::event;
use crate::interface::RelayGateInterface;
use crate::storage_types::DataKey;
use crate::{access, custody, ledger};

#[contract]
pub struct RelayGate;

#[contractimpl]
impl RelayGate {
    pub fn __constructor(env: Env, mpc: Address, gas_token: Address) {
        env.storage().instance().set(&DataKey::Mpc, &mpc);
        env.storage().instance().set(&DataKey::GasToken, &gas_token);
    }
}

#[contractimpl]
impl RelayGateInterface for RelayGate {
    fn fund(
        env: Env,
        spender: Address,
        beneficiary: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        ledger::fund(&env, spender, beneficiary, amount)?;

        extend_instance_ttl(&env);

        Ok(())
    }

    fn withdraw(env: Env, account: Address, amount: i128) -> Result<(), ContractError> {
        ledger::withdraw(&env, account, amount)?;

        extend_instance_ttl(&env);

        Ok(())
    }

    fn any_call(
        env: Env,
        operator: Address,
        from: Address,
        to: Vec<String>,
        data: Vec<Bytes>,
        to_chain_ids: Vec<u64>,
        expense: i128,
    ) -> Result<(), ContractError> {
        custody::require_mpc(&env, &operator)?;

        ensure!(
            to.len() == data.len() && to.len() == to_chain_ids.len(),
            ContractError::LengthMismatch
        );
        ensure!(expense >= 0, ContractError::InvalidAmount);

        // All routes are checked before any state is touched, so a rejected
        // batch leaves no trace.
        for (dest, chain_id) in to.iter().zip(to_chain_ids.iter()) {
            ensure!(
                access::is_route_allowed(&env, from.clone(), chain_id, dest),
                ContractError::RouteNotAllowed
            );
        }

        ledger::charge(&env, from.clone(), expense);

        for ((dest, payload), chain_id) in to.iter().zip(data.iter()).zip(to_chain_ids.iter()) {
            event::any_call(&env, from.clone(), chain_id, dest, payload);
        }

        extend_instance_ttl(&env);

        Ok(())
    }

    fn refund_mpc(env: Env, operator: Address) -> Result<i128, ContractError> {
        custody::require_mpc(&env, &operator)?;

        let payout = ledger::refund(&env, operator);

        extend_instance_ttl(&env);

        Ok(payout)
    }

    fn change_mpc(env: Env, operator: Address, new_mpc: Address) -> Result<(), ContractError> {
        custody::change_mpc(&env, operator, new_mpc)?;

        extend_instance_ttl(&env);

        Ok(())
    }

    fn apply_mpc(env: Env, operator: Address) -> Result<(), ContractError> {
        custody::apply_mpc(&env, operator)?;

        extend_instance_ttl(&env);

        Ok(())
    }

    fn set_blacklist(
        env: Env,
        operator: Address,
        account: Address,
        flag: bool,
    ) -> Result<(), ContractError> {
        custody::require_mpc(&env, &operator)?;

        access::set_blacklist(&env, account, flag);

        extend_instance_ttl(&env);

        Ok(())
    }

    fn set_whitelist(
        env: Env,
        operator: Address,
        source: Address,
        chain_id: u64,
        dest: String,
        flag: bool,
    ) -> Result<(), ContractError> {
        custody::require_mpc(&env, &operator)?;

        access::set_whitelist(&env, source, chain_id, dest, flag)?;

        extend_instance_ttl(&env);

        Ok(())
    }

    fn mpc(env: &Env) -> Address {
        custody::mpc(env)
    }

    fn pending_mpc(env: &Env) -> Option<Address> {
        custody::pending_mpc(env)
    }

    fn delay_mpc(env: &Env) -> u64 {
        custody::delay_mpc(env)
    }

    fn is_blacklisted(env: &Env, account: Address) -> bool {
        access::is_blacklisted(env, account)
    }

    fn is_in_whitelist(env: &Env, source: Address, chain_id: u64, dest: String) -> bool {
        access::is_in_whitelist(env, source, chain_id, dest)
    }

    fn whitelist_length(env: &Env, source: Address, chain_id: u64) -> u32 {
        access::whitelist_length(env, source, chain_id)
    }

    fn whitelist_at(
        env: &Env,
        source: Address,
        chain_id: u64,
        index: u32,
    ) -> Result<String, ContractError> {
        access::whitelist_at(env, source, chain_id, index)
    }

    fn funds(env: &Env, account: Address) -> i128 {
        ledger::funds(env, account)
    }

    fn debt(env: &Env, account: Address) -> i128 {
        ledger::debt(env, account)
    }

    fn expenses(env: &Env) -> i128 {
        ledger::expenses(env)
    }

    fn balance(env: &Env) -> i128 {
        ledger::balance(env)
    }

    fn gas_token(env: &Env) -> Address {
        ledger::gas_token(env)
    }
}
