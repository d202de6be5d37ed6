use relay_soroban_std::ensure;
use soroban_sdk::{Address, Env};

use crate::error::ContractError;
use crate::event;
use crate::storage_types::DataKey;

/// Mandatory delay between requesting and applying an mpc rotation.
///
/// Gives observers a public, non-bypassable warning window before a new
/// operator gains control of funds and access lists.
pub const ROTATION_DELAY: u64 = 2 * 24 * 60 * 60;

pub fn mpc(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Mpc)
        .expect("mpc not set")
}

pub fn pending_mpc(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::PendingMpc)
}

/// Unlock timestamp of the in-flight rotation, 0 when none is pending.
pub fn delay_mpc(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::DelayMpc)
        .unwrap_or(0)
}

/// Authenticate `operator` and check it is the active mpc.
pub fn require_mpc(env: &Env, operator: &Address) -> Result<(), ContractError> {
    operator.require_auth();

    ensure!(*operator == mpc(env), ContractError::NotMpc);

    Ok(())
}

/// Start a timelocked rotation of the active mpc.
///
/// A request made while another rotation is in flight overwrites it and
/// restarts the delay.
pub fn change_mpc(env: &Env, operator: Address, new_mpc: Address) -> Result<(), ContractError> {
    require_mpc(env, &operator)?;

    let unlock_time = env.ledger().timestamp() + ROTATION_DELAY;

    env.storage().instance().set(&DataKey::PendingMpc, &new_mpc);
    env.storage().instance().set(&DataKey::DelayMpc, &unlock_time);

    event::change_mpc(env, operator, new_mpc, unlock_time);

    Ok(())
}

/// Complete a rotation once its delay has elapsed. Only the pending mpc
/// may apply it.
pub fn apply_mpc(env: &Env, operator: Address) -> Result<(), ContractError> {
    operator.require_auth();

    let pending = pending_mpc(env).ok_or(ContractError::NoPendingRotation)?;

    ensure!(operator == pending, ContractError::NotPendingMpc);

    let now = env.ledger().timestamp();

    ensure!(now >= delay_mpc(env), ContractError::RotationDelayNotElapsed);

    let old_mpc = mpc(env);

    env.storage().instance().set(&DataKey::Mpc, &pending);
    env.storage().instance().remove(&DataKey::PendingMpc);
    env.storage().instance().remove(&DataKey::DelayMpc);

    event::apply_mpc(env, old_mpc, pending, now);

    Ok(())
}
