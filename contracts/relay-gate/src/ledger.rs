use relay_soroban_std::ensure;
use soroban_sdk::{token, Address, Env};

use crate::error::ContractError;
use crate::event;
use crate::storage_types::DataKey;

pub fn gas_token(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::GasToken)
        .expect("gas token not set")
}

pub fn funds(env: &Env, account: Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Funds(account))
        .unwrap_or(0)
}

/// Relay expense charged to an account beyond what its deposits covered.
/// Settled out of the account's future deposits before they credit.
pub fn debt(env: &Env, account: Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Debt(account))
        .unwrap_or(0)
}

/// Outstanding relay expenses owed to the active mpc.
pub fn expenses(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::Expenses)
        .unwrap_or(0)
}

/// Gas token balance held by the contract itself.
pub fn balance(env: &Env) -> i128 {
    token::Client::new(env, &gas_token(env)).balance(&env.current_contract_address())
}

/// Credit `beneficiary` with a gas token deposit paid by `spender`. The
/// beneficiary does not have to be the spender; funding on behalf of
/// another account is supported. A zero amount is a valid no-op deposit.
///
/// A deposit first settles the beneficiary's relay debt; only the
/// remainder becomes withdrawable credit.
pub fn fund(
    env: &Env,
    spender: Address,
    beneficiary: Address,
    amount: i128,
) -> Result<(), ContractError> {
    spender.require_auth();

    ensure!(amount >= 0, ContractError::InvalidAmount);

    if amount > 0 {
        token::Client::new(env, &gas_token(env)).transfer(
            &spender,
            &env.current_contract_address(),
            &amount,
        );
    }

    let owed = debt(env, beneficiary.clone());
    let settled = owed.min(amount);

    if settled > 0 {
        set_debt(env, beneficiary.clone(), owed - settled);
    }

    let credit = amount - settled;
    if credit > 0 {
        set_funds(env, beneficiary.clone(), funds(env, beneficiary.clone()) + credit);
        set_total_funds(env, total_funds(env) + credit);
    }

    event::fund(env, beneficiary, amount);

    Ok(())
}

/// Return part of an account's unspent deposit to the account.
pub fn withdraw(env: &Env, account: Address, amount: i128) -> Result<(), ContractError> {
    account.require_auth();

    ensure!(amount >= 0, ContractError::InvalidAmount);

    let available = funds(env, account.clone());

    ensure!(amount <= available, ContractError::InsufficientFunds);

    if amount > 0 {
        set_funds(env, account.clone(), available - amount);
        set_total_funds(env, total_funds(env) - amount);

        token::Client::new(env, &gas_token(env)).transfer(
            &env.current_contract_address(),
            &account,
            &amount,
        );
    }

    event::withdraw(env, account, amount);

    Ok(())
}

/// Record a relay expense: the payer's deposit is debited down to zero at
/// most, the shortfall is booked as the payer's debt, and the full expense
/// accrues to the mpc.
pub fn charge(env: &Env, payer: Address, expense: i128) {
    let available = funds(env, payer.clone());
    let debit = expense.min(available);

    if debit > 0 {
        set_funds(env, payer.clone(), available - debit);
        set_total_funds(env, total_funds(env) - debit);
    }

    let shortfall = expense - debit;
    if shortfall > 0 {
        set_debt(env, payer.clone(), debt(env, payer) + shortfall);
    }

    env.storage()
        .instance()
        .set(&DataKey::Expenses, &(expenses(env) + expense));
}

/// Pay out accrued expenses to `receiver`. Deposits still credited to
/// accounts back future withdrawals and are never paid out; only value
/// freed by relay debits and debt settlement is. Anything not covered
/// stays outstanding.
pub fn refund(env: &Env, receiver: Address) -> i128 {
    let uncommitted = (balance(env) - total_funds(env)).max(0);
    let payout = expenses(env).min(uncommitted);

    if payout > 0 {
        token::Client::new(env, &gas_token(env)).transfer(
            &env.current_contract_address(),
            &receiver,
            &payout,
        );

        env.storage()
            .instance()
            .set(&DataKey::Expenses, &(expenses(env) - payout));
    }

    event::refund_mpc(env, receiver, payout);

    payout
}

/// Sum of all funds entries. Kept as a counter so the refund path can tell
/// how much of the held balance is still committed to depositors.
fn total_funds(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalFunds)
        .unwrap_or(0)
}

fn set_total_funds(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::TotalFunds, &amount);
}

fn set_funds(env: &Env, account: Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::Funds(account), &amount);
}

fn set_debt(env: &Env, account: Address, amount: i128) {
    if amount > 0 {
        env.storage()
            .persistent()
            .set(&DataKey::Debt(account), &amount);
    } else {
        env.storage().persistent().remove(&DataKey::Debt(account));
    }
}
