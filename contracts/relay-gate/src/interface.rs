use soroban_sdk::{contractclient, Address, Bytes, Env, String, Vec};

use crate::error::ContractError;

#[contractclient(name = "RelayGateClient")]
pub trait RelayGateInterface {
    /// Deposit gas tokens for `beneficiary`, paid by `spender`.
    ///
    /// # Notes
    /// - The `beneficiary` does not have to be the `spender`; prepaying for
    ///   another account is supported.
    /// - A zero amount is accepted and credits nothing.
    /// - The deposit first settles the beneficiary's relay debt; only the
    ///   remainder becomes withdrawable credit.
    fn fund(
        env: Env,
        spender: Address,
        beneficiary: Address,
        amount: i128,
    ) -> Result<(), ContractError>;

    /// Withdraw part of `account`'s unspent deposit back to the account.
    fn withdraw(env: Env, account: Address, amount: i128) -> Result<(), ContractError>;

    /// Relay a batch of cross-chain calls on behalf of `from`.
    ///
    /// Only callable by the active mpc. Every (from, chain, destination)
    /// route must be whitelisted and `from` must not be blacklisted.
    /// `expense` is the execution cost reported by the relayer; it accrues
    /// to the mpc and is debited from `from`'s deposit, saturating at zero
    /// with the shortfall booked as `from`'s debt.
    fn any_call(
        env: Env,
        operator: Address,
        from: Address,
        to: Vec<String>,
        data: Vec<Bytes>,
        to_chain_ids: Vec<u64>,
        expense: i128,
    ) -> Result<(), ContractError>;

    /// Pay out accrued relay expenses to the active mpc, capped by the
    /// held balance not committed to depositors. The remainder stays
    /// outstanding.
    ///
    /// Only callable by the active mpc.
    fn refund_mpc(env: Env, operator: Address) -> Result<i128, ContractError>;

    /// Request a timelocked rotation of the active mpc.
    ///
    /// Only callable by the active mpc. A new request overwrites a pending
    /// one and restarts the delay.
    fn change_mpc(env: Env, operator: Address, new_mpc: Address) -> Result<(), ContractError>;

    /// Complete a rotation once its delay has elapsed.
    ///
    /// Only callable by the pending mpc.
    fn apply_mpc(env: Env, operator: Address) -> Result<(), ContractError>;

    /// Overwrite the blacklist flag of an account.
    ///
    /// Only callable by the active mpc.
    fn set_blacklist(
        env: Env,
        operator: Address,
        account: Address,
        flag: bool,
    ) -> Result<(), ContractError>;

    /// Flip the whitelist flag of a (source, chain, destination) route.
    /// Writing the value the flag already holds is rejected.
    ///
    /// Only callable by the active mpc.
    fn set_whitelist(
        env: Env,
        operator: Address,
        source: Address,
        chain_id: u64,
        dest: String,
        flag: bool,
    ) -> Result<(), ContractError>;

    fn mpc(env: &Env) -> Address;

    fn pending_mpc(env: &Env) -> Option<Address>;

    /// Unlock timestamp of the in-flight rotation, 0 when none is pending.
    fn delay_mpc(env: &Env) -> u64;

    fn is_blacklisted(env: &Env, account: Address) -> bool;

    fn is_in_whitelist(env: &Env, source: Address, chain_id: u64, dest: String) -> bool;

    /// Number of currently whitelisted destinations for (source, chain).
    fn whitelist_length(env: &Env, source: Address, chain_id: u64) -> u32;

    /// Whitelisted destination at `index` for (source, chain).
    fn whitelist_at(
        env: &Env,
        source: Address,
        chain_id: u64,
        index: u32,
    ) -> Result<String, ContractError>;

    fn funds(env: &Env, account: Address) -> i128;

    /// Relay expense charged to `account` beyond its deposits. Settled out
    /// of the account's future deposits before they credit.
    fn debt(env: &Env, account: Address) -> i128;

    fn expenses(env: &Env) -> i128;

    /// Gas token balance held by the contract.
    fn balance(env: &Env) -> i128;

    fn gas_token(env: &Env) -> Address;
}
