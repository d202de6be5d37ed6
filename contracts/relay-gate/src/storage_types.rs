use soroban_sdk::{contracttype, Address, String};

/// Key of a relayable (source, destination chain, destination) triple.
#[contracttype]
#[derive(Clone, Debug)]
pub struct RouteKey {
    pub source: Address,
    pub chain_id: u64,
    pub dest: String,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct RouteIndexKey {
    pub source: Address,
    pub chain_id: u64,
}

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    /// Custody
    Mpc,
    PendingMpc,
    DelayMpc,
    /// Ledger
    GasToken,
    Funds(Address),
    TotalFunds,
    Debt(Address),
    Expenses,
    /// Access
    Blacklisted(Address),
    Whitelisted(RouteKey),
    WhitelistIndex(RouteIndexKey),
}
