use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    /// Custody
    NotMpc = 1,
    NotPendingMpc = 2,
    NoPendingRotation = 3,
    RotationDelayNotElapsed = 4,
    /// Access
    NoChange = 5,
    IndexOutOfRange = 6,
    RouteNotAllowed = 7,
    /// Ledger
    InvalidAmount = 8,
    InsufficientFunds = 9,
    LengthMismatch = 10,
}
