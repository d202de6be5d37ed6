#![no_std]

pub mod error;

mod interface;

cfg_if::cfg_if! {
    if #[cfg(feature = "library")] {
        pub use interface::{RelayGateClient, RelayGateInterface};
    } else {
        mod access;
        mod custody;
        mod event;
        mod ledger;
        mod storage_types;

        pub mod contract;
        pub use contract::{RelayGate, RelayGateClient};

        #[cfg(test)]
        mod test;
    }
}
