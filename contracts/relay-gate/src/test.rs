#![cfg(test)]
extern crate std;

use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::StellarAssetClient;
use soroban_sdk::{Address, Bytes, Env, String, Vec};

use crate::contract::{RelayGate, RelayGateClient};
use crate::storage_types::DataKey;

fn setup_env<'a>() -> (Env, Address, RelayGateClient<'a>) {
    let env = Env::default();
    env.mock_all_auths();

    let mpc = Address::generate(&env);
    let asset = env.register_stellar_asset_contract_v2(Address::generate(&env));
    let contract_id = env.register(RelayGate, (&mpc, &asset.address()));
    let client = RelayGateClient::new(&env, &contract_id);

    (env, mpc, client)
}

fn relay_expense(
    env: &Env,
    client: &RelayGateClient<'_>,
    mpc: &Address,
    payer: &Address,
    expense: i128,
) {
    client.any_call(
        mpc,
        payer,
        &Vec::<String>::new(env),
        &Vec::<Bytes>::new(env),
        &Vec::<u64>::new(env),
        &expense,
    );
}

#[test]
fn charge_writes_no_funds_entry_for_unfunded_payer() {
    let (env, mpc, client) = setup_env();
    let alice = Address::generate(&env);

    relay_expense(&env, &client, &mpc, &alice, 100);

    // A zero debit must not create a funds entry; the shortfall lands in
    // the payer's debt entry instead.
    env.as_contract(&client.address, || {
        assert!(!env
            .storage()
            .persistent()
            .has(&DataKey::Funds(alice.clone())));
        assert_eq!(
            env.storage()
                .persistent()
                .get::<_, i128>(&DataKey::Debt(alice.clone())),
            Some(100)
        );
    });
}

#[test]
fn settled_debt_entry_is_removed() {
    let (env, mpc, client) = setup_env();
    let alice = Address::generate(&env);

    relay_expense(&env, &client, &mpc, &alice, 100);

    StellarAssetClient::new(&env, &client.gas_token()).mint(&alice, &100);
    client.fund(&alice, &alice, &100);

    env.as_contract(&client.address, || {
        assert!(!env
            .storage()
            .persistent()
            .has(&DataKey::Debt(alice.clone())));
    });
    assert_eq!(client.debt(&alice), 0);
}
