#![allow(dead_code)]

use relay_gate::contract::{RelayGate, RelayGateClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env};

pub fn setup_env<'a>() -> (Env, Address, RelayGateClient<'a>) {
    let env = Env::default();
    env.budget().reset_unlimited();
    env.mock_all_auths();

    let mpc = Address::generate(&env);
    let asset = env.register_stellar_asset_contract_v2(Address::generate(&env));
    let contract_id = env.register(RelayGate, (&mpc, &asset.address()));
    let client = RelayGateClient::new(&env, &contract_id);

    (env, mpc, client)
}

pub fn token_client<'a>(env: &Env, client: &RelayGateClient) -> TokenClient<'a> {
    TokenClient::new(env, &client.gas_token())
}

pub fn mint(env: &Env, client: &RelayGateClient, to: &Address, amount: i128) {
    StellarAssetClient::new(env, &client.gas_token()).mint(to, &amount);
}
