#![cfg(test)]

use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, testutils::Address as _, token, Address,
    BytesN, Env,
};

use crate::{AtomicSwap, AtomicSwapClient};

pub fn create_token<'a>(
    env: &Env,
    admin: &Address,
) -> (token::Client<'a>, token::StellarAssetClient<'a>) {
    let sac = env.register_stellar_asset_contract_v2(admin.clone());
    (
        token::Client::new(env, &sac.address()),
        token::StellarAssetClient::new(env, &sac.address()),
    )
}

pub fn create_swap<'a>(env: &Env) -> AtomicSwapClient<'a> {
    let contract_id = env.register(AtomicSwap, ());
    AtomicSwapClient::new(env, &contract_id)
}

pub fn create_mock_token<'a>(env: &Env) -> MockTokenClient<'a> {
    let contract_id = env.register(MockToken, ());
    MockTokenClient::new(env, &contract_id)
}

pub fn secret(env: &Env, fill: u8) -> BytesN<32> {
    BytesN::from_array(env, &[fill; 32])
}

pub fn generate_parties(env: &Env) -> (Address, Address, Address) {
    (
        Address::generate(env),
        Address::generate(env),
        Address::generate(env),
    )
}

#[contracttype]
enum MockKey {
    Balance(Address),
    Frozen(Address),
    Fee,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MockTokenError {
    Frozen = 1,
    InsufficientBalance = 2,
}

/// Minimal SEP-41 subset with failure injection: transfers touching a frozen
/// address fail, and a flat fee is withheld from every transfer.
#[contract]
pub struct MockToken;

fn read_balance(env: &Env, id: &Address) -> i128 {
    env.storage()
        .instance()
        .get(&MockKey::Balance(id.clone()))
        .unwrap_or(0)
}

fn is_frozen(env: &Env, id: &Address) -> bool {
    env.storage()
        .instance()
        .get(&MockKey::Frozen(id.clone()))
        .unwrap_or(false)
}

#[contractimpl]
impl MockToken {
    pub fn mint(env: Env, to: Address, amount: i128) {
        let balance = read_balance(&env, &to);
        env.storage()
            .instance()
            .set(&MockKey::Balance(to), &(balance + amount));
    }

    pub fn set_frozen(env: Env, id: Address, frozen: bool) {
        env.storage().instance().set(&MockKey::Frozen(id), &frozen);
    }

    pub fn set_fee(env: Env, fee: i128) {
        env.storage().instance().set(&MockKey::Fee, &fee);
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        read_balance(&env, &id)
    }

    pub fn transfer(
        env: Env,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), MockTokenError> {
        from.require_auth();

        if is_frozen(&env, &from) || is_frozen(&env, &to) {
            return Err(MockTokenError::Frozen);
        }
        let from_balance = read_balance(&env, &from);
        if from_balance < amount {
            return Err(MockTokenError::InsufficientBalance);
        }
        let fee: i128 = env.storage().instance().get(&MockKey::Fee).unwrap_or(0);

        env.storage()
            .instance()
            .set(&MockKey::Balance(from.clone()), &(from_balance - amount));
        let to_balance = read_balance(&env, &to);
        env.storage()
            .instance()
            .set(&MockKey::Balance(to), &(to_balance + amount - fee));
        Ok(())
    }
}
