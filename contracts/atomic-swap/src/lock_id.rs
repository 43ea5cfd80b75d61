//! Lock identifiers and secret commitments.
//!
//! A lock is addressed by `keccak256(xdr([token, creator, hashed_secret, timeout]))`.
//! Recipient and value are left out on purpose so the counter-leg of a paired
//! trade can quote this identifier before its own recipient is fixed.

use soroban_sdk::{xdr::ToXdr, Address, Bytes, BytesN, Env};

/// keccak256 over the 32 secret bytes, matching `keccak256(abi.encode(bytes32))`
/// on an EVM counter-leg.
pub fn hash_secret(env: &Env, secret: &BytesN<32>) -> BytesN<32> {
    let preimage: Bytes = secret.clone().into();
    env.crypto().keccak256(&preimage).into()
}

pub fn derive(
    env: &Env,
    token: &Address,
    creator: &Address,
    hashed_secret: &BytesN<32>,
    timeout: u64,
) -> BytesN<32> {
    let key = (
        token.clone(),
        creator.clone(),
        hashed_secret.clone(),
        timeout,
    )
        .to_xdr(env);
    env.crypto().keccak256(&key).into()
}
