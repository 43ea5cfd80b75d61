//! Hash-time-locked escrow for swapping fungible tokens without an intermediary.
//!
//! A creator locks tokens against the hash of a secret and a deadline. Before the
//! deadline the named recipient can claim them by revealing the secret, or decline
//! them at any time. Once the deadline passes the creator can take them back.
//!
//! Locks are addressed by an identifier derived from
//! `(token, creator, hashed_secret, timeout)`, never by a handle handed out by the
//! contract, so claiming a lock requires knowing its secret.

#![no_std]
use soroban_sdk::{contract, contractimpl, log, Address, BytesN, Env, U256};

mod custody;
mod error;
mod events;
mod lock_id;
mod registry;
mod types;

pub use error::SwapError;
pub use types::{BuyTerms, Lock, LockTerms, SellTerms};

#[cfg(test)]
mod testutils;


#[contract]
pub struct AtomicSwap;

#[allow(clippy::too_many_arguments)]
fn create(
    env: &Env,
    creator: Address,
    token: Address,
    recipient: Address,
    hashed_secret: BytesN<32>,
    timeout: u64,
    value: i128,
    terms: LockTerms,
) -> Result<BytesN<32>, SwapError> {
    creator.require_auth();

    if value <= 0 {
        return Err(SwapError::InvalidValue);
    }
    if timeout == 0 {
        return Err(SwapError::InvalidTimeout);
    }
    let deadline = env
        .ledger()
        .timestamp()
        .checked_add(timeout)
        .ok_or(SwapError::InvalidTimeout)?;

    let lock_id = lock_id::derive(env, &token, &creator, &hashed_secret, deadline);
    registry::ensure_vacant(env, &lock_id).inspect_err(|_| {
        log!(env, "lock already exists", lock_id.clone());
    })?;

    let received = custody::transfer_in(env, &token, &creator, value)?;

    let lock = Lock {
        token,
        creator,
        recipient,
        hashed_secret,
        timeout: deadline,
        value: received,
        terms,
    };
    registry::insert(env, &lock_id, &lock);
    events::created(env, &lock_id, &lock);
    log!(env, "lock created", lock_id, received, deadline);

    Ok(lock_id)
}

fn live_lock(env: &Env, lock_id: &BytesN<32>) -> Result<Lock, SwapError> {
    registry::get(env, lock_id).inspect_err(|_| {
        log!(env, "no live lock", lock_id.clone());
    })
}

#[contractimpl]
impl AtomicSwap {
    /// Locks `value` of `token` for `recipient` on the buy side of a trade.
    ///
    /// `timeout` is a duration in seconds; the stored deadline is the current
    /// ledger timestamp plus `timeout`. Returns the lock identifier.
    #[allow(clippy::too_many_arguments)]
    pub fn lock_buy(
        env: Env,
        creator: Address,
        token: Address,
        recipient: Address,
        hashed_secret: BytesN<32>,
        timeout: u64,
        value: i128,
        sell_asset_id: U256,
        sell_price: U256,
    ) -> Result<BytesN<32>, SwapError> {
        let terms = LockTerms::Buy(BuyTerms {
            sell_asset_id,
            sell_price,
        });
        create(&env, creator, token, recipient, hashed_secret, timeout, value, terms)
    }

    /// Same as [`Self::lock_buy`] for the sell side; `buy_lock_id` references
    /// the paired buy leg.
    #[allow(clippy::too_many_arguments)]
    pub fn lock_sell(
        env: Env,
        creator: Address,
        token: Address,
        recipient: Address,
        hashed_secret: BytesN<32>,
        timeout: u64,
        value: i128,
        buy_asset_id: U256,
        buy_lock_id: BytesN<32>,
    ) -> Result<BytesN<32>, SwapError> {
        let terms = LockTerms::Sell(SellTerms {
            buy_asset_id,
            buy_lock_id,
        });
        create(&env, creator, token, recipient, hashed_secret, timeout, value, terms)
    }

    /// Claims a lock by revealing its secret. Only the recipient may claim, and
    /// only strictly before the deadline.
    ///
    /// A wrong secret, creator or timeout all derive an identifier with no
    /// record behind it and fail the same way, with `LockNotFound`.
    pub fn unlock(
        env: Env,
        caller: Address,
        token: Address,
        creator: Address,
        secret: BytesN<32>,
        timeout: u64,
    ) -> Result<(), SwapError> {
        caller.require_auth();

        let hashed_secret = lock_id::hash_secret(&env, &secret);
        let lock_id = lock_id::derive(&env, &token, &creator, &hashed_secret, timeout);
        let lock = live_lock(&env, &lock_id)?;

        if env.ledger().timestamp() >= lock.timeout {
            log!(&env, "unlock after deadline", lock_id);
            return Err(SwapError::LockTimedOut);
        }
        if caller != lock.recipient {
            return Err(SwapError::Unauthorized);
        }

        custody::transfer_out(&env, &lock.token, &caller, lock.value)?;
        registry::remove(&env, &lock_id)?;
        events::unlocked(&env, &lock_id, &lock, &secret);
        log!(&env, "lock unlocked", lock_id);

        Ok(())
    }

    /// Recipient refuses a lock and sends the value back to its creator. Allowed
    /// at any time, before or after the deadline.
    pub fn decline(
        env: Env,
        caller: Address,
        token: Address,
        creator: Address,
        hashed_secret: BytesN<32>,
        timeout: u64,
    ) -> Result<(), SwapError> {
        caller.require_auth();

        let lock_id = lock_id::derive(&env, &token, &creator, &hashed_secret, timeout);
        let lock = live_lock(&env, &lock_id)?;

        if caller != lock.recipient {
            return Err(SwapError::Unauthorized);
        }

        custody::transfer_out(&env, &lock.token, &lock.creator, lock.value)?;
        registry::remove(&env, &lock_id)?;
        events::declined(&env, &lock_id, &lock);
        log!(&env, "lock declined", lock_id);

        Ok(())
    }

    /// Creator takes back an expired lock. The caller is the presumed creator
    /// when deriving the identifier. `recipient` is informational only.
    pub fn retrieve(
        env: Env,
        caller: Address,
        token: Address,
        recipient: Address,
        hashed_secret: BytesN<32>,
        timeout: u64,
    ) -> Result<(), SwapError> {
        caller.require_auth();

        let lock_id = lock_id::derive(&env, &token, &caller, &hashed_secret, timeout);
        let lock = live_lock(&env, &lock_id)?;

        if caller != lock.creator {
            return Err(SwapError::Unauthorized);
        }
        if env.ledger().timestamp() < lock.timeout {
            log!(&env, "retrieve before deadline", lock_id, recipient);
            return Err(SwapError::LockNotTimedOut);
        }

        custody::transfer_out(&env, &lock.token, &caller, lock.value)?;
        registry::remove(&env, &lock_id)?;
        events::retrieved(&env, &lock_id, &lock);
        log!(&env, "lock retrieved", lock_id);

        Ok(())
    }

    /// Amount held by a live lock.
    pub fn value_of(env: Env, lock_id: BytesN<32>) -> Result<i128, SwapError> {
        registry::get(&env, &lock_id).map(|lock| lock.value)
    }

    pub fn get_lock(env: Env, lock_id: BytesN<32>) -> Option<Lock> {
        registry::get(&env, &lock_id).ok()
    }

    /// Identifier a lock with these key fields has, or would have. `timeout` is
    /// the absolute deadline, not the duration passed at creation.
    pub fn derive_lock_id(
        env: Env,
        token: Address,
        creator: Address,
        hashed_secret: BytesN<32>,
        timeout: u64,
    ) -> BytesN<32> {
        lock_id::derive(&env, &token, &creator, &hashed_secret, timeout)
    }

    pub fn hash_secret(env: Env, secret: BytesN<32>) -> BytesN<32> {
        lock_id::hash_secret(&env, &secret)
    }

    pub fn extend_lock_ttl(env: Env, lock_id: BytesN<32>) -> Result<(), SwapError> {
        registry::extend_ttl(&env, &lock_id)
    }
}
