//! Lock registry over persistent storage.
//!
//! Callers always go through `ensure_vacant`/`get` before `insert`/`remove` within the
//! same invocation; the host runs an invocation as one transaction, so nothing
//! can observe the registry between those steps.

use soroban_sdk::{BytesN, Env};

use crate::error::SwapError;
use crate::types::{DataKey, Lock};

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const LOCK_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const LOCK_LIFETIME_THRESHOLD: u32 = LOCK_BUMP_AMOUNT - DAY_IN_LEDGERS;

fn key(lock_id: &BytesN<32>) -> DataKey {
    DataKey::Lock(lock_id.clone())
}

pub fn exists(env: &Env, lock_id: &BytesN<32>) -> bool {
    env.storage().persistent().has(&key(lock_id))
}

pub fn get(env: &Env, lock_id: &BytesN<32>) -> Result<Lock, SwapError> {
    env.storage()
        .persistent()
        .get(&key(lock_id))
        .ok_or(SwapError::LockNotFound)
}

/// Fails if a live lock already holds `lock_id`. Run before custody moves.
pub fn ensure_vacant(env: &Env, lock_id: &BytesN<32>) -> Result<(), SwapError> {
    if exists(env, lock_id) {
        return Err(SwapError::LockAlreadyExists);
    }
    Ok(())
}

/// Stores a lock under an identifier that passed `ensure_vacant` earlier in
/// the same invocation.
pub fn insert(env: &Env, lock_id: &BytesN<32>, lock: &Lock) {
    let key = key(lock_id);
    env.storage().persistent().set(&key, lock);
    env.storage()
        .persistent()
        .extend_ttl(&key, LOCK_LIFETIME_THRESHOLD, LOCK_BUMP_AMOUNT);
}

pub fn remove(env: &Env, lock_id: &BytesN<32>) -> Result<(), SwapError> {
    if !exists(env, lock_id) {
        return Err(SwapError::LockNotFound);
    }
    env.storage().persistent().remove(&key(lock_id));
    Ok(())
}

/// Keeps a live entry from being archived. The record itself is untouched.
pub fn extend_ttl(env: &Env, lock_id: &BytesN<32>) -> Result<(), SwapError> {
    if !exists(env, lock_id) {
        return Err(SwapError::LockNotFound);
    }
    env.storage()
        .persistent()
        .extend_ttl(&key(lock_id), LOCK_LIFETIME_THRESHOLD, LOCK_BUMP_AMOUNT);
    Ok(())
}
