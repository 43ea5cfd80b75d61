//! Lifecycle events. Topics carry the kind and the three parties so indexers
//! can filter by token, creator or recipient; the identifier is always in the data.

use soroban_sdk::{symbol_short, BytesN, Env, Symbol};

use crate::types::Lock;

pub const CREATE: Symbol = symbol_short!("create");
pub const UNLOCK: Symbol = symbol_short!("unlock");
pub const DECLINE: Symbol = symbol_short!("decline");
pub const RETRIEVE: Symbol = symbol_short!("retrieve");

fn publish_terminal(env: &Env, kind: Symbol, lock_id: &BytesN<32>, lock: &Lock) {
    env.events().publish(
        (kind, lock.token.clone(), lock.creator.clone(), lock.recipient.clone()),
        lock_id.clone(),
    );
}

pub fn created(env: &Env, lock_id: &BytesN<32>, lock: &Lock) {
    env.events().publish(
        (CREATE, lock.token.clone(), lock.creator.clone(), lock.recipient.clone()),
        (
            lock_id.clone(),
            lock.hashed_secret.clone(),
            lock.timeout,
            lock.value,
            lock.terms.clone(),
        ),
    );
}

/// The secret goes out in the clear; a paired leg unlocks with the same value.
pub fn unlocked(env: &Env, lock_id: &BytesN<32>, lock: &Lock, secret: &BytesN<32>) {
    env.events().publish(
        (UNLOCK, lock.token.clone(), lock.creator.clone(), lock.recipient.clone()),
        (lock_id.clone(), secret.clone()),
    );
}

pub fn declined(env: &Env, lock_id: &BytesN<32>, lock: &Lock) {
    publish_terminal(env, DECLINE, lock_id, lock);
}

pub fn retrieved(env: &Env, lock_id: &BytesN<32>, lock: &Lock) {
    publish_terminal(env, RETRIEVE, lock_id, lock);
}
