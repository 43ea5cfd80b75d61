use soroban_sdk::{contracttype, Address, BytesN, U256};

/// Storage keys. Each live lock occupies one persistent entry.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Lock(BytesN<32>),
}

/// Marketplace side data attached to a buy leg. Never interpreted by the contract.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BuyTerms {
    pub sell_asset_id: U256,
    pub sell_price: U256,
}

/// Marketplace side data attached to a sell leg. `buy_lock_id` points at the
/// paired buy leg, possibly on another ledger.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SellTerms {
    pub buy_asset_id: U256,
    pub buy_lock_id: BytesN<32>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LockTerms {
    Buy(BuyTerms),
    Sell(SellTerms),
}

/// An escrowed deposit waiting to be unlocked, declined or retrieved.
///
/// The record never changes after insertion: every terminal operation
/// removes it instead of updating it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Lock {
    pub token: Address,
    pub creator: Address,
    pub recipient: Address,
    /// keccak256 of the 32-byte secret
    pub hashed_secret: BytesN<32>,
    /// Absolute deadline, ledger timestamp in seconds
    pub timeout: u64,
    /// Amount held in custody, in the token's smallest unit
    pub value: i128,
    pub terms: LockTerms,
}
