use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SwapError {
    /// A live lock already uses the derived identifier
    LockAlreadyExists = 1,
    /// No live lock matches the derived identifier
    LockNotFound = 2,
    /// Retrieve attempted before the deadline
    LockNotTimedOut = 3,
    /// Unlock attempted at or after the deadline
    LockTimedOut = 4,
    /// Caller is not the party the lock names for this operation
    Unauthorized = 5,
    TransferInFailed = 6,
    TransferOutFailed = 7,
    InvalidValue = 8,
    InvalidTimeout = 9,
}
