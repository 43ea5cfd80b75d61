//! Moves tokens in and out of the contract's custody through the SEP-41
//! token interface.
//!
//! Token calls go through the `try_*` client methods so a misbehaving or
//! underfunded token surfaces as `TransferInFailed`/`TransferOutFailed`
//! instead of aborting the invocation.

use soroban_sdk::{log, token, Address, Env};

use crate::error::SwapError;

fn custody_balance(client: &token::Client, holder: &Address) -> Result<i128, SwapError> {
    match client.try_balance(holder) {
        Ok(Ok(balance)) => Ok(balance),
        _ => Err(SwapError::TransferInFailed),
    }
}

/// Pulls `amount` of `token` from `from` and returns what actually arrived.
///
/// The received amount is measured from the contract's own balance, so a
/// token that skims a fee yields less than `amount`.
pub fn transfer_in(
    env: &Env,
    token: &Address,
    from: &Address,
    amount: i128,
) -> Result<i128, SwapError> {
    let client = token::Client::new(env, token);
    let this = env.current_contract_address();

    let before = custody_balance(&client, &this)?;
    if !matches!(client.try_transfer(from, &this, &amount), Ok(Ok(()))) {
        log!(env, "transfer in failed", token, from, amount);
        return Err(SwapError::TransferInFailed);
    }
    let after = custody_balance(&client, &this)?;

    let received = after
        .checked_sub(before)
        .ok_or(SwapError::TransferInFailed)?;
    if received <= 0 {
        log!(env, "transfer in delivered nothing", token, from, amount);
        return Err(SwapError::TransferInFailed);
    }
    Ok(received)
}

pub fn transfer_out(
    env: &Env,
    token: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), SwapError> {
    let client = token::Client::new(env, token);
    match client.try_transfer(&env.current_contract_address(), to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "transfer out failed", token, to, amount);
            Err(SwapError::TransferOutFailed)
        }
    }
}
