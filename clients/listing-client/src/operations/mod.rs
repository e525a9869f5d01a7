pub mod buyout_listing;
pub mod create_listing;
pub mod get_listing;
pub mod make_bid_or_offer;

use anchor_lang::error::Error;
use anchor_lang::prelude::*;

use crate::error::ListingClientError;
use crate::service::{Frontend, MarketplaceService};
use crate::state::TransactionReceipt;
use crate::MarketplaceClient;

/// Every mutating call goes through this first. On a mismatch the wallet is
/// asked to switch exactly once and nothing is submitted.
pub(crate) fn require_network<S, F>(client: &MarketplaceClient<S, F>) -> Result<()>
where
    S: MarketplaceService,
    F: Frontend,
{
    let connected = client.frontend.chain_id();
    let expected = client.config.chain_id;

    if connected != expected {
        msg!("Network mismatch: wallet on chain {}, marketplace on chain {}", connected, expected);
        client.frontend.switch_network(expected);
        return err!(ListingClientError::WrongNetwork);
    }

    Ok(())
}

/// Logs the outcome of a user-triggered call and shows it to the user.
pub(crate) fn settle<S, F>(
    client: &MarketplaceClient<S, F>,
    action: &str,
    result: Result<TransactionReceipt>,
    success_notice: &str,
) -> Result<TransactionReceipt>
where
    S: MarketplaceService,
    F: Frontend,
{
    match result {
        Ok(receipt) => {
            msg!("{} confirmed: tx={}", action, receipt.transaction_hash);
            client.frontend.notify(success_notice);
            Ok(receipt)
        }
        Err(e) => Err(report(client, action, e)),
    }
}

pub(crate) fn report<S, F>(client: &MarketplaceClient<S, F>, action: &str, error: Error) -> Error
where
    S: MarketplaceService,
    F: Frontend,
{
    msg!("{} failed: {}", action, error);
    client.frontend.notify(&user_message(&error));
    error
}

/// The human-readable part of an error, without the error-code framing.
pub(crate) fn user_message(error: &Error) -> String {
    match error {
        Error::AnchorError(e) => e.error_msg.clone(),
        Error::ProgramError(e) => e.program_error.to_string(),
    }
}
