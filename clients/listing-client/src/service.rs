#![allow(async_fn_in_trait)]

use anchor_lang::prelude::*;

use crate::state::{ListingView, NewListing, TransactionReceipt};
use crate::types::{Address, Amount, ChainId, ListingId};

/// The external marketplace contract, reached through its client SDK.
///
/// Listing storage, bidding rules, escrow and payouts all live behind this
/// trait. Implementations report rejected transactions, reverts and
/// connectivity loss as errors; the client never retries.
pub trait MarketplaceService {
    async fn create_listing(&self, listing: NewListing) -> Result<TransactionReceipt>;

    /// `Ok(None)` when no listing exists under `id`.
    async fn get_listing(&self, id: ListingId) -> Result<Option<ListingView>>;

    async fn make_offer(
        &self,
        id: ListingId,
        quantity: u64,
        currency: Address,
        amount: Amount,
    ) -> Result<TransactionReceipt>;

    async fn make_bid(&self, id: ListingId, amount: Amount) -> Result<TransactionReceipt>;

    async fn buyout_listing(&self, id: ListingId, quantity: u64) -> Result<TransactionReceipt>;
}

/// Side effects the client asks of whatever is presenting it: the wallet's
/// network, page navigation and blocking notices.
pub trait Frontend {
    /// Chain the connected wallet is currently on.
    fn chain_id(&self) -> ChainId;

    fn switch_network(&self, chain_id: ChainId);

    fn navigate(&self, route: &str);

    fn notify(&self, message: &str);
}
