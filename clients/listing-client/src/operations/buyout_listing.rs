use anchor_lang::prelude::*;

use crate::operations::{require_network, settle};
use crate::service::{Frontend, MarketplaceService};
use crate::state::{TransactionReceipt, LISTING_QUANTITY};
use crate::types::ListingId;
use crate::MarketplaceClient;

pub const PURCHASE_NOTICE: &str = "NFT bought successfully!";

/// Buy one token of the listing at its buyout price, whatever its kind.
pub async fn handler<S, F>(
    client: &MarketplaceClient<S, F>,
    id: ListingId,
) -> Result<TransactionReceipt>
where
    S: MarketplaceService,
    F: Frontend,
{
    require_network(client)?;

    let _in_flight = client.in_flight.begin("buyout_listing", &id)?;

    msg!("Buying out listing {}: quantity={}", id, LISTING_QUANTITY);
    let result = client.service.buyout_listing(id, LISTING_QUANTITY).await;

    settle(client, "Buyout", result, PURCHASE_NOTICE)
}
