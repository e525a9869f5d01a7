use anchor_lang::prelude::*;

use crate::operations::require_network;
use crate::service::{Frontend, MarketplaceService};
use crate::state::{ListingCreated, ListingRequest, NewListing, INDEX_ROUTE};
use crate::MarketplaceClient;

/// Submit exactly one listing-creation call for a validated request.
///
/// Direct listings go out without any reserve price; auctions always carry
/// one, defaulting to zero. Failures are logged and returned to the caller,
/// and only a confirmed listing navigates back to the index.
pub async fn handler<S, F>(
    client: &MarketplaceClient<S, F>,
    request: ListingRequest,
) -> Result<ListingCreated>
where
    S: MarketplaceService,
    F: Frontend,
{
    require_network(client)?;
    request.validate()?;

    // Keyed on intent: a resubmitted form gets a fresh start time
    let _in_flight = client.in_flight.begin("create_listing", &request.intent())?;

    let listing = request.to_new_listing();
    msg!(
        "Creating listing: marketplace={}, kind={:?}, asset={}, token_id={}, price={}",
        client.config.marketplace_address,
        listing.kind(),
        request.asset_contract_address,
        request.token_id,
        request.price
    );
    if let NewListing::Auction(params) = &listing {
        msg!("Auction reserve: {}", params.reserve_price_per_token);
    }

    let receipt = match client.service.create_listing(listing).await {
        Ok(receipt) => receipt,
        Err(e) => {
            msg!("Listing creation failed: {}", e);
            return Err(e);
        }
    };

    msg!("Listing created: tx={}", receipt.transaction_hash);
    client.frontend.navigate(INDEX_ROUTE);

    Ok(ListingCreated {
        receipt,
        redirect: INDEX_ROUTE,
    })
}
