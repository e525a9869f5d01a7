use anchor_lang::prelude::*;

use crate::service::{Frontend, MarketplaceService};
use crate::state::ListingView;
use crate::types::ListingId;
use crate::MarketplaceClient;

pub async fn handler<S, F>(
    client: &MarketplaceClient<S, F>,
    id: ListingId,
) -> Result<Option<ListingView>>
where
    S: MarketplaceService,
    F: Frontend,
{
    let listing = match client.service.get_listing(id).await {
        Ok(listing) => listing,
        Err(e) => {
            msg!("Fetching listing {} failed: {}", id, e);
            return Err(e);
        }
    };

    match &listing {
        Some(l) => msg!(
            "Listing {} loaded: kind={:?}, seller={}, buyout={} {}",
            id,
            l.kind,
            l.seller_address,
            l.buyout_price.display_value,
            l.buyout_price.symbol
        ),
        None => msg!("Listing {} not found", id),
    }

    Ok(listing)
}
