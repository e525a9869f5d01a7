use anchor_lang::prelude::*;

use crate::error::ListingClientError;
use crate::operations::{report, require_network, settle};
use crate::service::{Frontend, MarketplaceService};
use crate::state::{BidOrOffer, ListingView, TransactionReceipt};
use crate::types::Amount;
use crate::MarketplaceClient;

/// Offer on a direct listing, bid on an auction. Offers are paid in the
/// configured wrapped native currency; bids use the listing's own currency.
pub async fn handler<S, F>(
    client: &MarketplaceClient<S, F>,
    listing: &ListingView,
    amount: &str,
) -> Result<TransactionReceipt>
where
    S: MarketplaceService,
    F: Frontend,
{
    require_network(client)?;

    let amount = parse_amount(amount).map_err(|e| report(client, "Bid/offer", e))?;
    let action = BidOrOffer::for_listing(listing, client.config.offer_currency, amount);

    let _in_flight = client.in_flight.begin("make_bid_or_offer", &action)?;

    let result = match &action {
        BidOrOffer::Offer {
            listing_id,
            quantity,
            currency_address,
            amount,
        } => {
            msg!(
                "Making offer on listing {}: quantity={}, currency={}, amount={}",
                listing_id,
                quantity,
                currency_address,
                amount
            );
            client
                .service
                .make_offer(*listing_id, *quantity, *currency_address, amount.clone())
                .await
        }
        BidOrOffer::Bid { listing_id, amount } => {
            msg!("Making bid on listing {}: amount={}", listing_id, amount);
            client.service.make_bid(*listing_id, amount.clone()).await
        }
    };

    let notice = format!("{} created successfully!", action.label());
    settle(client, action.label(), result, &notice)
}

fn parse_amount(raw: &str) -> Result<Amount> {
    let amount: Amount = raw.parse()?;
    require!(!amount.is_zero(), ListingClientError::InvalidAmount);
    Ok(amount)
}
