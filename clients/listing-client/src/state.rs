use anchor_lang::prelude::*;
use serde::{Deserialize, Serialize};
use solana_program::clock::UnixTimestamp;

use crate::error::ListingClientError;
use crate::types::{Address, Amount, ListingId};

/// One week, the lifetime of every listing created through this client.
pub const DEFAULT_LISTING_DURATION_SECS: u64 = 60 * 60 * 24 * 7;

/// Listings always offer a single token.
pub const LISTING_QUANTITY: u64 = 1;

/// Placeholder address the marketplace contract reads as "the chain's native currency".
pub const NATIVE_TOKEN_ADDRESS: Address = Address::new([0xee; 20]);

/// Route the user is sent to after a listing is created.
pub const INDEX_ROUTE: &str = "/";

pub fn listing_route(id: ListingId) -> String {
    format!("/listing/{}", id)
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ListingKind {
    Direct,  // Fixed buyout price, accepts offers
    Auction, // Accepts bids until it closes, optional reserve
}

/// Listing parameters as validated at submission time.
/// Consumed once by `create_listing`, never stored.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Eq, Debug)]
pub struct ListingRequest {
    pub asset_contract_address: Address,
    pub token_id: String,
    pub kind: ListingKind,
    pub price: Amount,
    pub reserve_price: Option<Amount>, // Auctions only
    pub currency_address: Address,
    pub duration_secs: u64,
    pub quantity: u64,
    pub start_time: UnixTimestamp,
}

impl ListingRequest {
    pub fn validate(&self) -> Result<()> {
        require!(
            !self.token_id.is_empty() && self.token_id.bytes().all(|b| b.is_ascii_digit()),
            ListingClientError::InvalidTokenId
        );
        require!(self.quantity >= 1, ListingClientError::InvalidQuantity);
        require!(self.duration_secs > 0, ListingClientError::InvalidDuration);
        require!(!self.price.is_zero(), ListingClientError::InvalidPrice);

        if let Some(reserve) = &self.reserve_price {
            require!(
                reserve.numeric_cmp(&self.price).is_le(),
                ListingClientError::InvalidPrice
            );
        }

        Ok(())
    }

    /// What the user asked for, without the submission time. Two requests
    /// with the same intent are the same listing, whenever they were built.
    pub fn intent(&self) -> ListingIntent {
        ListingIntent {
            asset_contract_address: self.asset_contract_address,
            token_id: self.token_id.clone(),
            kind: self.kind,
            price: self.price.clone(),
            reserve_price: self.reserve_price.clone(),
            currency_address: self.currency_address,
            duration_secs: self.duration_secs,
            quantity: self.quantity,
        }
    }

    /// Wire parameters for the marketplace's `create_listing`.
    pub fn to_new_listing(&self) -> NewListing {
        match self.kind {
            ListingKind::Direct => NewListing::Direct(DirectListingParams {
                asset_contract_address: self.asset_contract_address,
                token_id: self.token_id.clone(),
                buyout_price_per_token: self.price.clone(),
                currency_contract_address: self.currency_address,
                listing_duration_in_seconds: self.duration_secs,
                quantity: self.quantity,
                start_timestamp: self.start_time,
            }),
            ListingKind::Auction => NewListing::Auction(AuctionListingParams {
                asset_contract_address: self.asset_contract_address,
                token_id: self.token_id.clone(),
                buyout_price_per_token: self.price.clone(),
                reserve_price_per_token: self.reserve_price.clone().unwrap_or_else(Amount::zero),
                currency_contract_address: self.currency_address,
                listing_duration_in_seconds: self.duration_secs,
                quantity: self.quantity,
                start_timestamp: self.start_time,
            }),
        }
    }
}

/// The parts of a `ListingRequest` that identify a submission.
#[derive(AnchorSerialize, Clone, PartialEq, Eq, Debug)]
pub struct ListingIntent {
    pub asset_contract_address: Address,
    pub token_id: String,
    pub kind: ListingKind,
    pub price: Amount,
    pub reserve_price: Option<Amount>,
    pub currency_address: Address,
    pub duration_secs: u64,
    pub quantity: u64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Eq, Debug)]
pub struct DirectListingParams {
    pub asset_contract_address: Address,
    pub token_id: String,
    pub buyout_price_per_token: Amount,
    pub currency_contract_address: Address,
    pub listing_duration_in_seconds: u64,
    pub quantity: u64,
    pub start_timestamp: UnixTimestamp,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Eq, Debug)]
pub struct AuctionListingParams {
    pub asset_contract_address: Address,
    pub token_id: String,
    pub buyout_price_per_token: Amount,
    pub reserve_price_per_token: Amount, // Minimum acceptable bid
    pub currency_contract_address: Address,
    pub listing_duration_in_seconds: u64,
    pub quantity: u64,
    pub start_timestamp: UnixTimestamp,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Eq, Debug)]
pub enum NewListing {
    Direct(DirectListingParams),
    Auction(AuctionListingParams),
}

impl NewListing {
    pub fn kind(&self) -> ListingKind {
        match self {
            NewListing::Direct(_) => ListingKind::Direct,
            NewListing::Auction(_) => ListingKind::Auction,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetMetadata {
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyValue {
    pub display_value: String,
    pub symbol: String,
}

/// Listing as reported by the marketplace. Read-only on the client;
/// a refetch replaces it wholesale.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingView {
    pub id: ListingId,
    pub kind: ListingKind,
    pub seller_address: Address,
    pub asset_contract_address: Address,
    pub token_id: String,
    pub asset: AssetMetadata,
    pub buyout_price: CurrencyValue,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Eq, Debug)]
pub enum BidOrOffer {
    Offer {
        listing_id: ListingId,
        quantity: u64,
        currency_address: Address,
        amount: Amount,
    },
    Bid {
        listing_id: ListingId,
        amount: Amount,
    },
}

impl BidOrOffer {
    pub fn for_listing(listing: &ListingView, offer_currency: Address, amount: Amount) -> Self {
        match listing.kind {
            ListingKind::Direct => BidOrOffer::Offer {
                listing_id: listing.id,
                quantity: LISTING_QUANTITY,
                currency_address: offer_currency,
                amount,
            },
            ListingKind::Auction => BidOrOffer::Bid {
                listing_id: listing.id,
                amount,
            },
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BidOrOffer::Offer { .. } => "Offer",
            BidOrOffer::Bid { .. } => "Bid",
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub transaction_hash: String,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ListingCreated {
    pub receipt: TransactionReceipt,
    pub redirect: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    fn auction_request() -> ListingRequest {
        ListingRequest {
            asset_contract_address: Address::new([0xab; 20]),
            token_id: "42".to_string(),
            kind: ListingKind::Auction,
            price: "10".parse().unwrap(),
            reserve_price: None,
            currency_address: NATIVE_TOKEN_ADDRESS,
            duration_secs: DEFAULT_LISTING_DURATION_SECS,
            quantity: LISTING_QUANTITY,
            start_time: 0,
        }
    }

    #[test]
    fn request_invariants() {
        assert!(auction_request().validate().is_ok());

        let cases = [
            (ListingRequest { quantity: 0, ..auction_request() }, ListingClientError::InvalidQuantity),
            (ListingRequest { duration_secs: 0, ..auction_request() }, ListingClientError::InvalidDuration),
            (ListingRequest { token_id: "0x1".to_string(), ..auction_request() }, ListingClientError::InvalidTokenId),
            (
                ListingRequest { reserve_price: Some("10.01".parse().unwrap()), ..auction_request() },
                ListingClientError::InvalidPrice,
            ),
        ];
        for (request, expected) in cases {
            assert_eq!(request.validate().unwrap_err(), Error::from(expected));
        }
    }

    #[test]
    fn direct_params_drop_reserve() {
        let request = ListingRequest {
            kind: ListingKind::Direct,
            reserve_price: Some("1".parse().unwrap()),
            ..auction_request()
        };
        match request.to_new_listing() {
            NewListing::Direct(params) => {
                assert_eq!(params.buyout_price_per_token.as_str(), "10");
                assert_eq!(params.quantity, 1);
            }
            other => panic!("expected direct params, got {:?}", other),
        }
    }

    #[test]
    fn intent_ignores_start_time() {
        let first = auction_request();
        let later = ListingRequest { start_time: 1_700_000_000, ..auction_request() };
        let cheaper = ListingRequest { price: "9".parse().unwrap(), ..auction_request() };

        assert_eq!(first.intent(), later.intent());
        assert_eq!(first.intent().try_to_vec().unwrap(), later.intent().try_to_vec().unwrap());
        assert_ne!(first.intent(), cheaper.intent());
    }

    #[test]
    fn listing_route_uses_id() {
        assert_eq!(listing_route(ListingId(5)), "/listing/5");
    }
}
