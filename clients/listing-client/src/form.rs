use anchor_lang::prelude::*;
use serde::{Deserialize, Serialize};
use solana_program::clock::UnixTimestamp;

use crate::config::MarketplaceConfig;
use crate::error::ListingClientError;
use crate::state::{ListingKind, ListingRequest, LISTING_QUANTITY};
use crate::types::{Address, Amount};

/// Value of the form's `listingType` radio group.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ListingType {
    #[serde(rename = "directListing")]
    Direct,
    #[serde(rename = "auctionListing")]
    Auction,
}

impl From<ListingType> for ListingKind {
    fn from(listing_type: ListingType) -> Self {
        match listing_type {
            ListingType::Direct => ListingKind::Direct,
            ListingType::Auction => ListingKind::Auction,
        }
    }
}

/// Fields of the "create listing" form, as submitted.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingForm {
    pub listing_type: ListingType,
    pub contract_address: String,
    pub token_id: String,
    pub price: String,
    #[serde(default)]
    pub reserve_price: Option<String>,
}

impl ListingForm {
    /// Parses a submitted form payload. Unknown listing types and missing
    /// fields are rejected here, before any field is interpreted.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| {
            msg!("Invalid listing form: {}", e);
            anchor_lang::error::Error::from(ListingClientError::InvalidForm)
        })
    }

    /// Validates every field and fills in the fixed listing parameters.
    pub fn into_request(
        self,
        config: &MarketplaceConfig,
        start_time: UnixTimestamp,
    ) -> Result<ListingRequest> {
        let kind = ListingKind::from(self.listing_type);
        let asset_contract_address: Address = self.contract_address.parse()?;
        let price: Amount = self
            .price
            .parse()
            .map_err(|_| ListingClientError::InvalidPrice)?;

        // Blank form fields arrive as empty strings
        let reserve_price = match self.reserve_price.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => {
                require!(kind == ListingKind::Auction, ListingClientError::InvalidPrice);
                Some(raw.parse::<Amount>().map_err(|_| ListingClientError::InvalidPrice)?)
            }
        };

        let request = ListingRequest {
            asset_contract_address,
            token_id: self.token_id.trim().to_string(),
            kind,
            price,
            reserve_price,
            currency_address: config.listing_currency,
            duration_secs: config.listing_duration_secs,
            quantity: LISTING_QUANTITY,
            start_time,
        };
        request.validate()?;

        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::NATIVE_TOKEN_ADDRESS;
    use anchor_lang::error::Error;

    const NFT: &str = "0xabc0000000000000000000000000000000000001";

    fn form(listing_type: ListingType, price: &str, reserve: Option<&str>) -> ListingForm {
        ListingForm {
            listing_type,
            contract_address: NFT.to_string(),
            token_id: "1".to_string(),
            price: price.to_string(),
            reserve_price: reserve.map(str::to_string),
        }
    }

    #[test]
    fn direct_form_builds_fixed_request() {
        let request = form(ListingType::Direct, "10", None)
            .into_request(&MarketplaceConfig::default(), 1_700_000_000)
            .unwrap();

        assert_eq!(request.kind, ListingKind::Direct);
        assert_eq!(request.asset_contract_address, NFT.parse::<Address>().unwrap());
        assert_eq!(request.price.as_str(), "10");
        assert_eq!(request.reserve_price, None);
        assert_eq!(request.currency_address, NATIVE_TOKEN_ADDRESS);
        assert_eq!(request.duration_secs, 604_800);
        assert_eq!(request.quantity, 1);
        assert_eq!(request.start_time, 1_700_000_000);
    }

    #[test]
    fn form_payload_is_strictly_typed() {
        let form = ListingForm::from_json(
            r#"{ "listingType": "auctionListing", "contractAddress": "0xabc0000000000000000000000000000000000001", "tokenId": "1", "price": "10" }"#,
        )
        .unwrap();
        assert_eq!(form.listing_type, ListingType::Auction);
        assert_eq!(form.reserve_price, None);

        for bad in [
            r#"{ "listingType": "fixedPrice", "contractAddress": "0x1", "tokenId": "1", "price": "10" }"#,
            r#"{ "listingType": "directListing", "tokenId": "1", "price": "10" }"#,
        ] {
            let err = ListingForm::from_json(bad).unwrap_err();
            assert_eq!(err, Error::from(ListingClientError::InvalidForm));
        }
    }

    #[test]
    fn blank_reserve_is_ignored() {
        let request = form(ListingType::Auction, "2.5", Some("  "))
            .into_request(&MarketplaceConfig::default(), 0)
            .unwrap();
        assert_eq!(request.kind, ListingKind::Auction);
        assert_eq!(request.reserve_price, None);
    }

    #[test]
    fn rejects_malformed_fields() {
        let config = MarketplaceConfig::default();
        let cases = [
            (form(ListingType::Direct, "ten", None), ListingClientError::InvalidPrice),
            (form(ListingType::Direct, "0", None), ListingClientError::InvalidPrice),
            (form(ListingType::Direct, "10", Some("1")), ListingClientError::InvalidPrice),
            (form(ListingType::Auction, "10", Some("11")), ListingClientError::InvalidPrice),
            (
                ListingForm { contract_address: "0xABC".to_string(), ..form(ListingType::Direct, "10", None) },
                ListingClientError::InvalidAddress,
            ),
            (
                ListingForm { token_id: "".to_string(), ..form(ListingType::Direct, "10", None) },
                ListingClientError::InvalidTokenId,
            ),
        ];

        for (form, expected) in cases {
            let err = form.into_request(&config, 0).unwrap_err();
            assert_eq!(err, Error::from(expected));
        }
    }
}
