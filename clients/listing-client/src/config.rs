use anchor_lang::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::ListingClientError;
use crate::state::{DEFAULT_LISTING_DURATION_SECS, NATIVE_TOKEN_ADDRESS};
use crate::types::{Address, ChainId};

/// Polygon Mumbai
pub const DEFAULT_CHAIN_ID: ChainId = 80001;

/// 0xaF7C92b69446649766D3BCB37C7Ffd2C78e8dA3b
pub const DEFAULT_MARKETPLACE_ADDRESS: Address = Address::new([
    0xaf, 0x7c, 0x92, 0xb6, 0x94, 0x46, 0x64, 0x97, 0x66, 0xd3, 0xbc, 0xb3, 0x7c, 0x7f, 0xfd,
    0x2c, 0x78, 0xe8, 0xda, 0x3b,
]);

/// Wrapped MATIC on Mumbai (0x9c3C9283D3e44854697Cd22D3Faa240Cfb032889)
pub const DEFAULT_WRAPPED_NATIVE_ADDRESS: Address = Address::new([
    0x9c, 0x3c, 0x92, 0x83, 0xd3, 0xe4, 0x48, 0x54, 0x69, 0x7c, 0xd2, 0x2d, 0x3f, 0xaa, 0x24,
    0x0c, 0xfb, 0x03, 0x28, 0x89,
]);

/// Which marketplace deployment the client talks to, and the fixed
/// parameters it attaches to every listing and offer.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarketplaceConfig {
    pub marketplace_address: Address,
    pub chain_id: ChainId,
    pub listing_currency: Address, // Currency buyers pay in
    pub offer_currency: Address,   // Offers need an ERC-20, so the wrapped native token
    pub listing_duration_secs: u64,
}

impl Default for MarketplaceConfig {
    fn default() -> Self {
        Self {
            marketplace_address: DEFAULT_MARKETPLACE_ADDRESS,
            chain_id: DEFAULT_CHAIN_ID,
            listing_currency: NATIVE_TOKEN_ADDRESS,
            offer_currency: DEFAULT_WRAPPED_NATIVE_ADDRESS,
            listing_duration_secs: DEFAULT_LISTING_DURATION_SECS,
        }
    }
}

impl MarketplaceConfig {
    /// Parses a (possibly partial) JSON document; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| {
            msg!("Invalid marketplace config: {}", e);
            ListingClientError::InvalidConfig
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        require!(self.listing_duration_secs > 0, ListingClientError::InvalidDuration);
        require!(
            self.marketplace_address != NATIVE_TOKEN_ADDRESS,
            ListingClientError::InvalidConfig
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_mumbai_deployment() {
        let config = MarketplaceConfig::default();
        assert_eq!(config.chain_id, 80001);
        assert_eq!(
            config.marketplace_address,
            "0xaF7C92b69446649766D3BCB37C7Ffd2C78e8dA3b".parse::<Address>().unwrap()
        );
        assert_eq!(
            config.offer_currency,
            "0x9c3C9283D3e44854697Cd22D3Faa240Cfb032889".parse::<Address>().unwrap()
        );
        assert_eq!(config.listing_duration_secs, 604_800);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = MarketplaceConfig::from_json(r#"{ "chainId": 137 }"#).unwrap();
        assert_eq!(config.chain_id, 137);
        assert_eq!(config.marketplace_address, DEFAULT_MARKETPLACE_ADDRESS);
        assert_eq!(config.listing_currency, NATIVE_TOKEN_ADDRESS);
    }

    #[test]
    fn rejects_zero_duration_and_bad_address() {
        let err = MarketplaceConfig::from_json(r#"{ "listingDurationSecs": 0 }"#).unwrap_err();
        assert_eq!(err, anchor_lang::error::Error::from(ListingClientError::InvalidDuration));

        let err = MarketplaceConfig::from_json(r#"{ "marketplaceAddress": "0x1234" }"#).unwrap_err();
        assert_eq!(err, anchor_lang::error::Error::from(ListingClientError::InvalidConfig));
    }
}
