use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use anchor_lang::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::ListingClientError;

/// Numeric chain identifier of the network the marketplace lives on.
pub type ChainId = u64;

/// 20-byte contract or account address, written as `0x` + 40 hex characters.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(pub [u8; 20]);

impl Address {
    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

impl FromStr for Address {
    type Err = anchor_lang::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex_part = s
            .trim()
            .strip_prefix("0x")
            .or_else(|| s.trim().strip_prefix("0X"))
            .ok_or(ListingClientError::InvalidAddress)?;
        require!(hex_part.len() == 40, ListingClientError::InvalidAddress);

        let mut bytes = [0u8; 20];
        hex::decode_to_slice(hex_part, &mut bytes)
            .map_err(|_| ListingClientError::InvalidAddress)?;
        Ok(Self(bytes))
    }
}

impl TryFrom<String> for Address {
    type Error = anchor_lang::error::Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.to_string()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Listing identifier assigned by the marketplace contract.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(pub u64);

impl ListingId {
    /// Reads the id out of a `/listing/{id}` path parameter.
    pub fn from_route_param(param: &str) -> Result<Self> {
        param.parse()
    }
}

impl FromStr for ListingId {
    type Err = anchor_lang::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        let id = s
            .trim()
            .parse::<u64>()
            .map_err(|_| ListingClientError::InvalidListingId)?;
        Ok(Self(id))
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Decimal amount exactly as entered by the user (`digits[.digits]`).
///
/// The contract SDK converts display amounts into the currency's smallest
/// unit, so the string is passed through untouched and never goes via
/// floating point.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Amount(String);

impl Amount {
    pub fn zero() -> Self {
        Self("0".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.chars().all(|c| c == '0' || c == '.')
    }

    /// Compares by numeric value, so `1.50` equals `01.5`.
    pub fn numeric_cmp(&self, other: &Amount) -> Ordering {
        let (a_int, a_frac) = self.normalized();
        let (b_int, b_frac) = other.normalized();
        a_int
            .len()
            .cmp(&b_int.len())
            .then_with(|| a_int.cmp(b_int))
            .then_with(|| a_frac.cmp(b_frac))
    }

    fn normalized(&self) -> (&str, &str) {
        let (int, frac) = self.0.split_once('.').unwrap_or((&self.0, ""));
        (int.trim_start_matches('0'), frac.trim_end_matches('0'))
    }
}

impl FromStr for Amount {
    type Err = anchor_lang::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (int, frac) = match s.split_once('.') {
            Some((int, frac)) => (int, Some(frac)),
            None => (s, None),
        };
        let is_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());

        require!(is_digits(int), ListingClientError::InvalidAmount);
        if let Some(frac) = frac {
            require!(is_digits(frac), ListingClientError::InvalidAmount);
        }
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for Amount {
    type Error = anchor_lang::error::Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Amount> for String {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_parses_mixed_case_hex() {
        let address: Address = "0xaF7C92b69446649766D3BCB37C7Ffd2C78e8dA3b".parse().unwrap();
        assert_eq!(address.to_string(), "0xaf7c92b69446649766d3bcb37c7ffd2c78e8da3b");
    }

    #[test]
    fn address_rejects_bad_input() {
        for input in ["", "0x", "aF7C92b69446649766D3BCB37C7Ffd2C78e8dA3b", "0xABC", "0xzz7C92b69446649766D3BCB37C7Ffd2C78e8dA3b"] {
            let err = input.parse::<Address>().unwrap_err();
            assert_eq!(err, anchor_lang::error::Error::from(ListingClientError::InvalidAddress));
        }
    }

    #[test]
    fn address_serde_uses_hex_string() {
        let address: Address = serde_json::from_str("\"0x9c3C9283D3e44854697Cd22D3Faa240Cfb032889\"").unwrap();
        assert_eq!(
            serde_json::to_string(&address).unwrap(),
            "\"0x9c3c9283d3e44854697cd22d3faa240cfb032889\""
        );
    }

    #[test]
    fn listing_id_from_route_param() {
        assert_eq!(ListingId::from_route_param("5").unwrap(), ListingId(5));
        assert!(ListingId::from_route_param("five").is_err());
        assert!(ListingId::from_route_param("-1").is_err());
    }

    #[test]
    fn amount_accepts_decimals_only() {
        assert!("10".parse::<Amount>().is_ok());
        assert!("0.25".parse::<Amount>().is_ok());
        for bad in ["", ".5", "5.", "1e3", "-1", "1.2.3", "ten"] {
            assert!(bad.parse::<Amount>().is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn amount_numeric_ordering() {
        let a: Amount = "1.50".parse().unwrap();
        let b: Amount = "01.5".parse().unwrap();
        let c: Amount = "10".parse().unwrap();
        let d: Amount = "9.99".parse().unwrap();
        assert_eq!(a.numeric_cmp(&b), Ordering::Equal);
        assert_eq!(c.numeric_cmp(&d), Ordering::Greater);
        assert_eq!(d.numeric_cmp(&a), Ordering::Greater);
        assert!("0.000".parse::<Amount>().unwrap().is_zero());
        assert!(!"0.001".parse::<Amount>().unwrap().is_zero());
    }
}
