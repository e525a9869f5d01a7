use anchor_lang::prelude::*;

#[error_code]
pub enum ListingClientError {
    #[msg("Connected wallet is on the wrong network")]
    WrongNetwork,

    #[msg("Listing form is malformed or has an unknown listing type")]
    InvalidForm,

    #[msg("Address must be 0x followed by 40 hex characters")]
    InvalidAddress,

    #[msg("Token id must be a non-empty decimal number")]
    InvalidTokenId,

    #[msg("Listing id must be a decimal number")]
    InvalidListingId,

    #[msg("Invalid price configuration")]
    InvalidPrice,

    #[msg("Amount must be a positive decimal number")]
    InvalidAmount,

    #[msg("Duration must be positive")]
    InvalidDuration,

    #[msg("Quantity must be at least 1")]
    InvalidQuantity,

    #[msg("Invalid marketplace configuration")]
    InvalidConfig,

    #[msg("Listing has not been loaded")]
    ListingNotLoaded,

    #[msg("An identical request is already in flight")]
    DuplicateSubmission,

    #[msg("Marketplace rejected the transaction")]
    TransactionFailed,
}
