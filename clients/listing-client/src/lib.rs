use anchor_lang::prelude::*;
use chrono::Utc;

pub mod config;
pub mod error;
pub mod form;
pub mod in_flight;
pub mod operations;
pub mod page;
pub mod service;
pub mod state;
pub mod types;

use config::MarketplaceConfig;
use form::ListingForm;
use in_flight::InFlight;
use service::{Frontend, MarketplaceService};
use state::{ListingCreated, ListingRequest, ListingView, TransactionReceipt};
use types::ListingId;

/// Client side of the marketplace: turns user intent into single calls on
/// the external marketplace contract.
pub struct MarketplaceClient<S, F> {
    pub(crate) service: S,
    pub(crate) frontend: F,
    pub(crate) config: MarketplaceConfig,
    pub(crate) in_flight: InFlight,
}

impl<S, F> MarketplaceClient<S, F>
where
    S: MarketplaceService,
    F: Frontend,
{
    pub fn new(service: S, frontend: F, config: MarketplaceConfig) -> Result<Self> {
        config.validate()?;
        msg!(
            "Marketplace client: marketplace={}, chain={}",
            config.marketplace_address,
            config.chain_id
        );
        Ok(Self {
            service,
            frontend,
            config,
            in_flight: InFlight::default(),
        })
    }

    pub fn config(&self) -> &MarketplaceConfig {
        &self.config
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    /// Validate a submitted form into a listing request starting now
    pub fn listing_request(&self, form: ListingForm) -> Result<ListingRequest> {
        form.into_request(&self.config, Utc::now().timestamp())
    }

    /// Create a listing straight from the submitted form
    pub async fn submit_listing_form(&self, form: ListingForm) -> Result<ListingCreated> {
        // Before the form is parsed, so a bad form on the wrong network still
        // prompts the switch. `create_listing` checks again for direct callers.
        operations::require_network(self)?;
        let request = self.listing_request(form)?;
        self.create_listing(request).await
    }

    /// Create a direct or auction listing (one outbound call)
    pub async fn create_listing(&self, request: ListingRequest) -> Result<ListingCreated> {
        operations::create_listing::handler(self, request).await
    }

    /// Fetch a listing; `None` when it does not exist
    pub async fn fetch_listing(&self, id: ListingId) -> Result<Option<ListingView>> {
        operations::get_listing::handler(self, id).await
    }

    /// Buy one token of a listing at its buyout price
    pub async fn purchase(&self, id: ListingId) -> Result<TransactionReceipt> {
        operations::buyout_listing::handler(self, id).await
    }

    /// Offer on a direct listing or bid on an auction
    pub async fn place_bid_or_offer(
        &self,
        listing: &ListingView,
        amount: &str,
    ) -> Result<TransactionReceipt> {
        operations::make_bid_or_offer::handler(self, listing, amount).await
    }
}
