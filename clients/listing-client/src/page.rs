use anchor_lang::prelude::*;

use crate::error::ListingClientError;
use crate::service::{Frontend, MarketplaceService};
use crate::state::{listing_route, ListingView, TransactionReceipt};
use crate::types::ListingId;
use crate::MarketplaceClient;

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum PageState {
    Loading,
    NotFound,
    Loaded(ListingView),
}

/// Page-local view of a single listing.
///
/// The listing is fetched once per distinct id. Changing the id discards
/// the current listing and fetches again; the view is never edited in place.
#[derive(Debug)]
pub struct ListingPage {
    listing_id: Option<ListingId>,
    state: PageState,
}

impl Default for ListingPage {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingPage {
    pub fn new() -> Self {
        Self {
            listing_id: None,
            state: PageState::Loading,
        }
    }

    pub fn listing_id(&self) -> Option<ListingId> {
        self.listing_id
    }

    /// Path of the listing the page points at, e.g. `/listing/5`.
    pub fn route(&self) -> Option<String> {
        self.listing_id.map(listing_route)
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn listing(&self) -> Option<&ListingView> {
        match &self.state {
            PageState::Loaded(listing) => Some(listing),
            _ => None,
        }
    }

    /// Points the page at `id`. Returns false when `id` has already been
    /// fetched and nothing needs to happen.
    pub fn begin(&mut self, id: ListingId) -> bool {
        if self.listing_id == Some(id) && self.state != PageState::Loading {
            return false;
        }
        self.listing_id = Some(id);
        self.state = PageState::Loading;
        true
    }

    /// Records a fetch result. Results for an id the page has moved away
    /// from are dropped.
    pub fn finish(&mut self, id: ListingId, listing: Option<ListingView>) {
        if self.listing_id != Some(id) {
            return;
        }
        self.state = match listing {
            Some(listing) => PageState::Loaded(listing),
            None => PageState::NotFound,
        };
    }

    /// A failed fetch leaves the page in `Loading` so that `load` retries.
    pub async fn load<S, F>(&mut self, client: &MarketplaceClient<S, F>, id: ListingId) -> Result<&PageState>
    where
        S: MarketplaceService,
        F: Frontend,
    {
        if self.begin(id) {
            let listing = client.fetch_listing(id).await?;
            self.finish(id, listing);
        }
        Ok(&self.state)
    }

    pub async fn load_route<S, F>(
        &mut self,
        client: &MarketplaceClient<S, F>,
        param: &str,
    ) -> Result<&PageState>
    where
        S: MarketplaceService,
        F: Frontend,
    {
        let id = ListingId::from_route_param(param)?;
        self.load(client, id).await
    }

    pub async fn reload<S, F>(&mut self, client: &MarketplaceClient<S, F>) -> Result<&PageState>
    where
        S: MarketplaceService,
        F: Frontend,
    {
        let id = self.listing_id.ok_or(ListingClientError::ListingNotLoaded)?;
        self.state = PageState::Loading;
        self.load(client, id).await
    }

    pub async fn purchase<S, F>(&self, client: &MarketplaceClient<S, F>) -> Result<TransactionReceipt>
    where
        S: MarketplaceService,
        F: Frontend,
    {
        let listing = self.listing().ok_or(ListingClientError::ListingNotLoaded)?;
        client.purchase(listing.id).await
    }

    pub async fn place_bid_or_offer<S, F>(
        &self,
        client: &MarketplaceClient<S, F>,
        amount: &str,
    ) -> Result<TransactionReceipt>
    where
        S: MarketplaceService,
        F: Frontend,
    {
        let listing = self.listing().ok_or(ListingClientError::ListingNotLoaded)?;
        client.place_bid_or_offer(listing, amount).await
    }
}
