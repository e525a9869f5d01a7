use std::collections::HashSet;
use std::sync::Mutex;

use anchor_lang::prelude::*;
use solana_program::hash::{hash, Hash};
use solana_program::program_error::ProgramError;

use crate::error::ListingClientError;

/// Tracks mutating requests that have been sent but not yet settled.
///
/// Requests are keyed by the hash of their serialized payload, so the same
/// action re-triggered before the first call returns is refused while a
/// different action goes through.
#[derive(Default)]
pub struct InFlight {
    pending: Mutex<HashSet<Hash>>,
}

pub struct InFlightToken<'a> {
    registry: &'a InFlight,
    key: Hash,
}

impl InFlight {
    pub fn begin<T: AnchorSerialize>(&self, action: &str, payload: &T) -> Result<InFlightToken<'_>> {
        let mut bytes = action.as_bytes().to_vec();
        payload
            .serialize(&mut bytes)
            .map_err(|e| ProgramError::BorshIoError(e.to_string()))?;
        let key = hash(&bytes);

        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        if !pending.insert(key) {
            msg!("Rejected duplicate {}: request {} still in flight", action, key);
            return err!(ListingClientError::DuplicateSubmission);
        }

        Ok(InFlightToken { registry: self, key })
    }

    pub fn is_empty(&self) -> bool {
        self.pending.lock().unwrap_or_else(|e| e.into_inner()).is_empty()
    }
}

impl Drop for InFlightToken<'_> {
    fn drop(&mut self) {
        self.registry
            .pending
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&self.key);
    }
}
