//! Response envelopes of the Places JSON endpoints.

use serde::de::IgnoredAny;
use serde::Deserialize;

use crate::error::PlacesError;
use crate::models::{PlaceDetail, RawPlace};

#[derive(Debug, Deserialize)]
pub(crate) struct NearbySearchResponse {
    pub status: Option<String>,
    pub error_message: Option<String>,
    #[serde(default)]
    pub results: Vec<ResultEntry>,
    pub next_page_token: Option<String>,
}

/// A `results` element; ones that do not fit [`RawPlace`] are kept aside
/// so they cannot sink the rest of the page.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ResultEntry {
    Place(RawPlace),
    Malformed(IgnoredAny),
}

#[derive(Debug, Deserialize)]
pub(crate) struct DetailsResponse {
    pub status: Option<String>,
    pub error_message: Option<String>,
    pub result: Option<PlaceDetail>,
}

/// Turn a non-success `status` into an error. A missing status counts as success.
pub(crate) fn check_status(
    status: Option<&str>,
    accepted: &[&str],
    error_message: Option<&str>,
) -> Result<(), PlacesError> {
    match status {
        Some(s) if !accepted.contains(&s) => Err(PlacesError::status(
            s,
            error_message.map(str::to_string),
        )),
        _ => Ok(()),
    }
}

impl NearbySearchResponse {
    pub fn check(&self) -> Result<(), PlacesError> {
        check_status(
            self.status.as_deref(),
            &["OK", "ZERO_RESULTS"],
            self.error_message.as_deref(),
        )
    }

    /// Move out the usable places, returning them with the count of malformed entries
    pub fn take_places(&mut self) -> (Vec<RawPlace>, usize) {
        let mut malformed = 0;
        let places = std::mem::take(&mut self.results)
            .into_iter()
            .filter_map(|entry| match entry {
                ResultEntry::Place(place) => Some(place),
                ResultEntry::Malformed(_) => {
                    malformed += 1;
                    None
                }
            })
            .collect();
        (places, malformed)
    }

    /// Continuation token, if another page exists
    pub fn next_page(&self) -> Option<&str> {
        self.next_page_token.as_deref().filter(|t| !t.is_empty())
    }
}

impl DetailsResponse {
    pub fn check(&self) -> Result<(), PlacesError> {
        check_status(
            self.status.as_deref(),
            &["OK"],
            self.error_message.as_deref(),
        )
    }
}
