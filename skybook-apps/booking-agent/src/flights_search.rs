//!  Skybook Booking Agent
//!
//!  Copyright (C) 2026  Mamy Ratsimbazafy
//!
//!  This program is free software: you can redistribute it and/or modify
//!  it under the terms of the GNU Affero General Public License as published by
//!  the Free Software Foundation, either version 3 of the License, or
//!  (at your option) any later version.
//!
//!  This program is distributed in the hope that it will be useful,
//!  but WITHOUT ANY WARRANTY; without even the implied warranty of
//!  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//!  GNU Affero General Public License for more details.
//!
//!  You should have received a copy of the GNU Affero General Public License
//!  along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! # Flight Search Client
//!
//! Effectful (network) half of the search stage.

use crate::errors::{BookingError, BookingResult};
use crate::flights_query_builder::SearchConfig;
use crate::flights_results_parser::FlightSearchResult;
use crate::http_transport::HttpTransport;

pub const DEFAULT_SEARCH_URL: &str = "https://api.skypicker.com/flights";

pub struct FlightSearchClient<'a, T: HttpTransport> {
    transport: &'a T,
    search_url: String,
}

impl<'a, T: HttpTransport> FlightSearchClient<'a, T> {
    pub fn new(transport: &'a T, search_url: impl Into<String>) -> Self {
        Self {
            transport,
            search_url: search_url.into(),
        }
    }

    /// Returns the search result together with the passenger count that was
    /// queried, which is how many passengers the booking needs.
    pub async fn search(&self, config: &SearchConfig) -> BookingResult<(FlightSearchResult, u32)> {
        let query = config.search_query();
        tracing::info!(
            "Searching {} → {} on {} ({} passenger(s), sort={})",
            config.from_location,
            config.to_location.as_deref().unwrap_or("anywhere"),
            config.depart_date,
            config.passengers,
            config.preference.sort_key()
        );

        let start = std::time::Instant::now();
        let response = self
            .transport
            .get(&self.search_url, &query)
            .await
            .map_err(BookingError::Transport)?;
        tracing::debug!("Search round-trip took {:?}", start.elapsed());

        if response.is_error() {
            let preview = response.body.chars().take(300).collect::<String>();
            tracing::warn!("Search API returned HTTP {}: {}", response.status, preview);
            return Err(BookingError::SearchRequestFailed {
                status: response.status,
            });
        }

        let result = FlightSearchResult::from_json(&response.body)?;
        if result.has_no_results() {
            tracing::warn!("Search API returned zero results");
            return Err(BookingError::NoFlightsFound);
        }

        tracing::info!(
            "Search completed: {} itinerary(ies) returned, {} total",
            result.len(),
            result
                .result_count
                .map_or("unknown".to_string(), |n| n.to_string())
        );

        Ok((result, config.passengers))
    }
}
