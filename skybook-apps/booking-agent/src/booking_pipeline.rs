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

//! # Booking Pipeline
//!
//! search → collect → book, each stage fed by the previous one.

use crate::errors::BookingResult;
use crate::flights_booking::{BookingClient, DEFAULT_BOOKING_URL};
use crate::flights_query_builder::SearchConfig;
use crate::flights_search::{DEFAULT_SEARCH_URL, FlightSearchClient};
use crate::http_transport::HttpTransport;
use crate::passenger_prompt::{PromptProvider, collect_passengers};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub search_url: String,
    pub booking_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            search_url: DEFAULT_SEARCH_URL.to_string(),
            booking_url: DEFAULT_BOOKING_URL.to_string(),
        }
    }
}

/// Runs a full search-and-book and returns the confirmation code (PNR).
pub async fn run_booking<T, P>(
    config: &SearchConfig,
    transport: &T,
    prompter: &mut P,
    endpoints: &Endpoints,
) -> BookingResult<String>
where
    T: HttpTransport,
    P: PromptProvider,
{
    let search_client = FlightSearchClient::new(transport, endpoints.search_url.as_str());
    let (search_result, passenger_count) = search_client.search(config).await?;

    if let Some(summary) = search_result.summary() {
        tracing::info!("Selected itinerary: {}", summary);
        prompter.announce(&format!("selected flight: {}", summary))?;
    }

    let passengers = collect_passengers(prompter, passenger_count)?;

    let booking_client = BookingClient::new(transport, endpoints.booking_url.as_str());
    let pnr = booking_client
        .book(config, &search_result, passengers)
        .await?;
    tracing::info!("Reservation confirmed: {}", pnr);

    Ok(pnr)
}
