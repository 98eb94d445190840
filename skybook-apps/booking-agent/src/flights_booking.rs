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

//! # Flight Booking Client
//!
//! Builds the booking request from a search result and submits it.

use serde::{Deserialize, Serialize};

use crate::errors::{BookingError, BookingResult};
use crate::flights_query_builder::SearchConfig;
use crate::flights_results_parser::FlightSearchResult;
use crate::http_transport::HttpTransport;
use crate::passenger_prompt::Passenger;

pub const DEFAULT_BOOKING_URL: &str = "http://128.199.48.38:8080/booking";

/// Bookings are always priced in US dollars.
pub const BOOKING_CURRENCY: &str = "USD";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingRequest {
    pub currency: String,
    pub bags: u32,
    pub passengers: Vec<Passenger>,
    pub booking_token: String,
}

impl BookingRequest {
    pub fn new(
        config: &SearchConfig,
        search_result: &FlightSearchResult,
        passengers: Vec<Passenger>,
    ) -> BookingResult<Self> {
        Ok(Self {
            currency: BOOKING_CURRENCY.to_string(),
            bags: config.bags,
            passengers,
            booking_token: search_result.booking_token()?.to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingResponse {
    pub pnr: Option<String>,
    pub status: Option<String>,
}

pub struct BookingClient<'a, T: HttpTransport> {
    transport: &'a T,
    booking_url: String,
}

impl<'a, T: HttpTransport> BookingClient<'a, T> {
    pub fn new(transport: &'a T, booking_url: impl Into<String>) -> Self {
        Self {
            transport,
            booking_url: booking_url.into(),
        }
    }

    /// Books the leading itinerary of `search_result` and returns the PNR.
    pub async fn book(
        &self,
        config: &SearchConfig,
        search_result: &FlightSearchResult,
        passengers: Vec<Passenger>,
    ) -> BookingResult<String> {
        let request = BookingRequest::new(config, search_result, passengers)?;
        tracing::info!(
            "Booking {} passenger(s) with {} bag(s)",
            request.passengers.len(),
            request.bags
        );

        let body = serde_json::to_value(&request)?;
        let response = self
            .transport
            .post_json(&self.booking_url, &body)
            .await
            .map_err(BookingError::Transport)?;

        if response.is_error() {
            let preview = response.body.chars().take(300).collect::<String>();
            tracing::warn!("Booking API returned HTTP {}: {}", response.status, preview);
            return Err(BookingError::BookingRequestFailed {
                status: response.status,
            });
        }

        let confirmation: BookingResponse = serde_json::from_str(&response.body)?;
        tracing::debug!("Booking status: {:?}", confirmation.status);
        confirmation.pnr.ok_or(BookingError::ReservationNotConfirmed)
    }
}
