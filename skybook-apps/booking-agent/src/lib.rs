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

// Library for skybook-booking-agent
// Flight search, passenger collection and booking against the Kiwi APIs

mod booking_pipeline;
mod errors;
mod flights_booking;
mod flights_query_builder;
mod flights_results_parser;
mod flights_search;
mod http_transport;
mod passenger_prompt;

pub use booking_pipeline::{Endpoints, run_booking};
pub use errors::{BookingError, BookingResult};
pub use flights_booking::{
    BOOKING_CURRENCY, BookingClient, BookingRequest, BookingResponse, DEFAULT_BOOKING_URL,
};
pub use flights_query_builder::{
    API_VERSION, Preference, RESULT_LIMIT, SearchConfig, SearchConfigBuilder, SearchQuery,
    TripType,
};
pub use flights_results_parser::{FlightSearchResult, Itinerary};
pub use flights_search::{DEFAULT_SEARCH_URL, FlightSearchClient};
pub use http_transport::{HttpResponse, HttpTransport, WreqTransport, build_url};
pub use passenger_prompt::{ConsolePrompter, Passenger, PromptProvider, collect_passengers};
