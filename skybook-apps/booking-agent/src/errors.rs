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

use thiserror::Error;

/// Every way a search-and-book run can fail.
///
/// The `Display` output is the one-line message shown to the user.
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("search request failed")]
    SearchRequestFailed { status: u16 },

    #[error("no flights found matching search criteria")]
    NoFlightsFound,

    #[error("search response did not include a booking token")]
    MissingBookingToken,

    #[error("booking request failed")]
    BookingRequestFailed { status: u16 },

    #[error("failed to confirm reservation")]
    ReservationNotConfirmed,

    #[error("network error: {0:#}")]
    Transport(anyhow::Error),

    #[error("malformed response from remote API: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("failed to read passenger details: {0}")]
    PromptInput(#[from] std::io::Error),

    #[error("unexpected end of input while reading passenger details")]
    PromptClosed,
}

pub type BookingResult<T> = std::result::Result<T, BookingError>;
