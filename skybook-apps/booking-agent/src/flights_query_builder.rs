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

//! # Flights Query Builder
//!
//! Side-effect free construction of the search API query parameters.

use chrono::NaiveDate;

/// Search API protocol version.
pub const API_VERSION: u32 = 3;

/// The search only ever needs the single best itinerary.
pub const RESULT_LIMIT: u32 = 1;

/// Date format expected by the search API.
const API_DATE_FORMAT: &str = "%d/%m/%Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preference {
    #[default]
    Cheapest,
    Fastest,
}

impl Preference {
    pub fn sort_key(self) -> &'static str {
        match self {
            Preference::Cheapest => "price",
            Preference::Fastest => "duration",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripType {
    OneWay,
    Return,
}

impl TripType {
    pub fn as_str(self) -> &'static str {
        match self {
            TripType::OneWay => "oneway",
            TripType::Return => "return",
        }
    }
}

/// Ordered `(name, value)` query parameters for the search endpoint.
pub type SearchQuery = Vec<(&'static str, String)>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub depart_date: NaiveDate,
    pub from_location: String,
    pub to_location: Option<String>,
    pub return_length: Option<u32>,
    pub preference: Preference,
    pub passengers: u32,
    pub bags: u32,
}

impl SearchConfig {
    pub fn builder(from_location: String, depart_date: NaiveDate) -> SearchConfigBuilder {
        SearchConfigBuilder {
            from_location,
            depart_date,
            to_location: None,
            return_length: None,
            cheapest: false,
            fastest: false,
            passengers: None,
            bags: None,
        }
    }

    pub fn trip_type(&self) -> TripType {
        if self.return_length.is_some() {
            TripType::Return
        } else {
            TripType::OneWay
        }
    }

    /// Departure date as `DD/MM/YYYY`.
    pub fn api_depart_date(&self) -> String {
        self.depart_date.format(API_DATE_FORMAT).to_string()
    }

    pub fn search_query(&self) -> SearchQuery {
        let mut query: SearchQuery = vec![
            ("v", API_VERSION.to_string()),
            ("flyFrom", self.from_location.clone()),
            ("passengers", self.passengers.to_string()),
            ("typeFlight", self.trip_type().as_str().to_string()),
            ("sort", self.preference.sort_key().to_string()),
            ("limit", RESULT_LIMIT.to_string()),
        ];

        // No destination means "anywhere"
        if let Some(to) = &self.to_location {
            query.push(("to", to.clone()));
        }

        // Exact-date search
        let date = self.api_depart_date();
        query.push(("dateFrom", date.clone()));
        query.push(("dateTo", date));

        if let Some(nights) = self.return_length {
            query.push(("daysInDestinationFrom", nights.to_string()));
            query.push(("daysInDestinationTo", nights.to_string()));
        }

        query
    }
}

#[derive(Clone)]
pub struct SearchConfigBuilder {
    from_location: String,
    depart_date: NaiveDate,
    to_location: Option<String>,
    return_length: Option<u32>,
    cheapest: bool,
    fastest: bool,
    passengers: Option<u32>,
    bags: Option<u32>,
}

impl SearchConfigBuilder {
    pub fn to_location(mut self, to_location: Option<String>) -> Self {
        self.to_location = to_location;
        self
    }

    pub fn return_length(mut self, return_length: Option<u32>) -> Self {
        self.return_length = return_length;
        self
    }

    pub fn cheapest(mut self, cheapest: bool) -> Self {
        self.cheapest = cheapest;
        self
    }

    pub fn fastest(mut self, fastest: bool) -> Self {
        self.fastest = fastest;
        self
    }

    pub fn passengers(mut self, passengers: Option<u32>) -> Self {
        self.passengers = passengers;
        self
    }

    pub fn bags(mut self, bags: Option<u32>) -> Self {
        self.bags = bags;
        self
    }

    /// Zero passengers or a zero-night stay count as "not given".
    pub fn build(self) -> SearchConfig {
        // cheapest is already the default, fastest is checked last and wins
        if self.cheapest && self.fastest {
            tracing::debug!("Both cheapest and fastest requested, sorting by duration");
        }
        let preference = if self.fastest {
            Preference::Fastest
        } else {
            Preference::Cheapest
        };

        SearchConfig {
            depart_date: self.depart_date,
            from_location: self.from_location,
            to_location: self.to_location,
            return_length: self.return_length.filter(|&n| n > 0),
            preference,
            passengers: self.passengers.filter(|&n| n > 0).unwrap_or(1),
            bags: self.bags.unwrap_or(0),
        }
    }
}
