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

//! # Flights Results Parser
//!
//! Side-effect free JSON parsing for search API responses.
//! Only the result count and the leading itinerary are modeled, every other
//! field of the response is ignored.

use serde::Deserialize;

use crate::errors::{BookingError, BookingResult};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlightSearchResult {
    #[serde(rename = "_results")]
    pub result_count: Option<u64>,
    /// Currency of every `price` in the response.
    pub currency: Option<String>,
    #[serde(default)]
    pub data: Vec<Itinerary>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Itinerary {
    pub booking_token: Option<String>,
    #[serde(rename = "flyFrom")]
    pub fly_from: Option<String>,
    #[serde(rename = "flyTo")]
    pub fly_to: Option<String>,
    #[serde(rename = "cityFrom")]
    pub city_from: Option<String>,
    #[serde(rename = "cityTo")]
    pub city_to: Option<String>,
    pub price: Option<f64>,
    pub fly_duration: Option<String>,
}

impl FlightSearchResult {
    pub fn from_json(body: &str) -> BookingResult<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Only an explicit zero count means "nothing found".
    pub fn has_no_results(&self) -> bool {
        self.result_count == Some(0)
    }

    pub fn first_itinerary(&self) -> Option<&Itinerary> {
        self.data.first()
    }

    pub fn booking_token(&self) -> BookingResult<&str> {
        self.first_itinerary()
            .and_then(|i| i.booking_token.as_deref())
            .ok_or(BookingError::MissingBookingToken)
    }

    /// Summary of the leading itinerary, priced in the response currency.
    pub fn summary(&self) -> Option<String> {
        self.first_itinerary()
            .map(|i| i.summary(self.currency.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Itinerary {
    /// One-line description, e.g. "Prague (PRG) → London (LHR), 3h 05m, 42 EUR".
    pub fn summary(&self, currency: Option<&str>) -> String {
        let place = |city: &Option<String>, code: &Option<String>| match (city, code) {
            (Some(city), Some(code)) => format!("{} ({})", city, code),
            (None, Some(code)) => code.clone(),
            (Some(city), None) => city.clone(),
            (None, None) => "??".to_string(),
        };

        let mut parts = vec![format!(
            "{} → {}",
            place(&self.city_from, &self.fly_from),
            place(&self.city_to, &self.fly_to)
        )];
        if let Some(duration) = &self.fly_duration {
            parts.push(duration.clone());
        }
        match (self.price, currency) {
            (Some(price), Some(currency)) => parts.push(format!("{} {}", price, currency)),
            (Some(price), None) => parts.push(price.to_string()),
            (None, _) => {}
        }
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_leading_itinerary() {
        let body = r#"{
            "_results": 12,
            "currency": "USD",
            "data": [{
                "booking_token": "tok-1",
                "flyFrom": "PRG",
                "flyTo": "LHR",
                "cityFrom": "Prague",
                "cityTo": "London",
                "price": 42,
                "fly_duration": "2h 05m",
                "route": []
            }]
        }"#;
        let result = FlightSearchResult::from_json(body).unwrap();
        assert_eq!(result.result_count, Some(12));
        assert!(!result.has_no_results());
        assert_eq!(result.booking_token().unwrap(), "tok-1");
        assert_eq!(
            result.summary().unwrap(),
            "Prague (PRG) → London (LHR), 2h 05m, 42 USD"
        );
    }

    #[test]
    fn test_summary_uses_response_currency() {
        let body = r#"{
            "_results": 1,
            "currency": "EUR",
            "data": [{"flyFrom": "PRG", "flyTo": "LHR", "price": 42}]
        }"#;
        let result = FlightSearchResult::from_json(body).unwrap();
        assert_eq!(result.currency.as_deref(), Some("EUR"));
        assert_eq!(result.summary().unwrap(), "PRG → LHR, 42 EUR");
    }

    #[test]
    fn test_summary_without_currency() {
        let result =
            FlightSearchResult::from_json(r#"{"data": [{"flyFrom": "PRG", "price": 42}]}"#)
                .unwrap();
        assert_eq!(result.summary().unwrap(), "PRG → ??, 42");
        assert!(FlightSearchResult::default().summary().is_none());
    }

    #[test]
    fn test_zero_results() {
        let result = FlightSearchResult::from_json(r#"{"_results": 0, "data": []}"#).unwrap();
        assert!(result.has_no_results());
        assert!(result.is_empty());
    }

    #[test]
    fn test_missing_count_is_not_zero() {
        let result = FlightSearchResult::from_json(r#"{"data": []}"#).unwrap();
        assert!(!result.has_no_results());
        assert!(matches!(
            result.booking_token(),
            Err(BookingError::MissingBookingToken)
        ));
    }

    #[test]
    fn test_malformed_body() {
        assert!(matches!(
            FlightSearchResult::from_json("<html>"),
            Err(BookingError::MalformedResponse(_))
        ));
    }
}
