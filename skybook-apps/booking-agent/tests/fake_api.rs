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

//! Shared test doubles: canned HTTP transport and scripted prompts.

#![allow(dead_code)]

use anyhow::{Result, anyhow};
use serde_json::{Value, json};
use skybook_booking_agent::{
    BookingError, BookingResult, HttpResponse, HttpTransport, PromptProvider,
};
use std::cell::RefCell;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub enum Recorded {
    Get {
        url: String,
        params: Vec<(&'static str, String)>,
    },
    Post {
        url: String,
        body: Value,
    },
}

/// Replies with canned responses in order and records every request.
/// `None` in the script simulates a network-level failure.
#[derive(Default)]
pub struct FakeTransport {
    responses: RefCell<VecDeque<Option<HttpResponse>>>,
    requests: RefCell<Vec<Recorded>>,
}

impl FakeTransport {
    pub fn new(responses: Vec<Option<HttpResponse>>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.borrow().clone()
    }

    pub fn get_params(&self) -> Vec<(&'static str, String)> {
        self.requests
            .borrow()
            .iter()
            .find_map(|r| match r {
                Recorded::Get { params, .. } => Some(params.clone()),
                _ => None,
            })
            .expect("no GET was issued")
    }

    pub fn posted_body(&self) -> Option<Value> {
        self.requests.borrow().iter().find_map(|r| match r {
            Recorded::Post { body, .. } => Some(body.clone()),
            _ => None,
        })
    }

    fn next_response(&self) -> Result<HttpResponse> {
        self.responses
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| anyhow!("unexpected request, script exhausted"))?
            .ok_or_else(|| anyhow!("connection refused"))
    }
}

impl HttpTransport for FakeTransport {
    async fn get(&self, url: &str, params: &[(&'static str, String)]) -> Result<HttpResponse> {
        self.requests.borrow_mut().push(Recorded::Get {
            url: url.to_string(),
            params: params.to_vec(),
        });
        self.next_response()
    }

    async fn post_json(&self, url: &str, body: &Value) -> Result<HttpResponse> {
        self.requests.borrow_mut().push(Recorded::Post {
            url: url.to_string(),
            body: body.clone(),
        });
        self.next_response()
    }
}

/// Answers prompts from a fixed script and records every label shown.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    pub announcements: Vec<String>,
    pub labels: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<S: AsRef<str>>(answers: &[S]) -> Self {
        Self {
            answers: answers.iter().map(|s| s.as_ref().to_string()).collect(),
            ..Default::default()
        }
    }
}

impl PromptProvider for ScriptedPrompter {
    fn announce(&mut self, message: &str) -> BookingResult<()> {
        self.announcements.push(message.to_string());
        Ok(())
    }

    fn prompt(&mut self, label: &str) -> BookingResult<String> {
        self.labels.push(label.to_string());
        self.answers.pop_front().ok_or(BookingError::PromptClosed)
    }
}

pub fn search_ok(token: &str) -> HttpResponse {
    HttpResponse::new(
        200,
        json!({
            "_results": 1,
            "currency": "USD",
            "data": [{
                "booking_token": token,
                "flyFrom": "PRG",
                "flyTo": "LHR",
                "cityFrom": "Prague",
                "cityTo": "London",
                "price": 42,
                "fly_duration": "2h 05m"
            }]
        })
        .to_string(),
    )
}

pub fn search_empty() -> HttpResponse {
    HttpResponse::new(200, json!({"_results": 0, "data": []}).to_string())
}

pub fn booking_ok(pnr: &str) -> HttpResponse {
    HttpResponse::new(200, json!({"pnr": pnr, "status": "confirmed"}).to_string())
}

pub fn passenger_answers(first_name: &str) -> [String; 6] {
    [
        first_name.to_string(),
        "Doe".to_string(),
        "Mr".to_string(),
        format!("{}@example.com", first_name.to_lowercase()),
        format!("DOC-{}", first_name),
        "1990-01-01".to_string(),
    ]
}
