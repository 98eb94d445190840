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

//! # Passenger Collector
//!
//! Interactive collection of passenger details.

use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};

use crate::errors::{BookingError, BookingResult};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub title: String,
    pub email: String,
    #[serde(rename = "documentID")]
    pub document_id: String,
    pub birthday: String,
}

/// Source of answers for passenger questions.
pub trait PromptProvider {
    /// Show an informational line.
    fn announce(&mut self, message: &str) -> BookingResult<()>;

    /// Show `label` and read one answer.
    fn prompt(&mut self, label: &str) -> BookingResult<String>;
}

/// Prompts on a writer and reads line-by-line answers from a reader.
pub struct ConsolePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl ConsolePrompter<std::io::StdinLock<'static>, std::io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> PromptProvider for ConsolePrompter<R, W> {
    fn announce(&mut self, message: &str) -> BookingResult<()> {
        writeln!(self.output, "\n{}", message)?;
        Ok(())
    }

    fn prompt(&mut self, label: &str) -> BookingResult<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(BookingError::PromptClosed);
        }
        let answer = line.strip_suffix('\n').unwrap_or(&line);
        let answer = answer.strip_suffix('\r').unwrap_or(answer);
        Ok(answer.to_string())
    }
}

/// Asks for `count` passengers, returned in prompt order.
pub fn collect_passengers<P: PromptProvider>(
    prompter: &mut P,
    count: u32,
) -> BookingResult<Vec<Passenger>> {
    let mut passengers = Vec::new();

    for i in 1..=count {
        prompter.announce(&format!("enter information about passenger {}", i))?;
        let passenger = Passenger {
            first_name: prompter.prompt("first name: ")?,
            last_name: prompter.prompt("last name: ")?,
            title: prompter.prompt("title (Mr or Mrs): ")?,
            email: prompter.prompt("email address: ")?,
            document_id: prompter.prompt("travel document ID: ")?,
            birthday: prompter.prompt("birthday (YYYY-MM-DD): ")?,
        };
        tracing::debug!("Collected passenger {} of {}", i, count);
        passengers.push(passenger);
    }

    Ok(passengers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_console_prompter_strips_line_endings() {
        let mut prompter = ConsolePrompter::new(Cursor::new("Jane\r\nDoe\n"), Vec::new());
        assert_eq!(prompter.prompt("first name: ").unwrap(), "Jane");
        assert_eq!(prompter.prompt("last name: ").unwrap(), "Doe");
        let output = String::from_utf8(prompter.into_output()).unwrap();
        assert_eq!(output, "first name: last name: ");
    }

    #[test]
    fn test_console_prompter_keeps_answer_verbatim() {
        let mut prompter = ConsolePrompter::new(Cursor::new("  not-a-date \n"), Vec::new());
        assert_eq!(prompter.prompt("birthday: ").unwrap(), "  not-a-date ");
    }

    #[test]
    fn test_console_prompter_eof() {
        let mut prompter = ConsolePrompter::new(Cursor::new(""), Vec::new());
        assert!(matches!(
            prompter.prompt("first name: "),
            Err(BookingError::PromptClosed)
        ));
    }

    #[test]
    fn test_huge_count_with_closed_input() {
        let mut prompter = ConsolePrompter::new(Cursor::new(""), Vec::new());
        assert!(matches!(
            collect_passengers(&mut prompter, u32::MAX),
            Err(BookingError::PromptClosed)
        ));
        let output = String::from_utf8(prompter.into_output()).unwrap();
        assert_eq!(output, "\nenter information about passenger 1\nfirst name: ");
    }

    #[test]
    fn test_passenger_wire_keys() {
        let passenger = Passenger {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            title: "Mrs".into(),
            email: "jane@example.com".into(),
            document_id: "X1234".into(),
            birthday: "1990-01-01".into(),
        };
        let value = serde_json::to_value(&passenger).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "firstName": "Jane",
                "lastName": "Doe",
                "title": "Mrs",
                "email": "jane@example.com",
                "documentID": "X1234",
                "birthday": "1990-01-01"
            })
        );
    }
}
