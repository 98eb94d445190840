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

//! CLI to search for a flight and book it.

use chrono::NaiveDate;
use clap::Parser;
use skybook_booking_agent::{
    ConsolePrompter, DEFAULT_BOOKING_URL, DEFAULT_SEARCH_URL, Endpoints, SearchConfig,
    TripType, WreqTransport, run_booking,
};
use std::process::ExitCode;

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "skybook-flights")]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Departure date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    date: NaiveDate,

    /// Origin airport code (e.g., PRG)
    #[arg(long)]
    from_location: String,

    /// Destination airport code, omit to see flights to anywhere
    #[arg(long)]
    to_location: Option<String>,

    /// Return flight, number of days in destination
    #[arg(long)]
    return_length: Option<u32>,

    /// One-way flight (default)
    #[arg(long)]
    one_way: bool,

    /// Find the cheapest flight (default)
    #[arg(long)]
    cheapest: bool,

    /// Find the fastest flight
    #[arg(long)]
    fastest: bool,

    /// Number of passengers
    #[arg(long)]
    passengers: Option<u32>,

    /// Number of bags
    #[arg(long)]
    bags: Option<u32>,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30")]
    timeout_secs: u64,

    #[arg(long, hide = true, default_value = DEFAULT_SEARCH_URL)]
    search_url: String,

    #[arg(long, hide = true, default_value = DEFAULT_BOOKING_URL)]
    booking_url: String,

    /// Verbose output
    #[arg(short, long, default_value = "false")]
    verbose: bool,
}

impl CliArgs {
    fn search_config(&self) -> SearchConfig {
        SearchConfig::builder(self.from_location.clone(), self.date)
            .to_location(self.to_location.clone())
            .return_length(self.return_length)
            .cheapest(self.cheapest)
            .fastest(self.fastest)
            .passengers(self.passengers)
            .bags(self.bags)
            .build()
    }

    fn endpoints(&self) -> Endpoints {
        Endpoints {
            search_url: self.search_url.clone(),
            booking_url: self.booking_url.clone(),
        }
    }
}

/// Configure logging based on verbosity level.
/// Logs go to stderr, stdout belongs to the prompts and the confirmation.
fn setup_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::ERROR
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    setup_logging(args.verbose);

    tracing::info!("Starting skybook-flights CLI");
    tracing::debug!("Args: {:?}", args);

    let config = args.search_config();
    if args.one_way && config.trip_type() == TripType::Return {
        tracing::warn!("--one-way ignored: --return-length makes this a return search");
    }
    let endpoints = args.endpoints();

    let transport = match WreqTransport::new(args.timeout_secs) {
        Ok(transport) => transport,
        Err(e) => {
            eprintln!("{:#}", e);
            return ExitCode::FAILURE;
        }
    };
    let mut prompter = ConsolePrompter::stdio();

    match run_booking(&config, &transport, &mut prompter, &endpoints).await {
        Ok(pnr) => {
            println!("\nbooking confirmation: {}", pnr);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!("Run failed: {:?}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
