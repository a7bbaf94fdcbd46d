//! Module describing all possible commands and sub-commands to the `skywatchctl` main driver
//!
//! We have six main commands:
//!
//! - `airports` lists the embedded airport reference data.
//! - `states` fetches the current state vectors, with per-aircraft phase.
//! - `congestion ICAO` assesses the traffic situation around one airport.
//! - `rankings [-c CATEGORY]` orders every known airport by traffic.
//! - `traffic ICAO` shows recent arrivals/departures and their hourly shape.
//! - `weather ICAO` shows the current conditions at one airport.
//!
//! When a live fetch fails (rate-limited, offline) the commands fall back to
//! synthetic data from the `sources` crate rather than aborting.
//!

use std::path::PathBuf;

use clap::{crate_authors, crate_description, crate_name, crate_version, Parser};

use skywatch_analytics::RankingCategory;

/// CLI options
#[derive(Parser)]
#[command(disable_version_flag = true)]
#[clap(name = crate_name!(), about = crate_description!())]
#[clap(version = crate_version!(), author = crate_authors!())]
pub struct Opts {
    /// configuration file.
    #[clap(short = 'c', long)]
    pub config: Option<PathBuf>,
    /// debug mode (hierarchical span output).
    #[clap(short = 'D', long = "debug")]
    pub debug: bool,
    /// Verbose mode.
    #[clap(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// Display utility full version.
    #[clap(short = 'V', long)]
    pub version: bool,
    /// Sub-commands (see below).
    #[clap(subcommand)]
    pub subcmd: SubCommand,
}

// ------

/// All sub-commands:
///
/// `airports`
/// `congestion ICAO`
/// `rankings [-c CATEGORY]`
/// `states [-a ICAO] [-r KM]`
/// `traffic [-w HOURS] ICAO`
/// `weather ICAO`
///
#[derive(Debug, Parser)]
pub enum SubCommand {
    /// List the known airports
    Airports,
    /// Assess the congestion around one airport
    Congestion(AirportOpts),
    /// Rank all known airports by traffic
    Rankings(RankingsOpts),
    /// Show current aircraft state vectors
    States(StatesOpts),
    /// Show recent arrivals/departures for one airport
    Traffic(TrafficOpts),
    /// Show the current weather at one airport
    Weather(AirportOpts),
    /// List all package versions
    Version,
}

// ------

/// Commands taking just an airport code.
///
#[derive(Debug, Parser)]
pub struct AirportOpts {
    /// Airport, ICAO or IATA code
    pub icao: String,
}

// ------

/// Options for the `rankings` sub-command.
///
#[derive(Debug, Parser)]
pub struct RankingsOpts {
    /// Ranking category (busiest, reliable, holding)
    #[clap(short = 'c', long, default_value = "busiest")]
    pub category: RankingCategory,
}

// ------

/// Options for the `states` sub-command.
///
#[derive(Debug, Parser)]
pub struct StatesOpts {
    /// Restrict to the area around this airport (ICAO or IATA)
    #[clap(short = 'a', long)]
    pub airport: Option<String>,
    /// Radius around the airport in km
    #[clap(short = 'r', long, default_value = "100")]
    pub radius: u32,
}

// ------

/// Options for the `traffic` sub-command.
///
#[derive(Debug, Parser)]
pub struct TrafficOpts {
    /// Look this many hours back
    #[clap(short = 'w', long, default_value = "24")]
    pub window: u32,
    /// Airport, ICAO or IATA code
    pub icao: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opts_rankings_category() {
        let opts = Opts::try_parse_from(["skywatchctl", "rankings", "-c", "holding"]).unwrap();
        match opts.subcmd {
            SubCommand::Rankings(r) => assert_eq!(RankingCategory::Holding, r.category),
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn test_opts_states_defaults() {
        let opts = Opts::try_parse_from(["skywatchctl", "states"]).unwrap();
        match opts.subcmd {
            SubCommand::States(s) => {
                assert_eq!(None, s.airport);
                assert_eq!(100, s.radius);
            }
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn test_opts_bad_category() {
        assert!(Opts::try_parse_from(["skywatchctl", "rankings", "-c", "loudest"]).is_err());
    }

    #[test]
    fn test_opts_config_before_subcmd() {
        let opts =
            Opts::try_parse_from(["skywatchctl", "-c", "/tmp/creds.hcl", "weather", "EGLL"])
                .unwrap();
        assert_eq!(Some(PathBuf::from("/tmp/creds.hcl")), opts.config);
    }
}
