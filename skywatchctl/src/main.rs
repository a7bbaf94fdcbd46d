use clap::{crate_authors, crate_description, crate_version, Parser};
use eyre::Result;
use tracing::trace;

use skywatch_common::init_logging;
use skywatch_sources::Config;
use skywatchctl::{
    list_all_airports, show_congestion, show_rankings, show_states, show_traffic, show_weather,
    Opts, SubCommand,
};

/// Binary name, using a different binary name
pub const NAME: &str = env!("CARGO_BIN_NAME");
/// Binary version
pub const VERSION: &str = crate_version!();
/// Authors
pub const AUTHORS: &str = crate_authors!();

fn main() -> Result<()> {
    let opts = Opts::parse();
    let cfn = opts.config.clone();

    // Initialise logging.
    //
    init_logging(opts.debug)?;

    // Config only has the credentials for every source.
    //
    let cfg = Config::load(cfn)?;

    // Banner
    //
    banner();

    let subcmd = &opts.subcmd;
    handle_subcmd(&cfg, subcmd)
}

pub fn handle_subcmd(cfg: &Config, subcmd: &SubCommand) -> Result<()> {
    match subcmd {
        // Handle `airports`
        //
        SubCommand::Airports => {
            trace!("airports");

            println!("{}", list_all_airports()?);
        }

        // Handle `congestion ICAO`
        //
        SubCommand::Congestion(copts) => {
            trace!("congestion");

            println!("{}", show_congestion(cfg, copts)?);
        }

        // Handle `rankings [-c CATEGORY]`
        //
        SubCommand::Rankings(ropts) => {
            trace!("rankings");

            println!("{}", show_rankings(cfg, ropts)?);
        }

        // Handle `states [-a ICAO] [-r KM]`
        //
        SubCommand::States(sopts) => {
            trace!("states");

            println!("{}", show_states(cfg, sopts)?);
        }

        // Handle `traffic [-w HOURS] ICAO`
        //
        SubCommand::Traffic(topts) => {
            trace!("traffic");

            println!("{}", show_traffic(cfg, topts)?);
        }

        // Handle `weather ICAO`
        //
        SubCommand::Weather(wopts) => {
            trace!("weather");

            println!("{}", show_weather(wopts)?);
        }

        // Standalone `version` command
        //
        SubCommand::Version => {
            eprintln!("Modules: ");
            eprintln!("\t{}", skywatch_common::version());
            eprintln!("\t{}", skywatch_formats::version());
            eprintln!("\t{}", skywatch_analytics::version());
            eprintln!("\t{}", skywatch_sources::version());
            eprintln!("\t{}", skywatchctl::version());
        }
    }
    Ok(())
}

/// Return our version number
///
#[inline]
pub fn version() -> String {
    format!("{}/{}", NAME, VERSION)
}

/// Display banner
///
fn banner() {
    eprintln!(
        r##"
{}/{} by {}
{}
"##,
        NAME,
        VERSION,
        AUTHORS,
        crate_description!()
    )
}
