//! This is the module handling the `rankings` sub-command.
//!

use eyre::Result;
use tabled::builder::Builder;
use tabled::settings::Style;
use tracing::{info, trace, warn};

use skywatch_analytics::{rank, RankingCategory, TrafficSummary};
use skywatch_formats::load_airports;
use skywatch_sources::{mock_states, Config, Opensky};

use crate::RankingsOpts;

/// Rank every known airport by the requested category and render the list.
///
#[tracing::instrument(skip(cfg))]
pub fn show_rankings(cfg: &Config, opts: &RankingsOpts) -> Result<String> {
    trace!("show_rankings");

    let airports = load_airports(None)?;

    // Airports are spread worldwide so the query cannot be restricted
    //
    let client = Opensky::with_auth(cfg.auth_for("opensky"));
    let batch = match client.states(None) {
        Ok(batch) => batch,
        Err(e) => {
            warn!("states fetch failed ({e}), using synthetic data");
            mock_states()
        }
    };

    let ranked = rank(&airports, batch.vectors(), opts.category);
    info!("ranked {} airports by {}", ranked.len(), opts.category);

    render_rankings(&ranked, opts.category)
}

fn render_rankings(ranked: &[TrafficSummary], category: RankingCategory) -> Result<String> {
    let header = vec![
        "#", "ICAO", "Name", "Nearby", "Inbound", "Ground", "Holding", "Congestion",
        "Reliability",
    ];

    let mut builder = Builder::default();
    builder.push_record(header);

    ranked.iter().enumerate().for_each(|(n, t)| {
        let row = vec![
            format!("{}", n + 1),
            t.airport.icao.clone(),
            t.airport.name.clone(),
            t.total_nearby.to_string(),
            t.inbound.to_string(),
            t.grounded.to_string(),
            t.holding.to_string(),
            format!("{:.1}", t.congestion_score),
            format!("{:.1}", t.reliability_score),
        ];
        builder.push_record(row);
    });

    let allf = builder.build().with(Style::modern()).to_string();
    Ok(format!("Airports by {category}:\n{allf}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_rankings_empty_batch() -> Result<()> {
        let airports = load_airports(None)?;
        let ranked = rank(&airports, &[], RankingCategory::Busiest);
        let out = render_rankings(&ranked, RankingCategory::Busiest)?;

        assert!(out.starts_with("Airports by busiest:"));
        assert!(out.contains("KJFK"));
        Ok(())
    }
}
