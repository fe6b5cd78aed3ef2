//! Business-forecast vignettes.

pub mod growth;

pub use growth::{business_cycle, compound_growth, innovation_impact, market_disruption};

use crate::error::Result;
use crate::report::Report;

/// Demo: projects the sample business climate and market shares.
pub fn demo(_seed: u64) -> Result<Report> {
    let climate = 0.75;
    let trend = 0.05;
    let volatility = 0.02;
    let periods = 10;

    let projected = growth::compound_growth(climate, trend, volatility, periods)?;
    let cycle = growth::business_cycle(1.0, 0.03, 12.0, 0.1)?;

    let mut shares = vec![0.4, 0.3, 0.2, 0.1];
    growth::market_disruption(&mut shares, 0.2, &[1.0, 0.8, 0.5, 0.3])?;
    let impact = growth::innovation_impact(&[1.1, 1.05, 0.95])?;

    let mut report = Report::new("Business forecast");
    report.line(format!(
        "climate {climate} with trend {trend} over {periods} periods"
    ));
    report.metric("projected climate", projected);
    report.metric("cycle factor", cycle);
    report.line(format!("disrupted shares: {shares:?}"));
    report.metric("leading share", shares[0]);
    report.metric("innovation impact", impact);
    Ok(report)
}
