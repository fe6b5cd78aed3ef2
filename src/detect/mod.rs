//! Network-defense vignettes: anomaly scoring, packet inspection, a
//! SHA-256 challenge/response, and a time-based one-time password.

pub mod anomaly;
pub mod challenge;
pub mod inspect;
pub mod otp;

pub use anomaly::{anomaly_score, AnomalyDetector};
pub use challenge::{challenge_response, verify_response};
pub use inspect::{Inspection, PacketInspector};
pub use otp::{totp, verify_totp};

use crate::error::Result;
use crate::report::Report;

/// Demo: runs the four defenses against sample traffic.
pub fn demo(_seed: u64) -> Result<Report> {
    let mut report = Report::new("Cyber defense suite");

    // Anomaly scoring: baseline 100 req/s, observed 180.
    let detector = AnomalyDetector::new(1.5)?;
    let score = anomaly_score(100.0, 180.0)?;
    report.line(format!(
        "traffic 100 -> 180 req/s: score {score:.2}, anomalous: {}",
        detector.is_anomalous(100.0, 180.0)?
    ));
    report.metric("anomaly score", score);

    // Packet inspection.
    let inspector = PacketInspector::new(vec![
        ("DROP TABLE".to_owned(), "sql injection".to_owned()),
        ("../".to_owned(), "path traversal".to_owned()),
    ]);
    let verdict = inspector.inspect("GET /users?id=1; DROP TABLE users");
    match &verdict {
        Inspection::Blocked { rule } => report.line(format!("packet blocked: {rule}")),
        Inspection::Clean => report.line("packet passed inspection"),
    };
    report.metric(
        "packets blocked",
        f64::from(u8::from(matches!(verdict, Inspection::Blocked { .. }))),
    );

    // Challenge/response handshake.
    let response = challenge_response("shared-secret", "nonce-42");
    let verified = verify_response("shared-secret", "nonce-42", &response);
    report.line(format!("challenge response: {response}"));
    report.metric("handshake verified", f64::from(u8::from(verified)));

    // TOTP at a fixed instant so the report is reproducible.
    let code = totp("shared-secret", 1_700_000_000);
    report.line(format!("one-time password: {code:06}"));
    report.metric("otp digits", 6.0);
    Ok(report)
}
