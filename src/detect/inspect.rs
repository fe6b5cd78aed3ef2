//! Signature-based packet inspection.

/// Verdict for one inspected payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inspection {
    /// No rule matched.
    Clean,
    /// The named rule matched.
    Blocked {
        /// Label of the first matching rule.
        rule: String,
    },
}

/// Matches payloads against an ordered list of substring signatures.
#[derive(Debug, Clone, Default)]
pub struct PacketInspector {
    rules: Vec<(String, String)>,
}

impl PacketInspector {
    /// Creates an inspector from `(pattern, label)` rules. Rules are
    /// checked in order and the first match wins.
    #[must_use]
    pub fn new(rules: Vec<(String, String)>) -> Self {
        Self { rules }
    }

    /// Adds a rule after the existing ones.
    pub fn add_rule(&mut self, pattern: impl Into<String>, label: impl Into<String>) {
        self.rules.push((pattern.into(), label.into()));
    }

    /// Number of configured rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Inspects one payload.
    #[must_use]
    pub fn inspect(&self, payload: &str) -> Inspection {
        for (pattern, label) in &self.rules {
            if payload.contains(pattern.as_str()) {
                return Inspection::Blocked { rule: label.clone() };
            }
        }
        Inspection::Clean
    }

    /// Inspects a batch, returning the count of blocked payloads.
    #[must_use]
    pub fn inspect_batch(&self, payloads: &[&str]) -> usize {
        payloads
            .iter()
            .filter(|p| matches!(self.inspect(p), Inspection::Blocked { .. }))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inspector() -> PacketInspector {
        PacketInspector::new(vec![
            ("DROP TABLE".to_owned(), "sql injection".to_owned()),
            ("../".to_owned(), "path traversal".to_owned()),
        ])
    }

    #[test]
    fn test_clean_payload() {
        assert_eq!(inspector().inspect("GET /index.html"), Inspection::Clean);
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let verdict = inspector().inspect("DROP TABLE ../etc/passwd");
        assert_eq!(
            verdict,
            Inspection::Blocked {
                rule: "sql injection".to_owned()
            }
        );
    }

    #[test]
    fn test_match_is_case_sensitive() {
        assert_eq!(inspector().inspect("drop table users"), Inspection::Clean);
    }

    #[test]
    fn test_no_rules_passes_everything() {
        let empty = PacketInspector::default();
        assert_eq!(empty.inspect("DROP TABLE users"), Inspection::Clean);
    }

    #[test]
    fn test_batch_count() {
        let payloads = ["GET /", "GET /../../etc/passwd", "DROP TABLE users"];
        assert_eq!(inspector().inspect_batch(&payloads), 2);
    }

    #[test]
    fn test_add_rule() {
        let mut i = inspector();
        i.add_rule("<script>", "xss");
        assert_eq!(i.rule_count(), 3);
        assert_eq!(
            i.inspect("<script>alert(1)</script>"),
            Inspection::Blocked {
                rule: "xss".to_owned()
            }
        );
    }
}
