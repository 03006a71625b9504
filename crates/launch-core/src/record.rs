// File: crates/launch-core/src/record.rs
// Summary: Launch record model (site, payload, outcome class, booster version).

/// Binary landing outcome, the `class` column of the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Parse a `class` cell. Accepts integer or float spellings of 0 and 1.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(Self::Success),
            "0" => Some(Self::Failure),
            other => match other.parse::<f64>().ok()? {
                v if v == 1.0 => Some(Self::Success),
                v if v == 0.0 => Some(Self::Failure),
                _ => None,
            },
        }
    }

    /// Numeric class value (success=1, failure=0).
    pub const fn value(self) -> f64 {
        match self {
            Self::Success => 1.0,
            Self::Failure => 0.0,
        }
    }

    /// Class code as shown in chart legends.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Success => "1",
            Self::Failure => "0",
        }
    }
}

/// One row of the launch table. Immutable once loaded.
#[derive(Clone, Debug, PartialEq)]
pub struct LaunchRecord {
    pub site: String,
    pub payload_kg: f64,
    pub outcome: Outcome,
    pub booster_version: String,
}

impl LaunchRecord {
    pub fn new(site: impl Into<String>, payload_kg: f64, outcome: Outcome, booster_version: impl Into<String>) -> Self {
        Self { site: site.into(), payload_kg, outcome, booster_version: booster_version.into() }
    }

    /// Second whitespace-separated token of the booster version ("F9 v1.1 B1003" -> "v1.1").
    pub fn booster_category(&self) -> Option<&str> {
        self.booster_version.split_whitespace().nth(1)
    }
}
