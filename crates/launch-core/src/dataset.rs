// File: crates/launch-core/src/dataset.rs
// Summary: Immutable launch table loaded once from CSV, with derived payload bounds and site queries.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::record::{LaunchRecord, Outcome};

pub const COL_SITE: &str = "Launch Site";
pub const COL_PAYLOAD: &str = "Payload Mass (kg)";
pub const COL_CLASS: &str = "class";
pub const COL_BOOSTER: &str = "Booster Version";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open launch data file '{}'", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("launch data is missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("row {row}: column '{column}' has invalid value '{value}'")]
    Malformed { row: usize, column: &'static str, value: String },
    #[error("launch data is not valid CSV")]
    Csv(#[from] csv::Error),
    #[error("launch data contains no rows")]
    Empty,
}

/// Read-only launch table. Payload bounds and the site list are computed once at construction.
#[derive(Clone, Debug)]
pub struct DataSet {
    records: Vec<LaunchRecord>,
    sites: Vec<String>,
    class_labels: Vec<Outcome>,
    min_payload: f64,
    max_payload: f64,
}

impl DataSet {
    /// Load the table from a CSV file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .map_err(|source| LoadError::Open { path: path.to_path_buf(), source })?;
        let ds = Self::from_reader(file)?;
        tracing::info!(
            path = %path.display(),
            rows = ds.len(),
            sites = ds.sites.len(),
            "loaded launch records"
        );
        Ok(ds)
    }

    /// Parse CSV with a header row. Columns are matched by trimmed, case-insensitive name;
    /// columns other than the four required ones are ignored.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr
            .headers()?
            .iter()
            .map(|h| h.trim().to_lowercase())
            .collect::<Vec<_>>();
        tracing::debug!(?headers, "launch data headers");

        let idx = |name: &'static str| -> Result<usize, LoadError> {
            let want = name.to_lowercase();
            headers
                .iter()
                .position(|h| *h == want)
                .ok_or(LoadError::MissingColumn(name))
        };
        let i_site = idx(COL_SITE)?;
        let i_payload = idx(COL_PAYLOAD)?;
        let i_class = idx(COL_CLASS)?;
        let i_booster = idx(COL_BOOSTER)?;

        let mut records = Vec::new();
        for (n, rec) in rdr.records().enumerate() {
            let rec = rec?;
            let row = n + 1;
            let cell = |i: usize| rec.get(i).unwrap_or("");
            let malformed = |column: &'static str, value: &str| LoadError::Malformed {
                row,
                column,
                value: value.to_string(),
            };

            let site = cell(i_site);
            if site.is_empty() {
                return Err(malformed(COL_SITE, site));
            }
            let payload_raw = cell(i_payload);
            let payload_kg = payload_raw
                .parse::<f64>()
                .ok()
                .filter(|v| valid_payload(*v))
                .ok_or_else(|| malformed(COL_PAYLOAD, payload_raw))?;
            let class_raw = cell(i_class);
            let outcome = Outcome::parse(class_raw).ok_or_else(|| malformed(COL_CLASS, class_raw))?;

            records.push(LaunchRecord::new(site, payload_kg, outcome, cell(i_booster)));
        }

        Self::from_records(records)
    }

    /// Build from already-parsed records. Fails when `records` is empty or a payload is
    /// negative or non-finite.
    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self, LoadError> {
        if records.is_empty() {
            return Err(LoadError::Empty);
        }
        let mut sites: Vec<String> = Vec::new();
        let mut class_labels: Vec<Outcome> = Vec::new();
        let mut min_payload = f64::INFINITY;
        let mut max_payload = f64::NEG_INFINITY;
        for (n, r) in records.iter().enumerate() {
            if !valid_payload(r.payload_kg) {
                return Err(LoadError::Malformed {
                    row: n + 1,
                    column: COL_PAYLOAD,
                    value: r.payload_kg.to_string(),
                });
            }
            if !sites.iter().any(|s| *s == r.site) {
                sites.push(r.site.clone());
            }
            if !class_labels.contains(&r.outcome) {
                class_labels.push(r.outcome);
            }
            min_payload = min_payload.min(r.payload_kg);
            max_payload = max_payload.max(r.payload_kg);
        }
        Ok(Self { records, sites, class_labels, min_payload, max_payload })
    }

    pub fn records(&self) -> &[LaunchRecord] { &self.records }
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
    pub fn min_payload(&self) -> f64 { self.min_payload }
    pub fn max_payload(&self) -> f64 { self.max_payload }

    /// Distinct launch sites in order of first appearance.
    pub fn sites(&self) -> &[String] { &self.sites }

    /// Distinct outcome classes in order of first appearance.
    pub fn class_labels(&self) -> &[Outcome] { &self.class_labels }

    pub fn contains_site(&self, site: &str) -> bool {
        self.sites.iter().any(|s| s == site)
    }

    pub fn by_site<'a>(&'a self, site: &'a str) -> impl Iterator<Item = &'a LaunchRecord> + 'a {
        self.records.iter().filter(move |r| r.site == site)
    }

    /// Records grouped by site, keyed in site-name order.
    pub fn group_by_site(&self) -> BTreeMap<&str, Vec<&LaunchRecord>> {
        let mut groups: BTreeMap<&str, Vec<&LaunchRecord>> = BTreeMap::new();
        for r in &self.records {
            groups.entry(r.site.as_str()).or_default().push(r);
        }
        groups
    }

    /// Mean outcome value for `site`; `None` when the site has no records.
    pub fn success_rate(&self, site: &str) -> Option<f64> {
        mean_outcome(self.by_site(site))
    }
}

#[inline]
fn valid_payload(kg: f64) -> bool {
    kg.is_finite() && kg >= 0.0
}

/// Mean of outcome values (success=1, failure=0); `None` for an empty input.
pub fn mean_outcome<'a>(records: impl IntoIterator<Item = &'a LaunchRecord>) -> Option<f64> {
    let (sum, n) = records
        .into_iter()
        .fold((0.0, 0usize), |(sum, n), r| (sum + r.outcome.value(), n + 1));
    (n > 0).then(|| sum / n as f64)
}
