// File: crates/launch-core/src/control.rs
// Summary: Current values of the dashboard controls (site dropdown, payload range slider).

use thiserror::Error;

use crate::dataset::DataSet;

/// Dropdown value that selects every site.
pub const ALL_SITES: &str = "All Sites";

#[derive(Debug, Error, PartialEq)]
pub enum ControlError {
    #[error("unknown launch site '{0}'")]
    UnknownSite(String),
    #[error("payload range is inverted: {min} > {max}")]
    InvertedRange { min: f64, max: f64 },
    #[error("payload range bounds must be finite")]
    NonFinite,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SiteSelection {
    All,
    Site(String),
}

impl SiteSelection {
    /// Resolve a raw dropdown value against the sites present in `dataset`.
    pub fn resolve(dataset: &DataSet, raw: &str) -> Result<Self, ControlError> {
        if raw == ALL_SITES {
            Ok(Self::All)
        } else if dataset.contains_site(raw) {
            Ok(Self::Site(raw.to_string()))
        } else {
            Err(ControlError::UnknownSite(raw.to_string()))
        }
    }

    /// Dropdown value for this selection.
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_SITES,
            Self::Site(s) => s,
        }
    }

    pub fn matches(&self, site: &str) -> bool {
        match self {
            Self::All => true,
            Self::Site(s) => s == site,
        }
    }
}

/// Inclusive payload bounds in kilograms. Contract: both finite, `min <= max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PayloadRange {
    min: f64,
    max: f64,
}

impl PayloadRange {
    pub fn new(min: f64, max: f64) -> Result<Self, ControlError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ControlError::NonFinite);
        }
        if min > max {
            return Err(ControlError::InvertedRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Observed payload bounds of the whole dataset.
    pub fn full(dataset: &DataSet) -> Self {
        Self { min: dataset.min_payload(), max: dataset.max_payload() }
    }

    pub const fn min(&self) -> f64 { self.min }
    pub const fn max(&self) -> f64 { self.max }

    #[inline]
    pub fn contains(&self, payload_kg: f64) -> bool {
        payload_kg >= self.min && payload_kg <= self.max
    }
}

impl TryFrom<[f64; 2]> for PayloadRange {
    type Error = ControlError;
    fn try_from([min, max]: [f64; 2]) -> Result<Self, Self::Error> {
        Self::new(min, max)
    }
}

/// Snapshot of every control value, passed by value into a binding.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlState {
    pub site: SiteSelection,
    pub payload: PayloadRange,
}

impl ControlState {
    /// Values the page starts with: all sites and the full payload range.
    pub fn initial(dataset: &DataSet) -> Self {
        Self { site: SiteSelection::All, payload: PayloadRange::full(dataset) }
    }

    /// Validate raw control values coming from the browser.
    pub fn resolve(dataset: &DataSet, site: &str, payload: [f64; 2]) -> Result<Self, ControlError> {
        Ok(Self {
            site: SiteSelection::resolve(dataset, site)?,
            payload: PayloadRange::try_from(payload)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{LaunchRecord, Outcome};

    fn dataset() -> DataSet {
        DataSet::from_records(vec![
            LaunchRecord::new("A", 100.0, Outcome::Success, "F9 B4"),
            LaunchRecord::new("B", 900.0, Outcome::Failure, "F9 B5"),
        ])
        .unwrap()
    }

    #[test]
    fn resolve_accepts_sentinel_and_known_sites() {
        let ds = dataset();
        assert_eq!(SiteSelection::resolve(&ds, ALL_SITES), Ok(SiteSelection::All));
        assert_eq!(SiteSelection::resolve(&ds, "B"), Ok(SiteSelection::Site("B".into())));
        assert_eq!(
            SiteSelection::resolve(&ds, "C"),
            Err(ControlError::UnknownSite("C".into()))
        );
        // Sentinel matching is exact, like the dropdown value.
        assert!(SiteSelection::resolve(&ds, "ALL").is_err());
    }

    #[test]
    fn payload_range_rejects_inverted_and_nan() {
        assert!(PayloadRange::new(5.0, 5.0).is_ok());
        assert_eq!(
            PayloadRange::new(6.0, 5.0),
            Err(ControlError::InvertedRange { min: 6.0, max: 5.0 })
        );
        assert_eq!(PayloadRange::new(f64::NAN, 5.0), Err(ControlError::NonFinite));
    }

    #[test]
    fn payload_range_is_boundary_inclusive() {
        let r = PayloadRange::new(100.0, 900.0).unwrap();
        assert!(r.contains(100.0));
        assert!(r.contains(900.0));
        assert!(!r.contains(99.999));
        assert!(!r.contains(900.001));
    }

    #[test]
    fn resolve_validates_raw_payload_pair() {
        let ds = dataset();
        let s = ControlState::resolve(&ds, "A", [100.0, 500.0]).unwrap();
        assert_eq!(s.payload, PayloadRange::new(100.0, 500.0).unwrap());
        assert_eq!(
            ControlState::resolve(&ds, "A", [500.0, 100.0]),
            Err(ControlError::InvertedRange { min: 500.0, max: 100.0 })
        );
    }

    #[test]
    fn initial_state_spans_dataset() {
        let ds = dataset();
        let s = ControlState::initial(&ds);
        assert_eq!(s.site, SiteSelection::All);
        assert_eq!((s.payload.min(), s.payload.max()), (100.0, 900.0));
    }
}
