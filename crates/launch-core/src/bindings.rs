// File: crates/launch-core/src/bindings.rs
// Summary: The two chart bindings: success-rate pie and payload/outcome scatter.
// Both are pure functions of the dataset and the current control values.

use crate::control::{PayloadRange, SiteSelection};
use crate::dataset::{mean_outcome, DataSet};
use crate::figure::{Axis, ChartSpec, PieSpec, ScatterSpec};

pub const PIE_TITLE_ALL: &str = "Total Success Launches by Site";
pub const SCATTER_X_LABEL: &str = "Payload Mass (kg)";
pub const SCATTER_Y_LABEL: &str = "Success";
/// Category for boosters whose version string has no second token.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Pie of success rates.
///
/// - `All`: one slice per site (site-name order) sized by the site's mean outcome. The
///   values are rates, not counts, so they need not sum to 1.
/// - `Site(s)`: one slice per class label seen in the whole dataset, sized by the fraction
///   of `s`'s launches with that label. A site with no launches yields no slices.
pub fn success_pie(dataset: &DataSet, site: &SiteSelection) -> ChartSpec {
    match site {
        SiteSelection::All => {
            let mut pie = PieSpec::new(PIE_TITLE_ALL);
            for (name, records) in dataset.group_by_site() {
                if let Some(rate) = mean_outcome(records) {
                    pie.push(name, rate);
                }
            }
            ChartSpec::Pie(pie)
        }
        SiteSelection::Site(name) => {
            let mut pie = PieSpec::new(format!("Total Success Launches for Site {name}"));
            let outcomes = dataset.by_site(name).map(|r| r.outcome).collect::<Vec<_>>();
            if !outcomes.is_empty() {
                let n = outcomes.len() as f64;
                for &label in dataset.class_labels() {
                    let count = outcomes.iter().filter(|&&o| o == label).count();
                    pie.push(label.label(), count as f64 / n);
                }
            }
            ChartSpec::Pie(pie)
        }
    }
}

/// Scatter of payload mass (x) against outcome class (y) for launches inside `range`
/// (inclusive) and, unless `All`, at the selected site. Points are colored by booster
/// category.
pub fn payload_scatter(dataset: &DataSet, site: &SiteSelection, range: PayloadRange) -> ChartSpec {
    let title = match site {
        SiteSelection::All => "Payload Success vs Payload Mass for All Sites".to_string(),
        SiteSelection::Site(name) => format!("Payload Success vs Payload Mass for {name}"),
    };
    let mut scatter = ScatterSpec::new(
        title,
        Axis::new(SCATTER_X_LABEL, range.min(), range.max()),
        Axis::new(SCATTER_Y_LABEL, -0.5, 1.5),
    );
    for r in dataset
        .records()
        .iter()
        .filter(|r| range.contains(r.payload_kg) && site.matches(&r.site))
    {
        scatter.push(r.payload_kg, r.outcome.value(), r.booster_category().unwrap_or(UNKNOWN_CATEGORY));
    }
    ChartSpec::Scatter(scatter)
}
