// File: crates/launch-core/tests/bindings.rs
// Purpose: Success pie and payload scatter semantics, including the three-launch scenario.

use launch_core::bindings::{PIE_TITLE_ALL, SCATTER_X_LABEL, SCATTER_Y_LABEL, UNKNOWN_CATEGORY};
use launch_core::{payload_scatter, success_pie, DataSet, LaunchRecord, Outcome, PayloadRange, SiteSelection};

fn three_launches() -> DataSet {
    DataSet::from_records(vec![
        LaunchRecord::new("A", 2000.0, Outcome::Success, "F9 B4"),
        LaunchRecord::new("A", 5000.0, Outcome::Failure, "F9 B5"),
        LaunchRecord::new("B", 3000.0, Outcome::Success, "F9 B5"),
    ])
    .unwrap()
}

fn site(name: &str) -> SiteSelection {
    SiteSelection::Site(name.to_string())
}

fn range(min: f64, max: f64) -> PayloadRange {
    PayloadRange::new(min, max).unwrap()
}

#[test]
fn all_sites_pie_uses_mean_rates() {
    let ds = three_launches();
    let spec = success_pie(&ds, &SiteSelection::All);
    let pie = spec.as_pie().expect("pie");
    assert_eq!(pie.title, PIE_TITLE_ALL);
    assert_eq!(pie.slices.len(), 2);
    assert_eq!(pie.value_of("A"), Some(0.5));
    assert_eq!(pie.value_of("B"), Some(1.0));
    // Means, not counts: 0.5 + 1.0 is not a distribution.
    assert_eq!(pie.total(), 1.5);
}

#[test]
fn all_sites_pie_is_ordered_by_site_name() {
    let ds = DataSet::from_records(vec![
        LaunchRecord::new("VAFB SLC-4E", 500.0, Outcome::Failure, "F9 v1.1"),
        LaunchRecord::new("CCAFS LC-40", 500.0, Outcome::Success, "F9 v1.0"),
    ])
    .unwrap();
    let spec = success_pie(&ds, &SiteSelection::All);
    let labels = spec.as_pie().unwrap().slices.iter().map(|s| s.label.as_str()).collect::<Vec<_>>();
    assert_eq!(labels, ["CCAFS LC-40", "VAFB SLC-4E"]);
}

#[test]
fn single_site_pie_uses_class_fractions() {
    let ds = three_launches();
    let spec = success_pie(&ds, &site("A"));
    let pie = spec.as_pie().unwrap();
    assert_eq!(pie.title, "Total Success Launches for Site A");
    assert_eq!(pie.value_of(Outcome::Success.label()), Some(0.5));
    assert_eq!(pie.value_of(Outcome::Failure.label()), Some(0.5));
    assert!((pie.total() - 1.0).abs() < 1e-12);
}

#[test]
fn single_site_pie_keeps_every_dataset_class() {
    // Site B never failed, yet the failure class exists in the dataset.
    let ds = three_launches();
    let pie = success_pie(&ds, &site("B"));
    let pie = pie.as_pie().unwrap();
    assert_eq!(pie.slices.len(), 2);
    assert_eq!(pie.value_of("1"), Some(1.0));
    assert_eq!(pie.value_of("0"), Some(0.0));
}

#[test]
fn site_without_records_yields_empty_pie() {
    let ds = three_launches();
    let spec = success_pie(&ds, &site("C"));
    assert!(spec.is_empty());
    assert_eq!(spec.title(), "Total Success Launches for Site C");
}

#[test]
fn scatter_filters_by_site_and_range() {
    let ds = three_launches();
    let spec = payload_scatter(&ds, &site("A"), range(0.0, 10_000.0));
    let scatter = spec.as_scatter().expect("scatter");
    let points = scatter.points.iter().map(|p| (p.x, p.y, p.category.as_str())).collect::<Vec<_>>();
    assert_eq!(points, [(2000.0, 1.0, "B4"), (5000.0, 0.0, "B5")]);
    assert_eq!(scatter.categories, ["B4", "B5"]);
    assert_eq!(scatter.title, "Payload Success vs Payload Mass for A");
    assert_eq!(scatter.x_axis.label, SCATTER_X_LABEL);
    assert_eq!(scatter.y_axis.label, SCATTER_Y_LABEL);
}

#[test]
fn scatter_range_is_boundary_inclusive() {
    let ds = three_launches();
    let spec = payload_scatter(&ds, &SiteSelection::All, range(2000.0, 3000.0));
    let xs = spec.as_scatter().unwrap().points.iter().map(|p| p.x).collect::<Vec<_>>();
    assert_eq!(xs, [2000.0, 3000.0]);

    let spec = payload_scatter(&ds, &SiteSelection::All, range(3000.0, 3000.0));
    assert_eq!(spec.as_scatter().unwrap().points.len(), 1);
}

#[test]
fn full_range_returns_everything_for_all_sites() {
    let ds = three_launches();
    let spec = payload_scatter(&ds, &SiteSelection::All, PayloadRange::full(&ds));
    let scatter = spec.as_scatter().unwrap();
    assert_eq!(scatter.points.len(), ds.len());
    assert_eq!(scatter.title, "Payload Success vs Payload Mass for All Sites");
}

#[test]
fn scatter_range_filter_matches_brute_force() {
    let ds = DataSet::from_records(
        (0..40)
            .map(|i| {
                let outcome = if i % 3 == 0 { Outcome::Failure } else { Outcome::Success };
                LaunchRecord::new(if i % 2 == 0 { "A" } else { "B" }, i as f64 * 250.0, outcome, "F9 FT")
            })
            .collect(),
    )
    .unwrap();
    for (a, b) in [(0.0, 0.0), (250.0, 1000.0), (1234.0, 5678.0), (0.0, 9750.0), (9000.0, 20_000.0)] {
        let spec = payload_scatter(&ds, &SiteSelection::All, range(a, b));
        let got = spec.as_scatter().unwrap().points.iter().map(|p| p.x).collect::<Vec<_>>();
        let want = ds
            .records()
            .iter()
            .map(|r| r.payload_kg)
            .filter(|x| *x >= a && *x <= b)
            .collect::<Vec<_>>();
        assert_eq!(got, want, "range [{a}, {b}]");
    }
}

#[test]
fn empty_selection_after_range_filter() {
    let ds = three_launches();
    let spec = payload_scatter(&ds, &site("B"), range(0.0, 1000.0));
    assert!(spec.is_empty());
    assert!(spec.as_scatter().unwrap().categories.is_empty());
}

#[test]
fn booster_without_second_token_is_unknown() {
    let ds = DataSet::from_records(vec![LaunchRecord::new("A", 10.0, Outcome::Success, "F9")]).unwrap();
    let spec = payload_scatter(&ds, &SiteSelection::All, PayloadRange::full(&ds));
    assert_eq!(spec.as_scatter().unwrap().points[0].category, UNKNOWN_CATEGORY);
}

#[test]
fn repeated_calls_are_identical() {
    let ds = three_launches();
    for sel in [SiteSelection::All, site("A"), site("B")] {
        assert_eq!(success_pie(&ds, &sel), success_pie(&ds, &sel));
        let r = range(1000.0, 4000.0);
        assert_eq!(payload_scatter(&ds, &sel, r), payload_scatter(&ds, &sel, r));
    }
}

#[test]
fn spec_serializes_with_kind_tag() {
    let ds = three_launches();
    let json = serde_json::to_value(success_pie(&ds, &SiteSelection::All)).unwrap();
    assert_eq!(json["kind"], "pie");
    assert_eq!(json["slices"][0]["label"], "A");
    assert_eq!(json["slices"][0]["value"], 0.5);

    let json = serde_json::to_value(payload_scatter(&ds, &site("A"), range(0.0, 10_000.0))).unwrap();
    assert_eq!(json["kind"], "scatter");
    assert_eq!(json["x_axis"]["label"], "Payload Mass (kg)");
    assert_eq!(json["points"].as_array().map(|a| a.len()), Some(2));
}
