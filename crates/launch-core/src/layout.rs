// File: crates/launch-core/src/layout.rs
// Summary: Static page description (heading, site dropdown, payload slider, graph targets).

use serde::Serialize;

use crate::control::ALL_SITES;
use crate::dataset::DataSet;
use crate::dispatch::{ControlId, OutputId};

pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";
pub const SLIDER_MIN: f64 = 0.0;
pub const SLIDER_MAX: f64 = 10_000.0;
pub const SLIDER_STEP: f64 = 1_000.0;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Heading {
    pub text: String,
    pub align: &'static str,
    pub color: &'static str,
    pub font_size: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Dropdown {
    pub id: &'static str,
    pub options: Vec<DropdownOption>,
    pub value: String,
    pub placeholder: &'static str,
    pub searchable: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RangeSlider {
    pub id: &'static str,
    pub caption: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<SliderMark>,
    pub value: [f64; 2],
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphTarget {
    pub id: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Layout {
    pub heading: Heading,
    pub dropdown: Dropdown,
    pub pie: GraphTarget,
    pub slider: RangeSlider,
    pub scatter: GraphTarget,
}

impl Layout {
    /// Build the page from the dataset's sites and observed payload bounds.
    pub fn build(dataset: &DataSet) -> Self {
        let options = std::iter::once(ALL_SITES.to_string())
            .chain(dataset.sites().iter().cloned())
            .map(|s| DropdownOption { label: s.clone(), value: s })
            .collect();

        // Keep the observed maximum on the track.
        let max = if dataset.max_payload() > SLIDER_MAX {
            (dataset.max_payload() / SLIDER_STEP).ceil() * SLIDER_STEP
        } else {
            SLIDER_MAX
        };
        let marks = std::iter::successors(Some(SLIDER_MIN), |v| Some(v + SLIDER_STEP))
            .take_while(|v| *v < max)
            .map(|v| SliderMark { value: v, label: format!("{v:.0}") })
            .collect();

        Self {
            heading: Heading {
                text: DASHBOARD_TITLE.to_string(),
                align: "center",
                color: "#503D36",
                font_size: 40,
            },
            dropdown: Dropdown {
                id: ControlId::SiteDropdown.as_str(),
                options,
                value: ALL_SITES.to_string(),
                placeholder: "Select a Launch Site Here",
                searchable: true,
            },
            pie: GraphTarget { id: OutputId::SuccessPie.as_str() },
            slider: RangeSlider {
                id: ControlId::PayloadSlider.as_str(),
                caption: "Payload range (Kg):",
                min: SLIDER_MIN,
                max,
                step: SLIDER_STEP,
                marks,
                value: [dataset.min_payload(), dataset.max_payload()],
            },
            scatter: GraphTarget { id: OutputId::PayloadScatter.as_str() },
        }
    }
}
