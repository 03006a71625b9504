// File: crates/launch-core/src/figure.rs
// Summary: Renderer-agnostic chart descriptions (pie and scatter) produced by the bindings.

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    /// Index into the renderer's categorical palette.
    pub color: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PieSpec {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieSpec {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), slices: Vec::new() }
    }

    pub fn push(&mut self, label: impl Into<String>, value: f64) {
        let color = self.slices.len();
        self.slices.push(PieSlice { label: label.into(), value, color });
    }

    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value).sum()
    }

    pub fn value_of(&self, label: &str) -> Option<f64> {
        self.slices.iter().find(|s| s.label == label).map(|s| s.value)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub category: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScatterSpec {
    pub title: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    /// Distinct point categories in first-appearance order; a category's color is its position here.
    pub categories: Vec<String>,
    pub points: Vec<ScatterPoint>,
}

impl ScatterSpec {
    pub fn new(title: impl Into<String>, x_axis: Axis, y_axis: Axis) -> Self {
        Self { title: title.into(), x_axis, y_axis, categories: Vec::new(), points: Vec::new() }
    }

    pub fn push(&mut self, x: f64, y: f64, category: &str) {
        if !self.categories.iter().any(|c| c == category) {
            self.categories.push(category.to_string());
        }
        self.points.push(ScatterPoint { x, y, category: category.to_string() });
    }

    pub fn category_index(&self, category: &str) -> Option<usize> {
        self.categories.iter().position(|c| c == category)
    }
}

/// What to draw for one graph output. Produced fresh per binding call.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartSpec {
    Pie(PieSpec),
    Scatter(ScatterSpec),
}

impl ChartSpec {
    pub fn title(&self) -> &str {
        match self {
            Self::Pie(p) => &p.title,
            Self::Scatter(s) => &s.title,
        }
    }

    /// True when there is nothing to plot (no slices / no points).
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Pie(p) => p.slices.is_empty(),
            Self::Scatter(s) => s.points.is_empty(),
        }
    }

    pub fn as_pie(&self) -> Option<&PieSpec> {
        match self {
            Self::Pie(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_scatter(&self) -> Option<&ScatterSpec> {
        match self {
            Self::Scatter(s) => Some(s),
            _ => None,
        }
    }
}
