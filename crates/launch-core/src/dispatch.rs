// File: crates/launch-core/src/dispatch.rs
// Summary: Binding trait, the two built-in bindings, and the control-change dispatcher.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::bindings::{payload_scatter, success_pie};
use crate::control::ControlState;
use crate::dataset::DataSet;
use crate::figure::ChartSpec;

/// Input controls on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlId {
    SiteDropdown,
    PayloadSlider,
}

impl ControlId {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SiteDropdown => "site-dropdown",
            Self::PayloadSlider => "payload-slider",
        }
    }
}

/// Graph targets on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OutputId {
    SuccessPie,
    PayloadScatter,
}

impl OutputId {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SuccessPie => "success-pie-chart",
            Self::PayloadScatter => "success-payload-scatter-chart",
        }
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl fmt::Display for OutputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for ControlId {
    type Err = DispatchError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::SiteDropdown, Self::PayloadSlider]
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DispatchError::UnknownControl(s.to_string()))
    }
}

impl FromStr for OutputId {
    type Err = DispatchError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::SuccessPie, Self::PayloadScatter]
            .into_iter()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| DispatchError::UnknownOutput(s.to_string()))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("unknown control '{0}'")]
    UnknownControl(String),
    #[error("no binding registered for output '{0}'")]
    UnknownOutput(String),
    #[error("output '{0}' already has a binding")]
    DuplicateOutput(OutputId),
}

/// Maps a set of input controls to one graph output.
pub trait Binding: Send + Sync {
    fn output(&self) -> OutputId;
    fn inputs(&self) -> &'static [ControlId];
    fn compute(&self, dataset: &DataSet, state: &ControlState) -> ChartSpec;
}

/// Site dropdown -> success pie.
pub struct SuccessPieBinding;

impl Binding for SuccessPieBinding {
    fn output(&self) -> OutputId { OutputId::SuccessPie }
    fn inputs(&self) -> &'static [ControlId] { &[ControlId::SiteDropdown] }
    fn compute(&self, dataset: &DataSet, state: &ControlState) -> ChartSpec {
        success_pie(dataset, &state.site)
    }
}

/// Site dropdown + payload slider -> payload scatter.
pub struct PayloadScatterBinding;

impl Binding for PayloadScatterBinding {
    fn output(&self) -> OutputId { OutputId::PayloadScatter }
    fn inputs(&self) -> &'static [ControlId] { &[ControlId::SiteDropdown, ControlId::PayloadSlider] }
    fn compute(&self, dataset: &DataSet, state: &ControlState) -> ChartSpec {
        payload_scatter(dataset, &state.site, state.payload)
    }
}

/// Registry of bindings, one per output, invoked explicitly on control changes.
#[derive(Default)]
pub struct Dispatcher {
    bindings: Vec<Box<dyn Binding>>,
}

impl Dispatcher {
    pub fn new() -> Self { Self::default() }

    /// Dispatcher wired with the pie and scatter bindings.
    pub fn with_default_bindings() -> Self {
        let mut d = Self::new();
        d.bindings.push(Box::new(SuccessPieBinding));
        d.bindings.push(Box::new(PayloadScatterBinding));
        d
    }

    pub fn register(&mut self, binding: impl Binding + 'static) -> Result<(), DispatchError> {
        let output = binding.output();
        if self.bindings.iter().any(|b| b.output() == output) {
            return Err(DispatchError::DuplicateOutput(output));
        }
        self.bindings.push(Box::new(binding));
        Ok(())
    }

    pub fn outputs(&self) -> impl Iterator<Item = OutputId> + '_ {
        self.bindings.iter().map(|b| b.output())
    }

    /// Bindings that declare `control` as an input.
    pub fn bindings_for(&self, control: ControlId) -> impl Iterator<Item = &(dyn Binding + 'static)> + '_ {
        self.bindings
            .iter()
            .filter(move |b| b.inputs().contains(&control))
            .map(|b| b.as_ref())
    }

    /// Re-evaluate every output that depends on `changed`.
    pub fn on_change(&self, dataset: &DataSet, changed: ControlId, state: &ControlState) -> Vec<(OutputId, ChartSpec)> {
        let updates = self
            .bindings_for(changed)
            .map(|b| (b.output(), b.compute(dataset, state)))
            .collect::<Vec<_>>();
        tracing::debug!(control = %changed, outputs = updates.len(), "dispatched control change");
        updates
    }

    /// Evaluate every output once, as on first page load.
    pub fn initial(&self, dataset: &DataSet, state: &ControlState) -> Vec<(OutputId, ChartSpec)> {
        self.bindings
            .iter()
            .map(|b| (b.output(), b.compute(dataset, state)))
            .collect()
    }

    pub fn invoke(&self, dataset: &DataSet, output: OutputId, state: &ControlState) -> Result<ChartSpec, DispatchError> {
        let binding = self
            .bindings
            .iter()
            .find(|b| b.output() == output)
            .ok_or_else(|| DispatchError::UnknownOutput(output.to_string()))?;
        Ok(binding.compute(dataset, state))
    }
}
