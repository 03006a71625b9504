// File: crates/launch-core/src/lib.rs
// Summary: Core library entry point; launch dataset, control values, chart bindings, and rendering.

pub mod record;
pub mod dataset;
pub mod control;
pub mod figure;
pub mod bindings;
pub mod layout;
pub mod dispatch;
pub mod theme;
pub mod render;

pub use record::{LaunchRecord, Outcome};
pub use dataset::{DataSet, LoadError};
pub use control::{ControlError, ControlState, PayloadRange, SiteSelection, ALL_SITES};
pub use figure::{Axis, ChartSpec, PieSlice, PieSpec, ScatterPoint, ScatterSpec};
pub use bindings::{payload_scatter, success_pie};
pub use layout::Layout;
pub use dispatch::{Binding, ControlId, DispatchError, Dispatcher, OutputId};
pub use theme::Theme;
pub use render::{render_png, RenderOptions};
