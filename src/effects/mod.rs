//! Effects for the presentation layer.
//!
//! - `Effect`: one instruction for the UI (render, message, enable input)
//! - `Effects`: the ordered list a transition produces
//! - `Presenter`: the trait a UI implements to receive effects
//!
//! Transitions never touch the UI directly. They return effects, and the
//! controller hands them to whatever `Presenter` it owns.

mod effect;
mod presenter;

pub use effect::{Effect, Effects};
pub use presenter::{Presenter, RecordingPresenter, TracingPresenter};
