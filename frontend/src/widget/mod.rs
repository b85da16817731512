//! The upload widget.
//!
//! - [`UploadWidget`] - state machine (pure, natively testable)
//! - [`WidgetEvent`] / [`Effect`] - messages in and side effects out
//! - [`RequestKind`] / [`ProgressScript`] - cosmetic progress script
//! - [`Dispatcher`] - Leptos runtime driving the state machine

mod controller;
mod dispatcher;
mod event;
mod progress;

pub use controller::*;
pub use dispatcher::*;
pub use event::*;
pub use progress::*;
