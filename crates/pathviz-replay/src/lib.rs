//! **pathviz-replay**: plays finished searches back as timed marks, and the
//! session controllers that drive a grid or tree view.
//!
//! A search runs to completion first. [`ReplayPlan::from_result`] then lays
//! its visited trace and path out on a timeline, and a [`Replay`] cursor
//! applies each step to a [`Markable`] structure once the caller's clock
//! reaches it. [`GridSession`] and [`TreeSession`] own the one live structure
//! of a view and hold the in-flight guard while a replay runs.

mod cursor;
mod error;
mod grid_session;
mod plan;
mod tree_session;

pub use cursor::{Markable, Replay};
pub use error::SessionError;
pub use grid_session::GridSession;
pub use plan::{Mark, ReplayPlan, ReplayStep, ReplayTiming};
pub use tree_session::TreeSession;
