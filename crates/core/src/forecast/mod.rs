//! Month-end balance projection.
//!
//! Linear extrapolation of the month-to-date burn rate - by design, for
//! transparency over accuracy. Not a statistical model.

pub mod engine;
pub mod types;

pub use engine::project_month_end;
pub use types::{Forecast, ForecastStatus};
