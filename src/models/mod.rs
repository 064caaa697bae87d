//! Delivery scheduling domain models.
//!
//! Provides the task value type and the schedule produced from it.
//!
//! # Domain Mappings
//!
//! | delivery-schedule | Logistics | Field Service |
//! |-------------------|-----------|---------------|
//! | Task | Delivery | Work Order |
//! | Vehicle index | Truck | Technician |
//! | Schedule | Dispatch Plan | Day Roster |

mod schedule;
mod task;

pub use schedule::{Assignment, Schedule};
pub use task::{Task, TaskId, PROFIT_PER_TIME_UNIT};
