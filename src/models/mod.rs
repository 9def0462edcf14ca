//! Day planning domain models.
//!
//! Plain data records passed between the planning stages. None of them
//! carries behaviour beyond simple queries; the scheduler owns the logic.
//!
//! | Model | Role |
//! |-------|------|
//! | `FixedTask` | Immovable commitment (input) |
//! | `PlanningDay` | Schedulable bounds of the day |
//! | `FreeBlock` | Unoccupied window with capacity in minutes |
//! | `CandidateActivity` | Flexible, weighted activity (input) |
//! | `Category` / `CategoryCatalog` | Source of candidate activities |
//! | `Pick` / `Assignment` | Solver output |
//! | `ScheduledEntry` | Timestamped, materialized activity |

mod assignment;
mod candidate;
mod category;
mod entry;
mod fixed_task;
mod free_block;

pub use assignment::{Assignment, Pick};
pub use candidate::{total_value, CandidateActivity, MAX_PRIORITY_VALUE};
pub use category::{
    Category, CategoryCatalog, DurationOverrides, MAX_CATEGORY_PRIORITY, MIN_CATEGORY_PRIORITY,
};
pub use entry::ScheduledEntry;
pub use fixed_task::{overlapping_pairs, FixedTask};
pub use free_block::{total_capacity, FreeBlock, PlanningDay};
