//! Domain model for the task board.
//!
//! Tasks, their workflow status, the derived column views and the view-space
//! geometry used for hit-testing. Nothing here knows how tasks are stored or
//! how the board is rendered.

mod column;
mod error;
mod geometry;
mod ids;
mod task;

pub use column::{Column, ColumnProjection, SubjectFilter};
pub use error::{BoardDomainError, ParseActivityTypeError, ParseTaskStatusError};
pub use geometry::{Point, Rect};
pub use ids::{SubjectId, TaskId};
pub use task::{ActivityType, Grade, Task, TaskPatch, TaskStatus};
