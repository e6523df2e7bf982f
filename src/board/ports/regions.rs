//! Region provider port: where columns and cards are currently rendered.
//!
//! The hit-test engine asks for regions at query time, so it never depends
//! on how the view layer lays out or tags its elements.

use crate::board::domain::{ParseTaskStatusError, Rect, TaskId, TaskStatus};

/// Attribute the view layer puts on each column element; its value is the
/// column's status string (for example `in_progress`).
pub const COLUMN_STATUS_ATTRIBUTE: &str = "data-column-status";

/// Rendered bounds of one board column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnRegion {
    /// Status of the tasks the column holds.
    pub status: TaskStatus,
    /// Bounding rectangle in view coordinates.
    pub rect: Rect,
}

impl ColumnRegion {
    /// Creates a column region.
    #[must_use]
    pub const fn new(status: TaskStatus, rect: Rect) -> Self {
        Self { status, rect }
    }

    /// Builds a region from the value of [`COLUMN_STATUS_ATTRIBUTE`].
    ///
    /// # Errors
    ///
    /// Returns [`ParseTaskStatusError`] when the attribute value is not a
    /// known status.
    pub fn from_tag(attribute_value: &str, rect: Rect) -> Result<Self, ParseTaskStatusError> {
        let status = TaskStatus::try_from(attribute_value)?;
        Ok(Self::new(status, rect))
    }
}

/// Rendered bounds of one task card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardRegion {
    /// Task shown by the card.
    pub task_id: TaskId,
    /// Bounding rectangle in view coordinates.
    pub rect: Rect,
}

impl CardRegion {
    /// Creates a card region.
    #[must_use]
    pub const fn new(task_id: TaskId, rect: Rect) -> Self {
        Self { task_id, rect }
    }
}

/// Supplies the currently rendered drop regions.
pub trait RegionProvider {
    /// Column regions, in the order they should be tested.
    fn column_regions(&self) -> Vec<ColumnRegion>;

    /// Card regions, in the order they should be tested.
    fn card_regions(&self) -> Vec<CardRegion>;
}
