//! Touch adapter: synthesises a drag lifecycle from raw touch samples.
//!
//! A contact only becomes a drag once it travels past the dead-zone along
//! either axis. Until then moves are left to scroll the page and lifting the
//! finger is a tap.

use super::{
    BeginOutcome, DragSession, HitTestEngine, InputAdapter, InputModality, MoveFeedback, Release,
};
use crate::{
    board::{
        domain::{Point, TaskId},
        ports::RegionProvider,
    },
    config::BoardConfig,
};
use tracing::debug;

/// Translates touch-start, touch-move and touch-end samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchAdapter {
    dead_zone: f64,
}

impl TouchAdapter {
    /// Creates an adapter using the dead-zone from `config`.
    #[must_use]
    pub const fn new(config: &BoardConfig) -> Self {
        Self {
            dead_zone: config.touch_dead_zone,
        }
    }

    /// Distance a contact must exceed along either axis to become a drag.
    #[must_use]
    pub const fn dead_zone(&self) -> f64 {
        self.dead_zone
    }

    fn exceeds_dead_zone(&self, origin: Point, at: Point) -> bool {
        let (dx, dy) = at.offset_from(origin);
        dx.abs() > self.dead_zone || dy.abs() > self.dead_zone
    }
}

impl Default for TouchAdapter {
    fn default() -> Self {
        Self::new(&BoardConfig::default())
    }
}

impl InputAdapter for TouchAdapter {
    fn modality(&self) -> InputModality {
        InputModality::Touch
    }

    fn begin(&mut self, session: &mut DragSession, task_id: TaskId, at: Point) -> BeginOutcome {
        if session.is_busy() {
            debug!(task_id = %task_id, "touch ignored, another contact is active");
            return BeginOutcome::Ignored;
        }
        session.track_touch(task_id, at);
        debug!(task_id = %task_id, "touch tracked");
        BeginOutcome::Tracking
    }

    fn move_to(
        &mut self,
        session: &mut DragSession,
        at: Point,
        regions: &dyn RegionProvider,
    ) -> MoveFeedback {
        let Some(tracking) = session.touch().copied() else {
            return MoveFeedback::default();
        };

        let mut armed_now = false;
        if !tracking.armed {
            if !self.exceeds_dead_zone(tracking.origin, at) {
                return MoveFeedback::default();
            }
            if session.arm_touch().is_some() {
                armed_now = true;
                debug!(task_id = %tracking.task_id, "touch drag armed");
            }
        }

        let column = HitTestEngine::column_at(at, &regions.column_regions());
        session.set_hover_column(column);

        MoveFeedback {
            suppress_default: true,
            armed_now,
        }
    }

    fn release(
        &mut self,
        session: &mut DragSession,
        _at: Point,
        _regions: &dyn RegionProvider,
    ) -> Release {
        let Some(tracking) = session.touch().copied() else {
            return Release::Cancelled;
        };
        let target = session.hover_column_status();
        session.reset();

        if !tracking.armed {
            return Release::Tap {
                task_id: tracking.task_id,
            };
        }
        target.map_or(Release::Cancelled, |status| Release::Transition {
            task_id: tracking.task_id,
            target: status,
        })
    }

    fn cancel(&mut self, session: &mut DragSession) {
        if session.touch().is_some() {
            session.reset();
        }
    }
}
