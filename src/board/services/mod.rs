//! Application services for the drag-and-reclassify interaction.
//!
//! Input adapters feed the [`DragSession`], the [`HitTestEngine`] resolves
//! drop targets, and the completion gate decides whether a drop commits at
//! once or waits for confirmation. [`TaskBoard`] wires them together.

mod board;
mod gate;
mod input;
mod pointer;
mod session;
mod touch;

pub use board::{BoardError, BoardResult, ReleaseOutcome, TaskBoard};
pub use gate::{
    CommittedTransition, CompletionDialog, CompletionGate, CompletionGateService,
    CompletionRequest, GateError, TransitionDecision, TransitionGate, TransitionOutcome,
};
pub use hit_test::HitTestEngine;
pub use input::{BeginOutcome, InputAdapter, MoveFeedback, Release};
pub use pointer::{DragPayload, PointerAdapter};
pub use session::{DragSession, HoverPosition, InputModality, TouchTracking};
pub use touch::TouchAdapter;
