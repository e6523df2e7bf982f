//! Shared world state for completion gate BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use planboard::{
    board::{
        adapters::{memory::InMemoryTaskStore, regions::StaticRegions},
        domain::{Point, Rect, TaskId, TaskStatus},
        ports::ColumnRegion,
        services::{BoardResult, ReleaseOutcome, TaskBoard},
    },
    config::BoardConfig,
};
use rstest::fixture;

/// Board type used by the BDD world.
pub type TestBoard = TaskBoard<InMemoryTaskStore, DefaultClock>;

/// Scenario world for completion gate behaviour tests.
pub struct BoardWorld {
    pub store: Arc<InMemoryTaskStore>,
    pub board: TestBoard,
    pub regions: StaticRegions,
    pub task_id: Option<TaskId>,
    pub last_release: Option<BoardResult<ReleaseOutcome>>,
}

impl BoardWorld {
    /// Creates a world with an empty store and three side-by-side columns.
    ///
    /// # Panics
    ///
    /// Panics if the fixed column bounds are rejected.
    #[must_use]
    pub fn new() -> Self {
        let store = Arc::new(InMemoryTaskStore::new());
        let board = TaskBoard::new(
            Arc::clone(&store),
            Arc::new(DefaultClock),
            &BoardConfig::default(),
        );
        let regions = TaskStatus::ALL
            .into_iter()
            .zip([0.0, 110.0, 220.0])
            .fold(StaticRegions::new(), |regions, (status, left)| {
                let bounds = Rect::new(left, 0.0, 100.0, 400.0).expect("valid column bounds");
                regions.with_column(ColumnRegion::new(status, bounds))
            });

        Self {
            store,
            board,
            regions,
            task_id: None,
            last_release: None,
        }
    }

    /// Task created by the scenario.
    ///
    /// # Errors
    ///
    /// Returns an error when no task has been created yet.
    pub fn task_id(&self) -> Result<TaskId, eyre::Report> {
        self.task_id
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Centre of the column showing `status`.
#[must_use]
pub const fn column_centre(status: TaskStatus) -> Point {
    match status {
        TaskStatus::Pending => Point::new(50.0, 200.0),
        TaskStatus::InProgress => Point::new(160.0, 200.0),
        TaskStatus::Done => Point::new(270.0, 200.0),
    }
}

/// Parses a status placeholder.
///
/// # Errors
///
/// Returns an error for unknown status strings.
pub fn parse_status(raw: &str) -> Result<TaskStatus, eyre::Report> {
    TaskStatus::try_from(raw).map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
