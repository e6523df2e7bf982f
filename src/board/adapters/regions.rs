//! Region provider backed by a fixed list of rectangles.

use crate::board::ports::{CardRegion, ColumnRegion, RegionProvider};

/// Snapshot of rendered regions.
///
/// Hosts rebuild it after each layout pass; tests build it from synthetic
/// rectangles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticRegions {
    columns: Vec<ColumnRegion>,
    cards: Vec<CardRegion>,
}

impl StaticRegions {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a column region.
    #[must_use]
    pub fn with_column(mut self, region: ColumnRegion) -> Self {
        self.columns.push(region);
        self
    }

    /// Adds a card region.
    #[must_use]
    pub fn with_card(mut self, region: CardRegion) -> Self {
        self.cards.push(region);
        self
    }

    /// Replaces every card region, keeping the columns.
    pub fn set_cards(&mut self, cards: impl IntoIterator<Item = CardRegion>) {
        self.cards = cards.into_iter().collect();
    }
}

impl RegionProvider for StaticRegions {
    fn column_regions(&self) -> Vec<ColumnRegion> {
        self.columns.clone()
    }

    fn card_regions(&self) -> Vec<CardRegion> {
        self.cards.clone()
    }
}
