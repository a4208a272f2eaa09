use crate::core::PieceCells;
use crate::types::Coordinate;

/// Everything a renderer needs from the stage, detached from it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StageSnapshot {
    pub width: i32,
    pub height: i32,
    /// Cells of the falling piece; `None` once the game is over.
    pub active: Option<PieceCells>,
    pub settled: Vec<Coordinate>,
    pub score: u32,
    pub finished: bool,
    pub pieces_spawned: u32,
    pub rows_cleared: u32,
}

impl StageSnapshot {
    /// Active piece cells followed by settled cells.
    pub fn occupied(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.active
            .iter()
            .flat_map(|cells| cells.iter().copied())
            .chain(self.settled.iter().copied())
    }

    pub fn in_stage(&self, cell: Coordinate) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }
}
