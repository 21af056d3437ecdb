//! Manhattan-distance estimate of the moves left to reach a goal board.
//!
//! Each slide moves exactly one tile by one cell, so the summed per-tile
//! distance never overestimates (admissible) and changes by exactly one
//! along any edge (consistent).

use crate::puzzle::{Board, CELLS, SIZE};

/// Sum of per-tile Manhattan distances to a fixed goal.
#[derive(Debug, Clone)]
pub struct Manhattan {
    /// `(row, col)` each tile value occupies in the goal.
    targets: [(usize, usize); CELLS],
}

impl Manhattan {
    pub fn new(goal: &Board) -> Self {
        let mut targets = [(0, 0); CELLS];
        for (i, &value) in goal.tiles().iter().enumerate() {
            targets[value as usize] = (i / SIZE, i % SIZE);
        }
        Self { targets }
    }

    pub fn estimate(&self, board: &Board) -> u32 {
        board
            .tiles()
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value != 0)
            .map(|(i, &value)| {
                let (target_row, target_col) = self.targets[value as usize];
                let row = i / SIZE;
                let col = i % SIZE;
                (row.abs_diff(target_row) + col.abs_diff(target_col)) as u32
            })
            .sum()
    }
}

impl Default for Manhattan {
    fn default() -> Self {
        Self::new(&Board::goal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_at_goal() {
        assert_eq!(Manhattan::default().estimate(&Board::goal()), 0);
    }

    #[test]
    fn standard_goal_targets_are_value_div_and_mod_three() {
        let h = Manhattan::default();
        for value in 0..CELLS {
            assert_eq!(h.targets[value], (value / 3, value % 3));
        }
    }

    #[test]
    fn sums_distances_of_tiles_only() {
        let board = Board::new([[1, 2, 0], [3, 4, 5], [6, 7, 8]]).unwrap();
        // Tiles 1 and 2 are each one column right of home; the blank is ignored.
        assert_eq!(Manhattan::default().estimate(&board), 2);

        let board = Board::new([[8, 0, 6], [5, 4, 7], [2, 3, 1]]).unwrap();
        // 8:4 6:4 5:2 4:0 7:2 2:4 3:2 1:3
        assert_eq!(Manhattan::default().estimate(&board), 21);
    }

    #[test]
    fn changes_by_exactly_one_per_slide() {
        let h = Manhattan::default();
        let mut frontier = vec![Board::new([[8, 0, 6], [5, 4, 7], [2, 3, 1]]).unwrap()];
        for _ in 0..6 {
            let mut next = Vec::new();
            for board in &frontier {
                let here = h.estimate(board);
                for (_, child) in board.successors() {
                    assert_eq!(here.abs_diff(h.estimate(&child)), 1);
                    next.push(child);
                }
            }
            frontier = next;
        }
    }

    #[test]
    fn follows_a_custom_goal() {
        let goal = Board::new([[1, 2, 3], [4, 5, 6], [7, 8, 0]]).unwrap();
        let h = Manhattan::new(&goal);
        assert_eq!(h.estimate(&goal), 0);
        assert_eq!(h.estimate(&Board::goal()), Manhattan::default().estimate(&goal));
    }
}
