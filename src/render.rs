//! Terminal rendering of boards.

use crossterm::style::Stylize;
use std::fmt::Write;

use crate::puzzle::Board;

/// Renders `board` with tiles in bold and the blank as a shaded cell.
///
/// With `plain` set this is the same text as the board's `Display`.
pub fn board(board: &Board, plain: bool) -> String {
    if plain {
        return board.to_string();
    }

    let mut out = String::new();
    for row in board.rows() {
        for val in row {
            // Writing to a String cannot fail.
            let _ = if val == 0 {
                write!(out, "{} ", " ".on_dark_grey())
            } else {
                write!(out, "{} ", val.to_string().bold())
            };
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_matches_display() {
        let b = Board::new([[8, 0, 6], [5, 4, 7], [2, 3, 1]]).unwrap();
        assert_eq!(board(&b, true), b.to_string());
    }

    #[test]
    fn styled_keeps_every_tile() {
        let b = Board::new([[8, 0, 6], [5, 4, 7], [2, 3, 1]]).unwrap();
        let out = board(&b, false);
        assert_eq!(out.lines().count(), 3);
        for tile in 1..=8 {
            assert!(out.contains(&tile.to_string()));
        }
    }
}
