use rand::{seq::SliceRandom, Rng};
use std::fmt;
use std::str::FromStr;

use crate::error::InvalidBoardError;

/// Width and height of the board.
pub const SIZE: usize = 3;
/// Number of cells, blank included.
pub const CELLS: usize = SIZE * SIZE;

const GOAL_TILES: [u8; CELLS] = [0, 1, 2, 3, 4, 5, 6, 7, 8];

/// Direction a tile slides into the blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Left,
    Down,
    Right,
}

impl Move {
    /// Moves in row-major order of the tile that slides: the tile above the
    /// blank, then left of it, right of it, below it.
    pub const ALL: [Move; 4] = [Move::Down, Move::Right, Move::Left, Move::Up];

    /// Offset from the blank to the tile that moves.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (1, 0),
            Move::Left => (0, 1),
            Move::Down => (-1, 0),
            Move::Right => (0, -1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "Up",
            Move::Left => "Left",
            Move::Down => "Down",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// An immutable 3x3 arrangement of tiles `1..=8` and a blank (`0`).
///
/// Construction validates that the cells are a permutation of `0..=8`, so
/// every `Board` in existence is well formed and `blank` always points at
/// the zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    tiles: [u8; CELLS],
    blank: usize,
}

impl Board {
    /// Builds a board from rows.
    pub fn new(grid: [[u8; SIZE]; SIZE]) -> Result<Self, InvalidBoardError> {
        let flat: Vec<u8> = grid.iter().flat_map(|row| row.iter().copied()).collect();
        Self::from_tiles(&flat)
    }

    /// Builds a board from cells in row-major order.
    pub fn from_tiles(tiles: &[u8]) -> Result<Self, InvalidBoardError> {
        if tiles.len() != CELLS {
            return Err(InvalidBoardError::WrongLength { len: tiles.len() });
        }

        let mut seen = [false; CELLS];
        let mut cells = [0u8; CELLS];
        let mut blank = 0;
        for (i, &value) in tiles.iter().enumerate() {
            let slot = seen
                .get_mut(value as usize)
                .ok_or(InvalidBoardError::OutOfRange { value })?;
            if *slot {
                return Err(InvalidBoardError::Duplicate { value });
            }
            *slot = true;
            cells[i] = value;
            if value == 0 {
                blank = i;
            }
        }

        Ok(Self {
            tiles: cells,
            blank,
        })
    }

    /// The standard target `[[0,1,2],[3,4,5],[6,7,8]]`.
    pub fn goal() -> Self {
        Self {
            tiles: GOAL_TILES,
            blank: 0,
        }
    }

    /// Shuffles tiles until the result can reach `goal`.
    pub fn shuffled<R: Rng + ?Sized>(goal: &Board, rng: &mut R) -> Self {
        let mut tiles = goal.tiles;

        loop {
            tiles.shuffle(rng);
            if count_inversions(&tiles) % 2 == count_inversions(&goal.tiles) % 2 {
                break;
            }
        }

        let blank = tiles.iter().position(|&t| t == 0).unwrap_or_default();
        Self { tiles, blank }
    }

    pub fn is_goal(&self) -> bool {
        self.tiles == GOAL_TILES
    }

    /// `(row, col)` of the blank.
    pub fn blank_position(&self) -> (usize, usize) {
        (self.blank / SIZE, self.blank % SIZE)
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.tiles[row * SIZE + col]
    }

    pub fn tiles(&self) -> &[u8; CELLS] {
        &self.tiles
    }

    pub fn rows(&self) -> [[u8; SIZE]; SIZE] {
        let mut rows = [[0u8; SIZE]; SIZE];
        for (i, &value) in self.tiles.iter().enumerate() {
            rows[i / SIZE][i % SIZE] = value;
        }
        rows
    }

    /// Packs the cells four bits apiece; equal keys mean equal boards.
    pub fn key(&self) -> u64 {
        self.tiles
            .iter()
            .fold(0u64, |acc, &value| (acc << 4) | u64::from(value))
    }

    /// Whether `goal` is reachable from this board.
    ///
    /// On an odd-width board a slide never changes the parity of the tile
    /// inversion count, and boards of equal parity are mutually reachable.
    pub fn is_solvable_to(&self, goal: &Board) -> bool {
        count_inversions(&self.tiles) % 2 == count_inversions(&goal.tiles) % 2
    }

    /// Slides the tile in direction `movement`, or `None` if no tile sits on
    /// that side of the blank.
    pub fn apply_move(&self, movement: Move) -> Option<Self> {
        let (dx, dy) = movement.as_offset();
        let (x_pos, y_pos) = self.blank_position();

        let new_x = x_pos as isize + dx;
        let new_y = y_pos as isize + dy;

        if new_x >= 0 && new_x < SIZE as isize && new_y >= 0 && new_y < SIZE as isize {
            let from = new_x as usize * SIZE + new_y as usize;
            let mut tiles = self.tiles;
            tiles.swap(self.blank, from);
            Some(Self { tiles, blank: from })
        } else {
            None
        }
    }

    /// Every board one slide away, in [`Move::ALL`] order.
    pub fn successors(&self) -> impl Iterator<Item = (Move, Board)> + '_ {
        Move::ALL
            .iter()
            .filter_map(move |&dir| self.apply_move(dir).map(|next| (dir, next)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::goal()
    }
}

fn count_inversions(flattened: &[u8]) -> usize {
    flattened
        .iter()
        .enumerate()
        .filter(|&(_, &val)| val != 0)
        .map(|(i, &val)| {
            flattened[i + 1..]
                .iter()
                .filter(|&&next| next != 0 && next < val)
                .count()
        })
        .sum()
}

impl FromStr for Board {
    type Err = InvalidBoardError;

    /// Parses nine tiles separated by commas or whitespace, row-major.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tiles = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token.parse::<u8>().map_err(|_| InvalidBoardError::Parse {
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<u8>, _>>()?;
        Self::from_tiles(&tiles)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for val in row {
                if val == 0 {
                    write!(f, "  ")?;
                } else {
                    write!(f, "{} ", val)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
