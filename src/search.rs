//! A* over board configurations.
//!
//! Nodes live in an arena owned by [`Search`]; a node's parent is an index
//! into that arena, and since depth strictly increases along a parent chain
//! the links never form a cycle. A configuration is expanded at most once:
//! with a consistent heuristic its first pop already carries the smallest
//! depth, so later pops of the same board are dropped.

use std::collections::HashSet;

use tracing::{debug, instrument, trace, warn};

use crate::error::SolverError;
use crate::frontier::Frontier;
use crate::heuristic::Manhattan;
use crate::puzzle::{Board, Move, SIZE};

/// Index of a node in the search arena.
pub type NodeId = usize;

/// Solver settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Board the search tries to reach.
    pub goal: Board,
    /// Reject boards in the wrong parity class before searching.
    ///
    /// Off by default: the search then discovers unsolvability by exhausting
    /// every reachable configuration.
    pub parity_precheck: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            goal: Board::goal(),
            parity_precheck: false,
        }
    }
}

/// Counters describing how much work a search did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Configurations expanded.
    pub expanded: usize,
    /// Successor nodes created.
    pub generated: usize,
    /// Frontier pops discarded because the board was already expanded.
    pub duplicates_skipped: usize,
    /// Largest frontier size reached.
    pub frontier_high_water: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Node {
    board: Board,
    depth: u32,
    heuristic: u32,
    parent: Option<NodeId>,
    movement: Option<Move>,
}

/// One slide on a solution path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Board after the slide.
    pub board: Board,
    /// Moves made so far, this one included.
    pub depth: u32,
    /// Estimated moves remaining from `board`.
    pub heuristic: u32,
    /// Direction the tile slid.
    pub movement: Move,
}

/// Optimal sequence of boards from the first move to the goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    steps: Vec<Step>,
    stats: SearchStats,
}

impl Solution {
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn moves(&self) -> Vec<Move> {
        self.steps.iter().map(|step| step.movement).collect()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when the starting board already was the goal.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn final_board(&self) -> Option<Board> {
        self.steps.last().map(|step| step.board)
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

/// Solves `grid` towards the standard goal.
pub fn solve(grid: [[u8; SIZE]; SIZE]) -> Result<Solution, SolverError> {
    solve_with(grid, &SolverConfig::default())
}

/// Solves `grid` with explicit settings.
pub fn solve_with(grid: [[u8; SIZE]; SIZE], config: &SolverConfig) -> Result<Solution, SolverError> {
    let start = Board::new(grid)?;
    solve_board(&start, config)
}

/// Solves an already validated board.
#[instrument(skip_all, fields(start = ?start.tiles(), goal = ?config.goal.tiles()))]
pub fn solve_board(start: &Board, config: &SolverConfig) -> Result<Solution, SolverError> {
    if config.parity_precheck && !start.is_solvable_to(&config.goal) {
        warn!("board and goal are in different parity classes");
        return Err(SolverError::NoSolutionFound {
            stats: SearchStats::default(),
        });
    }

    let mut search = Search::new(config);
    search.seed(*start);
    let found = search.run();
    let stats = search.stats();

    match found {
        Some(goal) => {
            let steps = search.reconstruct(goal);
            debug!(
                moves = steps.len(),
                expanded = stats.expanded,
                generated = stats.generated,
                "goal reached"
            );
            Ok(Solution { steps, stats })
        }
        None => {
            debug!(expanded = stats.expanded, "frontier exhausted");
            Err(SolverError::NoSolutionFound { stats })
        }
    }
}

/// Arena, frontier and visited set for a single A* run.
struct Search<'a> {
    config: &'a SolverConfig,
    heuristic: Manhattan,
    arena: Vec<Node>,
    frontier: Frontier<NodeId>,
    visited: HashSet<u64>,
    stats: SearchStats,
}

impl<'a> Search<'a> {
    fn new(config: &'a SolverConfig) -> Self {
        Self {
            config,
            heuristic: Manhattan::new(&config.goal),
            arena: Vec::new(),
            frontier: Frontier::new(),
            visited: HashSet::new(),
            stats: SearchStats::default(),
        }
    }

    /// Queues the root with `g = 0`.
    fn seed(&mut self, board: Board) -> NodeId {
        let heuristic = self.heuristic.estimate(&board);
        trace!(heuristic, "seeding frontier");
        self.push(Node {
            board,
            depth: 0,
            heuristic,
            parent: None,
            movement: None,
        })
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = self.arena.len();
        let priority = node.depth + node.heuristic;
        self.arena.push(node);
        self.frontier.push(id, priority);
        id
    }

    /// Runs until the goal is popped or the frontier runs dry.
    fn run(&mut self) -> Option<NodeId> {
        while let Some(id) = self.frontier.pop() {
            let node = self.arena[id];
            if node.board == self.config.goal {
                return Some(id);
            }

            if !self.visited.insert(node.board.key()) {
                self.stats.duplicates_skipped += 1;
                continue;
            }

            self.expand(id, node);
        }
        None
    }

    fn expand(&mut self, id: NodeId, node: Node) {
        self.stats.expanded += 1;
        trace!(
            depth = node.depth,
            heuristic = node.heuristic,
            frontier = self.frontier.len(),
            "expanding"
        );

        for (movement, board) in node.board.successors() {
            let heuristic = self.heuristic.estimate(&board);
            self.push(Node {
                board,
                depth: node.depth + 1,
                heuristic,
                parent: Some(id),
                movement: Some(movement),
            });
            self.stats.generated += 1;
        }
    }

    /// Follows parent links from `goal` back to the root, root excluded.
    fn reconstruct(&self, goal: NodeId) -> Vec<Step> {
        let mut steps = Vec::new();
        let mut cursor = Some(goal);

        while let Some(id) = cursor {
            let node = &self.arena[id];
            if let Some(movement) = node.movement {
                steps.push(Step {
                    board: node.board,
                    depth: node.depth,
                    heuristic: node.heuristic,
                    movement,
                });
            }
            cursor = node.parent;
        }

        steps.reverse();
        steps
    }

    fn stats(&self) -> SearchStats {
        SearchStats {
            frontier_high_water: self.frontier.high_water(),
            ..self.stats
        }
    }
}
