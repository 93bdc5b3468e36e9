//! A grid MDP with slippery movement: the intended direction succeeds with
//! high probability and the move strays in one of the other directions
//! otherwise. Movement off the edge leaves the agent in place. Absorbing
//! cells end the episode.

use crate::mdp::MarkovDecisionProcess;
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Left => "Left",
            Direction::Right => "Right",
            Direction::Up => "Up",
            Direction::Down => "Down",
        };
        write!(f, "{name}")
    }
}

/// Cells are indexed row-major with row 0 at the bottom, so `Up` increases
/// the row.
pub type Cell = usize;

#[derive(Debug, Clone)]
pub struct GridWorld {
    width: usize,
    height: usize,
    rewards: Vec<f64>,
    absorbing: HashSet<Cell>,
    success_probability: f64,
}

impl GridWorld {
    pub fn new(
        width: usize,
        height: usize,
        rewards: Vec<f64>,
        absorbing: impl IntoIterator<Item = Cell>,
        success_probability: f64,
    ) -> Self {
        assert_eq!(
            rewards.len(),
            width * height,
            "one reward per cell is required"
        );
        assert!(
            (0.0..=1.0).contains(&success_probability),
            "the success probability must lie in [0, 1]"
        );
        let absorbing: HashSet<Cell> = absorbing.into_iter().collect();
        assert!(
            absorbing.iter().all(|&cell| cell < rewards.len()),
            "absorbing cells must be on the grid"
        );
        Self {
            width,
            height,
            rewards,
            absorbing,
            success_probability,
        }
    }

    /// The 3x3 lecture example: small step penalties, a -10 pit and two
    /// exits worth 15 and 30 along the top rows.
    pub fn demo() -> Self {
        GridWorld::new(
            3,
            3,
            vec![-0.05, -0.05, -0.05, -0.05, -10., -0.05, 15., -0.05, 30.],
            [4, 6, 8],
            0.9,
        )
    }

    /// The fixed policy evaluated on the demo world in the lecture.
    pub fn demo_policy() -> [Direction; 9] {
        [
            Direction::Up,
            Direction::Right,
            Direction::Up,
            Direction::Up,
            Direction::Left,
            Direction::Up,
            Direction::Left,
            Direction::Left,
            Direction::Left,
        ]
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn num_cells(&self) -> usize {
        self.rewards.len()
    }

    pub fn reward_at(&self, cell: Cell) -> f64 {
        self.rewards[cell]
    }

    pub fn is_absorbing(&self, cell: Cell) -> bool {
        self.absorbing.contains(&cell)
    }

    /// The cell reached by moving from `cell` in `direction`, clamped at
    /// the edges.
    pub fn step(&self, cell: Cell, direction: Direction) -> Cell {
        let (row, col) = (cell / self.width, cell % self.width);
        let (row, col) = match direction {
            Direction::Left => (row, col.saturating_sub(1)),
            Direction::Right => (row, (col + 1).min(self.width - 1)),
            Direction::Down => (row.saturating_sub(1), col),
            Direction::Up => ((row + 1).min(self.height - 1), col),
        };
        row * self.width + col
    }

    fn stray_share(&self) -> f64 {
        (1. - self.success_probability) / (Direction::ALL.len() - 1) as f64
    }

    /// Evaluate a fixed policy for `sweeps` batch sweeps, the way the
    /// lecture worksheet does: absorbing cells are pinned to their reward,
    /// every other cell backs up the current cell's reward plus the
    /// discounted value of where the move actually lands. Stray moves
    /// whose target coincides with the intended one drop out of the sum
    /// entirely, reproducing the worksheet's bookkeeping.
    pub fn policy_evaluation(
        &self,
        policy: &[Direction],
        discount: f64,
        sweeps: usize,
    ) -> Vec<f64> {
        assert_eq!(
            policy.len(),
            self.rewards.len(),
            "one policy entry per cell is required"
        );
        let mut values = vec![0.; self.rewards.len()];
        for _ in 0..sweeps {
            let mut new_values = values.clone();
            for cell in 0..self.rewards.len() {
                if self.is_absorbing(cell) {
                    new_values[cell] = self.rewards[cell];
                    continue;
                }
                let intended = self.step(cell, policy[cell]);
                let mut value =
                    self.success_probability * (self.rewards[cell] + discount * values[intended]);
                for direction in Direction::ALL {
                    let stray = self.step(cell, direction);
                    if stray != intended {
                        value += self.stray_share() * (self.rewards[cell] + discount * values[stray]);
                    }
                }
                new_values[cell] = value;
            }
            values = new_values;
        }
        values
    }
}

impl MarkovDecisionProcess for GridWorld {
    type State = Cell;
    type Action = Direction;

    fn states(&self) -> Vec<Cell> {
        (0..self.rewards.len()).collect()
    }

    fn possible_actions(&self, state: &Cell) -> Vec<Direction> {
        if self.is_absorbing(*state) {
            vec![]
        } else {
            Direction::ALL.to_vec()
        }
    }

    fn transitions(&self, state: &Cell, action: &Direction) -> Vec<(Cell, f64)> {
        let intended = self.step(*state, *action);
        let mut distribution = vec![(intended, self.success_probability)];
        for direction in Direction::ALL {
            let stray = self.step(*state, direction);
            if stray != intended {
                distribution.push((stray, self.stray_share()));
            }
        }
        distribution
    }

    /// Reward is collected on arrival, so entering an absorbing cell pays
    /// out even though the cell itself keeps value zero.
    fn reward(&self, _state: &Cell, _action: &Direction, next_state: &Cell) -> f64 {
        self.rewards[*next_state]
    }

    fn is_terminal(&self, state: &Cell) -> bool {
        self.is_absorbing(*state)
    }
}
