//! Admissible heuristics for the corners and cover problems.
//!
//! Both share one estimate: each uncovered target needs at least one more
//! placement touching it, and a single piece can only serve two targets
//! that are far enough apart, so the uncovered count times a conservative
//! per-target tile price bounds the remaining cost from below.

use crate::blokus::problems::{BlokusCornersProblem, BlokusCoverProblem};
use crate::blokus::{Board, PieceList, Position};
use crate::search::heuristics::{Heuristic, HeuristicValue, ZeroHeuristic};
use clap;
use ordered_float::OrderedFloat;

/// `uncovered x min(smallest piece size, (dimension_factor + 1) / 2)`.
///
/// The dimension factor is a spacing bound between targets: the board's
/// short side for corners, the minimum pairwise target distance for cover.
/// Both price a target below its true cost, which keeps the estimate
/// admissible.
pub fn uncovered_target_estimate(
    state: &Board,
    pieces: &PieceList,
    targets: &[Position],
    dimension_factor: f64,
) -> HeuristicValue {
    let uncovered = targets
        .iter()
        .filter(|&&target| !state.is_covered(target))
        .count();
    let smallest_piece_size = pieces.smallest_piece_size() as f64;
    let adjustment_factor = smallest_piece_size.min((dimension_factor + 1.) / 2.);
    OrderedFloat(uncovered as f64 * adjustment_factor)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CornersHeuristic;

impl Heuristic<BlokusCornersProblem> for CornersHeuristic {
    fn evaluate(&mut self, state: &Board, problem: &BlokusCornersProblem) -> HeuristicValue {
        let dimension_factor = f64::from(state.width().min(state.height()));
        uncovered_target_estimate(state, problem.pieces(), problem.corners(), dimension_factor)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CoverHeuristic;

impl Heuristic<BlokusCoverProblem> for CoverHeuristic {
    fn evaluate(&mut self, state: &Board, problem: &BlokusCoverProblem) -> HeuristicValue {
        uncovered_target_estimate(
            state,
            problem.pieces(),
            problem.targets(),
            problem.min_target_distance(),
        )
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[clap(rename_all = "kebab-case")]
pub enum CornersHeuristicName {
    #[clap(help = "Price each uncovered corner at a conservative tile count")]
    Uncovered,
    #[clap(name = "zero", help = "The zero heuristic")]
    ZeroHeuristic,
}

impl CornersHeuristicName {
    pub fn create(&self) -> Box<dyn Heuristic<BlokusCornersProblem>> {
        match self {
            CornersHeuristicName::Uncovered => Box::new(CornersHeuristic),
            CornersHeuristicName::ZeroHeuristic => Box::new(ZeroHeuristic::new()),
        }
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[clap(rename_all = "kebab-case")]
pub enum CoverHeuristicName {
    #[clap(help = "Price each uncovered target at a conservative tile count")]
    Uncovered,
    #[clap(name = "zero", help = "The zero heuristic")]
    ZeroHeuristic,
}

impl CoverHeuristicName {
    pub fn create(&self) -> Box<dyn Heuristic<BlokusCoverProblem>> {
        match self {
            CoverHeuristicName::Uncovered => Box::new(CoverHeuristic),
            CoverHeuristicName::ZeroHeuristic => Box::new(ZeroHeuristic::new()),
        }
    }
}
