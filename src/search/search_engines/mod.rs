mod astar;
mod bfs;
mod dfs;
mod ucs;

pub use astar::a_star_search;
pub use bfs::breadth_first_search;
pub use dfs::depth_first_search;
pub use ucs::uniform_cost_search;

use crate::search::heuristics::Heuristic;
use crate::search::{Plan, SearchProblem, SearchStatistics};
use clap;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum SearchEngineName {
    #[clap(help = "Depth first search, no cost guarantee")]
    Dfs,
    #[clap(help = "Breadth first search, shallowest plan first")]
    Bfs,
    #[clap(help = "Uniform cost search, cheapest plan")]
    Ucs,
    #[clap(
        name = "astar",
        help = "A* search, cheapest plan under an admissible heuristic"
    )]
    AStar,
}

impl SearchEngineName {
    /// Run the named engine on `problem`. Engines other than A* ignore the
    /// heuristic.
    pub fn search<P: SearchProblem>(
        &self,
        problem: &P,
        heuristic: &mut dyn Heuristic<P>,
    ) -> (Plan<P::Action>, SearchStatistics) {
        match self {
            SearchEngineName::Dfs => depth_first_search(problem),
            SearchEngineName::Bfs => breadth_first_search(problem),
            SearchEngineName::Ucs => uniform_cost_search(problem),
            SearchEngineName::AStar => a_star_search(problem, heuristic),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::heuristics::ZeroHeuristic;
    use crate::search::validate;
    use crate::test_utils::*;

    #[test]
    fn every_engine_reaches_the_goal_or_fails_empty() {
        for engine in [
            SearchEngineName::Dfs,
            SearchEngineName::Bfs,
            SearchEngineName::Ucs,
            SearchEngineName::AStar,
        ] {
            let problem = diamond_graph();
            let (plan, _) = engine.search(&problem, &mut ZeroHeuristic::new());
            assert!(
                validate(&problem, &plan).is_ok(),
                "{engine:?} returned an invalid plan"
            );
        }
    }
}
