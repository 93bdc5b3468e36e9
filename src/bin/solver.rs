use clap::{Parser, Subcommand};
use puzzleplan::blokus::heuristics::{CornersHeuristicName, CoverHeuristicName};
use puzzleplan::blokus::problems::{BlokusCornersProblem, BlokusCoverProblem, BlokusFillProblem};
use puzzleplan::blokus::{Move, PieceList, Position};
use puzzleplan::search::heuristics::ZeroHeuristic;
use puzzleplan::search::search_engines::SearchEngineName;
use puzzleplan::search::{validate, Plan, SearchProblem, SearchStatistics, Verbosity};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(version)]
/// Solve one-player Blokus puzzles with graph search.
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(help = "The board width", long = "width", default_value_t = 6)]
    width: u8,
    #[arg(help = "The board height", long = "height", default_value_t = 6)]
    height: u8,
    #[arg(
        help = "A RON piece inventory file, defaults to the standard 21-piece set",
        short = 'p',
        long = "pieces",
        id = "PIECES"
    )]
    pieces: Option<PathBuf>,
    #[arg(
        help = "The seeded starting cell, as row,col",
        short = 's',
        long = "start",
        default_value = "0,0"
    )]
    start: Position,
    #[arg(
        value_enum,
        help = "The search engine to use",
        short = 'e',
        long = "engine",
        id = "ENGINE",
        default_value_t = SearchEngineName::AStar
    )]
    engine: SearchEngineName,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play out the whole piece inventory.
    Fill,
    /// Cover the four board corners as cheaply as possible.
    Corners {
        #[arg(
            value_enum,
            help = "The heuristic evaluator to use",
            long = "heuristic",
            id = "HEURISTIC",
            default_value_t = CornersHeuristicName::Uncovered
        )]
        heuristic_name: CornersHeuristicName,
    },
    /// Cover a list of target cells as cheaply as possible.
    Cover {
        #[arg(
            help = "The target cells, as row,col",
            long = "targets",
            id = "TARGETS",
            required = true,
            num_args = 1..
        )]
        targets: Vec<Position>,
        #[arg(
            value_enum,
            help = "The heuristic evaluator to use",
            long = "heuristic",
            id = "HEURISTIC",
            default_value_t = CoverHeuristicName::Uncovered
        )]
        heuristic_name: CoverHeuristicName,
    },
}

fn main() {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let pieces = match &cli.pieces {
        Some(path) => PieceList::from_path(path).expect("Failed to load the piece file"),
        None => PieceList::standard(),
    };

    match &cli.command {
        Commands::Fill => {
            let problem = BlokusFillProblem::new(cli.width, cli.height, pieces, cli.start);
            let (plan, statistics) = cli.engine.search(&problem, &mut ZeroHeuristic::new());
            report(&problem, &plan, &statistics);
        }
        Commands::Corners { heuristic_name } => {
            let problem = BlokusCornersProblem::new(cli.width, cli.height, pieces, cli.start);
            let mut heuristic = heuristic_name.create();
            let (plan, statistics) = cli.engine.search(&problem, heuristic.as_mut());
            report(&problem, &plan, &statistics);
        }
        Commands::Cover {
            targets,
            heuristic_name,
        } => {
            let problem = BlokusCoverProblem::new(
                cli.width,
                cli.height,
                pieces,
                cli.start,
                targets.clone(),
            );
            let mut heuristic = heuristic_name.create();
            let (plan, statistics) = cli.engine.search(&problem, heuristic.as_mut());
            report(&problem, &plan, &statistics);
        }
    }
}

fn report<P>(problem: &P, plan: &Plan<Move>, statistics: &SearchStatistics)
where
    P: SearchProblem<Action = Move>,
{
    info!(expanded_nodes = statistics.expanded_nodes());

    // An empty plan is also the failure signal, so check the goal to tell
    // "nothing to do" from "no solution".
    if plan.is_empty() && !problem.is_goal(&problem.start_state()) {
        println!("No solution found.");
        return;
    }

    match validate(problem, plan) {
        Ok(()) => info!("plan is valid"),
        Err(e) => {
            info!("plan is invalid: {}", e);
            println!("The engine returned an invalid plan: {e}");
            return;
        }
    }

    println!(
        "Solution with {} moves, total cost {}:",
        plan.len(),
        problem.cost_of_actions(plan)
    );
    for mv in plan.iter() {
        println!("{mv}");
    }
}
