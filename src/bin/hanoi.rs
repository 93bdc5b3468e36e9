use clap::Parser;
use puzzleplan::search::Verbosity;
use puzzleplan::strips::Hanoi;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(version)]
/// Generate STRIPS domain and problem files for the multi-peg Tower of
/// Hanoi.
struct Cli {
    #[arg(help = "The number of disks")]
    disks: usize,
    #[arg(help = "The number of pegs")]
    pegs: usize,
    #[arg(
        help = "The directory to write the files into",
        short = 'o',
        long = "output",
        id = "OUTPUT",
        default_value = "."
    )]
    output: PathBuf,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
}

fn main() {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let hanoi = Hanoi::new(cli.disks, cli.pegs);
    let domain_path = cli
        .output
        .join(format!("hanoi_{}_{}_domain.txt", cli.disks, cli.pegs));
    let problem_path = cli
        .output
        .join(format!("hanoi_{}_{}_problem.txt", cli.disks, cli.pegs));

    std::fs::write(&domain_path, hanoi.domain().to_string())
        .expect("Failed to write the domain file");
    std::fs::write(&problem_path, hanoi.problem().to_string())
        .expect("Failed to write the problem file");

    info!(
        domain = %domain_path.display(),
        problem = %problem_path.display(),
        "wrote planning files"
    );
}
