use clap::Parser;
use puzzleplan::mdp::{GridWorld, ValueIterationAgent};
use puzzleplan::search::Verbosity;

#[derive(Parser)]
#[command(version)]
/// Value iteration demo on the 3x3 lecture gridworld.
struct Cli {
    #[arg(help = "The discount factor", long = "discount", default_value_t = 0.99)]
    discount: f64,
    #[arg(
        help = "Sweeps of fixed-policy evaluation",
        long = "sweeps",
        default_value_t = 10
    )]
    sweeps: usize,
    #[arg(
        help = "Value iteration sweeps",
        long = "iterations",
        default_value_t = 100
    )]
    iterations: usize,
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

    let world = GridWorld::demo();

    let values = world.policy_evaluation(&GridWorld::demo_policy(), cli.discount, cli.sweeps);
    println!("Fixed-policy values after {} sweeps:", cli.sweeps);
    print_values(&world, &values);

    let agent = ValueIterationAgent::new(world, cli.discount, cli.iterations);
    let world = agent.mdp();
    let values: Vec<f64> = (0..world.num_cells()).map(|cell| agent.value(&cell)).collect();
    println!();
    println!("Value iteration values after {} sweeps:", cli.iterations);
    print_values(world, &values);

    println!();
    println!("Greedy policy:");
    for row in (0..world.height()).rev() {
        let line = (0..world.width())
            .map(|col| {
                let cell = row * world.width() + col;
                match agent.policy(&cell) {
                    Some(direction) => format!("{:>8}", direction.to_string()),
                    None => format!("{:>8}", "-"),
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        println!("{line}");
    }
}

fn print_values(world: &GridWorld, values: &[f64]) {
    for row in (0..world.height()).rev() {
        let line = (0..world.width())
            .map(|col| format!("{:>8.3}", values[row * world.width() + col]))
            .collect::<Vec<_>>()
            .join(" ");
        println!("{line}");
    }
}
