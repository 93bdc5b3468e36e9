//! STRIPS encoding of the multi-peg Tower of Hanoi.
//!
//! Disks are `d_0` (smallest) through `d_{n-1}`, pegs `p_0` through
//! `p_{m-1}`. `x-y` reads "x sits on y" and `ux` reads "x is clear". The
//! problem starts with the tower stacked on the first peg and asks for it
//! on the last one.

use crate::strips::{Domain, Problem, Proposition, StripsAction};
use itertools::Itertools;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hanoi {
    disks: usize,
    pegs: usize,
}

impl Hanoi {
    pub fn new(disks: usize, pegs: usize) -> Self {
        assert!(disks >= 1, "there must be at least one disk");
        assert!(pegs >= 1, "there must be at least one peg");
        Self { disks, pegs }
    }

    pub fn disks(&self) -> usize {
        self.disks
    }

    pub fn pegs(&self) -> usize {
        self.pegs
    }

    fn disk_names(&self) -> Vec<String> {
        (0..self.disks).map(|i| format!("d_{i}")).collect()
    }

    fn peg_names(&self) -> Vec<String> {
        (0..self.pegs).map(|i| format!("p_{i}")).collect()
    }

    pub fn domain(&self) -> Domain {
        let disks = self.disk_names();
        let pegs = self.peg_names();

        let mut propositions = Vec::new();
        for (disk, peg) in disks.iter().cartesian_product(&pegs) {
            propositions.push(on(disk, peg));
        }
        for (above, below) in disks.iter().tuple_combinations() {
            propositions.push(on(above, below));
        }
        for disk in &disks {
            propositions.push(clear(disk));
        }
        for peg in &pegs {
            propositions.push(clear(peg));
        }

        let mut actions = Vec::new();
        // A disk moving between two larger disks. Disk names are ordered by
        // size, so in every combination the first entry is the moved disk.
        for (disk, below_a, below_b) in disks.iter().tuple_combinations() {
            actions.push(move_action(disk, below_a, below_b));
            actions.push(move_action(disk, below_b, below_a));
        }
        // A disk moving between two pegs.
        for disk in &disks {
            for (peg_a, peg_b) in pegs.iter().tuple_combinations() {
                actions.push(move_action(disk, peg_a, peg_b));
                actions.push(move_action(disk, peg_b, peg_a));
            }
        }
        // A disk moving between a peg and a strictly larger disk.
        for moved in 0..self.disks {
            for (larger, peg) in (0..self.disks).cartesian_product(0..self.pegs) {
                if moved < larger {
                    actions.push(move_action(&disks[moved], &pegs[peg], &disks[larger]));
                    actions.push(move_action(&disks[moved], &disks[larger], &pegs[peg]));
                }
            }
        }

        Domain::new(propositions, actions)
    }

    pub fn problem(&self) -> Problem {
        let disks = self.disk_names();
        let pegs = self.peg_names();

        let mut initial = self.tower_on_peg(0);
        for peg in &pegs[1..] {
            initial.push(clear(peg));
        }
        initial.push(clear(&disks[0]));

        let goal = self.tower_on_peg(self.pegs - 1);

        Problem::new(initial, goal)
    }

    /// The propositions describing the whole tower stacked on `peg_index`.
    fn tower_on_peg(&self, peg_index: usize) -> Vec<Proposition> {
        let disks = self.disk_names();
        let pegs = self.peg_names();
        let mut state = Vec::new();
        for window in disks.windows(2) {
            state.push(on(&window[0], &window[1]));
        }
        state.push(on(disks.last().expect("there is at least one disk"), &pegs[peg_index]));
        state
    }
}

fn on(above: &str, below: &str) -> Proposition {
    Proposition::new(format!("{above}-{below}"))
}

fn clear(token: &str) -> Proposition {
    Proposition::new(format!("u{token}"))
}

fn move_action(disk: &str, source: &str, destination: &str) -> StripsAction {
    StripsAction::new(
        format!("MOVE_{disk}_FROM_{source}_TO_{destination}"),
        vec![clear(disk), clear(destination), on(disk, source)],
        vec![on(disk, destination), clear(source)],
        vec![clear(destination), on(disk, source)],
    )
}
