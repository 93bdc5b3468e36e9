mod domain;
mod hanoi;

pub use domain::{Domain, Problem, Proposition, StripsAction};
pub use hanoi::Hanoi;
