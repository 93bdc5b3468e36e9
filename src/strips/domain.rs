//! STRIPS-style planning file elements. These are writer-side types: their
//! `Display` impls produce the plain-text domain and problem formats
//! consumed by the course planners.

use std::fmt;

/// A ground proposition, displayed as its bare token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Proposition(String);

impl Proposition {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Proposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn join(propositions: &[Proposition]) -> String {
    propositions
        .iter()
        .map(Proposition::name)
        .collect::<Vec<_>>()
        .join(" ")
}

/// An action with named precondition, add and delete lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripsAction {
    name: String,
    preconditions: Vec<Proposition>,
    add_effects: Vec<Proposition>,
    delete_effects: Vec<Proposition>,
}

impl StripsAction {
    pub fn new(
        name: impl Into<String>,
        preconditions: Vec<Proposition>,
        add_effects: Vec<Proposition>,
        delete_effects: Vec<Proposition>,
    ) -> Self {
        Self {
            name: name.into(),
            preconditions,
            add_effects,
            delete_effects,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn preconditions(&self) -> &[Proposition] {
        &self.preconditions
    }

    pub fn add_effects(&self) -> &[Proposition] {
        &self.add_effects
    }

    pub fn delete_effects(&self) -> &[Proposition] {
        &self.delete_effects
    }
}

impl fmt::Display for StripsAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "pre: {}", join(&self.preconditions))?;
        writeln!(f, "add: {}", join(&self.add_effects))?;
        writeln!(f, "delete: {}", join(&self.delete_effects))
    }
}

/// A planning domain: the proposition universe and the action set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain {
    propositions: Vec<Proposition>,
    actions: Vec<StripsAction>,
}

impl Domain {
    pub fn new(propositions: Vec<Proposition>, actions: Vec<StripsAction>) -> Self {
        Self {
            propositions,
            actions,
        }
    }

    pub fn propositions(&self) -> &[Proposition] {
        &self.propositions
    }

    pub fn actions(&self) -> &[StripsAction] {
        &self.actions
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Propositions:")?;
        writeln!(f, "{}", join(&self.propositions))?;
        writeln!(f, "Actions:")?;
        for action in &self.actions {
            write!(f, "{action}")?;
        }
        Ok(())
    }
}

/// A planning problem: initial and goal proposition sets over some domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    initial: Vec<Proposition>,
    goal: Vec<Proposition>,
}

impl Problem {
    pub fn new(initial: Vec<Proposition>, goal: Vec<Proposition>) -> Self {
        Self { initial, goal }
    }

    pub fn initial(&self) -> &[Proposition] {
        &self.initial
    }

    pub fn goal(&self) -> &[Proposition] {
        &self.goal
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Initial state: {}", join(&self.initial))?;
        writeln!(f, "Goal state: {}", join(&self.goal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_render_their_three_lists() {
        let action = StripsAction::new(
            "MOVE_d_0_FROM_p_0_TO_p_1",
            vec![
                Proposition::new("ud_0"),
                Proposition::new("up_1"),
                Proposition::new("d_0-p_0"),
            ],
            vec![Proposition::new("d_0-p_1"), Proposition::new("up_0")],
            vec![Proposition::new("up_1"), Proposition::new("d_0-p_0")],
        );
        assert_eq!(
            action.to_string(),
            "Name: MOVE_d_0_FROM_p_0_TO_p_1\npre: ud_0 up_1 d_0-p_0\nadd: d_0-p_1 up_0\ndelete: up_1 d_0-p_0\n"
        );
    }

    #[test]
    fn problems_render_initial_and_goal_lines() {
        let problem = Problem::new(
            vec![Proposition::new("a"), Proposition::new("b")],
            vec![Proposition::new("c")],
        );
        assert_eq!(problem.to_string(), "Initial state: a b\nGoal state: c\n");
    }
}
