use crate::search::{Plan, SearchProblem};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("step {step} is not applicable in the state preceding it")]
    NotApplicable { step: usize },
    #[error("plan does not reach a goal state")]
    GoalNotReached,
}

/// Replay `plan` from the start state, requiring every action to be one of
/// the current state's successors and the final state to satisfy the goal.
pub fn validate<P: SearchProblem>(
    problem: &P,
    plan: &Plan<P::Action>,
) -> Result<(), ValidationError> {
    let mut current = problem.start_state();

    for (step, action) in plan.iter().enumerate() {
        let successor = problem
            .successors(&current)
            .into_iter()
            .find(|(_, candidate, _)| candidate == action);
        match successor {
            Some((next, _, _)) => current = next,
            None => return Err(ValidationError::NotApplicable { step }),
        }
    }

    if !problem.is_goal(&current) {
        return Err(ValidationError::GoalNotReached);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn validate_good_plan_ok() {
        let problem = line_graph();
        let plan = Plan::new(vec![("a", "b"), ("b", "c")]);
        assert!(validate(&problem, &plan).is_ok());
    }

    #[test]
    fn validate_bad_plan_not_applicable() {
        let problem = line_graph();
        let plan = Plan::new(vec![("a", "b"), ("a", "b")]);
        assert_eq!(
            validate(&problem, &plan),
            Err(ValidationError::NotApplicable { step: 1 })
        );
    }

    #[test]
    fn validate_bad_plan_incomplete() {
        let problem = line_graph();
        let plan = Plan::new(vec![("a", "b")]);
        assert_eq!(
            validate(&problem, &plan),
            Err(ValidationError::GoalNotReached)
        );
    }
}
