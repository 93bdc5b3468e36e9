use crate::search::Cost;
use ordered_float::OrderedFloat;

/// A frontier record: a state together with the actions that reached it and
/// their accumulated cost. Nodes are owned by a single search invocation
/// and never escape it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchNode<S, A> {
    state: S,
    actions: Vec<A>,
    cost: Cost,
}

impl<S, A> SearchNode<S, A>
where
    S: Clone,
    A: Clone,
{
    pub fn root(state: S) -> Self {
        Self {
            state,
            actions: vec![],
            cost: OrderedFloat(0.),
        }
    }

    /// The node reached by taking `action` from this node.
    pub fn extend(&self, state: S, action: A, step_cost: Cost) -> Self {
        let mut actions = self.actions.clone();
        actions.push(action);
        Self {
            state,
            actions,
            cost: self.cost + step_cost,
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    pub fn into_actions(self) -> Vec<A> {
        self.actions
    }
}
