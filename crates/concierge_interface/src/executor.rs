//! Execution step trait.

use concierge_core::{ExecutionResult, GoalDescriptor};
use concierge_error::ConciergeResult;
use std::sync::Arc;

/// Carries out a finalized goal.
///
/// The shipped implementation only simulates; nothing external is touched.
pub trait PlanExecutor: Send + Sync {
    /// Produce the execution result for a goal.
    fn execute(&self, goal: &GoalDescriptor) -> ConciergeResult<ExecutionResult>;
}

impl<T: PlanExecutor + ?Sized> PlanExecutor for Arc<T> {
    fn execute(&self, goal: &GoalDescriptor) -> ConciergeResult<ExecutionResult> {
        (**self).execute(goal)
    }
}

impl<T: PlanExecutor + ?Sized> PlanExecutor for Box<T> {
    fn execute(&self, goal: &GoalDescriptor) -> ConciergeResult<ExecutionResult> {
        (**self).execute(goal)
    }
}
