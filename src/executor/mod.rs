pub mod batch;
pub mod planner;
pub mod runner;
pub mod waiter;

pub use batch::{BatchExecutor, BatchResult, TargetResult};
pub use planner::{DeletePlan, Target, WaitSpec};
pub use runner::SnapshotRunner;
pub use waiter::ConvergenceWaiter;
