//! Command implementations

pub mod benchmark;
pub mod play;
pub mod solve;
pub mod verify;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use play::run_play;
pub use solve::{PuzzleSource, SolveConfig, SolveResult, solve_puzzle};
pub use verify::{VerifyReport, verify_catalog};
