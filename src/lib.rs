// LeetCode Fixtures - Core Library
// Fixture data and comparators for eight LeetCode exercises, plus a dispatcher

pub mod table;
pub mod compare;
pub mod exercises;
pub mod runner;
pub mod solutions;
#[cfg(feature = "sqlite")]
pub mod sql;

// Re-export commonly used types
pub use table::{Column, Table, TableError, Value};
pub use compare::{
    assert_frame_equal, format_set, sets_equal, value_set, FrameMismatch, Verdict,
};
pub use exercises::{
    biggest_single_number, combine_two_tables, concatenate, duplicate_emails,
    game_play_analysis, invalid_tweets, pivot, roman_to_integer,
};
pub use runner::{
    run_all_tests, run_exercises, Exercise, ExerciseOutcome, RunSummary, Solution,
    SolutionShape, Solutions,
};
pub use solutions::reference_solutions;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
