// 🏁 Dispatcher - Run every exercise a caller has a solution for
// Unknown exercises are warned about and skipped; nothing is retried

use crate::exercises::{
    biggest_single_number, combine_two_tables, concatenate, duplicate_emails,
    game_play_analysis, invalid_tweets, pivot, roman_to_integer,
};
use crate::table::Table;
use anyhow::{anyhow, bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// EXERCISES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Exercise {
    CombineTwoTables,
    RomanToInteger,
    DuplicateEmails,
    GamePlayAnalysis,
    Concatenate,
    InvalidTweets,
    Pivot,
    BiggestSingleNumber,
}

/// Shape of the function a solution must provide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionShape {
    /// (Table, Table) -> Table
    Pair,
    /// Table -> Table
    Single,
    /// &str -> i64
    Roman,
}

impl fmt::Display for SolutionShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolutionShape::Pair => write!(f, "two-table transformation"),
            SolutionShape::Single => write!(f, "single-table transformation"),
            SolutionShape::Roman => write!(f, "string-to-integer function"),
        }
    }
}

impl Exercise {
    /// Dispatch order
    pub const ALL: [Exercise; 8] = [
        Exercise::CombineTwoTables,
        Exercise::RomanToInteger,
        Exercise::DuplicateEmails,
        Exercise::GamePlayAnalysis,
        Exercise::Concatenate,
        Exercise::InvalidTweets,
        Exercise::Pivot,
        Exercise::BiggestSingleNumber,
    ];

    /// Key used in a `Solutions` mapping
    pub fn name(&self) -> &'static str {
        match self {
            Exercise::CombineTwoTables => "combine_two_tables",
            Exercise::RomanToInteger => "roman_to_integer",
            Exercise::DuplicateEmails => "duplicate_emails",
            Exercise::GamePlayAnalysis => "game_play_analysis",
            Exercise::Concatenate => "concatenate",
            Exercise::InvalidTweets => "invalid_tweets",
            Exercise::Pivot => "pivot",
            Exercise::BiggestSingleNumber => "biggest_single_number",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Exercise::CombineTwoTables => combine_two_tables::TITLE,
            Exercise::RomanToInteger => roman_to_integer::TITLE,
            Exercise::DuplicateEmails => duplicate_emails::TITLE,
            Exercise::GamePlayAnalysis => game_play_analysis::TITLE,
            Exercise::Concatenate => concatenate::TITLE,
            Exercise::InvalidTweets => invalid_tweets::TITLE,
            Exercise::Pivot => pivot::TITLE,
            Exercise::BiggestSingleNumber => biggest_single_number::TITLE,
        }
    }

    /// LeetCode problem number
    pub fn problem_number(&self) -> u32 {
        match self {
            Exercise::CombineTwoTables => 175,
            Exercise::RomanToInteger => 13,
            Exercise::DuplicateEmails => 182,
            Exercise::GamePlayAnalysis => 511,
            Exercise::Concatenate => 2888,
            Exercise::InvalidTweets => 1683,
            Exercise::Pivot => 2889,
            Exercise::BiggestSingleNumber => 619,
        }
    }

    pub fn shape(&self) -> SolutionShape {
        match self {
            Exercise::CombineTwoTables | Exercise::Concatenate => SolutionShape::Pair,
            Exercise::RomanToInteger => SolutionShape::Roman,
            _ => SolutionShape::Single,
        }
    }

    /// Input tables for the exercise, in argument order (none for the
    /// string exercise)
    pub fn inputs(&self) -> Vec<(&'static str, Table)> {
        match self {
            Exercise::CombineTwoTables => {
                let (person, address) = combine_two_tables::data();
                vec![("Person", person), ("Address", address)]
            }
            Exercise::RomanToInteger => Vec::new(),
            Exercise::DuplicateEmails => vec![("Person", duplicate_emails::data())],
            Exercise::GamePlayAnalysis => vec![("Activity", game_play_analysis::data())],
            Exercise::Concatenate => {
                let (df1, df2) = concatenate::data();
                vec![("df1", df1), ("df2", df2)]
            }
            Exercise::InvalidTweets => vec![("Tweets", invalid_tweets::data())],
            Exercise::Pivot => vec![("Weather", pivot::data())],
            Exercise::BiggestSingleNumber => vec![
                ("MyNumbers", biggest_single_number::data_with_singles()),
                ("MyNumbers", biggest_single_number::data_all_duplicates()),
            ],
        }
    }

    /// Expected output table, where the exercise has a single one
    pub fn expected(&self) -> Option<Table> {
        match self {
            Exercise::CombineTwoTables => Some(combine_two_tables::expected()),
            Exercise::DuplicateEmails => Some(duplicate_emails::expected()),
            Exercise::GamePlayAnalysis => Some(game_play_analysis::expected()),
            Exercise::Concatenate => Some(concatenate::expected()),
            Exercise::InvalidTweets => Some(invalid_tweets::expected()),
            Exercise::Pivot => Some(pivot::expected()),
            Exercise::RomanToInteger | Exercise::BiggestSingleNumber => None,
        }
    }

    /// Run this exercise's comparator against a solution of the right shape.
    /// A solution of the wrong shape is an error.
    pub fn check(&self, solution: &Solution) -> Result<bool> {
        match (self, solution) {
            (Exercise::CombineTwoTables, Solution::Pair(f)) => Ok(combine_two_tables::check(f)),
            (Exercise::Concatenate, Solution::Pair(f)) => concatenate::check(f),
            (Exercise::RomanToInteger, Solution::Roman(f)) => roman_to_integer::check(f),
            (Exercise::DuplicateEmails, Solution::Single(f)) => duplicate_emails::check(f),
            (Exercise::GamePlayAnalysis, Solution::Single(f)) => game_play_analysis::check(f),
            (Exercise::InvalidTweets, Solution::Single(f)) => invalid_tweets::check(f),
            (Exercise::Pivot, Solution::Single(f)) => pivot::check(f),
            (Exercise::BiggestSingleNumber, Solution::Single(f)) => {
                biggest_single_number::check(f)
            }
            (exercise, solution) => bail!(
                "Solution for '{}' has the wrong shape: expected a {}, got a {}",
                exercise.name(),
                exercise.shape(),
                solution.shape()
            ),
        }
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Exercise {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Exercise::ALL
            .iter()
            .copied()
            .find(|e| e.name() == s)
            .ok_or_else(|| anyhow!("Unknown exercise '{}'", s))
    }
}

// ============================================================================
// SOLUTIONS
// ============================================================================

pub type PairFn = Box<dyn Fn(Table, Table) -> Result<Table>>;
pub type TableFn = Box<dyn Fn(Table) -> Result<Table>>;
pub type RomanFn = Box<dyn Fn(&str) -> Result<i64>>;

/// A caller-supplied implementation for one exercise
pub enum Solution {
    Pair(PairFn),
    Single(TableFn),
    Roman(RomanFn),
}

impl Solution {
    pub fn pair<F>(f: F) -> Self
    where
        F: Fn(Table, Table) -> Result<Table> + 'static,
    {
        Solution::Pair(Box::new(f))
    }

    pub fn single<F>(f: F) -> Self
    where
        F: Fn(Table) -> Result<Table> + 'static,
    {
        Solution::Single(Box::new(f))
    }

    pub fn roman<F>(f: F) -> Self
    where
        F: Fn(&str) -> Result<i64> + 'static,
    {
        Solution::Roman(Box::new(f))
    }

    pub fn shape(&self) -> SolutionShape {
        match self {
            Solution::Pair(_) => SolutionShape::Pair,
            Solution::Single(_) => SolutionShape::Single,
            Solution::Roman(_) => SolutionShape::Roman,
        }
    }
}

impl fmt::Debug for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Solution({})", self.shape())
    }
}

/// Mapping from exercise key to solution
#[derive(Debug, Default)]
pub struct Solutions {
    entries: HashMap<String, Solution>,
}

impl Solutions {
    pub fn new() -> Self {
        Solutions::default()
    }

    pub fn with(mut self, key: &str, solution: Solution) -> Self {
        self.insert(key, solution);
        self
    }

    pub fn insert(&mut self, key: &str, solution: Solution) {
        self.entries.insert(key.to_string(), solution);
    }

    pub fn get(&self, key: &str) -> Option<&Solution> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys that name no known exercise
    pub fn unknown_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .entries
            .keys()
            .map(String::as_str)
            .filter(|k| k.parse::<Exercise>().is_err())
            .collect();
        keys.sort_unstable();
        keys
    }
}

// ============================================================================
// RUN SUMMARY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseOutcome {
    pub exercise: Exercise,
    pub passed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub outcomes: Vec<ExerciseOutcome>,
    pub skipped: Vec<Exercise>,
}

impl RunSummary {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    pub fn attempted(&self) -> usize {
        self.outcomes.len()
    }

    pub fn all_passed(&self) -> bool {
        self.passed() == self.attempted()
    }

    pub fn summary(&self) -> String {
        format!("Passed: {}/{}", self.passed(), self.attempted())
    }
}

const WIDE_RULE: usize = 60;
const NARROW_RULE: usize = 40;

/// Run every known exercise that has a solution, in fixed order, printing
/// each comparator's report. Errors from solutions propagate.
pub fn run_exercises(solutions: &Solutions) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    for key in solutions.unknown_keys() {
        println!("⚠️  Ignoring solution for unknown exercise: {}", key);
    }

    for exercise in Exercise::ALL {
        match solutions.get(exercise.name()) {
            Some(solution) => {
                println!("\n{}", "=".repeat(NARROW_RULE));
                println!("Testing: {}", exercise.name());
                println!("{}", "=".repeat(NARROW_RULE));
                let passed = exercise.check(solution)?;
                summary.outcomes.push(ExerciseOutcome { exercise, passed });
            }
            None => {
                println!("\n⚠️  No solution provided for: {}", exercise.name());
                summary.skipped.push(exercise);
            }
        }
    }

    Ok(summary)
}

/// Banner, every exercise, then the `Passed: p/t` summary
pub fn run_all_tests(solutions: &Solutions) -> Result<()> {
    println!("{}", "=".repeat(WIDE_RULE));
    println!("Running All LeetCode Tests");
    println!("{}", "=".repeat(WIDE_RULE));

    let summary = run_exercises(solutions)?;

    println!("\n{}", "=".repeat(WIDE_RULE));
    println!("Summary");
    println!("{}", "=".repeat(WIDE_RULE));
    println!("{}", summary.summary());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solutions::{self, reference_solutions};

    #[test]
    fn test_names_round_trip() {
        for exercise in Exercise::ALL {
            assert_eq!(exercise.name().parse::<Exercise>().unwrap(), exercise);
        }
        assert!("two_sum".parse::<Exercise>().is_err());
    }

    #[test]
    fn test_every_exercise_has_inputs_or_cases() {
        for exercise in Exercise::ALL {
            let inputs = exercise.inputs();
            match exercise.shape() {
                SolutionShape::Pair => assert_eq!(inputs.len(), 2),
                SolutionShape::Single => assert!(!inputs.is_empty()),
                SolutionShape::Roman => assert!(inputs.is_empty()),
            }
            for (_, table) in inputs {
                assert!(table.num_rows() <= 10);
            }
        }
    }

    #[test]
    fn test_all_reference_solutions_pass() {
        let summary = run_exercises(&reference_solutions()).unwrap();
        assert_eq!(summary.attempted(), 8);
        assert!(summary.all_passed(), "{:?}", summary);
        assert!(summary.skipped.is_empty());
        assert_eq!(summary.summary(), "Passed: 8/8");
    }

    #[test]
    fn test_missing_solutions_are_skipped() {
        let solutions = Solutions::new()
            .with("pivot", Solution::single(solutions::pivot))
            .with("roman_to_integer", Solution::roman(|_| Ok(0)));
        let summary = run_exercises(&solutions).unwrap();
        assert_eq!(summary.attempted(), 2);
        assert_eq!(summary.passed(), 1);
        assert_eq!(summary.skipped.len(), 6);
        assert!(!summary.skipped.contains(&Exercise::Pivot));
        assert_eq!(summary.summary(), "Passed: 1/2");
    }

    #[test]
    fn test_empty_mapping_runs_nothing() {
        let summary = run_exercises(&Solutions::new()).unwrap();
        assert_eq!(summary.attempted(), 0);
        assert_eq!(summary.skipped, Exercise::ALL.to_vec());
        assert!(run_all_tests(&Solutions::new()).is_ok());
    }

    #[test]
    fn test_wrong_shape_is_an_error() {
        let solutions =
            Solutions::new().with("concatenate", Solution::single(solutions::duplicate_emails));
        let err = run_exercises(&solutions).unwrap_err();
        assert!(err.to_string().contains("wrong shape"));
        assert!(err.to_string().contains("two-table transformation"));
    }

    #[test]
    fn test_solution_errors_propagate_except_combine() {
        let failing = Solutions::new()
            .with("combine_two_tables", Solution::pair(|_, _| bail!("boom")));
        let summary = run_exercises(&failing).unwrap();
        assert_eq!(summary.summary(), "Passed: 0/1");

        let failing = Solutions::new().with("pivot", Solution::single(|_| bail!("boom")));
        assert!(run_exercises(&failing).is_err());
    }

    #[test]
    fn test_unknown_keys_reported() {
        let solutions = Solutions::new()
            .with("pivot", Solution::single(solutions::pivot))
            .with("two_sum", Solution::roman(|_| Ok(0)));
        assert_eq!(solutions.unknown_keys(), vec!["two_sum"]);
        assert_eq!(solutions.len(), 2);
    }
}
