// Exercise Fixtures - One fixture/comparator pair per LeetCode problem
//
// Each module has:
// - Literal fixture constructors (fresh tables on every call)
// - evaluate(): runs a solution and returns a Verdict
// - check(): prints the Verdict and returns the pass flag

pub mod combine_two_tables;     // 175
pub mod roman_to_integer;       // 13
pub mod duplicate_emails;       // 182
pub mod game_play_analysis;     // 511
pub mod concatenate;            // 2888
pub mod invalid_tweets;         // 1683
pub mod pivot;                  // 2889
pub mod biggest_single_number;  // 619
