// 🔢 Biggest Single Number (619)
// Two independent boundary cases: a single number exists, and none does (null)

use crate::compare::Verdict;
use crate::table::Table;
use anyhow::Result;

pub const TITLE: &str = "Biggest Single Number";

/// 1, 4, 5 and 6 appear once; the answer is 6
pub fn data_with_singles() -> Table {
    Table::new().with_column("num", [8, 8, 3, 3, 1, 4, 5, 6])
}

/// Every number repeats; the answer is null
pub fn data_all_duplicates() -> Table {
    Table::new().with_column("num", [8, 8, 7, 7, 3, 3, 3])
}

pub const EXPECTED_WITH_SINGLES: i64 = 6;

/// A result without a first row is a structural error and is returned as
/// `Err`; a missing `num` column is a failed case.
pub fn evaluate<F>(solution: F) -> Result<Verdict>
where
    F: Fn(Table) -> Result<Table>,
{
    let mut verdict = Verdict::open();

    let result1 = solution(data_with_singles())?;
    if !result1.has_column("num") {
        verdict.record_failure("❌ Test 1 failed: 'num' column not found in result!");
    } else {
        let got = result1.cell(0, "num")?;
        if got.as_i64() != Some(EXPECTED_WITH_SINGLES) {
            verdict.record_failure(format!(
                "❌ Test 1 failed: Expected {}, Got {}",
                EXPECTED_WITH_SINGLES, got
            ));
        } else {
            verdict.note(format!(
                "✓ Test 1 passed: Correctly found {} as the biggest single number",
                EXPECTED_WITH_SINGLES
            ));
        }
    }

    let result2 = solution(data_all_duplicates())?;
    if !result2.has_column("num") {
        verdict.record_failure("❌ Test 2 failed: 'num' column not found in result!");
    } else {
        let got = result2.cell(0, "num")?;
        if !got.is_null() {
            verdict.record_failure(format!("❌ Test 2 failed: Expected None/null, Got {}", got));
        } else {
            verdict.note("✓ Test 2 passed: Correctly returned null when no single number exists");
        }
    }

    if verdict.passed {
        verdict.note(format!("\n✅ All tests passed for {}!", TITLE));
    } else {
        verdict.note(format!("\n❌ Some tests failed for {}!", TITLE));
    }

    Ok(verdict)
}

pub fn check<F>(solution: F) -> Result<bool>
where
    F: Fn(Table) -> Result<Table>,
{
    let verdict = evaluate(solution)?;
    verdict.print();
    Ok(verdict.passed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solutions;
    use crate::table::{TableError, Value};

    #[test]
    fn test_reference_solution_passes() {
        let verdict = evaluate(solutions::biggest_single_number).unwrap();
        assert!(verdict.passed, "{:?}", verdict.lines);
        assert_eq!(verdict.lines.len(), 3);
    }

    #[test]
    fn test_nan_counts_as_null() {
        let verdict = evaluate(|t| {
            let answer = if t.num_rows() == 8 {
                Value::Float(6.0)
            } else {
                Value::Float(f64::NAN)
            };
            Ok(Table::new().with_column("num", [answer]))
        })
        .unwrap();
        assert!(verdict.passed, "{:?}", verdict.lines);
    }

    #[test]
    fn test_max_without_uniqueness_fails_both_cases() {
        let verdict = evaluate(|t| {
            let max = t
                .values("num")?
                .iter()
                .filter_map(Value::as_i64)
                .max();
            Ok(Table::new().with_column("num", [max]))
        })
        .unwrap();
        assert!(!verdict.passed);
        assert!(verdict.mentions("❌ Test 1 failed: Expected 6, Got 8"));
        assert!(verdict.mentions("❌ Test 2 failed: Expected None/null, Got 8"));
        assert!(verdict.mentions("Some tests failed"));
    }

    #[test]
    fn test_cases_are_independent() {
        // right on the boundary case, wrong on the other
        let verdict = evaluate(|_| Ok(Table::new().with_column("num", [Value::Null]))).unwrap();
        assert!(!verdict.passed);
        assert!(verdict.mentions("❌ Test 1 failed"));
        assert!(verdict.mentions("✓ Test 2 passed"));
    }

    #[test]
    fn test_empty_result_is_an_error() {
        let err = evaluate(|_| Ok(Table::new().with_column("num", Vec::<i64>::new()))).unwrap_err();
        assert_eq!(
            err.downcast_ref::<TableError>(),
            Some(&TableError::RowOutOfRange { row: 0, rows: 0 })
        );
    }
}
