// 🔗 Combine Two Tables (175)
// Left join Person → Address; people without an address keep null city/state

use crate::compare::{same_column_set, Verdict};
use crate::table::Table;
use anyhow::Result;

pub const TITLE: &str = "Combine Two Tables";

/// (person, address)
pub fn data() -> (Table, Table) {
    let person = Table::new()
        .with_column("personId", [1, 2])
        .with_column("lastName", ["Wang", "Alice"])
        .with_column("firstName", ["Allen", "Bob"]);

    let address = Table::new()
        .with_column("addressId", [1, 2])
        .with_column("personId", [2, 3])
        .with_column("city", ["New York City", "Leetcode"])
        .with_column("state", ["New York", "California"]);

    (person, address)
}

pub fn expected() -> Table {
    Table::new()
        .with_column("firstName", ["Allen", "Bob"])
        .with_column("lastName", ["Wang", "Alice"])
        .with_column("city", [None, Some("New York City")])
        .with_column("state", [None, Some("New York")])
}

/// Errors from the solution or from the comparison itself are reported as a
/// failed verdict rather than returned.
pub fn evaluate<F>(solution: F) -> Verdict
where
    F: Fn(Table, Table) -> Result<Table>,
{
    match compare(solution) {
        Ok(verdict) => verdict,
        Err(e) => Verdict::fail(format!("❌ Error during comparison: {}", e)),
    }
}

fn compare<F>(solution: F) -> Result<Verdict>
where
    F: Fn(Table, Table) -> Result<Table>,
{
    let (person, address) = data();
    let result = solution(person.clone(), address.clone())?;
    let expected = expected();

    if !same_column_set(&result, &expected) {
        return Ok(Verdict::fail(format!(
            "❌ Column mismatch! Expected: {:?}, Got: {:?}",
            expected.column_names(),
            result.column_names()
        )));
    }

    if result.num_rows() != expected.num_rows() {
        return Ok(Verdict::fail(format!(
            "❌ Row count mismatch! Expected: {}, Got: {}",
            expected.num_rows(),
            result.num_rows()
        )));
    }

    let order = expected.column_names();
    let result_sorted = result.sort_by("firstName")?.select(&order)?;
    let expected_sorted = expected.sort_by("firstName")?;

    for column in &order {
        for i in 0..expected_sorted.num_rows() {
            let exp = expected_sorted.cell(i, column)?;
            let got = result_sorted.cell(i, column)?;
            if exp != got {
                return Ok(Verdict::fail(format!(
                    "❌ Value mismatch at row {}, column '{}'! Expected: {}, Got: {}",
                    i, column, exp, got
                )));
            }
        }
    }

    Ok(Verdict::pass(format!("✅ All tests passed for {}!", TITLE)))
}

/// Run the comparator and print its report
pub fn check<F>(solution: F) -> bool
where
    F: Fn(Table, Table) -> Result<Table>,
{
    let verdict = evaluate(solution);
    verdict.print();
    verdict.passed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solutions;
    use crate::table::Value;

    #[test]
    fn test_reference_solution_passes() {
        let verdict = evaluate(solutions::combine_two_tables);
        assert!(verdict.passed, "{:?}", verdict.lines);
    }

    #[test]
    fn test_row_order_and_column_order_ignored() {
        let verdict = evaluate(|_, _| {
            Ok(Table::new()
                .with_column("state", [Some("New York"), None])
                .with_column("city", [Some("New York City"), None])
                .with_column("lastName", ["Alice", "Wang"])
                .with_column("firstName", ["Bob", "Allen"]))
        });
        assert!(verdict.passed, "{:?}", verdict.lines);
    }

    #[test]
    fn test_nan_accepted_as_null() {
        let verdict = evaluate(|_, _| {
            Ok(expected()
                .with_column("city", [Value::Float(f64::NAN), Value::from("New York City")]))
        });
        assert!(verdict.passed);
    }

    #[test]
    fn test_column_mismatch_reported_first() {
        let verdict = evaluate(|_, _| Ok(Table::new()));
        assert!(!verdict.passed);
        assert!(verdict.mentions("Column mismatch"));
    }

    #[test]
    fn test_value_mismatch() {
        // inner join drops Allen
        let verdict = evaluate(|_, _| {
            Ok(expected().with_column("city", ["Leetcode", "New York City"]))
        });
        assert!(!verdict.passed);
        assert_eq!(
            verdict.lines,
            vec!["❌ Value mismatch at row 0, column 'city'! Expected: null, Got: Leetcode"]
        );
    }

    #[test]
    fn test_missing_row_is_failure() {
        let verdict = evaluate(|_, _| {
            Table::from_rows(
                &["firstName", "lastName", "city", "state"],
                vec![vec!["Bob".into(), "Alice".into(), "New York City".into(), "New York".into()]],
            )
            .map_err(Into::into)
        });
        assert!(!verdict.passed);
        assert!(verdict.mentions("Row count mismatch"));
    }

    #[test]
    fn test_ragged_result_is_a_failed_verdict() {
        let verdict = evaluate(|_, _| Ok(expected().with_column("state", [None::<&str>])));
        assert!(!verdict.passed);
        assert_eq!(
            verdict.lines,
            vec!["❌ Error during comparison: column 'state' has 1 values, expected 2"]
        );
    }

    #[test]
    fn test_solution_error_is_caught() {
        let verdict = evaluate(|_, _| anyhow::bail!("join exploded"));
        assert!(!verdict.passed);
        assert_eq!(verdict.lines, vec!["❌ Error during comparison: join exploded"]);
    }

    #[test]
    fn test_inputs_are_fresh_each_call() {
        let verdict = evaluate(|mut person, address| {
            person = person.with_column("firstName", ["X", "Y"]);
            let _ = address;
            Ok(person)
        });
        assert!(!verdict.passed);
        let (person, _) = data();
        assert_eq!(person.cell(0, "firstName").unwrap(), &Value::from("Allen"));
    }
}
