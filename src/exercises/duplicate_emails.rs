// 📧 Duplicate Emails (182)
// Set comparison over the email column; column labels compared case-insensitively

use crate::compare::{format_set, sets_equal, Verdict};
use crate::table::Table;
use anyhow::Result;

pub const TITLE: &str = "Duplicate Emails";

pub fn data() -> Table {
    Table::new()
        .with_column("id", [1, 2, 3])
        .with_column("email", ["a@b.com", "c@d.com", "a@b.com"])
}

pub fn expected() -> Table {
    Table::new().with_column("Email", ["a@b.com"])
}

pub fn evaluate<F>(solution: F) -> Result<Verdict>
where
    F: Fn(Table) -> Result<Table>,
{
    let result = solution(data())?.lowercase_columns();
    let expected = expected().lowercase_columns();

    if !result.has_column("email") {
        return Ok(Verdict::fail("❌ 'email' column not found in result!"));
    }

    let got = result.values("email")?;
    let want = expected.values("email")?;

    if sets_equal(got, want) {
        Ok(Verdict::pass(format!("✅ All tests passed for {}!", TITLE)))
    } else {
        Ok(Verdict::fail(format!(
            "❌ Expected: {}, Got: {}",
            format_set(want),
            format_set(got)
        )))
    }
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

    #[test]
    fn test_reference_solution_passes() {
        assert!(evaluate(solutions::duplicate_emails).unwrap().passed);
    }

    #[test]
    fn test_duplicates_and_order_ignored() {
        let verdict = evaluate(|_| {
            Ok(Table::new().with_column("email", ["a@b.com", "a@b.com", "a@b.com"]))
        })
        .unwrap();
        assert!(verdict.passed);
    }

    #[test]
    fn test_column_label_case_ignored() {
        let verdict = evaluate(|_| Ok(Table::new().with_column("EMAIL", ["a@b.com"]))).unwrap();
        assert!(verdict.passed);
    }

    #[test]
    fn test_extra_email_reported_as_set_difference() {
        let verdict = evaluate(|person| Ok(person.select(&["email"])?)).unwrap();
        assert!(!verdict.passed);
        assert_eq!(
            verdict.lines,
            vec!["❌ Expected: {'a@b.com'}, Got: {'a@b.com', 'c@d.com'}"]
        );
    }

    #[test]
    fn test_missing_column() {
        let verdict = evaluate(|person| Ok(person.select(&["id"])?)).unwrap();
        assert!(!verdict.passed);
        assert!(verdict.mentions("'email' column not found"));
    }
}
