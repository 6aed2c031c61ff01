// 🧩 Reshape Data: Concatenate (2888)
// Row order matters here: df1 rows first, then df2

use crate::compare::{assert_frame_equal, missing_column, Verdict};
use crate::table::Table;
use anyhow::Result;

pub const TITLE: &str = "Reshape Data: Concatenate";

/// (df1, df2)
pub fn data() -> (Table, Table) {
    let df1 = Table::new()
        .with_column("student_id", [1, 2, 3, 4])
        .with_column("name", ["Mason", "Ava", "Taylor", "Georgia"])
        .with_column("age", [8, 6, 15, 17]);

    let df2 = Table::new()
        .with_column("student_id", [5, 6])
        .with_column("name", ["Leo", "Alex"])
        .with_column("age", [7, 7]);

    (df1, df2)
}

pub fn expected() -> Table {
    Table::new()
        .with_column("student_id", [1, 2, 3, 4, 5, 6])
        .with_column("name", ["Mason", "Ava", "Taylor", "Georgia", "Leo", "Alex"])
        .with_column("age", [8, 6, 15, 17, 7, 7])
}

pub fn evaluate<F>(solution: F) -> Result<Verdict>
where
    F: Fn(Table, Table) -> Result<Table>,
{
    let (df1, df2) = data();
    let result = solution(df1, df2)?;

    if let Some(column) = missing_column(&result, &["student_id", "name", "age"]) {
        return Ok(Verdict::fail(format!("❌ '{}' column not found in result!", column)));
    }

    match assert_frame_equal(&result, &expected()) {
        Ok(()) => Ok(Verdict::pass(format!("✅ All tests passed for {}!", TITLE))),
        Err(mismatch) => Ok(Verdict::fail(format!("❌ Test failed: {}", mismatch))),
    }
}

pub fn check<F>(solution: F) -> Result<bool>
where
    F: Fn(Table, Table) -> Result<Table>,
{
    let verdict = evaluate(solution)?;
    verdict.print();
    Ok(verdict.passed)
}
