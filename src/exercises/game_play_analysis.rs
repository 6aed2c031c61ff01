// 🎮 Game Play Analysis I (511)
// First login date per player; dates accepted as dates or ISO text

use crate::compare::{assert_frame_equal, missing_column, Verdict};
use crate::table::{Table, Value};
use anyhow::Result;

pub const TITLE: &str = "Game Play Analysis I";

fn day(iso: &str) -> Value {
    Value::infer(iso)
}

pub fn data() -> Table {
    Table::new()
        .with_column("player_id", [1, 1, 2, 3, 3])
        .with_column("device_id", [2, 2, 3, 1, 4])
        .with_column(
            "event_date",
            ["2016-03-01", "2016-05-02", "2017-06-25", "2016-03-02", "2018-07-03"].map(day),
        )
        .with_column("games_played", [5, 6, 1, 0, 5])
}

pub fn expected() -> Table {
    Table::new()
        .with_column("player_id", [1, 2, 3])
        .with_column("first_login", ["2016-03-01", "2017-06-25", "2016-03-02"].map(day))
}

/// Unparseable `first_login` cells are an error in the solution, not a
/// failed verdict.
pub fn evaluate<F>(solution: F) -> Result<Verdict>
where
    F: Fn(Table) -> Result<Table>,
{
    let result = solution(data())?;

    if let Some(column) = missing_column(&result, &["player_id", "first_login"]) {
        return Ok(Verdict::fail(format!("❌ '{}' column not found in result!", column)));
    }

    let result_sorted = result
        .sort_by("player_id")?
        .map_column("first_login", Value::to_date)?;
    let expected_sorted = expected()
        .sort_by("player_id")?
        .map_column("first_login", Value::to_date)?;

    match assert_frame_equal(&result_sorted, &expected_sorted) {
        Ok(()) => Ok(Verdict::pass(format!("✅ All tests passed for {}!", TITLE))),
        Err(mismatch) => Ok(Verdict::fail(format!("❌ Test failed: {}", mismatch))),
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
