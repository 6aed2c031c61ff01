// 🐦 Invalid Tweets (1683)
// Tweets whose content is longer than 15 characters

use crate::compare::{format_set, sets_equal, Verdict};
use crate::table::Table;
use anyhow::Result;

pub const TITLE: &str = "Invalid Tweets";

pub fn data() -> Table {
    Table::new()
        .with_column("tweet_id", [1, 2])
        .with_column("content", ["Let us Code", "More than fifteen chars are here!"])
}

pub fn expected() -> Table {
    Table::new().with_column("tweet_id", [2])
}

pub fn evaluate<F>(solution: F) -> Result<Verdict>
where
    F: Fn(Table) -> Result<Table>,
{
    let result = solution(data())?;
    let expected = expected();

    if !result.has_column("tweet_id") {
        return Ok(Verdict::fail("❌ 'tweet_id' column not found in result!"));
    }

    let got = result.values("tweet_id")?;
    let want = expected.values("tweet_id")?;

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
