// 🏛️ Roman to Integer (13)
// The one string exercise: numeral in, integer out, one report line per case

use crate::compare::Verdict;
use anyhow::Result;

pub const TITLE: &str = "Roman to Integer";

/// (numeral, value) pairs, subtractive forms included
pub fn cases() -> Vec<(&'static str, i64)> {
    vec![
        ("III", 3),
        ("LVIII", 58),
        ("MCMXCIV", 1994),
        ("IV", 4),
        ("IX", 9),
        ("XL", 40),
        ("XC", 90),
        ("CD", 400),
        ("CM", 900),
        ("MMXXIII", 2023),
        ("I", 1),
        ("MMMCMXCIX", 3999),
    ]
}

/// Every case is checked; an error from the solution aborts the run.
pub fn evaluate<F>(solution: F) -> Result<Verdict>
where
    F: Fn(&str) -> Result<i64>,
{
    let mut verdict = Verdict::open();

    for (roman, expected) in cases() {
        let result = solution(roman)?;
        if result != expected {
            verdict.record_failure(format!(
                "❌ Failed: {} -> Expected {}, Got {}",
                roman, expected, result
            ));
        } else {
            verdict.note(format!("✓ Passed: {} = {}", roman, result));
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
    F: Fn(&str) -> Result<i64>,
{
    let verdict = evaluate(solution)?;
    verdict.print();
    Ok(verdict.passed)
}
