// 🔄 Reshape Data: Pivot (2889)
// Months as rows, one temperature column per city

use crate::compare::{assert_frame_equal, Verdict};
use crate::table::Table;
use anyhow::Result;

pub const TITLE: &str = "Reshape Data: Pivot";

const CITIES: [&str; 2] = ["ElPaso", "Jacksonville"];

pub fn data() -> Table {
    Table::new()
        .with_column(
            "city",
            [
                "Jacksonville", "Jacksonville", "Jacksonville", "Jacksonville", "Jacksonville",
                "ElPaso", "ElPaso", "ElPaso", "ElPaso", "ElPaso",
            ],
        )
        .with_column(
            "month",
            [
                "January", "February", "March", "April", "May",
                "January", "February", "March", "April", "May",
            ],
        )
        .with_column("temperature", [13, 23, 38, 5, 34, 20, 6, 26, 2, 43])
}

pub fn expected() -> Table {
    Table::new()
        .with_column("month", ["April", "February", "January", "March", "May"])
        .with_column("ElPaso", [2, 6, 20, 26, 43])
        .with_column("Jacksonville", [5, 23, 13, 38, 34])
}

pub fn evaluate<F>(solution: F) -> Result<Verdict>
where
    F: Fn(Table) -> Result<Table>,
{
    let result = solution(data())?;

    if !result.has_column("month") {
        return Ok(Verdict::fail("❌ 'month' column not found in result!"));
    }
    for city in CITIES {
        if !result.has_column(city) {
            return Ok(Verdict::fail(format!("❌ '{}' column not found in result!", city)));
        }
    }

    let result_sorted = result
        .sort_by("month")?
        .select(&["month", CITIES[0], CITIES[1]])?;
    let expected_sorted = expected().sort_by("month")?;

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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solutions;

    #[test]
    fn test_reference_solution_passes() {
        let verdict = evaluate(solutions::pivot).unwrap();
        assert!(verdict.passed, "{:?}", verdict.lines);
    }

    #[test]
    fn test_calendar_order_and_extra_columns_accepted() {
        let verdict = evaluate(|_| {
            Ok(Table::new()
                .with_column("Jacksonville", [13, 23, 38, 5, 34])
                .with_column("month", ["January", "February", "March", "April", "May"])
                .with_column("ElPaso", [20.0, 6.0, 26.0, 2.0, 43.0])
                .with_column("Houston", [1, 2, 3, 4, 5]))
        })
        .unwrap();
        assert!(verdict.passed, "{:?}", verdict.lines);
    }

    #[test]
    fn test_missing_city_column() {
        let verdict = evaluate(|_| Ok(expected().select(&["month", "ElPaso"])?)).unwrap();
        assert_eq!(verdict.lines, vec!["❌ 'Jacksonville' column not found in result!"]);
    }

    #[test]
    fn test_month_checked_before_cities() {
        let verdict = evaluate(|weather| Ok(weather)).unwrap();
        assert!(!verdict.passed);
        // the unpivoted table has a month column but no city columns
        assert!(verdict.mentions("'ElPaso' column not found"));

        let verdict = evaluate(|_| Ok(Table::new())).unwrap();
        assert!(verdict.mentions("'month' column not found"));
    }

    #[test]
    fn test_swapped_cities_fail() {
        let verdict = evaluate(|_| {
            Ok(expected()
                .with_column("ElPaso", [5, 23, 13, 38, 34])
                .with_column("Jacksonville", [2, 6, 20, 26, 43]))
        })
        .unwrap();
        assert!(!verdict.passed);
        assert!(verdict.mentions("column name=\"ElPaso\""));
    }
}
