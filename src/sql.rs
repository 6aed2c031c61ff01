// 🗄️ SQL Bridge - Check SQL answers against the same fixtures
// Fixture tables are loaded into an in-memory SQLite database under their
// problem-statement names; the query result comes back as a Table.

use crate::runner::{Solution, Solutions};
use crate::table::{Table, Value};
use anyhow::{bail, Context, Result};
use rusqlite::types::{Value as SqlValue, ValueRef};
use rusqlite::{params_from_iter, Connection};

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Dates are stored as `YYYY-MM-DD` text so MIN/MAX order them correctly
fn to_sql(value: &Value) -> SqlValue {
    match value {
        v if v.is_null() => SqlValue::Null,
        Value::Int(i) => SqlValue::Integer(*i),
        Value::Float(f) => SqlValue::Real(*f),
        Value::Date(d) => SqlValue::Text(d.format("%Y-%m-%d").to_string()),
        Value::Text(s) => SqlValue::Text(s.clone()),
        Value::Null => SqlValue::Null,
    }
}

fn from_sql(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::Int(i),
        ValueRef::Real(f) => Value::Float(f),
        ValueRef::Text(bytes) => Value::Text(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Blob(bytes) => Value::Text(format!("<blob {} bytes>", bytes.len())),
    }
}

/// Create `name` with the table's columns and insert every row
pub fn load_table(conn: &Connection, name: &str, table: &Table) -> Result<()> {
    if table.num_columns() == 0 {
        bail!("Cannot load table '{}' without columns", name);
    }
    table
        .check_rectangular()
        .with_context(|| format!("Cannot load ragged table '{}'", name))?;

    let columns: Vec<String> = table.column_names().into_iter().map(quote_ident).collect();
    conn.execute(
        &format!("CREATE TABLE {} ({})", quote_ident(name), columns.join(", ")),
        [],
    )
    .with_context(|| format!("Failed to create table '{}'", name))?;

    let placeholders = vec!["?"; columns.len()].join(", ");
    let mut stmt = conn.prepare(&format!(
        "INSERT INTO {} ({}) VALUES ({})",
        quote_ident(name),
        columns.join(", "),
        placeholders
    ))?;

    for row in table.rows() {
        stmt.execute(params_from_iter(row.iter().map(to_sql)))
            .with_context(|| format!("Failed to insert row into '{}'", name))?;
    }

    Ok(())
}

/// In-memory database holding the given tables
pub fn open_with_tables(tables: &[(&str, &Table)]) -> Result<Connection> {
    let conn = Connection::open_in_memory().context("Failed to open in-memory database")?;
    for (name, table) in tables {
        load_table(&conn, name, table)?;
    }
    Ok(conn)
}

/// Run a query and collect its result set
pub fn query_table(conn: &Connection, sql: &str) -> Result<Table> {
    let mut stmt = conn
        .prepare(sql)
        .with_context(|| format!("Failed to prepare query: {}", sql))?;
    let names: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

    let mut rows = stmt.query([])?;
    let mut collected = Vec::new();
    while let Some(row) = rows.next()? {
        let mut values = Vec::with_capacity(names.len());
        for i in 0..names.len() {
            values.push(from_sql(row.get_ref(i)?));
        }
        collected.push(values);
    }

    Ok(Table::from_rows(&names, collected)?)
}

/// Solution for a one-table exercise: the input is loaded as `table_name`
pub fn single(table_name: &str, query: &str) -> Solution {
    let (name, query) = (table_name.to_string(), query.to_string());
    Solution::single(move |table| {
        let conn = open_with_tables(&[(name.as_str(), &table)])?;
        query_table(&conn, &query)
    })
}

/// Solution for a two-table exercise
pub fn pair(first_name: &str, second_name: &str, query: &str) -> Solution {
    let (first, second, query) = (
        first_name.to_string(),
        second_name.to_string(),
        query.to_string(),
    );
    Solution::pair(move |a, b| {
        let conn = open_with_tables(&[(first.as_str(), &a), (second.as_str(), &b)])?;
        query_table(&conn, &query)
    })
}

pub const COMBINE_TWO_TABLES: &str = "SELECT p.firstName, p.lastName, a.city, a.state \
     FROM Person p LEFT JOIN Address a ON p.personId = a.personId";

pub const DUPLICATE_EMAILS: &str =
    "SELECT email AS Email FROM Person GROUP BY email HAVING COUNT(*) > 1";

pub const GAME_PLAY_ANALYSIS: &str =
    "SELECT player_id, MIN(event_date) AS first_login FROM Activity GROUP BY player_id";

pub const CONCATENATE: &str = "SELECT * FROM df1 UNION ALL SELECT * FROM df2";

pub const INVALID_TWEETS: &str = "SELECT tweet_id FROM Tweets WHERE LENGTH(content) > 15";

pub const PIVOT: &str = "SELECT month, \
     MAX(CASE WHEN city = 'ElPaso' THEN temperature END) AS ElPaso, \
     MAX(CASE WHEN city = 'Jacksonville' THEN temperature END) AS Jacksonville \
     FROM Weather GROUP BY month ORDER BY month";

pub const BIGGEST_SINGLE_NUMBER: &str = "SELECT MAX(num) AS num FROM \
     (SELECT num FROM MyNumbers GROUP BY num HAVING COUNT(*) = 1)";

/// SQL answers for every table exercise (the string exercise has none)
pub fn sql_solutions() -> Solutions {
    Solutions::new()
        .with("combine_two_tables", pair("Person", "Address", COMBINE_TWO_TABLES))
        .with("duplicate_emails", single("Person", DUPLICATE_EMAILS))
        .with("game_play_analysis", single("Activity", GAME_PLAY_ANALYSIS))
        .with("concatenate", pair("df1", "df2", CONCATENATE))
        .with("invalid_tweets", single("Tweets", INVALID_TWEETS))
        .with("pivot", single("Weather", PIVOT))
        .with("biggest_single_number", single("MyNumbers", BIGGEST_SINGLE_NUMBER))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exercises::{
        biggest_single_number, combine_two_tables, game_play_analysis, invalid_tweets,
    };
    use crate::runner::{run_exercises, Exercise};

    #[test]
    fn test_load_and_query_keeps_types() {
        let table = Table::new()
            .with_column("id", [1, 2])
            .with_column("score", [Some(1.5), None])
            .with_column("name", ["a", "b"]);
        let conn = open_with_tables(&[("T", &table)]).unwrap();
        let back = query_table(&conn, "SELECT * FROM T ORDER BY id").unwrap();
        assert_eq!(back, table);
    }

    #[test]
    fn test_dates_stored_as_iso_text() {
        let conn = open_with_tables(&[("Activity", &game_play_analysis::data())]).unwrap();
        let result = query_table(&conn, "SELECT MAX(event_date) AS d FROM Activity").unwrap();
        assert_eq!(result.cell(0, "d").unwrap(), &Value::from("2018-07-03"));
    }

    #[test]
    fn test_quoted_identifiers() {
        let table = Table::new().with_column("weird \"name\"", [1]);
        let conn = open_with_tables(&[("my table", &table)]).unwrap();
        let back = query_table(&conn, "SELECT * FROM \"my table\"").unwrap();
        assert_eq!(back.column_names(), vec!["weird \"name\""]);
    }

    #[test]
    fn test_empty_table_rejected() {
        let conn = Connection::open_in_memory().unwrap();
        assert!(load_table(&conn, "Nothing", &Table::new()).is_err());
    }

    #[test]
    fn test_ragged_table_rejected() {
        let conn = Connection::open_in_memory().unwrap();
        let ragged = Table::new().with_column("a", [1, 2]).with_column("b", [1]);
        let err = load_table(&conn, "Ragged", &ragged).unwrap_err();
        assert!(err.to_string().contains("ragged"));
    }

    #[test]
    fn test_bad_query_is_an_error() {
        let solution = single("Tweets", "SELECT nope FROM Tweets");
        let Solution::Single(f) = solution else {
            panic!("expected single-table solution");
        };
        assert!(invalid_tweets::evaluate(&f).is_err());
    }

    #[test]
    fn test_sql_left_join_passes() {
        let Solution::Pair(f) = pair("Person", "Address", COMBINE_TWO_TABLES) else {
            panic!("expected two-table solution");
        };
        let verdict = combine_two_tables::evaluate(&f);
        assert!(verdict.passed, "{:?}", verdict.lines);
    }

    #[test]
    fn test_sql_inner_join_fails() {
        let Solution::Pair(f) = pair(
            "Person",
            "Address",
            "SELECT p.firstName, p.lastName, a.city, a.state \
             FROM Person p JOIN Address a ON p.personId = a.personId",
        ) else {
            panic!("expected two-table solution");
        };
        let verdict = combine_two_tables::evaluate(&f);
        assert!(!verdict.passed);
        assert!(verdict.mentions("Row count mismatch"));
    }

    #[test]
    fn test_sql_null_for_biggest_single_number() {
        let Solution::Single(f) = single("MyNumbers", BIGGEST_SINGLE_NUMBER) else {
            panic!("expected single-table solution");
        };
        let verdict = biggest_single_number::evaluate(&f).unwrap();
        assert!(verdict.passed, "{:?}", verdict.lines);
    }

    #[test]
    fn test_all_sql_solutions_pass() {
        let summary = run_exercises(&sql_solutions()).unwrap();
        assert_eq!(summary.attempted(), 7);
        assert!(summary.all_passed(), "{:?}", summary);
        assert_eq!(summary.skipped, vec![Exercise::RomanToInteger]);
    }
}
