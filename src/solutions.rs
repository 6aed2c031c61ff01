// ✅ Reference Solutions - Known-good transformations for every exercise
// Used by the demo run and as the passing baseline in tests

use crate::runner::{Solution, Solutions};
use crate::table::{Table, Value};
use anyhow::{bail, Result};
use std::cmp::Ordering;

/// Occurrence count per distinct value, first-seen order
fn counts(values: &[Value]) -> Vec<(Value, usize)> {
    let mut counts: Vec<(Value, usize)> = Vec::new();
    for value in values {
        match counts.iter_mut().find(|(v, _)| v == value) {
            Some((_, n)) => *n += 1,
            None => counts.push((value.clone(), 1)),
        }
    }
    counts
}

/// Left join person → address on personId
pub fn combine_two_tables(person: Table, address: Table) -> Result<Table> {
    let mut out = Table::from_rows(&["firstName", "lastName", "city", "state"], Vec::new())?;
    let address_person = address.values("personId")?;

    for i in 0..person.num_rows() {
        let person_id = person.cell(i, "personId")?;
        let first = person.cell(i, "firstName")?;
        let last = person.cell(i, "lastName")?;

        let matches: Vec<usize> = address_person
            .iter()
            .enumerate()
            .filter(|(_, id)| *id == person_id)
            .map(|(j, _)| j)
            .collect();

        if matches.is_empty() {
            out.push_row(vec![first.clone(), last.clone(), Value::Null, Value::Null])?;
        }
        for j in matches {
            out.push_row(vec![
                first.clone(),
                last.clone(),
                address.cell(j, "city")?.clone(),
                address.cell(j, "state")?.clone(),
            ])?;
        }
    }

    Ok(out)
}

pub fn roman_to_integer(roman: &str) -> Result<i64> {
    let mut digits = Vec::with_capacity(roman.len());
    for c in roman.chars() {
        digits.push(match c {
            'I' => 1,
            'V' => 5,
            'X' => 10,
            'L' => 50,
            'C' => 100,
            'D' => 500,
            'M' => 1000,
            other => bail!("Invalid roman numeral character '{}' in '{}'", other, roman),
        });
    }

    let mut total = 0i64;
    for (i, &digit) in digits.iter().enumerate() {
        match digits.get(i + 1) {
            Some(&next) if next > digit => total -= digit,
            _ => total += digit,
        }
    }
    Ok(total)
}

pub fn duplicate_emails(person: Table) -> Result<Table> {
    let duplicated: Vec<Value> = counts(person.values("email")?)
        .into_iter()
        .filter(|(_, n)| *n > 1)
        .map(|(email, _)| email)
        .collect();
    Ok(Table::new().with_column("Email", duplicated))
}

pub fn game_play_analysis(activity: Table) -> Result<Table> {
    let players = activity.values("player_id")?;
    let dates = activity.values("event_date")?;

    let mut first: Vec<(Value, Value)> = Vec::new();
    for (player, date) in players.iter().zip(dates) {
        let date = date.to_date()?;
        match first.iter_mut().find(|(p, _)| p == player) {
            Some((_, earliest)) => {
                if date.sort_cmp(earliest) == Ordering::Less {
                    *earliest = date;
                }
            }
            None => first.push((player.clone(), date)),
        }
    }
    first.sort_by(|a, b| a.0.sort_cmp(&b.0));

    let (ids, logins): (Vec<Value>, Vec<Value>) = first.into_iter().unzip();
    Ok(Table::new()
        .with_column("player_id", ids)
        .with_column("first_login", logins))
}

pub fn concatenate(df1: Table, df2: Table) -> Result<Table> {
    Ok(df1.concat(&df2)?)
}

pub fn invalid_tweets(tweets: Table) -> Result<Table> {
    let mut ids = Vec::new();
    for (id, content) in tweets.values("tweet_id")?.iter().zip(tweets.values("content")?) {
        let length = content.as_str().map(|s| s.chars().count()).unwrap_or(0);
        if length > 15 {
            ids.push(id.clone());
        }
    }
    Ok(Table::new().with_column("tweet_id", ids))
}

/// Months become rows (sorted), cities become columns (sorted)
pub fn pivot(weather: Table) -> Result<Table> {
    let mut months = weather.distinct("month")?;
    months.sort_by(|a, b| a.sort_cmp(b));
    let mut cities = weather.distinct("city")?;
    cities.sort_by(|a, b| a.sort_cmp(b));

    let city_col = weather.values("city")?;
    let month_col = weather.values("month")?;
    let temperature = weather.values("temperature")?;

    let mut out = Table::new().with_column("month", months.clone());
    for city in &cities {
        let column: Vec<Value> = months
            .iter()
            .map(|month| {
                (0..weather.num_rows())
                    .find(|&i| &city_col[i] == city && &month_col[i] == month)
                    .map(|i| temperature[i].clone())
                    .unwrap_or(Value::Null)
            })
            .collect();
        out.push_column(&city.to_string(), column)?;
    }
    Ok(out)
}

/// Largest number appearing exactly once, or a single null row
pub fn biggest_single_number(my_numbers: Table) -> Result<Table> {
    let biggest = counts(my_numbers.values("num")?)
        .into_iter()
        .filter(|(_, n)| *n == 1)
        .map(|(num, _)| num)
        .max_by(|a, b| a.sort_cmp(b))
        .unwrap_or(Value::Null);
    Ok(Table::new().with_column("num", [biggest]))
}

/// All eight reference solutions keyed for the dispatcher
pub fn reference_solutions() -> Solutions {
    Solutions::new()
        .with("combine_two_tables", Solution::pair(combine_two_tables))
        .with("roman_to_integer", Solution::roman(roman_to_integer))
        .with("duplicate_emails", Solution::single(duplicate_emails))
        .with("game_play_analysis", Solution::single(game_play_analysis))
        .with("concatenate", Solution::pair(concatenate))
        .with("invalid_tweets", Solution::single(invalid_tweets))
        .with("pivot", Solution::single(pivot))
        .with("biggest_single_number", Solution::single(biggest_single_number))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roman_rejects_unknown_characters() {
        assert!(roman_to_integer("MXQ").is_err());
        assert_eq!(roman_to_integer("").unwrap(), 0);
    }

    #[test]
    fn test_left_join_keeps_unmatched_people() {
        let (person, address) = crate::exercises::combine_two_tables::data();
        let joined = combine_two_tables(person, address).unwrap();
        assert_eq!(joined.num_rows(), 2);
        assert!(joined.cell(0, "city").unwrap().is_null());
        assert_eq!(joined.cell(1, "city").unwrap(), &Value::from("New York City"));
    }

    #[test]
    fn test_pivot_fills_missing_cells_with_null() {
        let weather = Table::new()
            .with_column("city", ["A", "B"])
            .with_column("month", ["May", "June"])
            .with_column("temperature", [1, 2]);
        let pivoted = pivot(weather).unwrap();
        assert_eq!(pivoted.column_names(), vec!["month", "A", "B"]);
        assert!(pivoted.cell(0, "A").unwrap().is_null());
        assert_eq!(pivoted.cell(1, "A").unwrap(), &Value::Int(1));
    }

    #[test]
    fn test_biggest_single_number_null_when_all_repeat() {
        let result =
            biggest_single_number(crate::exercises::biggest_single_number::data_all_duplicates())
                .unwrap();
        assert_eq!(result.shape(), (1, 1));
        assert!(result.cell(0, "num").unwrap().is_null());
    }

    #[test]
    fn test_invalid_tweets_counts_characters_not_bytes() {
        let tweets = Table::new()
            .with_column("tweet_id", [1, 2])
            .with_column("content", ["ééééééééééééééé", "ééééééééééééééééé"]);
        let result = invalid_tweets(tweets).unwrap();
        assert_eq!(result.values("tweet_id").unwrap().to_vec(), vec![Value::Int(2)]);
    }
}
