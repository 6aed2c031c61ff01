use anyhow::{Context, Result};
use std::env;

use leetcode_fixtures::{
    biggest_single_number, reference_solutions, roman_to_integer, run_all_tests, Exercise, Table,
    VERSION,
};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        None | Some("run") => {
            // Demo mode (default): every reference solution through the dispatcher
            run_all_tests(&reference_solutions())?;
        }
        Some("sql") => run_sql()?,
        Some("list") => list_exercises(),
        Some("show") => {
            let key = args
                .get(2)
                .context("Usage: leetcode-fixtures show <exercise> [--json]")?;
            let json = args.iter().skip(3).any(|a| a == "--json");
            show_exercise(key.parse()?, json)?;
        }
        Some("help") | Some("--help") | Some("-h") => print_usage(),
        Some(other) => {
            eprintln!("❌ Unknown command: {}", other);
            print_usage();
            std::process::exit(2);
        }
    }

    Ok(())
}

fn print_usage() {
    println!("LeetCode Fixtures v{}", VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Usage:");
    println!("  leetcode-fixtures [run]               Run the reference solutions");
    println!("  leetcode-fixtures sql                 Run the SQL answers (sqlite feature)");
    println!("  leetcode-fixtures list                List exercise keys");
    println!("  leetcode-fixtures show <key> [--json] Print fixture inputs and expected output");
}

fn list_exercises() {
    println!("📚 Exercises ({}):", Exercise::ALL.len());
    for exercise in Exercise::ALL {
        println!(
            "  {:<24} {:>5}  {}",
            exercise.name(),
            exercise.problem_number(),
            exercise.title()
        );
    }
}

fn render(table: &Table, json: bool) -> Result<String> {
    if json {
        table.to_json()
    } else {
        table.to_csv()
    }
}

fn show_exercise(exercise: Exercise, json: bool) -> Result<()> {
    println!(
        "📋 {} ({}) - {}\n",
        exercise.title(),
        exercise.problem_number(),
        exercise.name()
    );

    match exercise {
        Exercise::RomanToInteger => {
            let (romans, values): (Vec<&str>, Vec<i64>) =
                roman_to_integer::cases().into_iter().unzip();
            let cases = Table::new()
                .with_column("roman", romans)
                .with_column("expected", values);
            println!("🧪 Cases:\n{}", render(&cases, json)?);
        }
        Exercise::BiggestSingleNumber => {
            println!(
                "📥 Case 1 → expected num = {}:\n{}",
                biggest_single_number::EXPECTED_WITH_SINGLES,
                render(&biggest_single_number::data_with_singles(), json)?
            );
            println!(
                "📥 Case 2 → expected num = null:\n{}",
                render(&biggest_single_number::data_all_duplicates(), json)?
            );
        }
        _ => {
            for (name, table) in exercise.inputs() {
                println!("📥 Input: {}\n{}", name, render(&table, json)?);
            }
            if let Some(expected) = exercise.expected() {
                println!("📤 Expected:\n{}", render(&expected, json)?);
            }
        }
    }

    Ok(())
}

#[cfg(feature = "sqlite")]
fn run_sql() -> Result<()> {
    run_all_tests(&leetcode_fixtures::sql::sql_solutions())
}

#[cfg(not(feature = "sqlite"))]
fn run_sql() -> Result<()> {
    eprintln!("❌ SQL mode not available!");
    eprintln!("   Rebuild with: cargo build --features sqlite");
    std::process::exit(1);
}
