// ⚖️ Comparison Layer - Verdicts, frame equality, set equality
// Every comparator reports through a Verdict: pass/fail plus the lines it printed

use crate::table::{Table, Value};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// VERDICT
// ============================================================================

/// Outcome of one comparator run: the success flag and the human-readable
/// lines that explain it, in print order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub passed: bool,
    pub lines: Vec<String>,
}

impl Verdict {
    pub fn pass(line: impl Into<String>) -> Self {
        Verdict {
            passed: true,
            lines: vec![line.into()],
        }
    }

    pub fn fail(line: impl Into<String>) -> Self {
        Verdict {
            passed: false,
            lines: vec![line.into()],
        }
    }

    /// Empty verdict that stays passing until a failing line is recorded
    pub fn open() -> Self {
        Verdict {
            passed: true,
            lines: Vec::new(),
        }
    }

    pub fn note(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn record_failure(&mut self, line: impl Into<String>) {
        self.passed = false;
        self.lines.push(line.into());
    }

    pub fn print(&self) {
        for line in &self.lines {
            println!("{}", line);
        }
    }

    /// Whether any line contains `needle`
    #[cfg(test)]
    pub(crate) fn mentions(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }
}

// ============================================================================
// FRAME EQUALITY
// ============================================================================

/// First difference found between two tables
#[derive(Debug, Clone, PartialEq)]
pub struct FrameMismatch {
    pub message: String,
}

impl fmt::Display for FrameMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for FrameMismatch {}

fn list(values: &[Value]) -> String {
    let items: Vec<String> = values.iter().map(Value::repr).collect();
    format!("[{}]", items.join(", "))
}

/// Dataframe-style equality without dtype checking.
///
/// Checks shape, then column labels in order, then values column by column.
/// Integers and floats denoting the same number are equal; null and NaN are
/// interchangeable. Row positions are compared as-is, so callers sort first
/// when order does not matter.
pub fn assert_frame_equal(left: &Table, right: &Table) -> Result<(), FrameMismatch> {
    for (side, table) in [("left", left), ("right", right)] {
        if let Err(e) = table.check_rectangular() {
            return Err(FrameMismatch {
                message: format!("DataFrame are different\n\n[{}] is ragged: {}", side, e),
            });
        }
    }

    if left.shape() != right.shape() {
        return Err(FrameMismatch {
            message: format!(
                "DataFrame are different\n\nDataFrame shape mismatch\n[left]:  {:?}\n[right]: {:?}",
                left.shape(),
                right.shape()
            ),
        });
    }

    let left_names = left.column_names();
    let right_names = right.column_names();
    if left_names != right_names {
        let differing = left_names
            .iter()
            .zip(&right_names)
            .filter(|(a, b)| a != b)
            .count();
        return Err(FrameMismatch {
            message: format!(
                "DataFrame.columns are different\n\nDataFrame.columns values are different ({:.5} %)\n[left]:  {:?}\n[right]: {:?}",
                percent(differing, left_names.len()),
                left_names,
                right_names
            ),
        });
    }

    for (position, (lcol, rcol)) in left.columns().iter().zip(right.columns()).enumerate() {
        let diffs: Vec<usize> = lcol
            .values
            .iter()
            .zip(&rcol.values)
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(i, _)| i)
            .collect();

        if let Some(&first) = diffs.first() {
            let label = format!(
                "DataFrame.iloc[:, {}] (column name=\"{}\")",
                position, lcol.name
            );
            let index: Vec<String> = (0..lcol.values.len()).map(|i| i.to_string()).collect();
            return Err(FrameMismatch {
                message: format!(
                    "{label} are different\n\n{label} values are different ({:.5} %)\n[index]: [{}]\n[left]:  {}\n[right]: {}\nAt positional index {}, first diff: {} != {}",
                    percent(diffs.len(), lcol.values.len()),
                    index.join(", "),
                    list(&lcol.values),
                    list(&rcol.values),
                    first,
                    lcol.values[first],
                    rcol.values[first],
                    label = label
                ),
            });
        }
    }

    Ok(())
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}

// ============================================================================
// SET EQUALITY
// ============================================================================

/// Distinct values, order and duplicates ignored
pub fn value_set(values: &[Value]) -> Vec<Value> {
    let mut set: Vec<Value> = Vec::new();
    for value in values {
        if !set.contains(value) {
            set.push(value.clone());
        }
    }
    set.sort_by(|a, b| a.sort_cmp(b));
    set
}

pub fn sets_equal(left: &[Value], right: &[Value]) -> bool {
    let (left, right) = (value_set(left), value_set(right));
    left.len() == right.len() && left.iter().all(|v| right.contains(v))
}

/// `{'a@b.com', 'c@d.com'}`; `set()` when empty
pub fn format_set(values: &[Value]) -> String {
    let set = value_set(values);
    if set.is_empty() {
        return "set()".to_string();
    }
    let items: Vec<String> = set.iter().map(Value::repr).collect();
    format!("{{{}}}", items.join(", "))
}

// ============================================================================
// COLUMN CHECKS
// ============================================================================

/// Report the first required column the result lacks
pub fn missing_column<'a>(result: &Table, required: &[&'a str]) -> Option<&'a str> {
    required.iter().copied().find(|name| !result.has_column(name))
}

/// Column sets equal regardless of order
pub fn same_column_set(left: &Table, right: &Table) -> bool {
    let (l, r) = (left.column_names(), right.column_names());
    l.len() == r.len() && l.iter().all(|name| r.contains(name))
}
