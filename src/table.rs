// 📋 Table Layer - Small in-memory tables for exercise fixtures
// Named columns of equal length, cells that may be null, nothing persisted

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

// ============================================================================
// CELL VALUE
// ============================================================================

/// One cell of a table.
///
/// Equality is loose on purpose for comparisons: `Int(2) == Float(2.0)`,
/// and every null-equivalent value (`Null`, `Float(NaN)`) equals every other.
///
/// Serialized untagged, so JSON cells are plain scalars. Deserializing is
/// lossy for text that parses as `YYYY-MM-DD`: it comes back as `Date`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Int(i64),
    Float(f64),
    Date(NaiveDate),
    Text(String),
}

impl Value {
    /// True for `Null` and for NaN floats
    pub fn is_null(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Float(f) => f.is_nan(),
            _ => false,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            Value::Float(f) if f.fract() == 0.0 && f.is_finite() => Some(*f as i64),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) if !f.is_nan() => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Parse a date cell leniently: dates pass through, text in
    /// `YYYY-MM-DD` or `YYYY-MM-DD HH:MM:SS` (optionally `T`-separated) is
    /// converted, nulls stay null.
    pub fn to_date(&self) -> Result<Value> {
        match self {
            Value::Date(_) => Ok(self.clone()),
            v if v.is_null() => Ok(Value::Null),
            Value::Text(s) => parse_date(s)
                .map(Value::Date)
                .with_context(|| format!("Cannot convert '{}' to a date", s)),
            other => anyhow::bail!("Cannot convert {} to a date", other.repr()),
        }
    }

    /// Ordering used for sorting: numbers, then dates, then text, then nulls
    pub fn sort_cmp(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (a, b) if a.is_null() || b.is_null() => a.rank().cmp(&b.rank()),
            (a, b) if a.rank() == 0 && b.rank() == 0 => {
                let (x, y) = (a.as_f64().unwrap_or(0.0), b.as_f64().unwrap_or(0.0));
                x.partial_cmp(&y).unwrap_or(Ordering::Equal)
            }
            (Value::Date(a), Value::Date(b)) => a.cmp(b),
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
            (a, b) => a.rank().cmp(&b.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            v if v.is_null() => 3,
            Value::Int(_) | Value::Float(_) => 0,
            Value::Date(_) => 1,
            Value::Text(_) => 2,
            Value::Null => 3,
        }
    }

    /// Quoted form used in diagnostics: `'a@b.com'`, `None`, `6`
    pub fn repr(&self) -> String {
        match self {
            Value::Text(s) => format!("'{}'", s),
            v if v.is_null() => "None".to_string(),
            other => other.to_string(),
        }
    }

    /// Infer a cell from raw text (CSV fields): empty is null, then integer,
    /// float, date, and finally plain text.
    pub fn infer(raw: &str) -> Value {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Value::Null;
        }
        if let Ok(i) = trimmed.parse::<i64>() {
            return Value::Int(i);
        }
        if let Ok(f) = trimmed.parse::<f64>() {
            return Value::Float(f);
        }
        if let Some(d) = parse_date(trimmed) {
            return Value::Date(d);
        }
        Value::Text(raw.to_string())
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
        .or_else(|| {
            chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        if self.is_null() || other.is_null() {
            return self.is_null() && other.is_null();
        }
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Int(_), Value::Float(_))
            | (Value::Float(_), Value::Int(_))
            | (Value::Float(_), Value::Float(_)) => self.as_f64() == other.as_f64(),
            (Value::Date(a), Value::Date(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) if x.is_nan() => write!(f, "NaN"),
            Value::Float(x) if x.fract() == 0.0 && x.is_finite() => write!(f, "{:.1}", x),
            Value::Float(x) => write!(f, "{}", x),
            Value::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

// ============================================================================
// TABLE ERRORS
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum TableError {
    ColumnNotFound {
        column: String,
        available: Vec<String>,
    },
    RowOutOfRange {
        row: usize,
        rows: usize,
    },
    LengthMismatch {
        column: String,
        expected: usize,
        found: usize,
    },
    DuplicateColumn(String),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::ColumnNotFound { column, available } => {
                write!(f, "column '{}' not found (available: {:?})", column, available)
            }
            TableError::RowOutOfRange { row, rows } => {
                write!(f, "row {} is out of bounds for a table with {} rows", row, rows)
            }
            TableError::LengthMismatch {
                column,
                expected,
                found,
            } => write!(
                f,
                "column '{}' has {} values, expected {}",
                column, found, expected
            ),
            TableError::DuplicateColumn(name) => write!(f, "duplicate column '{}'", name),
        }
    }
}

impl std::error::Error for TableError {}

// ============================================================================
// TABLE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub values: Vec<Value>,
}

/// Column-oriented table: every column holds the same number of values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    pub fn new() -> Self {
        Table::default()
    }

    /// Builder used by the literal fixtures.
    /// Replaces an existing column of the same name. Lengths are not checked
    /// here; `check_rectangular` reports a ragged result.
    pub fn with_column<I, V>(mut self, name: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        match self.columns.iter_mut().find(|c| c.name == name) {
            Some(existing) => existing.values = values,
            None => self.columns.push(Column {
                name: name.to_string(),
                values,
            }),
        }
        self
    }

    /// Append a column, checking its length against the table
    pub fn push_column(&mut self, name: &str, values: Vec<Value>) -> Result<(), TableError> {
        if self.has_column(name) {
            return Err(TableError::DuplicateColumn(name.to_string()));
        }
        if !self.columns.is_empty() && values.len() != self.num_rows() {
            return Err(TableError::LengthMismatch {
                column: name.to_string(),
                expected: self.num_rows(),
                found: values.len(),
            });
        }
        self.columns.push(Column {
            name: name.to_string(),
            values,
        });
        Ok(())
    }

    /// Build a table from row-major data
    pub fn from_rows<S: AsRef<str>>(
        columns: &[S],
        rows: Vec<Vec<Value>>,
    ) -> Result<Self, TableError> {
        let mut table = Table::new();
        for name in columns {
            table.push_column(name.as_ref(), Vec::with_capacity(rows.len()))?;
        }
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    pub fn push_row(&mut self, row: Vec<Value>) -> Result<(), TableError> {
        if row.len() != self.columns.len() {
            return Err(TableError::LengthMismatch {
                column: "<row>".to_string(),
                expected: self.columns.len(),
                found: row.len(),
            });
        }
        for (column, value) in self.columns.iter_mut().zip(row) {
            column.values.push(value);
        }
        Ok(())
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    pub fn column(&self, name: &str) -> Result<&Column, TableError> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| TableError::ColumnNotFound {
                column: name.to_string(),
                available: self.column_names().iter().map(|s| s.to_string()).collect(),
            })
    }

    pub fn values(&self, name: &str) -> Result<&[Value], TableError> {
        self.column(name).map(|c| c.values.as_slice())
    }

    pub fn num_rows(&self) -> usize {
        self.columns.first().map(|c| c.values.len()).unwrap_or(0)
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.num_rows(), self.num_columns())
    }

    /// Every column the same length as the first
    pub fn check_rectangular(&self) -> Result<(), TableError> {
        let expected = self.num_rows();
        match self.columns.iter().find(|c| c.values.len() != expected) {
            Some(column) => Err(TableError::LengthMismatch {
                column: column.name.clone(),
                expected,
                found: column.values.len(),
            }),
            None => Ok(()),
        }
    }

    pub fn cell(&self, row: usize, name: &str) -> Result<&Value, TableError> {
        let rows = self.num_rows();
        self.values(name)?
            .get(row)
            .ok_or(TableError::RowOutOfRange { row, rows })
    }

    /// Row-major view; cells missing from a short column read as null
    pub fn rows(&self) -> impl Iterator<Item = Vec<Value>> + '_ {
        (0..self.num_rows()).map(move |i| {
            self.columns
                .iter()
                .map(|c| c.values.get(i).cloned().unwrap_or(Value::Null))
                .collect()
        })
    }

    /// Stable sort by one column; nulls go last. Row positions are renumbered.
    /// A ragged table cannot be sorted.
    pub fn sort_by(&self, name: &str) -> Result<Table, TableError> {
        self.check_rectangular()?;
        let key = self.values(name)?;
        let mut order: Vec<usize> = (0..key.len()).collect();
        order.sort_by(|&a, &b| key[a].sort_cmp(&key[b]));
        self.take(&order)
    }

    fn take(&self, order: &[usize]) -> Result<Table, TableError> {
        let mut columns = Vec::with_capacity(self.columns.len());
        for c in &self.columns {
            let mut values = Vec::with_capacity(order.len());
            for &i in order {
                let value = c.values.get(i).ok_or(TableError::RowOutOfRange {
                    row: i,
                    rows: c.values.len(),
                })?;
                values.push(value.clone());
            }
            columns.push(Column {
                name: c.name.clone(),
                values,
            });
        }
        Ok(Table { columns })
    }

    /// Keep the named columns, in the given order
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<Table, TableError> {
        let mut columns = Vec::with_capacity(names.len());
        for name in names {
            columns.push(self.column(name.as_ref())?.clone());
        }
        Ok(Table { columns })
    }

    /// Column labels folded to lower case
    pub fn lowercase_columns(mut self) -> Table {
        for column in &mut self.columns {
            column.name = column.name.to_lowercase();
        }
        self
    }

    /// Apply a fallible conversion to every cell of one column
    pub fn map_column<F>(mut self, name: &str, f: F) -> Result<Table>
    where
        F: Fn(&Value) -> Result<Value>,
    {
        let column = self
            .columns
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| anyhow::anyhow!("column '{}' not found", name))?;
        for value in &mut column.values {
            *value = f(value)?;
        }
        Ok(self)
    }

    /// Distinct values of a column in first-seen order
    pub fn distinct(&self, name: &str) -> Result<Vec<Value>, TableError> {
        let mut seen: Vec<Value> = Vec::new();
        for value in self.values(name)? {
            if !seen.contains(value) {
                seen.push(value.clone());
            }
        }
        Ok(seen)
    }

    /// Rows of `other` appended below the rows of `self`; columns must match by name
    pub fn concat(&self, other: &Table) -> Result<Table, TableError> {
        let mut out = self.clone();
        for column in &mut out.columns {
            column.values.extend(other.values(&column.name)?.iter().cloned());
        }
        Ok(out)
    }

    // ========================================================================
    // CSV / JSON RENDERING
    // ========================================================================

    pub fn to_csv(&self) -> Result<String> {
        self.check_rectangular()?;
        let mut wtr = csv::Writer::from_writer(Vec::new());
        wtr.write_record(self.column_names())?;
        for row in self.rows() {
            let fields: Vec<String> = row
                .iter()
                .map(|v| if v.is_null() { String::new() } else { v.to_string() })
                .collect();
            wtr.write_record(&fields)?;
        }
        let bytes = wtr
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to flush CSV writer: {}", e.error()))?;
        String::from_utf8(bytes).context("CSV output was not UTF-8")
    }

    /// Parse CSV with a header row, inferring cell types per field
    pub fn from_csv(data: &str) -> Result<Table> {
        let mut rdr = csv::Reader::from_reader(data.as_bytes());
        let headers: Vec<String> = rdr
            .headers()
            .context("Failed to read CSV header")?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record.context("Failed to read CSV record")?;
            rows.push(record.iter().map(Value::infer).collect());
        }

        Ok(Table::from_rows(&headers, rows)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths: Vec<usize> = self
            .columns
            .iter()
            .map(|c| {
                c.values
                    .iter()
                    .map(|v| v.to_string().len())
                    .chain(std::iter::once(c.name.len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let header: Vec<String> = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{:>width$}", c.name, width = w))
            .collect();
        writeln!(f, "    {}", header.join("  "))?;

        for (i, row) in self.rows().enumerate() {
            let cells: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(v, w)| format!("{:>width$}", v.to_string(), width = w))
                .collect();
            writeln!(f, "{:<4}{}", i, cells.join("  "))?;
        }
        Ok(())
    }
}
