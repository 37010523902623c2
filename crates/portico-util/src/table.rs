//! Table sorting and filtering over JSON rows

use serde_json::Value;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Sort rows by a column. Numbers compare numerically, everything else by its
/// text rendering; rows missing the column sort first.
pub fn sort_values(rows: &mut [Value], column: &str, order: SortOrder) {
    rows.sort_by(|a, b| {
        let ordering = compare_cells(a.get(column), b.get(column));
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

fn compare_cells(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(x), Some(y)) => cell_text(x).cmp(&cell_text(y)),
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Drop the row whose `id` field matches `id`.
pub fn remove_by_id(rows: Vec<Value>, id: &str) -> Vec<Value> {
    rows.into_iter().filter(|row| !matches_id(row, id)).collect()
}

fn matches_id(row: &Value, id: &str) -> bool {
    match row.get("id") {
        Some(Value::String(s)) => s == id,
        Some(Value::Number(n)) => n.to_string() == id,
        _ => false,
    }
}

/// Keep the rows where any field contains `search` case-insensitively.
/// An empty search keeps everything; numbers match on their decimal form.
pub fn search_filter(rows: &[Value], search: &str) -> Vec<Value> {
    if rows.is_empty() {
        return Vec::new();
    }

    if search.is_empty() {
        return rows.to_vec();
    }

    let needle = search.to_lowercase();
    rows.iter()
        .filter(|row| row_matches(row, &needle))
        .cloned()
        .collect()
}

fn row_matches(row: &Value, needle: &str) -> bool {
    match row {
        Value::Object(map) => map.values().any(|value| match value {
            Value::String(s) => s.to_lowercase().contains(needle),
            Value::Number(n) => n.to_string().contains(needle),
            _ => false,
        }),
        _ => false,
    }
}
