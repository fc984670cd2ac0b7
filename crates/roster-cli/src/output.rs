//! Text and JSON rendering for command results

use rusqlite::types::Value;
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub json: bool,
}

impl Output {
    /// Print `items` as a JSON array, or one `line(item)` per row
    pub fn list<T: Serialize>(
        &self,
        items: &[T],
        line: impl Fn(&T) -> String,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(items)?);
        } else {
            for item in items {
                println!("{}", line(item));
            }
        }
        Ok(())
    }

    /// Print raw engine rows with their column header
    pub fn raw(&self, columns: &[String], rows: &[Vec<Value>]) -> Result<(), Box<dyn std::error::Error>> {
        if self.json {
            let objects: Vec<serde_json::Map<String, serde_json::Value>> = rows
                .iter()
                .map(|row| {
                    columns
                        .iter()
                        .cloned()
                        .zip(row.iter().map(value_to_json))
                        .collect()
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&objects)?);
        } else {
            println!("{}", columns.join(" | "));
            for row in rows {
                let cells: Vec<String> = row.iter().map(render_value).collect();
                println!("{}", cells.join(" | "));
            }
        }
        Ok(())
    }
}

pub fn render_value(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Integer(i) => i.to_string(),
        Value::Real(r) => r.to_string(),
        Value::Text(s) => s.clone(),
        Value::Blob(b) => format!("<{} bytes>", b.len()),
    }
}

fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Integer(i) => serde_json::Value::from(*i),
        Value::Real(r) => serde_json::Value::from(*r),
        Value::Text(s) => serde_json::Value::from(s.as_str()),
        Value::Blob(b) => serde_json::Value::from(b.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_value() {
        assert_eq!(render_value(&Value::Null), "NULL");
        assert_eq!(render_value(&Value::Integer(2)), "2");
        assert_eq!(render_value(&Value::Text("ed".into())), "ed");
        assert_eq!(render_value(&Value::Blob(vec![1, 2, 3])), "<3 bytes>");
    }

    #[test]
    fn test_value_to_json() {
        assert_eq!(value_to_json(&Value::Integer(2)), serde_json::json!(2));
        assert_eq!(value_to_json(&Value::Null), serde_json::Value::Null);
        assert_eq!(value_to_json(&Value::Text("pt".into())), serde_json::json!("pt"));
    }
}
