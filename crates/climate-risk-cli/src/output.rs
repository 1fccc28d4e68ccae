use serde_json::Value;
use std::io;
use tabled::builder::Builder;
use tabled::Table;

use crate::OutputFormat;

/// Dispatch output to the selected formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => print_json(value),
        OutputFormat::Table => print_table(value),
        OutputFormat::Csv => print_csv(value),
        OutputFormat::Minimal => print_minimal(value),
    }
}

fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

/// Flatten the result portion of a computation envelope (or any JSON value)
/// into (field, rendered value) rows. Nested objects use dotted paths;
/// arrays of objects render as embedded JSON.
fn flatten_rows(value: &Value) -> Vec<(String, String)> {
    let result = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    let mut rows = Vec::new();
    collect_rows("", result, &mut rows);
    rows
}

fn collect_rows(prefix: &str, value: &Value, rows: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                match val {
                    Value::Object(_) => collect_rows(&path, val, rows),
                    _ => rows.push((path, render(val))),
                }
            }
        }
        other => rows.push((prefix.to_string(), render(other))),
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(_) | Value::Object(_) => {
            serde_json::to_string(value).unwrap_or_default()
        }
    }
}

fn print_table(value: &Value) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (field, rendered) in flatten_rows(value) {
        builder.push_record([field.as_str(), rendered.as_str()]);
    }
    println!("{}", Table::from(builder));

    if let Some(envelope) = value.as_object() {
        if let Some(Value::Array(warnings)) = envelope.get("warnings") {
            if !warnings.is_empty() {
                println!("\nWarnings:");
                for w in warnings {
                    if let Value::String(s) = w {
                        println!("  - {s}");
                    }
                }
            }
        }
        if let Some(Value::String(methodology)) = envelope.get("methodology") {
            println!("\nMethodology: {methodology}");
        }
    }
}

fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());
    let _ = wtr.write_record(["field", "value"]);
    for (field, rendered) in flatten_rows(value) {
        let _ = wtr.write_record([field.as_str(), rendered.as_str()]);
    }
    let _ = wtr.flush();
}

/// Print just the headline figure from a result.
fn print_minimal(value: &Value) {
    const PRIORITY_KEYS: [&str; 6] = [
        "risk_factor",
        "expected_loss",
        "total_expected_loss",
        "percentage_at_risk",
        "percentage_of_portfolio",
        "average_ltv",
    ];

    let rows = flatten_rows(value);
    for key in PRIORITY_KEYS {
        if let Some((_, rendered)) = rows.iter().find(|(field, _)| field == key) {
            println!("{rendered}");
            return;
        }
    }
    if let Some((field, rendered)) = rows.first() {
        println!("{field}: {rendered}");
    }
}
