use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => Ok(render_array_table(&items)),
        // A single entity renders as a one-row table of its fields.
        Value::Object(map) => {
            let headers: Vec<String> = map.keys().cloned().collect();
            let row: Vec<String> = map.values().map(value_to_cell).collect();
            Ok(table::render_entity_table(&headers, &[row]))
        }
        scalar => Ok(value_to_cell(&scalar)),
    }
}

fn render_array_table(items: &[Value]) -> String {
    if items.is_empty() {
        return "(no rows)".to_string();
    }

    // Column set comes from the first object; entity arrays are homogeneous.
    let headers: Vec<String> = match &items[0] {
        Value::Object(map) => map.keys().cloned().collect(),
        _ => vec!["value".to_string()],
    };

    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|item| match item {
            Value::Object(map) => headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| "-".to_string(), value_to_cell))
                .collect(),
            other => vec![value_to_cell(other)],
        })
        .collect();

    table::render_entity_table(&headers, &rows)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Row {
        code: String,
        name: String,
    }

    #[test]
    fn json_format_pretty_prints() {
        let row = Row {
            code: "CS101".to_string(),
            name: "Intro".to_string(),
        };
        let rendered = render(&row, OutputFormat::Json).unwrap();
        assert!(rendered.contains("\"code\": \"CS101\""));
    }

    #[test]
    fn empty_array_renders_placeholder() {
        let rows: Vec<Row> = Vec::new();
        let rendered = render(&rows, OutputFormat::Table).unwrap();
        assert_eq!(rendered, "(no rows)");
    }

    #[test]
    fn array_renders_with_field_headers() {
        let rows = vec![
            Row {
                code: "CS101".to_string(),
                name: "Intro".to_string(),
            },
            Row {
                code: "CS301".to_string(),
                name: "Compilers".to_string(),
            },
        ];
        let rendered = render(&rows, OutputFormat::Table).unwrap();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("code"));
        assert!(lines[2].starts_with("CS101"));
    }

    #[test]
    fn null_fields_render_as_dash() {
        let value = serde_json::json!([{ "code": "S001", "middle_name": null }]);
        let rendered = render(&value, OutputFormat::Table).unwrap();
        assert!(rendered.lines().nth(2).unwrap().contains('-'));
    }
}
