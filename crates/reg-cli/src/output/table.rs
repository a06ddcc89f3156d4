//! Plain aligned text tables for terminal listings.

/// Render a simple aligned table for string rows.
///
/// Column widths fit the widest cell (or header); missing cells render as
/// `-`. Trailing padding is trimmed so narrow terminals don't wrap on
/// invisible spaces.
#[must_use]
pub fn render_entity_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(String::len)
                .max()
                .unwrap_or(0)
                .max(header.len())
        })
        .collect();

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, &width)| format!("{header:<width$}"))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string();

    let divider = "-".repeat(header_line.len());

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line);
    lines.push(divider);

    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, &width)| {
                let value = row.get(index).map_or("-", String::as_str);
                format!("{value:<width$}")
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string();
        lines.push(line);
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn columns_align_to_widest_cell() {
        let headers = strings(&["code", "name"]);
        let rows = vec![strings(&["CS101", "Intro"]), strings(&["MA201", "Calculus"])];

        let table = render_entity_table(&headers, &rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "code   name");
        assert_eq!(lines[2], "CS101  Intro");
        assert_eq!(lines[3], "MA201  Calculus");
    }

    #[test]
    fn missing_cells_render_as_dash() {
        let headers = strings(&["code", "name"]);
        let rows = vec![strings(&["CS101"])];

        let table = render_entity_table(&headers, &rows);
        assert!(table.lines().nth(2).unwrap().contains('-'));
    }
}
