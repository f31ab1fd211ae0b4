use crate::types::TableShape;

/// Renders a table shape as a pipe-delimited markdown table.
///
/// Each row becomes one `| a | b |` line; a `---` separator line is inserted
/// directly after the first (header) row. The separator's cell count is the
/// table's declared column count, not the header's cell count. A table with
/// no rows renders as the empty string.
pub fn table_to_markdown(table: &TableShape) -> String {
    let mut lines: Vec<String> = table
        .rows
        .iter()
        .map(|row| format!("| {} |", row.cells.join(" | ")))
        .collect();

    if lines.is_empty() {
        return String::new();
    }

    let separator = format!("| {} |", vec!["---"; table.column_count].join(" | "));
    lines.insert(1, separator);

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TableRow;

    fn row(cells: &[&str]) -> TableRow {
        TableRow {
            cells: cells.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn renders_header_separator_and_data_rows() {
        let table = TableShape {
            column_count: 2,
            rows: vec![row(&["H1", "H2"]), row(&["A", "B"])],
        };

        assert_eq!(
            table_to_markdown(&table),
            "| H1 | H2 |\n| --- | --- |\n| A | B |"
        );
    }

    #[test]
    fn row_count_invariant_holds() {
        let table = TableShape {
            column_count: 3,
            rows: vec![
                row(&["a", "b", "c"]),
                row(&["d", "e", "f"]),
                row(&["g", "h", "i"]),
            ],
        };

        let rendered = table_to_markdown(&table);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "| --- | --- | --- |");
    }

    #[test]
    fn empty_table_renders_as_empty_string() {
        let table = TableShape { column_count: 4, rows: vec![] };
        assert_eq!(table_to_markdown(&table), "");
    }

    #[test]
    fn separator_follows_declared_column_count_not_header_cells() {
        let table = TableShape {
            column_count: 3,
            rows: vec![row(&["only", "two"])],
        };

        assert_eq!(
            table_to_markdown(&table),
            "| only | two |\n| --- | --- | --- |"
        );
    }

    #[test]
    fn single_row_table_still_gets_a_separator() {
        let table = TableShape {
            column_count: 1,
            rows: vec![row(&["header"])],
        };

        assert_eq!(table_to_markdown(&table), "| header |\n| --- |");
    }
}
