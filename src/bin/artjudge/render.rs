use std::borrow::Cow;

use unicode_width::UnicodeWidthStr;

use artjudge::evaluator::COLUMNS;
use artjudge::ResultSet;

use crate::args::OutputFormat;

const MAX_COLUMN_WIDTH: usize = 40;
const EMPTY_NOTICE: &str = "No artworks could be evaluated.\n";

pub fn render(results: &ResultSet, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => Ok(table(results)),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(results)?)),
    }
}

/// Bordered text table with long cells wrapped to [`MAX_COLUMN_WIDTH`].
fn table(results: &ResultSet) -> String {
    if results.is_empty() {
        return EMPTY_NOTICE.to_string();
    }
    let header = COLUMNS.map(str::to_string);
    let rows: Vec<[String; 8]> = results.iter().map(|record| record.row()).collect();
    let widths: Vec<usize> = (0..COLUMNS.len())
        .map(|col| {
            std::iter::once(&header)
                .chain(&rows)
                .map(|row| row[col].width())
                .max()
                .unwrap_or(0)
                .clamp(1, MAX_COLUMN_WIDTH)
        })
        .collect();

    let rule = rule(&widths);
    let mut out = rule.clone();
    push_row(&mut out, &header, &widths);
    out.push_str(&rule);
    for row in &rows {
        push_row(&mut out, row, &widths);
        out.push_str(&rule);
    }
    out
}

fn rule(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line.push('\n');
    line
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let wrapped: Vec<Vec<Cow<'_, str>>> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| textwrap::wrap(cell, *width))
        .collect();
    let height = wrapped.iter().map(Vec::len).max().unwrap_or(1).max(1);
    for line in 0..height {
        out.push('|');
        for (lines, width) in wrapped.iter().zip(widths) {
            let text = lines.get(line).map(|l| l.as_ref()).unwrap_or("");
            out.push(' ');
            out.push_str(text);
            out.push_str(&" ".repeat(width.saturating_sub(text.width())));
            out.push_str(" |");
        }
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use artjudge::{parse, EvaluationRecord};

    fn results() -> ResultSet {
        let mut results = ResultSet::default();
        results.push(EvaluationRecord::new(
            "Artwork 1",
            &parse(
                "Description - A very long description of a harbor at night with boats, lanterns and reflections on the water\nColor - Advanced - cool blues",
            ),
            Some(6.5),
        ));
        results.push(EvaluationRecord::new(
            "Artwork 3",
            &parse("Overall - Beginner - 未完成の作品"),
            None,
        ));
        results
    }

    #[test]
    fn header_lists_columns_in_order() {
        let out = table(&results());
        let header = out.lines().nth(1).unwrap();
        let positions: Vec<usize> = COLUMNS
            .iter()
            .map(|col| header.find(col).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn every_line_has_the_same_display_width() {
        let out = table(&results());
        let widths: Vec<usize> = out.lines().map(UnicodeWidthStr::width).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{out}");
        // The long description wraps onto several lines.
        let rules: Vec<usize> = out
            .lines()
            .enumerate()
            .filter(|(_, line)| line.starts_with('+'))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(rules.len(), 4);
        assert!(rules[2] - rules[1] > 2);
        assert_eq!(rules[3] - rules[2], 2);
    }

    #[test]
    fn missing_values_leave_cells_blank() {
        let out = table(&results());
        assert!(out.contains("| Artwork 3 |"));
        assert!(out.contains("未完成の作品"));
        assert!(out.contains("6.5"));
    }

    #[test]
    fn empty_results_print_a_notice() {
        let out = render(&ResultSet::default(), OutputFormat::Table).unwrap();
        assert_eq!(out, EMPTY_NOTICE);
    }

    #[test]
    fn json_output_is_an_array_of_records() {
        let out = render(&results(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let records = value.as_array().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["Artwork"], "Artwork 1");
        assert_eq!(records[0]["Color"], "cool blues");
        assert_eq!(records[0]["Score"], 6.5);
        assert!(records[1]["Score"].is_null());
        assert_eq!(records[1]["Description"], "");
    }
}
