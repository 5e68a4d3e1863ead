//! Quote-aware CSV tokenizer.
//!
//! Turns raw CSV text into a rectangular grid of string cells, one character
//! at a time, over the fixed comma delimiter:
//!
//! - A field may be wrapped in double quotes; inside a quoted field a doubled
//!   quote (`""`) is an escaped literal quote, and a `\n`, `\r`, or `,` is
//!   field content rather than a terminator.
//! - Outside quotes, `,` ends a field and `\n` or `\r` ends a row; a `\r\n`
//!   pair is a single row terminator.
//! - Completed fields are trimmed of leading/trailing whitespace. The trim
//!   applies to the accumulated field value, so padding just outside (or at
//!   the outer edges of) the quoted region is removed too.
//! - Rows whose fields are all empty (blank lines included) are discarded.
//! - The final field/row is flushed even without a trailing terminator.
//!
//! The tokenizer raises no errors: an unterminated quote degrades gracefully
//! by treating the remaining text as quoted content until input ends. It is
//! a best-effort reader, not a validation tool.

use super::grid::Grid;

/// Tokenize CSV text into a grid of trimmed string cells.
pub fn tokenize(text: &str) -> Grid {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    // Escaped quote inside a quoted field.
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                row.push(field.trim().to_string());
                field.clear();
            }
            '\n' | '\r' if !in_quotes => {
                if c == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                flush_row(&mut rows, &mut row, &mut field);
            }
            _ => field.push(c),
        }
    }

    // Final field/row without a trailing terminator.
    flush_row(&mut rows, &mut row, &mut field);

    Grid::new(rows)
}

/// Complete the current row, keeping it only if any field is non-empty.
fn flush_row(rows: &mut Vec<Vec<String>>, row: &mut Vec<String>, field: &mut String) {
    if field.is_empty() && row.is_empty() {
        // Blank line (or terminator right after a terminator): nothing to emit.
        return;
    }
    row.push(field.trim().to_string());
    field.clear();
    if row.iter().any(|f| !f.is_empty()) {
        rows.push(std::mem::take(row));
    } else {
        row.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(text: &str) -> Vec<Vec<String>> {
        tokenize(text).rows().to_vec()
    }

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_simple_rows() {
        assert_eq!(
            rows("name,age\nAlice,30\nBob,25"),
            vec![
                row(&["name", "age"]),
                row(&["Alice", "30"]),
                row(&["Bob", "25"]),
            ]
        );
    }

    #[test]
    fn test_quoted_field_with_comma() {
        assert_eq!(rows(r#"a,"b,c""#), vec![row(&["a", "b,c"])]);
    }

    #[test]
    fn test_escaped_quote() {
        assert_eq!(rows(r#""say ""hi""",x"#), vec![row(&[r#"say "hi""#, "x"])]);
    }

    /// A newline inside an open quoted field is content, not a terminator.
    #[test]
    fn test_newline_inside_quotes() {
        assert_eq!(
            rows("a,\"b,c\"\n1,\"2\n2\""),
            vec![row(&["a", "b,c"]), row(&["1", "2\n2"])]
        );
    }

    #[test]
    fn test_crlf_inside_quotes_is_content() {
        assert_eq!(rows("\"a\r\nb\",c"), vec![row(&["a\r\nb", "c"])]);
    }

    #[test]
    fn test_crlf_is_single_terminator() {
        assert_eq!(rows("a,b\r\nc,d"), vec![row(&["a", "b"]), row(&["c", "d"])]);
    }

    #[test]
    fn test_bare_cr_is_terminator() {
        assert_eq!(rows("a,b\rc,d"), vec![row(&["a", "b"]), row(&["c", "d"])]);
    }

    #[test]
    fn test_blank_lines_dropped() {
        assert_eq!(
            rows("a,b\n\n\nc,d\n"),
            vec![row(&["a", "b"]), row(&["c", "d"])]
        );
    }

    #[test]
    fn test_all_empty_row_dropped() {
        // "," yields two empty fields, which is an all-empty row.
        assert_eq!(rows("a,b\n,\nc,d"), vec![row(&["a", "b"]), row(&["c", "d"])]);
    }

    #[test]
    fn test_partially_empty_row_kept() {
        assert_eq!(rows("a,b\n,x"), vec![row(&["a", "b"]), row(&["", "x"])]);
    }

    #[test]
    fn test_final_field_flushed_without_terminator() {
        assert_eq!(rows("a,b"), vec![row(&["a", "b"])]);
        assert_eq!(rows("a"), vec![row(&["a"])]);
    }

    #[test]
    fn test_fields_trimmed_outside_quotes() {
        assert_eq!(rows("  a  , b ,c"), vec![row(&["a", "b", "c"])]);
    }

    /// Trimming applies to the accumulated value, so outer padding inside a
    /// quoted field is removed as well. Deliberate source behavior.
    #[test]
    fn test_quoted_outer_padding_trimmed() {
        assert_eq!(rows(r#"" padded ",x"#), vec![row(&["padded", "x"])]);
        // Inner whitespace survives.
        assert_eq!(rows(r#""a  b",x"#), vec![row(&["a  b", "x"])]);
    }

    /// Unterminated quote: remaining text is treated as quoted content.
    #[test]
    fn test_unterminated_quote_best_effort() {
        assert_eq!(rows("a,\"b\nc,d"), vec![row(&["a", "b\nc,d"])]);
    }

    #[test]
    fn test_ragged_rows_preserved() {
        assert_eq!(
            rows("a,b,c\n1\n2,3"),
            vec![row(&["a", "b", "c"]), row(&["1"]), row(&["2", "3"])]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("\n\n").is_empty());
        assert!(tokenize(",,\n,").is_empty());
    }

    /// Serialize-then-tokenize reproduces a grid cell-for-cell, up to the two
    /// documented asymmetries: all-empty rows are dropped and outer
    /// whitespace is trimmed.
    #[test]
    fn test_round_trip_law() {
        fn quote(cell: &str) -> String {
            if cell.contains(['"', ',', '\n', '\r']) {
                format!("\"{}\"", cell.replace('"', "\"\""))
            } else {
                cell.to_string()
            }
        }

        let grid = vec![
            row(&["id", "note", "body"]),
            row(&["1", "a,b", "line one\nline two"]),
            row(&["2", r#"quote " here"#, "plain"]),
        ];
        let csv = grid
            .iter()
            .map(|r| r.iter().map(|c| quote(c)).collect::<Vec<_>>().join(","))
            .collect::<Vec<_>>()
            .join("\n");

        assert_eq!(rows(&csv), grid);
    }
}
