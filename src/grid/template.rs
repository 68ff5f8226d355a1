//! GridTemplate: the parsed and validated area grid.

use std::fmt;

use unicode_width::UnicodeWidthStr;

use crate::error::{LayoutError, Result};

/// Normalize an area label for matching.
///
/// Grid tokens and cell lookups both go through this, so callers may use
/// any case on either side.
pub fn normalize_label(label: &str) -> String {
    label.trim().to_uppercase()
}

/// A rectangular grid of area labels.
///
/// Built once per layout from whitespace-separated row strings and never
/// mutated afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct GridTemplate {
    /// Normalized labels, row-major.
    rows: Vec<Vec<String>>,
    /// Distinct labels in order of first appearance.
    areas: Vec<String>,
}

impl GridTemplate {
    /// Parse and validate a grid from its row strings.
    ///
    /// # Example
    ///
    /// ```
    /// use composer::GridTemplate;
    ///
    /// let grid = GridTemplate::parse(["a b b b", "c d d d"]).unwrap();
    /// assert_eq!(grid.row_count(), 2);
    /// assert_eq!(grid.column_count(), 4);
    /// assert_eq!(grid.areas(), ["A", "B", "C", "D"]);
    /// ```
    pub fn parse<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows: Vec<Vec<String>> = lines
            .into_iter()
            .map(|line| line.as_ref().split_whitespace().map(normalize_label).collect())
            .collect();

        if rows.iter().all(Vec::is_empty) {
            return Err(LayoutError::EmptyGrid);
        }

        let expected = rows[0].len();

        if let Some((row, line)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
            return Err(LayoutError::MalformedGrid {
                row,
                expected,
                found: line.len(),
            });
        }

        let mut areas: Vec<String> = Vec::new();
        for label in rows.iter().flatten() {
            if !areas.contains(label) {
                areas.push(label.clone());
            }
        }

        Ok(Self { rows, areas })
    }

    /// Number of rows.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (identical for every row).
    #[inline]
    pub fn column_count(&self) -> usize {
        self.rows[0].len()
    }

    /// Index of the bottom row.
    #[inline]
    pub fn last_row(&self) -> usize {
        self.row_count() - 1
    }

    /// Index of the rightmost column.
    #[inline]
    pub fn last_column(&self) -> usize {
        self.column_count() - 1
    }

    /// Distinct area labels in order of first appearance.
    pub fn areas(&self) -> &[String] {
        &self.areas
    }

    /// Whether the grid contains the given area (any case).
    pub fn contains_area(&self, label: &str) -> bool {
        let label = normalize_label(label);
        self.areas.contains(&label)
    }

    /// Label at a cell, if in range.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// Iterate every cell as `(row, col, label)`, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &str)> {
        self.rows.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .map(move |(col, label)| (row, col, label.as_str()))
        })
    }
}

impl fmt::Display for GridTemplate {
    /// Render the grid with columns aligned by display width.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths: Vec<usize> = (0..self.column_count())
            .map(|col| {
                self.rows
                    .iter()
                    .map(|row| row[col].width())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let mut line = String::new();
            for (col, label) in row.iter().enumerate() {
                if col > 0 {
                    line.push(' ');
                }
                line.push_str(label);
                let pad = widths[col].saturating_sub(label.width());
                line.extend(std::iter::repeat(' ').take(pad));
            }
            f.write_str(line.trim_end())?;
        }
        Ok(())
    }
}

impl fmt::Debug for GridTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GridTemplate({}x{})", self.row_count(), self.column_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_case_and_whitespace() {
        let grid = GridTemplate::parse(["a  b\tB", "c D d"]).unwrap();
        assert_eq!(grid.get(0, 0), Some("A"));
        assert_eq!(grid.get(0, 2), Some("B"));
        assert_eq!(grid.get(1, 1), Some("D"));
        assert_eq!(grid.areas(), ["A", "B", "C", "D"]);
    }

    #[test]
    fn test_extent() {
        let grid = GridTemplate::parse(["A B B B", "C D D D", "X Y Y Y"]).unwrap();
        assert_eq!(grid.last_row(), 2);
        assert_eq!(grid.last_column(), 3);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = GridTemplate::parse(["A B B", "C D"]).unwrap_err();
        assert_eq!(
            err,
            LayoutError::MalformedGrid { row: 1, expected: 3, found: 2 }
        );
    }

    #[test]
    fn test_empty_rejected() {
        let none: [&str; 0] = [];
        assert_eq!(GridTemplate::parse(none).unwrap_err(), LayoutError::EmptyGrid);
        assert_eq!(GridTemplate::parse(["   "]).unwrap_err(), LayoutError::EmptyGrid);
        assert_eq!(GridTemplate::parse(["", " "]).unwrap_err(), LayoutError::EmptyGrid);
    }

    #[test]
    fn test_blank_first_row_is_malformed() {
        assert_eq!(
            GridTemplate::parse(["", "A"]).unwrap_err(),
            LayoutError::MalformedGrid {
                row: 1,
                expected: 0,
                found: 1
            }
        );
    }

    #[test]
    fn test_contains_area_any_case() {
        let grid = GridTemplate::parse(["header header", "side main"]).unwrap();
        assert!(grid.contains_area("Header"));
        assert!(grid.contains_area("MAIN"));
        assert!(!grid.contains_area("footer"));
    }

    #[test]
    fn test_display_aligns_columns() {
        let grid = GridTemplate::parse(["a bb", "ccc d"]).unwrap();
        assert_eq!(grid.to_string(), "A   BB\nCCC D");
    }

    #[test]
    fn test_display_uses_display_width() {
        let grid = GridTemplate::parse(["日本 x", "a y"]).unwrap();
        assert_eq!(grid.to_string(), "日本 X\nA    Y");
    }
}
