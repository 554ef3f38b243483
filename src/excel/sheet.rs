use crate::excel::Cell;

/// A worksheet loaded into memory. `data` is 1-based: row 0 and column 0 are padding.
#[derive(Clone, Debug)]
pub struct Sheet {
    pub name: String,
    pub data: Vec<Vec<Cell>>,
    pub max_rows: usize,
    pub max_cols: usize,
}

impl Sheet {
    pub fn from_rows(name: &str, rows: Vec<Vec<Cell>>) -> Self {
        let max_rows = rows.len();
        let max_cols = rows.iter().map(Vec::len).max().unwrap_or(0);

        let mut data = vec![vec![Cell::empty(); max_cols + 1]; max_rows + 1];
        for (row_idx, row) in rows.into_iter().enumerate() {
            for (col_idx, cell) in row.into_iter().enumerate() {
                data[row_idx + 1][col_idx + 1] = cell;
            }
        }

        Self {
            name: name.to_string(),
            data,
            max_rows,
            max_cols,
        }
    }

    /// Cells of the first used row, 1-based column order.
    pub fn header(&self) -> &[Cell] {
        match self.data.get(1) {
            Some(row) => &row[1..],
            None => &[],
        }
    }

    /// Data rows below the header as `(row_number, cells)`, where `row_number` is 1-based
    /// and `cells[0]` is column 1.
    pub fn body(&self) -> impl Iterator<Item = (usize, &[Cell])> {
        self.data
            .iter()
            .enumerate()
            .skip(2)
            .map(|(row_idx, row)| (row_idx, &row[1..]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ragged_rows_are_padded() {
        let sheet = Sheet::from_rows(
            "Sales",
            vec![
                vec![Cell::text("Region"), Cell::text("Client"), Cell::text("Amount")],
                vec![Cell::text("North")],
            ],
        );

        assert_eq!(sheet.max_rows, 2);
        assert_eq!(sheet.max_cols, 3);
        assert_eq!(sheet.header().len(), 3);

        let body: Vec<_> = sheet.body().collect();
        assert_eq!(body.len(), 1);
        assert_eq!(body[0].0, 2);
        assert_eq!(body[0].1[0].value, "North");
        assert!(body[0].1[2].is_blank());
    }

    #[test]
    fn empty_sheet_has_no_header() {
        let sheet = Sheet::from_rows("Empty", Vec::new());
        assert!(sheet.header().is_empty());
        assert_eq!(sheet.body().count(), 0);
    }
}
