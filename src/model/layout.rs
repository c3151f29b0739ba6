use crate::error::{ComposerError, Result};

use super::core::{Column, Row, RowPatch};

/// Editable sequence of rows with id-based lookup and selection tracking.
///
/// Ids are allocated from a monotonic counter and never reused within a
/// session. The layout is never empty: removing the last column re-seeds a
/// default row+column pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    rows: Vec<Row>,
    next_id: u64,
    selected: Option<String>,
}

impl Layout {
    pub fn new() -> Self {
        let mut layout = Self {
            rows: Vec::new(),
            next_id: 1,
            selected: None,
        };
        layout.seed_default_row();
        layout
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, row_id: &str) -> Option<&Row> {
        self.rows.iter().find(|row| row.id == row_id)
    }

    pub fn column(&self, column_id: &str) -> Option<&Column> {
        self.rows
            .iter()
            .flat_map(|row| row.columns.iter())
            .find(|column| column.id == column_id)
    }

    /// Row holding the given column, if any.
    pub fn row_containing(&self, column_id: &str) -> Option<&Row> {
        self.rows
            .iter()
            .find(|row| row.columns.iter().any(|column| column.id == column_id))
    }

    pub fn selected_column_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn select(&mut self, column_id: &str) -> Result<()> {
        if self.column(column_id).is_none() {
            return Err(ComposerError::ColumnNotFound(column_id.to_string()));
        }
        self.selected = Some(column_id.to_string());
        Ok(())
    }

    /// Append a new default row with one default column and select it.
    pub fn add_row(&mut self) -> &Row {
        let column = self.make_column();
        self.selected = Some(column.id.clone());
        let row_id = self.alloc_id("row");
        self.rows.push(Row::new(row_id, column));
        &self.rows[self.rows.len() - 1]
    }

    /// Append a default column to the given row and select it.
    pub fn add_column(&mut self, row_id: &str) -> Result<&Column> {
        let row_idx = self
            .rows
            .iter()
            .position(|row| row.id == row_id)
            .ok_or_else(|| ComposerError::RowNotFound(row_id.to_string()))?;

        let column = self.make_column();
        self.selected = Some(column.id.clone());
        let row = &mut self.rows[row_idx];
        row.columns.push(column);
        Ok(&row.columns[row.columns.len() - 1])
    }

    /// Merge the patch into the row with the given id.
    pub fn update_row(&mut self, row_id: &str, patch: RowPatch) -> Result<()> {
        let row = self
            .rows
            .iter_mut()
            .find(|row| row.id == row_id)
            .ok_or_else(|| ComposerError::RowNotFound(row_id.to_string()))?;
        row.apply(patch);
        Ok(())
    }

    /// Whole-value replace of the column with the matching id, wherever it
    /// lives. Sizes are validated before any state changes.
    pub fn update_column(&mut self, column: Column) -> Result<()> {
        column.validate()?;
        for row in &mut self.rows {
            if let Some(slot) = row.columns.iter_mut().find(|c| c.id == column.id) {
                *slot = column;
                return Ok(());
            }
        }
        Err(ComposerError::ColumnNotFound(column.id))
    }

    /// Remove a column, cascading: an emptied row is removed, an emptied
    /// layout is re-seeded with one default row+column.
    ///
    /// Returns the id now selected. When the deleted column was selected,
    /// selection moves to the previous sibling in the same row, else the
    /// first remaining column of that row, else the first column of the
    /// first remaining row, else the synthesized column. An unrelated
    /// selection is left in place.
    pub fn delete_column(&mut self, column_id: &str) -> Result<String> {
        let mut target = None;
        for (row_idx, row) in self.rows.iter().enumerate() {
            if let Some(col_idx) = row.columns.iter().position(|c| c.id == column_id) {
                target = Some((row_idx, col_idx));
                break;
            }
        }
        let (row_idx, col_idx) =
            target.ok_or_else(|| ComposerError::ColumnNotFound(column_id.to_string()))?;

        let was_selected = match self.selected.as_deref() {
            Some(id) => id == column_id,
            None => true,
        };

        self.rows[row_idx].columns.remove(col_idx);

        let fallback = if !self.rows[row_idx].columns.is_empty() {
            let columns = &self.rows[row_idx].columns;
            let pick = if col_idx > 0 { col_idx - 1 } else { 0 };
            Some(columns[pick].id.clone())
        } else {
            self.rows.remove(row_idx);
            self.rows
                .first()
                .and_then(|row| row.columns.first())
                .map(|column| column.id.clone())
        };
        let fallback = match fallback {
            Some(id) => id,
            None => self.seed_default_row(),
        };

        let next = if was_selected {
            fallback
        } else {
            match self.selected.clone() {
                Some(current) if self.column(&current).is_some() => current,
                _ => fallback,
            }
        };
        self.selected = Some(next.clone());
        Ok(next)
    }

    /// Remove a whole row, with the same never-empty guarantee.
    pub fn delete_row(&mut self, row_id: &str) -> Result<String> {
        let row_idx = self
            .rows
            .iter()
            .position(|row| row.id == row_id)
            .ok_or_else(|| ComposerError::RowNotFound(row_id.to_string()))?;
        let removed = self.rows.remove(row_idx);

        let selection_lost = match self.selected.as_deref() {
            Some(id) => removed.columns.iter().any(|column| column.id == id),
            None => true,
        };

        let fallback = match self.rows.first().and_then(|row| row.columns.first()) {
            Some(column) => column.id.clone(),
            None => self.seed_default_row(),
        };

        let next = if selection_lost {
            fallback
        } else {
            match self.selected.clone() {
                Some(current) => current,
                None => fallback,
            }
        };
        self.selected = Some(next.clone());
        Ok(next)
    }

    fn seed_default_row(&mut self) -> String {
        let column = self.make_column();
        let column_id = column.id.clone();
        let row_id = self.alloc_id("row");
        self.rows.push(Row::new(row_id, column));
        self.selected = Some(column_id.clone());
        column_id
    }

    fn make_column(&mut self) -> Column {
        let id = self.alloc_id("col");
        Column::new(id)
    }

    fn alloc_id(&mut self, prefix: &str) -> String {
        let id = format!("{prefix}-{}", self.next_id);
        self.next_id += 1;
        id
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Flexibility, HorizontalAlignment, Padding};

    #[test]
    fn new_layout_has_one_row_one_column_selected() {
        let layout = Layout::new();
        assert_eq!(layout.rows().len(), 1);
        assert_eq!(layout.rows()[0].columns.len(), 1);
        assert_eq!(
            layout.selected_column_id(),
            Some(layout.rows()[0].columns[0].id.as_str())
        );
    }

    #[test]
    fn add_row_appends_and_selects_its_column() {
        let mut layout = Layout::new();
        let row_id = layout.add_row().id.clone();

        assert_eq!(layout.rows().len(), 2);
        assert_eq!(layout.rows()[1].id, row_id);
        let new_column_id = layout.rows()[1].columns[0].id.clone();
        assert_eq!(layout.selected_column_id(), Some(new_column_id.as_str()));
    }

    #[test]
    fn add_column_appends_last_with_factory_defaults() {
        let mut layout = Layout::new();
        let row_id = layout.rows()[0].id.clone();
        layout.add_column(&row_id).unwrap();
        let added = layout.add_column(&row_id).unwrap().id.clone();

        let row = layout.row(&row_id).unwrap();
        assert_eq!(row.columns.len(), 3);
        assert_eq!(row.columns[2].id, added);
        assert_eq!(row.columns[2].size, 3);
        assert_eq!(row.columns[2].padding, Padding::AroundSmall);
        assert_eq!(layout.selected_column_id(), Some(added.as_str()));
    }

    #[test]
    fn add_column_unknown_row_errors() {
        let mut layout = Layout::new();
        assert!(matches!(
            layout.add_column("row-999"),
            Err(ComposerError::RowNotFound(_))
        ));
    }

    #[test]
    fn ids_are_unique_across_rows_and_columns() {
        let mut layout = Layout::new();
        let first_row = layout.rows()[0].id.clone();
        layout.add_row();
        layout.add_column(&first_row).unwrap();
        layout.add_column(&first_row).unwrap();

        let mut ids: Vec<String> = layout.rows().iter().map(|row| row.id.clone()).collect();
        ids.extend(
            layout
                .rows()
                .iter()
                .flat_map(|row| row.columns.iter().map(|column| column.id.clone())),
        );
        let before = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn update_row_merges_partial_fields() {
        let mut layout = Layout::new();
        let row_id = layout.rows()[0].id.clone();
        layout
            .update_row(
                &row_id,
                RowPatch {
                    horizontal_alignment: Some(HorizontalAlignment::End),
                    ..RowPatch::default()
                },
            )
            .unwrap();

        let row = layout.row(&row_id).unwrap();
        assert_eq!(row.horizontal_alignment, HorizontalAlignment::End);
        assert!(row.multiple_rows);
    }

    #[test]
    fn update_row_unknown_id_errors() {
        let mut layout = Layout::new();
        assert!(matches!(
            layout.update_row("row-999", RowPatch::default()),
            Err(ComposerError::RowNotFound(_))
        ));
    }

    #[test]
    fn update_column_replaces_by_id() {
        let mut layout = Layout::new();
        let mut column = layout.rows()[0].columns[0].clone();
        column.size = 6;
        column.device_specific = true;
        column.flexibility = Some(Flexibility::Grow);
        layout.update_column(column.clone()).unwrap();

        assert_eq!(layout.column(&column.id), Some(&column));
    }

    #[test]
    fn update_column_rejects_out_of_range_size() {
        let mut layout = Layout::new();
        let mut column = layout.rows()[0].columns[0].clone();
        let id = column.id.clone();
        column.size = 13;
        assert!(matches!(
            layout.update_column(column),
            Err(ComposerError::SizeOutOfRange(13))
        ));
        // Stored column untouched.
        assert_eq!(layout.column(&id).map(|c| c.size), Some(3));
    }

    #[test]
    fn update_column_unknown_id_errors() {
        let mut layout = Layout::new();
        let stray = Column::new("col-999");
        assert!(matches!(
            layout.update_column(stray),
            Err(ComposerError::ColumnNotFound(_))
        ));
    }

    #[test]
    fn delete_selected_column_picks_previous_sibling() {
        let mut layout = Layout::new();
        let row_id = layout.rows()[0].id.clone();
        let first = layout.rows()[0].columns[0].id.clone();
        let second = layout.add_column(&row_id).unwrap().id.clone();
        let third = layout.add_column(&row_id).unwrap().id.clone();

        let next = layout.delete_column(&third).unwrap();
        assert_eq!(next, second);

        let next = layout.delete_column(&second).unwrap();
        assert_eq!(next, first);
    }

    #[test]
    fn delete_selected_first_column_picks_first_remaining() {
        let mut layout = Layout::new();
        let row_id = layout.rows()[0].id.clone();
        let first = layout.rows()[0].columns[0].id.clone();
        let second = layout.add_column(&row_id).unwrap().id.clone();
        layout.select(&first).unwrap();

        let next = layout.delete_column(&first).unwrap();
        assert_eq!(next, second);
        assert_eq!(layout.selected_column_id(), Some(second.as_str()));
    }

    #[test]
    fn delete_last_column_in_row_removes_row() {
        let mut layout = Layout::new();
        let second_row = layout.add_row().id.clone();
        let second_col = layout.row(&second_row).unwrap().columns[0].id.clone();
        let first_col = layout.rows()[0].columns[0].id.clone();

        let next = layout.delete_column(&second_col).unwrap();
        assert_eq!(layout.rows().len(), 1);
        assert_eq!(next, first_col);
    }

    #[test]
    fn delete_only_column_reseeds_default_layout() {
        let mut layout = Layout::new();
        let only = layout.rows()[0].columns[0].id.clone();

        let next = layout.delete_column(&only).unwrap();
        assert_eq!(layout.rows().len(), 1);
        assert_eq!(layout.rows()[0].columns.len(), 1);
        let seeded = &layout.rows()[0].columns[0];
        assert_eq!(next, seeded.id);
        assert_ne!(seeded.id, only);
        assert_eq!(seeded.size, 3);
        assert_eq!(layout.selected_column_id(), Some(seeded.id.as_str()));
    }

    #[test]
    fn delete_unselected_column_keeps_selection() {
        let mut layout = Layout::new();
        let row_id = layout.rows()[0].id.clone();
        let first = layout.rows()[0].columns[0].id.clone();
        let second = layout.add_column(&row_id).unwrap().id.clone();
        layout.select(&first).unwrap();

        let next = layout.delete_column(&second).unwrap();
        assert_eq!(next, first);
        assert_eq!(layout.selected_column_id(), Some(first.as_str()));
    }

    #[test]
    fn delete_column_unknown_id_errors() {
        let mut layout = Layout::new();
        assert!(matches!(
            layout.delete_column("col-999"),
            Err(ComposerError::ColumnNotFound(_))
        ));
    }

    #[test]
    fn delete_row_moves_selection_to_first_remaining() {
        let mut layout = Layout::new();
        let first_row = layout.rows()[0].id.clone();
        let first_col = layout.rows()[0].columns[0].id.clone();
        let second_row = layout.add_row().id.clone();

        // Selection sits in the second row; deleting it falls back.
        let next = layout.delete_row(&second_row).unwrap();
        assert_eq!(next, first_col);
        assert_eq!(layout.rows().len(), 1);
        assert_eq!(layout.rows()[0].id, first_row);
    }

    #[test]
    fn delete_only_row_reseeds_default_layout() {
        let mut layout = Layout::new();
        let only_row = layout.rows()[0].id.clone();

        let next = layout.delete_row(&only_row).unwrap();
        assert_eq!(layout.rows().len(), 1);
        assert_eq!(layout.rows()[0].columns.len(), 1);
        assert_eq!(next, layout.rows()[0].columns[0].id);
        assert_ne!(layout.rows()[0].id, only_row);
    }

    #[test]
    fn select_unknown_column_errors() {
        let mut layout = Layout::new();
        assert!(matches!(
            layout.select("col-999"),
            Err(ComposerError::ColumnNotFound(_))
        ));
    }

    #[test]
    fn row_containing_finds_owner() {
        let mut layout = Layout::new();
        let second_row = layout.add_row().id.clone();
        let column_id = layout.row(&second_row).unwrap().columns[0].id.clone();
        assert_eq!(
            layout.row_containing(&column_id).map(|row| row.id.as_str()),
            Some(second_row.as_str())
        );
        assert!(layout.row_containing("col-999").is_none());
    }
}
