//! Three pickers side by side

use std::time::Instant;

use super::item::ItemPicker;
use crate::error::{Error, Result};

/// Number of pickers a row always hosts
pub const ROW_CHILDREN: usize = 3;

/// Position of one child along the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub offset: u32,
    pub length: u32,
}

/// Split `available` into three equal cells
///
/// Each cell is `(available - 4*gap) / 3` long, with one gap leading, one
/// trailing and one between neighbours. Too little room yields zero-length
/// cells instead of an error.
pub fn row_layout(available: u32, gap: u32, child_count: usize) -> Result<[Cell; ROW_CHILDREN]> {
    if child_count != ROW_CHILDREN {
        return Err(Error::ChildCount(child_count));
    }

    let length = available.saturating_sub(gap.saturating_mul(4)) / ROW_CHILDREN as u32;
    let mut cells = [Cell::default(); ROW_CHILDREN];
    let mut offset = gap;
    for cell in cells.iter_mut() {
        *cell = Cell { offset, length };
        offset = offset.saturating_add(length).saturating_add(gap);
    }
    Ok(cells)
}

/// Row of exactly three pickers
#[derive(Debug)]
pub struct PickerRow {
    pickers: [ItemPicker; ROW_CHILDREN],
    gap: u32,
}

impl PickerRow {
    pub fn new(pickers: [ItemPicker; ROW_CHILDREN], gap: u32) -> Self {
        Self { pickers, gap }
    }

    /// Build a row from a list, rejecting anything but three pickers
    pub fn try_from_vec(pickers: Vec<ItemPicker>, gap: u32) -> Result<Self> {
        let pickers: [ItemPicker; ROW_CHILDREN] = pickers
            .try_into()
            .map_err(|rest: Vec<ItemPicker>| Error::ChildCount(rest.len()))?;
        Ok(Self::new(pickers, gap))
    }

    pub fn gap(&self) -> u32 {
        self.gap
    }

    pub fn layout(&self, available: u32) -> [Cell; ROW_CHILDREN] {
        // Three children by construction
        match row_layout(available, self.gap, ROW_CHILDREN) {
            Ok(cells) => cells,
            Err(_) => [Cell::default(); ROW_CHILDREN],
        }
    }

    pub fn pickers(&self) -> &[ItemPicker; ROW_CHILDREN] {
        &self.pickers
    }

    pub fn pickers_mut(&mut self) -> &mut [ItemPicker; ROW_CHILDREN] {
        &mut self.pickers
    }

    pub fn picker(&self, column: usize) -> Option<&ItemPicker> {
        self.pickers.get(column)
    }

    pub fn picker_mut(&mut self, column: usize) -> Option<&mut ItemPicker> {
        self.pickers.get_mut(column)
    }

    pub fn needs_update(&self) -> bool {
        self.pickers.iter().any(ItemPicker::needs_update)
    }

    /// Tick every picker in column order, returning each one's new selection
    pub fn update_at(&mut self, now: Instant) -> [Option<usize>; ROW_CHILDREN] {
        let mut changes = [None; ROW_CHILDREN];
        for (change, picker) in changes.iter_mut().zip(self.pickers.iter_mut()) {
            *change = picker.update_at(now);
        }
        changes
    }

    /// Finish every running settle, returning each picker's new selection
    pub fn complete_settles(&mut self) -> [Option<usize>; ROW_CHILDREN] {
        let mut changes = [None; ROW_CHILDREN];
        for (change, picker) in changes.iter_mut().zip(self.pickers.iter_mut()) {
            *change = picker.complete_settle();
        }
        changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn picker(n: usize) -> ItemPicker {
        ItemPicker::numbers(0..n, 0)
    }

    #[test]
    fn test_layout_splits_into_three() {
        let cells = row_layout(100, 4, 3).unwrap();
        // (100 - 16) / 3 = 28
        assert_eq!(
            cells,
            [
                Cell { offset: 4, length: 28 },
                Cell { offset: 36, length: 28 },
                Cell { offset: 68, length: 28 },
            ]
        );
        assert!(cells[2].offset + cells[2].length + 4 <= 100);
    }

    #[test]
    fn test_layout_truncates() {
        let cells = row_layout(20, 0, 3).unwrap();
        assert!(cells.iter().all(|c| c.length == 6));
        assert_eq!(cells[2].offset, 12);
    }

    #[test]
    fn test_layout_without_room() {
        let cells = row_layout(5, 2, 3).unwrap();
        assert!(cells.iter().all(|c| c.length == 0));
        assert_eq!(cells[1].offset, 4);
    }

    #[test]
    fn test_wrong_child_count() {
        assert!(matches!(row_layout(100, 2, 2), Err(Error::ChildCount(2))));
        assert!(matches!(row_layout(100, 2, 4), Err(Error::ChildCount(4))));

        let err = PickerRow::try_from_vec(vec![picker(3), picker(3)], 2).unwrap_err();
        assert!(matches!(err, Error::ChildCount(2)));
        assert!(PickerRow::try_from_vec(vec![picker(3), picker(3), picker(3)], 2).is_ok());
    }

    #[test]
    fn test_update_reports_per_column() {
        let now = Instant::now();
        let mut row = PickerRow::new([picker(5), picker(5), picker(5)], 1);
        assert!(!row.needs_update());

        if let Some(middle) = row.picker_mut(1) {
            middle.step(2, now);
        }
        assert!(row.needs_update());
        assert_eq!(row.update_at(now + Duration::from_secs(5)), [None, Some(2), None]);
        assert!(!row.needs_update());
    }
}
