//! Single wheel over a list of labels
//!
//! Real items live at display pages `1..=len`; pages `0` and `len + 1` are
//! blank sentinels that let the first and last item reach the centre slot.
//! Sentinels exist only as page numbers, never as items.

use std::fmt;
use std::ops::RangeInclusive;
use std::time::Instant;

use tracing::debug;

use super::style::{SlotStyle, StylePair};
use crate::config::{Orientation, PickerConfig, ScrollConfig};
use crate::scroll::{ScrollPhase, SnapScroller, Viewport};

/// Callback fired with the newly selected item index
pub type SelectionListener = Box<dyn FnMut(usize)>;

/// Sentinel pages on each side of the real items
const SENTINELS: usize = 1;

/// One visible slot, ready for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct Slot<'a> {
    /// Display page (sentinels included)
    pub page: usize,
    /// Item index, `None` for a sentinel
    pub index: Option<usize>,
    /// Label text (empty for a sentinel)
    pub label: &'a str,
    /// Signed distance from the centre slot in pages
    pub distance: f64,
    pub proximity: f32,
    pub style: SlotStyle,
}

/// Snapping wheel picker over string items
pub struct ItemPicker {
    items: Vec<String>,
    scroller: SnapScroller,
    styles: StylePair,
    orientation: Orientation,
    last_reported: Option<usize>,
    listener: Option<SelectionListener>,
}

impl fmt::Debug for ItemPicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemPicker")
            .field("items", &self.items.len())
            .field("selected", &self.selected_index())
            .field("phase", &self.scroller.phase())
            .field("orientation", &self.orientation)
            .finish()
    }
}

impl ItemPicker {
    /// Create a picker resting on `initial_index` (clamped to the items)
    pub fn new(items: Vec<String>, initial_index: usize) -> Self {
        let start = display_page(initial_index.min(items.len().saturating_sub(1)));
        let scroller = SnapScroller::new(
            items.len() + 2 * SENTINELS,
            start,
            Viewport::default(),
            ScrollConfig::default(),
        )
        .with_snap_inset(SENTINELS);
        let last_reported = if items.is_empty() {
            None
        } else {
            Some(item_index(scroller.settled_page(), items.len()))
        };

        Self {
            items,
            scroller,
            styles: StylePair::default(),
            orientation: Orientation::default(),
            last_reported,
            listener: None,
        }
    }

    /// Picker over anything printable (numbers, ranges of numbers)
    pub fn numbers<I>(values: I, initial_index: usize) -> Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        Self::new(values.into_iter().map(|v| v.to_string()).collect(), initial_index)
    }

    /// Picker over an inclusive integer range, starting on `initial` (clamped)
    pub fn range(range: RangeInclusive<i64>, initial: i64) -> Self {
        let (lo, hi) = (*range.start(), *range.end());
        let index = if hi < lo {
            0
        } else {
            initial.clamp(lo, hi).abs_diff(lo) as usize
        };
        Self::numbers(range, index)
    }

    /// Apply the picker options (styles, orientation)
    pub fn with_config(mut self, config: &PickerConfig) -> Self {
        self.styles = StylePair::from_config(config);
        self.orientation = config.orientation;
        self
    }

    pub fn with_scroll_config(mut self, config: ScrollConfig) -> Self {
        self.scroller.set_config(config);
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.scroller.set_viewport(viewport);
        self
    }

    /// Register the selection listener
    pub fn on_selection_changed(mut self, listener: impl FnMut(usize) + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn styles(&self) -> &StylePair {
        &self.styles
    }

    pub fn scroller(&self) -> &SnapScroller {
        &self.scroller
    }

    pub fn phase(&self) -> ScrollPhase {
        self.scroller.phase()
    }

    pub fn needs_update(&self) -> bool {
        self.scroller.needs_update()
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.scroller.set_viewport(viewport);
    }

    pub fn set_scroll_config(&mut self, config: ScrollConfig) {
        self.scroller.set_config(config);
    }

    /// Item the wheel is resting on or heading to; `None` when empty
    pub fn selected_index(&self) -> Option<usize> {
        if self.items.is_empty() {
            return None;
        }
        Some(item_index(self.scroller.target_page(), self.items.len()))
    }

    pub fn selected_label(&self) -> Option<&str> {
        self.selected_index().and_then(|i| self.label(i))
    }

    pub fn begin_gesture(&mut self) {
        self.scroller.begin_gesture();
    }

    pub fn drag_by(&mut self, delta: f64) {
        self.scroller.drag_by(delta);
    }

    pub fn end_gesture(&mut self, velocity: f64, now: Instant) -> Option<usize> {
        let settled = self.scroller.end_gesture(velocity, now);
        self.report(settled)
    }

    /// Move `items` items forward (negative = back) with a settle animation
    pub fn step(&mut self, items: isize, now: Instant) -> Option<usize> {
        let settled = self.scroller.step(items, now);
        self.report(settled)
    }

    /// Animate to item `index` (clamped, subject to the snap cap)
    pub fn animate_to(&mut self, index: usize, now: Instant) -> Option<usize> {
        let settled = self.scroller.animate_to_page(display_page(index), now);
        self.report(settled)
    }

    /// Animate to item `index` however far away it is
    pub fn seek(&mut self, index: usize, now: Instant) -> Option<usize> {
        let settled = self.scroller.seek_page(display_page(index), now);
        self.report(settled)
    }

    pub fn update_at(&mut self, now: Instant) -> Option<usize> {
        let settled = self.scroller.update_at(now);
        self.report(settled)
    }

    /// Finish a running settle immediately
    pub fn complete_settle(&mut self) -> Option<usize> {
        let settled = self.scroller.complete_settle();
        self.report(settled)
    }

    /// Rest on `index` immediately without notifying the listener
    ///
    /// Used to bring a picker back in line with a value it did not produce.
    pub fn select(&mut self, index: usize) {
        if self.items.is_empty() {
            return;
        }
        let page = display_page(index.min(self.items.len() - 1));
        self.scroller.jump_to_page(page);
        self.last_reported = Some(item_index(self.scroller.settled_page(), self.items.len()));
    }

    /// Replace the items, re-clamping the resting page
    ///
    /// Reports the selection again when the clamp moved it.
    pub fn set_items(&mut self, items: Vec<String>) -> Option<usize> {
        self.items = items;
        let moved = self.scroller.set_page_count(self.items.len() + 2 * SENTINELS);
        if self.items.is_empty() {
            self.last_reported = None;
            return None;
        }
        let page = moved.or_else(|| self.scroller.is_settled().then(|| self.scroller.settled_page()));
        self.report(page)
    }

    /// Slots within reach of the centre, in page order
    pub fn visible_slots(&self) -> Vec<Slot<'_>> {
        let position = self.scroller.position();
        let last = self.scroller.page_count().saturating_sub(1);
        let first = (position - 1.5).floor().max(0.0) as usize;
        let end = ((position + 1.5).ceil().max(0.0) as usize).min(last);
        let current = self.scroller.current_page();

        (first..=end)
            .map(|page| {
                let index = self.page_item(page);
                let proximity = self.scroller.proximity(page);
                Slot {
                    page,
                    index,
                    label: index.and_then(|i| self.label(i)).unwrap_or(""),
                    distance: page as f64 - position,
                    proximity,
                    style: self.styles.interpolate(proximity, page == current),
                }
            })
            .collect()
    }

    fn page_item(&self, page: usize) -> Option<usize> {
        if page < SENTINELS || page >= SENTINELS + self.items.len() {
            None
        } else {
            Some(page - SENTINELS)
        }
    }

    fn report(&mut self, settled: Option<usize>) -> Option<usize> {
        let page = settled?;
        if self.items.is_empty() {
            return None;
        }
        let index = item_index(page, self.items.len());
        if self.last_reported == Some(index) {
            return None;
        }
        self.last_reported = Some(index);
        debug!(index, label = %self.items[index], "Selection changed");
        if let Some(listener) = self.listener.as_mut() {
            listener(index);
        }
        Some(index)
    }
}

#[inline]
fn display_page(index: usize) -> usize {
    index + SENTINELS
}

/// Item index for a display page, clamped to the real items (`len > 0`)
#[inline]
fn item_index(page: usize, len: usize) -> usize {
    page.saturating_sub(SENTINELS).min(len - 1)
}
