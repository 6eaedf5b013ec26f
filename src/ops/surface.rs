use std::collections::VecDeque;

use crate::model::{PickerConfig, Window};

/// Which rendered edges the viewport is currently close to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Proximity {
    pub near_top: bool,
    pub near_bottom: bool,
}

/// Ordered list of rendered items plus the scroll geometry over it.
///
/// The picker only talks to the surface through this trait; the terminal
/// adapter and tests both use [`ListSurface`], but anything that can keep an
/// ordered list and a scroll offset can stand in.
pub trait RenderSurface {
    /// Build one item per value in `window`, mark `selection`, and center
    /// `anchor` in the viewport.
    fn render_initial(&mut self, window: Window, anchor: i64, selection: i64);

    /// Add items for `[new_from, old_from)` before the existing list without
    /// moving what is on screen.
    fn prepend_items(&mut self, new_from: i64, old_from: i64, selection: i64);

    /// Add items for `(old_to, new_to]` after the existing list.
    fn append_items(&mut self, old_to: i64, new_to: i64, selection: i64);

    /// Move the highlight to `value`, scrolling only if it is off screen.
    fn highlight_selection(&mut self, value: i64);

    /// Scroll by `delta` (positive = toward the end of the list).
    fn scroll_by(&mut self, delta: f64);

    fn scroll_offset(&self) -> f64;

    fn proximity(&self) -> Proximity;

    fn is_rendered(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub value: i64,
    pub selected: bool,
}

/// Deque-backed [`RenderSurface`]: O(1) amortized growth at either end.
#[derive(Debug, Clone)]
pub struct ListSurface {
    items: VecDeque<Item>,
    selected: Option<i64>,
    scroll_offset: f64,
    item_extent: f64,
    viewport: f64,
    threshold: f64,
    /// Number of from-scratch renders performed
    full_renders: usize,
}

impl ListSurface {
    pub fn new(item_extent: f64, viewport: f64, threshold: f64) -> Self {
        ListSurface {
            items: VecDeque::new(),
            selected: None,
            scroll_offset: 0.0,
            item_extent,
            viewport,
            threshold,
            full_renders: 0,
        }
    }

    pub fn from_config(config: &PickerConfig) -> Self {
        Self::new(config.item_extent, config.viewport, config.threshold)
    }

    pub fn items(&self) -> &VecDeque<Item> {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn full_renders(&self) -> usize {
        self.full_renders
    }

    pub fn item_extent(&self) -> f64 {
        self.item_extent
    }

    pub fn viewport(&self) -> f64 {
        self.viewport
    }

    /// Resize the viewport (terminal resize); keeps the offset in range.
    pub fn set_viewport(&mut self, viewport: f64) {
        if viewport > 0.0 && viewport.is_finite() {
            self.viewport = viewport;
            self.scroll_offset = self.scroll_offset.min(self.max_offset());
        }
    }

    pub fn content_extent(&self) -> f64 {
        self.items.len() as f64 * self.item_extent
    }

    fn max_offset(&self) -> f64 {
        (self.content_extent() - self.viewport).max(0.0)
    }

    fn first_value(&self) -> Option<i64> {
        self.items.front().map(|item| item.value)
    }

    fn index_of(&self, value: i64) -> Option<usize> {
        let first = self.first_value()?;
        let idx = usize::try_from(value.checked_sub(first)?).ok()?;
        (idx < self.items.len()).then_some(idx)
    }

    /// Index of the first item at least partially in view
    pub fn first_visible_index(&self) -> usize {
        (self.scroll_offset / self.item_extent).floor() as usize
    }

    /// Items intersecting the viewport, top to bottom
    pub fn visible_items(&self) -> impl Iterator<Item = &Item> {
        let start = self.first_visible_index();
        let count = (self.viewport / self.item_extent).ceil() as usize + 1;
        self.items.iter().skip(start).take(count).filter(move |item| {
            let top = self.top_of_index(item.value);
            top < self.scroll_offset + self.viewport
        })
    }

    fn top_of_index(&self, value: i64) -> f64 {
        match self.first_value() {
            Some(first) => (value - first) as f64 * self.item_extent,
            None => 0.0,
        }
    }

    /// Domain value under a point `pos` measured from the top of the viewport.
    pub fn value_at(&self, pos: f64) -> Option<i64> {
        if pos < 0.0 || pos >= self.viewport {
            return None;
        }
        let idx = ((self.scroll_offset + pos) / self.item_extent).floor() as usize;
        self.items.get(idx).map(|item| item.value)
    }

    pub fn selected(&self) -> Option<i64> {
        self.selected
    }

    fn mark(&mut self, value: i64, selected: bool) {
        if let Some(idx) = self.index_of(value) {
            self.items[idx].selected = selected;
        }
    }

    /// Clear the current mark and put it on `value` if that item exists.
    /// At most one item is ever marked.
    fn move_mark(&mut self, value: i64) {
        if let Some(prev) = self.selected.take() {
            self.mark(prev, false);
        }
        if self.index_of(value).is_some() {
            self.mark(value, true);
            self.selected = Some(value);
        }
    }
}

impl RenderSurface for ListSurface {
    fn render_initial(&mut self, window: Window, anchor: i64, selection: i64) {
        self.items.clear();
        self.items.extend((window.from..=window.to).map(|value| Item {
            value,
            selected: value == selection,
        }));
        self.selected = window.contains(selection).then_some(selection);
        let offset = (anchor - window.from) as f64 * self.item_extent - self.viewport / 2.0
            + self.item_extent / 2.0;
        self.scroll_offset = offset.max(0.0);
        self.full_renders += 1;
    }

    fn prepend_items(&mut self, new_from: i64, old_from: i64, selection: i64) {
        if new_from >= old_from {
            return;
        }
        for value in (new_from..old_from).rev() {
            self.items.push_front(Item {
                value,
                selected: false,
            });
        }
        if (new_from..old_from).contains(&selection) {
            self.move_mark(selection);
        }
        self.scroll_offset += (old_from - new_from) as f64 * self.item_extent;
    }

    fn append_items(&mut self, old_to: i64, new_to: i64, selection: i64) {
        if new_to <= old_to {
            return;
        }
        for value in old_to + 1..=new_to {
            self.items.push_back(Item {
                value,
                selected: false,
            });
        }
        if selection > old_to && selection <= new_to {
            self.move_mark(selection);
        }
    }

    fn highlight_selection(&mut self, value: i64) {
        self.move_mark(value);
        if self.selected.is_none() {
            return;
        }

        let top = self.top_of_index(value);
        let bottom = top + self.item_extent;
        if top < self.scroll_offset {
            self.scroll_offset = top;
        } else if bottom > self.scroll_offset + self.viewport {
            self.scroll_offset = (bottom - self.viewport).max(0.0);
        }
    }

    fn scroll_by(&mut self, delta: f64) {
        if !delta.is_finite() {
            return;
        }
        self.scroll_offset = (self.scroll_offset + delta).clamp(0.0, self.max_offset());
    }

    fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    fn proximity(&self) -> Proximity {
        if self.items.is_empty() {
            return Proximity::default();
        }
        let remaining = self.content_extent() - (self.scroll_offset + self.viewport);
        Proximity {
            near_top: self.scroll_offset <= self.threshold,
            near_bottom: remaining <= self.threshold,
        }
    }

    fn is_rendered(&self) -> bool {
        self.full_renders > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn surface() -> ListSurface {
        ListSurface::new(20.0, 200.0, 40.0)
    }

    fn values(s: &ListSurface) -> Vec<i64> {
        s.items().iter().map(|i| i.value).collect()
    }

    #[test]
    fn initial_render_centers_anchor() {
        let mut s = surface();
        s.render_initial(Window { from: 1945, to: 2105 }, 2025, 2025);
        assert_eq!(s.len(), 161);
        // 80 * 20 - 100 + 10
        assert_eq!(s.scroll_offset(), 1510.0);
        assert_eq!(s.selected(), Some(2025));
        assert_eq!(s.items().iter().filter(|i| i.selected).count(), 1);
        assert!(s.is_rendered());
    }

    #[test]
    fn initial_offset_clamps_at_zero() {
        let mut s = surface();
        s.render_initial(Window { from: 0, to: 4 }, 0, 0);
        assert_eq!(s.scroll_offset(), 0.0);
    }

    #[test]
    fn prepend_keeps_visible_items_in_place() {
        let mut s = surface();
        s.render_initial(Window { from: 10, to: 30 }, 20, 20);
        let before = s.scroll_offset();
        let first_visible = s.visible_items().next().unwrap().value;

        s.prepend_items(0, 10, 20);
        assert_eq!(s.scroll_offset(), before + 10.0 * 20.0);
        assert_eq!(s.visible_items().next().unwrap().value, first_visible);
        assert_eq!(values(&s)[..3], [0, 1, 2]);
        assert_eq!(s.len(), 31);
    }

    #[test]
    fn append_does_not_move_offset() {
        let mut s = surface();
        s.render_initial(Window { from: 10, to: 30 }, 20, 20);
        let before = s.scroll_offset();
        s.append_items(30, 40, 20);
        assert_eq!(s.scroll_offset(), before);
        assert_eq!(*values(&s).last().unwrap(), 40);
    }

    #[test]
    fn empty_growth_ranges_are_ignored() {
        let mut s = surface();
        s.render_initial(Window { from: 10, to: 30 }, 20, 20);
        s.prepend_items(10, 10, 20);
        s.append_items(30, 30, 20);
        assert_eq!(s.len(), 21);
    }

    #[test]
    fn highlight_moves_single_mark() {
        let mut s = surface();
        s.render_initial(Window { from: 10, to: 30 }, 20, 20);
        s.highlight_selection(21);
        let marked: Vec<i64> = s
            .items()
            .iter()
            .filter(|i| i.selected)
            .map(|i| i.value)
            .collect();
        assert_eq!(marked, vec![21]);
    }

    fn marked(s: &ListSurface) -> Vec<i64> {
        s.items()
            .iter()
            .filter(|i| i.selected)
            .map(|i| i.value)
            .collect()
    }

    #[test]
    fn growth_over_detached_selection_moves_the_mark() {
        let mut s = surface();
        s.render_initial(Window { from: 10, to: 30 }, 20, 20);
        // selection moved to 5 while the surface still marks 20
        s.prepend_items(0, 10, 5);
        assert_eq!(marked(&s), vec![5]);
        assert_eq!(s.selected(), Some(5));

        s.append_items(30, 40, 35);
        assert_eq!(marked(&s), vec![35]);
        s.highlight_selection(35);
        assert_eq!(marked(&s), vec![35]);
    }

    #[test]
    fn highlight_in_view_does_not_scroll() {
        let mut s = surface();
        s.render_initial(Window { from: 10, to: 30 }, 20, 20);
        let before = s.scroll_offset();
        s.highlight_selection(21);
        assert_eq!(s.scroll_offset(), before);
    }

    #[test]
    fn highlight_below_view_edge_aligns_bottom() {
        let mut s = surface();
        s.render_initial(Window { from: 10, to: 30 }, 20, 20);
        s.highlight_selection(30);
        // item 30 is index 20: bottom edge at 420, viewport 200
        assert_eq!(s.scroll_offset(), 220.0);
    }

    #[test]
    fn highlight_above_view_edge_aligns_top() {
        let mut s = surface();
        s.render_initial(Window { from: 10, to: 30 }, 20, 20);
        s.highlight_selection(10);
        assert_eq!(s.scroll_offset(), 0.0);
    }

    #[test]
    fn proximity_reports_edges() {
        let mut s = surface();
        s.render_initial(Window { from: 10, to: 30 }, 20, 20);
        // offset 110, content 420, viewport 200: 110 from each edge
        assert_eq!(s.proximity(), Proximity::default());
        s.scroll_by(-100.0);
        assert!(s.proximity().near_top);
        s.scroll_by(1000.0);
        assert_eq!(s.scroll_offset(), 220.0);
        assert!(s.proximity().near_bottom);
    }

    #[test]
    fn value_at_maps_viewport_positions() {
        let mut s = ListSurface::new(1.0, 5.0, 1.0);
        s.render_initial(Window { from: 0, to: 20 }, 10, 10);
        // offset = 10 - 2.5 + 0.5 = 8
        assert_eq!(s.scroll_offset(), 8.0);
        assert_eq!(s.value_at(0.0), Some(8));
        assert_eq!(s.value_at(4.0), Some(12));
        assert_eq!(s.value_at(5.0), None);
        assert_eq!(s.value_at(-1.0), None);
    }
}
