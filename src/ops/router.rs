use tracing::{trace, warn};

use crate::model::{
    Growth, PickerConfig, SelectionState, Subscriber, Window, WindowModel, parse_value,
};

use super::surface::{ListSurface, RenderSurface};

/// Open/closed lifecycle of one picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerState {
    Closed,
    /// Open, first render still pending
    Opening,
    /// Open and rendered
    Open,
}

/// Keys the picker reacts to while open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerKey {
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
    Enter,
    Escape,
}

/// Input delivered by the host, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum PickerEvent {
    /// Click on the trigger field
    TriggerClick,
    /// Click anywhere outside the trigger and the panel
    OutsideClick,
    /// Click on a rendered item; carries the item's raw value
    ItemClick(String),
    /// The panel scrolled by this extent (positive = toward the end)
    Scroll(f64),
    /// Wheel notches (positive = down) and whether a modifier key was held
    Wheel { notches: i64, modifier: bool },
    Key(PickerKey),
    /// Programmatic set from the host
    External(String),
    /// First render finished
    Materialized,
}

/// Where a keyboard commit moves the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Step(i64),
    Page(i64),
    High,
    Low,
}

/// Work the driver performs after a transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Initialize the window around the current selection and render it
    Materialize,
    /// Reopen over an existing window
    Reveal,
    /// Pointer selection of a rendered item
    Commit(i64),
    /// Scroll the panel by this many item extents
    ScrollItems(i64),
    /// Scroll the panel by a raw extent
    ScrollExtent(f64),
    Navigate(NavTarget),
    /// Move the selection without touching the window
    StepDetached(i64),
    /// Programmatic set
    Apply(i64),
}

/// Pure transition function: `(state, event) -> (state, effects)`.
///
/// `materialized` tells whether the window already exists, which decides
/// between a first render and a plain reopen.
pub fn transition(
    state: PickerState,
    event: &PickerEvent,
    materialized: bool,
) -> (PickerState, Vec<Effect>) {
    use PickerState::*;

    match (state, event) {
        (_, PickerEvent::External(raw)) => match parse_value(raw) {
            Some(value) => (state, vec![Effect::Apply(value)]),
            None => (state, vec![]),
        },

        (Closed, PickerEvent::TriggerClick) if materialized => (Open, vec![Effect::Reveal]),
        (Closed, PickerEvent::TriggerClick) => (Opening, vec![Effect::Materialize]),
        (Closed, PickerEvent::Wheel { notches, modifier: false }) if *notches != 0 => {
            (Closed, vec![Effect::StepDetached(-notches)])
        }
        (Closed, _) => (Closed, vec![]),

        (Opening, PickerEvent::Materialized) => (Open, vec![]),

        (
            Opening | Open,
            PickerEvent::TriggerClick
            | PickerEvent::OutsideClick
            | PickerEvent::Key(PickerKey::Enter | PickerKey::Escape),
        ) => (Closed, vec![]),

        (Opening, _) => (Opening, vec![]),

        (Open, PickerEvent::ItemClick(raw)) => match parse_value(raw) {
            Some(value) => (Closed, vec![Effect::Commit(value)]),
            None => (Open, vec![]),
        },
        (Open, PickerEvent::Scroll(delta)) => (Open, vec![Effect::ScrollExtent(*delta)]),
        (Open, PickerEvent::Wheel { notches, .. }) => (Open, vec![Effect::ScrollItems(*notches)]),
        (Open, PickerEvent::Key(key)) => {
            let target = match key {
                PickerKey::Up => NavTarget::Step(1),
                PickerKey::Down => NavTarget::Step(-1),
                PickerKey::PageUp => NavTarget::Page(1),
                PickerKey::PageDown => NavTarget::Page(-1),
                PickerKey::Home => NavTarget::High,
                PickerKey::End => NavTarget::Low,
                PickerKey::Enter | PickerKey::Escape => unreachable!("handled above"),
            };
            (Open, vec![Effect::Navigate(target)])
        }
        (Open, PickerEvent::Materialized) => (Open, vec![]),
    }
}

/// One picker instance: window, selection, surface and lifecycle.
pub struct YearPicker<S = ListSurface> {
    config: PickerConfig,
    state: PickerState,
    window: WindowModel,
    selection: SelectionState,
    surface: S,
}

impl YearPicker<ListSurface> {
    /// Picker over a [`ListSurface`] sized from the config
    pub fn with_list_surface(config: PickerConfig) -> Option<Self> {
        let surface = ListSurface::from_config(&config);
        Self::bind(config, Some(surface))
    }
}

impl<S: RenderSurface> YearPicker<S> {
    /// Bind a picker to its host surface.
    ///
    /// Returns `None` when the surface is missing or the config is unusable,
    /// leaving the host to carry on without a picker.
    pub fn bind(config: PickerConfig, surface: Option<S>) -> Option<Self> {
        let Some(surface) = surface else {
            warn!("picker surface missing; picker disabled");
            return None;
        };
        if let Err(e) = config.validate() {
            warn!(field = e.field, reason = %e.reason, "invalid picker config; picker disabled");
            return None;
        }
        Some(Self::new(config, surface))
    }

    /// Construct without validation; the caller guarantees a valid config.
    pub fn new(config: PickerConfig, surface: S) -> Self {
        let (min, max) = config.bounds();
        let selection = SelectionState::new(config.start).with_bounds(Some(min), Some(max));
        YearPicker {
            window: WindowModel::new(config.chunk_size),
            selection,
            surface,
            state: PickerState::Closed,
            config,
        }
    }

    pub fn subscribe(&mut self, subscriber: Subscriber) {
        self.selection.subscribe(subscriber);
    }

    pub fn state(&self) -> PickerState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != PickerState::Closed
    }

    pub fn selection(&self) -> i64 {
        self.selection.get()
    }

    pub fn window(&self) -> Option<Window> {
        self.window.window()
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Route one event through the state machine and apply its effects.
    pub fn dispatch(&mut self, event: PickerEvent) {
        let (next, effects) = transition(self.state, &event, self.window.is_materialized());
        trace!(?event, from = ?self.state, to = ?next, "picker event");
        self.state = next;
        for effect in effects {
            self.apply(effect);
        }
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::Materialize => {
                let anchor = self.selection.get();
                let window = self.window.initialize(anchor);
                self.surface.render_initial(window, anchor, anchor);
                self.dispatch(PickerEvent::Materialized);
            }
            Effect::Reveal => {
                let value = self.selection.get();
                self.extend_to(value, 0);
                self.surface.highlight_selection(value);
            }
            Effect::Commit(value) => {
                if self.window.contains(value) && self.selection.set(value) {
                    self.surface.highlight_selection(value);
                }
            }
            Effect::ScrollItems(notches) => {
                let delta = notches as f64 * self.config.item_extent;
                self.scroll(delta);
            }
            Effect::ScrollExtent(delta) => self.scroll(delta),
            Effect::Navigate(target) => {
                let value = self.resolve(target);
                self.select_within_window(value);
            }
            Effect::StepDetached(delta) => {
                let value = self.selection.get().saturating_add(delta);
                self.selection.set(value);
            }
            Effect::Apply(value) => {
                if self.window.is_materialized() {
                    self.select_within_window(value);
                } else {
                    self.selection.set(value);
                }
            }
        }
    }

    fn resolve(&self, target: NavTarget) -> i64 {
        let current = self.selection.get();
        match target {
            NavTarget::Step(n) => current.saturating_add(n),
            NavTarget::Page(n) => current.saturating_add(n.saturating_mul(self.config.page_step)),
            NavTarget::High => self.config.high_sentinel,
            NavTarget::Low => self.config.low_sentinel,
        }
    }

    /// Grow the window toward `value` first, then commit and reveal it.
    fn select_within_window(&mut self, value: i64) {
        if !self.selection.accepts(value) {
            trace!(value, "target outside bounds ignored");
            return;
        }
        self.extend_to(value, self.config.lookahead);
        if self.selection.set(value) {
            self.surface.highlight_selection(value);
        }
    }

    fn extend_to(&mut self, value: i64, margin: i64) {
        let selection = self.selection.get();
        for growth in self.window.ensure_covered(value, margin) {
            self.render_growth(growth, selection);
        }
    }

    fn scroll(&mut self, delta: f64) {
        self.surface.scroll_by(delta);
        let proximity = self.surface.proximity();
        let selection = self.selection.get();
        if proximity.near_top
            && let Some(growth) = self.window.grow_toward_low(None)
        {
            self.render_growth(growth, selection);
        }
        if proximity.near_bottom
            && let Some(growth) = self.window.grow_toward_high(None)
        {
            self.render_growth(growth, selection);
        }
    }

    fn render_growth(&mut self, growth: Growth, selection: i64) {
        if growth.added_low() > 0 {
            self.surface
                .prepend_items(growth.after.from, growth.before.from, selection);
        }
        if growth.added_high() > 0 {
            self.surface
                .append_items(growth.before.to, growth.after.to, selection);
        }
    }
}
