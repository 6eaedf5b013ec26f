use tracing::debug;

/// Closed interval of domain values currently materialized for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub from: i64,
    pub to: i64,
}

impl Window {
    pub fn contains(&self, value: i64) -> bool {
        self.from <= value && value <= self.to
    }

    /// Number of values in the window
    pub fn len(&self) -> usize {
        (self.to - self.from + 1) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.to < self.from
    }
}

/// Result of a growth step: the bounds before and after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Growth {
    pub before: Window,
    pub after: Window,
}

impl Growth {
    /// Values added below the old `from`
    pub fn added_low(&self) -> i64 {
        self.before.from - self.after.from
    }

    /// Values added above the old `to`
    pub fn added_high(&self) -> i64 {
        self.after.to - self.before.to
    }
}

/// The materialized sub-range of the unbounded domain.
///
/// The window is created lazily by [`WindowModel::initialize`] and from then
/// on only ever grows, always by whole multiples of `chunk_size`, so items
/// already rendered keep their relative offsets.
#[derive(Debug, Clone)]
pub struct WindowModel {
    chunk_size: i64,
    window: Option<Window>,
    anchor: Option<i64>,
}

impl WindowModel {
    pub fn new(chunk_size: i64) -> Self {
        WindowModel {
            chunk_size: chunk_size.max(1),
            window: None,
            anchor: None,
        }
    }

    pub fn chunk_size(&self) -> i64 {
        self.chunk_size
    }

    /// Materialize `[start - chunk, start + chunk]` around `start`.
    /// Only the first call has an effect.
    pub fn initialize(&mut self, start: i64) -> Window {
        if let Some(window) = self.window {
            return window;
        }
        let window = Window {
            from: start.saturating_sub(self.chunk_size),
            to: start.saturating_add(self.chunk_size),
        };
        debug!(start, from = window.from, to = window.to, "window materialized");
        self.window = Some(window);
        self.anchor = Some(start);
        window
    }

    pub fn window(&self) -> Option<Window> {
        self.window
    }

    pub fn anchor(&self) -> Option<i64> {
        self.anchor
    }

    pub fn is_materialized(&self) -> bool {
        self.window.is_some()
    }

    pub fn contains(&self, value: i64) -> bool {
        self.window.is_some_and(|w| w.contains(value))
    }

    /// Extend `from` by one chunk, then keep extending chunk by chunk until
    /// `target` (if given) is covered.
    pub fn grow_toward_low(&mut self, target: Option<i64>) -> Option<Growth> {
        let before = self.window?;
        let mut after = before;
        after.from = after.from.saturating_sub(self.chunk_size);
        if let Some(target) = target {
            while after.from > target {
                after.from = after.from.saturating_sub(self.chunk_size);
            }
        }
        self.window = Some(after);
        debug!(
            old_from = before.from,
            new_from = after.from,
            chunks = (before.from - after.from) / self.chunk_size,
            "window grew toward low"
        );
        Some(Growth { before, after })
    }

    /// Symmetric to [`grow_toward_low`](Self::grow_toward_low).
    pub fn grow_toward_high(&mut self, target: Option<i64>) -> Option<Growth> {
        let before = self.window?;
        let mut after = before;
        after.to = after.to.saturating_add(self.chunk_size);
        if let Some(target) = target {
            while after.to < target {
                after.to = after.to.saturating_add(self.chunk_size);
            }
        }
        self.window = Some(after);
        debug!(
            old_to = before.to,
            new_to = after.to,
            chunks = (after.to - before.to) / self.chunk_size,
            "window grew toward high"
        );
        Some(Growth { before, after })
    }

    /// Grow whichever side is needed so that `[value - margin, value + margin]`
    /// lies inside the window. Returns the growth steps performed, low side first.
    pub fn ensure_covered(&mut self, value: i64, margin: i64) -> Vec<Growth> {
        let mut steps = Vec::new();
        let Some(window) = self.window else {
            return steps;
        };
        let low = value.saturating_sub(margin);
        let high = value.saturating_add(margin);
        if low < window.from
            && let Some(g) = self.grow_toward_low(Some(low))
        {
            steps.push(g);
        }
        if high > window.to
            && let Some(g) = self.grow_toward_high(Some(high))
        {
            steps.push(g);
        }
        steps
    }
}
