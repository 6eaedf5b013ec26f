use std::fmt;

use tracing::debug;

/// Callback invoked with the new value after every committed change.
pub type Subscriber = Box<dyn FnMut(i64)>;

/// The single currently chosen domain value, plus everyone who wants to
/// hear about changes to it.
pub struct SelectionState {
    value: i64,
    min: Option<i64>,
    max: Option<i64>,
    subscribers: Vec<Subscriber>,
}

impl fmt::Debug for SelectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionState")
            .field("value", &self.value)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl SelectionState {
    pub fn new(value: i64) -> Self {
        SelectionState {
            value,
            min: None,
            max: None,
            subscribers: Vec::new(),
        }
    }

    /// Restrict accepted values to `[min, max]` (either side optional)
    pub fn with_bounds(mut self, min: Option<i64>, max: Option<i64>) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn get(&self) -> i64 {
        self.value
    }

    pub fn subscribe(&mut self, subscriber: Subscriber) {
        self.subscribers.push(subscriber);
    }

    /// Whether `value` is inside the configured bounds
    pub fn accepts(&self, value: i64) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }

    /// Set the selection and notify subscribers.
    ///
    /// Out-of-bounds values are ignored. Returns true when the value changed.
    pub fn set(&mut self, value: i64) -> bool {
        if !self.accepts(value) {
            debug!(value, "selection outside bounds ignored");
            return false;
        }
        if value == self.value {
            return false;
        }
        self.value = value;
        debug!(value, "selection committed");
        for subscriber in &mut self.subscribers {
            subscriber(value);
        }
        true
    }

    /// Set from untrusted text (event payloads, CLI flags). Anything that is
    /// not an integer is ignored.
    pub fn set_raw(&mut self, raw: &str) -> bool {
        match parse_value(raw) {
            Some(value) => self.set(value),
            None => {
                debug!(raw, "non-numeric selection ignored");
                false
            }
        }
    }
}

/// Parse an integer domain value from text. Accepts surrounding whitespace
/// and a zero fraction like `"2025.0"`; exponents, NaN, infinities and real
/// fractions are rejected.
pub fn parse_value(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    let digits = match raw.split_once('.') {
        Some((int, frac)) if !frac.is_empty() && frac.bytes().all(|b| b == b'0') => int,
        Some(_) => return None,
        None => raw,
    };
    digits.parse().ok()
}
