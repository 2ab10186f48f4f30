use std::{collections::HashMap, fmt};

/// The variable store of a Bare Bones run.
///
/// Maps variable names to non-negative integers. Variables come into
/// existence only through `clear`; every other operation requires the name
/// to be present already. Iteration follows the order in which variables
/// were first cleared, so printing a store is deterministic.
///
/// # Example
/// ```
/// use barebones::interpreter::store::Store;
///
/// let mut store = Store::new();
/// store.clear("b");
/// store.clear("a");
/// store.increment("a");
///
/// let names: Vec<_> = store.iter().map(|(name, _)| name).collect();
/// assert_eq!(names, ["b", "a"]);
/// assert_eq!(store.get("a"), Some(1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Store {
    slots:   Vec<(String, u64)>,
    indices: HashMap<String, usize>,
}

/// Outcome of a checked update on a stored variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Update {
    /// The variable now holds this value.
    Done(u64),
    /// The variable has never been cleared.
    Undefined,
    /// The update would leave the `u64` range; the value is unchanged.
    OutOfRange,
}

impl Store {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to zero, creating it if it does not exist yet.
    ///
    /// A variable that already exists keeps its original position in the
    /// iteration order.
    pub fn clear(&mut self, name: &str) {
        if let Some(&index) = self.indices.get(name) {
            self.slots[index].1 = 0;
            return;
        }
        self.indices.insert(name.to_string(), self.slots.len());
        self.slots.push((name.to_string(), 0));
    }

    /// Returns the current value of `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<u64> {
        self.indices.get(name).map(|&index| self.slots[index].1)
    }

    /// Whether `name` has been cleared at least once.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.indices.contains_key(name)
    }

    /// Adds one to `name`.
    pub fn increment(&mut self, name: &str) -> Update {
        self.update(name, |value| value.checked_add(1))
    }

    /// Subtracts one from `name`, refusing to go below zero.
    pub fn decrement(&mut self, name: &str) -> Update {
        self.update(name, |value| value.checked_sub(1))
    }

    fn update(&mut self, name: &str, op: impl FnOnce(u64) -> Option<u64>) -> Update {
        let Some(&index) = self.indices.get(name) else {
            return Update::Undefined;
        };
        let slot = &mut self.slots[index].1;
        match op(*slot) {
            Some(value) => {
                *slot = value;
                Update::Done(value)
            },
            None => Update::OutOfRange,
        }
    }

    /// Number of variables in the store.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no variable has been cleared yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterates over `(name, value)` pairs in first-clear order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.slots.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Returns all `(name, value)` pairs sorted by name.
    #[must_use]
    pub fn sorted(&self) -> Vec<(&str, u64)> {
        let mut pairs: Vec<_> = self.iter().collect();
        pairs.sort_unstable_by(|a, b| a.0.cmp(b.0));
        pairs
    }

    /// Copies the store into an unordered map.
    #[must_use]
    pub fn to_map(&self) -> HashMap<String, u64> {
        self.slots.iter().cloned().collect()
    }
}

impl fmt::Display for Store {
    /// Writes one `name = value` line per variable in first-clear order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in self.iter() {
            writeln!(f, "{name} = {value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
impl Store {
    /// Builds a store holding a single variable with an arbitrary value.
    pub(crate) fn with_value(name: &str, value: u64) -> Self {
        let mut store = Self::new();
        store.clear(name);
        store.slots[0].1 = value;
        store
    }
}
