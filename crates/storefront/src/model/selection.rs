//! Controlled selection state.
//!
//! Selection widgets never own the values they display. They read them from
//! a [`SelectionSource`] and change them only through
//! [`SelectionSource::update`], which is given a pure function from the
//! previous selection to the next one. Because the function always sees the
//! current values, concurrent external changes are never overwritten by a
//! stale copy.

use std::sync::Arc;

use parking_lot::Mutex;
use storefront_core::Signal;
use storefront_core::logging::targets;

/// An externally owned, ordered selection of option values.
pub trait SelectionSource: Send + Sync {
    /// A snapshot of the selected values, in insertion order.
    fn values(&self) -> Vec<String>;

    /// Replace the selection with `f(previous)`.
    fn update(&self, f: &dyn Fn(&[String]) -> Vec<String>);

    /// Replace the selection with `values`, regardless of what it was.
    fn replace(&self, values: Vec<String>) {
        self.update(&move |_| values.clone());
    }

    /// Check if `value` is selected.
    fn contains(&self, value: &str) -> bool {
        self.values().iter().any(|v| v == value)
    }
}

/// Append `value` if absent, otherwise remove its first occurrence.
pub fn toggled(previous: &[String], value: &str) -> Vec<String> {
    let mut next = previous.to_vec();
    match next.iter().position(|v| v == value) {
        Some(index) => {
            next.remove(index);
        }
        None => next.push(value.to_string()),
    }
    next
}

/// Every value except `value`.
pub fn without(previous: &[String], value: &str) -> Vec<String> {
    previous.iter().filter(|v| *v != value).cloned().collect()
}

struct SharedSelectionInner {
    values: Mutex<Vec<String>>,
    changed: Signal<Vec<String>>,
}

/// A cloneable selection store.
///
/// Clones share the same values. [`changed`](Self::changed) is emitted after
/// every update that alters the values, with the lock already released, so
/// slots may read or update the selection again.
#[derive(Clone)]
pub struct SharedSelection {
    inner: Arc<SharedSelectionInner>,
}

impl SharedSelection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::with_values(Vec::new())
    }

    /// Create a selection holding `values`.
    pub fn with_values(values: Vec<String>) -> Self {
        Self {
            inner: Arc::new(SharedSelectionInner {
                values: Mutex::new(values),
                changed: Signal::new(),
            }),
        }
    }

    /// Signal emitted with the new values after each effective change.
    pub fn changed(&self) -> &Signal<Vec<String>> {
        &self.inner.changed
    }

    pub fn len(&self) -> usize {
        self.inner.values.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.values.lock().is_empty()
    }

    /// Remove every value.
    pub fn clear(&self) {
        self.update(&|_| Vec::new());
    }
}

impl Default for SharedSelection {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SharedSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SharedSelection")
            .field(&*self.inner.values.lock())
            .finish()
    }
}

impl SelectionSource for SharedSelection {
    fn values(&self) -> Vec<String> {
        self.inner.values.lock().clone()
    }

    fn update(&self, f: &dyn Fn(&[String]) -> Vec<String>) {
        let next = {
            let mut values = self.inner.values.lock();
            let next = f(values.as_slice());
            if next == *values {
                return;
            }
            *values = next.clone();
            next
        };
        tracing::debug!(target: targets::SELECTION, values = ?next, "selection changed");
        self.inner.changed.emit(next);
    }
}

static_assertions::assert_impl_all!(SharedSelection: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_toggled_appends_then_removes() {
        let once = toggled(&strings(&["a"]), "b");
        assert_eq!(once, strings(&["a", "b"]));
        assert_eq!(toggled(&once, "b"), strings(&["a"]));
    }

    #[test]
    fn test_without_removes_only_that_value() {
        assert_eq!(without(&strings(&["a", "b", "c"]), "b"), strings(&["a", "c"]));
    }

    #[test]
    fn test_update_sees_latest_values() {
        let selection = SharedSelection::new();
        let other_handle = selection.clone();

        selection.update(&|prev| toggled(prev, "x"));
        other_handle.update(&|prev| toggled(prev, "y"));
        selection.update(&|prev| toggled(prev, "x"));

        assert_eq!(selection.values(), strings(&["y"]));
    }

    #[test]
    fn test_changed_emitted_only_on_difference() {
        let selection = SharedSelection::new();
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();
        selection.changed().connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        selection.replace(strings(&["a"]));
        selection.replace(strings(&["a"]));
        selection.clear();

        assert_eq!(count.load(Ordering::SeqCst), 2);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_slot_may_read_selection() {
        let selection = SharedSelection::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let reader = selection.clone();
        let seen_clone = seen.clone();
        selection.changed().connect(move |_| {
            *seen_clone.lock() = reader.values();
        });

        selection.replace(strings(&["z"]));
        assert_eq!(*seen.lock(), strings(&["z"]));
        assert!(selection.contains("z"));
    }
}
