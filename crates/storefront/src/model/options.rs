//! Option lists for selection widgets.

use std::collections::HashSet;

use storefront_core::logging::targets;

/// A single selectable entry, identified by its display value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectOption {
    value: String,
}

impl SelectOption {
    /// Create an option with the given value.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// The option's value, which is also its display text.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl From<&str> for SelectOption {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SelectOption {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// An ordered list of options with unique values.
///
/// Duplicates are dropped at construction: the first occurrence of a value
/// keeps its position and later ones are discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionList {
    options: Vec<SelectOption>,
}

impl OptionList {
    /// Build a list from anything convertible to options.
    pub fn new<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<SelectOption>,
    {
        let mut seen = HashSet::new();
        let mut options = Vec::new();
        for option in items.into_iter().map(Into::into) {
            if seen.insert(option.value.clone()) {
                options.push(option);
            } else {
                tracing::warn!(target: targets::SELECTION, value = option.value(), "dropping duplicate option");
            }
        }
        Self { options }
    }

    /// An empty list.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SelectOption> {
        self.options.get(index)
    }

    /// The value at `index`.
    pub fn value(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(SelectOption::value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectOption> {
        self.options.iter()
    }

    /// Position of the option with exactly this value.
    pub fn index_of(&self, value: &str) -> Option<usize> {
        self.options.iter().position(|o| o.value == value)
    }

    /// Position of the first option, in list order, whose value starts with
    /// `prefix`, ignoring case.
    ///
    /// Both sides are folded with [`str::to_lowercase`], so a character whose
    /// lowercase form is longer (such as `İ`) matches its full lowercase
    /// expansion rather than a single character.
    pub fn find_prefix(&self, prefix: &str) -> Option<usize> {
        let prefix = prefix.to_lowercase();
        self.options
            .iter()
            .position(|o| o.value.to_lowercase().starts_with(&prefix))
    }

    /// All values in list order.
    pub fn values(&self) -> Vec<String> {
        self.options.iter().map(|o| o.value.clone()).collect()
    }
}

impl<T: Into<SelectOption>> FromIterator<T> for OptionList {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<const N: usize> From<[&str; N]> for OptionList {
    fn from(items: [&str; N]) -> Self {
        Self::new(items)
    }
}

impl From<Vec<String>> for OptionList {
    fn from(items: Vec<String>) -> Self {
        Self::new(items)
    }
}

impl From<Vec<&str>> for OptionList {
    fn from(items: Vec<&str>) -> Self {
        Self::new(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_keep_first_position() {
        let list = OptionList::from(["Apple", "Banana", "Apple", "Cherry", "Banana"]);
        assert_eq!(list.values(), vec!["Apple", "Banana", "Cherry"]);
        assert_eq!(list.index_of("Cherry"), Some(2));
    }

    #[test]
    fn test_find_prefix_is_case_insensitive_and_ordered() {
        let list = OptionList::from(["Apple", "Apricot", "Banana"]);
        assert_eq!(list.find_prefix("a"), Some(0));
        assert_eq!(list.find_prefix("APR"), Some(1));
        assert_eq!(list.find_prefix("ban"), Some(2));
        assert_eq!(list.find_prefix("bx"), None);
        assert_eq!(list.find_prefix("ab"), None);
    }

    #[test]
    fn test_lookup_on_empty_list() {
        let list = OptionList::empty();
        assert!(list.is_empty());
        assert_eq!(list.value(0), None);
        assert_eq!(list.find_prefix("a"), None);
    }
}
