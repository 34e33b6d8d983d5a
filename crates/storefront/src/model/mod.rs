//! Data model shared by the selection widgets and the catalog.

mod options;
mod selection;

pub use options::{OptionList, SelectOption};
pub use selection::{SelectionSource, SharedSelection, toggled, without};
