//! Tracing integration for Storefront.
//!
//! Storefront uses the `tracing` crate for instrumentation. To see logs,
//! install a subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("storefront=debug,storefront_core=trace")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Timer system target.
    pub const TIMER: &str = "storefront_core::timer";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "storefront_core::signal";
    /// Selection widget target.
    pub const MULTI_SELECT: &str = "storefront::multi_select";
    /// Selection model target.
    pub const SELECTION: &str = "storefront::selection";
    /// Catalog model target.
    pub const CATALOG: &str = "storefront::catalog";
    /// Settings loading target.
    pub const SETTINGS: &str = "storefront::settings";
    /// Timer event delivery target.
    pub const DISPATCHER: &str = "storefront::dispatcher";
}
