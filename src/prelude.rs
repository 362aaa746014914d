//! Convenience re-exports for library consumers.
//!
//! ```rust,no_run
//! use nimbus_console::prelude::*;
//! ```

// Core
pub use crate::core::config::ConsoleConfig;
pub use crate::core::errors::{ConsoleError, Result};

// Project records and registries
pub use crate::project::record::{ConsoleSnapshot, OrganizationRecord, ProjectRecord};
pub use crate::project::registry::{FeatureFlags, OrganizationRegistry, ProjectRegistry};
pub use crate::project::status::{GatewayStatus, ProjectStatus};

// Routing
pub use crate::route::Route;

// Decision core and shell
#[cfg(feature = "tui")]
pub use crate::tui::classifier::{DisplayMode, classify, resolve_display};
#[cfg(feature = "tui")]
pub use crate::tui::title::{TitleContext, build_title};
#[cfg(feature = "tui")]
pub use crate::tui::runtime::{ShellRuntimeConfig, run_shell};
