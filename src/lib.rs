#![forbid(unsafe_code)]

//! Nimbus Console Shell (nbc): terminal chrome for the Nimbus cloud database
//! platform.
//!
//! The shell renders the shared console chrome (icon bar, product menu,
//! header, and a state-dependent content area) and decides, per frame, which
//! of several mutually-exclusive project lifecycle screens to show:
//! connecting, building, restoring, pausing, paused, upgrading, gateway
//! offline, versus the actual page content. The decision core is a pure
//! classifier over the project status, the current route, and the gateway
//! reachability flag.
//!
//! # Library usage
//!
//! Use the [`prelude`] for convenient access to the most common types:
//!
//! ```rust,no_run
//! use nimbus_console::prelude::*;
//! ```
//!
//! Individual modules can also be imported directly:
//!
//! ```rust,no_run
//! use nimbus_console::core::config::ConsoleConfig;
//! use nimbus_console::route::Route;
//! ```

pub mod prelude;

pub mod core;
pub mod logger;
pub mod project;
pub mod route;
#[cfg(feature = "tui")]
pub mod tui;

#[cfg(all(test, feature = "tui"))]
mod display_plane_tests;
