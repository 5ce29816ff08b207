//! Kernel utilities shared across `SellIt` applications.
//! Keep this crate lightweight; it owns settings loading and re-exports the domain crate.
//!
//! ## Settings loading
//! ```rust,no_run
//! use sellit_kernel::config::load_settings;
//!
//! let settings = load_settings(Some("config/local")).unwrap();
//! assert!(settings.pagination.page_size > 0);
//! ```
pub mod config;

pub use sellit_domain as domain;
