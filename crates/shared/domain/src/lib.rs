//! # Domain Models
//!
//! Pure data for `SellIt`: the application-wide constants, a closed registry
//! over them, and the configuration models whose defaults they seed.
//! Keep it lean: no I/O, networking, or heavy logic.

pub mod config;
pub mod constants;
pub mod registry;
