//! Closed registry over the application constants.
//!
//! Every constant has exactly one [`ConstantKey`]. The key set is an enum, so
//! naming a constant that does not exist fails at compile time and `match`es
//! over keys stay exhaustive without a wildcard arm:
//!
//! ```compile_fail
//! use sellit_domain::registry::ConstantKey;
//!
//! let _ = ConstantKey::DatabasePassword.value();
//! ```
//!
//! ```rust
//! use sellit_domain::registry::{ConstantKey, ConstantValue};
//!
//! const PAGE_SIZE: ConstantValue = ConstantKey::DefaultPageSize.value();
//! assert_eq!(PAGE_SIZE, ConstantValue::Integer(20));
//! assert_eq!(ConstantKey::AppName.to_string(), "APP_NAME");
//! ```

use crate::constants::{APP_NAME, DEFAULT_PAGE_SIZE, MAX_RETRIES, VERSION};
use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount, EnumIter, IntoStaticStr};

/// Name of one application constant.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumCount, EnumIter,
    IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ConstantKey {
    AppName,
    Version,
    DefaultPageSize,
    MaxRetries,
}

impl ConstantKey {
    /// All keys in declaration order.
    pub const ALL: [Self; 4] = [Self::AppName, Self::Version, Self::DefaultPageSize, Self::MaxRetries];

    /// Canonical `SCREAMING_SNAKE_CASE` name, e.g. `"MAX_RETRIES"`.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// The fixed value bound to this key.
    #[must_use]
    pub const fn value(self) -> ConstantValue {
        match self {
            Self::AppName => ConstantValue::Text(APP_NAME),
            Self::Version => ConstantValue::Text(VERSION),
            Self::DefaultPageSize => ConstantValue::Integer(DEFAULT_PAGE_SIZE),
            Self::MaxRetries => ConstantValue::Integer(MAX_RETRIES),
        }
    }

    /// Declared kind of the value, known without reading it.
    #[must_use]
    pub const fn kind(self) -> ValueKind {
        match self {
            Self::AppName | Self::Version => ValueKind::Text,
            Self::DefaultPageSize | Self::MaxRetries => ValueKind::Integer,
        }
    }

    /// Iterates every key exactly once, in declaration order.
    pub fn iter() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }
}

/// Value of a constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstantValue {
    Text(&'static str),
    Integer(u32),
}

impl ConstantValue {
    #[must_use]
    pub const fn kind(self) -> ValueKind {
        match self {
            Self::Text(_) => ValueKind::Text,
            Self::Integer(_) => ValueKind::Integer,
        }
    }

    #[must_use]
    pub const fn as_text(self) -> Option<&'static str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Integer(_) => None,
        }
    }

    #[must_use]
    pub const fn as_integer(self) -> Option<u32> {
        match self {
            Self::Integer(n) => Some(n),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Integer(n) => write!(f, "{n}"),
        }
    }
}

/// Semantic type of a constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ValueKind {
    Text,
    Integer,
}

/// Frozen snapshot of every constant, one field each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Constants {
    pub app_name: &'static str,
    pub version: &'static str,
    pub default_page_size: u32,
    pub max_retries: u32,
}

impl Constants {
    /// The values compiled into this build.
    pub const CURRENT: Self = Self {
        app_name: APP_NAME,
        version: VERSION,
        default_page_size: DEFAULT_PAGE_SIZE,
        max_retries: MAX_RETRIES,
    };

    /// Reads one field by key.
    #[must_use]
    pub const fn get(&self, key: ConstantKey) -> ConstantValue {
        match key {
            ConstantKey::AppName => ConstantValue::Text(self.app_name),
            ConstantKey::Version => ConstantValue::Text(self.version),
            ConstantKey::DefaultPageSize => ConstantValue::Integer(self.default_page_size),
            ConstantKey::MaxRetries => ConstantValue::Integer(self.max_retries),
        }
    }
}

impl Default for Constants {
    fn default() -> Self {
        Self::CURRENT
    }
}

/// Every `(key, value)` pair, in key declaration order.
pub fn entries() -> impl Iterator<Item = (ConstantKey, ConstantValue)> {
    ConstantKey::iter().map(|key| (key, key.value()))
}
