//! Application-wide constants.
//!
//! Non-sensitive configuration and magic numbers live here. Secrets belong in
//! `env/local.env` or `env/docker.env` and are never read by this crate.

/// Product name.
pub const APP_NAME: &str = "SellIt";

/// Application version, `MAJOR.MINOR.PATCH`.
pub const VERSION: &str = "0.1.0";

/// Items per page when a caller does not ask for a size.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Retries allowed after the first failed attempt.
pub const MAX_RETRIES: u32 = 3;

const VERSION_PARTS: (u32, u32, u32) = parse_version(VERSION);

const _: () = assert!(DEFAULT_PAGE_SIZE > 0, "DEFAULT_PAGE_SIZE must be positive");
const _: (u32, u32, u32) = VERSION_PARTS;

/// [`VERSION`] split into `(major, minor, patch)`.
///
/// ```rust
/// use sellit_domain::constants::version_triple;
///
/// const PARTS: (u32, u32, u32) = version_triple();
/// assert_eq!(PARTS, (0, 1, 0));
/// ```
#[must_use]
pub const fn version_triple() -> (u32, u32, u32) {
    VERSION_PARTS
}

#[allow(clippy::cast_lossless)]
const fn parse_version(raw: &str) -> (u32, u32, u32) {
    let bytes = raw.as_bytes();
    let mut parts = [0_u32; 3];
    let mut part = 0;
    let mut digits = 0;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if b == b'.' {
            assert!(digits > 0 && part < 2, "VERSION must look like MAJOR.MINOR.PATCH");
            part += 1;
            digits = 0;
        } else {
            assert!(b.is_ascii_digit(), "VERSION may only contain digits and dots");
            parts[part] = parts[part] * 10 + (b - b'0') as u32;
            digits += 1;
        }
        i += 1;
    }

    assert!(part == 2 && digits > 0, "VERSION must look like MAJOR.MINOR.PATCH");
    (parts[0], parts[1], parts[2])
}
