//! Version stamp baked in by the build script.

pub const BUILD_COMMIT: &str = env!("FLAPPY_BUILD_COMMIT");
pub const BUILD_DATE: &str = env!("FLAPPY_BUILD_DATE");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// One-line version string shown by `--version`.
pub fn version_line() -> String {
    format!("flappy {} ({} {})", VERSION, BUILD_DATE, BUILD_COMMIT)
}
