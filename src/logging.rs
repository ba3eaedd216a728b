//! Log output for the binaries.
//!
//! The library only talks to the `log` facade. Each binary calls [`init`]
//! once; the terminal game does so only on request, since log lines written
//! to stderr would otherwise land on top of the play field.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Level used when `RUST_LOG` is unset.
fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Install env_logger. `verbose` adds pipe spawns, reaps and jumps to the
/// episode-level lines; `RUST_LOG` overrides both.
pub fn init(verbose: bool) {
    let env = Env::default().default_filter_or(default_level(verbose).to_string());
    // Second calls (tests, or both binaries' code paths) keep the first logger.
    let _ = Builder::from_env(env).format_timestamp_millis().try_init();
}
