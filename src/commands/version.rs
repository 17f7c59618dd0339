//! Command: print version information.

/// Version string, preferring the build-time `SWAP_PROFILE_VERSION`.
#[must_use]
pub fn version() -> &'static str {
    option_env!("SWAP_PROFILE_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
}

/// Print the version to stdout.
#[allow(clippy::print_stdout)]
pub fn run() {
    println!("swap-profile {}", version());
}
