//! Build script: embeds version information.

use std::process::Command;

fn main() {
    // Prefer SWAP_PROFILE_VERSION if set (e.g. by a release workflow),
    // otherwise fall back to git describe for local builds.
    if let Ok(version) = std::env::var("SWAP_PROFILE_VERSION") {
        println!("cargo:rustc-env=SWAP_PROFILE_VERSION={version}");
    } else if let Ok(output) = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        && output.status.success()
    {
        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !version.is_empty() {
            println!("cargo:rustc-env=SWAP_PROFILE_VERSION={version}");
        }
    }

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed=SWAP_PROFILE_VERSION");
}
