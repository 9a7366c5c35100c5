use std::env;
use std::path::Path;
use std::process::Command;

/// Emits `INPAINT_MASK_BUILD_VERSION`, the package version with the
/// `git describe` of the checkout appended when one is available.
fn main() {
    let version = env::var("CARGO_PKG_VERSION").unwrap_or_default();
    let build_version = match git_describe() {
        Some(describe) => format!("{version} ({describe})"),
        None => version,
    };
    println!("cargo:rustc-env=INPAINT_MASK_BUILD_VERSION={build_version}");

    for watched in [".git/HEAD", ".git/index", ".git/refs/tags"] {
        if Path::new(watched).exists() {
            println!("cargo:rerun-if-changed={watched}");
        }
    }
}

fn git_describe() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let describe = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!describe.is_empty()).then_some(describe)
}
