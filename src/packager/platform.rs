//! Host architecture detection.

use std::process::Command;

/// Machine identifier from `uname -m`, e.g. `x86_64` or `aarch64`.
///
/// Falls back to the compile-time architecture when `uname` is unavailable.
pub fn machine() -> String {
    let output = Command::new("uname").arg("-m").output();

    match output {
        Ok(out) if out.status.success() => detect(Some(&out.stdout)),
        _ => detect(None),
    }
}

/// Machine identifier from raw `uname -m` output, falling back to the
/// compile-time architecture when the output is absent or empty.
fn detect(stdout: Option<&[u8]>) -> String {
    stdout
        .and_then(parse)
        .unwrap_or_else(|| std::env::consts::ARCH.to_string())
}

fn parse(stdout: &[u8]) -> Option<String> {
    let machine = String::from_utf8_lossy(stdout).trim().to_string();
    (!machine.is_empty()).then_some(machine)
}
