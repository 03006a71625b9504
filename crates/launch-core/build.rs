// File: crates/launch-core/build.rs
// Summary: Links the Windows system libraries Skia needs; no-op elsewhere.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Skia's font manager calls into the registry (RegOpenKeyExW and friends).
        println!("cargo:rustc-link-lib=advapi32");
    }
}
