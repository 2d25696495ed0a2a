// File: crates/gantt-core/build.rs
// Summary: Build script to link the Windows system libraries Skia needs for font discovery.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Needed for RegOpenKeyExW, RegQueryInfoKeyW, etc.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
