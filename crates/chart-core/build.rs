// File: crates/chart-core/build.rs
// Summary: Links Windows system libraries that Skia's font manager needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW and friends, used by Skia's DirectWrite font lookup
        println!("cargo:rustc-link-lib=advapi32");
    }
}
