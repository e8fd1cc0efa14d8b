fn main() {
    // Capture the current timestamp as the build time, shown in the footer
    let build_time = chrono::Utc::now().to_rfc3339();

    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
