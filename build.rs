fn main() {
    // Capture the build date for display in the site footer
    let build_date = chrono::Utc::now().format("%Y-%m-%d").to_string();

    // Set as environment variable for use in env! macro
    println!("cargo:rustc-env=BUILD_DATE={}", build_date);

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
