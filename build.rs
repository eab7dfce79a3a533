fn main() {
    // Footer shows the build date and derives the copyright year from it
    let build_time = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={build_time}");

    // Embedded JSON content is compiled into the binary
    println!("cargo:rerun-if-changed=content");
    println!("cargo:rerun-if-changed=build.rs");
}
