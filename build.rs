use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let crate_dir = env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");

    // C header for the ffi module
    let header_path = Path::new(&crate_dir).join("include/gf256_interpolate.h");
    if let Err(e) = fs::create_dir_all(header_path.parent().unwrap()) {
        println!("cargo:warning=Failed to create include/ directory: {}", e);
    }

    match cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_language(cbindgen::Language::C)
        .with_include_guard("GF256_INTERPOLATE_H")
        .generate()
    {
        Ok(bindings) => {
            if !bindings.write_to_file(&header_path) {
                println!("cargo:warning=Failed to write gf256_interpolate.h");
            }
        }
        Err(e) => println!("cargo:warning=cbindgen generation failed: {}", e),
    }

    println!("cargo:rerun-if-changed=src/ffi.rs");
    println!("cargo:rerun-if-changed=build.rs");
}
