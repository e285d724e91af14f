use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=static");

    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let static_path = Path::new(&manifest_dir).join("static");

    if !static_path.join("app.css").exists() {
        eprintln!("Warning: static/app.css not found, writing an empty stylesheet");
        create_fallback_files(&static_path);
    }
}

fn create_fallback_files(static_path: &Path) {
    fs::create_dir_all(static_path).expect("Failed to create static directory");
    fs::write(static_path.join("app.css"), "/* fallback */\n")
        .expect("Failed to write fallback app.css");
}
