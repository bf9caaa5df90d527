use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use std::{env, fs};

fn main() {
    println!("cargo:rerun-if-changed=assets");

    let mut stylesheets: Vec<PathBuf> = fs::read_dir("assets")
        .map(|dir| {
            dir.filter_map(Result::ok)
                .map(|entry| entry.path())
                .filter(|path| path.extension().is_some_and(|ext| ext == "css"))
                .collect()
        })
        .unwrap_or_default();

    stylesheets.sort();

    let mut hasher = DefaultHasher::new();

    for path in &stylesheets {
        println!("cargo:rerun-if-changed={}", path.display());

        if let Ok(content) = fs::read(path) {
            content.hash(&mut hasher);
        }
    }

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let dest = Path::new(&out_dir).join("css_hash.rs");

    fs::write(
        dest,
        format!("pub const CSS_VERSION: &str = \"{:016x}\";\n", hasher.finish()),
    )
    .expect("failed to write css_hash.rs");
}
