use std::env;
use std::fs;
use std::path::Path;

/// Копирует config.toml из корня workspace рядом с собранным бинарником
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let out_dir = env::var("OUT_DIR").unwrap();
    let profile = env::var("PROFILE").unwrap();

    // OUT_DIR: target/<profile>/build/backend-xxx/out
    let Some(target_dir) = Path::new(&out_dir).ancestors().find(|p| p.ends_with(&profile)) else {
        println!("cargo:warning=Cannot locate target/{} directory, config.toml not copied", profile);
        return;
    };

    let source_config = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config.toml");
    if !source_config.exists() {
        println!("cargo:warning=config.toml not found, the embedded default will be used");
        return;
    }

    let dest_config = target_dir.join("config.toml");
    if let Err(e) = fs::copy(&source_config, &dest_config) {
        panic!("Failed to copy config.toml to {:?}: {}", dest_config, e);
    }
}
