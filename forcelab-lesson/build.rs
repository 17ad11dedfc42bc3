use anyhow::Result;
use cfg_aliases::cfg_aliases;

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=build.rs");

    cfg_aliases! {
        web: { all(target_os = "unknown", target_arch = "wasm32") },
    }

    Ok(())
}
