use anyhow::Result;
use fs_extra::{copy_items, dir::CopyOptions};
use std::{env, path::PathBuf};

// Images for the textured cube live in assets/. A copy goes to OUT_DIR so
// packaging steps can pick them up from the build output; the binary itself
// reads ./assets relative to the working directory.
fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=assets");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let assets = manifest_dir.join("assets");
    if !assets.exists() {
        return Ok(());
    }

    let mut copy_options = CopyOptions::new();
    copy_options.overwrite = true;
    copy_items(&[assets], env::var("OUT_DIR")?, &copy_options)?;
    Ok(())
}
