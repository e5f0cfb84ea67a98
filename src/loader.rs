use std::error::Error;
use std::fs;
use std::path::Path;

use soc::asm;
use soc::system::System;

pub type Result<T> = core::result::Result<T, Box<dyn Error>>;

/// Assembles `.s`/`.asm` sources, loads anything else as a raw image.
pub fn load_program(path: &str) -> Result<Vec<u8>> {
    let extension = Path::new(path).extension().and_then(|e| e.to_str()).unwrap_or("");
    match extension.to_ascii_lowercase().as_str() {
        "s" | "asm" => {
            let source = fs::read_to_string(path)?;
            Ok(asm::assemble(&source)?.to_vec())
        }
        _ => Ok(fs::read(path)?),
    }
}

#[cfg(feature = "serialize")]
pub fn load_state(path: &str) -> Result<System> {
    let bytes = fs::read(path)?;
    let system: System = bincode::deserialize(&bytes)?;
    system.validate()?;
    Ok(system)
}

#[cfg(feature = "serialize")]
pub fn save_state(system: &System, path: &str) -> Result<()> {
    fs::write(path, bincode::serialize(system)?)?;
    Ok(())
}

#[cfg(not(feature = "serialize"))]
pub fn load_state(_: &str) -> Result<System> {
    Err("Snapshots need the serialize feature.".into())
}

#[cfg(not(feature = "serialize"))]
pub fn save_state(_: &System, _: &str) -> Result<()> {
    Err("Snapshots need the serialize feature.".into())
}
