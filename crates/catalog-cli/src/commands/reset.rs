use anyhow::{Context, Result};
use catalog_core::SlotStorage;
use std::io::Write;

/// Clears the slot so the next session starts from the seed items.
pub fn run<S: SlotStorage>(storage: &S, slot: &str, out: &mut impl Write) -> Result<()> {
    storage
        .remove(slot)
        .with_context(|| format!("Failed to clear slot '{}'", slot))?;
    writeln!(out, "Cleared slot '{}'", slot)?;
    Ok(())
}
