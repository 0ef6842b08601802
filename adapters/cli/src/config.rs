//! Loads field overrides from a TOML file.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use game_bee_core::FieldConfig;

/// Reads and validates the field configuration stored at `path`.
///
/// Keys missing from the file keep their default values.
pub(crate) fn load(path: &Path) -> Result<FieldConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read field config at {}", path.display()))?;
    parse(&contents).with_context(|| format!("invalid field config at {}", path.display()))
}

fn parse(contents: &str) -> Result<FieldConfig> {
    let config: FieldConfig =
        toml::from_str(contents).context("failed to parse field config toml contents")?;
    config.validate()?;
    Ok(config)
}
