//! Languages command implementation

use anyhow::Result;
use bookfinder_core::KNOWN_LANGUAGES;

/// List the language codes the filter understands
pub fn languages(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(KNOWN_LANGUAGES)?);
        return Ok(());
    }

    for lang in KNOWN_LANGUAGES {
        println!("{}  {}", lang.code, lang.label);
    }

    Ok(())
}
