//! JSON build-matrix output

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Module whose deployment needs an extra provider-variant entry.
const NARRATION_MODULE: &str = "rest-narration";

/// Variant tag attached to the narration module's second entry.
const AZURE_OPENAI_VARIANT: &str = "azure-openai";

/// One object in the emitted JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleEntry {
    pub name: String,
    #[serde(rename = "openai-type", skip_serializing_if = "Option::is_none")]
    pub openai_type: Option<String>,
}

impl ModuleEntry {
    fn plain(name: &str) -> Self {
        Self { name: name.to_string(), openai_type: None }
    }

    fn with_variant(name: &str, variant: &str) -> Self {
        Self { name: name.to_string(), openai_type: Some(variant.to_string()) }
    }
}

/// Expand one module name into its matrix entries.
///
/// The narration module deploys in two flavors, so it gets a second
/// entry tagged with the Azure OpenAI variant, directly after the plain
/// one. Every other module maps to a single plain entry.
fn entries_for(module: &str) -> Vec<ModuleEntry> {
    if module == NARRATION_MODULE {
        vec![
            ModuleEntry::plain(module),
            ModuleEntry::with_variant(module, AZURE_OPENAI_VARIANT),
        ]
    } else {
        vec![ModuleEntry::plain(module)]
    }
}

/// Serialize the changed-module set as a single-line JSON array,
/// preserving the set's order.
pub fn to_json(modules: &[String]) -> Result<String> {
    let entries: Vec<ModuleEntry> = modules
        .iter()
        .flat_map(|m| entries_for(m))
        .collect();

    Ok(serde_json::to_string(&entries)?)
}
