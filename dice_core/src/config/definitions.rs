//! Stat definition loading

use super::ConfigError;
use crate::dice::Dice;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Authored definition a stat is bound to for its lifetime.
///
/// Read-only content data: the base dice the stat starts from plus the
/// authored bounds (cap/floor/median and the damage allowance). The
/// bounds are exposed to consumers but take no part in aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatDefinition {
    /// Base dice the stat starts from, e.g. `{ count = 2, kind = "d6" }`
    pub base: Dice,
    pub cap: i32,
    pub floor: i32,
    pub median: i32,
    /// Authored damage allowance for this stat
    pub max_damage: i32,
}

/// Container for stat definitions keyed by stat name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatDefinitionsConfig {
    #[serde(rename = "stats")]
    pub stats: HashMap<String, StatDefinition>,
}

/// Loaded definition table, shared with the stats built from it
pub type StatDefinitions = HashMap<String, Arc<StatDefinition>>;

fn into_table(config: StatDefinitionsConfig) -> Result<StatDefinitions, ConfigError> {
    let mut map = HashMap::new();
    for (name, definition) in config.stats {
        if definition.base.count < 0 {
            return Err(ConfigError::ValidationError(format!(
                "stat '{}' has a negative base dice count",
                name
            )));
        }
        map.insert(name, Arc::new(definition));
    }
    Ok(map)
}

/// Load stat definitions from a TOML file
pub fn load_definitions(path: &Path) -> Result<StatDefinitions, ConfigError> {
    into_table(super::load_toml(path)?)
}

/// Load stat definitions from a TOML string
pub fn parse_definitions(content: &str) -> Result<StatDefinitions, ConfigError> {
    into_table(super::parse_toml(content)?)
}

/// Get the built-in default stat definitions
pub fn default_definitions() -> StatDefinitions {
    let toml = include_str!("../../config/stats.toml");
    parse_definitions(toml).unwrap_or_default()
}
