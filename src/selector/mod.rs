use std::collections::BTreeMap;

use crate::error::ResolveError;


/// Node placement constraint map
pub type NodeSelector = BTreeMap<String, String>;

/// Merge the global and service node-selector maps.
///
/// Node placement constraints come from two independent authorities, so they
/// carry no specificity precedence: a key present in both maps must hold the
/// same value on both sides, and a mismatch aborts the resolution. Keys
/// present on only one side pass through unchanged.
pub fn merge_node_selectors(
    global: Option<&NodeSelector>,
    service: Option<&NodeSelector>,
) -> Result<NodeSelector, ResolveError> {
    let mut merged = global.cloned().unwrap_or_default();
    let Some(service) = service else {
        return Ok(merged);
    };
    for (key, value) in service {
        match merged.get(key) {
            Some(existing) if existing != value => {
                return Err(ResolveError::ConfigConflict {
                    key: key.clone(),
                    global: existing.clone(),
                    service: value.clone(),
                });
            }
            _ => {
                merged.insert(key.clone(), value.clone());
            }
        }
    }
    Ok(merged)
}
