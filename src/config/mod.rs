use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;


/// One scoped source of configuration values.
///
/// Three kinds of instance take part in a resolution: the tenant-wide
/// `global` layer, the workload's `service` layer, and zero or more
/// per-image override layers. Every field is optional; an absent field
/// defers to the next layer in the precedence chain. Layers are read-only
/// inputs and are never mutated by resolution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigLayer {
    /// Registry host for image references
    pub registry: Option<String>,

    /// Image pull policy
    pub pull_policy: Option<PullPolicy>,

    /// Image pull secret name
    pub pull_secret: Option<String>,

    /// Repository path inserted between registry and image name.
    /// An explicitly empty string suppresses the segment entirely, which is
    /// distinct from leaving the field unset.
    pub repo_path: Option<String>,

    /// Node placement constraints
    pub node_selector: Option<BTreeMap<String, String>>,

    /// Pod fsGroup configuration (consulted on the global layer)
    pub fs_group: Option<FsGroupConfig>,

    /// AppArmor profile configuration
    pub apparmor: Option<AppArmorConfig>,

    /// Seccomp profile configuration
    pub seccomp: Option<SeccompConfig>,

    /// Container timezone
    pub timezone: Option<String>,
}

/// Image pull policy, spelled the way the cluster API spells it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PullPolicy {
    Always,
    #[default]
    IfNotPresent,
    Never,
}

/// Pod fsGroup configuration.
///
/// `manual` pins a concrete group id; `namespace` requests that the field be
/// omitted so the namespace-level default applies. These are distinct states,
/// not an override chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FsGroupConfig {
    pub manual: Option<i64>,
    pub namespace: Option<bool>,
}

/// Security profile type, shared by the AppArmor and seccomp settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfileType {
    RuntimeDefault,
    Unconfined,
    Localhost,
}

/// AppArmor profile configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppArmorConfig {
    #[serde(rename = "type")]
    pub profile_type: ProfileType,
    pub localhost_profile: Option<String>,
}

/// Seccomp profile configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeccompConfig {
    #[serde(rename = "type")]
    pub profile_type: ProfileType,
    pub localhost_profile: Option<String>,
}

/// Per-image override layers keyed by image identifier
pub type ImageOverrides = BTreeMap<String, ConfigLayer>;

impl ConfigLayer {
    /// Load a layer from a TOML file
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config layer: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config layer: {}", path.display()))
    }

    /// Load the global layer, falling back to the user config directory and
    /// finally to an empty layer
    pub fn load_global(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_path(path);
        }
        if let Some(config_dir) = dirs::config_dir() {
            let default_path = config_dir.join("kresolve").join("global.toml");
            if default_path.exists() {
                return Self::from_path(&default_path);
            }
        }
        Ok(Self::default())
    }
}

/// Load per-image override layers from a TOML file keyed by image identifier
pub fn load_overrides(path: &Path) -> Result<ImageOverrides> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read image overrides: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse image overrides: {}", path.display()))
}
