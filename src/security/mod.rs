//! Security and runtime profile selection
//!
//! Resolves three independent concerns: the pod fsGroup, the AppArmor
//! profile, and the seccomp profile. None of them can fail; every branch is
//! satisfiable via defaults, and an unusable `Localhost` reference degrades
//! rather than producing an invalid profile.

use serde::{Deserialize, Serialize};

use crate::config::{AppArmorConfig, FsGroupConfig, ProfileType, SeccompConfig};
use crate::constants;
use crate::resolve::most_specific;


/// Resolved AppArmor profile.
///
/// The serialized form is the structured-field projection;
/// [`annotation_value`](AppArmorProfile::annotation_value) is the annotation
/// projection for clusters that predate the structured field. The caller
/// picks one based on an externally supplied capability flag; resolution
/// itself is platform-version-agnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppArmorProfile {
    #[serde(rename = "type")]
    pub profile_type: ProfileType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localhost_profile: Option<String>,
}

impl Default for AppArmorProfile {
    fn default() -> Self {
        Self {
            profile_type: ProfileType::RuntimeDefault,
            localhost_profile: None,
        }
    }
}

impl AppArmorProfile {
    /// Annotation projection of the profile
    pub fn annotation_value(&self) -> String {
        match (self.profile_type, &self.localhost_profile) {
            (ProfileType::RuntimeDefault, _) | (ProfileType::Localhost, None) => {
                constants::security::APPARMOR_RUNTIME_DEFAULT.to_string()
            }
            (ProfileType::Unconfined, _) => "unconfined".to_string(),
            (ProfileType::Localhost, Some(profile)) => format!("localhost/{}", profile),
        }
    }
}

/// Resolved seccomp profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeccompProfile {
    #[serde(rename = "type")]
    pub profile_type: ProfileType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localhost_profile: Option<String>,
}

/// Resolve the pod fsGroup.
///
/// A manual value wins outright. An explicit namespace-default request
/// returns `None`, meaning the field is omitted so the platform's policy
/// default applies. With neither configured, the fixed fallback is used.
pub fn resolve_fs_group(global: Option<&FsGroupConfig>) -> Option<i64> {
    match global {
        Some(FsGroupConfig { manual: Some(value), .. }) => Some(*value),
        Some(FsGroupConfig { namespace: Some(true), .. }) => None,
        _ => Some(constants::security::DEFAULT_FS_GROUP),
    }
}

/// Resolve the AppArmor profile over the global and service layers.
///
/// `Localhost` without a profile name degrades to the runtime default
/// instead of emitting a dangling reference.
pub fn resolve_apparmor(
    global: Option<&AppArmorConfig>,
    service: Option<&AppArmorConfig>,
) -> AppArmorProfile {
    let Some(config) = most_specific(None, [global.map(Some), service.map(Some)]) else {
        return AppArmorProfile::default();
    };
    match (config.profile_type, &config.localhost_profile) {
        (ProfileType::Localhost, Some(profile)) => AppArmorProfile {
            profile_type: ProfileType::Localhost,
            localhost_profile: Some(profile.clone()),
        },
        (ProfileType::Localhost, None) => AppArmorProfile::default(),
        (profile_type, _) => AppArmorProfile {
            profile_type,
            localhost_profile: None,
        },
    }
}

/// Resolve the seccomp profile over the global and service layers.
///
/// Emitted only when a profile is explicitly configured; `Localhost` without
/// a profile path suppresses the whole block.
pub fn resolve_seccomp(
    global: Option<&SeccompConfig>,
    service: Option<&SeccompConfig>,
) -> Option<SeccompProfile> {
    let config = most_specific(None, [global.map(Some), service.map(Some)])?;
    match (config.profile_type, &config.localhost_profile) {
        (ProfileType::Localhost, None) => None,
        (ProfileType::Localhost, Some(profile)) => Some(SeccompProfile {
            profile_type: ProfileType::Localhost,
            localhost_profile: Some(profile.clone()),
        }),
        (profile_type, _) => Some(SeccompProfile {
            profile_type,
            localhost_profile: None,
        }),
    }
}
