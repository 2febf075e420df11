//! Render service producing the manifest view of a resolution
//!
//! Loads the configuration layers and the product descriptor from disk, runs
//! the resolver, and serializes the resolved descriptor with the AppArmor
//! projection selected by the caller's capability flag.

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::config::{self, ConfigLayer, PullPolicy};
use crate::product::ProductDescriptor;
use crate::resolve::{self, Layers, ResolvedDescriptor};
use crate::security::{AppArmorProfile, SeccompProfile};
use crate::selector::NodeSelector;

/// Configuration for a render operation
pub struct RenderConfig {
    pub global_path: Option<PathBuf>,
    pub service_path: Option<PathBuf>,
    pub images_path: Option<PathBuf>,
    pub product_path: PathBuf,
    /// Render the AppArmor profile as a pod annotation instead of the
    /// structured field (clusters without structured AppArmor support)
    pub apparmor_annotation: bool,
}

/// Service for rendering resolved deployment parameters
pub struct RenderService;

impl RenderService {
    /// Resolve the layered configuration and return the manifest view as
    /// pretty-printed JSON
    pub fn render(config: RenderConfig) -> Result<String> {
        let global = ConfigLayer::load_global(config.global_path.as_deref())?;
        let service = match &config.service_path {
            Some(path) => ConfigLayer::from_path(path)?,
            None => ConfigLayer::default(),
        };
        let images = match &config.images_path {
            Some(path) => config::load_overrides(path)?,
            None => BTreeMap::new(),
        };
        let product = ProductDescriptor::from_path(&config.product_path)?;

        info!("Resolving {} catalogued images", product.images.len());

        let layers = Layers {
            global,
            service,
            images,
        };
        let resolved = resolve::resolve(&layers, &product)?;
        debug!("Resolved descriptor: {:?}", resolved);

        let view = ManifestView::new(&resolved, config.apparmor_annotation);
        serde_json::to_string_pretty(&view).context("Failed to serialize resolved descriptor")
    }
}

/// Stable JSON projection of a resolved descriptor.
///
/// Exactly one of the two AppArmor projections is present, chosen by the
/// capability flag. `fsGroup` and `seccompProfile` are omitted when absence
/// is the resolved value.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ManifestView<'a> {
    registry: &'a str,
    image_pull_policy: PullPolicy,
    image_pull_secret: &'a str,
    timezone: &'a str,
    images: &'a BTreeMap<String, String>,
    node_selector: &'a NodeSelector,
    #[serde(skip_serializing_if = "Option::is_none")]
    fs_group: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    app_armor_profile: Option<&'a AppArmorProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    app_armor_annotation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    seccomp_profile: Option<&'a SeccompProfile>,
}

impl<'a> ManifestView<'a> {
    fn new(resolved: &'a ResolvedDescriptor, apparmor_annotation: bool) -> Self {
        let (profile, annotation) = if apparmor_annotation {
            (None, Some(resolved.apparmor.annotation_value()))
        } else {
            (Some(&resolved.apparmor), None)
        };
        Self {
            registry: &resolved.registry,
            image_pull_policy: resolved.pull_policy,
            image_pull_secret: &resolved.pull_secret,
            timezone: &resolved.timezone,
            images: &resolved.images,
            node_selector: &resolved.node_selector,
            fs_group: resolved.fs_group,
            app_armor_profile: profile,
            app_armor_annotation: annotation,
            seccomp_profile: resolved.seccomp.as_ref(),
        }
    }
}
