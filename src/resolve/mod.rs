//! Layered resolution of deployment parameters
//!
//! Collapses the global, service and per-image configuration layers plus the
//! product descriptor into one fully determined record. The resolution is a
//! pure computation: no I/O, no mutation of caller-owned layers, and
//! identical inputs always produce an identical descriptor, so independent
//! resolutions are free to run on separate threads.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::{ConfigLayer, ImageOverrides, PullPolicy};
use crate::constants;
use crate::error::ResolveError;
use crate::image::compose_reference;
use crate::product::ProductDescriptor;
use crate::security::{self, AppArmorProfile, SeccompProfile};
use crate::selector::{self, NodeSelector};


/// Return the value from the most specific layer that defines one, falling
/// back to `default` when none does.
///
/// Layers are ordered least to most specific and none may be skipped. This
/// is the single override primitive behind every scalar field: an ordered
/// fold over optional lookups rather than nested per-field branching.
pub fn most_specific<T>(default: T, layers: impl IntoIterator<Item = Option<T>>) -> T {
    layers.into_iter().flatten().last().unwrap_or(default)
}

/// The configuration layers feeding one resolution
#[derive(Debug, Clone, Default)]
pub struct Layers {
    /// Tenant-wide layer
    pub global: ConfigLayer,
    /// Workload-level override layer
    pub service: ConfigLayer,
    /// Per-image override layers keyed by image identifier
    pub images: ImageOverrides,
}

/// The output record: every field fully determined, ready for manifest
/// emission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedDescriptor {
    /// Final registry host
    pub registry: String,
    pub pull_policy: PullPolicy,
    pub pull_secret: String,
    pub timezone: String,
    /// Fully qualified reference per image identifier
    pub images: BTreeMap<String, String>,
    /// Merged node placement constraints
    pub node_selector: NodeSelector,
    /// `None` means the field is omitted so the namespace default applies
    pub fs_group: Option<i64>,
    pub apparmor: AppArmorProfile,
    /// Absent unless a profile is explicitly configured
    pub seccomp: Option<SeccompProfile>,
}

/// Collapse the layers and product descriptor into a resolved descriptor.
///
/// Renders one reference per catalogued image and validates that every
/// per-image override targets a known identifier. Fails only on a
/// node-selector conflict or an override for an uncatalogued image.
pub fn resolve(
    layers: &Layers,
    product: &ProductDescriptor,
) -> Result<ResolvedDescriptor, ResolveError> {
    for image in layers.images.keys() {
        product.entry(image)?;
    }

    let mut images = BTreeMap::new();
    for (id, entry) in &product.images {
        let reference =
            compose_reference(entry, &layers.global, &layers.service, layers.images.get(id));
        images.insert(id.clone(), reference);
    }

    let node_selector = selector::merge_node_selectors(
        layers.global.node_selector.as_ref(),
        layers.service.node_selector.as_ref(),
    )?;

    Ok(ResolvedDescriptor {
        registry: most_specific(
            constants::registry::DEFAULT_URL,
            [
                layers.global.registry.as_deref(),
                layers.service.registry.as_deref(),
            ],
        )
        .to_string(),
        pull_policy: most_specific(
            PullPolicy::default(),
            [layers.global.pull_policy, layers.service.pull_policy],
        ),
        pull_secret: most_specific(
            constants::registry::DEFAULT_PULL_SECRET,
            [
                layers.global.pull_secret.as_deref(),
                layers.service.pull_secret.as_deref(),
            ],
        )
        .to_string(),
        timezone: most_specific(
            constants::timezone::DEFAULT,
            [
                layers.global.timezone.as_deref(),
                layers.service.timezone.as_deref(),
            ],
        )
        .to_string(),
        images,
        node_selector,
        fs_group: security::resolve_fs_group(layers.global.fs_group.as_ref()),
        apparmor: security::resolve_apparmor(
            layers.global.apparmor.as_ref(),
            layers.service.apparmor.as_ref(),
        ),
        seccomp: security::resolve_seccomp(
            layers.global.seccomp.as_ref(),
            layers.service.seccomp.as_ref(),
        ),
    })
}
