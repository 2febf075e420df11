//! Error types for layered resolution
//!
//! Every other under-specified input is settled by defaulting; these are the
//! only conditions that abort a resolution. Both are deterministic, so there
//! is no retry path — the caller fixes the input and runs again.

use thiserror::Error;

/// Errors raised while collapsing configuration layers into a resolved
/// descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The global and service layers pin the same node-selector key to
    /// different values. Placement constraints from the two authorities must
    /// agree; neither side may silently override the other.
    #[error(
        "conflicting node selector values for key \"{key}\": global=\"{global}\", service=\"{service}\""
    )]
    ConfigConflict {
        key: String,
        global: String,
        service: String,
    },

    /// An image identifier was requested that has no entry in the product
    /// descriptor.
    #[error("no product descriptor entry for image \"{image}\"")]
    MissingDescriptor { image: String },
}
