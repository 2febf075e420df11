/// Registry constants used when no configuration layer supplies a value
pub mod registry {
    /// Default registry host for image references
    pub const DEFAULT_URL: &str = "docker.io";

    /// Default image pull secret name
    pub const DEFAULT_PULL_SECRET: &str = "regcred";
}

/// Pod security defaults
pub mod security {
    /// Fallback fsGroup when neither a manual value nor the
    /// namespace-default request is configured
    pub const DEFAULT_FS_GROUP: i64 = 10000;

    /// Annotation value for the default AppArmor runtime profile
    pub const APPARMOR_RUNTIME_DEFAULT: &str = "runtime/default";
}

/// Timezone constants
pub mod timezone {
    /// Default container timezone
    pub const DEFAULT: &str = "UTC";
}
