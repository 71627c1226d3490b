//! Project feature flags chosen before editing starts.

use serde::{Deserialize, Serialize};

/// Optional features the generated component is annotated for.
///
/// Fixed for a session. Only the exporter reads it; the surface model never
/// does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureConfig {
    /// Client-side routing.
    #[serde(rename = "useRouter")]
    pub use_router: bool,
    /// Data fetching through RTK Query.
    #[serde(rename = "useRTKQuery")]
    pub use_rtk_query: bool,
}

impl FeatureConfig {
    /// Create a config from both flags.
    #[must_use]
    pub const fn new(use_router: bool, use_rtk_query: bool) -> Self {
        Self {
            use_router,
            use_rtk_query,
        }
    }

    /// Whether any feature is enabled.
    #[must_use]
    pub const fn any_enabled(&self) -> bool {
        self.use_router || self.use_rtk_query
    }

    /// Display names of the enabled features, in a fixed order.
    #[must_use]
    pub fn enabled_features(&self) -> Vec<&'static str> {
        let mut names = Vec::with_capacity(2);
        if self.use_router {
            names.push("React Router");
        }
        if self.use_rtk_query {
            names.push("RTK Query");
        }
        names
    }

    /// One-line summary such as `Configured with: React Router, RTK Query`.
    #[must_use]
    pub fn summary(&self) -> Option<String> {
        self.any_enabled()
            .then(|| format!("Configured with: {}", self.enabled_features().join(", ")))
    }
}
