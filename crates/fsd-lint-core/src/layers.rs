//! Layer table for the feature-sliced layout.

use std::collections::BTreeSet;

/// Layers recognized by default, in dependency order.
pub const DEFAULT_LAYERS: &[&str] = &["shared", "entities", "features", "widgets", "pages"];

/// Layers that have no slice boundary and therefore no public API.
pub const DEFAULT_PUBLIC_API_EXEMPT: &[&str] = &["shared"];

/// The set of recognized layers and which of them enforce a public API.
///
/// Rules receive the table as a value, so alternative layouts can be
/// substituted per rule instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerTable {
    layers: BTreeSet<String>,
    public_api_exempt: BTreeSet<String>,
}

impl LayerTable {
    /// Creates a table from explicit layer names.
    ///
    /// Exempt names that are not themselves layers are ignored.
    #[must_use]
    pub fn new<I, J, S, T>(layers: I, public_api_exempt: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        let layers: BTreeSet<String> = layers.into_iter().map(Into::into).collect();
        let public_api_exempt = public_api_exempt
            .into_iter()
            .map(Into::into)
            .filter(|l| layers.contains(l))
            .collect();
        Self {
            layers,
            public_api_exempt,
        }
    }

    /// The conventional `shared / entities / features / widgets / pages` table.
    #[must_use]
    pub fn feature_sliced() -> Self {
        Self::new(
            DEFAULT_LAYERS.iter().copied(),
            DEFAULT_PUBLIC_API_EXEMPT.iter().copied(),
        )
    }

    /// Is `name` a recognized layer?
    ///
    /// This is the set the same-slice relativity check uses.
    #[must_use]
    pub fn is_layer(&self, name: &str) -> bool {
        self.layers.contains(name)
    }

    /// Does importing from `name` have to go through a slice's public API?
    #[must_use]
    pub fn enforces_public_api(&self, name: &str) -> bool {
        self.is_layer(name) && !self.public_api_exempt.contains(name)
    }
}

impl Default for LayerTable {
    fn default() -> Self {
        Self::feature_sliced()
    }
}
