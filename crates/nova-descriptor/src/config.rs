use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// What inference does with a type variable neither scope declares.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnresolvedGenerics {
    /// Encode the variable's own erasure.
    #[default]
    Erasure,
    /// Fail with [`Error::MissingGenericBound`].
    Strict,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DescriptorConfig {
    pub unresolved_generics: UnresolvedGenerics,
}

impl DescriptorConfig {
    pub fn strict() -> Self {
        Self {
            unresolved_generics: UnresolvedGenerics::Strict,
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|err| Error::InvalidConfig(err.to_string()))
    }
}
