//! Validation options.
//!
//! The defaults are the lenient behaviour: undeclared struct fields are ignored and
//! record keys outside the key grammar are dropped. Both can be tightened.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownFields {
    #[default]
    Ignore,
    Deny,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InadmissibleKeys {
    #[default]
    Drop,
    Deny,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Options {
    pub unknown_fields: UnknownFields,
    pub inadmissible_keys: InadmissibleKeys,
}

impl Options {
    /// Deny both undeclared fields and inadmissible keys.
    pub fn strict() -> Self {
        Self {
            unknown_fields: UnknownFields::Deny,
            inadmissible_keys: InadmissibleKeys::Deny,
        }
    }
}
