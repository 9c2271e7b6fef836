// Tue Jan 13 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReflectError {
    #[error("Field count for {type_name} was already resolved; overrides must be registered before first use")]
    AlreadyResolved { type_name: String },
    #[error("Conflicting override for {type_name}: registered {existing}, requested {requested}")]
    OverrideConflict {
        type_name: String,
        existing: usize,
        requested: usize,
    },
    #[error("{type_name} already declares a field count override")]
    OverrideDeclared { type_name: String },
    #[error("Invalid probe configuration: {0}")]
    InvalidConfig(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
