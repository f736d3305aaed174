//! Configuration loading, validation, and env substitution.
//!
//! Config files: `casita.toml`, `casita.yaml`, or `casita.json`,
//! searched in `./` then the config dir (default `~/.config/casita/`).
//!
//! Supports `${ENV_VAR}` substitution in all string values.

pub mod env_subst;
pub mod loader;
pub mod schema;
pub mod validate;

pub use {
    loader::{
        config_dir, data_dir, discover_and_load, find_or_default_config_path, load_config,
        set_config_dir, set_data_dir,
    },
    schema::{
        CasitaConfig, ContentConfig, ContentProviderKind, DialogConfig, ListingsConfig, LlmConfig,
        ServerConfig, SessionBackend, SessionsConfig, TwilioConfig,
    },
    validate::{Diagnostic, Severity, ValidationResult, log_diagnostics, validate},
};
