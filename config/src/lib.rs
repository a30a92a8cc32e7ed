//! Search settings read from the process environment.
//!
//! Every setting lives under `MIDPOINT_<PREFIX>_<FIELD>`, e.g. `MIDPOINT_SEARCH_BITWIDTH=16`.
//! Values from an optional `.config.env` next to this crate's manifest are loaded first and
//! never override variables that are already set.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

mod error;

pub mod search;

pub use error::Error;
pub use search::SearchConfig;

const CONFIG_ENV_PREFIX: &str = "MIDPOINT";
const CONFIG_ENV_FILE: &str = ".config.env";

/// A settings group deserialized from `MIDPOINT_<PREFIX>_*` variables.
pub trait Config: DeserializeOwned {
    /// Group name, upper case, without separators.
    const PREFIX: &'static str;

    fn env_prefix() -> String {
        format!("{CONFIG_ENV_PREFIX}_{}", Self::PREFIX)
    }

    fn from_env() -> Result<Self, Error> {
        load_env_file(&config_env_path())?;

        let source = config::Environment::with_prefix(&Self::env_prefix())
            .separator("_")
            .try_parsing(true);
        let settings = config::Config::builder().add_source(source).build()?;

        Ok(settings.try_deserialize()?)
    }
}

/// Load `path` into the environment. A missing file is not an error.
fn load_env_file(path: &Path) -> Result<(), Error> {
    match dotenvy::from_path(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "loaded env file");
            Ok(())
        }
        Err(err) if err.not_found() => Ok(()),
        Err(err) => Err(err.into()),
    }
}

#[doc(hidden)]
pub fn config_env_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(CONFIG_ENV_FILE)
}
