//! Optional `.env` file in the working directory
//!
//! Only `<dir>/.env` is read; parent directories are never searched. Values are
//! kept in memory and consulted after the process environment, so nothing is
//! written back into the environment.

use std::collections::HashMap;
use std::env::VarError;
use std::path::Path;

use crate::constants::DOTENV_FILE_NAME;

/// Variables parsed from a `.env` file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DotenvVars(HashMap<String, String>);

impl DotenvVars {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lookup that asks `env` first and falls back to the file for unset names
    pub fn layered<'a, F>(&'a self, env: F) -> impl Fn(&str) -> Result<String, VarError> + 'a
    where
        F: Fn(&str) -> Result<String, VarError> + 'a,
    {
        move |name: &str| match env(name) {
            Err(VarError::NotPresent) => self
                .get(name)
                .map(str::to_string)
                .ok_or(VarError::NotPresent),
            other => other,
        }
    }
}

/// Read `<dir>/.env`
///
/// A missing file yields no variables. A malformed file is logged and ignored
/// as a whole.
pub fn load_dotenv(dir: &Path) -> DotenvVars {
    let path = dir.join(DOTENV_FILE_NAME);

    let iter = match dotenvy::from_path_iter(&path) {
        Ok(iter) => iter,
        Err(e) if e.not_found() => {
            log::debug!("[Dotenv] No {} in {}", DOTENV_FILE_NAME, dir.display());
            return DotenvVars::default();
        }
        Err(e) => {
            log::warn!("[Dotenv] Ignoring unreadable {}: {}", path.display(), e);
            return DotenvVars::default();
        }
    };

    match iter.collect::<Result<HashMap<_, _>, _>>() {
        Ok(vars) => {
            log::debug!("[Dotenv] Loaded {} variable(s) from {}", vars.len(), path.display());
            DotenvVars(vars)
        }
        Err(e) => {
            log::warn!("[Dotenv] Ignoring malformed {}: {}", path.display(), e);
            DotenvVars::default()
        }
    }
}
