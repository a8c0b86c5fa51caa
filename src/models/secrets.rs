use std::env::VarError;

use anyhow::{bail, Result};

use crate::constants::{ENV_API_KEY, ENV_BIN_ID};

/// JSONBin credentials resolved for one run
///
/// Both fields are trimmed. An empty field means "leave the placeholder alone".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Secrets {
    pub bin_id: String,
    pub api_key: String,
}

impl Secrets {
    pub fn new(bin_id: impl AsRef<str>, api_key: impl AsRef<str>) -> Self {
        Self {
            bin_id: trim_value(bin_id.as_ref()).to_string(),
            api_key: trim_value(api_key.as_ref()).to_string(),
        }
    }

    /// Resolve both values through `lookup`
    ///
    /// A missing variable becomes empty. A non-Unicode value is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let bin_id = read_var(&lookup, ENV_BIN_ID)?;
        let api_key = read_var(&lookup, ENV_API_KEY)?;
        Ok(Self::new(bin_id, api_key))
    }

    pub fn has_bin_id(&self) -> bool {
        !self.bin_id.is_empty()
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

fn read_var<F>(lookup: &F, name: &str) -> Result<String>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    match lookup(name) {
        Ok(value) => Ok(value),
        Err(VarError::NotPresent) => Ok(String::new()),
        Err(VarError::NotUnicode(_)) => bail!("{} is not valid unicode", name),
    }
}

// Unicode whitespace plus the information separators U+001C..U+001F
fn trim_value(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    #[test]
    fn trims_surrounding_whitespace() {
        let secrets = Secrets::from_lookup(|name| match name {
            ENV_BIN_ID => Ok("  65f0c0ffee \n".to_string()),
            ENV_API_KEY => Ok("\t$2a$10$abc ".to_string()),
            _ => Err(VarError::NotPresent),
        })
        .unwrap();

        assert_eq!(secrets.bin_id, "65f0c0ffee");
        assert_eq!(secrets.api_key, "$2a$10$abc");
        assert!(secrets.has_bin_id());
        assert!(secrets.has_api_key());
    }

    #[test]
    fn trims_information_separators() {
        let secrets = Secrets::new("\u{1c}\u{1d}id\u{1e}\u{1f}", "\u{85}key\u{3000}");
        assert_eq!(secrets.bin_id, "id");
        assert_eq!(secrets.api_key, "key");
    }

    #[test]
    fn missing_variables_are_empty() {
        let secrets = Secrets::from_lookup(|_| Err(VarError::NotPresent)).unwrap();
        assert_eq!(secrets, Secrets::default());
        assert!(!secrets.has_bin_id());
        assert!(!secrets.has_api_key());
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let secrets = Secrets::new("   ", "\n\u{1f}");
        assert!(!secrets.has_bin_id());
        assert!(!secrets.has_api_key());
    }

    #[test]
    fn non_unicode_value_is_an_error() {
        let err = Secrets::from_lookup(|name| match name {
            ENV_BIN_ID => Err(VarError::NotUnicode(OsString::from("bad"))),
            _ => Ok("key".to_string()),
        })
        .unwrap_err();

        assert_eq!(err.to_string(), "JSONBIN_ID is not valid unicode");
    }
}
