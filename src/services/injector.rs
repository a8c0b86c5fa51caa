//! Secret injection into the generated game script
//!
//! The target is treated as opaque text: the two placeholder declarations are
//! replaced by exact substring match and the injected values are NOT escaped.
//! A value containing `'` will break the surrounding JavaScript string literal.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::constants::{
    API_KEY_DECL_PREFIX, API_KEY_PLACEHOLDER, BIN_ID_DECL_PREFIX, BIN_ID_PLACEHOLDER,
    CONSOLE_TAG, DECL_SUFFIX, ENV_API_KEY, ENV_BIN_ID, TARGET_FILE_NAME,
};
use crate::models::Secrets;

/// Which placeholders were actually replaced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Substitutions {
    pub bin_id: bool,
    pub api_key: bool,
}

/// Result of a run, rendered as the console diagnostic
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InjectOutcome {
    TargetMissing { display_path: String },
    Injected(Substitutions),
}

impl fmt::Display for InjectOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InjectOutcome::TargetMissing { display_path } => write!(
                f,
                "{} {} not found at {}",
                CONSOLE_TAG, TARGET_FILE_NAME, display_path
            ),
            InjectOutcome::Injected(_) => {
                write!(f, "{} Secrets injected into {}", CONSOLE_TAG, TARGET_FILE_NAME)
            }
        }
    }
}

/// Path of the target file inside `dir`
pub fn target_path(dir: &Path) -> PathBuf {
    dir.join(TARGET_FILE_NAME)
}

/// Forward-slash form of `path` for messages only
pub fn display_path(path: &Path) -> String {
    path.display().to_string().replace('\\', "/")
}

/// Replace the placeholders in `content` with the non-empty secrets
pub fn apply_secrets(content: &str, secrets: &Secrets) -> (String, Substitutions) {
    let mut data = content.to_string();
    let mut subs = Substitutions::default();

    if secrets.has_bin_id() {
        subs.bin_id = data.contains(BIN_ID_PLACEHOLDER);
        data = data.replace(BIN_ID_PLACEHOLDER, &declaration(BIN_ID_DECL_PREFIX, &secrets.bin_id));
    }
    if secrets.has_api_key() {
        subs.api_key = data.contains(API_KEY_PLACEHOLDER);
        data = data.replace(
            API_KEY_PLACEHOLDER,
            &declaration(API_KEY_DECL_PREFIX, &secrets.api_key),
        );
    }

    (data, subs)
}

fn declaration(prefix: &str, value: &str) -> String {
    let mut decl = String::with_capacity(prefix.len() + value.len() + DECL_SUFFIX.len());
    decl.push_str(prefix);
    decl.push_str(value);
    decl.push_str(DECL_SUFFIX);
    decl
}

/// Inject `secrets` into `<dir>/game.js`
///
/// A missing target is not an error. I/O failures propagate; the file is
/// rewritten even when nothing changed.
pub fn inject(dir: &Path, secrets: &Secrets) -> Result<InjectOutcome> {
    let path = target_path(dir);
    let shown = display_path(&path);
    log::debug!(
        "[Inject] Target {} (bin id: {}, api key: {})",
        shown,
        if secrets.has_bin_id() { "set" } else { "unset" },
        if secrets.has_api_key() { "set" } else { "unset" }
    );

    if !path.exists() {
        log::debug!("[Inject] Target missing, nothing to do");
        return Ok(InjectOutcome::TargetMissing { display_path: shown });
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", shown))?;

    let (data, subs) = apply_secrets(&content, secrets);
    if secrets.has_bin_id() && !subs.bin_id {
        log::debug!("[Inject] {} placeholder not present", ENV_BIN_ID);
    }
    if secrets.has_api_key() && !subs.api_key {
        log::debug!("[Inject] {} placeholder not present", ENV_API_KEY);
    }

    fs::write(&path, data).with_context(|| format!("Failed to write {}", shown))?;
    log::debug!(
        "[Inject] Wrote {} (bin id replaced: {}, api key replaced: {})",
        shown,
        subs.bin_id,
        subs.api_key
    );

    Ok(InjectOutcome::Injected(subs))
}
