//! Names, placeholders and messages used by the injector

// === Environment ===
pub const ENV_BIN_ID: &str = "JSONBIN_ID";
pub const ENV_API_KEY: &str = "JSONBIN_API_KEY";
pub const DOTENV_FILE_NAME: &str = ".env";

// === Target file ===
pub const TARGET_FILE_NAME: &str = "game.js";

// Exact text as emitted by the game bundle; matched literally, never as a pattern
pub const BIN_ID_PLACEHOLDER: &str = "const JSONBIN_ID = 'YOUR_BIN_ID_HERE';";
pub const API_KEY_PLACEHOLDER: &str = "const JSONBIN_API_KEY = '$2a$10$YOUR_API_KEY_HERE';";

// Declarations the secret value is spliced into: PREFIX + value + SUFFIX
pub const BIN_ID_DECL_PREFIX: &str = "const JSONBIN_ID = '";
pub const API_KEY_DECL_PREFIX: &str = "const JSONBIN_API_KEY = '";
pub const DECL_SUFFIX: &str = "';";

// === Console ===
pub const CONSOLE_TAG: &str = "[inject-secrets]";
pub const DEFAULT_LOG_FILTER: &str = "warn";
