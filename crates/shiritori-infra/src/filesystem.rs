//! Data directory resolution.

use std::path::PathBuf;

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "SHIRITORI_DATA_DIR";

/// Resolve the data directory for the bot.
///
/// Checks `SHIRITORI_DATA_DIR` first, then falls back to `~/.shiritori`.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".shiritori");
    }

    // Last resort: current directory
    PathBuf::from(".shiritori")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_data_dir_from_env() {
        // SAFETY: This test is the only one touching this variable and restores it immediately.
        unsafe {
            std::env::set_var(DATA_DIR_ENV, "/tmp/test-shiritori");
        }
        let dir = resolve_data_dir();
        assert_eq!(dir, PathBuf::from("/tmp/test-shiritori"));
        unsafe {
            std::env::remove_var(DATA_DIR_ENV);
        }
    }
}
