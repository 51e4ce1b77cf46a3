//! Paths command handler.
//!
//! Displays resolved paths for diagnostics.

use album_core::paths::data_root;
use anyhow::Result;

use crate::bootstrap::CliConfig;

/// Execute the paths command.
///
/// Prints `key = value` lines. Does not touch the network or open the
/// database.
pub fn execute(config: &CliConfig) -> Result<()> {
    match data_root() {
        Ok(dir) => println!("data_dir = {}", dir.display()),
        Err(e) => println!("data_dir = <{e}>"),
    }
    println!("database = {}", config.resolve_db_path()?.display());
    println!("api_base_url = {}", config.api_config().base_url());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_paths_with_explicit_db_path() {
        let config = CliConfig {
            db_path: Some(PathBuf::from("/tmp/album-paths-test.db")),
            ..CliConfig::default()
        };
        execute(&config).unwrap();
    }
}
