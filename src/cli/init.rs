use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::ServerConfig;
use crate::settings::{DEFAULT_TTL, SettingsCache};
use crate::store::{SqliteStore, Store};

/// Create the database (if needed) and make sure a signing secret exists.
/// Safe to run more than once.
pub fn run_init(data_dir: String) -> anyhow::Result<()> {
    let config = ServerConfig {
        data_dir: PathBuf::from(data_dir),
        ..ServerConfig::default()
    };
    fs::create_dir_all(&config.data_dir)?;

    let db_path = config.db_path();
    let existed = db_path.exists();

    let store = SqliteStore::new(&db_path)?;
    store.initialize()?;
    let store: Arc<dyn Store> = Arc::new(store);

    SettingsCache::new(Arc::clone(&store), DEFAULT_TTL).signing_secret()?;
    store.close()?;

    if existed {
        println!("Database already initialized at {}", db_path.display());
    } else {
        println!("Initialized database at {}", db_path.display());
    }

    Ok(())
}
