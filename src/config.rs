//! Browser Configuration
//!
//! Reads the stored config overlay from local storage and resolves it
//! against the build-time API url.

use catalog_sync::ApiConfig;

/// Local storage key holding a JSON config overlay
pub const STORAGE_KEY: &str = "catalog-admin.config";

/// Effective config for this page load
pub fn load_config() -> ApiConfig {
    let stored = read_storage(STORAGE_KEY);
    ApiConfig::resolve(stored.as_deref(), option_env!("CATALOG_API_URL"))
}

fn read_storage(key: &str) -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok().flatten()?;
    storage.get_item(key).ok().flatten()
}
