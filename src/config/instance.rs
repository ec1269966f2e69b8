//! config singleton management stuff
use {
    crate::config::options::Spectrum,
    color_eyre::{Result, eyre::Context},
    std::sync::{LazyLock, RwLock, RwLockReadGuard, RwLockWriteGuard},
    tracing::warn,
};

/// global config instance
static CONFIG: LazyLock<RwLock<Spectrum>> = LazyLock::new(|| {
    RwLock::new(Spectrum::load().unwrap_or_else(|e| {
        warn!("Falling back to default configuration: {:#}", e);
        Spectrum::default()
    }))
});

/// load the config from disk, surfacing any errors
pub fn init_config() -> Result<()> {
    reload_config()
}

/// get a ro ref to the config
pub fn config() -> Result<RwLockReadGuard<'static, Spectrum>> {
    CONFIG
        .read()
        .map_err(|e| color_eyre::eyre::eyre!("Configuration lock poisoned: {}", e))
}

/// get a rw ref to the config
pub fn config_mut() -> Result<RwLockWriteGuard<'static, Spectrum>> {
    CONFIG
        .write()
        .map_err(|e| color_eyre::eyre::eyre!("Configuration lock poisoned: {}", e))
}

/// reload cfg from disk
pub fn reload_config() -> Result<()> {
    let new_config = Spectrum::load().wrap_err("Failed to load config from disk")?;
    let mut config = config_mut().wrap_err("failed to acquire write lock for cfg reload")?;

    *config = new_config;

    Ok(())
}

/// get a specific config value with a default fallback
pub fn get_or_default<T, F>(getter: F, default: T) -> T
where
    F: FnOnce(&Spectrum) -> Option<T>,
    T: Clone,
{
    config()
        .ok()
        .and_then(|cfg| getter(&cfg))
        .unwrap_or(default)
}
