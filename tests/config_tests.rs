use solo_finance::config::{Config, ConfigManager};
use tempfile::tempdir;

#[test]
fn default_config_has_a_currency_symbol() {
    let cfg = Config::default();
    assert!(!cfg.currency_symbol.is_empty());
    assert_eq!(cfg.log_level, "warn");
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let mut cfg = Config::default();
    cfg.set("currency", "€").unwrap();
    cfg.set("color", "off").unwrap();

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded.currency_symbol, "€");
    assert!(!loaded.color_enabled);
    assert!(manager.path().starts_with(dir.path()));
}
