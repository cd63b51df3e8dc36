// SPDX-License-Identifier: MPL-2.0
use skysight::config::{self, Config, GeneralConfig};
use skysight::i18n::fluent::I18n;
use skysight::ui::theming::ThemeMode;
use std::collections::BTreeSet;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let initial_config = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            theme_mode: ThemeMode::System,
        },
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("segmentation-download-button"), "Download mask");

    let french_config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            theme_mode: ThemeMode::Dark,
        },
        ..Config::default()
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(loaded_french_config.general.theme_mode, ThemeMode::Dark);
    assert_eq!(i18n_fr.tr("segmentation-download-button"), "Télécharger le masque");
}

#[test]
fn test_cli_language_overrides_config() {
    let config = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            theme_mode: ThemeMode::Light,
        },
        ..Config::default()
    };
    let i18n = I18n::new(Some("fr".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "fr");
}

fn message_ids(source: &str) -> BTreeSet<&str> {
    source
        .lines()
        .filter(|line| line.starts_with(|c: char| c.is_ascii_alphabetic()))
        .filter_map(|line| line.split_once('=').map(|(id, _)| id.trim()))
        .collect()
}

#[test]
fn test_every_english_key_exists_in_french() {
    let english = message_ids(include_str!("../assets/i18n/en-US.ftl"));
    let french = message_ids(include_str!("../assets/i18n/fr.ftl"));
    assert!(english.len() > 40, "parsed {} english ids", english.len());

    let missing: Vec<_> = english.difference(&french).collect();
    assert!(missing.is_empty(), "missing in fr.ftl: {missing:?}");

    let fr = I18n::new(Some("fr".to_string()), &Config::default());
    assert_ne!(fr.tr("gallery-select-button"), "Analyze this image");
}
