// SPDX-License-Identifier: MPL-2.0
use iced_dragbox::app::config::{self, AcceptSpec, Config, DragBoxConfig, GeneralConfig};
use iced_dragbox::app::App;
use iced_dragbox::domain::MaxFiles;
use iced_dragbox::i18n::fluent::I18n;
use iced_dragbox::infrastructure::MemoryFileDialog;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let initial_config = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
        },
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");
    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    let french_config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
        },
        ..Config::default()
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");
    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
}

#[test]
fn dragbox_section_configures_the_mounted_box() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(
        dir.path().join("settings.toml"),
        "[general]\nlanguage = \"fr\"\n\n[dragbox]\naccept = \"image/*\"\nmax_files = 1\ntext_select = \"Choisir\"\n",
    )
    .expect("Failed to write config file");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(
        config.dragbox,
        DragBoxConfig {
            accept: Some(AcceptSpec::One("image/*".into())),
            max_files: Some(1),
            text_select: Some("Choisir".into()),
            ..DragBoxConfig::default()
        }
    );

    let i18n = I18n::new(None, &config);
    let app = App::with_parts(config, i18n, Box::new(MemoryFileDialog::default()))
        .expect("Failed to mount drag box");
    let dragbox = app.dragbox();

    assert_eq!(dragbox.max_files(), MaxFiles::SINGLE);
    assert_eq!(dragbox.accept().to_string(), "image/*");
    assert_eq!(dragbox.texts().select, "Choisir");
    // Labels not set in the file come from the French bundle.
    assert_eq!(dragbox.texts().or, "ou");
}
