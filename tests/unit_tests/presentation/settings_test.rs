use std::path::PathBuf;

use voxbridge::presentation::{Environment, Settings};

#[test]
fn given_no_overrides_when_loading_settings_then_uses_built_in_defaults() {
    let settings = Settings::load(Environment::Test).unwrap();

    assert_eq!(settings.server.port, 5000);
    assert_eq!(settings.server.max_upload_bytes(), 50 * 1024 * 1024);
    assert_eq!(settings.recognizer.model_path, PathBuf::from("model"));
    assert_eq!(settings.provider.base_url, "https://api.deepseek.com/v1");
    assert_eq!(settings.provider.chat_model, "deepseek-chat");
    assert_eq!(settings.provider.embedding_model, "deepseek-embedding");
    assert!((settings.provider.temperature - 0.7).abs() < f32::EPSILON);
    assert!(!settings.logging.json);
}

#[test]
fn given_override_when_building_settings_then_it_takes_precedence() {
    let settings: Settings = Settings::builder(Environment::Test)
        .unwrap()
        .set_override("server.port", 8080)
        .unwrap()
        .set_override("recognizer.temp_dir", "/var/tmp/voxbridge")
        .unwrap()
        .build()
        .unwrap()
        .try_deserialize()
        .unwrap();

    assert_eq!(settings.server.port, 8080);
    assert_eq!(
        settings.recognizer.temp_dir(),
        PathBuf::from("/var/tmp/voxbridge")
    );
}

#[test]
fn given_prod_environment_when_loading_settings_then_defaults_to_json_logs() {
    let settings = Settings::load(Environment::Prod).unwrap();

    assert!(settings.logging.json);
}

#[test]
fn given_environment_names_when_parsing_then_accepts_aliases() {
    assert_eq!("production".parse::<Environment>(), Ok(Environment::Prod));
    assert_eq!("LOCAL".parse::<Environment>(), Ok(Environment::Local));
    assert!("staging".parse::<Environment>().is_err());
}
