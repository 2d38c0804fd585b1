use kordon::presentation::Environment;

#[test]
fn given_known_aliases_when_parsing_then_maps_to_environment() {
    assert_eq!(Environment::try_from("dev".to_string()), Ok(Environment::Local));
    assert_eq!(Environment::try_from(" Production ".to_string()), Ok(Environment::Prod));
    assert_eq!(Environment::try_from("test".to_string()), Ok(Environment::Test));
}

#[test]
fn given_unknown_value_when_parsing_then_returns_error() {
    let err = Environment::try_from("staging".to_string()).unwrap_err();
    assert!(err.contains("staging"));
}

#[test]
fn given_environment_when_displayed_then_matches_settings_file_suffix() {
    assert_eq!(Environment::Local.to_string(), "local");
    assert_eq!(Environment::Prod.as_str(), "prod");
}
