use super::*;

fn build_from(contents: Option<&str>) -> Result<StoreConfig, Box<dyn Error>> {
    let mut fs = MockFilesystem::new();
    if let Some(contents) = contents {
        fs = fs.with_file(DEFAULT_TOML_PATH, contents);
    }
    build_config_with(fs.boxed(), Path::new(DEFAULT_TOML_PATH))
}

#[test]
fn defaults_without_file() {
    let conf = build_from(None).unwrap();
    assert_eq!(conf, StoreConfig::default());
}

#[test]
fn defaults_with_empty_file() {
    let conf = build_from(Some("")).unwrap();
    assert_eq!(conf, StoreConfig::default());
}

#[test]
fn can_config_max_indirection_depth() {
    let conf = build_from(Some("max_indirection_depth = 3")).unwrap();
    assert_eq!(conf.max_indirection_depth, 3);
}

#[test]
fn indirection_depth_bounds_are_inclusive() {
    let lowest = build_from(Some("max_indirection_depth = 1")).unwrap();
    assert_eq!(lowest.max_indirection_depth, 1);
    let highest = format!("max_indirection_depth = {}", INDIRECTION_DEPTH_LIMIT);
    let highest = build_from(Some(&highest)).unwrap();
    assert_eq!(highest.max_indirection_depth, INDIRECTION_DEPTH_LIMIT as usize);
}

#[test]
fn zero_indirection_depth_is_rejected() {
    let err = build_from(Some("max_indirection_depth = 0")).unwrap_err();
    assert!(err.to_string().contains("max_indirection_depth"));
}

#[test]
fn negative_indirection_depth_is_rejected() {
    assert!(build_from(Some("max_indirection_depth = -2")).is_err());
}

#[test]
fn excessive_indirection_depth_is_rejected() {
    let too_deep = format!("max_indirection_depth = {}", INDIRECTION_DEPTH_LIMIT + 1);
    let err = build_from(Some(&too_deep)).unwrap_err();
    assert!(err.to_string().contains("outside 1..="));
}

#[test]
fn can_enable_signal_tracing() {
    let conf = build_from(Some("trace_signals = true")).unwrap();
    assert!(conf.trace_signals);
}

#[test]
fn can_config_literal_names() {
    let conf = build_from(Some("name_formatting = \"literal\"")).unwrap();
    assert_eq!(conf.name_formatting, NameFormatting::Literal);
}

#[test]
fn unknown_name_formatting_is_rejected() {
    let err = build_from(Some("name_formatting = \"sideways\"")).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("sideways"));
    assert!(message.contains("indirect, literal"));
}

#[test]
fn name_formatting_config_names() {
    assert_eq!(
        NameFormatting::from_config_name("indirect"),
        Ok(NameFormatting::Indirect)
    );
    assert_eq!(
        NameFormatting::from_config_name("literal"),
        Ok(NameFormatting::Literal)
    );
    assert!(NameFormatting::from_config_name("Literal").is_err());
}

#[test]
fn unknown_option_is_rejected() {
    let err = build_from(Some("colour_depth = 4")).unwrap_err();
    assert!(err.to_string().contains("colour_depth is not a valid option"));
}

#[test]
fn wrong_type_is_rejected() {
    let err = build_from(Some("trace_signals = 1")).unwrap_err();
    assert!(err.to_string().contains("trace_signals: 1 is not a bool"));
    assert!(build_from(Some("max_indirection_depth = \"4\"")).is_err());
    assert!(build_from(Some("name_formatting = true")).is_err());
}

#[test]
fn error_names_the_file() {
    let err = build_from(Some("trace_signals = \"yes\"")).unwrap_err();
    assert!(err.to_string().starts_with(DEFAULT_TOML_PATH));
}

#[test]
fn invalid_toml_is_an_error() {
    assert!(build_from(Some("trace_signals = ")).is_err());
}

#[test]
fn unreadable_file_is_an_error() {
    let fs = MockFilesystem::new().with_unreadable_file(DEFAULT_TOML_PATH);
    assert!(build_config_with(fs.boxed(), Path::new(DEFAULT_TOML_PATH)).is_err());
}

#[test]
fn several_options_at_once() {
    let conf = build_from(Some(
        "max_indirection_depth = 2\ntrace_signals = true\nname_formatting = \"literal\"",
    ))
    .unwrap();
    assert_eq!(
        conf,
        StoreConfig {
            max_indirection_depth: 2,
            trace_signals: true,
            name_formatting: NameFormatting::Literal,
        }
    );
}

#[test]
fn entries_cover_every_option() {
    let names: Vec<&str> = config_entries().iter().map(ConfigEntry::name).collect();
    assert_eq!(
        names,
        ["max_indirection_depth", "trace_signals", "name_formatting"]
    );
}

#[test]
fn later_value_wins() {
    let mut builder = ConfigBuilder::new(config_entries());
    builder
        .set("trace_signals", &toml::Value::Boolean(true), "first")
        .unwrap();
    builder
        .set("trace_signals", &toml::Value::Boolean(false), "second")
        .unwrap();
    assert!(!builder.build().trace_signals);
}

#[test]
fn rejected_value_leaves_config_alone() {
    let mut builder = ConfigBuilder::new(config_entries());
    assert!(builder
        .set("max_indirection_depth", &toml::Value::Integer(0), "test")
        .is_err());
    assert_eq!(builder.build(), StoreConfig::default());
}

#[test]
#[should_panic(expected = "duplicate configuration entry")]
fn duplicate_entries_panic() {
    let mut entries = config_entries();
    entries.extend(config_entries());
    ConfigBuilder::new(entries);
}
