use linebox::config::{ConfigFlags, load_config_flags, parse_flag_tokens};
use linebox::editor::CaretOptions;

#[test]
fn test_config_file_parsing_ignores_comments_and_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".lineboxrc");
    let content = r#"
# comment
--whitespace-home

--indent-width 2

--trim-trailing-spaces
"#;
    std::fs::write(&path, content).unwrap();

    let flags = load_config_flags(&path).unwrap();
    assert!(flags.whitespace_home);
    assert!(flags.trim_trailing_spaces);
    assert_eq!(flags.indent_width, Some(2));
}

#[test]
fn test_cli_flags_override_file_flags() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".lineboxrc");
    let content = "--whitespace-home\n--indent-width 2\n";
    std::fs::write(&path, content).unwrap();

    let file_flags = load_config_flags(&path).unwrap();
    let cli_args = vec![
        "linebox".to_string(),
        "--indent-width".to_string(),
        "8".to_string(),
        "--overwrite".to_string(),
    ];
    let cli_flags = parse_flag_tokens(&cli_args);

    let effective = file_flags.union(&cli_flags);
    assert!(effective.whitespace_home, "file flags should remain enabled");
    assert!(effective.overwrite, "cli flags should be applied");
    assert_eq!(
        effective.indent_width,
        Some(8),
        "cli should override indent width"
    );
}

#[test]
fn test_parse_flag_tokens_handles_equals_syntax() {
    let args = vec!["linebox".to_string(), "--indent-width=3".to_string()];
    let flags = parse_flag_tokens(&args);
    assert_eq!(flags.indent_width, Some(3));
}

#[test]
fn test_config_union_merges_booleans() {
    let file = ConfigFlags {
        whitespace_home: true,
        dedent_on_backspace: true,
        ..ConfigFlags::default()
    };
    let cli = ConfigFlags {
        trim_trailing_spaces: true,
        overwrite: true,
        ..ConfigFlags::default()
    };
    let merged = file.union(&cli);
    assert!(merged.whitespace_home);
    assert!(merged.dedent_on_backspace);
    assert!(merged.trim_trailing_spaces);
    assert!(merged.overwrite);
}

#[test]
fn test_effective_flags_feed_caret_options() {
    let args = vec![
        "linebox".to_string(),
        "--no-auto-indent".to_string(),
        "--whitespace-home".to_string(),
    ];
    let options = parse_flag_tokens(&args).caret_options();
    assert!(!options.contains(CaretOptions::AUTO_INDENT));
    assert!(options.contains(CaretOptions::DEDENT_ON_BACKSPACE));
    assert!(options.contains(CaretOptions::WHITESPACE_HOME));
}
