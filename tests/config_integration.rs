use std::path::PathBuf;

use richedit::config::{ConfigFlags, load_config_flags, parse_flag_tokens};

#[test]
fn test_config_file_parsing_ignores_comments_and_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".richeditrc");
    let content = r"
# comment
--perf

--output notes.json
   
--render-debug-log=render.log
";
    std::fs::write(&path, content).unwrap();

    let flags = load_config_flags(&path).unwrap();
    assert!(flags.perf);
    assert_eq!(flags.output, Some(PathBuf::from("notes.json")));
    assert_eq!(flags.render_debug_log, Some(PathBuf::from("render.log")));
}

#[test]
fn test_cli_flags_override_file_flags() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".richeditrc");
    let content = "--perf\n--output saved.json\n--render-debug-log file.log\n";
    std::fs::write(&path, content).unwrap();

    let file_flags = load_config_flags(&path).unwrap();
    let cli_args = vec![
        "richedit".to_string(),
        "draft.json".to_string(),
        "-o".to_string(),
        "draft.json".to_string(),
    ];
    let cli_flags = parse_flag_tokens(&cli_args);

    let effective = file_flags.union(&cli_flags);
    assert!(effective.perf, "file flags should remain enabled");
    assert_eq!(
        effective.output,
        Some(PathBuf::from("draft.json")),
        "cli should override output"
    );
    assert_eq!(
        effective.render_debug_log,
        Some(PathBuf::from("file.log")),
        "file config should be preserved when CLI does not override"
    );
}

#[test]
fn test_local_override_layers_over_global() {
    let dir = tempfile::tempdir().unwrap();
    let global = dir.path().join("config");
    let local = dir.path().join(".richeditrc");
    std::fs::write(&global, "--output global.json\n--perf\n").unwrap();
    std::fs::write(&local, "--output=local.json\n").unwrap();

    let merged = load_config_flags(&global)
        .unwrap()
        .union(&load_config_flags(&local).unwrap());
    assert_eq!(
        merged,
        ConfigFlags {
            perf: true,
            render_debug_log: None,
            output: Some(PathBuf::from("local.json")),
        }
    );
}

#[test]
fn test_missing_config_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let flags = load_config_flags(&dir.path().join("absent")).unwrap();
    assert_eq!(flags, ConfigFlags::default());
}
