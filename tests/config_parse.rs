use mls_comps::config::Config;

#[test]
fn parse_example_config() {
    let raw = include_str!("../mls-comps.example.toml");
    let cfg: Config = toml::from_str(raw).expect("parse TOML");
    assert!(!cfg.output.out_dir.is_empty());
    assert_eq!(cfg.extraction.remarks_terminators, vec!["charles gale"]);
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let cfg: Config = toml::from_str("[logging]\nlevel = \"debug\"\n").expect("parse TOML");
    assert_eq!(cfg.logging.level, "debug");
    assert!(cfg.extraction.normalize_unicode);
    assert_eq!(cfg.output.report_filename, "report.json");
}
