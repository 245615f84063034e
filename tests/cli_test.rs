use clap::Parser;
use std::ffi::OsString;
use vuegen::cli::Args;
use vuegen::request::StructureMode;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("vuegen")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_basic_args() {
    let args = make_args(&["generate", "component", "my-widget"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.action, "generate");
    assert_eq!(parsed.object_type, "component");
    assert_eq!(parsed.name, "my-widget");
    assert_eq!(parsed.structure, StructureMode::Single);
    assert!(!parsed.verbose);
}

#[test]
fn test_structure_flag() {
    let args = make_args(&["generate", "component", "my-widget", "--f=multi"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.structure, StructureMode::Multi);
}

#[test]
fn test_structure_flag_single() {
    let args = make_args(&["g", "c", "my-widget", "--f", "single"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.structure, StructureMode::Single);
}

#[test]
fn test_verbose_flag() {
    let args = make_args(&["generate", "model", "user", "--verbose"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.verbose);
}

#[test]
fn test_invalid_structure_value() {
    let args = make_args(&["generate", "component", "my-widget", "--f=both"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_missing_args() {
    let args = make_args(&["generate", "component"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_too_many_args() {
    let args = make_args(&["generate", "component", "my-widget", "extra"]);
    assert!(Args::try_parse_from(args).is_err());
}
