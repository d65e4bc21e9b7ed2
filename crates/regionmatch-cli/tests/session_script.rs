use regionmatch_cli::session::Session;
use regionmatch_core::{Dataset, Settings};
use std::io::Cursor;

fn run(script: &str) -> String {
    let db = Dataset::bundled().unwrap();
    let mut out = Vec::new();
    Session::new(db, Settings::default())
        .run(Cursor::new(script), &mut out)
        .unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn scripted_session_renders_tables() {
    let out = run("texas\naxis pop\nland km\nquit\nselect Ohio\n");
    assert!(out.contains("Comparables for Texas (US), by Population"));
    assert!(out.contains("Land (sq km)"));
    // Nothing after quit is processed.
    assert!(!out.contains("Region: Ohio"));
}

#[test]
fn help_lists_commands() {
    let out = run("help\n");
    assert!(out.contains("axis <land|pop|gdp|hdi>"));
}

#[test]
fn unmatched_text_is_reported() {
    let out = run("zzz\n");
    assert!(out.contains("No region matches 'zzz'"));
}

#[test]
fn settings_seed_the_session() {
    let db = Dataset::bundled().unwrap();
    let settings = Settings::from_json_str(r#"{"axis":"hdi","candidates":2}"#).unwrap();
    let mut out = Vec::new();
    Session::new(db, settings)
        .run(Cursor::new("Norway\n"), &mut out)
        .unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("by HDI"));
    let rows = text.lines().filter(|l| l.contains('%')).count();
    assert_eq!(rows, 2);
}
