use clap::Parser;
use filmkatalog::menu::ScriptedPrompter;
use filmkatalog::storage::MemoryStorage;
use filmkatalog::tooling::cli::{Cli, CliContext, Commands, OutputFormat};
use filmkatalog::CatalogError;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

use crate::support::test_config;

fn context_in(temp: &TempDir) -> CliContext {
    let config = test_config("filme.json".into());
    CliContext::new(config, temp.path())
}

fn add_command(title: &str, rating: u8) -> Commands {
    Commands::Add {
        title: title.to_string(),
        director: "Wachowski".to_string(),
        year: 1999,
        genre: "Sci-Fi".to_string(),
        rating,
    }
}

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["filmkatalog"],
        vec!["filmkatalog", "menu"],
        vec!["filmkatalog", "list"],
        vec!["filmkatalog", "list", "--format", "json"],
        vec!["filmkatalog", "search", "matrix"],
        vec!["filmkatalog", "--file", "other.json", "search", "", "--format", "text"],
        vec![
            "filmkatalog", "add", "Matrix", "--director", "Wachowski", "--year", "1999",
            "--genre", "Sci-Fi", "--rating", "5",
        ],
        vec!["filmkatalog", "add", "Untitled", "--year", "2020", "--rating", "1"],
        vec!["filmkatalog", "remove", "Matrix"],
        vec!["filmkatalog", "--log-output", "stderr", "--log-level", "debug", "list"],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_rejects_out_of_range_rating_and_bad_year() {
    for rating in ["0", "6", "five"] {
        let parsed = Cli::try_parse_from([
            "filmkatalog", "add", "Matrix", "--year", "1999", "--rating", rating,
        ]);
        assert!(parsed.is_err(), "rating {rating} should be rejected");
    }
    let parsed = Cli::try_parse_from([
        "filmkatalog", "add", "Matrix", "--year", "neunzehn", "--rating", "3",
    ]);
    assert!(parsed.is_err());
    let parsed = Cli::try_parse_from(["filmkatalog", "list", "--format", "yaml"]);
    assert!(parsed.is_err());
}

#[test]
fn one_shot_commands_persist_between_runs() {
    let temp = TempDir::new().unwrap();

    let output = context_in(&temp).execute(&add_command("Matrix", 5)).unwrap();
    assert_eq!(output, "'Matrix' was added to the catalog.");
    assert!(temp.path().join("filme.json").exists());

    let duplicate = context_in(&temp).execute(&add_command("Matrix", 3));
    assert!(matches!(duplicate, Err(CatalogError::AlreadyExists(_))));

    let listed = context_in(&temp)
        .execute(&Commands::List {
            format: OutputFormat::Json,
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&listed).unwrap();
    let rows = parsed.as_array().expect("list output should be an array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["title"], "Matrix");
    assert_eq!(rows[0]["rating"], 5);

    let removed = context_in(&temp)
        .execute(&Commands::Remove {
            title: "Matrix".to_string(),
        })
        .unwrap();
    assert!(removed.contains("removed"));

    let listed = context_in(&temp)
        .execute(&Commands::List {
            format: OutputFormat::Text,
        })
        .unwrap();
    assert_eq!(listed, "The catalog is empty.");
}

#[test]
fn search_text_output_reports_no_match() {
    let temp = TempDir::new().unwrap();
    context_in(&temp).execute(&add_command("Inception", 4)).unwrap();

    let hit = context_in(&temp)
        .execute(&Commands::Search {
            query: "INCEP".to_string(),
            format: OutputFormat::Text,
        })
        .unwrap();
    assert!(hit.contains("Inception"));

    let miss = context_in(&temp)
        .execute(&Commands::Search {
            query: "Matrix".to_string(),
            format: OutputFormat::Text,
        })
        .unwrap();
    assert_eq!(miss, "No movies found matching 'Matrix'.");
}

#[test]
fn remove_unknown_title_fails_without_writing() {
    let temp = TempDir::new().unwrap();
    let result = context_in(&temp).execute(&Commands::Remove {
        title: "Ghost".to_string(),
    });
    assert!(matches!(result, Err(CatalogError::NotFound(_))));
    assert!(!temp.path().join("filme.json").exists());
}

#[test]
fn one_shot_commands_never_overwrite_a_corrupt_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("filme.json");
    fs::write(&path, "not json at all").unwrap();

    let result = context_in(&temp).execute(&add_command("Matrix", 5));

    assert!(matches!(result, Err(CatalogError::LoadFailed { .. })));
    assert_eq!(fs::read_to_string(&path).unwrap(), "not json at all");
}

#[test]
fn one_shot_mutation_refuses_to_drop_invalid_records() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("filme.json");
    let original = r#"{"Kaputt": {"jahr": "irgendwann"}}"#;
    fs::write(&path, original).unwrap();

    let result = context_in(&temp).execute(&add_command("Matrix", 5));
    assert!(matches!(result, Err(CatalogError::LoadFailed { .. })));
    assert_eq!(fs::read_to_string(&path).unwrap(), original);

    // reading still works and shows the valid part
    let listed = context_in(&temp)
        .execute(&Commands::List {
            format: OutputFormat::Text,
        })
        .unwrap();
    assert_eq!(listed, "The catalog is empty.");
}

#[test]
fn menu_session_loads_and_saves_the_file() {
    let temp = TempDir::new().unwrap();
    context_in(&temp).execute(&add_command("Matrix", 5)).unwrap();

    let prompter = ScriptedPrompter::new([
        "1", "Lola rennt", "Tom Tykwer", "1998", "Thriller", "4", "4", "Matrix", "5",
    ]);
    let mut out = Vec::new();
    let summary = context_in(&temp).run_menu(prompter, &mut out).unwrap();

    let printed = String::from_utf8(out).unwrap();
    assert!(printed.starts_with("Loaded 1 movie(s)."));
    assert!(summary.starts_with("Saved 1 movie(s)"));

    let content = fs::read_to_string(temp.path().join("filme.json")).unwrap();
    assert!(content.contains("Lola rennt"));
    assert!(!content.contains("Matrix"));
}

#[test]
fn menu_session_saves_when_input_closes() {
    let storage = Arc::new(MemoryStorage::new());
    let context = CliContext::with_storage(test_config("unused.json".into()), storage.clone());

    let prompter = ScriptedPrompter::new(["1", "Heat", "Michael Mann", "1995", "Crime", "5"]);
    let mut out = Vec::new();
    context.run_menu(prompter, &mut out).unwrap();

    let printed = String::from_utf8(out).unwrap();
    assert!(printed.starts_with("No existing catalog found"));
    let document = storage.snapshot().expect("catalog should have been saved");
    assert!(document.contains_key("Heat"));
}

#[test]
fn menu_session_starts_empty_after_a_corrupt_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("filme.json"), "[]").unwrap();

    let mut out = Vec::new();
    context_in(&temp)
        .run_menu(ScriptedPrompter::new(["2", "5"]), &mut out)
        .unwrap();

    let printed = String::from_utf8(out).unwrap();
    assert!(printed.contains("Failed to load catalog"));
    assert!(printed.contains("Starting with an empty catalog."));
    assert!(printed.contains("The catalog is empty."));
}

#[test]
fn menu_exit_keeps_an_unreadable_file_aside() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("filme.json");
    let original = r#"{"Matrix": {"jahr": 1999,"#;
    fs::write(&path, original).unwrap();

    let mut out = Vec::new();
    context_in(&temp)
        .run_menu(ScriptedPrompter::new(["5"]), &mut out)
        .unwrap();

    let kept = temp.path().join("filme.json.corrupt");
    assert_eq!(fs::read_to_string(&kept).unwrap(), original);
    assert_eq!(fs::read_to_string(&path).unwrap(), "{}\n");
    let printed = String::from_utf8(out).unwrap();
    assert!(printed.contains("The previous catalog was kept as"));
    assert!(printed.contains("filme.json.corrupt"));
}

#[test]
fn menu_exit_keeps_a_file_with_rejected_records_aside() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("filme.json");
    let original = r#"{"Heat": {"jahr": 1995, "bewertung": 5}, "Kaputt": {"jahr": "irgendwann"}}"#;
    fs::write(&path, original).unwrap();

    let mut out = Vec::new();
    let summary = context_in(&temp)
        .run_menu(ScriptedPrompter::new(["5"]), &mut out)
        .unwrap();

    assert!(summary.starts_with("Saved 1 movie(s)"));
    assert_eq!(
        fs::read_to_string(temp.path().join("filme.json.corrupt")).unwrap(),
        original
    );
    let saved = fs::read_to_string(&path).unwrap();
    assert!(saved.contains("Heat"));
    assert!(!saved.contains("Kaputt"));
}

#[test]
fn menu_over_a_clean_file_keeps_nothing_aside() {
    let temp = TempDir::new().unwrap();
    context_in(&temp).execute(&add_command("Matrix", 5)).unwrap();

    let mut out = Vec::new();
    context_in(&temp)
        .run_menu(ScriptedPrompter::new(["5"]), &mut out)
        .unwrap();

    assert!(!temp.path().join("filme.json.corrupt").exists());
    assert!(!String::from_utf8(out).unwrap().contains("was kept as"));
}

#[test]
fn remove_trims_the_title_like_add() {
    let temp = TempDir::new().unwrap();
    context_in(&temp).execute(&add_command(" Heat ", 5)).unwrap();

    let removed = context_in(&temp)
        .execute(&Commands::Remove {
            title: " Heat ".to_string(),
        })
        .unwrap();

    assert_eq!(removed, "'Heat' was removed from the catalog.");
}
