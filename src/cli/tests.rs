use super::*;
use clap::CommandFactory;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("wordpart").chain(args.iter().copied())).unwrap()
}

fn run(args: &[&str]) -> String {
    let cli = parse(args);
    let mut config = Config::default();
    if let Some(separators) = &cli.separators {
        config.editor.word_separators = separators.clone();
    }
    cli.command.execute(config).unwrap().unwrap()
}

#[test]
fn test_cli_definition() {
    Cli::command().debug_assert();
}

// =============================================================================
// Argument Parsing Tests
// =============================================================================

#[test]
fn test_parse_scan() {
    let cli = parse(&["scan", "left", "--at", "2:5", "--text", "abc"]);
    let Commands::Scan(args) = cli.command else {
        panic!("expected scan");
    };
    assert_eq!(args.direction, Side::Left);
    assert_eq!(args.at, Position::new(2, 5));
    assert_eq!(args.source.text.as_deref(), Some("abc"));
}

#[test]
fn test_parse_global_flags_after_subcommand() {
    let cli = parse(&["segment", "--text", "a", "-vv", "--separators", "-_"]);
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.separators.as_deref(), Some("-_"));
}

#[test]
fn test_parse_apply_commands_and_carets() {
    let cli = parse(&[
        "apply",
        "move-right",
        "skrJpWordHandler.deleteWordPartLeft",
        "--caret",
        "0:1",
        "--caret",
        "1:0..1:4",
        "--text",
        "x",
    ]);
    let Commands::Apply(args) = cli.command else {
        panic!("expected apply");
    };
    assert_eq!(args.commands, vec![Command::MoveRight, Command::DeleteLeft]);
    assert_eq!(
        args.carets,
        vec![
            Selection::caret(Position::new(0, 1)),
            Selection::new(Position::new(1, 0), Position::new(1, 4)),
        ]
    );
    assert!(!args.undo);
}

#[test]
fn test_parse_rejects_bad_input() {
    let bad: [&[&str]; 5] = [
        &["apply", "jump-left", "--text", "x"],
        &["apply", "--text", "x"],
        &["scan", "up", "--text", "x"],
        &["scan", "left", "--at", "3", "--text", "x"],
        &["segment", "--text", "x", "--file", "y.txt"],
    ];
    for args in bad {
        let argv = std::iter::once("wordpart").chain(args.iter().copied());
        assert!(Cli::try_parse_from(argv).is_err(), "accepted {args:?}");
    }
}

// =============================================================================
// Command Output Tests
// =============================================================================

#[test]
fn test_scan_output() {
    assert_eq!(
        run(&["scan", "right", "--at", "0:0", "--text", "fooBar bazQux"]),
        "0:3"
    );
    assert_eq!(
        run(&["scan", "left", "--at", "0:13", "--text", "fooBar bazQux"]),
        "0:10"
    );
    // Line end wraps to the next line
    assert_eq!(run(&["scan", "right", "--at", "0:2", "--text", "ab\ncd"]), "1:0");
}

#[test]
fn test_scan_clamps_caret() {
    assert_eq!(run(&["scan", "right", "--at", "9:9", "--text", "ab\ncd"]), "1:2");
}

#[test]
fn test_segment_output() {
    assert_eq!(run(&["segment", "--text", "fooBar baz"]), "foo|Bar| |baz");
    assert_eq!(
        run(&["segment", "--text", "parseXMLDoc\nあいうカタカナ漢字"]),
        "parse|XML|Doc\nあいう|カタカナ|漢字"
    );
    assert_eq!(run(&["segment", "--text", "a\n\nb"]), "a\n\nb");
}

#[test]
fn test_segment_separators() {
    assert_eq!(run(&["segment", "--text", "foo.bar()"]), "foo|.|bar|()");
    assert_eq!(
        run(&["segment", "--text", "abcxdef", "--separators", "x"]),
        "abc|x|def"
    );
}

#[test]
fn test_apply_delete_and_undo() {
    let args = [
        "apply",
        "delete-left",
        "--caret",
        "0:6",
        "--caret",
        "0:13",
        "--text",
        "fooBar bazQux",
    ];
    assert_eq!(run(&args), "foo baz\n0:3 0:7");

    let mut with_undo = args.to_vec();
    with_undo.push("--undo");
    assert_eq!(run(&with_undo), "fooBar bazQux\n0:6 0:13");
}

#[test]
fn test_apply_moves_and_extends() {
    assert_eq!(
        run(&["apply", "move-right", "move-right", "--text", "fooBar bazQux"]),
        "fooBar bazQux\n0:6"
    );
    assert_eq!(
        run(&["apply", "extend-right", "--caret", "0:0", "--text", "fooBar"]),
        "fooBar\n0:0..0:3"
    );
}

#[test]
fn test_apply_reports_nothing_to_undo() {
    let cli = parse(&["apply", "move-right", "--undo", "--text", "abc"]);
    let err = cli.command.execute(Config::default()).unwrap_err();
    assert!(err.to_string().contains("Already at oldest change"));
}

#[test]
fn test_apply_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.txt");
    std::fs::write(&path, "fooBar\r\nbaz").unwrap();
    let path = path.to_str().unwrap();

    assert_eq!(
        run(&["apply", "delete-right", "--file", path]),
        "Bar\r\nbaz\n0:0"
    );
    // The file itself is left alone
    assert_eq!(std::fs::read_to_string(path).unwrap(), "fooBar\r\nbaz");
}

#[test]
fn test_missing_file_is_an_error() {
    let cli = parse(&["segment", "--file", "/nonexistent/wordpart/doc.txt"]);
    let err = cli.command.execute(Config::default()).unwrap_err();
    assert!(err.to_string().contains("cannot read"));
}

// =============================================================================
// Configuration Tests
// =============================================================================

#[test]
fn test_load_config_file_and_override() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[editor]\nword_separators = \"x\"\ntab_width = 8\n").unwrap();
    let path = path.to_str().unwrap();

    let cli = parse(&["--config", path, "config"]);
    let config = cli.load_config().unwrap();
    assert_eq!(config.editor.word_separators, "x");
    assert_eq!(config.editor.tab_width, 8);

    let cli = parse(&["--config", path, "--separators", "", "config"]);
    let config = cli.load_config().unwrap();
    assert_eq!(config.editor.word_separators, "");
    assert_eq!(config.editor.tab_width, 8);
}

#[test]
fn test_config_command_prints_toml() {
    let output = run(&["config"]);
    assert!(output.contains("[editor]"));
    assert!(output.contains("tab_width = 4"));
    let parsed = Config::from_toml_str(&output).unwrap();
    assert_eq!(parsed, Config::default());
}

#[test]
fn test_load_config_missing_file() {
    let cli = parse(&["--config", "/nonexistent/wordpart.toml", "config"]);
    assert!(cli.load_config().is_err());
}
