use clap::CommandFactory;

use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("portal-cli").chain(args.iter().copied())).unwrap()
}

#[test]
fn command_tree_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn base_url_flag_selects_backend() {
    let cli = parse(&["--base-url", DEFAULT_API_BASE, "projects", "count"]);
    assert_eq!(cli.base_url, "http://localhost:8087/api");
    assert!(matches!(cli.command, Command::Projects(ProjectsCommand { command: ProjectsSubcommand::Count })));
}

#[test]
fn approve_defaults_to_permanent_role() {
    let cli = parse(&["--token", "t", "users", "approve", "ana@lab.org"]);
    assert_eq!(cli.token.as_deref(), Some("t"));
    match cli.command {
        Command::Users(UsersCommand { command: UsersSubcommand::Approve { email, role } }) => {
            assert_eq!(email, "ana@lab.org");
            assert_eq!(role, "PERMANENT");
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn recent_uploads_default_to_one_week() {
    let cli = parse(&["files", "recent"]);
    match cli.command {
        Command::Files(FilesCommand { command: FilesSubcommand::Recent { days } }) => assert_eq!(days, 7),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn event_search_args_build_filter() {
    let cli = parse(&["events", "search", "--location", "Paris", "--budget-min", "100", "--budget-max", "900"]);
    let Command::Events(EventsCommand { command: EventsSubcommand::Search(args) }) = cli.command else {
        panic!("expected events search");
    };
    let filter = args.to_filter().unwrap();
    assert_eq!(filter.location, "Paris");
    assert_eq!(filter.budget, Some((100.0, 900.0)));
}

#[test]
fn project_search_rejects_minimum_without_maximum() {
    let args = ProjectSearchArgs { budget_min: "10".to_owned(), ..ProjectSearchArgs::default() };
    let err = args.to_filter().unwrap_err();
    assert!(matches!(err, CliError::Invalid(ref list) if list[0].field == "budgetMax"));
}

#[test]
fn file_search_maps_type_flag() {
    let cli = parse(&["files", "search", "--type", "dataset", "--keyword", "genome"]);
    let Command::Files(FilesCommand { command: FilesSubcommand::Search(args) }) = cli.command else {
        panic!("expected files search");
    };
    let filter = args.to_filter();
    assert_eq!(filter.file_type, "dataset");
    assert_eq!(filter.keyword, "genome");
}

#[test]
fn upload_args_validate_as_library_metadata() {
    let cli = parse(&[
        "files", "upload", "paper.pdf", "--title", "Genomes", "--authors", "Ada, Alan", "--keywords", "dna",
        "--date", "2024-03-01", "--abstract", "Short abstract", "--type", "report",
    ]);
    let Command::Files(FilesCommand { command: FilesSubcommand::Upload(args) }) = cli.command else {
        panic!("expected files upload");
    };
    let meta = args.to_form().to_metadata(UploadRules::Library).unwrap();
    assert_eq!(meta.authors, ["Ada", "Alan"]);
    assert_eq!(meta.file_type, "report");
}

#[test]
fn upload_owner_prefers_explicit_email() {
    assert_eq!(upload_owner(Some(" ana@lab.org "), None), Some("ana@lab.org".to_owned()));
    assert_eq!(upload_owner(Some(""), None), None);
    assert_eq!(upload_owner(None, Some("not-a-jwt")), None);
}

#[test]
fn invalid_input_lists_every_field() {
    let err = CliError::Invalid(vec![FieldError::new("title", "Title is required"), FieldError::new("date", "bad")]);
    assert_eq!(err.to_string(), "invalid input: title: Title is required; date: bad");
}
