//! `portal-cli`: terminal access to the research portal REST backend.

mod client;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use records::endpoints::{self, DEFAULT_API_BASE};
use records::forms::{FileForm, UploadRules};
use records::search::{EventFilter, FileFilter, FilterOutcome, ProjectFilter, parse_budget_range};
use records::token::decode_claims;
use records::{ApiError, Event, FieldError, FileDocument, LoginRequest, Project, Role, User};
use serde::Serialize;

use crate::client::{PortalClient, mime_for};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("missing token; pass --token or set PORTAL_TOKEN")]
    MissingToken,
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("invalid input: {}", join_fields(.0))]
    Invalid(Vec<FieldError>),
    #[error("failed to read {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

fn join_fields(errors: &[FieldError]) -> String {
    errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

#[derive(Parser, Debug)]
#[command(name = "portal-cli", about = "Research portal REST CLI")]
struct Cli {
    #[arg(long, env = "PORTAL_API_BASE_URL", default_value = DEFAULT_API_BASE)]
    base_url: String,

    #[arg(long, env = "PORTAL_TOKEN")]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Exchange credentials for a bearer token and print it.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "PORTAL_PASSWORD")]
        password: String,
    },
    Users(UsersCommand),
    Events(EventsCommand),
    Projects(ProjectsCommand),
    Files(FilesCommand),
    Admin(AdminCommand),
}

#[derive(Args, Debug)]
struct UsersCommand {
    #[command(subcommand)]
    command: UsersSubcommand,
}

#[derive(Subcommand, Debug)]
enum UsersSubcommand {
    List,
    Show {
        email: String,
    },
    /// Approve a pending account.
    Approve {
        email: String,
        #[arg(long, default_value = "PERMANENT")]
        role: String,
    },
    Decline {
        email: String,
    },
    /// Change an account's role.
    Role {
        email: String,
        role: String,
    },
}

#[derive(Args, Debug)]
struct EventsCommand {
    #[command(subcommand)]
    command: EventsSubcommand,
}

#[derive(Subcommand, Debug)]
enum EventsSubcommand {
    List,
    Show {
        id: String,
    },
    Upcoming,
    Search(EventSearchArgs),
}

#[derive(Args, Debug, Default)]
struct EventSearchArgs {
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    location: String,
    #[arg(long, default_value = "")]
    status: String,
    #[arg(long, default_value = "")]
    budget_min: String,
    #[arg(long, default_value = "")]
    budget_max: String,
    /// `YYYY-MM-DD`
    #[arg(long, default_value = "")]
    start_after: String,
    /// `YYYY-MM-DD`
    #[arg(long, default_value = "")]
    end_before: String,
}

impl EventSearchArgs {
    fn to_filter(&self) -> Result<EventFilter, CliError> {
        Ok(EventFilter {
            name: self.name.clone(),
            location: self.location.clone(),
            status: self.status.clone(),
            budget: parse_budget_range(&self.budget_min, &self.budget_max).map_err(|e| CliError::Invalid(vec![e]))?,
            start_after: self.start_after.clone(),
            end_before: self.end_before.clone(),
        })
    }
}

#[derive(Args, Debug)]
struct ProjectsCommand {
    #[command(subcommand)]
    command: ProjectsSubcommand,
}

#[derive(Subcommand, Debug)]
enum ProjectsSubcommand {
    List,
    Show {
        id: String,
    },
    Search(ProjectSearchArgs),
    Count,
}

#[derive(Args, Debug, Default)]
struct ProjectSearchArgs {
    /// Matched locally against name, description and status.
    #[arg(long, default_value = "")]
    text: String,
    #[arg(long, default_value = "")]
    status: String,
    #[arg(long, default_value = "")]
    budget_min: String,
    #[arg(long, default_value = "")]
    budget_max: String,
    #[arg(long, default_value = "")]
    start_after: String,
    #[arg(long, default_value = "")]
    end_before: String,
}

impl ProjectSearchArgs {
    fn to_filter(&self) -> Result<ProjectFilter, CliError> {
        Ok(ProjectFilter {
            text: self.text.clone(),
            status: self.status.clone(),
            budget: parse_budget_range(&self.budget_min, &self.budget_max).map_err(|e| CliError::Invalid(vec![e]))?,
            start_after: self.start_after.clone(),
            end_before: self.end_before.clone(),
        })
    }
}

#[derive(Args, Debug)]
struct FilesCommand {
    #[command(subcommand)]
    command: FilesSubcommand,
}

#[derive(Subcommand, Debug)]
enum FilesSubcommand {
    List,
    /// Uploads of the last few days across all users.
    Recent {
        #[arg(long, default_value_t = 7)]
        days: u32,
    },
    Search(FileSearchArgs),
    Types,
    Upload(UploadArgs),
}

#[derive(Args, Debug, Default)]
struct FileSearchArgs {
    #[arg(long, default_value = "")]
    title: String,
    #[arg(long, default_value = "")]
    keyword: String,
    #[arg(long, default_value = "")]
    author: String,
    #[arg(long = "type", default_value = "")]
    file_type: String,
    #[arg(long, default_value = "")]
    date_after: String,
    #[arg(long, default_value = "")]
    date_before: String,
}

impl FileSearchArgs {
    fn to_filter(&self) -> FileFilter {
        FileFilter {
            title: self.title.clone(),
            keyword: self.keyword.clone(),
            author: self.author.clone(),
            file_type: self.file_type.clone(),
            date_after: self.date_after.clone(),
            date_before: self.date_before.clone(),
        }
    }
}

#[derive(Args, Debug)]
struct UploadArgs {
    path: PathBuf,
    /// Owner account; defaults to the token subject.
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    title: String,
    /// Comma-separated.
    #[arg(long)]
    authors: String,
    #[arg(long, default_value = "")]
    affiliations: String,
    #[arg(long)]
    keywords: String,
    /// `YYYY-MM-DD`
    #[arg(long)]
    date: String,
    #[arg(long = "abstract")]
    abstract_text: String,
    #[arg(long, default_value = "")]
    doi: String,
    #[arg(long = "type", default_value = "")]
    file_type: String,
}

impl UploadArgs {
    fn to_form(&self) -> FileForm {
        FileForm {
            title: self.title.clone(),
            authors: self.authors.clone(),
            affiliations: self.affiliations.clone(),
            keywords: self.keywords.clone(),
            publication_date: self.date.clone(),
            abstract_text: self.abstract_text.clone(),
            doi: self.doi.clone(),
            file_type: self.file_type.clone(),
            custom_file_type: String::new(),
        }
    }
}

#[derive(Args, Debug)]
struct AdminCommand {
    #[command(subcommand)]
    command: AdminSubcommand,
}

#[derive(Subcommand, Debug)]
enum AdminSubcommand {
    /// Users per role, files and projects.
    Counts,
    /// Plain-text activity summary.
    Report,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let client = PortalClient::new(&cli.base_url, cli.token)?;

    match cli.command {
        Command::Login { email, password } => run_login(&client, email, password).await,
        Command::Users(users) => run_users(&client, users).await,
        Command::Events(events) => run_events(&client, events).await,
        Command::Projects(projects) => run_projects(&client, projects).await,
        Command::Files(files) => run_files(&client, files).await,
        Command::Admin(admin) => run_admin(&client, admin).await,
    }
}

async fn run_login(client: &PortalClient, email: String, password: String) -> Result<(), CliError> {
    let req = LoginRequest { email: email.trim().to_owned(), password };
    let errors = records::forms::validate_login(&req);
    if !errors.is_empty() {
        return Err(CliError::Invalid(errors));
    }
    let token = client.text(&endpoints::users::login(), Some(&req)).await?;
    println!("{}", token.trim());
    Ok(())
}

async fn run_users(client: &PortalClient, users: UsersCommand) -> Result<(), CliError> {
    match users.command {
        UsersSubcommand::List => {
            let list: Vec<User> = client.get(&endpoints::users::list()).await?;
            print_json(&list)
        }
        UsersSubcommand::Show { email } => {
            let user: User = client.get(&endpoints::users::by_email(&email)).await?;
            print_json(&user)
        }
        UsersSubcommand::Approve { email, role } => {
            client.require_token()?;
            let role = Role::from(role);
            let user: User = client.json::<(), _>(&endpoints::admin::approve(&email, role.as_str()), None).await?;
            print_json(&user)
        }
        UsersSubcommand::Decline { email } => {
            client.require_token()?;
            let user: User = client.json::<(), _>(&endpoints::admin::decline(&email), None).await?;
            print_json(&user)
        }
        UsersSubcommand::Role { email, role } => {
            client.require_token()?;
            let role = Role::from(role);
            let user: User = client.json::<(), _>(&endpoints::users::update_role(&email, role.as_str()), None).await?;
            print_json(&user)
        }
    }
}

async fn run_events(client: &PortalClient, events: EventsCommand) -> Result<(), CliError> {
    match events.command {
        EventsSubcommand::List => {
            let list: Vec<Event> = client.get(&endpoints::events::list()).await?;
            print_json(&list)
        }
        EventsSubcommand::Show { id } => {
            let event: Event = client.get(&endpoints::events::by_id(&id)).await?;
            print_json(&event)
        }
        EventsSubcommand::Upcoming => {
            let list: Vec<Event> = client.get(&endpoints::events::upcoming()).await?;
            print_json(&list)
        }
        EventsSubcommand::Search(args) => {
            let filter = args.to_filter()?;
            let base: Vec<Event> = client.get(&endpoints::events::list()).await?;
            let outcome = client.apply_filter(&filter, &base).await?;
            print_outcome(&outcome)
        }
    }
}

async fn run_projects(client: &PortalClient, projects: ProjectsCommand) -> Result<(), CliError> {
    match projects.command {
        ProjectsSubcommand::List => {
            let list: Vec<Project> = client.get(&endpoints::projects::list()).await?;
            print_json(&list)
        }
        ProjectsSubcommand::Show { id } => {
            let project: Project = client.get(&endpoints::projects::by_id(&id)).await?;
            print_json(&project)
        }
        ProjectsSubcommand::Search(args) => {
            let filter = args.to_filter()?;
            let base: Vec<Project> = client.get(&endpoints::projects::list()).await?;
            let outcome = client.apply_filter(&filter, &base).await?;
            print_outcome(&outcome)
        }
        ProjectsSubcommand::Count => {
            let count: u64 = client.get(&endpoints::projects::count()).await?;
            println!("{count}");
            Ok(())
        }
    }
}

async fn run_files(client: &PortalClient, files: FilesCommand) -> Result<(), CliError> {
    match files.command {
        FilesSubcommand::List => {
            let list: Vec<FileDocument> = client.get(&endpoints::files::list()).await?;
            print_json(&list)
        }
        FilesSubcommand::Recent { days } => {
            let list: Vec<FileDocument> = client.get(&endpoints::users::recent_uploads(days)).await?;
            print_json(&list)
        }
        FilesSubcommand::Search(args) => {
            let filter = args.to_filter();
            let base: Vec<FileDocument> = client.get(&endpoints::files::list()).await?;
            let outcome = client.apply_filter(&filter, &base).await?;
            print_outcome(&outcome)
        }
        FilesSubcommand::Types => {
            let types: Vec<String> = client.get(&endpoints::files::types()).await?;
            for file_type in types {
                println!("{file_type}");
            }
            Ok(())
        }
        FilesSubcommand::Upload(args) => run_upload(client, args).await,
    }
}

async fn run_upload(client: &PortalClient, args: UploadArgs) -> Result<(), CliError> {
    let meta = args.to_form().to_metadata(UploadRules::Library).map_err(CliError::Invalid)?;
    let email = upload_owner(args.email.as_deref(), client.token()).ok_or(ApiError::MissingSession)?;

    let bytes = tokio::fs::read(&args.path)
        .await
        .map_err(|source| CliError::Io { path: args.path.clone(), source })?;
    let name = args
        .path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload")
        .to_owned();
    let part = reqwest::multipart::Part::bytes(bytes).file_name(name).mime_str(mime_for(&args.path))?;
    let form = meta
        .multipart_fields()
        .into_iter()
        .fold(reqwest::multipart::Form::new().part("file", part), |form, (key, value)| form.text(key, value));

    let owner: User = client.multipart(&endpoints::users::upload(&email), form).await?;
    match owner.uploads.last() {
        Some(doc) => print_json(doc),
        None => print_json(&owner),
    }
}

/// Upload owner: the explicit email, else the token subject.
fn upload_owner(explicit: Option<&str>, token: Option<&str>) -> Option<String> {
    explicit
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(str::to_owned)
        .or_else(|| token.and_then(decode_claims).map(|c| c.sub))
}

async fn run_admin(client: &PortalClient, admin: AdminCommand) -> Result<(), CliError> {
    client.require_token()?;
    match admin.command {
        AdminSubcommand::Counts => {
            for role in Role::assignable() {
                let count: u64 = client.get(&endpoints::admin::count_users(role.as_str())).await?;
                println!("users.{}: {count}", role.as_str());
            }
            let files: u64 = client.get(&endpoints::admin::count_files()).await?;
            let projects: u64 = client.get(&endpoints::projects::count()).await?;
            println!("files: {files}");
            println!("projects: {projects}");
            Ok(())
        }
        AdminSubcommand::Report => {
            let report = client.text::<()>(&endpoints::admin::summary_report(), None).await?;
            println!("{report}");
            Ok(())
        }
    }
}

fn print_outcome<T: Serialize>(outcome: &FilterOutcome<T>) -> Result<(), CliError> {
    if let Some(message) = &outcome.message {
        eprintln!("{message}");
    }
    print_json(&outcome.items)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
