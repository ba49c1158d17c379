use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand, ValueEnum};
use nextgen::api::{ApiClient, ApiError, RequestOptions};
use nextgen::config::{
    AppConfig, DEFAULT_API_BASE_URL, DEFAULT_STORAGE_PATH, DEFAULT_USER_DIRECTORY_URL, normalize_url,
};
use nextgen::constants::{APP_DESCRIPTION, APP_NAME, APP_VERSION};
use nextgen::state::counter::Counter;
use nextgen::state::todos::{Filter, TodoList};
use nextgen::state::users::{User, UserDirectory};
use nextgen::storage::{DEFAULT_QUOTA_BYTES, FileStorage, StorageError};
use nextgen::store::PersistedStore;
use nextgen::theme::Theme;
use nextgen::util::format::{capitalize, format_date};
use nextgen::util::id::generate_id;
use nextgen::util::validate::validate_email;
use reqwest::Method;
use reqwest::header::{HeaderName, HeaderValue};
use serde_json::Value;
use time::OffsetDateTime;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("storage unavailable: {0}")]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("todo text is empty")]
    EmptyTodo,
    #[error("no todo with id {0}")]
    UnknownTodo(u64),
    #[error("user directory failed: {0}")]
    Directory(String),
}

#[derive(Parser, Debug)]
#[command(name = "nextgen", version, about = "NextGen theme, todo, counter and user directory front-end")]
struct Cli {
    /// JSON document backing persisted state.
    #[arg(long, env = "NEXTGEN_STORAGE_PATH", default_value = DEFAULT_STORAGE_PATH)]
    storage_path: PathBuf,

    /// Byte quota on persisted state.
    #[arg(long, env = "NEXTGEN_STORAGE_QUOTA_BYTES", default_value_t = DEFAULT_QUOTA_BYTES)]
    storage_quota_bytes: usize,

    /// Origin for `api` requests.
    #[arg(long, env = "NEXTGEN_API_BASE_URL", default_value = DEFAULT_API_BASE_URL, value_parser = normalize_url)]
    api_base_url: String,

    /// Origin serving `/users`.
    #[arg(
        long,
        env = "NEXTGEN_USER_DIRECTORY_URL",
        default_value = DEFAULT_USER_DIRECTORY_URL,
        value_parser = normalize_url
    )]
    user_directory_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show application name, version and today's date.
    About,
    Theme(ThemeCommand),
    Todo(TodoCommand),
    /// Apply counter steps in order and print the card caption.
    Counter {
        #[arg(value_enum)]
        steps: Vec<CounterStep>,
    },
    /// Fetch and print the user directory.
    Users,
    /// Send one JSON request to the API origin.
    Api {
        #[arg(value_enum)]
        method: HttpMethod,
        path: String,
        /// JSON body for POST and PUT.
        #[arg(long)]
        data: Option<String>,
    },
}

#[derive(Args, Debug)]
struct ThemeCommand {
    #[command(subcommand)]
    command: Option<ThemeSubcommand>,
}

#[derive(Subcommand, Debug)]
enum ThemeSubcommand {
    Show,
    Toggle,
}

#[derive(Args, Debug)]
struct TodoCommand {
    #[command(subcommand)]
    command: TodoSubcommand,
}

#[derive(Subcommand, Debug)]
enum TodoSubcommand {
    List {
        #[arg(long, default_value_t = Filter::All)]
        filter: Filter,
    },
    Add {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    Toggle {
        id: u64,
    },
    Delete {
        id: u64,
    },
    ClearCompleted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum CounterStep {
    Increment,
    Decrement,
    Reset,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl From<HttpMethod> for Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "command failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = cli.config();

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    match cli.command {
        Command::About => {
            let today = OffsetDateTime::now_utc().date();
            println!("{APP_NAME} {APP_VERSION}");
            println!("{APP_DESCRIPTION}");
            println!("{}", format_date(today));
            Ok(())
        }
        Command::Theme(cmd) => {
            let store = open_store(&config)?;
            run_theme(&store, cmd.command.unwrap_or(ThemeSubcommand::Show));
            Ok(())
        }
        Command::Todo(cmd) => {
            let store = open_store(&config)?;
            run_todo(&store, cmd.command)
        }
        Command::Counter { steps } => {
            println!("{}", run_counter(&steps).label());
            Ok(())
        }
        Command::Users => run_users(&config, &cancel).await,
        Command::Api { method, path, data } => run_api(&config, method, &path, data.as_deref(), &cancel).await,
    }
}

impl Cli {
    fn config(&self) -> AppConfig {
        AppConfig {
            storage_path: self.storage_path.clone(),
            storage_quota_bytes: self.storage_quota_bytes,
            api_base_url: self.api_base_url.clone(),
            user_directory_url: self.user_directory_url.clone(),
        }
    }
}

fn open_store(config: &AppConfig) -> Result<PersistedStore, CliError> {
    let medium = FileStorage::open(&config.storage_path)?.with_quota(config.storage_quota_bytes);
    Ok(PersistedStore::new(Arc::new(medium)))
}

// =============================================================================
// COMMANDS
// =============================================================================

fn run_theme(store: &PersistedStore, command: ThemeSubcommand) {
    let mut theme = Theme::load(store);
    if matches!(command, ThemeSubcommand::Toggle) {
        theme.toggle();
    }
    let snapshot = theme.get_theme();
    println!("{} {}", capitalize(snapshot.flag.as_str()), snapshot.flag.toggle_icon());
    println!("  primary     {}", snapshot.config.primary);
    println!("  secondary   {}", snapshot.config.secondary);
    println!("  background  {}", snapshot.config.background);
    println!("  text        {}", snapshot.config.text);
}

fn run_todo(store: &PersistedStore, command: TodoSubcommand) -> Result<(), CliError> {
    let mut todos = TodoList::load(store);
    match command {
        TodoSubcommand::List { filter } => {
            let counts = todos.counts();
            println!("All ({}) | Active ({}) | Completed ({})", counts.all, counts.active, counts.completed);
            if let Some(message) = todos.empty_message(filter) {
                println!("{message}");
            }
            for todo in todos.visible(filter) {
                let mark = if todo.completed { 'x' } else { ' ' };
                println!("[{mark}] {:>13}  {}", todo.id, todo.text);
            }
        }
        TodoSubcommand::Add { text } => {
            let id = todos.add(&text.join(" ")).ok_or(CliError::EmptyTodo)?;
            println!("{id}");
        }
        TodoSubcommand::Toggle { id } => {
            if !todos.toggle(id) {
                return Err(CliError::UnknownTodo(id));
            }
        }
        TodoSubcommand::Delete { id } => {
            if !todos.delete(id) {
                return Err(CliError::UnknownTodo(id));
            }
        }
        TodoSubcommand::ClearCompleted => {
            println!("cleared {}", todos.clear_completed());
        }
    }
    Ok(())
}

fn run_counter(steps: &[CounterStep]) -> Counter {
    let mut counter = Counter::new();
    for step in steps {
        match step {
            CounterStep::Increment => counter.increment(),
            CounterStep::Decrement => counter.decrement(),
            CounterStep::Reset => counter.reset(),
        }
    }
    counter
}

async fn run_users(config: &AppConfig, cancel: &CancellationToken) -> Result<(), CliError> {
    let client = ApiClient::new(&config.user_directory_url)?;
    let mut directory = UserDirectory::new();
    directory.load(&client, cancel).await;

    if let Some(message) = directory.error() {
        return Err(CliError::Directory(message.to_owned()));
    }
    for user in directory.users() {
        println!("{}", user_line(user));
    }
    Ok(())
}

fn user_line(user: &User) -> String {
    let flag = if validate_email(&user.email) { "" } else { " (invalid email)" };
    format!("{} <{}>{flag} | {} | {}", user.name, user.email, user.address.city, user.company.name)
}

async fn run_api(
    config: &AppConfig,
    method: HttpMethod,
    path: &str,
    data: Option<&str>,
    cancel: &CancellationToken,
) -> Result<(), CliError> {
    let client = ApiClient::new(&config.api_base_url)?;
    let request_id = generate_id();
    let mut options = RequestOptions::new();
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        options = options.with_header(HeaderName::from_static("x-request-id"), value);
    }
    info!(%request_id, path, "sending api request");
    let body: Option<Value> = data.map(serde_json::from_str).transpose()?;

    let response: Value = match (method, body) {
        (HttpMethod::Post, Some(body)) => client.post(path, &body, &options, cancel).await?,
        (HttpMethod::Put, Some(body)) => client.put(path, &body, &options, cancel).await?,
        (method, body) => {
            let body = body.map(|b| b.to_string());
            client.request(method.into(), path, body, &options, cancel).await?
        }
    };
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
