use std::path::PathBuf;
use std::sync::Arc;

use ailap_console::api::{ai, auth, datasources, logs, models, monitors};
use ailap_console::config::ClientConfig;
use ailap_console::context::{ConsoleContext, StderrNotifier};
use ailap_console::error::{ApiError, ConfigError, StorageError};
use ailap_console::i18n::{Locale, translate};
use ailap_console::net::client::ApiClient;
use ailap_console::net::transport::ReqwestTransport;
use ailap_console::net::types::ApiResponse;
use ailap_console::routes::ROUTES;
use ailap_console::util::storage::FileStorage;
use ailap_console::util::theme::DocumentTheme;
use clap::{Args, Parser, Subcommand};
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("invalid JSON argument: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("unsupported locale `{0}`; expected zh-CN or en-US")]
    UnknownLocale(String),
    #[error("{0} not found")]
    NotFound(String),
}

#[derive(Parser, Debug)]
#[command(name = "ailap", about = "AILAP log-analysis console client")]
struct Cli {
    /// Backend URL; overrides AILAP_BASE_URL.
    #[arg(long)]
    base_url: Option<String>,

    /// Directory for the persisted session; overrides AILAP_STATE_DIR.
    #[arg(long)]
    state_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    Logout,
    Profile,
    /// Show session, preferences and endpoint.
    Status,
    Datasource(DataSourceCommand),
    Model(ModelCommand),
    Logs(LogsCommand),
    Ai(AiCommand),
    Monitor(MonitorCommand),
    Channel(ChannelCommand),
    Theme(ThemeCommand),
    /// Show or set the UI locale.
    Locale { tag: Option<String> },
    /// List console routes with localized titles.
    Routes,
    /// Navigate to a route, applying the auth guard.
    Open { path: String },
}

#[derive(Args, Debug)]
struct DataSourceCommand {
    #[command(subcommand)]
    command: DataSourceSubcommand,
}

#[derive(Subcommand, Debug)]
enum DataSourceSubcommand {
    List {
        #[arg(long)]
        params: Option<String>,
    },
    Get {
        id: String,
    },
    Create {
        #[arg(long)]
        data: String,
    },
    Update {
        id: String,
        #[arg(long)]
        data: String,
    },
    Delete {
        id: String,
    },
    /// Test a saved connection.
    Test {
        id: String,
    },
    /// Test an unsaved configuration.
    TestPayload {
        #[arg(long)]
        data: String,
    },
}

#[derive(Args, Debug)]
struct ModelCommand {
    #[command(subcommand)]
    command: ModelSubcommand,
}

#[derive(Subcommand, Debug)]
enum ModelSubcommand {
    List {
        #[arg(long)]
        params: Option<String>,
    },
    Create {
        #[arg(long)]
        data: String,
    },
    Update {
        id: String,
        #[arg(long)]
        data: String,
    },
    Delete {
        id: String,
    },
    Test {
        #[arg(long)]
        data: String,
    },
    Enable {
        id: String,
        #[arg(long, action = clap::ArgAction::Set, default_value_t = true)]
        enabled: bool,
    },
    #[command(name = "default")]
    SetDefault {
        id: String,
    },
}

#[derive(Args, Debug)]
struct LogsCommand {
    #[command(subcommand)]
    command: LogsSubcommand,
}

#[derive(Subcommand, Debug)]
enum LogsSubcommand {
    Query {
        #[arg(long)]
        params: Option<String>,
    },
    Suggestions {
        #[arg(long)]
        params: Option<String>,
    },
    LabelValues {
        #[arg(long)]
        params: Option<String>,
    },
    History {
        #[arg(long)]
        params: Option<String>,
    },
    Inspect {
        #[arg(long)]
        params: Option<String>,
    },
    Favorite {
        id: String,
    },
    Note {
        id: String,
        #[arg(long)]
        note: String,
    },
    Delete {
        id: String,
    },
}

#[derive(Args, Debug)]
struct AiCommand {
    #[command(subcommand)]
    command: AiSubcommand,
}

#[derive(Subcommand, Debug)]
enum AiSubcommand {
    Analyze {
        #[arg(long)]
        data: String,
    },
}

#[derive(Args, Debug)]
struct MonitorCommand {
    #[command(subcommand)]
    command: MonitorSubcommand,
}

#[derive(Subcommand, Debug)]
enum MonitorSubcommand {
    List {
        #[arg(long)]
        params: Option<String>,
    },
    Get {
        id: String,
    },
    Create {
        #[arg(long)]
        data: String,
    },
    Update {
        id: String,
        #[arg(long)]
        data: String,
    },
    Delete {
        id: String,
    },
}

#[derive(Args, Debug)]
struct ChannelCommand {
    #[command(subcommand)]
    command: ChannelSubcommand,
}

#[derive(Subcommand, Debug)]
enum ChannelSubcommand {
    List {
        #[arg(long)]
        params: Option<String>,
    },
    Get {
        id: String,
    },
    Create {
        #[arg(long)]
        data: String,
    },
    Update {
        id: String,
        #[arg(long)]
        data: String,
    },
    Delete {
        id: String,
    },
    /// Send a test notification.
    Test {
        #[arg(long)]
        data: String,
    },
}

#[derive(Args, Debug)]
struct ThemeCommand {
    #[command(subcommand)]
    command: ThemeSubcommand,
}

#[derive(Subcommand, Debug)]
enum ThemeSubcommand {
    Show,
    Toggle,
}

struct Console {
    ctx: ConsoleContext,
    client: ApiClient,
    config: ClientConfig,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = ClientConfig::from_env()?;
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url)?;
    }
    if let Some(state_dir) = cli.state_dir {
        config.state_dir = state_dir;
    }

    let storage = Arc::new(FileStorage::in_dir(&config.state_dir));
    let ctx = ConsoleContext::load(storage, Arc::new(DocumentTheme::new()), Arc::new(StderrNotifier));
    ctx.ui.init_theme();
    let transport = Arc::new(ReqwestTransport::new(&config)?);
    let client = ctx.api_client(transport).with_timeout(config.timeout);
    let console = Console { ctx, client, config };

    let result = run(&console, cli.command).await;
    if let Err(CliError::Api(error)) = &result {
        if error.is_auth_failure() {
            eprintln!("redirected to {}", console.ctx.router.current());
        }
    }
    result
}

async fn run(console: &Console, command: Command) -> Result<(), CliError> {
    let client = &console.client;
    let session = &console.ctx.session;
    match command {
        Command::Login { username, password } => {
            let payload = json!({ "username": username, "password": password });
            print_response(&auth::sign_in(client, session, payload).await?)
        }
        Command::Logout => print_response(&auth::sign_out(client, session).await?),
        Command::Profile => print_response(&auth::load_profile(client, session).await?),
        Command::Status => run_status(console),
        Command::Datasource(cmd) => run_datasource(client, cmd.command).await,
        Command::Model(cmd) => run_model(client, cmd.command).await,
        Command::Logs(cmd) => run_logs(client, cmd.command).await,
        Command::Ai(cmd) => match cmd.command {
            AiSubcommand::Analyze { data } => print_response(&ai::analyze_logs(client, parse_json(&data)?).await?),
        },
        Command::Monitor(cmd) => run_monitor(client, cmd.command).await,
        Command::Channel(cmd) => run_channel(client, cmd.command).await,
        Command::Theme(cmd) => run_theme(console, cmd.command),
        Command::Locale { tag } => run_locale(console, tag.as_deref()),
        Command::Routes => {
            run_routes(console);
            Ok(())
        }
        Command::Open { path } => {
            let landing = console.ctx.router.navigate(&path);
            let locale = console.ctx.ui.locale();
            let title = landing.route.map_or("-", |route| translate(route.meta.title_key, locale));
            if landing.redirected {
                println!("{} ({title}) [redirected]", landing.path);
            } else {
                println!("{} ({title})", landing.path);
            }
            Ok(())
        }
    }
}

fn run_status(console: &Console) -> Result<(), CliError> {
    let ui = console.ctx.ui.snapshot();
    print_json(&json!({
        "endpoint": console.config.endpoint(),
        "state_dir": console.config.state_dir.display().to_string(),
        "authenticated": console.ctx.session.is_authenticated(),
        "theme": ui.theme.as_str(),
        "locale": ui.locale.as_str(),
    }))
}

async fn run_datasource(client: &ApiClient, command: DataSourceSubcommand) -> Result<(), CliError> {
    let response = match command {
        DataSourceSubcommand::List { params } => {
            datasources::list_data_sources(client, parse_params(params.as_deref())?.as_ref()).await?
        }
        DataSourceSubcommand::Get { id } => {
            let item = datasources::get_data_source_by_id(client, &id)
                .await?
                .ok_or_else(|| CliError::NotFound(format!("data source {id}")))?;
            return print_json(&item);
        }
        DataSourceSubcommand::Create { data } => datasources::create_data_source(client, parse_json(&data)?).await?,
        DataSourceSubcommand::Update { id, data } => {
            datasources::update_data_source(client, &id, parse_json(&data)?).await?
        }
        DataSourceSubcommand::Delete { id } => datasources::delete_data_source(client, &id).await?,
        DataSourceSubcommand::Test { id } => datasources::test_connection(client, &id).await?,
        DataSourceSubcommand::TestPayload { data } => {
            datasources::test_connection_payload(client, parse_json(&data)?).await?
        }
    };
    print_response(&response)
}

async fn run_model(client: &ApiClient, command: ModelSubcommand) -> Result<(), CliError> {
    let response = match command {
        ModelSubcommand::List { params } => models::list_models(client, parse_params(params.as_deref())?.as_ref()).await?,
        ModelSubcommand::Create { data } => models::create_model(client, parse_json(&data)?).await?,
        ModelSubcommand::Update { id, data } => models::update_model(client, &id, parse_json(&data)?).await?,
        ModelSubcommand::Delete { id } => models::delete_model(client, &id).await?,
        ModelSubcommand::Test { data } => models::test_model(client, parse_json(&data)?).await?,
        ModelSubcommand::Enable { id, enabled } => models::set_model_enabled(client, &id, enabled).await?,
        ModelSubcommand::SetDefault { id } => models::set_default_model(client, &id).await?,
    };
    print_response(&response)
}

async fn run_logs(client: &ApiClient, command: LogsSubcommand) -> Result<(), CliError> {
    let response = match command {
        LogsSubcommand::Query { params } => logs::query_logs(client, parse_params(params.as_deref())?.as_ref()).await?,
        LogsSubcommand::Suggestions { params } => {
            logs::suggestions(client, parse_params(params.as_deref())?.as_ref()).await?
        }
        LogsSubcommand::LabelValues { params } => {
            logs::label_values(client, parse_params(params.as_deref())?.as_ref()).await?
        }
        LogsSubcommand::History { params } => logs::history(client, parse_params(params.as_deref())?.as_ref()).await?,
        LogsSubcommand::Inspect { params } => logs::inspect(client, parse_params(params.as_deref())?.as_ref()).await?,
        LogsSubcommand::Favorite { id } => logs::toggle_favorite(client, &id).await?,
        LogsSubcommand::Note { id, note } => logs::update_note(client, &id, &note).await?,
        LogsSubcommand::Delete { id } => logs::delete_history(client, &id).await?,
    };
    print_response(&response)
}

async fn run_monitor(client: &ApiClient, command: MonitorSubcommand) -> Result<(), CliError> {
    let response = match command {
        MonitorSubcommand::List { params } => {
            monitors::list_monitors(client, parse_params(params.as_deref())?.as_ref()).await?
        }
        MonitorSubcommand::Get { id } => monitors::get_monitor(client, &id).await?,
        MonitorSubcommand::Create { data } => monitors::create_monitor(client, parse_json(&data)?).await?,
        MonitorSubcommand::Update { id, data } => monitors::update_monitor(client, &id, parse_json(&data)?).await?,
        MonitorSubcommand::Delete { id } => monitors::delete_monitor(client, &id).await?,
    };
    print_response(&response)
}

async fn run_channel(client: &ApiClient, command: ChannelSubcommand) -> Result<(), CliError> {
    let response = match command {
        ChannelSubcommand::List { params } => {
            monitors::list_channels(client, parse_params(params.as_deref())?.as_ref()).await?
        }
        ChannelSubcommand::Get { id } => monitors::get_channel(client, &id).await?,
        ChannelSubcommand::Create { data } => monitors::create_channel(client, parse_json(&data)?).await?,
        ChannelSubcommand::Update { id, data } => monitors::update_channel(client, &id, parse_json(&data)?).await?,
        ChannelSubcommand::Delete { id } => monitors::delete_channel(client, &id).await?,
        ChannelSubcommand::Test { data } => monitors::test_channel(client, parse_json(&data)?).await?,
    };
    print_response(&response)
}

fn run_theme(console: &Console, command: ThemeSubcommand) -> Result<(), CliError> {
    let theme = match command {
        ThemeSubcommand::Show => console.ctx.ui.theme(),
        ThemeSubcommand::Toggle => console.ctx.ui.toggle_theme()?,
    };
    println!("{}", theme.as_str());
    Ok(())
}

fn run_locale(console: &Console, tag: Option<&str>) -> Result<(), CliError> {
    if let Some(tag) = tag {
        let locale = Locale::parse(tag).ok_or_else(|| CliError::UnknownLocale(tag.to_owned()))?;
        console.ctx.ui.set_locale(locale)?;
    }
    println!("{}", console.ctx.ui.locale().as_str());
    Ok(())
}

fn run_routes(console: &Console) {
    let locale = console.ctx.ui.locale();
    for route in ROUTES.iter() {
        let access = if route.meta.public { "public" } else { "private" };
        println!("{:<34} {:<8} {}", route.path, access, translate(route.meta.title_key, locale));
    }
}

fn parse_json(raw: &str) -> Result<Value, CliError> {
    Ok(serde_json::from_str(raw)?)
}

fn parse_params(raw: Option<&str>) -> Result<Option<Value>, CliError> {
    raw.map(parse_json).transpose()
}

fn print_response(response: &ApiResponse) -> Result<(), CliError> {
    print_json(&response.body)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
