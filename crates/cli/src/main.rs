use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use printadm_client::ServerProxy;
use printadm_client::ops::{DEFAULT_LIMIT, DEFAULT_OFFSET};
use printadm_core::config::PrintadmConfig;
use printadm_core::logging::{LogLevel, LoggerBuilder};
use printadm_core::xmlrpc::Value;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Server host (overrides configuration)
    #[arg(short = 'H', long)]
    host: Option<String>,

    /// Server port (overrides configuration)
    #[arg(short, long)]
    port: Option<u16>,

    /// Connect over HTTPS
    #[arg(long)]
    tls: bool,

    /// Call timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Authentication token (falls back to the PRINTADM_TOKEN environment
    /// variable)
    #[arg(short, long)]
    token: Option<String>,

    /// Log raw XML-RPC requests and responses
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// User account operations
    User {
        #[command(subcommand)]
        action: UserAction,
    },
    /// Shared account operations
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },
    /// Printer operations
    Printer {
        #[command(subcommand)]
        action: PrinterAction,
    },
    /// Group operations
    Group {
        #[command(subcommand)]
        action: GroupAction,
    },
    /// Server administration
    Server {
        #[command(subcommand)]
        action: ServerAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Check whether a user exists
    Exists { user: String },
    /// Trigger creation of a user from the network directory
    Add { user: String },
    /// Permanently delete a user
    Delete {
        user: String,
        /// Also redact the user's personal data
        #[arg(long)]
        redact: bool,
    },
    /// Show a user's balance
    Balance {
        user: String,
        /// Personal account name (total balance if omitted)
        #[arg(long)]
        account: Option<String>,
    },
    /// Adjust a user's balance (positive adds, negative subtracts)
    Adjust {
        user: String,
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        #[arg(long)]
        comment: Option<String>,
        #[arg(long)]
        account: Option<String>,
    },
    /// Set a user's balance to an absolute value
    SetBalance {
        user: String,
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        #[arg(long)]
        comment: Option<String>,
        #[arg(long)]
        account: Option<String>,
    },
    /// Get a user property
    Property { user: String, name: String },
    /// Set a user property
    SetProperty {
        user: String,
        name: String,
        value: String,
    },
    /// Show a user's group memberships
    Groups { user: String },
    /// List user accounts
    List {
        #[arg(long, default_value_t = DEFAULT_OFFSET)]
        offset: i32,
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: i32,
    },
}

#[derive(Subcommand)]
enum AccountAction {
    /// Check whether a shared account exists
    Exists { name: String },
    /// Create a shared account (use parent\sub for subaccounts)
    Add { name: String },
    /// Permanently delete a shared account
    Delete { name: String },
    /// Show a shared account's balance
    Balance { name: String },
    /// Adjust a shared account's balance
    Adjust {
        name: String,
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        #[arg(long)]
        comment: Option<String>,
    },
    /// List shared accounts
    List {
        #[arg(long, default_value_t = DEFAULT_OFFSET)]
        offset: i32,
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: i32,
    },
}

#[derive(Subcommand)]
enum PrinterAction {
    /// List printers
    List {
        #[arg(long, default_value_t = DEFAULT_OFFSET)]
        offset: i32,
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: i32,
    },
    /// Enable a printer
    Enable { server: String, printer: String },
    /// Disable a printer (-1 minutes disables until re-enabled)
    Disable {
        server: String,
        printer: String,
        #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
        mins: i32,
    },
    /// Show the simple-model page cost
    Cost { server: String, printer: String },
    /// Set the simple-model page cost
    SetCost {
        server: String,
        printer: String,
        cost: f64,
    },
}

#[derive(Subcommand)]
enum GroupAction {
    /// List user groups
    List {
        #[arg(long, default_value_t = DEFAULT_OFFSET)]
        offset: i32,
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: i32,
    },
    /// List the members of a group
    Members {
        group: String,
        #[arg(long, default_value_t = DEFAULT_OFFSET)]
        offset: i32,
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: i32,
    },
    /// Add a user to a group
    AddUser { user: String, group: String },
    /// Remove a user from a group
    RemoveUser { user: String, group: String },
    /// Show a group's quota settings
    Quota { group: String },
}

#[derive(Subcommand)]
enum ServerAction {
    /// Count of all user accounts
    TotalUsers,
    /// Status of the latest long-running task
    TaskStatus,
    /// Start a group synchronization (runs in the background)
    GroupSync,
    /// Start a full user and group synchronization (runs in the background)
    FullSync,
    /// Start an online backup (runs in the background)
    Backup,
    /// Run a custom server command
    RunCommand {
        name: String,
        /// Arguments passed to the command
        args: Vec<String>,
    },
    /// Get a server configuration value
    GetConfig { name: String },
    /// Set a server configuration value
    SetConfig { name: String, value: String },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Generate a default configuration file
    Init {
        /// Path where to create the config file
        #[arg(short, long, default_value = "printadm.toml")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => PrintadmConfig::load_from_file(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => PrintadmConfig::load_with_fallback(),
    };
    config.merge_with_env();

    if let Some(host) = &cli.host {
        config.server.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if cli.tls {
        config.server.use_tls = true;
    }
    if let Some(timeout) = cli.timeout {
        config.server.timeout = Some(timeout);
    }
    if cli.verbose {
        config.server.verbose = true;
        config.logging.level = LogLevel::Debug;
    }

    LoggerBuilder::from_config(config.logging.clone()).init()?;
    config.validate()?;
    debug!("using endpoint {}", config.server.endpoint_url());

    match cli.command {
        Commands::Config { action } => run_config(action, &config),
        command => {
            let token = cli
                .token
                .or_else(|| std::env::var("PRINTADM_TOKEN").ok())
                .unwrap_or_default();
            if token.is_empty() {
                bail!("no authentication token: pass --token or set PRINTADM_TOKEN");
            }
            let proxy = ServerProxy::new(config.server.clone());
            let mut session = proxy.connect()?;
            let result = run_command(command, &mut session, &token)?;
            print_value(&result);
            session.close()?;
            Ok(())
        }
    }
}

fn run_command(
    command: Commands,
    session: &mut printadm_client::ServerSession,
    token: &str,
) -> Result<Value> {
    let value = match command {
        Commands::User { action } => match action {
            UserAction::Exists { user } => session.is_user_exists(token, &user)?,
            UserAction::Add { user } => session.add_new_user(token, &user)?,
            UserAction::Delete { user, redact } => {
                session.delete_existing_user(token, &user, redact)?
            }
            UserAction::Balance { user, account } => {
                session.get_user_account_balance(token, &user, account.as_deref())?
            }
            UserAction::Adjust {
                user,
                amount,
                comment,
                account,
            } => session.adjust_user_account_balance(
                token,
                &user,
                amount,
                account.as_deref(),
                comment.as_deref(),
            )?,
            UserAction::SetBalance {
                user,
                amount,
                comment,
                account,
            } => session.set_user_account_balance(
                token,
                &user,
                amount,
                comment.as_deref(),
                account.as_deref(),
            )?,
            UserAction::Property { user, name } => {
                session.get_user_property(token, &user, &name)?
            }
            UserAction::SetProperty { user, name, value } => {
                session.set_user_property(token, &user, &name, &value)?
            }
            UserAction::Groups { user } => session.get_user_groups(token, &user)?,
            UserAction::List { offset, limit } => {
                session.list_user_accounts(token, offset, limit)?
            }
        },
        Commands::Account { action } => match action {
            AccountAction::Exists { name } => session.is_shared_account_exists(token, &name)?,
            AccountAction::Add { name } => session.add_new_shared_account(token, &name)?,
            AccountAction::Delete { name } => {
                session.delete_existing_shared_account(token, &name)?
            }
            AccountAction::Balance { name } => {
                session.get_shared_account_account_balance(token, &name)?
            }
            AccountAction::Adjust {
                name,
                amount,
                comment,
            } => session.adjust_shared_account_account_balance(
                token,
                &name,
                amount,
                comment.as_deref(),
            )?,
            AccountAction::List { offset, limit } => {
                session.list_shared_accounts(token, offset, limit)?
            }
        },
        Commands::Printer { action } => match action {
            PrinterAction::List { offset, limit } => {
                session.list_printers(token, offset, limit)?
            }
            PrinterAction::Enable { server, printer } => {
                session.enable_printer(token, &server, &printer)?
            }
            PrinterAction::Disable {
                server,
                printer,
                mins,
            } => session.disable_printer(token, &server, &printer, mins)?,
            PrinterAction::Cost { server, printer } => {
                session.get_printer_cost_simple(token, &server, &printer)?
            }
            PrinterAction::SetCost {
                server,
                printer,
                cost,
            } => session.set_printer_cost_simple(token, &server, &printer, cost)?,
        },
        Commands::Group { action } => match action {
            GroupAction::List { offset, limit } => {
                session.list_user_groups(token, offset, limit)?
            }
            GroupAction::Members {
                group,
                offset,
                limit,
            } => session.get_group_members(token, &group, offset, limit)?,
            GroupAction::AddUser { user, group } => {
                session.add_user_to_group(token, &user, &group)?
            }
            GroupAction::RemoveUser { user, group } => {
                session.remove_user_from_group(token, &user, &group)?
            }
            GroupAction::Quota { group } => session.get_group_quota(token, &group)?,
        },
        Commands::Server { action } => match action {
            ServerAction::TotalUsers => session.get_total_users(token)?,
            ServerAction::TaskStatus => session.get_task_status(token)?,
            ServerAction::GroupSync => session.perform_group_sync(token)?,
            ServerAction::FullSync => session.perform_user_and_group_sync(token)?,
            ServerAction::Backup => session.perform_online_backup(token)?,
            ServerAction::RunCommand { name, args } => {
                let args: Vec<&str> = args.iter().map(String::as_str).collect();
                session.run_command(token, &name, &args)?
            }
            ServerAction::GetConfig { name } => session.get_config_value(token, &name)?,
            ServerAction::SetConfig { name, value } => {
                session.set_config_value(token, &name, &value)?
            }
        },
        Commands::Config { .. } => unreachable!("config commands are handled before connecting"),
    };
    Ok(value)
}

fn run_config(action: ConfigAction, config: &PrintadmConfig) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let rendered =
                toml::to_string_pretty(config).context("failed to render configuration")?;
            print!("{}", rendered);
        }
        ConfigAction::Init { output } => {
            if output.exists() {
                bail!("{} already exists", output.display());
            }
            PrintadmConfig::default().save_to_file(&output)?;
            println!("Created configuration file: {}", output.display());
        }
    }
    Ok(())
}

/// Render an untyped result for the terminal as JSON.
fn print_value(value: &Value) {
    match serde_json::to_string_pretty(&value_to_json(value)) {
        Ok(rendered) => println!("{}", rendered),
        Err(_) => println!("{:?}", value),
    }
}

fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Nil => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Int(i) => serde_json::Value::from(*i),
        Value::Double(d) => serde_json::Number::from_f64(*d)
            .map(serde_json::Value::Number)
            .unwrap_or_else(|| serde_json::Value::String(d.to_string())),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Array(items) => {
            serde_json::Value::Array(items.iter().map(value_to_json).collect())
        }
        Value::Struct(members) => serde_json::Value::Object(
            members
                .iter()
                .map(|(name, member)| (name.clone(), value_to_json(member)))
                .collect(),
        ),
    }
}
