//! Wallet node dashboard CLI.
//!
//! Each invocation builds a `WalletContext`, restores the saved login when
//! the command needs one, runs a single operation and prints the status
//! line followed by the panels it produced.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use wallet_dashboard::account::AccountSyncService;
use wallet_dashboard::chain::ChainInfoPoller;
use wallet_dashboard::config::{default_config, load_config, override_node_url, WalletConfig};
use wallet_dashboard::contract::{ContractCallComposer, MethodTable};
use wallet_dashboard::observability::init_logging;
use wallet_dashboard::render::render;
use wallet_dashboard::send::TransactionComposer;
use wallet_dashboard::session::SessionManager;
use wallet_dashboard::store::{FileStore, KeyValueStore, MemoryStore};
use wallet_dashboard::{WalletContext, WalletResult};

#[derive(Parser)]
#[command(name = "wallet-dashboard")]
#[command(about = "Dashboard client for a wallet node REST API", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Node base URL, overrides the configuration.
    #[arg(short, long)]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show best block and mining summary
    Chain,
    /// Poll chain info until Ctrl-C
    Watch {
        /// Poll interval in seconds
        #[arg(short, long)]
        interval: Option<u64>,
    },
    /// Authenticate and save the credentials
    Login { username: String, password: String },
    /// Forget the saved credentials
    Logout,
    /// Show the session state
    Status,
    /// Show balances and transaction history
    Balances {
        /// Minimum confirmations
        #[arg(long)]
        confirm: Option<u32>,
        /// First page to show
        #[arg(long, default_value_t = 0)]
        page: u32,
        /// Number of pages to walk through
        #[arg(long, default_value_t = 1)]
        pages: u32,
    },
    /// List every known account name
    Accounts,
    /// Send coins to one or more recipients
    Send {
        /// Sender account name
        #[arg(long)]
        from: String,
        /// Recipient as ADDRESS:COIN_ID:AMOUNT (repeatable)
        #[arg(long = "to", required = true)]
        to: Vec<String>,
        /// Plain text message
        #[arg(long, conflicts_with = "hex")]
        message: Option<String>,
        /// Hex-encoded message
        #[arg(long)]
        hex: Option<String>,
    },
    /// Call a smart-contract method
    Contract {
        /// Contract address
        address: String,
        /// Method name
        method: String,
        /// Arguments as JSON text, in declaration order
        args: Vec<String>,
    },
    /// Render a JSON file as an indented text block
    Render {
        file: PathBuf,
        #[arg(short, long)]
        width: Option<usize>,
    },
}

impl Commands {
    fn needs_session(&self) -> bool {
        matches!(
            self,
            Commands::Status
                | Commands::Balances { .. }
                | Commands::Accounts
                | Commands::Send { .. }
                | Commands::Contract { .. }
        )
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => default_config()?,
    };
    if let Some(url) = &cli.url {
        override_node_url(&mut config, url)?;
    }
    // A second subscriber is the only failure mode; keep going without logs.
    let _ = init_logging(&config.observability);

    tracing::debug!(
        base_url = %config.node.base_url,
        store = ?config.store.path,
        "Configuration loaded"
    );

    if let Commands::Render { file, width } = &cli.command {
        let text = std::fs::read_to_string(file)?;
        let value: serde_json::Value = serde_json::from_str(&text)?;
        print!("{}", render(&value, width.unwrap_or(config.render.indent_width), ""));
        return Ok(());
    }

    let ctx = Arc::new(WalletContext::new(config.clone(), open_store(&config)?)?);
    let session = SessionManager::new(ctx.clone());
    if cli.command.needs_session() {
        // A rejected pair is reported and the command then fails its guard.
        let _ = session.restore_on_startup().await;
    }

    let outcome = run(cli.command, &ctx, &session).await;

    for (panel, text) in ctx.display.snapshot() {
        println!("[{panel}]");
        print!("{text}");
        println!();
    }
    if let Some(notice) = ctx.notices.current() {
        println!("{notice}");
    }
    if outcome.is_err() {
        std::process::exit(1);
    }
    Ok(())
}

async fn run(command: Commands, ctx: &Arc<WalletContext>, session: &SessionManager) -> WalletResult<()> {
    match command {
        Commands::Chain => {
            ChainInfoPoller::new(ctx.clone()).refresh().await?;
        }
        Commands::Watch { interval } => {
            let secs = interval.unwrap_or(ctx.config.chain.poll_interval_secs).max(1);
            let poller = ChainInfoPoller::new(ctx.clone());
            let shutdown = async {
                let _ = tokio::signal::ctrl_c().await;
            };
            poller.run(Duration::from_secs(secs), shutdown).await;
        }
        Commands::Login { username, password } => {
            session.login(&username, &password).await?;
        }
        Commands::Logout => session.logout(),
        Commands::Status => {
            let current = session.session();
            println!("status: {}", current.status);
            if current.is_logged_in() {
                println!("user:   {}", current.credentials.username);
            }
        }
        Commands::Balances { confirm, page, pages } => {
            let sync = AccountSyncService::new(ctx.clone());
            let mut cursor = sync.default_cursor();
            if let Some(confirm) = confirm {
                cursor.confirm = confirm;
            }
            cursor.page = page;
            sync.refresh_balances(cursor).await?;
            for _ in 1..pages {
                sync.next_page().await?;
            }
        }
        Commands::Accounts => {
            let sync = AccountSyncService::new(ctx.clone());
            sync.refresh_account_list().await?;
            for name in ctx.accounts.names() {
                println!("{name}");
            }
        }
        Commands::Send {
            from,
            to,
            message,
            hex,
        } => {
            let mut composer = TransactionComposer::new(ctx.clone());
            composer.set_sender(from);
            for entry in &to {
                let mut parts = entry.rsplitn(3, ':');
                let amount = parts.next().unwrap_or_default();
                let coin_id = parts.next().unwrap_or_default();
                let address = parts.next().unwrap_or_default();
                composer.add_recipient(address, coin_id, amount)?;
            }
            if let Some(text) = message {
                composer.set_message(wallet_dashboard::send::Message::Plain(text));
            } else if let Some(raw) = hex {
                composer.set_hex_message(&raw)?;
            }
            composer.submit().await?;
        }
        Commands::Contract {
            address,
            method,
            args,
        } => {
            let methods = match &ctx.config.contracts.descriptor_path {
                Some(path) => MethodTable::load_from_file(std::path::Path::new(path))
                    .map_err(|e| ctx.fail(e))?,
                None => MethodTable::new(),
            };
            let composer = ContractCallComposer::new(ctx.clone(), methods);
            composer.submit(&address, &method, args.as_slice()).await?;
        }
        Commands::Render { .. } => {}
    }
    Ok(())
}

fn open_store(config: &WalletConfig) -> Result<Arc<dyn KeyValueStore>, Box<dyn std::error::Error>> {
    let store: Arc<dyn KeyValueStore> = match &config.store.path {
        Some(path) => Arc::new(FileStore::open(path)?),
        None => Arc::new(MemoryStore::new()),
    };
    Ok(store)
}
