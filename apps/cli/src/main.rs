mod indicator;

use std::sync::Arc;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use wtf_bank_client::SharedToken;
use wtf_bank_gateway::{Env, Mode, ResilientGateway};
use wtf_bank_interface::{
    BankApi, CustomerQuery, DEFAULT_PAGE_SIZE, KycStatus, LoginRequest, PageRequest,
};
use wtf_bank_mock::MockBankApi;

/// WTF Bank API client that falls back to sample data when the backend is down.
#[derive(Parser)]
#[command(name = "wtfbank", version)]
struct Cli {
    /// Serve every call from sample data (also BANK_FORCE_MOCK)
    #[arg(long, global = true)]
    force_mock: bool,

    /// Backend base URL (overrides BANK_API_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Bearer token sent to the live backend
    #[arg(long, global = true, env = "BANK_TOKEN", hide_env_values = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Copy)]
struct PageArgs {
    /// Zero-based page index
    #[arg(long, default_value_t = 0)]
    page: u32,
    /// Page size
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    size: u32,
}

impl From<PageArgs> for PageRequest {
    fn from(args: PageArgs) -> Self {
        PageRequest::new(args.page, args.size)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show where calls are being served from
    Status,

    /// Probe the backend now and report whether it is reachable
    Refresh,

    /// Log in as a customer or an administrator
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        admin: bool,
    },

    /// List a customer's accounts
    Accounts {
        #[arg(long)]
        customer_id: i64,
        #[command(flatten)]
        page: PageArgs,
    },

    /// Show an account's transaction history
    History {
        #[arg(long)]
        account_id: i64,
        #[command(flatten)]
        page: PageArgs,
    },

    /// List customers (admin)
    Customers {
        /// PENDING, UNDER_REVIEW, VERIFIED or REJECTED
        #[arg(long, value_parser = parse_kyc_status)]
        kyc_status: Option<KycStatus>,
        #[command(flatten)]
        page: PageArgs,
    },

    /// List a customer's support tickets
    Tickets {
        #[arg(long)]
        customer_id: i64,
        #[command(flatten)]
        page: PageArgs,
    },
}

fn parse_kyc_status(value: &str) -> Result<KycStatus, String> {
    value
        .to_ascii_uppercase()
        .replace('-', "_")
        .parse()
        .map_err(|_| format!("unknown KYC status: {value}"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let env = Env::load().context("invalid BANK_* environment")?;

    let tokens = SharedToken::default();
    if let Some(token) = &cli.token {
        tokens.set(token.as_str());
    }

    let gateway = build_gateway(env, &cli, tokens);
    let result = run(&gateway, cli.command).await;

    println!("{}", indicator::render(&gateway.mode_info()));
    result
}

fn build_gateway(mut env: Env, cli: &Cli, tokens: SharedToken) -> ResilientGateway {
    if let Some(base_url) = &cli.base_url {
        env.bank_api_base_url = base_url.clone();
    }
    env.bank_force_mock |= cli.force_mock;

    tracing::debug!(
        base_url = %env.bank_api_base_url,
        force_mock = env.bank_force_mock,
        "gateway_configured"
    );

    ResilientGateway::new(
        env.live_client(tokens),
        Arc::new(MockBankApi::new(env.mock_config())),
        env.gateway_config(),
    )
}

/// Each invocation is one call; a token printed by `login` is passed back with
/// `--token` on the next run.
async fn run(gateway: &ResilientGateway, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Status => {
            if gateway.mode() == Mode::LiveUnknown {
                gateway.refresh_backend_status().await;
            }
            print_json(&gateway.mode_info())
        }
        Commands::Refresh => {
            let available = gateway.refresh_backend_status().await;
            print_json(&serde_json::json!({ "backendAvailable": available }))
        }
        Commands::Login {
            email,
            password,
            admin,
        } => {
            let request = LoginRequest::new(email, password);
            let auth = if admin {
                gateway.admin_login(request).await?
            } else {
                gateway.customer_login(request).await?
            };
            print_json(&auth)
        }
        Commands::Accounts { customer_id, page } => {
            print_json(&gateway.get_accounts(customer_id, page.into()).await?)
        }
        Commands::History { account_id, page } => print_json(
            &gateway
                .get_transaction_history(account_id, page.into())
                .await?,
        ),
        Commands::Customers { kyc_status, page } => {
            let query = CustomerQuery {
                page: page.into(),
                kyc_status,
            };
            print_json(&gateway.get_all_customers(query).await?)
        }
        Commands::Tickets { customer_id, page } => {
            print_json(&gateway.get_support_tickets(customer_id, page.into()).await?)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
