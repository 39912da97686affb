use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use portal_application::PortalContext;
use portal_core::record::DEFAULT_ITEMS_PER_PAGE;
use portal_infrastructure::PortalPaths;

mod commands;

#[derive(Parser)]
#[command(name = "portal")]
#[command(about = "Portal CLI - sign in and browse the feature applications", long_about = None)]
struct Cli {
    /// Keep config and state under this directory instead of the platform defaults
    #[arg(long, global = true)]
    base_dir: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and persist the session
    Login {
        username: String,
        #[arg(short, long)]
        password: String,
    },
    /// Sign out and clear the persisted session
    Logout,
    /// Show the signed-in user
    Whoami,
    /// List the features visible to the signed-in user
    Features {
        /// List the whole catalog regardless of role
        #[arg(long)]
        all: bool,
    },
    /// List todos (feature application A)
    Todos(PageArgs),
    /// List profiles (feature application B)
    Profiles(PageArgs),
}

#[derive(Args)]
struct PageArgs {
    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    page: usize,

    /// Records per page
    #[arg(long, default_value_t = DEFAULT_ITEMS_PER_PAGE)]
    per_page: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "portal_cli=info,portal_application=info,portal_infrastructure=info,portal_core=info"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let paths = PortalPaths::new(cli.base_dir.as_deref());
    let ctx = PortalContext::bootstrap(&paths).await?;

    match cli.command {
        Commands::Login { username, password } => {
            commands::auth::login(&ctx, &username, &password).await?
        }
        Commands::Logout => commands::auth::logout(&ctx).await,
        Commands::Whoami => commands::auth::whoami(&ctx, cli.json).await?,
        Commands::Features { all } => commands::features::list(&ctx, all, cli.json).await?,
        Commands::Todos(args) => commands::records::todos(&ctx, args.page, args.per_page, cli.json).await?,
        Commands::Profiles(args) => {
            commands::records::profiles(&ctx, args.page, args.per_page, cli.json).await?
        }
    }

    Ok(())
}
