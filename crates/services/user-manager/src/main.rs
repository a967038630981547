//! User Manager - command line access to users and traffic sources.

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use user_manager_lib::config::UserManagerConfig;
use user_manager_lib::service::{ApiStatus, UserService};

#[derive(Parser)]
#[command(name = "user-manager")]
#[command(about = "User manager access layer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the API login works
    Status,
    /// List users keyed by username
    Users {
        /// Read from the database regardless of USER_MANAGER_USE_DB
        #[arg(long)]
        use_db: bool,
    },
    /// Show a single user from the database
    User { username: String },
    /// List rows of the users view
    ViewUsers,
    /// Show a users view row by email
    ViewUser { email: String },
    /// List traffic sources keyed by id
    TrafficSources {
        /// Only active sources of users with native or mobile access
        #[arg(long)]
        active: bool,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = UserManagerConfig::from_env();
    let manager = user_manager_lib::connect(&config).await?;

    match cli.command {
        Commands::Status => {
            let status = manager.status().await;
            println!("{}", status);
            if let ApiStatus::Error(reason) = status {
                return Err(reason.into());
            }
        }
        Commands::Users { use_db } => {
            let users = if use_db {
                manager.get_users(true, &[]).await?
            } else {
                manager.get_users_from_configured_source(&[]).await?
            };
            print_json(&users)?;
        }
        Commands::User { username } => {
            print_json(&manager.get_user_from_db(&username).await?)?;
        }
        Commands::ViewUsers => {
            print_json(&manager.get_view_users().await?)?;
        }
        Commands::ViewUser { email } => {
            print_json(&manager.get_view_user(&email).await?)?;
        }
        Commands::TrafficSources { active } => {
            let sources = if active {
                manager.get_active_traffic_sources().await?
            } else {
                manager.get_traffic_sources().await?
            };
            print_json(&sources)?;
        }
    }

    Ok(())
}
