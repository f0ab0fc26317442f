//! Marigold CLI - Store management without the panel.
//!
//! # Usage
//!
//! ```bash
//! # Log in (token is saved to the token file)
//! mg-cli login -e admin@marigoldapparel.com -p <password>
//!
//! # List products, with the same filters as the panel
//! mg-cli products list --search shirt --stock low-stock
//!
//! # Show products at or below their low-stock threshold
//! mg-cli products low-stock
//!
//! # Export orders to a spreadsheet
//! mg-cli orders export -o orders.xlsx --status shipped
//!
//! # Log out (removes the token file)
//! mg-cli logout
//! ```
//!
//! # Environment Variables
//!
//! - `MARIGOLD_API_URL` - Base URL of the Marigold admin API
//! - `MARIGOLD_TOKEN_FILE` - Token file path (default: `.marigold-token`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use marigold_client::AdminApi;

mod commands;

#[derive(Parser)]
#[command(name = "mg-cli")]
#[command(author, version, about = "Marigold CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and persist the session token
    Login {
        /// Admin email address
        #[arg(short, long)]
        email: String,

        /// Admin password (falls back to `MARIGOLD_ADMIN_PASSWORD`)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Remove the persisted session token
    Logout,
    /// Product catalog commands
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },
    /// Order commands
    Orders {
        #[command(subcommand)]
        action: OrdersAction,
    },
}

#[derive(Subcommand)]
enum ProductsAction {
    /// List products with the panel's filters
    List {
        /// Free-text search over name and category
        #[arg(long)]
        search: Option<String>,

        /// Exact category filter
        #[arg(long)]
        category: Option<String>,

        /// Stock bucket filter (`in-stock`, `low-stock`, `out-of-stock`)
        #[arg(long)]
        stock: Option<String>,

        /// Page number
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// List products at or below their low-stock threshold
    LowStock,
}

#[derive(Subcommand)]
enum OrdersAction {
    /// Export orders to an `.xlsx` spreadsheet
    Export {
        /// Output file path
        #[arg(short, long, default_value = "orders.xlsx")]
        output: String,

        /// Status filter (e.g. `shipped`)
        #[arg(long)]
        status: Option<String>,

        /// Payment status filter (e.g. `paid`)
        #[arg(long)]
        payment_status: Option<String>,

        /// Created-at lower bound (YYYY-MM-DD)
        #[arg(long)]
        date_from: Option<String>,

        /// Created-at upper bound (YYYY-MM-DD)
        #[arg(long)]
        date_to: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file if present, then initialize tracing
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn api() -> Result<AdminApi, Box<dyn std::error::Error>> {
    let base_url =
        std::env::var("MARIGOLD_API_URL").map_err(|_| "MARIGOLD_API_URL is not set")?;
    Ok(AdminApi::new(&base_url)?)
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Login { email, password } => {
            let password = password
                .or_else(|| std::env::var("MARIGOLD_ADMIN_PASSWORD").ok())
                .ok_or("Pass --password or set MARIGOLD_ADMIN_PASSWORD")?;
            commands::session::login(&api()?, &email, &password).await?;
        }
        Commands::Logout => commands::session::logout()?,
        Commands::Products { action } => match action {
            ProductsAction::List {
                search,
                category,
                stock,
                page,
            } => {
                commands::products::list(&api()?, search, category, stock, page).await?;
            }
            ProductsAction::LowStock => commands::products::low_stock(&api()?).await?,
        },
        Commands::Orders { action } => match action {
            OrdersAction::Export {
                output,
                status,
                payment_status,
                date_from,
                date_to,
            } => {
                commands::orders::export(
                    &api()?,
                    &output,
                    status,
                    payment_status,
                    date_from,
                    date_to,
                )
                .await?;
            }
        },
    }
    Ok(())
}
