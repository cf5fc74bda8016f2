//! Foodie CLI - drive the ordering page state from a terminal.
//!
//! Every command loads a page over file-backed storage, performs one
//! interaction, and prints whatever the page would have shown: alerts first,
//! then the live toast.
//!
//! # Usage
//!
//! ```bash
//! # Add a dish and look at the cart
//! foodie cart add "Chicken Karahi" "PKR 1500"
//! foodie cart list
//!
//! # Adjust and check out
//! foodie cart inc 0
//! foodie cart checkout
//!
//! # Accounts
//! foodie auth sign-up -n "Ali Raza" -e ali@example.pk -p 0300-1111111 --password karahi1
//! foodie auth whoami
//!
//! # Render the cart modal fragment
//! foodie render cart
//! ```
//!
//! # Environment Variables
//!
//! See `StorefrontConfig::from_env`. `--storage` overrides `FOODIE_STORAGE_PATH`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "foodie")]
#[command(author, version, about = "Foodie ordering page tools")]
struct Cli {
    /// Storage file (defaults to `FOODIE_STORAGE_PATH`)
    #[arg(short, long, global = true)]
    storage: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Sign up or sign in
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
    /// Dark mode preference
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
    /// Render an HTML fragment
    Render {
        #[command(subcommand)]
        fragment: Fragment,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add one unit of a dish
    Add {
        /// Dish name
        name: String,
        /// Price label, e.g. "PKR 1500"
        price: String,
        /// Image URL
        #[arg(short, long, default_value = "")]
        image: String,
    },
    /// List cart lines and the total
    List,
    /// Increase the quantity of a line by one
    Inc {
        /// Line index
        index: usize,
    },
    /// Decrease the quantity of a line by one
    Dec {
        /// Line index
        index: usize,
    },
    /// Remove a line by index or by name
    Remove {
        /// Line index, or dish name with `--name`
        target: String,
        /// Treat the target as a dish name
        #[arg(long)]
        name: bool,
    },
    /// Print the cart total
    Total,
    /// Place the order and clear the cart
    Checkout,
}

#[derive(Subcommand)]
enum AuthAction {
    /// Create an account and sign in
    SignUp {
        /// Full name
        #[arg(short, long)]
        name: String,
        /// Email address
        #[arg(short, long)]
        email: String,
        /// Phone number
        #[arg(short, long)]
        phone: String,
        /// Password
        #[arg(long)]
        password: String,
        /// Password confirmation (defaults to the password)
        #[arg(long)]
        confirm: Option<String>,
    },
    /// Sign in to an existing account
    SignIn {
        /// Email address
        #[arg(short, long)]
        email: String,
        /// Password
        #[arg(long)]
        password: String,
    },
    /// Show the signed-in user
    Whoami,
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Enable dark mode
    Dark,
    /// Enable light mode
    Light,
    /// Show the stored colour scheme
    Show,
}

#[derive(Subcommand)]
enum Fragment {
    /// Cart modal
    Cart,
    /// Cart count badge
    Badge,
    /// Navigation sign-in button
    Nav,
}

fn main() {
    dotenvy::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "foodie_storefront=info,foodie_cli=info".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), commands::CliError> {
    let mut page = commands::open_page(cli.storage)?;

    match cli.command {
        Commands::Cart { action } => match action {
            CartAction::Add { name, price, image } => {
                commands::cart::add(&mut page, &name, &price, &image);
            }
            CartAction::List => commands::cart::list(&page),
            CartAction::Inc { index } => commands::cart::update(&mut page, index, 1),
            CartAction::Dec { index } => commands::cart::update(&mut page, index, -1),
            CartAction::Remove { target, name } => {
                commands::cart::remove(&mut page, &target, name)?;
            }
            CartAction::Total => commands::cart::total(&page),
            CartAction::Checkout => commands::cart::checkout(&mut page),
        },
        Commands::Auth { action } => match action {
            AuthAction::SignUp {
                name,
                email,
                phone,
                password,
                confirm,
            } => {
                let confirm = confirm.unwrap_or_else(|| password.clone());
                commands::auth::sign_up(&mut page, &name, &email, &phone, password, confirm);
            }
            AuthAction::SignIn { email, password } => {
                commands::auth::sign_in(&mut page, &email, password);
            }
            AuthAction::Whoami => commands::auth::whoami(&page),
        },
        Commands::Theme { action } => match action {
            ThemeAction::Dark => commands::theme::set(&mut page, true),
            ThemeAction::Light => commands::theme::set(&mut page, false),
            ThemeAction::Show => commands::theme::show(&page),
        },
        Commands::Render { fragment } => match fragment {
            Fragment::Cart => commands::render::cart(&mut page)?,
            Fragment::Badge => commands::render::badge(&page)?,
            Fragment::Nav => commands::render::nav(&page)?,
        },
    }

    commands::report(&mut page);
    Ok(())
}
