use anyhow::Context;
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;
use usergate::cli::create_admin;
use usergate_db::{MIGRATOR, PgStore, init_db_pool};

#[derive(Parser)]
#[command(name = "usergate-cli")]
#[command(about = "Usergate CLI - Administrative tools for Usergate", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a user with the ADMIN role
    CreateAdmin {
        /// Display name
        #[arg(short = 'n', long)]
        name: Option<String>,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = init_db_pool(&database_url)
        .await
        .context("Failed to connect to database")?;
    MIGRATOR
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;
    let store = PgStore::new(pool);

    match cli.command {
        Commands::CreateAdmin {
            name,
            email,
            password,
        } => handle_create_admin(&store, name, email, password).await,
    }
}

async fn handle_create_admin(
    store: &PgStore,
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
) -> anyhow::Result<()> {
    // Use provided values or prompt interactively
    let name = match name {
        Some(name) => name,
        None => Input::<String>::new().with_prompt("Name").interact_text()?,
    };

    let email = match email {
        Some(email) => email,
        None => Input::<String>::new().with_prompt("Email address").interact_text()?,
    };

    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()?,
    };

    match create_admin(store, store, &name, &email, &password).await {
        Ok(user) => {
            println!("\n✅ Admin created successfully!");
            println!("   ID: {}", user.id);
            println!("   Email: {}", user.email);
            println!("   Name: {}", user.name);
            Ok(())
        }
        Err(e) => {
            eprintln!("\n❌ Error creating admin: {:#}", e);
            std::process::exit(1);
        }
    }
}
