//! CLI administration tool for the AgroNova API.
//!
//! Provides commands for seeding content, reading contact submissions and
//! checking the database without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Insert the built-in services and posts into an empty database
//! cargo run --bin admin -- seed
//!
//! # Show the 20 most recent contact submissions
//! cargo run --bin admin -- contacts list --limit 20
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use agronova_api::config::mask_connection_string;
use agronova_api::domain::catalog::Catalog;
use agronova_api::domain::repositories::{BlogRepository, ContactRepository, ServiceRepository};
use agronova_api::infrastructure::persistence::{
    PgBlogRepository, PgContactRepository, PgServiceRepository,
};
use agronova_api::server::MIGRATOR;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing the AgroNova API.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Insert the built-in catalog into an empty database
    Seed {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Contact form submissions
    Contacts {
        #[command(subcommand)]
        action: ContactsAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum ContactsAction {
    /// List recent submissions, newest first
    List {
        /// Maximum number of submissions to show
        #[arg(short, long, default_value_t = 20)]
        limit: i64,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection and show record counts
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database at {}",
                mask_connection_string(&database_url)
            )
        })?;

    match cli.command {
        Commands::Seed { yes } => seed(&pool, yes).await?,
        Commands::Contacts {
            action: ContactsAction::List { limit },
        } => list_contacts(&pool, limit).await?,
        Commands::Db {
            action: DbAction::Check,
        } => check_db(&pool).await?,
    }

    Ok(())
}

/// Seeds services and blog posts from the built-in catalog.
///
/// Each table is seeded only when it is empty, so running the command twice
/// does not duplicate content.
async fn seed(pool: &PgPool, skip_confirm: bool) -> Result<()> {
    println!("{}", "🌱 Seed content".bright_blue().bold());
    println!();

    MIGRATOR.run(pool).await.context("Failed to run migrations")?;

    let (services_count, posts_count) = counts(pool).await?;
    let catalog = Catalog::sample();

    let seed_services = services_count == 0;
    let seed_posts = posts_count == 0;

    if !seed_services && !seed_posts {
        println!(
            "{}",
            "⚠️  Services and blog posts already exist, nothing to seed".yellow()
        );
        return Ok(());
    }

    if seed_services {
        println!(
            "  Services:   {} to insert",
            catalog.services.len().to_string().cyan()
        );
    }
    if seed_posts {
        println!(
            "  Blog posts: {} to insert",
            catalog.blog_posts.len().to_string().cyan()
        );
    }
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Insert this content?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let pool = Arc::new(pool.clone());

    if seed_services {
        let repo = PgServiceRepository::new(pool.clone());
        for service in catalog.new_services() {
            repo.create(service)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to insert service: {}", e))?;
        }
    }

    if seed_posts {
        let repo = PgBlogRepository::new(pool);
        for post in catalog.new_blog_posts() {
            repo.create(post)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to insert blog post: {}", e))?;
        }
    }

    println!();
    println!("{}", "✅ Content seeded successfully!".green().bold());
    println!();

    Ok(())
}

/// Lists recent contact submissions.
///
/// # Output Format
///
/// ```text
/// 📬 Contact submissions
///
///   ID  Received          Name                 Email                     Subject
///   ───────────────────────────────────────────────────────────────────────────────
///   3   2024-06-15 10:30  John Doe             john@example.com          Inquiry about drones
/// ```
async fn list_contacts(pool: &PgPool, limit: i64) -> Result<()> {
    println!("{}", "📬 Contact submissions".bright_blue().bold());
    println!();

    let repo = PgContactRepository::new(Arc::new(pool.clone()));
    let contacts = repo
        .list_recent(limit.max(1))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list contacts: {}", e))?;

    if contacts.is_empty() {
        println!("{}", "  No submissions yet".yellow());
        return Ok(());
    }

    println!(
        "  {:<4} {:<17} {:<20} {:<25} {}",
        "ID".bright_white().bold(),
        "Received".bright_white().bold(),
        "Name".bright_white().bold(),
        "Email".bright_white().bold(),
        "Subject".bright_white().bold()
    );
    println!("  {}", "─".repeat(90).bright_black());

    for contact in &contacts {
        println!(
            "  {:<4} {:<17} {:<20} {:<25} {}",
            contact.id.to_string().bright_black(),
            contact
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            contact.name.cyan(),
            contact.email,
            contact.subject
        );
    }

    println!();
    println!(
        "  Shown: {}",
        contacts.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Checks connectivity and prints per-table record counts.
async fn check_db(pool: &PgPool) -> Result<()> {
    println!("{}", "🔍 Database check".bright_blue().bold());
    println!();

    let version: String = sqlx::query_scalar("SELECT version()")
        .fetch_one(pool)
        .await
        .context("Database is not reachable")?;
    println!("{}", "✅ Connected".green().bold());
    println!("  {}", version.bright_black());
    println!();

    let (services_count, posts_count) = counts(pool).await?;

    let contacts_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contacts")
        .fetch_one(pool)
        .await?;

    let users_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    println!(
        "  Services:   {}",
        services_count.to_string().bright_green().bold()
    );
    println!(
        "  Blog posts: {}",
        posts_count.to_string().bright_green().bold()
    );
    println!(
        "  Contacts:   {}",
        contacts_count.to_string().bright_green().bold()
    );
    println!(
        "  Users:      {}",
        users_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

async fn counts(pool: &PgPool) -> Result<(i64, i64)> {
    let services: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM services")
        .fetch_one(pool)
        .await
        .context("Failed to count services (have migrations run?)")?;

    let posts: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM blog_posts")
        .fetch_one(pool)
        .await
        .context("Failed to count blog posts (have migrations run?)")?;

    Ok((services, posts))
}
