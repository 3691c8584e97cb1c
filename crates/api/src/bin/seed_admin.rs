//! Creates the bootstrap administrator account if it does not exist.
//!
//! Registration always produces USER accounts, so the first admin has to
//! come from somewhere; run this once against a fresh database.
//!
//! ```text
//! DATABASE_URL=postgres://... SEED_ADMIN_PASSWORD=... cargo run --bin seed-admin
//! ```

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use taskhive_api::auth::password::hash_password;
use taskhive_core::roles::ROLE_ADMIN;
use taskhive_db::models::user::CreateUser;
use taskhive_db::repositories::UserRepo;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seed_admin=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let username = std::env::var("SEED_ADMIN_USERNAME").unwrap_or_else(|_| "admin".into());
    let password = std::env::var("SEED_ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".into());

    let pool = taskhive_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");

    taskhive_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    let existing = UserRepo::find_by_username(&pool, &username)
        .await
        .expect("Failed to query users");
    if existing.is_some() {
        tracing::info!(%username, "Admin account already exists, nothing to do");
        return;
    }

    let password_hash = hash_password(&password).expect("Failed to hash password");

    let input = CreateUser {
        name: "Administrator".to_string(),
        username: username.clone(),
        password_hash,
        role: ROLE_ADMIN.to_string(),
    };
    UserRepo::create(&pool, &input)
        .await
        .expect("Failed to create admin user");

    tracing::info!(%username, "Admin account created");
}
