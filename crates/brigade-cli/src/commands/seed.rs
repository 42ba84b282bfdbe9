//! `seed` subcommand — bootstrap the default admin account and the
//! restaurant profile.

use clap::Args;

use brigade_auth::password::PasswordHasher;
use brigade_core::config::AppConfig;
use brigade_core::error::AppError;
use brigade_database::repositories::restaurant::RestaurantRepository;
use brigade_database::repositories::user::UserRepository;
use brigade_entity::user::{CreateUser, UserRole};

/// Arguments for the seed command.
#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Email for the bootstrap admin account.
    #[arg(long, env = "ADMIN_EMAIL", default_value = "admin@restaurant.com")]
    pub admin_email: String,
    /// Password for the bootstrap admin account.
    #[arg(long, env = "ADMIN_PASSWORD", default_value = "Admin123!")]
    pub admin_password: String,
}

/// Creates the default admin user and restaurant profile if absent.
pub async fn run(env: &str, args: &SeedArgs) -> Result<(), AppError> {
    let config = AppConfig::load(env)?;
    let pool = brigade_database::connection::create_pool(&config.database).await?;

    brigade_database::migration::run_migrations(&pool).await?;

    let user_repo = UserRepository::new(pool.clone());
    let restaurant_repo = RestaurantRepository::new(pool);
    let hasher = PasswordHasher::new();

    match user_repo.find_by_email(&args.admin_email).await? {
        Some(_) => println!("Admin user already exists"),
        None => {
            let password_hash = hasher.hash(&args.admin_password)?;
            let admin = user_repo
                .create(&CreateUser {
                    name: "Admin User".to_string(),
                    email: args.admin_email.clone(),
                    password_hash,
                    role: UserRole::Admin,
                    phone: None,
                })
                .await?;
            println!("Admin user created: {}", admin.email);
        }
    }

    // get_or_create installs the default profile when none exists.
    restaurant_repo.get_or_create().await?;
    println!("Restaurant profile ready");

    println!();
    println!("Default credentials:");
    println!("Email: {}", args.admin_email);
    println!("Password: {}", args.admin_password);
    println!();
    println!("Change the default password after first login.");

    Ok(())
}
