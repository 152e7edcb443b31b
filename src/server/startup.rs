use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParams, UserRole},
};

/// Username of the account seeded on first run.
const DEFAULT_ADMIN_USERNAME: &str = "admin";
/// Password of the account seeded on first run. Meant to be changed immediately.
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";
const DEFAULT_ADMIN_EMAIL: &str = "admin@hotel.local";

/// Connects to the SQLite database and brings the schema up to date.
///
/// Opens the pool against `DATABASE_URL` and applies every pending migration
/// before anything else touches the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Initializes the session store on top of the application database.
///
/// Reuses the SeaORM SQLite pool for session storage, migrates the session
/// table, and returns the Axum layer that attaches a `Session` to every
/// request. Sessions expire after seven days of inactivity.
///
/// # Arguments
/// - `db` - Database connection whose pool backs the session store
///
/// # Returns
/// - `Ok(SessionManagerLayer<SqliteStore>)` - Session layer ready to mount on the router
/// - `Err(AppError)` - Failed to migrate the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store.migrate().await?;

    Ok(SessionManagerLayer::new(session_store)
        .with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// Seeds the default admin account when no admin user exists.
///
/// On a fresh database there is no way to log in, so the first startup creates
/// an active `admin` user with a well-known password and logs a warning telling
/// the operator to change it. Subsequent startups find the admin (or any other
/// admin account) and do nothing.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(())` - An admin user exists (pre-existing or just created)
/// - `Err(AppError)` - Database or hashing error during the check or insert
pub async fn check_for_admin(db: &DatabaseConnection) -> Result<(), AppError> {
    let user_repo = UserRepository::new(db);

    if user_repo.admin_exists().await? {
        return Ok(());
    }

    let password_hash = bcrypt::hash(DEFAULT_ADMIN_PASSWORD, bcrypt::DEFAULT_COST)?;

    user_repo
        .create(CreateUserParams {
            username: DEFAULT_ADMIN_USERNAME.to_string(),
            email: DEFAULT_ADMIN_EMAIL.to_string(),
            password_hash,
            role: UserRole::Admin,
        })
        .await?;

    tracing::warn!(
        "No admin user found; created default admin '{}' with password '{}'. Change it immediately.",
        DEFAULT_ADMIN_USERNAME,
        DEFAULT_ADMIN_PASSWORD
    );

    Ok(())
}
