mod from_row;
pub mod queries;
mod schema;
pub mod seed;

pub use schema::init_db;

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;

pub type DbPool = Pool<SqliteConnectionManager>;

/// Ed25519 key material for access-token signing and verification.
#[derive(Clone)]
pub struct TokenKeys {
    /// 32-byte Ed25519 seed.
    pub signing_key: Vec<u8>,
    /// Base64-encoded verifying key.
    pub public_key: String,
}

/// Application state holding the database pool and token configuration
#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub keys: TokenKeys,
    pub token_ttl_secs: u64,
    pub base_url: String,
}

pub fn create_pool(database_path: &str) -> Result<DbPool, r2d2::Error> {
    let manager = SqliteConnectionManager::file(database_path);
    Pool::builder().max_size(10).build(manager)
}
