pub const HOST: &str = "127.0.0.1";
pub const PORT: u16 = 5000;
pub const RUST_LOG: &str = "info,tower_http=info";
pub const DATABASE_URL: &str = "sqlite://todos.db?mode=rwc";
pub const DB_MAX_CONNECTIONS: u32 = 10;
pub const DB_MIN_IDLE: u32 = 2;
