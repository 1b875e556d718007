mod database;
mod hashing;
mod jwt;
mod myconfig;
mod upload;

pub use self::database::{ConnectionManager, ConnectionPool};
pub use self::hashing::Hashing;
pub use self::jwt::{Claims, JwtConfig};
pub use self::myconfig::Config;
pub use self::upload::UploadStorage;
