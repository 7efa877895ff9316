//! PostgreSQL persistence for comments — pool configuration, the database
//! facade, and the comment repository.

pub mod config;
pub mod database;
pub mod repository;

pub use config::DatabaseConfig;
pub use database::Database;
pub use repository::CommentRepository;
