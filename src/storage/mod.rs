//! Persistence adapter for voter records.
//!
//! SQLite pool setup, embedded migrations and access to the `voters` table.

mod migrations;
mod models;
mod pool;
mod voters;

// Re-export commonly used items
pub use migrations::run_migrations;
pub use models::{NewVoter, VoterRecord};
pub use pool::init_db_pool_with_path;
pub use voters::{count_voters, fetch_locatable_voters, insert_voter, parse_coordinate};
