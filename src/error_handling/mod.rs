//! Error types.
//!
//! Errors are split by where they arise:
//! - **Initialization**: logger setup
//! - **Database**: file creation, SQL execution, migrations
//! - **Validation**: request input rejected at the API boundary
//!
//! The geometric core never fails; these types only cover the code around it.

mod types;

pub use types::{DatabaseError, InitializationError, SeedError, ValidationError};
