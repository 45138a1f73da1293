//! Core errors and constants for `polycache`.
//!
//! ## Key Components
//!
//! - **`errors`**: Defines the primary `Error` enum and `Result` type alias
//!   shared by the codec and the cache-store boundary.
//! - **`constants`**: Wire format constants (reserved discriminator name,
//!   document start bytes) and environment variable names.
pub mod constants;
pub mod errors;

pub use self::{
    constants::*,
    errors::{Error, Result},
};
