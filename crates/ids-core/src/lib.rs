pub mod error;
pub mod models;
pub mod normalize;
pub mod validate;

pub use error::{CoreError, Result};
pub use models::identity_event::{CreatePayload, DeletePayload, EmailEntry, UpdatePayload};
pub use models::user::{NewUser, User, UserPatch};

/// Ceiling applied to name, email and external id values.
pub const MAX_FIELD_LEN: usize = 128;

#[cfg(test)]
mod tests;
