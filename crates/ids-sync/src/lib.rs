pub mod error;
pub mod event;
pub mod handlers;
pub mod outcome;

pub use error::{Result, SyncError};
pub use event::{EventKind, IdentityEvent};
pub use handlers::context::SyncContext;
pub use handlers::dispatcher::dispatch;
pub use handlers::{handle_create_user, handle_delete_user, handle_update_user};
pub use outcome::{CreateUserResult, DeleteUserResult, UpdateUserOutcome};
