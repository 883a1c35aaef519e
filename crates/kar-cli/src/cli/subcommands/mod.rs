pub mod auth;
pub mod batch;
pub mod indent;
pub mod record;
pub mod status;

pub use auth::AuthCommands;
pub use batch::BatchCommands;
pub use indent::IndentCommands;
pub use record::{BodyArgs, ListArgs, RecordCommands, WorkflowCommands};
pub use status::StatusCommands;
