pub mod auth;
pub mod batch;
pub mod dashboard;
pub mod dispatch;
pub mod expenditure;
pub mod indent;
pub mod record;
pub mod schema;
pub mod shared;
pub mod status;
