pub mod body;
pub mod limit;
pub mod parse;
