pub mod date;
pub mod host;
pub mod links;
