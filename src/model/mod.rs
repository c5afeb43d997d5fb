pub mod github;
pub mod lighthouse;
