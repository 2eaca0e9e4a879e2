pub mod models;

pub use models::{task::Task, user::User, workspace::Workspace};

#[cfg(test)]
mod tests;
