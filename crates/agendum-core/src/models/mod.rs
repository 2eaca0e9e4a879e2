pub mod task;
pub mod user;
pub mod workspace;
