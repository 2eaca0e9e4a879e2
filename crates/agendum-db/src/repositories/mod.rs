pub mod task_repository;
pub mod user_repository;
pub mod workspace_repository;
