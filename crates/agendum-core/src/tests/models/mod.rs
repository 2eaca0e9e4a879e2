mod task;
mod user;
mod workspace;
