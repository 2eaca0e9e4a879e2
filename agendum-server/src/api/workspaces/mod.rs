pub mod create_workspace_request;
pub mod update_workspace_request;
pub mod workspace_created_response;
pub mod workspace_dto;
pub mod workspace_list_response;
#[allow(clippy::module_inception)]
pub mod workspaces;
