pub mod goal_dto;
pub mod goal_list_response;
pub mod goal_response;
#[allow(clippy::module_inception)]
pub mod goals;
