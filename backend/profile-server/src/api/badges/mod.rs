pub mod badge_dto;
pub mod badge_list_response;
pub mod badge_response;
#[allow(clippy::module_inception)]
pub mod badges;
