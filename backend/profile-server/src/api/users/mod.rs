pub mod user_profile_response;
#[allow(clippy::module_inception)]
pub mod users;
