pub mod badges;
pub mod delete_response;
pub mod error;
pub mod extractors;
pub mod goals;
pub mod list_query;
pub mod resolve;
pub mod users;
