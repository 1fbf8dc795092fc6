mod error;
mod gateway;
mod http_gateway;

pub use error::{IdentityError, Result as IdentityResult};
pub use gateway::{IdentityGateway, IdentityLookup};
pub use http_gateway::HttpIdentityGateway;
