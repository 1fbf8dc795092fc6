mod error;
mod extractors;
mod list_query;
mod resolve;
