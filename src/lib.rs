pub mod config;
pub mod errors;
pub mod logger;
pub mod models;
pub mod realtor;
pub mod report;

pub use errors::ReportError;
pub use realtor::realtor_client::RealtorClient;
pub use realtor::search_request::SearchRequest;
