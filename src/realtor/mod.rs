pub mod realtor_client;
pub mod search_request;
