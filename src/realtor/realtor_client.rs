use std::{env, fs, io::Write};

use log::{debug, info, warn};
use reqwest::blocking::{Client, Request};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

use crate::config::Config;
use crate::errors::ReportError;

use super::search_request::SearchRequest;

pub const API_KEY_HEADER: &str = "x-rapidapi-key";
pub const API_HOST_HEADER: &str = "x-rapidapi-host";

#[derive(Debug)]
pub struct RealtorClient {
    client: Client,
    api_url: String,
    api_host: String,
    api_key_env: String,
    output_path: String,
}

// Values that cannot be sent as a header go out empty, same as a missing key.
fn header_value(name: &str, raw: &str) -> HeaderValue {
    match HeaderValue::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            warn!("Invalid value for header {}, sending it empty: {}", name, e);
            HeaderValue::from_static("")
        }
    }
}

/// Writes `body` to `path`, replacing any existing file.
pub fn write_output_file(path: &str, body: &[u8]) -> Result<usize, ReportError> {
    let mut file = fs::File::create(path).map_err(|source| ReportError::Persist {
        path: path.to_string(),
        source,
    })?;
    file.write_all(body).map_err(|source| ReportError::Persist {
        path: path.to_string(),
        source,
    })?;

    info!("{} bytes written successfully to {}", body.len(), path);
    Ok(body.len())
}

impl RealtorClient {
    pub fn new(config: &Config) -> RealtorClient {
        RealtorClient {
            client: Client::new(),
            api_url: config.api_url.clone(),
            api_host: config.api_host.clone(),
            api_key_env: config.api_key_env.clone(),
            output_path: config.output_path.clone(),
        }
    }

    /*
       The API key is read from the environment on every call and is not
       validated, a missing key is sent empty and left for the API to reject
    */
    pub fn headers(&self) -> HeaderMap {
        let api_key = env::var(&self.api_key_env).unwrap_or_default();

        let mut headers: HeaderMap = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(API_KEY_HEADER, header_value(API_KEY_HEADER, &api_key));
        headers.insert(API_HOST_HEADER, header_value(API_HOST_HEADER, &self.api_host));
        headers
    }

    pub fn build_request(&self, search: &SearchRequest) -> Request {
        let body = serde_json::to_vec(search)
            .unwrap_or_else(|err| panic!("failed to serialize search request: {}", err));

        self.client
            .post(&self.api_url)
            .headers(self.headers())
            .body(body)
            .build()
            .unwrap_or_else(|err| panic!("failed to build request for {}: {}", self.api_url, err))
    }

    /*
       Sends the search and returns the raw response body. The status code
       is not inspected, an error response body is returned like any other
    */
    pub fn fetch(&self, search: &SearchRequest) -> Vec<u8> {
        let request = self.build_request(search);

        info!(
            "Searching listings in {} priced {}..{}",
            search.postal_code, search.list_price.min, search.list_price.max
        );

        let response = self
            .client
            .execute(request)
            .unwrap_or_else(|err| panic!("request to {} failed: {}", self.api_url, err));

        debug!("Listings API responded with {}", response.status());

        match response.bytes() {
            Ok(body) => body.to_vec(),
            Err(e) => {
                warn!("Failed to read listings response body: {}", e);
                Vec::new()
            }
        }
    }

    /// Runs a search and writes the raw response body to `out`.
    pub fn call_api<W: Write>(
        &self,
        limit: i64,
        postal_code: &str,
        min_price: i64,
        max_price: i64,
        out: &mut W,
    ) -> Result<(), ReportError> {
        let search = SearchRequest::new(limit, postal_code, min_price, max_price);
        let body = self.fetch(&search);

        out.write_all(&body)?;
        writeln!(out)?;
        Ok(())
    }

    /// Runs a search and stores the raw response body in the configured
    /// output file, returning the number of bytes written.
    pub fn save_response(
        &self,
        limit: i64,
        postal_code: &str,
        min_price: i64,
        max_price: i64,
    ) -> Result<usize, ReportError> {
        let search = SearchRequest::new(limit, postal_code, min_price, max_price);
        let body = self.fetch(&search);

        write_output_file(&self.output_path, &body)
    }
}
