use std::{
    fs,
    io::{self, Read, Write},
    path::Path,
};

use log::{debug, info};

use crate::errors::ReportError;
use crate::models::listing::{ListingReport, SearchResponse};

/// Parses a saved search response. Never fails: a document that is not JSON
/// at all yields no listings, and fields that are missing or of the wrong
/// type are zeroed.
pub fn parse_listings(bytes: &[u8]) -> SearchResponse {
    match serde_json::from_slice(bytes) {
        Ok(response) => response,
        Err(e) => {
            debug!("Listings document did not parse, reporting nothing: {}", e);
            SearchResponse::default()
        }
    }
}

pub fn format_listing(listing: &ListingReport) -> String {
    format!(
        "{} {}, {} {}\nLink: {}\nList Price: {}\nList Date: {}\nStatus: {}\nPrice Reduced Amount: {}\nLast Sold Price: {}\nSqft: {}\nBeds: {}\nBaths: {}\n\n",
        listing.street,
        listing.city,
        listing.state_code,
        listing.postal_code,
        listing.href,
        listing.list_price,
        listing.list_date,
        listing.status,
        listing.price_reduced_amount,
        listing.last_sold_price,
        listing.sqft,
        listing.beds,
        listing.baths
    )
}

/// Writes one block per result in document order, returning how many were
/// written.
pub fn write_report<W: Write>(response: &SearchResponse, out: &mut W) -> io::Result<usize> {
    let results = &response.data.home_search.results;
    for result in results {
        let listing = ListingReport::from(result);
        out.write_all(format_listing(&listing).as_bytes())?;
    }
    out.flush()?;
    Ok(results.len())
}

/// Reads the contents of an already opened report source.
pub fn read_listings<R: Read>(reader: &mut R, path: &str) -> Result<Vec<u8>, ReportError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|source| ReportError::Read {
            path: path.to_string(),
            source,
        })?;
    Ok(bytes)
}

/*
   Prints every listing of a saved search response to stdout.
   A file that cannot be opened is fatal, a failed read is returned to the
   caller and nothing is printed
*/
pub fn read_json_file<P: AsRef<Path>>(path: P) -> Result<usize, ReportError> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let mut file = fs::File::open(path)
        .unwrap_or_else(|err| panic!("failed to open {}: {}", display, err));

    let bytes = read_listings(&mut file, &display)?;
    drop(file);

    let response = parse_listings(&bytes);
    let stdout = io::stdout();
    let count = write_report(&response, &mut stdout.lock())?;

    info!("Reported {} listings from {}", count, display);
    Ok(count)
}
