use anyhow::Result;
use homefinder::{config, logger::setup_logger, report::reporter::read_json_file};
use log::error;

fn main() -> Result<()> {
    // Initialize logger
    setup_logger()?;

    let config = config::read_config();

    // Fetching is opt-in through homefinder::RealtorClient, the default run
    // only reports on a previously saved response.
    if let Err(err) = read_json_file(&config.report_path) {
        error!("Error: {:?}", err);
        return Err(err.into());
    }

    Ok(())
}
