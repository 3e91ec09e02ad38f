#[cfg(test)]
mod reporter_tests {
    use std::io::{self, Read};

    use homefinder::{
        errors::ReportError,
        models::listing::ListingReport,
        report::reporter::{
            format_listing, parse_listings, read_json_file, read_listings, write_report,
        },
    };

    const FIXTURE: &str = "tests/fixtures/output.json";

    fn render(bytes: &[u8]) -> (usize, String) {
        let response = parse_listings(bytes);
        let mut out: Vec<u8> = Vec::new();
        let count = write_report(&response, &mut out).unwrap();
        (count, String::from_utf8(out).unwrap())
    }

    struct BrokenReader;

    impl Read for BrokenReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stream closed"))
        }
    }

    #[test]
    fn test_format_listing_field_order() {
        let listing = ListingReport {
            street: "3000 Maple Ave".to_string(),
            city: "Dallas".to_string(),
            state_code: "TX".to_string(),
            postal_code: "75201".to_string(),
            href: "https://example.com/3000-maple".to_string(),
            list_price: 350000,
            price_reduced_amount: 10000,
            last_sold_price: 0,
            list_date: "2023-06-01T00:00:00Z".to_string(),
            status: "for_sale".to_string(),
            sqft: 900,
            beds: 2,
            baths: 1,
        };

        let expected = "3000 Maple Ave Dallas, TX 75201\n\
                        Link: https://example.com/3000-maple\n\
                        List Price: 350000\n\
                        List Date: 2023-06-01T00:00:00Z\n\
                        Status: for_sale\n\
                        Price Reduced Amount: 10000\n\
                        Last Sold Price: 0\n\
                        Sqft: 900\n\
                        Beds: 2\n\
                        Baths: 1\n\
                        \n";
        assert_eq!(format_listing(&listing), expected);
    }

    #[test]
    fn test_report_has_one_block_per_result_in_order() {
        let bytes = std::fs::read(FIXTURE).unwrap();
        let (count, report) = render(&bytes);

        assert_eq!(count, 3);
        let blocks: Vec<&str> = report.trim_end().split("\n\n").collect();
        assert_eq!(blocks.len(), 3);
        assert!(blocks[0].starts_with("3525 Turtle Creek Blvd Apt 9C Dallas, TX 75219\n"));
        assert!(blocks[1].starts_with("4016 Rawlins St Dallas, TX 75219\n"));
        assert!(blocks[2].starts_with("2828 Hood St Apt 1104 Dallas, TX 75219\n"));
        for block in blocks {
            assert_eq!(block.lines().count(), 10);
        }
    }

    #[test]
    fn test_missing_sqft_reports_zero() {
        let bytes = std::fs::read(FIXTURE).unwrap();
        let (_, report) = render(&bytes);
        let second = report.split("\n\n").nth(1).unwrap();

        assert!(second.contains("\nSqft: 0\n"));
        assert!(second.contains("\nBeds: 2\n"));
        assert!(second.contains("\nPrice Reduced Amount: 0\n"));
        assert!(second.contains("\nLast Sold Price: 0\n"));
    }

    #[test]
    fn test_invalid_document_reports_nothing() {
        let bytes = std::fs::read("tests/fixtures/not_json.txt").unwrap();
        let (count, report) = render(&bytes);
        assert_eq!(count, 0);
        assert!(report.is_empty());
    }

    #[test]
    fn test_empty_object_reports_nothing() {
        let (count, report) = render(b"{}");
        assert_eq!(count, 0);
        assert!(report.is_empty());
    }

    #[test]
    fn test_read_json_file_reports_fixture() {
        assert_eq!(read_json_file(FIXTURE).unwrap(), 3);
    }

    #[test]
    #[should_panic(expected = "failed to open")]
    fn test_missing_file_is_fatal() {
        let _ = read_json_file("tests/fixtures/does_not_exist.json");
    }

    #[test]
    fn test_unreadable_file_is_recoverable() {
        // Opening a directory succeeds on Linux, reading it does not.
        let result = read_json_file(std::env::temp_dir());
        assert!(matches!(result, Err(ReportError::Read { .. })));
    }

    #[test]
    fn test_broken_stream_is_read_error() {
        let result = read_listings(&mut BrokenReader, "stream");
        match result {
            Err(ReportError::Read { path, source }) => {
                assert_eq!(path, "stream");
                assert_eq!(source.kind(), io::ErrorKind::UnexpectedEof);
            }
            other => panic!("expected read error, got {:?}", other),
        }
    }
}
