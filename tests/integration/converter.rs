use datasize::{
	from_bytes, parse_bytes, to_bytes, utils::setup_logging, ConversionError, INVALID_SIZE,
};

const KB: i64 = 1024;
const MB: i64 = 1024 * KB;
const GB: i64 = 1024 * MB;
const TB: i64 = 1024 * GB;

#[test]
fn test_parse_through_public_api() {
	setup_logging();

	assert_eq!(to_bytes(Some("4567G")), 4567 * GB);
	assert_eq!(to_bytes(Some("128m")), 128 * MB);
	assert_eq!(to_bytes(Some("42")), 42);
	assert_eq!(to_bytes(Some("1.5K")), 1536);
	assert_eq!(to_bytes(Some("2T")), 2 * TB);
}

#[test]
fn test_sentinel_contract_through_public_api() {
	assert_eq!(INVALID_SIZE, -1);
	assert_eq!(to_bytes(None), INVALID_SIZE);
	assert_eq!(to_bytes(Some("")), INVALID_SIZE);
	assert_eq!(to_bytes(Some("10X")), INVALID_SIZE);
}

#[test]
fn test_result_contract_through_public_api() {
	assert_eq!(parse_bytes("512").unwrap(), 512);

	let error = parse_bytes("ten megabytes").unwrap_err();
	assert!(matches!(error, ConversionError::UnparseableInput(_)));
	assert_eq!(error.to_string(), "Unparseable data size: ten megabytes");
}

#[test]
fn test_format_through_public_api() {
	assert_eq!(from_bytes(0), "0B");
	assert_eq!(from_bytes(1023), "1023B");
	assert_eq!(from_bytes(1024), "1KB");
	assert_eq!(from_bytes(3 * MB), "3MB");
	assert_eq!(from_bytes(1536), "1.5KB");
}

#[test]
fn test_formatted_output_is_accepted_by_the_parser() {
	for bytes in [0, 42, 1023, 1024, 1536, 3 * MB, GB, 5 * TB] {
		let formatted = from_bytes(bytes);
		assert_eq!(
			to_bytes(Some(&formatted)),
			bytes,
			"round trip failed for {}",
			formatted
		);
	}
}
