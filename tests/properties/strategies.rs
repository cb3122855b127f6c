use proptest::prelude::*;

/// Every accepted unit spelling, including the bare-bytes empty suffix.
pub const UNITS: [&str; 11] = ["", "B", "b", "K", "k", "M", "m", "G", "g", "T", "t"];

pub fn unit_strategy() -> impl Strategy<Value = &'static str> {
	prop::sample::select(UNITS.to_vec())
}

pub fn multiplier_for(unit: &str) -> i64 {
	match unit.to_uppercase().as_str() {
		"" | "B" => 1,
		"K" => 1 << 10,
		"M" => 1 << 20,
		"G" => 1 << 30,
		"T" => 1 << 40,
		other => panic!("unexpected unit symbol: {}", other),
	}
}
