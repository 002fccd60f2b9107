//! Fuzz target for the load and render pipeline.
//!
//! This fuzzer checks that loading and rendering:
//! 1. Never panic on malformed input
//! 2. Only ever accept records that satisfy the table invariants

#![no_main]

use libfuzzer_sys::fuzz_target;
use citygen::{Converter, ConverterConfig, ParserConfig};
use std::io::Write;

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    if let Ok(mut temp_file) = tempfile::NamedTempFile::new() {
        if temp_file.write_all(data).is_ok() {
            let converter = Converter::with_config(ConverterConfig {
                parser: ParserConfig::default().with_delimiter(None),
                ..ConverterConfig::default()
            });

            if let Ok(conversion) = converter.load(temp_file.path()) {
                assert!(conversion.records.iter().all(|r| r.is_valid()));
                let _ = converter.render(&conversion.records, "city_data.h");
            }
        }
    }
});
