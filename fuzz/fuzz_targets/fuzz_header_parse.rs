//! Fuzz target for graph header parsing.
//!
//! Arbitrary bytes are never a valid header in general, so this target
//! only asserts that parsing a truncated or malformed header returns a
//! `GraphError` gracefully rather than panicking.

#![no_main]

use std::io::Cursor;

use cortex_graph::header::Header;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut cursor = Cursor::new(data);
    let _ = Header::from_reader(&mut cursor);
});
