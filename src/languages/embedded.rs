//! Embedded lives table
//!
//! Table compiled into the binary at build time.

// Include generated table from build script
include!(concat!(env!("OUT_DIR"), "/languages.rs"));
