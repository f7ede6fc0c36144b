//! Embedded corpus
//!
//! Word list and usage weights compiled into the binary at build time.

// Include generated tables from build script
include!(concat!(env!("OUT_DIR"), "/words.rs"));
include!(concat!(env!("OUT_DIR"), "/frequencies.rs"));
