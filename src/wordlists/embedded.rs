//! Embedded word list
//!
//! Dictionary compiled into the binary at build time.

include!(concat!(env!("OUT_DIR"), "/words.rs"));
