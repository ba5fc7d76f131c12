//! Embedded category catalog
//!
//! Catalog compiled into the binary at build time.

/// A catalog entry as it appears in the generated table
///
/// Validation into a [`crate::core::Category`] happens at runtime.
#[derive(Debug, Clone, Copy)]
pub struct RawCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub tag: &'static str,
    pub weight: u8,
    pub words: [&'static str; 4],
    pub pinned: bool,
}

// Include generated table from build script
include!(concat!(env!("OUT_DIR"), "/catalog.rs"));
