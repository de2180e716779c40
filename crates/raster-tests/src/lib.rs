//! Integration tests for raster-rs crates.
//!
//! End-to-end checks that decode real encoded bytes with `raster-io` and
//! push the result through `raster-ops`, the way a UI preparing icons and
//! thumbnails would.
