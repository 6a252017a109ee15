//! Files generated from the site configuration.
//!
//! - **Manifest**: web app manifest for installable sites (`manifest.json`)

pub mod manifest;
