//! Configuration section definitions.
//!
//! Each module corresponds to a section in `site.toml`:
//!
//! | Module     | TOML Section   | Purpose                               |
//! |------------|----------------|---------------------------------------|
//! | `site`     | `[site]`       | Title, description, URL, language     |
//! | `author`   | `[author]`     | Author name, twitter, social links    |
//! | `info`     | `[info]`       | Info box heading                      |
//! | `manifest` | `[manifest]`   | Web app manifest fields               |
//! | `contact`  | `[contact]`    | Contact email                         |
//! | `palette`  | `[palette]`    | Location of the shared color palette  |

mod author;
mod contact;
mod info;
pub mod manifest;
mod palette;
mod site;

pub use author::{AuthorConfig, SocialLink};
pub use contact::ContactConfig;
pub use info::InfoConfig;
pub use manifest::{ColorRef, DisplayMode, ManifestConfig, SHORT_NAME_MAX_CHARS};
pub use palette::PaletteSectionConfig;
pub use site::SiteInfoConfig;
