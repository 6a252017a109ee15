//! `[contact]` configuration.

use crate::config::ConfigDiagnostics;
use crate::config::util::is_email;
use macros::Config;
use serde::{Deserialize, Serialize};

/// Contact details shown in the site footer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "contact")]
pub struct ContactConfig {
    /// Contact email address.
    #[config(inline_doc = "e.g. \"alice@example.com\"")]
    pub email: String,
}

impl ContactConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.email.is_empty() && !is_email(&self.email) {
            diag.error_with_hint(
                Self::FIELDS.email,
                format!("'{}' is not an email address", self.email),
                "use format like alice@example.com",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn errors_for(email: &str) -> ConfigDiagnostics {
        let contact = ContactConfig {
            email: email.into(),
        };
        let mut diag = ConfigDiagnostics::new();
        contact.validate(&mut diag);
        diag
    }

    #[test]
    fn test_email() {
        assert!(errors_for("alice@example.com").is_empty());
        assert!(errors_for("").is_empty());
        assert!(errors_for("alice.example.com").has_error_for("contact.email"));
    }
}
