//! Speaker profiles.

use serde::{Deserialize, Serialize};

/// A conference speaker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Speaker {
    /// Stable identifier referenced from session `speakers` arrays
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub specialty: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Identity account that claimed this profile, if any. At most one
    /// account may claim a speaker; claiming itself happens in the
    /// external identity backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claimed_by: Option<String>,
}

impl Speaker {
    pub fn is_claimed(&self) -> bool {
        self.claimed_by.is_some()
    }

    /// Two-letter initials for avatar placeholders, skipping honorifics.
    pub fn initials(&self) -> String {
        let name = self.name.trim();
        let name = name
            .strip_prefix("Dra. ")
            .or_else(|| name.strip_prefix("Dr. "))
            .or_else(|| name.strip_prefix("Dra."))
            .or_else(|| name.strip_prefix("Dr."))
            .unwrap_or(name)
            .trim();

        let parts: Vec<&str> = name.split_whitespace().collect();
        match parts.as_slice() {
            [] => String::new(),
            [only] => only.chars().take(2).collect::<String>().to_uppercase(),
            [first, .., last] => {
                let mut initials = String::new();
                initials.extend(first.chars().next());
                initials.extend(last.chars().next());
                initials.to_uppercase()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn speaker(name: &str) -> Speaker {
        Speaker {
            id: "sp1".to_string(),
            name: name.to_string(),
            area: String::new(),
            specialty: String::new(),
            institution: String::new(),
            photo: None,
            bio: None,
            claimed_by: None,
        }
    }

    #[test]
    fn test_initials_skip_honorific() {
        assert_eq!(speaker("Dra. Ana María Pérez").initials(), "AP");
        assert_eq!(speaker("Dr. Juan Sosa").initials(), "JS");
    }

    #[test]
    fn test_initials_single_name() {
        assert_eq!(speaker("Cher").initials(), "CH");
    }
}
