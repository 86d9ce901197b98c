//! Venue locations.

use serde::{Deserialize, Serialize};

/// A conference venue (display-only).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    /// Venue kind label shown above the name (e.g. "Sede principal")
    #[serde(default, rename = "type")]
    pub kind: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, rename = "mapEmbed", skip_serializing_if = "Option::is_none")]
    pub map_embed: Option<String>,
    #[serde(default, rename = "mapImage", skip_serializing_if = "Option::is_none")]
    pub map_image: Option<String>,
    #[serde(default, rename = "mapsUrl", skip_serializing_if = "Option::is_none")]
    pub maps_url: Option<String>,
}
