use serde::{Deserialize, Serialize};

/// Compass direction a roof surface faces.
///
/// `Flat` covers roofs without a meaningful orientation (panels are
/// assumed to be racked facing the sun).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoofDirection {
    North,
    South,
    East,
    West,
    Flat,
}

impl RoofDirection {
    /// All directions, in presentation order.
    pub const ALL: [RoofDirection; 5] = [
        Self::South,
        Self::East,
        Self::West,
        Self::North,
        Self::Flat,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
            Self::Flat => "flat",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "north" | "n" => Some(Self::North),
            "south" | "s" => Some(Self::South),
            "east" | "e" => Some(Self::East),
            "west" | "w" => Some(Self::West),
            "flat" | "f" => Some(Self::Flat),
            _ => None,
        }
    }

    /// Production multiplier for panels facing this way.
    ///
    /// Northern-hemisphere table: south-facing roofs produce at full
    /// rate, east/west lose roughly a fifth, north-facing roofs less
    /// than half, and flat roofs sit in between.
    pub fn production_multiplier(&self) -> f64 {
        match self {
            Self::South => 1.0,
            Self::East | Self::West => 0.8,
            Self::North => 0.45,
            Self::Flat => 0.85,
        }
    }
}
