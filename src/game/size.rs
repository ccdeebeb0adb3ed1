use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Named board presets offered to players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardSize {
    /// 6 x 7, the classic board.
    Small,
    /// 6 x 9.
    #[default]
    Medium,
    /// 7 x 8.
    Large,
}

impl BoardSize {
    pub const ALL: [BoardSize; 3] = [BoardSize::Small, BoardSize::Medium, BoardSize::Large];

    /// `(rows, cols)` for this preset.
    pub fn dimensions(self) -> (usize, usize) {
        match self {
            BoardSize::Small => (6, 7),
            BoardSize::Medium => (6, 9),
            BoardSize::Large => (7, 8),
        }
    }

    /// Name of the display template clients use to draw this board.
    pub fn template(self) -> &'static str {
        match self {
            BoardSize::Small => "board_small",
            BoardSize::Medium => "board_medium",
            BoardSize::Large => "board_large",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BoardSize::Small => "small",
            BoardSize::Medium => "medium",
            BoardSize::Large => "large",
        }
    }

    /// Lenient parse for query strings: unknown or missing values mean medium.
    pub fn from_query(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BoardSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(BoardSize::Small),
            "medium" => Ok(BoardSize::Medium),
            "large" => Ok(BoardSize::Large),
            other => Err(format!(
                "unknown board size '{other}' (expected 'small', 'medium', or 'large')"
            )),
        }
    }
}
