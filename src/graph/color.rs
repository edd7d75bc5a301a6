//! Edge color tags.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Color tag attached to every edge.
///
/// Grey marks the tree edges grown from a parent to its child. The other
/// colors mark the cross-links added afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// Tree edge between a parent and the child it spawned
    #[default]
    Grey,
    /// Self-loop
    Green,
    /// Link to the next vertex on the same level
    Blue,
    /// Link to a random vertex one level deeper
    Yellow,
    /// Link to a random vertex two levels deeper
    Red,
}

impl Color {
    /// Number of distinct colors.
    pub const COUNT: usize = 5;

    /// Every color, in histogram order.
    pub const ALL: [Color; Color::COUNT] = [
        Color::Grey,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::Red,
    ];

    /// Position of this color in a fixed-size count table.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the lowercase name used in JSON output.
    pub fn label(&self) -> &'static str {
        match self {
            Color::Grey => "grey",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Red => "red",
        }
    }

    /// Returns true for every color except the tree-edge grey.
    pub fn is_cross_link(&self) -> bool {
        !matches!(self, Color::Grey)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
