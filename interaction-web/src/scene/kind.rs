//! The three mutually exclusive scenes, in rotation order

use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneKind {
    #[default]
    Unit,
    Pile,
    Circle,
}

impl SceneKind {
    pub const COUNT: usize = 3;

    pub fn from_index(idx: usize) -> Self {
        match idx % Self::COUNT {
            0 => SceneKind::Unit,
            1 => SceneKind::Pile,
            _ => SceneKind::Circle,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            SceneKind::Unit => 0,
            SceneKind::Pile => 1,
            SceneKind::Circle => 2,
        }
    }

    pub fn next(&self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn title(&self) -> &'static str {
        match self {
            SceneKind::Unit => "Interaction-Unit",
            SceneKind::Pile => "Interaction-Pile",
            SceneKind::Circle => "Interaction-Circle",
        }
    }

    /// Header counter, e.g. "2 / 3"
    pub fn progress(&self) -> String {
        format!("{} / {}", self.index() + 1, Self::COUNT)
    }
}
