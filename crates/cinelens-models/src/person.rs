use serde::{Deserialize, Serialize};

/// A person search result. Only entries whose department is "Acting" are
/// relevant when browsing filmographies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Actor {
    pub id: u64,
    pub name: String,
    pub profile_path: Option<String>,
    #[serde(default)]
    pub known_for_department: String,
    #[serde(default)]
    pub popularity: f64,
}

impl Actor {
    pub fn is_acting(&self) -> bool {
        self.known_for_department == "Acting"
    }
}
