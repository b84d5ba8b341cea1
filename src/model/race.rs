use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Race {
    pub id: i32,
    pub location: String,

    /// Id of the winning driver. Not guaranteed to reference an existing driver.
    #[serde(rename = "winnerId")]
    pub winner_id: i32,
}

impl Race {
    pub fn new(id: i32, location: impl Into<String>, winner_id: i32) -> Self {
        Self {
            id,
            location: location.into(),
            winner_id,
        }
    }
}
