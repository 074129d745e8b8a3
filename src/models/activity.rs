use serde::{Deserialize, Serialize};

// The activity record as it travels over the wire. The activity name is the
// directory key, not a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}
