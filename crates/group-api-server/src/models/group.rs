use serde::{Deserialize, Serialize};

/// A student, always owned by exactly one group.
///
/// Ids come from a process-global counter: globally unique, strictly
/// increasing in assignment order, never reused even after the owning
/// group is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
}

/// A named collection of students with a store-assigned identifier.
///
/// The id is a stable key, not a position: deleting other groups never
/// renumbers this one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: i64,
    pub group_name: String,
    pub members: Vec<Student>,
}

/// Listing projection of [`Group`]: member ids instead of full records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSummary {
    pub id: i64,
    pub group_name: String,
    pub members: Vec<i64>,
}

impl Group {
    pub fn summary(&self) -> GroupSummary {
        GroupSummary {
            id: self.id,
            group_name: self.group_name.clone(),
            members: self.members.iter().map(|s| s.id).collect(),
        }
    }
}
