//! Generic response bodies

use serde::{Deserialize, Serialize};

use super::{Education, Employment, Skill};

/// Acknowledges a write on a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultResponse {
    pub profile_code: i64,
}

/// Acknowledges a write on a collection entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultResponseWithId {
    pub profile_code: i64,
    pub id: i64,
}

/// Collection listing, `data` is an empty array when there are no entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataList<T> {
    pub data: Vec<T>,
}

impl<T> From<Vec<T>> for DataList<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

pub type SkillList = DataList<Skill>;
pub type EducationList = DataList<Education>;
pub type EmploymentList = DataList<Employment>;
