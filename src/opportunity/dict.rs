use std::collections::HashMap;

use serde::{Deserialize, Deserializer};

/// A single opportunity as returned by the backend.
///
/// The backend reuses one shape for every category, so fields that only
/// exist for some categories are optional here and checked when the item is
/// turned into a typed opportunity.
#[derive(Debug, Clone, Deserialize)]
pub struct OpportunityDict {
    pub id: String,
    pub topic_name: String,
    #[serde(default)]
    pub story_title: Option<String>,
    #[serde(default)]
    pub chapter_title: Option<String>,
    #[serde(default)]
    pub skill_description: Option<String>,
    #[serde(default)]
    pub content_count: Option<u32>,
    #[serde(default)]
    pub translation_counts: Option<HashMap<String, u32>>,
    #[serde(default)]
    pub question_count: Option<u32>,
}

/// `null` and a missing field both mean "nothing here".
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpportunitiesPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub opportunities: Vec<OpportunityDict>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub more: bool,
}
