use std::collections::HashMap;

use serde::Serialize;

use super::{OpportunityDict, OpportunityError, OpportunityType};

/// A chapter that still needs translations or voiceovers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExplorationOpportunitySummary {
    pub id: String,
    pub topic_name: String,
    pub story_title: String,
    pub chapter_title: String,
    pub content_count: u32,
    /// Translated content count keyed by language code.
    pub translation_counts: HashMap<String, u32>,
}

impl ExplorationOpportunitySummary {
    pub(super) fn from_dict(kind: OpportunityType, dict: OpportunityDict) -> Result<Self, OpportunityError> {
        let missing = |field| OpportunityError::MissingField {
            kind,
            id: dict.id.clone(),
            field,
        };

        let story_title = dict.story_title.clone().ok_or_else(|| missing("story_title"))?;
        let chapter_title = dict.chapter_title.clone().ok_or_else(|| missing("chapter_title"))?;
        let content_count = dict.content_count.ok_or_else(|| missing("content_count"))?;

        Ok(Self {
            id: dict.id,
            topic_name: dict.topic_name,
            story_title,
            chapter_title,
            content_count,
            translation_counts: dict.translation_counts.unwrap_or_default(),
        })
    }

    pub fn heading(&self) -> &str {
        &self.chapter_title
    }

    pub fn subheading(&self) -> String {
        format!("{} - {}", self.topic_name, self.story_title)
    }

    /// Share of the chapter's content already translated into `language_code`,
    /// in percent. Zero when nothing is known for the language or the chapter
    /// has no content.
    pub fn translation_progress_percentage(&self, language_code: &str) -> f64 {
        match self.translation_counts.get(language_code) {
            Some(&translated) if self.content_count > 0 => {
                f64::from(translated) / f64::from(self.content_count) * 100.0
            }
            _ => 0.0,
        }
    }
}
