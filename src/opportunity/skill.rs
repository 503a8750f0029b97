use serde::Serialize;

use super::{OpportunityDict, OpportunityError, OpportunityType};

/// A skill that still needs practice questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillOpportunity {
    pub id: String,
    pub skill_description: String,
    pub topic_name: String,
    pub question_count: u32,
}

impl SkillOpportunity {
    pub(super) fn from_dict(dict: OpportunityDict) -> Result<Self, OpportunityError> {
        let Some(skill_description) = dict.skill_description else {
            return Err(OpportunityError::MissingField {
                kind: OpportunityType::Skill,
                id: dict.id,
                field: "skill_description",
            });
        };

        Ok(Self {
            id: dict.id,
            skill_description,
            topic_name: dict.topic_name,
            question_count: dict.question_count.unwrap_or(0),
        })
    }

    pub fn heading(&self) -> &str {
        &self.skill_description
    }

    pub fn subheading(&self) -> &str {
        &self.topic_name
    }
}
