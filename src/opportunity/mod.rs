pub mod dict;
pub mod exploration;
pub mod skill;

pub use dict::{OpportunitiesPage, OpportunityDict};
pub use exploration::ExplorationOpportunitySummary;
pub use skill::SkillOpportunity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpportunityType {
    Skill,
    Translation,
    Voiceover,
}

impl OpportunityType {
    pub const ALL: [Self; 3] = [Self::Skill, Self::Translation, Self::Voiceover];

    pub fn slug(&self) -> &'static str {
        match self {
            Self::Skill => "skill",
            Self::Translation => "translation",
            Self::Voiceover => "voiceover",
        }
    }

    pub fn from_slug(s: &str) -> Option<Self> {
        match s {
            "skill" => Some(Self::Skill),
            "translation" => Some(Self::Translation),
            "voiceover" => Some(Self::Voiceover),
            _ => None,
        }
    }

    /// Translation and voiceover opportunities are listed per language.
    pub fn requires_language(&self) -> bool {
        matches!(self, Self::Translation | Self::Voiceover)
    }
}

impl std::fmt::Display for OpportunityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OpportunityError {
    #[error("{kind} opportunity {id:?} is missing field `{field}`")]
    MissingField {
        kind: OpportunityType,
        id: String,
        field: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Opportunity {
    Exploration(ExplorationOpportunitySummary),
    Skill(SkillOpportunity),
}

impl Opportunity {
    /// Build the typed opportunity for a raw backend item of the given category.
    pub fn from_dict(kind: OpportunityType, dict: OpportunityDict) -> Result<Self, OpportunityError> {
        match kind {
            OpportunityType::Translation | OpportunityType::Voiceover => {
                ExplorationOpportunitySummary::from_dict(kind, dict).map(Self::Exploration)
            }
            OpportunityType::Skill => SkillOpportunity::from_dict(dict).map(Self::Skill),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Exploration(o) => &o.id,
            Self::Skill(o) => &o.id,
        }
    }

    pub fn heading(&self) -> &str {
        match self {
            Self::Exploration(o) => o.heading(),
            Self::Skill(o) => o.heading(),
        }
    }

    pub fn subheading(&self) -> String {
        match self {
            Self::Exploration(o) => o.subheading(),
            Self::Skill(o) => o.subheading().to_string(),
        }
    }
}

/// One page of typed opportunities.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct FetchedOpportunities {
    pub opportunities: Vec<Opportunity>,
    pub next_cursor: Option<String>,
    pub more: bool,
}

impl FetchedOpportunities {
    pub fn from_page(kind: OpportunityType, page: OpportunitiesPage) -> Result<Self, OpportunityError> {
        let opportunities = page
            .opportunities
            .into_iter()
            .map(|dict| Opportunity::from_dict(kind, dict))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            opportunities,
            next_cursor: page.next_cursor,
            more: page.more,
        })
    }
}
