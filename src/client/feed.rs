use crate::opportunity::{FetchedOpportunities, OpportunityType};

use super::{ClientError, OpportunityParams, OpportunitySource};

/// Walks the pages of one opportunity category, remembering the cursor the
/// backend handed out last.
#[derive(Debug, Clone)]
pub struct OpportunityFeed {
    kind: OpportunityType,
    language_code: Option<String>,
    cursor: String,
    more: bool,
}

impl OpportunityFeed {
    fn new(kind: OpportunityType, language_code: Option<String>) -> Self {
        Self {
            kind,
            language_code,
            cursor: String::new(),
            more: true,
        }
    }

    pub fn skill() -> Self {
        Self::new(OpportunityType::Skill, None)
    }

    pub fn translation(language_code: impl Into<String>) -> Self {
        Self::new(OpportunityType::Translation, Some(language_code.into()))
    }

    pub fn voiceover(language_code: impl Into<String>) -> Self {
        Self::new(OpportunityType::Voiceover, Some(language_code.into()))
    }

    pub fn kind(&self) -> OpportunityType {
        self.kind
    }

    pub fn cursor(&self) -> &str {
        &self.cursor
    }

    pub fn has_more(&self) -> bool {
        self.more
    }

    pub fn reset(&mut self) {
        self.cursor.clear();
        self.more = true;
    }

    fn params(&self) -> OpportunityParams {
        OpportunityParams {
            language_code: self.language_code.clone(),
            cursor: self.cursor.clone(),
        }
    }

    /// Fetch the next page, or `None` once the backend reported there is
    /// nothing left. A failed fetch leaves the feed where it was.
    #[tracing::instrument(skip_all, fields(kind = %self.kind, cursor = %self.cursor))]
    pub async fn next_page<S>(&mut self, source: &S) -> Result<Option<FetchedOpportunities>, ClientError>
    where
        S: OpportunitySource + ?Sized,
    {
        if !self.more {
            return Ok(None);
        }

        let page = source.fetch(self.kind, &self.params()).await?;

        self.cursor = page.next_cursor.clone().unwrap_or_default();
        self.more = page.more;

        tracing::debug!(more = self.more, "advanced feed");

        Ok(Some(page))
    }
}
