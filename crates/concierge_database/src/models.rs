//! Row types for the `ai_prompts` table.

use crate::schema::ai_prompts;
use concierge_core::PromptTemplate;
use diesel::prelude::*;

/// A stored prompt template row.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Insertable)]
#[diesel(table_name = ai_prompts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PromptRow {
    /// Primary key
    pub function_id: String,
    /// Template body
    pub template_text: String,
    /// Operator notes
    pub description: String,
}

impl From<PromptRow> for PromptTemplate {
    fn from(row: PromptRow) -> Self {
        PromptTemplate::new(row.function_id, row.template_text, row.description)
    }
}

impl From<&PromptTemplate> for PromptRow {
    fn from(template: &PromptTemplate) -> Self {
        Self {
            function_id: template.function_id().clone(),
            template_text: template.template_text().clone(),
            description: template.description().clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_conversion_preserves_fields() {
        let template = PromptTemplate::new("generate_headline", "{preference}", "見出し");
        let row = PromptRow::from(&template);
        assert_eq!(row.function_id, "generate_headline");
        assert_eq!(PromptTemplate::from(row), template);
    }
}
