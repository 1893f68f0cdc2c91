use crate::shared::Result;
use crate::skill_graph::domain::SkillRow;

/// TableFormatter port for rendering cleaned rows
pub trait TableFormatter {
    /// Renders the rows, header included, into the text that gets written back
    fn format(&self, rows: &[SkillRow]) -> Result<String>;
}
