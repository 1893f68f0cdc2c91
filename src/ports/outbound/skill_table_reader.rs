use crate::shared::Result;
use crate::skill_graph::domain::SkillRow;
use std::path::Path;

/// SkillTableReader port for loading the skill/dependency table
///
/// This port abstracts where the table lives and how it is encoded.
pub trait SkillTableReader {
    /// Reads every row of the table in file order
    ///
    /// # Arguments
    /// * `table_path` - Location of the table
    ///
    /// # Errors
    /// Returns an error if:
    /// - The table does not exist or cannot be read
    /// - The header row lacks the Skill column
    /// - A row lists more dependencies than there are slots
    fn read_table(&self, table_path: &Path) -> Result<Vec<SkillRow>>;
}
