use std::path::Path;
use skill_prune::prelude::*;

/// Mock SkillTableReader serving rows parsed from in-memory CSV
pub struct MockTableReader {
    content: String,
    should_fail: bool,
}

impl MockTableReader {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl SkillTableReader for MockTableReader {
    fn read_table(&self, table_path: &Path) -> Result<Vec<SkillRow>> {
        if self.should_fail {
            anyhow::bail!("Mock table read failure");
        }
        CsvFileReader::new().parse(self.content.as_bytes(), table_path)
    }
}
