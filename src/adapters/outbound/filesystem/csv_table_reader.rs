use crate::ports::outbound::SkillTableReader;
use crate::shared::error::PruneError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use crate::skill_graph::domain::{SkillName, SkillRow};
use csv::ReaderBuilder;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One table row as it appears in the file
///
/// Dependency columns may be missing entirely or hold empty cells; both
/// deserialize to `None`.
#[derive(Debug, Deserialize)]
struct CsvSkillRecord {
    #[serde(rename = "Skill")]
    skill: String,
    #[serde(rename = "Category", default)]
    category: String,
    #[serde(rename = "Dependency 1", default)]
    dependency_1: Option<String>,
    #[serde(rename = "Dependency 2", default)]
    dependency_2: Option<String>,
    #[serde(rename = "Dependency 3", default)]
    dependency_3: Option<String>,
    #[serde(rename = "Dependency 4", default)]
    dependency_4: Option<String>,
}

impl CsvSkillRecord {
    fn into_skill_row(self) -> SkillRow {
        let slot = |cell: Option<String>| cell.filter(|c| !c.is_empty()).map(SkillName::new);

        SkillRow::new(
            SkillName::new(self.skill),
            self.category,
            [
                slot(self.dependency_1),
                slot(self.dependency_2),
                slot(self.dependency_3),
                slot(self.dependency_4),
            ],
        )
    }
}

/// CsvFileReader adapter reading the skill table from a CSV file
pub struct CsvFileReader;

impl CsvFileReader {
    pub fn new() -> Self {
        Self
    }

    /// Parses CSV content; `table_path` is only used for error messages
    pub fn parse(&self, content: &[u8], table_path: &Path) -> Result<Vec<SkillRow>> {
        let parse_error = |details: String| PruneError::TableParseError {
            path: table_path.to_path_buf(),
            details,
        };

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(content);

        let headers = reader
            .headers()
            .map_err(|e| parse_error(e.to_string()))?;
        if !headers.iter().any(|h| h == "Skill") {
            return Err(parse_error("Header row has no 'Skill' column".to_string()).into());
        }

        let mut rows = Vec::new();
        for record in reader.deserialize::<CsvSkillRecord>() {
            let record = record.map_err(|e| parse_error(e.to_string()))?;
            rows.push(record.into_skill_row());
        }

        Ok(rows)
    }
}

impl Default for CsvFileReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillTableReader for CsvFileReader {
    fn read_table(&self, table_path: &Path) -> Result<Vec<SkillRow>> {
        if !table_path.exists() {
            return Err(PruneError::TableNotFound {
                path: table_path.to_path_buf(),
                suggestion: "Run in the directory that holds the skill table, or pass its location with --input."
                    .to_string(),
            }
            .into());
        }

        let read_error = |details: String| PruneError::FileReadError {
            path: table_path.to_path_buf(),
            details,
        };

        let file_size =
            validate_regular_file(table_path, "skill table").map_err(|e| read_error(e.to_string()))?;
        validate_file_size(file_size, table_path, MAX_FILE_SIZE)
            .map_err(|e| read_error(e.to_string()))?;

        let content = fs::read(table_path).map_err(|e| read_error(e.to_string()))?;

        self.parse(&content, table_path)
    }
}
