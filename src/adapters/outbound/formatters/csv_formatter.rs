use crate::ports::outbound::TableFormatter;
use crate::shared::Result;
use crate::skill_graph::domain::SkillRow;
use csv::WriterBuilder;
use serde::Serialize;

/// Column layout of the skill table, in file order
pub const SKILL_TABLE_COLUMNS: [&str; 6] = [
    "Skill",
    "Category",
    "Dependency 1",
    "Dependency 2",
    "Dependency 3",
    "Dependency 4",
];

#[derive(Debug, Serialize)]
struct CsvSkillRecord<'a> {
    skill: &'a str,
    category: &'a str,
    dependency_1: &'a str,
    dependency_2: &'a str,
    dependency_3: &'a str,
    dependency_4: &'a str,
}

impl<'a> From<&'a SkillRow> for CsvSkillRecord<'a> {
    fn from(row: &'a SkillRow) -> Self {
        let [dependency_1, dependency_2, dependency_3, dependency_4] = row.dependency_cells();
        Self {
            skill: row.skill().as_str(),
            category: row.category(),
            dependency_1,
            dependency_2,
            dependency_3,
            dependency_4,
        }
    }
}

/// CsvTableFormatter adapter rendering rows as a CSV skill table
///
/// The header row is always written, so an empty table still round-trips.
/// Unused dependency slots become empty cells.
pub struct CsvTableFormatter;

impl CsvTableFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CsvTableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TableFormatter for CsvTableFormatter {
    fn format(&self, rows: &[SkillRow]) -> Result<String> {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());

        writer.write_record(SKILL_TABLE_COLUMNS)?;
        for row in rows {
            writer.serialize(CsvSkillRecord::from(row))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e.error()))?;
        Ok(String::from_utf8(bytes)?)
    }
}
