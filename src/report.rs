use crate::{appraise::Appraisal, combine::Table};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Subject,
    Comparison,
}

#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub role: Role,
    pub name: String,
    pub content_id: String,
    pub pages: usize,
    pub rows: usize,
    pub is_rental: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub job_id: String,
    pub started: String,
    pub finished: String,
    pub files: Vec<FileReport>,
    pub manual_subject: bool,
    pub is_rental: bool,
    pub property_table: Option<Table>,
    pub price_table: Option<Table>,
    pub features_table: Option<Table>,
    pub appraisal: Option<Appraisal>,
    pub appraisal_sentences: Vec<String>,
    pub appraisal_error: Option<String>,
    pub warnings: Vec<String>,
}

impl ComparisonReport {
    pub fn tables_markdown(&self) -> String {
        let mut md = String::new();
        for (title, table) in [
            ("Property", &self.property_table),
            ("Price", &self.price_table),
            ("Features", &self.features_table),
        ] {
            if let Some(t) = table {
                md.push_str(&format!("## {title}\n\n{}\n", t.to_markdown()));
            }
        }
        if !self.appraisal_sentences.is_empty() {
            md.push_str("## Appraisal\n\n");
            for s in &self.appraisal_sentences {
                md.push_str(&format!("- {s}\n"));
            }
        }
        md
    }
}
