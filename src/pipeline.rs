use crate::{
    appraise,
    combine::{self, Subject},
    config::Config,
    error::AppraisalError,
    extract::{Extraction, Extractor},
    pages::PageSource,
    record::ManualEntry,
    report::{ComparisonReport, FileReport, Role},
    util::{content_id, now_rfc3339, sha256_hex},
};
use anyhow::Result;
use std::path::Path;
use tracing::{info, warn};

/// Page text of one uploaded report.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub name: String,
    pub content_id: String,
    pub pages: Vec<String>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, pages: Vec<String>) -> Self {
        Self {
            name: name.into(),
            content_id: content_id(&pages),
            pages,
        }
    }
}

#[derive(Debug, Clone)]
pub enum SubjectSlot {
    File(SourceFile),
    Manual(ManualEntry),
}

/// Everything one comparison request works on. Owned by that request; nothing
/// here is shared between requests.
#[derive(Debug, Clone, Default)]
pub struct ComparisonSession {
    subject: Option<SubjectSlot>,
    comparisons: Vec<SourceFile>,
}

impl ComparisonSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_subject_file(&mut self, file: SourceFile) {
        self.subject = Some(SubjectSlot::File(file));
    }

    pub fn set_subject_manual(&mut self, entry: ManualEntry) {
        self.subject = Some(SubjectSlot::Manual(entry));
    }

    /// Appends a comparable; upload order is table order.
    pub fn add_comparison(&mut self, file: SourceFile) -> &str {
        self.comparisons.push(file);
        let last = self.comparisons.len() - 1;
        &self.comparisons[last].content_id
    }

    pub fn subject(&self) -> Option<&SubjectSlot> {
        self.subject.as_ref()
    }

    pub fn comparisons(&self) -> &[SourceFile] {
        &self.comparisons
    }

    /// Stable id over the slot contents, in slot order.
    pub fn job_id(&self) -> String {
        let mut ids = Vec::with_capacity(self.comparisons.len() + 1);
        match &self.subject {
            Some(SubjectSlot::File(f)) => ids.push(f.content_id.clone()),
            Some(SubjectSlot::Manual(m)) => {
                let raw = serde_json::to_string(m).unwrap_or_default();
                ids.push(sha256_hex(raw.as_bytes()));
            }
            None => ids.push(String::new()),
        }
        ids.extend(self.comparisons.iter().map(|c| c.content_id.clone()));
        sha256_hex(ids.join(":").as_bytes())
    }
}

pub struct Pipeline<S: PageSource> {
    source: S,
    extractor: Extractor,
}

impl<S: PageSource> Pipeline<S> {
    pub fn new(cfg: &Config, source: S) -> Result<Self> {
        Ok(Self {
            source,
            extractor: Extractor::new(cfg)?,
        })
    }

    pub fn load(&self, path: &Path) -> Result<SourceFile> {
        let pages = self.source.read_pages(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(SourceFile::new(name, pages))
    }

    pub fn extractor(&self) -> &Extractor {
        &self.extractor
    }

    /// Extract, combine and appraise. Failures of single files or of the
    /// appraisal are recorded in the report; whatever succeeded is kept.
    pub fn run(&self, session: &ComparisonSession) -> ComparisonReport {
        let started = now_rfc3339();
        let job_id = session.job_id();
        let mut files = Vec::new();
        let mut warnings = Vec::new();

        let subject = match session.subject() {
            Some(SubjectSlot::File(f)) => self
                .extract_file(f, Role::Subject, &mut files, &mut warnings)
                .map(Subject::Extracted),
            Some(SubjectSlot::Manual(m)) => Some(Subject::Manual(m.clone())),
            None => {
                warnings.push("no subject property supplied".to_string());
                None
            }
        };
        let manual_subject = matches!(subject, Some(Subject::Manual(_)));
        let has_subject_row = match &subject {
            Some(Subject::Extracted(ex)) => !ex.is_empty(),
            Some(Subject::Manual(_)) => true,
            None => false,
        };

        let comparisons: Vec<Extraction> = session
            .comparisons()
            .iter()
            .filter_map(|f| self.extract_file(f, Role::Comparison, &mut files, &mut warnings))
            .collect();

        let mut report = ComparisonReport {
            job_id,
            started,
            finished: String::new(),
            files,
            manual_subject,
            is_rental: false,
            property_table: None,
            price_table: None,
            features_table: None,
            appraisal: None,
            appraisal_sentences: Vec::new(),
            appraisal_error: None,
            warnings,
        };

        let Some(tables) = combine::combine(subject, comparisons) else {
            warn!("nothing to combine");
            report.warnings.push("no records extracted".to_string());
            report.finished = now_rfc3339();
            return report;
        };
        info!(rows = tables.len(), is_rental = tables.is_rental, "tables combined");

        // Without a subject row, row 0 would be a comparable.
        let appraisal = if has_subject_row {
            let sq_ft = tables.subject_living_sq_ft().unwrap_or_default();
            appraise::compute(&tables.prices, sq_ft, tables.is_rental)
        } else {
            Err(AppraisalError::NoSubject)
        };
        match appraisal {
            Ok(a) => {
                report.appraisal_sentences = a.sentences();
                report.appraisal = Some(a);
            }
            Err(err) => {
                warn!("appraisal failed: {err}");
                report.appraisal_error = Some(err.to_string());
            }
        }

        report.is_rental = tables.is_rental;
        report.property_table = Some(tables.property_table());
        report.price_table = Some(tables.price_table());
        report.features_table = Some(tables.features_table());
        report.finished = now_rfc3339();
        report
    }

    fn extract_file(
        &self,
        file: &SourceFile,
        role: Role,
        files: &mut Vec<FileReport>,
        warnings: &mut Vec<String>,
    ) -> Option<Extraction> {
        match self.extractor.extract(&file.pages) {
            Ok(ex) => {
                info!(
                    "extracted {} rows from {} ({} pages, rental={})",
                    ex.len(),
                    file.name,
                    file.pages.len(),
                    ex.is_rental
                );
                files.push(FileReport {
                    role,
                    name: file.name.clone(),
                    content_id: file.content_id.clone(),
                    pages: file.pages.len(),
                    rows: ex.len(),
                    is_rental: ex.is_rental,
                    error: None,
                });
                Some(ex)
            }
            Err(err) => {
                warn!("extraction failed for {}: {err}", file.name);
                warnings.push(format!("{}: {err}", file.name));
                files.push(FileReport {
                    role,
                    name: file.name.clone(),
                    content_id: file.content_id.clone(),
                    pages: file.pages.len(),
                    rows: 0,
                    is_rental: false,
                    error: Some(err.to_string()),
                });
                None
            }
        }
    }
}
