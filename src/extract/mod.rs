pub mod remarks;
pub mod rules;

use crate::{
    config::{Config, Extraction as ExtractionConfig},
    error::ExtractError,
    numeric,
    pages::normalize_page,
    record::{Cell, FeaturesRecord, PageRecords, PriceRecord, PropertyRecord},
    variant::{self, ReportVariant},
};
use rules::{Action, RuleTable};
use serde::Serialize;
use tracing::debug;

/// Records pulled from one source file, in lock-step: index `i` of every list
/// describes the same page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extraction {
    pub properties: Vec<PropertyRecord>,
    pub prices: Vec<PriceRecord>,
    pub features: Vec<FeaturesRecord>,
    pub variants: Vec<ReportVariant>,
    pub is_rental: bool,
}

impl Extraction {
    fn empty() -> Self {
        Self {
            properties: Vec::new(),
            prices: Vec::new(),
            features: Vec::new(),
            variants: Vec::new(),
            is_rental: false,
        }
    }

    fn push(&mut self, variant: ReportVariant, records: PageRecords) {
        self.properties.push(records.property);
        self.prices.push(records.price);
        self.features.push(records.features);
        self.variants.push(variant);
        if variant.is_rental() {
            self.is_rental = true;
        }
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

pub struct Extractor {
    residential: RuleTable,
    rental: RuleTable,
    cfg: ExtractionConfig,
}

impl Extractor {
    pub fn new(cfg: &Config) -> Result<Self, ExtractError> {
        Ok(Self {
            residential: RuleTable::for_variant(ReportVariant::Residential)?,
            rental: RuleTable::for_variant(ReportVariant::Rental)?,
            cfg: cfg.extraction.clone(),
        })
    }

    fn table(&self, variant: ReportVariant) -> &RuleTable {
        match variant {
            ReportVariant::Residential => &self.residential,
            ReportVariant::Rental => &self.rental,
        }
    }

    /// Pages carrying neither report title (photos, continuation pages) add
    /// no row and do not affect `is_rental`.
    pub fn extract<S: AsRef<str>>(&self, pages: &[S]) -> Result<Extraction, ExtractError> {
        if pages.is_empty() {
            return Err(ExtractError::NoPages);
        }
        if pages.iter().all(|p| p.as_ref().trim().is_empty()) {
            return Err(ExtractError::Unreadable { pages: pages.len() });
        }

        let mut out = Extraction::empty();
        for (idx, raw) in pages.iter().enumerate() {
            let text = normalize_page(raw.as_ref(), self.cfg.normalize_unicode);
            if !variant::has_report_title(&text) {
                debug!(page = idx, "no report title; skipping continuation page");
                continue;
            }
            let variant = variant::classify(&text);
            let records = self.extract_page(variant, &text);
            debug!(page = idx, ?variant, "page extracted");
            out.push(variant, records);
        }
        Ok(out)
    }

    /// Runs one variant's rule table over a page. Never fails: unmatched
    /// fields stay empty.
    pub fn extract_page(&self, variant: ReportVariant, text: &str) -> PageRecords {
        let table = self.table(variant);
        let mut records = PageRecords::new(match variant {
            ReportVariant::Residential => FeaturesRecord::residential(),
            ReportVariant::Rental => FeaturesRecord::rental(),
        });

        let lines: Vec<&str> = text.split('\n').collect();
        let mut title_seen = false;

        for (idx, line) in lines.iter().enumerate() {
            let lower = line.to_lowercase();

            if let Some(title) = &table.title {
                if !title_seen && title.triggers_on(&lower) {
                    title_seen = true;
                    apply(&mut records, title, line);
                }
            }

            let Some(rule) = table.first_match(&lower) else {
                continue;
            };
            debug!(rule = rule.name, line = idx, "rule matched");

            match &rule.action {
                Action::Capture(_) => apply(&mut records, rule, line),
                Action::Remarks => {
                    let remarks = remarks::fold_remarks(&lines, idx, &self.cfg.remarks_terminators);
                    records.features.public_remarks = Cell::Text(remarks);
                }
            }
        }

        if variant.is_rental() {
            numeric::derive_rental_price_per_sq_ft(&mut records);
        }

        records
    }
}

fn apply(records: &mut PageRecords, rule: &rules::Rule, line: &str) {
    let Action::Capture(captures) = &rule.action else {
        return;
    };
    for cap in captures {
        if let Some(m) = cap.pattern.captures(line).and_then(|c| c.get(1)) {
            records.set(cap.field, Cell::text(m.as_str().trim()));
        }
    }
}

/// Extracts with the default configuration.
pub fn extract<S: AsRef<str>>(pages: &[S]) -> Result<Extraction, ExtractError> {
    Extractor::new(&Config::default())?.extract(pages)
}
