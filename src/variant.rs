use serde::{Deserialize, Serialize};

const RESIDENTIAL_TITLE: &str = "residential customer report";
const RENTAL_TITLE: &str = "rental customer report";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportVariant {
    Residential,
    Rental,
}

impl ReportVariant {
    pub fn is_rental(self) -> bool {
        matches!(self, ReportVariant::Rental)
    }
}

/// Residential when the page carries the residential report title, Rental for
/// everything else, including layouts that match neither report.
pub fn classify(text: &str) -> ReportVariant {
    if text.to_lowercase().contains(RESIDENTIAL_TITLE) {
        ReportVariant::Residential
    } else {
        ReportVariant::Rental
    }
}

/// True when the page carries either known report title.
pub fn has_report_title(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.contains(RESIDENTIAL_TITLE) || lower.contains(RENTAL_TITLE)
}
