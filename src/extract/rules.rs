//! Per-variant rule tables.
//!
//! A table is an ordered list of rules. A line is tested against each rule's
//! trigger in order and only the first rule whose trigger occurs in the line
//! is applied, so order matters wherever one trigger is a substring of
//! another (`private pool description` / `private pool`, `sold price` / `st:`).

use crate::record::Field;
use crate::variant::ReportVariant;
use regex::Regex;

#[derive(Debug, Clone)]
pub struct Capture {
    pub pattern: Regex,
    pub field: Field,
}

#[derive(Debug, Clone)]
pub enum Action {
    /// Each capture is tried independently against the line.
    Capture(Vec<Capture>),
    /// Public Remarks: seed from this line, then fold following lines.
    Remarks,
}

#[derive(Debug, Clone)]
pub struct Rule {
    pub name: &'static str,
    /// Lowercase substring that selects this rule.
    pub trigger: &'static str,
    pub action: Action,
}

impl Rule {
    fn capture(
        name: &'static str,
        trigger: &'static str,
        captures: &[(&str, Field)],
    ) -> Result<Self, regex::Error> {
        let captures = captures
            .iter()
            .map(|(p, field)| {
                Ok(Capture {
                    pattern: Regex::new(&format!("(?i){p}"))?,
                    field: *field,
                })
            })
            .collect::<Result<Vec<_>, regex::Error>>()?;
        Ok(Self {
            name,
            trigger,
            action: Action::Capture(captures),
        })
    }

    fn remarks() -> Self {
        Self {
            name: "public_remarks",
            trigger: "public remarks",
            action: Action::Remarks,
        }
    }

    pub fn triggers_on(&self, lower_line: &str) -> bool {
        lower_line.contains(self.trigger)
    }
}

const ADDRESS_PATTERN: &str = r"report\s*(.*?)\s*(?:,|$)";

#[derive(Debug, Clone)]
pub struct RuleTable {
    pub variant: ReportVariant,
    /// Evaluated on every line before the exclusive chain, applied at most
    /// once per page.
    pub title: Option<Rule>,
    pub rules: Vec<Rule>,
}

impl RuleTable {
    pub fn for_variant(variant: ReportVariant) -> Result<Self, regex::Error> {
        match variant {
            ReportVariant::Residential => Self::residential(),
            ReportVariant::Rental => Self::rental(),
        }
    }

    pub fn residential() -> Result<Self, regex::Error> {
        let title = Rule::capture(
            "address",
            "residential customer report",
            &[(ADDRESS_PATTERN, Field::Address)],
        )?;

        let rules = vec![
            Rule::capture(
                "subdivision",
                "subdivision:",
                &[(r"subdivision:\s*(.+)", Field::Subdivision)],
            )?,
            Rule::capture(
                "living_sq_ft",
                "livsqft",
                &[(r"livsqft:\s*(.+)", Field::LivingSqFt)],
            )?,
            Rule::capture(
                "total_sq_ft",
                "sqft - total",
                &[(r"sqft - total:\s*(.+)", Field::TotalSqFt)],
            )?,
            Rule::capture(
                "year_built",
                "yr built",
                &[(r"yr built:\s*(.+)", Field::YearBuilt)],
            )?,
            Rule::capture(
                "bathrooms",
                "baths - total",
                &[(r"baths - total:\s*(.+)", Field::BathroomsFull)],
            )?,
            Rule::capture(
                "bedrooms",
                "total bedrooms",
                &[(r"total bedrooms:\s*(.+)", Field::Bedrooms)],
            )?,
            Rule::capture(
                "private_pool_description",
                "private pool description",
                &[(
                    r"private pool description:(.+)",
                    Field::PrivatePoolDescription,
                )],
            )?,
            Rule::capture(
                "private_pool",
                "private pool",
                &[(r"private pool:\s*(.+)", Field::PrivatePool)],
            )?,
            Rule::capture(
                "stories",
                "stories",
                &[(r"stories:\s*(.+)", Field::Stories)],
            )?,
            Rule::capture(
                "garage_spaces",
                "spaces",
                &[(r"spaces:\s*(.+)", Field::GarageSpaces)],
            )?,
            Rule::capture(
                "list_price",
                "orig lp",
                &[
                    (r"lp:\s+(.*?)\s+list price", Field::ListPrice),
                    (r"list price/sqft:\s*(.+)", Field::ListPricePerSqFt),
                ],
            )?,
            Rule::capture(
                "sold_price",
                "sold price",
                &[
                    (r"sold price:\s+(.*?)\s+sold price sqft", Field::SoldPrice),
                    (r"sold price sqft:\s*(.+)", Field::SoldPricePerSqFt),
                ],
            )?,
            Rule::capture(
                "days_on_market",
                "days on market",
                &[(r"days on market:\s*(.+)", Field::DaysOnMarket)],
            )?,
            Rule::capture("status", "st:", &[(r"st:\s+(.*?)\s+type", Field::Status)])?,
            Rule::capture(
                "interior",
                "interior",
                &[(r"interior:(.*)", Field::Interior)],
            )?,
            Rule::capture(
                "exterior",
                "exterior",
                &[(r"exterior:(.*)", Field::Exterior)],
            )?,
            Rule::remarks(),
        ];

        Ok(Self {
            variant: ReportVariant::Residential,
            title: Some(title),
            rules,
        })
    }

    pub fn rental() -> Result<Self, regex::Error> {
        let rules = vec![
            Rule::capture(
                "subdivision",
                "subdivision:",
                &[(r"subdivision:\s*(.+)\s+front exposure", Field::Subdivision)],
            )?,
            Rule::capture(
                "living_sq_ft",
                "sqft - living",
                &[(r"sqft - living:\s*(.+)\s+total units", Field::LivingSqFt)],
            )?,
            Rule::capture(
                "total_sq_ft",
                "sqft - total",
                &[(r"sqft - total:\s*(.+)\s+unit floor", Field::TotalSqFt)],
            )?,
            Rule::capture(
                "year_built",
                "year built",
                &[(r"year built:\s*(.+)\s+for sale", Field::YearBuilt)],
            )?,
            Rule::capture(
                "bathrooms",
                "baths - total",
                &[
                    (r"baths - total:\s*(.+)\s+private pool", Field::BathroomsFull),
                    (r"private pool:\s*(.+)", Field::PrivatePool),
                ],
            )?,
            Rule::capture(
                "bedrooms",
                "total bedrooms",
                &[(r"total bedrooms:\s*(.+)\s+governing", Field::Bedrooms)],
            )?,
            Rule::capture(
                "stories",
                "total floors in bldg",
                &[(r"total floors in bldg:\s*(.+)", Field::Stories)],
            )?,
            Rule::capture(
                "garage_spaces",
                "garage spaces",
                &[(r"garage spaces:\s*(.+)\s+membership", Field::GarageSpaces)],
            )?,
            Rule::capture(
                "status",
                "orig. lp",
                &[(r"st:\s+(.*?)\s+orig\. lp", Field::Status)],
            )?,
            Rule::capture(
                "rental_price",
                "rental price",
                &[
                    (ADDRESS_PATTERN, Field::Address),
                    (r"rental price:\s*(.+)", Field::ListPrice),
                ],
            )?,
            Rule::capture(
                "days_on_market",
                "days on market",
                &[(r"days on market:\s*(.+)", Field::DaysOnMarket)],
            )?,
            Rule::capture(
                "interior",
                "interior features",
                &[(r"interior features:(.*)", Field::Interior)],
            )?,
            Rule::capture(
                "exterior",
                "exterior features",
                &[(r"exterior features:(.*)", Field::Exterior)],
            )?,
            Rule::remarks(),
        ];

        Ok(Self {
            variant: ReportVariant::Rental,
            title: None,
            rules,
        })
    }

    /// The first rule, in priority order, whose trigger occurs in the line.
    pub fn first_match(&self, lower_line: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.triggers_on(lower_line))
    }
}
