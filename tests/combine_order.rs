use mls_comps::{
    combine::{Subject, combine},
    extract::extract,
    record::{Cell, ManualEntry},
};

const RESIDENTIAL: &str = include_str!("fixtures/residential.txt");
const RENTAL: &str = include_str!("fixtures/rental.txt");

fn page_for(address: &str) -> String {
    RESIDENTIAL.replace("123 Palm Way", address)
}

#[test]
fn subject_first_then_comparisons_in_order() {
    let s = extract(&[page_for("1 Subject Ln")]).unwrap();
    let a = extract(&[page_for("2 Alpha Ave")]).unwrap();
    let b = extract(&[page_for("3 Beta Blvd")]).unwrap();

    let tables = combine(Some(Subject::Extracted(s)), vec![a, b]).unwrap();
    let addresses: Vec<_> = tables.prices.iter().map(|p| p.address.display()).collect();
    assert_eq!(addresses, vec!["1 Subject Ln", "2 Alpha Ave", "3 Beta Blvd"]);
    assert_eq!(tables.properties.len(), 3);
    assert_eq!(tables.features.len(), 3);
    assert!(!tables.is_rental);
}

#[test]
fn manual_subject_leads_and_sets_rental_flag() {
    let manual: ManualEntry = serde_json::from_str(
        r#"{"address":"10 Manual Ct","livingSqFt":"1,500","listPrice":"$3,000","isRental":true}"#,
    )
    .unwrap();
    let comp = extract(&[page_for("2 Alpha Ave")]).unwrap();

    let tables = combine(Some(Subject::Manual(manual)), vec![comp]).unwrap();
    assert!(tables.is_rental);
    assert_eq!(tables.properties[0].address, Cell::text("10 Manual Ct"));
    assert_eq!(tables.subject_living_sq_ft(), Some("1,500"));
    assert_eq!(tables.prices[0].list_price, Cell::text("$3,000"));
    assert!(tables.properties[0].status.is_empty());
    assert_eq!(tables.properties[1].address, Cell::text("2 Alpha Ave"));
}

#[test]
fn missing_sides_degrade() {
    let comp = extract(&[page_for("2 Alpha Ave")]).unwrap();
    let only_comps = combine(None, vec![comp]).unwrap();
    assert_eq!(only_comps.len(), 1);

    let s = extract(&[page_for("1 Subject Ln")]).unwrap();
    let only_subject = combine(Some(Subject::Extracted(s)), Vec::new()).unwrap();
    assert_eq!(only_subject.len(), 1);

    assert!(combine(None, Vec::new()).is_none());
}

#[test]
fn features_columns_are_the_union() {
    let s = extract(&[RENTAL]).unwrap();
    let comp = extract(&[RESIDENTIAL]).unwrap();
    let tables = combine(Some(Subject::Extracted(s)), vec![comp]).unwrap();
    assert!(tables.is_rental);

    let features = tables.features_table();
    assert_eq!(
        features.columns,
        vec!["Address", "Private Pool Description", "Interior", "Exterior", "Public Remarks"]
    );
    let pool = features.column("Private Pool Description").unwrap();
    assert_eq!(pool[0], &Cell::Empty);
    assert_eq!(pool[1], &Cell::text("Heated, Screened"));
}

#[test]
fn rental_only_features_table_omits_pool_description() {
    let s = extract(&[RENTAL]).unwrap();
    let tables = combine(Some(Subject::Extracted(s)), Vec::new()).unwrap();
    assert!(!tables.features_table().columns.contains(&"Private Pool Description"));
}

#[test]
fn price_table_renders_markdown() {
    let s = extract(&[RESIDENTIAL]).unwrap();
    let tables = combine(Some(Subject::Extracted(s)), Vec::new()).unwrap();
    let md = tables.price_table().to_markdown();
    let mut lines = md.lines();
    assert_eq!(
        lines.next(),
        Some("| Address | List Price | List $/Sq Ft (Living) | Sold Price | Sold $/Sq Ft (Living) | DOM |")
    );
    assert_eq!(lines.next(), Some("| --- | --- | --- | --- | --- | --- |"));
    assert_eq!(
        lines.next(),
        Some("| 123 Palm Way | $450,000 | $210.50 | $440,000 | $205.61 | 21 |")
    );
}

#[test]
fn manual_entry_requires_rental_flag() {
    let missing = serde_json::from_str::<ManualEntry>(r#"{"address":"10 Manual Ct"}"#);
    assert!(missing.is_err());

    let entry: ManualEntry = serde_json::from_str(r#"{"isRental":false}"#).unwrap();
    assert!(entry.address.is_none());
}
