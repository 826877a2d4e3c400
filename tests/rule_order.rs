use mls_comps::{
    config::Config,
    extract::{Extractor, rules::RuleTable},
    record::Cell,
    variant::ReportVariant,
};

fn position(table: &RuleTable, name: &str) -> usize {
    table
        .rules
        .iter()
        .position(|r| r.name == name)
        .unwrap_or_else(|| panic!("rule {name} missing"))
}

#[test]
fn residential_priority_order() {
    let t = RuleTable::residential().unwrap();
    let names: Vec<&str> = t.rules.iter().map(|r| r.name).collect();
    assert_eq!(
        names,
        vec![
            "subdivision",
            "living_sq_ft",
            "total_sq_ft",
            "year_built",
            "bathrooms",
            "bedrooms",
            "private_pool_description",
            "private_pool",
            "stories",
            "garage_spaces",
            "list_price",
            "sold_price",
            "days_on_market",
            "status",
            "interior",
            "exterior",
            "public_remarks",
        ]
    );
    assert!(t.title.is_some());
}

#[test]
fn rental_priority_order() {
    let t = RuleTable::rental().unwrap();
    assert!(position(&t, "status") < position(&t, "rental_price"));
    assert!(position(&t, "bathrooms") < position(&t, "stories"));
    assert_eq!(t.rules.last().map(|r| r.name), Some("public_remarks"));
    assert!(t.title.is_none());
}

#[test]
fn pool_description_wins_over_pool() {
    let t = RuleTable::residential().unwrap();
    let rule = t.first_match("private pool description: heated").unwrap();
    assert_eq!(rule.name, "private_pool_description");
    assert_eq!(t.first_match("private pool: yes").unwrap().name, "private_pool");
}

#[test]
fn first_match_only_applies_one_rule() {
    // "stories" outranks "st:", so status is left alone.
    let extractor = Extractor::new(&Config::default()).unwrap();
    let records = extractor.extract_page(
        ReportVariant::Residential,
        "STORIES: 2 ST: Active TYPE: Condo",
    );
    assert_eq!(records.property.stories, Cell::text("2 ST: Active TYPE: Condo"));
    assert!(records.property.status.is_empty());
}

#[test]
fn garage_rule_triggers_on_spaces() {
    let t = RuleTable::residential().unwrap();
    assert_eq!(t.first_match("garage spaces: 2").unwrap().name, "garage_spaces");
    assert_eq!(t.first_match("sold price: $1 sold price sqft: $1").unwrap().name, "sold_price");
}

#[test]
fn tables_by_variant() {
    assert_eq!(
        RuleTable::for_variant(ReportVariant::Rental).unwrap().variant,
        ReportVariant::Rental
    );
    assert_eq!(
        RuleTable::for_variant(ReportVariant::Residential).unwrap().variant,
        ReportVariant::Residential
    );
}
