use crate::record::{Cell, PageRecords};

/// Parses a currency or size string: `$` and `,` are stripped, surrounding
/// whitespace ignored. Non-finite results are rejected.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| *c != '$' && *c != ',').collect();
    let v = cleaned.trim().parse::<f64>().ok()?;
    v.is_finite().then_some(v)
}

/// Total coercion to a numeric cell. Numbers pass through; everything that
/// does not parse becomes `NotANumber`.
pub fn coerce(cell: &Cell) -> Cell {
    match cell {
        Cell::Number(n) if n.is_finite() => Cell::Number(*n),
        Cell::Text(s) => parse_amount(s).map_or(Cell::NotANumber, Cell::Number),
        _ => Cell::NotANumber,
    }
}

/// Fills List $/Sq Ft (Living) for a rental page from the monthly ask and the
/// living area.
pub fn derive_rental_price_per_sq_ft(records: &mut PageRecords) {
    let price = coerce(&records.price.list_price).as_number();
    let area = coerce(&records.property.living_sq_ft)
        .as_number()
        .filter(|a| *a != 0.0);

    records.price.list_price_per_sq_ft = match (price, area) {
        (Some(p), Some(a)) => Cell::Number(p / a),
        _ => Cell::NotANumber,
    };
}

/// Rounds to a whole number and inserts `,` between thousands groups.
pub fn group_thousands(value: f64) -> String {
    let rounded = format!("{:.0}", value.abs());
    let mut out = String::with_capacity(rounded.len() + rounded.len() / 3);
    for (i, ch) in rounded.chars().enumerate() {
        if i > 0 && (rounded.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if value < 0.0 && rounded != "0" {
        out.insert(0, '-');
    }
    out
}
