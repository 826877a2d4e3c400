use serde::{Deserialize, Serialize, Serializer};

/// One value in a listing record.
///
/// Extraction only ever produces `Empty` or `Text`. `Number` and `NotANumber`
/// appear after numeric coercion or the rental $/sqft derivation.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    NotANumber,
}

impl Cell {
    pub fn text(s: impl Into<String>) -> Self {
        Cell::Text(s.into())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Finite numeric value, if this cell has already been coerced.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) if n.is_finite() => Some(*n),
            _ => None,
        }
    }

    /// Display form used by tables. Empty renders as an empty string.
    pub fn display(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => n.to_string(),
            Cell::NotANumber => "NaN".to_string(),
        }
    }
}

impl From<Option<String>> for Cell {
    fn from(v: Option<String>) -> Self {
        match v {
            Some(s) => Cell::Text(s),
            None => Cell::Empty,
        }
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Cell::Empty => serializer.serialize_none(),
            Cell::Text(s) => serializer.serialize_str(s),
            Cell::Number(n) if n.is_finite() => serializer.serialize_f64(*n),
            Cell::Number(_) | Cell::NotANumber => serializer.serialize_str("NaN"),
        }
    }
}

/// Every key a rule or a manual entry can write to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Field {
    Address,
    Status,
    Subdivision,
    YearBuilt,
    LivingSqFt,
    TotalSqFt,
    Bedrooms,
    BathroomsFull,
    Stories,
    GarageSpaces,
    PrivatePool,
    ListPrice,
    ListPricePerSqFt,
    SoldPrice,
    SoldPricePerSqFt,
    DaysOnMarket,
    PrivatePoolDescription,
    Interior,
    Exterior,
    PublicRemarks,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Address => "Address",
            Field::Status => "Status",
            Field::Subdivision => "Subdivision",
            Field::YearBuilt => "Year Built",
            Field::LivingSqFt => "Living Sq Ft",
            Field::TotalSqFt => "Total Sq Ft",
            Field::Bedrooms => "Bedrooms",
            Field::BathroomsFull => "Bathrooms (Full)",
            Field::Stories => "Stories",
            Field::GarageSpaces => "Garage Spaces",
            Field::PrivatePool => "Private Pool",
            Field::ListPrice => "List Price",
            Field::ListPricePerSqFt => "List $/Sq Ft (Living)",
            Field::SoldPrice => "Sold Price",
            Field::SoldPricePerSqFt => "Sold $/Sq Ft (Living)",
            Field::DaysOnMarket => "DOM",
            Field::PrivatePoolDescription => "Private Pool Description",
            Field::Interior => "Interior",
            Field::Exterior => "Exterior",
            Field::PublicRemarks => "Public Remarks",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PropertyRecord {
    #[serde(rename = "Address")]
    pub address: Cell,
    #[serde(rename = "Status")]
    pub status: Cell,
    #[serde(rename = "Subdivision")]
    pub subdivision: Cell,
    #[serde(rename = "Year Built")]
    pub year_built: Cell,
    #[serde(rename = "Living Sq Ft")]
    pub living_sq_ft: Cell,
    #[serde(rename = "Total Sq Ft")]
    pub total_sq_ft: Cell,
    #[serde(rename = "Bedrooms")]
    pub bedrooms: Cell,
    #[serde(rename = "Bathrooms (Full)")]
    pub bathrooms_full: Cell,
    #[serde(rename = "Stories")]
    pub stories: Cell,
    #[serde(rename = "Garage Spaces")]
    pub garage_spaces: Cell,
    #[serde(rename = "Private Pool")]
    pub private_pool: Cell,
}

impl PropertyRecord {
    pub const COLUMNS: [Field; 11] = [
        Field::Address,
        Field::Status,
        Field::Subdivision,
        Field::YearBuilt,
        Field::LivingSqFt,
        Field::TotalSqFt,
        Field::Bedrooms,
        Field::BathroomsFull,
        Field::Stories,
        Field::GarageSpaces,
        Field::PrivatePool,
    ];

    pub fn get(&self, field: Field) -> Option<&Cell> {
        Some(match field {
            Field::Address => &self.address,
            Field::Status => &self.status,
            Field::Subdivision => &self.subdivision,
            Field::YearBuilt => &self.year_built,
            Field::LivingSqFt => &self.living_sq_ft,
            Field::TotalSqFt => &self.total_sq_ft,
            Field::Bedrooms => &self.bedrooms,
            Field::BathroomsFull => &self.bathrooms_full,
            Field::Stories => &self.stories,
            Field::GarageSpaces => &self.garage_spaces,
            Field::PrivatePool => &self.private_pool,
            _ => return None,
        })
    }

    fn get_mut(&mut self, field: Field) -> Option<&mut Cell> {
        Some(match field {
            Field::Address => &mut self.address,
            Field::Status => &mut self.status,
            Field::Subdivision => &mut self.subdivision,
            Field::YearBuilt => &mut self.year_built,
            Field::LivingSqFt => &mut self.living_sq_ft,
            Field::TotalSqFt => &mut self.total_sq_ft,
            Field::Bedrooms => &mut self.bedrooms,
            Field::BathroomsFull => &mut self.bathrooms_full,
            Field::Stories => &mut self.stories,
            Field::GarageSpaces => &mut self.garage_spaces,
            Field::PrivatePool => &mut self.private_pool,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PriceRecord {
    #[serde(rename = "Address")]
    pub address: Cell,
    #[serde(rename = "List Price")]
    pub list_price: Cell,
    #[serde(rename = "List $/Sq Ft (Living)")]
    pub list_price_per_sq_ft: Cell,
    #[serde(rename = "Sold Price")]
    pub sold_price: Cell,
    #[serde(rename = "Sold $/Sq Ft (Living)")]
    pub sold_price_per_sq_ft: Cell,
    #[serde(rename = "DOM")]
    pub dom: Cell,
}

impl PriceRecord {
    pub const COLUMNS: [Field; 6] = [
        Field::Address,
        Field::ListPrice,
        Field::ListPricePerSqFt,
        Field::SoldPrice,
        Field::SoldPricePerSqFt,
        Field::DaysOnMarket,
    ];

    pub fn get(&self, field: Field) -> Option<&Cell> {
        Some(match field {
            Field::Address => &self.address,
            Field::ListPrice => &self.list_price,
            Field::ListPricePerSqFt => &self.list_price_per_sq_ft,
            Field::SoldPrice => &self.sold_price,
            Field::SoldPricePerSqFt => &self.sold_price_per_sq_ft,
            Field::DaysOnMarket => &self.dom,
            _ => return None,
        })
    }

    fn get_mut(&mut self, field: Field) -> Option<&mut Cell> {
        Some(match field {
            Field::Address => &mut self.address,
            Field::ListPrice => &mut self.list_price,
            Field::ListPricePerSqFt => &mut self.list_price_per_sq_ft,
            Field::SoldPrice => &mut self.sold_price,
            Field::SoldPricePerSqFt => &mut self.sold_price_per_sq_ft,
            Field::DaysOnMarket => &mut self.dom,
            _ => return None,
        })
    }
}

/// Narrative features of a listing.
///
/// `private_pool_description` is only part of the Residential schema: `None`
/// means the key does not exist for this record, `Some(Cell::Empty)` means it
/// exists but the page never filled it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeaturesRecord {
    #[serde(rename = "Address")]
    pub address: Cell,
    #[serde(
        rename = "Private Pool Description",
        skip_serializing_if = "Option::is_none"
    )]
    pub private_pool_description: Option<Cell>,
    #[serde(rename = "Interior")]
    pub interior: Cell,
    #[serde(rename = "Exterior")]
    pub exterior: Cell,
    #[serde(rename = "Public Remarks")]
    pub public_remarks: Cell,
}

impl FeaturesRecord {
    pub const COLUMNS: [Field; 5] = [
        Field::Address,
        Field::PrivatePoolDescription,
        Field::Interior,
        Field::Exterior,
        Field::PublicRemarks,
    ];

    pub fn residential() -> Self {
        Self {
            private_pool_description: Some(Cell::Empty),
            ..Self::rental()
        }
    }

    pub fn rental() -> Self {
        Self {
            address: Cell::Empty,
            private_pool_description: None,
            interior: Cell::Empty,
            exterior: Cell::Empty,
            public_remarks: Cell::Empty,
        }
    }

    pub fn has(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    pub fn get(&self, field: Field) -> Option<&Cell> {
        match field {
            Field::Address => Some(&self.address),
            Field::PrivatePoolDescription => self.private_pool_description.as_ref(),
            Field::Interior => Some(&self.interior),
            Field::Exterior => Some(&self.exterior),
            Field::PublicRemarks => Some(&self.public_remarks),
            _ => None,
        }
    }

    fn get_mut(&mut self, field: Field) -> Option<&mut Cell> {
        match field {
            Field::Address => Some(&mut self.address),
            Field::PrivatePoolDescription => self.private_pool_description.as_mut(),
            Field::Interior => Some(&mut self.interior),
            Field::Exterior => Some(&mut self.exterior),
            Field::PublicRemarks => Some(&mut self.public_remarks),
            _ => None,
        }
    }
}

/// The three parallel records describing one page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRecords {
    pub property: PropertyRecord,
    pub price: PriceRecord,
    pub features: FeaturesRecord,
}

impl PageRecords {
    pub fn new(features: FeaturesRecord) -> Self {
        Self {
            property: PropertyRecord::default(),
            price: PriceRecord::default(),
            features,
        }
    }

    /// Writes `value` into every record that carries `field`. Keys outside
    /// this page's schema are dropped; the key set is never extended.
    pub fn set(&mut self, field: Field, value: Cell) {
        if let Some(slot) = self.property.get_mut(field) {
            *slot = value.clone();
        }
        if let Some(slot) = self.price.get_mut(field) {
            *slot = value.clone();
        }
        if let Some(slot) = self.features.get_mut(field) {
            *slot = value;
        }
    }
}

/// A subject property typed in by hand instead of uploaded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualEntry {
    pub address: Option<String>,
    pub status: Option<String>,
    pub subdivision: Option<String>,
    pub year_built: Option<String>,
    pub living_sq_ft: Option<String>,
    pub total_sq_ft: Option<String>,
    pub bedrooms: Option<String>,
    pub bathrooms: Option<String>,
    pub stories: Option<String>,
    pub garage_spaces: Option<String>,
    pub private_pool: Option<String>,
    pub list_price: Option<String>,
    pub list_price_per_sq_ft: Option<String>,
    pub sold_price: Option<String>,
    pub sold_price_per_sq_ft: Option<String>,
    pub days_on_market: Option<String>,
    pub is_rental: bool,
    pub interior: Option<String>,
    pub exterior: Option<String>,
    pub public_remarks: Option<String>,
}

impl ManualEntry {
    pub fn into_records(self) -> PageRecords {
        let address = Cell::from(self.address);
        PageRecords {
            property: PropertyRecord {
                address: address.clone(),
                status: self.status.into(),
                subdivision: self.subdivision.into(),
                year_built: self.year_built.into(),
                living_sq_ft: self.living_sq_ft.into(),
                total_sq_ft: self.total_sq_ft.into(),
                bedrooms: self.bedrooms.into(),
                bathrooms_full: self.bathrooms.into(),
                stories: self.stories.into(),
                garage_spaces: self.garage_spaces.into(),
                private_pool: self.private_pool.into(),
            },
            price: PriceRecord {
                address: address.clone(),
                list_price: self.list_price.into(),
                list_price_per_sq_ft: self.list_price_per_sq_ft.into(),
                sold_price: self.sold_price.into(),
                sold_price_per_sq_ft: self.sold_price_per_sq_ft.into(),
                dom: self.days_on_market.into(),
            },
            features: FeaturesRecord {
                address,
                private_pool_description: None,
                interior: self.interior.into(),
                exterior: self.exterior.into(),
                public_remarks: self.public_remarks.into(),
            },
        }
    }
}
