use serde::{Deserialize, Serialize};

/// A single mandi commodity quote. `change` is a signed display string
/// ("+20"), not arithmetic data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub item: String,
    pub price: u32,
    pub change: String,
    pub location: String,
}

fn record(item: &str, price: u32, change: &str, location: &str) -> PriceRecord {
    PriceRecord {
        item: item.to_string(),
        price,
        change: change.to_string(),
        location: location.to_string(),
    }
}

/// Fixed APMC price list, identical for every request.
///
/// In a real app this would fetch from data.gov.in or similar APMC APIs.
pub fn mock_prices() -> Vec<PriceRecord> {
    vec![
        record("Wheat (Kanak)", 2450, "+20", "Azadpur"),
        record("Basmati Rice", 4200, "-15", "Nagpur"),
        record("Tomato", 1800, "+50", "Nashik"),
        record("Potato", 1250, "+5", "Agra"),
    ]
}
