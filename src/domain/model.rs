use serde::{Deserialize, Serialize};
use std::fmt;

pub const MAX_NAME_LEN: usize = 127;
pub const MAX_TAG_LEN: usize = 19;

/// Where a boat is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Slip,
    Land,
    Trailor,
    Storage,
    #[serde(rename = "no_place")]
    Unknown,
}

impl Location {
    pub const ALL: [Location; 4] = [
        Location::Slip,
        Location::Land,
        Location::Trailor,
        Location::Storage,
    ];

    /// Case-insensitive; anything unrecognised is `Unknown`.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        Self::ALL
            .into_iter()
            .find(|location| location.as_str().eq_ignore_ascii_case(text))
            .unwrap_or(Location::Unknown)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Slip => "slip",
            Location::Land => "land",
            Location::Trailor => "trailor",
            Location::Storage => "storage",
            Location::Unknown => "no_place",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Location-specific identifier. The variant is the location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "location", content = "detail", rename_all = "lowercase")]
pub enum LocationDetail {
    Slip(u32),
    Land(char),
    Trailor(String),
    Storage(u32),
    #[serde(rename = "no_place")]
    Unknown,
}

impl LocationDetail {
    pub fn location(&self) -> Location {
        match self {
            LocationDetail::Slip(_) => Location::Slip,
            LocationDetail::Land(_) => Location::Land,
            LocationDetail::Trailor(_) => Location::Trailor,
            LocationDetail::Storage(_) => Location::Storage,
            LocationDetail::Unknown => Location::Unknown,
        }
    }
}

/// `balance` is always a whole number of cents. `Boat::new` and every
/// mutation in the crate round to cents; code that sets the field directly
/// must pass it through `round_cents` or the stored row will not read back
/// as the same boat.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Boat {
    pub name: String,
    /// Feet.
    pub length: u32,
    #[serde(flatten)]
    pub detail: LocationDetail,
    pub balance: f64,
}

impl Boat {
    pub fn new(name: impl Into<String>, length: u32, detail: LocationDetail, balance: f64) -> Self {
        Self {
            name: name.into(),
            length,
            detail,
            balance: round_cents(balance),
        }
    }

    pub fn location(&self) -> Location {
        self.detail.location()
    }

    pub fn has_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// Balances live at cent precision so the persisted `%.2f` form loses nothing.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_location_is_case_insensitive() {
        assert_eq!(Location::parse("SLIP"), Location::Slip);
        assert_eq!(Location::parse("slip"), Location::Slip);
        assert_eq!(Location::parse("Land"), Location::Land);
        assert_eq!(Location::parse("tRaIlOr"), Location::Trailor);
        assert_eq!(Location::parse(" storage "), Location::Storage);
    }

    #[test]
    fn test_parse_location_is_total() {
        assert_eq!(Location::parse("dock"), Location::Unknown);
        assert_eq!(Location::parse(""), Location::Unknown);
        assert_eq!(Location::parse("no_place"), Location::Unknown);
        assert_eq!(Location::parse("trailer"), Location::Unknown);
    }

    #[test]
    fn test_location_text() {
        for location in Location::ALL {
            assert_eq!(Location::parse(location.as_str()), location);
        }
        assert_eq!(Location::Unknown.to_string(), "no_place");
    }

    #[test]
    fn test_detail_determines_location() {
        let boat = Boat::new("Moby", 40, LocationDetail::Trailor("ABC123".into()), 0.0);
        assert_eq!(boat.location(), Location::Trailor);
        assert_eq!(LocationDetail::Unknown.location(), Location::Unknown);
    }

    #[test]
    fn test_name_match_ignores_case() {
        let boat = Boat::new("Alice", 20, LocationDetail::Land('B'), 0.0);
        assert!(boat.has_name("alice"));
        assert!(boat.has_name("ALICE"));
        assert!(!boat.has_name("Alic"));
    }

    #[test]
    fn test_balance_rounded_to_cents() {
        let boat = Boat::new("Moby", 30, LocationDetail::Storage(3), 11.2 * 30.0);
        assert_eq!(boat.balance, 336.0);
        assert_eq!(round_cents(0.1 + 0.2), 0.3);
    }

    #[test]
    fn test_direct_balance_needs_rounding() {
        let mut boat = Boat::new("Moby", 30, LocationDetail::Storage(3), 0.0);
        boat.balance = round_cents(0.1 + 0.2);
        assert_eq!(boat.balance, 0.3);
        assert_eq!(format!("{:.2}", boat.balance).parse::<f64>().unwrap(), boat.balance);
    }

    #[test]
    fn test_boat_serializes_location_tag() {
        let boat = Boat::new("Moby", 40, LocationDetail::Slip(42), 500.0);
        let json = serde_json::to_value(&boat).unwrap();
        assert_eq!(json["name"], "Moby");
        assert_eq!(json["location"], "slip");
        assert_eq!(json["detail"], 42);
        assert_eq!(json["balance"], 500.0);
    }
}
