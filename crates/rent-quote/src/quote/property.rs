use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::QuoteError;

/// One-time contract fee shared by every property category.
pub const CONTRACT_FEE: f64 = 2000.00;

/// Flat monthly surcharge for a garage on apartments and houses.
pub const GARAGE_SURCHARGE: f64 = 300.00;

const APARTMENT_BASE: f64 = 700.00;
const APARTMENT_TWO_BEDROOMS: f64 = 200.00;
const APARTMENT_NO_CHILDREN_DISCOUNT: f64 = 0.05;

const HOUSE_BASE: f64 = 900.00;
const HOUSE_TWO_BEDROOMS: f64 = 250.00;

const STUDIO_BASE: f64 = 1200.00;
const STUDIO_PARKING_FLAT: f64 = 250.00;
const STUDIO_PARKING_FLAT_SPOTS: u32 = 2;
const STUDIO_EXTRA_SPOT: f64 = 60.00;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyCategory {
    Apartment,
    House,
    Studio,
}

impl PropertyCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Apartment => "Apartment",
            Self::House => "House",
            Self::Studio => "Studio",
        }
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Apartment => "apartment",
            Self::House => "house",
            Self::Studio => "studio",
        }
    }
}

impl fmt::Display for PropertyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PropertyCategory {
    type Err = QuoteError;

    /// Accepts the canonical tags plus the legacy form values
    /// (`apartamento`, `casa`, `estudio`).
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "apartment" | "apartamento" => Ok(Self::Apartment),
            "house" | "casa" => Ok(Self::House),
            "studio" | "estudio" => Ok(Self::Studio),
            _ => Err(QuoteError::InvalidCategory(raw.to_string())),
        }
    }
}

/// A priced residential unit.
///
/// Attributes are not range-checked: a bedroom count other than 2 simply
/// earns no bedroom surcharge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    Apartment {
        bedrooms: u32,
        has_garage: bool,
        has_children: bool,
    },
    House {
        bedrooms: u32,
        has_garage: bool,
    },
    Studio {
        parking_spots: u32,
    },
}

impl Property {
    pub const fn category(&self) -> PropertyCategory {
        match self {
            Property::Apartment { .. } => PropertyCategory::Apartment,
            Property::House { .. } => PropertyCategory::House,
            Property::Studio { .. } => PropertyCategory::Studio,
        }
    }

    pub fn monthly_rent(&self) -> f64 {
        match *self {
            Property::Apartment {
                bedrooms,
                has_garage,
                has_children,
            } => apartment_rent(bedrooms, has_garage, has_children),
            Property::House {
                bedrooms,
                has_garage,
            } => house_rent(bedrooms, has_garage),
            Property::Studio { parking_spots } => studio_rent(parking_spots),
        }
    }
}

pub fn compute_monthly_rent(property: &Property) -> f64 {
    property.monthly_rent()
}

fn garage_surcharge(has_garage: bool) -> f64 {
    if has_garage {
        GARAGE_SURCHARGE
    } else {
        0.0
    }
}

fn apartment_rent(bedrooms: u32, has_garage: bool, has_children: bool) -> f64 {
    let mut rent = APARTMENT_BASE;
    if bedrooms == 2 {
        rent += APARTMENT_TWO_BEDROOMS;
    }
    rent += garage_surcharge(has_garage);

    // Discount applies to the total including the garage.
    if !has_children {
        rent -= rent * APARTMENT_NO_CHILDREN_DISCOUNT;
    }
    rent
}

fn house_rent(bedrooms: u32, has_garage: bool) -> f64 {
    let mut rent = HOUSE_BASE;
    if bedrooms == 2 {
        rent += HOUSE_TWO_BEDROOMS;
    }
    rent + garage_surcharge(has_garage)
}

fn studio_rent(parking_spots: u32) -> f64 {
    if parking_spots == 0 {
        return STUDIO_BASE;
    }

    let extra_spots = parking_spots.saturating_sub(STUDIO_PARKING_FLAT_SPOTS);
    STUDIO_BASE + STUDIO_PARKING_FLAT + STUDIO_EXTRA_SPOT * f64::from(extra_spots)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(left: f64, right: f64) -> bool {
        (left - right).abs() < 1e-9
    }

    #[test]
    fn apartment_without_children_gets_discount_after_garage() {
        let rent = Property::Apartment {
            bedrooms: 2,
            has_garage: true,
            has_children: false,
        }
        .monthly_rent();
        assert!(approx(rent, 1200.0 * 0.95), "got {rent}");
    }

    #[test]
    fn out_of_range_bedrooms_fall_through_without_surcharge() {
        let three = Property::House {
            bedrooms: 3,
            has_garage: false,
        };
        let one = Property::House {
            bedrooms: 1,
            has_garage: false,
        };
        assert_eq!(three.monthly_rent(), one.monthly_rent());
    }

    #[test]
    fn studio_flat_fee_covers_two_spots() {
        assert!(approx(studio_rent(1), 1450.0));
        assert!(approx(studio_rent(2), 1450.0));
        assert!(approx(studio_rent(3), 1510.0));
    }

    #[test]
    fn category_parses_canonical_and_legacy_tags() {
        assert_eq!(
            " Apartment ".parse::<PropertyCategory>().unwrap(),
            PropertyCategory::Apartment
        );
        assert_eq!(
            "casa".parse::<PropertyCategory>().unwrap(),
            PropertyCategory::House
        );
        assert_eq!(
            "ESTUDIO".parse::<PropertyCategory>().unwrap(),
            PropertyCategory::Studio
        );

        let err = "loft".parse::<PropertyCategory>().unwrap_err();
        assert_eq!(err, QuoteError::InvalidCategory("loft".to_string()));
    }

    #[test]
    fn category_follows_variant() {
        let cases = [
            (
                Property::Apartment {
                    bedrooms: 1,
                    has_garage: false,
                    has_children: true,
                },
                PropertyCategory::Apartment,
            ),
            (
                Property::House {
                    bedrooms: 1,
                    has_garage: false,
                },
                PropertyCategory::House,
            ),
            (
                Property::Studio { parking_spots: 0 },
                PropertyCategory::Studio,
            ),
        ];

        for (property, category) in cases {
            assert_eq!(property.category(), category);
        }
    }
}
