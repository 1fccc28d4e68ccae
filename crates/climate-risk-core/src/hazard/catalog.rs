use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ClimateRiskError;
use crate::types::Money;
use crate::ClimateRiskResult;

/// Category of physical climate peril. Closed enumeration: parsing an
/// unknown id is an error, never a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HazardType {
    Flood,
    Fire,
    Wind,
    Heat,
}

impl HazardType {
    pub const ALL: [HazardType; 4] = [
        HazardType::Flood,
        HazardType::Fire,
        HazardType::Wind,
        HazardType::Heat,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            HazardType::Flood => "flood",
            HazardType::Fire => "fire",
            HazardType::Wind => "wind",
            HazardType::Heat => "heat",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            HazardType::Flood => "Flooding",
            HazardType::Fire => "Wildfire",
            HazardType::Wind => "Windstorm",
            HazardType::Heat => "Heatwave",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            HazardType::Flood => "River and coastal flooding events",
            HazardType::Fire => "Forest and brush fire events",
            HazardType::Wind => "Hurricane, tornado, and high wind events",
            HazardType::Heat => "Extreme temperature events",
        }
    }
}

impl FromStr for HazardType {
    type Err = ClimateRiskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "flood" => Ok(HazardType::Flood),
            "fire" => Ok(HazardType::Fire),
            "wind" => Ok(HazardType::Wind),
            "heat" => Ok(HazardType::Heat),
            other => Err(ClimateRiskError::InvalidInput {
                field: "hazard_type".into(),
                reason: format!("Unknown hazard type '{other}'. Use: flood, fire, wind, heat"),
            }),
        }
    }
}

impl std::fmt::Display for HazardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// A monitored region with its reference coordinates.
#[derive(Debug, Clone, Serialize)]
pub struct Region {
    pub name: &'static str,
    pub lat: Decimal,
    pub lon: Decimal,
}

/// Reference region registry.
pub fn regions() -> &'static [Region] {
    // Lazily built once; coordinates are city-centre references.
    use std::sync::OnceLock;
    static REGIONS: OnceLock<Vec<Region>> = OnceLock::new();
    REGIONS.get_or_init(|| {
        vec![
            Region { name: "Miami", lat: dec!(25.7617), lon: dec!(-80.1918) },
            Region { name: "Houston", lat: dec!(29.7604), lon: dec!(-95.3698) },
            Region { name: "NewOrleans", lat: dec!(29.9511), lon: dec!(-90.0715) },
            Region { name: "NewYork", lat: dec!(40.7128), lon: dec!(-74.0060) },
            Region { name: "SanFrancisco", lat: dec!(37.7749), lon: dec!(-122.4194) },
        ]
    })
}

/// Look up a region by name. A miss is an explicit error; callers must
/// handle "no data for region X" rather than receive another region's data.
pub fn find_region(name: &str) -> ClimateRiskResult<&'static Region> {
    regions()
        .iter()
        .find(|r| r.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| ClimateRiskError::DataUnavailable {
            resource: "region".into(),
            key: name.to_string(),
        })
}

/// A past hazard event: observed severity on the 0–5 scale and total damage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalEvent {
    pub year: u16,
    pub severity: Decimal,
    pub damage: Money,
}

/// Historical event record per hazard type.
pub fn historical_events(hazard: HazardType) -> Vec<HistoricalEvent> {
    let rows: &[(u16, Decimal, Money)] = match hazard {
        HazardType::Flood => &[
            (2023, dec!(4.2), dec!(2100000000)),
            (2022, dec!(3.8), dec!(1700000000)),
            (2021, dec!(4.5), dec!(2300000000)),
            (2020, dec!(3.5), dec!(1500000000)),
            (2019, dec!(3.0), dec!(1200000000)),
        ],
        HazardType::Fire => &[
            (2023, dec!(4.0), dec!(1900000000)),
            (2022, dec!(4.4), dec!(2200000000)),
            (2021, dec!(3.9), dec!(1600000000)),
            (2020, dec!(4.6), dec!(2500000000)),
            (2019, dec!(3.2), dec!(1100000000)),
        ],
        HazardType::Wind => &[
            (2023, dec!(3.9), dec!(1800000000)),
            (2022, dec!(4.1), dec!(2000000000)),
            (2021, dec!(3.4), dec!(1300000000)),
            (2020, dec!(4.3), dec!(2100000000)),
            (2019, dec!(3.6), dec!(1400000000)),
        ],
        HazardType::Heat => &[
            (2023, dec!(4.4), dec!(900000000)),
            (2022, dec!(4.0), dec!(750000000)),
            (2021, dec!(3.7), dec!(600000000)),
            (2020, dec!(3.3), dec!(450000000)),
            (2019, dec!(3.1), dec!(400000000)),
        ],
    };
    rows.iter()
        .map(|&(year, severity, damage)| HistoricalEvent { year, severity, damage })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hazard_type_round_trips_through_id() {
        for hazard in HazardType::ALL {
            assert_eq!(hazard.id().parse::<HazardType>().unwrap(), hazard);
        }
    }

    #[test]
    fn hazard_type_parse_is_case_insensitive() {
        assert_eq!("FLOOD".parse::<HazardType>().unwrap(), HazardType::Flood);
        assert_eq!("Wind".parse::<HazardType>().unwrap(), HazardType::Wind);
    }

    #[test]
    fn unknown_hazard_type_is_invalid_input() {
        let err = "earthquake".parse::<HazardType>().unwrap_err();
        assert!(matches!(err, ClimateRiskError::InvalidInput { .. }));
    }

    #[test]
    fn find_region_known() {
        let region = find_region("Miami").unwrap();
        assert_eq!(region.lat, dec!(25.7617));
    }

    #[test]
    fn find_region_is_case_insensitive() {
        assert!(find_region("neworleans").is_ok());
    }

    #[test]
    fn find_region_miss_is_data_unavailable_not_a_default() {
        let err = find_region("Chicago").unwrap_err();
        match err {
            ClimateRiskError::DataUnavailable { resource, key } => {
                assert_eq!(resource, "region");
                assert_eq!(key, "Chicago");
            }
            other => panic!("expected DataUnavailable, got {other:?}"),
        }
    }

    #[test]
    fn historical_events_cover_five_years() {
        for hazard in HazardType::ALL {
            let events = historical_events(hazard);
            assert_eq!(events.len(), 5);
            assert!(events.iter().all(|e| e.severity <= dec!(5)));
        }
    }
}
