use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::hazard::HazardType;
use crate::types::{Money, RiskLevel};

/// A geographic area with an associated hazard and its base-case metrics.
/// Static reference data; scenario projection derives new values and never
/// mutates a zone in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskZone {
    pub id: u32,
    pub region: String,
    pub hazard: HazardType,
    pub base_risk_level: RiskLevel,
    pub lat: Decimal,
    pub lon: Decimal,
    pub base_radius_meters: Decimal,
    pub base_expected_loss: Money,
    pub base_affected_properties: u32,
}

/// Built-in risk-zone reference set covering the five monitored regions.
pub fn default_risk_zones() -> Vec<RiskZone> {
    fn zone(
        id: u32,
        region: &str,
        hazard: HazardType,
        base_risk_level: RiskLevel,
        lat: Decimal,
        lon: Decimal,
        base_radius_meters: Decimal,
        base_expected_loss: Money,
        base_affected_properties: u32,
    ) -> RiskZone {
        RiskZone {
            id,
            region: region.to_string(),
            hazard,
            base_risk_level,
            lat,
            lon,
            base_radius_meters,
            base_expected_loss,
            base_affected_properties,
        }
    }

    use HazardType::*;
    use RiskLevel::*;
    vec![
        // Miami
        zone(1, "Miami", Flood, High, dec!(25.77), dec!(-80.20), dec!(500), dec!(2500000), 12),
        zone(2, "Miami", Flood, Medium, dec!(25.76), dec!(-80.21), dec!(700), dec!(1200000), 8),
        zone(3, "Miami", Wind, High, dec!(25.78), dec!(-80.19), dec!(400), dec!(1800000), 10),
        zone(4, "Miami", Fire, Medium, dec!(25.75), dec!(-80.22), dec!(600), dec!(950000), 6),
        zone(5, "Miami", Heat, High, dec!(25.79), dec!(-80.18), dec!(450), dec!(1400000), 9),
        // Houston
        zone(6, "Houston", Flood, High, dec!(29.76), dec!(-95.37), dec!(600), dec!(3200000), 15),
        zone(7, "Houston", Wind, Medium, dec!(29.75), dec!(-95.38), dec!(800), dec!(1700000), 11),
        zone(8, "Houston", Fire, High, dec!(29.77), dec!(-95.36), dec!(500), dec!(2100000), 8),
        zone(9, "Houston", Heat, Medium, dec!(29.74), dec!(-95.39), dec!(700), dec!(1100000), 7),
        // New Orleans
        zone(10, "NewOrleans", Flood, High, dec!(29.95), dec!(-90.07), dec!(550), dec!(2800000), 14),
        zone(11, "NewOrleans", Wind, Medium, dec!(29.96), dec!(-90.06), dec!(650), dec!(1500000), 9),
        // New York
        zone(12, "NewYork", Flood, Medium, dec!(40.71), dec!(-74.00), dec!(500), dec!(4200000), 18),
        zone(13, "NewYork", Wind, High, dec!(40.72), dec!(-73.99), dec!(450), dec!(3800000), 12),
        // San Francisco
        zone(14, "SanFrancisco", Fire, Low, dec!(37.77), dec!(-122.41), dec!(400), dec!(1900000), 6),
        zone(15, "SanFrancisco", Flood, Medium, dec!(37.78), dec!(-122.40), dec!(500), dec!(2700000), 10),
    ]
}

/// Zones matching a region (when given) and hazard type. Ineligible zones
/// are excluded entirely, not returned with zero values.
pub fn zones_for<'a>(
    zones: &'a [RiskZone],
    region: Option<&str>,
    hazard: HazardType,
) -> Vec<&'a RiskZone> {
    zones
        .iter()
        .filter(|z| z.hazard == hazard)
        .filter(|z| region.map_or(true, |r| z.region.eq_ignore_ascii_case(r)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_has_fifteen_zones() {
        assert_eq!(default_risk_zones().len(), 15);
    }

    #[test]
    fn zones_for_filters_on_region_and_hazard() {
        let zones = default_risk_zones();
        let miami_flood = zones_for(&zones, Some("Miami"), HazardType::Flood);
        assert_eq!(miami_flood.len(), 2);
        assert!(miami_flood.iter().all(|z| z.region == "Miami"));
        assert!(miami_flood.iter().all(|z| z.hazard == HazardType::Flood));
    }

    #[test]
    fn zones_for_without_region_spans_all_regions() {
        let zones = default_risk_zones();
        let all_flood = zones_for(&zones, None, HazardType::Flood);
        assert_eq!(all_flood.len(), 6);
    }

    #[test]
    fn zones_for_unknown_region_is_empty_not_defaulted() {
        let zones = default_risk_zones();
        assert!(zones_for(&zones, Some("Chicago"), HazardType::Flood).is_empty());
    }
}
