//! Emission categories and the unit each activity is measured in

use serde::{Deserialize, Serialize};

/// Unit of an activity measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityUnit {
    Kilometers,
    Hours,
    KilowattHours,
    KilowattHoursThermal,
    TonsCo2e,
}

impl ActivityUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            ActivityUnit::Kilometers => "km",
            ActivityUnit::Hours => "h",
            ActivityUnit::KilowattHours => "kWh",
            ActivityUnit::KilowattHoursThermal => "kWh-th",
            ActivityUnit::TonsCo2e => "t CO2e",
        }
    }
}

/// Emission category. Declaration order is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Cars,
    Trucks,
    Buses,
    Forklifts,
    Planes,
    Lighting,
    Heating,
    Cooling,
    Computing,
    Subcontractors,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Cars,
        Category::Trucks,
        Category::Buses,
        Category::Forklifts,
        Category::Planes,
        Category::Lighting,
        Category::Heating,
        Category::Cooling,
        Category::Computing,
        Category::Subcontractors,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Cars => "Cars",
            Category::Trucks => "Trucks",
            Category::Buses => "Buses",
            Category::Forklifts => "Forklifts",
            Category::Planes => "Planes",
            Category::Lighting => "Lighting",
            Category::Heating => "Heating",
            Category::Cooling => "Cooling",
            Category::Computing => "Computing",
            Category::Subcontractors => "Subcontractors",
        }
    }

    /// Label of the input field for this category's activity value
    pub fn input_label(&self) -> &'static str {
        match self {
            Category::Cars => "Cars - Distance (km/year)",
            Category::Trucks => "Trucks - Distance (km/year)",
            Category::Buses => "Buses - Distance (km/year)",
            Category::Forklifts => "Forklifts - Operating time (hours/year)",
            Category::Planes => "Cargo Planes - Flight time (hours/year)",
            Category::Lighting => "Office Lighting - Electricity (kWh/year)",
            Category::Heating => "Heating - Thermal energy (kWh-th/year)",
            Category::Cooling => "Cooling (A/C) - Electricity (kWh/year)",
            Category::Computing => "Computing (IT) - Electricity (kWh/year)",
            Category::Subcontractors => "Subcontractors - Total (tons CO2e/year)",
        }
    }

    pub fn unit(&self) -> ActivityUnit {
        match self {
            Category::Cars | Category::Trucks | Category::Buses => ActivityUnit::Kilometers,
            Category::Forklifts | Category::Planes => ActivityUnit::Hours,
            Category::Lighting | Category::Cooling | Category::Computing => {
                ActivityUnit::KilowattHours
            }
            Category::Heating => ActivityUnit::KilowattHoursThermal,
            Category::Subcontractors => ActivityUnit::TonsCo2e,
        }
    }

    /// Reported directly in tons CO2e, no factor applied
    pub fn is_pass_through(&self) -> bool {
        matches!(self, Category::Subcontractors)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_declaration_order() {
        let mut sorted = Category::ALL;
        sorted.sort();
        assert_eq!(sorted, Category::ALL);
    }

    #[test]
    fn test_only_subcontractors_pass_through() {
        let pass_through: Vec<_> = Category::ALL
            .iter()
            .filter(|c| c.is_pass_through())
            .collect();
        assert_eq!(pass_through, vec![&Category::Subcontractors]);
    }

    #[test]
    fn test_units() {
        assert_eq!(Category::Cars.unit(), ActivityUnit::Kilometers);
        assert_eq!(Category::Planes.unit(), ActivityUnit::Hours);
        assert_eq!(Category::Heating.unit().symbol(), "kWh-th");
        assert_eq!(Category::Subcontractors.unit(), ActivityUnit::TonsCo2e);
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(Category::Computing.to_string(), "Computing");
    }
}
