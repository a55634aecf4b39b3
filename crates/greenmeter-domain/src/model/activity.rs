//! Activity data supplied by the user

use serde::{Deserialize, Serialize};

use super::Category;

/// Yearly activity measurements, one field per category.
///
/// Values are taken as given. Negative numbers are not rejected and flow
/// through the calculation arithmetically.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityInputs {
    pub cars_km: f64,
    pub trucks_km: f64,
    pub buses_km: f64,
    pub forklifts_hr: f64,
    pub planes_hr: f64,
    pub lighting_kwh: f64,
    pub heating_kwh_th: f64,
    pub cooling_kwh: f64,
    pub computing_kwh: f64,
    /// Already in tons CO2e
    pub subcontractors_t: f64,
}

impl Default for ActivityInputs {
    fn default() -> Self {
        Self {
            cars_km: 250_000.0,
            trucks_km: 150_000.0,
            buses_km: 80_000.0,
            forklifts_hr: 2_000.0,
            planes_hr: 400.0,
            lighting_kwh: 120_000.0,
            heating_kwh_th: 50_000.0,
            cooling_kwh: 300_000.0,
            computing_kwh: 90_000.0,
            subcontractors_t: 120.0,
        }
    }
}

impl ActivityInputs {
    /// All activity values set to zero
    pub fn zero() -> Self {
        Self {
            cars_km: 0.0,
            trucks_km: 0.0,
            buses_km: 0.0,
            forklifts_hr: 0.0,
            planes_hr: 0.0,
            lighting_kwh: 0.0,
            heating_kwh_th: 0.0,
            cooling_kwh: 0.0,
            computing_kwh: 0.0,
            subcontractors_t: 0.0,
        }
    }

    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Cars => self.cars_km,
            Category::Trucks => self.trucks_km,
            Category::Buses => self.buses_km,
            Category::Forklifts => self.forklifts_hr,
            Category::Planes => self.planes_hr,
            Category::Lighting => self.lighting_kwh,
            Category::Heating => self.heating_kwh_th,
            Category::Cooling => self.cooling_kwh,
            Category::Computing => self.computing_kwh,
            Category::Subcontractors => self.subcontractors_t,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut f64 {
        match category {
            Category::Cars => &mut self.cars_km,
            Category::Trucks => &mut self.trucks_km,
            Category::Buses => &mut self.buses_km,
            Category::Forklifts => &mut self.forklifts_hr,
            Category::Planes => &mut self.planes_hr,
            Category::Lighting => &mut self.lighting_kwh,
            Category::Heating => &mut self.heating_kwh_th,
            Category::Cooling => &mut self.cooling_kwh,
            Category::Computing => &mut self.computing_kwh,
            Category::Subcontractors => &mut self.subcontractors_t,
        }
    }

    pub fn set(&mut self, category: Category, value: f64) {
        *self.get_mut(category) = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let inputs = ActivityInputs::default();
        assert_eq!(inputs.get(Category::Cars), 250_000.0);
        assert_eq!(inputs.get(Category::Planes), 400.0);
        assert_eq!(inputs.get(Category::Cooling), 300_000.0);
        assert_eq!(inputs.get(Category::Subcontractors), 120.0);
    }

    #[test]
    fn test_set_then_get_each_category() {
        let mut inputs = ActivityInputs::zero();
        for (i, category) in Category::ALL.iter().enumerate() {
            inputs.set(*category, (i + 1) as f64);
        }
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(inputs.get(*category), (i + 1) as f64);
        }
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let inputs: ActivityInputs = serde_json::from_str(r#"{"cars_km": 10.0}"#).unwrap();
        assert_eq!(inputs.cars_km, 10.0);
        assert_eq!(inputs.trucks_km, 150_000.0);
    }
}
