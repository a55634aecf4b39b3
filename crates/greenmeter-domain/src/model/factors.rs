//! Emission factor reference table

use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use super::{ActivityUnit, Category};

/// Emission factor for one category, per activity unit (before the /1000 conversion)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmissionFactor {
    pub category: Category,
    pub value: f64,
    pub unit: ActivityUnit,
}

/// Fixed factor table. Pass-through categories have no entry.
#[derive(Debug, Clone)]
pub struct EmissionFactorTable {
    factors: BTreeMap<Category, EmissionFactor>,
}

/// Reference factors used for every evaluation
pub static STANDARD_FACTORS: LazyLock<EmissionFactorTable> =
    LazyLock::new(EmissionFactorTable::standard);

impl EmissionFactorTable {
    fn standard() -> Self {
        let mut factors = BTreeMap::new();
        let mut insert = |category: Category, value: f64| {
            factors.insert(
                category,
                EmissionFactor {
                    category,
                    value,
                    unit: category.unit(),
                },
            );
        };

        insert(Category::Cars, 0.18);
        insert(Category::Trucks, 0.90);
        insert(Category::Buses, 1.10);
        insert(Category::Forklifts, 4.0);
        // per flight hour at full load
        insert(Category::Planes, 9000.0);
        insert(Category::Lighting, 0.42);
        insert(Category::Heating, 0.20);
        insert(Category::Cooling, 0.42);
        insert(Category::Computing, 0.42);

        Self { factors }
    }

    /// Factor value, `None` for pass-through categories
    pub fn factor(&self, category: Category) -> Option<f64> {
        self.factors.get(&category).map(|f| f.value)
    }

    pub fn get(&self, category: Category) -> Option<&EmissionFactor> {
        self.factors.get(&category)
    }

    /// Whether a result for `category` is backed by this table
    pub fn covers(&self, category: Category) -> bool {
        category.is_pass_through() || self.factors.contains_key(&category)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EmissionFactor> {
        self.factors.values()
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_values() {
        assert_eq!(STANDARD_FACTORS.factor(Category::Cars), Some(0.18));
        assert_eq!(STANDARD_FACTORS.factor(Category::Trucks), Some(0.90));
        assert_eq!(STANDARD_FACTORS.factor(Category::Buses), Some(1.10));
        assert_eq!(STANDARD_FACTORS.factor(Category::Forklifts), Some(4.0));
        assert_eq!(STANDARD_FACTORS.factor(Category::Planes), Some(9000.0));
        assert_eq!(STANDARD_FACTORS.factor(Category::Heating), Some(0.20));
        assert_eq!(STANDARD_FACTORS.factor(Category::Computing), Some(0.42));
    }

    #[test]
    fn test_subcontractors_has_no_factor() {
        assert_eq!(STANDARD_FACTORS.factor(Category::Subcontractors), None);
        assert_eq!(STANDARD_FACTORS.len(), 9);
    }

    #[test]
    fn test_every_category_is_covered() {
        for category in Category::ALL {
            assert!(STANDARD_FACTORS.covers(category), "{} not covered", category);
        }
    }

    #[test]
    fn test_factor_units_follow_category() {
        let planes = STANDARD_FACTORS.get(Category::Planes).unwrap();
        assert_eq!(planes.unit, ActivityUnit::Hours);
    }
}
