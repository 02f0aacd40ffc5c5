//! Unit definitions - length, weight and temperature

use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::trace;
use unitconv_core::{Category, UnknownUnit};
use crate::Unit;

/// Global unit registry
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// Registry of all known units. Immutable once built.
pub struct UnitRegistry {
    units: Vec<Unit>,
    aliases: HashMap<String, usize>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        let mut registry = UnitRegistry {
            units: Vec::new(),
            aliases: HashMap::new(),
        };
        registry.register_all_units();
        registry
    }

    /// Get a unit by any of its names. Case-insensitive, surrounding
    /// whitespace ignored, otherwise an exact match.
    pub fn get(&self, name: &str) -> Option<&Unit> {
        let key = name.trim().to_lowercase();
        self.aliases.get(&key).map(|&idx| &self.units[idx])
    }

    /// Like `get`, but reports the unknown name
    pub fn lookup(&self, name: &str) -> Result<&Unit, UnknownUnit> {
        self.get(name).ok_or_else(|| {
            trace!(name, "unit lookup missed");
            UnknownUnit(name.to_string())
        })
    }

    /// All units in a category, in registration order
    pub fn by_category(&self, category: Category) -> Vec<&Unit> {
        self.units.iter()
            .filter(|u| u.category == category)
            .collect()
    }

    /// All units, in registration order
    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.units.iter()
    }

    /// Every registered name
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.aliases.keys().map(|s| s.as_str())
    }

    fn register(&mut self, unit: Unit) {
        let idx = self.units.len();
        for name in &unit.names {
            let previous = self.aliases.insert(name.clone(), idx);
            debug_assert!(previous.is_none(), "unit name '{}' registered twice", name);
        }
        self.units.push(unit);
    }

    fn register_all_units(&mut self) {
        self.register_length_units();
        self.register_weight_units();
        self.register_temperature_units();
    }

    fn register_length_units(&mut self) {
        // Factors to meters
        self.register(Unit::linear("m", "meter", "meters", 1.0, Category::Length));
        self.register(Unit::linear("km", "kilometer", "kilometers", 1000.0, Category::Length));
        self.register(Unit::linear("cm", "centimeter", "centimeters", 0.01, Category::Length));
        self.register(Unit::linear("mm", "millimeter", "millimeters", 0.001, Category::Length));
        self.register(Unit::linear("mi", "mile", "miles", 1609.35, Category::Length));
        self.register(Unit::linear("yd", "yard", "yards", 0.9144, Category::Length));
        self.register(Unit::linear("ft", "foot", "feet", 0.3048, Category::Length));
        self.register(Unit::linear("in", "inch", "inches", 0.0254, Category::Length));
    }

    fn register_weight_units(&mut self) {
        // Factors to grams
        self.register(Unit::linear("g", "gram", "grams", 1.0, Category::Weight));
        self.register(Unit::linear("kg", "kilogram", "kilograms", 1000.0, Category::Weight));
        self.register(Unit::linear("mg", "milligram", "milligrams", 0.001, Category::Weight));
        self.register(Unit::linear("lb", "pound", "pounds", 453.592, Category::Weight));
        self.register(Unit::linear("oz", "ounce", "ounces", 28.3495, Category::Weight));
    }

    fn register_temperature_units(&mut self) {
        // Affine maps onto Celsius: (value - zero) * num / den
        self.register(
            Unit::temperature("c", "degree Celsius", "degrees Celsius", 0.0, 1.0, 1.0)
                .with_aliases(&["dc", "celsius"]),
        );
        self.register(
            Unit::temperature("f", "degree Fahrenheit", "degrees Fahrenheit", 32.0, 5.0, 9.0)
                .with_aliases(&["df", "fahrenheit"]),
        );
        self.register(Unit::temperature("k", "kelvin", "kelvins", 273.15, 1.0, 1.0));
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}
