//! Keyed variable store
//!
//! Inputs and results are exchanged with the rest of the sizing process as a
//! flat JSON map from hierarchical `data:...` keys to values with units:
//!
//! ```json
//! {
//!   "data:weight:aircraft:MZFW": { "value": 1550.0, "units": "kg" },
//!   "data:geometry:wing:Y_vector": { "value": [0.6, 1.4, 2.2], "units": "m" }
//! }
//! ```

mod adapter;
pub mod keys;
mod units;

pub use units::{si_factor, Quantity};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{LoadsError, LoadsResult};

/// A stored value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Scalar(f64),
    Vector(Vec<f64>),
}

/// A value with its units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    pub value: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
}

/// Variables by key, kept sorted
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableStore {
    variables: BTreeMap<String, Variable>,
}

impl VariableStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a store from JSON
    pub fn from_json(json: &str) -> LoadsResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a store from a JSON file
    pub fn load(path: impl AsRef<Path>) -> LoadsResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Write the store to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> LoadsResult<()> {
        fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }

    /// Serialize to indented JSON
    pub fn to_json_pretty(&self) -> LoadsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Set a scalar, replacing any previous value
    pub fn set_scalar(&mut self, key: &str, value: f64, units: Option<&str>) {
        self.insert(key, Value::Scalar(value), units);
    }

    /// Set a vector, replacing any previous value
    pub fn set_vector(&mut self, key: &str, values: Vec<f64>, units: Option<&str>) {
        self.insert(key, Value::Vector(values), units);
    }

    fn insert(&mut self, key: &str, value: Value, units: Option<&str>) {
        self.variables.insert(
            key.to_string(),
            Variable {
                value,
                units: units.map(str::to_string),
            },
        );
    }

    /// Raw variable, as stored
    pub fn get(&self, key: &str) -> Option<&Variable> {
        self.variables.get(key)
    }

    /// Check whether a key is present
    pub fn contains(&self, key: &str) -> bool {
        self.variables.contains_key(key)
    }

    /// Scalar value converted to SI
    ///
    /// A one-element vector is accepted as a scalar.
    pub fn get_scalar(&self, key: &str, quantity: Quantity) -> LoadsResult<f64> {
        let variable = self.require(key)?;
        let factor = si_factor(key, variable.units.as_deref(), quantity)?;
        match &variable.value {
            Value::Scalar(v) => Ok(v * factor),
            Value::Vector(values) if values.len() == 1 => Ok(values[0] * factor),
            Value::Vector(values) => Err(LoadsError::InvalidInput(format!(
                "'{key}' holds {} values where a scalar is expected",
                values.len()
            ))),
        }
    }

    /// Scalar value converted to SI, if present
    pub fn get_scalar_opt(&self, key: &str, quantity: Quantity) -> LoadsResult<Option<f64>> {
        if self.contains(key) {
            self.get_scalar(key, quantity).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Vector value converted to SI; a scalar reads as a one-element vector
    pub fn get_vector(&self, key: &str, quantity: Quantity) -> LoadsResult<Vec<f64>> {
        let variable = self.require(key)?;
        let factor = si_factor(key, variable.units.as_deref(), quantity)?;
        let values = match &variable.value {
            Value::Scalar(v) => vec![*v],
            Value::Vector(values) => values.clone(),
        };
        Ok(values.into_iter().map(|v| v * factor).collect())
    }

    /// Keys starting with `prefix`, in sorted order
    pub fn keys_with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.variables
            .range(prefix.to_string()..)
            .map(|(key, _)| key.as_str())
            .take_while(move |key| key.starts_with(prefix))
    }

    /// Number of variables
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// True when the store holds no variables
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    fn require(&self, key: &str) -> LoadsResult<&Variable> {
        self.variables
            .get(key)
            .ok_or_else(|| LoadsError::VariableNotFound(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const JSON: &str = r#"{
        "data:geometry:wing:Y_vector": { "value": [0.6, 1.4, 2.2], "units": "ft" },
        "data:weight:aircraft:MZFW": { "value": 1550.0, "units": "kg" },
        "data:loads:point_mass:engine:mass": { "value": 150.0, "units": "kg" },
        "data:loads:point_mass:gear:mass": { "value": 30.0 },
        "settings:mesh": { "value": 3.0 }
    }"#;

    #[test]
    fn test_read_converts_to_si() {
        let store = VariableStore::from_json(JSON).unwrap();
        let y = store.get_vector("data:geometry:wing:Y_vector", Quantity::Length).unwrap();
        assert_relative_eq!(y[1], 1.4 * 0.3048, epsilon = 1e-12);
        assert_eq!(
            store.get_scalar("data:loads:point_mass:gear:mass", Quantity::Mass).unwrap(),
            30.0
        );
    }

    #[test]
    fn test_missing_variable() {
        let store = VariableStore::from_json(JSON).unwrap();
        let err = store.get_scalar("data:weight:aircraft:MTOW", Quantity::Mass).unwrap_err();
        assert!(matches!(err, LoadsError::VariableNotFound(_)));
        let missing = store.get_scalar_opt("data:weight:aircraft:MTOW", Quantity::Mass);
        assert_eq!(missing.unwrap(), None);
    }

    #[test]
    fn test_vector_is_not_a_scalar() {
        let store = VariableStore::from_json(JSON).unwrap();
        let err = store
            .get_scalar("data:geometry:wing:Y_vector", Quantity::Length)
            .unwrap_err();
        assert!(matches!(err, LoadsError::InvalidInput(_)));
    }

    #[test]
    fn test_keys_with_prefix() {
        let store = VariableStore::from_json(JSON).unwrap();
        let keys: Vec<&str> = store.keys_with_prefix("data:loads:point_mass:").collect();
        assert_eq!(
            keys,
            vec!["data:loads:point_mass:engine:mass", "data:loads:point_mass:gear:mass"]
        );
    }

    #[test]
    fn test_json_keeps_units() {
        let mut store = VariableStore::new();
        store.set_vector("data:loads:y_vector", vec![0.0, 1.0], Some("m"));
        store.set_scalar("data:loads:max_shear:load_factor", 3.8, None);
        let back = VariableStore::from_json(&store.to_json_pretty().unwrap()).unwrap();
        assert_eq!(back, store);
        assert_eq!(back.get("data:loads:y_vector").unwrap().units.as_deref(), Some("m"));
    }
}
