//! Plotter property definitions with defaults from plotter.json
//!
//! plotter.json is embedded at compile time and is the single place defaults
//! are defined. User values come from a JSON config file and from command
//! line flags; anything missing or invalid falls back to the embedded default.

use crate::error::{PlotterError, Result};
use crate::render::AxisRange;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// plotter.json embedded at compile time
const PLOTTER_JSON: &str = include_str!("../plotter.json");

/// Smallest and largest accepted image dimension in pixels
pub const MIN_PIXELS: u32 = 100;
pub const MAX_PIXELS: u32 = 10_000;

/// Property definition from plotter.json
#[derive(Debug, Clone, Deserialize)]
pub struct PropertyDef {
    pub name: String,
    pub kind: PropertyKind,
    #[serde(rename = "defaultValue", default)]
    pub default_value: String,
    #[serde(default)]
    pub description: String,
    /// For EnumeratedProperty, the valid values
    #[serde(rename = "values")]
    pub valid_values: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub enum PropertyKind {
    #[serde(rename = "StringProperty")]
    String,
    #[serde(rename = "EnumeratedProperty")]
    Enumerated,
    #[serde(rename = "BooleanProperty")]
    Boolean,
}

#[derive(Deserialize)]
struct PropertyFile {
    properties: Vec<PropertyDef>,
}

/// Registry of all plotter properties with their defaults
pub struct PropertyRegistry {
    properties: HashMap<String, PropertyDef>,
}

impl PropertyRegistry {
    /// Parse a property table in the plotter.json layout
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let file: PropertyFile = serde_json::from_str(json)?;
        let properties = file
            .properties
            .into_iter()
            .map(|p| (p.name.clone(), p))
            .collect();
        Ok(Self { properties })
    }

    /// Get the default value for a property
    pub fn get_default(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(|p| p.default_value.as_str())
    }

    /// Get the property definition
    pub fn get_property(&self, name: &str) -> Option<&PropertyDef> {
        self.properties.get(name)
    }

    /// All property definitions, sorted by name
    pub fn properties(&self) -> Vec<&PropertyDef> {
        let mut defs: Vec<&PropertyDef> = self.properties.values().collect();
        defs.sort_by(|a, b| a.name.cmp(&b.name));
        defs
    }

    /// Check if a value is valid for an enumerated property
    pub fn is_valid_enum_value(&self, name: &str, value: &str) -> bool {
        self.properties
            .get(name)
            .and_then(|p| p.valid_values.as_ref())
            .map(|values| values.iter().any(|v| v.eq_ignore_ascii_case(value)))
            .unwrap_or(true) // Non-enumerated properties accept any value
    }
}

static REGISTRY: std::sync::OnceLock<PropertyRegistry> = std::sync::OnceLock::new();

/// Get the global property registry
///
/// Panics if the embedded plotter.json is malformed, which the registry tests
/// catch before release.
pub fn registry() -> &'static PropertyRegistry {
    REGISTRY.get_or_init(|| {
        PropertyRegistry::from_json(PLOTTER_JSON).expect("embedded plotter.json is invalid")
    })
}

/// Typed property reader: user values over plotter.json defaults
#[derive(Debug, Clone, Default)]
pub struct PropertyReader {
    user_values: HashMap<String, String>,
}

impl PropertyReader {
    /// Reader with no user values (all defaults)
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a flat JSON object of `"name": value` pairs
    ///
    /// Strings, numbers and booleans are accepted; other values are skipped.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)
            .map_err(|e| PlotterError::Config(format!("invalid config JSON: {}", e)))?;

        let mut reader = Self::new();
        for (key, value) in map {
            let value_str = match value {
                serde_json::Value::String(s) => s,
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => b.to_string(),
                other => {
                    tracing::warn!(property = %key, value = %other, "ignoring non-scalar config value");
                    continue;
                }
            };
            if registry().get_property(&key).is_none() {
                tracing::warn!(property = %key, "unknown property in config file");
            }
            reader.set(key, value_str);
        }
        Ok(reader)
    }

    /// Load a config file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            PlotterError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&json)
    }

    /// Set a user value (empty = not set)
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            return;
        }
        self.user_values.insert(name.into(), value);
    }

    fn default_of(name: &str) -> &'static str {
        registry().get_default(name).unwrap_or("")
    }

    /// Get string property (user value or default)
    pub fn get_string(&self, name: &str) -> String {
        if let Some(value) = self.user_values.get(name) {
            return value.clone();
        }
        Self::default_of(name).to_string()
    }

    /// Get enumerated property with validation
    ///
    /// Returns the user-set value if valid, otherwise the default.
    pub fn get_enum(&self, name: &str) -> String {
        let reg = registry();
        let default = Self::default_of(name);

        if let Some(value) = self.user_values.get(name) {
            if reg.is_valid_enum_value(name, value) {
                return value.to_lowercase();
            }
            let valid_values = reg
                .get_property(name)
                .and_then(|p| p.valid_values.as_ref())
                .map(|v| v.join(", "))
                .unwrap_or_default();
            tracing::warn!(
                "Invalid value '{}' for property '{}'. Valid values: [{}]. Using default: '{}'",
                value,
                name,
                valid_values,
                default
            );
        }

        default.to_string()
    }

    /// Get boolean property ("true"/"false")
    pub fn get_bool(&self, name: &str) -> bool {
        let default = Self::default_of(name) == "true";
        match self.get_string(name).to_lowercase().as_str() {
            "true" => true,
            "false" => false,
            other => {
                tracing::warn!(
                    "Invalid boolean value '{}' for property '{}'. Using default: {}",
                    other,
                    name,
                    default
                );
                default
            }
        }
    }

    /// Get f64 property with range validation
    pub fn get_f64_in_range(&self, name: &str, min: f64, max: f64) -> f64 {
        let default = Self::default_of(name).parse::<f64>().unwrap_or(min);
        let value = self.get_string(name);

        match value.trim().parse::<f64>() {
            Ok(v) if v >= min && v <= max => v,
            Ok(v) => {
                tracing::warn!(
                    "Value {} for property '{}' out of range [{}, {}]. Using default: {}",
                    v,
                    name,
                    min,
                    max,
                    default
                );
                default
            }
            Err(_) => {
                tracing::warn!(
                    "Invalid numeric value '{}' for property '{}'. Using default: {}",
                    value,
                    name,
                    default
                );
                default
            }
        }
    }

    /// Get u32 property (non-negative integer)
    pub fn get_u32(&self, name: &str) -> u32 {
        let default = Self::default_of(name).parse::<u32>().unwrap_or(0);
        let value = self.get_string(name);
        value.trim().parse::<u32>().unwrap_or_else(|_| {
            tracing::warn!(
                "Invalid integer value '{}' for property '{}'. Using default: {}",
                value,
                name,
                default
            );
            default
        })
    }

    /// Get an image dimension in pixels, valid range [100, 10000]
    pub fn get_pixels(&self, name: &str) -> u32 {
        let default = Self::default_of(name)
            .parse::<u32>()
            .unwrap_or(MIN_PIXELS)
            .clamp(MIN_PIXELS, MAX_PIXELS);
        let value = self.get_string(name);

        match value.trim().parse::<u32>() {
            Ok(px) if (MIN_PIXELS..=MAX_PIXELS).contains(&px) => px,
            Ok(px) => {
                tracing::warn!(
                    "Dimension {} for property '{}' out of valid range [{}-{}], using default: {}",
                    px,
                    name,
                    MIN_PIXELS,
                    MAX_PIXELS,
                    default
                );
                default
            }
            Err(_) => {
                tracing::warn!(
                    "Invalid dimension '{}' for property '{}', using default: {}",
                    value,
                    name,
                    default
                );
                default
            }
        }
    }

    /// Parse an axis range "min,max"
    ///
    /// Falls back to the default when the user value is malformed or
    /// `min >= max`.
    pub fn get_range(&self, name: &str) -> AxisRange {
        let default =
            parse_range(Self::default_of(name)).unwrap_or(AxisRange { min: 0.0, max: 1.0 });
        let value = self.get_string(name);

        match parse_range(&value) {
            Some(range) => range,
            None => {
                tracing::warn!(
                    "Invalid range '{}' for property '{}', expected 'min,max' with min < max. Using default: {},{}",
                    value,
                    name,
                    default.min,
                    default.max
                );
                default
            }
        }
    }
}

/// Parse "min,max" into a valid `AxisRange`
pub fn parse_range(value: &str) -> Option<AxisRange> {
    let (min, max) = value.split_once(',')?;
    let min = min.trim().parse::<f64>().ok()?;
    let max = max.trim().parse::<f64>().ok()?;
    AxisRange::new(min, max).ok()
}
