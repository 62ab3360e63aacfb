//! Computation settings: output measure selection and deflation.

/// Configuration for a metrics computation.
///
/// All fields are optional at the boundary: omitted booleans default to
/// value-based output on and standard-hours output off, and an absent (or
/// zero) deflator means nominal equals real.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Aggregate output by value (quantity x price). When off, or when no
    /// row carries a price, output falls back to the quantity-sum proxy.
    pub use_price_output: bool,
    /// Also compute output in standard hours (quantity x std_hours).
    pub use_standard_hour_output: bool,
    /// Divisor converting nominal output value to real output value.
    pub price_deflator: Option<f64>,
    /// Divisor converting nominal input cost to real input cost.
    pub input_deflator: Option<f64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            use_price_output: true,
            use_standard_hour_output: false,
            price_deflator: None,
            input_deflator: None,
        }
    }
}

impl Settings {
    /// Apply a deflator: `nominal / deflator` when present and non-zero,
    /// otherwise the nominal value unchanged.
    pub fn deflate(nominal: f64, deflator: Option<f64>) -> f64 {
        match deflator {
            Some(deflator) if deflator != 0.0 => nominal / deflator,
            _ => nominal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_select_price_output_only() {
        let settings = Settings::default();
        assert!(settings.use_price_output);
        assert!(!settings.use_standard_hour_output);
        assert_eq!(settings.price_deflator, None);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"price_deflator": 1.1}"#).expect("deserialize");
        assert!(settings.use_price_output);
        assert_eq!(settings.price_deflator, Some(1.1));
    }

    #[test]
    fn deflate_treats_zero_and_absent_as_noop() {
        assert_eq!(Settings::deflate(100.0, None), 100.0);
        assert_eq!(Settings::deflate(100.0, Some(0.0)), 100.0);
        assert_eq!(Settings::deflate(100.0, Some(1.0)), 100.0);
        assert_eq!(Settings::deflate(100.0, Some(2.0)), 50.0);
    }
}
