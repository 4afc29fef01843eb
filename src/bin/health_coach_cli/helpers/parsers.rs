// ABOUTME: Argument value parsers for health-coach
// ABOUTME: Rejects negative, non-finite, or non-positive numeric form values at parse time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Health Coach Contributors

/// Parse a finite number that is zero or greater
pub fn parse_non_negative(value: &str) -> Result<f64, String> {
    let parsed: f64 = value
        .trim()
        .parse()
        .map_err(|e| format!("'{value}' is not a number: {e}"))?;
    if !parsed.is_finite() || parsed < 0.0 {
        return Err(format!("'{value}' must be zero or greater"));
    }
    Ok(parsed)
}

/// Parse a finite number that is strictly greater than zero
pub fn parse_positive(value: &str) -> Result<f64, String> {
    let parsed = parse_non_negative(value)?;
    if parsed <= 0.0 {
        return Err(format!("'{value}' must be greater than zero"));
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_negative_accepts_zero() {
        assert_eq!(parse_non_negative("0"), Ok(0.0));
        assert!(parse_non_negative("-1").is_err());
        assert!(parse_non_negative("NaN").is_err());
    }

    #[test]
    fn test_positive_rejects_zero() {
        assert!(parse_positive("0").is_err());
        assert_eq!(parse_positive("68.5"), Ok(68.5));
    }
}
