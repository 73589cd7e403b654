//! Parsers for catalog fixture files and the free-form text fields on items.
//!
//! - catalog JSON: `{ "jobs": [Job, ...], "candidates": [Candidate, ...] }`
//! - salary bands: "$120,000 - $150,000", "90k-120k", "$75,000"
//! - experience: "5 years", "5+ years", "10 yrs"

use crate::error::{CatalogError, Result};
use crate::types::{Candidate, Job};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Raw shape of a catalog fixture file
#[derive(Debug, Default, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub jobs: Vec<Job>,
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// Parse a catalog fixture from a file on disk
pub fn parse_catalog_file(path: &Path) -> Result<CatalogFile> {
    let content = fs::read_to_string(path)?;
    parse_catalog_str(&content).map_err(|err| match err {
        CatalogError::ParseError { source, .. } => CatalogError::ParseError {
            path: path.display().to_string(),
            source,
        },
        other => other,
    })
}

/// Parse a catalog fixture from an in-memory JSON string
pub fn parse_catalog_str(content: &str) -> Result<CatalogFile> {
    serde_json::from_str(content).map_err(|source| CatalogError::ParseError {
        path: "<inline>".to_string(),
        source,
    })
}

/// Parse one dollar amount: "$120,000" -> 120000, "90k" -> 90000,
/// "$90.5k" -> 90500. Fractions below one dollar are dropped.
fn parse_amount(s: &str) -> Option<u32> {
    let s = s.trim();
    let (number, multiplier) = match s.strip_suffix(['k', 'K']) {
        Some(rest) => (rest, 1000),
        None => (s, 1),
    };
    let kept: String = number
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let (whole, fraction) = kept.split_once('.').unwrap_or((kept.as_str(), ""));
    if fraction.contains('.') || (whole.is_empty() && fraction.is_empty()) {
        return None;
    }

    let whole: u32 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let mut amount = whole.checked_mul(multiplier)?;
    let mut place = multiplier / 10;
    for digit in fraction.chars() {
        if place == 0 {
            break;
        }
        amount = amount.checked_add(digit.to_digit(10)? * place)?;
        place /= 10;
    }
    Some(amount)
}

/// Parse a salary band into `(min, max)` dollars.
///
/// A single amount is read as a band of width zero. Bands written
/// high-to-low are swapped so that `min <= max` always holds.
pub fn parse_salary_range(s: &str) -> Option<(u32, u32)> {
    let mut parts = s.split(['-', '–']).map(parse_amount);
    let low = parts.next()??;
    let high = match parts.next() {
        Some(amount) => amount?,
        None => low,
    };
    if parts.next().is_some() {
        return None;
    }
    Some((low.min(high), low.max(high)))
}

/// Parse the leading number of an experience string: "5+ years" -> 5
pub fn parse_experience_years(s: &str) -> Option<u32> {
    let digits: String = s
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_salary_range() {
        assert_eq!(
            parse_salary_range("$120,000 - $150,000"),
            Some((120_000, 150_000))
        );
        assert_eq!(parse_salary_range("90k-120k"), Some((90_000, 120_000)));
        assert_eq!(parse_salary_range("$75,000"), Some((75_000, 75_000)));
        assert_eq!(parse_salary_range("$150,000 - $120,000"), Some((120_000, 150_000)));
    }

    #[test]
    fn test_parse_salary_range_decimals() {
        assert_eq!(parse_salary_range("$90.5k - $120k"), Some((90_500, 120_000)));
        assert_eq!(parse_salary_range("$1.25k"), Some((1_250, 1_250)));
        assert_eq!(parse_salary_range("$120,000.99"), Some((120_000, 120_000)));
        assert_eq!(parse_salary_range("$1.2.3k"), None);
        assert_eq!(parse_salary_range("$."), None);
    }

    #[test]
    fn test_parse_salary_range_rejects_garbage() {
        assert_eq!(parse_salary_range("competitive"), None);
        assert_eq!(parse_salary_range(""), None);
        assert_eq!(parse_salary_range("$1 - $2 - $3"), None);
        assert_eq!(parse_salary_range("$90,000 - DOE"), None);
    }

    #[test]
    fn test_parse_experience_years() {
        assert_eq!(parse_experience_years("5 years"), Some(5));
        assert_eq!(parse_experience_years("5+ years"), Some(5));
        assert_eq!(parse_experience_years(" 12 yrs"), Some(12));
        assert_eq!(parse_experience_years("Senior"), None);
        assert_eq!(parse_experience_years(""), None);
    }

    #[test]
    fn test_parse_catalog_str() {
        let json = r#"{
            "jobs": [{
                "id": "1",
                "title": "Frontend Developer",
                "company": "Tech Innovations Inc.",
                "description": "React work",
                "location": "San Francisco, CA",
                "tags": ["React", "Remote"],
                "salary": "$120,000 - $150,000"
            }]
        }"#;
        let file = parse_catalog_str(json).unwrap();
        assert_eq!(file.jobs.len(), 1);
        assert!(file.candidates.is_empty());
        assert_eq!(file.jobs[0].logo, "");
        assert_eq!(file.jobs[0].tags, vec!["React", "Remote"]);
    }

    #[test]
    fn test_parse_catalog_str_malformed() {
        let result = parse_catalog_str("{ not json");
        assert!(matches!(result, Err(CatalogError::ParseError { .. })));
    }
}
