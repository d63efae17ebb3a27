use crate::error::FeatureError;

use super::extractor::check_finite;

/// Parse a sample list from text.
///
/// A document starting with `[` is read as a JSON array of numbers. Anything
/// else is a plain list: values separated by whitespace or commas, with `#`
/// comment lines. Empty input is an empty list.
pub fn parse_samples(text: &str) -> Result<Vec<f64>, FeatureError> {
    let trimmed = text.trim_start();
    let samples = if trimmed.starts_with('[') {
        parse_json(trimmed)?
    } else {
        parse_plain(text)?
    };

    check_finite(&samples)?;
    log::debug!("Parsed {} samples", samples.len());
    Ok(samples)
}

fn parse_json(text: &str) -> Result<Vec<f64>, FeatureError> {
    let items: Vec<serde_json::Value> =
        serde_json::from_str(text).map_err(|e| FeatureError::InvalidJson(e.to_string()))?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_f64().ok_or_else(|| FeatureError::InvalidToken {
                index,
                token: item.to_string(),
            })
        })
        .collect()
}

fn parse_plain(text: &str) -> Result<Vec<f64>, FeatureError> {
    let mut samples = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.starts_with('#') {
            continue;
        }

        for token in line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            let value = token
                .parse::<f64>()
                .map_err(|_| FeatureError::InvalidToken {
                    index: samples.len(),
                    token: token.to_string(),
                })?;
            samples.push(value);
        }
    }

    Ok(samples)
}
