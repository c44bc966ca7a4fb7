//! Query URL construction for the bundle endpoint.
//!
//! Turns a base URL plus month selection into the request URL, e.g.
//! `https://host/api/games?month=july-2024&showShortFormat=true&showFullResponse=true`.

mod month;

pub use month::YearMonth;

use url::Url;

use crate::error::AppError;

/// Which listing the endpoint is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointConfig {
    /// A single bundle month.
    Monthly { month: YearMonth },
    /// Every bundle between two months, inclusive.
    Range { start: YearMonth, end: YearMonth },
}

impl EndpointConfig {
    /// Query parameters in the order they are set on the URL.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        match self {
            EndpointConfig::Monthly { month } => vec![
                ("month", month.query_value()),
                ("showShortFormat", "true".to_string()),
                ("showFullResponse", "true".to_string()),
            ],
            EndpointConfig::Range { start, end } => vec![
                ("startDate", start.query_value()),
                ("endDate", end.query_value()),
                ("showShortFormat", "true".to_string()),
            ],
        }
    }
}

/// Builds the request URL for `endpoint` on top of `base`.
///
/// Returns an empty string when `base` is blank. Parameters already present
/// in `base` are overwritten in place; other parameters are kept.
///
/// # Examples
///
/// - `build_api_url("https://h/api", Monthly 2024-07)` →
///   `"https://h/api?month=july-2024&showShortFormat=true&showFullResponse=true"`
/// - `build_api_url("  ", ..)` → `""`
pub fn build_api_url(base: &str, endpoint: &EndpointConfig) -> Result<String, AppError> {
    let base = base.trim();
    if base.is_empty() {
        return Ok(String::new());
    }
    let mut url = parse_base(base)?;
    set_query_params(&mut url, &endpoint.query_params());
    tracing::debug!("built api url {}", url);
    Ok(url.into())
}

/// URL shown while inputs are still being edited: the bare base until a
/// month is chosen, the full request URL afterwards.
pub fn preview_url(base: &str, endpoint: Option<&EndpointConfig>) -> Result<String, AppError> {
    match endpoint {
        Some(endpoint) => build_api_url(base, endpoint),
        None => Ok(base.trim().to_string()),
    }
}

fn parse_base(base: &str) -> Result<Url, AppError> {
    let url = Url::parse(base).map_err(|source| AppError::InvalidUrl {
        url: base.to_string(),
        source,
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(AppError::UnsupportedScheme {
            url: base.to_string(),
            scheme: scheme.to_string(),
        }),
    }
}

/// `URLSearchParams.set` semantics: the first existing pair with a given
/// name takes the new value, later duplicates are dropped, names not yet
/// present are appended.
fn set_query_params(url: &mut Url, params: &[(&str, String)]) {
    let existing: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    let mut written = vec![false; params.len()];
    let mut merged: Vec<(String, String)> = Vec::with_capacity(existing.len() + params.len());
    for (name, value) in existing {
        match params.iter().position(|(p, _)| *p == name) {
            Some(i) if written[i] => {}
            Some(i) => {
                written[i] = true;
                merged.push((name, params[i].1.clone()));
            }
            None => merged.push((name, value)),
        }
    }
    for (i, (name, value)) in params.iter().enumerate() {
        if !written[i] {
            merged.push((name.to_string(), value.clone()));
        }
    }

    url.query_pairs_mut().clear().extend_pairs(merged);
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://api.example.com/api/HumbleChoice/GetMothlyGames";

    fn ym(s: &str) -> YearMonth {
        s.parse().unwrap()
    }

    #[test]
    fn monthly_url() {
        let url = build_api_url(BASE, &EndpointConfig::Monthly { month: ym("2024-07") }).unwrap();
        assert_eq!(
            url,
            format!("{BASE}?month=july-2024&showShortFormat=true&showFullResponse=true")
        );
    }

    #[test]
    fn range_url() {
        let endpoint = EndpointConfig::Range {
            start: ym("2024-01"),
            end: ym("2024-03"),
        };
        let url = build_api_url(BASE, &endpoint).unwrap();
        assert_eq!(
            url,
            format!("{BASE}?startDate=january-2024&endDate=march-2024&showShortFormat=true")
        );
    }

    #[test]
    fn blank_base_gives_empty_string() {
        let endpoint = EndpointConfig::Monthly { month: ym("2024-07") };
        assert_eq!(build_api_url("", &endpoint).unwrap(), "");
        assert_eq!(build_api_url("   ", &endpoint).unwrap(), "");
    }

    #[test]
    fn relative_base_is_rejected() {
        let endpoint = EndpointConfig::Monthly { month: ym("2024-07") };
        let err = build_api_url("/api/games", &endpoint).unwrap_err();
        assert!(matches!(err, AppError::InvalidUrl { .. }));
        assert!(build_api_url("not a url", &endpoint).is_err());
    }

    #[test]
    fn non_http_base_is_rejected() {
        let endpoint = EndpointConfig::Monthly { month: ym("2024-07") };
        for base in ["file:///tmp/x.json", "ftp://example.com/games", "mailto:a@b.c"] {
            match build_api_url(base, &endpoint) {
                Err(AppError::UnsupportedScheme { scheme, .. }) => {
                    assert_eq!(scheme, base.split(':').next().unwrap())
                }
                other => panic!("expected UnsupportedScheme for {base}, got {other:?}"),
            }
        }
        assert!(build_api_url("HTTP://EXAMPLE.COM/games", &endpoint).is_ok());
    }

    #[test]
    fn base_whitespace_is_trimmed() {
        let endpoint = EndpointConfig::Monthly { month: ym("2023-12") };
        let url = build_api_url(&format!("  {BASE}\n"), &endpoint).unwrap();
        assert!(url.starts_with(&format!("{BASE}?month=december-2023")));
    }

    #[test]
    fn existing_params_are_overwritten_in_place() {
        let base = format!("{BASE}?month=may-2020&key=abc&month=june-2020");
        let url = build_api_url(&base, &EndpointConfig::Monthly { month: ym("2024-07") }).unwrap();
        assert_eq!(
            url,
            format!("{BASE}?month=july-2024&key=abc&showShortFormat=true&showFullResponse=true")
        );
    }

    #[test]
    fn preview_without_month_is_base() {
        assert_eq!(preview_url(&format!(" {BASE} "), None).unwrap(), BASE);
        assert_eq!(preview_url("", None).unwrap(), "");
        let endpoint = EndpointConfig::Monthly { month: ym("2024-02") };
        assert!(preview_url(BASE, Some(&endpoint))
            .unwrap()
            .contains("month=february-2024"));
    }
}
