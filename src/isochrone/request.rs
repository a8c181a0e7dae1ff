use crate::core::config::IsochroneConfig;
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};

/// Routing profile offered by the isochrone provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransportMode {
    #[default]
    Walking,
    Cycling,
    Driving,
    DrivingTraffic,
}

impl TransportMode {
    pub const ALL: [TransportMode; 4] = [
        TransportMode::Walking,
        TransportMode::Cycling,
        TransportMode::Driving,
        TransportMode::DrivingTraffic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Walking => "walking",
            TransportMode::Cycling => "cycling",
            TransportMode::Driving => "driving",
            TransportMode::DrivingTraffic => "driving-traffic",
        }
    }
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TransportMode {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self> {
        TransportMode::ALL
            .into_iter()
            .find(|m| m.as_str() == s.trim())
            .ok_or_else(|| MapError::ParseError(format!("unknown transport mode {:?}", s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "X"),
            Axis::Y => write!(f, "Y"),
        }
    }
}

/// Rejected form input; the message is what the user is shown
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("No valid format for time. Use: 5, 10, 15")]
    EmptyOrInvalidDuration,

    #[error("The maximum isochrones are {max}")]
    TooManyDurations { count: usize, max: usize },

    #[error("Input a {0} coordinate. Tip use the Starting Point button")]
    MissingCoordinate(Axis),

    #[error("Invalid {axis} coordinate {value:?}")]
    InvalidCoordinate { axis: Axis, value: String },
}

/// One routing call: a single contour for the start point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsochroneRequest {
    /// Contour duration in minutes
    pub minutes: u32,
    pub url: String,
}

/// Parses `5, 10, 15` into minutes, keeping input order.
///
/// Every token must be a positive whole number; an empty field is invalid.
pub fn parse_durations(text: &str) -> std::result::Result<Vec<u32>, ValidationError> {
    text.split(',')
        .map(|token| match token.trim().parse::<u32>() {
            Ok(minutes) if minutes > 0 => Ok(minutes),
            _ => Err(ValidationError::EmptyOrInvalidDuration),
        })
        .collect()
}

fn require_coordinate(axis: Axis, raw: &str) -> std::result::Result<&str, ValidationError> {
    match raw.trim() {
        "" => Err(ValidationError::MissingCoordinate(axis)),
        trimmed => Ok(trimmed),
    }
}

fn parse_coordinate(
    axis: Axis,
    raw: &str,
    limit: f64,
) -> std::result::Result<f64, ValidationError> {
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value.abs() <= limit => Ok(value),
        _ => Err(ValidationError::InvalidCoordinate {
            axis,
            value: raw.to_string(),
        }),
    }
}

/// Validates the form values and builds one request per duration.
///
/// Requests come back in reverse input order: that is the dispatch order,
/// and the pipeline ranks colours by it.
pub fn build_requests(
    duration_text: &str,
    x: &str,
    y: &str,
    mode: TransportMode,
    config: &IsochroneConfig,
) -> Result<Vec<IsochroneRequest>> {
    let durations = parse_durations(duration_text)?;
    let max = config.contour_limit();
    if durations.len() > max {
        return Err(ValidationError::TooManyDurations {
            count: durations.len(),
            max,
        }
        .into());
    }

    // Both fields must be filled in before either is parsed
    let x = require_coordinate(Axis::X, x)?;
    let y = require_coordinate(Axis::Y, y)?;
    parse_coordinate(Axis::X, x, 180.0)?;
    parse_coordinate(Axis::Y, y, 90.0)?;
    let token = config.require_token()?;

    // The coordinate text goes into the path as entered, keeping its precision
    let base = format!(
        "{}/{}/{}/{}%2C{}",
        config.api_base.trim_end_matches('/'),
        config.profile_namespace,
        mode,
        x,
        y
    );
    let base = reqwest::Url::parse(&base)
        .map_err(|e| MapError::Config(format!("invalid isochrone API base {:?}: {}", config.api_base, e)))?;

    log::debug!(
        "building {} {} isochrone request(s) from ({}, {})",
        durations.len(),
        mode,
        x,
        y
    );

    Ok(durations
        .iter()
        .rev()
        .map(|&minutes| {
            let mut url = base.clone();
            url.query_pairs_mut()
                .append_pair("contours_minutes", &minutes.to_string())
                .append_pair("polygons", "true")
                .append_pair("denoise", "1")
                .append_pair("access_token", token);
            IsochroneRequest {
                minutes,
                url: url.to_string(),
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> IsochroneConfig {
        IsochroneConfig::default().with_access_token("pk.test")
    }

    fn validation(result: Result<Vec<IsochroneRequest>>) -> ValidationError {
        match result {
            Err(MapError::Validation(e)) => e,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_durations() {
        assert_eq!(parse_durations("5, 10, 15").unwrap(), vec![5, 10, 15]);
        assert_eq!(parse_durations("7").unwrap(), vec![7]);
        assert!(parse_durations("").is_err());
        assert!(parse_durations("5,,10").is_err());
        assert!(parse_durations("5,abc").is_err());
        assert!(parse_durations("0").is_err());
        assert!(parse_durations("2.5").is_err());
    }

    #[test]
    fn test_urls_in_reverse_input_order() {
        let requests =
            build_requests("5,10,15", "4.9000", "52.3700", TransportMode::Walking, &config())
                .unwrap();

        let minutes: Vec<u32> = requests.iter().map(|r| r.minutes).collect();
        assert_eq!(minutes, vec![15, 10, 5]);

        for request in &requests {
            assert_eq!(request.url.matches("contours_minutes=").count(), 1);
            assert!(request
                .url
                .contains(&format!("contours_minutes={}&", request.minutes)));
        }
    }

    #[test]
    fn test_url_shape() {
        let requests =
            build_requests("10", "4.9000", "52.3700", TransportMode::Cycling, &config()).unwrap();
        assert_eq!(
            requests[0].url,
            "https://api.mapbox.com/isochrone/v1/mapbox/cycling/4.9000%2C52.3700\
             ?contours_minutes=10&polygons=true&denoise=1&access_token=pk.test"
        );
    }

    #[test]
    fn test_every_count_up_to_limit_builds() {
        let all = ["1", "2", "3", "4", "5", "6", "7", "8", "9"];
        for n in 1..=9 {
            let text = all[..n].join(",");
            let requests =
                build_requests(&text, "4.9", "52.37", TransportMode::Driving, &config()).unwrap();
            assert_eq!(requests.len(), n);
        }
    }

    #[test]
    fn test_too_many_durations() {
        let err = validation(build_requests(
            "1,2,3,4,5,6,7,8,9,10",
            "4.9",
            "52.37",
            TransportMode::Walking,
            &config(),
        ));
        assert_eq!(err, ValidationError::TooManyDurations { count: 10, max: 9 });
        assert_eq!(err.to_string(), "The maximum isochrones are 9");
    }

    #[test]
    fn test_invalid_duration_wins_over_missing_coordinate() {
        let err = validation(build_requests("5,abc", "", "", TransportMode::Walking, &config()));
        assert_eq!(err, ValidationError::EmptyOrInvalidDuration);
    }

    #[test]
    fn test_missing_coordinates() {
        let err = validation(build_requests("5", "", "52.37", TransportMode::Walking, &config()));
        assert_eq!(err, ValidationError::MissingCoordinate(Axis::X));
        assert_eq!(
            err.to_string(),
            "Input a X coordinate. Tip use the Starting Point button"
        );

        let err = validation(build_requests("5", "4.9", " ", TransportMode::Walking, &config()));
        assert_eq!(err, ValidationError::MissingCoordinate(Axis::Y));
    }

    #[test]
    fn test_empty_coordinate_reported_before_invalid_one() {
        let err = validation(build_requests("5", "abc", "", TransportMode::Walking, &config()));
        assert_eq!(err, ValidationError::MissingCoordinate(Axis::Y));

        let err = validation(build_requests("5", "", "north", TransportMode::Walking, &config()));
        assert_eq!(err, ValidationError::MissingCoordinate(Axis::X));
    }

    #[test]
    fn test_url_embeds_trimmed_coordinate_text() {
        let requests =
            build_requests("5", " +4.90 ", "52.370\t", TransportMode::Walking, &config()).unwrap();
        assert!(requests[0].url.contains("/walking/+4.90%2C52.370?"));
    }

    #[test]
    fn test_non_numeric_coordinate() {
        let err = validation(build_requests("5", "east", "52.37", TransportMode::Walking, &config()));
        assert!(matches!(err, ValidationError::InvalidCoordinate { axis: Axis::X, .. }));

        let err = validation(build_requests("5", "4.9", "95", TransportMode::Walking, &config()));
        assert!(matches!(err, ValidationError::InvalidCoordinate { axis: Axis::Y, .. }));
    }

    #[test]
    fn test_missing_token_after_validation() {
        let result = build_requests(
            "5",
            "4.9",
            "52.37",
            TransportMode::Walking,
            &IsochroneConfig::default(),
        );
        assert!(matches!(result, Err(MapError::Config(_))));
    }

    #[test]
    fn test_transport_mode_round_trip_names() {
        assert_eq!("driving-traffic".parse::<TransportMode>().unwrap(), TransportMode::DrivingTraffic);
        assert_eq!(TransportMode::Walking.to_string(), "walking");
        assert!("flying".parse::<TransportMode>().is_err());
    }
}
