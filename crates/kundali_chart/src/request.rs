//! Chart request: who, where, and when to read the dashas.

use chrono::{DateTime, Utc};

use kundali_time::BirthMoment;

use crate::error::ChartError;

/// Input for one chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartRequest {
    pub birth: BirthMoment,
    /// Degrees north, -90..=90.
    pub latitude: Option<f64>,
    /// Degrees east, -180..=180.
    pub longitude: Option<f64>,
    /// Instant at which "current" dasha periods are resolved. Defaults to now.
    pub query_time: Option<DateTime<Utc>>,
}

impl ChartRequest {
    pub fn new(birth: BirthMoment) -> Self {
        Self {
            birth,
            latitude: None,
            longitude: None,
            query_time: None,
        }
    }

    pub fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    pub fn at(mut self, query_time: DateTime<Utc>) -> Self {
        self.query_time = Some(query_time);
        self
    }

    /// Validated `(latitude, longitude)`.
    pub fn location(&self) -> Result<(f64, f64), ChartError> {
        let (Some(lat), Some(lon)) = (self.latitude, self.longitude) else {
            return Err(ChartError::MissingLocation);
        };
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(ChartError::InvalidInput("latitude must be within [-90, 90]"));
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(ChartError::InvalidInput(
                "longitude must be within [-180, 180]",
            ));
        }
        Ok((lat, lon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn birth() -> BirthMoment {
        BirthMoment::parse("2001-05-26", "21:48", "+05:30").unwrap()
    }

    #[test]
    fn location_required() {
        let req = ChartRequest::new(birth());
        assert_eq!(req.location(), Err(ChartError::MissingLocation));

        let mut half = req;
        half.latitude = Some(28.6);
        assert_eq!(half.location(), Err(ChartError::MissingLocation));
    }

    #[test]
    fn location_ranges_checked() {
        let req = ChartRequest::new(birth()).with_location(91.0, 77.2);
        assert!(matches!(req.location(), Err(ChartError::InvalidInput(_))));
        let req = ChartRequest::new(birth()).with_location(28.6, f64::NAN);
        assert!(matches!(req.location(), Err(ChartError::InvalidInput(_))));
    }

    #[test]
    fn valid_location_passes() {
        let req = ChartRequest::new(birth()).with_location(28.6139, 77.209);
        assert_eq!(req.location(), Ok((28.6139, 77.209)));
    }
}
