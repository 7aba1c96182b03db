use std::f64::consts::PI;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::calculator::{self, DistanceCalculator};
use crate::error::CoordinatesError;

/// An immutable point on the earth's surface in decimal degrees.
///
/// No range checks are done, latitudes beyond ±90° or non-finite values are
/// stored as given.
///
/// Two `Coordinates` are equal if and only if both of their components have
/// identical bit patterns. This differs from numeric float comparison for
/// `NaN` (a `NaN` coordinate equals itself) and for signed zeros
/// (`0.0` and `-0.0` are different coordinates), and keeps `Eq` and `Hash`
/// consistent.
#[derive(Clone, Copy)]
pub struct Coordinates {
    latitude: f32,
    longitude: f32,
}

impl Coordinates {
    pub const fn new(latitude: f32, longitude: f32) -> Self {
        Coordinates { latitude, longitude }
    }

    /// Creates coordinates from double precision degrees, narrowing them to
    /// the stored single precision.
    pub fn from_degrees(latitude: f64, longitude: f64) -> Self {
        Coordinates::new(latitude as f32, longitude as f32)
    }

    /// Creates coordinates from the first two values of `values`
    /// (latitude, longitude). Further values are ignored.
    pub fn from_pair<T: Copy + Into<f64>>(values: &[T]) -> Result<Self, CoordinatesError> {
        match values {
            [latitude, longitude, ..] => Ok(Coordinates::from_degrees((*latitude).into(), (*longitude).into())),
            _ => Err(CoordinatesError::NotEnoughValues { expected: 2, found: values.len() }),
        }
    }

    /// Creates coordinates from `[degrees, minutes, seconds]` triplets.
    ///
    /// Each axis is converted as `degrees + minutes / 60 + seconds / 3600`,
    /// so all three components should carry the same sign.
    pub fn from_dms(latitude: &[f64], longitude: &[f64]) -> Result<Self, CoordinatesError> {
        Ok(Coordinates::from_degrees(dms_to_decimal(latitude)?, dms_to_decimal(longitude)?))
    }

    pub fn latitude(&self) -> f32 {
        self.latitude
    }

    pub fn longitude(&self) -> f32 {
        self.longitude
    }

    pub fn latitude_in_radians(&self) -> f64 {
        f64::from(self.latitude) * PI / 180.
    }

    pub fn longitude_in_radians(&self) -> f64 {
        f64::from(self.longitude) * PI / 180.
    }

    /// Distance in meters to `destination` according to the active
    /// [`DistanceCalculator`](crate::calculator::DistanceCalculator).
    ///
    /// Returns `NaN` if there is no destination.
    ///
    /// ```
    /// use geocoords::Coordinates;
    ///
    /// let a = Coordinates::new(51.1927735, 4.4350355);
    /// assert_eq!(a.distance_to(&a), 0.);
    /// assert!(a.distance_to(None).is_nan());
    /// ```
    pub fn distance_to<'a, D>(&self, destination: D) -> f32
        where D: Into<Option<&'a Coordinates>>
    {
        self.distance_with(&*calculator::active_calculator(), destination)
    }

    /// Same as [`distance_to`](Coordinates::distance_to) but uses `calculator`
    /// instead of the process wide one.
    pub fn distance_with<'a, D>(&self, calculator: &dyn DistanceCalculator, destination: D) -> f32
        where D: Into<Option<&'a Coordinates>>
    {
        match destination.into() {
            Some(destination) => calculator.calculate_distance(self, destination) as f32,
            None => std::f32::NAN,
        }
    }
}

fn dms_to_decimal(dms: &[f64]) -> Result<f64, CoordinatesError> {
    match dms {
        [degrees, minutes, seconds, ..] => Ok(degrees + minutes / 60. + seconds / 3600.),
        _ => Err(CoordinatesError::NotEnoughValues { expected: 3, found: dms.len() }),
    }
}

fn parse_axis(axis: &'static str, text: &str) -> Result<f32, CoordinatesError> {
    let value = text.trim();
    value.parse::<f32>().map_err(|cause| CoordinatesError::InvalidNumber {
        axis,
        value: value.to_owned(),
        cause,
    })
}

/// Parses `"<latitude>,<longitude>"`. Anything after a second comma is ignored.
impl FromStr for Coordinates {
    type Err = CoordinatesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut pieces = s.split(',');
        let latitude = pieces.next().unwrap_or("");
        let longitude = pieces.next()
            .ok_or_else(|| CoordinatesError::MissingLongitude(s.to_owned()))?;

        Ok(Coordinates::new(parse_axis("latitude", latitude)?, parse_axis("longitude", longitude)?))
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

impl fmt::Debug for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinates({}, {})", self.latitude, self.longitude)
    }
}

impl PartialEq for Coordinates {
    fn eq(&self, other: &Coordinates) -> bool {
        self.latitude.to_bits() == other.latitude.to_bits() &&
            self.longitude.to_bits() == other.longitude.to_bits()
    }
}

impl Eq for Coordinates {}

impl Hash for Coordinates {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.latitude.to_bits().hash(state);
        self.longitude.to_bits().hash(state);
    }
}

impl From<(f32, f32)> for Coordinates {
    fn from((latitude, longitude): (f32, f32)) -> Self {
        Coordinates::new(latitude, longitude)
    }
}

impl From<[f32; 2]> for Coordinates {
    fn from([latitude, longitude]: [f32; 2]) -> Self {
        Coordinates::new(latitude, longitude)
    }
}

impl From<[f64; 2]> for Coordinates {
    fn from([latitude, longitude]: [f64; 2]) -> Self {
        Coordinates::from_degrees(latitude, longitude)
    }
}
