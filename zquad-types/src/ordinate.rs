use serde::{Deserialize, Serialize};

/// Maps ordinates of a symmetric interval `[-span, span]` to and from the
/// unit interval.
///
/// A negative span flips the direction, which is how latitude is handled:
/// north (90°) maps to unit 0 and south (-90°) maps to unit 1.
///
/// # Examples
///
/// ```
/// use zquad_types::ordinate::Ordinate;
///
/// assert_eq!(Ordinate::LATITUDE.to_unit(90.0), 0.0);
/// assert_eq!(Ordinate::LATITUDE.to_unit(-90.0), 1.0);
/// assert_eq!(Ordinate::LONGITUDE.to_unit(0.0), 0.5);
/// assert_eq!(Ordinate::LONGITUDE.from_unit(1.0), 180.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ordinate {
    span: f64,
    sign: f64,
}

impl Ordinate {
    /// Latitude, north to south.
    pub const LATITUDE: Ordinate = Ordinate::new(-90.0);

    /// Longitude, west to east.
    pub const LONGITUDE: Ordinate = Ordinate::new(180.0);

    /// Create a converter for `[-|span|, |span|]`; the sign of `span` picks
    /// the direction.
    pub const fn new(span: f64) -> Self {
        let sign = if span < 0.0 { -1.0 } else { 1.0 };
        Self {
            span: span * sign,
            sign,
        }
    }

    /// Half-width of the interval in degrees.
    pub fn span(&self) -> f64 {
        self.span
    }

    fn width(&self) -> f64 {
        self.span * 2.0
    }

    /// Whether `value` lies inside the interval.
    pub fn contains(&self, value: f64) -> bool {
        (-self.span..=self.span).contains(&value)
    }

    pub fn to_unit(&self, value: f64) -> f64 {
        (self.span + self.sign * value) / self.width()
    }

    /// Degrees/minutes/seconds to unit. `forward` selects the positive
    /// hemisphere (north or east).
    pub fn dms_to_unit(&self, degrees: u32, minutes: u32, seconds: f64, forward: bool) -> f64 {
        let value = degrees as f64 + minutes as f64 / 60.0 + seconds / 3600.0;
        self.to_unit(if forward { value } else { -value })
    }

    pub fn from_unit(&self, unit: f64) -> f64 {
        (unit * self.width() - self.span) / self.sign
    }

    /// Whole degrees of the absolute ordinate at `unit`.
    pub fn unit_to_degrees(&self, unit: f64) -> u32 {
        self.from_unit(unit).abs() as u32
    }

    /// Whole arc minutes remaining after [`Self::unit_to_degrees`].
    pub fn unit_to_minutes(&self, unit: f64) -> u32 {
        ((self.from_unit(unit).abs() * 60.0) as u32) % 60
    }

    /// Arc seconds remaining after [`Self::unit_to_minutes`].
    pub fn unit_to_seconds(&self, unit: f64) -> f64 {
        (self.from_unit(unit).abs() * 3600.0) % 60.0
    }
}
