use crate::N_FEATURES;

/// One of the eight California housing census-block features.
///
/// Discriminants are the feature's position in the model input.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Feature {
    MedInc = 0isize,
    HouseAge = 1isize,
    AveRooms = 2isize,
    AveBedrms = 3isize,
    Population = 4isize,
    AveOccup = 5isize,
    Latitude = 6isize,
    Longitude = 7isize,
}

impl Feature {
    /// All features in model order.
    pub const fn all() -> [Self; N_FEATURES] {
        [
            Self::MedInc,
            Self::HouseAge,
            Self::AveRooms,
            Self::AveBedrms,
            Self::Population,
            Self::AveOccup,
            Self::Latitude,
            Self::Longitude,
        ]
    }
    /// Position in the model input.
    pub const fn index(&self) -> usize {
        *self as usize
    }
    /// Column name, also used as the form field name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::MedInc => "MedInc",
            Self::HouseAge => "HouseAge",
            Self::AveRooms => "AveRooms",
            Self::AveBedrms => "AveBedrms",
            Self::Population => "Population",
            Self::AveOccup => "AveOccup",
            Self::Latitude => "Latitude",
            Self::Longitude => "Longitude",
        }
    }
    /// Human-readable name.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::MedInc => "Median Income",
            Self::HouseAge => "House Age",
            Self::AveRooms => "Average Rooms",
            Self::AveBedrms => "Average Bedrooms",
            Self::Population => "Population",
            Self::AveOccup => "Average Occupancy",
            Self::Latitude => "Latitude",
            Self::Longitude => "Longitude",
        }
    }
    /// Value pre-filled in the form and used when a request omits its data.
    /// Taken from the first block of the dataset (Berkeley hills).
    pub const fn default(&self) -> f64 {
        match self {
            Self::MedInc => 8.3252,
            Self::HouseAge => 41.0,
            Self::AveRooms => 6.98,
            Self::AveBedrms => 1.02,
            Self::Population => 322.,
            Self::AveOccup => 2.55,
            Self::Latitude => 37.88,
            Self::Longitude => -122.23,
        }
    }
    /// Slider bounds and step as (min, max, step), roughly the observed range.
    pub const fn range(&self) -> (f64, f64, f64) {
        match self {
            Self::MedInc => (0.5, 15.0, 0.0001),
            Self::HouseAge => (1., 52., 1.),
            Self::AveRooms => (1., 20., 0.01),
            Self::AveBedrms => (0.5, 5., 0.01),
            Self::Population => (3., 36_000., 1.),
            Self::AveOccup => (0.5, 10., 0.01),
            Self::Latitude => (32.5, 42., 0.01),
            Self::Longitude => (-124.5, -114., 0.01),
        }
    }
}

/// Panics past the last position; callers index with validated positions.
impl From<usize> for Feature {
    fn from(n: usize) -> Self {
        match n {
            0 => Self::MedInc,
            1 => Self::HouseAge,
            2 => Self::AveRooms,
            3 => Self::AveBedrms,
            4 => Self::Population,
            5 => Self::AveOccup,
            6 => Self::Latitude,
            7 => Self::Longitude,
            x => panic!("no feature at position {}", x),
        }
    }
}

impl TryFrom<&str> for Feature {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::all()
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown feature {}", s))
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
