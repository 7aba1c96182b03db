#[macro_use] extern crate cfg_if;
#[macro_use] extern crate lazy_static;
#[macro_use] extern crate log;

extern crate failure;

#[cfg(feature = "rayon")]
extern crate rayon;

pub mod calculator;
pub mod coordinates;
pub mod error;
pub mod haversine;
pub mod route;

mod parallel;

pub use crate::calculator::{DistanceCalculator, active_calculator, restore_default_calculator, set_active_calculator};
pub use crate::coordinates::Coordinates;
pub use crate::error::CoordinatesError;
pub use crate::haversine::Haversine;
pub use crate::route::{distance_matrix, route_length, route_length_with};
