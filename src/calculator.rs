use std::fmt::Debug;
use std::sync::{Arc, PoisonError, RwLock};

use crate::coordinates::Coordinates;
use crate::haversine::Haversine;

/// A strategy for calculating the surface distance between two coordinates.
pub trait DistanceCalculator: Debug + Send + Sync {
    /// Distance in meters between `origin` and `destination`.
    fn calculate_distance(&self, origin: &Coordinates, destination: &Coordinates) -> f64;
}

impl<T: DistanceCalculator + ?Sized> DistanceCalculator for Arc<T> {
    fn calculate_distance(&self, origin: &Coordinates, destination: &Coordinates) -> f64 {
        (**self).calculate_distance(origin, destination)
    }
}

lazy_static! {
    static ref ACTIVE: RwLock<Arc<dyn DistanceCalculator>> = RwLock::new(Arc::new(Haversine));
}

/// Returns the calculator currently used by
/// [`Coordinates::distance_to`](crate::Coordinates::distance_to) and
/// [`route_length`](crate::route::route_length).
///
/// The handle stays valid when the active calculator is swapped afterwards.
pub fn active_calculator() -> Arc<dyn DistanceCalculator> {
    ACTIVE.read().unwrap_or_else(PoisonError::into_inner).clone()
}

/// Replaces the process wide calculator.
///
/// Distances that are already being computed on other threads finish with
/// the calculator they started with.
pub fn set_active_calculator<C: DistanceCalculator + 'static>(calculator: C) {
    debug!("Switching active distance calculator to {:?}", calculator);
    replace(Arc::new(calculator));
}

/// Switches back to the [`Haversine`] calculator.
pub fn restore_default_calculator() {
    debug!("Restoring default distance calculator");
    replace(Arc::new(Haversine));
}

fn replace(calculator: Arc<dyn DistanceCalculator>) {
    *ACTIVE.write().unwrap_or_else(PoisonError::into_inner) = calculator;
}
