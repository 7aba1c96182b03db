use crate::calculator::DistanceCalculator;
use crate::coordinates::Coordinates;

/// Mean earth radius in meters
pub const EARTH_RADIUS: f64 = 6_371_000.;

/// Great-circle distance on a spherical earth using the
/// [haversine formula](https://en.wikipedia.org/wiki/Haversine_formula).
///
/// This is the default [`DistanceCalculator`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Haversine;

impl DistanceCalculator for Haversine {
    fn calculate_distance(&self, origin: &Coordinates, destination: &Coordinates) -> f64 {
        haversine_distance(origin, destination)
    }
}

pub fn haversine_distance(fix1: &Coordinates, fix2: &Coordinates) -> f64 {
    let phi1 = fix1.latitude_in_radians();
    let phi2 = fix2.latitude_in_radians();
    let delta_phi = phi2 - phi1;
    let delta_rho = fix2.longitude_in_radians() - fix1.longitude_in_radians();

    // cos(phi1) * cos(phi2) first, so swapping the points gives the same bits
    let a = (delta_phi / 2.).sin() * (delta_phi / 2.).sin() +
        phi1.cos() * phi2.cos() *
            (delta_rho / 2.).sin() * (delta_rho / 2.).sin();

    let c = 2. * a.sqrt().atan2((1. - a).sqrt());

    EARTH_RADIUS * c
}
