use crate::calculator::{self, DistanceCalculator};
use crate::coordinates::Coordinates;
use crate::parallel::map_indexed;

/// Sums the distances between subsequent coordinates, using the active
/// calculator.
///
/// Empty and single point routes have a length of zero.
pub fn route_length<'a, I>(coordinates: I) -> f32
    where I: IntoIterator<Item = &'a Coordinates>
{
    let mut distance = 0.;
    let mut previous: Option<&Coordinates> = None;

    for coordinate in coordinates {
        if let Some(previous) = previous {
            distance += previous.distance_to(coordinate);
        }

        previous = Some(coordinate);
    }

    distance
}

/// Like [`route_length`] but with an explicit `calculator`.
pub fn route_length_with<'a, I>(calculator: &dyn DistanceCalculator, coordinates: I) -> f32
    where I: IntoIterator<Item = &'a Coordinates>
{
    let mut distance = 0.;
    let mut previous: Option<&Coordinates> = None;

    for coordinate in coordinates {
        if let Some(previous) = previous {
            distance += previous.distance_with(calculator, coordinate);
        }

        previous = Some(coordinate);
    }

    distance
}

/// Pairwise distances in meters between all `points`.
///
/// Only the lower triangle is stored: `matrix[i][j]` with `j < i` is the
/// distance from `points[i]` to `points[j]`, so the first row is empty.
/// The active calculator is read once before any row is computed. Rows are
/// filled in parallel when the `rayon` feature is enabled.
pub fn distance_matrix(points: &[Coordinates]) -> Vec<Vec<f32>> {
    let calculator = calculator::active_calculator();
    trace!("Calculating distance matrix for {} points using {:?}", points.len(), calculator);

    map_indexed(points, |i, p1| points
        .iter()
        .take(i)
        .map(|p2| p1.distance_with(&*calculator, p2))
        .collect())
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;
    use crate::haversine::{Haversine, haversine_distance};

    const A: Coordinates = Coordinates::new(51.1927735, 4.4350355);
    const B: Coordinates = Coordinates::new(51.1921979, 4.4345034);
    const C: Coordinates = Coordinates::new(53.4927735, 3.1150355);

    #[test]
    fn empty_and_single_routes() {
        assert_eq!(route_length_with(&Haversine, &[]), 0.);
        assert_eq!(route_length_with(&Haversine, &[A]), 0.);
    }

    #[test]
    fn sums_legs() {
        let expected = haversine_distance(&A, &B) as f32 + haversine_distance(&B, &C) as f32;
        assert_eq!(route_length_with(&Haversine, &[A, B, C]), expected);
        assert_eq!(route_length_with(&Haversine, vec![A, B, C].iter()), expected);
    }

    #[test]
    fn out_and_back() {
        let there = route_length_with(&Haversine, &[A, C]);
        assert_approx_eq!(route_length_with(&Haversine, &[A, C, A]), 2. * there, 1e-3);
    }
}
