use rand::Rng;

use crate::constants::{WHEEL_MAX_SPINS, WHEEL_MIN_SPINS};

/// Segment fill colors, cycled when the wheel has fewer entries.
pub const WHEEL_COLORS: [&str; 12] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEAA7", "#DDA0DD",
    "#98D8C8", "#F7DC6F", "#BB8FCE", "#85C1E9", "#F8C471", "#82E0AA",
];

pub fn segment_angle(item_count: usize) -> f64 {
    360.0 / item_count as f64
}

/// Index of the segment under the top marker after the wheel has come
/// to rest at `final_angle` degrees of clockwise rotation.
pub fn winner_index(final_angle: f64, item_count: usize) -> usize {
    let normalized = (360.0 - final_angle.rem_euclid(360.0)).rem_euclid(360.0);
    let index = (normalized / segment_angle(item_count)).floor() as usize;
    // Guard the boundary where normalized lands exactly on 360.0.
    index.min(item_count - 1)
}

/// Total rotation for one spin: 5 to 8 full turns plus a uniformly
/// random final resting angle.
pub fn sample_rotation<R: Rng>(rng: &mut R) -> f64 {
    let spins = rng.gen_range(WHEEL_MIN_SPINS..WHEEL_MAX_SPINS);
    let final_angle = rng.gen_range(0.0..360.0);
    spins * 360.0 + final_angle
}

/// The resting angle a rotation ends on, ignoring full turns.
pub fn final_angle(total_rotation: f64) -> f64 {
    total_rotation.rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_segment_angle() {
        assert_eq!(segment_angle(8), 45.0);
        assert_eq!(segment_angle(12), 30.0);
    }

    #[test]
    fn test_winner_index_maps_angle_to_segment() {
        // 8 segments of 45 degrees. Zero rotation leaves segment 0
        // under the marker; an angle just past zero wraps to the end
        // of the ring.
        assert_eq!(winner_index(0.0, 8), 0);
        assert_eq!(winner_index(360.0, 8), 0);
        assert_eq!(winner_index(10.0, 8), 7);
        assert_eq!(winner_index(50.0, 8), 6);
        assert_eq!(winner_index(355.0, 8), 0);
    }

    #[test]
    fn test_winner_index_handles_multiple_turns() {
        // Full turns never change the winner.
        assert_eq!(winner_index(50.0 + 5.0 * 360.0, 8), winner_index(50.0, 8));
        assert_eq!(winner_index(355.0 + 7.0 * 360.0, 8), winner_index(355.0, 8));
    }

    #[test]
    fn test_winner_index_in_bounds_for_all_angles() {
        for count in 2..=12 {
            for tenth in 0..3600 {
                let angle = tenth as f64 / 10.0;
                assert!(winner_index(angle, count) < count);
            }
        }
    }

    #[test]
    fn test_sample_rotation_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let rotation = sample_rotation(&mut rng);
            assert!(rotation >= WHEEL_MIN_SPINS * 360.0);
            assert!(rotation < (WHEEL_MAX_SPINS + 1.0) * 360.0);
        }
    }
}
