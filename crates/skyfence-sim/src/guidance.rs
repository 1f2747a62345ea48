//! Guidance math for defensive fire.
//!
//! Provides the constant-bearing interception solver used by gun
//! batteries to lead a moving target, and the time-to-intercept
//! estimate used to choose between candidate firing solutions.

use skyfence_core::types::Vec2;

/// Compute a firing velocity that intercepts a straight-line target.
///
/// Derivation: with `p = launch_pos - target_pos`, equating the time for
/// the relative x and y displacements to close yields a quadratic
/// `A*v_y^2 + B*v_y + C = 0` in the vertical firing velocity:
///
/// ```text
/// Q = Tv.x - (p.x/p.y)*Tv.y
/// A = 1 + (p.x/p.y)^2
/// B = 2*Q*(p.y/p.x)
/// C = Q^2 - speed^2
/// ```
///
/// Of the real positive roots, the one reaching the target soonest is
/// taken, and `v_x = Q + (p.x/p.y)*v_y` recovers the full vector.
///
/// The returned magnitude drifts off `speed` for fast-moving targets,
/// so callers rescale the result to their actual muzzle speed.
///
/// Falls back to a vertical shot at `speed` when the target is exactly
/// above, below, or level with the launch point, or when no root gives
/// a positive finite time-to-intercept.
pub fn intercept_velocity(
    target_pos: Vec2,
    target_vel: Vec2,
    launch_pos: Vec2,
    speed: f64,
) -> Vec2 {
    let p = launch_pos - target_pos;

    // Degenerate geometry: both coefficient ratios divide by a
    // component of p.
    if p.x == 0.0 || p.y == 0.0 {
        return Vec2::new(0.0, speed);
    }

    let ratio = p.x / p.y;
    let q = target_vel.x - ratio * target_vel.y;
    let a = 1.0 + ratio * ratio;
    let b = 2.0 * q * (p.y / p.x);
    let c = q * q - speed * speed;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return Vec2::new(0.0, speed);
    }

    let sqrt_disc = discriminant.sqrt();
    let candidates = [(-b + sqrt_disc) / (2.0 * a), (-b - sqrt_disc) / (2.0 * a)];

    let mut best: Option<(f64, f64)> = None; // (time, v_y)
    for v_y in candidates {
        if v_y <= 0.0 {
            continue;
        }
        let t = time_to_intercept(p, target_vel, v_y);
        if !t.is_finite() || t <= 0.0 {
            continue;
        }
        if best.map_or(true, |(best_t, _)| t < best_t) {
            best = Some((t, v_y));
        }
    }

    match best {
        Some((_, v_y)) => Vec2::new(q + ratio * v_y, v_y),
        None => Vec2::new(0.0, speed),
    }
}

/// Time for the vertical gap to close given the candidate vertical
/// firing velocity. Negative or infinite when the shot never catches
/// the target.
fn time_to_intercept(p: Vec2, target_vel: Vec2, v_y: f64) -> f64 {
    -p.y / (v_y - target_vel.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-3;

    #[test]
    fn test_solver_leads_moving_target() {
        // Target inbound from upper right, solution worked by hand:
        // Q = -10, A = 1.25, B = -40, C = -2400, positive root v_y = 62.6476
        let solution = intercept_velocity(
            Vec2::new(100.0, 200.0),
            Vec2::new(-30.0, -40.0),
            Vec2::new(0.0, 0.0),
            50.0,
        );
        assert!(
            (solution.x - 21.3238).abs() < TOL,
            "v_x should be ~21.3238, got {:.4}",
            solution.x
        );
        assert!(
            (solution.y - 62.6476).abs() < TOL,
            "v_y should be ~62.6476, got {:.4}",
            solution.y
        );
    }

    #[test]
    fn test_solver_picks_sooner_of_two_roots() {
        // Both roots positive here: v_y = 120 (t = 1.25s) and v_y = 8
        // (t = 4.17s). The sooner intercept wins.
        let solution = intercept_velocity(
            Vec2::new(100.0, 200.0),
            Vec2::new(-60.0, -40.0),
            Vec2::new(0.0, 0.0),
            20.0,
        );
        assert!(
            (solution.y - 120.0).abs() < TOL,
            "expected the t=1.25s root, got v_y {:.4}",
            solution.y
        );
        assert!((solution.x - 20.0).abs() < TOL);
    }

    #[test]
    fn test_solver_stationary_target_aims_straight_at_it() {
        let solution = intercept_velocity(
            Vec2::new(300.0, 400.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 0.0),
            100.0,
        );
        // Exact solution at full speed along the line of sight
        assert!((solution.x - 60.0).abs() < TOL);
        assert!((solution.y - 80.0).abs() < TOL);
        assert!((solution.magnitude() - 100.0).abs() < TOL);
    }

    #[test]
    fn test_solver_stationary_target_directly_above() {
        // p.x = 0 takes the degenerate-geometry path, which is also the
        // exact solution here: straight up, arriving in d/speed seconds.
        let solution = intercept_velocity(
            Vec2::new(0.0, 500.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 0.0),
            100.0,
        );
        assert_eq!(solution.x, 0.0);
        assert_eq!(solution.y, 100.0);
    }

    #[test]
    fn test_solver_falls_back_when_target_outruns_shot() {
        // Distant crossing target, slow projectile: discriminant < 0
        let solution = intercept_velocity(
            Vec2::new(1000.0, 10.0),
            Vec2::new(-50.0, 0.0),
            Vec2::new(0.0, 0.0),
            10.0,
        );
        assert_eq!(solution.x, 0.0);
        assert_eq!(solution.y, 10.0);
    }

    #[test]
    fn test_solver_level_target_falls_back_vertical() {
        let solution = intercept_velocity(
            Vec2::new(500.0, 0.0),
            Vec2::new(-100.0, 0.0),
            Vec2::new(0.0, 0.0),
            200.0,
        );
        assert_eq!(solution.x, 0.0);
        assert_eq!(solution.y, 200.0);
    }

    /// Fly the raw solution against the moving target until the
    /// trajectories cross. The recovered v_x keeps the relative
    /// velocity collinear with the relative position, so the raw
    /// vector closes to within one integration step of the target.
    #[test]
    fn test_solver_solution_converges_on_target() {
        let dt = 1.0 / 240.0;
        let mut target_pos = Vec2::new(100.0, 200.0);
        let target_vel = Vec2::new(-30.0, -40.0);
        let mut shot_pos = Vec2::new(0.0, 0.0);
        let shot_vel = intercept_velocity(target_pos, target_vel, shot_pos, 50.0);

        let mut min_range = f64::MAX;
        for _ in 0..2000 {
            shot_pos += shot_vel * dt;
            target_pos += target_vel * dt;
            let range = shot_pos.distance(target_pos);
            if range < min_range {
                min_range = range;
            }
        }

        assert!(
            min_range < 1.0,
            "raw solution should close on the target, min range: {min_range:.2}m"
        );
    }
}
