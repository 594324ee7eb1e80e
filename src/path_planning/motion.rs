//! 8-connected motion table shared by every planner

use std::f64::consts::SQRT_2;

/// Relative move to a neighboring cell and its cost
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub dx: i32,
    pub dy: i32,
    pub cost: f64,
}

impl Motion {
    pub const fn new(dx: i32, dy: i32, cost: f64) -> Self {
        Self { dx, dy, cost }
    }

    pub fn is_diagonal(&self) -> bool {
        self.dx != 0 && self.dy != 0
    }
}

/// Motions in expansion order: axis-aligned first, then diagonals
pub const MOTIONS: [Motion; 8] = [
    Motion::new(1, 0, 1.0),
    Motion::new(0, 1, 1.0),
    Motion::new(0, -1, 1.0),
    Motion::new(-1, 0, 1.0),
    Motion::new(1, 1, SQRT_2),
    Motion::new(1, -1, SQRT_2),
    Motion::new(-1, -1, SQRT_2),
    Motion::new(-1, 1, SQRT_2),
];

/// Cheapest entry of [`MOTIONS`]
pub const MIN_MOTION_COST: f64 = 1.0;

/// Motion that moves from `(dx, dy) = to - from`, if any
pub fn motion_between(dx: i32, dy: i32) -> Option<&'static Motion> {
    MOTIONS.iter().find(|m| m.dx == dx && m.dy == dy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_motion_table_costs() {
        let straight = MOTIONS.iter().filter(|m| !m.is_diagonal()).count();
        assert_eq!(straight, 4);
        for m in MOTIONS.iter() {
            let expected = ((m.dx * m.dx + m.dy * m.dy) as f64).sqrt();
            assert!((m.cost - expected).abs() < 1e-12);
            assert!(m.cost >= MIN_MOTION_COST);
        }
    }

    #[test]
    fn test_motion_between() {
        assert_eq!(motion_between(-1, 1).map(|m| m.cost), Some(SQRT_2));
        assert!(motion_between(0, 0).is_none());
        assert!(motion_between(2, 0).is_none());
    }
}
