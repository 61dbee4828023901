//! Axis-aligned collision pass
//!
//! Overlap is strict on both axes: rectangles that merely share an edge do
//! not collide. Riders collide against the inset bounds from `state`, so
//! visually grazing an obstacle is forgiven.

use super::state::{Obstacle, Rect, Rider};

/// Strict AABB overlap (open intervals on both axes)
#[inline]
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.pos.x < b.pos.x + b.size.x
        && a.pos.x + a.size.x > b.pos.x
        && a.pos.y < b.pos.y + b.size.y
        && a.pos.y + a.size.y > b.pos.y
}

/// Test every live obstacle against every alive rider; the first hit kills
/// the rider for the rest of the match. Obstacles pass through unaffected.
pub fn run_collisions(riders: &mut [Rider; 2], obstacles: &[Obstacle]) {
    for rider in riders.iter_mut() {
        if !rider.alive {
            continue;
        }
        let bounds = rider.bounds();
        for obstacle in obstacles {
            if rects_overlap(&bounds, &obstacle.bounds()) {
                rider.alive = false;
                log::info!(
                    "{} hit a {:?} at distance y={:.0}, final score {}",
                    rider.name,
                    obstacle.kind,
                    obstacle.pos.y,
                    rider.score
                );
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::road_left;
    use crate::sim::level::LevelId;
    use crate::sim::state::ObstacleKind;
    use proptest::prelude::*;

    #[test]
    fn overlap_is_strict_on_shared_edges() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Sharing the right edge exactly: no overlap
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!rects_overlap(&a, &b));
        // Sharing the bottom edge exactly: no overlap
        let c = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!rects_overlap(&a, &c));
        // One pixel of intrusion: overlap
        let d = Rect::new(9.0, 9.0, 10.0, 10.0);
        assert!(rects_overlap(&a, &d));
    }

    #[test]
    fn first_hit_kills_and_is_idempotent() {
        let mut riders = [
            Rider::new(0, road_left() + 80.0, "P1".to_string()),
            Rider::new(1, road_left() + 180.0, "P2".to_string()),
        ];
        // Obstacle directly on rider 0
        let mut obstacle = Obstacle::new(riders[0].pos.x, ObstacleKind::Car, LevelId(1), 3.0);
        obstacle.pos.y = riders[0].pos.y;
        let obstacles = vec![obstacle];

        run_collisions(&mut riders, &obstacles);
        assert!(!riders[0].alive);
        assert!(riders[1].alive);

        // Running again changes nothing
        run_collisions(&mut riders, &obstacles);
        assert!(!riders[0].alive);
        assert!(riders[1].alive);
    }

    #[test]
    fn inset_bounds_forgive_visual_grazes() {
        let mut riders = [
            Rider::new(0, road_left() + 80.0, "P1".to_string()),
            Rider::new(1, road_left() + 180.0, "P2".to_string()),
        ];
        // Visual rects touch but insets (30% + 20%) leave a gap
        let mut obstacle = Obstacle::new(
            riders[0].pos.x - riders[0].size.x + 2.0,
            ObstacleKind::Barrier,
            LevelId(1),
            3.0,
        );
        obstacle.pos.y = riders[0].pos.y;
        run_collisions(&mut riders, &[obstacle]);
        assert!(riders[0].alive);
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 1.0f32..100.0, ah in 1.0f32..100.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 1.0f32..100.0, bh in 1.0f32..100.0,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            prop_assert_eq!(rects_overlap(&a, &b), rects_overlap(&b, &a));
        }

        #[test]
        fn edge_adjacency_never_overlaps(
            // Integer-valued coordinates keep the edge arithmetic exact in f32
            xi in -500i32..500, yi in -500i32..500,
            wi in 1i32..100, hi in 1i32..100,
            owi in 1i32..100, ohi in 1i32..100,
        ) {
            let (x, y) = (xi as f32, yi as f32);
            let (w, h) = (wi as f32, hi as f32);
            let (other_w, other_h) = (owi as f32, ohi as f32);
            let a = Rect::new(x, y, w, h);
            // Placed flush against each of the four edges
            let right = Rect::new(x + w, y, other_w, other_h);
            let below = Rect::new(x, y + h, other_w, other_h);
            let left = Rect::new(x - other_w, y, other_w, other_h);
            let above = Rect::new(x, y - other_h, other_w, other_h);
            prop_assert!(!rects_overlap(&a, &right));
            prop_assert!(!rects_overlap(&a, &below));
            prop_assert!(!rects_overlap(&a, &left));
            prop_assert!(!rects_overlap(&a, &above));
        }
    }
}
