use rand::rngs::StdRng;
use rand::Rng;

use super::{Point, Rect, Size};

/// Picks spots for the dodging control: random positions inside the
/// padded container, clear of the stationary control and the pointer.
///
/// All distances share the caller's coordinate units. Placement never
/// fails: when the sampling budget runs out the last draw wins, and a
/// final clamp keeps whatever was drawn inside the padded container.
#[derive(Debug, Clone)]
pub struct EvasivePlacer {
    /// Inset from every container edge the control must respect
    pub padding: f32,
    /// Keep-clear growth around the stationary control
    pub avoid_margin: f32,
    /// Minimum distance between the control's center and the pointer
    pub cursor_radius: f32,
    /// Substituted per axis while layout has not measured the control
    pub fallback_size: Size,
    /// Rejection sampling budget per placement
    pub max_samples: u32,
}

impl EvasivePlacer {
    /// Tunables for pixel-like coordinate spaces
    pub fn new() -> Self {
        Self {
            padding: 16.0,
            avoid_margin: 20.0,
            cursor_radius: 100.0,
            fallback_size: Size::new(80.0, 44.0),
            max_samples: 100,
        }
    }

    /// Tunables rescaled for terminal cells, where a control is a few
    /// cells tall rather than tens of pixels
    pub fn for_cells() -> Self {
        Self {
            padding: 1.0,
            avoid_margin: 2.0,
            cursor_radius: 7.0,
            fallback_size: Size::new(8.0, 3.0),
            max_samples: 100,
        }
    }

    /// First placement, before any evasion: just right of the anchor,
    /// top-aligned with it, clamped into the padded container. When the
    /// container is too small for that, the near edge wins the clamp so
    /// the control stays visible.
    ///
    /// `anchor` is in the same coordinate space as `container`; the
    /// returned point is relative to the container's top-left corner.
    pub fn initial_position(&self, container: Rect, anchor: Rect, movable: Size) -> Point {
        let size = self.measured_or_fallback(movable);
        let anchor = anchor.relative_to(container.origin());
        let max_x = container.width - size.width - self.padding;
        let max_y = container.height - size.height - self.padding;
        let x = (anchor.right() + self.avoid_margin).min(max_x).max(self.padding);
        let y = anchor.y.min(max_y).max(self.padding);
        Point::new(x, y)
    }

    /// Next spot for the dodging control. Draws positions uniformly from
    /// the padded container until one clears both the expanded stationary
    /// rect and the pointer exclusion disk, or the budget runs out.
    ///
    /// `avoid` and `cursor` are in the same coordinate space as
    /// `container`; `current` and the returned point are relative to the
    /// container's top-left corner. Degenerate geometry returns `current`
    /// unchanged so a stale layout can never produce NaN positions.
    pub fn next_position(
        &self,
        container: Rect,
        avoid: Rect,
        movable: Size,
        current: Point,
        cursor: Option<Point>,
        rng: &mut StdRng,
    ) -> Point {
        if container.width <= 0.0 || container.height <= 0.0 {
            return current;
        }

        let size = self.measured_or_fallback(movable);
        let min_x = self.padding;
        let min_y = self.padding;
        let max_x = container.width - size.width - self.padding;
        let max_y = container.height - size.height - self.padding;
        if max_x <= min_x || max_y <= min_y {
            return current;
        }

        let keep_clear = avoid
            .relative_to(container.origin())
            .expanded(self.avoid_margin);
        let cursor = cursor.map(|c| c.relative_to(container.origin()));

        let mut candidate = current;
        for _ in 0..self.max_samples {
            candidate = Point::new(rng.gen_range(min_x..max_x), rng.gen_range(min_y..max_y));
            let placed = Rect::from_parts(candidate, size);
            if placed.intersects(&keep_clear) {
                continue;
            }
            if let Some(cursor) = cursor {
                if placed.center().distance_to(&cursor) < self.cursor_radius {
                    continue;
                }
            }
            break;
        }

        Point::new(candidate.x.clamp(min_x, max_x), candidate.y.clamp(min_y, max_y))
    }

    /// Per-axis fallback while the control is unmeasured
    fn measured_or_fallback(&self, size: Size) -> Size {
        Size::new(
            if size.width > 0.0 {
                size.width
            } else {
                self.fallback_size.width
            },
            if size.height > 0.0 {
                size.height
            } else {
                self.fallback_size.height
            },
        )
    }
}

impl Default for EvasivePlacer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn card() -> Rect {
        Rect::new(0.0, 0.0, 400.0, 600.0)
    }

    fn yes_button() -> Rect {
        Rect::new(20.0, 500.0, 100.0, 44.0)
    }

    fn no_size() -> Size {
        Size::new(80.0, 44.0)
    }

    #[test]
    fn test_initial_position_sits_beside_anchor() {
        let placer = EvasivePlacer::new();
        let pos = placer.initial_position(card(), yes_button(), no_size());
        assert_eq!(pos, Point::new(140.0, 500.0));
    }

    #[test]
    fn test_initial_position_clamps_to_far_edge() {
        let placer = EvasivePlacer::new();
        let anchor = Rect::new(350.0, 500.0, 100.0, 44.0);
        let pos = placer.initial_position(card(), anchor, no_size());
        // 470 is past the usable region; clamped to 400 - 80 - 16
        assert_eq!(pos.x, 304.0);
        assert_eq!(pos.y, 500.0);
    }

    #[test]
    fn test_initial_position_near_edge_wins_when_container_tiny() {
        let placer = EvasivePlacer::new();
        let container = Rect::new(0.0, 0.0, 60.0, 40.0);
        let anchor = Rect::new(4.0, 4.0, 30.0, 20.0);
        let pos = placer.initial_position(container, anchor, no_size());
        assert_eq!(pos, Point::new(16.0, 16.0));
    }

    #[test]
    fn test_initial_position_honors_container_offset() {
        let placer = EvasivePlacer::new();
        let container = Rect::new(200.0, 100.0, 400.0, 600.0);
        let anchor = Rect::new(220.0, 600.0, 100.0, 44.0);
        let pos = placer.initial_position(container, anchor, no_size());
        // same scene as the origin-anchored case, shifted into screen space
        assert_eq!(pos, Point::new(140.0, 500.0));
    }

    #[test]
    fn test_dodge_stays_inside_padded_container() {
        let placer = EvasivePlacer::new();
        let mut rng = StdRng::seed_from_u64(7);
        let mut current = Point::new(140.0, 500.0);
        for _ in 0..1000 {
            current = placer.next_position(card(), yes_button(), no_size(), current, None, &mut rng);
            assert!(current.x >= 16.0 && current.x + 80.0 <= 384.0);
            assert!(current.y >= 16.0 && current.y + 44.0 <= 584.0);
        }
    }

    #[test]
    fn test_dodge_avoids_stationary_control() {
        let placer = EvasivePlacer::new();
        let mut rng = StdRng::seed_from_u64(11);
        let keep_clear = yes_button().expanded(20.0);
        let mut current = Point::new(140.0, 500.0);
        for _ in 0..1000 {
            current = placer.next_position(card(), yes_button(), no_size(), current, None, &mut rng);
            let placed = Rect::from_parts(current, no_size());
            assert!(!placed.intersects(&keep_clear));
        }
    }

    #[test]
    fn test_dodge_respects_pointer_exclusion() {
        let placer = EvasivePlacer::new();
        let mut rng = StdRng::seed_from_u64(13);
        let cursor = Point::new(200.0, 300.0);
        let mut current = Point::new(140.0, 500.0);
        for _ in 0..1000 {
            current = placer.next_position(
                card(),
                yes_button(),
                no_size(),
                current,
                Some(cursor),
                &mut rng,
            );
            let placed = Rect::from_parts(current, no_size());
            assert!(placed.center().distance_to(&cursor) >= 100.0);
        }
    }

    #[test]
    fn test_degenerate_container_returns_current() {
        let placer = EvasivePlacer::new();
        let mut rng = StdRng::seed_from_u64(17);
        let current = Point::new(140.0, 500.0);
        let flat = Rect::new(0.0, 0.0, 0.0, 600.0);
        let pos = placer.next_position(flat, yes_button(), no_size(), current, None, &mut rng);
        assert_eq!(pos, current);
    }

    #[test]
    fn test_container_smaller_than_control_returns_current() {
        let placer = EvasivePlacer::new();
        let mut rng = StdRng::seed_from_u64(19);
        let current = Point::new(4.0, 4.0);
        let cramped = Rect::new(0.0, 0.0, 100.0, 60.0);
        let pos = placer.next_position(cramped, yes_button(), no_size(), current, None, &mut rng);
        assert_eq!(pos, current);
    }

    #[test]
    fn test_unmeasured_control_uses_fallback_size() {
        let placer = EvasivePlacer::new();
        let mut rng = StdRng::seed_from_u64(23);
        for _ in 0..200 {
            let pos = placer.next_position(
                card(),
                yes_button(),
                Size::new(0.0, 0.0),
                Point::new(140.0, 500.0),
                None,
                &mut rng,
            );
            // bounds derived from the 80x44 fallback, not from zero
            assert!(pos.x <= 304.0 && pos.y <= 540.0);
            assert!(pos.x >= 16.0 && pos.y >= 16.0);
        }
    }

    #[test]
    fn test_exhausted_budget_still_lands_inside() {
        let placer = EvasivePlacer::new();
        let mut rng = StdRng::seed_from_u64(29);
        // stationary control blankets the whole card; no draw can clear it
        let wall = Rect::new(-100.0, -100.0, 600.0, 800.0);
        for _ in 0..50 {
            let pos = placer.next_position(
                card(),
                wall,
                no_size(),
                Point::new(140.0, 500.0),
                None,
                &mut rng,
            );
            assert!(pos.x >= 16.0 && pos.x <= 304.0);
            assert!(pos.y >= 16.0 && pos.y <= 540.0);
        }
    }

    #[test]
    fn test_same_seed_gives_same_placement() {
        let placer = EvasivePlacer::new();
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let start = Point::new(140.0, 500.0);
        let pa = placer.next_position(card(), yes_button(), no_size(), start, None, &mut a);
        let pb = placer.next_position(card(), yes_button(), no_size(), start, None, &mut b);
        assert_eq!(pa, pb);
    }

    #[test]
    fn test_cell_scale_tunables() {
        let placer = EvasivePlacer::for_cells();
        let mut rng = StdRng::seed_from_u64(31);
        let container = Rect::new(0.0, 0.0, 50.0, 16.0);
        let anchor = Rect::new(8.0, 11.0, 9.0, 3.0);
        let movable = Size::new(8.0, 3.0);
        let keep_clear = anchor.expanded(2.0);
        let mut current = placer.initial_position(container, anchor, movable);
        for _ in 0..500 {
            current = placer.next_position(container, anchor, movable, current, None, &mut rng);
            assert!(current.x >= 1.0 && current.x + 8.0 <= 49.0);
            assert!(current.y >= 1.0 && current.y + 3.0 <= 15.0);
            assert!(!Rect::from_parts(current, movable).intersects(&keep_clear));
        }
    }

    #[test]
    fn test_full_dodge_scenario() {
        // the whole pipeline at card scale: bootstrap, then a dodge with
        // the pointer parked on the control's right edge
        let placer = EvasivePlacer::new();
        let mut rng = StdRng::seed_from_u64(42);
        let start = placer.initial_position(card(), yes_button(), no_size());
        assert_eq!(start, Point::new(140.0, 500.0));

        let cursor = Point::new(220.0, 522.0);
        let keep_clear = yes_button().expanded(20.0);
        assert_eq!(keep_clear, Rect::new(0.0, 480.0, 140.0, 84.0));

        let mut current = start;
        for _ in 0..200 {
            current = placer.next_position(
                card(),
                yes_button(),
                no_size(),
                current,
                Some(cursor),
                &mut rng,
            );
            let placed = Rect::from_parts(current, no_size());
            assert!(!placed.intersects(&keep_clear));
            assert!(placed.center().distance_to(&cursor) >= 100.0);
            assert!(current.x >= 16.0 && current.x <= 304.0);
            assert!(current.y >= 16.0 && current.y <= 540.0);
        }

        // same scene with the pointer parked at the container's far edge
        let far = Point::new(400.0, 500.0);
        for _ in 0..200 {
            current = placer.next_position(
                card(),
                yes_button(),
                no_size(),
                current,
                Some(far),
                &mut rng,
            );
            let placed = Rect::from_parts(current, no_size());
            assert!(!placed.intersects(&keep_clear));
            assert!(placed.center().distance_to(&far) >= 100.0);
        }
    }
}
