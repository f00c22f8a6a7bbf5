//! Track geometry and animation timing.
//!
//! Pure math, no DOM. The copy-width unit is the width of one full
//! repetition of the item list; the rendering layer converts to track
//! units where CSS needs them.

/// Scroll direction of the track.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

impl Direction {
    /// Signed translation covered by one full cycle, in percent of one
    /// copy's width. Forward drags the track left.
    pub fn cycle_span_percent(&self) -> f64 {
        match self {
            Direction::Forward => -100.0,
            Direction::Reverse => 100.0,
        }
    }
}

/// Geometry and timing of one carousel instance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselConfig {
    pub direction: Direction,
    pub duration_secs: f64,
    pub copies: usize,
}

impl CarouselConfig {
    /// Forward-scrolling track with the default two copies.
    pub fn new(duration_secs: f64) -> Self {
        assert!(
            duration_secs.is_finite() && duration_secs > 0.0,
            "carousel duration must be a positive number of seconds"
        );
        Self {
            direction: Direction::Forward,
            duration_secs,
            copies: 2,
        }
    }

    pub fn reversed(mut self) -> Self {
        self.direction = Direction::Reverse;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Number of identical copies laid side by side. Two is the minimum
    /// for a seamless wrap.
    pub fn with_copies(mut self, copies: usize) -> Self {
        assert!(copies >= 2, "carousel needs at least two copies to loop");
        self.copies = copies;
        self
    }
}

/// One rendered unit on the track: item `index` inside copy `copy`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrackSlot {
    pub copy: usize,
    pub index: usize,
}

/// Every slot of a track holding `copies` repetitions of `item_count`
/// items, in render order.
pub fn track_slots(item_count: usize, copies: usize) -> Vec<TrackSlot> {
    (0..copies)
        .flat_map(|copy| (0..item_count).map(move |index| TrackSlot { copy, index }))
        .collect()
}

/// Horizontal offset of a copy, in percent of one copy's width.
pub fn copy_offset_percent(copy: usize) -> f64 {
    copy as f64 * 100.0
}

/// Horizontal offset of a copy, in percent of the full track width.
pub fn track_offset_percent(copy: usize, copies: usize) -> f64 {
    copy as f64 / copies as f64 * 100.0
}

/// Track translation `elapsed_secs` into the animation, in percent of one
/// copy's width.
///
/// Linear over each cycle and wrapped at the cycle boundary: the position
/// after a full cycle equals the starting position. The wrap is invisible
/// because a translation of exactly one copy width displays identical
/// content.
pub fn translation_percent(elapsed_secs: f64, config: &CarouselConfig) -> f64 {
    let phase = elapsed_secs.rem_euclid(config.duration_secs) / config.duration_secs;
    phase * config.direction.cycle_span_percent()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_copies_double_the_slot_count() {
        for n in [0usize, 1, 2, 6, 9] {
            assert_eq!(track_slots(n, 2).len(), 2 * n);
        }
        assert_eq!(track_slots(4, 3).len(), 12);
    }

    #[test]
    fn slots_repeat_the_items_in_order() {
        // Items [1, 2] on a two-copy track render as [1, 2, 1, 2].
        let ids = [1u32, 2];
        let rendered: Vec<u32> = track_slots(ids.len(), 2)
            .iter()
            .map(|slot| ids[slot.index])
            .collect();
        assert_eq!(rendered, vec![1, 2, 1, 2]);
    }

    #[test]
    fn every_copy_holds_the_full_item_list() {
        let slots = track_slots(3, 4);
        for copy in 0..4 {
            let indices: Vec<usize> = slots
                .iter()
                .filter(|slot| slot.copy == copy)
                .map(|slot| slot.index)
                .collect();
            assert_eq!(indices, vec![0, 1, 2]);
        }
    }

    #[test]
    fn copies_sit_one_copy_width_apart() {
        assert_eq!(copy_offset_percent(0), 0.0);
        assert_eq!(copy_offset_percent(1), 100.0);
        assert_eq!(copy_offset_percent(3), 300.0);
    }

    #[test]
    fn track_offset_divides_by_copy_count() {
        // Two copies: the second starts at the track midpoint.
        assert_eq!(track_offset_percent(1, 2), 50.0);
        assert_eq!(track_offset_percent(1, 4), 25.0);
        assert_eq!(track_offset_percent(2, 4), 50.0);
    }

    #[test]
    fn cycle_start_and_end_share_a_position() {
        let config = CarouselConfig::new(25.0);
        assert_eq!(translation_percent(0.0, &config), 0.0);
        assert_eq!(translation_percent(25.0, &config), 0.0);
        assert_eq!(translation_percent(50.0, &config), 0.0);
    }

    #[test]
    fn forward_sweep_is_linear_and_leftward() {
        let config = CarouselConfig::new(20.0);
        assert_eq!(translation_percent(5.0, &config), -25.0);
        assert_eq!(translation_percent(10.0, &config), -50.0);
        assert_eq!(translation_percent(17.5, &config), -87.5);
    }

    #[test]
    fn reverse_sweep_moves_the_other_way() {
        let config = CarouselConfig::new(20.0).reversed();
        assert_eq!(translation_percent(10.0, &config), 50.0);
        assert_eq!(translation_percent(15.0, &config), 75.0);
    }

    #[test]
    fn elapsed_time_wraps_past_the_first_cycle() {
        let config = CarouselConfig::new(8.0);
        assert_eq!(
            translation_percent(10.0, &config),
            translation_percent(2.0, &config)
        );
    }

    #[test]
    #[should_panic]
    fn zero_duration_is_rejected() {
        CarouselConfig::new(0.0);
    }

    #[test]
    #[should_panic]
    fn single_copy_is_rejected() {
        let _ = CarouselConfig::new(10.0).with_copies(1);
    }
}
