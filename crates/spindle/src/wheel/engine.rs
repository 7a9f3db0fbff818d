use super::animation::Deceleration;
use super::geometry::{self, RowTransform};
use super::gesture::{self, DragRelease, DragSample, ReleaseKind, ReleaseMetrics};
use super::{
    CELLS_PER_WHEEL, CENTER_ROW, DEGREES_PER_ROW, DRAG_DAMPING, FEEDBACK_EDGE_TOLERANCE,
    FEEDBACK_MIN_TRAVEL, RELEASE_DECELERATION_FRAMES, ROW_COUNT, SELECT_DECELERATION_FRAMES,
};
use crate::config::WheelConfig;
use crate::data_source::WheelDataSource;
use strum::{Display as StrumDisplay, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay)]
pub enum WheelState {
    Idle,
    Dragging,
    Animating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, StrumDisplay)]
#[strum(ascii_case_insensitive)]
pub enum AdjustDirection {
    Increment,
    Decrement,
}

impl AdjustDirection {
    fn step(&self) -> i32 {
        match self {
            Self::Increment => 1,
            Self::Decrement => -1,
        }
    }
}

/// What the host has to do after feeding the engine an event.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelAction<T> {
    pub should_redraw: bool,
    /// A selection boundary was crossed; fire haptic or audible feedback.
    pub feedback: bool,
    /// The selection changed; publish the new value.
    pub committed: Option<T>,
}

impl<T> Default for WheelAction<T> {
    fn default() -> Self {
        Self {
            should_redraw: false,
            feedback: false,
            committed: None,
        }
    }
}

impl<T> WheelAction<T> {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn redraw() -> Self {
        Self {
            should_redraw: true,
            ..Self::default()
        }
    }

    fn with_feedback(mut self, feedback: bool) -> Self {
        self.feedback = feedback;
        self
    }
}

/// State machine behind a spinning wheel.
///
/// `translation` is the single source of truth for the wheel's rotation, in
/// pixels of damped drag travel. Dragging down (positive) rotates earlier
/// items into view. Offsets count items from the data source's initial
/// selection.
pub struct WheelEngine<D: WheelDataSource> {
    data_source: D,
    selection: D::Item,
    height: f64,
    font_size: f64,

    translation: f64,
    selection_offset: i32,
    dragging_start_offset: Option<i32>,
    dragging_start_translation: f64,
    dragging: bool,
    first_sample: Option<DragSample>,
    last_sample: Option<DragSample>,
    animation: Option<Deceleration>,

    last_degrees_translation: f64,
    last_feedback_offset: i32,
    feedback_enabled: bool,
}

impl<D: WheelDataSource> WheelEngine<D> {
    pub fn new(selection: D::Item, data_source: D, config: &WheelConfig) -> Self {
        let selection_offset = data_source.offset_of(&selection).unwrap_or(0);
        Self {
            data_source,
            selection,
            height: config.height,
            font_size: config.row_height,
            translation: 0.0,
            selection_offset,
            dragging_start_offset: None,
            dragging_start_translation: 0.0,
            dragging: false,
            first_sample: None,
            last_sample: None,
            animation: None,
            last_degrees_translation: 0.0,
            last_feedback_offset: selection_offset,
            feedback_enabled: false,
        }
    }

    pub fn data_source(&self) -> &D {
        &self.data_source
    }

    pub fn selection(&self) -> &D::Item {
        &self.selection
    }

    pub fn offset(&self) -> i32 {
        self.selection_offset
    }

    pub fn translation(&self) -> f64 {
        self.translation
    }

    /// Applies new dimensions. Any motion in flight is settled first.
    pub fn set_config(&mut self, config: &WheelConfig) -> WheelAction<D::Item> {
        let action = if self.state() == WheelState::Idle {
            WheelAction::redraw()
        } else {
            self.finish()
        };
        self.height = config.height;
        self.font_size = config.row_height;
        action
    }

    pub fn animation(&self) -> Option<&Deceleration> {
        self.animation.as_ref()
    }

    pub fn state(&self) -> WheelState {
        if self.dragging {
            WheelState::Dragging
        } else if self.animation.is_some() {
            WheelState::Animating
        } else {
            WheelState::Idle
        }
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    fn cell(&self) -> f64 {
        self.height / CELLS_PER_WHEEL
    }

    fn raw_degrees(&self, translation: f64) -> f64 {
        translation / self.height * 180.0
    }

    /// Wheel rotation for `translation`, clamped to the ends of a finite list.
    pub fn degrees_translation(&self, translation: f64) -> f64 {
        self.data_source
            .limit_degrees_translation(self.raw_degrees(translation), self.dragging_start_offset)
    }

    pub fn item_at_row(&self, row: usize, translation: f64) -> Option<D::Item> {
        let row_offset = row as i32 - CENTER_ROW as i32;
        let base = match self.dragging_start_offset {
            Some(start) => {
                let degrees = self.degrees_translation(translation);
                start - (degrees / DEGREES_PER_ROW).trunc() as i32
            }
            None => self.selection_offset,
        };
        self.data_source.item_at(base + row_offset)
    }

    /// Transforms of the nine visible rows at the current translation.
    pub fn layout(&self) -> Vec<RowTransform<D::Item>> {
        let degrees = self.degrees_translation(self.translation);
        geometry::stack(
            (0..ROW_COUNT).map(|row| self.item_at_row(row, self.translation)),
            self.translation,
            degrees,
            self.height,
            self.font_size,
        )
    }

    fn damped(&self, translation: f64) -> f64 {
        translation * DRAG_DAMPING + self.dragging_start_translation
    }

    /// Moves whole cells of travel into the drag origin, leaving the sub-cell
    /// remainder in `translation`. Rendering is unchanged by the fold.
    fn fold_translation(&mut self) {
        let start = self.dragging_start_offset.unwrap_or(self.selection_offset);
        let degrees = self.degrees_translation(self.translation);
        let cells = (degrees / DEGREES_PER_ROW).trunc();
        let remainder = degrees - cells * DEGREES_PER_ROW;

        self.dragging_start_offset = Some(start - cells as i32);
        self.translation = remainder / 180.0 * self.height;
        self.dragging_start_translation = self.translation;
    }

    pub fn drag_begin(&mut self, sample: DragSample) -> WheelAction<D::Item> {
        if self.animation.take().is_some() {
            log::debug!("Drag interrupted animation at {:.2}px", self.translation);
            self.fold_translation();
        } else if self.translation == 0.0 || self.dragging_start_offset.is_none() {
            self.dragging_start_offset = Some(self.selection_offset);
            self.dragging_start_translation = 0.0;
            self.translation = 0.0;
        }

        self.dragging = true;
        self.first_sample = Some(sample);
        self.last_sample = None;
        self.feedback_enabled = true;
        self.last_feedback_offset = self.selection_offset;
        self.last_degrees_translation = self.degrees_translation(self.translation);
        WheelAction::redraw()
    }

    pub fn drag_update(&mut self, sample: DragSample) -> WheelAction<D::Item> {
        if !self.dragging {
            return WheelAction::none();
        }
        self.feedback_enabled = true;
        self.last_sample = Some(sample);
        self.translation = self.damped(sample.translation);
        let feedback = self.update_selection();
        WheelAction::redraw().with_feedback(feedback)
    }

    pub fn drag_end(&mut self, release: DragRelease) -> WheelAction<D::Item> {
        if !self.dragging {
            return WheelAction::none();
        }
        self.dragging = false;

        let Some(first) = self.first_sample.take() else {
            return self.finish();
        };
        let last = self.last_sample.take().unwrap_or(first);

        let metrics = ReleaseMetrics::new(
            first,
            last,
            release,
            self.dragging_start_translation,
            self.height,
        );
        let distance = match metrics.kind() {
            ReleaseKind::Snap => gesture::snap_distance(self.translation, self.height),
            ReleaseKind::Fling => gesture::fling_distance(
                release.predicted_end + self.dragging_start_translation,
                self.translation,
                self.height,
            ),
        };
        log::debug!(
            "Released as {:?} after {:.3}s, travelling {:.1}px",
            metrics.kind(),
            metrics.since_first,
            distance
        );
        self.animate(distance, RELEASE_DECELERATION_FRAMES)
    }

    /// Abandons the drag, dropping the wheel on whichever item it shows.
    pub fn drag_cancel(&mut self) -> WheelAction<D::Item> {
        if !self.dragging {
            return WheelAction::none();
        }
        self.finish()
    }

    /// Advances a running animation by one frame.
    pub fn tick(&mut self) -> WheelAction<D::Item> {
        let in_range = self.within_bounds();
        let Some(animation) = self.animation.as_mut() else {
            return WheelAction::none();
        };
        if animation.is_finished() || !in_range {
            return self.finish();
        }

        self.translation += animation.step();
        let feedback = self.update_selection();
        log::trace!(
            "Tick at {:.2}px, offset {}",
            self.translation,
            self.selection_offset
        );
        WheelAction::redraw().with_feedback(feedback)
    }

    /// Handles a selection made outside the wheel, animating towards it.
    pub fn set_selection(&mut self, item: D::Item) -> WheelAction<D::Item> {
        if item == self.selection {
            return WheelAction::none();
        }
        if self.data_source.offset_of(&item).is_none() {
            log::warn!("Ignoring selection of unknown item {:?}", item);
            return WheelAction::none();
        }
        self.selection = item;
        if self.dragging {
            // the drag commits its own result on release
            return WheelAction::none();
        }

        let interrupted = self.animation.take().is_some();
        if interrupted {
            self.fold_translation();
        } else {
            self.dragging_start_translation = 0.0;
            self.translation = 0.0;
            self.dragging_start_offset = Some(self.selection_offset);
        }

        let offset = self
            .data_source
            .translation_offset(&self.selection, self.selection_offset);
        if offset == 0 && !interrupted {
            self.dragging_start_offset = None;
            return WheelAction::none();
        }

        let start = self.dragging_start_offset.unwrap_or(self.selection_offset);
        let cells = self.selection_offset + offset - start;
        let distance = -(cells as f64) * self.cell() - self.translation;
        self.last_feedback_offset = self.selection_offset;
        self.animate(distance, SELECT_DECELERATION_FRAMES)
    }

    /// Selects the item shown in `row`, honoured only while the wheel is at rest.
    pub fn tap(&mut self, row: usize) -> WheelAction<D::Item> {
        if self.translation != 0.0 || self.state() != WheelState::Idle {
            return WheelAction::none();
        }
        match self.item_at_row(row, 0.0) {
            Some(item) if item != self.selection => {
                self.feedback_enabled = false;
                self.select(item)
            }
            _ => WheelAction::none(),
        }
    }

    /// Moves the selection one item forward or back.
    pub fn adjust(&mut self, direction: AdjustDirection) -> WheelAction<D::Item> {
        let target = self
            .data_source
            .offset_of(&self.selection)
            .and_then(|offset| self.data_source.item_at(offset + direction.step()));
        match target {
            Some(item) if item != self.selection => self.select(item),
            _ => WheelAction::none(),
        }
    }

    fn select(&mut self, item: D::Item) -> WheelAction<D::Item> {
        let mut action = self.set_selection(item.clone());
        action.should_redraw = true;
        action.committed = Some(item);
        action
    }

    fn within_bounds(&self) -> bool {
        if !self.data_source.is_bounded() {
            return true;
        }
        let degrees = self.raw_degrees(self.translation);
        let min = self.data_source.min_translation(self.dragging_start_offset);
        let max = self.data_source.max_translation(self.dragging_start_offset);
        (min..=max).contains(&degrees)
    }

    /// Re-derives the selected offset from the wheel angle. Returns whether a
    /// new item boundary was crossed.
    fn update_selection(&mut self) -> bool {
        let Some(start) = self.dragging_start_offset else {
            return false;
        };
        let degrees = self.degrees_translation(self.translation);
        let offset = start - (degrees / DEGREES_PER_ROW).round() as i32;

        let travel = (self.last_degrees_translation - degrees).abs();
        let remainder = (degrees % DEGREES_PER_ROW).abs();
        let allowed = travel > FEEDBACK_MIN_TRAVEL
            || remainder < FEEDBACK_EDGE_TOLERANCE
            || remainder > DEGREES_PER_ROW - FEEDBACK_EDGE_TOLERANCE;

        let feedback = self.feedback_enabled && offset != self.last_feedback_offset && allowed;
        if feedback {
            self.last_feedback_offset = offset;
        }
        self.last_degrees_translation = degrees;
        self.selection_offset = offset;
        feedback
    }

    fn animate(&mut self, distance: f64, frames: f64) -> WheelAction<D::Item> {
        match Deceleration::new(distance, self.height, frames) {
            Some(animation) => {
                log::debug!(
                    "Animating {:.1}px over {} ticks",
                    distance,
                    animation.repeat_count()
                );
                self.animation = Some(animation);
                WheelAction::redraw()
            }
            None => self.finish(),
        }
    }

    /// Settles the wheel and writes the selected item back.
    fn finish(&mut self) -> WheelAction<D::Item> {
        self.animation = None;
        self.dragging = false;
        self.first_sample = None;
        self.last_sample = None;
        self.dragging_start_offset = None;
        self.dragging_start_translation = 0.0;
        self.translation = 0.0;
        self.feedback_enabled = false;

        let mut action = WheelAction::redraw();
        match self.data_source.item_at(self.selection_offset) {
            Some(item) if item != self.selection => {
                log::debug!("Committed {:?} at offset {}", item, self.selection_offset);
                self.selection = item.clone();
                action.committed = Some(item);
            }
            Some(_) => {}
            None => {
                self.selection_offset = self.data_source.offset_of(&self.selection).unwrap_or(0);
            }
        }
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_source::{CircularDataSource, FiniteDataSource};
    use std::time::Duration;

    const HEIGHT: f64 = 300.0;
    const CELL: f64 = 30.0;

    fn config() -> WheelConfig {
        WheelConfig::default()
    }

    fn letters() -> WheelEngine<FiniteDataSource<char>> {
        let source = FiniteDataSource::new(vec!['A', 'B', 'C', 'D', 'E'], 'C').unwrap();
        WheelEngine::new('C', source, &config())
    }

    fn numbers() -> WheelEngine<FiniteDataSource<u32>> {
        let source = FiniteDataSource::new((0..100).collect(), 50).unwrap();
        WheelEngine::new(50, source, &config())
    }

    fn clock() -> WheelEngine<CircularDataSource<u8>> {
        let source = CircularDataSource::new((0..12).collect(), 3).unwrap();
        WheelEngine::new(3, source, &config())
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn sample(translation: f64, millis: u64) -> DragSample {
        DragSample::new(translation, ms(millis))
    }

    fn release(translation: f64, millis: u64, predicted_end: f64) -> DragRelease {
        DragRelease {
            sample: sample(translation, millis),
            predicted_end,
        }
    }

    /// Ticks until the wheel rests, collecting commits and feedback count.
    fn settle<D: WheelDataSource>(engine: &mut WheelEngine<D>) -> (Option<D::Item>, usize) {
        let mut committed = None;
        let mut feedback = 0;
        let mut ticks = 0;
        while engine.is_animating() {
            let action = engine.tick();
            if action.feedback {
                feedback += 1;
            }
            if action.committed.is_some() {
                committed = action.committed;
            }
            ticks += 1;
            assert!(ticks < 2_000, "animation never settled");
        }
        (committed, feedback)
    }

    fn assert_same_frame<T: PartialEq + std::fmt::Debug>(
        before: &[RowTransform<T>],
        after: &[RowTransform<T>],
    ) {
        for (a, b) in before.iter().zip(after) {
            assert_eq!(a.item, b.item, "row {}", a.row);
            assert!((a.rotation_degrees - b.rotation_degrees).abs() < 1e-6, "row {}", a.row);
            assert!((a.height - b.height).abs() < 1e-6, "row {}", a.row);
            assert!((a.opacity - b.opacity).abs() < 1e-6, "row {}", a.row);
            assert!((a.center_y - b.center_y).abs() < 1e-6, "row {}", a.row);
        }
    }

    #[test]
    fn test_starts_idle_on_selection() {
        let engine = letters();
        assert_eq!(engine.state(), WheelState::Idle);
        assert_eq!(engine.translation(), 0.0);
        assert_eq!(engine.offset(), 0);

        let rows = engine.layout();
        assert_eq!(rows.len(), ROW_COUNT);
        assert_eq!(rows[CENTER_ROW].item, Some('C'));
        assert_eq!(rows[CENTER_ROW].opacity, 1.0);
        assert_eq!(rows[CENTER_ROW].rotation_degrees, 0.0);
        assert_eq!(rows[2].item, Some('A'));
        assert_eq!(rows[1].item, None);
        assert_eq!(rows[6].item, Some('E'));
        assert_eq!(rows[7].item, None);
    }

    #[test]
    fn test_drag_moves_selection_and_fires_feedback_once_per_crossing() {
        let mut engine = letters();
        engine.drag_begin(sample(0.0, 0));
        assert_eq!(engine.state(), WheelState::Dragging);

        // -24px damped, -14.4 degrees: past the halfway point to D
        let action = engine.drag_update(sample(-40.0, 100));
        assert!(action.feedback);
        assert_eq!(engine.offset(), 1);

        let action = engine.drag_update(sample(-41.0, 120));
        assert!(!action.feedback);
        assert_eq!(engine.offset(), 1);

        let action = engine.drag_update(sample(-20.0, 140));
        assert!(action.feedback);
        assert_eq!(engine.offset(), 0);
    }

    #[test]
    fn test_slow_drag_defers_feedback_to_cell_edge() {
        let mut engine = numbers();
        engine.drag_begin(sample(0.0, 0));

        // 2px raw is 1.2px damped, 0.72 degrees per step
        let mut fired = Vec::new();
        for step in 1..=30u64 {
            let action = engine.drag_update(sample(2.0 * step as f64, step * 10));
            if action.feedback {
                fired.push(step);
            }
            match step {
                12 => assert_eq!(engine.offset(), 0),
                // 9.36 degrees: past the half-cell point, mid-cell
                13 => {
                    assert_eq!(engine.offset(), -1);
                    assert!(!action.feedback);
                }
                _ => {}
            }
        }

        // 17.28 degrees is the first step within a degree of the cell edge
        assert_eq!(fired, vec![24]);
        assert_eq!(engine.offset(), -1);
    }

    #[test]
    fn test_fast_step_fires_feedback_mid_cell() {
        let mut engine = numbers();
        engine.drag_begin(sample(0.0, 0));
        engine.drag_update(sample(20.0, 10));

        // 7.2 to 9.36 degrees in one step
        let action = engine.drag_update(sample(26.0, 20));
        assert!(action.feedback);
        assert_eq!(engine.offset(), -1);
    }

    #[test]
    fn test_drag_clamps_at_list_end() {
        let mut engine = letters();
        engine.drag_begin(sample(0.0, 0));
        engine.drag_update(sample(-2000.0, 200));
        assert_eq!(engine.degrees_translation(engine.translation()), -36.0);
        assert_eq!(engine.offset(), 2);
        assert_eq!(engine.layout()[CENTER_ROW].item, Some('E'));
    }

    #[test]
    fn test_minimum_rotation_on_boundary_does_not_move() {
        let mut engine = letters();
        engine.drag_begin(sample(0.0, 0));
        engine.drag_update(sample(-50.0, 500));
        assert_eq!(engine.translation(), -CELL);

        let action = engine.drag_end(release(-50.0, 600, -50.0));
        assert!(!engine.is_animating());
        assert_eq!(engine.state(), WheelState::Idle);
        assert_eq!(engine.translation(), 0.0);
        assert_eq!(action.committed, Some('D'));
        assert_eq!(engine.selection(), &'D');
    }

    #[test]
    fn test_slow_release_snaps_to_nearest_item() {
        let mut engine = letters();
        engine.drag_begin(sample(0.0, 0));
        engine.drag_update(sample(-70.0, 500));
        assert!((engine.translation() + 42.0).abs() < 1e-9);

        engine.drag_end(release(-70.0, 600, -70.0));
        let distance = engine.animation().map(|a| a.distance()).unwrap();
        assert!((distance - 12.0).abs() < 1e-9);

        let (committed, _) = settle(&mut engine);
        assert_eq!(committed, Some('D'));
        assert_eq!(engine.translation(), 0.0);
        assert_eq!(engine.state(), WheelState::Idle);
    }

    #[test]
    fn test_fling_spins_several_items() {
        let mut engine = numbers();
        engine.drag_begin(sample(0.0, 0));
        engine.drag_update(sample(-100.0, 20));
        engine.drag_end(release(-120.0, 50, -2000.0));
        let distance = engine.animation().map(|a| a.distance()).unwrap();
        assert_eq!(distance, -HEIGHT * 3.0);

        let (committed, feedback) = settle(&mut engine);
        let value = committed.unwrap();
        assert!(value > 70 && value <= 85, "landed on {value}");
        assert!(feedback > 10);
        assert_eq!(engine.selection(), &value);
    }

    #[test]
    fn test_fling_stops_at_end_of_finite_list() {
        let mut engine = letters();
        engine.drag_begin(sample(0.0, 0));
        engine.drag_update(sample(-10.0, 20));
        engine.drag_end(release(-20.0, 50, -3000.0));

        let mut ticks = 0;
        while engine.is_animating() {
            let degrees = engine.degrees_translation(engine.translation());
            assert!((-36.0..=36.0).contains(&degrees));
            engine.tick();
            ticks += 1;
            assert!(ticks < 2_000);
        }
        assert_eq!(engine.selection(), &'E');
        assert_eq!(engine.translation(), 0.0);
    }

    #[test]
    fn test_external_selection_animates_and_commits() {
        let mut engine = letters();
        let action = engine.set_selection('E');
        assert!(action.should_redraw);
        assert_eq!(engine.state(), WheelState::Animating);
        let distance = engine.animation().map(|a| a.distance()).unwrap();
        assert_eq!(distance, -2.0 * HEIGHT / 10.0);

        let (committed, feedback) = settle(&mut engine);
        // the caller already holds the new value
        assert_eq!(committed, None);
        assert_eq!(feedback, 0);
        assert_eq!(engine.offset(), 2);
        assert_eq!(engine.selection(), &'E');
        assert_eq!(engine.layout()[CENTER_ROW].item, Some('E'));

        engine.set_selection('A');
        let distance = engine.animation().map(|a| a.distance()).unwrap();
        assert_eq!(distance, 4.0 * CELL);
        settle(&mut engine);
        assert_eq!(engine.offset(), -2);
    }

    #[test]
    fn test_external_selection_ignores_same_and_unknown_items() {
        let mut engine = letters();
        assert_eq!(engine.set_selection('C'), WheelAction::none());
        assert_eq!(engine.set_selection('Q'), WheelAction::none());
        assert_eq!(engine.selection(), &'C');
        assert_eq!(engine.state(), WheelState::Idle);
    }

    #[test]
    fn test_circular_selection_takes_short_way_round() {
        let mut engine = clock();
        engine.set_selection(11);
        let distance = engine.animation().map(|a| a.distance()).unwrap();
        assert_eq!(distance, 4.0 * CELL);
        settle(&mut engine);
        assert_eq!(engine.selection(), &11);
        assert_eq!(engine.layout()[CENTER_ROW].item, Some(11));
        assert_eq!(engine.layout()[CENTER_ROW + 1].item, Some(0));
    }

    #[test]
    fn test_interrupting_animation_is_continuous() {
        let mut engine = clock();
        engine.set_selection(8);
        for _ in 0..25 {
            engine.tick();
        }
        let before = engine.layout();
        assert!(engine.translation().abs() > CELL);

        engine.drag_begin(sample(0.0, 1_000));
        assert_eq!(engine.state(), WheelState::Dragging);
        assert!(engine.translation().abs() < CELL);
        assert_same_frame(&before, &engine.layout());

        engine.drag_update(sample(0.0, 1_010));
        assert_same_frame(&before, &engine.layout());
    }

    #[test]
    fn test_interrupting_finite_animation_is_continuous() {
        let mut engine = numbers();
        engine.set_selection(44);
        for _ in 0..31 {
            engine.tick();
        }
        let before = engine.layout();
        engine.drag_begin(sample(0.0, 0));
        assert_same_frame(&before, &engine.layout());
    }

    #[test]
    fn test_redirecting_animation_lands_on_new_selection() {
        let mut engine = numbers();
        engine.set_selection(56);
        for _ in 0..20 {
            engine.tick();
        }
        engine.set_selection(45);
        assert_eq!(engine.state(), WheelState::Animating);
        settle(&mut engine);
        assert_eq!(engine.selection(), &45);
        assert_eq!(engine.layout()[CENTER_ROW].item, Some(45));
    }

    #[test]
    fn test_tap_selects_row_only_at_rest() {
        let mut engine = letters();
        let action = engine.tap(CENTER_ROW + 2);
        assert_eq!(action.committed, Some('E'));
        assert!(!action.feedback);
        assert_eq!(engine.state(), WheelState::Animating);

        // ignored while moving
        assert_eq!(engine.tap(CENTER_ROW - 1), WheelAction::none());
        let (_, feedback) = settle(&mut engine);
        assert_eq!(feedback, 0);
        assert_eq!(engine.layout()[CENTER_ROW].item, Some('E'));

        // empty rows and the current item do nothing
        assert_eq!(engine.tap(CENTER_ROW + 1), WheelAction::none());
        assert_eq!(engine.tap(CENTER_ROW), WheelAction::none());
    }

    #[test]
    fn test_adjust_steps_and_stops_at_ends() {
        let mut engine = letters();
        let action = engine.adjust(AdjustDirection::Increment);
        assert_eq!(action.committed, Some('D'));
        settle(&mut engine);
        engine.adjust(AdjustDirection::Increment);
        settle(&mut engine);
        assert_eq!(engine.selection(), &'E');
        assert_eq!(engine.adjust(AdjustDirection::Increment), WheelAction::none());

        let action = engine.adjust(AdjustDirection::Decrement);
        assert_eq!(action.committed, Some('D'));
    }

    #[test]
    fn test_adjust_wraps_on_circular_wheel() {
        let mut engine = clock();
        engine.set_selection(0);
        settle(&mut engine);
        let action = engine.adjust(AdjustDirection::Decrement);
        assert_eq!(action.committed, Some(11));
        settle(&mut engine);
        assert_eq!(engine.layout()[CENTER_ROW].item, Some(11));
    }

    #[test]
    fn test_click_without_movement_stays_put() {
        let mut engine = letters();
        engine.drag_begin(sample(0.0, 0));
        let action = engine.drag_end(release(0.0, 80, 0.0));
        assert_eq!(action.committed, None);
        assert_eq!(engine.state(), WheelState::Idle);
        assert_eq!(engine.selection(), &'C');
    }

    #[test]
    fn test_cancelled_nudge_allows_tap() {
        let mut engine = letters();
        engine.drag_begin(sample(0.0, 0));
        engine.drag_update(sample(3.0, 30));
        let action = engine.drag_cancel();
        assert_eq!(action.committed, None);
        assert_eq!(engine.state(), WheelState::Idle);
        assert_eq!(engine.tap(CENTER_ROW - 1).committed, Some('B'));
        assert_eq!(engine.drag_cancel(), WheelAction::none());
    }

    #[test]
    fn test_adjust_direction_parses() {
        assert_eq!(
            "increment".parse::<AdjustDirection>().unwrap(),
            AdjustDirection::Increment
        );
        assert!("sideways".parse::<AdjustDirection>().is_err());
    }
}
