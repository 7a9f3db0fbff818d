use super::view::{self, WheelFrame};
use super::{MIN_WIDTH, TAP_SLOP};
use crate::error::PickerError;
use crate::feedback::SelectionFeedbackGenerator;
use crate::gui::theme::ThemeColors;
use gtk::prelude::*;
use gtk::{gdk, glib};
use gtk4 as gtk;
use spindle::wheel::{DragRelease, DragSample, DragTracker, FRAME_RATE, geometry};
use spindle::{
    AdjustDirection, SelectionFeedback, WheelAction, WheelConfig, WheelDataSource, WheelEngine,
    WheelState,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

type Label<T> = Box<dyn Fn(Option<&T>) -> String>;
type Formatter<T> = Box<dyn Fn(&T) -> String>;
type Listener<T> = Box<dyn Fn(&T)>;

#[derive(Debug, Clone, Copy)]
struct Press {
    y: f64,
    at_rest: bool,
    travel: f64,
}

impl Press {
    fn new(y: f64, at_rest: bool) -> Self {
        Self {
            y,
            at_rest,
            travel: 0.0,
        }
    }

    /// Records the pointer offset from where the press started.
    fn moved(&mut self, dx: f64, dy: f64) {
        self.travel = self.travel.max(dx.hypot(dy));
    }

    /// Farthest travel decides, so a drag that returns home is still a drag.
    fn is_tap(&self) -> bool {
        self.at_rest && self.travel < TAP_SLOP
    }
}

struct Inner<D: WheelDataSource> {
    engine: RefCell<WheelEngine<D>>,
    config: RefCell<WheelConfig>,
    area: gtk::DrawingArea,
    timer: RefCell<Option<glib::SourceId>>,
    tracker: RefCell<DragTracker>,
    press: Cell<Option<Press>>,
    label: Label<D::Item>,
    accessibility_text: RefCell<Option<Formatter<D::Item>>>,
    feedback: RefCell<Box<dyn SelectionFeedback>>,
    listeners: RefCell<Vec<Listener<D::Item>>>,
}

/// A cairo-drawn spinning wheel over any [`WheelDataSource`].
///
/// Cloning yields another handle to the same wheel.
pub struct WheelPicker<D: WheelDataSource> {
    inner: Rc<Inner<D>>,
}

impl<D: WheelDataSource> Clone for WheelPicker<D> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<D> WheelPicker<D>
where
    D: WheelDataSource + 'static,
    D::Item: 'static,
{
    pub fn new(
        engine: WheelEngine<D>,
        config: WheelConfig,
        label: impl Fn(Option<&D::Item>) -> String + 'static,
    ) -> Self {
        let area = gtk::DrawingArea::builder()
            .accessible_role(gtk::AccessibleRole::SpinButton)
            .content_width(MIN_WIDTH)
            .content_height(config.height.ceil() as i32)
            .hexpand(true)
            .focusable(true)
            .build();
        area.add_css_class("spindle-wheel");

        let inner = Rc::new(Inner {
            engine: RefCell::new(engine),
            config: RefCell::new(config),
            area,
            timer: RefCell::new(None),
            tracker: RefCell::new(DragTracker::new()),
            press: Cell::new(None),
            label: Box::new(label),
            accessibility_text: RefCell::new(None),
            feedback: RefCell::new(Box::new(SelectionFeedbackGenerator::new())),
            listeners: RefCell::new(Vec::new()),
        });
        inner.connect();
        inner.update_accessible();

        Self { inner }
    }

    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.inner.area
    }

    pub fn selection(&self) -> D::Item {
        self.inner.engine.borrow().selection().clone()
    }

    pub fn state(&self) -> WheelState {
        self.inner.engine.borrow().state()
    }

    /// Spins the wheel to `item` as if the bound value changed elsewhere.
    pub fn set_selection(&self, item: D::Item) {
        self.inner.dispatch(|engine| engine.set_selection(item));
        self.inner.update_accessible();
    }

    pub fn adjust(&self, direction: AdjustDirection) {
        self.inner.dispatch(|engine| engine.adjust(direction));
    }

    pub fn set_config(&self, config: WheelConfig) -> Result<(), PickerError> {
        let config = config.validated()?;
        let action = self.inner.engine.borrow_mut().set_config(&config);
        self.inner
            .area
            .set_content_height(config.height.ceil() as i32);
        *self.inner.config.borrow_mut() = config;
        self.inner.apply(action);
        Ok(())
    }

    /// Called with every value the user spins, taps, scrolls or keys the wheel
    /// to. Values passed to [`Self::set_selection`] are not reported back.
    pub fn connect_selection_changed(&self, f: impl Fn(&D::Item) + 'static) {
        self.inner.listeners.borrow_mut().push(Box::new(f));
    }

    pub fn with_feedback(self, feedback: impl SelectionFeedback + 'static) -> Self {
        *self.inner.feedback.borrow_mut() = Box::new(feedback);
        self
    }

    /// Spoken value for assistive technologies.
    pub fn with_accessibility_text(self, format: impl Fn(&D::Item) -> String + 'static) -> Self {
        *self.inner.accessibility_text.borrow_mut() = Some(Box::new(format));
        self.inner.update_accessible();
        self
    }

    pub fn set_accessible_label(&self, label: &str) {
        self.inner
            .area
            .update_property(&[gtk::accessible::Property::Label(label)]);
    }
}

impl<D> Inner<D>
where
    D: WheelDataSource + 'static,
    D::Item: 'static,
{
    fn connect(self: &Rc<Self>) {
        let weak = Rc::downgrade(self);
        self.area.set_draw_func(move |area, cr, width, height| {
            if let Some(inner) = weak.upgrade() {
                inner.draw(area, cr, width, height);
            }
        });

        let drag = gtk::GestureDrag::new();
        let weak = Rc::downgrade(self);
        drag.connect_drag_begin(move |gesture, _x, y| {
            if let Some(inner) = weak.upgrade() {
                inner.on_drag_begin(event_time(gesture), y);
            }
        });
        let weak = Rc::downgrade(self);
        drag.connect_drag_update(move |gesture, dx, dy| {
            if let Some(inner) = weak.upgrade() {
                inner.on_drag_update(event_time(gesture), dx, dy);
            }
        });
        let weak = Rc::downgrade(self);
        drag.connect_drag_end(move |gesture, dx, dy| {
            if let Some(inner) = weak.upgrade() {
                inner.on_drag_end(event_time(gesture), dx, dy);
            }
        });
        self.area.add_controller(drag);

        let keys = gtk::EventControllerKey::new();
        let weak = Rc::downgrade(self);
        keys.connect_key_pressed(move |_, key, _, _| {
            match (weak.upgrade(), key_direction(key)) {
                (Some(inner), Some(direction)) => {
                    inner.dispatch(|engine| engine.adjust(direction));
                    glib::Propagation::Stop
                }
                _ => glib::Propagation::Proceed,
            }
        });
        self.area.add_controller(keys);

        let scroll = gtk::EventControllerScroll::new(
            gtk::EventControllerScrollFlags::VERTICAL | gtk::EventControllerScrollFlags::DISCRETE,
        );
        let weak = Rc::downgrade(self);
        scroll.connect_scroll(move |_, _dx, dy| {
            let direction = if dy > 0.0 {
                AdjustDirection::Increment
            } else if dy < 0.0 {
                AdjustDirection::Decrement
            } else {
                return glib::Propagation::Proceed;
            };
            match weak.upgrade() {
                Some(inner) => {
                    inner.dispatch(|engine| engine.adjust(direction));
                    glib::Propagation::Stop
                }
                None => glib::Propagation::Proceed,
            }
        });
        self.area.add_controller(scroll);
    }

    fn frame(&self) -> WheelFrame {
        WheelFrame::new(
            self.area.width() as f64,
            self.area.height() as f64,
            self.config.borrow().height,
        )
    }

    fn draw(&self, area: &gtk::DrawingArea, cr: &cairo::Context, width: i32, height: i32) {
        let style_context = area.style_context();
        let colors = ThemeColors::from_context(&style_context);
        let config = self.config.borrow();
        let frame = WheelFrame::new(width as f64, height as f64, config.height);
        let rows = self.engine.borrow().layout();

        if let Err(e) = view::draw(cr, &rows, &frame, &config, &colors, |item| {
            (self.label)(item)
        }) {
            log::error!("Drawing error: {}", e);
        }
    }

    fn on_drag_begin(self: &Rc<Self>, time: Duration, y: f64) {
        let at_rest = self.engine.borrow().state() == WheelState::Idle;
        self.press.set(Some(Press::new(y, at_rest)));
        self.area.grab_focus();

        let sample = DragSample::new(0.0, time);
        {
            let mut tracker = self.tracker.borrow_mut();
            tracker.reset();
            tracker.push(sample);
        }
        self.dispatch(|engine| engine.drag_begin(sample));
    }

    fn on_drag_update(self: &Rc<Self>, time: Duration, dx: f64, dy: f64) {
        if let Some(mut press) = self.press.get() {
            press.moved(dx, dy);
            self.press.set(Some(press));
        }

        let sample = DragSample::new(dy, time);
        self.tracker.borrow_mut().push(sample);
        self.dispatch(|engine| engine.drag_update(sample));
    }

    fn on_drag_end(self: &Rc<Self>, time: Duration, dx: f64, dy: f64) {
        let press = self.press.take().map(|mut press| {
            press.moved(dx, dy);
            press
        });
        if let Some(press) = press.filter(Press::is_tap) {
            self.dispatch(|engine| engine.drag_cancel());
            let y = self.frame().to_wheel(press.y);
            let row = geometry::row_at(&self.engine.borrow().layout(), y);
            if let Some(row) = row {
                self.dispatch(|engine| engine.tap(row));
                self.update_accessible();
            }
            return;
        }

        let sample = DragSample::new(dy, time);
        let release = {
            let mut tracker = self.tracker.borrow_mut();
            tracker.push(sample);
            tracker.release()
        }
        .unwrap_or(DragRelease {
            sample,
            predicted_end: dy,
        });
        self.dispatch(|engine| engine.drag_end(release));
    }

    fn dispatch(
        self: &Rc<Self>,
        f: impl FnOnce(&mut WheelEngine<D>) -> WheelAction<D::Item>,
    ) {
        let action = f(&mut self.engine.borrow_mut());
        self.apply(action);
        self.ensure_timer();
    }

    fn apply(&self, action: WheelAction<D::Item>) {
        if action.feedback {
            self.feedback.borrow().selection_changed();
        }
        if let Some(item) = action.committed {
            self.update_accessible();
            for listener in self.listeners.borrow().iter() {
                listener(&item);
            }
        }
        if action.should_redraw {
            self.area.queue_draw();
        }
    }

    /// Keeps a single frame timer alive while the engine animates.
    fn ensure_timer(self: &Rc<Self>) {
        if !self.engine.borrow().is_animating() || self.timer.borrow().is_some() {
            return;
        }

        let weak = Rc::downgrade(self);
        let id = glib::timeout_add_local(Duration::from_secs_f64(1.0 / FRAME_RATE), move || {
            let Some(inner) = weak.upgrade() else {
                return glib::ControlFlow::Break;
            };
            let action = inner.engine.borrow_mut().tick();
            inner.apply(action);

            if inner.engine.borrow().is_animating() {
                glib::ControlFlow::Continue
            } else {
                inner.timer.borrow_mut().take();
                glib::ControlFlow::Break
            }
        });
        *self.timer.borrow_mut() = Some(id);
    }

    fn update_accessible(&self) {
        let text = {
            let engine = self.engine.borrow();
            self.accessibility_text
                .borrow()
                .as_ref()
                .map(|format| format(engine.selection()))
                .unwrap_or_default()
        };
        self.area
            .update_property(&[gtk::accessible::Property::ValueText(&text)]);
    }
}

fn event_time<G: IsA<gtk::EventController>>(controller: &G) -> Duration {
    Duration::from_millis(u64::from(controller.current_event_time()))
}

fn key_direction(key: gdk::Key) -> Option<AdjustDirection> {
    if [gdk::Key::Up, gdk::Key::KP_Up, gdk::Key::Page_Up].contains(&key) {
        Some(AdjustDirection::Decrement)
    } else if [gdk::Key::Down, gdk::Key::KP_Down, gdk::Key::Page_Down].contains(&key) {
        Some(AdjustDirection::Increment)
    } else {
        None
    }
}
