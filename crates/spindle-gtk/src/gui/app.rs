use crate::config::{self, Config};
use crate::error::PickerError;
use crate::events::AppEvent;
use crate::feedback::SelectionFeedbackGenerator;
use crate::gui::picker::{CircularWheelPicker, FiniteWheelPicker, WheelPicker};
use crate::gui::theme;
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use spindle::SelectionFeedback;
use std::path::PathBuf;
use std::rc::Rc;

const HOURS: u32 = 24;
const INITIAL_HOUR: u32 = 9;

pub struct AppModel {
    pub config: Config,
    pub config_path: PathBuf,
    pub selection: Selection,
    pub hours: Option<CircularWheelPicker<u32>>,
    pub items: Option<FiniteWheelPicker<String>>,
    pub feedback: Rc<SelectionFeedbackGenerator>,
    pub wheels: gtk::Box,
}

#[derive(Debug)]
pub enum AppMsg {
    HourChanged(u32),
    ItemChanged(String),
    Shuffle,
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

/// Values shown on the demo wheels. `None` means that wheel is not shown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub hour: Option<u32>,
    pub item: Option<String>,
}

impl Selection {
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if let Some(hour) = self.hour {
            parts.push(format!("{:02}:00", hour));
        }
        if let Some(item) = &self.item {
            parts.push(item.clone());
        }
        if parts.is_empty() {
            "Nothing selected".to_string()
        } else {
            parts.join(", ")
        }
    }

    /// Picks new values for the shown wheels. `random(begin, end)` returns a
    /// value in `begin..end`.
    pub fn shuffle(&mut self, items: &[String], mut random: impl FnMut(i32, i32) -> i32) {
        if self.hour.is_some() {
            self.hour = Some(random(0, HOURS as i32) as u32);
        }
        if self.item.is_some() && !items.is_empty() {
            let index = random(0, items.len() as i32) as usize;
            if let Some(item) = items.get(index) {
                self.item = Some(item.clone());
            }
        }
    }
}

impl AppModel {
    fn hour_picker(
        &self,
        sender: &ComponentSender<Self>,
    ) -> Result<CircularWheelPicker<u32>, PickerError> {
        let hour = self.selection.hour.unwrap_or(INITIAL_HOUR);
        let picker = WheelPicker::circular(
            hour,
            (0..HOURS).collect(),
            self.config.wheel.clone(),
            |h| format!("{:02}", h),
        )?
        .with_feedback(shared_feedback(&self.feedback))
        .with_accessibility_text(|h| format!("{} o'clock", h));
        picker.set_accessible_label("Hour");

        let sender = sender.clone();
        picker.connect_selection_changed(move |h| sender.input(AppMsg::HourChanged(*h)));
        Ok(picker)
    }

    fn item_picker(
        &self,
        sender: &ComponentSender<Self>,
    ) -> Result<FiniteWheelPicker<String>, PickerError> {
        let item = self
            .selection
            .item
            .clone()
            .filter(|item| self.config.items.contains(item))
            .or_else(|| self.config.initial_item())
            .ok_or(spindle::DataSourceError::Empty)?;
        let picker = WheelPicker::finite(
            item,
            self.config.items.clone(),
            self.config.wheel.clone(),
            String::clone,
        )?
        .with_feedback(shared_feedback(&self.feedback))
        .with_accessibility_text(String::clone);
        picker.set_accessible_label("Item");

        let sender = sender.clone();
        picker.connect_selection_changed(move |item| {
            sender.input(AppMsg::ItemChanged(item.clone()))
        });
        Ok(picker)
    }

    fn rebuild_items(&mut self, sender: &ComponentSender<Self>) {
        if let Some(old) = self.items.take() {
            self.wheels.remove(old.widget());
        }
        match self.item_picker(sender) {
            Ok(picker) => {
                self.selection.item = Some(picker.selection());
                self.wheels.append(picker.widget());
                self.items = Some(picker);
            }
            Err(e) => {
                log::error!("Failed to build item wheel: {}", e);
                self.selection.item = None;
            }
        }
    }
}

fn shared_feedback(feedback: &Rc<SelectionFeedbackGenerator>) -> impl Fn() + 'static {
    let feedback = feedback.clone();
    move || feedback.selection_changed()
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (Config, PathBuf, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Spindle"),
            set_default_width: 420,
            set_default_height: 440,

            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,
                set_spacing: 12,
                set_margin_all: 16,

                #[name = "wheels"]
                gtk::Box {
                    set_orientation: gtk::Orientation::Horizontal,
                    set_spacing: 12,
                    set_homogeneous: true,
                    set_vexpand: true,
                },

                gtk::Label {
                    add_css_class: "spindle-summary",
                    #[watch]
                    set_label: &model.selection.summary(),
                },

                gtk::Button {
                    set_label: "Surprise me",
                    connect_clicked => AppMsg::Shuffle,
                },
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (config, config_path, rx) = init;

        theme::load_css();

        let feedback = Rc::new(SelectionFeedbackGenerator::new().muted(!config.sound));
        let model = AppModel {
            selection: Selection {
                hour: config.mode.shows_circular().then_some(INITIAL_HOUR),
                item: None,
            },
            config,
            config_path,
            hours: None,
            items: None,
            feedback,
            wheels: gtk::Box::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.wheels = widgets.wheels.clone();

        if model.config.mode.shows_circular() {
            match model.hour_picker(&sender) {
                Ok(picker) => {
                    model.wheels.append(picker.widget());
                    model.hours = Some(picker);
                }
                Err(e) => {
                    log::error!("Failed to build hour wheel: {}", e);
                    model.selection.hour = None;
                }
            }
        }
        if model.config.mode.shows_finite() {
            model.rebuild_items(&sender);
        }

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, sender: ComponentSender<Self>) {
        match msg {
            AppMsg::HourChanged(hour) => {
                log::info!("Hour set to {:02}", hour);
                self.selection.hour = Some(hour);
            }
            AppMsg::ItemChanged(item) => {
                log::info!("Item set to {}", item);
                self.selection.item = Some(item);
            }
            AppMsg::Shuffle => {
                // set_selection spins the wheels without reporting back
                self.selection
                    .shuffle(&self.config.items, glib::random_int_range);
                if let (Some(picker), Some(hour)) = (&self.hours, self.selection.hour) {
                    picker.set_selection(hour);
                }
                if let (Some(picker), Some(item)) = (&self.items, &self.selection.item) {
                    picker.set_selection(item.clone());
                }
                log::info!("Shuffled to {}", self.selection.summary());
            }
            AppMsg::ConfigReload => match config::load_config(&self.config_path) {
                Ok(mut new_config) => {
                    new_config.mode = self.config.mode;
                    self.feedback.set_muted(!new_config.sound);

                    if let Some(picker) = &self.hours
                        && let Err(e) = picker.set_config(new_config.wheel.clone())
                    {
                        log::error!("Failed to apply hour wheel config: {}", e);
                    }

                    let items_changed = new_config.items != self.config.items;
                    if !items_changed
                        && let Some(picker) = &self.items
                        && let Err(e) = picker.set_config(new_config.wheel.clone())
                    {
                        log::error!("Failed to apply item wheel config: {}", e);
                    }

                    self.config = new_config;
                    if items_changed && self.config.mode.shows_finite() {
                        self.rebuild_items(&sender);
                    }
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
        }
    }
}
