// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the grid, the source
//! chooser, the share flow and notifications.
//!
//! The [`App`] struct wires domain components together and translates
//! messages into state changes. Platform dialogs run as async tasks; their
//! results come back as messages.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::collage::GridStyle;
use crate::i18n::I18n;
use crate::session::Session;
use crate::ui::notifications;
use crate::ui::theming::AppTheme;
use iced::{window, Size, Subscription, Task, Theme};
use std::path::PathBuf;

/// Initial window size.
pub const WINDOW_DEFAULT_WIDTH: f32 = 800.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 650.0;
pub const MIN_WINDOW_WIDTH: f32 = 360.0;
pub const MIN_WINDOW_HEIGHT: f32 = 360.0;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: config::Config,
    theme: AppTheme,
    session: Session,
    app_state: persisted_state::AppState,
    notifications: notifications::Manager,
    style: GridStyle,
    /// Directory holding `state.cbor`. `None` uses the resolved default.
    data_dir: Option<PathBuf>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("template", &self.session.layout().template())
            .field("orientation", &self.session.orientation())
            .field("phase", &self.session.phase())
            .finish_non_exhaustive()
    }
}

fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Builds the Iced application and starts the event loop.
pub fn run(flags: Flags) -> iced::Result {
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings and saved state, then lays the grid out for the default
    /// window size. The first resize event corrects the geometry.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.map(PathBuf::from);
        let data_dir = flags.data_dir.map(PathBuf::from);

        let (config, config_warning) = config::load_with_override(config_dir);
        let i18n = I18n::new(flags.lang, &config);
        let (app_state, state_warning) = persisted_state::AppState::load_from(data_dir.clone());

        let mut app = App {
            i18n,
            theme: AppTheme::new(config.general.theme_mode),
            config,
            session: Session::new(Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT)),
            app_state,
            notifications: notifications::Manager::new(),
            style: GridStyle::default(),
            data_dir,
        };

        for key in [config_warning, state_warning].into_iter().flatten() {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        tracing::info!(
            locale = %app.i18n.current_locale(),
            template = ?app.session.layout().template(),
            "application started"
        );

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = vec![subscription::create_event_subscription()];

        if self.session.is_tracking() {
            subscriptions.push(subscription::create_pointer_subscription());
        }

        subscriptions.push(subscription::create_tick_subscription(
            self.session.is_animating(),
            self.notifications.has_notifications(),
        ));

        Subscription::batch(subscriptions)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::GridPressed(position) => {
                self.handle_grid_pressed(position);
                Task::none()
            }
            Message::PointerMoved(position) => {
                self.session.pointer_moved(position);
                Task::none()
            }
            Message::PointerReleased => {
                self.handle_pointer_released();
                Task::none()
            }
            Message::PointerLeft => {
                self.session.cancel(std::time::Instant::now());
                Task::none()
            }
            Message::WindowResized(size) => {
                self.session.resized(size);
                Task::none()
            }
            Message::Tick(now) => self.handle_tick(now),
            Message::TemplateBar(message) => {
                self.handle_template_bar(message);
                Task::none()
            }
            Message::TemplateShortcut(template) => {
                if self.session.chooser().is_none() {
                    self.select_template(template);
                }
                Task::none()
            }
            Message::Chooser(message) => self.handle_chooser(message),
            Message::EscapePressed => {
                if self.session.close_chooser().is_some() {
                    tracing::debug!("source chooser dismissed");
                }
                Task::none()
            }
            Message::PickerResolved(slot, outcome) => {
                self.handle_picker_resolved(slot, outcome);
                Task::none()
            }
            Message::ShareFinished(outcome) => {
                self.handle_share_finished(outcome);
                Task::none()
            }
            Message::Notification(message) => {
                self.notifications.handle_message(&message);
                Task::none()
            }
        }
    }

    fn view(&self) -> iced::Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            colors: &self.theme.colors,
            session: &self.session,
            style: self.style,
            notifications: &self.notifications,
        })
    }

    /// Writes the app state, surfacing a warning when it cannot be saved.
    fn persist_state(&mut self) {
        if let Some(key) = self.app_state.save_to(self.data_dir.clone()) {
            self.notifications
                .push(notifications::Notification::warning(key));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collage::{Slot, Template};
    use crate::gesture::{Phase, COMMIT_DURATION, RESET_DURATION};
    use crate::media::{Photo, PickerOutcome, ShareOutcome};
    use crate::ui::{source_chooser, template_bar};
    use iced::Point;
    use image_rs::{Rgba, RgbaImage};
    use std::fs;
    use std::time::{Duration, Instant};
    use tempfile::{tempdir, TempDir};

    const PORTRAIT: Size = Size {
        width: 400.0,
        height: 800.0,
    };

    fn test_app() -> (App, TempDir) {
        let dir = tempdir().expect("temp dir");
        let flags = Flags {
            lang: Some("en-US".to_string()),
            config_dir: Some(dir.path().join("config").to_string_lossy().into_owned()),
            data_dir: Some(dir.path().join("data").to_string_lossy().into_owned()),
        };
        let (mut app, _task) = App::new(flags);
        let _ = app.update(Message::WindowResized(PORTRAIT));
        (app, dir)
    }

    fn photo() -> Photo {
        Photo::from_rgba_image(RgbaImage::from_pixel(4, 4, Rgba([200, 10, 10, 255])))
    }

    /// A point inside the top row of the resting grid.
    fn grid_point(app: &App) -> Point {
        let frame = app.session.frame();
        Point::new(frame.center_x(), frame.y + frame.height / 4.0)
    }

    #[test]
    fn new_starts_with_default_template_and_no_warnings() {
        let (app, _dir) = test_app();
        assert_eq!(app.session.layout().template(), Template::default());
        assert!(!app.notifications.has_notifications());
        assert_eq!(app.title(), "Instagrid");
    }

    #[test]
    fn broken_settings_file_warns_and_uses_defaults() {
        let dir = tempdir().expect("temp dir");
        let config_dir = dir.path().join("config");
        fs::create_dir_all(&config_dir).expect("config dir");
        fs::write(config_dir.join("settings.toml"), "not = [valid").expect("write settings");

        let (app, _task) = App::new(Flags {
            lang: Some("en-US".to_string()),
            config_dir: Some(config_dir.to_string_lossy().into_owned()),
            data_dir: Some(dir.path().join("data").to_string_lossy().into_owned()),
        });

        assert_eq!(app.config, config::Config::default());
        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn template_bar_and_shortcuts_select_templates() {
        let (mut app, _dir) = test_app();

        let _ = app.update(Message::TemplateBar(template_bar::Message::Select(
            Template::TwoUpTwoDown,
        )));
        assert_eq!(app.session.layout().template(), Template::TwoUpTwoDown);

        let _ = app.update(Message::TemplateShortcut(Template::TwoUpOneDown));
        assert_eq!(app.session.layout().template(), Template::TwoUpOneDown);
    }

    #[test]
    fn tap_on_grid_opens_chooser_and_escape_closes_it() {
        let (mut app, _dir) = test_app();
        let _ = app.update(Message::GridPressed(grid_point(&app)));
        let _ = app.update(Message::PointerReleased);
        assert!(app.session.chooser().is_some());

        // Shortcuts are ignored while the chooser is open.
        let before = app.session.layout().template();
        let _ = app.update(Message::TemplateShortcut(Template::TwoUpTwoDown));
        assert_eq!(app.session.layout().template(), before);

        let _ = app.update(Message::EscapePressed);
        assert!(app.session.chooser().is_none());
    }

    #[test]
    fn chooser_cancel_clears_the_pending_slot() {
        let (mut app, _dir) = test_app();
        let _ = app.update(Message::GridPressed(grid_point(&app)));
        let _ = app.update(Message::PointerReleased);
        let _ = app.update(Message::Chooser(source_chooser::Message::Cancel));
        assert!(app.session.chooser().is_none());
    }

    #[test]
    fn granted_photo_fills_the_slot_and_remembers_directory() {
        let (mut app, dir) = test_app();
        let picked = dir.path().join("photos").join("beach.png");

        let _ = app.update(Message::PickerResolved(
            Slot::TopLeft,
            PickerOutcome::Granted {
                photo: photo(),
                path: Some(picked),
            },
        ));

        assert!(app.session.layout().image(Slot::TopLeft).is_some());
        assert_eq!(
            app.app_state.last_library_directory.as_deref(),
            Some(dir.path().join("photos").as_path())
        );
        assert!(dir.path().join("data").join("state.cbor").exists());
    }

    #[test]
    fn refused_sources_raise_a_notification() {
        let (mut app, _dir) = test_app();

        let _ = app.update(Message::PickerResolved(Slot::TopLeft, PickerOutcome::Denied));
        let _ = app.update(Message::PickerResolved(
            Slot::TopLeft,
            PickerOutcome::Unavailable,
        ));
        let _ = app.update(Message::PickerResolved(
            Slot::TopLeft,
            PickerOutcome::Cancelled,
        ));

        assert_eq!(app.notifications.visible_count(), 2);
        assert!(app.session.layout().image(Slot::TopLeft).is_none());
    }

    #[test]
    fn only_a_denied_source_is_a_warning() {
        use crate::ui::notifications::Severity;

        let (mut app, _dir) = test_app();
        let _ = app.update(Message::PickerResolved(Slot::TopLeft, PickerOutcome::Denied));
        let _ = app.update(Message::PickerResolved(
            Slot::TopLeft,
            PickerOutcome::Restricted,
        ));

        let severities: Vec<Severity> = app
            .notifications
            .visible()
            .map(|notification| notification.severity())
            .collect();
        // Newest first.
        assert_eq!(severities, vec![Severity::Info, Severity::Warning]);
    }

    #[test]
    fn committed_swipe_reaches_share_phase() {
        let (mut app, _dir) = test_app();
        let start = grid_point(&app);

        let _ = app.update(Message::GridPressed(start));
        let _ = app.update(Message::PointerMoved(Point::new(start.x, start.y - 200.0)));
        let _ = app.update(Message::PointerReleased);
        assert!(app.session.is_animating());

        let now = Instant::now() + COMMIT_DURATION + Duration::from_millis(50);
        let _ = app.update(Message::Tick(now));
        assert_eq!(app.session.phase(), Phase::AwaitingShare);
    }

    #[test]
    fn share_result_resets_grid_and_notifies() {
        let (mut app, dir) = test_app();
        let start = grid_point(&app);
        let _ = app.update(Message::GridPressed(start));
        let _ = app.update(Message::PointerMoved(Point::new(start.x, start.y - 200.0)));
        let _ = app.update(Message::PointerReleased);
        let _ = app.update(Message::Tick(
            Instant::now() + COMMIT_DURATION + Duration::from_millis(50),
        ));

        let target = dir.path().join("out").join("collage.png");
        let _ = app.update(Message::ShareFinished(ShareOutcome::Shared(target)));
        assert_eq!(app.session.phase(), Phase::Resetting);
        assert_eq!(
            app.app_state.last_share_directory.as_deref(),
            Some(dir.path().join("out").as_path())
        );
        assert_eq!(app.notifications.visible_count(), 1);

        let _ = app.update(Message::Tick(
            Instant::now() + RESET_DURATION + Duration::from_millis(100),
        ));
        assert_eq!(app.session.phase(), Phase::Idle);
    }

    #[test]
    fn pointer_leaving_window_cancels_the_drag() {
        let (mut app, _dir) = test_app();
        let start = grid_point(&app);
        let _ = app.update(Message::GridPressed(start));
        let _ = app.update(Message::PointerMoved(Point::new(start.x, start.y - 40.0)));
        let _ = app.update(Message::PointerLeft);

        assert!(!app.session.is_tracking());
        assert!(app.session.chooser().is_none());
    }
}
