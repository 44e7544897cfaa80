// SPDX-License-Identifier: MPL-2.0
use iced::{Point, Size, Vector};
use iced_grid::app::config::{self, Config};
use iced_grid::collage::{export_snapshot, GridGeometry, GridStyle, Layout, Orientation, Slot, Template};
use iced_grid::gesture::{DragSample, Effect, Interpreter, Phase, COMMIT_DURATION, RESET_DURATION};
use iced_grid::i18n::I18n;
use iced_grid::media::{ExportFormat, Photo};
use iced_grid::session::{Outcome, Session};
use image_rs::{Rgba, RgbaImage};
use std::time::{Duration, Instant};
use tempfile::tempdir;

const PORTRAIT: Size = Size {
    width: 400.0,
    height: 800.0,
};
const LANDSCAPE: Size = Size {
    width: 1000.0,
    height: 600.0,
};

fn solid_photo(color: [u8; 4]) -> Photo {
    Photo::from_rgba_image(RgbaImage::from_pixel(8, 8, Rgba(color)))
}

fn drag(interpreter: &mut Interpreter, translation: Vector, orientation: Orientation) {
    interpreter.update(DragSample {
        translation,
        orientation,
    });
}

#[test]
fn short_drag_springs_back() {
    let mut interpreter = Interpreter::new();
    let start = Instant::now();
    assert!(interpreter.begin());
    drag(&mut interpreter, Vector::new(0.0, -100.0), Orientation::Portrait);
    assert!(!interpreter.is_armed());

    assert_eq!(interpreter.end(start, PORTRAIT), Effect::None);
    assert_eq!(interpreter.phase(), Phase::Resetting);

    interpreter.tick(start + RESET_DURATION + Duration::from_millis(1));
    assert_eq!(interpreter.phase(), Phase::Idle);
    assert_eq!(interpreter.translation(), Vector::new(0.0, 0.0));
}

#[test]
fn landscape_swipe_left_exports_once() {
    let mut interpreter = Interpreter::new();
    let start = Instant::now();
    interpreter.begin();
    drag(&mut interpreter, Vector::new(-160.0, 30.0), Orientation::Landscape);
    assert!(interpreter.is_armed());
    interpreter.end(start, LANDSCAPE);

    let done = start + COMMIT_DURATION + Duration::from_millis(1);
    assert_eq!(interpreter.tick(done), Effect::Export);
    assert_eq!(interpreter.translation(), Vector::new(-LANDSCAPE.width, 0.0));
    assert_eq!(interpreter.tick(done), Effect::None);

    interpreter.share_finished(done);
    interpreter.tick(done + RESET_DURATION + Duration::from_millis(1));
    assert_eq!(interpreter.phase(), Phase::Idle);
}

#[test]
fn swiping_back_below_threshold_disarms() {
    let mut interpreter = Interpreter::new();
    interpreter.begin();
    drag(&mut interpreter, Vector::new(0.0, -200.0), Orientation::Portrait);
    assert!(interpreter.is_armed());
    drag(&mut interpreter, Vector::new(0.0, -90.0), Orientation::Portrait);
    assert!(!interpreter.is_armed());
}

#[test]
fn template_change_keeps_hidden_photos() {
    let mut layout = Layout::new();
    layout.select_template(Template::TwoUpTwoDown);
    layout.assign_image(Slot::TopRight, solid_photo([255, 0, 0, 255]));

    layout.select_template(Template::OneUpTwoDown);
    assert!(!layout.visible_slots().contains(&Slot::TopRight));

    layout.select_template(Template::TwoUpOneDown);
    assert!(layout.image(Slot::TopRight).is_some());
}

#[test]
fn snapshot_only_contains_visible_cells() {
    let mut layout = Layout::new();
    layout.select_template(Template::TwoUpTwoDown);
    layout.assign_image(Slot::TopRight, solid_photo([255, 0, 0, 255]));
    layout.select_template(Template::OneUpTwoDown);

    let style = GridStyle::default();
    let side = 200;
    let image = export_snapshot(&layout, side, &style);
    assert_eq!(image.dimensions(), (side, side));

    // The wide top cell shows the placeholder, not the hidden red photo.
    let geometry = GridGeometry::new(side as f32);
    let (_, top) = geometry.cells(Template::OneUpTwoDown)[0];
    let pixel = image.get_pixel((top.x + top.width * 0.9) as u32, (top.y + 2.0) as u32);
    assert_eq!(pixel.0, style.placeholder);
}

#[test]
fn session_tap_then_swipe_round_trip() {
    let mut session = Session::new(PORTRAIT);
    let frame = session.frame();
    let top = Point::new(frame.center_x(), frame.y + frame.height / 4.0);

    session.press(top);
    assert_eq!(session.release(Instant::now()), Outcome::OpenChooser(Slot::TopLeft));
    let slot = session.close_chooser().expect("chooser should be open");
    session.assign_image(slot, solid_photo([0, 200, 0, 255]));

    let start = Instant::now();
    session.press(top);
    session.pointer_moved(Point::new(top.x, top.y - 180.0));
    assert!(session.is_armed());
    assert_eq!(session.release(start), Outcome::None);
    assert_eq!(
        session.tick(start + COMMIT_DURATION + Duration::from_millis(1)),
        Outcome::Share
    );

    let snapshot = session.snapshot(2.0, &GridStyle::default());
    assert_eq!(snapshot.width(), (frame.width * 2.0).round() as u32);
}

#[test]
fn settings_round_trip_and_drive_language() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");

    let mut settings = Config::default();
    settings.general.language = Some("fr".to_string());
    settings.export.format = ExportFormat::Jpeg;
    settings.export.scale = 3.0;
    config::save_to_path(&settings, &path).expect("save settings");

    let loaded = config::load_from_path(&path).expect("load settings");
    assert_eq!(loaded, settings);

    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("header-swipe-up"), "Balayez vers le haut pour partager");
}

#[test]
fn cli_language_overrides_settings() {
    let mut settings = Config::default();
    settings.general.language = Some("fr".to_string());

    let i18n = I18n::new(Some("en-US".to_string()), &settings);
    assert_eq!(i18n.tr("header-swipe-left"), "Swipe left to share");
}
