use shared::domain::ImageRef;
use ui_core::{
    GalleryController, HeaderPosition, HeaderStyle, Key, LightboxInput, NavController, NavInput,
    PageScroll, ScrollController, UiConfig,
};

#[test]
fn controllers_run_side_by_side_without_interfering() {
    let config = UiConfig::default();
    let mut nav = NavController::new();
    let mut scroll = ScrollController::new(config.scroll.clone(), 0.0);
    let mut gallery = GalleryController::new(vec![
        ImageRef::new("a.jpg"),
        ImageRef::new("b.jpg"),
        ImageRef::new("c.jpg"),
    ])
    .expect("gallery");

    let nav_view = nav.update(NavInput::ToggleClicked).expect("nav view");
    assert_eq!(nav_view.page_scroll, PageScroll::Locked);
    nav.update(NavInput::LinkActivated);
    assert!(!nav.is_open());

    assert!(scroll.on_scroll());
    assert!(!scroll.on_scroll());
    let frame = scroll.on_frame(150.0);
    assert_eq!(frame.header_style, HeaderStyle::Elevated);
    assert_eq!(frame.hero_transform(), "translateY(-75px)");

    let opened = gallery
        .update(LightboxInput::ThumbnailClicked(1))
        .view
        .expect("opened");
    assert_eq!(opened.slide.expect("slide").counter, "2 / 3");

    // A click on the thumbnail is outside the nav; the closed menu must not
    // clear the lightbox's scroll lock.
    assert!(nav
        .update(NavInput::DocumentClicked {
            inside_menu_or_toggle: false
        })
        .is_none());

    let right = gallery.update(LightboxInput::KeyPressed(Key::ArrowRight));
    assert_eq!(right.view.expect("view").slide.expect("slide").counter, "3 / 3");
    let wrapped = gallery.update(LightboxInput::KeyPressed(Key::ArrowRight));
    assert_eq!(
        wrapped.view.expect("view").slide.expect("slide").counter,
        "1 / 3"
    );
    let closed = gallery
        .update(LightboxInput::KeyPressed(Key::Escape))
        .view
        .expect("closed");
    assert_eq!(closed.page_scroll, PageScroll::Restored);

    assert!(scroll.on_scroll());
    let frame = scroll.on_frame(250.0);
    assert_eq!(frame.header_position, HeaderPosition::Hidden);
    assert!(scroll.on_scroll());
    let frame = scroll.on_frame(50.0);
    assert_eq!(frame.header_style, HeaderStyle::Base);
    assert_eq!(frame.header_position, HeaderPosition::Shown);
}

#[test]
fn config_from_page_json_drives_scroll_thresholds() {
    let config = UiConfig::from_json(r#"{ "scroll": { "hide_after_px": 50 } }"#).expect("config");
    let mut scroll = ScrollController::new(config.scroll, 0.0);
    scroll.on_scroll();
    let frame = scroll.on_frame(60.0);
    assert_eq!(frame.header_position, HeaderPosition::Hidden);
    assert_eq!(frame.header_style, HeaderStyle::Base);
}
