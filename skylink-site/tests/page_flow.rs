use std::time::Duration;

use chrono::NaiveDate;
use skylink_booking::{BookingError, Category, FieldUpdate, SearchStatus};
use skylink_core::SiteConfig;
use skylink_reveal::{MotionPreference, RevealState};
use skylink_shared::{Rect, Section, Track, ViewportEvent};
use skylink_site::loader::LoaderPhase;
use skylink_site::{PageCommand, PageHandle, PageRuntime, SiteError};
use tokio::sync::broadcast;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

fn mount(motion: MotionPreference) -> (PageRuntime, PageHandle, broadcast::Sender<ViewportEvent>) {
    let (tx, rx) = broadcast::channel(16);
    let (runtime, handle) = PageRuntime::mount(SiteConfig::default(), today(), motion, rx);
    (runtime, handle, tx)
}

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

#[tokio::test(start_paused = true)]
async fn test_search_returns_to_idle_after_delay() {
    let (mut runtime, _handle, _viewport) = mount(MotionPreference::NoPreference);

    runtime.dispatch(PageCommand::SelectCategory(Category::Hotels)).unwrap();
    runtime
        .dispatch(PageCommand::SetField(FieldUpdate::Destination("Lisbon".into())))
        .unwrap();
    runtime.dispatch(PageCommand::Submit).unwrap();
    assert_eq!(runtime.page().booking.status(), SearchStatus::Searching);
    assert_eq!(runtime.view().booking.button_label, "Searching...");

    // A second submit while searching is refused
    let err = runtime.dispatch(PageCommand::Submit).unwrap_err();
    assert!(matches!(err, SiteError::Booking(BookingError::AlreadySearching)));

    runtime.run_for(ms(899)).await;
    assert_eq!(runtime.page().booking.status(), SearchStatus::Searching);

    runtime.run_for(ms(2)).await;
    assert_eq!(runtime.page().booking.status(), SearchStatus::Idle);
    assert_eq!(runtime.view().booking.button_label, "Search Hotels");
}

#[tokio::test(start_paused = true)]
async fn test_incomplete_form_cannot_submit() {
    let (mut runtime, _handle, _viewport) = mount(MotionPreference::NoPreference);

    let err = runtime.dispatch(PageCommand::Submit).unwrap_err();
    assert!(matches!(
        err,
        SiteError::Booking(BookingError::SubmitDisabled(Category::Flights))
    ));
    assert_eq!(runtime.page().booking.status(), SearchStatus::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_input_field_by_dom_name() {
    let (mut runtime, _handle, _viewport) = mount(MotionPreference::NoPreference);

    runtime
        .dispatch(PageCommand::InputField { name: "from".into(), value: "NYC".into() })
        .unwrap();
    runtime
        .dispatch(PageCommand::InputField { name: "to".into(), value: "Paris".into() })
        .unwrap();
    assert!(runtime.page().booking.is_submit_enabled());

    let err = runtime
        .dispatch(PageCommand::InputField { name: "seat".into(), value: "12A".into() })
        .unwrap_err();
    assert!(matches!(err, SiteError::Booking(BookingError::UnknownField(_))));
}

#[tokio::test(start_paused = true)]
async fn test_places_autoplay_advances_and_pauses_on_hover() {
    let (mut runtime, _handle, _viewport) = mount(MotionPreference::NoPreference);
    runtime.on_viewport(ViewportEvent::Resized { viewport_width: 1440, container_width: 1200 });
    assert_eq!(runtime.page().places.visible_count(), 3);

    runtime.run_for(ms(4001)).await;
    assert_eq!(runtime.page().places.current_index(), 1);
    // Packages track has no autoplay
    assert_eq!(runtime.page().packages.current_index(), 0);

    runtime.dispatch(PageCommand::TrackPointerEnter(Track::Places)).unwrap();
    runtime.run_for(ms(8000)).await;
    assert_eq!(runtime.page().places.current_index(), 1);

    // Resuming starts a fresh interval
    runtime.dispatch(PageCommand::TrackPointerLeave(Track::Places)).unwrap();
    runtime.run_for(ms(3999)).await;
    assert_eq!(runtime.page().places.current_index(), 1);
    runtime.run_for(ms(2)).await;
    assert_eq!(runtime.page().places.current_index(), 2);

    // Wraps back to the start after the last page
    runtime.run_for(ms(4000)).await;
    assert_eq!(runtime.page().places.current_index(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_places_hover_restarts_autoplay_interval() {
    let (mut runtime, _handle, _viewport) = mount(MotionPreference::NoPreference);
    runtime.on_viewport(ViewportEvent::Resized { viewport_width: 1440, container_width: 1200 });

    // Loader fallback and headline rotation only
    runtime.dispatch(PageCommand::TrackPointerEnter(Track::Places)).unwrap();
    assert_eq!(runtime.live_timers(), 2);
    runtime.run_for(ms(3999)).await;
    runtime.dispatch(PageCommand::TrackPointerLeave(Track::Places)).unwrap();

    runtime.run_for(ms(2)).await;
    assert_eq!(runtime.page().places.current_index(), 0);

    runtime.run_for(ms(4000)).await;
    assert_eq!(runtime.page().places.current_index(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_headline_hover_restarts_rotation_interval() {
    let (mut runtime, _handle, _viewport) = mount(MotionPreference::NoPreference);

    runtime.run_for(ms(100)).await;
    runtime.dispatch(PageCommand::HeadlinePointerEnter).unwrap();
    runtime.run_for(ms(2899)).await;
    runtime.dispatch(PageCommand::HeadlinePointerLeave).unwrap();

    runtime.run_for(ms(2)).await;
    assert_eq!(runtime.page().hero.current(), 0);

    runtime.run_for(ms(3000)).await;
    assert_eq!(runtime.page().hero.current(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_escape_resumes_headline_with_fresh_interval() {
    use skylink_shared::Key;

    let (mut runtime, _handle, _viewport) = mount(MotionPreference::NoPreference);

    runtime.run_for(ms(1000)).await;
    runtime.dispatch(PageCommand::OpenHeroDialog).unwrap();
    runtime.run_for(ms(2500)).await;
    runtime.dispatch(PageCommand::Key(Key::Escape)).unwrap();
    assert!(!runtime.view().hero_dialog_open);

    runtime.run_for(ms(2999)).await;
    assert_eq!(runtime.page().hero.current(), 0);
    runtime.run_for(ms(2)).await;
    assert_eq!(runtime.page().hero.current(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_manual_scroll_through_viewport_stream() {
    let (mut runtime, _handle, viewport) = mount(MotionPreference::NoPreference);

    viewport
        .send(ViewportEvent::Resized { viewport_width: 1440, container_width: 1120 })
        .unwrap();
    runtime.run_for(ms(10)).await;
    let stride = {
        let view = runtime.page().packages.view();
        (view.item_width + view.gap) as f64
    };

    viewport
        .send(ViewportEvent::TrackScrolled { track: Track::Packages, offset: stride * 2.4 })
        .unwrap();
    runtime.run_for(ms(10)).await;
    assert_eq!(runtime.page().packages.current_index(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_headline_rotates_and_holds_while_dialog_open() {
    let (mut runtime, _handle, _viewport) = mount(MotionPreference::NoPreference);

    runtime.run_for(ms(3001)).await;
    assert_eq!(runtime.page().hero.current(), 1);

    runtime.dispatch(PageCommand::OpenHeroDialog).unwrap();
    assert!(runtime.view().scroll_locked);
    runtime.run_for(ms(6000)).await;
    assert_eq!(runtime.page().hero.current(), 1);

    runtime.dispatch(PageCommand::CloseHeroDialog).unwrap();
    runtime.run_for(ms(2999)).await;
    assert_eq!(runtime.page().hero.current(), 1);
    runtime.run_for(ms(2)).await;
    assert_eq!(runtime.page().hero.current(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_newsletter_confirmation_expires() {
    let (mut runtime, handle, _viewport) = mount(MotionPreference::NoPreference);

    handle.send(PageCommand::SetEmail("traveler@example.com".into()));
    handle.send(PageCommand::Subscribe);
    runtime.run_for(ms(1)).await;

    let newsletter = &runtime.page().footer.newsletter;
    assert!(newsletter.is_subscribed());
    assert_eq!(newsletter.email(), "");

    runtime.run_for(ms(3498)).await;
    assert!(runtime.page().footer.newsletter.is_subscribed());

    runtime.run_for(ms(2)).await;
    assert!(!runtime.page().footer.newsletter.is_subscribed());
}

#[tokio::test(start_paused = true)]
async fn test_invalid_email_keeps_input() {
    let (mut runtime, _handle, _viewport) = mount(MotionPreference::NoPreference);

    runtime.dispatch(PageCommand::SetEmail("not-an-email".into())).unwrap();
    let err = runtime.dispatch(PageCommand::Subscribe).unwrap_err();
    assert!(matches!(err, SiteError::Newsletter(_)));

    let newsletter = &runtime.page().footer.newsletter;
    assert_eq!(newsletter.email(), "not-an-email");
    assert_eq!(newsletter.error(), Some("Please enter a valid email address."));
}

#[tokio::test(start_paused = true)]
async fn test_loader_fallback_then_exit() {
    let (mut runtime, _handle, _viewport) = mount(MotionPreference::NoPreference);
    assert!(runtime.view().scroll_locked);

    runtime.run_for(ms(1499)).await;
    assert_eq!(runtime.page().loader.phase(), LoaderPhase::Loading);

    runtime.run_for(ms(2)).await;
    assert_eq!(runtime.page().loader.phase(), LoaderPhase::Ready);

    runtime.run_for(ms(250)).await;
    assert_eq!(runtime.page().loader.phase(), LoaderPhase::Hidden);
    assert!(!runtime.view().scroll_locked);
}

#[tokio::test(start_paused = true)]
async fn test_loaded_event_beats_fallback() {
    let (mut runtime, _handle, viewport) = mount(MotionPreference::NoPreference);

    viewport.send(ViewportEvent::Loaded).unwrap();
    runtime.run_for(ms(100)).await;
    assert_eq!(runtime.page().loader.phase(), LoaderPhase::Ready);

    runtime.run_for(ms(200)).await;
    assert_eq!(runtime.page().loader.phase(), LoaderPhase::Hidden);
}

#[tokio::test(start_paused = true)]
async fn test_layout_reveals_sections_in_view() {
    let (mut runtime, _handle, viewport) = mount(MotionPreference::NoPreference);

    viewport
        .send(ViewportEvent::Layout {
            viewport: Rect::new(0.0, 0.0, 1440.0, 900.0),
            sections: vec![
                (Section::Hero, Rect::new(0.0, 0.0, 1440.0, 600.0)),
                (Section::Footer, Rect::new(0.0, 4000.0, 1440.0, 400.0)),
            ],
        })
        .unwrap();
    runtime.run_for(ms(1)).await;

    assert!(runtime.page().reveal.is_revealed(Section::Hero));
    assert!(!runtime.page().reveal.is_revealed(Section::Footer));
}

#[tokio::test(start_paused = true)]
async fn test_reduced_motion_reveals_everything() {
    let (runtime, _handle, _viewport) = mount(MotionPreference::Reduce);

    let view = runtime.view();
    assert_eq!(view.sections.len(), Section::ALL.len());
    assert!(view.sections.iter().all(|(_, state)| *state == RevealState::Revealed));
    assert!(!runtime.page().reveal.is_observing());
}

#[tokio::test(start_paused = true)]
async fn test_unknown_shop_option_rejected() {
    let (mut runtime, _handle, _viewport) = mount(MotionPreference::NoPreference);

    let err = runtime
        .dispatch(PageCommand::SelectShopOption("Cruises".into()))
        .unwrap_err();
    assert!(matches!(err, SiteError::UnknownOption(_)));
}

#[tokio::test(start_paused = true)]
async fn test_teardown_command_stops_loop_and_timers() {
    let (mut runtime, handle, _viewport) = mount(MotionPreference::NoPreference);
    assert_eq!(runtime.live_timers(), 3);

    handle.send(PageCommand::Teardown);
    assert!(!runtime.step().await);
    assert!(!runtime.is_running());
    assert_eq!(runtime.live_timers(), 0);

    // Nothing advances once torn down
    runtime.run_for(ms(10_000)).await;
    assert_eq!(runtime.page().hero.current(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_handle_reports_closed_page() {
    let (runtime, handle, _viewport) = mount(MotionPreference::NoPreference);

    assert!(handle.send(PageCommand::ToggleMenu));
    runtime.teardown();
    assert!(!handle.send(PageCommand::ToggleMenu));
}
