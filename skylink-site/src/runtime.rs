use std::time::Duration;

use chrono::NaiveDate;
use skylink_booking::{Category, FieldUpdate};
use skylink_core::timer::{self, TimerGuard};
use skylink_core::SiteConfig;
use skylink_reveal::MotionPreference;
use skylink_shared::{Key, Track, ViewportEvent};
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::sync::mpsc;
use tokio::time::Instant;

use crate::home::{HomePage, HomeView};
use crate::{SiteError, SiteResult};

/// User input forwarded by the host
#[derive(Debug, Clone)]
pub enum PageCommand {
    Key(Key),
    SelectCategory(Category),
    TabKey(Key),
    SetField(FieldUpdate),
    /// Raw `(name, value)` pair from a form input
    InputField { name: String, value: String },
    ToggleOptions,
    Submit,
    CarouselNext(Track),
    CarouselPrev(Track),
    CarouselGoto(Track, usize),
    TrackPointerEnter(Track),
    TrackPointerLeave(Track),
    HeadlinePointerEnter,
    HeadlinePointerLeave,
    HeadlineDot(usize),
    OpenHeroDialog,
    CloseHeroDialog,
    OpenAppDialog,
    CloseAppDialog,
    ToggleMenu,
    ToggleDropdown,
    SelectShopOption(String),
    PointerDown { inside_dropdown: bool },
    SetQuery(String),
    HoverNavItem(Option<String>),
    SetEmail(String),
    Subscribe,
    Teardown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerFired {
    SearchDone,
    ConfirmationExpired,
    LoaderFallback,
    LoaderExit,
    Autoplay(Track),
    HeadlineRotate,
}

#[derive(Debug, Clone)]
pub enum PageEvent {
    Command(PageCommand),
    Timer(TimerFired),
}

/// Host-side sender for user input
#[derive(Debug, Clone)]
pub struct PageHandle {
    tx: mpsc::UnboundedSender<PageEvent>,
}

impl PageHandle {
    /// Returns false once the page has been torn down.
    pub fn send(&self, command: PageCommand) -> bool {
        self.tx.send(PageEvent::Command(command)).is_ok()
    }
}

/// Every live timer of the page. Dropping this cancels all of them.
///
/// Interval timers only exist while their component is not paused; a pause
/// drops the guard and resuming arms a fresh one, so the first tick after a
/// resume is one full period away.
#[derive(Debug, Default)]
struct PageTimers {
    search: Option<TimerGuard>,
    confirmation: Option<TimerGuard>,
    loader: Option<TimerGuard>,
    headline: Option<TimerGuard>,
    packages_autoplay: Option<TimerGuard>,
    places_autoplay: Option<TimerGuard>,
}

impl PageTimers {
    fn autoplay_mut(&mut self, track: Track) -> &mut Option<TimerGuard> {
        match track {
            Track::Packages => &mut self.packages_autoplay,
            Track::Places => &mut self.places_autoplay,
        }
    }

    fn live_count(&self) -> usize {
        [
            &self.search,
            &self.confirmation,
            &self.loader,
            &self.headline,
            &self.packages_autoplay,
            &self.places_autoplay,
        ]
        .into_iter()
        .flatten()
        .filter(|t| !t.is_finished())
        .count()
    }
}

enum Incoming {
    Page(Option<PageEvent>),
    Viewport(Result<ViewportEvent, RecvError>),
}

/// Single-threaded event loop for one mounted home page.
///
/// Owns the page state, the viewport subscription and every timer; input,
/// viewport events and timer firings are applied one at a time.
#[derive(Debug)]
pub struct PageRuntime {
    config: SiteConfig,
    page: HomePage,
    timers: PageTimers,
    tx: mpsc::UnboundedSender<PageEvent>,
    rx: mpsc::UnboundedReceiver<PageEvent>,
    viewport: Option<broadcast::Receiver<ViewportEvent>>,
    running: bool,
}

impl PageRuntime {
    /// Mount the page. Must be called inside a tokio runtime.
    pub fn mount(
        config: SiteConfig,
        today: NaiveDate,
        motion: MotionPreference,
        viewport: broadcast::Receiver<ViewportEvent>,
    ) -> (Self, PageHandle) {
        let (tx, rx) = mpsc::unbounded_channel();
        let page = HomePage::new(&config, today, motion);

        let timers = PageTimers {
            loader: Some(timer::after(
                "loader_fallback",
                config.loader.fallback(),
                tx.clone(),
                PageEvent::Timer(TimerFired::LoaderFallback),
            )),
            ..PageTimers::default()
        };

        tracing::info!(%today, ?motion, "home page mounted");

        let handle = PageHandle { tx: tx.clone() };
        let mut runtime = Self {
            config,
            page,
            timers,
            tx,
            rx,
            viewport: Some(viewport),
            running: true,
        };
        runtime.sync_interval_timers();
        (runtime, handle)
    }

    pub fn page(&self) -> &HomePage {
        &self.page
    }

    pub fn view(&self) -> HomeView {
        self.page.view()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn live_timers(&self) -> usize {
        self.timers.live_count()
    }

    /// Wait for the next event and apply it. Returns false after teardown.
    pub async fn step(&mut self) -> bool {
        if !self.running {
            return false;
        }

        let listening = self.viewport.is_some();
        let incoming = tokio::select! {
            event = self.rx.recv() => Incoming::Page(event),
            event = recv_viewport(&mut self.viewport), if listening => Incoming::Viewport(event),
        };

        match incoming {
            Incoming::Page(Some(PageEvent::Command(PageCommand::Teardown)))
            | Incoming::Page(None) => {
                self.shutdown();
            }
            Incoming::Page(Some(PageEvent::Command(command))) => {
                if let Err(e) = self.dispatch(command) {
                    tracing::debug!("command rejected: {}", e);
                }
            }
            Incoming::Page(Some(PageEvent::Timer(fired))) => self.on_timer(fired),
            Incoming::Viewport(Ok(event)) => self.on_viewport(event),
            Incoming::Viewport(Err(RecvError::Lagged(skipped))) => {
                tracing::warn!(skipped, "viewport events dropped");
            }
            Incoming::Viewport(Err(RecvError::Closed)) => {
                tracing::debug!("viewport stream closed");
                self.viewport = None;
            }
        }

        self.running
    }

    /// Process events until `duration` has passed or the page is torn down.
    pub async fn run_for(&mut self, duration: Duration) {
        let deadline = Instant::now() + duration;
        while let Ok(true) = tokio::time::timeout_at(deadline, self.step()).await {}
    }

    /// Process events until teardown.
    pub async fn run(mut self) {
        while self.step().await {}
    }

    /// Release every timer and the viewport subscription.
    pub fn teardown(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if !self.running {
            return;
        }
        tracing::info!(live_timers = self.timers.live_count(), "tearing down home page");
        self.timers = PageTimers::default();
        self.viewport = None;
        self.running = false;
    }

    fn arm_once(&self, name: &'static str, delay: Duration, fired: TimerFired) -> TimerGuard {
        timer::after(name, delay, self.tx.clone(), PageEvent::Timer(fired))
    }

    /// Apply one user command synchronously.
    pub fn dispatch(&mut self, command: PageCommand) -> SiteResult<()> {
        let page = &mut self.page;

        match command {
            PageCommand::Key(key) => page.on_key(key),
            PageCommand::SelectCategory(category) => page.booking.select_category(category),
            PageCommand::TabKey(key) => page.booking.on_tab_key(key),
            PageCommand::SetField(update) => page.booking.set_field(update)?,
            PageCommand::InputField { name, value } => {
                page.booking.set_field(FieldUpdate::from_input(&name, &value)?)?
            }
            PageCommand::ToggleOptions => page.booking.toggle_options(),
            PageCommand::Submit => {
                page.booking.submit()?;
                let delay = self.config.booking.search_delay();
                self.timers.search =
                    Some(self.arm_once("search_delay", delay, TimerFired::SearchDone));
            }
            PageCommand::CarouselNext(track) => {
                page.track_mut(track).next();
            }
            PageCommand::CarouselPrev(track) => {
                page.track_mut(track).prev();
            }
            PageCommand::CarouselGoto(track, index) => {
                page.track_mut(track).goto(index);
            }
            PageCommand::TrackPointerEnter(track) => page.track_mut(track).pointer_enter(),
            PageCommand::TrackPointerLeave(track) => page.track_mut(track).pointer_leave(),
            PageCommand::HeadlinePointerEnter => page.hero.pointer_enter(),
            PageCommand::HeadlinePointerLeave => page.hero.pointer_leave(),
            PageCommand::HeadlineDot(index) => page.hero.go_to(index),
            PageCommand::OpenHeroDialog => page.open_hero_dialog(),
            PageCommand::CloseHeroDialog => page.close_hero_dialog(),
            PageCommand::OpenAppDialog => page.app_dialog.open(),
            PageCommand::CloseAppDialog => page.app_dialog.close(),
            PageCommand::ToggleMenu => page.navbar.toggle_menu(),
            PageCommand::ToggleDropdown => page.navbar.toggle_dropdown(),
            PageCommand::SelectShopOption(option) => {
                if !page.navbar.select_option(&option) {
                    return Err(SiteError::UnknownOption(option));
                }
            }
            PageCommand::PointerDown { inside_dropdown } => {
                page.navbar.pointer_down(inside_dropdown)
            }
            PageCommand::SetQuery(query) => page.navbar.set_query(query),
            PageCommand::HoverNavItem(item) => page.navbar.hover(item.as_deref()),
            PageCommand::SetEmail(email) => page.footer.newsletter.set_email(email),
            PageCommand::Subscribe => {
                page.footer.newsletter.subscribe()?;
                let delay = self.config.newsletter.confirmation();
                // Replacing the guard restarts the confirmation window
                self.timers.confirmation = Some(self.arm_once(
                    "newsletter_confirmation",
                    delay,
                    TimerFired::ConfirmationExpired,
                ));
            }
            PageCommand::Teardown => self.shutdown(),
        }

        self.sync_interval_timers();
        Ok(())
    }

    /// Drop the interval timers of paused components and arm fresh ones for
    /// components that are running again.
    fn sync_interval_timers(&mut self) {
        if !self.running {
            return;
        }

        let rotate = (!self.page.hero.is_paused()).then(|| self.config.hero.rotate_interval());
        if let Some(guard) = sync_interval(
            &mut self.timers.headline,
            rotate,
            "headline_rotate",
            &self.tx,
            TimerFired::HeadlineRotate,
        ) {
            tracing::debug!(timer = guard, "headline rotation toggled");
        }

        for track in [Track::Packages, Track::Places] {
            let carousel = self.page.track(track);
            let period = carousel.autoplay_interval().filter(|_| !carousel.view().paused);
            if let Some(guard) = sync_interval(
                self.timers.autoplay_mut(track),
                period,
                "carousel_autoplay",
                &self.tx,
                TimerFired::Autoplay(track),
            ) {
                tracing::debug!(timer = guard, ?track, "autoplay toggled");
            }
        }
    }

    fn on_timer(&mut self, fired: TimerFired) {
        match fired {
            TimerFired::SearchDone => {
                self.timers.search = None;
                if let Err(e) = self.page.booking.complete_search() {
                    tracing::warn!("search timer fired with no search running: {}", e);
                }
            }
            TimerFired::ConfirmationExpired => {
                self.timers.confirmation = None;
                self.page.footer.newsletter.expire_confirmation();
            }
            TimerFired::LoaderFallback => self.loader_ready(),
            TimerFired::LoaderExit => {
                self.timers.loader = None;
                self.page.loader.hide();
            }
            TimerFired::Autoplay(track) => {
                self.page.track_mut(track).autoplay_tick();
            }
            TimerFired::HeadlineRotate => {
                self.page.hero.tick();
            }
        }
    }

    fn loader_ready(&mut self) {
        if self.page.loader.mark_ready() {
            let delay = self.config.loader.exit_delay();
            // Replaces (and cancels) the fallback timer
            self.timers.loader = Some(self.arm_once("loader_exit", delay, TimerFired::LoaderExit));
        }
    }

    /// Apply one host viewport event synchronously.
    pub fn on_viewport(&mut self, event: ViewportEvent) {
        match event {
            ViewportEvent::Resized { viewport_width, container_width } => {
                self.page.resize(viewport_width, container_width);
            }
            ViewportEvent::TrackScrolled { track, offset } => {
                self.page.track_mut(track).on_manual_scroll(offset);
            }
            ViewportEvent::Layout { viewport, sections } => {
                if self.page.reveal.is_observing() {
                    let revealed = self.page.reveal.observe_layout(&viewport, &sections);
                    if !revealed.is_empty() {
                        tracing::debug!(?revealed, "sections revealed");
                    }
                }
            }
            ViewportEvent::Loaded => self.loader_ready(),
        }
    }
}

/// Make `slot` hold an interval timer exactly when `period` is set. Returns
/// the timer name when the slot changed.
fn sync_interval(
    slot: &mut Option<TimerGuard>,
    period: Option<Duration>,
    name: &'static str,
    tx: &mpsc::UnboundedSender<PageEvent>,
    fired: TimerFired,
) -> Option<&'static str> {
    match (period, slot.is_some()) {
        (Some(period), false) => {
            *slot = Some(timer::every(name, period, tx.clone(), PageEvent::Timer(fired)));
            Some(name)
        }
        (None, true) => {
            *slot = None;
            Some(name)
        }
        _ => None,
    }
}

async fn recv_viewport(
    viewport: &mut Option<broadcast::Receiver<ViewportEvent>>,
) -> Result<ViewportEvent, RecvError> {
    match viewport {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}
