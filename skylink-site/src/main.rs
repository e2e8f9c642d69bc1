use std::time::Duration;

use skylink_booking::{Category, FieldUpdate};
use skylink_core::SiteConfig;
use skylink_reveal::MotionPreference;
use skylink_shared::{Rect, Section, ViewportEvent};
use skylink_site::{PageCommand, PageRuntime};
use tokio::sync::broadcast;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skylink_site=debug,skylink_booking=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SiteConfig::load()?;
    let today = chrono::Utc::now().date_naive();
    tracing::info!("Starting SkyLink preview for {}", today);

    let (viewport_tx, viewport_rx) = broadcast::channel(64);
    let (mut runtime, handle) =
        PageRuntime::mount(config, today, MotionPreference::NoPreference, viewport_rx);

    // Simulated desktop session
    viewport_tx.send(ViewportEvent::Resized { viewport_width: 1440, container_width: 1200 })?;
    viewport_tx.send(ViewportEvent::Layout {
        viewport: Rect::new(0.0, 0.0, 1440.0, 900.0),
        sections: vec![
            (Section::Hero, Rect::new(0.0, 0.0, 1440.0, 640.0)),
            (Section::Bundles, Rect::new(0.0, 640.0, 1440.0, 420.0)),
            (Section::Packages, Rect::new(0.0, 1060.0, 1440.0, 520.0)),
        ],
    })?;
    viewport_tx.send(ViewportEvent::Loaded)?;

    let commands = [
        PageCommand::SelectCategory(Category::Hotels),
        PageCommand::SetField(FieldUpdate::Destination("Lisbon".into())),
        PageCommand::SetField(FieldUpdate::CheckOut(Some(today + chrono::Duration::days(4)))),
        PageCommand::Submit,
        PageCommand::SetEmail("traveler@example.com".into()),
        PageCommand::Subscribe,
    ];
    for command in commands {
        handle.send(command);
    }

    runtime.run_for(Duration::from_millis(1200)).await;

    let view = runtime.view();
    println!("{}", serde_json::to_string_pretty(&view)?);

    runtime.teardown();
    Ok(())
}
