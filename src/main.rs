// FSK Events Platform - boots the local data store and reports its state

use fsk_events::{app_state::AppState, config::Config, views::AdminPanel};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize application state (seeds the store on first run)
    let app_state = AppState::new(config)?;

    let admin = AdminPanel::new(app_state.data.clone());
    let stats = admin.dashboard_stats();
    println!("🏫 FSK Events Platform store ready at {}", app_state.config.storage.data_dir);
    println!("  events:          {}", stats.events);
    println!("  registrations:   {}", stats.registrations);
    println!("  pending reviews: {}", stats.pending_reviews);

    Ok(())
}
