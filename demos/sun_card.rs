use sun_card::{ActiveView, CardConfig, DayProgressTicker, SunCard, SystemClock};

#[tokio::main(flavor = "current_thread")]
async fn main() -> sun_card::Result<()> {
    let config = CardConfig::load(None)?;
    let mut card = SunCard::from_config(&config, &SystemClock)?;

    let city = std::env::args().nth(1).unwrap_or_default();
    card.search(city);

    for view in [ActiveView::Sunrise, ActiveView::Sunset] {
        card.select_view(view);
        let theme = card.theme();

        println!("=== Daily Sun Times: {} ===", card.current_location());
        println!("--- {} ({}) ---", view.label(), theme.accent.from.to_hex());
        println!("{}  {}", card.featured_time(), card.tagline());
        println!("First light: {}", card.first_light()?);
        println!("Last light: {}", card.last_light()?);
        println!(
            "Day length: {}, {} {}°F, moon: {}",
            card.record().day_length,
            card.record().weather,
            card.record().temperature,
            card.record().moon_phase
        );
        println!("Suggested activities:");
        for activity in card.activities() {
            println!("  {:<20} {}", activity.name, activity.description);
        }
        println!();
    }

    let (ticker, mut states) =
        DayProgressTicker::start(SystemClock, config.tick_interval(), config.time_format)?;
    for _ in 0..3 {
        let Some(state) = states.recv().await else {
            break;
        };
        card.apply_progress(state);
        let progress = card.progress();
        println!(
            "[{:<50}] {:>2}%  {}  Last updated: {}",
            "#".repeat(progress.progress_percent as usize / 2),
            progress.progress_percent,
            card.status_label(),
            progress.current_time_label
        );
    }
    ticker.stop().await;

    Ok(())
}
