use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use swipe_core::{
    DeckController, GestureDecision, JsonDeckSource, StaticDeckSource, SwipeConfig, Viewport,
    DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH,
};

// Upper bound on frames per animation before the replay is declared stuck.
const MAX_FRAMES_PER_SWIPE: u32 = 10_000;

/// Replay scripted swipes through the deck and print what happened.
#[derive(Parser, Debug)]
#[command(name = "swipe-native", version)]
struct Args {
    /// Release dx for each swipe, comma separated (e.g. 200,50,-200)
    #[arg(
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        default_values_t = [200.0, 50.0, -200.0]
    )]
    swipes: Vec<f32>,

    /// Vertical displacement applied to every swipe
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    dy: f32,

    /// Move samples delivered before each release
    #[arg(long, default_value_t = 8)]
    samples: u32,

    /// Interaction tuning (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Deck as a JSON array of cards; defaults to the built-in profiles
    #[arg(long)]
    deck: Option<PathBuf>,

    /// Simulated frame interval in milliseconds
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,

    #[arg(long, default_value_t = DEFAULT_VIEWPORT_WIDTH)]
    width: f32,

    #[arg(long, default_value_t = DEFAULT_VIEWPORT_HEIGHT)]
    height: f32,
}

struct SwipeOutcome {
    card_id: String,
    decision: GestureDecision,
    frames: u32,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SwipeConfig::load(path)?,
        None => SwipeConfig::default(),
    };
    let viewport = Viewport::new(args.width, args.height);
    let mut deck = match &args.deck {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading deck {}", path.display()))?;
            DeckController::from_source(&JsonDeckSource::new(text), &config, viewport)?
        }
        None => DeckController::from_source(&StaticDeckSource, &config, viewport)?,
    };
    log::info!(
        "[native] viewport {:.0}x{:.0}, {} cards, threshold {:.0}",
        viewport.width(),
        viewport.height(),
        deck.len(),
        config.accept_threshold
    );

    let frame = Duration::from_millis(args.frame_ms.max(1));
    for &dx in &args.swipes {
        if deck.is_exhausted() {
            log::info!("[native] deck exhausted, skipping remaining swipes");
            break;
        }
        let outcome = replay_swipe(&mut deck, dx, args.dy, args.samples, frame)?;
        println!(
            "{:<8} {:>8.1} -> {:<7} ({} frames)",
            outcome.card_id,
            dx,
            format!("{:?}", outcome.decision),
            outcome.frames
        );
    }

    println!();
    println!("swiped: {}/{}", deck.current_index(), deck.len());
    for record in deck.history() {
        println!("  {} {:?}", record.card_id, record.decision);
    }
    match deck.current_card() {
        Some(card) => println!("next: {} - {}", card.title, card.description),
        None => println!("No More Profiles. Check back later for more!"),
    }
    Ok(())
}

fn replay_swipe(
    deck: &mut DeckController,
    dx: f32,
    dy: f32,
    samples: u32,
    frame: Duration,
) -> anyhow::Result<SwipeOutcome> {
    let card_id = deck
        .current_card()
        .map(|c| c.id.clone())
        .context("no current card")?;
    if !deck.on_gesture_start() {
        anyhow::bail!("gesture refused for card {card_id}");
    }
    let samples = samples.max(1);
    for i in 1..=samples {
        let f = i as f32 / samples as f32;
        if let Some(fb) = deck.on_gesture_move(dx * f, dy * f) {
            log::debug!(
                "[native] move dx={:.1} rot={:.2} like={:.2} nope={:.2}",
                dx * f,
                fb.rotation_degrees,
                fb.accept_opacity,
                fb.reject_opacity
            );
        }
    }
    let decision = deck
        .on_gesture_end(dx, dy)
        .context("release was not tracked")?;

    for frames in 1..=MAX_FRAMES_PER_SWIPE {
        if let Some(ev) = deck.tick(frame) {
            log::debug!("[native] {} settled: {:?}", card_id, ev);
            return Ok(SwipeOutcome {
                card_id,
                decision,
                frames,
            });
        }
    }
    deck.abort_animation();
    anyhow::bail!("animation for card {card_id} did not settle")
}
