mod cli;
mod render;

use std::io;
use std::time::{Duration, Instant};

use anyhow::{ensure, Context, Result};
use clap::Parser;
use log::{debug, info};

use huefade_engine::logging::{init_logging, LoggingConfig};
use huefade_engine::time::FrameClock;
use huefade_ui::prelude::*;

use cli::Args;
use render::{HexDump, Renderer, TerminalRenderer};

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(LoggingConfig {
        env_filter: args.log.clone(),
        ..LoggingConfig::default()
    });

    if let Some(curve) = &args.bezier {
        ensure!(curve.len() == 4, "--bezier takes exactly four numbers, got {}", curve.len());
    }

    let palettes = [
        parse_stops(&args.from).context("invalid --from palette")?,
        parse_stops(&args.to).context("invalid --to palette")?,
    ];

    let animation = AnimationConfig::default()
        .duration_ms(args.duration_ms)
        .easing(args.easing())
        .accelerated(!args.no_accelerated);

    let mut view = GradientTransitionView::new(palettes[0].clone())?
        .animation(animation)
        .start(args.start)
        .end(args.end)
        .on_transition_end(|| debug!("transition settled"));
    if let Some(locations) = &args.locations {
        view = view.locations(locations.clone());
    }

    info!(
        "replaying {} toggles, {} ms transitions at {} fps",
        args.cycles, args.duration_ms, args.fps
    );

    let mut renderer: Box<dyn Renderer> = if args.headless {
        Box::new(HexDump::new(io::stdout().lock()))
    } else {
        Box::new(
            TerminalRenderer::new(io::stdout(), args.width, args.height)
                .context("failed to take over the terminal")?,
        )
    };

    let result = run(&args, &palettes, &mut view, renderer.as_mut());
    renderer.finish()?;
    result
}

/// Holds each palette for `--hold-ms`, toggling `--cycles` times.
///
/// Headless runs use simulated time so their output is reproducible.
fn run(
    args: &Args,
    palettes: &[Vec<StopValue>; 2],
    view: &mut GradientTransitionView,
    renderer: &mut dyn Renderer,
) -> Result<()> {
    let viewport = Vec2::new(f32::from(args.width), f32::from(args.height) * 2.0);
    let period = Duration::from_secs_f64(1.0 / f64::from(args.fps));
    let hold = Duration::from_millis(args.hold_ms);
    let total = hold.saturating_mul(args.cycles.saturating_add(1));

    let mut scene = UiScene::new();
    let mut clock = FrameClock::new();
    let base = Instant::now();
    clock.reset_at(base);

    let mut elapsed = Duration::ZERO;
    let mut next_toggle = hold;
    let mut toggles = 0;
    let mut showing = 0;

    while elapsed <= total {
        if elapsed >= next_toggle && toggles < args.cycles {
            showing ^= 1;
            toggles += 1;
            next_toggle = next_toggle.saturating_add(hold);
            view.set_colors(palettes[showing].clone())?;
            debug!("toggle {toggles}/{}: palette {showing}", args.cycles);
        }

        let frame = if args.headless {
            clock.tick_at(base + elapsed)
        } else {
            std::thread::sleep(period);
            clock.tick()
        };

        let draw_list = scene.frame(view, viewport, frame.dt);
        renderer.render(&frame, draw_list)?;

        elapsed = if args.headless {
            elapsed + period
        } else {
            frame.now.saturating_duration_since(base)
        };
    }

    Ok(())
}
