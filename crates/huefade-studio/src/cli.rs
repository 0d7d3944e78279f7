use clap::{Parser, ValueEnum};

use huefade_engine::coords::Vec2;
use huefade_ui::animation::Easing;

/// Toggles a gradient between two palettes, animating every switch.
#[derive(Debug, Parser)]
#[command(name = "huefade-studio", version)]
pub struct Args {
    /// Stops shown first: hex colors or channel values in [0, 1].
    #[arg(long, value_delimiter = ',', default_values = ["#2b32b2", "#1488cc"])]
    pub from: Vec<String>,

    /// Stops toggled to.
    #[arg(long, value_delimiter = ',', default_values = ["#F37144", "#F0A148"])]
    pub to: Vec<String>,

    /// Transition duration in milliseconds.
    #[arg(long, default_value_t = 500)]
    pub duration_ms: u64,

    #[arg(long, value_enum, default_value_t = EasingArg::Linear)]
    pub easing: EasingArg,

    /// Custom curve `x1,y1,x2,y2`; overrides `--easing`.
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub bezier: Option<Vec<f32>>,

    /// Gradient start as a unit point `x,y`.
    #[arg(long, value_parser = parse_point, default_value = "0.5,0")]
    pub start: Vec2,

    /// Gradient end as a unit point `x,y`.
    #[arg(long, value_parser = parse_point, default_value = "0.5,1")]
    pub end: Vec2,

    /// Stop positions in [0, 1], one per stop.
    #[arg(long, value_delimiter = ',')]
    pub locations: Option<Vec<f32>>,

    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub fps: u32,

    /// Time each palette is held before toggling, in milliseconds.
    #[arg(long, default_value_t = 1500, value_parser = clap::value_parser!(u64).range(0..=3_600_000))]
    pub hold_ms: u64,

    /// Number of palette toggles before exiting.
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(0..=10_000))]
    pub cycles: u32,

    /// Width in terminal columns.
    #[arg(long, default_value_t = 40)]
    pub width: u16,

    /// Height in terminal rows (each row shows two pixels).
    #[arg(long, default_value_t = 20)]
    pub height: u16,

    /// Repaint every frame instead of only when the gradient changed.
    #[arg(long)]
    pub no_accelerated: bool,

    /// Print stop colors per frame on simulated time instead of drawing.
    #[arg(long)]
    pub headless: bool,

    /// Log filter, `env_logger` syntax (defaults to `RUST_LOG`, then `info`).
    #[arg(long)]
    pub log: Option<String>,
}

#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum EasingArg {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl From<EasingArg> for Easing {
    fn from(arg: EasingArg) -> Self {
        match arg {
            EasingArg::Linear => Easing::Linear,
            EasingArg::EaseIn => Easing::EaseIn,
            EasingArg::EaseOut => Easing::EaseOut,
            EasingArg::EaseInOut => Easing::EaseInOut,
        }
    }
}

impl Args {
    pub fn easing(&self) -> Easing {
        match self.bezier.as_deref() {
            Some(&[x1, y1, x2, y2]) => Easing::CubicBezier(x1, y1, x2, y2),
            _ => self.easing.into(),
        }
    }
}

fn parse_point(s: &str) -> Result<Vec2, String> {
    let (x, y) = s.split_once(',').ok_or_else(|| format!("expected `x,y`, got {s:?}"))?;
    let coord = |v: &str| v.trim().parse::<f32>().map_err(|e| format!("{v:?}: {e}"));
    Ok(Vec2::new(coord(x)?, coord(y)?))
}
