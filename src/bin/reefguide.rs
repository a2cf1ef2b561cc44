use std::io::Write as _;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "reefguide", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print (or write) the default guide configuration as JSON.
    Config(ConfigArgs),
    /// Print the collapsing header values at a scroll offset.
    Header(HeaderArgs),
    /// Run the home screen on the simulated clock and print carousel changes as JSON lines.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct ConfigArgs {
    /// Output JSON path (stdout if omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct HeaderArgs {
    /// Vertical scroll offset in pixels.
    #[arg(long, allow_hyphen_values = true)]
    offset: f64,

    /// Platform whose collapsed header height applies.
    #[arg(long, value_enum, default_value_t = PlatformArg::Ios)]
    platform: PlatformArg,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Simulated run length in milliseconds.
    #[arg(long)]
    until: u64,

    /// Guide configuration JSON (built-in content if omitted).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Carousel touch window as `START:END` milliseconds. Repeatable.
    #[arg(long = "touch", value_parser = parse_touch)]
    touches: Vec<(u64, u64)>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PlatformArg {
    Ios,
    Android,
}

impl From<PlatformArg> for reefguide::Platform {
    fn from(p: PlatformArg) -> Self {
        match p {
            PlatformArg::Ios => Self::Ios,
            PlatformArg::Android => Self::Android,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "snake_case")]
enum Cause {
    Tick,
    TouchStart,
    TouchEnd,
}

#[derive(Debug, serde::Serialize)]
struct CarouselChange {
    at: u64,
    cause: Cause,
    active_slide: usize,
    scroll_x: Option<f64>,
}

fn parse_touch(s: &str) -> Result<(u64, u64), String> {
    let (start, end) = s
        .split_once(':')
        .ok_or_else(|| format!("expected START:END, got '{s}'"))?;
    let start: u64 = start
        .trim()
        .parse()
        .map_err(|e| format!("bad touch start '{start}': {e}"))?;
    let end: u64 = end
        .trim()
        .parse()
        .map_err(|e| format!("bad touch end '{end}': {e}"))?;
    if end < start {
        return Err(format!("touch ends before it starts: {start}:{end}"));
    }
    Ok((start, end))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Config(args) => cmd_config(args),
        Command::Header(args) => cmd_header(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    let json = reefguide::GuideConfig::default().to_json_pretty()?;
    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&out, json)
                .with_context(|| format!("write config '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_header(args: HeaderArgs) -> anyhow::Result<()> {
    let header = reefguide::HeaderInterpolator::for_platform(args.platform.into());
    let frame = header.frame(args.offset);
    println!("{}", serde_json::to_string(&frame)?);
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => reefguide::GuideConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => reefguide::GuideConfig::default(),
    };
    let mut home = reefguide::HomeScreen::headless(&config)?;
    let mut host = reefguide::ScrollLog::new();
    home.mount(reefguide::Millis::ZERO)?;

    let mut events: Vec<(u64, Cause)> = args
        .touches
        .iter()
        .flat_map(|&(start, end)| [(start, Cause::TouchStart), (end, Cause::TouchEnd)])
        .collect();
    events.sort_by_key(|&(at, _)| at);
    let mut events = events.into_iter().peekable();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut shown = home.carousel().active_index();
    let mut logged = 0;
    loop {
        let next_event = events.peek().map(|&(at, _)| at);
        let next_tick = home.next_timer_due().map(|m| m.0);
        let (at, cause) = match (next_event, next_tick) {
            (Some(e), tick) if e <= args.until && tick.is_none_or(|d| e <= d) => {
                let (at, cause) = events.next().context("touch event vanished")?;
                let now = reefguide::Millis(at);
                if cause == Cause::TouchStart {
                    home.touch_start(now, &mut host);
                } else {
                    home.touch_end(now, &mut host)?;
                }
                (e, cause)
            }
            (_, Some(d)) if d <= args.until => {
                home.advance_to(reefguide::Millis(d), &mut host);
                (d, Cause::Tick)
            }
            _ => break,
        };

        let active = home.carousel().active_index();
        let commands = host.commands();
        if active != shown || commands.len() != logged {
            let change = CarouselChange {
                at,
                cause,
                active_slide: active,
                scroll_x: commands.get(logged..).and_then(|c| c.last()).map(|c| c.x),
            };
            writeln!(out, "{}", serde_json::to_string(&change)?)?;
            shown = active;
            logged = commands.len();
        }
    }

    home.unmount(reefguide::Millis(args.until));
    Ok(())
}
