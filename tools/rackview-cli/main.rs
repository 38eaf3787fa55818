use clap::Parser;
use rackview::config::ViewerConfig;
use rackview::interaction::InteractionBridge;
use rackview::model::{BranchSlot, StepPath};
use rackview::poll::{self, FileSource, HttpSource, Poller, SnapshotSlot, SnapshotSource};
use rackview::render::{RackView, TextCanvas};
use std::io::{self, Write};
use std::path::PathBuf;
use std::thread;

/// Terminal viewer for logic line racks
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Monitor endpoint serving the snapshot JSON
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Read snapshots from a file instead of the endpoint
    #[arg(short, long, conflicts_with = "endpoint")]
    file: Option<PathBuf>,

    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Delay between polls in milliseconds
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Keep polling and redraw after every interval
    #[arg(short, long)]
    watch: bool,

    /// Stop watching after this many redraws
    #[arg(long, requires = "watch")]
    count: Option<usize>,

    /// Print the input of a step, e.g. `line1:2` or `line1:1:bottom`
    #[arg(short, long, value_parser = parse_step_path, conflicts_with = "watch")]
    select: Option<StepPath>,

    /// Print one summary line per logic line instead of drawing boxes
    #[arg(long)]
    summary: bool,

    /// Hide input previews inside the boxes
    #[arg(long)]
    no_previews: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ViewerConfig::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load config: {}", e))),
        None => ViewerConfig::default(),
    };
    if let Some(endpoint) = &cli.endpoint {
        config.endpoint = endpoint.clone();
    }
    if let Some(interval_ms) = cli.interval_ms {
        config.interval_ms = interval_ms;
    }
    if cli.no_previews {
        config.show_previews = false;
    }
    config
        .validate()
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));

    let source: Box<dyn SnapshotSource> = match &cli.file {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(
            HttpSource::new(&config.endpoint)
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to create client: {}", e))),
        ),
    };

    if cli.watch {
        run_watch(&cli, &config, source);
    } else {
        run_once(&cli, &config, source);
    }
}

/// Fetches once, draws, and optionally prints the selected step.
fn run_once(cli: &Cli, config: &ViewerConfig, mut source: Box<dyn SnapshotSource>) {
    let slot = SnapshotSlot::new();
    poll::refresh(source.as_mut(), &slot);
    draw(cli, &config.canvas(), &slot);

    if let Some(path) = &cli.select {
        let Some(snapshot) = slot.current() else {
            exit_with_error("No snapshot available to select from");
        };
        let mut bridge = InteractionBridge::new();
        if !bridge.select_path(&snapshot, path) {
            exit_with_error(&format!("No step at '{}'", path));
        }
        if let Some(detail) = bridge.detail() {
            println!("\n--- {} ---", detail.step().name);
            println!("{}", detail.text());
        }
    }
}

/// Polls in the background and redraws after every interval.
fn run_watch(cli: &Cli, config: &ViewerConfig, source: Box<dyn SnapshotSource>) {
    let slot = SnapshotSlot::new();
    let poller = Poller::spawn(BoxedSource(source), config.interval(), slot.clone())
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to start poller: {}", e)));
    let canvas = config.canvas();

    let mut redraws = 0;
    loop {
        thread::sleep(config.interval());
        print!("\x1b[2J\x1b[H");
        draw(cli, &canvas, &slot);
        io::stdout().flush().ok();

        redraws += 1;
        if cli.count.is_some_and(|count| redraws >= count) {
            break;
        }
    }
    poller.join();
}

fn draw(cli: &Cli, canvas: &TextCanvas, slot: &SnapshotSlot) {
    let snapshot = slot.current();
    if cli.summary {
        match &snapshot {
            Some(snapshot) => println!("{}", snapshot),
            None => println!("{}", rackview::render::text::NO_DATA),
        }
        return;
    }
    let frame = RackView::render(snapshot.as_deref());
    print!("{}", canvas.draw(&frame));
}

struct BoxedSource(Box<dyn SnapshotSource>);

impl SnapshotSource for BoxedSource {
    fn fetch(&mut self) -> Result<rackview::model::Snapshot, rackview::error::PollError> {
        self.0.fetch()
    }
}

fn parse_step_path(raw: &str) -> Result<StepPath, String> {
    let mut parts = raw.rsplitn(3, ':').collect::<Vec<_>>();
    parts.reverse();
    let invalid = || format!("expected `line:index[:top|bottom]`, got '{}'", raw);
    match parts.as_slice() {
        [line, index] => Ok(StepPath::single(*line, index.parse().map_err(|_| invalid())?)),
        [line, index, slot] => {
            let slot = match *slot {
                "top" => BranchSlot::Top,
                "bottom" => BranchSlot::Bottom,
                _ => return Err(invalid()),
            };
            Ok(StepPath::member(
                *line,
                index.parse().map_err(|_| invalid())?,
                slot,
            ))
        }
        _ => Err(invalid()),
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
