use clap::Parser;
use rackview::model::{Branch, Element, InputKind, Line, Snapshot, Step};
use rand::{Rng, rngs::ThreadRng};
use serde_json::{Value, json};
use std::fs;

/// A CLI tool to generate sample snapshots for the rackview viewer
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_snapshot.json")]
    output: String,

    /// Number of lines in the rack
    #[arg(long, default_value_t = 5)]
    lines: usize,

    /// The minimum number of elements per line
    #[arg(long, default_value_t = 2)]
    min: usize,

    /// The maximum number of elements per line
    #[arg(long, default_value_t = 8)]
    max: usize,

    /// Probability that an element is a branch
    #[arg(long, default_value_t = 0.25)]
    branch_rate: f64,

    /// Probability that an evaluated step passes
    #[arg(long, default_value_t = 0.8)]
    pass_rate: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.min > cli.max {
        eprintln!(
            "Error: --min ({}) cannot be greater than --max ({})",
            cli.min, cli.max
        );
        std::process::exit(1);
    }
    for (flag, rate) in [("--branch-rate", cli.branch_rate), ("--pass-rate", cli.pass_rate)] {
        if !(0.0..=1.0).contains(&rate) {
            eprintln!("Error: {} ({}) must be between 0 and 1", flag, rate);
            std::process::exit(1);
        }
    }

    println!(
        "Generating {} line(s) with {} to {} elements each...",
        cli.lines, cli.min, cli.max
    );

    let snapshot = Snapshot::from_lines((0..cli.lines).map(|i| {
        let key = format!("line{}", i + 1);
        let line = generate_line(&mut rng, &key, &cli);
        println!("-> {}", line);
        (key, line)
    }));

    fs::write(&cli.output, snapshot.to_json_pretty()?)?;

    println!(
        "Successfully generated and saved snapshot to '{}'",
        cli.output
    );

    Ok(())
}

/// Simulates one run of a line: once the path is no longer live, later steps
/// are recorded as not passed and without input.
fn generate_line(rng: &mut ThreadRng, name: &str, cli: &Cli) -> Line {
    let count = rng.random_range(cli.min..=cli.max);
    let mut active = true;
    let steps = (0..count)
        .map(|idx| {
            let element = if rng.random_bool(cli.branch_rate) {
                let top = generate_step(rng, &format!("{}_{}a", name, idx), active, cli);
                let bottom = generate_step(rng, &format!("{}_{}b", name, idx), active, cli);
                Element::Branch(Branch::new(top, bottom))
            } else {
                Element::Single(generate_step(rng, &format!("{}_{}", name, idx), active, cli))
            };
            active = match &element {
                Element::Single(step) => step.passed,
                Element::Branch(branch) => branch.merged_passed(),
            };
            element
        })
        .collect();
    Line::new(name, steps)
}

fn generate_step(rng: &mut ThreadRng, name: &str, active: bool, cli: &Cli) -> Step {
    let external = rng.random_bool(0.3);
    let kind = if external {
        InputKind::External
    } else {
        InputKind::Flow
    };
    if !active {
        return Step::new(name, Value::Null, false).with_input_kind(kind);
    }
    Step::new(name, generate_input(rng), rng.random_bool(cli.pass_rate)).with_input_kind(kind)
}

/// Picks one of the input shapes a monitor can report.
fn generate_input(rng: &mut ThreadRng) -> Value {
    match rng.random_range(0..5) {
        0 => Value::Null,
        1 => json!(rng.random_range(0.0..400.0_f64).round() / 10.0),
        2 => json!({
            "temperature": rng.random_range(150..950),
            "voltage": rng.random_range(200..400),
        }),
        3 => json!({
            "sensor": format!("sensor-{}", rng.random_range(1..64)),
            "raw": rng.random_range(0u64..u64::MAX),
            "flags": [rng.random_bool(0.5), rng.random_bool(0.5)],
            "unit": "degC/10",
            "zone": rng.random_range(1..9),
        }),
        _ => json!([null, rng.random_range(0..100), {"ok": rng.random_bool(0.5)}]),
    }
}
