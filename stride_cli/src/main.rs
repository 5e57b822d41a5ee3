use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use stride_core::{Result, Workout};

mod dispatch;

use dispatch::{decode_packet, SensorPacket};

#[derive(Parser)]
#[command(name = "stride")]
#[command(about = "Fitness metrics from raw sensor readings", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in sample packets through the pipeline (default)
    Demo,

    /// Compute summaries for packets read from a JSONL file
    Process {
        /// Path to a file with one JSON sensor packet per line
        #[arg(long)]
        input: PathBuf,
    },
}

/// Sample packets in the sensor feed format
const SAMPLE_PACKETS: &[(&str, &[f64])] = &[
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15000.0, 1.0, 75.0]),
    ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
];

fn main() -> Result<()> {
    // Initialize logging
    stride_core::logging::init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Process { input }) => cmd_process(&input),
        Some(Commands::Demo) | None => cmd_demo(),
    }
}

fn cmd_demo() -> Result<()> {
    for &(code, readings) in SAMPLE_PACKETS {
        let workout = decode_packet(code, readings)?;
        print_summary(&workout);
    }

    Ok(())
}

fn cmd_process(input: &Path) -> Result<()> {
    let file = File::open(input)?;
    let reader = BufReader::new(file);

    let mut count = 0usize;
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let packet: SensorPacket = serde_json::from_str(&line)?;
        let workout = packet.decode()?;
        print_summary(&workout);
        count += 1;
    }

    tracing::info!("Processed {} packets from {:?}", count, input);
    Ok(())
}

fn print_summary(workout: &Workout) {
    println!("{}", workout.report().summary());
}
