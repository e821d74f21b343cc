//! telemetry-plot: render ASCII charts from a slipstream telemetry export.
//!
//! Usage:
//!   telemetry-plot <telemetry.json>
//!
//! Pure consumer: reads the JSON series the app wrote and draws position,
//! speed and drag over time. Never touches the simulation.

use std::fs;
use std::process;

use serde::Deserialize;

use slipstream_core::telemetry::TelemetrySample;

const PLOT_WIDTH: usize = 60;
const PLOT_HEIGHT: usize = 20;

/// One exported series, as written by the slipstream binary.
#[derive(Debug, Deserialize)]
struct TelemetryExport {
    vehicle: u32,
    samples: Vec<TelemetrySample>,
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() != 2 || args[1] == "--help" || args[1] == "-h" {
        eprintln!("Usage: telemetry-plot <telemetry.json>");
        process::exit(if args.len() == 2 { 0 } else { 1 });
    }

    let text = match fs::read_to_string(&args[1]) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error reading {}: {e}", args[1]);
            process::exit(1);
        }
    };

    let exports: Vec<TelemetryExport> = match serde_json::from_str(&text) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Error parsing {}: {e}", args[1]);
            process::exit(1);
        }
    };

    if exports.is_empty() {
        eprintln!("No telemetry series in {}", args[1]);
        process::exit(1);
    }

    for export in &exports {
        if export.samples.is_empty() {
            eprintln!("Vehicle {}: no samples recorded", export.vehicle);
            continue;
        }

        println!("=== Vehicle {} ({} samples) ===", export.vehicle, export.samples.len());

        let time: Vec<f64> = export.samples.iter().map(|s| s.elapsed_secs).collect();
        let position: Vec<f64> = export.samples.iter().map(|s| s.position_x).collect();
        let speed_kmh: Vec<f64> = export.samples.iter().map(|s| s.speed * 3.6).collect();
        let drag: Vec<f64> = export.samples.iter().map(|s| s.drag_force).collect();

        plot_graph(&time, &position, "POSITION", "time (s)", "position (m)");
        plot_graph(&time, &speed_kmh, "SPEED", "time (s)", "speed (km/h)");
        plot_graph(&time, &drag, "AERODYNAMIC DRAG", "time (s)", "force (N)");
    }
}

/// Draw one series as a fixed-size ASCII grid with axes.
fn plot_graph(x: &[f64], y: &[f64], title: &str, xlabel: &str, ylabel: &str) {
    if x.is_empty() || y.is_empty() {
        return;
    }

    let min_x = x.iter().copied().fold(f64::INFINITY, f64::min);
    let max_x = x.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min_y = y.iter().copied().fold(f64::INFINITY, f64::min).min(0.0);
    // Headroom above the curve.
    let max_y = y.iter().copied().fold(f64::NEG_INFINITY, f64::max) * 1.1;

    let x_span = (max_x - min_x).max(f64::EPSILON);
    let y_span = (max_y - min_y).max(f64::EPSILON);

    println!("\n{title}");
    println!("{}", "=".repeat(title.len()));

    let mut grid = vec![vec![' '; PLOT_WIDTH]; PLOT_HEIGHT];

    // Axes: X along the zero line, Y along the left edge.
    let zero_row = PLOT_HEIGHT
        .saturating_sub(1)
        .min((((0.0 - min_y) / y_span) * (PLOT_HEIGHT - 1) as f64) as usize);
    for cell in grid[PLOT_HEIGHT - 1 - zero_row].iter_mut() {
        *cell = '-';
    }
    for row in grid.iter_mut() {
        row[0] = '|';
    }
    grid[PLOT_HEIGHT - 1 - zero_row][0] = '+';

    for (&xi, &yi) in x.iter().zip(y) {
        let col = (((xi - min_x) / x_span) * (PLOT_WIDTH - 1) as f64) as usize;
        let row = (((yi - min_y) / y_span) * (PLOT_HEIGHT - 1) as f64) as usize;
        let col = col.min(PLOT_WIDTH - 1);
        let row = row.min(PLOT_HEIGHT - 1);
        grid[PLOT_HEIGHT - 1 - row][col] = '*';
    }

    for row in &grid {
        let line: String = row.iter().collect();
        println!(" {line}");
    }
    println!(" {}^", " ".repeat(PLOT_WIDTH));
    println!(" {}| {} (max: {:.1})", " ".repeat(PLOT_WIDTH), ylabel, max_y);
    println!(" +{}> {} ({:.0}-{:.0} s)", "-".repeat(PLOT_WIDTH - 1), xlabel, min_x, max_x);
    println!();
}
