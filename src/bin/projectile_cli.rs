use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use projectile_engine::{
    simulate, MotionParameters, PotentialGrid, PotentialKind, Trajectory,
};

#[derive(Parser)]
#[command(name = "projectile")]
#[command(version)]
#[command(about = "Projectile trajectory calculator with linear drag", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Integrate a trajectory and report the sampled motion
    Simulate {
        /// Initial speed (m/s); prompted for when omitted
        #[arg(short = 'v', long)]
        v0: Option<f64>,

        /// Launch angle (degrees, 0-90); prompted for when omitted
        #[arg(short = 'a', long)]
        angle: Option<f64>,

        /// Initial height (m); prompted for when omitted
        #[arg(long)]
        height: Option<f64>,

        /// Linear drag coefficient (1/s); prompted for when omitted
        #[arg(short = 'k', long)]
        drag: Option<f64>,

        /// Simulation horizon (s)
        #[arg(long, default_value = "10.0")]
        t_max: f64,

        /// Integration time step (s)
        #[arg(long, default_value = "0.01")]
        dt: f64,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,

        /// Print every sample instead of a decimated table
        #[arg(long)]
        full: bool,

        /// Write the trajectory/speed/coordinate charts to this PNG
        #[arg(long)]
        plot: Option<PathBuf>,
    },

    /// Evaluate a potential energy field over a square grid
    Potential {
        /// Field kind: elastic, gravity, or custom
        #[arg(short = 'f', long)]
        kind: String,

        /// Lower grid bound on both axes
        #[arg(long, default_value = "-10.0", allow_hyphen_values = true)]
        min: f64,

        /// Upper grid bound on both axes
        #[arg(long, default_value = "10.0")]
        max: f64,

        /// Samples per axis
        #[arg(short = 'n', long, default_value = "100")]
        resolution: usize,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,

        /// Write a filled contour of the field to this PNG
        #[arg(long)]
        plot: Option<PathBuf>,
    },

    /// Display engine information
    Info,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Debug, Serialize)]
struct SampleRow {
    time: f64,
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    speed: f64,
}

#[derive(Debug, Serialize)]
struct TrajectoryReport {
    v0: f64,
    angle_deg: f64,
    h0: f64,
    drag_k: f64,
    t_max: f64,
    dt: f64,
    sample_count: usize,
    range_m: f64,
    peak_height_m: f64,
    flight_time_s: f64,
    impact_speed_mps: f64,
    grounded: bool,
    trajectory: Vec<SampleRow>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            v0,
            angle,
            height,
            drag,
            t_max,
            dt,
            output,
            full,
            plot,
        } => run_simulate(v0, angle, height, drag, t_max, dt, output, full, plot),
        Commands::Potential {
            kind,
            min,
            max,
            resolution,
            output,
            plot,
        } => run_potential(&kind, min, max, resolution, output, plot),
        Commands::Info => {
            print_info();
            Ok(())
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn run_simulate(
    v0: Option<f64>,
    angle: Option<f64>,
    height: Option<f64>,
    drag: Option<f64>,
    t_max: f64,
    dt: f64,
    output: OutputFormat,
    full: bool,
    plot: Option<PathBuf>,
) -> anyhow::Result<()> {
    // Flags win; anything missing is collected interactively with
    // re-prompting until the value parses and is in range.
    let v0 = resolve(v0, "Initial speed (m/s): ", |v| v >= 0.0, "a number >= 0")?;
    let angle = resolve(
        angle,
        "Launch angle (degrees, 0-90): ",
        |v| (0.0..=90.0).contains(&v),
        "a number between 0 and 90",
    )?;
    let height = resolve(height, "Initial height (m): ", |v| v >= 0.0, "a number >= 0")?;
    let drag = resolve(
        drag,
        "Drag coefficient (1/s): ",
        |v| v >= 0.0,
        "a number >= 0",
    )?;

    let params = MotionParameters::new(v0, angle, height, drag, t_max, dt)?;
    let trajectory = simulate(&params);

    match output {
        OutputFormat::Table => print_trajectory_table(&params, &trajectory, full),
        OutputFormat::Json => {
            let report = build_report(&params, &trajectory);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Csv => print_trajectory_csv(&trajectory),
    }

    if let Some(path) = plot {
        projectile_engine::plot::render_trajectory_report(&trajectory, &path, 900, 1000)
            .map_err(|e| anyhow::anyhow!("failed to render trajectory plot: {e}"))?;
        eprintln!("Wrote trajectory charts to {}", path.display());
    }

    Ok(())
}

fn run_potential(
    kind: &str,
    min: f64,
    max: f64,
    resolution: usize,
    output: OutputFormat,
    plot: Option<PathBuf>,
) -> anyhow::Result<()> {
    let kind: PotentialKind = kind.parse()?;
    let grid = PotentialGrid::sample(kind, min, max, resolution)?;

    match output {
        OutputFormat::Table => {
            println!("POTENTIAL FIELD: {kind}");
            println!("  Window:      [{min}, {max}] x [{min}, {max}]");
            println!("  Resolution:  {resolution} x {resolution}");
            println!("  Energy min:  {:.4}", grid.min_energy());
            println!("  Energy max:  {:.4}", grid.max_energy());
        }
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct GridReport<'a> {
                kind: String,
                min: f64,
                max: f64,
                resolution: usize,
                min_energy: f64,
                max_energy: f64,
                xs: &'a [f64],
                ys: &'a [f64],
                values: Vec<Vec<f64>>,
            }
            let values = (0..grid.ys().len())
                .map(|j| (0..grid.xs().len()).map(|i| grid.value(i, j)).collect())
                .collect();
            let report = GridReport {
                kind: kind.to_string(),
                min,
                max,
                resolution,
                min_energy: grid.min_energy(),
                max_energy: grid.max_energy(),
                xs: grid.xs(),
                ys: grid.ys(),
                values,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Csv => {
            println!("x,y,energy");
            for (j, &y) in grid.ys().iter().enumerate() {
                for (i, &x) in grid.xs().iter().enumerate() {
                    println!("{x},{y},{}", grid.value(i, j));
                }
            }
        }
    }

    if let Some(path) = plot {
        projectile_engine::plot::render_potential_contour(&grid, &path, 800, 700)
            .map_err(|e| anyhow::anyhow!("failed to render contour plot: {e}"))?;
        eprintln!("Wrote potential contour to {}", path.display());
    }

    Ok(())
}

/// Take the flag value if present, otherwise prompt until the input parses
/// and satisfies the range check.
fn resolve(
    flag: Option<f64>,
    prompt: &str,
    in_range: impl Fn(f64) -> bool,
    expectation: &str,
) -> anyhow::Result<f64> {
    if let Some(value) = flag {
        return Ok(value);
    }

    loop {
        print!("{prompt}");
        io::stdout().flush().context("failed to flush stdout")?;

        let mut line = String::new();
        let bytes = io::stdin()
            .read_line(&mut line)
            .context("could not read input")?;
        if bytes == 0 {
            anyhow::bail!("input ended unexpectedly (EOF)");
        }

        match line.trim().parse::<f64>() {
            Ok(v) if v.is_finite() && in_range(v) => return Ok(v),
            _ => eprintln!("Please enter {expectation}."),
        }
    }
}

fn build_report(params: &MotionParameters, trajectory: &Trajectory) -> TrajectoryReport {
    let summary = trajectory.summary();
    TrajectoryReport {
        v0: params.v0(),
        angle_deg: params.angle_deg(),
        h0: params.h0(),
        drag_k: params.drag_k(),
        t_max: params.t_max(),
        dt: params.dt(),
        sample_count: summary.sample_count,
        range_m: summary.range,
        peak_height_m: summary.peak_height,
        flight_time_s: summary.flight_time,
        impact_speed_mps: summary.impact_speed,
        grounded: summary.grounded,
        trajectory: trajectory.points().iter().map(sample_row).collect(),
    }
}

fn sample_row(p: &projectile_engine::TrajectoryPoint) -> SampleRow {
    SampleRow {
        time: p.time,
        x: p.position.x,
        y: p.position.y,
        vx: p.velocity.x,
        vy: p.velocity.y,
        speed: p.speed(),
    }
}

fn print_trajectory_table(params: &MotionParameters, trajectory: &Trajectory, full: bool) {
    let summary = trajectory.summary();

    println!("TRAJECTORY SUMMARY");
    println!(
        "  Launch:        {:.2} m/s at {:.1} deg from {:.2} m",
        params.v0(),
        params.angle_deg(),
        params.h0()
    );
    println!("  Drag k:        {:.4} 1/s", params.drag_k());
    println!("  Range:         {:.3} m", summary.range);
    println!("  Peak height:   {:.3} m", summary.peak_height);
    println!("  Flight time:   {:.3} s", summary.flight_time);
    println!("  Impact speed:  {:.3} m/s", summary.impact_speed);
    println!(
        "  Samples:       {} ({})",
        summary.sample_count,
        if summary.grounded {
            "ground contact"
        } else {
            "horizon reached"
        }
    );
    println!();
    println!(
        "{:>8}  {:>10}  {:>10}  {:>10}  {:>10}  {:>10}",
        "t (s)", "x (m)", "y (m)", "vx (m/s)", "vy (m/s)", "v (m/s)"
    );

    // Roughly 20 evenly spaced rows unless every sample was asked for.
    let stride = if full {
        1
    } else {
        (trajectory.len() / 20).max(1)
    };
    for (i, p) in trajectory.points().iter().enumerate() {
        let is_last = i == trajectory.len() - 1;
        if i % stride != 0 && !is_last {
            continue;
        }
        println!(
            "{:>8.3}  {:>10.3}  {:>10.3}  {:>10.3}  {:>10.3}  {:>10.3}",
            p.time,
            p.position.x,
            p.position.y,
            p.velocity.x,
            p.velocity.y,
            p.speed()
        );
    }
}

fn print_trajectory_csv(trajectory: &Trajectory) {
    println!("time,x,y,vx,vy,speed");
    for p in trajectory.points() {
        println!(
            "{},{},{},{},{},{}",
            p.time,
            p.position.x,
            p.position.y,
            p.velocity.x,
            p.velocity.y,
            p.speed()
        );
    }
}

fn print_info() {
    println!("Projectile Engine v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Integrates point-mass motion under gravity and linear drag with");
    println!("fixed-step classical RK4, terminating on ground contact, and");
    println!("evaluates elastic / gravity / custom potential fields over a grid.");
    println!();
    println!("Commands:");
    println!("  simulate   Integrate a trajectory (interactive when flags are omitted)");
    println!("  potential  Sample a potential energy field");
    println!("  info       This message");
}
