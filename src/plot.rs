//! Rendering of trajectory reports and potential-field contours.
//!
//! Presentation only: everything here consumes finished [`Trajectory`] and
//! [`PotentialGrid`] values and never feeds anything back into the solver.

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;

use crate::potential::PotentialGrid;
use crate::trajectory::Trajectory;

const MARGIN: i32 = 10;
const X_LABEL_AREA: i32 = 35;
const Y_LABEL_AREA: i32 = 55;

/// Render the three standard charts for one trajectory into a single PNG:
/// height over distance, speed over time, and both coordinates over time.
pub fn render_trajectory_report(
    trajectory: &Trajectory,
    path: &Path,
    width: u32,
    height: u32,
) -> Result<(), Box<dyn Error>> {
    if trajectory.is_empty() {
        return Err("cannot render an empty trajectory".into());
    }

    let path_str = path.to_str().ok_or("output path contains invalid UTF-8")?;
    let root = BitMapBackend::new(path_str, (width, height)).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((3, 1));

    let points = trajectory.points();
    let t_end = points.last().map_or(0.0, |p| p.time);

    // Panel 1: flight path.
    {
        let x_max = points.iter().map(|p| p.position.x).fold(0.0, f64::max);
        let y_max = points.iter().map(|p| p.position.y).fold(0.0, f64::max);
        let mut chart = ChartBuilder::on(&panels[0])
            .margin(MARGIN)
            .caption("Flight path", ("sans-serif", 20))
            .x_label_area_size(X_LABEL_AREA)
            .y_label_area_size(Y_LABEL_AREA)
            .build_cartesian_2d(padded(0.0, x_max), padded(0.0, y_max))?;
        chart
            .configure_mesh()
            .x_desc("Distance (m)")
            .y_desc("Height (m)")
            .draw()?;
        chart.draw_series(LineSeries::new(
            points.iter().map(|p| (p.position.x, p.position.y)),
            &BLUE,
        ))?;
    }

    // Panel 2: speed over time.
    {
        let v_max = points.iter().map(|p| p.speed()).fold(0.0, f64::max);
        let mut chart = ChartBuilder::on(&panels[1])
            .margin(MARGIN)
            .caption("Speed over time", ("sans-serif", 20))
            .x_label_area_size(X_LABEL_AREA)
            .y_label_area_size(Y_LABEL_AREA)
            .build_cartesian_2d(padded(0.0, t_end), padded(0.0, v_max))?;
        chart
            .configure_mesh()
            .x_desc("Time (s)")
            .y_desc("Speed (m/s)")
            .draw()?;
        chart.draw_series(LineSeries::new(
            points.iter().map(|p| (p.time, p.speed())),
            &GREEN,
        ))?;
    }

    // Panel 3: coordinates over time.
    {
        let coord_max = points
            .iter()
            .map(|p| p.position.x.max(p.position.y))
            .fold(0.0, f64::max);
        let mut chart = ChartBuilder::on(&panels[2])
            .margin(MARGIN)
            .caption("Coordinates over time", ("sans-serif", 20))
            .x_label_area_size(X_LABEL_AREA)
            .y_label_area_size(Y_LABEL_AREA)
            .build_cartesian_2d(padded(0.0, t_end), padded(0.0, coord_max))?;
        chart
            .configure_mesh()
            .x_desc("Time (s)")
            .y_desc("Coordinate (m)")
            .draw()?;
        chart
            .draw_series(LineSeries::new(
                points.iter().map(|p| (p.time, p.position.x)),
                &BLUE,
            ))?
            .label("x")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], BLUE));
        chart
            .draw_series(LineSeries::new(
                points.iter().map(|p| (p.time, p.position.y)),
                &RED,
            ))?
            .label("y")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], RED));
        chart
            .configure_series_labels()
            .border_style(BLACK)
            .background_style(WHITE.mix(0.8))
            .draw()?;
    }

    root.present()?;
    Ok(())
}

/// Render a filled contour (cell heat map) of a sampled potential field.
pub fn render_potential_contour(
    grid: &PotentialGrid,
    path: &Path,
    width: u32,
    height: u32,
) -> Result<(), Box<dyn Error>> {
    let path_str = path.to_str().ok_or("output path contains invalid UTF-8")?;
    let root = BitMapBackend::new(path_str, (width, height)).into_drawing_area();
    root.fill(&WHITE)?;

    let xs = grid.xs();
    let ys = grid.ys();
    let (x_first, x_last) = match (xs.first(), xs.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return Err("cannot render an empty grid".into()),
    };
    let (y_first, y_last) = match (ys.first(), ys.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return Err("cannot render an empty grid".into()),
    };
    let x_range = x_first..x_last;
    let y_range = y_first..y_last;

    let mut chart = ChartBuilder::on(&root)
        .margin(MARGIN)
        .caption(
            format!("Potential energy U(x, y), {} field", grid.kind()),
            ("sans-serif", 22),
        )
        .x_label_area_size(X_LABEL_AREA)
        .y_label_area_size(Y_LABEL_AREA)
        .build_cartesian_2d(x_range, y_range)?;
    chart.configure_mesh().x_desc("x").y_desc("y").draw()?;

    let span = grid.max_energy() - grid.min_energy();
    for j in 0..ys.len() - 1 {
        for i in 0..xs.len() - 1 {
            let u = grid.value(i, j);
            let t = if span.abs() < f64::EPSILON {
                0.0
            } else {
                (u - grid.min_energy()) / span
            };
            chart.draw_series(std::iter::once(Rectangle::new(
                [(xs[i], ys[j]), (xs[i + 1], ys[j + 1])],
                heat_color(t).filled(),
            )))?;
        }
    }

    root.present()?;
    Ok(())
}

// Three-stop gradient, dark blue through teal to yellow, normalized over [0, 1].
fn heat_color(t_in: f64) -> RGBColor {
    let t = t_in.clamp(0.0, 1.0);
    let lerp = |a: f64, b: f64, f: f64| a + (b - a) * f;
    let (r, g, b) = if t < 0.5 {
        let f = t * 2.0;
        (lerp(68.0, 33.0, f), lerp(1.0, 144.0, f), lerp(84.0, 140.0, f))
    } else {
        let f = (t - 0.5) * 2.0;
        (lerp(33.0, 253.0, f), lerp(144.0, 231.0, f), lerp(140.0, 37.0, f))
    };
    RGBColor(r as u8, g as u8, b as u8)
}

fn padded(min: f64, max: f64) -> std::ops::Range<f64> {
    let span = max - min;
    if span <= f64::EPSILON {
        min - 0.5..max + 0.5
    } else {
        min..max + span * 0.05
    }
}
