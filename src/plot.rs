//! SVG plots of the condition function over the certified interval.

use std::path::{Path, PathBuf};

use plotters::prelude::*;
use rug::Float;
use thiserror::Error;
use tracing::warn;

use crate::condition::{ConditionError, Constants};
use crate::search::problem::PowerProblem;
use crate::search::switch::log_x_at_switch;
use crate::search::SearchReport;


/// Fixed diagnostic window of `log x`.
pub const DIAGNOSTIC_WINDOW : (f64, f64) = (3_000.0, 5_000.0); 
pub const DEFAULT_POINTS    : usize      = 200; 
const CANVAS                : (u32, u32) = (1024, 768); 


#[derive(Debug, Error)]
pub enum PlotError { 
    #[error(transparent)]
    Condition(#[from] ConditionError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("plot interval must satisfy lo < hi with at least 2 points. got [{lo}, {hi}] with {points}")]
    InvalidInterval { lo: f64, hi: f64, points: usize },

    #[error("drawing failed: {0}")]
    Drawing(String),
}

fn drawing<E: std::fmt::Display>(e: E) -> PlotError { 
    PlotError::Drawing(e.to_string())
}


/// `(y, R2(y))` at `points` evenly spaced `y` in `[lo, hi]`.
pub fn sample_condition(
    problem : &PowerProblem<'_>, 
    a       : &Float, 
    lo      : f64, 
    hi      : f64, 
    points  : usize, 
) -> Result<Vec<(f64, f64)>, PlotError> { 
    if !(lo < hi) || points < 2 { 
        return Err(PlotError::InvalidInterval { lo, hi, points });
    }
    let k    = problem.constants(); 
    let step = (hi - lo) / (points - 1) as f64; 

    (0..points)
        .map(|i| { 
            let y = if i + 1 == points { hi } else { lo + step * i as f64 }; 
            let r = problem.r2(&k.real(y), a)?; 
            Ok((y, r.to_f64()))
        })
        .collect()
}

/// Draws one `R2` curve into an SVG file.
pub fn render_series(path: &Path, title: &str, series: &[(f64, f64)]) -> Result<(), PlotError> { 
    let (Some(first), Some(last)) = (series.first(), series.last()) else { 
        return Err(PlotError::InvalidInterval { lo: 0.0, hi: 0.0, points: 0 });
    };

    let lo_r = series.iter().map(|p| p.1).fold(f64::INFINITY, f64::min); 
    let hi_r = series.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max); 
    let pad  = ((hi_r - lo_r) * 0.05).max(1e-3); 

    let root = SVGBackend::new(path, CANVAS).into_drawing_area(); 
    root.fill(&WHITE).map_err(drawing)?; 

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(first.0..last.0, (lo_r - pad)..(hi_r + pad))
        .map_err(drawing)?; 

    chart
        .configure_mesh()
        .x_desc("log x")
        .y_desc("R2")
        .draw()
        .map_err(drawing)?; 

    chart
        .draw_series(LineSeries::new(series.iter().copied(), &RED))
        .map_err(drawing)?; 

    root.present().map_err(drawing)?; 
    Ok(())
}

/// Plots R2 for the run's final parameter over `[order, y(a, switch)]` and 
/// over [`DIAGNOSTIC_WINDOW`]. Returns the written files.
pub fn render_report(
    dir    : &Path, 
    k      : &Constants, 
    report : &SearchReport, 
    points : usize, 
) -> Result<Vec<PathBuf>, PlotError> { 
    let Some(a) = report.final_parameter() else { 
        warn!(power = report.power, "no parameter to plot"); 
        return Ok(Vec::new());
    };
    std::fs::create_dir_all(dir)?; 

    let problem = PowerProblem::new(k, report.range, report.power); 
    let order   = report.range.order(); 
    let upper   = log_x_at_switch(k, a, &report.switch_points.vk_littlewood).to_f64(); 

    let windows = [
        ("r2_admissible.svg", order, upper), 
        ("r2_diagnostic.svg", DIAGNOSTIC_WINDOW.0, DIAGNOSTIC_WINDOW.1), 
    ];

    let mut written = Vec::with_capacity(windows.len()); 
    for (name, lo, hi) in windows { 
        let series = sample_condition(&problem, a, lo, hi, points)?; 
        let title  = format!("R2(y, {}, {:.10}, 3/5) on [{lo}, {hi:.0}]", report.power, a.to_f64()); 
        let path   = dir.join(name); 
        render_series(&path, &title, &series)?; 
        written.push(path); 
    }
    Ok(written)
}
