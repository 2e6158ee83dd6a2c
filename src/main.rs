use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use consecutive_powers::bertrand;
use consecutive_powers::condition::constants::DEFAULT_PRECISION;
use consecutive_powers::condition::Constants;
use consecutive_powers::plot;
use consecutive_powers::search::{self, config, Outcome, SearchCfg};


#[derive(Parser)]
#[command(name = "powers")]
#[command(author, version, about = "Check that primes lie between consecutive m-th powers")]
struct Cli { 
    /// The power m
    #[arg(short = 'm', long, env = "POWERS_M", default_value_t = config::DEFAULT_POWER)]
    power: f64,

    /// Range row: 0 for log x >= 10^3, 1 for log x >= 4*10^3
    #[arg(short, long, env = "POWERS_RANGE", default_value_t = 1)]
    range: usize,

    /// Largest log x the result must hold for
    #[arg(long, default_value_t = config::DEFAULT_Y0)]
    y0: f64,

    /// Number of sampled parameters between aLower and aUpper
    #[arg(long, default_value_t = config::DEFAULT_SAMPLES)]
    samples: usize,

    /// Working precision in bits
    #[arg(long, env = "POWERS_PRECISION", default_value_t = DEFAULT_PRECISION)]
    precision: u32,

    /// Cap on the 1e-8 scan for the lower end of the parameter range
    #[arg(long, default_value_t = config::DEFAULT_MAX_FINE_STEPS)]
    max_fine_steps: usize,

    /// Cap on the 1e-6 scan for the upper end of the parameter range
    #[arg(long, default_value_t = config::DEFAULT_MAX_COARSE_STEPS)]
    max_coarse_steps: usize,

    /// Directory for the SVG plots
    #[arg(long, default_value = "plots")]
    plot_dir: PathBuf,

    /// Points per plotted curve
    #[arg(long, default_value_t = plot::DEFAULT_POINTS)]
    plot_points: usize,

    /// Skip plotting
    #[arg(long)]
    no_plot: bool,
}

fn main() -> Result<()> { 
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let cfg = SearchCfg::new(cli.power)?
        .set_range(cli.range)?
        .set_y0(cli.y0)?
        .set_samples(cli.samples)?
        .set_precision(cli.precision)?
        .set_max_fine_steps(cli.max_fine_steps)?
        .set_max_coarse_steps(cli.max_coarse_steps)?;

    let k = Constants::new(cfg.precision());
    let report = search::run_with(&k, &cfg)
        .with_context(|| format!("search for m={} failed", cfg.power()))?;

    let switches = &report.switch_points;
    println!("V--K zf-region better than Littlewood at log(T)= {:.1}", switches.vk_littlewood.to_f64());
    println!("Littlewood zf-region better than classical at log(T)= {:.1}", switches.littlewood_refined.to_f64());

    for cover in bertrand::coverage(&k, cfg.power()) { 
        println!(
            "Bertrand interval covers the {} th powers interval from {} to e^ {:.3}",
            cfg.power(), cover.x0, cover.log_x_upper.to_f64()
        );
    }

    if let Outcome::NotPossible(reason) = &report.outcome { 
        warn!(%reason, "not certified");
    }
    println!("{}", report.verdict());

    if !cli.no_plot { 
        let written = plot::render_report(&cli.plot_dir, &k, &report, cli.plot_points)
            .context("plotting the condition function")?;
        for path in written { 
            info!(path = %path.display(), "plot written");
        }
    }

    Ok(())
}
