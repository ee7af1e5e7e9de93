use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use production_planner::config::Config;
use production_planner::model::ResourceUsage;
use production_planner::{Report, chart, form};

// Problem: a factory produces two products (A and B)
// Product A: 2 machine hours, 3 kg material per unit
// Product B: 4 machine hours, 2 kg material per unit
// Goal: choose integer quantities that maximize profit

#[derive(Parser)]
#[command(name = "production")]
#[command(about = "Optimal production mix under machine-hour and material limits", long_about = None)]
struct Cli {
    /// TOML file with default parameters, logging and output settings
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Profit per unit of product A
    #[arg(long)]
    profit_a: Option<f64>,
    /// Profit per unit of product B
    #[arg(long)]
    profit_b: Option<f64>,
    /// Machine hours available
    #[arg(long)]
    hours: Option<f64>,
    /// Material available (kg)
    #[arg(long)]
    material: Option<f64>,
    /// Prompt for the parameters
    #[arg(short, long)]
    interactive: bool,
    /// Where to write the chart
    #[arg(long, conflicts_with = "no_chart")]
    chart: Option<PathBuf>,
    /// Skip the chart
    #[arg(long)]
    no_chart: bool,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::default(),
    };
    config.logging.init();

    let mut params = config.parameters;
    if let Some(v) = cli.profit_a {
        params.profit_a = v;
    }
    if let Some(v) = cli.profit_b {
        params.profit_b = v;
    }
    if let Some(v) = cli.hours {
        params.hours_available = v;
    }
    if let Some(v) = cli.material {
        params.material_available = v;
    }
    if cli.interactive {
        params = form::prompt(&params)?;
    }
    params.validate()?;

    let result = production_planner::solve(&params)?;
    let report = Report::new(params, &result);

    match cli.format {
        Format::Text => print!("{report}"),
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    let chart_path = if cli.no_chart {
        None
    } else {
        cli.chart.or(config.output.chart)
    };
    if let (Some(path), Some(plan)) = (chart_path, result.plan()) {
        let hours = ResourceUsage::hours(&params, plan.qty_a, plan.qty_b);
        let material = ResourceUsage::material(&params, plan.qty_a, plan.qty_b);
        chart::save(&path, plan, &hours, &material)
            .with_context(|| format!("writing chart to {}", path.display()))?;
    }

    Ok(())
}
