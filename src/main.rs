use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

use metacritic_charts::app::chart_use_case::ChartUseCase;
use metacritic_charts::config::{ChartVariant, ChartsConfig};
use metacritic_charts::constants;
use metacritic_charts::logging;
use metacritic_charts::pipeline::processing::filter::FilterReport;
use metacritic_charts::pipeline::JsonGameSource;
use metacritic_charts::render::color::format_score;
use metacritic_charts::render::SvgChartRenderer;

#[derive(Parser)]
#[command(name = "metacritic_charts")]
#[command(about = "Render Metacritic review-score charts as SVG")]
#[command(version = "0.1.0")]
struct Cli {
    /// Chart config file (default: charts.toml if present, else built-in variants)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Only log to the console, skip the JSON file log under logs/
    #[arg(long, global = true)]
    no_file_log: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load, filter and render one chart variant to SVG
    Render {
        /// Variant name. Built-in: bar, bubble
        #[arg(long, default_value = constants::BAR_VARIANT)]
        variant: String,
        /// Data file path or http(s) URL (overrides the variant's data setting)
        #[arg(long)]
        input: Option<String>,
        /// Output SVG file, or "-" for stdout (default: <variant>.svg)
        #[arg(long)]
        output: Option<String>,
    },
    /// Print the display set a variant would chart
    List {
        #[arg(long, default_value = constants::BAR_VARIANT)]
        variant: String,
        #[arg(long)]
        input: Option<String>,
        /// Print the games as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List configured chart variants
    Variants,
}

fn use_case() -> ChartUseCase {
    ChartUseCase::new(Arc::new(JsonGameSource::new()), Arc::new(SvgChartRenderer))
}

fn print_report(report: &FilterReport) {
    eprintln!("   Records loaded: {}", report.input);
    for count in &report.stages {
        eprintln!("   After {:<16} {}", count.stage, count.survivors);
    }
}

fn print_variant(variant: &ChartVariant) {
    println!("{} ({:?})", variant.name, variant.kind);
    println!("   Title: {}", variant.title);
    println!("   Data: {}", variant.data);
    println!("   Released after: {}", variant.cutoff_year);
    println!("   Publishers: {}", variant.publishers.len());
    match variant.min_user_reviews {
        Some(min) => println!("   User reviews: more than {}", min),
        None => println!("   User reviews: not filtered"),
    }
    if !variant.excluded_titles.is_empty() {
        println!("   Excluded: {}", variant.excluded_titles.join(", "));
    }
    println!("   Color by: {:?}", variant.color_by);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _log_guard = logging::init_logging(!cli.no_file_log);

    let config = ChartsConfig::load_or_builtin(cli.config.as_deref())?;

    match cli.command {
        Commands::Render {
            variant,
            input,
            output,
        } => {
            let variant = config.variant(&variant)?;
            let location = input.unwrap_or_else(|| variant.data.clone());
            let output = output.unwrap_or_else(|| format!("{}.svg", variant.name));

            eprintln!("📊 Rendering '{}' chart from {}", variant.name, location);
            let result = match use_case().run(variant, &location).await {
                Ok(result) => result,
                Err(e) => {
                    error!("Chart run failed: {}", e);
                    return Err(e.into());
                }
            };

            if output == "-" {
                print!("{}", result.svg);
            } else {
                tokio::fs::write(&output, &result.svg).await?;
                info!(output = %output, "Wrote chart");
            }

            eprintln!("\n📊 Chart results for {}:", result.variant);
            print_report(&result.report());
            eprintln!("   Displayed: {}", result.displayed);
            if output != "-" {
                eprintln!("   Output file: {}", output);
            }
        }
        Commands::List {
            variant,
            input,
            json,
        } => {
            let variant = config.variant(&variant)?;
            let location = input.unwrap_or_else(|| variant.data.clone());
            let (games, report) = use_case().display_set(variant, &location).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&games)?);
            } else {
                for (i, game) in games.iter().enumerate() {
                    println!(
                        "{:>3}. {} [{}] score {} released {} by {}",
                        i + 1,
                        game.display_name(),
                        game.platform.as_deref().unwrap_or("?"),
                        format_score(game.score),
                        game.release.as_deref().unwrap_or("?"),
                        game.publisher.as_deref().unwrap_or("?"),
                    );
                }
            }
            print_report(&report);
        }
        Commands::Variants => {
            for variant in &config.variants {
                print_variant(variant);
            }
        }
    }

    Ok(())
}
