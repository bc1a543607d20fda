use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;

use catalog::{Catalog, Recommendation, SkinType};
use gateway::{InferenceClient, DEFAULT_MODEL_URL};
use interpreter::{interpret, LABEL_MAP};

/// SkinAI - skin analysis and recommendation tool
#[derive(Parser)]
#[command(name = "skinai")]
#[command(about = "Skin analysis using a hosted classification model", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a photo and print recommendations
    Analyze {
        /// Path to the image file to analyze
        #[arg(long)]
        image: PathBuf,

        /// Bearer credential for the model endpoint
        #[arg(long, env = "HUGGING_FACE_API_KEY", hide_env_values = true)]
        api_key: String,

        /// Model endpoint override
        #[arg(long, default_value = DEFAULT_MODEL_URL)]
        model_url: String,

        /// Show the raw scored labels alongside the recommendation
        #[arg(long)]
        raw: bool,
    },

    /// Print the recommendation bundle for a skin type (no network call)
    Recommend {
        /// Skin type: oily, dry, combination, or normal
        #[arg(long)]
        skin_type: String,
    },

    /// List the label-to-skin-type dictionary
    Labels,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            image,
            api_key,
            model_url,
            raw,
        } => handle_analyze(image, api_key, model_url, raw).await?,
        Commands::Recommend { skin_type } => handle_recommend(&skin_type)?,
        Commands::Labels => handle_labels(),
    }

    Ok(())
}

/// Handle the 'analyze' command
async fn handle_analyze(image: PathBuf, api_key: String, model_url: String, raw: bool) -> Result<()> {
    let bytes = std::fs::read(&image)
        .with_context(|| format!("Failed to read image file {}", image.display()))?;
    println!("Analyzing {} ({} bytes)...", image.display(), bytes.len());

    let start = Instant::now();
    let client = InferenceClient::new(model_url, api_key);
    let labels = client
        .submit_image(&bytes)
        .await
        .context("Inference request failed")?;
    println!("{} Model responded in {:?}", "✓".green(), start.elapsed());

    if raw {
        println!("{}", "Scored labels:".bold());
        for label in &labels {
            println!("  {} ({:.3})", label.label, label.score);
        }
    }

    let catalog = Catalog::new();
    let outcome = interpret(&labels, &catalog).context("Could not interpret model output")?;

    println!(
        "{} {} ({:.1}% confidence)",
        "Detected:".bold().blue(),
        outcome.top_label.label,
        outcome.top_label.score * 100.0
    );
    print_bundle(&outcome.recommendation);
    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(skin_type: &str) -> Result<()> {
    let skin_type: SkinType = skin_type.parse()?;
    let catalog = Catalog::new();
    print_bundle(catalog.get(skin_type));
    Ok(())
}

/// Handle the 'labels' command
fn handle_labels() {
    println!("{}", "Label dictionary:".bold().blue());
    for (label, skin_type) in LABEL_MAP {
        println!("  {:<14} → {}", label, skin_type.to_string().green());
    }
    println!("  {:<14} → {}", "<anything else>", "normal".green());
}

/// Print a recommendation bundle
fn print_bundle(bundle: &Recommendation) {
    println!(
        "{} {}",
        "Skin type:".bold().blue(),
        bundle.skin_type.to_string().green().bold()
    );

    let concerns = bundle
        .concerns
        .iter()
        .map(|c| format!("{c:?}").to_lowercase())
        .collect::<Vec<_>>()
        .join(", ");
    println!("{} {}", "Concerns:".bold(), concerns);

    println!("{}", "Morning routine:".bold());
    for (i, step) in bundle.routine.morning.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }

    println!("{}", "Evening routine:".bold());
    for (i, step) in bundle.routine.evening.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }

    println!("{}", "Products:".bold());
    println!("  {} Cleanser: {}", "•".cyan(), bundle.products.cleanser);
    println!("  {} Treatment: {}", "•".cyan(), bundle.products.treatment);
    println!("  {} Moisturizer: {}", "•".cyan(), bundle.products.moisturizer);
    println!("  {} Sunscreen: {}", "•".cyan(), bundle.products.sunscreen);

    println!("{}", "Tips:".bold());
    for tip in &bundle.tips {
        println!("  {} {}", "•".green(), tip);
    }
}
