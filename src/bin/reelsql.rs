//! reelsql CLI - converts the pipe-delimited movie dataset into a SQL
//! initialization script.
//!
//! Reads `movies.txt`, `ratings.txt`, `tags.txt` and `users.txt` from the
//! dataset directory and writes `db_init.sql` to the working directory.

use clap::Parser;
use std::path::PathBuf;
use std::process;

use reelsql::{config, dataset, script, GeneratorConfig, REQUIRED_FILES};

#[derive(Parser)]
#[command(name = "reelsql")]
#[command(version, about = "Convert pipe-delimited dataset files into a SQL initialization script", long_about = None)]
struct Cli {
    /// Directory containing movies.txt, ratings.txt, tags.txt and users.txt
    #[arg(short, long, default_value = config::DATASET_DIR)]
    dataset: PathBuf,

    /// Path of the generated SQL script
    #[arg(short, long, default_value = config::OUTPUT_FILE)]
    output: PathBuf,
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    println!("Starting SQL script generation...");

    let config = GeneratorConfig {
        dataset_dir: cli.dataset,
        output_path: cli.output,
    };

    let ready = dataset::ensure_dataset_dir(&config.dataset_dir)
        .map_err(|e| format!("Failed to create dataset directory: {}", e))?;

    if !ready {
        println!(
            "  ⚠ Dataset directory '{}' not found. Creating it...",
            config.dataset_dir.display()
        );
        println!(
            "Please place your data files ({}) in '{}' and run again.",
            REQUIRED_FILES.join(", "),
            config.dataset_dir.display()
        );
        return Ok(());
    }

    let missing = dataset::missing_data_files(&config.dataset_dir);
    if !missing.is_empty() {
        println!("Error: Missing data files:");
        for name in &missing {
            println!("  - {}", name);
        }
        println!(
            "\nPlease make sure all data files are in '{}'",
            config.dataset_dir.display()
        );
        return Ok(());
    }

    println!("Reading data files...");
    let generated = script::generate_script(&config)
        .map_err(|e| format!("Error during SQL script generation: {}", e))?;

    println!("  ✓ movies: {} INSERT statements", generated.movie_inserts);
    println!("  ✓ users: {} INSERT statements", generated.user_inserts);
    println!("  ✓ ratings: {} INSERT statements", generated.rating_inserts);
    println!("  ✓ tags: {} INSERT statements", generated.tag_inserts);

    let line_count = script::write_script(&config.output_path, &generated.sql)
        .map_err(|e| format!("Failed to write {}: {}", config.output_path.display(), e))?;

    println!(
        "\nSQL script '{}' has been generated successfully!",
        config.output_path.display()
    );
    println!("Script contains {} lines", line_count);

    Ok(())
}
