use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use log::{error, info, warn};
use walkdir::WalkDir;

use sectionize::{Config, docx_to_text, extract_records, records_to_json};

#[derive(Parser)]
#[command(name = "sectionize")]
#[command(about = "Convert structured .docx documents to Section/Subsection JSON records")]
struct Cli {
    /// Input .docx file, or a directory walked recursively
    input: PathBuf,

    /// Output JSON file (single-file input only; defaults to input name with .json extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file (TOML)
    #[arg(short, long, default_value = "sectionize.toml")]
    config: PathBuf,

    /// Also write the intermediate normalized text next to each JSON file
    #[arg(long)]
    keep_text: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let config = Config::load(&cli.config);

    let inputs = collect_inputs(&cli.input);
    if inputs.is_empty() {
        eprintln!("No .docx documents found at {}", cli.input.display());
        std::process::exit(1);
    }
    if cli.output.is_some() && inputs.len() > 1 {
        warn!("--output ignored for directory input; writing next to each source file");
    }

    let mut failures = 0;
    for path in &inputs {
        let output = match (&cli.output, inputs.len()) {
            (Some(out), 1) => out.clone(),
            _ => path.with_extension("json"),
        };
        // One bad document must not take down the batch.
        if let Err(e) = convert_one(path, &output, &config, cli.keep_text) {
            error!("{}: {}", path.display(), e);
            failures += 1;
        }
    }

    let converted = inputs.len() - failures;
    println!("Converted {converted} of {} document(s)", inputs.len());
    if converted == 0 {
        std::process::exit(1);
    }
}

/// Find the documents to convert, skipping editor lock files (`~$...`).
fn collect_inputs(input: &Path) -> Vec<PathBuf> {
    if input.is_file() {
        return vec![input.to_path_buf()];
    }
    WalkDir::new(input)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("skipping unreadable entry: {e}");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| is_docx(path) && !is_lock_file(path))
        .collect()
}

fn is_docx(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("docx"))
}

fn is_lock_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with("~$"))
}

fn convert_one(
    path: &Path,
    output: &Path,
    config: &Config,
    keep_text: bool,
) -> sectionize::Result<()> {
    let text = docx_to_text(path, config)?;
    if keep_text {
        fs::write(output.with_extension("txt"), &text)?;
    }

    let records = extract_records(&text);
    let json = records_to_json(&records, config.pretty_json)?;
    fs::write(output, json)?;

    info!("wrote {} ({} records)", output.display(), records.len());
    Ok(())
}
