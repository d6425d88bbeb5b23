//! Render the static charts and print the count table to stdout.

use std::path::PathBuf;

use agreemap::analysis::{aggregate_counts, count_with_label};
use agreemap::chart::{render_bars, render_scatter};
use agreemap::config;
use agreemap::dataset::{self, discover};

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

#[derive(Debug, Clone)]
struct CliOptions {
    data: Option<PathBuf>,
    out_dir: PathBuf,
    width: u32,
    height: u32,
}

fn run() -> Result<(), String> {
    let options = parse_args(std::env::args().skip(1).collect())?;
    let config = config::load_or_default().map_err(|err| err.to_string())?;

    let data_path = match options.data {
        Some(path) => path,
        None => {
            let root = config
                .dataset
                .search_root
                .clone()
                .or_else(discover::default_search_root)
                .ok_or_else(|| "no home directory available to search".to_string())?;
            discover::find_dataset(&root, &config.dataset.file_name).ok_or_else(|| {
                format!(
                    "dataset file `{}` not found under {}",
                    config.dataset.file_name,
                    root.display()
                )
            })?
        }
    };
    println!("dataset: {}", data_path.display());

    let records =
        dataset::load_records(&data_path, &config.dataset).map_err(|err| err.to_string())?;
    let classifier_ids = config.dataset.classifier_ids();
    let labels = config
        .display
        .label_order
        .clone()
        .unwrap_or_else(|| dataset::distinct_labels(&records));
    let highlight = &config.display.highlight_label;

    let report = aggregate_counts(&records, &classifier_ids, &labels);
    println!();
    println!("records: {}", records.len());
    for label in &labels {
        let total = count_with_label(&records, label);
        println!(
            "class {:<12} total={:<5} all_correct={}",
            label,
            total,
            report.all_correct(label)
        );
        for classifier in &classifier_ids {
            let adjusted = report
                .adjusted(label, classifier)
                .map_err(|err| err.to_string())?;
            println!(
                "  classifier {:<4} correct={:<5} exclusive={}",
                classifier,
                report.correct(label, classifier),
                adjusted
            );
        }
    }

    std::fs::create_dir_all(&options.out_dir)
        .map_err(|err| format!("create {} failed: {err}", options.out_dir.display()))?;
    let scatter_path = options.out_dir.join("scatter.png");
    let bars_path = options.out_dir.join("bars.png");
    let size = (options.width, options.height);
    render_scatter(&records, &classifier_ids, highlight, &scatter_path, size)
        .map_err(|err| err.to_string())?;
    render_bars(&records, &classifier_ids, &labels, highlight, &bars_path, size)
        .map_err(|err| err.to_string())?;

    println!();
    println!("wrote {}", scatter_path.display());
    println!("wrote {}", bars_path.display());
    Ok(())
}

fn parse_args(args: Vec<String>) -> Result<CliOptions, String> {
    let mut data: Option<PathBuf> = None;
    let mut out_dir = PathBuf::from(".");
    let mut width = 1000u32;
    let mut height = 620u32;

    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "-h" | "--help" => return Err(help_text()),
            "--data" => {
                idx += 1;
                let value = args
                    .get(idx)
                    .ok_or_else(|| "--data requires a value".to_string())?;
                data = Some(PathBuf::from(value));
            }
            "--out" => {
                idx += 1;
                let value = args
                    .get(idx)
                    .ok_or_else(|| "--out requires a value".to_string())?;
                out_dir = PathBuf::from(value);
            }
            "--width" => {
                idx += 1;
                width = parse_dimension(args.get(idx), "--width")?;
            }
            "--height" => {
                idx += 1;
                height = parse_dimension(args.get(idx), "--height")?;
            }
            unknown => return Err(format!("Unknown argument: {unknown}\n\n{}", help_text())),
        }
        idx += 1;
    }

    Ok(CliOptions {
        data,
        out_dir,
        width,
        height,
    })
}

fn parse_dimension(value: Option<&String>, flag: &str) -> Result<u32, String> {
    let value = value.ok_or_else(|| format!("{flag} requires a value"))?;
    value
        .parse::<u32>()
        .ok()
        .filter(|&pixels| pixels > 0)
        .ok_or_else(|| format!("Invalid {flag} value: {value}"))
}

fn help_text() -> String {
    [
        "agreemap-render",
        "",
        "Usage:",
        "  agreemap-render [options]",
        "",
        "Options:",
        "  --data <file.csv>   Dataset path (default: search the configured root).",
        "  --out <dir>         Output directory for PNGs (default: current dir).",
        "  --width <px>        Chart width (default: 1000).",
        "  --height <px>       Chart height (default: 620).",
    ]
    .join("\n")
}
