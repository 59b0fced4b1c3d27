use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};

use roadmap_parser::settings::Settings;
use roadmap_parser::sink::{JsonDirSink, PlanSink};
use roadmap_parser::{parse_roadmap_with, ParseOptions, ParsedResponse, Roadmap};

#[derive(Parser)]
#[command(name = "roadmap", about = "Parse model-generated learning roadmaps into JSON")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ParseFlags {
    /// Stop an open week from taking bullets once the weekly plan section ends
    #[arg(long)]
    strict_weeks: bool,
    /// Single-line JSON output
    #[arg(long)]
    compact: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse one completion and print the roadmap JSON
    Parse {
        /// Markdown file to read ("-" or omitted: stdin)
        input: Option<PathBuf>,
        #[command(flatten)]
        flags: ParseFlags,
        /// Print {"text", "plan"} instead of the bare plan
        #[arg(long)]
        with_text: bool,
        /// Print the raw text when no weeks could be extracted
        #[arg(long)]
        raw_fallback: bool,
    },
    /// Parse every .md/.txt file in a directory and write <file name>.json files
    Batch {
        dir: PathBuf,
        /// Output directory (default: ROADMAP_OUTPUT_DIR, else the input directory)
        #[arg(short, long)]
        out: Option<PathBuf>,
        #[command(flatten)]
        flags: ParseFlags,
    },
    /// Show a week-by-week table for one completion
    Summary {
        input: Option<PathBuf>,
        #[arg(long)]
        strict_weeks: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let settings = Settings::load().context("invalid ROADMAP_* settings")?;

    let result = match cli.command {
        Commands::Parse {
            input,
            flags,
            with_text,
            raw_fallback,
        } => {
            let text = read_input(input.as_deref())?;
            let roadmap = parse_roadmap_with(&text, options(&settings, flags.strict_weeks));
            if !roadmap.has_weeks() {
                warn!("no weeks found in completion");
                if raw_fallback {
                    println!("{}", text.trim());
                    return Ok(());
                }
            }
            let pretty = settings.pretty && !flags.compact;
            if with_text {
                let response = ParsedResponse {
                    text,
                    plan: roadmap,
                };
                println!("{}", to_json(&response, pretty)?);
            } else {
                println!("{}", to_json(&roadmap, pretty)?);
            }
            Ok(())
        }
        Commands::Batch { dir, out, flags } => {
            let files = list_inputs(&dir)?;
            if files.is_empty() {
                println!("No .md or .txt files in {}.", dir.display());
                return Ok(());
            }
            let out = out
                .or_else(|| settings.output_dir.clone())
                .unwrap_or_else(|| dir.clone());
            let mut sink = JsonDirSink::new(out, settings.pretty && !flags.compact)?;
            println!("Parsing {} files...", files.len());
            let counts = parse_files(
                &files,
                options(&settings, flags.strict_weeks),
                &mut sink,
            )?;
            counts.print();
            println!("Output: {}", sink.dir().display());
            Ok(())
        }
        Commands::Summary {
            input,
            strict_weeks,
        } => {
            let text = read_input(input.as_deref())?;
            let roadmap = parse_roadmap_with(&text, options(&settings, strict_weeks));
            print_summary(&roadmap);
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        eprintln!("\nDone in {}", format_duration(elapsed));
    }

    result
}

fn options(settings: &Settings, strict_weeks: bool) -> ParseOptions {
    let mut options = settings.parse_options();
    options.strict_weeks |= strict_weeks;
    options
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => {
            fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    Ok(if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    })
}

fn list_inputs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))? {
        let path = entry?.path();
        let is_input = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("md") || e.eq_ignore_ascii_case("txt"));
        if path.is_file() && is_input {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

#[derive(Default)]
struct BatchCounts {
    files: usize,
    failed: usize,
    without_weeks: usize,
    skills: usize,
    weeks: usize,
    items: usize,
}

impl BatchCounts {
    fn add(&mut self, roadmap: &Roadmap) {
        self.files += 1;
        self.skills += roadmap.skills.len();
        self.weeks += roadmap.weeks.len();
        self.items += roadmap.item_count();
        if !roadmap.has_weeks() {
            self.without_weeks += 1;
        }
    }

    fn print(&self) {
        println!(
            "Parsed {} files ({} failed): {} skills, {} weeks, {} items. {} files had no weeks.",
            self.files, self.failed, self.skills, self.weeks, self.items, self.without_weeks,
        );
    }
}

fn parse_files(
    files: &[PathBuf],
    options: ParseOptions,
    sink: &mut dyn PlanSink,
) -> Result<BatchCounts> {
    use indicatif::{ProgressBar, ProgressStyle};
    use rayon::prelude::*;

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")?
            .progress_chars("#>-"),
    );

    let mut counts = BatchCounts::default();

    for chunk in files.chunks(500) {
        let results: Vec<_> = chunk
            .par_iter()
            .map(|path| -> Result<(String, Roadmap)> {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                // Full file name, so plan.md and plan.txt don't share an output.
                let id = path
                    .file_name()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default();
                Ok((id, parse_roadmap_with(&text, options)))
            })
            .collect();

        for result in results {
            match result {
                Ok((id, roadmap)) => {
                    if !roadmap.has_weeks() {
                        warn!("{}: no weeks found", id);
                    }
                    match sink.save(&id, &roadmap) {
                        Ok(()) => counts.add(&roadmap),
                        Err(e) => {
                            warn!("{}: {}", id, e);
                            counts.failed += 1;
                        }
                    }
                }
                Err(e) => {
                    warn!("{:#}", e);
                    counts.failed += 1;
                }
            }
        }
        pb.inc(chunk.len() as u64);
    }

    pb.finish_and_clear();
    info!(files = counts.files, failed = counts.failed, "batch finished");
    Ok(counts)
}

fn print_summary(roadmap: &Roadmap) {
    println!("Skills: {}", roadmap.skills.len());
    for skill in &roadmap.skills {
        println!("  - {}", truncate(skill, 72));
    }

    if !roadmap.has_weeks() {
        println!("\nNo weeks found.");
        return;
    }

    println!(
        "\n{:>4} | {:<28} | {:>5} | {:<36}",
        "Week", "Theme", "Items", "Task"
    );
    println!("{}", "-".repeat(84));
    for w in &roadmap.weeks {
        let task = if w.task.is_empty() { "-" } else { w.task.as_str() };
        println!(
            "{:>4} | {:<28} | {:>5} | {:<36}",
            w.week,
            truncate(&w.theme, 28),
            w.items.len(),
            truncate(task, 36)
        );
    }

    for (label, text) in [
        ("Accessibility", &roadmap.accessibility),
        ("Assessment", &roadmap.assessment),
        ("Localization", &roadmap.localization),
    ] {
        if !text.is_empty() {
            println!("\n{}: {}", label, truncate(text, 120));
        }
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roadmap_parser::sink::SinkError;

    #[test]
    fn truncate_long() {
        assert_eq!(truncate("abcdef", 3), "abc...");
        assert_eq!(truncate("abc", 3), "abc");
    }

    #[test]
    fn durations() {
        assert_eq!(format_duration(std::time::Duration::from_secs(75)), "1m 15s");
        assert_eq!(
            format_duration(std::time::Duration::from_secs(3725)),
            "1h 2m 5s"
        );
    }

    #[test]
    fn batch_writes_json_and_skips_other_files() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(
            tmp.path().join("a.md"),
            "## Learning Path\n### Week 1: Basics\n- Item",
        )
        .unwrap();
        fs::write(tmp.path().join("b.txt"), "no structure here").unwrap();
        fs::write(tmp.path().join("c.json"), "{}").unwrap();

        let files = list_inputs(tmp.path()).unwrap();
        assert_eq!(files.len(), 2);

        let out = tmp.path().join("out");
        let mut sink = JsonDirSink::new(&out, false).unwrap();
        let counts = parse_files(&files, ParseOptions::default(), &mut sink).unwrap();
        assert_eq!(counts.files, 2);
        assert_eq!(counts.weeks, 1);
        assert_eq!(counts.without_weeks, 1);
        assert!(out.join("a.md.json").exists());
        assert!(out.join("b.txt.json").exists());
    }

    #[test]
    fn batch_same_stem_different_extension_both_kept() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(
            tmp.path().join("plan.md"),
            "## Learning Path\n### Week 1: From md\n- Item",
        )
        .unwrap();
        fs::write(
            tmp.path().join("plan.txt"),
            "## Learning Path\n### Week 1: From txt\n- Item",
        )
        .unwrap();

        let files = list_inputs(tmp.path()).unwrap();
        let out = tmp.path().join("out");
        let mut sink = JsonDirSink::new(&out, false).unwrap();
        let counts = parse_files(&files, ParseOptions::default(), &mut sink).unwrap();
        assert_eq!(counts.files, 2);

        let read = |name: &str| -> Roadmap {
            serde_json::from_str(&fs::read_to_string(out.join(name)).unwrap()).unwrap()
        };
        assert_eq!(read("plan.md.json").weeks[0].theme, "From md");
        assert_eq!(read("plan.txt.json").weeks[0].theme, "From txt");
    }

    struct RejectingSink {
        reject: &'static str,
        saved: Vec<String>,
    }

    impl PlanSink for RejectingSink {
        fn save(&mut self, id: &str, _roadmap: &Roadmap) -> Result<(), SinkError> {
            if id == self.reject {
                return Err(SinkError::Io {
                    path: PathBuf::from(id),
                    source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
                });
            }
            self.saved.push(id.to_string());
            Ok(())
        }
    }

    #[test]
    fn batch_counts_sink_errors_and_keeps_going() {
        let tmp = tempfile::tempdir().unwrap();
        for name in ["a.md", "b.md", "c.md"] {
            fs::write(tmp.path().join(name), "## Learning Path\nWeek 1\n- Item").unwrap();
        }

        let files = list_inputs(tmp.path()).unwrap();
        let mut sink = RejectingSink {
            reject: "b.md",
            saved: Vec::new(),
        };
        let counts = parse_files(&files, ParseOptions::default(), &mut sink).unwrap();
        assert_eq!(counts.files, 2);
        assert_eq!(counts.failed, 1);
        assert_eq!(sink.saved, vec!["a.md", "c.md"]);
    }
}
