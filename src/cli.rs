//! CLI: check theme files, dump the admitted subset, or print the JSON Schema.
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use rayon::prelude::*;
use serde_json::Value;

use crate::options::Options;
use crate::theme::{self, Theme};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// validate design-token theme files
#[derive(Parser, Debug)]
#[command(name = "theme-schema")]
pub struct CommandLineInterface {
    /// log dropped keys and other engine decisions (overridden by RUST_LOG)
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// validate every input and report ok/fail per file
    Check(CheckArgs),
    /// validate one input and print the admitted subset as JSON
    Dump(DumpArgs),
    /// print the JSON Schema of the theme format
    Schema(SchemaArgs),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// JSON Pointer to select the theme inside each document (e.g. /theme)
    #[arg(long)]
    json_pointer: Option<String>,

    /// One or more inputs. May be literal paths or quoted glob patterns
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,
}

#[derive(Args, Debug, Clone)]
struct ValidationSettings {
    /// JSON file with validation options (`unknownFields`, `inadmissibleKeys`)
    #[arg(long)]
    config: Option<PathBuf>,

    /// reject undeclared fields and inadmissible keys (overrides --config)
    #[arg(long, default_value_t = false)]
    strict: bool,
}

#[derive(clap::Parser, Debug)]
struct CheckArgs {
    #[command(flatten)]
    input_settings: InputSettings,

    #[command(flatten)]
    validation: ValidationSettings,
}

#[derive(clap::Parser, Debug)]
struct DumpArgs {
    #[command(flatten)]
    input_settings: InputSettings,

    #[command(flatten)]
    validation: ValidationSettings,

    /// output .json file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(clap::Parser, Debug)]
struct SchemaArgs {
    /// output .json file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

/// Outcome of checking one input file.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: anyhow::Result<Theme>,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    fn resolve(&self) -> anyhow::Result<Vec<PathBuf>> {
        resolve_file_path_patterns(&self.input)
    }

    /// Read, parse and select the theme node of one file.
    fn load(&self, source_path: &Path) -> anyhow::Result<Value> {
        let source = std::fs::read_to_string(source_path)
            .with_context(|| format!("failed to read {}", source_path.display()))?;
        let json_value = serde_json::from_str::<Value>(&source)
            .with_context(|| format!("failed to parse JSON in {}", source_path.display()))?;
        match self.json_pointer.as_deref() {
            None => Ok(json_value),
            Some(pointer) => match json_value.pointer(pointer) {
                Some(node) => Ok(node.clone()),
                None => bail!("JSON pointer {pointer} matched nothing in {}", source_path.display()),
            },
        }
    }
}

impl ValidationSettings {
    fn options(&self) -> anyhow::Result<Options> {
        if self.strict {
            return Ok(Options::strict());
        }
        let Some(config) = self.config.as_ref() else {
            return Ok(Options::default());
        };
        let bytes = std::fs::read(config)
            .with_context(|| format!("failed to read config {}", config.display()))?;
        let options = crate::path_de::from_slice_with_path::<Options>(&bytes)
            .with_context(|| format!("invalid config {}", config.display()))?;
        Ok(options)
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn run(&self) -> anyhow::Result<ExitCode> {
        match &self.cmd {
            Command::Check(target) => {
                let options = target.validation.options()?;
                let paths = target.input_settings.resolve()?;
                let reports = check_files(&target.input_settings, &paths, &options);
                let failed = reports.iter().filter(|r| r.outcome.is_err()).count();
                for report in &reports {
                    print_report(report);
                }
                let summary = format!("{} checked, {} failed", reports.len(), failed);
                if failed == 0 {
                    println!("{}", summary.green());
                    Ok(ExitCode::SUCCESS)
                } else {
                    println!("{}", summary.red().bold());
                    Ok(ExitCode::from(1))
                }
            }
            Command::Dump(target) => {
                let options = target.validation.options()?;
                let paths = target.input_settings.resolve()?;
                let [source_path] = paths.as_slice() else {
                    bail!("dump takes exactly one input, got {}", paths.len());
                };
                let theme = check_file(&target.input_settings, source_path, &options)?;
                let theme_src = serde_json::to_string_pretty(&theme)?;
                write_output(target.out.as_deref(), &theme_src)?;
                Ok(ExitCode::SUCCESS)
            }
            Command::Schema(target) => {
                let schema_src = serde_json::to_string_pretty(&theme::describe())?;
                write_output(target.out.as_deref(), &schema_src)?;
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn check_file(settings: &InputSettings, path: &Path, options: &Options) -> anyhow::Result<Theme> {
    let value = settings.load(path)?;
    let theme = Theme::from_value_with(&value, options)
        .with_context(|| format!("invalid theme {}", path.display()))?;
    Ok(theme)
}

/// Files are independent; results come back in input order.
fn check_files(settings: &InputSettings, paths: &[PathBuf], options: &Options) -> Vec<FileReport> {
    paths
        .par_iter()
        .map(|path| FileReport {
            path: path.clone(),
            outcome: check_file(settings, path, options),
        })
        .collect()
}

fn print_report(report: &FileReport) {
    let path = report.path.display();
    match &report.outcome {
        Ok(theme) => println!("{} {path} ({} categories)", "ok".green().bold(), theme.category_count()),
        Err(error) => {
            println!("{} {path}", "FAIL".red().bold());
            match error.root_cause().downcast_ref::<crate::error::SchemaError>() {
                Some(schema_error) => println!("    [{}] {schema_error}", schema_error.code().yellow()),
                None => println!("    {error:#}"),
            }
        }
    }
}

fn write_output(out: Option<&Path>, contents: &str) -> anyhow::Result<()> {
    let Some(out) = out else {
        println!("{contents}");
        return Ok(());
    };
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(out, contents).with_context(|| format!("failed to write {}", out.display()))?;
    Ok(())
}

fn resolve_file_path_patterns<I>(patterns: I) -> anyhow::Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        // Minimal glob detection for the `glob` crate syntax.
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{'))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            let mut matched_any = false;
            for entry in glob::glob(pattern).with_context(|| format!("invalid glob pattern: {pattern}"))? {
                out.push(entry?);
                matched_any = true;
            }
            if !matched_any {
                bail!("glob pattern matched no files: {pattern}");
            }
        } else {
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}
