use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use formgen_codegen::{generate, write_outputs, GeneratorOptions, OutputPaths};
use formgen_core::StyleModel;

#[derive(Parser)]
#[command(
    name = "formgen",
    version = env!("CARGO_PKG_VERSION"),
    about = "Clang-format checks header and source generator",
    long_about = "Reads clang's Format.h, classifies every public FormatStyle field and \
                  writes the ClangFormatChecks settings widget (clangformatchecks.h/.cpp)."
)]
struct Cli {
    /// Path to Format.h, usually /usr/lib/llvm-x/include/clang/Format/Format.h
    #[arg(long = "clang-format-header-file", short = 'i', value_name = "PATH")]
    clang_format_header_file: PathBuf,

    /// Write the generated files here instead of src/plugins/clangformat
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let options = GeneratorOptions::default();
    let header_path = &cli.clang_format_header_file;

    let source = std::fs::read_to_string(header_path)
        .with_context(|| format!("Failed to read {}", header_path.display()))?;

    let class = formgen_parser::extract_class(&source, &options.class_name)
        .with_context(|| format!("Failed to parse {}", header_path.display()))?;

    let model = StyleModel::from_class(&class);
    let unrecognized = model.unrecognized().count();
    if unrecognized > 0 {
        tracing::warn!(
            count = unrecognized,
            "fields with unrecognized types have no control"
        );
    }

    let files = generate(&model, &options).context("Failed to generate settings panel")?;

    let dir = cli.output_dir.clone().unwrap_or_else(default_output_dir);
    let paths = OutputPaths::in_dir(&dir, &options);
    write_outputs(&files, &paths)
        .with_context(|| format!("Failed to write output to {}", dir.display()))?;

    tracing::info!(
        fields = model.fields.len(),
        skipped = model.skipped.len(),
        dir = %dir.display(),
        "generated settings panel"
    );
    Ok(())
}

/// `src/plugins/clangformat` under the workspace root.
fn default_output_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("src")
        .join("plugins")
        .join("clangformat")
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info,handlebars=warn"),
            2 => tracing_subscriber::EnvFilter::new("debug,handlebars=warn"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
