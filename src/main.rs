//! docit: generate markdown documentation from doc-commented C++ headers.
//!
//! - **gen**: `docit gen include/demo/stack.h demo docs/stack.md`
//! - **autodoc**: `docit autodoc 'include/**/*.h' demo` writes
//!   `docs/demo/stack.md` for `include/demo/stack.h`

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use docit::render::{self, Renderer};
use docit::{frontend, logging};
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Parser)]
#[command(
    name = "docit",
    about = "Generate markdown documentation from doc-commented C++ declarations"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format: markdown (default), json
    #[arg(short = 'f', long, global = true, default_value = "markdown")]
    format: String,

    /// Log pipeline progress to stderr
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    /// Export macro to ignore when parsing (e.g. API_CPPR). Repeatable.
    #[arg(long = "export-macro", global = true, value_name = "NAME")]
    export_macros: Vec<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Document one source file into an explicit output file
    Gen {
        /// C++ source or header file
        source: PathBuf,
        /// Namespace to document
        namespace: String,
        /// Output file
        output: PathBuf,
    },
    /// Document sources into a docs tree mirroring their include path
    Autodoc {
        /// Source file, directory, or glob pattern
        source: String,
        /// Namespace to document
        namespace: String,
        /// Root of the generated docs tree
        #[arg(long, default_value = "docs")]
        docs_dir: PathBuf,
    },
    /// Print the version
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match &cli.command {
        Command::Gen {
            source,
            namespace,
            output,
        } => {
            let renderer = render::create_renderer(&cli.format)?;
            generate(source, namespace, output, renderer.as_ref(), &cli.export_macros)?;
        }
        Command::Autodoc {
            source,
            namespace,
            docs_dir,
        } => {
            let renderer = render::create_renderer(&cli.format)?;
            autodoc(source, namespace, docs_dir, renderer.as_ref(), &cli.export_macros)?;
        }
        Command::Version => println!("Docit Version {}", env!("CARGO_PKG_VERSION")),
    }

    Ok(())
}

/// Document one file. Nothing is written when the namespace holds no
/// documentation.
fn generate(
    source: &Path,
    namespace: &str,
    output: &Path,
    renderer: &dyn Renderer,
    export_macros: &[String],
) -> Result<()> {
    let text = fs::read_to_string(source)
        .with_context(|| format!("failed to read {}", source.display()))?;
    let unit = frontend::cpp::parse_with(&text, export_macros)
        .with_context(|| format!("failed to parse {}", source.display()))?;

    let Some(document) = docit::generate_with(&unit, namespace, renderer)
        .with_context(|| format!("failed to document {}", source.display()))?
    else {
        info!(
            source = %source.display(),
            namespace,
            "nothing documented, no output written"
        );
        return Ok(());
    };

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }
    fs::write(output, document)
        .with_context(|| format!("failed to write {}", output.display()))?;
    info!(source = %source.display(), output = %output.display(), "wrote documentation");
    Ok(())
}

fn autodoc(
    pattern: &str,
    namespace: &str,
    docs_dir: &Path,
    renderer: &dyn Renderer,
    export_macros: &[String],
) -> Result<()> {
    let sources = expand_sources(pattern)?;
    debug!(count = sources.len(), "expanded sources");

    for source in &sources {
        let output = derive_output_path(source, docs_dir, renderer.file_extension());
        if let Err(e) = generate(source, namespace, &output, renderer, export_macros) {
            warn!("skipping {}: {:#}", source.display(), e);
        }
    }
    Ok(())
}

/// File extensions recognized as C++ sources.
const SUPPORTED_EXTENSIONS: &[&str] = &["h", "hh", "hpp", "hxx", "c", "cc", "cpp", "cxx"];

/// Expand a file, directory (non-recursive), or glob pattern into source files.
fn expand_sources(pattern: &str) -> Result<Vec<PathBuf>> {
    let path = Path::new(pattern);
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = Vec::new();
    if path.is_dir() {
        let entries = fs::read_dir(path)
            .with_context(|| format!("failed to read directory: {}", path.display()))?;
        for entry in entries.flatten() {
            let p = entry.path();
            if p.is_file() && has_supported_extension(&p) {
                files.push(p);
            }
        }
    } else {
        files = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file() && has_supported_extension(p))
            .collect();
    }

    if files.is_empty() {
        warn!("no files matched: {}", pattern);
    }
    files.sort();
    files.dedup();
    Ok(files)
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext))
}

/// Output path for a source under the docs tree.
/// "include/demo/stack.h" → "docs/demo/stack.md", "stack.h" → "docs/stack.md"
fn derive_output_path(source: &Path, docs_dir: &Path, extension: &str) -> PathBuf {
    let components: Vec<Component> = source.components().collect();
    let relative: PathBuf = match components.iter().position(|c| c.as_os_str() == "include") {
        Some(pos) => components[pos + 1..].iter().collect(),
        None => source.file_name().map(PathBuf::from).unwrap_or_default(),
    };
    docs_dir.join(relative).with_extension(extension)
}
