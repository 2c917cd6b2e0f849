//! bracetidy - Brace placement and indentation normalizer

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::fs::File;
use std::io::{self, BufReader, Read, Write};

use bracetidy::process::{collect_jobs, format_file, run_batch, run_batch_sequential, BatchOptions};
use bracetidy::{parse_args, BraceStyle, CliArgs, Config, Result};

fn main() -> Result<()> {
    let args = parse_args();

    // Build configuration from config files and CLI overrides
    let config = build_config(&args)?;
    let style = config.brace_style();

    if args.stdout {
        return process_stdout(&args, &style);
    }

    // Destination is required by the CLI when --stdout is not given
    let Some(dest) = args.dest.as_deref() else {
        anyhow::bail!("destination directory is required");
    };
    if !args.source.is_dir() {
        anyhow::bail!("source {} is not a directory", args.source.display());
    }

    // Configure thread pool if --jobs specified
    if let Some(jobs) = args.jobs {
        if jobs > 0 {
            if let Err(e) = rayon::ThreadPoolBuilder::new()
                .num_threads(jobs)
                .build_global()
            {
                eprintln!("Warning: failed to configure thread pool: {e}");
            }
        }
    }

    let options = BatchOptions {
        extensions: args.extensions.clone(),
        exclude: args.exclude.clone(),
        silent: args.silent,
    };

    let jobs = collect_jobs(&args.source, dest, &options);

    if jobs.is_empty() {
        if !args.silent {
            eprintln!("No source files found to format.");
        }
        return Ok(());
    }

    let summary = if args.jobs == Some(1) {
        run_batch_sequential(&jobs, &style, &options)
    } else {
        run_batch(&jobs, &style, &options)
    };

    if !args.silent {
        if summary.errors == 0 {
            eprintln!("Formatted {} files successfully.", summary.formatted);
        } else {
            eprintln!(
                "Formatted {} files, {} errors.",
                summary.formatted, summary.errors
            );
        }
    }

    Ok(())
}

/// Build configuration from CLI args and optional config file
fn build_config(args: &CliArgs) -> Result<Config> {
    let mut config = if let Some(config_path) = &args.config {
        // Explicit config file specified
        if args.debug {
            eprintln!(
                "[DEBUG] Using explicit config file: {}",
                config_path.display()
            );
        }
        Config::from_toml_file(config_path)?
    } else {
        // Auto-discover config files from parent directories of the source
        if args.debug {
            let discovered = Config::discover_config_files(&args.source);
            if discovered.is_empty() {
                eprintln!(
                    "[DEBUG] No config files discovered for: {}",
                    args.source.display()
                );
            } else {
                eprintln!("[DEBUG] Discovered config files:");
                for f in &discovered {
                    eprintln!("[DEBUG]   - {}", f.display());
                }
            }
        }
        Config::from_discovered_files(&args.source)
    };

    // Override with CLI arguments
    if let Some(indent) = args.indent {
        config.indent = indent;
    }
    if args.tabs {
        config.use_tabs = true;
    }
    if args.flush {
        config.flush_braces = true;
    }
    if args.brace_same_line {
        config.open_brace_on_separate_line = false;
    }
    if args.brace_own_line {
        config.open_brace_on_separate_line = true;
    }

    if args.debug {
        print_config_debug(&config);
    }

    // Validate configuration
    if let Some(error) = config.validate() {
        anyhow::bail!("Invalid configuration: {error}");
    }

    Ok(config)
}

/// Print configuration values in debug mode
fn print_config_debug(config: &Config) {
    eprintln!("[DEBUG] Configuration:");
    eprintln!("[DEBUG]   indent: {}", config.indent);
    eprintln!("[DEBUG]   use_tabs: {}", config.use_tabs);
    eprintln!("[DEBUG]   flush_braces: {}", config.flush_braces);
    eprintln!(
        "[DEBUG]   open_brace_on_separate_line: {}",
        config.open_brace_on_separate_line
    );
}

/// Format a single file (or stdin with `-`) to stdout
fn process_stdout(args: &CliArgs, style: &BraceStyle) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.source.as_os_str() == "-" {
        let mut contents = Vec::new();
        io::stdin().read_to_end(&mut contents)?;
        format_file(BufReader::new(&contents[..]), &mut out, style)?;
    } else {
        let file = File::open(&args.source)?;
        format_file(BufReader::new(file), &mut out, style)?;
    }
    out.flush()?;

    if !args.silent {
        eprintln!("Formatted {} successfully.", args.source.display());
    }

    Ok(())
}
