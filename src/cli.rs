//! Command-line interface for bracetidy.
//!
//! Defines CLI arguments using clap builder API

use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};

/// CLI arguments parsed from command line
#[derive(Debug, Clone)]
pub struct CliArgs {
    /// Source directory (or single file with --stdout)
    pub source: PathBuf,

    /// Destination directory (not used with --stdout)
    pub dest: Option<PathBuf>,

    /// Number of spaces per indent level
    pub indent: Option<usize>,

    /// Indent with tabs instead of spaces
    pub tabs: bool,

    /// Closing braces flush with block contents
    pub flush: bool,

    /// Keep opening braces on the statement line
    pub brace_same_line: bool,

    /// Move opening braces onto their own line
    pub brace_own_line: bool,

    /// Format a single file to stdout instead of a directory tree
    pub stdout: bool,

    /// Config file path
    pub config: Option<PathBuf>,

    /// Additional source file extensions (in addition to defaults)
    pub extensions: Vec<String>,

    /// Exclude patterns for files/directories (glob patterns)
    pub exclude: Vec<String>,

    /// Number of parallel jobs (0 = auto, 1 = sequential)
    pub jobs: Option<usize>,

    /// Silent mode (no output)
    pub silent: bool,

    /// Enable debug output
    pub debug: bool,
}

/// Build the clap Command for parsing CLI arguments
#[must_use]
pub fn build_cli() -> Command {
    Command::new("bracetidy")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Normalizes brace placement and indentation across a source tree")
        .arg(
            Arg::new("source")
                .help("Source directory to read (a single file with --stdout)")
                .value_name("SRC_DIR")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("dest")
                .help("Destination directory to create output under (must not contain the output files yet)")
                .value_name("DEST_DIR")
                .required_unless_present("stdout")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("indent")
                .short('i')
                .long("indent")
                .help("Number of spaces per indent level [default: 2]")
                .value_name("NUM")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("tabs")
                .short('t')
                .long("tabs")
                .help("Indent with one tab per level instead of spaces")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("flush")
                .short('f')
                .long("flush")
                .help("Print closing braces at the indentation of the block contents")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("brace-same-line")
                .long("brace-same-line")
                .help("Keep opening braces attached to the statement line")
                .action(ArgAction::SetTrue)
                .conflicts_with("brace-own-line"),
        )
        .arg(
            Arg::new("brace-own-line")
                .long("brace-own-line")
                .help("Move every opening brace onto its own line [default]")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("stdout")
                .short('s')
                .long("stdout")
                .help("Format a single source file and write the result to stdout")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Config file path (overrides auto-discovery)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("extension")
                .short('x')
                .long("extension")
                .help("Additional source file extension to process (repeatable)")
                .value_name("EXT")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .help("Exclude files/dirs matching pattern (repeatable)")
                .value_name("PATTERN")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("jobs")
                .short('j')
                .long("jobs")
                .help("Number of parallel jobs (0=auto, 1=sequential)")
                .value_name("NUM")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("silent")
                .short('S')
                .long("silent")
                .help("Silent mode (no per-file output)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("debug")
                .short('D')
                .long("debug")
                .help("Enable debug output (shows resolved configuration)")
                .action(ArgAction::SetTrue),
        )
}

/// Parse CLI arguments from command line
#[must_use]
pub fn parse_args() -> CliArgs {
    args_from_matches(&build_cli().get_matches())
}

/// Parse CLI arguments from an iterator (for testing)
#[must_use]
pub fn parse_args_from<I, T>(args: I) -> CliArgs
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    args_from_matches(&build_cli().get_matches_from(args))
}

/// Convert clap `ArgMatches` to `CliArgs`
fn args_from_matches(matches: &clap::ArgMatches) -> CliArgs {
    CliArgs {
        source: matches
            .get_one::<PathBuf>("source")
            .cloned()
            .unwrap_or_default(),
        dest: matches.get_one::<PathBuf>("dest").cloned(),
        indent: matches.get_one::<usize>("indent").copied(),
        tabs: matches.get_flag("tabs"),
        flush: matches.get_flag("flush"),
        brace_same_line: matches.get_flag("brace-same-line"),
        brace_own_line: matches.get_flag("brace-own-line"),
        stdout: matches.get_flag("stdout"),
        config: matches.get_one::<PathBuf>("config").cloned(),
        extensions: matches
            .get_many::<String>("extension")
            .map(|vals| vals.cloned().collect())
            .unwrap_or_default(),
        exclude: matches
            .get_many::<String>("exclude")
            .map(|vals| vals.cloned().collect())
            .unwrap_or_default(),
        jobs: matches.get_one::<usize>("jobs").copied(),
        silent: matches.get_flag("silent"),
        debug: matches.get_flag("debug"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_builds() {
        let cmd = build_cli();
        // Just verify it builds without panic
        assert_eq!(cmd.get_name(), "bracetidy");
    }

    #[test]
    fn test_positional_source_and_dest() {
        let args = parse_args_from(vec!["bracetidy", "src", "out"]);
        assert_eq!(args.source, PathBuf::from("src"));
        assert_eq!(args.dest, Some(PathBuf::from("out")));
        assert!(!args.stdout);
    }

    #[test]
    fn test_dest_required_without_stdout() {
        let result = build_cli().try_get_matches_from(vec!["bracetidy", "src"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_stdout_allows_missing_dest() {
        let args = parse_args_from(vec!["bracetidy", "--stdout", "file.cpp"]);
        assert_eq!(args.source, PathBuf::from("file.cpp"));
        assert_eq!(args.dest, None);
        assert!(args.stdout);
    }

    #[test]
    fn test_style_flags() {
        let args = parse_args_from(vec![
            "bracetidy",
            "-i",
            "4",
            "--flush",
            "--brace-same-line",
            "src",
            "out",
        ]);
        assert_eq!(args.indent, Some(4));
        assert!(args.flush);
        assert!(args.brace_same_line);
        assert!(!args.brace_own_line);
    }

    #[test]
    fn test_brace_placement_flags_conflict() {
        let result = build_cli().try_get_matches_from(vec![
            "bracetidy",
            "--brace-same-line",
            "--brace-own-line",
            "src",
            "out",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_repeatable_options() {
        let args = parse_args_from(vec![
            "bracetidy",
            "-e",
            "third_party",
            "-e",
            "*_generated.cpp",
            "-x",
            "ino",
            "src",
            "out",
        ]);
        assert_eq!(args.exclude, vec!["third_party", "*_generated.cpp"]);
        assert_eq!(args.extensions, vec!["ino"]);
    }

    #[test]
    fn test_options_not_set() {
        let args = parse_args_from(vec!["bracetidy", "src", "out"]);
        assert_eq!(args.indent, None);
        assert_eq!(args.jobs, None);
        assert_eq!(args.config, None);
        assert!(!args.tabs);
        assert!(!args.flush);
        assert!(!args.silent);
    }
}
