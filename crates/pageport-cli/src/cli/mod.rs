//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "pageport",
    bin_name = "pageport",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Export design projects as standalone HTML files",
    long_about = "Pageport renders a design project through an HTML template \
                  and writes the resulting page to disk, either for a single \
                  project file or for a stream of export requests.",
    after_help = "EXAMPLES:\n\
        \x20 pageport init\n\
        \x20 pageport export landing.json --path site/landing.html\n\
        \x20 pageport listen --projects ./projects < requests.jsonl\n\
        \x20 pageport completions bash > /usr/share/bash-completion/completions/pageport",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Export one project file as HTML.
    #[command(
        visible_alias = "x",
        about = "Export a project as a standalone HTML file",
        after_help = "EXAMPLES:\n\
            \x20 pageport export landing.json\n\
            \x20 pageport export landing.json --path out/index.html\n\
            \x20 pageport export landing.json --location ./templates --save-dir ./exports"
    )]
    Export(ExportArgs),

    /// Serve export requests read from stdin.
    #[command(
        about = "Handle JSON-line export requests from stdin",
        after_help = "EXAMPLES:\n\
            \x20 pageport listen --projects ./projects\n\
            \x20 echo '{\"type\":\"ExportHtmlProject\",\"appId\":\"main\",\"transaction\":\"t-1\",\"payload\":{\"projectId\":\"p-1\"}}' \\\n\
            \x20     | pageport listen --projects ./projects"
    )]
    Listen(ListenArgs),

    /// Initialise a Pageport configuration file.
    #[command(
        about = "Initialise configuration and the default template",
        after_help = "EXAMPLES:\n\
            \x20 pageport init\n\
            \x20 pageport init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 pageport completions bash > ~/.local/share/bash-completion/completions/pageport\n\
            \x20 pageport completions zsh  > ~/.zfunc/_pageport\n\
            \x20 pageport completions fish > ~/.config/fish/completions/pageport.fish"
    )]
    Completions(CompletionsArgs),
}

// ── export ────────────────────────────────────────────────────────────────────

/// Arguments for `pageport export`.
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// JSON project record (`{"id": ..., "name": ..., "document": ...}`).
    #[arg(value_name = "PROJECT_FILE", help = "Project file to export")]
    pub project: PathBuf,

    /// Destination file. Without it the save dialog is shown (interactive
    /// hosts) or the default `<name>.html` is used. Relative paths, typed or
    /// passed, resolve against the save directory.
    #[arg(
        short = 'p',
        long = "path",
        value_name = "FILE",
        help = "Destination HTML file (relative paths resolve against --save-dir)"
    )]
    pub path: Option<PathBuf>,

    /// Override `export.location`.
    #[arg(
        short = 'l',
        long = "location",
        value_name = "DIR",
        help = "Directory holding the export template"
    )]
    pub location: Option<PathBuf>,

    /// Override `export.save_dir`.
    #[arg(
        short = 's',
        long = "save-dir",
        value_name = "DIR",
        help = "Directory receiving the default copy"
    )]
    pub save_dir: Option<PathBuf>,
}

// ── listen ────────────────────────────────────────────────────────────────────

/// Arguments for `pageport listen`.
#[derive(Debug, Args)]
pub struct ListenArgs {
    /// Directory scanned for `*.json` project files.
    #[arg(
        short = 'P',
        long = "projects",
        value_name = "DIR",
        default_value = ".",
        help = "Directory of project files"
    )]
    pub projects: PathBuf,

    /// Override `export.location`.
    #[arg(
        short = 'l',
        long = "location",
        value_name = "DIR",
        help = "Directory holding the export template"
    )]
    pub location: Option<PathBuf>,

    /// Override `export.save_dir`.
    #[arg(
        short = 's',
        long = "save-dir",
        value_name = "DIR",
        help = "Directory receiving default copies"
    )]
    pub save_dir: Option<PathBuf>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `pageport init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file and template.
    #[arg(short = 'f', long = "force", help = "Overwrite existing files")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `pageport completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_export_command() {
        let cli = Cli::parse_from([
            "pageport",
            "export",
            "landing.json",
            "--path",
            "out/site.html",
            "--location",
            "templates",
        ]);
        let Commands::Export(args) = cli.command else {
            panic!("expected Export command");
        };
        assert_eq!(args.project, PathBuf::from("landing.json"));
        assert_eq!(args.path, Some(PathBuf::from("out/site.html")));
        assert_eq!(args.location, Some(PathBuf::from("templates")));
        assert!(args.save_dir.is_none());
    }

    #[test]
    fn export_path_help_names_save_dir() {
        let cmd = Cli::command();
        let export = cmd.find_subcommand("export").expect("export subcommand");
        let path = export
            .get_arguments()
            .find(|arg| arg.get_id() == "path")
            .expect("--path argument");
        let help = path.get_help().map(ToString::to_string).unwrap_or_default();
        assert!(help.contains("--save-dir"));
    }

    #[test]
    fn export_alias() {
        let cli = Cli::parse_from(["pageport", "x", "landing.json"]);
        assert!(matches!(cli.command, Commands::Export(_)));
    }

    #[test]
    fn listen_defaults_to_current_dir() {
        let cli = Cli::parse_from(["pageport", "listen"]);
        let Commands::Listen(args) = cli.command else {
            panic!("expected Listen command");
        };
        assert_eq!(args.projects, PathBuf::from("."));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["pageport", "--quiet", "--verbose", "init"]);
        assert!(result.is_err());
    }
}
