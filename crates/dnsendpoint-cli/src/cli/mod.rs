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
    name    = "dnsendpoint",
    bin_name = "dnsendpoint",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Validate DNSEndpoint resources before they reach the cluster",
    long_about = "dnsendpoint checks externaldns.nginx.org/v1 DNSEndpoint manifests \
                  the same way the admission path does: DNS names, targets, \
                  record types and TTLs.",
    after_help = "EXAMPLES:\n\
        \x20 dnsendpoint validate deploy/dns/\n\
        \x20 kubectl get dnsendpoints -A -o yaml | dnsendpoint validate -\n\
        \x20 dnsendpoint check --name example.com --target 10.1.2.3 --type A --ttl 3600\n\
        \x20 dnsendpoint completions bash > /usr/share/bash-completion/completions/dnsendpoint",
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
    /// Validate DNSEndpoint manifests from files, directories or stdin.
    #[command(
        visible_alias = "v",
        about = "Validate DNSEndpoint manifests",
        after_help = "EXAMPLES:\n\
            \x20 dnsendpoint validate endpoint.yaml\n\
            \x20 dnsendpoint validate manifests/ --ext yaml --ext tpl\n\
            \x20 dnsendpoint validate - < endpoint.yaml\n\
            \x20 dnsendpoint --output-format json validate manifests/"
    )]
    Validate(ValidateArgs),

    /// Validate a single endpoint given on the command line.
    #[command(
        about = "Check a single endpoint",
        after_help = "EXAMPLES:\n\
            \x20 dnsendpoint check --name example.com --target 10.1.2.3 --type A --ttl 3600\n\
            \x20 dnsendpoint check --name api.example.com --target 10.0.0.1 --target 10.0.0.2 --type A --ttl 300\n\
            \x20 dnsendpoint check --name txt.example.com --type TXT --ttl 60   # no targets"
    )]
    Check(CheckArgs),

    /// List the supported record types.
    #[command(visible_alias = "ls", about = "List supported record types")]
    Types,

    /// Initialise a configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 dnsendpoint init                       # default location\n\
            \x20 dnsendpoint --config ./dns.toml init   # explicit path\n\
            \x20 dnsendpoint init --force               # overwrite"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 dnsendpoint completions bash > ~/.local/share/bash-completion/completions/dnsendpoint\n\
            \x20 dnsendpoint completions zsh  > ~/.zfunc/_dnsendpoint\n\
            \x20 dnsendpoint completions fish > ~/.config/fish/completions/dnsendpoint.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 dnsendpoint config get validate.extensions\n\
            \x20 dnsendpoint config list\n\
            \x20 dnsendpoint config path"
    )]
    Config(ConfigCommands),
}

// ── validate ──────────────────────────────────────────────────────────────────

/// Arguments for `dnsendpoint validate`.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Files or directories to read.  `-` reads stdin.
    #[arg(value_name = "PATH", required = true, help = "Files, directories, or - for stdin")]
    pub paths: Vec<PathBuf>,

    /// Stop at the first invalid resource.
    #[arg(long = "fail-fast", help = "Stop at the first invalid resource")]
    pub fail_fast: bool,

    /// File extensions to pick up when walking directories.
    #[arg(
        short = 'e',
        long = "ext",
        value_name = "EXT",
        help = "Extension to include when walking directories (repeatable)"
    )]
    pub extensions: Vec<String>,

    /// Follow symbolic links when walking directories.
    #[arg(short = 'L', long = "follow-links", help = "Follow symbolic links")]
    pub follow_links: bool,
}

impl ValidateArgs {
    /// `true` when the input is stdin.
    pub fn reads_stdin(&self) -> bool {
        self.paths.iter().any(|p| p.as_os_str() == "-")
    }
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `dnsendpoint check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Fully qualified DNS name.
    #[arg(short = 'n', long = "name", value_name = "DNS_NAME", help = "DNS name")]
    pub name: String,

    /// Record target; repeat for several.
    #[arg(
        short = 't',
        long = "target",
        value_name = "TARGET",
        help = "Record target (repeatable)"
    )]
    pub targets: Vec<String>,

    /// Record type, e.g. `A` or `CNAME`.
    #[arg(long = "type", value_name = "TYPE", help = "Record type")]
    pub record_type: String,

    /// Time to live in seconds.
    #[arg(
        long = "ttl",
        value_name = "SECONDS",
        allow_negative_numbers = true,
        help = "Record TTL in seconds"
    )]
    pub ttl: i64,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `dnsendpoint init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `dnsendpoint completions`.
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

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `dnsendpoint config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `validate.fail_fast`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
