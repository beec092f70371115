//! CLI argument parsing for Escudo

use clap::{Parser, Subcommand, ValueEnum};

/// Output format for inspection verdicts
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "escudo")]
#[command(version)]
#[command(about = "Security inspection toolkit: signatures, syscall bursts, port rules", long_about = None)]
pub struct Cli {
    /// Enable debug logging to stderr
    #[arg(long)]
    pub debug: bool,

    /// Output format (text or json)
    #[arg(long = "format", value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check text against the known-malware signature set
    Scan {
        /// Known-malicious signature (repeatable; demo set used when absent)
        #[arg(short = 's', long = "signature", value_name = "SIG")]
        signatures: Vec<String>,

        /// Text to check for an exact signature match
        text: String,
    },

    /// Scan an event-code sequence for repetition bursts
    Anomaly {
        /// Sliding window size in events
        #[arg(short = 'w', long = "window", value_name = "N", default_value = "3")]
        window: usize,

        /// Distinct repeated codes required to flag a window
        #[arg(short = 't', long = "threshold", value_name = "N", default_value = "2")]
        threshold: usize,

        /// Event codes in log order (e.g., syscall numbers)
        #[arg(value_name = "EVENT", required = true, allow_negative_numbers = true)]
        events: Vec<i64>,
    },

    /// Check a port against the firewall rule set
    Port {
        /// Allowed port rules like "20-22,80,443" (demo set used when absent)
        #[arg(short = 'r', long = "rules", value_name = "SPEC")]
        rules: Option<String>,

        /// Port number to check
        port: u16,
    },
}
