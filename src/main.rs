use anyhow::Result;
use clap::Parser;
use escudo::anomaly::BurstDetector;
use escudo::cli::{Cli, Command, OutputFormat};
use escudo::json_output::{JsonAnomalyVerdict, JsonPortVerdict, JsonScanVerdict};
use escudo::portrule::PortRuleSet;
use escudo::signature::SignatureStore;
use tracing_subscriber::EnvFilter;

/// Demo signature set used when no -s flags are given.
const DEMO_SIGNATURES: &[&str] = &["malware123", "virus.exe"];

/// Demo firewall rules used when no -r spec is given: FTP/SSH, HTTP, HTTPS.
const DEMO_PORT_RULES: &str = "20-22,80,443";

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Run the requested check; returns true when something was detected or
/// denied, which maps to exit code 1.
fn run_check(command: Command, format: OutputFormat) -> Result<bool> {
    match command {
        Command::Scan { signatures, text } => run_scan(&signatures, &text, format),
        Command::Anomaly {
            window,
            threshold,
            events,
        } => run_anomaly(window, threshold, &events, format),
        Command::Port { rules, port } => run_port(rules.as_deref(), port, format),
    }
}

fn run_scan(signatures: &[String], text: &str, format: OutputFormat) -> Result<bool> {
    let store = if signatures.is_empty() {
        tracing::debug!("no signatures given, loading demo set");
        SignatureStore::from_signatures(DEMO_SIGNATURES)
    } else {
        SignatureStore::from_signatures(signatures)
    };

    let malicious = store.contains(text);
    match format {
        OutputFormat::Text => {
            if malicious {
                println!("MALICIOUS: {text:?} matches a known signature");
            } else {
                println!("clean: {text:?} matches no known signature");
            }
        }
        OutputFormat::Json => {
            let verdict = JsonScanVerdict {
                text: text.to_string(),
                signatures: store.len(),
                malicious,
            };
            println!("{}", serde_json::to_string_pretty(&verdict)?);
        }
    }

    Ok(malicious)
}

fn run_anomaly(
    window: usize,
    threshold: usize,
    events: &[i64],
    format: OutputFormat,
) -> Result<bool> {
    let detector = BurstDetector::new(window, threshold)?;
    let burst = detector.scan(events);

    match format {
        OutputFormat::Text => match burst {
            Some(hit) => println!(
                "ANOMALY: {} code(s) repeated within the window ending at event {}",
                hit.repeated_codes, hit.position
            ),
            None => println!(
                "normal: no window of {} events held {} repeated code(s)",
                window, threshold
            ),
        },
        OutputFormat::Json => {
            let verdict = JsonAnomalyVerdict {
                events: events.len(),
                window,
                threshold,
                anomalous: burst.is_some(),
                position: burst.map(|hit| hit.position),
                repeated_codes: burst.map(|hit| hit.repeated_codes),
            };
            println!("{}", serde_json::to_string_pretty(&verdict)?);
        }
    }

    Ok(burst.is_some())
}

fn run_port(rules: Option<&str>, port: u16, format: OutputFormat) -> Result<bool> {
    let spec = rules.unwrap_or_else(|| {
        tracing::debug!("no rules given, loading demo firewall set");
        DEMO_PORT_RULES
    });
    let rules = PortRuleSet::from_spec(spec)?;

    let matched = rules.matching_rule(port);
    let allowed = matched.is_some();
    match format {
        OutputFormat::Text => match matched {
            Some(rule) => println!(
                "allowed: port {} covered by rule {}-{}",
                port,
                rule.low(),
                rule.high()
            ),
            None => println!("DENIED: port {port} covered by no rule"),
        },
        OutputFormat::Json => {
            let verdict = JsonPortVerdict {
                port,
                rules: rules.len(),
                allowed,
                matched_rule: matched.map(|rule| format!("{}-{}", rule.low(), rule.high())),
            };
            println!("{}", serde_json::to_string_pretty(&verdict)?);
        }
    }

    // Port checks report denial, not detection; the denied case is the
    // nonzero exit.
    Ok(!allowed)
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    let detected = run_check(args.command, args.format)?;
    if detected {
        std::process::exit(1);
    }

    Ok(())
}
