use clap::error::ErrorKind;
use clap::Parser;
use mquery_domain::config::CliOverrides;
use mquery_domain::{LookupRequest, RecordClass, RecordType, SessionConfig};
use mquery_infrastructure::dns::{QuerySession, ResponseAggregator};
use mquery_infrastructure::report::render;
use std::process::ExitCode;
use std::sync::Arc;

mod bootstrap;

#[derive(Parser)]
#[command(name = "mquery")]
#[command(version)]
#[command(about = "dig for multicast DNS")]
#[command(override_usage = "mquery [@interface] [options] <DOMAIN> [q-type] [q-class]")]
struct Cli {
    /// Domain name to query; single labels are qualified with .local.
    domain: String,

    /// Query type (A, AAAA, ANY, PTR, SRV, TXT, ...)
    #[arg(value_name = "q-type")]
    qtype: Option<String>,

    /// Query class (IN, CH, HS, NONE, ANY)
    #[arg(value_name = "q-class")]
    qclass: Option<String>,

    /// Use IPv4 (the default, may be combined with -6)
    #[arg(short = '4')]
    ipv4: bool,

    /// Use IPv6 (may be combined with -4)
    #[arg(short = '6')]
    ipv6: bool,

    /// Enable debug logging
    #[arg(short = 'd')]
    debug: bool,

    /// Enable verbose debug logging (implies -d)
    #[arg(short = 'v')]
    verbose: bool,

    /// Query retransmit period, milliseconds
    #[arg(short = 'p', value_name = "period")]
    period: Option<u64>,

    /// Query retransmit count, before exit
    #[arg(short = 'c', value_name = "count")]
    count: Option<u32>,

    /// Configuration file path
    #[arg(long, value_name = "FILE")]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let (args, interface) = match extract_interface(std::env::args().collect()) {
        Ok(pair) => pair,
        Err(message) => usage_error(&message),
    };

    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{e}");
            return Ok(());
        }
        Err(e) => usage_error(&e.to_string()),
    };

    let record_type = match cli.qtype.as_deref() {
        Some(s) => match s.parse::<RecordType>() {
            Ok(t) => t,
            Err(e) => usage_error(&e.to_string()),
        },
        None => RecordType::default(),
    };
    let record_class = match cli.qclass.as_deref() {
        Some(s) => match s.parse::<RecordClass>() {
            Ok(c) => c,
            Err(e) => usage_error(&e.to_string()),
        },
        None => RecordClass::default(),
    };

    let log_level = if cli.verbose {
        Some("trace".to_string())
    } else if cli.debug {
        Some("debug".to_string())
    } else {
        None
    };

    let overrides = CliOverrides {
        ipv4: cli.ipv4,
        ipv6: cli.ipv6,
        transmit_period_ms: cli.period,
        transmit_count: cli.count,
        log_level,
    };
    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    let request = LookupRequest::new(cli.domain.clone(), record_type, record_class);
    let session_config = SessionConfig::new(request, interface, &config);

    let aggregator = Arc::new(ResponseAggregator::new());
    let session = QuerySession::new(session_config, aggregator.clone());
    let question = session.run().await?;

    let (answer, authority, additional) = aggregator.snapshot();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render(
        &mut out,
        std::slice::from_ref(&question),
        &answer,
        &authority,
        &additional,
    )?;

    Ok(())
}

/// Pulls the `@interface` sugar out of the raw argument list before
/// clap sees it. A `--` terminator ends recognition, matching option
/// handling; naming two interfaces is a usage error.
fn extract_interface(args: Vec<String>) -> Result<(Vec<String>, Option<String>), String> {
    let mut kept = Vec::with_capacity(args.len());
    let mut interface = None;
    let mut end_of_options = false;

    for (i, arg) in args.into_iter().enumerate() {
        if i == 0 || end_of_options {
            kept.push(arg);
            continue;
        }
        if arg == "--" {
            end_of_options = true;
            kept.push(arg);
            continue;
        }
        match arg.strip_prefix('@') {
            Some(name) => {
                if interface.replace(name.to_string()).is_some() {
                    return Err("duplicated @interface".to_string());
                }
            }
            None => kept.push(arg),
        }
    }

    Ok((kept, interface))
}

fn usage_error(message: &str) -> ! {
    eprintln!("{}", message.trim_end());
    eprintln!("Try 'mquery --help' for more information.");
    std::process::exit(1);
}
