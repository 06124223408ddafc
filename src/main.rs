use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;
use question_suites::config::DEFAULT_PORT;
use question_suites::{ServerConfig, server};
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory holding the `<suite>.json` question files
    #[arg(short, long, env = "QS_CONTENT", default_value = ".")]
    content: PathBuf,

    /// Port to listen on
    #[arg(short, long, env = "QS_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Address to bind
    #[arg(long, env = "QS_HOST", default_value = "0.0.0.0")]
    host: IpAddr,

    /// Enable verbose logging (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // RUST_LOG wins over -v
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        match args.verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let config = ServerConfig::new(args.content)
        .with_host(args.host)
        .with_port(args.port);

    if let Err(e) = server::run(config).await {
        error!(error = %e, "question server failed");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_are_well_formed() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_apply_without_flags() {
        let args = Args::try_parse_from(["question-suites"]).unwrap();
        assert_eq!(args.port, 11076);
        assert_eq!(args.content, PathBuf::from("."));
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from([
            "question-suites",
            "--content",
            "/srv/qs",
            "--port",
            "9000",
            "-vv",
        ])
        .unwrap();
        assert_eq!(args.content, PathBuf::from("/srv/qs"));
        assert_eq!(args.port, 9000);
        assert_eq!(args.verbose, 2);
    }
}
