use std::path::PathBuf;

use clap::{ArgAction, Parser};
use unhash_fetch::HostList;

#[derive(Clone, Debug, Parser)]
#[command(name = "unhash", version = env!("CARGO_PKG_VERSION"), about, long_about = None)]
pub struct App {
    /// Digest of the content: hex (64 chars), base64 or base64url (43/44 chars)
    pub hash: String,

    /// Mirror to query; repeat or comma-separate for several
    #[arg(long = "host", value_name = "HOST", env = "UNHASH_HOSTS")]
    pub hosts: Vec<HostList>,

    /// Return the first body received without checking its digest
    #[arg(long)]
    pub no_verify: bool,

    /// Keep racing past failed mirrors until one delivers valid content
    #[arg(long)]
    pub first_success: bool,

    /// Treat non-2xx responses as failures
    #[arg(long)]
    pub require_success: bool,

    /// Give up on a mirror after this many seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Write the content here instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Config file (default: ~/.config/unhash/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        App::command().debug_assert();
    }

    #[test]
    fn test_parse_hosts_and_flags() {
        let app = App::try_parse_from([
            "unhash",
            "LPJNul-wow4m6DsqxbninhsWHlwfp0JecwQzYpOLmCQ",
            "--host",
            "a.test, b.test,",
            "--host",
            "c.test",
            "--first-success",
            "--timeout",
            "5",
            "-vv",
        ])
        .unwrap();

        assert_eq!(app.hosts, vec![HostList::new(["a.test", "b.test"]), HostList::new(["c.test"])]);
        assert!(app.first_success);
        assert!(!app.no_verify);
        assert_eq!(app.timeout, Some(5));
        assert_eq!(app.verbose, 2);
    }
}
