use anyhow::Result;
use clap::Parser;
use log::debug;
use rpmstash::archive::RpmCpio;
use rpmstash::commands;
use rpmstash::package::StoreLayout;
use rpmstash::runtime::RealRuntime;
use std::path::PathBuf;

/// rpmstash - a per-user cache of extracted debuginfo and source rpms
///
/// install unpacks an archive into ~/.debuginfo or ~/.srpm; list, remove
/// and link operate on the cached entries by name or glob.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print debug diagnostics on stderr
    #[arg(long = "verbose", short = 'v', global = true)]
    verbose: bool,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Extract a package archive into the store
    Install {
        /// Path to a *-debuginfo-*.rpm or *.src.rpm archive
        package: PathBuf,
    },

    /// List installed packages
    List {
        /// Name or glob; a plain name searches as a substring
        name: Option<String>,
    },

    /// Delete installed packages after confirmation
    Remove {
        /// Name or glob
        name: String,
    },

    /// Symlink installed packages into a directory
    Link {
        /// Name or glob
        name: String,

        /// Destination directory (defaults to the current directory)
        dest: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    // Command failures are reported, not propagated: the message goes to
    // stderr and the process still exits cleanly.
    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        for cause in e.chain().skip(1) {
            debug!("caused by: {}", cause);
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let runtime = RealRuntime;
    let layout = StoreLayout::from_runtime(&runtime)?;

    match &cli.command {
        Commands::Install { package } => commands::install(&runtime, &RpmCpio, package, &layout),
        Commands::List { name } => commands::list(&runtime, name.as_deref(), &layout),
        Commands::Remove { name } => commands::remove(&runtime, name, &layout),
        Commands::Link { name, dest } => commands::link(&runtime, name, dest.as_deref(), &layout),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_install_parsing() {
        let cli = Cli::try_parse_from(["rpmstash", "install", "httpd-1.0.src.rpm"]).unwrap();
        match cli.command {
            Commands::Install { package } => {
                assert_eq!(package, PathBuf::from("httpd-1.0.src.rpm"));
            }
            _ => panic!("Expected Install command"),
        }
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_list_name_is_optional() {
        let cli = Cli::try_parse_from(["rpmstash", "list"]).unwrap();
        match cli.command {
            Commands::List { name } => assert_eq!(name, None),
            _ => panic!("Expected List command"),
        }

        let cli = Cli::try_parse_from(["rpmstash", "list", "httpd"]).unwrap();
        match cli.command {
            Commands::List { name } => assert_eq!(name.as_deref(), Some("httpd")),
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_cli_remove_requires_name() {
        assert!(Cli::try_parse_from(["rpmstash", "remove"]).is_err());
        let cli = Cli::try_parse_from(["rpmstash", "remove", "httpd"]).unwrap();
        match cli.command {
            Commands::Remove { name } => assert_eq!(name, "httpd"),
            _ => panic!("Expected Remove command"),
        }
    }

    #[test]
    fn test_cli_link_dest_is_optional() {
        let cli = Cli::try_parse_from(["rpmstash", "link", "httpd", "/tmp/out"]).unwrap();
        match cli.command {
            Commands::Link { name, dest } => {
                assert_eq!(name, "httpd");
                assert_eq!(dest, Some(PathBuf::from("/tmp/out")));
            }
            _ => panic!("Expected Link command"),
        }
    }

    #[test]
    fn test_cli_global_verbose_flag() {
        let cli = Cli::try_parse_from(["rpmstash", "list", "-v"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_rejects_extra_arguments() {
        assert!(Cli::try_parse_from(["rpmstash", "install", "a.rpm", "b.rpm"]).is_err());
        assert!(Cli::try_parse_from(["rpmstash", "frobnicate"]).is_err());
        assert!(Cli::try_parse_from(["rpmstash"]).is_err());
    }
}
