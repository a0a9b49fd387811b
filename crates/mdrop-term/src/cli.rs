use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Mini Dropbox terminal client.
#[derive(Debug, Parser)]
#[command(name = "minidrop", version, about)]
pub struct Cli {
    /// Path to the TOML config file.
    /// Defaults to `<config dir>/minidrop/config.toml`.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List stored files.
    List,
    /// Interactive preview loop reading `hover <name>`, `select <name>`
    /// and `quit` from stdin.
    Preview,
    /// Save a file locally.
    Download {
        /// Logical file name on the server.
        name: String,
        /// Output path. Defaults to the file name in the current directory.
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_download_with_out_and_config() {
        let cli = Cli::try_parse_from([
            "minidrop",
            "download",
            "report.pdf",
            "--out",
            "/tmp/r.pdf",
            "--config",
            "/etc/minidrop.toml",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("/etc/minidrop.toml")));
        match cli.command {
            Command::Download { name, out } => {
                assert_eq!(name, "report.pdf");
                assert_eq!(out, Some(PathBuf::from("/tmp/r.pdf")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Cli::try_parse_from(["minidrop"]).is_err());
    }
}
