use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "crm-tui")]
#[command(about = "Terminal client directory for the CRM")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the interactive terminal UI (default)
    Run,
    /// Print the sample directory without starting the UI
    List {
        /// Only show clients whose name, company or email contains this text
        #[arg(short, long)]
        query: Option<String>,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print config path and create default file if missing
    ConfigPath,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_run() {
        let cli = Cli::try_parse_from(["crm-tui"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn list_accepts_query_and_json() {
        let cli = Cli::try_parse_from(["crm-tui", "list", "--query", "петров", "--json"]).unwrap();
        match cli.command {
            Some(Commands::List { query, json }) => {
                assert_eq!(query.as_deref(), Some("петров"));
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
