use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "filekeeper")]
#[command(author, version, about = "Telegram bot that stores every document it receives", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the bot in long polling mode
    Run,

    /// Apply database migrations, report the number of stored files and exit
    Migrate {
        /// Database file to migrate (defaults to DATABASE_PATH)
        #[arg(long)]
        database: Option<String>,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
