use clap::{Parser, Subcommand};

use tamil_cli::commands::{convert_ops, simulate_ops, table_ops};

#[derive(Parser)]
#[command(name = "tamiltool", about = "Tamil phonetic transliteration tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Export the default rule table as TOML
    TableExport,
    /// Validate a custom rule table TOML file
    TableValidate {
        /// Path to the TOML file
        file: String,
    },
    /// List rules in priority order
    TableList {
        /// Custom rule table TOML (default: built-in table)
        #[arg(long)]
        table: Option<String>,
    },
    /// Transliterate text (one line per argument, or stdin lines)
    Convert {
        /// Latin text to convert
        text: Vec<String>,
        /// Custom rule table TOML (default: built-in table)
        #[arg(long)]
        table: Option<String>,
        /// Show which rule produced each piece of output
        #[arg(long)]
        explain: bool,
        /// Output one JSON object per line
        #[arg(long)]
        json: bool,
    },
    /// Replay key names and directives against a text field
    Simulate {
        /// Key names (k, Backspace, Ctrl+a) or @tamil, @english, @toggle,
        /// @clear, @change=<text> (default: whitespace-separated stdin)
        #[arg(allow_hyphen_values = true)]
        tokens: Vec<String>,
        /// Start in English mode instead of Tamil
        #[arg(long)]
        english: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::TableExport => table_ops::table_export(),
        Command::TableValidate { file } => table_ops::table_validate(&file),
        Command::TableList { table } => table_ops::table_list(table.as_deref()),
        Command::Convert {
            text,
            table,
            explain,
            json,
        } => convert_ops::convert_cmd(&text, table.as_deref(), explain, json),
        Command::Simulate { tokens, english } => simulate_ops::simulate_cmd(&tokens, english),
    }
}
