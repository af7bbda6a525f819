use clap::{ Parser, Subcommand };
use std::path::PathBuf;

pub mod commands;
pub mod ui;

#[derive(Parser)]
#[command(
    name = "componentgpt",
    about = "Turns design-tool components into framework source code",
    version,
    author,
    long_about = None
)]
pub struct ComponentGptCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Path to configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate code for the selected component in a design document
    Generate {
        /// Path to the design document (JSON)
        #[arg(short, long)]
        document: PathBuf,

        /// Target framework (defaults to the configured framework)
        #[arg(short, long)]
        framework: Option<String>,

        /// API key to use instead of the stored one
        #[arg(long)]
        api_key: Option<String>,

        /// Directory to write the generated files into
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the result as code-panel blocks (JSON)
        #[arg(long, default_value = "false")]
        codegen: bool,
    },

    /// Print the property metadata that would be sent for the selected node
    Normalize {
        /// Path to the design document (JSON)
        #[arg(short, long)]
        document: PathBuf,
    },

    /// Store the model API key in the credential store
    SetApiKey {
        /// The key; prompted for when omitted
        key: Option<String>,
    },

    /// Run the plugin message loop over stdin/stdout
    Session {
        /// Path to the design document (JSON)
        #[arg(short, long)]
        document: PathBuf,
    },

    /// List suggested framework labels
    Frameworks,
}
