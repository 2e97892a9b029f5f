use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for Tá Valendo!
#[derive(Parser)]
#[command(
    name = "tavalendo",
    version = env!("CARGO_PKG_VERSION"),
    about = "Tá Valendo! Record rideshare/delivery trips and see instantly whether they were worth it",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Analyze a trip and store it in the history
    Add {
        /// Fare received for the trip
        fare: f64,

        /// Trip distance in kilometers
        distance: f64,

        /// Estimated trip time in minutes
        minutes: f64,

        /// Show the analysis without storing the ride
        #[arg(long = "dry-run")]
        dry_run: bool,
    },

    /// List analyzed rides, newest first
    List {
        /// Show only the N most recent rides
        #[arg(long, short)]
        limit: Option<usize>,
    },

    /// Delete a ride by id or by its position in `list`
    Del {
        /// Ride id as shown by `list`
        #[arg(required_unless_present = "index")]
        id: Option<String>,

        /// 1-based position in the `list` output
        #[arg(long, conflicts_with = "id")]
        index: Option<usize>,

        /// Do not ask for confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Show or change the vehicle cost profile and target.
    ///
    /// Options not given keep their current value. Every change re-analyzes
    /// all stored rides.
    Settings {
        /// Print the current settings
        #[arg(long = "print")]
        print: bool,

        /// Target net earnings per km
        #[arg(long = "target")]
        target: Option<f64>,

        /// Fuel price per liter
        #[arg(long = "gas-price")]
        gas_price: Option<f64>,

        /// Fuel consumption in km per liter (0 ignores fuel costs)
        #[arg(long = "consumption")]
        consumption: Option<f64>,

        /// Other vehicle costs per km (maintenance, tires, ...)
        #[arg(long = "other-costs")]
        other_costs: Option<f64>,

        /// Currency symbol used for display
        #[arg(long = "currency")]
        currency: Option<String>,

        /// Restore the default settings
        #[arg(long = "reset", conflicts_with_all = ["target", "gas_price", "consumption", "other_costs", "currency"])]
        reset: bool,
    },

    /// Show, toggle or set the colour theme (light/dark)
    Theme {
        /// Switch between light and dark
        #[arg(long, conflicts_with = "set")]
        toggle: bool,

        /// Set the theme explicitly: light or dark
        #[arg(long, value_name = "THEME")]
        set: Option<String>,
    },

    /// Summary of settings, theme and the latest verdict
    Status,

    /// Export the ride history
    Export {
        /// Export format
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal log table (operations and analytics events)
    Log {
        /// Print rows from the internal `log` table
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,

        /// Only analytics events
        #[arg(long = "analytics", requires = "print")]
        analytics: bool,
    },

    /// Database maintenance
    Db {
        /// Run the SQLite integrity check and validate stored values
        #[arg(long)]
        check: bool,

        /// Show database statistics
        #[arg(long)]
        info: bool,

        /// Compact the database file
        #[arg(long)]
        vacuum: bool,
    },
}
