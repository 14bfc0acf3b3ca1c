use crate::export::ExportFormat;
use crate::models::WorkoutKind;
use clap::{ArgAction, Parser, Subcommand};

/// Command-line interface definition for rTracklogger.
/// Records running and cycling workouts pinned to map locations.
#[derive(Parser)]
#[command(
    name = "rtracklogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record running and cycling workouts on a map and replay them across sessions",
    long_about = None
)]
pub struct Cli {
    /// Override the workout storage path (useful for tests or a custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Less logging
    #[arg(global = true, short = 'q', long = "quiet", action = ArgAction::Count)]
    pub quiet: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the storage file and configuration
    Init,

    /// Show the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Record a workout at a map location
    Add {
        /// Workout type
        #[arg(value_enum)]
        kind: WorkoutKind,

        /// Map location as "lat,lng" in decimal degrees
        #[arg(long = "at")]
        at: String,

        /// Distance in kilometers
        #[arg(long = "distance", allow_hyphen_values = true)]
        distance: String,

        /// Duration in minutes
        #[arg(long = "duration", allow_hyphen_values = true)]
        duration: String,

        /// Steps per minute (running only)
        #[arg(long = "steps", allow_hyphen_values = true)]
        steps: Option<String>,

        /// Elevation gain in meters (cycling only)
        #[arg(long = "climb", allow_hyphen_values = true)]
        climb: Option<String>,
    },

    /// List recorded workouts
    List {
        /// Sort by distance instead of insertion order
        #[arg(long = "by-distance")]
        by_distance: bool,

        /// Replay the map marker of every workout
        #[arg(long = "markers")]
        markers: bool,
    },

    /// Re-center the map on a workout and count the visit
    Show {
        /// Workout id as printed by `list`
        id: String,
    },

    /// Export workouts to a file
    Export {
        /// Output format
        #[arg(value_enum)]
        format: ExportFormat,

        /// Output file path
        #[arg(long = "out")]
        out: String,
    },

    /// Delete every workout and the stored snapshot
    Reset,
}
