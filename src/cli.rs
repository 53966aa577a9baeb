// src/cli.rs
use std::path::PathBuf;
use clap::{Parser, Subcommand};
#[derive(Debug, Parser)]
#[command(name = "load-timeline", version, about = "Scrolling load timeline widget demo")]
pub struct Cli {
    /// JSON settings file (timeline properties and demo options)
    #[arg(short, long, global = true, env = "LOAD_TIMELINE_CONFIG")]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<Command>,
}
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Open the interactive demo window (default)
    Run,
    /// Print the widget descriptors used for editor registration
    Describe {
        /// Print designer UI XML instead of JSON
        #[arg(long)]
        xml: bool,
        /// Only describe the widget with this class name
        #[arg(long)]
        name: Option<String>,
    },
    /// Render a synthetic timeline to a PNG file without opening a window
    Snapshot {
        #[arg(short, long)]
        output: PathBuf,
        #[arg(long, default_value_t = 720)]
        width: u32,
        #[arg(long, default_value_t = 300)]
        height: u32,
        /// Seed for the synthetic trace
        #[arg(long, default_value_t = 7)]
        seed: u64,
    },
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn no_subcommand_means_run() {
        let cli = Cli::try_parse_from(["load-timeline"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }
    #[test]
    fn snapshot_arguments_parse() {
        let cli = Cli::try_parse_from([
            "load-timeline",
            "snapshot",
            "--output",
            "out.png",
            "--width",
            "320",
            "-c",
            "settings.json",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("settings.json")));
        match cli.command {
            Some(Command::Snapshot {
                output,
                width,
                height,
                seed,
            }) => {
                assert_eq!(output, PathBuf::from("out.png"));
                assert_eq!((width, height, seed), (320, 300, 7));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
    #[test]
    fn describe_accepts_widget_name() {
        let cli =
            Cli::try_parse_from(["load-timeline", "describe", "--xml", "--name", "LoadTimeline"])
                .unwrap();
        match cli.command {
            Some(Command::Describe { xml, name }) => {
                assert!(xml);
                assert_eq!(name.as_deref(), Some("LoadTimeline"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
    #[test]
    fn snapshot_requires_output() {
        assert!(Cli::try_parse_from(["load-timeline", "snapshot"]).is_err());
    }
}
