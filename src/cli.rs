//! Command line arguments.
use clap::{ArgAction, Parser};

use crate::scaling::{ScaleMode, DEFAULT_MAX_SIZE};

/**
 * Command line arguments.
 */
#[derive(Parser, Debug)]
#[command(author, version)]
#[command(about = "Scale image dimensions to fit within max resolution.", long_about = None)]
pub struct Args {
    /// Original image width.
    pub width: u32,
    /// Original image height.
    pub height: u32,
    #[clap(long = "max", value_name = "N", default_value_t = DEFAULT_MAX_SIZE)]
    /// Maximum size for width or height.
    pub max_size: u32,
    /// Choose to downscale or upscale the image.
    #[clap(long, value_enum, default_value_t = ScaleMode::Downscale)]
    pub mode: ScaleMode,
    /// Increase log verbosity on stderr (repeatable).
    #[clap(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use clap::{error::ErrorKind, CommandFactory};
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_command_is_consistent() {
        Args::command().debug_assert();
    }

    #[rstest]
    fn test_defaults() {
        let args = Args::try_parse_from(["scaler", "2048", "1152"]).unwrap();
        assert_eq!(args.width, 2048);
        assert_eq!(args.height, 1152);
        assert_eq!(args.max_size, 1024);
        assert_eq!(args.mode, ScaleMode::Downscale);
        assert_eq!(args.verbose, 0);
    }

    #[rstest]
    fn test_all_options() {
        let args = Args::try_parse_from([
            "scaler", "512", "288", "--max", "2048", "--mode", "upscale", "-vv",
        ])
        .unwrap();
        assert_eq!(args.max_size, 2048);
        assert_eq!(args.mode, ScaleMode::Upscale);
        assert_eq!(args.verbose, 2);
    }

    #[rstest]
    #[case(&["scaler", "2048"], ErrorKind::MissingRequiredArgument)]
    #[case(&["scaler", "wide", "1152"], ErrorKind::ValueValidation)]
    #[case(&["scaler", "2048", "1152", "--max", "1.5"], ErrorKind::ValueValidation)]
    #[case(&["scaler", "2048", "1152", "--mode", "sideways"], ErrorKind::InvalidValue)]
    fn test_rejected(#[case] argv: &[&str], #[case] kind: ErrorKind) {
        assert_eq!(Args::try_parse_from(argv).unwrap_err().kind(), kind);
    }

    #[rstest]
    fn test_negative_dimension() {
        assert!(Args::try_parse_from(["scaler", "-5", "1152"]).is_err());
    }
}
