//! Command line definition and the `Config` it resolves to.
use crate::errors::Result;
use crate::request::{Period, Request, DEFAULT_BASE_URL, DEFAULT_EXTENSION, DEFAULT_VERSION};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

const ARGUMENTS_HELP: &str = "\
Arguments:
  parameter    The meteorological parameter to retrieve provided as integer ID,
               see https://opendata.smhi.se/apidocs/metobs/parameter.html
  station      The weather station identifier as integer ID,
               see https://www.smhi.se/data/meteorologi/ladda-ner-meteorologiska-observationer
  period       One of latest-hour, latest-day, latest-months or corrected-archive.
               Not all stations have all four periods.

Example:
  getmetobs 1 159880 latest-day --output /path/to/directory";

/// Download SMHI meteorological observation data.
///
/// The data is saved in the given directory (or the current directory) with
/// the standardized name smhi_metobs_<parameter>_<station>_<period>.<ext>.
#[derive(Parser, Debug)]
#[command(name = "getmetobs", disable_version_flag = true, after_help = ARGUMENTS_HELP)]
pub struct Args {
    /// Meteorological parameter ID
    pub parameter: String,

    /// Weather station ID
    pub station: String,

    /// latest-hour, latest-day, latest-months or corrected-archive
    pub period: Period,

    /// Directory to save the downloaded file
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// API version to use
    #[arg(short = 'v', long = "version", default_value = DEFAULT_VERSION)]
    pub api_version: String,

    /// File extension for the data (e.g., csv, json)
    #[arg(short, long, default_value = DEFAULT_EXTENSION)]
    pub ext: String,

    /// Log debug output
    #[arg(long)]
    pub verbose: bool,

    #[arg(long, hide = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
}

/// Everything one invocation needs, resolved from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    pub request: Request,
    pub output_dir: PathBuf,
    pub base_url: String,
    pub verbose: bool,
}

impl Config {
    pub fn from_args<I, T>(args: I) -> Result<Config>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = Args::try_parse_from(args)?;
        Ok(Config::from(args))
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let request = Request::new(args.parameter, args.station, args.period)
            .with_version(args.api_version)
            .with_extension(args.ext);

        Config {
            request,
            output_dir: args.output,
            base_url: args.base_url,
            verbose: args.verbose,
        }
    }
}
