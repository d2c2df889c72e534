//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "sealoader", about = "dataset loading tool.")]
/// Holds every command that is callable by the `sealoader` command.
pub enum Sealoader {
    #[structopt(about = "List available configurations")]
    List(List),
    #[structopt(about = "Print dataset metadata")]
    Info(Info),
    #[structopt(about = "Print the JSON schema of generated records")]
    Schema(SchemaCmd),
    #[structopt(about = "Generate every split of a configuration")]
    Generate(Generate),
}

#[derive(Debug, StructOpt)]
pub struct List {
    #[structopt(help = "only list configurations of this dataset")]
    pub dataset: Option<String>,
}

#[derive(Debug, StructOpt)]
pub struct Info {
    #[structopt(help = "configuration name, e.g. vicon_noun_source")]
    pub config: String,
}

#[derive(Debug, StructOpt)]
pub struct SchemaCmd {
    #[structopt(help = "configuration name, e.g. vicon_noun_seacrowd_pairs")]
    pub config: String,
}

#[derive(Debug, StructOpt)]
/// Generate command and parameters.
///
/// ```sh
/// sealoader-generate 0.1.0
/// Generate every split of a configuration
///
/// USAGE:
///     sealoader generate [FLAGS] [OPTIONS] <config> <dst>
///
/// FLAGS:
///         --fetch-images    download images of image-text records
///
/// OPTIONS:
///         --cache-dir <cache-dir>    download cache [default: .sealoader_cache]
///     -d, --data-dir <data-dir>      directory holding manually downloaded files
///
/// ARGS:
///     <config>    configuration name
///     <dst>       generation destination
/// ```
pub struct Generate {
    #[structopt(help = "configuration name")]
    pub config: String,
    #[structopt(parse(from_os_str), help = "generation destination")]
    pub dst: PathBuf,
    #[structopt(
        parse(from_os_str),
        short = "d",
        long = "data-dir",
        help = "directory holding manually downloaded files"
    )]
    pub data_dir: Option<PathBuf>,
    #[structopt(
        parse(from_os_str),
        long = "cache-dir",
        help = "download cache",
        default_value = ".sealoader_cache"
    )]
    pub cache_dir: PathBuf,
    #[structopt(long = "fetch-images", help = "download images of image-text records")]
    pub fetch_images: bool,
}
