//! # Sealoader
//!
//! Loaders for Southeast Asian corpora: image captions, parallel sentences,
//! community QA and word pairs, normalized into JSON lines records.
//!
//! ## Getting started
//!
//! ```sh
//! sealoader 0.1.0
//! dataset loading tool.
//!
//! USAGE:
//!     sealoader <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     generate    Generate every split of a configuration
//!     help        Prints this message or the help of the given subcommand(s)
//!     info        Print dataset metadata
//!     list        List available configurations
//!     schema      Print the JSON schema of generated records
//! ```
//!
use std::rc::Rc;

use itertools::Itertools;
use structopt::StructOpt;

use sealoader::config::Context;
use sealoader::datasets;
use sealoader::download::Downloader;
use sealoader::error::Error;
use sealoader::pipeline::Generation;

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Sealoader::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Sealoader::List(l) => {
            for loader in datasets::loaders() {
                let info = loader.info();
                if l.dataset.as_deref().map_or(true, |d| d == info.name) {
                    println!("{} ({})", info.name, info.languages.iter().join(", "));
                    for config in loader.configs() {
                        println!("    {:<40} {}", config.name, config.description);
                    }
                }
            }
        }

        cli::Sealoader::Info(i) => {
            let (loader, _) = datasets::find(&i.config)?;
            println!("{}", serde_json::to_string_pretty(&loader.info())?);
        }

        cli::Sealoader::Schema(s) => {
            let (loader, config) = datasets::find(&s.config)?;
            let schema = loader.json_schema(&config);
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }

        cli::Sealoader::Generate(g) => {
            let downloader = Downloader::new(&g.cache_dir)?;
            let ctx = Context::new(Rc::new(downloader))
                .with_data_dir(g.data_dir)
                .with_fetch_images(g.fetch_images);

            let reports = Generation::new(g.config, &g.dst, ctx).run()?;
            for report in reports {
                info!("{}: {} records", report.split, report.nb_records);
                if !report.failed_images.is_empty() {
                    warn!(
                        "{}: no image for rows {}",
                        report.split,
                        report.failed_images.iter().join(", ")
                    );
                }
            }
        }
    };
    Ok(())
}
