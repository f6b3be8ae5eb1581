use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use bsf::config::BSFConfig;
use bsf::io::cli::Cli;
use bsf::io::output::BSFOutput;
use bsf::io::{read_config, read_scenario};
use bsf::opt::bsf_packer::BSFPacker;
use bsf::{EPOCH, io};
use clap::Parser as ClapParser;
use log::{info, warn};
use truckpack::io::svg::result_to_svgs;
use truckpack::io::{export, import};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            BSFConfig::default()
        }
        Some(config_file) => read_config(&config_file)?,
    };

    info!("Successfully parsed BSFConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file should have a valid name")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let ext_scenario = read_scenario(args.input_file.as_path())?;
    let instance = import::import(&ext_scenario)?;

    let result = BSFPacker::new(instance, config).solve()?;
    let run_time = EPOCH.elapsed();

    {
        let output = BSFOutput {
            solution: export::export(&result, run_time),
            scenario: ext_scenario.clone(),
            config,
        };

        let solution_path = args
            .solution_folder
            .join(format!("sol_{input_file_stem}.json"));

        io::write_json(&output, Path::new(&solution_path))?;
    }

    {
        let labels = ext_scenario.item_labels();
        let svgs = result_to_svgs(
            &result,
            &labels,
            config.svg_draw_options,
            &ext_scenario.name,
        );
        for (i, svg) in svgs.iter().enumerate() {
            let svg_path = args
                .solution_folder
                .join(format!("sol_{input_file_stem}_{i}.svg"));
            io::write_svg(svg, Path::new(&svg_path))?;
        }
    }

    Ok(())
}
