use std::{env, process::ExitCode};

use log::{error, info};
use rfa_rs::prelude::*;
use serde_json::{json, Map, Value};

mod args;

use args::{CliError, Command};

fn main() -> ExitCode {
    env_logger::init();

    match run(env::args().skip(1)) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            println!("{}", json!({ "error": e.to_string() }));
            ExitCode::FAILURE
        }
    }
}

fn run(argv: impl Iterator<Item = String>) -> Result<String, CliError> {
    match args::parse(argv)? {
        Command::Catalog => Ok(catalog().to_string()),
        Command::Approximate(builder) => {
            let model = builder.build()?;
            info!("running {:?}", model.config());

            let result = model.run()?;
            info!(
                "mse={:e} train_mse={:e} |w|={:e}",
                result.mse,
                result.train_mse,
                result.weight_norm()
            );
            Ok(serde_json::to_string(&result)?)
        }
    }
}

fn catalog() -> Value {
    let targets: Map<String, Value> = Target::ALL
        .iter()
        .map(|t| (t.key().to_string(), Value::from(t.label())))
        .collect();
    let activations: Map<String, Value> = Activation::ALL
        .iter()
        .map(|a| (a.key().to_string(), Value::from(a.label())))
        .collect();

    json!({ "targets": targets, "activations": activations })
}
