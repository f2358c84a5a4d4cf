//! `key=value` argument parsing.

use std::fmt;

use rfa_rs::prelude::*;

/// What the caller asked for.
#[derive(Debug)]
pub enum Command {
    /// List the target and activation catalogs.
    Catalog,
    /// Run one approximation.
    Approximate(RandomFeatures),
}

/// Argument or run failure.
#[derive(Debug)]
pub enum CliError {
    /// Unknown key, malformed pair, or non-numeric value.
    Usage(String),
    /// Rejected by the library.
    Rfa(RfaError),
    /// Output encoding failed.
    Json(serde_json::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Rfa(e) => write!(f, "{e}"),
            CliError::Json(e) => write!(f, "failed to encode output: {e}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<RfaError> for CliError {
    fn from(e: RfaError) -> Self {
        CliError::Rfa(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

/// Parse the process arguments (without the program name).
pub fn parse<I, S>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<S> = args.into_iter().collect();
    if let [only] = args.as_slice() {
        if only.as_ref() == "catalog" {
            return Ok(Command::Catalog);
        }
    }

    let mut builder = RandomFeatures::new();
    for arg in &args {
        let arg = arg.as_ref();
        let (key, value) = arg
            .split_once('=')
            .ok_or_else(|| CliError::Usage(format!("expected key=value, got '{arg}'")))?;
        let value = value.trim();

        builder = match key.trim() {
            "target" => builder.target_key(value),
            "activation" => builder.activation_key(value),
            "width" => builder.width(
                Validator::parse_width(value)
                    .ok_or_else(|| CliError::Usage(format!("invalid value for '{key}': '{value}'")))?,
            ),
            "layers" => builder.layer_spec(value),
            "lam" => builder.lambda(number(key, value)?),
            "seed" => builder.seed(number(key, value)?),
            "noise" => builder.noise(number(key, value)?),
            other => return Err(CliError::Usage(format!("unknown parameter '{other}'"))),
        };
    }

    Ok(Command::Approximate(builder))
}

fn number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, CliError> {
    value
        .parse()
        .map_err(|_| CliError::Usage(format!("invalid value for '{key}': '{value}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approximate(args: &[&str]) -> RandomFeatures {
        match parse(args).unwrap() {
            Command::Approximate(builder) => builder,
            Command::Catalog => panic!("expected an approximation"),
        }
    }

    #[test]
    fn test_catalog() {
        assert!(matches!(parse(["catalog"]).unwrap(), Command::Catalog));
    }

    #[test]
    fn test_no_args_uses_defaults() {
        let model = approximate(&[]).build().unwrap();
        assert_eq!(model.config().target, Target::Sine);
        assert_eq!(model.config().shape, FeatureShape::Single(50));
    }

    #[test]
    fn test_all_keys() {
        let model = approximate(&[
            "target=abs",
            "activation=relu",
            "layers=8, 4",
            "lam=0.01",
            "seed=3",
            "noise=0.2",
        ])
        .build()
        .unwrap();
        let config = model.config();
        assert_eq!(config.target, Target::Abs);
        assert_eq!(config.activation, Activation::Relu);
        assert_eq!(config.shape, FeatureShape::Deep(vec![8, 4]));
        assert_eq!(config.lambda, 0.01);
        assert_eq!(config.seed, 3);
        assert_eq!(config.noise, 0.2);
    }

    #[test]
    fn test_width_is_clamped() {
        let model = approximate(&["width=99999"]).build().unwrap();
        assert_eq!(model.config().shape, FeatureShape::Single(2048));
    }

    #[test]
    fn test_oversized_widths_saturate() {
        let model = approximate(&["width=99999999999999999999"]).build().unwrap();
        assert_eq!(model.config().shape, FeatureShape::Single(2048));

        let model = approximate(&["width=-99999999999999999999"]).build().unwrap();
        assert_eq!(model.config().shape, FeatureShape::Single(1));

        let model = approximate(&["layers=99999999999999999999,4"]).build().unwrap();
        assert_eq!(model.config().shape, FeatureShape::Deep(vec![2048, 4]));
    }

    #[test]
    fn test_usage_errors() {
        assert!(matches!(parse(["width"]), Err(CliError::Usage(_))));
        assert!(matches!(parse(["width=ten"]), Err(CliError::Usage(_))));
        assert!(matches!(parse(["seed=-1"]), Err(CliError::Usage(_))));
        assert!(matches!(parse(["colour=red"]), Err(CliError::Usage(_))));
    }

    #[test]
    fn test_library_errors_surface_at_build() {
        let err = approximate(&["target=triangle"]).build().unwrap_err();
        assert_eq!(err, RfaError::InvalidTarget("triangle".to_string()));
    }
}
