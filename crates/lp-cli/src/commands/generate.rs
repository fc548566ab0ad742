use std::path::Path;

use clap::ValueEnum;
use lp_lifepath::{CharacterRequest, Generator, GeneratorConfig, Sex, StockNames, render_biography};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain-text biography
    Text,
    /// The resolved character as JSON
    Json,
}

pub fn run(
    tables: &Path,
    name: Option<&str>,
    role: Option<&str>,
    sex: Option<&str>,
    seed: Option<u64>,
    format: OutputFormat,
) -> Result<(), String> {
    let mut config = GeneratorConfig::default().with_tables_path(tables);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    let mut request = CharacterRequest::default();
    if let Some(name) = name {
        request = request.with_name(name);
    }
    if let Some(role) = role {
        request = request.with_role(role);
    }
    if let Some(sex) = sex {
        request = request.with_sex(sex.parse::<Sex>().map_err(|e| e.to_string())?);
    }

    let store = super::load_tables(&config.tables_path)?;
    let (seed, mut rng) = config.seeded_rng();
    info!(seed, tables = %config.tables_path.display(), "rolling character");

    let character = Generator::new(&store, &StockNames)
        .generate(&request, &mut rng)
        .map_err(|e| e.to_string())?;

    match format {
        OutputFormat::Text => print!("{}", render_biography(&character)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&character).map_err(|e| e.to_string())?;
            println!("{json}");
        }
    }

    Ok(())
}
