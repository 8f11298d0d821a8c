// ABOUTME: Command implementations for the weft CLI
// ABOUTME: Wires parameter files and template directories into the library API

use anyhow::{Context as _, Result};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::render::Renderer;
use crate::table::{self, Table};

pub fn render_template(
    template: String,
    params: Option<PathBuf>,
    root: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let context = match params {
        Some(path) => {
            let parameters = read_params(&path)?;
            table::convert(&parameters)
                .with_context(|| format!("invalid parameter table in {}", path.display()))?
        }
        None => json!({}),
    };
    debug!("parameter context: {}", context);

    let renderer = make_renderer(root);
    let result = renderer.render_file(&template, &context)?;

    match output {
        Some(path) => {
            fs::write(&path, result)
                .with_context(|| format!("failed to write output to {}", path.display()))?;
            info!("rendered '{}' to {}", template, path.display());
        }
        None => print!("{}", result),
    }

    Ok(())
}

pub fn check_template(template: String, root: Option<PathBuf>) -> Result<()> {
    let renderer = make_renderer(root);
    renderer.check(&template)?;
    println!("{}: OK", template);
    Ok(())
}

fn make_renderer(root: Option<PathBuf>) -> Renderer {
    match root {
        Some(root) => Renderer::from_dir(root),
        None => Renderer::from_source(crate::source::FsSource::new()),
    }
}

/// Read a parameter table from a JSON or YAML file, chosen by extension.
fn read_params(path: &Path) -> Result<Table> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read parameter file {}", path.display()))?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&text)
            .with_context(|| format!("invalid YAML parameter table in {}", path.display())),
        _ => serde_json::from_str(&text)
            .with_context(|| format!("invalid JSON parameter table in {}", path.display())),
    }
}
