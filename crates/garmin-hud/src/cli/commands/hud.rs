//! `hud`: render the HUD and print it or publish it to a notes target

use std::path::PathBuf;

use super::{daily_table, open_store};
use crate::cli::{print_json, OutputFormat};
use crate::config::Settings;
use crate::error::Result;
use crate::hud::{render_hud, FileSink, NotesSink};

pub fn run(
    settings: &Settings,
    target: Option<String>,
    out_dir: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let store = open_store(settings)?;
    let table = daily_table(&store)?;
    let catalog = settings.catalog()?;
    let text = render_hud(&table, &catalog, settings.today());

    if target.is_none() && out_dir.is_none() {
        return match format {
            OutputFormat::Json => print_json(&serde_json::json!({ "hud": text })),
            OutputFormat::Table => {
                print!("{}", text);
                Ok(())
            }
        };
    }

    let dir = out_dir.unwrap_or_else(|| settings.data_dir.join("hud"));
    let target = target.unwrap_or_else(|| "daily-hud".to_string());
    let mut sink = FileSink::new(dir);
    sink.publish(&target, &text)?;
    println!("HUD written to {}", sink.path_for(&target)?.display());
    Ok(())
}
