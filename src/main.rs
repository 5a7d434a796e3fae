use anyhow::{Context, Result};
use std::io::{self, Write};

use pyscribe::commands::ABOUT_TEXT;
use pyscribe::config::Config;
use pyscribe::editor::EditorSession;
use pyscribe::render::{render_viewport, spans_to_json};
use pyscribe::theme::Theme;

fn main() -> Result<()> {
    // Parse configuration from command line and settings file
    let config = Config::from_args_and_env()?;

    env_logger::Builder::new()
        .parse_filters(&config.log_level)
        .init();

    let theme = Theme::load_or_default(config.theme_path.as_deref())?;
    let mut session = EditorSession::new(config.editor.clone());

    let Some(path) = config.file.as_deref() else {
        println!("{}\n\n{}", session.title(), ABOUT_TEXT);
        return Ok(());
    };

    session.open(path)?;
    let preview = &config.preview;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(query) = &preview.find {
        for range in session.find(query)? {
            let pos = session.document().position_of(range.start);
            writeln!(out, "{}:{}:{}", session.file_name(), pos.line + 1, pos.column + 1)?;
        }
    } else if preview.json {
        let json = spans_to_json(&path.display().to_string(), session.document(), session.spans())?;
        writeln!(out, "{json}")?;
    } else {
        render_viewport(
            &mut out,
            session.document(),
            session.spans(),
            &theme,
            preview.top_line,
            preview.height,
        )
        .context("rendering preview")?;
        writeln!(out, "{}", session.status_line())?;
    }

    if preview.run {
        let pid = session.run()?;
        log::info!("launched process {}", pid);
    }

    Ok(())
}
