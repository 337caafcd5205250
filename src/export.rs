use clap::ValueEnum;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Text,
    Markdown,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Markdown => "md",
        }
    }
}

/// One paragraph per input line.
pub fn paragraphs(text: &str) -> Vec<&str> {
    text.lines().collect()
}

pub fn render_document(text: &str, format: ExportFormat) -> String {
    let paragraphs = paragraphs(text);
    match format {
        ExportFormat::Text => {
            let mut out = paragraphs.join("\n");
            out.push('\n');
            out
        }
        ExportFormat::Markdown => {
            let mut out = paragraphs
                .into_iter()
                .filter(|p| !p.trim().is_empty())
                .collect::<Vec<_>>()
                .join("\n\n");
            out.push('\n');
            out
        }
    }
}

pub fn default_file_name(template_id: &str, format: ExportFormat) -> String {
    format!("{template_id}.{}", format.extension())
}

pub fn write_document(path: &Path, text: &str, format: ExportFormat) -> std::io::Result<()> {
    std::fs::write(path, render_document(text, format))?;
    log::info!("💾 Exported {} paragraphs to '{}'", paragraphs(text).len(), path.display());
    Ok(())
}
