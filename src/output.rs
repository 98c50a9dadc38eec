use crate::error::{Error, Result};
use crate::program::Transcript;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn render(transcript: &Transcript, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(transcript.text()),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(transcript)
                .map_err(|e| Error::serialize(e.to_string()))?;
            json.push('\n');
            Ok(json)
        }
    }
}

pub fn write_transcript<W: Write>(
    out: &mut W,
    transcript: &Transcript,
    format: OutputFormat,
) -> Result<()> {
    out.write_all(render(transcript, format)?.as_bytes())?;
    out.flush()?;
    Ok(())
}
