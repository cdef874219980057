use std::{
    fs::File,
    io::{self, BufWriter, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use blockfall_engine::GameConfig;

#[derive(Debug)]
pub enum Output {
    Stdout {
        writer: StdoutLock<'static>,
    },
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    pub fn save_json<T>(value: &T, output_path: &Path) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let mut output = Output::from_output_path(output_path)?;
        output.write_json(value)
    }

    /// `-` selects stdout.
    pub fn from_output_path(output_path: &Path) -> anyhow::Result<Self> {
        if output_path == Path::new("-") {
            Ok(Output::stdout())
        } else {
            Output::open(output_path.to_path_buf())
        }
    }

    pub fn stdout() -> Self {
        Output::Stdout {
            writer: io::stdout().lock(),
        }
    }

    pub fn open(path: PathBuf) -> anyhow::Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn display_path(&self) -> String {
        match self {
            Output::Stdout { .. } => "stdout".to_string(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    pub fn write_json<T>(&mut self, value: &T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        serde_json::to_writer_pretty(&mut *self, value)
            .with_context(|| format!("Failed to write JSON to {}", self.display_path()))?;
        writeln!(&mut *self)
            .with_context(|| format!("Failed to write newline to {}", self.display_path()))?;
        self.flush()
            .with_context(|| format!("Failed to flush output to {}", self.display_path()))?;
        Ok(())
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout { writer } => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout { writer } => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;

    let reader = io::BufReader::new(file);
    let value = serde_json::from_reader(reader).with_context(|| {
        format!(
            "Failed to parse {} JSON file: {}",
            file_kind,
            path.display()
        )
    })?;

    Ok(value)
}

/// Reads a game configuration; missing fields keep their defaults.
pub fn read_config_file<P>(path: P) -> anyhow::Result<GameConfig>
where
    P: AsRef<Path>,
{
    read_json_file("config", path)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use blockfall_engine::{SessionOutcome, SessionSummary};

    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("blockfall-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_summary_json_file() {
        let path = temp_path("summary.json");
        let summary = SessionSummary {
            outcome: SessionOutcome::GameOver,
            score: 700,
            level: 1,
            cleared_lines: 3,
            locked_pieces: 31,
            steps: 12_345,
        };
        Output::save_json(&summary, &path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(json["outcome"], "game_over");
        assert_eq!(json["score"], 700);
        assert_eq!(json["locked_pieces"], 31);
    }

    #[test]
    fn test_unknown_config_field_is_rejected() {
        let path = temp_path("bad-config.json");
        fs::write(&path, r#"{ "speed": 3 }"#).unwrap();
        let result = read_config_file(&path);
        fs::remove_file(&path).unwrap();
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("Failed to parse config JSON file"), "{message}");
    }

    #[test]
    fn test_missing_config_file() {
        let error = read_config_file(temp_path("missing.json")).unwrap_err();
        assert!(error.to_string().starts_with("Failed to open config file"), "{error}");
    }
}
