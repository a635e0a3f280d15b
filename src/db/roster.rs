// roster.rs
use std::collections::HashSet;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::{AgentRecord, AgentRow};
use crate::errors::ImportError;

/// Append-only `agents.md` file plus the set of licences already in it.
pub struct Roster {
    path: PathBuf,
    licences: HashSet<String>,
    writer: BufWriter<File>,
}

impl Roster {
    /// Loads known licences from an existing roster (if any) and opens it for appending.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ImportError> {
        let path = path.as_ref().to_path_buf();

        let content = read_roster_text(&path)?;

        let licences: HashSet<String> = parse_rows(&content)
            .into_iter()
            .map(|row| row.licence)
            .filter(|l| !l.is_empty())
            .collect();

        info!("Loaded {} existing agents from {}", licences.len(), path.display());

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| ImportError::io(&path, e))?;
        let mut writer = BufWriter::new(file);

        // an unterminated last line would swallow the next appended entry
        if !content.is_empty() && !content.ends_with('\n') {
            writeln!(writer).map_err(|e| ImportError::io(&path, e))?;
        }

        Ok(Self {
            path,
            licences,
            writer,
        })
    }

    pub fn len(&self) -> usize {
        self.licences.len()
    }

    pub fn contains(&self, licence: &str) -> bool {
        self.licences.contains(licence)
    }

    /// Appends `agent` unless it has no phone number, no licence, or a licence
    /// already on the roster. Returns whether it was written.
    pub fn admit(&mut self, agent: &AgentRecord) -> Result<bool, ImportError> {
        if !agent.has_phone() || agent.licence.is_empty() || self.contains(&agent.licence) {
            return Ok(false);
        }

        writeln!(self.writer, "{}", agent.to_roster_line())
            .map_err(|e| ImportError::io(&self.path, e))?;
        self.licences.insert(agent.licence.clone());
        Ok(true)
    }

    pub fn flush(&mut self) -> Result<(), ImportError> {
        self.writer.flush().map_err(|e| ImportError::io(&self.path, e))
    }
}

/// Every roster entry in file order. A missing file is an empty roster.
pub fn read_rows(path: &Path) -> Result<Vec<AgentRow>, ImportError> {
    Ok(parse_rows(&read_roster_text(path)?))
}

fn read_roster_text(path: &Path) -> Result<String, ImportError> {
    match fs::read_to_string(path) {
        Ok(c) => Ok(c),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(ImportError::io(path, e)),
    }
}

fn parse_rows(content: &str) -> Vec<AgentRow> {
    content.lines().filter_map(AgentRow::parse_line).collect()
}
