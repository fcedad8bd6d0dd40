//! Text dump of every scope created during a run.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use super::ScopeManager;
use crate::{SymbolInfo, SymbolKind};

/// Failure writing the scope dump.
#[derive(Debug, thiserror::Error)]
pub enum DumpError {
    #[error("failed to write scope dump to {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScopeManager {
    /// Write every scope, in creation order, to `out`.
    pub fn write_scopes(&self, out: &mut impl Write) -> io::Result<()> {
        for (_, table) in self.scopes() {
            let parent = table
                .parent()
                .map_or("none", |id| self.scope(id).name());
            writeln!(out)?;
            writeln!(out, "===== SCOPE: {} =====", table.name())?;
            writeln!(out, "Parent: {parent}")?;
            writeln!(out, "Symbols:")?;
            if table.is_empty() {
                writeln!(out, "  (none)")?;
                continue;
            }
            for sym in table.sorted_symbols() {
                write_symbol(out, sym)?;
            }
        }
        Ok(())
    }

    /// Write the scope dump to a file, replacing it.
    pub fn dump_all_scopes(&self, path: impl AsRef<Path>) -> Result<(), DumpError> {
        let path = path.as_ref();
        let wrap = |source| DumpError::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = File::create(path).map_err(wrap)?;
        let mut out = BufWriter::new(file);
        self.write_scopes(&mut out).map_err(wrap)?;
        out.flush().map_err(wrap)?;
        info!(path = %path.display(), scopes = self.scopes.len(), "scope dump written");
        Ok(())
    }
}

fn write_symbol(out: &mut impl Write, sym: &SymbolInfo) -> io::Result<()> {
    write!(out, "  {} : {} ({})", sym.name, sym.ty, sym.kind)?;
    match sym.kind {
        SymbolKind::Variable => {
            if let Some(value) = sym.value.as_deref().filter(|v| !v.is_empty() && *v != "?") {
                write!(out, " [Val: {value}]")?;
            }
        }
        SymbolKind::Function => write!(out, " [Params: {}]", sym.param_types.len())?,
        SymbolKind::Class => {}
    }
    writeln!(out)
}
