use crate::domain::models::VarSet;
use crate::services::checker::SanityError;
use log::trace;
use std::path::Path;

/// Extracts the variable name declared on one line, if any.
///
/// Blank lines and `#` comments declare nothing. The name is whatever precedes
/// the first `=`, or the whole trimmed line when there is no `=`.
pub fn parse_line(line: &str) -> Option<&str> {
    let trimmed = trim_line(line);
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    let name = match trimmed.split_once('=') {
        Some((before, _)) => trim_line(before),
        None => trimmed,
    };
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Whitespace trim that also drops a byte-order mark (U+FEFF).
fn trim_line(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

pub fn parse_var_names(content: &str) -> VarSet {
    let mut vars = VarSet::new();
    for (idx, line) in content.lines().enumerate() {
        match parse_line(line) {
            Some(name) => {
                vars.insert(name.to_string());
            }
            None => trace!("skipping line {}", idx + 1),
        }
    }
    vars
}

pub fn read_var_file(path: &Path) -> Result<VarSet, SanityError> {
    let raw = std::fs::read_to_string(path).map_err(|source| SanityError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_var_names(&raw))
}
