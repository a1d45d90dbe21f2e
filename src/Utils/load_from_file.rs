//! Reading and writing mechanism tables as JSON.
//!
//! A mechanism file may be a bare [`ReactionTable`] document or a larger text file in which the
//! table follows a `MECHANISM` (or `REACTIONS`) header line and runs up to the next all-caps
//! header or the end of the file. Parse errors are reported with their line and column in the
//! file, and the offending line is logged with a pointer under the error position.
use crate::Kinetics::errors::ChemError;
use crate::Kinetics::reaction_table::{ReactionSet, ReactionTable};
use log::{error, info, warn};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const HEADERS: [&str; 2] = ["MECHANISM", "REACTIONS"];

fn is_header(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_uppercase() || c == '_')
}

/// (first line of the JSON section, the section text)
fn find_section(lines: &[&str]) -> (usize, String) {
    let start = lines
        .iter()
        .position(|l| HEADERS.contains(&l.trim().to_uppercase().as_str()))
        .map(|i| i + 1);
    match start {
        Some(start) => {
            let end = (start..lines.len())
                .find(|&i| is_header(lines[i]))
                .unwrap_or(lines.len());
            (start, lines[start..end].join("\n"))
        }
        None => (0, lines.join("\n")),
    }
}

fn report_parse_error(file_name: &str, lines: &[&str], start: usize, e: &serde_json::Error) -> String {
    let line_in_file = start + e.line();
    let msg = format!(
        "error parsing mechanism '{}' at line {}, column {}: {}",
        file_name,
        line_in_file,
        e.column(),
        e
    );
    error!("{}", msg);
    if let Some(problem) = line_in_file.checked_sub(1).and_then(|i| lines.get(i)) {
        error!("problematic line: {}", problem);
        if e.column() >= 1 && e.column() <= problem.len() + 1 {
            error!("{}^", " ".repeat(e.column() - 1));
        }
    }
    msg
}

pub fn parse_mechanism(file_name: &str, text: &str) -> Result<ReactionTable, ChemError> {
    let lines: Vec<&str> = text.lines().collect();
    let (start, section) = find_section(&lines);
    match serde_json::from_str::<ReactionTable>(&section) {
        Ok(table) => Ok(table),
        Err(e) => Err(ChemError::Parse(report_parse_error(
            file_name, &lines, start, &e,
        ))),
    }
}

/// Loads a table and logs what it contains. Structural problems (undeclared species, bad
/// stoichiometry) are left to `Mechanism::build`.
pub fn load_mechanism(file_name: &str) -> Result<ReactionTable, ChemError> {
    let path = Path::new(file_name);
    if !path.exists() {
        return Err(ChemError::Parse(format!(
            "file '{}' does not exist",
            file_name
        )));
    }
    let text = fs::read_to_string(path)?;
    let table = parse_mechanism(file_name, &text)?;
    if table.reactions.is_empty() {
        warn!("mechanism '{}' contains no reactions", file_name);
    }
    let mut seen = HashSet::new();
    for r in &table.reactions {
        if !seen.insert(r.id.as_str()) {
            warn!("reaction id '{}' appears more than once in '{}'", r.id, file_name);
        }
    }
    let per_set: Vec<String> = [
        ReactionSet::Gas,
        ReactionSet::Photolysis,
        ReactionSet::Heterogeneous,
        ReactionSet::OptionalHeterogeneous,
    ]
    .iter()
    .map(|s| format!("{} {}", table.reactions_in(*s).count(), s))
    .collect();
    info!(
        "loaded mechanism '{}': {} species, reactions: {}",
        file_name,
        table.species.len(),
        per_set.join(", ")
    );
    Ok(table)
}

pub fn save_mechanism(table: &ReactionTable, file_name: &str) -> Result<(), ChemError> {
    let content = serde_json::to_string_pretty(table)?;
    fs::write(file_name, content)?;
    info!("mechanism written to '{}'", file_name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Kinetics::fullchem::fullchem_table;
    use crate::Kinetics::mechanism::{Mechanism, MechanismOptions};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_bare_table() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"{{
  "species": [{{"name": "O3"}}, {{"name": "NO"}}, {{"name": "NO2"}}, {{"name": "O2", "fixed": true}}],
  "reactions": [
    {{"id": "R1", "equation": "O3 + NO = NO2 + O2",
      "rate": {{"law": "Arrhenius", "a": 3.0e-12, "c": -1500.0}}}}
  ]
}}"#
        )
        .unwrap();
        let table = load_mechanism(temp_file.path().to_str().unwrap()).unwrap();
        assert_eq!(table.species.len(), 4);
        assert!(table.species[3].fixed);
        assert_eq!(table.reactions[0].id, "R1");
    }

    #[test]
    fn test_load_section_after_header() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "Some header text").unwrap();
        writeln!(temp_file, "MECHANISM").unwrap();
        writeln!(temp_file, r#"{{"species": [{{"name": "HO2"}}],"#).unwrap();
        writeln!(
            temp_file,
            r#" "reactions": [{{"id": "H1", "equation": "HO2 =", "set": "Heterogeneous","#
        )
        .unwrap();
        writeln!(
            temp_file,
            r#"   "rate": {{"law": "HetUptake", "sr_mw": 5.74, "gamma": {{"kind": "Ho2"}}}}}}]}}"#
        )
        .unwrap();
        writeln!(temp_file, "NOTES").unwrap();
        writeln!(temp_file, "anything here is ignored").unwrap();
        let table = load_mechanism(temp_file.path().to_str().unwrap()).unwrap();
        assert_eq!(table.reactions.len(), 1);
        assert_eq!(table.reactions[0].set, ReactionSet::Heterogeneous);
        assert!(table.reactions[0].rate.is_heterogeneous());
    }

    #[test]
    fn test_parse_error_position() {
        let text = "MECHANISM\n{\"species\": [{\"name\": \"O3\"}],\n \"reactions\": [oops]}\n";
        match parse_mechanism("inline", text) {
            Err(ChemError::Parse(msg)) => {
                assert!(msg.contains("line 3"), "{}", msg);
                assert!(msg.contains("column"), "{}", msg);
            }
            other => panic!("expected parse error, got {:?}", other.map(|t| t.species)),
        }
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_mechanism("no_such_mechanism.json"),
            Err(ChemError::Parse(_))
        ));
    }

    #[test]
    fn test_save_and_reload_builds() {
        let table = fullchem_table();
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();
        save_mechanism(&table, path).unwrap();
        let reloaded = load_mechanism(path).unwrap();
        assert_eq!(reloaded.species, table.species);
        assert_eq!(reloaded.reactions.len(), table.reactions.len());
        let m = Mechanism::build(&reloaded, &MechanismOptions::default()).unwrap();
        assert!(m.n_reactions() > 100);
    }
}
