//! Ingestion — turn CSV tables or a plain-text edge list into graph input.
//!
//! CSV tables follow the arc-chart datasets: an edge table with source and
//! destination columns, and an optional node table with a node column and a
//! group column. Any other column (weights, colors, widths) is ignored, and
//! rows may be ragged.
//!
//! Text format, one statement per line:
//!
//! ```text
//! %% comment
//! Amina -- Liam -- Zanele     edges between consecutive labels
//! group Gryffindor: Harry, Ron
//! Solo                        isolated node
//! ```

use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::sync::LazyLock;

use csv::{ReaderBuilder, StringRecord};
use regex::Regex;
use tracing::debug;

use crate::error::{Error, Result};

/// `--` joins two labels; surrounding whitespace is optional.
static EDGE_SEP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*--\s*").expect("valid regex"));

static GROUP_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^group\s+(?P<group>[^:]+?)\s*:\s*(?P<members>.*)$").expect("valid regex")
});

/// Labels may contain spaces and single hyphens, but no `,` or `:` and no
/// leading or trailing hyphen.
static LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s,:\-](?:[^,:]*[^\s,:\-])?$").expect("valid regex")
});

/// Nodes, edges and optional groups, as handed to the optimizer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphInput {
    /// Node labels in first-appearance order.
    pub nodes: Vec<String>,
    pub edges: Vec<(String, String)>,
    /// Node → group. Empty when the input declares no groups.
    pub groups: HashMap<String, String>,
}

impl GraphInput {
    fn add_node(&mut self, seen: &mut HashSet<String>, label: &str) {
        if seen.insert(label.to_string()) {
            self.nodes.push(label.to_string());
        }
    }
}

// ─── Text edge list ─────────────────────────────────────────────────────────

pub fn parse_edge_list(src: &str) -> Result<GraphInput> {
    let mut input = GraphInput::default();
    let mut seen: HashSet<String> = HashSet::new();

    for (idx, raw) in src.lines().enumerate() {
        let line_no = idx + 1;
        let line = match raw.find("%%") {
            Some(pos) => &raw[..pos],
            None => raw,
        }
        .trim();
        if line.is_empty() {
            continue;
        }

        if let Some(caps) = GROUP_LINE.captures(line) {
            let group = parse_label(&caps["group"], line_no)?;
            for member in caps["members"].split(',').map(str::trim) {
                if member.is_empty() {
                    continue;
                }
                let member = parse_label(member, line_no)?;
                if let Some(previous) = input.groups.get(member) {
                    if previous != group {
                        return Err(Error::Parse {
                            line: line_no,
                            message: format!("node '{member}' is already in group '{previous}'"),
                        });
                    }
                }
                input.add_node(&mut seen, member);
                input.groups.insert(member.to_string(), group.to_string());
            }
            continue;
        }

        let labels = EDGE_SEP
            .split(line)
            .map(|part| parse_label(part.trim(), line_no))
            .collect::<Result<Vec<&str>>>()?;
        for label in &labels {
            input.add_node(&mut seen, label);
        }
        for pair in labels.windows(2) {
            input.edges.push((pair[0].to_string(), pair[1].to_string()));
        }
    }

    debug!(
        nodes = input.nodes.len(),
        edges = input.edges.len(),
        groups = input.groups.len(),
        "edge list parsed"
    );
    Ok(input)
}

fn parse_label(raw: &str, line: usize) -> Result<&str> {
    let label = raw
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(raw);
    if LABEL.is_match(label) {
        Ok(label)
    } else {
        Err(Error::Parse {
            line,
            message: format!("invalid node label '{raw}'"),
        })
    }
}

// ─── CSV tables ─────────────────────────────────────────────────────────────

/// Column names of the CSV tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvColumns {
    pub source: String,
    pub dest: String,
    pub node: String,
    pub group: String,
}

impl Default for CsvColumns {
    fn default() -> Self {
        Self {
            source: "source".to_string(),
            dest: "dest".to_string(),
            node: "node".to_string(),
            group: "group".to_string(),
        }
    }
}

/// Read `(source, dest)` pairs from an edge table.
///
/// Rows with an empty or `NaN` endpoint are skipped.
pub fn read_edges_csv<R: Read>(
    reader: R,
    source_col: &str,
    dest_col: &str,
) -> Result<Vec<(String, String)>> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = rdr.headers()?.clone();
    let source = column(&headers, source_col)?;
    let dest = column(&headers, dest_col)?;

    let mut edges = Vec::new();
    let mut skipped = 0usize;
    for record in rdr.records() {
        let record = record?;
        match (field(&record, source), field(&record, dest)) {
            (Some(a), Some(b)) => edges.push((a.to_string(), b.to_string())),
            _ => skipped += 1,
        }
    }
    debug!(edges = edges.len(), skipped, "edge table read");
    Ok(edges)
}

/// Read the node list, and the group map when `group_col` is present.
pub fn read_nodes_csv<R: Read>(
    reader: R,
    node_col: &str,
    group_col: &str,
) -> Result<(Vec<String>, HashMap<String, String>)> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = rdr.headers()?.clone();
    let node = column(&headers, node_col)?;
    let group = column(&headers, group_col).ok();

    let mut nodes = Vec::new();
    let mut groups = HashMap::new();
    for record in rdr.records() {
        let record = record?;
        let Some(label) = field(&record, node) else {
            continue;
        };
        nodes.push(label.to_string());
        if let Some(g) = group.and_then(|g| field(&record, g)) {
            groups.insert(label.to_string(), g.to_string());
        }
    }
    debug!(nodes = nodes.len(), grouped = groups.len(), "node table read");
    Ok((nodes, groups))
}

/// Node labels in first-appearance order across `edges`.
pub fn nodes_from_edges(edges: &[(String, String)]) -> Vec<String> {
    let mut input = GraphInput::default();
    let mut seen = HashSet::new();
    for (a, b) in edges {
        input.add_node(&mut seen, a);
        input.add_node(&mut seen, b);
    }
    input.nodes
}

fn column(headers: &StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| Error::MissingColumn {
            column: name.to_string(),
        })
}

fn field(record: &StringRecord, idx: usize) -> Option<&str> {
    record
        .get(idx)
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("nan"))
}

#[cfg(test)]
#[path = "../tests/rust/test_ingest.rs"]
mod tests;
