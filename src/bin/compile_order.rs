//! Interactive front end: reads one `file: includes` line per source file from
//! stdin and prints the order in which the files can be compiled.
//!
//! Input tokens are normalized before they reach the graph: every `.cpp`
//! suffix and `,` separator is stripped, and a lone `-` on the includes side
//! means the file has no dependencies.

use std::io::{self, BufRead};

use linkorder::prelude::*;

const NO_DEPENDENCIES: &str = "-";
const SOURCE_SUFFIX: &str = ".cpp";

/// Removes every occurrence of `pattern` from `line`.
fn delete_substrings(line: &str, pattern: &str) -> String {
    line.replace(pattern, "")
}

fn normalize_name(token: &str) -> &str {
    let token = token.trim();
    token.strip_suffix(SOURCE_SUFFIX).unwrap_or(token)
}

fn normalize_includes(line: &str) -> Vec<String> {
    if line.trim() == NO_DEPENDENCIES {
        return Vec::new();
    }
    let line = delete_substrings(line, SOURCE_SUFFIX);
    let line = delete_substrings(&line, ",");
    line.split_whitespace().map(str::to_owned).collect()
}

/// Parses a `file: includes` line. A line without `:` declares a file with no
/// dependencies. Blank lines yield `None`.
fn parse_line(line: &str) -> Option<(String, Vec<String>)> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (name, includes) = match line.split_once(':') {
        Some((name, includes)) => (name, includes),
        None => (line, ""),
    };
    let name = normalize_name(name);
    if name.is_empty() {
        return None;
    }
    Some((name.to_owned(), normalize_includes(includes)))
}

fn main() -> io::Result<()> {
    let mut graph = DependencyGraph::new();

    for line in io::stdin().lock().lines() {
        let line = line?;
        if let Some((name, includes)) = parse_line(&line) {
            graph.insert_node(&name);
            graph.insert_dependencies(&name, includes);
        }
    }

    match graph.compute_order() {
        Ok(order) => println!("The files can be compiled in the order {}", order),
        Err(GraphHasCycle) => {
            println!("The files cannot be compiled as they have a cyclic dependency")
        }
    }

    Ok(())
}
