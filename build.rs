use std::collections::BTreeMap;
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{anyhow, Context, Result};
use regex::Regex;

const TABLE_SOURCE: &str = "data/mime.types";
const TABLE_OUTPUT: &str = "mime_table.rs";

pub fn main() -> Result<()> {
    // git show -s --format="%ad %h %an <%ae> (%s)"
    let git_hash = Command::new("git")
        .args(["show", "-s", "--format=%ad %h %an <%ae> (%s)"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| String::from("unknown"));
    println!("cargo:rustc-env=GIT_COMMITID={git_hash}");

    println!("cargo:rerun-if-changed={TABLE_SOURCE}");
    println!("cargo:rerun-if-changed=build.rs");

    let source = fs::read_to_string(TABLE_SOURCE)
        .with_context(|| format!("reading extension table {TABLE_SOURCE}"))?;
    let table = parse_mime_types(&source)?;

    let out_dir = PathBuf::from(env::var("OUT_DIR").context("OUT_DIR not set")?);
    write_table(&out_dir.join(TABLE_OUTPUT), &table)?;

    Ok(())
}

// Parse mime.types format: "type/subtype ext ext ..." per line, '#' comments.
// Keys come back sorted so the generated file is stable between builds.
fn parse_mime_types(source: &str) -> Result<BTreeMap<String, String>> {
    let mimetype_re = Regex::new(r"^[a-z0-9][a-z0-9!#$&^_.+-]*/[a-z0-9][a-z0-9!#$&^_.+-]*$")?;
    let extension_re = Regex::new(r"^[a-z0-9][a-z0-9_+-]*$")?;

    let mut table = BTreeMap::<String, String>::new();

    for (index, line) in source.lines().enumerate() {
        let line_no = index + 1;
        let line = match line.split_once('#') {
            Some((data, _comment)) => data,
            None => line,
        };

        let mut tokens = line.split_whitespace();
        let mimetype = match tokens.next() {
            Some(t) => t,
            None => continue,
        };

        if !mimetype_re.is_match(mimetype) {
            return Err(anyhow!("{TABLE_SOURCE}:{line_no}: malformed MIME type '{mimetype}'"));
        }

        for extension in tokens {
            if !extension_re.is_match(extension) {
                return Err(anyhow!(
                    "{TABLE_SOURCE}:{line_no}: extension '{extension}' must be lowercase and contain no '.'"
                ));
            }
            if let Some(previous) = table.insert(extension.to_string(), mimetype.to_string()) {
                return Err(anyhow!(
                    "{TABLE_SOURCE}:{line_no}: extension '{extension}' already mapped to {previous}"
                ));
            }
        }
    }

    if table.is_empty() {
        return Err(anyhow!("{TABLE_SOURCE}: no extensions defined"));
    }

    Ok(table)
}

fn write_table(path: &Path, table: &BTreeMap<String, String>) -> Result<()> {
    let mut out = String::new();
    writeln!(out, "// Generated by build.rs from {TABLE_SOURCE}. Do not edit.")?;
    writeln!(out, "static EXTENSION_TABLE: &[(&str, &str)] = &[")?;
    for (extension, mimetype) in table {
        writeln!(out, "    ({extension:?}, {mimetype:?}),")?;
    }
    writeln!(out, "];")?;

    fs::write(path, out).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
