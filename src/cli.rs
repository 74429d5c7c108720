use std::io::{BufRead, Write};

use anyhow::Result;
use log::debug;

use crate::config::Config;
use crate::mimetype::Mimetypes;

// Resolve every configured name, or every non-blank line of `input` when
// none were given on the command line, writing one result per line.
pub fn run<R: BufRead, W: Write>(config: &Config, input: R, out: &mut W) -> Result<()> {
    let mimetypes = Mimetypes::instance();

    if config.version {
        writeln!(out, "{}", Config::version_string())?;
        return Ok(());
    }

    if config.names.is_empty() {
        debug!("No names given, reading from stdin");
        for line in input.lines() {
            let name = line?;
            if name.trim().is_empty() {
                continue;
            }
            write_result(config, mimetypes, &name, out)?;
        }
    } else {
        for name in &config.names {
            write_result(config, mimetypes, name, out)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn write_result<W: Write>(config: &Config, mimetypes: &Mimetypes, name: &str, out: &mut W) -> Result<()> {
    let mimetype = mimetypes.mimetype(name);
    if config.brief {
        writeln!(out, "{mimetype}")?;
    } else {
        writeln!(out, "{name}: {mimetype}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_to_string(config: &Config, input: &str) -> String {
        let mut out = Vec::<u8>::new();
        run(config, Cursor::new(input), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn names_from_arguments() {
        let config = Config {
            names: vec!["image.JPeG".to_string(), "test".to_string()],
            ..Config::default()
        };
        assert_eq!(
            run_to_string(&config, "ignored.png\n"),
            "image.JPeG: image/jpeg\ntest: application/octet-stream\n"
        );
    }

    #[test]
    fn brief_output() {
        let config = Config {
            brief: true,
            names: vec!["test.uvvi".to_string()],
            ..Config::default()
        };
        assert_eq!(run_to_string(&config, ""), "image/vnd.dece.graphic\n");
    }

    #[test]
    fn names_from_input_skip_blank_lines() {
        let config = Config::default();
        assert_eq!(
            run_to_string(&config, "a.css\r\n\n   \nb.unknown\n"),
            "a.css: text/css\nb.unknown: application/octet-stream\n"
        );
    }

    #[test]
    fn version_only() {
        let config = Config {
            version: true,
            names: vec!["a.png".to_string()],
            ..Config::default()
        };
        assert_eq!(run_to_string(&config, ""), format!("{}\n", Config::version_string()));
    }
}
