use std::env;
use std::process;

use anyhow::{anyhow, Result};
use lazy_static::lazy_static;

use crate::{COMMIT_ID, PKG_NAME, PKG_VERSION};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub verbose: bool, // -v
    pub brief: bool,   // -b
    pub version: bool, // -V
    pub names: Vec<String>,
}

lazy_static! {

    // Command line configuration
    pub static ref CONFIG: Config = Config::cmdline();
}

/* Chappell's lightweight getopt() for rust */
impl Config {
    pub fn usage() {
        eprintln!("Usage: {PKG_NAME} [-v] [-b] [-V] [--] [names...]");
        eprintln!("       -v            verbose (debug logging)");
        eprintln!("       -b            brief, print the MIME type only");
        eprintln!("       -V            print version and exit");
        eprintln!("       names         file names to resolve; read one per line from stdin if none");
    }

    pub fn cmdline() -> Config {
        match Self::parse(env::args().skip(1)) {
            Ok(config) => config,
            Err(e) => {
                if !e.to_string().is_empty() {
                    eprintln!("{e}");
                }
                Self::usage();
                process::exit(1);
            }
        }
    }

    /// Parse arguments, not including the program name. `-h` surfaces as an
    /// error with an empty message so that callers print usage only.
    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Config> {
        let mut config = Config::default();

        let mut args = args.into_iter();
        while let Some(a) = args.next() {
            match a.as_str() {
                "-v" => config.verbose = true,
                "-b" => config.brief = true,
                "-V" => config.version = true,
                "-h" | "-?" => return Err(anyhow!("")),
                "--" => {
                    config.names.extend(args.by_ref());
                    break;
                }
                // A lone "-" is a name, anything else dash-prefixed is not
                s if s.starts_with('-') && s.len() > 1 => {
                    return Err(anyhow!("Unknown option {s}"));
                }
                _ => config.names.push(a),
            };
        }

        Ok(config)
    }

    pub fn version_string() -> String {
        format!("{PKG_NAME} {PKG_VERSION} ({COMMIT_ID})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn names_and_flags() {
        let config = Config::parse(args(&["-v", "a.png", "-b", "b.txt"])).unwrap();
        assert!(config.verbose);
        assert!(config.brief);
        assert!(!config.version);
        assert_eq!(config.names, args(&["a.png", "b.txt"]));
    }

    #[test]
    fn empty_args() {
        assert_eq!(Config::parse(Vec::new()).unwrap(), Config::default());
    }

    #[test]
    fn double_dash_ends_options() {
        let config = Config::parse(args(&["--", "-v", "-weird.txt"])).unwrap();
        assert!(!config.verbose);
        assert_eq!(config.names, args(&["-v", "-weird.txt"]));
    }

    #[test]
    fn unknown_option_is_an_error() {
        let err = Config::parse(args(&["-x"])).unwrap_err();
        assert!(err.to_string().contains("-x"));
    }

    #[test]
    fn help_is_an_empty_error() {
        assert_eq!(Config::parse(args(&["-h"])).unwrap_err().to_string(), "");
        assert!(Config::parse(args(&["-?"])).is_err());
    }

    #[test]
    fn single_dash_is_a_name() {
        assert_eq!(Config::parse(args(&["-"])).unwrap().names, args(&["-"]));
    }

    #[test]
    fn version_mentions_package() {
        assert!(Config::version_string().starts_with(PKG_NAME));
    }
}
