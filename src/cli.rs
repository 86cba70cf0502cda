/*
   Copyright (C) 2026 l5yth

   Licensed under the Apache License, Version 2.0 (the "License");
   you may not use this file except in compliance with the License.
   You may obtain a copy of the License at

       http://www.apache.org/licenses/LICENSE-2.0

   Unless required by applicable law or agreed to in writing, software
   distributed under the License is distributed on an "AS IS" BASIS,
   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
   See the License for the specific language governing permissions and
   limitations under the License.
*/

//! Command-line parsing and usage text.

use anyhow::{Result, anyhow};

/// Parsed command-line configuration.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub show_help: bool,
    pub show_version: bool,
}

/// Human-readable CLI usage text.
pub fn usage() -> &'static str {
    "Usage: tcalc [OPTIONS]

Four-function calculator in a terminal UI.

Options:
  -h, --help     Show this help text
  -V, --version  Show version information"
}

/// One-line version banner.
pub fn version_text() -> String {
    format!(
        "tcalc v{} - four-function calculator in a terminal UI\napache v2 (c) 2026 l5yth",
        env!("CARGO_PKG_VERSION")
    )
}

/// Parse command-line arguments into a [`Config`].
pub fn parse_args<I, S>(args: I) -> Result<Config>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut cfg = Config {
        show_help: false,
        show_version: false,
    };

    let mut it = args.into_iter().map(Into::into);
    let _program = it.next();

    for arg in it {
        match arg.as_str() {
            "-h" | "--help" => cfg.show_help = true,
            "-V" | "--version" => cfg.show_version = true,
            _ => return Err(anyhow!("unknown argument: {arg}\n\n{}", usage())),
        }
    }

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_args_defaults() {
        let cfg = parse_args(vec!["tcalc"]).expect("default args should parse");
        assert!(!cfg.show_help);
        assert!(!cfg.show_version);
    }

    #[test]
    fn parse_args_help() {
        let cfg = parse_args(vec!["tcalc", "-h"]).expect("help should parse");
        assert!(cfg.show_help);
        let cfg = parse_args(vec!["tcalc", "--help"]).expect("help should parse");
        assert!(cfg.show_help);
    }

    #[test]
    fn parse_args_version() {
        let cfg = parse_args(vec!["tcalc", "-V"]).expect("version should parse");
        assert!(cfg.show_version);
        let cfg = parse_args(vec!["tcalc", "--version"]).expect("version should parse");
        assert!(cfg.show_version);
    }

    #[test]
    fn parse_args_rejects_unknown_arg() {
        let err = parse_args(vec!["tcalc", "--bogus"]).expect_err("unknown arg should fail");
        assert!(err.to_string().contains("unknown argument"));
        assert!(err.to_string().contains("Usage: tcalc"));
    }

    #[test]
    fn usage_mentions_both_flags() {
        assert!(usage().contains("--help"));
        assert!(usage().contains("--version"));
    }

    #[test]
    fn version_text_carries_package_version() {
        assert!(version_text().contains(env!("CARGO_PKG_VERSION")));
    }
}
