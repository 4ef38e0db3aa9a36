//! CLI arguments and parsing

use crate::config::{
    kerberos_from_parts, ExportConfig, DEFAULT_QUERY, DEFAULT_ROWS, DEFAULT_SERVER, DEFAULT_SORT,
    DEFAULT_WT,
};
use crate::error::Result;
use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

/// Export documents from a Solr collection as JSON lines
#[derive(Parser, Debug)]
#[command(name = "solrdump")]
#[command(author, about, long_about = None, disable_version_flag = true)]
pub struct Cli {
    /// SOLR server, host, port and collection
    #[arg(long, default_value = DEFAULT_SERVER, allow_hyphen_values = true)]
    pub server: String,

    /// Field or fields to export, separate multiple values by comma
    #[arg(long = "fl", default_value = "", allow_hyphen_values = true)]
    pub fields: String,

    /// SOLR query
    #[arg(long = "q", default_value = DEFAULT_QUERY, allow_hyphen_values = true)]
    pub query: String,

    /// Number of rows returned per request
    #[arg(long, default_value_t = DEFAULT_ROWS, allow_hyphen_values = true)]
    pub rows: u32,

    /// Sort order (only unique fields allowed)
    #[arg(long, default_value = DEFAULT_SORT, allow_hyphen_values = true)]
    pub sort: String,

    /// Output format
    #[arg(long, default_value = DEFAULT_WT, allow_hyphen_values = true)]
    pub wt: String,

    /// Show progress
    #[arg(long, action = ArgAction::Set, num_args = 0..=1, require_equals = true,
          default_value_t = false, default_missing_value = "true")]
    pub verbose: bool,

    /// Show version and exit
    #[arg(long, action = ArgAction::Set, num_args = 0..=1, require_equals = true,
          default_value_t = false, default_missing_value = "true")]
    pub version: bool,

    /// Skip certificate verification
    #[arg(long = "k", action = ArgAction::Set, num_args = 0..=1, require_equals = true,
          default_value_t = false, default_missing_value = "true")]
    pub insecure: bool,

    /// Keytab location to use for authentication
    #[arg(long, allow_hyphen_values = true)]
    pub keytab: Option<PathBuf>,

    /// Kerberos principal to use for authentication
    #[arg(long, allow_hyphen_values = true)]
    pub principal: Option<String>,

    /// Request timeout in seconds (no timeout when unset)
    #[arg(long, allow_hyphen_values = true)]
    pub timeout: Option<u64>,
}

impl Cli {
    /// Parse process arguments, accepting single-dash long flags
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    /// Parse an argument list, accepting single-dash long flags
    pub fn try_parse_normalized<I, T>(args: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_args(args))
    }

    /// Build the export configuration
    pub fn to_config(&self) -> Result<ExportConfig> {
        let mut config = ExportConfig::new(&self.server)
            .with_fields(&self.fields)
            .with_query(&self.query)
            .with_rows(self.rows)
            .with_sort(&self.sort)
            .with_wt(&self.wt)
            .with_verbose(self.verbose)
            .with_accept_invalid_certs(self.insecure);
        if let Some(secs) = self.timeout {
            config = config.with_timeout(std::time::Duration::from_secs(secs));
        }
        config.kerberos = kerberos_from_parts(self.keytab.clone(), self.principal.clone())?;
        Ok(config)
    }
}

/// Flags that consume the following argument as their value
const VALUE_FLAGS: &[&str] = &[
    "server",
    "fl",
    "q",
    "rows",
    "sort",
    "wt",
    "keytab",
    "principal",
    "timeout",
];

/// Rewrite `-name` style flags to `--name` so clap understands them.
///
/// The program name, values that do not look like flags, arguments already
/// using `--` and everything after a bare `--` are left alone. The argument
/// after a value-taking flag written without `=` is its value and is never
/// rewritten, so `-q -type:draft` keeps its negative query. `-h` becomes
/// `--help`.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;
    let mut expect_value = false;

    for (i, arg) in args.into_iter().enumerate() {
        let arg: OsString = arg.into();
        if i == 0 || passthrough || expect_value {
            expect_value = false;
            out.push(arg);
            continue;
        }
        let Some(s) = arg.to_str() else {
            out.push(arg);
            continue;
        };
        if s == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }
        if s == "-h" {
            out.push(OsString::from("--help"));
            continue;
        }
        let single_dash_flag = s
            .strip_prefix('-')
            .and_then(|rest| rest.chars().next())
            .is_some_and(|c| c.is_ascii_alphabetic());
        let name = s.trim_start_matches('-');
        expect_value = s.starts_with('-') && VALUE_FLAGS.contains(&name);
        if single_dash_flag {
            out.push(OsString::from(format!("-{s}")));
        } else {
            out.push(arg);
        }
    }
    out
}
