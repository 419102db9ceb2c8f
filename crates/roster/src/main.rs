//! CLI entry point for roster.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use roster_app::{EmployeeRepository, KeyedStore, RosterConfig, Session};
use roster_core::SortKey;
use roster_store::FileStore;
use time::OffsetDateTime;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

use commands::EmployeeFields;

mod commands;
mod view;

/// Employee directory stored as local JSON.
#[derive(Parser, Debug)]
#[command(
    name = "roster",
    version,
    about = "roster: an employee directory with search, filters and JSON import/export"
)]
struct Cli {
    /// Configuration file (defaults to `<config dir>/roster/config.toml`).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the storage directory.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Administrator email.
    #[arg(long, global = true, env = "ROSTER_EMAIL")]
    email: Option<String>,

    /// Administrator password.
    #[arg(long, global = true, env = "ROSTER_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show dashboard counters.
    Stats,

    /// List employees matching the given filters.
    Ls {
        /// Case-insensitive text matched against name, NIK, email and position.
        #[arg(short = 's', long)]
        search: Option<String>,
        /// Division to keep, or `all`.
        #[arg(long, default_value = "all")]
        division: String,
        /// Status to keep, or `all`.
        #[arg(long, default_value = "all")]
        status: String,
        /// Sort key: name, division, position or hireDate.
        #[arg(long, default_value = "name")]
        sort: SortKey,
        #[arg(long, value_enum, default_value_t = LsFormat::Table)]
        format: LsFormat,
    },

    /// Show every field of one employee.
    Show {
        #[arg(long)]
        id: String,
    },

    /// List the known divisions.
    Divisions,

    /// Create a new employee.
    Add {
        #[command(flatten)]
        fields: EmployeeFields,
    },

    /// Edit an existing employee; omitted fields keep their values.
    Edit {
        #[arg(long)]
        id: String,
        #[command(flatten)]
        fields: EmployeeFields,
    },

    /// Delete an employee.
    Rm {
        #[arg(long)]
        id: String,
    },

    /// Export every employee as a JSON array.
    Export {
        /// Destination file; prints to stdout when omitted.
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Replace every employee with the contents of a JSON file.
    Import {
        #[arg(long)]
        file: PathBuf,
    },
}

/// Output format for `ls`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum LsFormat {
    Table,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    install_tracing();
    execute_command(cli)
}

fn execute_command(cli: Cli) -> Result<()> {
    let Cli {
        config,
        data_dir,
        email,
        password,
        cmd,
    } = cli;

    let config = RosterConfig::load(config.as_deref())?;
    let dir = match data_dir {
        Some(dir) => dir,
        None => config.storage.data_dir()?,
    };
    let now = OffsetDateTime::now_utc();
    let storage = config.storage;
    let mut session = Session::login(
        &config.auth,
        email.as_deref().unwrap_or_default(),
        password.as_deref().unwrap_or_default(),
        || {
            EmployeeRepository::open(
                KeyedStore::new(FileStore::new(&dir), storage.key),
                storage.seed_demo,
                now,
            )
        },
        config.dashboard,
    )
    .map_err(commands::user_facing)?;

    let result = commands::run(cmd, &mut session, now);
    for notice in session.take_notices() {
        view::print_notice(&notice);
    }
    result
}

fn install_tracing() {
    // RUST_LOG is passed through EnvFilter; the default level is INFO. Logs go to stderr.
    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_span_events(FmtSpan::NONE)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ls_command() {
        let cli = Cli::parse_from([
            "roster",
            "--email",
            "admin@hr.com",
            "--password",
            "admin123",
            "ls",
            "--search",
            "andi",
            "--division",
            "Engineering",
            "--sort",
            "hire-date",
            "--format",
            "json",
        ]);

        assert_eq!(cli.email.as_deref(), Some("admin@hr.com"));
        match cli.cmd {
            Command::Ls {
                search,
                division,
                status,
                sort,
                format,
            } => {
                assert_eq!(search.as_deref(), Some("andi"));
                assert_eq!(division, "Engineering");
                assert_eq!(status, "all");
                assert_eq!(sort, SortKey::HireDate);
                assert_eq!(format, LsFormat::Json);
            }
            _ => panic!("expected ls command"),
        }
    }

    #[test]
    fn parse_ls_defaults() {
        let cli = Cli::parse_from(["roster", "ls"]);
        match cli.cmd {
            Command::Ls { sort, format, .. } => {
                assert_eq!(sort, SortKey::Name);
                assert_eq!(format, LsFormat::Table);
            }
            _ => panic!("expected ls command"),
        }
    }

    #[test]
    fn rejects_unknown_sort_key() {
        assert!(Cli::try_parse_from(["roster", "ls", "--sort", "salary"]).is_err());
    }

    #[test]
    fn parse_add_command() {
        let cli = Cli::parse_from([
            "roster",
            "add",
            "--name",
            "Dewi",
            "--nik",
            "EMP-009",
            "--division",
            "Ops",
            "--position",
            "Coordinator",
            "--hobbies",
            "Reading, Chess",
        ]);
        match cli.cmd {
            Command::Add { fields } => {
                assert_eq!(fields.name.as_deref(), Some("Dewi"));
                assert_eq!(fields.hobbies.as_deref(), Some("Reading, Chess"));
                assert!(fields.status.is_none());
            }
            _ => panic!("expected add command"),
        }
    }

    #[test]
    fn photo_sources_are_exclusive() {
        let result = Cli::try_parse_from([
            "roster",
            "add",
            "--photo-url",
            "https://example.com/a.png",
            "--photo-file",
            "a.png",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["roster", "export", "--out", "employees.json", "--data-dir", "/tmp/r"]);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/r")));
        match cli.cmd {
            Command::Export { out } => assert_eq!(out, Some(PathBuf::from("employees.json"))),
            _ => panic!("expected export command"),
        }
    }

    #[test]
    fn wrong_credentials_stop_before_any_command() {
        let dir = tempfile::tempdir().unwrap_or_else(|err| panic!("tempdir: {err}"));
        let config = dir.path().join("config.toml");
        std::fs::write(&config, "").unwrap_or_else(|err| panic!("write config: {err}"));
        let data = dir.path().join("data");
        let cli = Cli::parse_from([
            "roster",
            "--config",
            config.to_str().unwrap_or_default(),
            "--data-dir",
            data.to_str().unwrap_or_default(),
            "--email",
            "admin@hr.com",
            "--password",
            "nope",
            "stats",
        ]);
        let err = execute_command(cli)
            .err()
            .unwrap_or_else(|| panic!("login must fail"));
        assert!(err.to_string().contains("Wrong email or password"));
        assert!(!data.exists(), "a rejected login must not create storage");
    }

    #[test]
    fn accepted_login_seeds_storage() {
        let dir = tempfile::tempdir().unwrap_or_else(|err| panic!("tempdir: {err}"));
        let config = dir.path().join("config.toml");
        std::fs::write(&config, "").unwrap_or_else(|err| panic!("write config: {err}"));
        let data = dir.path().join("data");
        let cli = Cli::parse_from([
            "roster",
            "--config",
            config.to_str().unwrap_or_default(),
            "--data-dir",
            data.to_str().unwrap_or_default(),
            "--email",
            "admin@hr.com",
            "--password",
            "admin123",
            "divisions",
        ]);
        execute_command(cli).unwrap_or_else(|err| panic!("command: {err:#}"));
        assert!(data.join("hr_employees_v1.json").is_file());
    }
}
