use crate::domain::traits::ProfileLocator;
use crate::infrastructure::chrome_layout::ChromeLayout;
use crate::interface::format::{render, OutputFormat};
use crate::usecase::list::list_bookmarks;
use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use std::convert::Infallible;
use std::ffi::OsString;
use std::io::Write;

#[derive(Debug, Parser)]
#[command(
    name = "chrome-bookmarks",
    version,
    about = "CLI tool for interacting with Chrome resources"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Work with bookmarks
    #[command(subcommand)]
    Bookmarks(BookmarksCommand),
}

#[derive(Debug, Subcommand)]
enum BookmarksCommand {
    /// List Chrome bookmarks from all profiles
    List {
        /// Output format (json, csv, text, raw, markdown)
        #[arg(short, long, value_name = "type", default_value = "json", value_parser = parse_format)]
        format: OutputFormat,
    },
}

fn parse_format(s: &str) -> Result<OutputFormat, Infallible> {
    Ok(OutputFormat::parse_lenient(s))
}

pub async fn run() -> Result<()> {
    run_with_args(std::env::args_os()).await
}

pub async fn run_with_args<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print()?;
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    match cli.command {
        Command::Bookmarks(BookmarksCommand::List { format }) => {
            let layout = ChromeLayout::from_env()?;
            let rendered = list_command(&layout, format).await?;

            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{rendered}").context("writing output")?;
            Ok(())
        }
    }
}

/// `bookmarks list` without the process plumbing: returns the rendering.
pub async fn list_command(locator: &dyn ProfileLocator, format: OutputFormat) -> Result<String> {
    let (records, _stats) = list_bookmarks(locator).await?;
    render(&records, format).context("rendering bookmarks")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::platform::Platform;
    use std::path::Path;
    use tempfile::tempdir;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(args)
    }

    fn list_format(cli: Cli) -> OutputFormat {
        match cli.command {
            Command::Bookmarks(BookmarksCommand::List { format }) => format,
        }
    }

    #[test]
    fn format_defaults_to_json() {
        let cli = parse(&["bin", "bookmarks", "list"]).expect("parse");
        assert_eq!(list_format(cli), OutputFormat::Json);
    }

    #[test]
    fn format_accepts_short_and_long_flags() {
        let cli = parse(&["bin", "bookmarks", "list", "-f", "csv"]).expect("parse");
        assert_eq!(list_format(cli), OutputFormat::Csv);

        let cli = parse(&["bin", "bookmarks", "list", "--format", "markdown"]).expect("parse");
        assert_eq!(list_format(cli), OutputFormat::Markdown);
    }

    #[test]
    fn unknown_format_falls_back_to_json() {
        let cli = parse(&["bin", "bookmarks", "list", "--format", "unknown-value"]).expect("parse");
        assert_eq!(list_format(cli), OutputFormat::Json);
    }

    #[test]
    fn parse_rejects_unknown_subcommand() {
        let err = parse(&["bin", "bookmarks", "delete"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
    }

    #[test]
    fn version_flag_is_recognized() {
        let err = parse(&["bin", "--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
        assert!(err.to_string().contains("1.0.0"));
    }

    #[tokio::test]
    async fn run_with_args_version_succeeds() {
        run_with_args(["bin", "--version"]).await.expect("version");
    }

    #[tokio::test]
    async fn run_with_args_missing_subcommand_is_error() {
        assert!(run_with_args(["bin"]).await.is_err());
    }

    fn write_chrome_home(home: &Path) {
        let root = home.join(".config").join("google-chrome");
        std::fs::create_dir_all(root.join("Default")).expect("mkdir");
        std::fs::write(
            root.join("Local State"),
            r#"{"profile":{"info_cache":{"Default":{"name":"Person 1","user_name":"p1@example.com"}}}}"#,
        )
        .expect("write registry");
        std::fs::write(
            root.join("Default").join("Bookmarks"),
            r#"{"roots":{"bookmark_bar":{"type":"folder","name":"Bookmarks bar","children":[
                {"type":"url","name":"A, B","url":"https://ab.example/","date_added":"11644473600000000","guid":"ab"}
            ]}}}"#,
        )
        .expect("write bookmarks");
    }

    #[tokio::test]
    async fn list_command_renders_unknown_format_as_json() {
        let home = tempdir().expect("tempdir");
        write_chrome_home(home.path());
        let layout = ChromeLayout::new(Platform::Linux, home.path());

        let json = list_command(&layout, OutputFormat::Json).await.expect("json");
        let fallback = list_command(&layout, OutputFormat::parse_lenient("unknown-value"))
            .await
            .expect("fallback");
        assert_eq!(json, fallback);
        assert!(json.contains("\"folder_path\": \"Bookmarks bar\""));
    }

    #[tokio::test]
    async fn list_command_csv_keeps_comma_inside_quotes() {
        let home = tempdir().expect("tempdir");
        write_chrome_home(home.path());
        let layout = ChromeLayout::new(Platform::Linux, home.path());

        let csv = list_command(&layout, OutputFormat::Csv).await.expect("csv");
        assert!(csv.lines().nth(1).expect("row").starts_with("\"A, B\","));
    }

    #[tokio::test]
    async fn list_command_fails_on_unsupported_platform() {
        let home = tempdir().expect("tempdir");
        let layout = ChromeLayout::new(Platform::Other("plan9".to_string()), home.path());

        let err = list_command(&layout, OutputFormat::Json).await.unwrap_err();
        assert!(err.to_string().contains("Unsupported OS"));
    }
}
