mod cli;
mod error;
mod read;

use std::io::Write;

use clap::Parser;
use lexprep::{Preprocessor, PreprocessorConfig, Transformer};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use crate::{
    cli::Cli,
    error::{Error, IoError},
    read::{read_file, read_stdin, split_documents},
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()).await.and_then(print) {
        error!("{e}");
        std::process::exit(1);
    }
}

/// The JSON lemma lists of every input document.
async fn run(cli: Cli) -> Result<String, Error> {
    let config = configure(&cli)?;
    let preprocessor = Preprocessor::from_config(&config)?;

    let mut documents = Vec::new();
    if cli.files.is_empty() {
        documents.extend(split_documents(read_stdin().await?, cli.lines));
    } else {
        for path in &cli.files {
            debug!(path = ?path, "reading document");
            documents.extend(split_documents(read_file(path).await?, cli.lines));
        }
    }

    let output = preprocessor.transform(&documents);
    info!(documents = output.len(), "preprocessed");

    let json = if cli.pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    }
    .map_err(|error| IoError::Serialization(error.to_string()))?;

    Ok(json)
}

fn print(json: String) -> Result<(), Error> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}").map_err(|error| IoError::Stdout(error.kind()))?;
    Ok(())
}

/// The config file, if any, with command-line overrides applied.
fn configure(cli: &Cli) -> Result<PreprocessorConfig, Error> {
    let mut config = match &cli.config {
        Some(path) => PreprocessorConfig::load(path)?,
        None => PreprocessorConfig::default(),
    };

    if let Some(path) = &cli.stopwords {
        config.stopwords = None;
        config.stopwords_file = Some(path.clone());
    }
    if let Some(language) = &cli.language {
        config.stopwords = None;
        config.stopwords_file = None;
        config.language = language.clone();
    }
    if let Some(dir) = &cli.wordnet {
        config.wordnet = Some(dir.clone());
    }
    if cli.no_lower {
        config.lower = false;
    }
    if cli.no_strip {
        config.strip = false;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use clap::Parser;

    use crate::{cli::Cli, configure, run};

    fn write_input(name: &str, text: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("lexprep-{name}-{}.txt", std::process::id()));
        std::fs::write(&path, text).unwrap();
        path
    }

    async fn run_with(path: &Path, flags: &[&str]) -> String {
        let mut args = vec!["lexprep-bin"];
        args.extend_from_slice(flags);
        args.push(path.to_str().unwrap());
        run(Cli::parse_from(args)).await.unwrap()
    }

    #[tokio::test]
    async fn test_run_one_document_per_file() {
        let path = write_input("run-file", "The cats are running.\nFoxes jumped.\n");
        let json = run_with(&path, &[]).await;
        std::fs::remove_file(&path).unwrap();

        assert_eq!(json, r#"[["cat","run","fox","jump"]]"#);
    }

    #[tokio::test]
    async fn test_run_lines() {
        let path = write_input("run-lines", "The cats are running.\n\nFoxes jumped.\n");
        let json = run_with(&path, &["--lines"]).await;
        std::fs::remove_file(&path).unwrap();

        assert_eq!(json, r#"[["cat","run"],["fox","jump"]]"#);
    }

    #[tokio::test]
    async fn test_run_pretty() {
        let path = write_input("run-pretty", "Foxes jumped.");
        let json = run_with(&path, &["--pretty"]).await;
        std::fs::remove_file(&path).unwrap();

        assert_eq!(json, "[\n  [\n    \"fox\",\n    \"jump\"\n  ]\n]");
    }

    #[tokio::test]
    async fn test_run_missing_file() {
        let cli = Cli::parse_from(["lexprep-bin", "does/not/exist.txt"]);
        assert!(run(cli).await.is_err());
    }

    #[test]
    fn test_configure_overrides() {
        let cli = Cli::parse_from(["lexprep-bin", "--no-strip", "-w", "/opt/wn", "-l", "fr"]);
        let config = configure(&cli).unwrap();

        assert!(config.lower);
        assert!(!config.strip);
        assert_eq!(config.language, "fr");
        assert_eq!(config.wordnet, Some(PathBuf::from("/opt/wn")));
    }

    #[test]
    fn test_configure_missing_config_file() {
        let cli = Cli::parse_from(["lexprep-bin", "-c", "does/not/exist.json"]);
        assert!(configure(&cli).is_err());
    }
}
