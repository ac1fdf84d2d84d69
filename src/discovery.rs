//! Input discovery for the CLI: expands the given files and directories
//! into a validated, ordered list of text files to annotate.

use anyhow::{bail, Context, Result};
use glob::glob;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

/// Configuration for input discovery behavior.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryConfig {
    /// Whether to fail fast on the first problem input or skip it.
    pub fail_fast: bool,
}

/// Expand `inputs` into concrete files. Plain files are taken as-is;
/// directories are searched recursively for `*.txt`. The result is
/// sorted and de-duplicated.
pub async fn collect_input_files(
    inputs: &[PathBuf],
    config: DiscoveryConfig,
) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in inputs {
        match fs::metadata(input).await {
            Ok(metadata) if metadata.is_dir() => {
                expand_directory(input, &config, &mut files)?;
            }
            Ok(metadata) if metadata.is_file() => {
                debug!("input file: {}", input.display());
                files.push(input.clone());
            }
            Ok(_) => {
                if config.fail_fast {
                    bail!("input is neither a file nor a directory: {}", input.display());
                }
                warn!("skipping input that is neither file nor directory: {}", input.display());
            }
            Err(e) => {
                if config.fail_fast {
                    return Err(e)
                        .with_context(|| format!("cannot access input: {}", input.display()));
                }
                warn!("skipping inaccessible input {}: {}", input.display(), e);
            }
        }
    }

    files.sort();
    files.dedup();

    info!("discovered {} input files", files.len());
    Ok(files)
}

/// Search a directory recursively for `*.txt` files.
fn expand_directory(
    dir: &Path,
    config: &DiscoveryConfig,
    files: &mut Vec<PathBuf>,
) -> Result<()> {
    let pattern = format!("{}/**/*.txt", dir.display());
    debug!("expanding directory with pattern: {}", pattern);

    let paths = glob(&pattern)
        .with_context(|| format!("invalid glob pattern for directory: {}", dir.display()))?;

    for entry in paths {
        match entry {
            Ok(path) => {
                debug!("found file: {}", path.display());
                files.push(path);
            }
            Err(e) => {
                if config.fail_fast {
                    bail!("glob iteration error under {}: {}", dir.display(), e);
                }
                warn!("skipping unreadable entry under {}: {}", dir.display(), e);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
        let file_path = dir.join(name);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&file_path, content).await?;
        Ok(file_path)
    }

    #[tokio::test]
    async fn test_plain_files_pass_through() {
        let temp_dir = TempDir::new().unwrap();
        let file = create_test_file(temp_dir.path(), "doc.txt", "text").await.unwrap();
        let other = create_test_file(temp_dir.path(), "notes.md", "text").await.unwrap();

        // Explicitly named files are accepted regardless of extension.
        let files = collect_input_files(
            &[file.clone(), other.clone()],
            DiscoveryConfig::default(),
        )
        .await
        .unwrap();

        assert_eq!(files, {
            let mut expected = vec![file, other];
            expected.sort();
            expected
        });
    }

    #[tokio::test]
    async fn test_directory_expands_to_txt_files() {
        let temp_dir = TempDir::new().unwrap();
        create_test_file(temp_dir.path(), "a.txt", "x").await.unwrap();
        create_test_file(temp_dir.path(), "sub/b.txt", "x").await.unwrap();
        create_test_file(temp_dir.path(), "c.md", "x").await.unwrap();

        let files = collect_input_files(
            &[temp_dir.path().to_path_buf()],
            DiscoveryConfig::default(),
        )
        .await
        .unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|p| p.extension().unwrap() == "txt"));
    }

    #[tokio::test]
    async fn test_missing_input_skipped_by_default() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("absent.txt");
        let present = create_test_file(temp_dir.path(), "here.txt", "x").await.unwrap();

        let files = collect_input_files(
            &[missing, present.clone()],
            DiscoveryConfig::default(),
        )
        .await
        .unwrap();

        assert_eq!(files, vec![present]);
    }

    #[tokio::test]
    async fn test_missing_input_fails_fast() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("absent.txt");

        let result =
            collect_input_files(&[missing], DiscoveryConfig { fail_fast: true }).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_duplicate_inputs_deduplicated() {
        let temp_dir = TempDir::new().unwrap();
        let file = create_test_file(temp_dir.path(), "dup.txt", "x").await.unwrap();

        let files = collect_input_files(
            &[file.clone(), file.clone(), temp_dir.path().to_path_buf()],
            DiscoveryConfig::default(),
        )
        .await
        .unwrap();

        assert_eq!(files.len(), 1);
    }
}
