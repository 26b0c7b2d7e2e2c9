use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wzrdbrain::combo::{ComboConfig, ComboGenerator, TRICK_LIMIT};
use wzrdbrain::export::ComboRecord;
use wzrdbrain::library::MoveLibrary;

#[derive(Parser)]
#[command(name = "wzrdbrain")]
#[command(about = "Chain wizard skating moves into combos")]
struct Cmd {
    /// Print debug logs (RUST_LOG takes precedence)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Generate a combo
    Combo {
        /// Number of tricks, at most 100; drawn from the configured range when omitted
        #[arg(long, short = 'n')]
        count: Option<usize>,
        /// Highest move stage to draw from
        #[arg(long)]
        max_stage: Option<u32>,
        /// Seed for a reproducible combo
        #[arg(long)]
        seed: Option<u64>,
        /// JSON file with generation settings
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print a versioned JSON record instead of names
        #[arg(long)]
        json: bool,
    },
    /// Resolve a single move by id
    Trick {
        id: String,
        #[arg(long)]
        json: bool,
    },
    /// List the move catalog
    Moves {
        #[arg(long)]
        max_stage: Option<u32>,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    init_logging(cmd.verbose);
    match cmd.action {
        Action::Combo {
            count,
            max_stage,
            seed,
            config,
            json,
        } => combo(count, max_stage, seed, config, json),
        Action::Trick { id, json } => trick(&id, json),
        Action::Moves { max_stage } => moves(max_stage),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // `try_init` only fails if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_config(path: Option<PathBuf>) -> Result<ComboConfig> {
    let Some(path) = path else {
        return Ok(ComboConfig::default());
    };
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("reading config {}", path.display()))?;
    ComboConfig::from_json(&raw).with_context(|| format!("parsing config {}", path.display()))
}

/// Config file values, then command-line flags on top.
fn combo_settings(path: Option<PathBuf>, max_stage: Option<u32>) -> Result<ComboConfig> {
    let mut config = load_config(path)?;
    if let Some(max_stage) = max_stage {
        config = config.with_max_stage(max_stage);
    }
    Ok(config)
}

fn check_count(count: Option<usize>) -> Result<()> {
    match count {
        Some(n) if n > TRICK_LIMIT => bail!("count {n} is above the limit of {TRICK_LIMIT}"),
        _ => Ok(()),
    }
}

fn combo(
    count: Option<usize>,
    max_stage: Option<u32>,
    seed: Option<u64>,
    config: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    check_count(count)?;
    let config = combo_settings(config, max_stage)?;

    let generator = ComboGenerator::with_config(MoveLibrary::builtin(), config);
    let combo = match seed {
        Some(seed) => generator.generate(&mut StdRng::seed_from_u64(seed), count),
        None => generator.generate(&mut rand::thread_rng(), count),
    };

    let record = ComboRecord::new(&combo, count, generator.config().max_stage);
    if record.is_short() {
        tracing::info!(
            requested = ?count,
            target = combo.target(),
            built = combo.len(),
            "combo ended early, no compatible move"
        );
    }

    if json {
        println!("{}", record.to_json()?);
        return Ok(());
    }

    for (i, trick) in combo.iter().enumerate() {
        println!(
            "{}. {}  [{} -> {}]",
            i + 1,
            trick.name(),
            trick.entry().node(),
            trick.exit_node()
        );
    }
    Ok(())
}

fn trick(id: &str, json: bool) -> Result<()> {
    let trick = MoveLibrary::builtin().resolve(id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&trick.view())?);
        return Ok(());
    }

    println!("{} ({}, stage {})", trick.name(), trick.category(), trick.stage());
    println!("  entry: {}", trick.entry());
    println!("  exit:  {}", trick.exit());
    Ok(())
}

fn moves(max_stage: Option<u32>) -> Result<()> {
    let library = MoveLibrary::builtin();
    let max_stage = max_stage.unwrap_or(u32::MAX);

    for def in library.eligible(max_stage) {
        println!(
            "{:<16} stage {}  {:<10} {} -> {}  {}",
            def.id,
            def.stage,
            def.category,
            def.entry_node(),
            def.exit_node(),
            def.name
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn config_file(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn no_file_no_flags_is_default() {
        assert_eq!(combo_settings(None, None).unwrap(), ComboConfig::default());
    }

    #[test]
    fn file_values_are_loaded() {
        let file = config_file(r#"{ "max_stage": 2, "max_tricks": 3 }"#);
        let config = combo_settings(Some(file.path().to_path_buf()), None).unwrap();

        assert_eq!(config.max_stage, 2);
        assert_eq!(config.length_range(), (2, 3));
    }

    #[test]
    fn max_stage_flag_overrides_file() {
        let file = config_file(r#"{ "max_stage": 2, "min_tricks": 4 }"#);
        let config = combo_settings(Some(file.path().to_path_buf()), Some(4)).unwrap();

        assert_eq!(config.max_stage, 4);
        assert_eq!(config.min_tricks, 4);
    }

    #[test]
    fn missing_or_bad_file_fails() {
        let missing = std::env::temp_dir().join(format!("{}.json", uuid::Uuid::new_v4()));
        let err = combo_settings(Some(missing), None).unwrap_err();
        assert!(err.to_string().starts_with("reading config"));

        let file = config_file(r#"{ "max_stage": "high" }"#);
        let err = combo_settings(Some(file.path().to_path_buf()), None).unwrap_err();
        assert!(err.to_string().starts_with("parsing config"));
    }

    #[test]
    fn count_above_limit_is_rejected() {
        assert!(check_count(None).is_ok());
        assert!(check_count(Some(TRICK_LIMIT)).is_ok());
        assert!(check_count(Some(TRICK_LIMIT + 1)).is_err());
        assert!(check_count(Some(usize::MAX)).is_err());
    }

    #[test]
    fn command_line_parses() {
        let cmd = Cmd::try_parse_from(["wzrdbrain", "combo", "-n", "3", "--max-stage", "2"]).unwrap();
        match cmd.action {
            Action::Combo {
                count, max_stage, ..
            } => {
                assert_eq!(count, Some(3));
                assert_eq!(max_stage, Some(2));
            }
            _ => panic!("expected combo"),
        }
    }
}
