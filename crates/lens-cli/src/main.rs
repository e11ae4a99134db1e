use std::io::Read;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use lens_client::{run_cycle, AnalysisClient};
use lens_core::{Applied, LensConfig, Page, ResultsView, Session, Trigger};

/// sentence-lens — per-word breakdown of sentences from an analysis service.
///
/// Sends one sentence per line to the service's `/analyze` endpoint and shows
/// the translation of each sentence along with part of speech, syntax role,
/// particle, verb form, honorific level and semantic category of every word.
#[derive(Parser, Debug)]
#[command(name = "lens", version, about)]
struct Cli {
    /// Sentences to analyze. In the TUI they replace the example sentences;
    /// with --print and none given, sentences are read from stdin.
    sentences: Vec<String>,

    /// Base URL of the analysis service.
    #[arg(short, long)]
    server: Option<String>,

    /// Target language code for translations (e.g. en, fr, ja).
    #[arg(short, long)]
    target_language: Option<String>,

    /// Show transliterations on word cards.
    #[arg(long)]
    transliteration: bool,

    /// Hide the target-language selector; always send the default language.
    #[arg(long)]
    no_language_select: bool,

    /// Skip the automatic analysis shortly after startup.
    #[arg(long)]
    no_auto: bool,

    /// Analyze once, print the breakdown to stdout and exit.
    #[arg(short, long)]
    print: bool,

    /// Increase logging verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Fold command-line overrides into the loaded config. The target
    /// language lands in the configured default, which seeds both the TUI
    /// selector and the fallback used without one.
    fn apply(&self, config: &mut LensConfig) {
        if let Some(ref server) = self.server {
            config.server.base_url = server.clone();
        }
        if let Some(ref lang) = self.target_language {
            config.analysis.default_target_language = lang.clone();
        }
        if self.transliteration {
            config.analysis.show_transliteration = true;
        }
        if self.no_language_select {
            config.analysis.target_language_selectable = false;
        }
        if self.no_auto {
            config.analysis.auto_analyze_delay_ms = 0;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.print);

    // Load config.
    let mut config = LensConfig::load().unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
        LensConfig::default()
    });
    cli.apply(&mut config);

    tracing::info!("Starting sentence-lens v{}", env!("CARGO_PKG_VERSION"));

    let client = AnalysisClient::new(config.server.base_url.clone());

    if cli.print {
        return print_once(&cli, &config, &client).await;
    }

    let mut app = lens_tui::App::new(&config, client);
    if !cli.sentences.is_empty() {
        app.set_initial_sentences(&cli.sentences);
    }

    app.run().await?;

    tracing::info!("sentence-lens exited cleanly");
    Ok(())
}

fn init_logging(verbose: u8, to_stderr: bool) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if to_stderr {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(std::io::stderr)
            .init();
        return;
    }

    // Log to a file to avoid corrupting the TUI output. If the log file
    // can't be opened, silently discard logs rather than polluting the
    // alternate screen buffer.
    let log_dir = dirs::cache_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("sentence-lens");
    let _ = std::fs::create_dir_all(&log_dir);
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("lens.log"));

    match log_file {
        Ok(file) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        Err(_) => {
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::new("off"))
                .with_writer(std::io::sink)
                .init();
        }
    }
}

/// Page for one-shot mode: input from args or stdin, results kept for printing.
/// It has no selector, so requests use the configured default language.
struct PrintPage {
    text: String,
    view: ResultsView,
}

impl PrintPage {
    fn new(text: String) -> Self {
        Self {
            text,
            view: ResultsView::Empty,
        }
    }
}

impl Page for PrintPage {
    fn sentence_text(&self) -> String {
        self.text.clone()
    }

    fn set_sentence_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn target_language(&self) -> Option<String> {
        None
    }

    fn show_results(&mut self, view: ResultsView) {
        self.view = view;
    }

    fn notify(&mut self, message: &str) {
        eprintln!("{message}");
    }
}

fn session_for(config: &LensConfig) -> Session {
    Session::new(
        config.capabilities(),
        config.analysis.default_target_language.clone(),
    )
}

async fn print_once(cli: &Cli, config: &LensConfig, client: &AnalysisClient) -> Result<()> {
    let text = if cli.sentences.is_empty() {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        cli.sentences.join("\n")
    };

    let mut page = PrintPage::new(text);
    let mut session = session_for(config);

    let applied = run_cycle(&mut session, &mut page, client, Trigger::Manual).await?;
    print!("{}", page.view.to_text());

    if applied == Applied::Failed {
        anyhow::bail!("analysis request to {} failed", client.base_url());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lens_tui::page::TerminalPage;

    fn configured(args: &[&str]) -> LensConfig {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut config = LensConfig::default();
        cli.apply(&mut config);
        config
    }

    fn tui_language(config: &LensConfig) -> String {
        let mut page = TerminalPage::new(
            &config.capabilities(),
            &config.analysis.default_target_language,
        );
        page.set_sentence_text("本を読む");
        let ticket = session_for(config)
            .begin(&mut page, Trigger::Manual)
            .unwrap()
            .unwrap();
        ticket.request.target_language
    }

    fn print_language(config: &LensConfig) -> String {
        let mut page = PrintPage::new("本を読む".to_string());
        let ticket = session_for(config)
            .begin(&mut page, Trigger::Manual)
            .unwrap()
            .unwrap();
        ticket.request.target_language
    }

    #[test]
    fn target_language_flag_reaches_every_mode() {
        let selectable = configured(&["lens", "-t", "fr"]);
        assert_eq!(tui_language(&selectable), "fr");

        let fixed = configured(&["lens", "-t", "fr", "--no-language-select"]);
        assert!(!fixed.analysis.target_language_selectable);
        assert_eq!(tui_language(&fixed), "fr");

        let print = configured(&["lens", "-t", "fr", "--print", "本"]);
        assert_eq!(print_language(&print), "fr");
        let print_fixed = configured(&["lens", "-t", "fr", "--print", "--no-language-select"]);
        assert_eq!(print_language(&print_fixed), "fr");
    }

    #[test]
    fn unlisted_flag_code_is_sent_unchanged() {
        let config = configured(&["lens", "--target-language", "eo"]);
        assert_eq!(tui_language(&config), "eo");
        assert_eq!(print_language(&config), "eo");
    }

    #[test]
    fn no_auto_disables_startup_delay() {
        let config = configured(&["lens", "--no-auto"]);
        assert_eq!(config.analysis.auto_analyze_delay_ms, 0);
    }
}
