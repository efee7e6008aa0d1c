//! Headless driver for the briefing deck.
//!
//! Reads one command per line from stdin, applies it to a presentation built
//! over in-memory views, and prints the rendered deck after each command.
//! Timers run on a virtual clock that only moves on `wait`.

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use briefing_deck::adapters::{
    LocalSnapshotExporter, LoggingShell, ManualTaskScheduler, RecordingDecisionView,
    RecordingDeckView,
};
use briefing_deck::application::{
    ClickTarget, PresentationController, PresentationError, PresentationEvent,
    PresentationSettings,
};
use briefing_deck::config::{AppConfig, ConfigError, LoggingConfig};
use briefing_deck::domain::deck::{
    DeckManifest, KeyPress, PresentationAction, SlideNavigator, SwipeGesture,
};
use briefing_deck::domain::decisions::DecisionTracker;
use briefing_deck::domain::foundation::{DecisionItemId, IncidentId, ValidationError};

const HELP: &str = "commands: next | prev | goto <n> | key <name> | swipe <start_x> <end_x> \
| toggle <n> | export | menu <fullscreen|print|export> | wait <ms> | status | help | quit";

#[derive(Debug, Error)]
enum DriverError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid presentation setup: {0}")]
    Setup(#[from] ValidationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One line of driver input.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Command {
    Event(PresentationEvent),
    Wait(Duration),
    Status,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let name = parts.next().ok_or_else(|| "empty command".to_string())?;
        let args: Vec<&str> = parts.collect();

        let command = match (name, args.as_slice()) {
            ("next", []) => Command::Event(PresentationEvent::Click(ClickTarget::NextButton)),
            ("prev", []) => Command::Event(PresentationEvent::Click(ClickTarget::PreviousButton)),
            ("goto", [n]) => Command::Event(PresentationEvent::Click(ClickTarget::Indicator(
                parse_number(n)?,
            ))),
            ("key", [key]) => {
                let press: KeyPress = key.parse().map_err(|e: ValidationError| e.to_string())?;
                Command::Event(PresentationEvent::Key(press))
            }
            ("swipe", [start, end]) => Command::Event(PresentationEvent::Swipe(
                SwipeGesture::new(parse_number(start)?, parse_number(end)?),
            )),
            ("toggle", [n]) => Command::Event(PresentationEvent::Click(ClickTarget::Checkbox(
                DecisionItemId::new(parse_number(n)?),
            ))),
            ("export", []) => {
                Command::Event(PresentationEvent::Menu(PresentationAction::ExportDecisions))
            }
            ("menu", [action]) => {
                let action = match *action {
                    "fullscreen" => PresentationAction::ToggleFullscreen,
                    "print" => PresentationAction::Print,
                    "export" => PresentationAction::ExportDecisions,
                    other => return Err(format!("unknown menu action '{}'", other)),
                };
                Command::Event(PresentationEvent::Menu(action))
            }
            ("wait", [ms]) => Command::Wait(Duration::from_millis(parse_number(ms)?)),
            ("status", []) => Command::Status,
            ("help", []) => Command::Help,
            ("quit" | "exit", []) => Command::Quit,
            _ => return Err(format!("unrecognized command '{}'", line.trim())),
        };
        Ok(command)
    }
}

fn parse_number<T: FromStr>(text: &str) -> Result<T, String> {
    text.parse()
        .map_err(|_| format!("'{}' is not a valid number", text))
}

fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if config.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn load_manifest(config: &AppConfig) -> Result<DeckManifest, DriverError> {
    match &config.deck.manifest_path {
        Some(path) => {
            let source = tokio::fs::read_to_string(path).await?;
            info!(path = %path.display(), "Loaded deck manifest");
            Ok(DeckManifest::from_yaml(&source)?)
        }
        None => Ok(DeckManifest::incident_briefing()),
    }
}

struct Driver {
    controller: PresentationController,
    deck_view: Arc<RecordingDeckView>,
    scheduler: Arc<ManualTaskScheduler>,
}

impl Driver {
    fn build(config: &AppConfig, manifest: &DeckManifest) -> Result<Self, DriverError> {
        let deck = manifest.build_deck()?;
        let deck_view = Arc::new(RecordingDeckView::new(deck.len()));
        let scheduler = Arc::new(ManualTaskScheduler::new());
        let navigator = SlideNavigator::new(deck, deck_view.clone(), scheduler.clone());
        let tracker = DecisionTracker::new(
            manifest.decisions.clone(),
            Arc::new(RecordingDecisionView::new()),
        );
        let settings = PresentationSettings::new(IncidentId::new(config.deck.incident_id.clone())?)
            .with_swipe_threshold(config.deck.swipe_threshold_px)
            .with_export_file_name(config.export.file_name.clone());
        let controller = PresentationController::new(
            navigator,
            tracker,
            Arc::new(LoggingShell::new()),
            Arc::new(LocalSnapshotExporter::new(config.export.directory.clone())),
            settings,
        );
        Ok(Self {
            controller,
            deck_view,
            scheduler,
        })
    }

    fn render(&self) -> String {
        format!(
            "{}  decisions: {}",
            self.deck_view.render_line(),
            self.controller.tracker().status()
        )
    }

    /// Runs one command and returns the text to print, or `None` to stop.
    async fn run(&mut self, command: Command) -> Option<String> {
        match command {
            Command::Event(event) => match self.controller.handle(event).await {
                Ok(outcome) => match outcome.exported {
                    Some(path) => Some(format!("exported {}\n{}", path, self.render())),
                    None => Some(self.render()),
                },
                Err(PresentationError::Export(e)) => Some(format!("export failed: {}", e)),
            },
            Command::Wait(duration) => {
                self.scheduler.advance(duration);
                Some(self.render())
            }
            Command::Status => Some(self.render()),
            Command::Help => Some(HELP.to_string()),
            Command::Quit => None,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), DriverError> {
    let config = AppConfig::load()?;
    init_tracing(&config.logging);
    config
        .validate()
        .map_err(|e| DriverError::Config(ConfigError::ValidationFailed(e)))?;

    let manifest = load_manifest(&config).await?;
    let mut driver = Driver::build(&config, &manifest)?;
    info!(
        slides = driver.controller.navigator().slide_count(),
        decisions = driver.controller.tracker().total(),
        "Presentation ready"
    );

    let mut stdout = tokio::io::stdout();
    stdout
        .write_all(format!("{}\n", driver.render()).as_bytes())
        .await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let output = match line.parse::<Command>() {
            Ok(command) => match driver.run(command).await {
                Some(output) => output,
                None => break,
            },
            Err(message) => {
                warn!(input = %line, "Rejected command");
                format!("error: {}\n{}", message, HELP)
            }
        };
        stdout.write_all(format!("{}\n", output).as_bytes()).await?;
        stdout.flush().await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use briefing_deck::domain::deck::Key;

    #[test]
    fn parses_navigation_commands() {
        assert_eq!(
            "goto 2".parse::<Command>(),
            Ok(Command::Event(PresentationEvent::Click(
                ClickTarget::Indicator(2)
            )))
        );
        assert_eq!(
            "key End".parse::<Command>(),
            Ok(Command::Event(PresentationEvent::Key(KeyPress::plain(
                Key::End
            ))))
        );
        assert_eq!(
            "swipe 200 100".parse::<Command>(),
            Ok(Command::Event(PresentationEvent::Swipe(SwipeGesture::new(
                200.0, 100.0
            ))))
        );
    }

    #[test]
    fn parses_menu_and_wait() {
        assert_eq!(
            "menu print".parse::<Command>(),
            Ok(Command::Event(PresentationEvent::Menu(
                PresentationAction::Print
            )))
        );
        assert_eq!(
            "wait 300".parse::<Command>(),
            Ok(Command::Wait(Duration::from_millis(300)))
        );
    }

    #[test]
    fn rejects_malformed_commands() {
        assert!("goto".parse::<Command>().is_err());
        assert!("goto two".parse::<Command>().is_err());
        assert!("menu dance".parse::<Command>().is_err());
        assert!("fly".parse::<Command>().is_err());
    }

    #[tokio::test]
    async fn driver_walks_the_default_deck() {
        let config = AppConfig::default();
        let manifest = DeckManifest::incident_briefing();
        let mut driver = Driver::build(&config, &manifest).unwrap();

        let output = driver.run("key End".parse().unwrap()).await.unwrap();
        assert!(output.contains("4/4"), "{}", output);

        let output = driver.run("toggle 0".parse().unwrap()).await.unwrap();
        assert!(output.contains("1/3 decisions made"), "{}", output);

        assert!(driver.run(Command::Quit).await.is_none());
    }
}
