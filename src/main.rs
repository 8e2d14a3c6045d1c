//! Interactive troubleshooting session on stdin/stdout.
//!
//! Reads one answer per line and prints the next question. An empty line
//! restarts the conversation; end of input quits.

use std::io::{self, BufRead, Write};

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use troubleshoot_flow::adapters::FileDefinitionLoader;
use troubleshoot_flow::application::EngineFactory;
use troubleshoot_flow::config::{AppConfig, LoggingConfig};
use troubleshoot_flow::domain::conversation::Turn;

fn init_tracing(config: &LoggingConfig) {
    let json = config.json;
    tracing_subscriber::registry()
        .with(config.env_filter())
        .with(json.then(|| fmt::layer().json().with_writer(io::stderr)))
        .with((!json).then(|| fmt::layer().with_writer(io::stderr)))
        .init();
}

fn render(turn: &Turn, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", turn.question())?;
    if let Some(options) = turn.answer_options() {
        for option in options {
            writeln!(out, "  - {}", option.answer)?;
        }
    }
    write!(out, "> ")?;
    out.flush()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging);

    let factory = EngineFactory::from_config(&config.conversation, &FileDefinitionLoader::new())?;
    let mut session = factory.new_session();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render(&session.reply(""), &mut out)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let turn = session.reply(line.trim());
        render(&turn, &mut out)?;
    }

    writeln!(out)?;
    Ok(())
}
