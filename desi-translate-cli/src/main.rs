use clap::{Arg, ArgAction, ArgMatches, Command};
use desi_translate::{
    Config, LanguageCode, MockMode, MockProvider, Orchestrator, SessionError, SessionState,
    SourceLanguage,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("desi-translate")
        .version("0.1.0")
        .about("Translate text into Indian languages, Hinglish or Hyderabadi English")
        .arg(
            Arg::new("text")
                .help("Text to translate; starts an interactive session when omitted")
                .index(1),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .short('t')
                .help("Target language code (e.g., hi, ta, hinglish, hyderabadi)")
                .default_value("en"),
        )
        .arg(
            Arg::new("from")
                .long("from")
                .short('f')
                .help("Source language code, or auto to detect")
                .default_value("auto"),
        )
        .arg(
            Arg::new("mock")
                .long("mock")
                .short('m')
                .help("Use mock providers instead of the network services")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print results as JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("languages")
                .long("languages")
                .short('l')
                .help("List supported language codes and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log provider calls")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    dotenvy::dotenv().ok();
    init_tracing(matches.get_flag("verbose"));

    if matches.get_flag("languages") {
        for code in LanguageCode::SUPPORTED.iter() {
            println!("{:<12} {}", code.as_str(), code.label().unwrap_or_default());
        }
        return Ok(());
    }

    let orchestrator = build_orchestrator(&matches)?;
    let source = SourceLanguage::parse(arg(&matches, "from", "auto"))?;
    let target = LanguageCode::parse(arg(&matches, "to", "en"))?;
    let mut session = SessionState::new(source, target);
    let json = matches.get_flag("json");

    match matches.get_one::<String>("text") {
        Some(text) => {
            session.set_input_text(text.as_str());
            translate_once(&orchestrator, &mut session, json).await
        }
        None => interactive(&orchestrator, session, json).await,
    }
}

fn arg<'a>(matches: &'a ArgMatches, name: &str, default: &'a str) -> &'a str {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .unwrap_or(default)
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_orchestrator(matches: &ArgMatches) -> Result<Orchestrator, Box<dyn std::error::Error>> {
    if matches.get_flag("mock") {
        info!("Using mock providers");
        return Ok(Orchestrator::new(
            MockProvider::new(MockMode::phrasebook()),
            MockProvider::new(MockMode::phrasebook()),
        ));
    }

    let config = Config::from_env();
    info!(?config, "Loaded provider configuration");
    Ok(Orchestrator::from_config(&config)?)
}

async fn translate_once(
    orchestrator: &Orchestrator,
    session: &mut SessionState,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    match orchestrator.translate_session(session).await {
        Ok(result) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", result.output_text);
                if !result.succeeded {
                    eprintln!("(service unavailable, showing placeholder text)");
                }
            }
            Ok(())
        }
        Err(SessionError::Translation(info)) if json => {
            println!("{}", serde_json::to_string_pretty(&info)?);
            Err(info.into())
        }
        Err(e) => Err(e.into()),
    }
}

async fn interactive(
    orchestrator: &Orchestrator,
    mut session: SessionState,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!(
        "{} → {}. Type text to translate; :swap, :history, :from <code>, :to <code>, :quit",
        session.source(),
        session.target()
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let (command, argument) = match line.split_once(' ') {
            Some((command, argument)) => (command, argument.trim()),
            None => (line, ""),
        };

        match command {
            "" => continue,
            ":quit" | ":q" => break,
            ":swap" => {
                session = session.swap();
                eprintln!("{} → {}", session.source(), session.target());
                if !session.input_text().is_empty() {
                    println!("{}", session.input_text());
                }
            }
            ":history" if json => match serde_json::to_string_pretty(session.history()) {
                Ok(text) => println!("{}", text),
                Err(e) => eprintln!("{}", e),
            },
            ":history" => {
                for (i, entry) in session.history().iter().enumerate() {
                    println!(
                        "[{}] {} {} → {}",
                        i + 1,
                        entry.timestamp.format("%H:%M:%S"),
                        entry.input,
                        entry.output
                    );
                }
            }
            ":to" => match LanguageCode::parse(argument) {
                Ok(code) => session.set_target(code),
                Err(e) => eprintln!("{}", e),
            },
            ":from" => match SourceLanguage::parse(argument) {
                Ok(source) => session.set_source(source),
                Err(e) => eprintln!("{}", e),
            },
            _ => {
                session.set_input_text(line);
                // Surfaced errors are reported and the session keeps going.
                if let Err(e) = translate_once(orchestrator, &mut session, json).await {
                    eprintln!("{}", e);
                }
            }
        }
    }

    Ok(())
}
