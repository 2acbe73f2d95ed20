mod config;
mod repl;

use clap::{Parser, Subcommand};
use config::{LogFormat, LoggingConfig, ModelOverrides, ReflexionConfig};
use reflexion_agent::{LlmProvider, SelfImprovingAgent, LEARNED_MARKER};
use reflexion_session::SessionId;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "reflexion", about = "Reflexion — a self-improving conversational agent")]
struct Cli {
    /// Path to config file
    #[arg(short, long, default_value = "reflexion.toml", global = true)]
    config: PathBuf,

    /// LLM provider (overrides config)
    #[arg(long, global = true)]
    provider: Option<LlmProvider>,

    /// Model identifier (overrides config)
    #[arg(short, long, global = true)]
    model: Option<String>,

    /// Sampling temperature (overrides config)
    #[arg(long, global = true)]
    temperature: Option<f32>,

    /// Maximum output tokens (overrides config)
    #[arg(long, global = true)]
    max_tokens: Option<u32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive chat
    Chat {
        /// Session to start in (overrides config)
        #[arg(short, long)]
        session: Option<String>,
    },
    /// Send a single message and print the reply
    Ask {
        #[arg(short, long)]
        session: Option<String>,
        /// Reflect and learn after replying
        #[arg(long)]
        learn: bool,
        /// Message text
        text: String,
    },
    /// Walk through respond, reflect, learn and respond again
    Demo,
}

fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let (mut config, found) = ReflexionConfig::load(&cli.config)?;
    init_logging(&config.logging);
    if found {
        info!(path = %cli.config.display(), "Config loaded");
    } else {
        info!(path = %cli.config.display(), "Config file not found, using defaults");
    }

    config.apply(ModelOverrides {
        provider: cli.provider,
        model: cli.model,
        temperature: cli.temperature,
        max_tokens: cli.max_tokens,
    });
    config.model.resolve_api_key()?;

    let mut agent =
        SelfImprovingAgent::from_config(config.model).with_scope(config.agent.insights_scope);
    let default_session = config.agent.default_session;

    match cli.command {
        Commands::Chat { session } => {
            repl::run(&mut agent, session.unwrap_or(default_session)).await?;
        }
        Commands::Ask {
            session,
            learn,
            text,
        } => {
            let session = SessionId::from(session.unwrap_or(default_session));
            let reply = agent.respond(&session, &text).await?;
            println!("{reply}");
            if learn {
                let learned = agent.reflect_and_learn(&session).await?;
                println!("\n{LEARNED_MARKER}{learned}");
            }
        }
        Commands::Demo => run_demo(&mut agent).await?,
    }

    Ok(())
}

async fn run_demo(agent: &mut SelfImprovingAgent) -> anyhow::Result<()> {
    let s1 = SessionId::from("s1");

    let reply = agent
        .respond(&s1, "Hi! Can you explain what a closure is in Rust?")
        .await?;
    println!("== respond\n{reply}\n");

    let reflection = agent.reflect(&s1).await?;
    println!("== reflect\n{reflection}\n");

    let learned = agent.learn(&s1, &reflection).await?;
    println!("== learn\n{learned}\n");

    let reply = agent
        .respond(&s1, "More: how does `move` change that?")
        .await?;
    println!("== respond (with insights)\n{reply}\n");

    let turns = agent.transcript(&s1).map_or(0, |t| t.len());
    println!("Transcript for '{s1}' now has {turns} turns.");
    Ok(())
}
