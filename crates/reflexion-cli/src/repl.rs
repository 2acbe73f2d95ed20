//! Interactive chat loop.

use reflexion_agent::SelfImprovingAgent;
use reflexion_core::Role;
use reflexion_session::SessionId;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::error;

const HELP: &str = "\
Commands:
  /reflect        reflect on this session and print the insights
  /learn          reflect, then learn from the result
  /insights       show the insights the next answer will use
  /history        print this session's transcript
  /session ID     switch to another session
  /sessions       list known sessions
  /help           show this help
  /quit           exit
Start a message with // to send a literal leading /.";

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Say(String),
    Reflect,
    Learn,
    Insights,
    History,
    Switch(String),
    Sessions,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl Command {
    /// Plain lines are sent verbatim. A leading `//` sends a literal `/`.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Command::Empty;
        }
        if let Some(pos) = line.find("//").filter(|&p| line[..p].trim().is_empty()) {
            let mut text = line.to_string();
            text.remove(pos);
            return Command::Say(text);
        }
        let Some(rest) = trimmed.strip_prefix('/') else {
            return Command::Say(line.to_string());
        };
        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };
        match name {
            "reflect" => Command::Reflect,
            "learn" => Command::Learn,
            "insights" => Command::Insights,
            "history" => Command::History,
            "session" if !arg.is_empty() => Command::Switch(arg.to_string()),
            "sessions" => Command::Sessions,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => Command::Unknown(trimmed.to_string()),
        }
    }
}

fn label(role: Role) -> &'static str {
    match role {
        Role::User => "you",
        Role::Assistant => "agent",
        Role::System => "system",
    }
}

/// Runs the chat loop on stdin/stdout until `/quit` or end of input.
pub async fn run(agent: &mut SelfImprovingAgent, session: String) -> anyhow::Result<()> {
    let mut session = SessionId::from(session);
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("Reflexion chat, session '{session}'. Type /help for commands.");

    loop {
        stdout.write_all(format!("[{session}]> ").as_bytes()).await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match Command::parse(&line) {
            Command::Empty => {}
            Command::Say(text) => match agent.respond(&session, &text).await {
                Ok(reply) => println!("{reply}\n"),
                Err(e) => {
                    error!(session_id = %session, error = %e, "Respond failed");
                    eprintln!("error: {e}");
                }
            },
            Command::Reflect => match agent.reflect(&session).await {
                Ok(insights) => println!("Reflection:\n{insights}\n"),
                Err(e) => eprintln!("error: {e}"),
            },
            Command::Learn => match agent.reflect_and_learn(&session).await {
                Ok(learned) => println!("Learned:\n{learned}\n"),
                Err(e) => eprintln!("error: {e}"),
            },
            Command::Insights => {
                let insights = agent.insights_for(&session);
                if insights.is_empty() {
                    println!("(no insights yet)");
                } else {
                    println!("{insights}");
                }
            }
            Command::History => match agent.transcript(&session) {
                Some(t) if !t.is_empty() => {
                    for m in t.messages() {
                        println!("{:>6}: {}", label(m.role), m.content);
                    }
                }
                _ => println!("(empty transcript)"),
            },
            Command::Switch(id) => {
                session = SessionId::from(id);
                println!("Switched to session '{session}'.");
            }
            Command::Sessions => {
                for id in agent.sessions().ids() {
                    let turns = agent.transcript(id).map_or(0, |t| t.len());
                    println!("  {id} ({turns} turns)");
                }
            }
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
            Command::Unknown(cmd) => println!("Unknown command '{cmd}'. Type /help."),
        }
    }

    Ok(())
}
