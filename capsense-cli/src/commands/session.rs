//! Interactive review session
//!
//! Each input line is one user action, dispatched against state owned by the
//! session: the analysis workspace and the dashboard. Actions run one at a
//! time, so a verdict cannot be submitted again while the previous one is
//! still in flight.

use capsense_client::{
    dashboard::DASHBOARD_ERROR_MESSAGE,
    render::{render_analysis, render_dashboard, render_responses},
    AnalysisWorkspace, CapsenseApi, DashboardLoader,
};
use std::str::FromStr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use crate::error::CliError;

const HELP: &str = "\
Commands:
  analyze <text>   analyze a customer text and select the result
  list             list every generated response
  show             show the analysis panels for the selected result
  select <n>       select result number n (as shown by 'list')
  approve          approve the selected response
  reject           reject the selected response
  dashboard        load and show the feedback dashboard
  close            hide the dashboard
  help             show this help
  quit             leave the session
";

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Analyze(String),
    List,
    Show,
    Select(usize),
    Approve,
    Reject,
    Dashboard,
    Close,
    Help,
    Quit,
}

impl FromStr for SessionCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "analyze" if rest.is_empty() => Err("Usage: analyze <text>".to_string()),
            "analyze" => Ok(SessionCommand::Analyze(rest.to_string())),
            "list" | "ls" => Ok(SessionCommand::List),
            "show" => Ok(SessionCommand::Show),
            "select" => rest
                .parse::<usize>()
                .ok()
                .filter(|n| *n >= 1)
                .map(SessionCommand::Select)
                .ok_or_else(|| "Usage: select <n> (n starts at 1)".to_string()),
            "approve" => Ok(SessionCommand::Approve),
            "reject" => Ok(SessionCommand::Reject),
            "dashboard" => Ok(SessionCommand::Dashboard),
            "close" => Ok(SessionCommand::Close),
            "help" | "?" => Ok(SessionCommand::Help),
            "quit" | "exit" => Ok(SessionCommand::Quit),
            "" => Err(String::new()),
            other => Err(format!("Unknown command '{other}'. Type 'help' for commands.")),
        }
    }
}

/// State owned by one interactive session
#[derive(Debug, Default)]
pub struct Session {
    workspace: AnalysisWorkspace,
    dashboard: DashboardLoader,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Output to show before `command` starts its request, if any
    pub fn prepare(&mut self, command: &SessionCommand) -> Option<String> {
        match command {
            SessionCommand::Dashboard => {
                self.dashboard.begin_load();
                Some(render_dashboard(&self.dashboard))
            }
            _ => None,
        }
    }

    /// Run one command and return what should be printed
    pub async fn execute<A>(&mut self, api: &A, command: SessionCommand) -> String
    where
        A: CapsenseApi + ?Sized,
    {
        debug!("Session command: {:?}", command);

        match command {
            SessionCommand::Analyze(text) => {
                let analyzed = self.workspace.analyze(api, &text).await.map(|_| ());
                match analyzed {
                    Ok(()) => render_analysis(self.workspace.current()),
                    Err(e) => format!("Analysis failed: {e}\n"),
                }
            }
            SessionCommand::List => {
                render_responses(self.workspace.results(), self.workspace.selected_index())
            }
            SessionCommand::Show => render_analysis(self.workspace.current()),
            SessionCommand::Select(n) => {
                let selected = self.workspace.select(n - 1).map(|_| ());
                match selected {
                    Ok(()) => render_analysis(self.workspace.current()),
                    Err(e) => format!("{e}\n"),
                }
            }
            SessionCommand::Approve => format!("{}\n", self.workspace.approve(api).await),
            SessionCommand::Reject => format!("{}\n", self.workspace.reject(api).await),
            SessionCommand::Dashboard => {
                let fetched = api.fetch_dashboard().await;
                if self.dashboard.finish_load(fetched).is_err() {
                    warn!("{}", DASHBOARD_ERROR_MESSAGE);
                }
                render_dashboard(&self.dashboard)
            }
            SessionCommand::Close => {
                self.dashboard.close();
                render_dashboard(&self.dashboard)
            }
            SessionCommand::Help => HELP.to_string(),
            SessionCommand::Quit => String::new(),
        }
    }
}

/// Drive a session from `input`, writing responses to `output`
pub async fn drive_session<A, R, W>(api: &A, input: R, mut output: W) -> Result<(), CliError>
where
    A: CapsenseApi + ?Sized,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut session = Session::new();
    let mut lines = input.lines();

    output.write_all(b"> ").await?;
    output.flush().await?;

    while let Some(line) = lines.next_line().await? {
        match line.parse::<SessionCommand>() {
            Ok(SessionCommand::Quit) => break,
            Ok(command) => {
                if let Some(pending) = session.prepare(&command) {
                    output.write_all(pending.as_bytes()).await?;
                    output.flush().await?;
                }
                let rendered = session.execute(api, command).await;
                output.write_all(rendered.as_bytes()).await?;
            }
            Err(message) if message.is_empty() => {}
            Err(message) => {
                output.write_all(message.as_bytes()).await?;
                output.write_all(b"\n").await?;
            }
        }
        output.write_all(b"> ").await?;
        output.flush().await?;
    }

    output.write_all(b"\n").await?;
    output.flush().await?;
    debug!(
        "Session ended with {} analyzed texts",
        session.workspace.results().len()
    );
    Ok(())
}

/// Interactive session on stdin/stdout
pub async fn run_session<A>(api: &A) -> Result<(), CliError>
where
    A: CapsenseApi + ?Sized,
{
    info!("Starting review session against {}", api.base_url());
    println!("CapSense review session. Type 'help' for commands.");

    let stdin = BufReader::new(tokio::io::stdin());
    drive_session(api, stdin, tokio::io::stdout()).await?;

    info!("Review session ended");
    Ok(())
}
