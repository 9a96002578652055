use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::time::Duration;

use verifier_core::{update, AppState, AppViewModel, Msg, NotificationKind, RequestStatus};

use super::effects::EffectRunner;
use super::logging::{self, LogDestination};

/// Line-oriented shell standing in for the web front end: one command per
/// screen interaction, re-rendered from the view model after every change.
pub fn run_app() -> io::Result<()> {
    logging::initialize(LogDestination::File);

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = match EffectRunner::new(msg_tx.clone()) {
        Ok(runner) => runner,
        Err(err) => {
            eprintln!("could not initialize the API client: {err}");
            return Ok(());
        }
    };

    let running = Arc::new(AtomicBool::new(true));
    spawn_input_thread(msg_tx, running.clone());

    let mut state = AppState::new();
    print_help();

    while running.load(Ordering::Relaxed) {
        match msg_rx.recv_timeout(Duration::from_millis(50)) {
            Ok(msg) => {
                let (next, effects) = update(std::mem::take(&mut state), msg);
                state = next;
                runner.run(effects);
                if state.consume_dirty() {
                    render(&state.view())?;
                }
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    Ok(())
}

fn spawn_input_thread(msg_tx: mpsc::Sender<Msg>, running: Arc<AtomicBool>) {
    std::thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            match parse_command(&line) {
                Command::Dispatch(msg) => {
                    if msg_tx.send(msg).is_err() {
                        break;
                    }
                }
                Command::Help => print_help(),
                Command::Quit => break,
                Command::Empty => {}
                Command::Unknown(word) => {
                    println!("no such command: {word} (try 'help')");
                }
            }
        }
        running.store(false, Ordering::Relaxed);
    });
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Dispatch(Msg),
    Help,
    Quit,
    Empty,
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    match word {
        "" => Command::Empty,
        "url" => Command::Dispatch(Msg::UrlEdited(rest.to_string())),
        "words" => Command::Dispatch(Msg::WordsEdited(
            rest.split(',').map(str::to_string).collect(),
        )),
        "submit" => Command::Dispatch(Msg::SubmitClicked),
        "list" => Command::Dispatch(Msg::ListOpened),
        "rm" => Command::Dispatch(Msg::RemoveClicked {
            url: rest.to_string(),
        }),
        "dismiss" => Command::Dispatch(Msg::NotificationDismissed),
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    }
}

fn print_help() {
    println!("commands:");
    println!("  url <value>        edit the URL field");
    println!("  words <a, b, ...>  edit the keywords field");
    println!("  submit             submit the draft for verification");
    println!("  list               open the stored URL list");
    println!("  rm <url>           delete one stored URL");
    println!("  dismiss            dismiss the notification banner");
    println!("  quit               leave");
}

fn render(view: &AppViewModel) -> io::Result<()> {
    let mut out = io::stdout().lock();

    if view.notification.visible {
        let tag = match view.notification.kind {
            NotificationKind::Info => "info",
            NotificationKind::Success => "ok",
            NotificationKind::Warning => "warn",
            NotificationKind::Error => "error",
        };
        writeln!(out, "[{tag}] {}", view.notification.message)?;
    }

    writeln!(
        out,
        "form: url={:?} ({}) words={:?} ({}) status={:?}{}",
        view.url,
        validity_label(view.url_valid),
        view.words,
        validity_label(view.words_valid),
        view.submission,
        if view.can_submit { " [ready]" } else { "" },
    )?;

    match view.collection {
        RequestStatus::Idle => {}
        RequestStatus::Pending => writeln!(out, "list: loading...")?,
        RequestStatus::Failed => {
            writeln!(
                out,
                "list: failed ({})",
                view.collection_error.as_deref().unwrap_or("unknown error")
            )?;
        }
        RequestStatus::Succeeded => {
            if view.items.is_empty() {
                writeln!(out, "list: no URLs stored")?;
            } else {
                for item in &view.items {
                    writeln!(out, "  {item}")?;
                }
            }
        }
    }

    out.flush()
}

fn validity_label(valid: Option<bool>) -> &'static str {
    match valid {
        None => "untouched",
        Some(true) => "valid",
        Some(false) => "invalid",
    }
}
