use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::mpsc;
use std::thread;

use careerflow_core::{update, AppState, Msg};
use careerflow_logging::{flow_debug, flow_info, flow_warn};

use super::config::{self, AppConfig, API_BASE_ENV, CONFIG_FILENAME};
use super::console::{self, Command, HELP};
use super::effects::EffectRunner;
use super::logging;

/// Everything the event thread reacts to.
#[derive(Debug)]
pub(crate) enum HostEvent {
    Msg(Msg),
    Show,
    Help,
    Invalid(String),
    Quit,
}

pub fn run_app() -> anyhow::Result<()> {
    let loaded = config::read_config(Path::new(CONFIG_FILENAME));
    let config = match &loaded {
        Ok(Some(config)) => config.clone(),
        Ok(None) | Err(_) => AppConfig::default(),
    }
    .with_base_url_override(std::env::var(API_BASE_ENV).ok());

    logging::initialize(config.log_destination);
    match loaded {
        Ok(Some(_)) => flow_info!("Loaded settings from {}", CONFIG_FILENAME),
        Ok(None) => flow_info!("No {} found; using defaults", CONFIG_FILENAME),
        Err(err) => flow_warn!("Ignoring config: {}", err),
    }

    let (event_tx, event_rx) = mpsc::channel::<HostEvent>();
    let effects = EffectRunner::new(config.client_settings(), event_tx.clone())?;
    spawn_input_reader(event_tx);

    let mut host = Host {
        state: AppState::new(),
        effects,
    };
    println!("{HELP}");
    host.dispatch(Msg::Initialize);

    while let Ok(event) = event_rx.recv() {
        match event {
            HostEvent::Msg(msg) => host.dispatch(msg),
            HostEvent::Show => host.render(),
            HostEvent::Help => println!("{HELP}"),
            HostEvent::Invalid(reason) => println!("{reason} (type `help`)"),
            HostEvent::Quit => break,
        }
    }

    host.teardown(event_rx);
    Ok(())
}

struct Host {
    state: AppState,
    effects: EffectRunner,
}

impl Host {
    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;
        self.effects.enqueue(effects);
        if was_dirty {
            self.render();
        }
    }

    fn render(&self) {
        let mut stdout = io::stdout().lock();
        let _ = writeln!(stdout, "\n{}", console::render(&self.state.view()));
        let _ = stdout.flush();
    }

    /// Marks the session over, lets in-flight requests finish, then feeds
    /// their late completions through `update` so they are dropped.
    fn teardown(self, event_rx: mpsc::Receiver<HostEvent>) {
        let Host { state, effects } = self;
        let (mut state, _) = update(state, Msg::Teardown);
        effects.shutdown();

        for event in event_rx.try_iter() {
            if let HostEvent::Msg(msg) = event {
                let (next, _) = update(state, msg);
                state = next;
            }
        }
        flow_debug!("Session closed with {} jobs", state.store().jobs().len());
    }
}

fn spawn_input_reader(tx: mpsc::Sender<HostEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            let events = match console::parse_command(&line) {
                Command::Dispatch(msgs) => msgs.into_iter().map(HostEvent::Msg).collect(),
                Command::Show => vec![HostEvent::Show],
                Command::Help => vec![HostEvent::Help],
                Command::Invalid(reason) => vec![HostEvent::Invalid(reason)],
                Command::Quit => break,
            };
            for event in events {
                if tx.send(event).is_err() {
                    return;
                }
            }
        }
        // End of input behaves like `quit`.
        let _ = tx.send(HostEvent::Quit);
    });
}
