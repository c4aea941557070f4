//! Replays a simulated agile-board session through the event bridge and
//! logs every republished event.

use std::rc::Rc;

use anyhow::{bail, Result};
use clap::Parser;
use serde_json::{json, Value};

use board_bridge::{DocumentBus, EventManager, Window};
use board_host::HostApp;

#[derive(Parser, Debug)]
struct Cli {
    /// Starting location of the simulated page.
    #[arg(long, default_value = "https://board.example/secure/Dashboard.jspa")]
    start_url: String,
    /// History navigations to replay after the host warm-up calls. May be
    /// given multiple times; defaults to a tour of every view category.
    #[arg(long = "visit")]
    visits: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let cli = Cli::parse();

    let visits = if cli.visits.is_empty() {
        default_visits()
    } else {
        cli.visits
    };

    let document = Rc::new(DocumentBus::new());
    let window = Rc::new(Window::with_location(cli.start_url));
    let manager = Rc::new(EventManager::new(Rc::clone(&document), Rc::clone(&window)));

    let mut host = simulated_host();
    if !manager.add_event_emitters(Some(&mut host)) {
        bail!("host incompatible; bridge not installed");
    }

    manager.on_backlog_shown(|| tracing::info!("backlog shown"));
    manager.on_backlog_drawn(|| tracing::info!("backlog drawn"));
    manager.on_backlog_updated(|| tracing::info!("backlog updated"));
    manager.on_active_sprints_updated(|| tracing::info!("active sprints updated"));
    manager.on_pop_state(|| tracing::info!("history navigation"));
    {
        let observed = Rc::clone(&manager);
        manager.on_active_view_changed(move || {
            tracing::info!(view = %observed.active_view(), "view changed");
        });
    }

    host.invoke(&["plan_controller", "show"], Value::Null)?;
    host.invoke(&["backlog_view", "draw"], Value::Null)?;
    host.invoke(&["plan_drag_and_drop", "enable_drag_and_drop"], Value::Null)?;
    host.invoke(
        &["work_controller", "set_pool_data"],
        json!({ "sprints": ["Sprint 1", "Sprint 2"] }),
    )?;

    for url in visits {
        window.set_location(url.as_str());
        window.pop_state();
        println!("{url} -> {}", manager.active_view());
    }
    println!("final view: {}", manager.active_view());

    Ok(())
}

fn simulated_host() -> HostApp {
    let mut host = HostApp::new();
    host.plan_controller.show = Some(Box::new(|_| {
        tracing::debug!("host: showing backlog view");
        Ok(json!({ "view": "backlog" }))
    }));
    host.backlog_view.draw = Some(Box::new(|_| {
        tracing::debug!("host: drawing backlog");
        Ok(json!({ "drawn": true }))
    }));
    host.plan_drag_and_drop.enable_drag_and_drop = Some(Box::new(|_| {
        tracing::debug!("host: drag and drop enabled");
        Ok(Value::Null)
    }));
    host.work_controller.set_pool_data = Some(Box::new(|args| {
        tracing::debug!(payload = %args, "host: pool data set");
        Ok(args)
    }));
    host
}

fn default_visits() -> Vec<String> {
    [
        "https://board.example/secure/RapidBoard.jspa?rapidView=42&view=planning.nodetail",
        "https://board.example/secure/RapidBoard.jspa?rapidView=42&view=reporting",
        "https://board.example/secure/RapidBoard.jspa?rapidView=42",
        "https://board.example/browse/BOARD-7",
        "https://board.example/secure/Dashboard.jspa",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
