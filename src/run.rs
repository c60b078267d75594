pub(crate) mod cli;

use std::io;
use std::sync::{mpsc, Arc};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::api::{ApiEvent, HttpRemote, Remote, Worker};
use crate::config::Config;
use crate::ui::app::{App, InputMode, MenuStep, Screen};
use crate::ui::commands;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

pub(crate) fn as_tui(config: &Config, initial_path: &str) -> Result<()> {
    let remote: Arc<dyn Remote> = Arc::new(HttpRemote::new(config));
    let (worker, events) = Worker::new(remote);

    let mut app = App::new();
    app.open_path(&worker, initial_path);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &worker, &events);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    worker: &Worker,
    events: &mpsc::Receiver<ApiEvent>,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // Update visible rows based on terminal height (tab, status, command bars + borders/header)
            let content_height = f.area().height.saturating_sub(6) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        // Worker responses commit only here, checked against the current
        // generation inside handle_api_event.
        while let Ok(api_event) = events.try_recv() {
            app.handle_api_event(api_event);
        }

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app, worker)?,
                InputMode::Command => handle_command_input(key, app, worker)?,
                InputMode::Search => handle_search_input(key, app),
                InputMode::Editing => handle_editing_input(key, app),
                InputMode::Confirm => handle_confirm_input(key, app, worker),
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App, worker: &Worker) -> Result<()> {
    match key.code {
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('/') if app.screen == Screen::Budgets => {
            app.input_mode = InputMode::Search;
            app.search_input.clear();
        }
        KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
        }
        KeyCode::Char('j') | KeyCode::Down => handle_move_down(app),
        KeyCode::Char('k') | KeyCode::Up => handle_move_up(app),
        KeyCode::Char('1') => app.activate(worker, Screen::Budgets),
        KeyCode::Char('2') => app.activate(worker, Screen::Menu),
        KeyCode::Tab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let next = (idx + 1) % screens.len();
            app.activate(worker, screens[next]);
        }
        KeyCode::BackTab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let prev = if idx == 0 { screens.len() - 1 } else { idx - 1 };
            app.activate(worker, screens[prev]);
        }
        KeyCode::Enter => {
            if app.screen == Screen::Menu && app.menu_step == MenuStep::List {
                app.open_dish_detail(worker);
            }
        }
        KeyCode::Esc => handle_escape(app),
        KeyCode::Char('+') | KeyCode::Char('=') if app.screen == Screen::Budgets => {
            app.adjust_selected(100.0);
        }
        KeyCode::Char('-') if app.screen == Screen::Budgets => {
            app.adjust_selected(-100.0);
        }
        KeyCode::Char('e') if app.screen == Screen::Budgets => {
            if let Some(budget) = app.selected_budget().map(|plan| plan.budget) {
                app.command_input = format!("{budget}");
                app.input_mode = InputMode::Editing;
                app.set_status("Type new budget amount, press Enter to apply locally");
            }
        }
        KeyCode::Char('D') if app.screen == Screen::Budgets => {
            commands::handle_command("delete-budget", app, worker)?;
        }
        KeyCode::Char('s') if app.screen == Screen::Budgets => {
            commands::handle_command("sort", app, worker)?;
        }
        KeyCode::Char('o') if app.screen == Screen::Budgets => {
            commands::handle_command("reverse", app, worker)?;
        }
        KeyCode::Char('p') if app.screen == Screen::Budgets => {
            commands::handle_command("metric", app, worker)?;
        }
        KeyCode::Char('r') => {
            commands::handle_command("refresh", app, worker)?;
        }
        KeyCode::Char('g') => handle_goto_top(app),
        KeyCode::Char('G') => handle_goto_bottom(app),
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let half_page = app.visible_rows / 2;
            for _ in 0..half_page {
                handle_move_down(app);
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let half_page = app.visible_rows / 2;
            for _ in 0..half_page {
                handle_move_up(app);
            }
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        _ => {}
    }
    Ok(())
}

fn handle_command_input(key: event::KeyEvent, app: &mut App, worker: &Worker) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app, worker)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

fn handle_search_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.search_input.clear();
        }
        KeyCode::Backspace => {
            app.search_input.pop();
            app.budget_index = 0;
            app.budget_scroll = 0;
        }
        KeyCode::Char(c) => {
            // Live filter: narrows as you type.
            app.search_input.push(c);
            app.budget_index = 0;
            app.budget_scroll = 0;
        }
        _ => {}
    }
}

fn handle_editing_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.command_input.clear();
            app.input_mode = InputMode::Normal;
            match input.trim().parse::<f64>() {
                Ok(amount) => app.set_selected_budget_amount(amount),
                Err(_) => app.set_status(format!("Invalid amount: {input}")),
            }
        }
        KeyCode::Esc => {
            app.command_input.clear();
            app.input_mode = InputMode::Normal;
            app.set_status("Edit cancelled");
        }
        KeyCode::Backspace => {
            app.command_input.pop();
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
}

fn handle_confirm_input(key: event::KeyEvent, app: &mut App, worker: &Worker) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_pending(worker),
        // Any other key declines: no mutation, no remote call.
        _ => app.decline_pending(),
    }
}

// ── Navigation helpers ───────────────────────────────────────

fn handle_move_down(app: &mut App) {
    let page = app.visible_rows.max(1);
    match app.screen {
        Screen::Budgets => {
            let len = app.visible_budgets().len();
            scroll_down(&mut app.budget_index, &mut app.budget_scroll, len, page);
        }
        Screen::Menu => {
            if app.menu_step == MenuStep::List {
                scroll_down(&mut app.dish_index, &mut app.dish_scroll, app.dishes.len(), page);
            }
        }
    }
}

fn handle_move_up(app: &mut App) {
    match app.screen {
        Screen::Budgets => scroll_up(&mut app.budget_index, &mut app.budget_scroll),
        Screen::Menu => {
            if app.menu_step == MenuStep::List {
                scroll_up(&mut app.dish_index, &mut app.dish_scroll);
            }
        }
    }
}

fn handle_goto_top(app: &mut App) {
    match app.screen {
        Screen::Budgets => scroll_to_top(&mut app.budget_index, &mut app.budget_scroll),
        Screen::Menu => scroll_to_top(&mut app.dish_index, &mut app.dish_scroll),
    }
}

fn handle_goto_bottom(app: &mut App) {
    let page = app.visible_rows.max(1);
    match app.screen {
        Screen::Budgets => {
            let len = app.visible_budgets().len();
            scroll_to_bottom(&mut app.budget_index, &mut app.budget_scroll, len, page);
        }
        Screen::Menu => {
            scroll_to_bottom(&mut app.dish_index, &mut app.dish_scroll, app.dishes.len(), page);
        }
    }
}

fn handle_escape(app: &mut App) {
    match app.screen {
        Screen::Menu if app.menu_step == MenuStep::Detail => app.close_dish_detail(),
        _ => {
            app.status_message.clear();
            app.search_input.clear();
        }
    }
}
