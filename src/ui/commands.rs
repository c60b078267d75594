use std::collections::HashMap;
use std::str::FromStr;
use std::sync::LazyLock;

use super::app::{App, Screen, SortKey};
use crate::api::Worker;
use crate::models::PriceMetric;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &Worker) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit CampaignTUI", cmd_quit, r);
    register_command!("quit", "Quit CampaignTUI", cmd_quit, r);
    register_command!("b", "Go to Budgets", cmd_budgets, r);
    register_command!("budgets", "Go to Budgets", cmd_budgets, r);
    register_command!("menu", "Go to the Menu demo", cmd_menu, r);
    register_command!("open", "Open a route (e.g. :open /menu)", cmd_open, r);
    register_command!("refresh", "Re-query the current screen", cmd_refresh, r);
    register_command!(
        "add",
        "Add a budget plan (e.g. :add 5000 40 5000 0)",
        cmd_add,
        r
    );
    register_command!(
        "delete-budget",
        "Delete selected budget plan",
        cmd_delete_budget,
        r
    );
    register_command!(
        "submit",
        "Submit the selected budget plan to the server",
        cmd_submit,
        r
    );
    register_command!(
        "update-all",
        "Send the whole budget list to the server",
        cmd_update_all,
        r
    );
    register_command!(
        "sort",
        "Sort budgets (e.g. :sort spent), no arg cycles",
        cmd_sort,
        r
    );
    register_command!("reverse", "Reverse the sort order", cmd_reverse, r);
    register_command!(
        "metric",
        "Select price metric (e.g. :metric cpa), no arg cycles",
        cmd_metric,
        r
    );
    register_command!(
        "comment",
        "Comment on the open dish (e.g. :comment 5 alice great)",
        cmd_comment,
        r
    );
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App, worker: &Worker) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app, worker)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _worker: &Worker) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_budgets(_args: &str, app: &mut App, worker: &Worker) -> anyhow::Result<()> {
    app.activate(worker, Screen::Budgets);
    Ok(())
}

fn cmd_menu(_args: &str, app: &mut App, worker: &Worker) -> anyhow::Result<()> {
    app.activate(worker, Screen::Menu);
    Ok(())
}

fn cmd_open(args: &str, app: &mut App, worker: &Worker) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :open <path> (e.g. :open /menu)");
        return Ok(());
    }
    app.open_path(worker, args);
    Ok(())
}

fn cmd_refresh(_args: &str, app: &mut App, worker: &Worker) -> anyhow::Result<()> {
    match app.screen {
        Screen::Budgets => app.refresh_budgets(worker),
        Screen::Menu => app.refresh_dishes(worker),
    }
    Ok(())
}

fn cmd_add(args: &str, app: &mut App, worker: &Worker) -> anyhow::Result<()> {
    let usage = "Usage: :add <budget> <cpc> <cpm> [spent]";
    if args.is_empty() {
        app.set_status(usage);
        return Ok(());
    }

    let mut numbers = Vec::new();
    for token in args.split_whitespace() {
        match f64::from_str(token) {
            Ok(value) => numbers.push(value),
            Err(_) => {
                app.set_status(format!("Invalid amount: {token}"));
                return Ok(());
            }
        }
    }

    match numbers.as_slice() {
        [budget, cpc, cpm] => app.add_budget(worker, *budget, *cpc, *cpm, 0.0),
        [budget, cpc, cpm, spent] => app.add_budget(worker, *budget, *cpc, *cpm, *spent),
        _ => app.set_status(usage),
    }

    Ok(())
}

fn cmd_delete_budget(_args: &str, app: &mut App, _worker: &Worker) -> anyhow::Result<()> {
    if app.budgets.is_empty() {
        app.set_status("No budget plans to delete");
        return Ok(());
    }
    app.request_delete_selected();
    Ok(())
}

fn cmd_submit(_args: &str, app: &mut App, worker: &Worker) -> anyhow::Result<()> {
    app.submit_selected(worker);
    Ok(())
}

fn cmd_update_all(_args: &str, app: &mut App, worker: &Worker) -> anyhow::Result<()> {
    if app.budgets.is_empty() {
        app.set_status("No budget plans to send");
        return Ok(());
    }
    app.update_all(worker);
    Ok(())
}

fn cmd_sort(args: &str, app: &mut App, _worker: &Worker) -> anyhow::Result<()> {
    if args.is_empty() {
        app.sort_key = app.sort_key.next();
    } else if let Some(key) = SortKey::parse(args) {
        app.sort_key = key;
    } else {
        app.set_status("Sort keys: id, budget, cpc, cpm, spent");
        return Ok(());
    }
    let key = app.sort_key.as_str();
    app.set_status(format!("Sorting by {key}"));
    Ok(())
}

fn cmd_reverse(_args: &str, app: &mut App, _worker: &Worker) -> anyhow::Result<()> {
    app.sort_reverse = !app.sort_reverse;
    let order = if app.sort_reverse {
        "descending"
    } else {
        "ascending"
    };
    app.set_status(format!("Sort order: {order}"));
    Ok(())
}

fn cmd_metric(args: &str, app: &mut App, _worker: &Worker) -> anyhow::Result<()> {
    if args.is_empty() {
        app.metric = app.metric.next();
    } else if let Some(metric) = PriceMetric::all()
        .iter()
        .find(|m| m.as_str().eq_ignore_ascii_case(args))
    {
        app.metric = *metric;
    } else {
        app.set_status("Metrics: CPM, CPC, CPA");
        return Ok(());
    }
    let metric = app.metric;
    app.set_status(format!("Price metric: {metric}"));
    Ok(())
}

fn cmd_comment(args: &str, app: &mut App, worker: &Worker) -> anyhow::Result<()> {
    let usage = "Usage: :comment <rating 1-5> <author> <text>";
    let parts: Vec<&str> = args.splitn(3, ' ').collect();
    let [rating, author, text] = parts.as_slice() else {
        app.set_status(usage);
        return Ok(());
    };

    let Ok(rating) = rating.parse::<u8>() else {
        app.set_status(usage);
        return Ok(());
    };
    app.submit_comment(worker, rating.min(5), author, text);
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _worker: &Worker) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}
