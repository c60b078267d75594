use std::io::Write;

use anyhow::{Context, Result};

use crate::api::{HttpRemote, Remote};
use crate::config::Config;
use crate::models::{mock_plans, next_id, BudgetPlan};

pub(crate) fn as_cli(args: &[String], config: &Config) -> Result<()> {
    let remote = HttpRemote::new(config);

    match args[0].as_str() {
        "list" => cli_list(&remote),
        "get" => cli_get(&args[1..], &remote),
        "add" => cli_add(&args[1..], &remote),
        "delete" => cli_delete(&args[1..], &remote),
        "menu" => cli_menu(&remote),
        "open" => {
            let path = args.get(1).map_or("/", String::as_str);
            crate::run::as_tui(config, path)
        }
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("campaigntui {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("CampaignTUI — campaign budget plans over a remote REST service");
    println!();
    println!("Usage: campaigntui [--base-url <url>] [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI at /");
    println!("  open [path]                   Launch the TUI at a route (e.g. /menu)");
    println!("  list                          Print all budget plans");
    println!("  get <id>                      Print one budget plan");
    println!("  add <budget> <cpc> <cpm> [spent]");
    println!("                                Create a plan under the next free id");
    println!("  delete <id> [--yes]           Delete a plan (asks unless --yes)");
    println!("  menu                          Print the menu demo resource");
    println!("  --form-updates                POST form-urlencoded updates (legacy deployments)");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
}

fn cli_list(remote: &HttpRemote) -> Result<()> {
    match remote.list_budgets() {
        Ok(plans) => {
            print_plans(&plans);
            Ok(())
        }
        Err(err) => {
            // Same fallback the TUI shows: the fixed mock list, plus the
            // status the server gave us.
            println!("Error: {err} Could not GET the budget resource from the server.");
            println!("Showing the mock campaign budgets list:");
            println!();
            print_plans(&mock_plans());
            Ok(())
        }
    }
}

fn print_plans(plans: &[BudgetPlan]) {
    if plans.is_empty() {
        println!("No budget plans");
        return;
    }

    println!(
        "{:>6} {:>14} {:>10} {:>12} {:>14} {:>14}",
        "ID", "BUDGET", "CPC", "CPM", "SPENT", "REMAINING"
    );
    println!("{}", "─".repeat(76));
    for plan in plans {
        println!(
            "{:>6} {:>14.2} {:>10.2} {:>12.2} {:>14.2} {:>14.2}",
            plan.id,
            plan.budget,
            plan.cpc,
            plan.cpm,
            plan.spent,
            plan.remaining(),
        );
    }
}

fn cli_get(args: &[String], remote: &HttpRemote) -> Result<()> {
    let id = parse_id(args)?;
    let plan = remote
        .get_budget(id)
        .with_context(|| format!("Could not GET budget plan {id}"))?;
    print_plans(&[plan]);
    Ok(())
}

fn cli_add(args: &[String], remote: &HttpRemote) -> Result<()> {
    let amounts: Vec<f64> = args
        .iter()
        .map(|a| {
            a.parse::<f64>()
                .with_context(|| format!("Invalid amount: {a}"))
        })
        .collect::<Result<_>>()?;

    let (budget, cpc, cpm, spent) = match amounts.as_slice() {
        [budget, cpc, cpm] => (*budget, *cpc, *cpm, 0.0),
        [budget, cpc, cpm, spent] => (*budget, *cpc, *cpm, *spent),
        _ => anyhow::bail!("Usage: campaigntui add <budget> <cpc> <cpm> [spent]"),
    };

    // The id rule is the controller's: one past the highest existing id.
    let existing = remote
        .list_budgets()
        .context("Could not GET the budget resource to pick the next id")?;
    let plan = BudgetPlan::new(next_id(&existing), budget, cpc, cpm, spent);

    remote
        .create_budget(&plan)
        .with_context(|| format!("Could not create budget plan {}", plan.id))?;
    println!("Created budget plan {}", plan.id);
    Ok(())
}

fn cli_delete(args: &[String], remote: &HttpRemote) -> Result<()> {
    let id = parse_id(args)?;

    if !args.iter().any(|a| a == "--yes") {
        print!("Delete budget plan {id}? [y/N] ");
        std::io::stdout().flush()?;
        let mut answer = String::new();
        std::io::stdin().read_line(&mut answer)?;
        if !answer.trim().eq_ignore_ascii_case("y") {
            println!("Cancelled");
            return Ok(());
        }
    }

    remote
        .delete_budget(id)
        .with_context(|| format!("Could not delete budget plan {id}"))?;
    println!("Deleted budget plan {id}");
    Ok(())
}

fn cli_menu(remote: &HttpRemote) -> Result<()> {
    let dishes = remote
        .list_dishes()
        .context("Could not GET the dishes resource")?;

    if dishes.is_empty() {
        println!("The menu is empty");
        return Ok(());
    }

    println!("{:>4} {:<32} Comments", "ID", "Name");
    println!("{}", "─".repeat(48));
    for dish in &dishes {
        println!("{:>4} {:<32} {}", dish.id, dish.name, dish.comments.len());
    }
    Ok(())
}

fn parse_id(args: &[String]) -> Result<i64> {
    let raw = args
        .first()
        .filter(|a| !a.starts_with('-'))
        .context("Missing <id> argument")?;
    raw.parse::<i64>()
        .with_context(|| format!("Invalid id: {raw}"))
}
