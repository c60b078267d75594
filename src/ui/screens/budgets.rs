use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::ui::app::{App, LoadState};
use crate::ui::theme;
use crate::ui::util::format_amount;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    if app.budget_state == LoadState::Loading {
        render_loading(f, area);
        return;
    }

    let visible = app.visible_budgets();
    if visible.is_empty() {
        render_empty(f, area, app);
        return;
    }

    let mut items: Vec<ListItem> = Vec::new();

    if app.budget_state == LoadState::FallbackPopulated {
        items.push(ListItem::new(Line::from(Span::styled(
            " OFFLINE — showing mock data, edits stay local ",
            theme::fallback_style(),
        ))));
    }

    items.push(ListItem::new(Line::from(Span::styled(
        format!(
            "{:>6}  {:>14}  {:>10}  {:>12}  {:>14}  {:>14}",
            "ID", "BUDGET", "CPC", "CPM", "SPENT", "REMAINING"
        ),
        theme::header_style(),
    ))));

    items.extend(
        visible
            .iter()
            .enumerate()
            .skip(app.budget_scroll)
            .take(area.height.saturating_sub(3) as usize)
            .map(|(row, &actual)| {
                let plan = &app.budgets[actual];

                let style = if row == app.budget_index {
                    theme::selected_style()
                } else if row % 2 == 0 {
                    theme::alt_row_style()
                } else {
                    theme::normal_style()
                };

                let remaining = plan.remaining();
                let remaining_style = if row == app.budget_index {
                    style
                } else if remaining < 0.0 {
                    Style::default().fg(theme::RED)
                } else {
                    Style::default().fg(theme::GREEN)
                };

                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!(
                            "{:>6}  {:>14}  {:>10}  {:>12}  {:>14}  ",
                            plan.id,
                            format_amount(plan.budget),
                            format_amount(plan.cpc),
                            format_amount(plan.cpm),
                            format_amount(plan.spent),
                        ),
                        style,
                    ),
                    Span::styled(format!("{:>14}", format_amount(remaining)), remaining_style),
                ]))
            }),
    );

    let order = if app.sort_reverse { "desc" } else { "asc" };
    let title = format!(
        " Campaign Budgets — sort: {} {order} — metric {}:{} ",
        app.sort_key.as_str(),
        app.metric.id(),
        app.metric
    );

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                title,
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(list, area);
}

fn render_loading(f: &mut Frame, area: Rect) {
    let msg = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Loading ... attempting REST query on the budget resource",
            theme::dim_style(),
        )),
    ])
    .centered()
    .block(bordered(" Campaign Budgets "));
    f.render_widget(msg, area);
}

fn render_empty(f: &mut Frame, area: Rect, app: &App) {
    let hint = if app.search_input.is_empty() {
        "Use :add <budget> <cpc> <cpm> [spent] to create a plan"
    } else {
        "No plans match the filter; Esc clears it"
    };
    let msg = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("No budget plans", theme::dim_style())),
        Line::from(""),
        Line::from(Span::styled(hint, theme::dim_style())),
    ])
    .centered()
    .block(bordered(" Campaign Budgets "));
    f.render_widget(msg, area);
}

fn bordered(title: &'static str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            title,
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ))
}
