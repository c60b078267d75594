use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::ui::app::{App, LoadState, MenuStep};
use crate::ui::theme;
use crate::ui::util::truncate;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    match app.menu_step {
        MenuStep::List => render_list(f, area, app),
        MenuStep::Detail => render_detail(f, area, app),
    }
}

fn render_list(f: &mut Frame, area: Rect, app: &App) {
    match app.dish_state {
        LoadState::Loading => {
            render_message(f, area, "Loading ... attempting REST query on the dishes resource");
            return;
        }
        LoadState::FallbackPopulated => {
            // No mock menu; the message carries the status and status text.
            render_message(f, area, &app.status_message);
            return;
        }
        LoadState::Populated => {}
    }

    if app.dishes.is_empty() {
        render_message(f, area, "The menu is empty");
        return;
    }

    let items: Vec<ListItem> = app
        .dishes
        .iter()
        .enumerate()
        .skip(app.dish_scroll)
        .take(area.height.saturating_sub(2) as usize)
        .map(|(i, dish)| {
            let style = if i == app.dish_index {
                theme::selected_style()
            } else if i % 2 == 0 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            let comments = dish.comments.len();
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>4}  ", dish.id), style),
                Span::styled(format!("{:<32}", truncate(&dish.name, 30)), style),
                Span::styled(
                    format!("{comments} comments"),
                    Style::default().fg(theme::TEXT_DIM),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(bordered(" Menu "));
    f.render_widget(list, area);
}

fn render_detail(f: &mut Frame, area: Rect, app: &App) {
    let Some(dish) = &app.dish_detail else {
        render_message(f, area, "Loading ... attempting REST GET for dish detail");
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!(" {} (#{})", dish.name, dish.id),
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if dish.comments.is_empty() {
        lines.push(Line::from(Span::styled(
            " No comments yet — :comment <rating> <author> <text>",
            theme::dim_style(),
        )));
    }

    for comment in &dish.comments {
        let stars = "★".repeat(comment.rating.min(5) as usize);
        lines.push(Line::from(vec![
            Span::styled(format!(" {stars:<5} "), Style::default().fg(theme::YELLOW)),
            Span::styled(comment.comment.clone(), theme::normal_style()),
        ]));
        lines.push(Line::from(Span::styled(
            format!("       — {}, {}", comment.author, comment.date),
            theme::dim_style(),
        )));
        lines.push(Line::from(""));
    }

    let detail = Paragraph::new(lines).block(bordered(" Dish "));
    f.render_widget(detail, area);
}

fn render_message(f: &mut Frame, area: Rect, message: &str) {
    let msg = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(message.to_string(), theme::dim_style())),
    ])
    .centered()
    .block(bordered(" Menu "));
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
