// Home screen: hero, why-choose-us features, and New Arrivals

use crate::catalog;
use crate::tui::app::App;
use crate::tui::components::cat_card;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const FEATURES: [(&str, &str); 3] = [
    (
        "Health Guarantee",
        "Every cat comes with a full health checkup and vaccination records.",
    ),
    (
        "Premium Bloodlines",
        "We source from reputable breeders ensuring excellent temperament.",
    ),
    (
        "Lifetime Support",
        "Our team is here to help you through every stage of pet parenthood.",
    ),
];

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let show_features = Breakpoint::from_width(area.width).at_least(Breakpoint::Normal)
        && area.height >= 24;

    let chunks = Layout::vertical([
        Constraint::Length(6),
        Constraint::Length(if show_features { 6 } else { 0 }),
        Constraint::Min(4),
    ])
    .split(area);

    render_hero(f, chunks[0], app);
    if show_features {
        render_features(f, chunks[1], app);
    }
    render_arrivals(f, chunks[2], app);
}

fn render_hero(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let lines = vec![
        Line::from(Span::styled(
            "✨ #1 Cat Shop in Town",
            Style::default().fg(theme.tag),
        )),
        Line::from(vec![
            Span::styled(
                "Find Your ",
                Style::default()
                    .fg(theme.foreground)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "Purrfect",
                Style::default()
                    .fg(theme.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                " Match",
                Style::default()
                    .fg(theme.foreground)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::raw(""),
        Line::from(Span::styled(
            "Welcome to Sonu's. We connect loving families with adorable felines. \
             Every adoption includes a starter kit and a lifetime of love.",
            Style::default().fg(theme.muted),
        )),
    ];

    let hero = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(hero, area);
}

fn render_features(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let outer = Block::default()
        .title(" Why Choose Sonu's? ")
        .title_alignment(Alignment::Center)
        .borders(Borders::TOP)
        .border_style(Style::default().fg(theme.border));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let cells = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(inner);
    for ((title, desc), cell) in FEATURES.iter().zip(cells.iter()) {
        let text = vec![
            Line::from(Span::styled(
                *title,
                Style::default()
                    .fg(theme.title)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(*desc, Style::default().fg(theme.muted))),
        ];
        f.render_widget(
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            *cell,
        );
    }
}

fn render_arrivals(f: &mut Frame, area: Rect, app: &mut App) {
    let block = Block::default()
        .title(" New Arrivals · Meet the latest additions to our family ")
        .borders(Borders::TOP)
        .border_style(Style::default().fg(app.theme.border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cats: Vec<_> = catalog::featured().iter().collect();
    let cart = app.shop.cart();
    app.columns = cat_card::render_grid(
        f,
        inner,
        &cats,
        Some(app.selected),
        |cat| cart.contains(cat.id),
        &app.theme,
    );
}
