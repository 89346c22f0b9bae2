use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, stack_rects};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let view = app.view();

    frame.render_widget(Header::new().widget(view.pending, app.spinner()), header);
    frame.render_widget(Clear, body);

    let (label_area, button_area) = stack_rects(body);
    let label = Paragraph::new(view.label)
        .style(Style::default().fg(HEADER_TEXT))
        .alignment(Alignment::Center);
    // Text sits on the middle row of the label area
    let label_line = Rect {
        y: label_area.y + label_area.height / 2,
        height: label_area.height.min(1),
        ..label_area
    };
    frame.render_widget(label, label_line);

    let button = Paragraph::new(Span::styled(
        view.button,
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(button, button_area);

    frame.render_widget(Footer::new().widget(footer, app.task_delay()), footer);
}
