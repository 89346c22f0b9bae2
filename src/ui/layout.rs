use ratatui::layout::Rect;

use crate::ui::screen::BUTTON_LABEL;

const LABEL_HEIGHT: u16 = 3;
const BUTTON_HEIGHT: u16 = 3;
const STACK_SPACING: u16 = 1;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Label above button, centered in the body as one vertical stack.
pub fn stack_rects(body: Rect) -> (Rect, Rect) {
    let button_width = BUTTON_LABEL.chars().count() as u16 + 4;
    let stack_height = LABEL_HEIGHT + STACK_SPACING + BUTTON_HEIGHT;
    let stack = centered_rect_by_size(body, body.width, stack_height);

    let label = Rect {
        x: stack.x,
        y: stack.y,
        width: stack.width,
        height: LABEL_HEIGHT.min(stack.height),
    };
    let button_row = Rect {
        x: stack.x,
        y: stack.y + label.height + STACK_SPACING.min(stack.height.saturating_sub(label.height)),
        width: stack.width,
        height: stack
            .height
            .saturating_sub(label.height + STACK_SPACING)
            .min(BUTTON_HEIGHT),
    };
    let button = centered_rect_by_size(button_row, button_width, button_row.height);
    (label, button)
}

/// Where the button sits for a full terminal of `area`.
pub fn button_rect(area: Rect) -> Rect {
    let (_, body, _) = layout_regions(area);
    stack_rects(body).1
}

pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

pub fn contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && col < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}
