use crate::game::{Board, Cell};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

fn cell_span(cell: Cell) -> Span<'static> {
    let (symbol, color) = match cell {
        Cell::Empty => (" . ", Color::DarkGray),
        Cell::One => (" \u{25cf} ", Color::Red),
        Cell::Two => (" \u{25cf} ", Color::Yellow),
        Cell::Blocked => (" \u{2593} ", Color::Gray),
    };
    Span::styled(symbol, Style::default().fg(color))
}

/// Framed board lines with column numbers above and a marker under the
/// selected column. The marker points up or down to show where pieces fall.
pub fn board_lines(board: &Board, selected_column: usize, inverted: bool) -> Vec<Line<'static>> {
    let cols = board.cols();
    let mut lines = Vec::with_capacity(board.rows() + 4);

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..cols {
        let label = format!("{:^3}", col + 1);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    let rule = "\u{2550}".repeat(cols * 3 + 1);
    lines.push(Line::from(format!("  \u{2554}{rule}\u{2557}")));

    for row in 0..board.rows() {
        let mut row_spans = vec![Span::raw("  \u{2551}")];
        row_spans.extend(board.row(row).iter().map(|&cell| cell_span(cell)));
        row_spans.push(Span::raw(" \u{2551}"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  \u{255a}{rule}\u{255d}")));

    // Selection indicator
    let arrow = if inverted { " \u{25bc} " } else { " \u{25b2} " };
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..cols {
        if col == selected_column {
            indicator_line.push(Span::styled(arrow, Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    lines
}
