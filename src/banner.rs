use crate::consts;
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
};

/// A titled pop-up box drawn centered over whatever is already on screen
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Banner {
    title: &'static str,
    lines: Vec<Line<'static>>,
}

impl Banner {
    pub(crate) fn new(title: &'static str, lines: Vec<Line<'static>>) -> Banner {
        Banner { title, lines }
    }

    /// The banner shown before the first game begins
    pub(crate) fn title_screen(boost: bool) -> Banner {
        let mut lines = vec![
            Line::from("Eat the food to grow and score points."),
            Line::from("Don't hit the walls or yourself!"),
            Line::default(),
            Line::from_iter([
                Span::raw("Steer: "),
                Span::styled("← ↑ ↓ →", consts::KEY_STYLE),
                Span::raw(", "),
                Span::styled("wasd", consts::KEY_STYLE),
                Span::raw(", or "),
                Span::styled("hjkl", consts::KEY_STYLE),
            ]),
        ];
        if boost {
            lines.push(Line::from_iter([
                Span::raw("Boost: "),
                Span::styled("b", consts::KEY_STYLE),
            ]));
        }
        lines.push(Line::default());
        lines.push(Line::from_iter([
            Span::raw("Start ("),
            Span::styled("Space", consts::KEY_STYLE),
            Span::raw(")   Quit ("),
            Span::styled("q", consts::KEY_STYLE),
            Span::raw(")"),
        ]));
        Banner::new("SNAKE", lines)
    }

    /// The banner shown once a game has ended
    pub(crate) fn game_over(cause: String, score: u32, level: u32) -> Banner {
        Banner::new(
            "GAME OVER",
            vec![
                Line::from(cause),
                Line::from(format!("Score: {score}   Level: {level}")),
                Line::default(),
                Line::from_iter([
                    Span::raw("Restart ("),
                    Span::styled("r", consts::KEY_STYLE),
                    Span::raw(")   Quit ("),
                    Span::styled("q", consts::KEY_STYLE),
                    Span::raw(")"),
                ]),
            ],
        )
    }

    /// Size of the box including its border & padding
    fn size(&self) -> Size {
        let text_width = self
            .lines
            .iter()
            .map(Line::width)
            .max()
            .unwrap_or(0)
            .max(self.title.len() + 2);
        Size {
            width: u16::try_from(text_width)
                .unwrap_or(u16::MAX)
                .saturating_add(4),
            height: u16::try_from(self.lines.len())
                .unwrap_or(u16::MAX)
                .saturating_add(2),
        }
    }
}

impl Widget for &Banner {
    // `area` is the whole screen, not just the box.
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block_area = center_rect(area, self.size());
        let block = Block::bordered()
            .title(format!(" {} ", self.title))
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1))
            .style(Style::reset());
        let inner = block.inner(block_area);
        Clear.render(block_area, buf);
        block.render(block_area, buf);
        for (line, row) in self.lines.iter().zip(inner.rows()) {
            line.clone().render(row, buf);
        }
    }
}
