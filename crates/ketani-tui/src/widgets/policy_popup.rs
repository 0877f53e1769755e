//! Policy popup — the privacy and cookie policies in a centred overlay.
//!
//! Open with `p` or `:policy`; `←`/`→` switch policy, `Escape` closes.

use crate::theme::Theme;
use crate::widgets::help::centered_rect;
use ketani_core::policy::PolicyKind;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget, Wrap},
};

pub struct PolicyPopup<'a> {
    kind: PolicyKind,
    theme: &'a Theme,
}

impl<'a> PolicyPopup<'a> {
    pub fn new(kind: PolicyKind, theme: &'a Theme) -> Self {
        Self { kind, theme }
    }
}

impl Widget for PolicyPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(72, 20, area);
        Clear.render(popup, buf);

        let policy = self.kind.policy();
        let tabs: Vec<Span> = PolicyKind::ALL
            .iter()
            .map(|k| {
                let style = if *k == self.kind { self.theme.accent } else { self.theme.dim };
                Span::styled(format!(" {} ", k.policy().title), style)
            })
            .collect();

        let block = Block::bordered()
            .title(Line::from(tabs))
            .title_bottom(" ←/→ switch · Esc close ")
            .border_style(self.theme.border_focused);
        let inner = block.inner(popup);
        block.render(popup, buf);

        let mut lines = vec![
            Line::from(Span::styled(policy.title, self.theme.heading)),
            Line::from(Span::styled(policy.updated_label(), self.theme.dim)),
        ];
        for (heading, body) in policy.sections {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(*heading, self.theme.accent)));
            lines.push(Line::from(*body));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
