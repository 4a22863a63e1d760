use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::{bold, dim, green_bold, italic, magenta, red_bold, HORIZONTAL_MARGIN, VERTICAL_MARGIN};
use crate::app::{App, AppState, Feedback, Field, Quiz};
use crate::session::{Stats, Verdict};
use crate::vocab::library::display_name;

/// A UI screen boundary: draws one [`AppState`] of the app.
pub trait Screen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer);
}

/// Mode list, script switches and the last session's result
pub struct MenuScreen;

/// Checklist over the selection tree
pub struct SelectScreen;

/// One question at a time
pub struct QuizScreen;

/// Helper to construct the appropriate screen for the current state
pub fn current_screen(state: AppState) -> Box<dyn Screen> {
    match state {
        AppState::Menu => Box::new(MenuScreen),
        AppState::Select => Box::new(SelectScreen),
        AppState::Quiz => Box::new(QuizScreen),
    }
}

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x] "
    } else {
        "[ ] "
    }
}

fn stats_line(stats: Stats) -> String {
    format!(
        "{}/{} correct   {:.0}% acc",
        stats.correct,
        stats.total,
        stats.accuracy()
    )
}

fn inner(area: Rect) -> Rect {
    Layout::default()
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([Constraint::Min(0)])
        .split(area)[0]
}

impl Screen for MenuScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let title = if app.is_vocabulary() {
            "fiftysound · vocabulary"
        } else {
            "fiftysound · kana"
        };
        let mut lines = vec![Line::from(Span::styled(title, bold())), Line::default()];

        for (i, label) in app.mode_labels().into_iter().enumerate() {
            lines.push(if i == app.mode_index() {
                Line::from(Span::styled(format!("> {label}"), magenta().add_modifier(Modifier::BOLD)))
            } else {
                Line::from(Span::styled(format!("  {label}"), dim()))
            });
        }
        lines.push(Line::default());

        if let Some((hiragana, katakana)) = app.scripts() {
            lines.push(Line::from(format!(
                "{}hiragana   {}katakana",
                checkbox(hiragana),
                checkbox(katakana)
            )));
        }

        let mut selected = format!("{} selected", app.selected_count());
        if app.selection().is_locked() {
            selected.push_str(" (all random)");
        }
        lines.push(Line::from(selected));

        if let Some(stats) = app.last_stats() {
            lines.push(Line::from(Span::styled(
                format!("last session: {}", stats_line(stats)),
                bold(),
            )));
        }
        if let Some(message) = app.message() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(message.to_string(), red_bold())));
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            if app.scripts().is_some() {
                "(↑/↓) mode / (h)iragana / (k)atakana / (s)elect / (enter) start / (esc) quit"
            } else {
                "(↑/↓) mode / (s)elect / (enter) start / (esc) quit"
            },
            italic(),
        )));

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner(area), buf);
    }
}

impl Screen for SelectScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // heading
                Constraint::Min(1),    // tree
                Constraint::Length(1), // message
                Constraint::Length(1), // legend
            ])
            .split(inner(area));

        Paragraph::new(Span::styled("Choose what to practice", bold())).render(chunks[0], buf);

        let rows = app.tree().walk();
        let height = chunks[1].height as usize;
        let offset = (app.cursor() + 1).saturating_sub(height);
        let locked = app.selection().is_locked();

        let lines: Vec<Line> = rows
            .iter()
            .enumerate()
            .skip(offset)
            .take(height)
            .map(|(i, (depth, node))| {
                let label = if app.is_vocabulary() {
                    display_name(&node.label)
                } else {
                    node.label.as_str()
                };
                let text = format!(
                    "{}{}{}",
                    "  ".repeat(*depth),
                    checkbox(app.selection().is_checked(&node.id)),
                    label
                );
                let mut style = if node.is_group() { bold() } else { Style::default() };
                if locked {
                    style = style.add_modifier(Modifier::DIM);
                }
                if i == app.cursor() {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                Line::from(Span::styled(text, style))
            })
            .collect();
        Paragraph::new(lines).render(chunks[1], buf);

        if let Some(message) = app.message() {
            Paragraph::new(Span::styled(message.to_string(), red_bold())).render(chunks[2], buf);
        }

        Paragraph::new(Span::styled(
            "(space) toggle / (a)ll random / (enter) confirm / (esc) cancel",
            italic(),
        ))
        .render(chunks[3], buf);
    }
}

impl Screen for QuizScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let Some(quiz) = app.quiz() else {
            return;
        };

        let prompt = quiz.prompt();
        let prompt_lines = prompt.lines().count().max(1) as u16;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(prompt_lines + 1),
                Constraint::Length(2), // answer fields
                Constraint::Length(2), // feedback
                Constraint::Length(1), // stats
                Constraint::Min(0),
                Constraint::Length(1), // legend
            ])
            .split(inner(area));

        let alignment = if prompt_lines == 1 {
            Alignment::Center
        } else {
            Alignment::Left
        };
        Paragraph::new(prompt)
            .style(bold())
            .alignment(alignment)
            .wrap(Wrap { trim: false })
            .render(chunks[1], buf);

        answer_fields(app, quiz).render(chunks[2], buf);

        if let Some(feedback) = app.feedback() {
            let span = match feedback {
                Feedback::Judged(Verdict::Correct) => Span::styled("correct", green_bold()),
                Feedback::Judged(Verdict::Incorrect { expected }) => {
                    Span::styled(format!("incorrect, expected {expected}"), red_bold())
                }
                Feedback::Revealed(answer) => Span::styled(format!("answer: {answer}"), magenta()),
            };
            Paragraph::new(span)
                .alignment(Alignment::Center)
                .render(chunks[3], buf);
        }

        if quiz.is_judged() {
            Paragraph::new(Span::styled(stats_line(quiz.stats()), dim()))
                .alignment(Alignment::Center)
                .render(chunks[4], buf);
        }

        let legend = if app.feedback().is_some() {
            "(enter) next / (esc) menu"
        } else if quiz.takes_kanji() {
            "(enter) check / (tab) switch field / (ctrl-n) skip / (esc) menu"
        } else if quiz.is_judged() {
            "(enter) check / (tab) skip / (esc) menu"
        } else {
            "(enter) show answer / (tab) skip / (esc) menu"
        };
        Paragraph::new(Span::styled(legend, italic())).render(chunks[6], buf);
    }
}

fn answer_fields<'a>(app: &'a App, quiz: &Quiz) -> Paragraph<'a> {
    if !quiz.is_judged() {
        return Paragraph::new("");
    }

    let field = |label: &'a str, value: &'a str, focused: bool| {
        let style = if focused && app.feedback().is_none() {
            Style::default().add_modifier(Modifier::UNDERLINED)
        } else {
            dim()
        };
        Line::from(vec![
            Span::styled(label, dim()),
            Span::styled(value, style),
            Span::styled(if focused { "_" } else { "" }, dim()),
        ])
    };

    let lines = if quiz.takes_kanji() {
        vec![
            field("kana:  ", app.answer(), app.focus() == Field::Answer),
            field("kanji: ", app.kanji(), app.focus() == Field::Kanji),
        ]
    } else {
        vec![field("answer: ", app.answer(), true)]
    };
    Paragraph::new(lines).alignment(Alignment::Center)
}
