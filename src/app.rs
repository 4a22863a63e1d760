//! Headless application state: the current screen, the checked ranges and the
//! running quiz. The terminal front-end renders this and feeds it key events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::kana::{self, KanaTable};
use crate::selection::{apply_toggle, Selection, SelectionNode, SelectionTree};
use crate::session::{KanaMode, KanaQuiz, Stats, Verdict, WordMode, WordQuiz};
use crate::targets::MinTargets;
use crate::vocab::{self, OnDecodeError, VocabularyLibrary, VocabularySource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Menu,
    Select,
    Quiz,
}

/// Which answer buffer receives typed characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Field {
    #[default]
    Answer,
    Kanji,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Judged(Verdict),
    Revealed(String),
}

#[derive(Debug)]
pub enum Quiz {
    Kana(KanaQuiz),
    Word(WordQuiz),
}

impl Quiz {
    pub fn prompt(&self) -> String {
        match self {
            Quiz::Kana(q) => q.prompt(),
            Quiz::Word(q) => q.prompt(),
        }
    }

    pub fn stats(&self) -> Stats {
        match self {
            Quiz::Kana(q) => q.stats(),
            Quiz::Word(q) => q.stats(),
        }
    }

    pub fn is_judged(&self) -> bool {
        match self {
            Quiz::Kana(q) => q.mode().is_judged(),
            Quiz::Word(q) => q.mode().is_judged(),
        }
    }

    /// True when the answer has a separate kanji field.
    pub fn takes_kanji(&self) -> bool {
        matches!(self, Quiz::Word(q) if q.mode() == WordMode::MeaningToWord)
    }

    fn advance(&mut self) {
        match self {
            Quiz::Kana(q) => {
                q.next_question();
            }
            Quiz::Word(q) => {
                q.next_word();
            }
        }
    }

    // None means there is nothing to show and the quiz moves on.
    fn submit(&mut self, answer: &str, kanji: &str) -> Option<Feedback> {
        match self {
            Quiz::Kana(q) => Some(match q.answer(answer) {
                Some(verdict) => Feedback::Judged(verdict),
                None => Feedback::Revealed(q.reveal()),
            }),
            Quiz::Word(q) => match q.mode() {
                WordMode::MeaningToWord => q.answer_word(answer, kanji).map(Feedback::Judged),
                WordMode::WordToMeaning => q.answer_meaning(answer).map(Feedback::Judged),
                WordMode::Review => None,
            },
        }
    }
}

#[derive(Debug)]
enum Practice {
    Kana {
        table: KanaTable,
        tree: SelectionTree,
        include_hiragana: bool,
        include_katakana: bool,
        min: MinTargets,
    },
    Vocabulary {
        library: VocabularyLibrary,
        min: MinTargets,
    },
}

impl Practice {
    fn tree(&self) -> &SelectionTree {
        match self {
            Practice::Kana { tree, .. } => tree,
            Practice::Vocabulary { library, .. } => library.tree(),
        }
    }

    fn mode_labels(&self) -> Vec<String> {
        match self {
            Practice::Kana { .. } => KanaMode::ALL.iter().map(ToString::to_string).collect(),
            Practice::Vocabulary { .. } => WordMode::ALL.iter().map(ToString::to_string).collect(),
        }
    }
}

#[derive(Debug)]
pub struct App {
    state: AppState,
    practice: Practice,
    selection: Selection,
    /// Restored when the selection screen is cancelled.
    saved_selection: Option<Selection>,
    cursor: usize,
    mode_index: usize,
    quiz: Option<Quiz>,
    answer: String,
    kanji: String,
    focus: Field,
    feedback: Option<Feedback>,
    last_stats: Option<Stats>,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Kana practice. The initial selection comes from `config.selected_kana`.
    pub fn kana(table: KanaTable, config: &Config) -> Result<Self> {
        let tree = kana::selection_tree(&table)?;
        let selection = Selection::from_leaves(&tree, &config.selected_kana);
        Ok(Self::with_practice(
            Practice::Kana {
                table,
                tree,
                include_hiragana: config.include_hiragana,
                include_katakana: config.include_katakana,
                min: config.min_kana_targets(),
            },
            selection,
        ))
    }

    pub fn vocabulary(library: VocabularyLibrary, config: &Config) -> Self {
        Self::with_practice(
            Practice::Vocabulary {
                library,
                min: config.min_word_targets(),
            },
            Selection::new(),
        )
    }

    fn with_practice(practice: Practice, selection: Selection) -> Self {
        Self {
            state: AppState::Menu,
            practice,
            selection,
            saved_selection: None,
            cursor: 0,
            mode_index: 0,
            quiz: None,
            answer: String::new(),
            kanji: String::new(),
            focus: Field::Answer,
            feedback: None,
            last_stats: None,
            message: None,
            should_quit: false,
        }
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn is_vocabulary(&self) -> bool {
        matches!(self.practice, Practice::Vocabulary { .. })
    }

    pub fn tree(&self) -> &SelectionTree {
        self.practice.tree()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn mode_labels(&self) -> Vec<String> {
        self.practice.mode_labels()
    }

    pub fn mode_index(&self) -> usize {
        self.mode_index
    }

    /// Hiragana/katakana switches; `None` outside kana practice.
    pub fn scripts(&self) -> Option<(bool, bool)> {
        match self.practice {
            Practice::Kana {
                include_hiragana,
                include_katakana,
                ..
            } => Some((include_hiragana, include_katakana)),
            Practice::Vocabulary { .. } => None,
        }
    }

    pub fn quiz(&self) -> Option<&Quiz> {
        self.quiz.as_ref()
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn kanji(&self) -> &str {
        &self.kanji
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// Stats of the most recently finished judged session.
    pub fn last_stats(&self) -> Option<Stats> {
        self.last_stats
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Number of checked leaves.
    pub fn selected_count(&self) -> usize {
        self.selection.checked_leaves(self.practice.tree()).len()
    }

    /// The node under the selection cursor.
    pub fn cursor_node(&self) -> Option<&SelectionNode> {
        self.practice
            .tree()
            .walk()
            .into_iter()
            .nth(self.cursor)
            .map(|(_, node)| node)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.state {
            AppState::Menu => self.on_menu_key(key),
            AppState::Select => self.on_select_key(key),
            AppState::Quiz => self.on_quiz_key(key),
        }
    }

    fn on_menu_key(&mut self, key: KeyEvent) {
        let modes = self.practice.mode_labels().len();
        match key.code {
            KeyCode::Up => self.mode_index = (self.mode_index + modes - 1) % modes,
            KeyCode::Down => self.mode_index = (self.mode_index + 1) % modes,
            KeyCode::Char('h') => {
                if let Practice::Kana {
                    include_hiragana, ..
                } = &mut self.practice
                {
                    *include_hiragana = !*include_hiragana;
                }
            }
            KeyCode::Char('k') => {
                if let Practice::Kana {
                    include_katakana, ..
                } = &mut self.practice
                {
                    *include_katakana = !*include_katakana;
                }
            }
            KeyCode::Char('s') => {
                self.saved_selection = Some(self.selection.clone());
                self.cursor = 0;
                self.message = None;
                self.state = AppState::Select;
            }
            KeyCode::Enter => self.start(),
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn on_select_key(&mut self, key: KeyEvent) {
        let rows = self.practice.tree().walk().len();
        match key.code {
            KeyCode::Up => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down => {
                if self.cursor + 1 < rows {
                    self.cursor += 1;
                }
            }
            KeyCode::Char(' ') => self.toggle_at_cursor(),
            KeyCode::Char('a') => {
                let everything = !self.selection.is_locked();
                self.selection.select_all(self.practice.tree(), everything);
                self.message = None;
            }
            KeyCode::Enter => {
                self.saved_selection = None;
                self.message = None;
                debug!(selected = self.selected_count(), "selection confirmed");
                self.state = AppState::Menu;
            }
            KeyCode::Esc => {
                if let Some(previous) = self.saved_selection.take() {
                    self.selection = previous;
                }
                self.message = None;
                self.state = AppState::Menu;
            }
            _ => {}
        }
    }

    fn toggle_at_cursor(&mut self) {
        let tree = self.practice.tree();
        let Some((_, node)) = tree.walk().into_iter().nth(self.cursor) else {
            return;
        };
        let checked = !self.selection.is_checked(&node.id);
        match apply_toggle(tree, &self.selection, &node.id, checked) {
            Ok(next) => {
                self.selection = next;
                self.message = None;
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    fn on_quiz_key(&mut self, key: KeyEvent) {
        let Some(quiz) = self.quiz.as_ref() else {
            self.state = AppState::Menu;
            return;
        };
        let takes_kanji = quiz.takes_kanji();
        let takes_input = quiz.is_judged();
        let buffers_empty = self.answer.is_empty() && self.kanji.is_empty();

        match key.code {
            KeyCode::Esc => self.finish(),
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => self.advance(),
            KeyCode::Enter => {
                if self.feedback.is_some() {
                    self.advance();
                } else {
                    self.submit();
                }
            }
            KeyCode::Tab if takes_kanji && self.feedback.is_none() => {
                self.focus = match self.focus {
                    Field::Answer => Field::Kanji,
                    Field::Kanji => Field::Answer,
                };
            }
            KeyCode::Tab | KeyCode::Right if buffers_empty => self.advance(),
            KeyCode::Backspace if self.feedback.is_none() => {
                self.focused_mut().pop();
            }
            KeyCode::Char(c) if takes_input && self.feedback.is_none() => {
                self.focused_mut().push(c);
            }
            _ => {}
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Answer => &mut self.answer,
            Field::Kanji => &mut self.kanji,
        }
    }

    fn start(&mut self) {
        match self.build_quiz() {
            Ok(quiz) => {
                self.quiz = Some(quiz);
                self.clear_answer();
                self.message = None;
                self.state = AppState::Quiz;
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    fn build_quiz(&self) -> Result<Quiz> {
        let leaves = self.selection.checked_leaves(self.practice.tree());
        match &self.practice {
            Practice::Kana {
                table,
                include_hiragana,
                include_katakana,
                min,
                ..
            } => {
                let mode = KanaMode::ALL.get(self.mode_index).copied().unwrap_or_default();
                let targets = kana::resolve_targets(table, &leaves, *include_hiragana, *include_katakana);
                Ok(Quiz::Kana(KanaQuiz::new(&targets, mode, *min)?))
            }
            Practice::Vocabulary { library, min } => {
                let mode = WordMode::ALL.get(self.mode_index).copied().unwrap_or_default();
                let words = vocab::resolve_targets(library, &leaves, OnDecodeError::Skip)?;
                Ok(Quiz::Word(WordQuiz::new(&words, mode, *min)?))
            }
        }
    }

    fn submit(&mut self) {
        let Some(quiz) = self.quiz.as_mut() else {
            return;
        };
        match quiz.submit(&self.answer, &self.kanji) {
            Some(feedback) => self.feedback = Some(feedback),
            None => self.advance(),
        }
    }

    fn advance(&mut self) {
        if let Some(quiz) = self.quiz.as_mut() {
            quiz.advance();
        }
        self.clear_answer();
    }

    fn finish(&mut self) {
        if let Some(quiz) = self.quiz.take() {
            let stats = quiz.stats();
            info!(total = stats.total, correct = stats.correct, "session finished");
            if quiz.is_judged() {
                self.last_stats = Some(stats);
            }
        }
        self.clear_answer();
        self.state = AppState::Menu;
    }

    fn clear_answer(&mut self) {
        self.answer.clear();
        self.kanji.clear();
        self.focus = Field::Answer;
        self.feedback = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn kana_app() -> App {
        App::kana(KanaTable::standard(), &Config::default()).unwrap()
    }

    #[test]
    fn start_without_selection_shows_blocking_message() {
        let mut app = kana_app();
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.state(), AppState::Menu);
        let expected = Error::InsufficientTargets {
            found: 0,
            required: 2,
        }
        .to_string();
        assert_eq!(app.message(), Some(expected.as_str()));
    }

    #[test]
    fn initial_selection_comes_from_config() {
        let config = Config {
            selected_kana: vec!["か".into(), "き".into(), "nope".into()],
            ..Config::default()
        };
        let app = App::kana(KanaTable::standard(), &config).unwrap();
        assert_eq!(app.selected_count(), 2);
        assert!(app.selection().is_checked("か"));
    }

    #[test]
    fn group_toggle_then_confirm_starts_quiz() {
        let mut app = kana_app();
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.state(), AppState::Select);
        assert_eq!(app.cursor_node().unwrap().id, "a");

        press(&mut app, KeyCode::Char(' '));
        assert!(app.selection().is_checked("a"));
        assert_eq!(app.selected_count(), 5);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state(), AppState::Menu);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state(), AppState::Quiz);
        assert!(app.quiz().unwrap().prompt().starts_with("Type the romaji for"));
    }

    #[test]
    fn cancel_restores_previous_selection() {
        let mut app = kana_app();
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' '));
        assert!(app.selection().is_checked("あ"));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state(), AppState::Menu);
        assert!(!app.selection().is_checked("あ"));
        assert_eq!(app.selected_count(), 0);
    }

    #[test]
    fn all_random_locks_individual_toggles() {
        let mut app = kana_app();
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char('a'));
        assert!(app.selection().is_locked());
        assert_eq!(app.selected_count(), app.tree().leaves().len());

        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.message(), Some(Error::SelectionLocked.to_string().as_str()));
        assert!(app.selection().is_checked("a"));

        press(&mut app, KeyCode::Char('a'));
        assert!(!app.selection().is_locked());
        assert_eq!(app.selected_count(), 0);
    }

    #[test]
    fn disabling_both_scripts_leaves_nothing_to_practice() {
        let config = Config {
            selected_kana: vec!["か".into(), "き".into()],
            ..Config::default()
        };
        let mut app = App::kana(KanaTable::standard(), &config).unwrap();
        press(&mut app, KeyCode::Char('h'));
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.scripts(), Some((false, false)));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state(), AppState::Menu);
        assert!(app.message().unwrap().contains("selected 0"));
    }

    #[test]
    fn correct_answer_is_judged_and_counted() {
        let config = Config {
            selected_kana: vec!["か".into(), "き".into()],
            include_katakana: false,
            ..Config::default()
        };
        let mut app = App::kana(KanaTable::standard(), &config).unwrap();
        press(&mut app, KeyCode::Enter);

        let romaji = match app.quiz().unwrap() {
            Quiz::Kana(q) => q.current().entry.canonical_romaji(),
            Quiz::Word(_) => panic!("expected a kana quiz"),
        };
        type_text(&mut app, romaji);
        assert_eq!(app.answer(), romaji);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.feedback(), Some(&Feedback::Judged(Verdict::Correct)));

        // typing is ignored while feedback is shown
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.answer(), romaji);

        press(&mut app, KeyCode::Enter);
        assert!(app.feedback().is_none());
        assert!(app.answer().is_empty());

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state(), AppState::Menu);
        assert_eq!(app.last_stats(), Some(Stats { total: 1, correct: 1 }));
    }

    #[test]
    fn handwriting_mode_reveals_instead_of_judging() {
        let config = Config {
            selected_kana: vec!["さ".into(), "し".into()],
            ..Config::default()
        };
        let mut app = App::kana(KanaTable::standard(), &config).unwrap();
        press(&mut app, KeyCode::Down);
        assert_eq!(app.mode_index(), 1);
        press(&mut app, KeyCode::Enter);

        type_text(&mut app, "shi");
        assert!(app.answer().is_empty());

        let glyph = match app.quiz().unwrap() {
            Quiz::Kana(q) => q.current().entry.glyph,
            Quiz::Word(_) => panic!("expected a kana quiz"),
        };
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.feedback(), Some(&Feedback::Revealed(glyph.to_string())));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.last_stats(), None);
    }

    #[test]
    fn empty_tab_skips_question() {
        let config = Config {
            selected_kana: vec!["な".into(), "に".into()],
            include_katakana: false,
            ..Config::default()
        };
        let mut app = App::kana(KanaTable::standard(), &config).unwrap();
        press(&mut app, KeyCode::Enter);

        let before = app.quiz().unwrap().prompt();
        press(&mut app, KeyCode::Tab);
        // two targets and no back-to-back repeats
        assert_ne!(app.quiz().unwrap().prompt(), before);
        assert_eq!(app.quiz().unwrap().stats().total, 0);
    }

    #[test]
    fn vocabulary_meaning_to_word_round() {
        let library = VocabularyLibrary::bundled().unwrap();
        let mut app = App::vocabulary(library, &Config::default());
        assert!(app.is_vocabulary());
        assert_eq!(app.scripts(), None);

        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state(), AppState::Quiz);

        let word = match app.quiz().unwrap() {
            Quiz::Word(q) => q.current().clone(),
            Quiz::Kana(_) => panic!("expected a word quiz"),
        };
        type_text(&mut app, &word.kana);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus(), Field::Kanji);
        type_text(&mut app, &word.kanji);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.feedback(), Some(&Feedback::Judged(Verdict::Correct)));
    }

    #[test]
    fn review_mode_advances_on_enter() {
        let library = VocabularyLibrary::bundled().unwrap();
        let mut app = App::vocabulary(library, &Config::default());
        press(&mut app, KeyCode::Up);
        assert_eq!(app.mode_index(), 2);

        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Enter);
        assert!(app.feedback().is_none());
        assert!(app.quiz().unwrap().prompt().starts_with("[meaning]"));
    }

    #[test]
    fn ctrl_c_quits_from_any_screen() {
        let mut app = kana_app();
        press(&mut app, KeyCode::Char('s'));
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }
}
