use crate::config::{self, Config};
use crate::game::{Game, InvalidMove, Status, MAX_CHAIN_WORD_LEN, MAX_SETUP_WORD_LEN};
use crate::theme::{ThemeManager, UiPalette};
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, ExecutableCommand};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

pub fn run_app(mut config: Config, start: Option<String>, target: Option<String>) -> Result<()> {
    let theme_manager = ThemeManager::load(&config)?;
    if !theme_manager.theme_names().iter().any(|t| t == &config.theme) {
        config.theme = theme_manager.fallback_name().to_string();
        config::write_config(&config)?;
    }

    let mut app = App::new(config, theme_manager, start, target);

    let mut terminal = setup_terminal()?;
    let _guard = TerminalGuard;

    let tick_rate = Duration::from_millis(50);

    loop {
        app.tick();
        terminal.draw(|f| ui(f, &mut app))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if app.handle_key(key) {
                    break;
                }
            }
        }
    }

    Ok(())
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = stdout.execute(LeaveAlternateScreen);
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Chain,
    EditStart,
    EditTarget,
    ThemePicker,
}

struct App {
    config: Config,
    theme_manager: ThemeManager,
    ui: UiPalette,
    game: Game,
    mode: Mode,
    input: String,
    start_input: String,
    target_input: String,
    rejection_until: Option<Instant>,
    reveal_at: Option<Instant>,
    show_full_chain: bool,
    status: Option<String>,
    theme_selected: usize,
    theme_before_picker: Option<String>,
}

impl App {
    fn new(
        config: Config,
        theme_manager: ThemeManager,
        start: Option<String>,
        target: Option<String>,
    ) -> Self {
        let ui = theme_manager.get(&config.theme);
        let start = start.unwrap_or_else(|| config.start_word.clone());
        let target = target.unwrap_or_else(|| config.target_word.clone());
        let game = Game::new(&start, &target);
        let start_input = game.start_word().to_string();
        let target_input = game.target().to_string();
        let theme_selected = theme_manager
            .theme_names()
            .iter()
            .position(|name| name == &config.theme)
            .unwrap_or(0);

        Self {
            config,
            theme_manager,
            ui,
            game,
            mode: Mode::Chain,
            input: String::new(),
            start_input,
            target_input,
            rejection_until: None,
            reveal_at: None,
            show_full_chain: false,
            status: None,
            theme_selected,
            theme_before_picker: None,
        }
    }

    fn base_style(&self) -> Style {
        Style::default()
            .fg(self.ui.base_fg)
            .bg(self.ui.base_bg.unwrap_or(Color::Reset))
    }

    fn rejecting(&self) -> bool {
        self.rejection_until.is_some()
    }

    fn tick(&mut self) {
        if let Some(until) = self.rejection_until {
            if Instant::now() >= until {
                self.rejection_until = None;
            }
        }
        if let Some(at) = self.reveal_at {
            if Instant::now() >= at {
                self.reveal_at = None;
                self.show_full_chain = true;
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match self.mode {
            Mode::Chain => self.handle_chain_key(key),
            Mode::EditStart | Mode::EditTarget => self.handle_setup_key(key),
            Mode::ThemePicker => self.handle_theme_picker(key),
        }
    }

    fn handle_chain_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return true,
            KeyCode::Char('c') if ctrl => return true,
            KeyCode::Char('r') if ctrl => self.reset_game(),
            KeyCode::Char('t') if ctrl => self.open_theme_picker(),
            KeyCode::Tab => {
                self.start_input = self.game.start_word().to_string();
                self.mode = Mode::EditStart;
            }
            _ if self.game.status() == Status::Solved => match key.code {
                KeyCode::Char('r') => self.reset_game(),
                KeyCode::Char('q') => return true,
                _ => {}
            },
            KeyCode::Enter => self.submit_input(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) if !ctrl && !c.is_control() => {
                if self.input.chars().count() < MAX_CHAIN_WORD_LEN {
                    self.input.extend(c.to_uppercase());
                }
            }
            _ => {}
        }
        false
    }

    fn submit_input(&mut self) {
        let steps_before = self.game.steps();
        match self.game.submit(&self.input) {
            Ok(Status::Solved) => {
                self.input.clear();
                self.reveal_at =
                    Some(Instant::now() + Duration::from_millis(self.config.reveal_delay_ms));
                self.status = Some(format!("Solved in {} steps", self.game.steps()));
            }
            Ok(Status::Playing) => {
                if self.game.steps() > steps_before {
                    self.input.clear();
                }
            }
            Err(InvalidMove) => {
                self.rejection_until =
                    Some(Instant::now() + Duration::from_millis(self.config.reject_flash_ms));
            }
        }
    }

    fn reset_game(&mut self) {
        let start = self.game.start_word().to_string();
        self.game.reset(&start);
        self.input.clear();
        self.rejection_until = None;
        self.reveal_at = None;
        self.show_full_chain = false;
        self.status = Some("New game".to_string());
    }

    fn handle_setup_key(&mut self, key: KeyEvent) -> bool {
        let editing_start = self.mode == Mode::EditStart;
        match key.code {
            KeyCode::Esc => {
                self.start_input = self.game.start_word().to_string();
                self.target_input = self.game.target().to_string();
                self.mode = Mode::Chain;
            }
            KeyCode::Enter => {
                self.commit_setup_field(editing_start);
                self.mode = Mode::Chain;
            }
            KeyCode::Tab => {
                self.commit_setup_field(editing_start);
                self.mode = if editing_start {
                    Mode::EditTarget
                } else {
                    Mode::Chain
                };
            }
            KeyCode::Backspace => {
                if editing_start {
                    self.start_input.pop();
                } else {
                    self.target_input.pop();
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) && !c.is_control() => {
                let field = if editing_start {
                    &mut self.start_input
                } else {
                    &mut self.target_input
                };
                if field.chars().count() < MAX_SETUP_WORD_LEN {
                    field.extend(c.to_uppercase());
                }
            }
            _ => {}
        }
        false
    }

    fn commit_setup_field(&mut self, editing_start: bool) {
        if editing_start {
            if self.start_input.trim().is_empty() {
                self.start_input = self.game.start_word().to_string();
                self.status = Some("Start word unchanged".to_string());
                return;
            }
            if self.start_input != self.game.start_word() {
                let start = self.start_input.clone();
                self.game.reset(&start);
                self.input.clear();
                self.rejection_until = None;
                self.reveal_at = None;
                self.show_full_chain = false;
                self.start_input = self.game.start_word().to_string();
            }
        } else {
            if self.target_input.trim().is_empty() {
                self.target_input = self.game.target().to_string();
                self.status = Some("Target word unchanged".to_string());
                return;
            }
            let target = self.target_input.clone();
            self.game.set_target(&target);
            self.target_input = self.game.target().to_string();
        }
    }

    fn open_theme_picker(&mut self) {
        self.theme_before_picker = Some(self.config.theme.clone());
        self.theme_selected = self
            .theme_manager
            .theme_names()
            .iter()
            .position(|name| name == &self.config.theme)
            .unwrap_or(0);
        self.mode = Mode::ThemePicker;
    }

    fn handle_theme_picker(&mut self, key: KeyEvent) -> bool {
        let total = self.theme_manager.theme_names().len();
        if total == 0 {
            self.mode = Mode::Chain;
            return false;
        }
        match key.code {
            KeyCode::Esc => {
                self.mode = Mode::Chain;
                if let Some(original) = self.theme_before_picker.take() {
                    if self.config.theme != original {
                        self.config.theme = original;
                        self.ui = self.theme_manager.get(&self.config.theme);
                    }
                }
            }
            KeyCode::Up => {
                if self.theme_selected > 0 {
                    self.theme_selected -= 1;
                    self.preview_theme_selection();
                }
            }
            KeyCode::Down => {
                if self.theme_selected + 1 < total {
                    self.theme_selected += 1;
                    self.preview_theme_selection();
                }
            }
            KeyCode::PageUp => {
                self.theme_selected = self.theme_selected.saturating_sub(10);
                self.preview_theme_selection();
            }
            KeyCode::PageDown => {
                self.theme_selected = (self.theme_selected + 10).min(total - 1);
                self.preview_theme_selection();
            }
            KeyCode::Enter => {
                if let Some(theme) = self.theme_manager.theme_names().get(self.theme_selected) {
                    self.config.theme = theme.clone();
                    let _ = config::write_config(&self.config);
                    self.ui = self.theme_manager.get(&self.config.theme);
                }
                self.mode = Mode::Chain;
                self.theme_before_picker = None;
            }
            _ => {}
        }
        false
    }

    fn preview_theme_selection(&mut self) {
        if let Some(theme) = self.theme_manager.theme_names().get(self.theme_selected) {
            self.config.theme = theme.clone();
            self.ui = self.theme_manager.get(&self.config.theme);
        }
    }

    fn board_lines(&self) -> Vec<Line<'static>> {
        let display = self.game.display();
        let word_style = Style::default()
            .fg(self.ui.base_fg)
            .add_modifier(Modifier::BOLD);
        let overlap_style = Style::default()
            .bg(self.ui.overlap_bg)
            .fg(self.ui.overlap_fg)
            .add_modifier(Modifier::BOLD);

        let mut spans = Vec::new();
        let mut run = String::new();
        let mut run_overlap = false;
        for (idx, ch) in display.word.chars().enumerate() {
            let in_overlap = display
                .spans
                .iter()
                .any(|s| idx >= s.start && idx < s.end);
            if in_overlap != run_overlap && !run.is_empty() {
                let style = if run_overlap { overlap_style } else { word_style };
                spans.push(Span::styled(std::mem::take(&mut run), style));
            }
            run_overlap = in_overlap;
            run.push(ch);
        }
        if !run.is_empty() {
            let style = if run_overlap { overlap_style } else { word_style };
            spans.push(Span::styled(run, style));
        }

        if self.game.status() == Status::Playing {
            spans.push(Span::styled("   →  ", Style::default().fg(self.ui.muted)));
            spans.push(Span::styled(
                self.game.target().to_string(),
                Style::default().fg(self.ui.accent),
            ));
        }

        let mut lines = vec![Line::from(spans)];
        if self.show_full_chain {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                self.game.chain().join(" → "),
                Style::default().fg(self.ui.muted),
            )));
        }
        lines
    }

    fn status_line(&self) -> Line<'static> {
        let mut parts = Vec::new();
        parts.push(Span::styled(
            "chainword",
            Style::default().fg(self.ui.accent).add_modifier(Modifier::BOLD),
        ));
        parts.push(Span::styled(" | ", Style::default().fg(self.ui.muted)));
        let mode_label = match self.mode {
            Mode::Chain => match self.game.status() {
                Status::Playing => "chain",
                Status::Solved => "solved",
            },
            Mode::EditStart => "edit start",
            Mode::EditTarget => "edit target",
            Mode::ThemePicker => "themes",
        };
        parts.push(Span::styled(mode_label, Style::default().fg(self.ui.accent)));
        parts.push(Span::styled(" | ", Style::default().fg(self.ui.muted)));
        parts.push(Span::styled(
            format!("{} → {}", self.game.start_word(), self.game.target()),
            self.base_style(),
        ));
        parts.push(Span::styled(" | ", Style::default().fg(self.ui.muted)));
        parts.push(Span::styled(
            format!("steps: {}", self.game.steps()),
            Style::default().fg(self.ui.muted),
        ));
        parts.push(Span::styled(" | ", Style::default().fg(self.ui.muted)));
        parts.push(Span::styled(
            format!("theme: {}", self.config.theme),
            Style::default().fg(self.ui.muted),
        ));
        if let Some(status) = &self.status {
            parts.push(Span::styled(" | ", Style::default().fg(self.ui.muted)));
            parts.push(Span::styled(status.clone(), Style::default().fg(self.ui.accent)));
        }
        Line::from(parts)
    }
}

fn ui(f: &mut ratatui::Frame, app: &mut App) {
    let base_style = app.base_style();
    let border_style = Style::default().fg(app.ui.border);
    let size = f.size();
    f.render_widget(Block::default().style(base_style), size);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Min(7),
            Constraint::Length(1),
        ])
        .split(size);
    let header = vertical[0];
    let board = vertical[1];
    let entry = vertical[2];
    let setup = vertical[3];
    let status = vertical[4];

    let header_lines = vec![
        Line::from(Span::styled(
            "Word Chain",
            Style::default().fg(app.ui.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Connect ", Style::default().fg(app.ui.muted)),
            Span::styled(
                app.game.start_word().to_string(),
                base_style.add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to ", Style::default().fg(app.ui.muted)),
            Span::styled(
                app.game.target().to_string(),
                base_style.add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    f.render_widget(
        Paragraph::new(header_lines)
            .style(base_style)
            .alignment(Alignment::Center),
        header,
    );

    f.render_widget(
        Paragraph::new(app.board_lines())
            .style(base_style)
            .alignment(Alignment::Center)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(border_style)
                    .style(base_style),
            ),
        board,
    );

    if app.game.status() == Status::Solved {
        let success = Paragraph::new(Line::from(Span::styled(
            format!(
                "Solved! Connected in {} step{} — press r to play again",
                app.game.steps(),
                if app.game.steps() == 1 { "" } else { "s" }
            ),
            Style::default().fg(app.ui.success).add_modifier(Modifier::BOLD),
        )))
        .style(base_style)
        .alignment(Alignment::Center)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(app.ui.success))
                .style(base_style),
        );
        f.render_widget(success, entry);
    } else {
        let (input_border, input_title) = if app.rejecting() {
            (
                Style::default().fg(app.ui.error),
                format!(" no connection to {} ", app.game.last_word()),
            )
        } else {
            (border_style, " your word ".to_string())
        };
        let input_paragraph = Paragraph::new(Line::from(Span::styled(
            app.input.clone(),
            base_style.add_modifier(Modifier::BOLD),
        )))
        .style(base_style)
        .block(
            Block::bordered()
                .title(input_title)
                .border_type(BorderType::Rounded)
                .border_style(input_border)
                .style(base_style),
        );
        f.render_widget(input_paragraph, entry);

        if app.mode == Mode::Chain {
            let x = entry.x + 1 + app.input.width() as u16;
            let y = entry.y + 1;
            f.set_cursor(x.min(entry.right().saturating_sub(2)), y);
        }
    }

    render_setup(f, app, setup, base_style, border_style);

    f.render_widget(
        Paragraph::new(app.status_line())
            .style(base_style)
            .block(Block::default().style(base_style)),
        status,
    );

    if app.mode == Mode::ThemePicker {
        let popup = centered_rect(40, 60, size);
        f.render_widget(Clear, popup);
        let items: Vec<ListItem> = app
            .theme_manager
            .theme_names()
            .iter()
            .map(|name| ListItem::new(name.clone()))
            .collect();
        let mut state = ListState::default();
        state.select(Some(app.theme_selected));
        let highlight_fg = app.ui.base_bg.unwrap_or(app.ui.base_fg);
        let list = List::new(items)
            .block(
                Block::bordered()
                    .title(" Themes ")
                    .border_type(BorderType::Rounded)
                    .border_style(border_style)
                    .style(base_style),
            )
            .style(base_style)
            .highlight_style(Style::default().bg(app.ui.accent).fg(highlight_fg));
        f.render_stateful_widget(list, popup, &mut state);
    }
}

fn render_setup(
    f: &mut ratatui::Frame,
    app: &App,
    area: Rect,
    base_style: Style,
    border_style: Style,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let fields = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(16),
            Constraint::Length(2),
            Constraint::Length(16),
            Constraint::Min(0),
        ])
        .split(rows[0]);

    let accent_border = Style::default().fg(app.ui.accent);
    let start_active = app.mode == Mode::EditStart;
    let target_active = app.mode == Mode::EditTarget;

    let start_box = Paragraph::new(Line::from(Span::styled(
        app.start_input.clone(),
        base_style.add_modifier(Modifier::BOLD),
    )))
    .style(base_style)
    .block(
        Block::bordered()
            .title(" start ")
            .border_type(BorderType::Rounded)
            .border_style(if start_active { accent_border } else { border_style })
            .style(base_style),
    );
    f.render_widget(start_box, fields[1]);

    let target_box = Paragraph::new(Line::from(Span::styled(
        app.target_input.clone(),
        base_style.add_modifier(Modifier::BOLD),
    )))
    .style(base_style)
    .block(
        Block::bordered()
            .title(" target ")
            .border_type(BorderType::Rounded)
            .border_style(if target_active { accent_border } else { border_style })
            .style(base_style),
    );
    f.render_widget(target_box, fields[3]);

    if start_active {
        let x = fields[1].x + 1 + app.start_input.width() as u16;
        f.set_cursor(x.min(fields[1].right().saturating_sub(2)), fields[1].y + 1);
    } else if target_active {
        let x = fields[3].x + 1 + app.target_input.width() as u16;
        f.set_cursor(x.min(fields[3].right().saturating_sub(2)), fields[3].y + 1);
    }

    let muted = Style::default().fg(app.ui.muted);
    let help_lines = vec![
        Line::from(Span::styled(
            "Add words that share letters with the end of the chain.",
            muted,
        )),
        Line::from(Span::styled(
            "Example: WORD → ORDEN → DENSE → ENSUE",
            muted,
        )),
        Line::from(Span::styled(
            "Enter add · Tab edit start/target · Ctrl-T themes · Ctrl-R new game · Esc quit",
            muted,
        )),
    ];
    f.render_widget(
        Paragraph::new(help_lines)
            .style(base_style)
            .alignment(Alignment::Center),
        rows[1],
    );
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::{App, Mode};
    use crate::config::Config;
    use crate::game::Status;
    use crate::theme::ThemeManager;
    use crossterm::event::{KeyCode, KeyEvent};

    fn test_app(start: &str, target: &str) -> App {
        let mut config = Config {
            start_word: start.to_string(),
            target_word: target.to_string(),
            reject_flash_ms: 0,
            reveal_delay_ms: 0,
            ..Config::default()
        };
        config.theme_dir = Some(std::env::temp_dir().join("chainword-no-such-themes"));
        let manager = ThemeManager::load(&config).expect("builtin themes always load");
        App::new(config, manager, None, None)
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.handle_key(KeyEvent::from(KeyCode::Char(c)));
        }
    }

    #[test]
    fn typing_uppercases_and_submit_appends() {
        let mut app = test_app("WORD", "END");
        type_word(&mut app, "orden");
        assert_eq!(app.input, "ORDEN");
        app.handle_key(KeyEvent::from(KeyCode::Enter));
        assert_eq!(app.game.chain(), ["WORD", "ORDEN"]);
        assert!(app.input.is_empty());
    }

    #[test]
    fn rejected_word_flashes_and_clears_on_its_own() {
        let mut app = test_app("WORD", "END");
        type_word(&mut app, "dog");
        app.handle_key(KeyEvent::from(KeyCode::Enter));
        assert!(app.rejecting());
        assert_eq!(app.game.chain(), ["WORD"]);
        assert_eq!(app.input, "DOG");

        // Flash duration is zero in tests, so the next tick expires it.
        app.tick();
        assert!(!app.rejecting());
    }

    #[test]
    fn reaching_target_reveals_full_chain_after_delay() {
        let mut app = test_app("WORD", "ORDEN");
        type_word(&mut app, "ORDEN");
        app.handle_key(KeyEvent::from(KeyCode::Enter));
        assert_eq!(app.game.status(), Status::Solved);
        assert!(!app.show_full_chain);

        app.tick();
        assert!(app.show_full_chain);
    }

    #[test]
    fn keys_while_solved_do_not_touch_the_chain() {
        let mut app = test_app("WORD", "ORDEN");
        type_word(&mut app, "ORDEN");
        app.handle_key(KeyEvent::from(KeyCode::Enter));
        type_word(&mut app, "x");
        app.handle_key(KeyEvent::from(KeyCode::Enter));
        assert_eq!(app.game.chain(), ["WORD", "ORDEN"]);
    }

    #[test]
    fn ctrl_r_resets_to_the_start_word() {
        let mut app = test_app("WORD", "ORDEN");
        type_word(&mut app, "ORDEN");
        app.handle_key(KeyEvent::from(KeyCode::Enter));
        assert_eq!(app.game.status(), Status::Solved);

        app.handle_key(KeyEvent::from(KeyCode::Char('r')));
        assert_eq!(app.game.chain(), ["WORD"]);
        assert_eq!(app.game.status(), Status::Playing);
        assert!(!app.show_full_chain);
    }

    #[test]
    fn editing_start_word_restarts_the_chain() {
        let mut app = test_app("WORD", "END");
        type_word(&mut app, "ORDEN");
        app.handle_key(KeyEvent::from(KeyCode::Enter));
        assert_eq!(app.game.steps(), 1);

        app.handle_key(KeyEvent::from(KeyCode::Tab));
        assert_eq!(app.mode, Mode::EditStart);
        for _ in 0.."WORD".len() {
            app.handle_key(KeyEvent::from(KeyCode::Backspace));
        }
        type_word(&mut app, "chain");
        app.handle_key(KeyEvent::from(KeyCode::Enter));

        assert_eq!(app.mode, Mode::Chain);
        assert_eq!(app.game.chain(), ["CHAIN"]);
        assert_eq!(app.game.steps(), 0);
    }

    #[test]
    fn editing_target_does_not_resolve_retroactively() {
        let mut app = test_app("START", "END");
        type_word(&mut app, "ARTS");
        app.handle_key(KeyEvent::from(KeyCode::Enter));

        app.handle_key(KeyEvent::from(KeyCode::Tab));
        app.handle_key(KeyEvent::from(KeyCode::Tab));
        assert_eq!(app.mode, Mode::EditTarget);
        for _ in 0.."END".len() {
            app.handle_key(KeyEvent::from(KeyCode::Backspace));
        }
        type_word(&mut app, "arts");
        app.handle_key(KeyEvent::from(KeyCode::Enter));

        assert_eq!(app.game.target(), "ARTS");
        assert_eq!(app.game.status(), Status::Playing);
    }
}
