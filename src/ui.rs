use crate::app::{DiaryApp, EditorMode, Notice, ViewMode};
use crate::diary_entry::{list_icon, EntryDraft, Mood};
use crate::error::DiaryError;
use crate::input::TextBuffer;
use crate::latency::{self, Pending};
use crate::session::{self, AuthMode, Credentials, Session};
use crate::stats::TextMetrics;
use chrono::{DateTime, Local};
use color_eyre::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};
use std::{
    io::{stdout, Stdout},
    time::{Duration, Instant},
};
use tokio::runtime::Handle;

const TICK: Duration = Duration::from_millis(50);
const DATE_FORMAT: &str = "%B %-d, %Y";
const TOAST_TTL: Duration = Duration::from_secs(5);

/// What ended a dashboard session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardExit {
    Logout,
    Quit,
}

/// Toast-style message shown in the footer until it expires.
#[derive(Debug, Clone)]
struct Toast {
    title: String,
    description: String,
    error: bool,
    shown_at: Instant,
}

impl Toast {
    fn info(title: &str, description: &str) -> Self {
        Toast {
            title: title.to_string(),
            description: description.to_string(),
            error: false,
            shown_at: Instant::now(),
        }
    }

    fn error(title: &str, description: &str) -> Self {
        Toast {
            error: true,
            ..Toast::info(title, description)
        }
    }

    fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= TOAST_TTL
    }

    fn from_notice(notice: Notice) -> Self {
        Toast::info(notice.title(), notice.description())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoginField {
    Email,
    Password,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditorField {
    Title,
    Mood,
    Content,
}

impl EditorField {
    fn next(self) -> Self {
        match self {
            EditorField::Title => EditorField::Mood,
            EditorField::Mood => EditorField::Content,
            EditorField::Content => EditorField::Title,
        }
    }
}

struct EditorForm {
    title: TextBuffer,
    content: TextBuffer,
    mood: Option<Mood>,
    mood_cursor: usize,
    focus: EditorField,
    heading: &'static str,
    date: DateTime<Local>,
    can_delete: bool,
}

impl EditorForm {
    fn draft(&self) -> EntryDraft {
        EntryDraft::new(self.title.as_str(), self.content.as_str(), self.mood)
    }

    /// Selecting the already selected mood clears it.
    fn toggle_mood(&mut self) {
        let picked = Mood::all().nth(self.mood_cursor);
        self.mood = if self.mood == picked { None } else { picked };
    }
}

pub struct UI {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    runtime: Handle,
    toast: Option<Toast>,
}

impl UI {
    pub fn new(runtime: Handle) -> Result<Self> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;

        Ok(UI {
            terminal,
            runtime,
            toast: None,
        })
    }

    /// Drops an expired toast and returns the one still showing.
    fn current_toast(&mut self) -> Option<Toast> {
        if self
            .toast
            .as_ref()
            .is_some_and(|t| t.is_expired(Instant::now()))
        {
            self.toast = None;
        }
        self.toast.clone()
    }

    /// Sign-in form. Returns `None` when the user quits.
    pub fn login(&mut self, delay: Duration) -> Result<Option<Session>> {
        let mut email = TextBuffer::new();
        let mut password = TextBuffer::new();
        let mut focus = LoginField::Email;
        let mut mode = AuthMode::default();
        let mut pending: Option<Pending<Credentials>> = None;

        loop {
            let loading = pending.is_some();
            let toast = self.current_toast();
            self.terminal.draw(|f| {
                render_login(f, &email, &password, focus, mode, loading, toast.as_ref())
            })?;

            if let Some(p) = pending.as_mut() {
                if let Some(outcome) = p.try_take() {
                    pending = None;
                    if let Ok(credentials) = outcome {
                        match session::authenticate(&credentials) {
                            Ok(session) => {
                                self.toast = Some(Toast::info(
                                    mode.welcome(),
                                    "You've been successfully logged in.",
                                ));
                                return Ok(Some(session));
                            }
                            Err(err) => {
                                self.toast = Some(Toast::error("Sign in failed", &err.to_string()))
                            }
                        }
                    }
                }
            }

            let Some(key) = next_key(TICK)? else {
                continue;
            };

            if pending.is_some() {
                if key.code == KeyCode::Esc {
                    if let Some(p) = pending.take() {
                        p.cancel();
                    }
                }
                continue;
            }

            match key.code {
                KeyCode::Esc => return Ok(None),
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    mode = mode.toggled();
                }
                KeyCode::Tab | KeyCode::Up | KeyCode::Down => {
                    focus = match focus {
                        LoginField::Email => LoginField::Password,
                        LoginField::Password => LoginField::Email,
                    };
                }
                KeyCode::Enter => {
                    if email.as_str().trim().is_empty() || password.is_empty() {
                        self.toast = Some(Toast::error(
                            "Please fill in all fields",
                            "Email and password are required.",
                        ));
                        continue;
                    }
                    self.toast = None;
                    let credentials = Credentials {
                        email: email.as_str().to_string(),
                        password: password.as_str().to_string(),
                    };
                    pending = Some(latency::simulate(&self.runtime, delay, credentials));
                }
                _ => match focus {
                    LoginField::Email => edit_line(&mut email, key),
                    LoginField::Password => edit_line(&mut password, key),
                },
            }
        }
    }

    pub fn dashboard(&mut self, app: &mut DiaryApp) -> Result<DashboardExit> {
        let mut selected_index = 0usize;
        let mut search = TextBuffer::with_text(app.search_query());
        let mut searching = false;

        loop {
            if app.view_mode() == ViewMode::Entry {
                self.editor(app)?;
                continue;
            }

            let visible = app.visible_entries().len();
            if selected_index >= visible {
                selected_index = visible.saturating_sub(1);
            }

            let toast = self.current_toast();
            let search_ref = &search;
            self.terminal.draw(|f| {
                render_dashboard(f, &*app, search_ref, searching, selected_index, toast.as_ref())
            })?;

            let Some(key) = next_key(TICK)? else {
                continue;
            };

            if searching {
                match key.code {
                    KeyCode::Esc | KeyCode::Enter | KeyCode::Down => searching = false,
                    KeyCode::Char(c) => search.insert(c),
                    KeyCode::Backspace => search.backspace(),
                    KeyCode::Delete => search.delete(),
                    KeyCode::Left => search.move_left(),
                    KeyCode::Right => search.move_right(),
                    _ => {}
                }
                app.set_search_query(search.as_str());
                continue;
            }

            match key.code {
                KeyCode::Char('q') => return Ok(DashboardExit::Quit),
                KeyCode::Char('l') => return Ok(DashboardExit::Logout),
                KeyCode::Char('/') => searching = true,
                KeyCode::Char('n') => {
                    self.toast = None;
                    app.begin_create();
                }
                KeyCode::Up => selected_index = selected_index.saturating_sub(1),
                KeyCode::Down => {
                    if selected_index + 1 < visible {
                        selected_index += 1;
                    }
                }
                KeyCode::Enter => {
                    let id = app.visible_entries().get(selected_index).map(|e| e.id);
                    if let Some(id) = id {
                        self.toast = None;
                        app.begin_edit(id)?;
                    }
                }
                KeyCode::Esc => {
                    search.clear();
                    app.set_search_query("");
                }
                _ => {}
            }
        }
    }

    fn editor(&mut self, app: &mut DiaryApp) -> Result<()> {
        let mut form = match (app.editor_mode(), app.current_entry()) {
            (Some(EditorMode::Editing(_)), Some(entry)) => EditorForm {
                title: TextBuffer::with_text(entry.title.as_str()),
                content: TextBuffer::with_text(entry.content.as_str()),
                mood: entry.mood,
                mood_cursor: 0,
                focus: EditorField::Content,
                heading: "Edit Entry",
                date: entry.date,
                can_delete: true,
            },
            _ => EditorForm {
                title: TextBuffer::new(),
                content: TextBuffer::new(),
                mood: None,
                mood_cursor: 0,
                focus: EditorField::Title,
                heading: "New Entry",
                date: Local::now(),
                can_delete: false,
            },
        };
        if let Some(mood) = form.mood {
            form.mood_cursor = Mood::all().position(|m| m == mood).unwrap_or(0);
        }
        let save_delay = app.config().save_delay();
        let mut pending: Option<Pending<EntryDraft>> = None;

        loop {
            let saving = pending.is_some();
            let toast = self.current_toast();
            self.terminal
                .draw(|f| render_editor(f, &form, saving, toast.as_ref()))?;

            if let Some(p) = pending.as_mut() {
                if let Some(outcome) = p.try_take() {
                    pending = None;
                    if let Ok(draft) = outcome {
                        match app.save(draft) {
                            Ok(notice) => {
                                self.toast = Some(Toast::from_notice(notice));
                                return Ok(());
                            }
                            Err(err) => self.toast = Some(validation_toast(&err)),
                        }
                    }
                }
            }

            let Some(key) = next_key(TICK)? else {
                continue;
            };

            if pending.is_some() {
                if key.code == KeyCode::Esc {
                    if let Some(p) = pending.take() {
                        p.cancel();
                        tracing::debug!("save cancelled from editor");
                    }
                }
                continue;
            }

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            match key.code {
                KeyCode::Esc => {
                    app.back_to_list();
                    return Ok(());
                }
                KeyCode::Char('s') if ctrl => {
                    let draft = form.draft();
                    if let Err(err) = draft.validate() {
                        self.toast = Some(validation_toast(&err));
                        continue;
                    }
                    self.toast = None;
                    pending = Some(latency::simulate(&self.runtime, save_delay, draft));
                }
                KeyCode::Char('d') if ctrl && form.can_delete => {
                    let confirmed = self.confirm("Are you sure you want to delete this entry?")?;
                    if let Some(notice) = app.delete_current(confirmed)? {
                        self.toast = Some(Toast::from_notice(notice));
                        return Ok(());
                    }
                }
                KeyCode::Tab => form.focus = form.focus.next(),
                _ => match form.focus {
                    EditorField::Mood => match key.code {
                        KeyCode::Left => form.mood_cursor = form.mood_cursor.saturating_sub(1),
                        KeyCode::Right => {
                            if form.mood_cursor + 1 < Mood::all().count() {
                                form.mood_cursor += 1;
                            }
                        }
                        KeyCode::Enter | KeyCode::Char(' ') => form.toggle_mood(),
                        _ => {}
                    },
                    EditorField::Title => edit_line(&mut form.title, key),
                    EditorField::Content => edit_text(&mut form.content, key),
                },
            }
        }
    }

    /// Blocks until the user answers yes or no.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        loop {
            self.terminal.draw(|f| render_confirm(f, prompt))?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('y') | KeyCode::Char('Y') => return Ok(true),
                    KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => return Ok(false),
                    _ => {}
                }
            }
        }
    }
}

impl Drop for UI {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}

fn next_key(timeout: Duration) -> Result<Option<KeyEvent>> {
    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(Some(key));
            }
        }
    }
    Ok(None)
}

/// Unbound Ctrl chords are ignored rather than typed.
fn edit_line(buf: &mut TextBuffer, key: KeyEvent) {
    match key.code {
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => {}
        KeyCode::Char(c) => buf.insert(c),
        KeyCode::Backspace => buf.backspace(),
        KeyCode::Delete => buf.delete(),
        KeyCode::Left => buf.move_left(),
        KeyCode::Right => buf.move_right(),
        KeyCode::Home => buf.move_home(),
        KeyCode::End => buf.move_end(),
        _ => {}
    }
}

fn edit_text(buf: &mut TextBuffer, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => buf.insert('\n'),
        KeyCode::Up => buf.move_up(),
        KeyCode::Down => buf.move_down(),
        _ => edit_line(buf, key),
    }
}

fn validation_toast(err: &DiaryError) -> Toast {
    match err {
        DiaryError::Validation(_) => Toast::error(
            "Please fill in all fields",
            "Both title and content are required.",
        ),
        other => Toast::error("Could not save entry", &other.to_string()),
    }
}

fn heading(text: &str) -> Paragraph<'_> {
    Paragraph::new(text)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
}

fn hint(text: &str) -> Paragraph<'_> {
    Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
}

fn focused_block(title: &str, focused: bool) -> Block<'_> {
    let block = Block::default().borders(Borders::ALL).title(title);
    if focused {
        block.border_style(Style::default().fg(Color::Cyan))
    } else {
        block
    }
}

fn render_toast(f: &mut Frame, area: Rect, toast: Option<&Toast>) {
    let Some(toast) = toast else {
        return;
    };
    let color = if toast.error { Color::Red } else { Color::Green };
    let line = Line::from(vec![
        Span::styled(
            toast.title.as_str(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::raw(toast.description.as_str()),
    ]);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

/// Rows and columns to scroll a bordered field so the caret stays inside it.
fn scroll_offset(cursor: (u16, u16), area: Rect) -> (u16, u16) {
    let (row, col) = cursor;
    let height = area.height.saturating_sub(2).max(1);
    let width = area.width.saturating_sub(2).max(1);
    (
        row.saturating_sub(height - 1),
        col.saturating_sub(width - 1),
    )
}

fn input_field<'a>(buf: &'a TextBuffer, block: Block<'a>, area: Rect) -> Paragraph<'a> {
    Paragraph::new(buf.as_str())
        .scroll(scroll_offset(buf.cursor_position(), area))
        .block(block)
}

fn place_cursor(f: &mut Frame, area: Rect, buf: &TextBuffer) {
    let (row, col) = buf.cursor_position();
    let (top, left) = scroll_offset((row, col), area);
    f.set_cursor_position((area.x + 1 + col - left, area.y + 1 + row - top));
}

fn render_login(
    f: &mut Frame,
    email: &TextBuffer,
    password: &TextBuffer,
    focus: LoginField,
    mode: AuthMode,
    loading: bool,
    toast: Option<&Toast>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    f.render_widget(heading("My Digital Diary"), chunks[0]);
    let subtitle = match mode {
        AuthMode::SignIn => "Welcome back to your personal space",
        AuthMode::SignUp => "Create your digital diary",
    };
    f.render_widget(Paragraph::new(subtitle).alignment(Alignment::Center), chunks[1]);

    f.render_widget(
        input_field(
            email,
            focused_block("Email", focus == LoginField::Email),
            chunks[2],
        ),
        chunks[2],
    );
    let masked = password.masked('•');
    f.render_widget(
        input_field(
            &masked,
            focused_block("Password", focus == LoginField::Password),
            chunks[3],
        ),
        chunks[3],
    );

    let submit = if loading { "Loading..." } else { mode.submit_label() };
    f.render_widget(
        Paragraph::new(submit)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        chunks[4],
    );
    f.render_widget(
        Paragraph::new(format!("Ctrl+N: {}", mode.switch_hint())).alignment(Alignment::Center),
        chunks[5],
    );

    render_toast(f, chunks[7], toast);
    let keys = if loading {
        "Esc: Cancel"
    } else {
        "Tab: Switch field, Enter: Submit, Esc: Quit"
    };
    f.render_widget(hint(keys), chunks[8]);

    if !loading {
        match focus {
            LoginField::Email => place_cursor(f, chunks[2], email),
            LoginField::Password => place_cursor(f, chunks[3], &masked),
        }
    }
}

fn render_dashboard(
    f: &mut Frame,
    app: &DiaryApp,
    search: &TextBuffer,
    searching: bool,
    selected_index: usize,
    toast: Option<&Toast>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(6),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "My Digital Diary",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Welcome back, {}", app.session().display_name())),
    ])
    .alignment(Alignment::Center);
    f.render_widget(header, chunks[0]);

    f.render_widget(
        input_field(
            search,
            focused_block("Search your memories...", searching),
            chunks[1],
        ),
        chunks[1],
    );

    let stats = app.statistics();
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(chunks[2]);
    for (area, (value, label)) in cards.iter().zip([
        (stats.total_count, "Total Entries"),
        (stats.recent_count, "This Month"),
        (stats.average_content_length, "Avg. Characters"),
    ]) {
        let card = Paragraph::new(vec![
            Line::from(Span::styled(
                value.to_string(),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(label),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(card, *area);
    }

    let entries = app.visible_entries();
    if entries.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(Span::styled(
                "No entries found",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(app.empty_hint()),
            Line::from(""),
            Line::from("Press n to create your first entry"),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Your Entries"));
        f.render_widget(empty, chunks[3]);
    } else {
        let items: Vec<ListItem> = entries
            .iter()
            .map(|e| {
                let mut title_line = vec![
                    Span::raw(format!("{} ", list_icon(e.mood))),
                    Span::styled(
                        e.title.as_str(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ];
                if let Some(mood) = e.mood {
                    title_line.push(Span::styled(
                        format!("  [{}]", mood.label()),
                        Style::default().fg(Color::Blue),
                    ));
                }
                ListItem::new(vec![
                    Line::from(title_line),
                    Line::from(Span::styled(
                        e.date.format(DATE_FORMAT).to_string(),
                        Style::default().fg(Color::DarkGray),
                    )),
                    Line::from(Span::raw(e.preview())),
                ])
            })
            .collect();

        let entries_list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Your Entries"))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");

        f.render_stateful_widget(
            entries_list,
            chunks[3],
            &mut ListState::default().with_selected(Some(selected_index)),
        );
    }

    render_toast(f, chunks[4], toast);
    let keys = if searching {
        "Type to filter, Enter/Esc: Done"
    } else {
        "n: New entry, Enter: Open, /: Search, Esc: Clear search, l: Logout, q: Quit"
    };
    f.render_widget(hint(keys), chunks[5]);

    if searching {
        place_cursor(f, chunks[1], search);
    }
}

fn render_editor(f: &mut Frame, form: &EditorForm, saving: bool, toast: Option<&Toast>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            form.heading,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(form.date.format(DATE_FORMAT).to_string()),
    ])
    .alignment(Alignment::Center);
    f.render_widget(header, chunks[0]);

    f.render_widget(
        input_field(
            &form.title,
            focused_block("Title", form.focus == EditorField::Title),
            chunks[1],
        ),
        chunks[1],
    );

    let mood_focused = form.focus == EditorField::Mood;
    let mut moods = Vec::new();
    for (i, mood) in Mood::all().enumerate() {
        let mut style = Style::default();
        if form.mood == Some(mood) {
            style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
        }
        if mood_focused && i == form.mood_cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        moods.push(Span::styled(
            format!(" {} {} ", mood.emoji(), mood.label()),
            style,
        ));
        moods.push(Span::raw(" "));
    }
    f.render_widget(
        Paragraph::new(Line::from(moods))
            .block(focused_block("How are you feeling?", mood_focused)),
        chunks[2],
    );

    f.render_widget(
        input_field(
            &form.content,
            focused_block("Content", form.focus == EditorField::Content),
            chunks[3],
        ),
        chunks[3],
    );

    let metrics = TextMetrics::of(form.content.as_str());
    let mut metric_spans = vec![Span::raw(format!(
        "{} words  {} characters",
        metrics.word_count, metrics.char_count
    ))];
    if let Some(mood) = form.mood {
        metric_spans.push(Span::styled(
            format!("  {} {}", mood.emoji(), mood),
            Style::default().fg(Color::Blue),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(metric_spans)), chunks[4]);

    render_toast(f, chunks[5], toast);
    let keys = if saving {
        "Saving... Esc: Cancel".to_string()
    } else {
        let mut keys = String::from("Tab: Next field, Ctrl+S: Save, ");
        if form.can_delete {
            keys.push_str("Ctrl+D: Delete, ");
        }
        keys.push_str("Esc: Back");
        keys
    };
    f.render_widget(hint(&keys), chunks[6]);

    if !saving {
        match form.focus {
            EditorField::Title => place_cursor(f, chunks[1], &form.title),
            EditorField::Content => place_cursor(f, chunks[3], &form.content),
            EditorField::Mood => {}
        }
    }
}

fn render_confirm(f: &mut Frame, prompt: &str) {
    let area = centered(f.area(), 50, 5);
    f.render_widget(Clear, area);
    let dialog = Paragraph::new(vec![
        Line::from(prompt),
        Line::from(""),
        Line::from(Span::styled(
            "y: Yes, n: No",
            Style::default().fg(Color::Yellow),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Confirm")
            .border_style(Style::default().fg(Color::Red)),
    );
    f.render_widget(dialog, area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn control_chords_are_not_typed() {
        let mut buf = TextBuffer::with_text("ab");
        edit_line(&mut buf, key(KeyCode::Char('d'), KeyModifiers::CONTROL));
        edit_text(&mut buf, key(KeyCode::Char('n'), KeyModifiers::CONTROL));
        assert_eq!(buf.as_str(), "ab");

        edit_line(&mut buf, key(KeyCode::Char('C'), KeyModifiers::SHIFT));
        assert_eq!(buf.as_str(), "abC");
    }

    #[test]
    fn caret_stays_inside_field() {
        let area = Rect::new(0, 0, 12, 3);
        assert_eq!(scroll_offset((0, 4), area), (0, 0));
        assert_eq!(scroll_offset((0, 9), area), (0, 0));
        assert_eq!(scroll_offset((0, 25), area), (0, 16));

        let content = Rect::new(0, 0, 20, 6);
        assert_eq!(scroll_offset((10, 3), content), (7, 0));
    }

    #[test]
    fn toast_expires_after_ttl() {
        let toast = Toast::info("Entry created!", "saved");
        assert!(!toast.is_expired(toast.shown_at));
        assert!(!toast.is_expired(toast.shown_at + TOAST_TTL / 2));
        assert!(toast.is_expired(toast.shown_at + TOAST_TTL));

        let error = Toast::error("Please fill in all fields", "required");
        assert!(error.error);
    }
}
