//! Ratatui-based directory screen.
//!
//! One screen: a search input at the top, the advocate table below, and a key
//! hint line at the bottom. Typing edits the query and the table narrows on
//! the next frame; Esc resets the query (and quits when it is already empty);
//! Ctrl-R starts a fresh load.
//!
//! Load completions arrive on an unbounded channel and are drained once per
//! tick, so the event loop never blocks on the network.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use crossterm::{ExecutableCommand, execute};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use crate::api::{DirectoryClient, LoadError};
use crate::model::Advocate;
use crate::search::fields::FIELDS;
use crate::search::filter::FilterEngine;
use crate::store::{AdvocateStore, LoadState};

const TICK_RATE: Duration = Duration::from_millis(250);

/// Outcome of one spawned fetch, tagged with its store generation.
struct LoadEvent {
    generation: u64,
    outcome: Result<Vec<Advocate>, LoadError>,
}

pub fn run_tui(client: DirectoryClient) -> Result<()> {
    let mut app = App::new(client);
    app.start_load();

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut app);

    teardown_terminal()?;
    result
}

fn run_loop(terminal: &mut Terminal<impl Backend>, app: &mut App) -> Result<()> {
    loop {
        app.drain_load_events();
        terminal.draw(|frame| app.draw(frame))?;

        if event::poll(TICK_RATE)?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn teardown_terminal() -> Result<()> {
    let mut stdout = io::stdout();
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen)?;
    Ok(())
}

struct App {
    client: DirectoryClient,
    store: AdvocateStore,
    engine: FilterEngine,
    query: String,
    table: TableState,
    should_quit: bool,
    tx: UnboundedSender<LoadEvent>,
    rx: UnboundedReceiver<LoadEvent>,
}

impl App {
    fn new(client: DirectoryClient) -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            client,
            store: AdvocateStore::new(),
            engine: FilterEngine::new(),
            query: String::new(),
            table: TableState::default(),
            should_quit: false,
            tx,
            rx,
        }
    }

    /// Spawn a fetch for the current generation. Must run inside a tokio
    /// runtime; the completion lands via [`Self::drain_load_events`].
    fn start_load(&mut self) {
        let generation = self.store.begin_load();
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let outcome = client.fetch_advocates().await;
            let _ = tx.send(LoadEvent {
                generation,
                outcome,
            });
        });
    }

    fn drain_load_events(&mut self) {
        while let Ok(event) = self.rx.try_recv() {
            if self.store.finish_load(event.generation, event.outcome) {
                self.table.select(None);
            }
        }
    }

    /// The filtered view for the current query, when the store is ready.
    fn filtered_view(&mut self) -> Option<Arc<Vec<Advocate>>> {
        let advocates = self.store.advocates()?;
        Some(self.engine.filter(advocates, &self.query))
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('r') => self.start_load(),
                KeyCode::Char('u') => self.reset_query(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc if self.query.is_empty() => self.should_quit = true,
            KeyCode::Esc => self.reset_query(),
            KeyCode::Backspace => {
                self.query.pop();
                self.table.select(None);
            }
            KeyCode::Up => self.move_selection(false),
            KeyCode::Down => self.move_selection(true),
            KeyCode::Char(c) => {
                self.query.push(c);
                self.table.select(None);
            }
            _ => {}
        }
    }

    fn reset_query(&mut self) {
        self.query.clear();
        self.table.select(None);
    }

    /// Move the highlight; the draw pass clamps it to the visible rows.
    fn move_selection(&mut self, down: bool) {
        let next = match (self.table.selected(), down) {
            (None, _) => 0,
            (Some(i), true) => i + 1,
            (Some(i), false) => i.saturating_sub(1),
        };
        self.table.select(Some(next));
    }

    fn draw(&mut self, frame: &mut Frame) {
        let [header_area, body_area, footer_area] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let header = Paragraph::new(vec![
            Line::from(vec![
                Span::raw("Search: "),
                Span::styled(self.query.clone(), Style::new().bold()),
            ]),
            Line::styled(
                format!("Searching for: {}", self.query),
                Style::new().dim(),
            ),
        ])
        .block(Block::default().title("Advocate Directory").borders(Borders::ALL));
        frame.render_widget(header, header_area);

        match self.store.state() {
            LoadState::Loading => {
                frame.render_widget(Paragraph::new("Loading advocates..."), body_area);
            }
            LoadState::Error(message) => {
                let error = Paragraph::new(message.clone()).style(Style::new().fg(Color::Red));
                frame.render_widget(error, body_area);
            }
            LoadState::Ready(_) => self.draw_results(frame, body_area),
        }

        let hints = Paragraph::new("type to search · Esc reset · Ctrl-R reload · Ctrl-C quit")
            .style(Style::new().dim());
        frame.render_widget(hints, footer_area);
    }

    fn draw_results(&mut self, frame: &mut Frame, area: Rect) {
        let Some(filtered) = self.filtered_view() else {
            return;
        };

        if filtered.is_empty() && !self.query.is_empty() {
            let empty =
                Paragraph::new(format!("No advocates found matching \"{}\".", self.query));
            frame.render_widget(empty, area);
            return;
        }

        match self.table.selected() {
            Some(_) if filtered.is_empty() => self.table.select(None),
            Some(selected) if selected >= filtered.len() => {
                self.table.select(Some(filtered.len() - 1));
            }
            _ => {}
        }

        let header =
            Row::new(FIELDS.iter().map(|field| Cell::from(field.label))).style(Style::new().bold());
        let rows = filtered.iter().map(|advocate| {
            Row::new(
                FIELDS
                    .iter()
                    .map(|field| Cell::from(field.value(advocate).display())),
            )
        });
        let widths = FIELDS.iter().map(|_| Constraint::Fill(1));

        let table = Table::new(rows, widths)
            .header(header)
            .block(
                Block::default()
                    .title(format!("Advocates ({})", filtered.len()))
                    .borders(Borders::ALL),
            )
            .row_highlight_style(Style::new().reversed());
        frame.render_stateful_widget(table, area, &mut self.table);
    }
}
