use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use repolens_config::Config;
use repolens_engine::{AnalysisResult, InlineSpan, RenderLine, RenderedBlock, io, render};
use repolens_gemini::GeminiClient;
use std::{env, io::stdout, path::PathBuf, process};

/// Virtual first entry shown above the generated files.
const REPORT_ENTRY: &str = "Upgrade Report";

struct App {
    result: AnalysisResult,
    item_names: Vec<String>,
    file_list_state: ListState,
    current_content: Vec<Line<'static>>,
    scroll: u16,
}

impl App {
    fn new(result: AnalysisResult) -> Self {
        let mut item_names = vec![REPORT_ENTRY.to_string()];
        item_names.extend(result.files.iter().map(|f| f.filename.clone()));

        let mut app = Self {
            result,
            item_names,
            file_list_state: ListState::default(),
            current_content: Vec::new(),
            scroll: 0,
        };

        app.file_list_state.select(Some(0));
        app.update_content_for_selection();
        app
    }

    fn next_item(&mut self) {
        let i = match self.file_list_state.selected() {
            Some(i) => (i + 1) % self.item_names.len(),
            None => 0,
        };
        self.file_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn previous_item(&mut self) {
        let i = match self.file_list_state.selected() {
            Some(i) => {
                if i == 0 {
                    self.item_names.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.file_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(4);
    }

    fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(4);
    }

    fn update_content_for_selection(&mut self) {
        self.scroll = 0;
        let Some(index) = self.file_list_state.selected() else {
            return;
        };

        let markdown = if index == 0 {
            self.result.improvement_plan.clone()
        } else if let Some(file) = self.result.files.get(index - 1) {
            file.as_markdown()
        } else {
            return;
        };

        self.current_content = render_to_lines(&render(&markdown));
    }

    fn selected_title(&self) -> &str {
        self.file_list_state
            .selected()
            .and_then(|i| self.item_names.get(i))
            .map(|s| s.as_str())
            .unwrap_or(REPORT_ENTRY)
    }
}

/// Converts rendered blocks into styled terminal lines.
fn render_to_lines(blocks: &[RenderedBlock]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for block in blocks {
        match block {
            RenderedBlock::Text {
                lines: text_lines, ..
            } => {
                for line in text_lines {
                    lines.push(text_line_to_line(line));
                }
            }
            RenderedBlock::Code {
                tag,
                lines: code_lines,
                highlighted,
            } => {
                if let Some(tag) = tag {
                    lines.push(Line::from(Span::styled(
                        format!("[{tag}]"),
                        Style::default().fg(Color::DarkGray),
                    )));
                }
                match highlighted {
                    Some(rows) => {
                        for row in rows {
                            let spans: Vec<Span<'static>> = row
                                .iter()
                                .map(|piece| {
                                    let (r, g, b) = piece.color;
                                    Span::styled(
                                        piece.text.clone(),
                                        Style::default().fg(Color::Rgb(r, g, b)),
                                    )
                                })
                                .collect();
                            lines.push(Line::from(spans));
                        }
                    }
                    None => {
                        // Fallback to plain text
                        for code_line in code_lines {
                            lines.push(Line::from(Span::styled(
                                code_line.clone(),
                                Style::default().fg(Color::Gray),
                            )));
                        }
                    }
                }
                lines.push(Line::from(""));
            }
        }
    }

    lines
}

fn text_line_to_line(line: &RenderLine) -> Line<'static> {
    match line {
        RenderLine::Heading { level, text } => {
            let color = if *level == 2 {
                Color::LightBlue
            } else {
                Color::Cyan
            };
            Line::from(Span::styled(
                text.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
        }
        RenderLine::ListItem { spans } => {
            let mut parts = vec![Span::styled("• ", Style::default().fg(Color::LightBlue))];
            parts.extend(inline_spans(spans));
            Line::from(parts)
        }
        RenderLine::Blank => Line::from(""),
        RenderLine::Paragraph { spans } => Line::from(inline_spans(spans)),
    }
}

fn inline_spans(spans: &[InlineSpan]) -> Vec<Span<'static>> {
    spans
        .iter()
        .map(|span| match span {
            InlineSpan::Text(text) => Span::raw(text.clone()),
            InlineSpan::Strong(text) => Span::styled(
                text.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            InlineSpan::Code(text) => Span::styled(
                text.clone(),
                Style::default().fg(Color::LightCyan).bg(Color::Black),
            ),
            InlineSpan::Link { text, href } => Span::styled(
                format!("{text} ({href})"),
                Style::default()
                    .fg(Color::LightBlue)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        })
        .collect()
}

struct CliArgs {
    repo_url: String,
    out_dir: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Option<CliArgs> {
    let mut repo_url = None;
    let mut out_dir = None;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--out" => out_dir = Some(PathBuf::from(iter.next()?)),
            _ if repo_url.is_none() => repo_url = Some(arg.clone()),
            _ => return None,
        }
    }

    Some(CliArgs {
        repo_url: repo_url?,
        out_dir,
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let args: Vec<String> = env::args().collect();
    let Some(cli) = parse_args(&args) else {
        eprintln!("Usage: {} <repo-url> [--out <dir>]", args[0]);
        process::exit(1);
    };

    let config = match Config::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };
    let Some(api_key) = config.resolve_api_key() else {
        eprintln!("Error: No API key found");
        eprintln!(
            "Set {} or add api_key to {}",
            repolens_config::API_KEY_ENV_VARS[0],
            Config::config_path().display()
        );
        process::exit(1);
    };

    println!("Analyzing {} ...", cli.repo_url);
    let client = GeminiClient::new(api_key, config.model.clone());
    let result = match client.analyze(&cli.repo_url).await {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: Analysis failed: {e}");
            process::exit(1);
        }
    };

    if let Some(out_dir) = &cli.out_dir {
        let written = io::export_files(&result.files, out_dir)?;
        println!("Exported {} generated files to {}", written.len(), out_dir.display());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let mut app = App::new(result);

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_item(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_item(),
                KeyCode::PageDown => app.scroll_down(),
                KeyCode::PageUp => app.scroll_up(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(f.area());

    // File list panel
    let file_items: Vec<ListItem> = app
        .item_names
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let icon = if index == 0 { "📊 " } else { "📄 " };
            ListItem::new(vec![Line::from(vec![Span::raw(format!("{icon}{name}"))])])
        })
        .collect();

    let files_list = List::new(file_items)
        .block(Block::default().borders(Borders::ALL).title("Analysis"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(files_list, chunks[0], &mut app.file_list_state);

    // Content panel
    let content = Paragraph::new(app.current_content.clone())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(app.selected_title().to_string()),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));

    f.render_widget(content, chunks[1]);

    // Instructions
    let help_text = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next | "),
        Span::raw("PgUp/PgDn: Scroll"),
    ]);

    let help = Paragraph::new(vec![help_text]).block(Block::default());

    let bottom_chunk = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    f.render_widget(help, bottom_chunk[1]);
}
