use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{collections::HashMap, io, path::PathBuf, time::Duration};

mod config;
mod handlers;
mod services;
mod ui;

use config::Config;
use festui::content::{ContentBundle, GalleryItem};
use festui::logic::{self, source::ImageSource};
use festui::utils::{self, log_debug};
use festui::{model, CategoryFilter, GalleryMode};
use services::{PreviewState, PreviewUpdate};

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("FESTUI_BUILD_DATE"),
    ")"
);

/// Fest gallery browser for the terminal
#[derive(Parser, Debug)]
#[command(author, version = VERSION, about, long_about = None)]
struct Args {
    /// Enable debug logging to <temp dir>/festui-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl, ^D/U, ^F/B, gg/G)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Directory containing galleryConfig.json (overrides data_dir in config)
    #[arg(long)]
    data: Option<PathBuf>,

    /// Start in preview mode (only the first few items per category)
    #[arg(long)]
    preview: bool,

    /// Initial category id ("all" for everything)
    #[arg(long)]
    category: Option<String>,

    /// Print past highlights for an event id and exit
    #[arg(long, value_name = "EVENT_ID")]
    highlights: Option<String>,
}

pub struct App {
    pub model: model::Model,

    data_dir: PathBuf,
    image_base_url: Option<String>,
    http_client: reqwest::Client,
    image_picker: Option<ratatui_image::picker::Picker>,
    image_update_tx: tokio::sync::mpsc::UnboundedSender<PreviewUpdate>,
    image_update_rx: tokio::sync::mpsc::UnboundedReceiver<PreviewUpdate>,

    /// Maps item ids to their image preview states
    previews: HashMap<String, PreviewState>,
}

impl App {
    fn new(config: &Config, content: ContentBundle) -> Result<Self> {
        let (image_update_tx, image_update_rx) = tokio::sync::mpsc::unbounded_channel();

        // Initialize image preview protocol picker
        let image_picker = if config.image_preview_enabled {
            let mut picker = match ratatui_image::picker::Picker::from_query_stdio() {
                Ok(p) => p,
                Err(e) => {
                    log_debug(&format!("Image preview: Failed to detect terminal: {}", e));
                    ratatui_image::picker::Picker::from_fontsize((8, 16))
                }
            };

            let font_size = picker.font_size();
            log_debug(&format!("Image font size: {}x{}", font_size.0, font_size.1));

            match config.image_protocol.to_lowercase().as_str() {
                "auto" => log_debug("Image preview: Auto-detected protocol"),
                "iterm2" => picker.set_protocol_type(ratatui_image::picker::ProtocolType::Iterm2),
                "kitty" => picker.set_protocol_type(ratatui_image::picker::ProtocolType::Kitty),
                "sixel" => picker.set_protocol_type(ratatui_image::picker::ProtocolType::Sixel),
                "halfblocks" => {
                    picker.set_protocol_type(ratatui_image::picker::ProtocolType::Halfblocks)
                }
                unknown => log_debug(&format!(
                    "Image preview: Unknown protocol '{}', using auto-detect",
                    unknown
                )),
            }

            Some(picker)
        } else {
            log_debug("Image preview disabled in config");
            None
        };

        let data_dir = content.data_dir.clone();
        let mut model = model::Model::new(content, config.vim_mode);
        model.ui.preview_max_items = config.preview_max_items;

        Ok(App {
            model,
            data_dir,
            image_base_url: config.image_base_url.clone(),
            http_client: services::images::http_client()?,
            image_picker,
            image_update_tx,
            image_update_rx,
            previews: HashMap::new(),
        })
    }

    /// Where the bytes for `item` come from
    fn source_for(&self, item: &GalleryItem) -> ImageSource {
        logic::source::resolve_source(
            &item.src,
            &self.data_dir.join("public"),
            self.image_base_url.as_deref(),
        )
    }

    /// Start loading the lightbox image unless it is ready or loading; failed
    /// loads are retried
    pub fn request_preview(&mut self) {
        let Some(picker) = self.image_picker.clone() else {
            return;
        };
        let Some(item) = self.model.gallery.selected() else {
            return;
        };
        if item.is_video() || !PreviewState::needs_load(self.previews.get(&item.id)) {
            return;
        }

        let item_id = item.id.clone();
        let source = self.source_for(item);
        log_debug(&format!(
            "Requesting preview for '{}' from {}",
            item_id,
            source.describe()
        ));

        self.previews.insert(item_id.clone(), PreviewState::Loading);
        services::spawn_image_load(
            item_id,
            source,
            picker,
            self.http_client.clone(),
            self.image_update_tx.clone(),
        );
    }
}

/// Plain-text listing for `--highlights`
fn format_highlights(content: &ContentBundle, event_id: &str) -> String {
    let category = logic::highlights::event_category(event_id);
    let items = logic::highlights::highlights_for_event(&content.gallery.items, event_id);

    let mut out = vec![
        content.site.highlights_title().to_string(),
        content.site.highlights_subtitle().to_string(),
        format!("Event: {} (category: {})", event_id, category),
        String::new(),
    ];
    if items.is_empty() {
        out.push("No highlights for this event yet".to_string());
    }
    for (idx, item) in items.iter().enumerate() {
        let featured = if item.featured { " ★" } else { "" };
        out.push(format!(
            "{}. {}{}  {}",
            idx + 1,
            item.display_caption(),
            featured,
            item.src
        ));
    }
    out.join("\n")
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    utils::set_debug_mode(args.debug);
    if args.debug {
        log_debug("Debug mode enabled");
    }

    let mut config = match config::get_config_path(args.config.as_deref())? {
        Some(path) => {
            log_debug(&format!("Loading config from: {:?}", path));
            Config::load(&path)?
        }
        None => {
            log_debug("No config file found, using defaults");
            Config::default()
        }
    };

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }
    if let Some(data) = args.data {
        config.data_dir = data;
    }

    let content = ContentBundle::load_from_dir(&config.data_dir).with_context(|| {
        format!("Failed to load content from {}", config.data_dir.display())
    })?;
    log_debug(&format!(
        "Loaded {} gallery items in {} categories",
        content.gallery.items.len(),
        content.gallery.categories.len()
    ));

    if let Some(event_id) = args.highlights {
        println!("{}", format_highlights(&content, &event_id));
        return Ok(());
    }

    let mut app = App::new(&config, content)?;
    if args.preview {
        app.model.set_mode(GalleryMode::Preview {
            max_items: config.preview_max_items,
        });
    }
    if let Some(category) = args.category {
        app.model.select_filter(CategoryFilter::from_id(&category));
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Clear terminal to remove sixel graphics if needed
        if app.model.ui.sixel_cleanup_frames > 0 {
            terminal.clear()?;
            app.model.ui.sixel_cleanup_frames = 0;
        }

        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        if app.model.ui.should_dismiss_toast() {
            app.model.ui.dismiss_toast();
        }

        if app.model.ui.should_quit {
            break;
        }

        // Process image updates from background loading tasks (non-blocking)
        while let Ok(update) = app.image_update_rx.try_recv() {
            handlers::handle_preview_update(app, update);
        }

        // 250ms keeps the countdown ticking without spinning
        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handlers::handle_key(app, key);
                }
            }
        }
    }

    Ok(())
}
