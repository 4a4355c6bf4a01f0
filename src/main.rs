use anyhow::Result;
use log::{debug, info, warn};
use skin_select::config::SkinConfig;
use skin_select::engine::assets::{validate, FsAssetSource, SpriteSheet};
use skin_select::engine::input::{InputManager, MenuAction};
use skin_select::engine::tick_loop::TickLoop;
use skin_select::game::screens::{
    DrawCommand, PauseAction, PauseMenu, SessionInfo, SkinMenu, SkinMenuOutcome,
};
use skin_select::skins::{
    AchievementSink, JsonSelectionStore, SheetBinder, SkinRegistry, SkinSelector,
};
use std::path::Path;
use std::sync::Arc;
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

/// Sheet holding the built-in skins, relative to the working directory
const DEFAULT_SHEET_PATH: &str = "assets/skins.png";

/// Logs sheet changes until a renderer is attached
struct LogBinder;

impl SheetBinder for LogBinder {
    fn bind_sheet(&mut self, sheet: &Arc<SpriteSheet>) {
        debug!("Skin sheet bound ({}x{})", sheet.width(), sheet.height());
    }

    fn refresh_player_sprite(&mut self) {
        debug!("Player sprite refreshed");
    }
}

struct LogAchievements;

impl AchievementSink for LogAchievements {
    fn unlock(&mut self, id: &str) {
        info!("Achievement unlocked: {}", id);
    }
}

enum Screen {
    Game,
    Pause(PauseMenu),
    Skins(SkinMenu),
}

struct App {
    config: SkinConfig,
    selector: SkinSelector,
    input: InputManager,
    session: SessionInfo,
    screen: Screen,
}

impl App {
    fn new(config: SkinConfig) -> Result<Self> {
        let source = FsAssetSource;

        let default_sheet = match validate(Path::new(DEFAULT_SHEET_PATH), &source) {
            Ok(sheet) => sheet,
            Err(err) => {
                warn!("{}, using a blank default sheet", err);
                SpriteSheet::blank(32, 16)
            }
        };

        let registry =
            SkinRegistry::initialize(&config.builtin_names, &config.skins_dir(), &source);
        info!("{} skins available", registry.len());

        let mut selector = SkinSelector::new(registry, Arc::new(default_sheet), Box::new(source))?
            .with_binder(Box::new(LogBinder))
            .with_store(Box::new(JsonSelectionStore::new(config.selection_file())))
            .with_achievements(Box::new(LogAchievements));

        match selector.restore() {
            Ok(index) => info!("Restored skin {}", selector.list_entries()[index]),
            Err(err) => warn!("Could not load saved skin: {}", err),
        }

        Ok(Self {
            config,
            selector,
            input: InputManager::default(),
            session: SessionInfo::local("world"),
            screen: Screen::Game,
        })
    }

    fn tick(&mut self) {
        let next = match &mut self.screen {
            Screen::Game => self
                .input
                .just_pressed(MenuAction::Pause)
                .then(|| Screen::Pause(PauseMenu::new(&self.session, self.input.config()))),
            Screen::Pause(menu) => match menu.tick(&self.input) {
                Some(PauseAction::ResumeGame) => Some(Screen::Game),
                Some(PauseAction::OpenOptions) => Some(Screen::Skins(SkinMenu::new(
                    &mut self.selector,
                    self.input.config(),
                    &self.config,
                ))),
                Some(action) => {
                    info!("Pause menu action: {:?}", action);
                    Some(Screen::Game)
                }
                None => None,
            },
            Screen::Skins(menu) => match menu.tick(&self.input, &mut self.selector) {
                SkinMenuOutcome::Stay => None,
                SkinMenuOutcome::Confirmed(_) | SkinMenuOutcome::Cancelled => {
                    Some(Screen::Pause(PauseMenu::new(&self.session, self.input.config())))
                }
            },
        };

        if let Some(screen) = next {
            self.screen = screen;
        }
        self.input.end_tick();
    }

    fn render(&self) -> Vec<DrawCommand> {
        let mut frame = Vec::new();
        match &self.screen {
            Screen::Game => {}
            Screen::Pause(menu) => menu.render(&mut frame),
            Screen::Skins(menu) => menu.render(&self.selector, &mut frame),
        }
        frame
    }
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting skin select...");

    let config = SkinConfig::default();
    info!("Game directory: {}", config.game_dir.display());
    let mut app = App::new(config)?;
    let mut tick_loop = TickLoop::new();

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Skin Select")
        .with_inner_size(winit::dpi::LogicalSize::new(
            app.config.screen_width * 3,
            app.config.screen_height * 3,
        ))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                app.input.process_keyboard_event(&event);
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(focused),
                ..
            } => {
                if focused {
                    tick_loop.resume();
                } else {
                    tick_loop.pause();
                }
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                for _ in 0..tick_loop.begin_frame() {
                    app.tick();
                }

                let frame = app.render();
                if !frame.is_empty() {
                    debug!("Frame {}: {} draw commands", tick_loop.tick_count(), frame.len());
                }
            }
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
