/// Terminal preview of the hero background
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, MouseEvent, MouseEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use hero3d_core::{FrameDriver, LoopState, SceneConfig};
use rand::Rng;
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

pub mod logging;
pub mod renderer;

pub use logging::{init_logging, LoggingConfig};
pub use renderer::AsciiRenderer;

/// Main application struct for the terminal preview
pub struct TerminalApp {
    driver: FrameDriver,
    renderer: AsciiRenderer,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        let renderer = AsciiRenderer::new(width as usize, height as usize);
        let driver = FrameDriver::new(renderer.viewport(), SceneConfig::default(), rng);

        Ok(Self {
            driver,
            renderer,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            stdout(),
            terminal::EnterAlternateScreen,
            event::EnableMouseCapture,
            cursor::Hide
        )?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(
            stdout(),
            event::DisableMouseCapture,
            terminal::LeaveAlternateScreen,
            cursor::Show
        )?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(1000 / 30); // 30 FPS target

        while self.driver.state() == LoopState::Running {
            let frame_start = Instant::now();

            // Drain every pending event so the tick sees the latest targets
            while event::poll(Duration::from_millis(0))? {
                self.handle_event(event::read()?);
            }

            if self.driver.tick(&mut self.renderer) == LoopState::Stopped {
                break;
            }
            self.present()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(KeyEvent {
                code: KeyCode::Char('q') | KeyCode::Esc,
                ..
            }) => self.driver.stop(),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Moved | MouseEventKind::Drag(_),
                column,
                row,
                ..
            }) => {
                let (x, y) = AsciiRenderer::cell_center(column, row);
                self.driver.pointer_moved(x, y);
            }
            Event::Resize(width, height) => {
                self.renderer.resize(width as usize, height as usize);
                self.driver.resize(self.renderer.viewport());
            }
            _ => {}
        }
    }

    fn present(&mut self) -> io::Result<()> {
        let mut stdout = stdout();
        self.renderer.draw(&mut stdout)?;

        // Draw UI overlay
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "hero3d | FPS: {:.1} | Move the mouse for parallax, Q=Quit",
                self.fps
            )),
            ResetColor
        )?;

        stdout.flush()
    }
}
