use std::io;
use std::time::Duration;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{
    backend::CrosstermBackend,
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
    widgets::Widget,
    Terminal,
};

use crate::animation::{
    AnimationLoop, ConfettiRain, HeartBurst, HeartField, PulseAnimation, SparkleTrail,
};
use crate::i18n::Locale;
use crate::input::{InputEvent, InputHandler};
use crate::placement::{self, EvasivePlacer, Glide};
use crate::render::{
    button_rect, button_width, colors, detect_unicode, symbols::SMALL_HEART, ButtonWidget,
    CardWidget, CelebrationWidget, HeartsWidget, SparklesWidget, StatusBar, BUTTON_HEIGHT,
};
use crate::state::Session;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub name: String,
    pub locale: Locale,
    pub seed: Option<u64>,
    pub show_hearts: bool,
    pub show_sparkles: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: "Valentine".to_string(),
            locale: Locale::default(),
            seed: None,
            show_hearts: true,
            show_sparkles: true,
        }
    }
}

/// Screen geometry for one frame, kept around for mouse hit detection
#[derive(Debug, Clone, Copy)]
struct CardLayout {
    /// The greeting card, centered above the status row
    card: Rect,
    /// Card interior inside the border; the No button roams here
    inner: Rect,
    /// The stationary YES button
    yes: Rect,
}

/// Main application state
pub struct App {
    config: AppConfig,
    session: Session,
    placer: EvasivePlacer,
    animation_loop: AnimationLoop,
    input_handler: InputHandler,
    rng: StdRng,

    // Motion: the No button glides between placements, YES breathes
    glide: Glide,
    pulse: PulseAnimation,

    // Ambient particle layers
    hearts: Option<HeartField>,
    sparkles: SparkleTrail,

    // Celebration layers, spawned on YES
    rain: Option<ConfettiRain>,
    burst: Option<HeartBurst>,

    // Hover edge detection: a dodge fires on entry, not every move
    pointer_on_no: bool,

    // Last known geometry for hit detection
    last_layout: Option<CardLayout>,
    last_no_rect: Option<Rect>,

    use_unicode: bool,
    time: f32,
    running: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let hearts = if config.show_hearts {
            Some(HeartField::new(&mut rng))
        } else {
            None
        };

        Self {
            session: Session::new(),
            placer: EvasivePlacer::for_cells(),
            animation_loop: AnimationLoop::new(),
            input_handler: InputHandler::new(),
            rng,
            glide: Glide::settled(placement::Point::default()),
            pulse: PulseAnimation::new(1.2).with_range(0.75, 1.0),
            hearts,
            sparkles: SparkleTrail::new(),
            rain: None,
            burst: None,
            pointer_on_no: false,
            last_layout: None,
            last_no_rect: None,
            use_unicode: detect_unicode(),
            time: 0.0,
            running: true,
            config,
        }
    }

    /// Run the application
    pub async fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Main loop
        while self.running {
            // Handle input
            self.handle_input();

            // Update animations and render
            if self.animation_loop.should_render() {
                let dt = self.animation_loop.delta_time();
                self.tick(dt);

                terminal.draw(|frame| {
                    let area = frame.area();
                    self.prepare(area);
                    self.render(area, frame.buffer_mut());
                })?;

                self.animation_loop.frame_rendered();
            }

            // Small sleep to prevent busy loop
            tokio::time::sleep(self.animation_loop.time_until_next_frame()).await;
        }

        // Cleanup terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        Ok(())
    }

    /// Handle user input
    fn handle_input(&mut self) {
        let timeout = Duration::from_millis(1);

        if let Some(event) = self.input_handler.poll(timeout) {
            match event {
                InputEvent::Quit => self.running = false,

                InputEvent::PointerMove { x, y } => self.pointer_moved(x, y),

                InputEvent::PointerDown { x, y } => self.pointer_pressed(x, y),

                InputEvent::Resize { .. } => {
                    // Geometry is stale until the next frame lays out again
                    self.last_layout = None;
                    self.last_no_rect = None;
                    self.pointer_on_no = false;
                }

                InputEvent::None => {}
            }
        }
    }

    fn pointer_moved(&mut self, x: u16, y: u16) {
        if self.config.show_sparkles && !self.session.yes_clicked() {
            self.sparkles.pointer_moved(x, y, &mut self.rng);
        }

        let on_no = self
            .last_no_rect
            .is_some_and(|rect| rect.contains(Position::new(x, y)));
        if on_no && !self.pointer_on_no {
            self.dodge(Some(placement::Point::new(f32::from(x), f32::from(y))));
        }
        self.pointer_on_no = on_no;
    }

    fn pointer_pressed(&mut self, x: u16, y: u16) {
        let pos = Position::new(x, y);

        let on_yes = self
            .last_layout
            .is_some_and(|layout| layout.yes.contains(pos));
        if on_yes {
            self.accept();
            return;
        }

        // A press that lands on the No button counts as an approach too;
        // touch-style terminals never deliver a hover first
        if self.last_no_rect.is_some_and(|rect| rect.contains(pos)) {
            self.dodge(None);
        }
    }

    /// YES was clicked. The session freezes and the celebration starts.
    fn accept(&mut self) {
        self.session.click_yes();
        if self.rain.is_none() {
            self.rain = Some(ConfettiRain::new(&mut self.rng));
            self.burst = Some(HeartBurst::new());
            self.sparkles.clear();
        }
    }

    /// The pointer reached the No button: count the attempt and glide
    /// the button to a fresh spot
    fn dodge(&mut self, cursor: Option<placement::Point>) {
        let Some(layout) = self.last_layout else {
            return;
        };

        let before = self.session.no_pos();
        self.session.dodge_no_button(
            &self.placer,
            to_plane(layout.inner),
            to_plane(layout.yes),
            self.no_size(),
            cursor,
            &mut self.rng,
        );
        if self.session.no_pos() != before {
            self.glide.retarget(self.session.no_pos());
        }
    }

    /// Advance every animation by one frame
    fn tick(&mut self, dt: f32) {
        self.time += dt;
        self.pulse.update(dt);
        self.glide.tick(dt);

        if let Some(ref mut hearts) = self.hearts {
            hearts.tick(dt, &mut self.rng);
        }
        self.sparkles.tick(dt);

        if let Some(ref mut rain) = self.rain {
            rain.tick(dt);
        }
        if let Some(ref mut burst) = self.burst {
            burst.tick(dt);
        }
        if matches!(&self.burst, Some(burst) if burst.finished()) {
            self.burst = None;
        }
    }

    /// Lay the frame out and keep the geometry for hit detection.
    ///
    /// The first frame with a real card interior also places the No
    /// button beside YES, exactly once per session.
    fn prepare(&mut self, area: Rect) {
        let layout = self.compute_layout(area);

        if self.session.place_no_button(
            &self.placer,
            to_plane(layout.inner),
            to_plane(layout.yes),
            self.no_size(),
        ) {
            self.glide = Glide::settled(self.session.no_pos());
        }

        self.last_no_rect = if self.session.is_placed() {
            Some(self.no_rect(&layout))
        } else {
            None
        };
        self.last_layout = Some(layout);
    }

    fn compute_layout(&self, area: Rect) -> CardLayout {
        // The bottom row belongs to the status bar
        let usable_h = area.height.saturating_sub(1);
        let card_w = area.width.saturating_sub(4).min(58);
        let card_h = usable_h.saturating_sub(2).min(19);
        let card = Rect::new(
            area.x + area.width.saturating_sub(card_w) / 2,
            area.y + usable_h.saturating_sub(card_h) / 2,
            card_w,
            card_h,
        );
        let inner = Rect::new(
            card.x.saturating_add(1),
            card.y.saturating_add(1),
            card.width.saturating_sub(2),
            card.height.saturating_sub(2),
        );
        // Bottom-left of the interior, one row clear of the border.
        // Clipped to the interior so a cramped screen cannot push the
        // button past the buffer.
        let yes = button_rect(
            inner.x.saturating_add(2),
            (card.y + card.height).saturating_sub(BUTTON_HEIGHT + 1),
            &self.yes_label(),
        )
        .intersection(inner);

        CardLayout { card, inner, yes }
    }

    /// Where the No button is drawn right now: the glide position
    /// clamped into the card interior, since the elastic easing may
    /// overshoot the target
    fn no_rect(&self, layout: &CardLayout) -> Rect {
        let width = button_width(&self.no_label());
        let pos = self.glide.current();
        let max_x = f32::from(layout.inner.width.saturating_sub(width));
        let max_y = f32::from(layout.inner.height.saturating_sub(BUTTON_HEIGHT));
        Rect::new(
            layout.inner.x + pos.x.clamp(0.0, max_x) as u16,
            layout.inner.y + pos.y.clamp(0.0, max_y) as u16,
            width,
            BUTTON_HEIGHT,
        )
        .intersection(layout.inner)
    }

    fn yes_label(&self) -> String {
        let strings = self.config.locale.strings();
        format!("{} {}", strings.yes_label, SMALL_HEART.render(self.use_unicode))
    }

    fn no_label(&self) -> String {
        let strings = self.config.locale.strings();
        format!("{} {}", strings.no_label, self.session.mood().face())
    }

    fn no_size(&self) -> placement::Size {
        placement::Size::new(
            f32::from(button_width(&self.no_label())),
            f32::from(BUTTON_HEIGHT),
        )
    }

    /// Render the whole screen in z-order:
    /// 1. Backdrop fill
    /// 2. Floating hearts
    /// 3. The greeting card with the current prompt
    /// 4. YES button (breathing) and No button (dodging)
    /// 5. Sparkle trail
    /// 6. Status bar
    ///
    /// After a YES the card view is replaced by the celebration.
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let strings = self.config.locale.strings();
        let status = Rect::new(area.x, area.y + area.height - 1, area.width, 1);

        if self.session.yes_clicked() {
            if let Some(ref rain) = self.rain {
                CelebrationWidget::new(strings, &self.config.name, rain)
                    .burst(self.burst.as_ref())
                    .time(self.time)
                    .use_unicode(self.use_unicode)
                    .render(area, buf);
            }
            StatusBar::new()
                .attempts(self.session.attempts())
                .answered(true)
                .use_unicode(self.use_unicode)
                .render(status, buf);
            return;
        }

        let backdrop = Style::default().bg(colors::BACKGROUND);
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                buf[(x, y)].set_char(' ').set_style(backdrop);
            }
        }

        if let Some(ref hearts) = self.hearts {
            HeartsWidget::new(hearts)
                .use_unicode(self.use_unicode)
                .render(area, buf);
        }

        // Corner hearts, pinned clear of the status row
        let corner = Style::default().fg(colors::CARD_BORDER).bg(colors::BACKGROUND);
        let heart = SMALL_HEART.render(self.use_unicode);
        let right = area.x + area.width - 1;
        let low = area.y + area.height.saturating_sub(2);
        for (x, y) in [(area.x, area.y), (right, area.y), (area.x, low), (right, low)] {
            buf[(x, y)].set_char(heart).set_style(corner);
        }

        let Some(layout) = self.last_layout else {
            return;
        };

        CardWidget::new(&self.config.name, strings.prompt_line(self.session.stage()))
            .use_unicode(self.use_unicode)
            .render(layout.card, buf);

        let yes_label = self.yes_label();
        ButtonWidget::new(&yes_label)
            .colors(colors::YES_FG, colors::YES_BG, colors::YES_BG)
            .brightness(self.pulse.value())
            .bold(true)
            .use_unicode(self.use_unicode)
            .render(layout.yes, buf);

        if let Some(no_rect) = self.last_no_rect {
            let no_label = self.no_label();
            ButtonWidget::new(&no_label)
                .colors(colors::NO_FG, colors::NO_BG, colors::NO_BG)
                .use_unicode(self.use_unicode)
                .render(no_rect, buf);
        }

        if self.config.show_sparkles {
            SparklesWidget::new(&self.sparkles)
                .use_unicode(self.use_unicode)
                .render(area, buf);
        }

        StatusBar::new()
            .attempts(self.session.attempts())
            .answered(false)
            .use_unicode(self.use_unicode)
            .render(status, buf);
    }
}

/// Screen cells as the placement plane
fn to_plane(rect: Rect) -> placement::Rect {
    placement::Rect::new(
        f32::from(rect.x),
        f32::from(rect.y),
        f32::from(rect.width),
        f32::from(rect.height),
    )
}
