use std::{path::PathBuf, time::Instant};

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::{
    app::{
        audio::AmbientAudio,
        events::{
            AppEvent, schedule_bolt_expiry, schedule_notice_expiry, schedule_strike_settle,
            start_bolt_task, start_frame_task,
        },
        form::{ContactForm, FormFocus, FormNotice, Submission, append_submission},
        settings::{MAX_RAIN, MotionSetting, RuntimeSettings, load_runtime_settings},
    },
    cli::{Cli, PageArg},
    content,
    storm::{StormState, bolt},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Browsing,
    Editing,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Portfolio,
    Hobbies,
    Contact,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::About,
        Page::Portfolio,
        Page::Hobbies,
        Page::Contact,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Portfolio => "Portfolio",
            Page::Hobbies => "Hobbies",
            Page::Contact => "Contact",
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Page::Home => 0,
            Page::About => 1,
            Page::Portfolio => 2,
            Page::Hobbies => 3,
            Page::Contact => 4,
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        Page::ALL[(self.index() + 1) % Page::ALL.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        Page::ALL[(self.index() + Page::ALL.len() - 1) % Page::ALL.len()]
    }

    fn from_arg(arg: PageArg) -> Self {
        match arg {
            PageArg::Home => Page::Home,
            PageArg::About => Page::About,
            PageArg::Portfolio => Page::Portfolio,
            PageArg::Hobbies => Page::Hobbies,
            PageArg::Contact => Page::Contact,
        }
    }

    fn from_digit(digit: char) -> Option<Self> {
        let idx = (digit as usize).checked_sub('1' as usize)?;
        Page::ALL.get(idx).copied()
    }
}

#[derive(Debug)]
pub struct AppState {
    pub mode: AppMode,
    pub running: bool,
    pub page: Page,
    pub storm: StormState,
    pub settings: RuntimeSettings,
    pub settings_path: Option<PathBuf>,
    pub form: ContactForm,
    pub form_focus: FormFocus,
    pub form_notice: Option<FormNotice>,
    pub submissions: Vec<Submission>,
    pub audio: AmbientAudio,
    pub list_offset: usize,
    pub show_help: bool,
    pub last_error: Option<String>,
    pub last_frame_at: Instant,
    pub frame_tick: u64,
    pub animation_clock: f64,
}

impl AppState {
    pub fn new(cli: &Cli) -> Self {
        let (settings, settings_path) = load_runtime_settings(cli, !cli.ephemeral);
        let mut rng = rand::rng();
        let storm = StormState::new(settings.rain_intensity, &mut rng);

        Self {
            mode: AppMode::Browsing,
            running: true,
            page: Page::from_arg(cli.page),
            storm,
            settings,
            settings_path,
            form: ContactForm::default(),
            form_focus: FormFocus::Name,
            form_notice: None,
            submissions: Vec::new(),
            audio: AmbientAudio::new(settings.audio),
            list_offset: 0,
            show_help: false,
            last_error: None,
            last_frame_at: Instant::now(),
            frame_tick: 0,
            animation_clock: 0.0,
        }
    }

    #[must_use]
    pub fn animate(&self) -> bool {
        self.settings.motion != MotionSetting::Off
    }

    pub async fn handle_event(
        &mut self,
        event: AppEvent,
        tx: &mpsc::Sender<AppEvent>,
        cli: &Cli,
    ) -> Result<()> {
        match event {
            AppEvent::Bootstrap => {
                start_frame_task(
                    tx.clone(),
                    if self.settings.motion == MotionSetting::Reduced {
                        cli.fps.min(20)
                    } else {
                        cli.fps
                    },
                );
                start_bolt_task(tx.clone());
            }
            AppEvent::TickFrame => {
                let now = Instant::now();
                let delta = now.duration_since(self.last_frame_at);
                self.last_frame_at = now;
                self.frame_tick = self.frame_tick.saturating_add(1);
                if self.animate() {
                    self.animation_clock += delta.as_secs_f64().clamp(0.0, 0.25);
                }
            }
            AppEvent::TickBolt => {
                if self.animate() {
                    let mut rng = rand::rng();
                    if bolt::spawn_roll(&mut rng) {
                        let id = self.storm.bolts.spawn(&mut rng);
                        schedule_bolt_expiry(tx.clone(), id);
                        self.begin_strike(tx);
                        self.storm.reveal.refresh()?;
                    }
                }
            }
            AppEvent::StrikeSettled => {
                self.storm.strike.settle();
            }
            AppEvent::BoltExpired(id) => {
                self.storm.bolts.expire(id);
            }
            AppEvent::NoticeExpired => {
                self.form_notice = None;
            }
            AppEvent::Input(event) => self.handle_input(event, tx).await?,
            AppEvent::Quit => {
                self.mode = AppMode::Quit;
            }
        }

        Ok(())
    }

    async fn handle_input(&mut self, event: Event, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        if let Event::Key(key) = event
            && key.kind == KeyEventKind::Press
        {
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                tx.send(AppEvent::Quit).await?;
                return Ok(());
            }
            match self.mode {
                AppMode::Editing => self.handle_editing_key(key.code, tx).await?,
                AppMode::Browsing => self.handle_browsing_key(key.code, tx).await?,
                AppMode::Quit => {}
            }
        }
        Ok(())
    }

    async fn handle_browsing_key(
        &mut self,
        code: KeyCode,
        tx: &mpsc::Sender<AppEvent>,
    ) -> Result<()> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                tx.send(AppEvent::Quit).await?;
            }
            KeyCode::Tab | KeyCode::Right => self.switch_page(self.page.next()),
            KeyCode::BackTab | KeyCode::Left => self.switch_page(self.page.prev()),
            KeyCode::Char(digit @ '1'..='5') => {
                if let Some(page) = Page::from_digit(digit) {
                    self.switch_page(page);
                }
            }
            KeyCode::Char('t') => {
                self.begin_strike(tx);
                self.storm.reveal.refresh()?;
            }
            KeyCode::Char('m') => {
                self.audio.toggle();
                self.settings.audio = self.audio.playing;
            }
            KeyCode::Char('T') => {
                self.settings.theme = self.settings.theme.cycle();
            }
            KeyCode::Char('a') => {
                self.settings.motion = if self.animate() {
                    MotionSetting::Off
                } else {
                    MotionSetting::Full
                };
                if !self.animate() {
                    self.storm.bolts.clear();
                }
            }
            KeyCode::Char('+') | KeyCode::Char('=') => self.adjust_rain(5),
            KeyCode::Char('-') => self.adjust_rain(-5),
            KeyCode::Char('?') => {
                self.show_help = !self.show_help;
            }
            KeyCode::Up => {
                self.list_offset = self.list_offset.saturating_sub(1);
            }
            KeyCode::Down => {
                self.list_offset = (self.list_offset + 1).min(self.max_list_offset());
            }
            KeyCode::Enter if self.page == Page::Contact => {
                self.mode = AppMode::Editing;
            }
            _ => {}
        }
        Ok(())
    }

    async fn handle_editing_key(
        &mut self,
        code: KeyCode,
        tx: &mpsc::Sender<AppEvent>,
    ) -> Result<()> {
        match code {
            KeyCode::Esc => {
                self.mode = AppMode::Browsing;
            }
            KeyCode::Tab | KeyCode::Down => {
                self.form_focus = self.form_focus.next();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.form_focus = self.form_focus.prev();
            }
            KeyCode::Enter => {
                if self.form_focus == FormFocus::Submit {
                    self.submit_form(tx).await?;
                } else {
                    self.form_focus = self.form_focus.next();
                }
            }
            KeyCode::Backspace => self.form.backspace(self.form_focus),
            KeyCode::Char(ch) => self.form.insert(self.form_focus, ch),
            _ => {}
        }
        Ok(())
    }

    /// Starts a strike and arms its settle timer. A no-op while one is
    /// already active, so the active window is never extended.
    fn begin_strike(&mut self, tx: &mpsc::Sender<AppEvent>) {
        if self.storm.strike.trigger() {
            schedule_strike_settle(tx.clone());
        }
    }

    async fn submit_form(&mut self, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        match self.form.submit(chrono::Utc::now()) {
            Some(submission) => {
                self.record_submission(&submission);
                self.submissions.push(submission);
                self.form_notice = Some(FormNotice::Sent);
                self.form_focus = FormFocus::Name;
                self.mode = AppMode::Browsing;
            }
            None => {
                self.form_notice = Some(FormNotice::MissingFields);
            }
        }
        schedule_notice_expiry(tx.clone());
        Ok(())
    }

    fn record_submission(&mut self, submission: &Submission) {
        let Some(dir) = self.settings_path.as_ref().and_then(|path| path.parent()) else {
            return;
        };
        let log = dir.join("submissions.jsonl");
        if let Err(err) = append_submission(&log, submission) {
            self.last_error = Some(format!("submission log: {err}"));
        }
    }

    fn adjust_rain(&mut self, delta: i32) {
        let current = i32::from(self.settings.rain_intensity);
        let next = (current + delta).clamp(0, i32::from(MAX_RAIN)) as u16;
        if next != self.settings.rain_intensity {
            self.settings.rain_intensity = next;
            let mut rng = rand::rng();
            self.storm.reseed_rain(next, &mut rng);
        }
    }

    fn switch_page(&mut self, page: Page) {
        self.page = page;
        self.list_offset = 0;
    }

    fn max_list_offset(&self) -> usize {
        match self.page {
            Page::About => content::TIMELINE.len().saturating_sub(1),
            Page::Portfolio => content::PROJECTS.len().saturating_sub(1),
            Page::Home | Page::Hobbies | Page::Contact => 0,
        }
    }
}
