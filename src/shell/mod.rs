//! Window Shell - Main window glue and the event-loop pump
//!
//! Owns the timer pool, signal bridge and key translator, plus the
//! menu/toolbar/status models making up the window chrome. The pump waits
//! on one channel fed by the toolkit event reader and the signal watcher,
//! handles a message, then fires whatever timers came due. That pass is
//! the single-threaded scheduler every callback in this crate runs on.
//!
//! Rendering and dialog presentation stay outside: the shell drives them
//! through the [`Canvas`] and [`ContactsDialog`] seams and reaches the
//! surrounding application through [`AppHooks`].
//!
//! # Example
//!
//! ```no_run
//! use roadmap_shell::config::ShellConfig;
//! use roadmap_shell::shell::{AppHooks, WindowShell};
//!
//! struct Hooks;
//! impl AppHooks for Hooks {
//!     fn main_exit(&self) { /* flush state, stop subsystems */ }
//! }
//!
//! fn refresh_gps() {}
//!
//! let mut shell = WindowShell::new(ShellConfig::load().unwrap(), Box::new(Hooks));
//! shell.add_timer(1000, refresh_gps);
//! shell.set_keyboard_callback(Box::new(|key| log::debug!("key {key}")));
//! shell.run().unwrap();
//! ```

pub mod menu;

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::{Duration, Instant};

use crossterm::event::{
    DisableFocusChange, EnableFocusChange, Event, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};

use crate::callback::ShellCallback;
use crate::config::ShellConfig;
use crate::input::reader::{EventReader, ShellEvent};
use crate::input::{KeyInputCallback, KeyTranslator};
use crate::signal::{self, SignalBridge};
use crate::timer::TimerPool;
use crate::types::{ChromeFlags, ShellError, ToolbarOrientation};

use menu::{MenuBar, MenuId, ToolBar};

// =============================================================================
// EXTERNAL COLLABORATOR SEAMS
// =============================================================================

/// Hooks into the surrounding application.
///
/// Everything the shell needs from the rest of the program goes through
/// here; only the orderly-exit entry point is mandatory.
pub trait AppHooks {
    /// Orderly shutdown. Invoked by the signal bridge and by window-close
    /// events; never from signal-handler context.
    fn main_exit(&self);

    /// Localized label lookup.
    fn localize(&self, label: &str) -> String {
        label.to_string()
    }

    /// Resolve an icon name to an image path.
    fn icon_path(&self, _name: &str) -> Option<PathBuf> {
        None
    }

    /// Whether the day skin is active (affects dialog backgrounds).
    fn day_skin(&self) -> bool {
        true
    }

    /// Whether the active language lays out right-to-left.
    fn rtl(&self) -> bool {
        false
    }

    /// Play a named sound.
    fn play_sound(&self, _name: &str) {}

    /// Run an address search, as issued from the contacts dialog.
    fn search_address(&self, _address: &str) {}
}

/// The external map canvas.
pub trait Canvas {
    /// The drawing surface changed size.
    fn configure(&mut self, cols: u16, rows: u16);

    /// One pump pass finished; redraw if anything is dirty.
    fn refresh(&mut self);
}

/// The external contact-list view.
pub trait ContactsDialog {
    fn present(&mut self, props: &ContactsProps);
    fn dismiss(&mut self);
}

/// Presentation properties handed to the contacts view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactsProps {
    pub width: u16,
    pub height: u16,
    /// Background fill matching the active skin.
    pub background: String,
    pub rtl: bool,
    pub title: String,
    pub ok_label: String,
    pub cancel_label: String,
}

/// A popup request recorded for the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Popup {
    pub menu: MenuId,
    pub x: u16,
    pub y: u16,
}

const DAY_BACKGROUND: &str = "#70bfea";
const NIGHT_BACKGROUND: &str = "#74859b";

// =============================================================================
// WINDOW SHELL
// =============================================================================

/// The main application window and its event-loop integration layer.
pub struct WindowShell {
    config: ShellConfig,
    hooks: Box<dyn AppHooks>,

    timers: TimerPool,
    translator: KeyTranslator,

    menus: MenuBar,
    toolbar: Option<ToolBar>,
    status: String,
    chrome: ChromeFlags,
    fullscreen: bool,
    has_focus: bool,
    pending_popup: Option<Popup>,

    canvas: Option<Box<dyn Canvas>>,
    contacts: Option<Box<dyn ContactsDialog>>,
    contacts_open: bool,

    exit_requested: bool,
    tx: Sender<ShellEvent>,
    rx: Receiver<ShellEvent>,
}

impl WindowShell {
    /// Build the shell. No terminal state is touched until [`run`].
    ///
    /// [`run`]: WindowShell::run
    pub fn new(config: ShellConfig, hooks: Box<dyn AppHooks>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            config,
            hooks,
            timers: TimerPool::new(),
            translator: KeyTranslator::new(),
            menus: MenuBar::new(),
            toolbar: None,
            status: String::new(),
            chrome: ChromeFlags::default(),
            fullscreen: false,
            has_focus: true,
            pending_popup: None,
            canvas: None,
            contacts: None,
            contacts_open: false,
            exit_requested: false,
            tx,
            rx,
        }
    }

    // -------------------------------------------------------------------------
    // Collaborator wiring
    // -------------------------------------------------------------------------

    pub fn set_canvas(&mut self, canvas: Box<dyn Canvas>) {
        self.canvas = Some(canvas);
    }

    pub fn set_contacts_dialog(&mut self, dialog: Box<dyn ContactsDialog>) {
        self.contacts = Some(dialog);
    }

    /// Register the single active key-input consumer.
    pub fn set_keyboard_callback(&mut self, callback: KeyInputCallback) {
        self.translator.set_callback(callback);
    }

    /// A sender feeding this shell's pump, for embedders that deliver
    /// their own [`ShellEvent`]s.
    pub fn event_sender(&self) -> Sender<ShellEvent> {
        self.tx.clone()
    }

    // -------------------------------------------------------------------------
    // Timer surface
    // -------------------------------------------------------------------------

    /// Arm a periodic timer. Capacity exhaustion is logged and the add
    /// refused; re-adding a registered callback is a no-op.
    pub fn add_timer(&mut self, interval_ms: u64, callback: ShellCallback) {
        if let Err(err) = self.timers.add(Duration::from_millis(interval_ms), callback) {
            log::error!("{err}");
        }
    }

    /// Disarm the timer registered for `callback`, if any.
    pub fn remove_timer(&mut self, callback: ShellCallback) {
        self.timers.remove(callback);
    }

    /// Fire timers that are due. The run loop calls this after every pump
    /// pass; embedders driving [`dispatch`] themselves call it too.
    ///
    /// [`dispatch`]: WindowShell::dispatch
    pub fn pump_timers(&mut self) -> usize {
        self.timers.fire_due(Instant::now())
    }

    // -------------------------------------------------------------------------
    // Menu and toolbar surface
    // -------------------------------------------------------------------------

    pub fn new_menu(&mut self) -> MenuId {
        self.menus.new_menu()
    }

    pub fn free_menu(&mut self, id: MenuId) {
        self.menus.free_menu(id);
    }

    pub fn add_menu(&mut self, id: MenuId, label: &str) {
        self.menus.add_menu(id, label);
    }

    pub fn add_menu_item(&mut self, id: MenuId, label: &str, tip: &str, callback: ShellCallback) {
        self.menus.add_item(id, label, tip, callback);
    }

    pub fn add_menu_separator(&mut self, id: MenuId) {
        self.menus.add_separator(id);
    }

    /// Record a popup request at canvas coordinates for the renderer.
    pub fn popup_menu(&mut self, id: MenuId, x: u16, y: u16) {
        if self.menus.menu(id).is_some() {
            self.pending_popup = Some(Popup { menu: id, x, y });
        }
    }

    /// Consume the pending popup request, if any.
    pub fn take_popup(&mut self) -> Option<Popup> {
        self.pending_popup.take()
    }

    /// Create the toolbar. Only the first call does anything; an empty
    /// orientation string means the configured default edge, and an
    /// unparsable one is logged and falls back to the bottom.
    pub fn add_toolbar(&mut self, orientation: &str) {
        if self.toolbar.is_some() {
            return;
        }
        let requested = if orientation.is_empty() {
            self.config.toolbar.as_str()
        } else {
            orientation
        };
        let orientation = match ToolbarOrientation::parse(requested) {
            Ok(orientation) => orientation,
            Err(err) => {
                log::error!("{err}");
                ToolbarOrientation::Bottom
            }
        };
        self.toolbar = Some(ToolBar::new(orientation));
    }

    /// Add a toolbar button, creating the toolbar first if needed. The
    /// icon name is resolved through the application's icon lookup.
    pub fn add_tool(&mut self, label: &str, icon: &str, tip: &str, callback: ShellCallback) {
        if self.toolbar.is_none() {
            self.add_toolbar("");
        }
        let icon_path = if icon.is_empty() {
            None
        } else {
            self.hooks.icon_path(icon)
        };
        if let Some(toolbar) = self.toolbar.as_mut() {
            toolbar.add_tool(label, icon_path, tip, callback);
        }
    }

    pub fn add_tool_space(&mut self) {
        if let Some(toolbar) = self.toolbar.as_mut() {
            toolbar.add_space();
        }
    }

    pub fn menus(&self) -> &MenuBar {
        &self.menus
    }

    pub fn toolbar(&self) -> Option<&ToolBar> {
        self.toolbar.as_ref()
    }

    // -------------------------------------------------------------------------
    // Status line, chrome, full-screen
    // -------------------------------------------------------------------------

    pub fn set_status(&mut self, text: &str) {
        self.status = text.to_string();
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn chrome(&self) -> ChromeFlags {
        self.chrome
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    /// Switch between the normal screen with full chrome and the
    /// alternate screen with the menu bar and toolbar hidden.
    pub fn toggle_full_screen(&mut self) -> io::Result<()> {
        let mut out = io::stdout();
        if self.fullscreen {
            execute!(out, LeaveAlternateScreen)?;
            self.chrome
                .insert(ChromeFlags::MENU_BAR | ChromeFlags::TOOL_BAR);
            self.fullscreen = false;
        } else {
            self.chrome
                .remove(ChromeFlags::MENU_BAR | ChromeFlags::TOOL_BAR);
            execute!(out, EnterAlternateScreen)?;
            self.fullscreen = true;
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Contacts dialog glue
    // -------------------------------------------------------------------------

    /// Present the external contact list, sized to the terminal and
    /// skinned/localized through the application hooks.
    pub fn show_contact_list(&mut self) {
        if self.contacts.is_none() {
            return;
        }
        let (cols, rows) = terminal::size().unwrap_or((80, 24));
        let background = if self.hooks.day_skin() {
            DAY_BACKGROUND
        } else {
            NIGHT_BACKGROUND
        };
        let props = ContactsProps {
            width: cols,
            height: rows,
            background: background.to_string(),
            rtl: self.hooks.rtl(),
            title: self.hooks.localize("Contacts"),
            ok_label: self.hooks.localize("Ok"),
            cancel_label: self.hooks.localize("Back_key"),
        };
        self.mouse_area_pressed();
        if let Some(dialog) = self.contacts.as_mut() {
            dialog.present(&props);
        }
        self.contacts_open = true;
    }

    /// The dialog confirmed with an address: dismiss and hand it to the
    /// application's search.
    pub fn contacts_ok(&mut self, address: &str) {
        if let Some(dialog) = self.contacts.as_mut() {
            dialog.dismiss();
        }
        self.contacts_open = false;
        self.hooks.search_address(address);
    }

    /// The dialog was cancelled.
    pub fn contacts_cancel(&mut self) {
        if let Some(dialog) = self.contacts.as_mut() {
            dialog.dismiss();
        }
        self.contacts_open = false;
    }

    pub fn contacts_open(&self) -> bool {
        self.contacts_open
    }

    /// Touch feedback for dialog surfaces.
    pub fn mouse_area_pressed(&self) {
        if self.config.play_click {
            self.hooks.play_sound("click");
        }
    }

    // -------------------------------------------------------------------------
    // Shutdown
    // -------------------------------------------------------------------------

    /// Invoke the application's orderly exit and end the run loop. Safe to
    /// call more than once; only the first call reaches the application.
    pub fn request_exit(&mut self) {
        if !self.exit_requested {
            self.exit_requested = true;
            self.hooks.main_exit();
        }
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    // -------------------------------------------------------------------------
    // The pump
    // -------------------------------------------------------------------------

    /// Handle one message from the pump channel.
    pub fn dispatch(&mut self, event: ShellEvent) {
        match event {
            ShellEvent::Input(Event::Key(key)) => {
                self.translator.handle(&key);
            }
            ShellEvent::Input(Event::Resize(cols, rows)) => {
                if let Some(canvas) = self.canvas.as_mut() {
                    canvas.configure(cols, rows);
                }
            }
            ShellEvent::Input(Event::FocusGained) => self.has_focus = true,
            ShellEvent::Input(Event::FocusLost) => self.has_focus = false,
            ShellEvent::Input(_) => {}
            ShellEvent::Signal => self.handle_signal(),
            ShellEvent::Closed => self.request_exit(),
        }
    }

    /// Drain the signal bridge: log the delivery and shut down. Two
    /// coalesced deliveries produce one shutdown carrying the later
    /// number; a stale wake with nothing pending does nothing.
    fn handle_signal(&mut self) {
        let Some(signum) = signal::take() else {
            return;
        };
        match signal::signal_name(signum) {
            Some(name) => log::warn!("received signal {name}"),
            None => log::warn!("received signal #{signum}"),
        }
        self.request_exit();
    }

    /// One pump pass: wait for a message until the earliest timer
    /// deadline (never longer than `max_wait`), handle it, then fire due
    /// timers. Embedders that own terminal setup themselves drive the
    /// loop with this; [`run`] is this in a loop plus setup and teardown.
    ///
    /// Returns whether a message was handled.
    ///
    /// [`run`]: WindowShell::run
    pub fn pump_once(&mut self, max_wait: Duration) -> bool {
        let timeout = self
            .timers
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(max_wait)
            .min(max_wait);

        let handled = match self.rx.recv_timeout(timeout) {
            Ok(event) => {
                self.dispatch(event);
                true
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => false,
        };

        self.timers.fire_due(Instant::now());
        handled
    }

    /// Set up the terminal, start the reader and signal bridge, and pump
    /// until exit is requested. Tears the terminal back down on the way
    /// out.
    pub fn run(&mut self) -> Result<(), ShellError> {
        self.enter_terminal()?;
        let reader = EventReader::spawn(self.tx.clone())?;
        let bridge = SignalBridge::install(self.tx.clone())?;

        if self.config.start_fullscreen && !self.fullscreen {
            self.toggle_full_screen()?;
        }
        if let Some(canvas) = self.canvas.as_mut() {
            if let Ok((cols, rows)) = terminal::size() {
                canvas.configure(cols, rows);
            }
        }

        while !self.exit_requested {
            self.pump_once(self.config.idle_tick());
            if let Some(canvas) = self.canvas.as_mut() {
                canvas.refresh();
            }
        }

        drop(bridge);
        drop(reader);
        self.timers.clear();
        self.leave_terminal()?;
        Ok(())
    }

    fn enter_terminal(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        // Release events are needed to track the space modifier.
        execute!(
            out,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES),
            EnableFocusChange
        )?;
        out.flush()
    }

    fn leave_terminal(&mut self) -> io::Result<()> {
        let mut out = io::stdout();
        if self.fullscreen {
            execute!(out, LeaveAlternateScreen)?;
            self.chrome
                .insert(ChromeFlags::MENU_BAR | ChromeFlags::TOOL_BAR);
            self.fullscreen = false;
        }
        execute!(out, DisableFocusChange, PopKeyboardEnhancementFlags)?;
        out.flush()?;
        terminal::disable_raw_mode()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use serial_test::serial;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Clone, Default)]
    struct TestHooks {
        exits: Rc<Cell<usize>>,
        searches: Rc<RefCell<Vec<String>>>,
        sounds: Rc<RefCell<Vec<String>>>,
        night: bool,
    }

    impl AppHooks for TestHooks {
        fn main_exit(&self) {
            self.exits.set(self.exits.get() + 1);
        }

        fn localize(&self, label: &str) -> String {
            format!("[{label}]")
        }

        fn icon_path(&self, name: &str) -> Option<PathBuf> {
            Some(PathBuf::from(format!("icons/{name}.png")))
        }

        fn day_skin(&self) -> bool {
            !self.night
        }

        fn play_sound(&self, name: &str) {
            self.sounds.borrow_mut().push(name.to_string());
        }

        fn search_address(&self, address: &str) {
            self.searches.borrow_mut().push(address.to_string());
        }
    }

    #[derive(Default)]
    struct RecordingDialog {
        presented: Rc<RefCell<Vec<ContactsProps>>>,
        dismissed: Rc<Cell<usize>>,
    }

    impl ContactsDialog for RecordingDialog {
        fn present(&mut self, props: &ContactsProps) {
            self.presented.borrow_mut().push(props.clone());
        }

        fn dismiss(&mut self) {
            self.dismissed.set(self.dismissed.get() + 1);
        }
    }

    fn shell_with_hooks(config: ShellConfig) -> (WindowShell, TestHooks) {
        let hooks = TestHooks::default();
        let shell = WindowShell::new(config, Box::new(hooks.clone()));
        (shell, hooks)
    }

    fn key(code: KeyCode) -> ShellEvent {
        ShellEvent::Input(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    #[test]
    fn test_key_events_reach_registered_callback() {
        let (mut shell, _hooks) = shell_with_hooks(ShellConfig::default());

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        shell.set_keyboard_callback(Box::new(move |name| {
            sink.borrow_mut().push(name.to_string())
        }));

        shell.dispatch(key(KeyCode::Char(' ')));
        shell.dispatch(key(KeyCode::Right));
        shell.dispatch(key(KeyCode::Enter));

        assert_eq!(seen.borrow().as_slice(), ["Special-Contact", "Enter"]);
    }

    #[test]
    fn test_close_invokes_exit_exactly_once() {
        let (mut shell, hooks) = shell_with_hooks(ShellConfig::default());

        shell.dispatch(ShellEvent::Closed);
        shell.dispatch(ShellEvent::Closed);

        assert!(shell.exit_requested());
        assert_eq!(hooks.exits.get(), 1);
    }

    #[test]
    #[serial(pending_signal)]
    fn test_signal_message_shuts_down() {
        let (mut shell, hooks) = shell_with_hooks(ShellConfig::default());

        signal::take(); // Start clean
        signal::notify(15);
        shell.dispatch(ShellEvent::Signal);

        assert!(shell.exit_requested());
        assert_eq!(hooks.exits.get(), 1);
        assert_eq!(signal::take(), None); // Consumed
    }

    #[test]
    #[serial(pending_signal)]
    fn test_stale_signal_wake_is_ignored() {
        let (mut shell, hooks) = shell_with_hooks(ShellConfig::default());

        signal::take(); // Nothing pending
        shell.dispatch(ShellEvent::Signal);

        assert!(!shell.exit_requested());
        assert_eq!(hooks.exits.get(), 0);
    }

    static PUMPED: AtomicUsize = AtomicUsize::new(0);

    fn pump_tick() {
        PUMPED.fetch_add(1, Ordering::SeqCst);
    }

    #[test]
    fn test_timer_surface_fires_and_removes() {
        let (mut shell, _hooks) = shell_with_hooks(ShellConfig::default());
        let before = PUMPED.load(Ordering::SeqCst);

        shell.add_timer(0, pump_tick);
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(shell.pump_timers(), 1);
        assert_eq!(PUMPED.load(Ordering::SeqCst), before + 1);

        shell.remove_timer(pump_tick);
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(shell.pump_timers(), 0);
    }

    #[test]
    fn test_resize_configures_canvas() {
        struct SizeCanvas(Rc<Cell<(u16, u16)>>);
        impl Canvas for SizeCanvas {
            fn configure(&mut self, cols: u16, rows: u16) {
                self.0.set((cols, rows));
            }
            fn refresh(&mut self) {}
        }

        let (mut shell, _hooks) = shell_with_hooks(ShellConfig::default());
        let size = Rc::new(Cell::new((0, 0)));
        shell.set_canvas(Box::new(SizeCanvas(size.clone())));

        shell.dispatch(ShellEvent::Input(Event::Resize(132, 43)));
        assert_eq!(size.get(), (132, 43));
    }

    #[test]
    fn test_focus_tracking() {
        let (mut shell, _hooks) = shell_with_hooks(ShellConfig::default());
        assert!(shell.has_focus());

        shell.dispatch(ShellEvent::Input(Event::FocusLost));
        assert!(!shell.has_focus());

        shell.dispatch(ShellEvent::Input(Event::FocusGained));
        assert!(shell.has_focus());
    }

    #[test]
    fn test_toolbar_orientation_fallback() {
        let (mut shell, _hooks) = shell_with_hooks(ShellConfig::default());

        shell.add_toolbar("diagonal");
        assert_eq!(
            shell.toolbar().unwrap().orientation,
            ToolbarOrientation::Bottom
        );
    }

    #[test]
    fn test_add_tool_creates_configured_toolbar() {
        let mut config = ShellConfig::default();
        config.toolbar = "top".to_string();
        let (mut shell, _hooks) = shell_with_hooks(config);

        fn zoom() {}
        shell.add_tool("Zoom", "zoom", "Zoom the map", zoom);

        let toolbar = shell.toolbar().unwrap();
        assert_eq!(toolbar.orientation, ToolbarOrientation::Top);
        assert_eq!(toolbar.entries().len(), 1);

        // Icon resolved through the application hooks.
        match &toolbar.entries()[0] {
            menu::ToolEntry::Tool(tool) => {
                assert_eq!(tool.icon.as_deref(), Some(std::path::Path::new("icons/zoom.png")));
            }
            menu::ToolEntry::Space => panic!("expected a tool"),
        }
    }

    #[test]
    fn test_popup_recorded_and_consumed() {
        let (mut shell, _hooks) = shell_with_hooks(ShellConfig::default());

        let menu = shell.new_menu();
        shell.add_menu(menu, "Map");
        shell.popup_menu(menu, 10, 4);

        assert_eq!(shell.take_popup(), Some(Popup { menu, x: 10, y: 4 }));
        assert_eq!(shell.take_popup(), None);

        // Freed menus cannot pop up.
        shell.free_menu(menu);
        shell.popup_menu(menu, 1, 1);
        assert_eq!(shell.take_popup(), None);
    }

    #[test]
    fn test_contacts_flow() {
        let mut config = ShellConfig::default();
        config.play_click = true;
        let (mut shell, hooks) = shell_with_hooks(config);

        let dialog = RecordingDialog::default();
        let presented = dialog.presented.clone();
        let dismissed = dialog.dismissed.clone();
        shell.set_contacts_dialog(Box::new(dialog));

        shell.show_contact_list();
        assert!(shell.contacts_open());
        assert_eq!(presented.borrow().len(), 1);

        {
            let presented = presented.borrow();
            let props = &presented[0];
            assert_eq!(props.background, DAY_BACKGROUND);
            assert_eq!(props.title, "[Contacts]");
            assert_eq!(props.ok_label, "[Ok]");
            assert_eq!(props.cancel_label, "[Back_key]");
            assert!(!props.rtl);
        }

        assert_eq!(hooks.sounds.borrow().as_slice(), ["click"]);

        shell.contacts_ok("22 Acacia Avenue");
        assert!(!shell.contacts_open());
        assert_eq!(dismissed.get(), 1);
        assert_eq!(hooks.searches.borrow().as_slice(), ["22 Acacia Avenue"]);
    }

    #[test]
    fn test_contacts_night_background() {
        let hooks = TestHooks {
            night: true,
            ..TestHooks::default()
        };
        let mut shell = WindowShell::new(ShellConfig::default(), Box::new(hooks));

        let dialog = RecordingDialog::default();
        let presented = dialog.presented.clone();
        shell.set_contacts_dialog(Box::new(dialog));

        shell.show_contact_list();
        assert_eq!(presented.borrow()[0].background, NIGHT_BACKGROUND);
    }

    #[test]
    fn test_show_contacts_without_dialog_is_noop() {
        let (mut shell, _hooks) = shell_with_hooks(ShellConfig::default());
        shell.show_contact_list();
        assert!(!shell.contacts_open());
    }

    #[test]
    fn test_status_line() {
        let (mut shell, _hooks) = shell_with_hooks(ShellConfig::default());
        assert_eq!(shell.status(), "");
        shell.set_status("Routing...");
        assert_eq!(shell.status(), "Routing...");
    }
}
