use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{Event, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect as CellRect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::config::{HostConfig, WmConfig};
use crate::drivers::{InputDriver, OutputDriver};
use crate::error::Result;
use crate::event_loop::{ControlFlow, EventLoop};
use crate::host::{HostEvent, Session, SessionId, SessionStatus, WindowCommands};
use crate::input::{CellMetrics, PointerKind, PointerTranslator};
use crate::keybindings::{Action, KeyBindings};
use crate::layout::Viewport;
use crate::panel::{SessionChip, SessionPanel};
use crate::state::DashboardState;
use crate::theme;
use crate::tickets::{Ticket, demo_tickets};
use crate::ui::{UiFrame, truncate_to_width};
use crate::window::WindowManager;
use crate::window::decorator::{ChatDecorator, PillDraw, WindowDecorator, WindowDraw};

/// The terminal support dashboard: a ticket list underneath, chat windows
/// floating above it, a session strip on top and a status line below.
///
/// It plays the host role for [`WindowManager`]: it owns the session list,
/// decides what is docked and reacts to the events the manager queues.
pub struct Dashboard {
    windows: WindowManager<SessionId>,
    tickets: Vec<Ticket>,
    /// Accepted chats in the order they were picked up.
    active: Vec<SessionId>,
    panel: SessionPanel<SessionId>,
    state: DashboardState,
    keys: KeyBindings,
    translator: PointerTranslator,
    decorator: Arc<dyn WindowDecorator>,
    status_ttl: Duration,
    area: CellRect,
    content: CellRect,
    list_area: CellRect,
    dock_area: Option<CellRect>,
}

impl Dashboard {
    /// Build a dashboard for a terminal of `area` with `open_chats` chats
    /// already accepted.
    pub fn new(
        config: WmConfig,
        host: HostConfig,
        open_chats: usize,
        area: CellRect,
    ) -> Result<Self> {
        config.validate()?;
        host.validate()?;
        let metrics = CellMetrics::from(&host);
        let tickets = demo_tickets(open_chats + 4);
        let active: Vec<SessionId> = tickets
            .iter()
            .filter(|ticket| ticket.is_waiting_chat())
            .take(open_chats)
            .map(|ticket| ticket.id.clone())
            .collect();
        let decorator: Arc<dyn WindowDecorator> =
            Arc::new(ChatDecorator::new(metrics, config.chrome, config.dock));
        let mut dashboard = Self {
            windows: WindowManager::new(config, Viewport::default()),
            tickets,
            active,
            panel: SessionPanel::new(),
            state: DashboardState::new(),
            keys: KeyBindings::default(),
            translator: PointerTranslator::new(metrics, host.double_click),
            decorator,
            status_ttl: host.status_ttl,
            area,
            content: CellRect::default(),
            list_area: CellRect::default(),
            dock_area: None,
        };
        dashboard.layout(area);
        dashboard.sync_sessions();
        dashboard.select_focused();
        tracing::info!(open_chats = dashboard.active.len(), "dashboard ready");
        Ok(dashboard)
    }

    pub fn windows(&self) -> &WindowManager<SessionId> {
        &self.windows
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn active_sessions(&self) -> &[SessionId] {
        &self.active
    }

    pub fn selected_session(&self) -> Option<&SessionId> {
        self.active.get(self.state.selected())
    }

    /// Chats nobody has accepted yet.
    pub fn waiting_count(&self) -> usize {
        self.tickets
            .iter()
            .filter(|ticket| ticket.is_waiting_chat() && !self.active.contains(&ticket.id))
            .count()
    }

    /// Per-turn housekeeping that does not depend on input.
    pub fn tick(&mut self, now: Instant) {
        self.state.expire_status(now, self.status_ttl);
    }

    fn ticket(&self, id: &SessionId) -> Option<&Ticket> {
        self.tickets.iter().find(|ticket| &ticket.id == id)
    }

    fn index_of(&self, id: &SessionId) -> Option<usize> {
        self.active.iter().position(|active| active == id)
    }

    fn layout(&mut self, area: CellRect) {
        self.area = area;
        let (_, _, content) = self.panel.split_area(area);
        self.content = content;
        if self.state.dock_mode() && !self.active.is_empty() {
            let list_width = content.width / 2;
            self.list_area = CellRect::new(content.x, content.y, list_width, content.height);
            self.dock_area = Some(CellRect::new(
                content.x.saturating_add(list_width),
                content.y,
                content.width.saturating_sub(list_width),
                content.height,
            ));
        } else {
            self.list_area = content;
            self.dock_area = None;
        }
        self.translator.set_origin(content.x, content.y);
        let viewport = self
            .translator
            .metrics()
            .viewport(content.width, content.height);
        if viewport != self.windows.viewport() {
            tracing::debug!(
                width = viewport.width,
                height = viewport.height,
                "viewport changed"
            );
            self.windows.set_viewport(viewport);
        }
    }

    fn sync_sessions(&mut self) {
        let sessions: Vec<Session<SessionId>> = self
            .active
            .iter()
            .filter_map(|id| self.ticket(id))
            .map(Ticket::session)
            .collect();
        self.windows.sync_sessions(sessions);
        self.state.clamp_selection(self.active.len());
        self.sync_docked();
    }

    fn sync_docked(&mut self) {
        let docked = if self.state.dock_mode() {
            self.selected_session().cloned()
        } else {
            None
        };
        if docked.as_ref() != self.windows.docked() {
            self.windows.set_docked_session(docked);
        }
    }

    fn select_focused(&mut self) {
        if let Some(index) = self.windows.focused().and_then(|id| self.index_of(id)) {
            self.state.set_selected(index);
            self.sync_docked();
        }
    }

    pub fn handle_event(&mut self, event: &Event) -> ControlFlow {
        match event {
            Event::Key(key) => {
                if let Some(action) = self.keys.action_for_key(key) {
                    return self.apply_action(action);
                }
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            // Resizes are picked up by the next draw.
            _ => {}
        }
        ControlFlow::Continue
    }

    pub fn apply_action(&mut self, action: Action) -> ControlFlow {
        tracing::debug!(%action, "dashboard action");
        match action {
            Action::Quit => return ControlFlow::Quit,
            Action::OpenNextChat => {
                let next = self
                    .tickets
                    .iter()
                    .find(|ticket| ticket.is_waiting_chat() && !self.active.contains(&ticket.id))
                    .map(|ticket| ticket.id.clone());
                match next {
                    Some(id) => self.accept_chat(id),
                    None => self.state.set_status("no chats waiting"),
                }
            }
            Action::EndSelected => {
                if let Some(id) = self.selected_session().cloned() {
                    self.windows.end_session(&id);
                }
            }
            Action::OrganizeWindows => {
                self.windows.organize_windows();
                self.state.set_status("windows organized");
            }
            Action::HideAllWindows => {
                self.windows.hide_all_windows();
                self.state.set_status("all windows hidden");
            }
            Action::ToggleDockMode => {
                self.state.toggle_dock_mode();
                self.sync_docked();
                self.layout(self.area);
                let mode = if self.state.dock_mode() { "on" } else { "off" };
                self.state.set_status(format!("dock mode {mode}"));
            }
            Action::SelectNext => {
                self.state.select_next(self.active.len());
                self.sync_docked();
            }
            Action::SelectPrev => {
                self.state.select_prev(self.active.len());
                self.sync_docked();
            }
            Action::RestoreSelected => {
                if let Some(id) = self.selected_session().cloned() {
                    self.restore(&id);
                }
            }
            Action::ToggleMouseCapture => self.state.toggle_mouse_capture(),
        }
        ControlFlow::Continue
    }

    fn accept_chat(&mut self, id: SessionId) {
        tracing::info!(session = %id, "accepted chat");
        self.state.set_status(format!("accepted {id}"));
        self.active.push(id);
        self.state.set_selected(self.active.len() - 1);
        self.sync_sessions();
    }

    /// Select a session and bring its window back. In dock mode selecting is
    /// enough, the docked panel follows the selection.
    fn restore(&mut self, id: &SessionId) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        self.state.set_selected(index);
        if self.state.dock_mode() {
            self.sync_docked();
        } else {
            self.windows.restore_window(id);
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
            if self.panel.hit_test_mouse_capture(mouse.column, mouse.row) {
                self.state.toggle_mouse_capture();
                return;
            }
            if let Some(id) = self.panel.hit_test_session(mouse.column, mouse.row) {
                self.restore(&id);
                return;
            }
        }
        let Some(pointer) = self.translator.translate(mouse) else {
            return;
        };
        let down = matches!(pointer.kind, PointerKind::Down | PointerKind::DoubleClick);
        if self.windows.handle_pointer(pointer) || !down {
            return;
        }
        if let Some(id) = self.ticket_at(mouse.column, mouse.row) {
            self.open_ticket(id);
        }
    }

    fn ticket_at(&self, column: u16, row: u16) -> Option<SessionId> {
        let area = self.list_area;
        if !area.contains(Position::new(column, row)) || row == area.y {
            return None;
        }
        let index = (row - area.y - 1) as usize;
        self.tickets.get(index).map(|ticket| ticket.id.clone())
    }

    fn open_ticket(&mut self, id: SessionId) {
        let Some(ticket) = self.ticket(&id) else {
            return;
        };
        if self.active.contains(&id) {
            self.restore(&id);
        } else if ticket.is_waiting_chat() {
            self.accept_chat(id);
        } else {
            let status = format!("{id}: {} ({})", ticket.title, ticket.status.label());
            self.state.set_status(status);
        }
    }

    /// Apply everything the window manager queued since the last turn.
    pub fn process_host_events(&mut self) {
        for event in self.windows.take_host_events() {
            tracing::debug!(session = %event.session(), ?event, "host event");
            match event {
                HostEvent::Focus(id) => {
                    if let Some(index) = self.index_of(&id) {
                        self.state.set_selected(index);
                        self.sync_docked();
                    }
                }
                HostEvent::RequestClose(id) => {
                    self.state
                        .set_status(format!("{id} hidden, click its chip to reopen"));
                }
                HostEvent::RequestEndSession(id) => {
                    tracing::info!(session = %id, "ended session");
                    let selected = self.selected_session().filter(|s| **s != id).cloned();
                    self.active.retain(|active| active != &id);
                    if let Some(index) = selected.and_then(|s| self.index_of(&s)) {
                        self.state.set_selected(index);
                    }
                    if let Some(ticket) = self.tickets.iter_mut().find(|ticket| ticket.id == id) {
                        ticket.status = SessionStatus::Resolved;
                    }
                    self.sync_sessions();
                    self.layout(self.area);
                    self.state.set_status(format!("ended {id}"));
                }
            }
        }
    }

    pub fn draw(&mut self, frame: &mut UiFrame<'_>) {
        self.panel.begin_frame();
        self.layout(frame.area());
        self.draw_tickets(frame);
        self.draw_docked(frame);

        let plan = self.windows.render_plan();
        for view in &plan.floating {
            let window = WindowDraw {
                rect: view.rect,
                title: &view.session.title,
                customer: &view.session.customer_name,
                status: view.session.status,
                focused: view.focused,
                maximized: view.maximized,
                gesture: view.gesture,
            };
            self.decorator.render_window(frame, self.content, &window);
        }
        for pill in &plan.dock {
            let pill = PillDraw {
                rect: pill.rect,
                label: &pill.session.customer_name,
            };
            self.decorator.render_pill(frame, self.content, &pill);
        }

        let waiting = self.waiting_count();
        let selected = self.active.get(self.state.selected());
        let chips: Vec<SessionChip<'_, SessionId>> = self
            .active
            .iter()
            .map(|id| SessionChip {
                id,
                label: self
                    .tickets
                    .iter()
                    .find(|ticket| &ticket.id == id)
                    .map_or(id.as_str(), |ticket| ticket.customer.as_str()),
                selected: Some(id) == selected,
                on_screen: self.windows.window(id).is_some_and(|w| w.visible)
                    && self.windows.docked() != Some(id),
            })
            .collect();
        self.panel
            .render(frame, &chips, waiting, self.state.mouse_capture_enabled());
        let hint;
        let status = match self.state.status() {
            Some(status) => status,
            None => {
                hint = help_hint(&self.keys);
                &hint
            }
        };
        self.panel.render_bottom(frame, status);
    }

    fn draw_tickets(&self, frame: &mut UiFrame<'_>) {
        let area = self.list_area;
        if area.width == 0 || area.height == 0 {
            return;
        }
        let base = Style::default().fg(theme::ticket_fg());
        let header = format!("  {:<8} {:<7} {:<18} SUBJECT", "ID", "TYPE", "CUSTOMER");
        frame.set_string(
            area.x,
            area.y,
            &truncate_to_width(&header, area.width as usize),
            base.add_modifier(Modifier::BOLD),
        );
        let selected = self.selected_session();
        for (row, ticket) in (area.y.saturating_add(1)..area.bottom()).zip(&self.tickets) {
            let marker = if self.active.contains(&ticket.id) {
                "●"
            } else if ticket.is_waiting_chat() {
                "○"
            } else {
                " "
            };
            let line = format!(
                "{marker} {:<8} {:<7} {:<18} {} [{}]",
                ticket.id.as_str(),
                ticket.kind.label(),
                ticket.customer,
                ticket.title,
                ticket.status.label()
            );
            let style = if Some(&ticket.id) == selected {
                Style::default()
                    .fg(theme::ticket_selected_fg())
                    .add_modifier(Modifier::BOLD)
            } else if ticket.status == SessionStatus::Resolved {
                base.add_modifier(Modifier::DIM)
            } else {
                base
            };
            frame.set_string(
                area.x,
                row,
                &truncate_to_width(&line, area.width as usize),
                style,
            );
        }
    }

    fn draw_docked(&self, frame: &mut UiFrame<'_>) {
        let Some(area) = self.dock_area else {
            return;
        };
        let Some(ticket) = self.windows.docked().and_then(|id| self.ticket(id)) else {
            return;
        };
        frame.fill(
            area,
            Style::default()
                .bg(theme::decorator_body_bg())
                .fg(theme::decorator_body_fg()),
        );
        let block = Block::bordered()
            .title(Line::from(format!(" {} ", ticket.title)))
            .border_style(Style::default().fg(theme::decorator_header_bg()));
        let lines = vec![
            Line::from(ticket.customer.clone()),
            Line::from(format!("{} / {}", ticket.id, ticket.status.label())),
        ];
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

fn help_hint(keys: &KeyBindings) -> String {
    [
        Action::OpenNextChat,
        Action::OrganizeWindows,
        Action::HideAllWindows,
        Action::ToggleDockMode,
        Action::EndSelected,
        Action::Quit,
    ]
    .into_iter()
    .filter_map(|action| {
        keys.first_combo(action)
            .map(|combo| format!("{} {}", combo.display(), action))
    })
    .collect::<Vec<_>>()
    .join("  ")
}

/// Drive the dashboard until a quit action. The terminal is restored even
/// when the loop fails.
pub fn run<I, O>(
    dashboard: &mut Dashboard,
    input: &mut I,
    output: &mut O,
    poll_interval: Duration,
) -> Result<()>
where
    I: InputDriver,
    O: OutputDriver,
{
    output.enter()?;
    input.set_mouse_capture(dashboard.state.mouse_capture_enabled())?;
    let mut event_loop = EventLoop::new(input, poll_interval);
    let result = event_loop.run(|driver, event| {
        let flow = match event {
            None => {
                dashboard.tick(Instant::now());
                output.draw(|mut frame| dashboard.draw(&mut frame))?;
                ControlFlow::Continue
            }
            Some(event) => dashboard.handle_event(&event),
        };
        dashboard.process_host_events();
        if let Some(enabled) = dashboard.state.take_mouse_capture_change() {
            driver.set_mouse_capture(enabled)?;
        }
        Ok(flow)
    });
    output.exit()?;
    result?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Point;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use std::collections::VecDeque;
    use std::io;

    const AREA: CellRect = CellRect::new(0, 0, 150, 59);

    fn dashboard() -> Dashboard {
        Dashboard::new(WmConfig::default(), HostConfig::default(), 3, AREA).unwrap()
    }

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn draw(d: &mut Dashboard) -> Buffer {
        let mut buf = Buffer::empty(AREA);
        let mut frame = UiFrame::from_parts(AREA, &mut buf);
        d.draw(&mut frame);
        buf
    }

    fn buffer_text(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn starts_with_the_newest_chat_selected() {
        let d = dashboard();
        assert_eq!(d.active_sessions().len(), 3);
        assert_eq!(d.windows().floating_sessions().len(), 3);
        assert_eq!(d.state().selected(), 2);
        assert_eq!(d.windows().focused(), d.selected_session());
        // content is 150x57 cells of 8x16 px
        assert_eq!(d.windows().viewport(), Viewport::new(1200, 912));
    }

    #[test]
    fn organize_key_lays_out_the_grid() {
        let mut d = dashboard();
        d.handle_event(&key('o'));
        let ids = d.active_sessions().to_vec();
        let pos = |i: usize| d.windows().window(&ids[i]).unwrap().position;
        assert_eq!(pos(0), Point::new(20, 80));
        assert_eq!(pos(1), Point::new(424, 80));
        // row 1 would overflow 912 px, so it falls back to the stack
        assert_eq!(pos(2), Point::new(20, 80));
        assert_eq!(d.state().status(), Some("windows organized"));
    }

    #[test]
    fn chip_click_restores_and_selects() {
        let mut d = dashboard();
        d.handle_event(&key('h'));
        assert!(d.windows().floating_sessions().is_empty());
        draw(&mut d);

        // " chats " occupies the first seven cells
        d.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 8, 0));
        d.process_host_events();
        let first = d.active_sessions()[0].clone();
        assert_eq!(d.selected_session(), Some(&first));
        assert_eq!(d.windows().focused(), Some(&first));
        assert_eq!(d.windows().floating_sessions().len(), 1);
    }

    #[test]
    fn header_drag_moves_the_top_window() {
        let mut d = dashboard();
        draw(&mut d);
        let id = d.active_sessions()[2].clone();
        let start = d.windows().window(&id).unwrap().position;
        let column = ((start.x + 40) / 8) as u16;
        let row = ((start.y + 20) / 16) as u16 + 1;

        d.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), column, row));
        d.handle_event(&mouse(MouseEventKind::Drag(MouseButton::Left), column + 5, row));
        assert_eq!(d.windows().capture_owner(), Some(&id));
        d.handle_event(&mouse(MouseEventKind::Up(MouseButton::Left), column + 5, row));
        d.process_host_events();

        assert_eq!(d.windows().capture_owner(), None);
        assert_eq!(
            d.windows().window(&id).unwrap().position,
            Point::new(start.x + 40, start.y)
        );
    }

    #[test]
    fn ending_the_selected_session_drops_its_window() {
        let mut d = dashboard();
        let id = d.selected_session().cloned().unwrap();
        let waiting = d.waiting_count();
        d.handle_event(&key('e'));
        // nothing changes until the host drains the request
        assert_eq!(d.active_sessions().len(), 3);
        d.process_host_events();

        assert_eq!(d.active_sessions().len(), 2);
        assert!(d.windows().window(&id).is_none());
        assert_eq!(d.state().selected(), 1);
        let ticket = d.tickets().iter().find(|t| t.id == id).unwrap();
        assert_eq!(ticket.status, SessionStatus::Resolved);
        assert_eq!(d.waiting_count(), waiting);
    }

    #[test]
    fn ending_an_earlier_session_keeps_the_docked_selection() {
        let mut d = dashboard();
        let ids = d.active_sessions().to_vec();
        let tab = Event::Key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
        d.handle_event(&tab);
        d.handle_event(&tab);
        assert_eq!(d.selected_session(), Some(&ids[1]));
        d.handle_event(&key('d'));
        assert_eq!(d.windows().docked(), Some(&ids[1]));

        d.windows.end_session(&ids[0]);
        d.process_host_events();

        assert_eq!(d.active_sessions(), &ids[1..]);
        assert_eq!(d.state().selected(), 0);
        assert_eq!(d.selected_session(), Some(&ids[1]));
        assert_eq!(d.windows().docked(), Some(&ids[1]));
    }

    #[test]
    fn status_gives_way_to_key_hints() {
        let mut d = dashboard();
        d.handle_event(&key('o'));
        d.tick(Instant::now());
        assert_eq!(d.state().status(), Some("windows organized"));

        d.tick(Instant::now() + HostConfig::default().status_ttl);
        assert!(d.state().status().is_none());
        let hint: String = help_hint(&d.keys).chars().take(30).collect();
        let text = buffer_text(&draw(&mut d));
        assert!(text.contains(&hint));
        assert!(!text.contains("windows organized"));
    }

    #[test]
    fn open_next_chat_provisions_and_selects() {
        let mut d = dashboard();
        let waiting = d.waiting_count();
        d.handle_event(&key('n'));
        assert_eq!(d.active_sessions().len(), 4);
        assert_eq!(d.waiting_count(), waiting - 1);
        assert_eq!(d.state().selected(), 3);
        assert_eq!(d.windows().focused(), d.selected_session());
    }

    #[test]
    fn dock_mode_pulls_the_selected_chat_out_of_the_overlay() {
        let mut d = dashboard();
        let id = d.selected_session().cloned().unwrap();
        d.handle_event(&key('d'));
        assert_eq!(d.windows().docked(), Some(&id));
        assert!(
            d.windows()
                .floating_sessions()
                .iter()
                .all(|session| session.id != id)
        );
        let customer = d.windows().sessions()[2].customer_name.clone();
        let buf = draw(&mut d);
        assert!(buffer_text(&buf).contains(&customer));

        d.handle_event(&Event::Key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)));
        assert_eq!(d.windows().docked(), d.selected_session());
        assert_ne!(d.windows().docked(), Some(&id));

        d.handle_event(&key('d'));
        assert_eq!(d.windows().docked(), None);
    }

    #[test]
    fn mouse_capture_indicator_toggles_capture() {
        let mut d = dashboard();
        draw(&mut d);
        d.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 149, 0));
        assert!(!d.state().mouse_capture_enabled());
    }

    struct Scripted {
        events: VecDeque<Event>,
        capture: Vec<bool>,
    }

    impl InputDriver for Scripted {
        fn poll(&mut self, _timeout: Duration) -> io::Result<bool> {
            Ok(!self.events.is_empty())
        }

        fn read(&mut self) -> io::Result<Event> {
            self.events
                .pop_front()
                .ok_or_else(|| io::Error::other("script exhausted"))
        }

        fn set_mouse_capture(&mut self, enabled: bool) -> io::Result<()> {
            self.capture.push(enabled);
            Ok(())
        }
    }

    struct TestOutput {
        terminal: Terminal<TestBackend>,
        entered: bool,
    }

    impl OutputDriver for TestOutput {
        type Backend = TestBackend;

        fn enter(&mut self) -> io::Result<()> {
            self.entered = true;
            Ok(())
        }

        fn exit(&mut self) -> io::Result<()> {
            self.entered = false;
            Ok(())
        }

        fn draw<F>(&mut self, f: F) -> io::Result<()>
        where
            F: FnOnce(UiFrame<'_>),
        {
            self.terminal
                .draw(|frame| f(UiFrame::new(frame)))
                .map(|_| ())
                .map_err(|err| io::Error::other(err.to_string()))
        }
    }

    #[test]
    fn run_draws_and_quits() {
        let mut d = dashboard();
        let mut input = Scripted {
            events: VecDeque::from(vec![key('m'), key('o'), key('q')]),
            capture: Vec::new(),
        };
        let mut output = TestOutput {
            terminal: Terminal::new(TestBackend::new(150, 59)).unwrap(),
            entered: false,
        };
        run(&mut d, &mut input, &mut output, Duration::from_millis(0)).unwrap();

        assert!(!output.entered);
        assert_eq!(input.capture, vec![true, false]);
        assert_eq!(d.state().status(), Some("windows organized"));
        let text = buffer_text(output.terminal.backend().buffer());
        assert!(text.contains("chats"));
    }
}
