use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

use super::controller::{Gesture, GestureLimits, GestureOutcome, PointerCapture, WindowController};
use super::store::WindowStore;
use super::WindowState;
use crate::config::WmConfig;
use crate::constants::MAXIMIZED_Z_BOOST;
use crate::host::{HostEvent, Session, WindowCommands};
use crate::input::{PointerEvent, PointerKind};
use crate::layout::{
    ChromeHit, DockHit, HeaderButton, Point, Rect, Viewport, cascade_position, chrome_hit,
    dock_hit, dock_slots, maximized_rect, organize_grid, rect_contains,
};

/// One floating window as it should be painted this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloatingView<'a, Id> {
    pub session: &'a Session<Id>,
    pub rect: Rect,
    /// Paint layer, maximize boost included.
    pub z_index: u64,
    pub focused: bool,
    pub maximized: bool,
    pub gesture: Gesture,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockPillView<'a, Id> {
    pub session: &'a Session<Id>,
    pub rect: Rect,
}

/// Everything the host needs to paint the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPlan<'a, Id> {
    /// Back to front.
    pub floating: Vec<FloatingView<'a, Id>>,
    /// Host order, first pill on top of the stack. Painted after every
    /// floating window.
    pub dock: Vec<DockPillView<'a, Id>>,
}

#[derive(Debug, Clone, Copy)]
enum GestureKind {
    Drag,
    Resize,
}

#[derive(Debug, Clone, Copy)]
struct Layer {
    session: usize,
    rect: Rect,
    z_index: u64,
    maximized: bool,
}

/// Owns every chat window: the state store, one controller per window, the
/// pointer capture and the outbound event queue.
///
/// The host feeds in the session list, the docked id and the viewport, routes
/// pointer input through [`WindowManager::handle_pointer`], paints from
/// [`WindowManager::render_plan`] and drains [`WindowManager::take_host_events`]
/// once per turn.
#[derive(Debug)]
pub struct WindowManager<Id: Ord> {
    config: WmConfig,
    store: WindowStore<Id>,
    controllers: BTreeMap<Id, WindowController>,
    sessions: Vec<Session<Id>>,
    docked: Option<Id>,
    viewport: Viewport,
    focused: Option<Id>,
    capture: Option<PointerCapture<Id>>,
    events: Vec<HostEvent<Id>>,
}

impl<Id: Clone + Ord + Debug> WindowManager<Id> {
    pub fn new(config: WmConfig, viewport: Viewport) -> Self {
        Self {
            store: WindowStore::new(config.base_z_index, config.card, config.min_size),
            config,
            controllers: BTreeMap::new(),
            sessions: Vec::new(),
            docked: None,
            viewport,
            focused: None,
            capture: None,
            events: Vec::new(),
        }
    }

    pub fn config(&self) -> &WmConfig {
        &self.config
    }

    pub fn store(&self) -> &WindowStore<Id> {
        &self.store
    }

    pub fn window(&self, id: &Id) -> Option<&WindowState> {
        self.store.get(id)
    }

    pub fn sessions(&self) -> &[Session<Id>] {
        &self.sessions
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn focused(&self) -> Option<&Id> {
        self.focused.as_ref()
    }

    pub fn docked(&self) -> Option<&Id> {
        self.docked.as_ref()
    }

    /// Owner of the pointer capture, if a gesture is in flight.
    pub fn capture_owner(&self) -> Option<&Id> {
        self.capture.as_ref().map(PointerCapture::owner)
    }

    pub fn is_maximized(&self, id: &Id) -> bool {
        self.controllers
            .get(id)
            .is_some_and(WindowController::is_maximized)
    }

    /// Reconcile against the host's current session list. Duplicate ids keep
    /// their first occurrence; windows of departed sessions are dropped; new
    /// sessions get a cascaded window and become the focused one.
    pub fn sync_sessions<I>(&mut self, sessions: I)
    where
        I: IntoIterator<Item = Session<Id>>,
    {
        let mut seen = BTreeSet::new();
        let mut incoming = Vec::new();
        for session in sessions {
            if seen.insert(session.id.clone()) {
                incoming.push(session);
            } else {
                tracing::warn!(window_id = ?session.id, "duplicate session id ignored");
            }
        }

        let removed = self.store.retain(|id| seen.contains(id));
        for id in removed {
            tracing::debug!(window_id = ?id, "dropped window of departed session");
            self.controllers.remove(&id);
            if self.capture_owner() == Some(&id) {
                self.capture = None;
            }
            if self.focused.as_ref() == Some(&id) {
                self.focused = None;
            }
        }

        for (index, session) in incoming.iter().enumerate() {
            if self.store.contains(&session.id) {
                continue;
            }
            let position = cascade_position(self.viewport, index, &self.config.cascade);
            let z_index = self.store.next_z_index();
            self.store.upsert_if_absent(
                session.id.clone(),
                WindowState::new(position, self.config.card, z_index),
            );
            self.controllers.entry(session.id.clone()).or_default();
            self.focused = Some(session.id.clone());
            tracing::debug!(
                window_id = ?session.id,
                x = position.x,
                y = position.y,
                z_index,
                "provisioned window"
            );
        }

        self.sessions = incoming;
    }

    /// The host's docked session renders in its own panel, never here.
    pub fn set_docked_session(&mut self, docked: Option<Id>) {
        if docked.is_some() && self.capture_owner() == docked.as_ref() {
            self.finish_gesture();
        }
        self.docked = docked;
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Raise and reveal a window and tell the host. Unknown ids do nothing.
    pub fn focus_window(&mut self, id: &Id) -> bool {
        let Some(z_index) = self.store.focus(id) else {
            return false;
        };
        tracing::debug!(window_id = ?id, z_index, "focused window");
        self.focused = Some(id.clone());
        self.events.push(HostEvent::Focus(id.clone()));
        true
    }

    pub fn minimize_window(&mut self, id: &Id) -> bool {
        if !self.store.minimize(id) {
            return false;
        }
        tracing::debug!(window_id = ?id, "minimized window");
        self.tear_down_view(id);
        true
    }

    pub fn hide_window(&mut self, id: &Id) -> bool {
        if !self.store.hide(id) {
            return false;
        }
        tracing::debug!(window_id = ?id, "hid window");
        self.tear_down_view(id);
        true
    }

    /// Hide through a close affordance and let the host know.
    pub fn close_window(&mut self, id: &Id) -> bool {
        if !self.hide_window(id) {
            return false;
        }
        self.events.push(HostEvent::RequestClose(id.clone()));
        true
    }

    /// Ask the host to drop the session. The window goes away on the next
    /// `sync_sessions` that no longer lists it.
    pub fn end_session(&mut self, id: &Id) -> bool {
        if !self.store.contains(id) {
            return false;
        }
        tracing::debug!(window_id = ?id, "requested end of session");
        self.events.push(HostEvent::RequestEndSession(id.clone()));
        true
    }

    /// Flip maximize for a floating window and focus it. Returns the new flag.
    pub fn toggle_maximize(&mut self, id: &Id) -> bool {
        if !self.store.get(id).is_some_and(WindowState::is_floating) {
            return false;
        }
        let maximized = self
            .controllers
            .entry(id.clone())
            .or_default()
            .toggle_maximize();
        tracing::debug!(window_id = ?id, maximized, "toggled maximize");
        self.focus_window(id);
        maximized
    }

    fn tear_down_view(&mut self, id: &Id) {
        if self.capture_owner() == Some(id) {
            self.finish_gesture();
        }
        if let Some(controller) = self.controllers.get_mut(id) {
            controller.reset();
        }
        if self.focused.as_ref() == Some(id) {
            self.focused = None;
        }
    }

    /// Route one pointer event. Returns whether the window layer consumed it.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        match event.kind {
            PointerKind::Down | PointerKind::DoubleClick => {
                if self.capture.is_some() {
                    tracing::debug!("pointer down with a gesture still in flight");
                    self.finish_gesture();
                }
                self.pointer_down(event.position, event.kind == PointerKind::DoubleClick)
            }
            PointerKind::Move => self.pointer_move(event.position),
            PointerKind::Up => self.finish_gesture(),
        }
    }

    fn pointer_down(&mut self, point: Point, double_click: bool) -> bool {
        let pill = self
            .dock_pills()
            .into_iter()
            .find_map(|(index, rect)| {
                dock_hit(rect, point, &self.config.dock).map(|hit| (index, hit))
            });
        if let Some((index, hit)) = pill {
            let id = self.sessions[index].id.clone();
            match hit {
                DockHit::Restore => {
                    self.restore_window(&id);
                }
                DockHit::Close => {
                    self.close_window(&id);
                }
            }
            return true;
        }

        let Some(layer) = self
            .floating_layers()
            .into_iter()
            .rev()
            .find(|layer| rect_contains(layer.rect, point))
        else {
            return false;
        };
        let id = self.sessions[layer.session].id.clone();
        match chrome_hit(layer.rect, point, &self.config.chrome, !layer.maximized) {
            Some(ChromeHit::Button(HeaderButton::Close)) => {
                self.close_window(&id);
            }
            Some(ChromeHit::Button(HeaderButton::Maximize)) => {
                self.toggle_maximize(&id);
            }
            Some(ChromeHit::Button(HeaderButton::Minimize)) => {
                self.minimize_window(&id);
            }
            Some(ChromeHit::Button(HeaderButton::EndSession)) => {
                self.end_session(&id);
            }
            Some(ChromeHit::Header) if double_click => {
                self.toggle_maximize(&id);
            }
            Some(ChromeHit::Header) => self.begin_gesture(&id, point, GestureKind::Drag),
            Some(ChromeHit::ResizeGrip) => self.begin_gesture(&id, point, GestureKind::Resize),
            Some(ChromeHit::Body) | None => self.focus_if_unfocused(&id),
        }
        true
    }

    fn focus_if_unfocused(&mut self, id: &Id) {
        if self.focused.as_ref() != Some(id) {
            self.focus_window(id);
        }
    }

    fn begin_gesture(&mut self, id: &Id, point: Point, kind: GestureKind) {
        let Some(state) = self.store.get(id).copied() else {
            return;
        };
        let controller = self.controllers.entry(id.clone()).or_default();
        let outcome = match kind {
            GestureKind::Drag => controller.begin_drag(&state, point),
            GestureKind::Resize => controller.begin_resize(&state, point),
        };
        if outcome != GestureOutcome::Started {
            self.focus_if_unfocused(id);
            return;
        }
        tracing::debug!(window_id = ?id, ?kind, x = point.x, y = point.y, "gesture started");
        self.capture = Some(PointerCapture::acquire(id.clone()));
        self.focus_window(id);
    }

    fn pointer_move(&mut self, point: Point) -> bool {
        let Some(capture) = self.capture.as_ref() else {
            return false;
        };
        let limits = GestureLimits {
            viewport: self.viewport,
            min_size: self.config.min_size,
            min_visible_height: self.config.min_visible_height,
        };
        let id = capture.owner();
        let Some(controller) = self.controllers.get_mut(id) else {
            return true;
        };
        match controller.pointer_move(point, &limits) {
            GestureOutcome::Moved(live) => {
                tracing::trace!(window_id = ?id, x = live.x, y = live.y, "dragging");
            }
            GestureOutcome::Resized(live) => {
                tracing::trace!(window_id = ?id, size = %live, "resizing");
            }
            _ => {}
        }
        true
    }

    /// End the gesture in flight, commit its live value and release the
    /// capture. Every way a gesture can end goes through here. Returns whether
    /// a capture was held.
    pub fn finish_gesture(&mut self) -> bool {
        let Some(capture) = self.capture.take() else {
            return false;
        };
        let id = capture.owner();
        let Some(controller) = self.controllers.get_mut(id) else {
            return true;
        };
        match controller.pointer_up() {
            GestureOutcome::CommitPosition(position) => {
                self.store.set_position(id, position);
                tracing::debug!(window_id = ?id, x = position.x, y = position.y, "committed drag");
            }
            GestureOutcome::CommitSize(size) => {
                self.store.set_size(id, size);
                tracing::debug!(window_id = ?id, %size, "committed resize");
            }
            _ => {}
        }
        true
    }

    /// Sessions shown as free-standing windows, in host order.
    pub fn floating_sessions(&self) -> Vec<&Session<Id>> {
        self.sessions_where(WindowState::is_floating)
    }

    /// Sessions shown as dock pills, in host order.
    pub fn minimized_sessions(&self) -> Vec<&Session<Id>> {
        self.sessions_where(WindowState::is_dock_pill)
    }

    fn sessions_where(&self, bucket: fn(&WindowState) -> bool) -> Vec<&Session<Id>> {
        self.sessions
            .iter()
            .filter(|session| self.docked.as_ref() != Some(&session.id))
            .filter(|session| self.store.get(&session.id).is_some_and(bucket))
            .collect()
    }

    fn floating_layers(&self) -> Vec<Layer> {
        let mut layers: Vec<Layer> = self
            .sessions
            .iter()
            .enumerate()
            .filter(|(_, session)| self.docked.as_ref() != Some(&session.id))
            .filter_map(|(index, session)| {
                let state = self.store.get(&session.id)?;
                if !state.is_floating() {
                    return None;
                }
                let controller = self.controllers.get(&session.id).copied().unwrap_or_default();
                let maximized = controller.is_maximized();
                let (rect, z_index) = if maximized {
                    (
                        maximized_rect(self.viewport, self.config.maximized_inset),
                        state.z_index.saturating_add(MAXIMIZED_Z_BOOST),
                    )
                } else {
                    (controller.live_rect(state), state.z_index)
                };
                Some(Layer {
                    session: index,
                    rect,
                    z_index,
                    maximized,
                })
            })
            .collect();
        layers.sort_by_key(|layer| layer.z_index);
        layers
    }

    fn dock_pills(&self) -> Vec<(usize, Rect)> {
        let indices: Vec<usize> = self
            .sessions
            .iter()
            .enumerate()
            .filter(|(_, session)| self.docked.as_ref() != Some(&session.id))
            .filter(|(_, session)| {
                self.store
                    .get(&session.id)
                    .is_some_and(WindowState::is_dock_pill)
            })
            .map(|(index, _)| index)
            .collect();
        let slots = dock_slots(self.viewport, indices.len(), &self.config.dock);
        indices.into_iter().zip(slots).collect()
    }

    pub fn render_plan(&self) -> RenderPlan<'_, Id> {
        let floating = self
            .floating_layers()
            .into_iter()
            .map(|layer| {
                let session = &self.sessions[layer.session];
                FloatingView {
                    session,
                    rect: layer.rect,
                    z_index: layer.z_index,
                    focused: self.focused.as_ref() == Some(&session.id),
                    maximized: layer.maximized,
                    gesture: self
                        .controllers
                        .get(&session.id)
                        .map(WindowController::gesture)
                        .unwrap_or_default(),
                }
            })
            .collect();
        let dock = self
            .dock_pills()
            .into_iter()
            .map(|(index, rect)| DockPillView {
                session: &self.sessions[index],
                rect,
            })
            .collect();
        RenderPlan { floating, dock }
    }

    /// Drain queued notifications. The only way events reach the host.
    pub fn take_host_events(&mut self) -> Vec<HostEvent<Id>> {
        std::mem::take(&mut self.events)
    }
}

impl<Id: Clone + Ord + Debug> WindowCommands<Id> for WindowManager<Id> {
    fn organize_windows(&mut self) {
        self.finish_gesture();
        let ids: Vec<Id> = self
            .sessions
            .iter()
            .filter(|session| self.docked.as_ref() != Some(&session.id))
            .filter(|session| self.store.get(&session.id).is_none_or(|w| w.visible))
            .map(|session| session.id.clone())
            .collect();
        let layout = organize_grid(self.viewport, ids, &self.config.grid);
        tracing::debug!(count = layout.len(), viewport = %self.viewport, "organized windows");
        self.store.arrange(layout);
    }

    fn restore_window(&mut self, id: &Id) {
        self.focus_window(id);
    }

    fn hide_all_windows(&mut self) {
        self.finish_gesture();
        let hidden = self.store.hide_all();
        for controller in self.controllers.values_mut() {
            controller.reset();
        }
        self.focused = None;
        tracing::debug!(hidden, "hid all windows");
    }
}
