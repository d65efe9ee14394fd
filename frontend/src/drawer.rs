//! Open/close logic of the mobile navigation drawer.
//!
//! The machine never touches the DOM. It takes events plus a snapshot of what
//! the page looks like right now and answers with [`Effect`]s for the component
//! to carry out. The end of the slide animation is a [`DrawerEvent::Settle`]
//! delivered through a [`Scheduler`], so tests can settle transitions by hand.

/// Duration of the panel's slide transition. Focus moves only after it.
pub const SLIDE_DURATION_MS: u32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Closed,
    Opening,
    Open,
    Closing,
}

impl Phase {
    pub fn is_open(self) -> bool {
        matches!(self, Phase::Opening | Phase::Open)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Escape,
    Tab,
    Other,
}

impl Key {
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Key::Escape,
            "Tab" => Key::Tab,
            _ => Key::Other,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawerEvent {
    Toggle,
    Open,
    Close,
    KeyDown { key: Key, shift: bool },
    OverlayClick,
    LinkClick,
    Settle { generation: u64 },
}

/// What the page looks like when an event arrives.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Surroundings {
    pub scroll_y: f64,
    /// Number of focusable elements inside the panel.
    pub focusable: usize,
    /// Index of the focused element among them, if focus is inside the panel.
    pub active: Option<usize>,
    /// Focus sits on a control outside the panel. False when nothing but the
    /// document body has focus, as after a tap in Safari.
    pub focus_on_control: bool,
}

/// Where focus goes once the drawer has closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusTarget {
    /// The control that had focus when the drawer opened.
    Previous,
    Toggle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Effect {
    RememberFocus,
    LockScroll { offset: f64 },
    UnlockScroll { offset: f64 },
    AttachKeyListener,
    DetachKeyListener,
    FocusPanelItem(usize),
    RestoreFocus(FocusTarget),
    PreventDefault,
}

pub trait Scheduler {
    fn schedule(&mut self, delay_ms: u32, generation: u64);
}

#[derive(Debug)]
pub struct DrawerMachine {
    phase: Phase,
    generation: u64,
    locked_offset: Option<f64>,
    restore_to: FocusTarget,
}

impl Default for DrawerMachine {
    fn default() -> Self {
        Self {
            phase: Phase::Closed,
            generation: 0,
            locked_offset: None,
            restore_to: FocusTarget::Toggle,
        }
    }
}

impl DrawerMachine {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase.is_open()
    }

    pub fn handle(
        &mut self,
        event: DrawerEvent,
        now: &Surroundings,
        scheduler: &mut impl Scheduler,
    ) -> Vec<Effect> {
        match event {
            DrawerEvent::Toggle if self.is_open() => self.close(scheduler),
            DrawerEvent::Toggle | DrawerEvent::Open if !self.is_open() => {
                self.open(now, scheduler)
            }
            DrawerEvent::Close | DrawerEvent::OverlayClick | DrawerEvent::LinkClick
                if self.is_open() =>
            {
                self.close(scheduler)
            }
            DrawerEvent::KeyDown { key, shift } if self.is_open() => match key {
                Key::Escape => self.close(scheduler),
                Key::Tab => trap_tab(now, shift),
                Key::Other => Vec::new(),
            },
            DrawerEvent::Settle { generation } if generation == self.generation => self.settle(now),
            _ => Vec::new(),
        }
    }

    fn open(&mut self, now: &Surroundings, scheduler: &mut impl Scheduler) -> Vec<Effect> {
        self.phase = Phase::Opening;
        self.generation += 1;
        scheduler.schedule(SLIDE_DURATION_MS, self.generation);

        let offset = now.scroll_y;
        self.locked_offset = Some(offset);

        let mut effects = Vec::with_capacity(3);
        if now.focus_on_control {
            self.restore_to = FocusTarget::Previous;
            effects.push(Effect::RememberFocus);
        } else {
            self.restore_to = FocusTarget::Toggle;
        }
        effects.push(Effect::LockScroll { offset });
        effects.push(Effect::AttachKeyListener);
        effects
    }

    fn close(&mut self, scheduler: &mut impl Scheduler) -> Vec<Effect> {
        self.phase = Phase::Closing;
        self.generation += 1;
        scheduler.schedule(SLIDE_DURATION_MS, self.generation);

        let offset = self.locked_offset.take().unwrap_or(0.0);
        vec![Effect::UnlockScroll { offset }, Effect::DetachKeyListener]
    }

    fn settle(&mut self, now: &Surroundings) -> Vec<Effect> {
        match self.phase {
            Phase::Opening => {
                self.phase = Phase::Open;
                if now.focusable > 0 {
                    vec![Effect::FocusPanelItem(0)]
                } else {
                    Vec::new()
                }
            }
            Phase::Closing => {
                self.phase = Phase::Closed;
                vec![Effect::RestoreFocus(self.restore_to)]
            }
            Phase::Open | Phase::Closed => Vec::new(),
        }
    }
}

fn trap_tab(now: &Surroundings, shift: bool) -> Vec<Effect> {
    if now.focusable == 0 {
        return Vec::new();
    }
    let last = now.focusable - 1;
    let target = match (now.active, shift) {
        (Some(0), true) => last,
        (Some(i), false) if i == last => 0,
        (Some(_), _) => return Vec::new(),
        // focus wandered outside the panel, pull it back in
        (None, true) => last,
        (None, false) => 0,
    };
    vec![Effect::PreventDefault, Effect::FocusPanelItem(target)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct ManualScheduler {
        pending: Vec<(u32, u64)>,
    }

    impl Scheduler for ManualScheduler {
        fn schedule(&mut self, delay_ms: u32, generation: u64) {
            self.pending.push((delay_ms, generation));
        }
    }

    impl ManualScheduler {
        /// Fires every pending timer in order, like letting the clock run.
        fn run(&mut self, machine: &mut DrawerMachine, now: &Surroundings) -> Vec<Effect> {
            let mut effects = Vec::new();
            for (_, generation) in std::mem::take(&mut self.pending) {
                effects.extend(machine.handle(DrawerEvent::Settle { generation }, now, self));
            }
            effects
        }
    }

    fn page(scroll_y: f64, focusable: usize, active: Option<usize>) -> Surroundings {
        Surroundings {
            scroll_y,
            focusable,
            active,
            focus_on_control: false,
        }
    }

    fn close_with_escape(
        machine: &mut DrawerMachine,
        scheduler: &mut ManualScheduler,
        now: &Surroundings,
    ) -> Vec<Effect> {
        let key = DrawerEvent::KeyDown {
            key: Key::Escape,
            shift: false,
        };
        machine.handle(key, now, scheduler);
        scheduler.run(machine, now)
    }

    fn opened(now: &Surroundings) -> (DrawerMachine, ManualScheduler) {
        let mut machine = DrawerMachine::default();
        let mut scheduler = ManualScheduler::default();
        machine.handle(DrawerEvent::Toggle, now, &mut scheduler);
        scheduler.run(&mut machine, now);
        assert_eq!(machine.phase(), Phase::Open);
        (machine, scheduler)
    }

    #[test]
    fn starts_closed() {
        let machine = DrawerMachine::default();
        assert_eq!(machine.phase(), Phase::Closed);
        assert!(!machine.is_open());
    }

    #[test]
    fn opening_locks_scroll_and_focuses_first_item_after_slide() {
        let mut machine = DrawerMachine::default();
        let mut scheduler = ManualScheduler::default();
        let now = Surroundings {
            focus_on_control: true,
            ..page(840.0, 9, None)
        };

        let effects = machine.handle(DrawerEvent::Toggle, &now, &mut scheduler);
        assert_eq!(
            effects,
            vec![
                Effect::RememberFocus,
                Effect::LockScroll { offset: 840.0 },
                Effect::AttachKeyListener,
            ]
        );
        assert_eq!(machine.phase(), Phase::Opening);
        assert_eq!(scheduler.pending, vec![(SLIDE_DURATION_MS, 1)]);

        let settled = scheduler.run(&mut machine, &now);
        assert_eq!(settled, vec![Effect::FocusPanelItem(0)]);
        assert_eq!(machine.phase(), Phase::Open);
    }

    #[test]
    fn escape_closes_and_returns_focus_to_trigger() {
        let now = page(0.0, 9, Some(3));
        let (mut machine, mut scheduler) = opened(&now);

        let effects = machine.handle(
            DrawerEvent::KeyDown {
                key: Key::Escape,
                shift: false,
            },
            &now,
            &mut scheduler,
        );
        assert_eq!(
            effects,
            vec![Effect::UnlockScroll { offset: 0.0 }, Effect::DetachKeyListener]
        );
        assert_eq!(machine.phase(), Phase::Closing);
        assert!(!machine.is_open());

        assert_eq!(
            scheduler.run(&mut machine, &now),
            vec![Effect::RestoreFocus(FocusTarget::Toggle)]
        );
        assert_eq!(machine.phase(), Phase::Closed);
    }

    #[test]
    fn tap_without_focus_returns_focus_to_toggle() {
        let mut machine = DrawerMachine::default();
        let mut scheduler = ManualScheduler::default();

        // only the body was focused when the toggle was tapped
        let tapped = page(0.0, 9, None);
        let effects = machine.handle(DrawerEvent::Toggle, &tapped, &mut scheduler);
        assert!(!effects.contains(&Effect::RememberFocus));
        scheduler.run(&mut machine, &tapped);

        let closed = close_with_escape(&mut machine, &mut scheduler, &page(0.0, 9, Some(2)));
        assert_eq!(closed, vec![Effect::RestoreFocus(FocusTarget::Toggle)]);
    }

    #[test]
    fn keyboard_open_returns_focus_to_previous_control() {
        let mut machine = DrawerMachine::default();
        let mut scheduler = ManualScheduler::default();

        let keyboard = Surroundings {
            focus_on_control: true,
            ..page(0.0, 9, None)
        };
        let effects = machine.handle(DrawerEvent::Toggle, &keyboard, &mut scheduler);
        assert_eq!(effects[0], Effect::RememberFocus);
        scheduler.run(&mut machine, &keyboard);

        let closed = close_with_escape(&mut machine, &mut scheduler, &page(0.0, 9, Some(0)));
        assert_eq!(closed, vec![Effect::RestoreFocus(FocusTarget::Previous)]);

        // the next open starts from a tap, so the old control is forgotten
        machine.handle(DrawerEvent::Toggle, &page(0.0, 9, None), &mut scheduler);
        scheduler.run(&mut machine, &page(0.0, 9, None));
        let closed = close_with_escape(&mut machine, &mut scheduler, &page(0.0, 9, Some(0)));
        assert_eq!(closed, vec![Effect::RestoreFocus(FocusTarget::Toggle)]);
    }

    #[test]
    fn tab_from_last_wraps_to_first() {
        let now = page(0.0, 9, Some(8));
        let (mut machine, mut scheduler) = opened(&now);
        let effects = machine.handle(
            DrawerEvent::KeyDown {
                key: Key::Tab,
                shift: false,
            },
            &now,
            &mut scheduler,
        );
        assert_eq!(effects, vec![Effect::PreventDefault, Effect::FocusPanelItem(0)]);
        assert!(machine.is_open());
    }

    #[test]
    fn shift_tab_from_first_wraps_to_last() {
        let now = page(0.0, 9, Some(0));
        let (mut machine, mut scheduler) = opened(&now);
        let effects = machine.handle(
            DrawerEvent::KeyDown {
                key: Key::Tab,
                shift: true,
            },
            &now,
            &mut scheduler,
        );
        assert_eq!(effects, vec![Effect::PreventDefault, Effect::FocusPanelItem(8)]);
    }

    #[test]
    fn tab_in_the_middle_is_left_alone() {
        let now = page(0.0, 9, Some(4));
        let (mut machine, mut scheduler) = opened(&now);
        for shift in [false, true] {
            let effects = machine.handle(
                DrawerEvent::KeyDown {
                    key: Key::Tab,
                    shift,
                },
                &now,
                &mut scheduler,
            );
            assert!(effects.is_empty());
        }
    }

    #[test]
    fn tab_with_focus_outside_panel_pulls_it_in() {
        let now = page(0.0, 5, None);
        let (mut machine, mut scheduler) = opened(&now);
        let effects = machine.handle(
            DrawerEvent::KeyDown {
                key: Key::Tab,
                shift: true,
            },
            &now,
            &mut scheduler,
        );
        assert_eq!(effects, vec![Effect::PreventDefault, Effect::FocusPanelItem(4)]);
    }

    #[test]
    fn keys_are_ignored_while_closed() {
        let mut machine = DrawerMachine::default();
        let mut scheduler = ManualScheduler::default();
        let now = page(0.0, 9, Some(8));
        for key in [Key::Escape, Key::Tab] {
            let effects = machine.handle(
                DrawerEvent::KeyDown { key, shift: false },
                &now,
                &mut scheduler,
            );
            assert!(effects.is_empty());
        }
        assert!(scheduler.pending.is_empty());
    }

    #[test]
    fn toggle_parity_decides_final_state() {
        let now = page(120.0, 9, None);
        for toggles in 0..7 {
            let mut machine = DrawerMachine::default();
            let mut scheduler = ManualScheduler::default();
            for _ in 0..toggles {
                machine.handle(DrawerEvent::Toggle, &now, &mut scheduler);
            }
            scheduler.run(&mut machine, &now);

            let expected = if toggles % 2 == 1 {
                Phase::Open
            } else {
                Phase::Closed
            };
            assert_eq!(machine.phase(), expected, "after {} toggles", toggles);
        }
    }

    #[test]
    fn stale_settle_is_ignored() {
        let now = page(0.0, 9, None);
        let mut machine = DrawerMachine::default();
        let mut scheduler = ManualScheduler::default();

        machine.handle(DrawerEvent::Toggle, &now, &mut scheduler);
        machine.handle(DrawerEvent::Toggle, &now, &mut scheduler);
        assert_eq!(machine.phase(), Phase::Closing);

        // the opening timer fires late and must not focus the hidden panel
        let stale = machine.handle(DrawerEvent::Settle { generation: 1 }, &now, &mut scheduler);
        assert!(stale.is_empty());
        assert_eq!(machine.phase(), Phase::Closing);
    }

    #[test]
    fn closing_restores_exact_scroll_offset() {
        let mut machine = DrawerMachine::default();
        let mut scheduler = ManualScheduler::default();

        let opened = machine.handle(DrawerEvent::Open, &page(1337.5, 9, None), &mut scheduler);
        assert!(opened.contains(&Effect::LockScroll { offset: 1337.5 }));

        // body is fixed while open, so the page reports no scroll
        let effects = machine.handle(DrawerEvent::OverlayClick, &page(0.0, 9, None), &mut scheduler);
        assert_eq!(effects[0], Effect::UnlockScroll { offset: 1337.5 });
    }

    #[test]
    fn every_close_trigger_closes() {
        let now = page(0.0, 9, Some(2));
        for event in [
            DrawerEvent::Toggle,
            DrawerEvent::Close,
            DrawerEvent::OverlayClick,
            DrawerEvent::LinkClick,
        ] {
            let (mut machine, mut scheduler) = opened(&now);
            machine.handle(event, &now, &mut scheduler);
            assert_eq!(machine.phase(), Phase::Closing, "{:?}", event);
        }
    }

    #[test]
    fn open_while_open_changes_nothing() {
        let now = page(0.0, 9, None);
        let (mut machine, mut scheduler) = opened(&now);
        assert!(machine.handle(DrawerEvent::Open, &now, &mut scheduler).is_empty());
        assert!(scheduler.pending.is_empty());
        assert_eq!(machine.phase(), Phase::Open);
    }

    #[test]
    fn listeners_attach_once_per_open_cycle() {
        let now = page(0.0, 9, None);
        let mut machine = DrawerMachine::default();
        let mut scheduler = ManualScheduler::default();
        let mut attached = 0i32;

        for _ in 0..10 {
            for effect in machine.handle(DrawerEvent::Toggle, &now, &mut scheduler) {
                match effect {
                    Effect::AttachKeyListener => attached += 1,
                    Effect::DetachKeyListener => attached -= 1,
                    _ => {}
                }
                assert!((0..=1).contains(&attached));
            }
        }
        assert_eq!(attached, 0);
    }

    #[test]
    fn key_names_map_to_keys() {
        assert_eq!(Key::from_name("Escape"), Key::Escape);
        assert_eq!(Key::from_name("Esc"), Key::Escape);
        assert_eq!(Key::from_name("Tab"), Key::Tab);
        assert_eq!(Key::from_name("Enter"), Key::Other);
    }
}
