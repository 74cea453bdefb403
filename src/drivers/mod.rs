pub mod console;

use std::io;
use std::time::Duration;

use ::crossterm::event::Event;
use ratatui::backend::Backend;

use crate::ui::UiFrame;

pub trait InputDriver {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;
    fn read(&mut self) -> io::Result<Event>;
    fn set_mouse_capture(&mut self, _enabled: bool) -> io::Result<()> {
        Ok(())
    }
}

impl<T: InputDriver + ?Sized> InputDriver for &mut T {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        (**self).poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        (**self).read()
    }

    fn set_mouse_capture(&mut self, enabled: bool) -> io::Result<()> {
        (**self).set_mouse_capture(enabled)
    }
}

pub trait OutputDriver {
    type Backend: Backend;

    fn enter(&mut self) -> io::Result<()>;
    fn exit(&mut self) -> io::Result<()>;

    fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(UiFrame<'_>);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    struct Dummy {
        capture: Option<bool>,
    }

    impl InputDriver for Dummy {
        fn poll(&mut self, _timeout: Duration) -> io::Result<bool> {
            Ok(true)
        }

        fn read(&mut self) -> io::Result<Event> {
            Ok(Event::Key(KeyEvent::new(
                KeyCode::Char('x'),
                KeyModifiers::NONE,
            )))
        }

        fn set_mouse_capture(&mut self, enabled: bool) -> io::Result<()> {
            self.capture = Some(enabled);
            Ok(())
        }
    }

    fn drive<D: InputDriver>(mut driver: D) -> io::Result<Event> {
        driver.set_mouse_capture(false)?;
        driver.read()
    }

    #[test]
    fn blanket_impl_for_mut_ref_works() {
        let mut d = Dummy { capture: None };
        let ev = drive(&mut d).unwrap();
        assert!(matches!(ev, Event::Key(k) if k.code == KeyCode::Char('x')));
        assert_eq!(d.capture, Some(false));
    }
}
