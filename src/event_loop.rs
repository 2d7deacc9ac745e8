use std::io;
use std::time::{Duration, Instant};

use crossterm::event::Event;

use crate::drivers::InputDriver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    Continue,
    /// Keep running, and make sure the handler is called again no later
    /// than the given instant even if no input arrives.
    WaitUntil(Instant),
    Quit,
}

/// Single-threaded message pump for the host.
///
/// The handler is called with `None` once per iteration (time to draw and to
/// fire timers) and with `Some(event)` for every input event. The wait between
/// iterations is the poll interval, shortened to the earliest deadline the
/// handler asked for.
pub struct EventLoop<D> {
    driver: D,
    poll_interval: Duration,
    wake_at: Option<Instant>,
}

impl<D: InputDriver> EventLoop<D> {
    pub fn new(driver: D, poll_interval: Duration) -> Self {
        Self {
            driver,
            poll_interval,
            wake_at: None,
        }
    }

    pub fn driver(&mut self) -> &mut D {
        &mut self.driver
    }

    fn timeout(&self, now: Instant) -> Duration {
        match self.wake_at {
            Some(at) => at.saturating_duration_since(now).min(self.poll_interval),
            None => self.poll_interval,
        }
    }

    /// Apply a handler result. Returns true when the loop should stop.
    fn apply(&mut self, flow: ControlFlow) -> bool {
        match flow {
            ControlFlow::Quit => true,
            ControlFlow::WaitUntil(at) => {
                self.wake_at = Some(self.wake_at.map_or(at, |current| current.min(at)));
                false
            }
            ControlFlow::Continue => false,
        }
    }

    pub fn run<F>(&mut self, mut handler: F) -> io::Result<()>
    where
        F: FnMut(&mut D, Option<Event>) -> io::Result<ControlFlow>,
    {
        loop {
            self.wake_at = None;
            let flow = handler(&mut self.driver, None)?;
            if self.apply(flow) {
                return Ok(());
            }

            if self.driver.poll(self.timeout(Instant::now()))? {
                // drain bursts (drags) before the next draw
                loop {
                    let event = self.driver.read()?;
                    let flow = handler(&mut self.driver, Some(event))?;
                    if self.apply(flow) {
                        return Ok(());
                    }
                    if !self.driver.poll(Duration::ZERO)? {
                        break;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::collections::VecDeque;

    #[derive(Default)]
    struct Scripted {
        events: VecDeque<Event>,
        timeouts: Vec<Duration>,
    }

    impl InputDriver for Scripted {
        fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
            self.timeouts.push(timeout);
            Ok(!self.events.is_empty())
        }

        fn read(&mut self) -> io::Result<Event> {
            self.events
                .pop_front()
                .ok_or_else(|| io::Error::other("script exhausted"))
        }
    }

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    #[test]
    fn drains_events_then_quits() {
        let driver = Scripted {
            events: VecDeque::from([key('a'), key('b'), key('q')]),
            ..Scripted::default()
        };
        let mut event_loop = EventLoop::new(driver, Duration::from_millis(50));
        let mut seen = Vec::new();
        let mut idle = 0;
        event_loop
            .run(|_, event| {
                match event {
                    Some(Event::Key(k)) if k.code == KeyCode::Char('q') => {
                        return Ok(ControlFlow::Quit);
                    }
                    Some(Event::Key(k)) => seen.push(k.code),
                    _ => idle += 1,
                }
                Ok(ControlFlow::Continue)
            })
            .unwrap();
        assert_eq!(seen, vec![KeyCode::Char('a'), KeyCode::Char('b')]);
        assert_eq!(idle, 1);
    }

    #[test]
    fn deadline_shortens_poll_timeout() {
        let mut event_loop = EventLoop::new(Scripted::default(), Duration::from_secs(5));
        let mut calls = 0;
        event_loop
            .run(|_, _| {
                calls += 1;
                Ok(match calls {
                    1 => ControlFlow::WaitUntil(Instant::now() + Duration::from_millis(20)),
                    2 => ControlFlow::Continue,
                    _ => ControlFlow::Quit,
                })
            })
            .unwrap();
        let timeouts = &event_loop.driver().timeouts;
        assert_eq!(timeouts.len(), 2);
        assert!(timeouts[0] <= Duration::from_millis(20));
        assert_eq!(timeouts[1], Duration::from_secs(5));
    }
}
