use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Instant;

use float_wm::input::PointerButton;
use float_wm::layout::RectSpec;
use float_wm::window::GeometryDefaults;
use float_wm::{FloatingWindow, Point, Viewport, WindowAdapter, WindowManager, WmConfig};

fn window(title: &str, x: i32, y: i32) -> FloatingWindow {
    FloatingWindow::new(
        title,
        RectSpec::default().with_position(x, y).with_size(300, 200),
        &GeometryDefaults::pixels(),
    )
}

fn titles(wm: &WindowManager<FloatingWindow>) -> Vec<&str> {
    wm.windows().map(|w| w.title()).collect()
}

fn assert_stack_consistent(wm: &WindowManager<FloatingWindow>) {
    let top = wm.len().checked_sub(1);
    for (i, w) in wm.windows().enumerate() {
        assert_eq!(w.z_index(), i, "z-index of {}", w.title());
        assert_eq!(w.is_focused(), Some(i) == top, "focus of {}", w.title());
    }
}

fn click(wm: &mut WindowManager<FloatingWindow>, at: Point, now: Instant) {
    wm.pointer_down(at, PointerButton::Left, now);
    wm.pointer_up(at, PointerButton::Left, now);
}

#[test]
fn unregistering_a_middle_window_shifts_the_stack() {
    let mut wm = WindowManager::new(Viewport::new(1280, 800));
    for (i, name) in ["a", "b", "c", "d", "e"].iter().enumerate() {
        assert_eq!(wm.register_window(window(name, 10 + 20 * i as i32, 10)), Some(i));
    }
    assert_stack_consistent(&wm);

    let removed = wm.unregister_window(2).expect("window c");
    assert_eq!(removed.title(), "c");
    assert_eq!(titles(&wm), vec!["a", "b", "d", "e"]);
    assert_eq!(wm.focused_index(), Some(3));
    assert_stack_consistent(&wm);
}

#[test]
fn stale_indices_are_ignored() {
    let mut wm = WindowManager::new(Viewport::new(1280, 800));
    wm.register_window(window("only", 10, 10));
    assert!(wm.unregister_window(1).is_none());
    assert!(wm.raise_window(7).is_none());
    assert_eq!(titles(&wm), vec!["only"]);
    assert!(wm.unregister_window(0).is_some());
    assert!(wm.is_empty());
    assert_eq!(wm.focused_index(), None);
}

#[test]
fn pressing_a_lower_window_raises_it() {
    let mut wm = WindowManager::new(Viewport::new(1280, 800));
    wm.register_window(window("left", 100, 100));
    wm.register_window(window("right", 600, 100));
    wm.register_window(window("far", 100, 500));

    click(&mut wm, Point::new(200, 200), Instant::now());
    assert_eq!(titles(&wm), vec!["right", "far", "left"]);
    assert_stack_consistent(&wm);

    // overlapping: the upper window takes the press
    wm.register_window(window("cover", 150, 150));
    click(&mut wm, Point::new(200, 200), Instant::now());
    assert_eq!(wm.window(3).map(|w| w.title()), Some("cover"));
}

#[test]
fn raise_window_focuses_and_reports_new_index() {
    let mut wm = WindowManager::new(Viewport::new(1280, 800));
    for name in ["a", "b", "c"] {
        wm.register_window(window(name, 10, 10));
    }
    assert_eq!(wm.raise_window(0), Some(2));
    assert_eq!(titles(&wm), vec!["b", "c", "a"]);
    assert_stack_consistent(&wm);
    assert_eq!(wm.raise_window(2), Some(2));
    assert_eq!(titles(&wm), vec!["b", "c", "a"]);
}

#[test]
fn focus_hooks_fire_on_transitions_only() {
    let focus = Rc::new(Cell::new(0));
    let blur = Rc::new(Cell::new(0));
    let (f, b) = (focus.clone(), blur.clone());
    let watched = window("watched", 10, 10)
        .on_focus(move || f.set(f.get() + 1))
        .on_blur(move || b.set(b.get() + 1));

    let mut wm = WindowManager::new(Viewport::new(1280, 800));
    wm.register_window(watched);
    assert_eq!((focus.get(), blur.get()), (1, 0));
    wm.raise_window(0);
    assert_eq!((focus.get(), blur.get()), (1, 0));
    wm.register_window(window("other", 500, 500));
    assert_eq!((focus.get(), blur.get()), (1, 1));
    wm.raise_window(0);
    assert_eq!((focus.get(), blur.get()), (2, 1));
}

fn hook_log(wm: &mut WindowManager<FloatingWindow>, log: &Rc<RefCell<Vec<String>>>, name: &str) {
    let (f, b) = (log.clone(), log.clone());
    let (on, off) = (format!("focus {name}"), format!("blur {name}"));
    let window = window(name, 10, 10)
        .on_focus(move || f.borrow_mut().push(on.clone()))
        .on_blur(move || b.borrow_mut().push(off.clone()));
    wm.register_window(window);
}

#[test]
fn removing_a_background_window_fires_no_focus_hooks() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut wm = WindowManager::new(Viewport::new(1280, 800));
    for name in ["a", "b", "c"] {
        hook_log(&mut wm, &log, name);
    }
    log.borrow_mut().clear();

    let removed = wm.unregister_window(0).expect("window a");
    assert!(log.borrow().is_empty(), "hooks fired: {:?}", log.borrow());
    assert!(!removed.is_focused());
    assert_eq!(titles(&wm), vec!["b", "c"]);
    assert_stack_consistent(&wm);

    // removing the top hands focus to the next one down
    wm.unregister_window(1);
    assert_eq!(*log.borrow(), vec!["focus b".to_string()]);
    assert_stack_consistent(&wm);
}

#[test]
fn close_button_closes_unless_vetoed() {
    let allow = Rc::new(Cell::new(false));
    let flag = allow.clone();
    let mut wm = WindowManager::new(Viewport::new(1280, 800));
    wm.register_window(window("keep", 600, 100));
    wm.register_window(window("guarded", 100, 100).on_exit(move || flag.get()));

    let close = Point::new(389, 112);
    click(&mut wm, close, Instant::now());
    assert_eq!(wm.len(), 2);
    assert!(wm.take_closed_windows().is_empty());

    allow.set(true);
    click(&mut wm, close, Instant::now());
    assert_eq!(titles(&wm), vec!["keep"]);
    assert_stack_consistent(&wm);
    let closed = wm.take_closed_windows();
    assert_eq!(closed.len(), 1);
    assert_eq!(closed[0].title(), "guarded");
    assert!(wm.take_closed_windows().is_empty());
}

#[test]
fn registration_limits_are_enforced() {
    let config = WmConfig::default()
        .with_max_windows(Some(2))
        .with_validate_adapters(true);
    let mut wm = WindowManager::with_config(Viewport::new(1280, 800), config);
    assert_eq!(wm.register_window(window("", 10, 10)), None);
    assert_eq!(wm.register_window(window("one", 10, 10)), Some(0));
    assert_eq!(wm.register_window(window("two", 10, 10)), Some(1));
    assert_eq!(wm.register_window(window("three", 10, 10)), None);
    assert_eq!(titles(&wm), vec!["one", "two"]);
    assert!(wm.window(1).is_some_and(|w| w.is_focused() && !w.is_maximized()));
}
