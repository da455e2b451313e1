use crate::models::{Monitor, Window};

/// Splits the monitor into equal width columns, one per window.
/// Integer division truncates, so a trailing sliver may stay uncovered.
pub fn update(monitor: &Monitor, windows: &mut [&mut Window]) {
    if windows.is_empty() {
        return;
    }
    let width = monitor.width / windows.len() as i32;
    let mut x = monitor.x;
    for window in windows.iter_mut() {
        window.set_position(x, monitor.y);
        window.set_size(width, monitor.height);
        x += width;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WindowHandle;

    #[test]
    fn three_windows_should_get_equal_columns() {
        let monitor = Monitor::new(0, 0, 0, 1920, 1080);
        let mut a = Window::new(WindowHandle(1), "a");
        let mut b = Window::new(WindowHandle(2), "b");
        let mut c = Window::new(WindowHandle(3), "c");
        let mut windows = vec![&mut a, &mut b, &mut c];
        update(&monitor, &mut windows);
        assert_eq!((a.x(), a.y(), a.width(), a.height()), (0, 0, 640, 1080));
        assert_eq!((b.x(), b.y(), b.width(), b.height()), (640, 0, 640, 1080));
        assert_eq!((c.x(), c.y(), c.width(), c.height()), (1280, 0, 640, 1080));
    }

    #[test]
    fn columns_should_start_at_the_monitor_origin() {
        let monitor = Monitor::new(1, 1920, 100, 1000, 700);
        let mut a = Window::new(WindowHandle(1), "a");
        let mut b = Window::new(WindowHandle(2), "b");
        let mut c = Window::new(WindowHandle(3), "c");
        let mut windows = vec![&mut a, &mut b, &mut c];
        update(&monitor, &mut windows);
        // 1000 / 3 = 333, the last pixel stays uncovered.
        assert_eq!(a.x(), 1920);
        assert_eq!(c.x(), 1920 + 666);
        assert_eq!(c.width(), 333);
        assert_eq!(c.y(), 100);
    }

    #[test]
    fn no_windows_is_a_noop() {
        let monitor = Monitor::default();
        let mut windows: Vec<&mut Window> = vec![];
        update(&monitor, &mut windows);
    }
}
