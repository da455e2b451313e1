use super::{MonitorId, Xyhw};
use serde::{Deserialize, Serialize};

/// A physical output as reported by the platform.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Monitor {
    pub id: MonitorId,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub name: String,
    pub refresh_rate: i32,
}

impl Monitor {
    #[must_use]
    pub fn new(id: MonitorId, x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            id,
            x,
            y,
            width,
            height,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub const fn xyhw(&self) -> Xyhw {
        Xyhw::new(self.x, self.y, self.width, self.height)
    }

    #[must_use]
    pub const fn contains_point(&self, x: i32, y: i32) -> bool {
        self.xyhw().contains_point(x, y)
    }
}

impl Default for Monitor {
    fn default() -> Self {
        Self {
            id: 0,
            x: 0,
            y: 0,
            width: 1920,
            height: 1080,
            name: String::default(),
            refresh_rate: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monitor_should_not_contain_its_far_edges() {
        let subject = Monitor::new(1, 1920, 0, 1280, 1024);
        assert!(subject.contains_point(1920, 0));
        assert!(!subject.contains_point(3200, 10));
        assert!(!subject.contains_point(1919, 10));
        assert_eq!(subject.refresh_rate, 60);
    }
}
