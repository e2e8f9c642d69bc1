use serde::Serialize;

/// Which way the headline transition runs relative to the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    Forward,
    Backward,
}

/// Auto-rotating hero headline. Rotation pauses while the pointer is over
/// the text block or while the hero's dialog is open.
#[derive(Debug, Clone)]
pub struct HeadlineRotator {
    headlines: Vec<String>,
    current: usize,
    previous: usize,
    hovered: bool,
    dialog_open: bool,
}

impl HeadlineRotator {
    pub fn new(headlines: Vec<String>) -> Self {
        Self {
            headlines,
            current: 0,
            previous: 0,
            hovered: false,
            dialog_open: false,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_text(&self) -> Option<&str> {
        self.headlines.get(self.current).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.headlines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headlines.is_empty()
    }

    pub fn is_paused(&self) -> bool {
        self.hovered || self.dialog_open
    }

    pub fn direction(&self) -> Direction {
        if self.previous <= self.current {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    pub fn tick(&mut self) -> bool {
        if self.is_paused() || self.headlines.is_empty() {
            return false;
        }
        self.go_to(self.current + 1);
        true
    }

    /// Dot navigation; indexes wrap around the headline count.
    pub fn go_to(&mut self, index: usize) {
        if self.headlines.is_empty() {
            return;
        }
        self.previous = self.current;
        self.current = index % self.headlines.len();
    }

    pub fn pointer_enter(&mut self) {
        self.hovered = true;
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = false;
    }

    pub fn set_dialog_open(&mut self, open: bool) {
        self.dialog_open = open;
    }

    pub fn view(&self) -> RotatorView {
        RotatorView {
            headline: self.current_text().unwrap_or_default().to_string(),
            current: self.current,
            dots: self.headlines.len(),
            direction: self.direction(),
            paused: self.is_paused(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RotatorView {
    pub headline: String,
    pub current: usize,
    pub dots: usize,
    pub direction: Direction,
    pub paused: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotator() -> HeadlineRotator {
        HeadlineRotator::new(vec!["a".into(), "b".into(), "c".into()])
    }

    #[test]
    fn test_tick_wraps() {
        let mut r = rotator();
        assert!(r.tick());
        assert!(r.tick());
        assert_eq!(r.current_text(), Some("c"));
        assert!(r.tick());
        assert_eq!(r.current(), 0);
        assert_eq!(r.direction(), Direction::Backward);
    }

    #[test]
    fn test_paused_by_hover_or_dialog() {
        let mut r = rotator();
        r.pointer_enter();
        assert!(!r.tick());
        r.pointer_leave();
        r.set_dialog_open(true);
        assert!(!r.tick());
        r.set_dialog_open(false);
        assert!(r.tick());
        assert_eq!(r.current(), 1);
    }

    #[test]
    fn test_go_to_wraps_and_tracks_direction() {
        let mut r = rotator();
        r.go_to(2);
        assert_eq!(r.direction(), Direction::Forward);
        r.go_to(4);
        assert_eq!(r.current(), 1);
        assert_eq!(r.direction(), Direction::Backward);
    }

    #[test]
    fn test_empty_rotator() {
        let mut r = HeadlineRotator::new(vec![]);
        assert!(!r.tick());
        r.go_to(3);
        assert_eq!(r.current_text(), None);
        assert_eq!(r.view().headline, "");
    }
}
