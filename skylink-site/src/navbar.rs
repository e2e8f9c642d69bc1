use serde::Serialize;
use skylink_shared::Key;

pub const SHOP_OPTIONS: [&str; 4] = ["Flight", "Hotels", "Cars", "Packages"];
pub const DEFAULT_SHOP_LABEL: &str = "Shop Travels";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
}

pub const NAV_ITEMS: [NavItem; 3] = [
    NavItem { id: "support", label: "Support" },
    NavItem { id: "chat", label: "Chat" },
    NavItem { id: "signin", label: "Sign in" },
];

/// Top navigation: product dropdown, search query, mobile menu.
#[derive(Debug, Clone)]
pub struct Navbar {
    desktop_min_width: u32,
    menu_open: bool,
    dropdown_open: bool,
    selected_option: Option<&'static str>,
    hovered_item: Option<&'static str>,
    query: String,
}

impl Navbar {
    pub fn new(desktop_min_width: u32) -> Self {
        Self {
            desktop_min_width,
            menu_open: false,
            dropdown_open: false,
            selected_option: None,
            hovered_item: None,
            query: String::new(),
        }
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    pub fn shop_label(&self) -> &'static str {
        self.selected_option.unwrap_or(DEFAULT_SHOP_LABEL)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn toggle_dropdown(&mut self) {
        self.dropdown_open = !self.dropdown_open;
    }

    /// Pick a dropdown entry; closes the dropdown. Unknown options are ignored.
    pub fn select_option(&mut self, option: &str) -> bool {
        match SHOP_OPTIONS.iter().find(|o| **o == option) {
            Some(found) => {
                self.selected_option = Some(*found);
                self.dropdown_open = false;
                true
            }
            None => false,
        }
    }

    /// Pointer pressed somewhere on the document.
    pub fn pointer_down(&mut self, inside_dropdown: bool) {
        if !inside_dropdown {
            self.dropdown_open = false;
        }
    }

    pub fn on_resize(&mut self, viewport_width: u32) {
        if viewport_width >= self.desktop_min_width && self.menu_open {
            tracing::debug!(viewport_width, "closing mobile menu on desktop layout");
            self.menu_open = false;
        }
    }

    pub fn on_key(&mut self, key: Key) {
        if key == Key::Escape {
            self.dropdown_open = false;
            self.menu_open = false;
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn hover(&mut self, item: Option<&str>) {
        self.hovered_item = item.and_then(|id| NAV_ITEMS.iter().find(|n| n.id == id).map(|n| n.id));
    }

    pub fn view(&self) -> NavbarView {
        NavbarView {
            shop_label: self.shop_label(),
            options: SHOP_OPTIONS.to_vec(),
            items: NAV_ITEMS.to_vec(),
            hovered_item: self.hovered_item,
            dropdown_open: self.dropdown_open,
            menu_open: self.menu_open,
            query: self.query.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NavbarView {
    pub shop_label: &'static str,
    pub options: Vec<&'static str>,
    pub items: Vec<NavItem>,
    pub hovered_item: Option<&'static str>,
    pub dropdown_open: bool,
    pub menu_open: bool,
    pub query: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dropdown_select_closes() {
        let mut nav = Navbar::new(768);
        assert_eq!(nav.shop_label(), "Shop Travels");
        nav.toggle_dropdown();
        assert!(nav.is_dropdown_open());
        assert!(nav.select_option("Hotels"));
        assert_eq!(nav.shop_label(), "Hotels");
        assert!(!nav.is_dropdown_open());
        assert!(!nav.select_option("Cruises"));
        assert_eq!(nav.shop_label(), "Hotels");
    }

    #[test]
    fn test_click_outside_closes_dropdown() {
        let mut nav = Navbar::new(768);
        nav.toggle_dropdown();
        nav.pointer_down(true);
        assert!(nav.is_dropdown_open());
        nav.pointer_down(false);
        assert!(!nav.is_dropdown_open());
    }

    #[test]
    fn test_resize_to_desktop_closes_menu() {
        let mut nav = Navbar::new(768);
        nav.toggle_menu();
        nav.on_resize(600);
        assert!(nav.is_menu_open());
        nav.on_resize(768);
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn test_escape_closes_everything() {
        let mut nav = Navbar::new(768);
        nav.toggle_menu();
        nav.toggle_dropdown();
        nav.on_key(Key::Escape);
        assert!(!nav.is_menu_open());
        assert!(!nav.is_dropdown_open());
    }

    #[test]
    fn test_hover_only_known_items() {
        let mut nav = Navbar::new(768);
        nav.hover(Some("chat"));
        assert_eq!(nav.view().hovered_item, Some("chat"));
        nav.hover(Some("admin"));
        assert_eq!(nav.view().hovered_item, None);
    }
}
