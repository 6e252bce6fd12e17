//! In-memory UI state for the portfolio page.
//!
//! These are plain values; the app wraps them in signals. Nothing here is
//! persisted, and every value starts from its `Default` on page load.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Projects,
    Experience,
    Resume,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Projects, Tab::Experience, Tab::Resume];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Projects => "Projects",
            Tab::Experience => "Experience",
            Tab::Resume => "Resume",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tab::Home => "⌂",
            Tab::Projects => "📁",
            Tab::Experience => "💼",
            Tab::Resume => "📄",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Background and text classes for the page root.
    pub fn root_classes(self) -> &'static str {
        match self {
            Theme::Dark => "bg-gray-900 text-white",
            Theme::Light => "bg-gray-100 text-gray-900",
        }
    }

    pub fn glow_color(self) -> &'static str {
        match self {
            Theme::Dark => "#4B0082",
            Theme::Light => "#FFD700",
        }
    }

    pub fn fade_color(self) -> &'static str {
        match self {
            Theme::Dark => "#000000",
            Theme::Light => "#FFFFFF",
        }
    }

    pub fn dot_color(self) -> &'static str {
        match self {
            Theme::Dark => "#FFFFFF",
            Theme::Light => "#000000",
        }
    }
}

/// The tech-stack entry whose tooltip is showing, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TechHover(Option<&'static str>);

impl TechHover {
    pub fn enter(&mut self, name: &'static str) {
        self.0 = Some(name);
    }

    /// Clears the tooltip if `name` owns it. A late leave from a previous
    /// entry must not hide the tooltip of the one now under the pointer.
    pub fn leave(&mut self, name: &str) {
        if self.0 == Some(name) {
            self.0 = None;
        }
    }

    pub fn is_shown(&self, name: &str) -> bool {
        self.0 == Some(name)
    }
}

/// Expansion state of collapsible sections. Every section starts expanded;
/// only the ones the visitor has folded away are recorded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExpandedSections {
    collapsed: Vec<&'static str>,
}

impl ExpandedSections {
    pub fn toggle(&mut self, section: &'static str) {
        if let Some(i) = self.collapsed.iter().position(|s| *s == section) {
            self.collapsed.remove(i);
        } else {
            self.collapsed.push(section);
        }
    }

    pub fn is_expanded(&self, section: &str) -> bool {
        !self.collapsed.iter().any(|s| *s == section)
    }
}
