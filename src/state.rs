//! UI state machines shared by the components.
//!
//! None of these touch the DOM; components own them through hooks and
//! render from them.

use crate::content::SectionId;
use std::borrow::Cow;

/// Descriptions longer than this (in characters) collapse behind "Show More".
pub const DESCRIPTION_TRUNCATE_AT: usize = 150;
/// Extra gap between the sticky navigation bar and a scrolled-to section.
pub const SCROLL_MARGIN_PX: f64 = 24.0;

/// The navigation panel shown on narrow screens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    /// Picking a destination always closes the panel.
    pub fn after_select(self) -> Self {
        Self { open: false }
    }

    /// The panel stays mounted so the button's `aria-controls` always
    /// resolves; closing only hides it.
    pub fn panel_hidden(self) -> bool {
        !self.open
    }

    pub fn button_label(self) -> &'static str {
        if self.open {
            "Close menu"
        } else {
            "Open menu"
        }
    }

    pub fn button_icon(self) -> &'static str {
        if self.open {
            "fa-solid fa-xmark"
        } else {
            "fa-solid fa-bars"
        }
    }
}

/// The gallery section's master toggle. Every close starts a new session so
/// cards can tell a stale index from a current one without an effect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MasterToggle {
    pub open: bool,
    pub session: u32,
}

impl MasterToggle {
    pub fn toggled(self) -> Self {
        if self.open {
            Self {
                open: false,
                session: self.session.wrapping_add(1),
            }
        } else {
            Self {
                open: true,
                session: self.session,
            }
        }
    }

    pub fn label(self) -> &'static str {
        if self.open {
            "Hide All Images"
        } else {
            "View All Images"
        }
    }
}

/// A project card's position in its gallery.
///
/// The index is only meaningful inside the session it was written in; read
/// through [`GalleryCursor::index`] it is 0 in any later session, which is
/// how closing the master toggle resets every card in the same render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GalleryCursor {
    session: u32,
    index: usize,
}

impl GalleryCursor {
    pub fn index(self, session: u32, len: usize) -> usize {
        if self.session != session || len == 0 {
            return 0;
        }
        self.index.min(len - 1)
    }

    pub fn next(self, session: u32, len: usize) -> Self {
        if len == 0 {
            return Self { session, index: 0 };
        }
        Self {
            session,
            index: (self.index(session, len) + 1) % len,
        }
    }

    pub fn prev(self, session: u32, len: usize) -> Self {
        if len == 0 {
            return Self { session, index: 0 };
        }
        Self {
            session,
            index: (self.index(session, len) + len - 1) % len,
        }
    }
}

/// Prev/next and the caption only make sense with more than one image.
pub fn has_gallery_controls(len: usize) -> bool {
    len > 1
}

pub fn gallery_caption(index: usize, len: usize) -> String {
    format!("Image {} of {}", index + 1, len)
}

/// Single-select expansion for the career section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MilestoneExpansion(Option<u32>);

impl MilestoneExpansion {
    pub fn expanded(self) -> Option<u32> {
        self.0
    }

    pub fn is_expanded(self, id: u32) -> bool {
        self.0 == Some(id)
    }

    pub fn toggle(self, id: u32) -> Self {
        if self.is_expanded(id) {
            Self(None)
        } else {
            Self(Some(id))
        }
    }
}

/// The gallery section's single lightbox slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Lightbox {
    target: Option<String>,
}

impl Lightbox {
    pub fn open(&mut self, url: impl Into<String>) {
        self.target = Some(url.into());
    }

    pub fn close(&mut self) {
        self.target = None;
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }
}

pub fn needs_show_more(description: &str, artistic_statement: Option<&str>) -> bool {
    description.chars().count() > DESCRIPTION_TRUNCATE_AT
        || artistic_statement.is_some_and(|text| text.chars().count() > DESCRIPTION_TRUNCATE_AT)
}

/// Cuts at the last word boundary before the limit and appends an ellipsis.
pub fn truncate_description(text: &str) -> Cow<'_, str> {
    if text.chars().count() <= DESCRIPTION_TRUNCATE_AT {
        return Cow::Borrowed(text);
    }

    let cut = text
        .char_indices()
        .nth(DESCRIPTION_TRUNCATE_AT)
        .map_or(text.len(), |(index, _)| index);
    let hard_cut = &text[..cut];
    let head = hard_cut
        .rfind(char::is_whitespace)
        .map(|space| hard_cut[..space].trim_end())
        .filter(|head| !head.trim_start().is_empty())
        .unwrap_or_else(|| hard_cut.trim_end());

    Cow::Owned(format!("{head}…"))
}

/// Where the root should scroll after the active section changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollTarget {
    Top,
    Section(SectionId),
    /// The location hash names nothing on the page.
    Stay,
}

pub fn resolve_scroll(active: SectionId, hash: Option<&str>) -> ScrollTarget {
    if active != SectionId::Home {
        return ScrollTarget::Section(active);
    }

    match hash.map(str::trim).filter(|hash| !hash.is_empty() && *hash != "#") {
        Some(hash) => SectionId::from_hash(hash).map_or(ScrollTarget::Stay, ScrollTarget::Section),
        None => ScrollTarget::Top,
    }
}

/// Initial active section from the location hash.
pub fn initial_section(hash: Option<&str>) -> SectionId {
    hash.and_then(SectionId::from_hash).unwrap_or(SectionId::Home)
}

/// Absolute scroll position that puts a section's top just under the nav.
pub fn scroll_target_top(element_viewport_top: f64, scroll_y: f64, nav_height: f64) -> f64 {
    (element_viewport_top + scroll_y - nav_height - SCROLL_MARGIN_PX).max(0.0)
}

/// Derived presentation of a hover-flip button's two labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlipLabels {
    pub initial_hidden: bool,
    pub hover_hidden: bool,
}

impl FlipLabels {
    pub fn for_hover(hovered: bool) -> Self {
        Self {
            initial_hidden: hovered,
            hover_hidden: !hovered,
        }
    }

    pub fn initial_translate(self) -> &'static str {
        if self.initial_hidden {
            "-translate-y-full"
        } else {
            "translate-y-0"
        }
    }

    pub fn hover_translate(self) -> &'static str {
        if self.hover_hidden {
            "translate-y-full"
        } else {
            "translate-y-0"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{MILESTONES, PROJECTS};
    use proptest::prelude::*;

    #[test]
    fn mobile_menu_hides_its_panel_when_closed() {
        let menu = MobileMenu::default();
        assert!(!menu.is_open());
        assert!(menu.panel_hidden());
        assert_eq!(menu.button_label(), "Open menu");

        let menu = menu.toggled();
        assert!(menu.is_open());
        assert!(!menu.panel_hidden());
        assert_eq!(menu.button_icon(), "fa-solid fa-xmark");

        let menu = menu.after_select();
        assert!(menu.panel_hidden());
        assert_eq!(menu.after_select(), MobileMenu::default());
    }

    #[test]
    fn cursor_wraps_both_ways() {
        let len = 4;
        let cursor = GalleryCursor::default();
        assert_eq!(cursor.prev(0, len).index(0, len), 3);
        assert_eq!(cursor.next(0, len).next(0, len).index(0, len), 2);
        let last = cursor.prev(0, len);
        assert_eq!(last.next(0, len).index(0, len), 0);
    }

    #[test]
    fn closing_master_toggle_resets_every_card() {
        let toggle = MasterToggle::default().toggled();
        assert!(toggle.open);

        let cards: Vec<GalleryCursor> = PROJECTS
            .iter()
            .map(|project| {
                let len = project.gallery_images.len();
                GalleryCursor::default()
                    .next(toggle.session, len)
                    .next(toggle.session, len)
            })
            .collect();

        let closed = toggle.toggled();
        assert!(!closed.open);
        let reopened = closed.toggled();
        assert!(reopened.open);

        for (card, project) in cards.iter().zip(PROJECTS) {
            assert_eq!(card.index(reopened.session, project.gallery_images.len()), 0);
        }
    }

    #[test]
    fn single_image_gallery_has_no_controls() {
        assert!(!has_gallery_controls(1));
        assert!(has_gallery_controls(2));
        assert_eq!(gallery_caption(2, 4), "Image 3 of 4");
    }

    #[test]
    fn expanding_a_second_milestone_collapses_the_first() {
        let expansion = MilestoneExpansion::default().toggle(1);
        assert!(expansion.is_expanded(1));

        let expansion = expansion.toggle(4);
        assert!(!expansion.is_expanded(1));
        assert!(expansion.is_expanded(4));

        assert_eq!(expansion.toggle(4).expanded(), None);
    }

    #[test]
    fn lightbox_replaces_instead_of_stacking() {
        let mut lightbox = Lightbox::default();
        assert!(!lightbox.is_open());

        lightbox.open("/a.png");
        lightbox.open("/b.png");
        assert_eq!(lightbox.target(), Some("/b.png"));

        lightbox.close();
        assert_eq!(lightbox, Lightbox::default());
    }

    #[test]
    fn short_descriptions_do_not_collapse() {
        assert!(!needs_show_more("Short.", None));
        assert!(needs_show_more(&"x".repeat(DESCRIPTION_TRUNCATE_AT + 1), None));
        assert!(needs_show_more("Short.", Some(&"y".repeat(DESCRIPTION_TRUNCATE_AT + 1))));
    }

    #[test]
    fn truncation_stops_at_a_word_boundary() {
        let text = "word ".repeat(60);
        let truncated = truncate_description(&text);
        assert!(truncated.ends_with("word…"));
        assert!(truncated.chars().count() <= DESCRIPTION_TRUNCATE_AT + 1);
        assert!(matches!(truncate_description("tiny"), Cow::Borrowed("tiny")));
    }

    #[test]
    fn truncation_without_an_inner_boundary_cuts_hard() {
        let text = format!(" {}", "x".repeat(200));
        let truncated = truncate_description(&text);
        assert_eq!(truncated.chars().count(), DESCRIPTION_TRUNCATE_AT + 1);
        assert!(truncated.ends_with("x…"));

        let text = format!("{}{}", " ".repeat(3), "y".repeat(200));
        assert!(truncate_description(&text).trim_start().starts_with('y'));
    }

    #[test]
    fn truncation_is_char_boundary_safe() {
        let text = "é".repeat(DESCRIPTION_TRUNCATE_AT + 10);
        let truncated = truncate_description(&text);
        assert_eq!(truncated.chars().count(), DESCRIPTION_TRUNCATE_AT + 1);
    }

    #[test]
    fn scroll_resolution() {
        assert_eq!(resolve_scroll(SectionId::Home, None), ScrollTarget::Top);
        assert_eq!(resolve_scroll(SectionId::Home, Some("")), ScrollTarget::Top);
        assert_eq!(
            resolve_scroll(SectionId::Home, Some("#cli")),
            ScrollTarget::Section(SectionId::Cli)
        );
        assert_eq!(resolve_scroll(SectionId::Home, Some("#bogus")), ScrollTarget::Stay);
        assert_eq!(
            resolve_scroll(SectionId::Scientist, None),
            ScrollTarget::Section(SectionId::Scientist)
        );
    }

    #[test]
    fn initial_section_comes_from_hash() {
        assert_eq!(initial_section(Some("#cli")), SectionId::Cli);
        assert_eq!(initial_section(Some("#bogus")), SectionId::Home);
        assert_eq!(initial_section(None), SectionId::Home);
    }

    #[test]
    fn scroll_offset_is_nav_height_plus_margin() {
        // Section 900px below the viewport top, page scrolled by 100px, 64px nav.
        assert_eq!(scroll_target_top(900.0, 100.0, 64.0), 912.0);
        assert_eq!(scroll_target_top(10.0, 0.0, 64.0), 0.0);
    }

    #[test]
    fn flip_labels_hide_exactly_one() {
        for hovered in [false, true] {
            let labels = FlipLabels::for_hover(hovered);
            assert_ne!(labels.initial_hidden, labels.hover_hidden);
        }
        assert_eq!(FlipLabels::for_hover(true).initial_translate(), "-translate-y-full");
    }

    #[test]
    fn every_milestone_id_toggles_independently() {
        let mut expansion = MilestoneExpansion::default();
        for milestone in MILESTONES {
            expansion = expansion.toggle(milestone.id);
            assert_eq!(expansion.expanded(), Some(milestone.id));
        }
    }

    proptest! {
        #[test]
        fn cursor_stays_in_range(len in 1usize..12, steps in proptest::collection::vec(any::<bool>(), 0..40)) {
            let mut cursor = GalleryCursor::default();
            for forward in steps {
                cursor = if forward { cursor.next(0, len) } else { cursor.prev(0, len) };
                prop_assert!(cursor.index(0, len) < len);
            }
        }

        #[test]
        fn next_then_prev_k_times_returns_home(len in 1usize..12, start in 0usize..12, k in 0usize..30) {
            let mut cursor = GalleryCursor::default();
            for _ in 0..start {
                cursor = cursor.next(0, len);
            }
            let origin = cursor.index(0, len);
            for _ in 0..k {
                cursor = cursor.next(0, len).prev(0, len);
            }
            prop_assert_eq!(cursor.index(0, len), origin);
        }

        #[test]
        fn at_most_one_milestone_expanded(ops in proptest::collection::vec(1u32..6, 0..30)) {
            let mut expansion = MilestoneExpansion::default();
            for id in ops {
                expansion = expansion.toggle(id);
                let open = (1u32..6).filter(|id| expansion.is_expanded(*id)).count();
                prop_assert!(open <= 1);
            }
        }
    }
}
