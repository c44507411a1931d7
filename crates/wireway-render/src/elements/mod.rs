//! Element dispatcher.
//!
//! [`dispatch`] is an exhaustive match over [`Element`]; each variant has
//! its own render function in a submodule. Renderers read navigation and
//! widget state through [`ElementContext`] and register every clickable
//! node in its [`Wiring`] instead of mutating anything.
//!
//! Interaction keys are namespaced by element id (`todoList/task1`,
//! `todoList/task1/check`, `filterTabs/tab/2`), so nested targets such as a
//! checkbox inside a clickable list item stay separate. Controls whose ids
//! come from the schema get their own segment (`h/action/share`,
//! `form/field/title`) and never collide with fixed ones like `h/add` or
//! `form/submit`.

mod content;
mod form;
mod header;
mod list;
mod nav_bar;
mod search;
mod tabs;

use tracing::debug;
use wireway_core::schema::Element;
use wireway_core::NavigationState;
use wireway_oil::{focusable, FocusContext, Node};

use crate::interaction::{Interaction, Wiring};
use crate::theme::ThemeTokens;
use crate::widgets::WidgetState;

pub struct ElementContext<'a> {
    pub nav: &'a NavigationState,
    pub widgets: &'a WidgetState,
    pub focus: &'a FocusContext,
    pub theme: &'a ThemeTokens,
    wiring: Wiring,
    index: usize,
}

impl<'a> ElementContext<'a> {
    pub fn new(
        nav: &'a NavigationState,
        widgets: &'a WidgetState,
        focus: &'a FocusContext,
        theme: &'a ThemeTokens,
    ) -> Self {
        Self {
            nav,
            widgets,
            focus,
            theme,
            wiring: Wiring::new(),
            index: 0,
        }
    }

    /// Position of the element being dispatched within its screen.
    pub fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    pub fn into_wiring(self) -> Wiring {
        self.wiring
    }

    /// Key prefix for the current element.
    pub(crate) fn base_key(&self, element_id: &str) -> String {
        key_part(element_id, self.index)
    }

    pub(crate) fn is_focused(&self, key: &str) -> bool {
        self.focus.is_focused(key)
    }

    /// Register `key`. Returns it back when this is the first registration.
    pub(crate) fn wire(&mut self, key: String, interaction: Interaction) -> Option<String> {
        self.wiring.insert(key.clone(), interaction).then_some(key)
    }

    /// Make `node` focusable under `key`, highlighted while it holds focus.
    pub(crate) fn wrap(&self, key: String, node: Node) -> Node {
        let node = if self.is_focused(&key) {
            node.patch_style(self.theme.focused())
        } else {
            node
        };
        focusable(key, node)
    }

    pub(crate) fn clickable(&mut self, key: String, interaction: Interaction, node: Node) -> Node {
        match self.wire(key, interaction) {
            Some(key) => self.wrap(key, node),
            None => node,
        }
    }

    /// Clickable when `target` is present, inert otherwise.
    pub(crate) fn navigate_to(&mut self, key: String, target: Option<&str>, node: Node) -> Node {
        match target {
            Some(target) => self.clickable(key, Interaction::Navigate(target.to_owned()), node),
            None => node,
        }
    }
}

/// `id`, or `#index` when the schema left the id empty.
pub(crate) fn key_part(id: &str, index: usize) -> String {
    if id.is_empty() {
        format!("#{index}")
    } else {
        id.to_owned()
    }
}

/// Glyph for a handful of common icon names; anything else is not drawn.
pub(crate) fn icon_glyph(name: &str) -> Option<&'static str> {
    let glyph = match name {
        "add" | "plus" => "+",
        "back" | "arrow-left" | "chevron-left" => "‹",
        "search" => "⌕",
        "settings" | "gear" => "⚙",
        "home" => "⌂",
        "check" | "done" => "✓",
        "close" | "x" => "×",
        "star" | "favorite" => "★",
        _ => return None,
    };
    Some(glyph)
}

pub fn dispatch(element: &Element, ctx: &mut ElementContext<'_>) -> Node {
    match element {
        Element::Header(header) => header::render(header, ctx),
        Element::SearchBar(search) => search::render(search, ctx),
        Element::Tabs(tabs) => tabs::render(tabs, ctx),
        Element::List(list) => list::render(list, ctx),
        Element::Form(form) => form::render(form, ctx),
        Element::NavBar(nav_bar) => nav_bar::render(nav_bar, ctx),
        Element::TextBlock(block) => content::text_block(block, ctx),
        Element::Button(button) => {
            let key = ctx.base_key(&button.id);
            content::button(button, key, ctx)
        }
        Element::Card(card) => content::card(card, ctx),
        Element::Image(image) => content::image(image, ctx),
        Element::Divider(divider) => content::divider(divider, ctx),
        Element::Unrecognized(raw) => {
            debug!(
                kind = raw.kind.as_deref().unwrap_or("<missing>"),
                error = raw.error.as_deref(),
                "skipping unrecognized element"
            );
            Node::Empty
        }
    }
}
