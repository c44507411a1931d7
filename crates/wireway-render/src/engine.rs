//! Screen renderer.
//!
//! [`RenderEngine::render_screen`] is total: every input produces a frame.
//! A current screen id the schema does not contain renders the not-found
//! placeholder instead of failing, since dangling targets are expected
//! while a schema is being edited.

use tracing::{debug, warn};
use wireway_core::{NavigationState, WireframeSchema};
use wireway_oil::{col, styled, Border, FocusContext, Gap, Node, Padding};

use crate::elements::{dispatch, ElementContext};
use crate::interaction::Wiring;
use crate::theme::ThemeTokens;
use crate::widgets::WidgetState;

/// One rendered screen: the node tree plus the interactions it wires.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// The screen that was found, `None` for the placeholder.
    pub screen_id: Option<String>,
    pub tree: Node,
    pub wiring: Wiring,
}

impl Frame {
    pub fn is_not_found(&self) -> bool {
        self.screen_id.is_none()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RenderEngine<'t> {
    theme: &'t ThemeTokens,
}

impl Default for RenderEngine<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderEngine<'static> {
    pub fn new() -> Self {
        Self {
            theme: ThemeTokens::default_ref(),
        }
    }
}

impl<'t> RenderEngine<'t> {
    pub fn theme(&self) -> &'t ThemeTokens {
        self.theme
    }

    /// Render the current screen of `nav`, elements top to bottom in
    /// declaration order.
    pub fn render_screen(
        &self,
        schema: &WireframeSchema,
        nav: &NavigationState,
        widgets: &WidgetState,
        focus: &FocusContext,
    ) -> Frame {
        let screen_id = nav.current_screen_id();
        let Some(screen) = schema.screen(screen_id) else {
            warn!(screen_id, "screen not found, rendering placeholder");
            return Frame {
                screen_id: None,
                tree: self.not_found(screen_id),
                wiring: Wiring::new(),
            };
        };

        let mut ctx = ElementContext::new(nav, widgets, focus, self.theme);
        let mut children = Vec::with_capacity(screen.elements.len());
        for (index, element) in screen.elements.iter().enumerate() {
            ctx.set_index(index);
            children.push(dispatch(element, &mut ctx));
        }
        let wiring = ctx.into_wiring();
        debug!(
            screen_id,
            elements = children.len(),
            interactions = wiring.len(),
            "rendered screen"
        );

        Frame {
            screen_id: Some(screen.id.clone()),
            tree: col(children).gap(Gap::row(1)),
            wiring,
        }
    }

    fn not_found(&self, screen_id: &str) -> Node {
        col([
            styled("Screen not found", self.theme.warning()),
            styled(format!("No screen with id \"{screen_id}\""), self.theme.muted()),
        ])
        .with_padding(Padding::xy(1, 0))
        .with_border(Border::Double)
        .with_style(self.theme.border())
    }
}

/// Render `schema` from its initial state: `initial` if given, else the
/// first declared screen, with no widget state and nothing focused.
pub fn render(schema: &WireframeSchema, initial: Option<&str>) -> Frame {
    let nav = NavigationState::for_schema(schema, initial);
    RenderEngine::new().render_screen(schema, &nav, &WidgetState::new(), &FocusContext::new())
}
