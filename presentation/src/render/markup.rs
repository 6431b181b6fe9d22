//! Markup writer for component trees.
//!
//! Produces the server-rendered view of a tree: containers and forms as
//! wrapper tags, checks as checkbox inputs named after their group,
//! checked state projected from the group's selection model. A group
//! renders body-only unless configured otherwise; when it does emit its
//! own tag, the form-control attributes are stripped first because the
//! wrapper element never submits a value itself.

use std::fmt::Display;
use trellis_domain::{
    clean_group_tag, CheckGroupNode, CheckNode, Component, ComponentId, ComponentTree, NodeKind,
    Tag,
};

/// Error produced while rendering a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The requested component id is not in the tree.
    UnknownComponent(ComponentId),
    /// A check is not attached below any check group.
    OrphanCheck(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::UnknownComponent(id) => {
                write!(f, "Component not found: {}", id)
            }
            RenderError::OrphanCheck(path) => {
                write!(f, "Check [{}] is not attached under any check group", path)
            }
        }
    }
}

impl std::error::Error for RenderError {}

/// Knobs the `[render]` config section feeds into the writer.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Spaces per nesting level.
    pub indent: usize,
    /// Base URL for selection-change triggers; the group's input name
    /// is appended percent-encoded.
    pub listener_url: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            listener_url: "./listener?group=".to_string(),
        }
    }
}

/// Renders a component subtree to indented markup.
pub struct MarkupWriter {
    options: RenderOptions,
}

impl MarkupWriter {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render the subtree rooted at `root`, root tag included.
    pub fn render<T>(
        &self,
        tree: &ComponentTree<T>,
        root: ComponentId,
    ) -> Result<String, RenderError>
    where
        T: Display + PartialEq,
    {
        let mut markup = String::new();
        self.render_node(tree, root, 0, &mut markup)?;
        Ok(markup)
    }

    fn render_node<T>(
        &self,
        tree: &ComponentTree<T>,
        id: ComponentId,
        depth: usize,
        out: &mut String,
    ) -> Result<(), RenderError>
    where
        T: Display + PartialEq,
    {
        let component = tree.get(id).ok_or(RenderError::UnknownComponent(id))?;
        match component.kind() {
            NodeKind::Container => {
                let tag = Tag::new("div").with_attribute("class", component.name());
                self.line(out, depth, &tag_text(&tag, false));
                self.render_children(tree, id, depth + 1, out)?;
                self.line(out, depth, "</div>");
            }
            NodeKind::Form => {
                let tag = Tag::new("form")
                    .with_attribute("class", component.name())
                    .with_attribute("method", "post");
                self.line(out, depth, &tag_text(&tag, false));
                self.render_children(tree, id, depth + 1, out)?;
                self.line(out, depth, "</form>");
            }
            NodeKind::CheckGroup(group) => {
                if group.render_body_only() {
                    // No tag of its own; the body renders in place.
                    self.render_children(tree, id, depth, out)?;
                } else {
                    let tag = group_tag(tree, id, component);
                    self.line(out, depth, &tag_text(&tag, false));
                    self.render_children(tree, id, depth + 1, out)?;
                    self.line(out, depth, &format!("</{}>", tag.name()));
                }
            }
            NodeKind::Check(check) => {
                let line = self.check_line(tree, id, component, check)?;
                self.line(out, depth, &line);
            }
        }
        Ok(())
    }

    fn render_children<T>(
        &self,
        tree: &ComponentTree<T>,
        id: ComponentId,
        depth: usize,
        out: &mut String,
    ) -> Result<(), RenderError>
    where
        T: Display + PartialEq,
    {
        if let Some(children) = tree.children_of(id) {
            for child in children {
                self.render_node(tree, *child, depth, out)?;
            }
        }
        Ok(())
    }

    /// One `<label><input .../> text</label>` line for a check.
    ///
    /// The input submits under the *group's* input name; the check's own
    /// name never reaches the wire. Checked state comes from comparing
    /// the check's value against the group model.
    fn check_line<T>(
        &self,
        tree: &ComponentTree<T>,
        id: ComponentId,
        component: &Component<T>,
        check: &CheckNode<T>,
    ) -> Result<String, RenderError>
    where
        T: Display + PartialEq,
    {
        let group_id = tree
            .enclosing_group(id)
            .ok_or_else(|| RenderError::OrphanCheck(path_of(tree, id)))?;
        let group: &CheckGroupNode<T> = tree
            .get(group_id)
            .and_then(|node| node.as_group())
            .ok_or_else(|| RenderError::OrphanCheck(path_of(tree, id)))?;
        let input_name = tree
            .input_name(group_id)
            .ok_or(RenderError::UnknownComponent(group_id))?;

        let mut tag = Tag::new("input")
            .with_attribute("type", "checkbox")
            .with_attribute("name", input_name.as_str());
        if let Some(token) = check.token() {
            tag.set("value", token.as_str());
        }
        if group.model().is_selected(check.value()) {
            tag.set("checked", "checked");
        }
        if !component.is_enabled() {
            tag.set("disabled", "disabled");
        }
        if group.wants_change_notifications() {
            let url = format!(
                "{}{}",
                self.options.listener_url,
                urlencoding::encode(&input_name)
            );
            tag.set("onclick", format!("window.location='{}'", url));
        }

        Ok(format!(
            "<label>{} {}</label>",
            tag_text(&tag, true),
            escape(&check.value().to_string())
        ))
    }

    fn line(&self, out: &mut String, depth: usize, text: &str) {
        out.push_str(&" ".repeat(depth * self.options.indent));
        out.push_str(text);
        out.push('\n');
    }
}

impl Default for MarkupWriter {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

/// The group's own tag, built like any form component (name + disabled)
/// and then stripped of both — checks carry the form-control attributes,
/// the wrapper never does.
fn group_tag<T>(tree: &ComponentTree<T>, id: ComponentId, component: &Component<T>) -> Tag {
    let mut tag = Tag::new("span").with_attribute("class", component.name());
    if let Some(input_name) = tree.input_name(id) {
        tag.set("name", input_name);
    }
    if !component.is_enabled() {
        tag.set("disabled", "disabled");
    }
    clean_group_tag(&mut tag);
    tag
}

fn tag_text(tag: &Tag, self_closing: bool) -> String {
    let mut text = format!("<{}", tag.name());
    for (name, value) in tag.attributes() {
        text.push_str(&format!(" {}=\"{}\"", name, escape(value)));
    }
    text.push_str(if self_closing { "/>" } else { ">" });
    text
}

fn escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn path_of<T>(tree: &ComponentTree<T>, id: ComponentId) -> String {
    tree.path(id)
        .map(|path| path.as_str().to_string())
        .unwrap_or_else(|| id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_domain::commit_selection;

    /// page > order(form) > toppings(group, body-only) > mushroom / olive
    fn order_tree() -> (ComponentTree<&'static str>, ComponentId, ComponentId) {
        let mut tree = ComponentTree::new();
        let page = tree.attach_root(Component::container("page"));
        let form = tree.attach(page, Component::form("order")).unwrap();
        let group = tree.attach(form, Component::check_group("toppings")).unwrap();
        tree.attach(group, Component::check("mushroom", "mushroom"))
            .unwrap();
        tree.attach(group, Component::check("olive", "olive")).unwrap();
        (tree, page, group)
    }

    #[test]
    fn test_render_page_structure() {
        let (tree, page, _) = order_tree();
        let markup = MarkupWriter::default().render(&tree, page).unwrap();
        assert_eq!(
            markup,
            "<div class=\"page\">\n\
             \x20 <form class=\"order\" method=\"post\">\n\
             \x20   <label><input type=\"checkbox\" name=\"order:toppings\" value=\"check0\"/> mushroom</label>\n\
             \x20   <label><input type=\"checkbox\" name=\"order:toppings\" value=\"check1\"/> olive</label>\n\
             \x20 </form>\n\
             </div>\n"
        );
    }

    #[test]
    fn test_checked_boxes_follow_model() {
        let (mut tree, page, group) = order_tree();
        commit_selection(&mut tree, group, vec!["mushroom"]).unwrap();

        let markup = MarkupWriter::default().render(&tree, page).unwrap();
        let mushroom = markup.lines().find(|l| l.contains("mushroom")).unwrap();
        let olive = markup.lines().find(|l| l.contains("olive")).unwrap();
        assert!(mushroom.contains("checked=\"checked\""));
        assert!(!olive.contains("checked"));
    }

    #[test]
    fn test_group_tag_when_not_body_only() {
        let mut tree = ComponentTree::new();
        let page = tree.attach_root(Component::container("page"));
        let group = tree
            .attach(
                page,
                Component::<&str>::check_group("toppings").with_render_body_only(false),
            )
            .unwrap();
        tree.attach(group, Component::check("olive", "olive")).unwrap();

        let markup = MarkupWriter::default().render(&tree, page).unwrap();
        assert!(markup.contains("<span class=\"toppings\">"));
        assert!(markup.contains("</span>"));
        // The check sits one level deeper than the group tag now.
        assert!(markup.contains("\n    <label>"));
    }

    #[test]
    fn test_group_tag_never_carries_form_control_attributes() {
        let mut tree = ComponentTree::new();
        let page = tree.attach_root(Component::container("page"));
        let group = tree
            .attach(
                page,
                Component::<&str>::check_group("toppings")
                    .with_render_body_only(false)
                    .disabled(),
            )
            .unwrap();
        tree.attach(group, Component::check("olive", "olive")).unwrap();

        let markup = MarkupWriter::default().render(&tree, page).unwrap();
        let span = markup.lines().find(|l| l.contains("<span")).unwrap();
        assert!(!span.contains("name="));
        assert!(!span.contains("disabled"));
    }

    #[test]
    fn test_disabled_check_renders_disabled() {
        let mut tree = ComponentTree::new();
        let group = tree.attach_root(Component::<&str>::check_group("toppings"));
        tree.attach(group, Component::check("anchovy", "anchovy").disabled())
            .unwrap();

        let markup = MarkupWriter::default().render(&tree, group).unwrap();
        assert!(markup.contains("disabled=\"disabled\""));
    }

    #[test]
    fn test_listener_trigger_only_when_notifications_wanted() {
        let (tree, page, _) = order_tree();
        let quiet = MarkupWriter::default().render(&tree, page).unwrap();
        assert!(!quiet.contains("onclick"));

        let mut tree = ComponentTree::new();
        let page = tree.attach_root(Component::container("page"));
        let form = tree.attach(page, Component::form("order")).unwrap();
        let group = tree
            .attach(
                form,
                Component::<&str>::check_group("toppings").with_change_notifications(),
            )
            .unwrap();
        tree.attach(group, Component::check("olive", "olive")).unwrap();

        let markup = MarkupWriter::default().render(&tree, page).unwrap();
        assert!(markup.contains("onclick"));
        assert!(markup.contains("order%3Atoppings"));
    }

    #[test]
    fn test_orphan_check_is_an_error() {
        let mut tree = ComponentTree::new();
        let page = tree.attach_root(Component::container("page"));
        tree.attach(page, Component::check("stray", "stray")).unwrap();

        let err = MarkupWriter::default().render(&tree, page).unwrap_err();
        assert_eq!(err, RenderError::OrphanCheck("page:stray".to_string()));
        assert!(err.to_string().contains("page:stray"));
    }

    #[test]
    fn test_unknown_root_is_an_error() {
        let tree: ComponentTree<&str> = ComponentTree::new();
        let err = MarkupWriter::default()
            .render(&tree, ComponentId(42))
            .unwrap_err();
        assert_eq!(err, RenderError::UnknownComponent(ComponentId(42)));
    }

    #[test]
    fn test_values_are_escaped() {
        let mut tree = ComponentTree::new();
        let group = tree.attach_root(Component::<&str>::check_group("cheeses"));
        tree.attach(group, Component::check("brie", "brie & <soft>"))
            .unwrap();

        let markup = MarkupWriter::default().render(&tree, group).unwrap();
        assert!(markup.contains("brie &amp; &lt;soft&gt;"));
        assert!(!markup.contains("<soft>"));
    }

    #[test]
    fn test_indent_option() {
        let (tree, page, _) = order_tree();
        let writer = MarkupWriter::new(RenderOptions {
            indent: 4,
            ..RenderOptions::default()
        });
        let markup = writer.render(&tree, page).unwrap();
        assert!(markup.contains("\n    <form"));
        assert!(markup.contains("\n        <label>"));
    }
}
