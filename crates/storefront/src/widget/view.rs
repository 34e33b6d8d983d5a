//! Render output for widgets.
//!
//! A widget renders into a tree of [`ViewNode`]s. Each node has a role, a
//! rectangle in widget-local coordinates, and a list of style classes. State
//! that affects appearance (selected, focused, open) is carried only as
//! classes, so a style engine or a terminal backend can draw the tree
//! without knowing anything about the widget.

use storefront_core::Rect;

/// What a view node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The widget's outermost node.
    Root,
    /// A caption above the control.
    Label,
    /// The clickable area showing the current selection.
    Selection,
    /// Text shown when nothing is selected.
    Placeholder,
    /// A single selected value.
    Value,
    /// A removable tag for one selected value.
    Chip,
    /// The delete affordance inside a chip.
    ChipDelete,
    /// The open/closed indicator.
    Arrow,
    /// The dropdown list container.
    OptionList,
    /// One entry in the dropdown list.
    OptionItem,
    /// The check box in front of a multi-select entry.
    Checkbox,
}

/// Built-in icons referenced by view nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconName {
    ChevronDown,
    ChevronUp,
    Close,
    Check,
}

/// A node in a widget's render tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewNode {
    /// What the node represents.
    pub role: Role,
    /// Bounds in widget-local coordinates.
    pub rect: Rect,
    /// Style classes, in order.
    pub classes: Vec<String>,
    /// Text content, if any.
    pub text: Option<String>,
    /// The option value this node stands for, if any.
    pub data_value: Option<String>,
    /// Icon drawn in this node, if any.
    pub icon: Option<IconName>,
    /// Child nodes in paint order.
    pub children: Vec<ViewNode>,
}

impl ViewNode {
    /// Create an empty node.
    pub fn new(role: Role, rect: Rect) -> Self {
        Self {
            role,
            rect,
            classes: Vec::new(),
            text: None,
            data_value: None,
            icon: None,
            children: Vec::new(),
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Add `class` only when `condition` holds.
    pub fn with_class_if(self, condition: bool, class: impl Into<String>) -> Self {
        if condition { self.with_class(class) } else { self }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_data_value(mut self, value: impl Into<String>) -> Self {
        self.data_value = Some(value.into());
        self
    }

    pub fn with_icon(mut self, icon: IconName) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_child(mut self, child: ViewNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = ViewNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Check if the node carries a style class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// The node's classes joined by spaces, as a `class` attribute would read.
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    /// All nodes in the tree, depth-first, starting with `self`.
    pub fn descendants(&self) -> Vec<&ViewNode> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.children.iter().rev());
        }
        out
    }

    /// The first node with the given role.
    pub fn find(&self, role: Role) -> Option<&ViewNode> {
        self.descendants().into_iter().find(|n| n.role == role)
    }

    /// Every node with the given role, in paint order.
    pub fn find_all(&self, role: Role) -> Vec<&ViewNode> {
        self.descendants()
            .into_iter()
            .filter(|n| n.role == role)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ViewNode {
        ViewNode::new(Role::Root, Rect::ZERO)
            .with_class("select")
            .with_child(ViewNode::new(Role::Label, Rect::ZERO).with_text("Category"))
            .with_child(
                ViewNode::new(Role::OptionList, Rect::ZERO)
                    .with_child(ViewNode::new(Role::OptionItem, Rect::ZERO).with_text("a"))
                    .with_child(ViewNode::new(Role::OptionItem, Rect::ZERO).with_text("b")),
            )
    }

    #[test]
    fn test_descendants_preorder() {
        let tree = sample();
        let roles: Vec<Role> = tree.descendants().iter().map(|n| n.role).collect();
        assert_eq!(
            roles,
            vec![Role::Root, Role::Label, Role::OptionList, Role::OptionItem, Role::OptionItem]
        );
    }

    #[test]
    fn test_find_all_keeps_order() {
        let tree = sample();
        let texts: Vec<_> = tree
            .find_all(Role::OptionItem)
            .iter()
            .filter_map(|n| n.text.as_deref())
            .collect();
        assert_eq!(texts, vec!["a", "b"]);
        assert!(tree.find(Role::Chip).is_none());
    }

    #[test]
    fn test_conditional_classes() {
        let node = ViewNode::new(Role::OptionItem, Rect::ZERO)
            .with_class("option")
            .with_class_if(true, "selected")
            .with_class_if(false, "focused");
        assert_eq!(node.class_name(), "option selected");
        assert!(!node.has_class("focused"));
    }
}
