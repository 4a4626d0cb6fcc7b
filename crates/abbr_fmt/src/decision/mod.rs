//! Format Decision Pass
//!
//! Pre-order walk assigning a [`Format`] to every node, before any output
//! is produced. The resulting [`FormatMap`] is keyed by [`NodeId`] and read
//! by the composition pass; the tree itself is never mutated.
//!
//! # Markup rules ([`compute_formats`])
//!
//! A node goes on its own line (`before_open = newline + indent`) unless it
//! is the very first node of the output, or it is inline (text-only or an
//! inline element) and none of the inline-break triggers fire:
//!
//! | Trigger | Condition |
//! |---------|-----------|
//! | Pseudo-snippet | text-only node with children |
//! | Block follows | first child, some later sibling is a block |
//! | Block precedes | previous sibling is a block |
//! | Too many inline | run of adjacent inline elements reaches `inline_break` |
//!
//! The very-first-node check wins over every inline trigger.
//!
//! Group nodes produce no output, so they are transparent here: they add no
//! indentation level, and first/last-child decisions look through them to
//! the nearest real ancestor.
//!
//! # Indent-based rules ([`compute_indented_formats`])
//!
//! Indentation carries nesting, so every node starts a new line except the
//! very first one and a text-only node continuing a run of text.


use crate::format::{Format, NEWLINE};
use abbr_ir::{AbbrTree, Node, NodeId, Profile};
use rustc_hash::{FxBuildHasher, FxHashMap};

/// Formatting decisions for one render call.
pub type FormatMap = FxHashMap<NodeId, Format>;

/// Compute formats for tag-based markup.
#[tracing::instrument(level = "debug", skip_all, fields(nodes = tree.len()))]
pub fn compute_formats(tree: &AbbrTree, profile: &Profile) -> FormatMap {
    let mut formats = FormatMap::with_capacity_and_hasher(tree.len(), FxBuildHasher);

    if !profile.format() {
        tree.walk(|node, _| {
            formats.insert(node.id(), Format::default());
        });
        return formats;
    }

    tree.walk(|node, depth| {
        if node.is_group() {
            formats.entry(node.id()).or_default();
            return;
        }

        let level = markup_level(node, depth, profile);
        let forced = is_forced(node, profile);

        let format = formats.entry(node.id()).or_default();
        format.indent = profile.indent(level);
        format.newline = NEWLINE.to_string();

        if forced && !node.is_self_closing() {
            format.before_close = format.line_prefix();
            // an inline first child would otherwise stay glued to the open tag
            let child_breaks = first_output_child(node)
                .is_some_and(|child| should_format(child, profile, is_forced(child, profile)));
            if !child_breaks {
                format.after_open = format!("{NEWLINE}{}", profile.indent(level + 1));
            }
        }

        if !should_format(node, profile, forced) {
            tracing::trace!(id = %node.id(), indent_level = level, "inline");
            return;
        }

        let prefix = format.line_prefix();
        format.before_open.clone_from(&prefix);
        tracing::trace!(id = %node.id(), indent_level = level, "own line");

        let Some(parent) = output_parent(node) else {
            return;
        };

        // parent text goes on its own line, aligned with this first child
        if is_leading(node)
            && !parent.is_text_only()
            && parent.value().is_some_and(|v| !v.is_empty())
        {
            formats.entry(parent.id()).or_default().after_open = prefix;
        }

        if is_trailing(node) && !parent.is_root() {
            let parent_format = formats.entry(parent.id()).or_default();
            parent_format.before_close = parent_format.line_prefix();
        }
    });

    formats
}

/// Compute formats for indent-based syntaxes (Haml, Pug, Slim).
///
/// The profile's `format` switch and format-skip/force sets do not apply:
/// these syntaxes cannot express nesting without line breaks.
#[tracing::instrument(level = "debug", skip_all, fields(nodes = tree.len()))]
pub fn compute_indented_formats(tree: &AbbrTree, profile: &Profile) -> FormatMap {
    let mut formats = FormatMap::with_capacity_and_hasher(tree.len(), FxBuildHasher);

    tree.walk(|node, depth| {
        if node.is_group() {
            formats.insert(node.id(), Format::default());
            return;
        }

        let mut format = Format::indented(profile.indent(indented_level(node, depth)));

        let continues_text = node.is_text_only()
            && node.previous_sibling().is_some_and(|prev| prev.is_text_only());
        if !is_output_start(node) && !continues_text {
            format.before_open = format.line_prefix();
            if node.is_text_only() {
                format.before_text.clone_from(&format.before_open);
            }
        }

        formats.insert(node.id(), format);
    });

    formats
}

/// Indent level for indent-based syntaxes.
pub fn indented_level(node: Node<'_>, depth: usize) -> usize {
    let groups = node.ancestors().filter(|a| a.is_group()).count();
    let mut level = depth.saturating_sub(groups);
    if node.parent().is_some_and(Node::is_text_only) {
        level = level.saturating_sub(1);
    }
    level
}

fn markup_level(node: Node<'_>, depth: usize, profile: &Profile) -> usize {
    let skipped = node
        .ancestors()
        .filter(|a| a.is_group() || a.name().is_some_and(|name| profile.is_format_skip(name)))
        .count();
    let mut level = depth.saturating_sub(skipped);
    if node.parent().is_some_and(Node::is_text_only) {
        level = level.saturating_sub(1);
    }
    level
}

fn is_forced(node: Node<'_>, profile: &Profile) -> bool {
    node.name().is_some_and(|name| profile.is_format_force(name))
}

/// First child that produces output, looking through groups.
fn first_output_child(node: Node<'_>) -> Option<Node<'_>> {
    let mut child = node.first_child()?;
    while child.is_group() {
        child = child.first_child()?;
    }
    Some(child)
}

fn should_format(node: Node<'_>, profile: &Profile, forced: bool) -> bool {
    if is_output_start(node) {
        return false;
    }
    if forced || !is_inline(node, profile) {
        return true;
    }
    should_format_inline(node, profile)
}

fn should_format_inline(node: Node<'_>, profile: &Profile) -> bool {
    if node.is_text_only() && node.has_children() {
        return true;
    }

    match node.previous_sibling() {
        None => {
            let block_follows = std::iter::successors(node.next_sibling(), |n| n.next_sibling())
                .any(|n| !is_inline(n, profile));
            if block_follows {
                return true;
            }
        }
        Some(prev) if !is_inline(prev, profile) => return true,
        Some(_) => {}
    }

    let threshold = profile.inline_break();
    if threshold == 0 {
        return false;
    }

    let before = std::iter::successors(node.previous_sibling(), |n| n.previous_sibling())
        .take_while(|n| profile.is_inline(*n))
        .count();
    let after = std::iter::successors(node.next_sibling(), |n| n.next_sibling())
        .take_while(|n| profile.is_inline(*n))
        .count();

    1 + before + after >= threshold
}

/// Inline-level: text-only node or inline element.
fn is_inline(node: Node<'_>, profile: &Profile) -> bool {
    node.is_text_only() || profile.is_inline(node)
}

/// Nearest ancestor that produces output (skips groups).
fn output_parent(node: Node<'_>) -> Option<Node<'_>> {
    node.ancestors().find(|a| !a.is_group())
}

/// First node inside its output parent, looking through groups.
fn is_leading(node: Node<'_>) -> bool {
    node.is_first_child() && node.parent().is_some_and(|p| !p.is_group() || is_leading(p))
}

/// Last node inside its output parent, looking through groups.
fn is_trailing(node: Node<'_>) -> bool {
    node.is_last_child() && node.parent().is_some_and(|p| !p.is_group() || is_trailing(p))
}

/// The very first node of the output.
fn is_output_start(node: Node<'_>) -> bool {
    is_leading(node) && output_parent(node).is_some_and(Node::is_root)
}
