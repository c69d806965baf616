//! GraphViz DOT renderer.
//!
//! Emits the digraph header, one pair of `rank=same` groups per generation
//! block (couples, then children slots) followed by the union-to-children
//! connectors, then one styled node declaration per person, then the footer.
//! Persons render as filled notes; union and slot anchors render as tiny
//! unlabeled circles that only exist to constrain the layout.

use super::Renderer;
use crate::layout::{GenerationBlock, LayoutStmt, TreeDoc};
use crate::model::{Family, Person};

/// Style suffix shared by every invisible anchor node.
const INVISIBLE: &str = "[shape=circle,label=\"\",height=0.11,width=0.11]";

// ─── Person styling ──────────────────────────────────────────────────────────

/// Compose the multi-line node label from a person's attributes. Lines are
/// separated by literal `\n` escapes, the form DOT expects inside a quoted
/// label; embedded quotes are escaped.
pub fn person_label(p: &Person) -> String {
    let attr = |key: &str| p.attrs.get(key).map(|v| v.to_string());

    let mut label = p.name.clone();
    if let Some(pre) = attr("pretitle") {
        label = format!("{pre} {label}");
    }
    if let Some(post) = attr("posttitle") {
        label.push(' ');
        label.push_str(&post);
    }
    if let Some(surname) = attr("surname") {
        label.push_str("\\n« ");
        label.push_str(&surname);
        label.push('»');
    }
    // nee = maiden name ("Geb." on German charts)
    if let Some(nee) = attr("nee") {
        label.push_str("\\nGeb. ");
        label.push_str(&nee);
    }
    match (attr("birthday"), attr("birthplace")) {
        (Some(day), Some(place)) => {
            label.push_str("\\n* ");
            label.push_str(&day);
            label.push_str(" in ");
            label.push_str(&place);
        }
        (Some(day), None) => {
            label.push_str("\\n* ");
            label.push_str(&day);
        }
        (None, Some(place)) => {
            label.push_str("\\n* in ");
            label.push_str(&place);
        }
        (None, None) => {}
    }
    match (attr("deathday"), attr("deathplace")) {
        (Some(day), Some(place)) => {
            label.push_str("\\n† ");
            label.push_str(&day);
            label.push_str(" in ");
            label.push_str(&place);
        }
        (Some(day), None) => {
            label.push_str("\\n† ");
            label.push_str(&day);
        }
        (None, Some(place)) => {
            label.push_str("\\n† in ");
            label.push_str(&place);
        }
        (None, None) => {}
    }
    if let Some(notes) = attr("notes") {
        label.push_str("\\n");
        label.push_str(&notes);
    }

    label.replace('"', "\\\"")
}

/// Fill color by recorded sex. A text `sex` attribute wins; without one, a
/// bare `F` or `M` flag decides; anything else is neutral.
pub fn fill_color(p: &Person) -> &'static str {
    if let Some(sex) = p.attrs.get("sex") {
        return match sex.as_text() {
            Some("F") => "bisque",
            Some("M") => "azure2",
            _ => "white",
        };
    }
    if p.attrs.contains_key("F") {
        "bisque"
    } else if p.attrs.contains_key("M") {
        "azure2"
    } else {
        "white"
    }
}

fn person_node(p: &Person) -> String {
    format!(
        "{}[label=\"{}\",style=filled,fillcolor={}]",
        p.id,
        person_label(p),
        fill_color(p)
    )
}

// ─── Statement emission ──────────────────────────────────────────────────────

fn stmt_line(stmt: &LayoutStmt) -> String {
    match stmt {
        LayoutStmt::Ordering { from, to } => {
            format!("\t\t{} -> {} [style=invis];\n", from.name(), to.name())
        }
        LayoutStmt::Union {
            left,
            household,
            right,
        } => format!("\t\t{left} -> h{household} -> {right};\n"),
        LayoutStmt::AnchorDecl(anchor) => format!("\t\t{}{INVISIBLE};\n", anchor.name()),
        LayoutStmt::SlotChain { household, len } => {
            let slots: Vec<String> = (0..*len).map(|i| format!("h{household}_{i}")).collect();
            format!("\t\t{};\n", slots.join(" -> "))
        }
        LayoutStmt::CenterDrop { household, slot } => {
            format!("\t\th{household} -> h{household}_{slot};\n")
        }
        LayoutStmt::KidDrop {
            household,
            slot,
            kid,
        } => format!("\t\th{household}_{slot} -> {kid};\n"),
    }
}

fn render_block(out: &mut String, block: &GenerationBlock) {
    out.push_str("\t{ rank=same;\n");
    for stmt in &block.couples {
        out.push_str(&stmt_line(stmt));
    }
    out.push_str("\t}\n");

    if !block.slots.is_empty() {
        out.push_str("\t{ rank=same;\n");
        for stmt in &block.slots {
            out.push_str(&stmt_line(stmt));
        }
        out.push_str("\t}\n");
    }

    for stmt in &block.connectors {
        out.push_str(&stmt_line(stmt));
    }
}

// ─── Public renderer ─────────────────────────────────────────────────────────

/// Renders a tree layout to GraphViz DOT text.
pub struct DotRenderer;

impl Renderer for DotRenderer {
    fn render(&self, family: &Family, doc: &TreeDoc) -> String {
        let mut out = String::new();
        out.push_str("digraph {\n");
        out.push_str("\tnodesep=0.5; ranksep=1.5;\n");
        out.push_str("\tnode [shape=note];\n");
        out.push_str("\tedge [dir=none];\n");
        out.push('\n');

        for block in &doc.blocks {
            render_block(&mut out, block);
        }

        for id in &doc.people {
            if let Some(p) = family.person(id) {
                out.push('\t');
                out.push_str(&person_node(p));
                out.push_str(";\n");
            }
        }

        out.push_str("\n}\n");
        out
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
