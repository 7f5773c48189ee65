//! Symbols for drawing bloqs in wire diagrams.
//!
//! Each bloq chooses a [`WireSymbol`] for every register it touches via
//! [`Bloq::wire_symbol`]. [`to_graphviz`] lays a single bloq out left to right
//! with its input registers, its symbols, and its output registers, ready to be
//! rendered by the `dot` tool.

use std::{ fs, io::Write, path::Path };
use tabbycat::{ attributes::*, AttrList };
use crate::{
    bloq::{ Bloq, BloqError, BloqInstance, BloqResult, Soquet },
    vizdefs::*,
};

/// A diagram symbol drawn on a single register's wire.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum WireSymbol {
    /// Label text inside a box.
    TextBox(String),
    /// Bare label text.
    Text(String),
    /// A control dot, filled for a control on ∣1⟩ and hollow for a control on
    /// ∣0⟩.
    Circle { filled: bool },
    /// The ⊕ target of a controlled-NOT.
    ModPlus,
}

impl WireSymbol {
    /// Return the text content of the symbol, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::TextBox(s) | Self::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Return the graphviz node attributes that draw the symbol.
    pub fn graph_attrs(&self) -> AttrList {
        match self {
            Self::TextBox(s) => {
                AttrList::new()
                    .add_pair(label(s.clone()))
                    .add_pair(shape(Shape::Rectangle))
                    .add_pair(style(Style::Filled))
                    .add_pair(fillcolor(BOX_COLOR))
            },
            Self::Text(s) => {
                AttrList::new()
                    .add_pair(label(s.clone()))
                    .add_pair(shape(Shape::Plaintext))
            },
            Self::Circle { filled } => {
                AttrList::new()
                    .add_pair(label(String::new()))
                    .add_pair(shape(Shape::Circle))
                    .add_pair(height(CIRCLE_HEIGHT))
                    .add_pair(style(Style::Filled))
                    .add_pair(fillcolor(if *filled { CTRL_COLOR } else { ANTI_COLOR }))
            },
            Self::ModPlus => {
                AttrList::new()
                    .add_pair(label("⊕".to_string()))
                    .add_pair(shape(Shape::Plaintext))
                    .add_pair(fontsize(MODPLUS_FONTSIZE))
            },
        }
    }
}

fn endpoint_attrs(text: String) -> AttrList {
    AttrList::new()
        .add_pair(label(text))
        .add_pair(shape(Shape::Plaintext))
}

/// Render a single bloq as a graphviz graph named after its
/// [`pretty_name`][Bloq::pretty_name].
///
/// Every register gets its own symbol node, drawn according to
/// [`Bloq::wire_symbol`] for the soquet of that register. Registers on the
/// input side are fed from a node labeled `In <name>`, and those on the output
/// side lead to a node labeled `Out <name>`. Inputs and outputs are each held
/// at a common rank.
pub fn to_graphviz<B>(bloq: &B) -> BloqResult<tabbycat::Graph>
where B: Bloq
{
    use tabbycat::*;
    let name = bloq.pretty_name();
    let mut id_gen = 0_usize..;
    let mut next_id = move || id_gen.next().unwrap_or_default();

    let mut statements
        = StmtList::new()
        .add_attr(
            AttrType::Graph,
            AttrList::new().add_pair(rankdir(RankDir::LR)),
        )
        .add_attr(
            AttrType::Node,
            AttrList::new()
                .add_pair(fontname(FONT))
                .add_pair(fontsize(FONTSIZE))
                .add_pair(margin(NODE_MARGIN))
                ,
        );
    let mut inputs_subgraph_stmt
        = StmtList::new()
        .add_attr(
            AttrType::Graph,
            AttrList::new().add_pair(rank(RankType::Source)),
        );
    let mut outputs_subgraph_stmt
        = StmtList::new()
        .add_attr(
            AttrType::Graph,
            AttrList::new().add_pair(rank(RankType::Sink)),
        );

    for reg in bloq.signature().iter() {
        let soq = Soquet::new(BloqInstance::Instance(0), reg.clone());
        let sym_id = next_id();
        statements
            = statements.add_node(
                sym_id.into(), None, Some(bloq.wire_symbol(&soq).graph_attrs()));
        if reg.side().is_left() {
            let in_id = next_id();
            inputs_subgraph_stmt
                = inputs_subgraph_stmt.add_node(
                    in_id.into(),
                    None,
                    Some(endpoint_attrs(format!("In {}", reg.name()))),
                );
            statements
                = statements.add_edge(
                    Edge::head_node(in_id.into(), None)
                        .line_to_node(sym_id.into(), None)
                );
        }
        if reg.side().is_right() {
            let out_id = next_id();
            outputs_subgraph_stmt
                = outputs_subgraph_stmt.add_node(
                    out_id.into(),
                    None,
                    Some(endpoint_attrs(format!("Out {}", reg.name()))),
                );
            statements
                = statements.add_edge(
                    Edge::head_node(sym_id.into(), None)
                        .line_to_node(out_id.into(), None)
                );
        }
    }
    statements
        = statements
        .add_subgraph(SubGraph::cluster(inputs_subgraph_stmt))
        .add_subgraph(SubGraph::cluster(outputs_subgraph_stmt));

    GraphBuilder::default()
        .graph_type(GraphType::Graph)
        .strict(false)
        .id(Identity::quoted(&name))
        .stmts(statements)
        .build()
        .map_err(BloqError::GraphVizError)
}

/// Like [`to_graphviz`], but render directly to a string and write it to
/// `path`.
pub fn save_graphviz<B, P>(bloq: &B, path: P) -> BloqResult<()>
where
    B: Bloq,
    P: AsRef<Path>,
{
    let graphviz = to_graphviz(bloq)?;
    fs::OpenOptions::new()
        .write(true)
        .append(false)
        .create(true)
        .truncate(true)
        .open(path)?
        .write_all(format!("{}", graphviz).as_bytes())?;
    Ok(())
}
