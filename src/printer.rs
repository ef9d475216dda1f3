//! Diagnostic renderings of a skiplist's shape.
//!
//! Both printers only walk the read-only [`NodeRef`] cursor.

use std::collections::HashMap;
use std::fmt::Write;

use crate::skiplist::{NodeRef, SkipKey, SkipList};

const GAP: &str = "--------";

/// One row per level, top level first. Links skipping level 0 columns are
/// drawn longer so towers line up:
///
/// ```text
/// -oo <---------> b <-> +oo
/// -oo <-> a <-> b <-> +oo
/// ```
pub fn render_horizontal<V>(list: &SkipList<V>) -> String {
    let columns = column_positions(list.head().bottom());
    let mut out = String::new();

    let mut level_head = Some(list.head());
    while let Some(head) = level_head {
        let _ = writeln!(out, "{}", render_row(head, &columns));
        level_head = head.below();
    }

    out
}

fn render_row<V>(head: NodeRef<'_, V>, columns: &HashMap<&SkipKey, usize>) -> String {
    let mut row = head.key().to_string();
    let mut last = 0;

    let mut cur = head.next();
    while let Some(node) = cur {
        let column = columns.get(node.key()).copied().unwrap_or(last + 1);

        row.push_str(" <-");
        for _ in last + 1..column {
            row.push_str(GAP);
        }
        let _ = write!(row, "> {}", node.key());

        last = column;
        cur = node.next();
    }

    row
}

// column of every key on level 0, sentinels included
fn column_positions<'a, V>(bottom_head: NodeRef<'a, V>) -> HashMap<&'a SkipKey, usize> {
    let mut columns = HashMap::new();
    let mut cur = Some(bottom_head);
    while let Some(node) = cur {
        columns.insert(node.key(), columns.len());
        cur = node.next();
    }
    columns
}

// one row per level 0 node, the key repeated once per level of its tower
pub fn render_vertical<V>(list: &SkipList<V>) -> String {
    let mut out = String::new();

    let mut column = Some(list.head().bottom());
    while let Some(bottom) = column {
        let mut cur = Some(bottom);
        while let Some(node) = cur {
            let _ = write!(out, " {}", node.key());
            cur = node.above();
        }
        out.push('\n');
        column = bottom.next();
    }

    out
}
