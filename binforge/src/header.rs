//! Incremental aggregate header synthesis.
//!
//! The header declares every embedded array `extern` under nested
//! namespaces mirroring the input tree. Namespace blocks are opened and
//! closed incrementally: each declaration diffs its namespace path
//! against the currently open path and emits only the transitions, so
//! the header stays minimal and correctly nested for arbitrarily deep
//! or wide trees.

use crate::module::AUTOGENERATED_MARKER;
use crate::namespace::ArrayDeclaration;

/// Builds the aggregate declaration header over one traversal.
///
/// Holds the currently-open namespace path; after every
/// [`declare`](HeaderWriter::declare) it equals the namespace path of
/// the most recent declaration. [`finish`](HeaderWriter::finish)
/// consumes the writer, so the terminal unwind can only run once.
#[derive(Debug)]
pub struct HeaderWriter {
    open: Vec<String>,
    out: String,
}

impl HeaderWriter {
    /// Start a header: marker comment, include guard, facility includes
    /// and the root namespace open.
    pub fn new(root_namespace: &str) -> Self {
        let mut out = String::new();
        out.push_str(AUTOGENERATED_MARKER);
        out.push_str("\n\n#pragma once\n\n#include <array>\n#include <cstdint>\n\n");
        out.push_str(&format!("namespace {root_namespace} {{\n\n"));
        Self {
            open: Vec::new(),
            out,
        }
    }

    /// Record one embedded array, closing and opening namespaces as
    /// needed to move from the previous declaration's path to this one.
    ///
    /// The common prefix is recomputed freshly for every declaration, so
    /// a stream that is not pre-order contiguous still produces valid
    /// (merely redundant) nesting.
    pub fn declare(&mut self, decl: &ArrayDeclaration) {
        let target = decl.namespace_path.segments();
        let keep = self
            .open
            .iter()
            .zip(target)
            .take_while(|(open, want)| open == want)
            .count();

        while self.open.len() > keep {
            self.open.pop();
            self.out.push_str("\n}\n");
        }
        for ns in &target[keep..] {
            self.open.push(ns.clone());
            self.out.push_str(&format!("\nnamespace {ns} {{\n\n"));
        }

        self.out.push_str(&format!(
            "extern std::array<uint8_t, {}> {};\n",
            decl.length, decl.array_name
        ));
    }

    /// Close every remaining namespace plus the root and return the
    /// header text.
    pub fn finish(mut self) -> String {
        for _ in 0..self.open.len() + 1 {
            self.out.push_str("\n}\n");
        }
        self.out
    }
}
