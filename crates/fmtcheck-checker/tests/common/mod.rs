//! Shared fixture for checker integration tests.
//!
//! A `Fixture` owns a snippet of PHP source, an `AstBuilder` and an index.
//! Node ranges are located by searching the source text, so each test reads
//! like the code it models.

#![allow(dead_code)]

use fmtcheck_ast::{AstBuilder, NodeIndex, TextRange, TypeUnion};
use fmtcheck_checker::{
    CallCheck, CallChecker, CheckerContext, CheckerOptions, CheckerState, ConstantResolver,
    Resolution, TypeName, TypeResolver,
};
use fmtcheck_common::Diagnostic;
use fmtcheck_index::InMemoryIndex;

pub const FILE: &str = "src/Service.php";
pub const LOGGER: &str = "\\Logger\\Logger";

pub struct Fixture {
    pub source: String,
    pub builder: AstBuilder,
    pub index: InMemoryIndex,
}

impl Fixture {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
            builder: AstBuilder::new(),
            index: InMemoryIndex::new(),
        }
    }

    /// Range of the first occurrence of `needle`.
    pub fn range_of(&self, needle: &str) -> TextRange {
        self.range_of_nth(needle, 0)
    }

    /// Range of the `n`th (zero-based) occurrence of `needle`.
    pub fn range_of_nth(&self, needle: &str, n: usize) -> TextRange {
        let (pos, _) = self
            .source
            .match_indices(needle)
            .nth(n)
            .unwrap_or_else(|| panic!("{needle:?} (#{n}) not found in fixture source"));
        TextRange::new(pos as u32, (pos + needle.len()) as u32)
    }

    pub fn whole(&self) -> TextRange {
        TextRange::new(0, self.source.len() as u32)
    }

    pub fn var(&mut self, name: &str, types: &[&str]) -> NodeIndex {
        let range = self.range_of(name);
        self.builder
            .variable(name, TypeUnion::new(types.iter().copied()), range)
    }

    pub fn var_nth(&mut self, name: &str, n: usize) -> NodeIndex {
        let range = self.range_of_nth(name, n);
        self.builder.variable(name, TypeUnion::default(), range)
    }

    /// `$logger` typed as the logger interface.
    pub fn logger(&mut self) -> NodeIndex {
        self.var("$logger", &[LOGGER])
    }

    /// A string literal; `quoted` includes its quotes.
    pub fn literal(&mut self, quoted: &str) -> NodeIndex {
        self.literal_nth(quoted, 0)
    }

    pub fn literal_nth(&mut self, quoted: &str, n: usize) -> NodeIndex {
        let range = self.range_of_nth(quoted, n);
        let contents = &quoted[1..quoted.len() - 1];
        self.builder.string_literal(contents, range)
    }

    /// `receiver->method(arguments)`, spanning from the receiver to the
    /// closing parenthesis after the method name.
    pub fn call(&mut self, receiver: NodeIndex, method: &str, arguments: Vec<NodeIndex>) -> NodeIndex {
        self.call_nth(receiver, method, 0, arguments)
    }

    /// A call whose result type the host inferred as `types`.
    pub fn call_typed(
        &mut self,
        receiver: NodeIndex,
        method: &str,
        arguments: Vec<NodeIndex>,
        types: &[&str],
    ) -> NodeIndex {
        let call = self.call_nth(receiver, method, 0, arguments);
        if let Some(fmtcheck_ast::NodeData::MethodReference(data)) = self
            .builder
            .arena_mut()
            .get_mut(call)
            .map(|node| &mut node.data)
        {
            data.types = TypeUnion::new(types.iter().copied());
        }
        call
    }

    pub fn call_nth(
        &mut self,
        receiver: NodeIndex,
        method: &str,
        n: usize,
        arguments: Vec<NodeIndex>,
    ) -> NodeIndex {
        let name_range = self.range_of_nth(&format!("{method}("), n);
        let name_range = TextRange::new(name_range.pos, name_range.pos + method.len() as u32);
        let start = self
            .builder
            .arena()
            .range(receiver)
            .map_or(name_range.pos, |r| r.pos);
        let end = self.source[name_range.end as usize..]
            .find(')')
            .map_or(self.source.len(), |i| name_range.end as usize + i + 1);
        self.builder.method_reference(
            receiver,
            method,
            name_range,
            arguments,
            TypeUnion::default(),
            TextRange::new(start, end as u32),
        )
    }

    pub fn check(self, call: NodeIndex) -> CallCheck {
        self.check_with(call, CheckerOptions::default())
    }

    pub fn check_with(self, call: NodeIndex, options: CheckerOptions) -> CallCheck {
        let Self { builder, index, .. } = self;
        let arena = builder.finish();
        let ctx = CheckerContext::new(&arena, &index, FILE.to_string(), options);
        CallChecker::new(&ctx).check_call(call)
    }

    pub fn validate(self, call: NodeIndex) -> Vec<Diagnostic> {
        self.check(call).into_diagnostics()
    }

    pub fn resolve_type(self, expr: NodeIndex) -> Resolution<TypeName> {
        let Self { builder, index, .. } = self;
        let arena = builder.finish();
        let ctx = CheckerContext::new(&arena, &index, FILE.to_string(), CheckerOptions::default());
        TypeResolver::new(&ctx).resolve(expr)
    }

    pub fn resolve_constant(self, expr: NodeIndex) -> Resolution<String> {
        let Self { builder, index, .. } = self;
        let arena = builder.finish();
        let ctx = CheckerContext::new(&arena, &index, FILE.to_string(), CheckerOptions::default());
        ConstantResolver::new(&ctx).resolve(expr)
    }

    pub fn resolve_with_targets(self, expr: NodeIndex) -> (Option<String>, Vec<NodeIndex>) {
        let Self { builder, index, .. } = self;
        let arena = builder.finish();
        let ctx = CheckerContext::new(&arena, &index, FILE.to_string(), CheckerOptions::default());
        let mut targets = Vec::new();
        let value = ConstantResolver::new(&ctx).resolve_literal_with_targets(expr, &mut targets);
        (value, targets)
    }

    /// Check the whole file rooted at `root`.
    pub fn check_file(self, root: NodeIndex) -> (Vec<Diagnostic>, fmtcheck_checker::CheckStats) {
        let Self { builder, index, .. } = self;
        let arena = builder.finish();
        let mut state = CheckerState::new(&arena, &index, FILE.to_string(), CheckerOptions::default());
        state.check_source_file(root);
        let stats = state.stats;
        (state.take_diagnostics(), stats)
    }
}

pub fn messages(diagnostics: &[Diagnostic]) -> Vec<&str> {
    diagnostics.iter().map(|d| d.message_text.as_str()).collect()
}

pub fn checked(check: CallCheck) -> Vec<Diagnostic> {
    match check {
        CallCheck::Checked(diagnostics) => diagnostics,
        other => panic!("expected the call to be checked, got {other:?}"),
    }
}
