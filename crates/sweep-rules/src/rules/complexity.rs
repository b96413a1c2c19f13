//! `complexity`: cyclomatic complexity per function, class field
//! initializer and static block.
//!
//! Every frame starts at 1 and gains one per branch point inside it:
//! conditionals, loops, `catch`, short-circuit operators, logical
//! assignments, optional chaining and parameter or destructuring defaults.
//! The classic variant counts each `case` with a test; the modified variant
//! counts a whole `switch` once. Nested functions are their own frames.
//! PascalCase functions are components and are not measured.

use serde::Deserialize;
use serde_json::Value;
use sweep_config::ConfigError;
use sweep_core::{Diagnostic, RuleCategory, Span};
use sweep_parser::Semantic;
use sweep_parser::ast::AstKind;
use sweep_parser::visit::{self, Visit};

use crate::markup::{declared_name, function_label};
use crate::naming::{capitalize, is_strict_pascal_case};
use crate::rule::{Configurable, Rule, RuleContext, RuleMeta, parse_options};

pub static META: RuleMeta = RuleMeta {
    name: "complexity",
    category: RuleCategory::Core,
    description: "Enforce a maximum cyclomatic complexity allowed in a program",
    messages: &[(
        "complex",
        "{{name}} has a complexity of {{complexity}}. Maximum allowed is {{max}}.",
    )],
};

const DEFAULT_MAX: usize = 20;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Classic,
    Modified,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ObjectOptions {
    pub max: Option<usize>,
    /// Alias of `max`; wins when both are given.
    pub maximum: Option<usize>,
    pub variant: Variant,
}

/// `complexity = 10` or `complexity = { max = 10, variant = "modified" }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Options {
    Max(usize),
    Object(ObjectOptions),
}

impl Default for Options {
    fn default() -> Self {
        Self::Object(ObjectOptions::default())
    }
}

#[derive(Debug)]
pub struct Complexity {
    max: usize,
    variant: Variant,
}

impl Complexity {
    #[must_use]
    pub fn new(options: &Options) -> Self {
        match options {
            Options::Max(max) => Self {
                max: *max,
                variant: Variant::Classic,
            },
            Options::Object(object) => Self {
                max: object.maximum.or(object.max).unwrap_or(DEFAULT_MAX),
                variant: object.variant,
            },
        }
    }
}

impl Default for Complexity {
    fn default() -> Self {
        Self::new(&Options::default())
    }
}

impl Configurable for Complexity {
    fn from_options(options: Option<&Value>) -> Result<Self, ConfigError> {
        Ok(Self::new(&parse_options(META.name, options)?))
    }
}

/// What opened a frame.
#[derive(Debug, Clone, Copy)]
enum Origin<'a> {
    Program,
    Function(AstKind<'a>),
    FieldInitializer(Span),
    StaticBlock(Span),
}

#[derive(Debug)]
struct Frame<'a> {
    origin: Origin<'a>,
    complexity: usize,
}

struct Counter<'s, 'a> {
    semantic: &'s Semantic<'a>,
    rule: &'s Complexity,
    frames: Vec<Frame<'a>>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Counter<'_, 'a> {
    fn opens_frame(kind: AstKind<'a>) -> Option<Origin<'a>> {
        match kind {
            AstKind::Function(_) | AstKind::ArrowFunction(_) => Some(Origin::Function(kind)),
            AstKind::PropertyDefinition(property) if property.value.is_some() => {
                Some(Origin::FieldInitializer(property.span))
            }
            AstKind::StaticBlock(block) => Some(Origin::StaticBlock(block.span)),
            _ => None,
        }
    }

    fn is_branch(&self, kind: AstKind<'a>) -> bool {
        match kind {
            AstKind::CatchClause(_)
            | AstKind::ConditionalExpression(_)
            | AstKind::LogicalExpression(_)
            | AstKind::ForStatement(_)
            | AstKind::ForInStatement(_)
            | AstKind::IfStatement(_)
            | AstKind::WhileStatement(_)
            | AstKind::DoWhileStatement(_)
            | AstKind::AssignmentPattern(_) => true,
            AstKind::SwitchCase(case) => self.rule.variant == Variant::Classic && case.test.is_some(),
            AstKind::SwitchStatement(_) => self.rule.variant == Variant::Modified,
            AstKind::AssignmentExpression(assignment) => assignment.is_logical(),
            AstKind::MemberExpression(member) => member.optional,
            AstKind::CallExpression(call) => call.optional,
            _ => false,
        }
    }

    fn close(&mut self, frame: Frame<'a>) {
        let (name, span) = match frame.origin {
            Origin::Program => return,
            Origin::Function(function) => {
                if declared_name(self.semantic, function).is_some_and(is_strict_pascal_case) {
                    return;
                }
                (function_label(self.semantic, function), function.span())
            }
            Origin::FieldInitializer(span) => ("class field initializer".to_string(), span),
            Origin::StaticBlock(span) => ("class static block".to_string(), span),
        };
        if frame.complexity <= self.rule.max {
            return;
        }
        self.diagnostics.push(
            Diagnostic::new(span, "complex")
                .with("name", capitalize(&name))
                .with("complexity", frame.complexity)
                .with("max", self.rule.max),
        );
    }
}

impl<'a> Visit<'a> for Counter<'_, 'a> {
    fn enter_node(&mut self, kind: AstKind<'a>) {
        if let Some(origin) = Self::opens_frame(kind) {
            self.frames.push(Frame { origin, complexity: 1 });
            return;
        }
        if self.is_branch(kind)
            && let Some(frame) = self.frames.last_mut()
        {
            frame.complexity += 1;
        }
    }

    fn leave_node(&mut self, kind: AstKind<'a>) {
        if Self::opens_frame(kind).is_some()
            && let Some(frame) = self.frames.pop()
        {
            self.close(frame);
        }
    }
}

impl Rule for Complexity {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        let semantic = ctx.semantic();
        let mut counter = Counter {
            semantic,
            rule: self,
            frames: vec![Frame {
                origin: Origin::Program,
                complexity: 1,
            }],
            diagnostics: Vec::new(),
        };
        visit::walk_program(&mut counter, semantic.program());
        counter.diagnostics
    }
}
