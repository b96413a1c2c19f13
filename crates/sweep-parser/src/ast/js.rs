//! Statements, expressions, patterns and functions.

use super::{JsxElement, JsxFragment, NodeId, Span, TsSignature, TsType, UnknownNode};

// ── Identifiers ────────────────────────────────────────────────────

/// An identifier in a binding (declaration) position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingIdentifier {
    pub node_id: NodeId,
    pub span: Span,
    pub name: String,
}

/// An identifier read or written as a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierReference {
    pub node_id: NodeId,
    pub span: Span,
    pub name: String,
}

/// A bare name that is neither a binding nor a reference (property keys,
/// member properties).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierName {
    pub node_id: NodeId,
    pub span: Span,
    pub name: String,
}

// ── Statements ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Expression(ExpressionStatement),
    Variable(VariableDeclaration),
    Function(Box<Function>),
    Class(Box<Class>),
    Return(ReturnStatement),
    If(Box<IfStatement>),
    For(Box<ForStatement>),
    ForIn(Box<ForInStatement>),
    While(Box<WhileStatement>),
    DoWhile(Box<DoWhileStatement>),
    Switch(Box<SwitchStatement>),
    Try(Box<TryStatement>),
    Throw(ThrowStatement),
    Block(BlockStatement),
    Labeled(Box<LabeledStatement>),
    Import(ImportDeclaration),
    ExportNamed(Box<ExportNamedDeclaration>),
    ExportDefault(Box<ExportDefaultDeclaration>),
    Interface(Box<TsInterfaceDeclaration>),
    TypeAlias(Box<TsTypeAliasDeclaration>),
    /// `break`, `continue`, `;`, `debugger`, enums, namespaces and other
    /// shapes no analysis looks into.
    Other(UnknownNode),
}

impl Statement {
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Expression(node) => node.span,
            Self::Variable(node) => node.span,
            Self::Function(node) => node.span,
            Self::Class(node) => node.span,
            Self::Return(node) => node.span,
            Self::If(node) => node.span,
            Self::For(node) => node.span,
            Self::ForIn(node) => node.span,
            Self::While(node) => node.span,
            Self::DoWhile(node) => node.span,
            Self::Switch(node) => node.span,
            Self::Try(node) => node.span,
            Self::Throw(node) => node.span,
            Self::Block(node) => node.span,
            Self::Labeled(node) => node.span,
            Self::Import(node) => node.span,
            Self::ExportNamed(node) => node.span,
            Self::ExportDefault(node) => node.span,
            Self::Interface(node) => node.span,
            Self::TypeAlias(node) => node.span,
            Self::Other(node) => node.span,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub node_id: NodeId,
    pub span: Span,
    pub expression: Expression,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableKind {
    Var,
    Let,
    Const,
}

impl VariableKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Var => "var",
            Self::Let => "let",
            Self::Const => "const",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    pub node_id: NodeId,
    pub span: Span,
    pub kind: VariableKind,
    pub declarations: Vec<VariableDeclarator>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclarator {
    pub node_id: NodeId,
    pub span: Span,
    pub binding: Pattern,
    pub type_annotation: Option<TsType>,
    pub init: Option<Expression>,
}

impl VariableDeclarator {
    /// Name of a plain `name = …` binding.
    #[must_use]
    pub fn binding_name(&self) -> Option<&BindingIdentifier> {
        match &self.binding {
            Pattern::Identifier(ident) => Some(ident),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub node_id: NodeId,
    pub span: Span,
    pub argument: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    pub node_id: NodeId,
    pub span: Span,
    pub test: Expression,
    pub consequent: Statement,
    pub alternate: Option<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ForInit {
    Variable(VariableDeclaration),
    Expression(Expression),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForStatement {
    pub node_id: NodeId,
    pub span: Span,
    pub init: Option<ForInit>,
    pub test: Option<Expression>,
    pub update: Option<Expression>,
    pub body: Statement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForInKind {
    In,
    Of,
}

/// Left side of `for (… in/of …)`.
#[derive(Debug, Clone, PartialEq)]
pub enum ForInLeft {
    /// `const x`, `let [a, b]`, `var y`.
    Declaration { kind: VariableKind, binding: Pattern },
    /// `x`, `obj.prop`, `[a, b]` assigned on each iteration.
    Target(AssignmentTarget),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForInStatement {
    pub node_id: NodeId,
    pub span: Span,
    pub kind: ForInKind,
    pub is_await: bool,
    pub left: ForInLeft,
    pub right: Expression,
    pub body: Statement,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStatement {
    pub node_id: NodeId,
    pub span: Span,
    pub test: Expression,
    pub body: Statement,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DoWhileStatement {
    pub node_id: NodeId,
    pub span: Span,
    pub body: Statement,
    pub test: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwitchStatement {
    pub node_id: NodeId,
    pub span: Span,
    pub discriminant: Expression,
    pub cases: Vec<SwitchCase>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwitchCase {
    pub node_id: NodeId,
    pub span: Span,
    /// `None` for `default:`.
    pub test: Option<Expression>,
    pub consequent: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TryStatement {
    pub node_id: NodeId,
    pub span: Span,
    pub block: BlockStatement,
    pub handler: Option<CatchClause>,
    pub finalizer: Option<BlockStatement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatchClause {
    pub node_id: NodeId,
    pub span: Span,
    pub param: Option<Pattern>,
    pub body: BlockStatement,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThrowStatement {
    pub node_id: NodeId,
    pub span: Span,
    pub argument: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    pub node_id: NodeId,
    pub span: Span,
    pub body: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabeledStatement {
    pub node_id: NodeId,
    pub span: Span,
    pub label: IdentifierName,
    pub body: Statement,
}

// ── Modules ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct ImportDeclaration {
    pub node_id: NodeId,
    pub span: Span,
    pub specifiers: Vec<ImportSpecifier>,
    pub source: StringLiteral,
    pub type_only: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportedName {
    Default,
    Namespace,
    Named(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportSpecifier {
    pub node_id: NodeId,
    pub span: Span,
    pub imported: ImportedName,
    pub local: BindingIdentifier,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportNamedDeclaration {
    pub node_id: NodeId,
    pub span: Span,
    pub declaration: Option<Statement>,
    pub specifiers: Vec<ExportSpecifier>,
    /// `export … from "source"`; re-exports have no local binding.
    pub source: Option<StringLiteral>,
    /// `export * from …` / `export * as ns from …`.
    pub export_all: bool,
    pub type_only: bool,
}

/// A name in an export clause. Kept as plain text so string-named exports
/// (`export { a as "b" }`) need no separate shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleExportName {
    pub node_id: NodeId,
    pub span: Span,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportSpecifier {
    pub node_id: NodeId,
    pub span: Span,
    pub local: ModuleExportName,
    /// Present only when aliased with `as`.
    pub exported: Option<ModuleExportName>,
}

impl ExportSpecifier {
    /// The public name this specifier exports.
    #[must_use]
    pub fn exported_name(&self) -> &str {
        self.exported.as_ref().map_or(&self.local.name, |alias| &alias.name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExportDefaultKind {
    Function(Box<Function>),
    Class(Box<Class>),
    Expression(Expression),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportDefaultDeclaration {
    pub node_id: NodeId,
    pub span: Span,
    pub declaration: ExportDefaultKind,
}

// ── Functions and classes ──────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
    Declaration,
    Expression,
    /// Body of a class or object method, getter or setter.
    Method,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub node_id: NodeId,
    pub span: Span,
    pub kind: FunctionKind,
    pub name: Option<BindingIdentifier>,
    pub params: Vec<Param>,
    pub return_type: Option<TsType>,
    pub body: Option<FunctionBody>,
    pub is_async: bool,
    pub is_generator: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrowFunction {
    pub node_id: NodeId,
    pub span: Span,
    pub params: Vec<Param>,
    pub return_type: Option<TsType>,
    pub body: ArrowBody,
    pub is_async: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ArrowBody {
    Expression(Expression),
    Block(FunctionBody),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionBody {
    pub node_id: NodeId,
    pub span: Span,
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub node_id: NodeId,
    pub span: Span,
    /// Defaults lower to [`Pattern::Assignment`], rest params to
    /// [`Pattern::Rest`].
    pub pattern: Pattern,
    pub type_annotation: Option<TsType>,
    pub optional: bool,
    /// Constructor parameter properties (`private readonly x`).
    pub is_readonly: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Class {
    pub node_id: NodeId,
    pub span: Span,
    pub name: Option<BindingIdentifier>,
    pub super_class: Option<Expression>,
    pub members: Vec<ClassMember>,
    pub is_declaration: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClassMember {
    Method(MethodDefinition),
    Property(PropertyDefinition),
    StaticBlock(StaticBlock),
    Other(UnknownNode),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    Method,
    Constructor,
    Get,
    Set,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodDefinition {
    pub node_id: NodeId,
    pub span: Span,
    pub key: PropertyKey,
    pub kind: MethodKind,
    pub is_static: bool,
    pub value: Box<Function>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDefinition {
    pub node_id: NodeId,
    pub span: Span,
    pub key: PropertyKey,
    pub is_static: bool,
    pub type_annotation: Option<TsType>,
    pub value: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StaticBlock {
    pub node_id: NodeId,
    pub span: Span,
    pub body: Vec<Statement>,
}

// ── Property keys ──────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum PropertyKey {
    Identifier(IdentifierName),
    PrivateIdentifier(IdentifierName),
    String(StringLiteral),
    Number(NumericLiteral),
    Computed(Box<Expression>),
}

impl PropertyKey {
    /// Statically known key text (identifier, string, number).
    #[must_use]
    pub fn static_name(&self) -> Option<&str> {
        match self {
            Self::Identifier(ident) | Self::PrivateIdentifier(ident) => Some(&ident.name),
            Self::String(literal) => Some(&literal.value),
            Self::Number(literal) => Some(&literal.raw),
            Self::Computed(_) => None,
        }
    }

    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Identifier(ident) | Self::PrivateIdentifier(ident) => ident.span,
            Self::String(literal) => literal.span,
            Self::Number(literal) => literal.span,
            Self::Computed(expression) => expression.span(),
        }
    }

    #[must_use]
    pub const fn is_computed(&self) -> bool {
        matches!(self, Self::Computed(_))
    }
}

// ── Expressions ────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(IdentifierReference),
    String(StringLiteral),
    Template(Box<TemplateLiteral>),
    Number(NumericLiteral),
    Boolean(BooleanLiteral),
    Null(NullLiteral),
    /// Regex, bigint and other literals analyses only read as text.
    OtherLiteral(OtherLiteral),
    This(ThisExpression),
    Array(ArrayExpression),
    Object(ObjectExpression),
    Function(Box<Function>),
    Arrow(Box<ArrowFunction>),
    Class(Box<Class>),
    Call(Box<CallExpression>),
    New(Box<NewExpression>),
    Member(Box<MemberExpression>),
    Unary(Box<UnaryExpression>),
    Update(Box<UpdateExpression>),
    Binary(Box<BinaryExpression>),
    Logical(Box<LogicalExpression>),
    Conditional(Box<ConditionalExpression>),
    Assignment(Box<AssignmentExpression>),
    Sequence(SequenceExpression),
    Parenthesized(Box<ParenthesizedExpression>),
    Await(Box<AwaitExpression>),
    Yield(Box<YieldExpression>),
    Spread(Box<SpreadElement>),
    TsAs(Box<TsAsExpression>),
    TsSatisfies(Box<TsSatisfiesExpression>),
    TsNonNull(Box<TsNonNullExpression>),
    JsxElement(Box<JsxElement>),
    JsxFragment(Box<JsxFragment>),
    Unknown(UnknownNode),
}

impl Expression {
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Identifier(node) => node.span,
            Self::String(node) => node.span,
            Self::Template(node) => node.span,
            Self::Number(node) => node.span,
            Self::Boolean(node) => node.span,
            Self::Null(node) => node.span,
            Self::OtherLiteral(node) => node.span,
            Self::This(node) => node.span,
            Self::Array(node) => node.span,
            Self::Object(node) => node.span,
            Self::Function(node) => node.span,
            Self::Arrow(node) => node.span,
            Self::Class(node) => node.span,
            Self::Call(node) => node.span,
            Self::New(node) => node.span,
            Self::Member(node) => node.span,
            Self::Unary(node) => node.span,
            Self::Update(node) => node.span,
            Self::Binary(node) => node.span,
            Self::Logical(node) => node.span,
            Self::Conditional(node) => node.span,
            Self::Assignment(node) => node.span,
            Self::Sequence(node) => node.span,
            Self::Parenthesized(node) => node.span,
            Self::Await(node) => node.span,
            Self::Yield(node) => node.span,
            Self::Spread(node) => node.span,
            Self::TsAs(node) => node.span,
            Self::TsSatisfies(node) => node.span,
            Self::TsNonNull(node) => node.span,
            Self::JsxElement(node) => node.span,
            Self::JsxFragment(node) => node.span,
            Self::Unknown(node) => node.span,
        }
    }

    #[must_use]
    pub fn node_id(&self) -> NodeId {
        match self {
            Self::Identifier(node) => node.node_id,
            Self::String(node) => node.node_id,
            Self::Template(node) => node.node_id,
            Self::Number(node) => node.node_id,
            Self::Boolean(node) => node.node_id,
            Self::Null(node) => node.node_id,
            Self::OtherLiteral(node) => node.node_id,
            Self::This(node) => node.node_id,
            Self::Array(node) => node.node_id,
            Self::Object(node) => node.node_id,
            Self::Function(node) => node.node_id,
            Self::Arrow(node) => node.node_id,
            Self::Class(node) => node.node_id,
            Self::Call(node) => node.node_id,
            Self::New(node) => node.node_id,
            Self::Member(node) => node.node_id,
            Self::Unary(node) => node.node_id,
            Self::Update(node) => node.node_id,
            Self::Binary(node) => node.node_id,
            Self::Logical(node) => node.node_id,
            Self::Conditional(node) => node.node_id,
            Self::Assignment(node) => node.node_id,
            Self::Sequence(node) => node.node_id,
            Self::Parenthesized(node) => node.node_id,
            Self::Await(node) => node.node_id,
            Self::Yield(node) => node.node_id,
            Self::Spread(node) => node.node_id,
            Self::TsAs(node) => node.node_id,
            Self::TsSatisfies(node) => node.node_id,
            Self::TsNonNull(node) => node.node_id,
            Self::JsxElement(node) => node.node_id,
            Self::JsxFragment(node) => node.node_id,
            Self::Unknown(node) => node.node_id,
        }
    }

    /// Strip parentheses and TypeScript-only wrappers (`as`, `satisfies`,
    /// `!`) that do not change the runtime value.
    #[must_use]
    pub fn without_wrappers(&self) -> &Self {
        let mut current = self;
        loop {
            current = match current {
                Self::Parenthesized(node) => &node.expression,
                Self::TsAs(node) => &node.expression,
                Self::TsSatisfies(node) => &node.expression,
                Self::TsNonNull(node) => &node.expression,
                _ => return current,
            };
        }
    }

    #[must_use]
    pub const fn is_function_like(&self) -> bool {
        matches!(self, Self::Function(_) | Self::Arrow(_))
    }

    #[must_use]
    pub const fn is_jsx(&self) -> bool {
        matches!(self, Self::JsxElement(_) | Self::JsxFragment(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    pub node_id: NodeId,
    pub span: Span,
    /// Contents without quotes. Escapes are kept verbatim.
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TemplateLiteral {
    pub node_id: NodeId,
    pub span: Span,
    pub expressions: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericLiteral {
    pub node_id: NodeId,
    pub span: Span,
    pub raw: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanLiteral {
    pub node_id: NodeId,
    pub span: Span,
    pub value: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NullLiteral {
    pub node_id: NodeId,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtherLiteral {
    pub node_id: NodeId,
    pub span: Span,
    pub raw: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThisExpression {
    pub node_id: NodeId,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayExpression {
    pub node_id: NodeId,
    pub span: Span,
    /// Holes are dropped; spreads appear as [`Expression::Spread`].
    pub elements: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectExpression {
    pub node_id: NodeId,
    pub span: Span,
    pub properties: Vec<ObjectMember>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ObjectMember {
    Property(Box<ObjectProperty>),
    Spread(Box<SpreadElement>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectProperty {
    pub node_id: NodeId,
    pub span: Span,
    pub key: PropertyKey,
    pub value: Expression,
    pub shorthand: bool,
    pub method: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    pub node_id: NodeId,
    pub span: Span,
    pub callee: Expression,
    pub arguments: Vec<Expression>,
    /// `fn?.()`.
    pub optional: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewExpression {
    pub node_id: NodeId,
    pub span: Span,
    pub callee: Expression,
    pub arguments: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MemberProperty {
    Identifier(IdentifierName),
    PrivateIdentifier(IdentifierName),
    Computed(Expression),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemberExpression {
    pub node_id: NodeId,
    pub span: Span,
    pub object: Expression,
    pub property: MemberProperty,
    /// `obj?.prop` / `obj?.[key]`.
    pub optional: bool,
}

impl MemberExpression {
    /// Non-computed property name, or a computed string literal key.
    #[must_use]
    pub fn static_property_name(&self) -> Option<&str> {
        match &self.property {
            MemberProperty::Identifier(ident) | MemberProperty::PrivateIdentifier(ident) => {
                Some(&ident.name)
            }
            MemberProperty::Computed(Expression::String(literal)) => Some(&literal.value),
            MemberProperty::Computed(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpression {
    pub node_id: NodeId,
    pub span: Span,
    /// `!`, `-`, `+`, `~`, `typeof`, `void`, `delete`.
    pub operator: String,
    pub argument: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateExpression {
    pub node_id: NodeId,
    pub span: Span,
    /// `++` or `--`.
    pub operator: String,
    pub prefix: bool,
    pub argument: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpression {
    pub node_id: NodeId,
    pub span: Span,
    pub left: Expression,
    pub operator: String,
    pub right: Expression,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOperator {
    And,
    Or,
    Coalesce,
}

impl LogicalOperator {
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "&&" => Some(Self::And),
            "||" => Some(Self::Or),
            "??" => Some(Self::Coalesce),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogicalExpression {
    pub node_id: NodeId,
    pub span: Span,
    pub left: Expression,
    pub operator: LogicalOperator,
    pub right: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalExpression {
    pub node_id: NodeId,
    pub span: Span,
    pub test: Expression,
    pub consequent: Expression,
    pub alternate: Expression,
}

/// Target of an assignment or update: a simple name, a member, or a
/// destructuring pattern.
#[derive(Debug, Clone, PartialEq)]
pub enum AssignmentTarget {
    Identifier(IdentifierReference),
    Member(Box<MemberExpression>),
    Pattern(Pattern),
    Other(Expression),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpression {
    pub node_id: NodeId,
    pub span: Span,
    pub target: AssignmentTarget,
    /// `=`, `+=`, `&&=`, `||=`, `??=`, …
    pub operator: String,
    pub right: Expression,
}

impl AssignmentExpression {
    #[must_use]
    pub fn is_logical(&self) -> bool {
        matches!(self.operator.as_str(), "&&=" | "||=" | "??=")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SequenceExpression {
    pub node_id: NodeId,
    pub span: Span,
    pub expressions: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParenthesizedExpression {
    pub node_id: NodeId,
    pub span: Span,
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AwaitExpression {
    pub node_id: NodeId,
    pub span: Span,
    pub argument: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct YieldExpression {
    pub node_id: NodeId,
    pub span: Span,
    pub argument: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpreadElement {
    pub node_id: NodeId,
    pub span: Span,
    pub argument: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TsAsExpression {
    pub node_id: NodeId,
    pub span: Span,
    pub expression: Expression,
    pub type_annotation: TsType,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TsSatisfiesExpression {
    pub node_id: NodeId,
    pub span: Span,
    pub expression: Expression,
    pub type_annotation: TsType,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TsNonNullExpression {
    pub node_id: NodeId,
    pub span: Span,
    pub expression: Expression,
}

// ── Patterns ───────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    Identifier(BindingIdentifier),
    Object(Box<ObjectPattern>),
    Array(Box<ArrayPattern>),
    Assignment(Box<AssignmentPattern>),
    Rest(Box<RestElement>),
    /// Member targets inside destructuring assignments (`[obj.a] = …`).
    Expression(Box<Expression>),
}

impl Pattern {
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Identifier(node) => node.span,
            Self::Object(node) => node.span,
            Self::Array(node) => node.span,
            Self::Assignment(node) => node.span,
            Self::Rest(node) => node.span,
            Self::Expression(node) => node.span(),
        }
    }

    /// Every binding identifier introduced by this pattern, in source order.
    #[must_use]
    pub fn binding_identifiers(&self) -> Vec<&BindingIdentifier> {
        let mut out = Vec::new();
        self.collect_bindings(&mut out);
        out
    }

    fn collect_bindings<'a>(&'a self, out: &mut Vec<&'a BindingIdentifier>) {
        match self {
            Self::Identifier(ident) => out.push(ident),
            Self::Object(object) => {
                for property in &object.properties {
                    property.value.collect_bindings(out);
                }
                if let Some(rest) = &object.rest {
                    rest.argument.collect_bindings(out);
                }
            }
            Self::Array(array) => {
                for element in array.elements.iter().flatten() {
                    element.collect_bindings(out);
                }
                if let Some(rest) = &array.rest {
                    rest.argument.collect_bindings(out);
                }
            }
            Self::Assignment(assignment) => assignment.left.collect_bindings(out),
            Self::Rest(rest) => rest.argument.collect_bindings(out),
            Self::Expression(_) => {}
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectPattern {
    pub node_id: NodeId,
    pub span: Span,
    pub properties: Vec<BindingProperty>,
    pub rest: Option<RestElement>,
}

/// `key: value` inside an object pattern. Shorthand `{ a }` and
/// `{ a = 1 }` lower to a key plus an identifier (or assignment) value.
#[derive(Debug, Clone, PartialEq)]
pub struct BindingProperty {
    pub node_id: NodeId,
    pub span: Span,
    pub key: PropertyKey,
    pub value: Pattern,
    pub shorthand: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayPattern {
    pub node_id: NodeId,
    pub span: Span,
    pub elements: Vec<Option<Pattern>>,
    pub rest: Option<RestElement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentPattern {
    pub node_id: NodeId,
    pub span: Span,
    pub left: Pattern,
    pub right: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RestElement {
    pub node_id: NodeId,
    pub span: Span,
    pub argument: Pattern,
}

// ── TypeScript declarations ────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct TsInterfaceDeclaration {
    pub node_id: NodeId,
    pub span: Span,
    pub name: BindingIdentifier,
    pub extends: Vec<TsType>,
    pub body: Vec<TsSignature>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TsTypeAliasDeclaration {
    pub node_id: NodeId,
    pub span: Span,
    pub name: BindingIdentifier,
    pub type_annotation: TsType,
}
