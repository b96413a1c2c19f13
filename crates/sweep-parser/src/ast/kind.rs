//! Borrowed view over any node of the tree.

use super::*;

/// A reference to one node of any category. Produced by the semantic model's
/// preorder node table so analyses can walk parents and match on kinds.
#[derive(Debug, Clone, Copy)]
pub enum AstKind<'a> {
    Program(&'a Program),
    BindingIdentifier(&'a BindingIdentifier),
    IdentifierReference(&'a IdentifierReference),
    IdentifierName(&'a IdentifierName),
    ExpressionStatement(&'a ExpressionStatement),
    VariableDeclaration(&'a VariableDeclaration),
    VariableDeclarator(&'a VariableDeclarator),
    ReturnStatement(&'a ReturnStatement),
    IfStatement(&'a IfStatement),
    ForStatement(&'a ForStatement),
    ForInStatement(&'a ForInStatement),
    WhileStatement(&'a WhileStatement),
    DoWhileStatement(&'a DoWhileStatement),
    SwitchStatement(&'a SwitchStatement),
    SwitchCase(&'a SwitchCase),
    TryStatement(&'a TryStatement),
    CatchClause(&'a CatchClause),
    ThrowStatement(&'a ThrowStatement),
    BlockStatement(&'a BlockStatement),
    LabeledStatement(&'a LabeledStatement),
    ImportDeclaration(&'a ImportDeclaration),
    ImportSpecifier(&'a ImportSpecifier),
    ExportNamedDeclaration(&'a ExportNamedDeclaration),
    ExportSpecifier(&'a ExportSpecifier),
    ModuleExportName(&'a ModuleExportName),
    ExportDefaultDeclaration(&'a ExportDefaultDeclaration),
    Function(&'a Function),
    ArrowFunction(&'a ArrowFunction),
    FunctionBody(&'a FunctionBody),
    Param(&'a Param),
    Class(&'a Class),
    MethodDefinition(&'a MethodDefinition),
    PropertyDefinition(&'a PropertyDefinition),
    StaticBlock(&'a StaticBlock),
    StringLiteral(&'a StringLiteral),
    TemplateLiteral(&'a TemplateLiteral),
    NumericLiteral(&'a NumericLiteral),
    BooleanLiteral(&'a BooleanLiteral),
    NullLiteral(&'a NullLiteral),
    OtherLiteral(&'a OtherLiteral),
    ThisExpression(&'a ThisExpression),
    ArrayExpression(&'a ArrayExpression),
    ObjectExpression(&'a ObjectExpression),
    ObjectProperty(&'a ObjectProperty),
    CallExpression(&'a CallExpression),
    NewExpression(&'a NewExpression),
    MemberExpression(&'a MemberExpression),
    UnaryExpression(&'a UnaryExpression),
    UpdateExpression(&'a UpdateExpression),
    BinaryExpression(&'a BinaryExpression),
    LogicalExpression(&'a LogicalExpression),
    ConditionalExpression(&'a ConditionalExpression),
    AssignmentExpression(&'a AssignmentExpression),
    SequenceExpression(&'a SequenceExpression),
    ParenthesizedExpression(&'a ParenthesizedExpression),
    AwaitExpression(&'a AwaitExpression),
    YieldExpression(&'a YieldExpression),
    SpreadElement(&'a SpreadElement),
    TsAsExpression(&'a TsAsExpression),
    TsSatisfiesExpression(&'a TsSatisfiesExpression),
    TsNonNullExpression(&'a TsNonNullExpression),
    ObjectPattern(&'a ObjectPattern),
    BindingProperty(&'a BindingProperty),
    ArrayPattern(&'a ArrayPattern),
    AssignmentPattern(&'a AssignmentPattern),
    RestElement(&'a RestElement),
    TsInterfaceDeclaration(&'a TsInterfaceDeclaration),
    TsTypeAliasDeclaration(&'a TsTypeAliasDeclaration),
    TsKeywordType(&'a TsKeywordType),
    TsTypeReference(&'a TsTypeReference),
    TsTypeName(&'a TsTypeName),
    TsArrayType(&'a TsArrayType),
    TsTupleType(&'a TsTupleType),
    TsTypeLiteral(&'a TsTypeLiteral),
    TsUnionType(&'a TsUnionType),
    TsIntersectionType(&'a TsIntersectionType),
    TsFunctionType(&'a TsFunctionType),
    TsParenthesizedType(&'a TsParenthesizedType),
    TsTypeOperator(&'a TsTypeOperator),
    TsOptionalType(&'a TsOptionalType),
    TsLiteralType(&'a TsLiteralType),
    TsOpaqueType(&'a TsOpaqueType),
    TsPropertySignature(&'a TsPropertySignature),
    TsMethodSignature(&'a TsMethodSignature),
    TsCallSignature(&'a TsCallSignature),
    TsIndexSignature(&'a TsIndexSignature),
    JsxElement(&'a JsxElement),
    JsxFragment(&'a JsxFragment),
    JsxOpeningElement(&'a JsxOpeningElement),
    JsxIdentifier(&'a JsxIdentifier),
    JsxNamespacedName(&'a JsxNamespacedName),
    JsxMemberName(&'a JsxMemberName),
    JsxAttribute(&'a JsxAttribute),
    JsxSpreadAttribute(&'a JsxSpreadAttribute),
    JsxExpressionContainer(&'a JsxExpressionContainer),
    JsxText(&'a JsxText),
    Unknown(&'a UnknownNode),
}

impl<'a> AstKind<'a> {
    #[must_use]
    pub const fn node_id(self) -> NodeId {
        match self {
            Self::Program(node) => node.node_id,
            Self::BindingIdentifier(node) => node.node_id,
            Self::IdentifierReference(node) => node.node_id,
            Self::IdentifierName(node) => node.node_id,
            Self::ExpressionStatement(node) => node.node_id,
            Self::VariableDeclaration(node) => node.node_id,
            Self::VariableDeclarator(node) => node.node_id,
            Self::ReturnStatement(node) => node.node_id,
            Self::IfStatement(node) => node.node_id,
            Self::ForStatement(node) => node.node_id,
            Self::ForInStatement(node) => node.node_id,
            Self::WhileStatement(node) => node.node_id,
            Self::DoWhileStatement(node) => node.node_id,
            Self::SwitchStatement(node) => node.node_id,
            Self::SwitchCase(node) => node.node_id,
            Self::TryStatement(node) => node.node_id,
            Self::CatchClause(node) => node.node_id,
            Self::ThrowStatement(node) => node.node_id,
            Self::BlockStatement(node) => node.node_id,
            Self::LabeledStatement(node) => node.node_id,
            Self::ImportDeclaration(node) => node.node_id,
            Self::ImportSpecifier(node) => node.node_id,
            Self::ExportNamedDeclaration(node) => node.node_id,
            Self::ExportSpecifier(node) => node.node_id,
            Self::ModuleExportName(node) => node.node_id,
            Self::ExportDefaultDeclaration(node) => node.node_id,
            Self::Function(node) => node.node_id,
            Self::ArrowFunction(node) => node.node_id,
            Self::FunctionBody(node) => node.node_id,
            Self::Param(node) => node.node_id,
            Self::Class(node) => node.node_id,
            Self::MethodDefinition(node) => node.node_id,
            Self::PropertyDefinition(node) => node.node_id,
            Self::StaticBlock(node) => node.node_id,
            Self::StringLiteral(node) => node.node_id,
            Self::TemplateLiteral(node) => node.node_id,
            Self::NumericLiteral(node) => node.node_id,
            Self::BooleanLiteral(node) => node.node_id,
            Self::NullLiteral(node) => node.node_id,
            Self::OtherLiteral(node) => node.node_id,
            Self::ThisExpression(node) => node.node_id,
            Self::ArrayExpression(node) => node.node_id,
            Self::ObjectExpression(node) => node.node_id,
            Self::ObjectProperty(node) => node.node_id,
            Self::CallExpression(node) => node.node_id,
            Self::NewExpression(node) => node.node_id,
            Self::MemberExpression(node) => node.node_id,
            Self::UnaryExpression(node) => node.node_id,
            Self::UpdateExpression(node) => node.node_id,
            Self::BinaryExpression(node) => node.node_id,
            Self::LogicalExpression(node) => node.node_id,
            Self::ConditionalExpression(node) => node.node_id,
            Self::AssignmentExpression(node) => node.node_id,
            Self::SequenceExpression(node) => node.node_id,
            Self::ParenthesizedExpression(node) => node.node_id,
            Self::AwaitExpression(node) => node.node_id,
            Self::YieldExpression(node) => node.node_id,
            Self::SpreadElement(node) => node.node_id,
            Self::TsAsExpression(node) => node.node_id,
            Self::TsSatisfiesExpression(node) => node.node_id,
            Self::TsNonNullExpression(node) => node.node_id,
            Self::ObjectPattern(node) => node.node_id,
            Self::BindingProperty(node) => node.node_id,
            Self::ArrayPattern(node) => node.node_id,
            Self::AssignmentPattern(node) => node.node_id,
            Self::RestElement(node) => node.node_id,
            Self::TsInterfaceDeclaration(node) => node.node_id,
            Self::TsTypeAliasDeclaration(node) => node.node_id,
            Self::TsKeywordType(node) => node.node_id,
            Self::TsTypeReference(node) => node.node_id,
            Self::TsTypeName(node) => node.node_id,
            Self::TsArrayType(node) => node.node_id,
            Self::TsTupleType(node) => node.node_id,
            Self::TsTypeLiteral(node) => node.node_id,
            Self::TsUnionType(node) => node.node_id,
            Self::TsIntersectionType(node) => node.node_id,
            Self::TsFunctionType(node) => node.node_id,
            Self::TsParenthesizedType(node) => node.node_id,
            Self::TsTypeOperator(node) => node.node_id,
            Self::TsOptionalType(node) => node.node_id,
            Self::TsLiteralType(node) => node.node_id,
            Self::TsOpaqueType(node) => node.node_id,
            Self::TsPropertySignature(node) => node.node_id,
            Self::TsMethodSignature(node) => node.node_id,
            Self::TsCallSignature(node) => node.node_id,
            Self::TsIndexSignature(node) => node.node_id,
            Self::JsxElement(node) => node.node_id,
            Self::JsxFragment(node) => node.node_id,
            Self::JsxOpeningElement(node) => node.node_id,
            Self::JsxIdentifier(node) => node.node_id,
            Self::JsxNamespacedName(node) => node.node_id,
            Self::JsxMemberName(node) => node.node_id,
            Self::JsxAttribute(node) => node.node_id,
            Self::JsxSpreadAttribute(node) => node.node_id,
            Self::JsxExpressionContainer(node) => node.node_id,
            Self::JsxText(node) => node.node_id,
            Self::Unknown(node) => node.node_id,
        }
    }

    #[must_use]
    pub const fn span(self) -> Span {
        match self {
            Self::Program(node) => node.span,
            Self::BindingIdentifier(node) => node.span,
            Self::IdentifierReference(node) => node.span,
            Self::IdentifierName(node) => node.span,
            Self::ExpressionStatement(node) => node.span,
            Self::VariableDeclaration(node) => node.span,
            Self::VariableDeclarator(node) => node.span,
            Self::ReturnStatement(node) => node.span,
            Self::IfStatement(node) => node.span,
            Self::ForStatement(node) => node.span,
            Self::ForInStatement(node) => node.span,
            Self::WhileStatement(node) => node.span,
            Self::DoWhileStatement(node) => node.span,
            Self::SwitchStatement(node) => node.span,
            Self::SwitchCase(node) => node.span,
            Self::TryStatement(node) => node.span,
            Self::CatchClause(node) => node.span,
            Self::ThrowStatement(node) => node.span,
            Self::BlockStatement(node) => node.span,
            Self::LabeledStatement(node) => node.span,
            Self::ImportDeclaration(node) => node.span,
            Self::ImportSpecifier(node) => node.span,
            Self::ExportNamedDeclaration(node) => node.span,
            Self::ExportSpecifier(node) => node.span,
            Self::ModuleExportName(node) => node.span,
            Self::ExportDefaultDeclaration(node) => node.span,
            Self::Function(node) => node.span,
            Self::ArrowFunction(node) => node.span,
            Self::FunctionBody(node) => node.span,
            Self::Param(node) => node.span,
            Self::Class(node) => node.span,
            Self::MethodDefinition(node) => node.span,
            Self::PropertyDefinition(node) => node.span,
            Self::StaticBlock(node) => node.span,
            Self::StringLiteral(node) => node.span,
            Self::TemplateLiteral(node) => node.span,
            Self::NumericLiteral(node) => node.span,
            Self::BooleanLiteral(node) => node.span,
            Self::NullLiteral(node) => node.span,
            Self::OtherLiteral(node) => node.span,
            Self::ThisExpression(node) => node.span,
            Self::ArrayExpression(node) => node.span,
            Self::ObjectExpression(node) => node.span,
            Self::ObjectProperty(node) => node.span,
            Self::CallExpression(node) => node.span,
            Self::NewExpression(node) => node.span,
            Self::MemberExpression(node) => node.span,
            Self::UnaryExpression(node) => node.span,
            Self::UpdateExpression(node) => node.span,
            Self::BinaryExpression(node) => node.span,
            Self::LogicalExpression(node) => node.span,
            Self::ConditionalExpression(node) => node.span,
            Self::AssignmentExpression(node) => node.span,
            Self::SequenceExpression(node) => node.span,
            Self::ParenthesizedExpression(node) => node.span,
            Self::AwaitExpression(node) => node.span,
            Self::YieldExpression(node) => node.span,
            Self::SpreadElement(node) => node.span,
            Self::TsAsExpression(node) => node.span,
            Self::TsSatisfiesExpression(node) => node.span,
            Self::TsNonNullExpression(node) => node.span,
            Self::ObjectPattern(node) => node.span,
            Self::BindingProperty(node) => node.span,
            Self::ArrayPattern(node) => node.span,
            Self::AssignmentPattern(node) => node.span,
            Self::RestElement(node) => node.span,
            Self::TsInterfaceDeclaration(node) => node.span,
            Self::TsTypeAliasDeclaration(node) => node.span,
            Self::TsKeywordType(node) => node.span,
            Self::TsTypeReference(node) => node.span,
            Self::TsTypeName(node) => node.span,
            Self::TsArrayType(node) => node.span,
            Self::TsTupleType(node) => node.span,
            Self::TsTypeLiteral(node) => node.span,
            Self::TsUnionType(node) => node.span,
            Self::TsIntersectionType(node) => node.span,
            Self::TsFunctionType(node) => node.span,
            Self::TsParenthesizedType(node) => node.span,
            Self::TsTypeOperator(node) => node.span,
            Self::TsOptionalType(node) => node.span,
            Self::TsLiteralType(node) => node.span,
            Self::TsOpaqueType(node) => node.span,
            Self::TsPropertySignature(node) => node.span,
            Self::TsMethodSignature(node) => node.span,
            Self::TsCallSignature(node) => node.span,
            Self::TsIndexSignature(node) => node.span,
            Self::JsxElement(node) => node.span,
            Self::JsxFragment(node) => node.span,
            Self::JsxOpeningElement(node) => node.span,
            Self::JsxIdentifier(node) => node.span,
            Self::JsxNamespacedName(node) => node.span,
            Self::JsxMemberName(node) => node.span,
            Self::JsxAttribute(node) => node.span,
            Self::JsxSpreadAttribute(node) => node.span,
            Self::JsxExpressionContainer(node) => node.span,
            Self::JsxText(node) => node.span,
            Self::Unknown(node) => node.span,
        }
    }

    /// Stable kind name, mainly for debugging and test assertions.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Program(_) => "Program",
            Self::BindingIdentifier(_) => "BindingIdentifier",
            Self::IdentifierReference(_) => "IdentifierReference",
            Self::IdentifierName(_) => "IdentifierName",
            Self::ExpressionStatement(_) => "ExpressionStatement",
            Self::VariableDeclaration(_) => "VariableDeclaration",
            Self::VariableDeclarator(_) => "VariableDeclarator",
            Self::ReturnStatement(_) => "ReturnStatement",
            Self::IfStatement(_) => "IfStatement",
            Self::ForStatement(_) => "ForStatement",
            Self::ForInStatement(_) => "ForInStatement",
            Self::WhileStatement(_) => "WhileStatement",
            Self::DoWhileStatement(_) => "DoWhileStatement",
            Self::SwitchStatement(_) => "SwitchStatement",
            Self::SwitchCase(_) => "SwitchCase",
            Self::TryStatement(_) => "TryStatement",
            Self::CatchClause(_) => "CatchClause",
            Self::ThrowStatement(_) => "ThrowStatement",
            Self::BlockStatement(_) => "BlockStatement",
            Self::LabeledStatement(_) => "LabeledStatement",
            Self::ImportDeclaration(_) => "ImportDeclaration",
            Self::ImportSpecifier(_) => "ImportSpecifier",
            Self::ExportNamedDeclaration(_) => "ExportNamedDeclaration",
            Self::ExportSpecifier(_) => "ExportSpecifier",
            Self::ModuleExportName(_) => "ModuleExportName",
            Self::ExportDefaultDeclaration(_) => "ExportDefaultDeclaration",
            Self::Function(_) => "Function",
            Self::ArrowFunction(_) => "ArrowFunction",
            Self::FunctionBody(_) => "FunctionBody",
            Self::Param(_) => "Param",
            Self::Class(_) => "Class",
            Self::MethodDefinition(_) => "MethodDefinition",
            Self::PropertyDefinition(_) => "PropertyDefinition",
            Self::StaticBlock(_) => "StaticBlock",
            Self::StringLiteral(_) => "StringLiteral",
            Self::TemplateLiteral(_) => "TemplateLiteral",
            Self::NumericLiteral(_) => "NumericLiteral",
            Self::BooleanLiteral(_) => "BooleanLiteral",
            Self::NullLiteral(_) => "NullLiteral",
            Self::OtherLiteral(_) => "OtherLiteral",
            Self::ThisExpression(_) => "ThisExpression",
            Self::ArrayExpression(_) => "ArrayExpression",
            Self::ObjectExpression(_) => "ObjectExpression",
            Self::ObjectProperty(_) => "ObjectProperty",
            Self::CallExpression(_) => "CallExpression",
            Self::NewExpression(_) => "NewExpression",
            Self::MemberExpression(_) => "MemberExpression",
            Self::UnaryExpression(_) => "UnaryExpression",
            Self::UpdateExpression(_) => "UpdateExpression",
            Self::BinaryExpression(_) => "BinaryExpression",
            Self::LogicalExpression(_) => "LogicalExpression",
            Self::ConditionalExpression(_) => "ConditionalExpression",
            Self::AssignmentExpression(_) => "AssignmentExpression",
            Self::SequenceExpression(_) => "SequenceExpression",
            Self::ParenthesizedExpression(_) => "ParenthesizedExpression",
            Self::AwaitExpression(_) => "AwaitExpression",
            Self::YieldExpression(_) => "YieldExpression",
            Self::SpreadElement(_) => "SpreadElement",
            Self::TsAsExpression(_) => "TsAsExpression",
            Self::TsSatisfiesExpression(_) => "TsSatisfiesExpression",
            Self::TsNonNullExpression(_) => "TsNonNullExpression",
            Self::ObjectPattern(_) => "ObjectPattern",
            Self::BindingProperty(_) => "BindingProperty",
            Self::ArrayPattern(_) => "ArrayPattern",
            Self::AssignmentPattern(_) => "AssignmentPattern",
            Self::RestElement(_) => "RestElement",
            Self::TsInterfaceDeclaration(_) => "TsInterfaceDeclaration",
            Self::TsTypeAliasDeclaration(_) => "TsTypeAliasDeclaration",
            Self::TsKeywordType(_) => "TsKeywordType",
            Self::TsTypeReference(_) => "TsTypeReference",
            Self::TsTypeName(_) => "TsTypeName",
            Self::TsArrayType(_) => "TsArrayType",
            Self::TsTupleType(_) => "TsTupleType",
            Self::TsTypeLiteral(_) => "TsTypeLiteral",
            Self::TsUnionType(_) => "TsUnionType",
            Self::TsIntersectionType(_) => "TsIntersectionType",
            Self::TsFunctionType(_) => "TsFunctionType",
            Self::TsParenthesizedType(_) => "TsParenthesizedType",
            Self::TsTypeOperator(_) => "TsTypeOperator",
            Self::TsOptionalType(_) => "TsOptionalType",
            Self::TsLiteralType(_) => "TsLiteralType",
            Self::TsOpaqueType(_) => "TsOpaqueType",
            Self::TsPropertySignature(_) => "TsPropertySignature",
            Self::TsMethodSignature(_) => "TsMethodSignature",
            Self::TsCallSignature(_) => "TsCallSignature",
            Self::TsIndexSignature(_) => "TsIndexSignature",
            Self::JsxElement(_) => "JsxElement",
            Self::JsxFragment(_) => "JsxFragment",
            Self::JsxOpeningElement(_) => "JsxOpeningElement",
            Self::JsxIdentifier(_) => "JsxIdentifier",
            Self::JsxNamespacedName(_) => "JsxNamespacedName",
            Self::JsxMemberName(_) => "JsxMemberName",
            Self::JsxAttribute(_) => "JsxAttribute",
            Self::JsxSpreadAttribute(_) => "JsxSpreadAttribute",
            Self::JsxExpressionContainer(_) => "JsxExpressionContainer",
            Self::JsxText(_) => "JsxText",
            Self::Unknown(_) => "Unknown",
        }
    }

    /// Function declarations, function expressions, methods and arrows.
    #[must_use]
    pub const fn is_function_like(self) -> bool {
        matches!(self, Self::Function(_) | Self::ArrowFunction(_))
    }

    #[must_use]
    pub const fn as_function(self) -> Option<&'a Function> {
        match self {
            Self::Function(node) => Some(node),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_arrow(self) -> Option<&'a ArrowFunction> {
        match self {
            Self::ArrowFunction(node) => Some(node),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_call(self) -> Option<&'a CallExpression> {
        match self {
            Self::CallExpression(node) => Some(node),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_jsx_attribute(self) -> Option<&'a JsxAttribute> {
        match self {
            Self::JsxAttribute(node) => Some(node),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_identifier_reference(self) -> Option<&'a IdentifierReference> {
        match self {
            Self::IdentifierReference(node) => Some(node),
            _ => None,
        }
    }
}
