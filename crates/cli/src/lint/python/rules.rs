// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Intel Corporation

//! The built-in rule set.
//!
//! Each rule judges one syntax node at a time. Rules are named by their
//! type name (`TrailingCommaRule`), which is also what `--include`,
//! `--ignore` and disable comments refer to.

use std::fmt;
use std::str::FromStr;

use tree_sitter::Node;

use super::syntax::{Preorder, children, named, text, unparen};

/// A named Python lint rule. Variants are in name order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rule {
    AddingStrings,
    AvoidDatetimeNow,
    ForbidImportTestSuite,
    ForbidTestSuiteInheritance,
    GeneratorExpression,
    NoImportLibsigoptCompute,
    ProtobufMethods,
    SafeIterator,
    SafeRecursive,
    SafeYield,
    SetComparison,
    TrailingComma,
}

/// A construct a rule refuses to judge; linting the file fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unsupported(pub &'static str);

impl Rule {
    pub const ALL: &'static [Rule] = &[
        Rule::AddingStrings,
        Rule::AvoidDatetimeNow,
        Rule::ForbidImportTestSuite,
        Rule::ForbidTestSuiteInheritance,
        Rule::GeneratorExpression,
        Rule::NoImportLibsigoptCompute,
        Rule::ProtobufMethods,
        Rule::SafeIterator,
        Rule::SafeRecursive,
        Rule::SafeYield,
        Rule::SetComparison,
        Rule::TrailingComma,
    ];

    /// Rules on without `--include`.
    pub const DEFAULT_ENABLED: &'static [Rule] = &[
        Rule::AddingStrings,
        Rule::ForbidImportTestSuite,
        Rule::ForbidTestSuiteInheritance,
        Rule::SafeRecursive,
        Rule::SetComparison,
        Rule::TrailingComma,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Rule::AddingStrings => "AddingStringsRule",
            Rule::AvoidDatetimeNow => "AvoidDatetimeNowRule",
            Rule::ForbidImportTestSuite => "ForbidImportTestSuiteRule",
            Rule::ForbidTestSuiteInheritance => "ForbidTestSuiteInheritanceRule",
            Rule::GeneratorExpression => "GeneratorExpressionRule",
            Rule::NoImportLibsigoptCompute => "NoImportLibsigoptComputeRule",
            Rule::ProtobufMethods => "ProtobufMethodsRule",
            Rule::SafeIterator => "SafeIteratorRule",
            Rule::SafeRecursive => "SafeRecursiveRule",
            Rule::SafeYield => "SafeYieldRule",
            Rule::SetComparison => "SetComparisonRule",
            Rule::TrailingComma => "TrailingCommaRule",
        }
    }

    /// Judge one node: `Ok(Some(message))` is a violation.
    pub fn check(self, node: Node<'_>, source: &str) -> Result<Option<String>, Unsupported> {
        let message = match self {
            Rule::AddingStrings => adding_strings(node, source),
            Rule::AvoidDatetimeNow => avoid_datetime_now(node, source),
            Rule::ForbidImportTestSuite => forbid_import_test_suite(node, source),
            Rule::ForbidTestSuiteInheritance => forbid_test_suite_inheritance(node, source),
            Rule::GeneratorExpression => generator_expression(node, source),
            Rule::NoImportLibsigoptCompute => no_import_libsigopt_compute(node, source),
            Rule::ProtobufMethods => protobuf_methods(node, source),
            Rule::SafeIterator => safe_iterator(node, source),
            Rule::SafeRecursive => return safe_recursive(node, source),
            Rule::SafeYield => safe_yield(node, source),
            Rule::SetComparison => set_comparison(node, source),
            Rule::TrailingComma => trailing_comma(node),
        };
        Ok(message)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rule {
    type Err = String;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Rule::ALL
            .iter()
            .copied()
            .find(|rule| rule.name() == name)
            .ok_or_else(|| format!("unknown python lint rule `{name}`"))
    }
}

// =============================================================================
// SHARED SHAPES
// =============================================================================

/// Name of a plain function call: `name(...)`.
fn called_name<'s>(node: Node<'_>, source: &'s str) -> Option<&'s str> {
    if node.kind() != "call" {
        return None;
    }
    let function = unparen(node.child_by_field_name("function")?);
    (function.kind() == "identifier").then(|| text(function, source))
}

/// Receiver and method name of a method call: `receiver.method(...)`.
fn method_call<'t, 's>(node: Node<'t>, source: &'s str) -> Option<(Node<'t>, &'s str)> {
    if node.kind() != "call" {
        return None;
    }
    let function = unparen(node.child_by_field_name("function")?);
    if function.kind() != "attribute" {
        return None;
    }
    let receiver = function.child_by_field_name("object")?;
    let method = function.child_by_field_name("attribute")?;
    Some((receiver, text(method, source)))
}

/// Closest `def` around `node`.
fn enclosing_function(node: Node<'_>) -> Option<Node<'_>> {
    let mut current = node.parent();
    while let Some(candidate) = current {
        if candidate.kind() == "function_definition" {
            return Some(candidate);
        }
        current = candidate.parent();
    }
    None
}

// =============================================================================
// RULES
// =============================================================================

fn adding_strings(node: Node<'_>, source: &str) -> Option<String> {
    if node.kind() != "binary_operator" {
        return None;
    }
    let is_text = |side: Option<Node<'_>>| {
        side.is_some_and(|side| is_text_literal(unparen(side), source))
    };
    (is_text(node.child_by_field_name("left")) && is_text(node.child_by_field_name("right")))
        .then(|| "use parenthesis instead of addition for long strings".to_string())
}

/// A `str` literal (f-strings included), implicitly concatenated or not.
fn is_text_literal(node: Node<'_>, source: &str) -> bool {
    let literal = match node.kind() {
        "string" => node,
        "concatenated_string" => match named(node).next() {
            Some(first) => first,
            None => return false,
        },
        _ => return false,
    };
    let prefix = text(literal, source)
        .split(['\'', '"'])
        .next()
        .unwrap_or_default();
    !prefix.contains(['b', 'B'])
}

fn avoid_datetime_now(node: Node<'_>, source: &str) -> Option<String> {
    let (receiver, method) = method_call(node, source)?;
    if !matches!(method, "now" | "utcnow") {
        return None;
    }
    let receiver = unparen(receiver);
    if receiver.kind() != "attribute" {
        return None;
    }
    let module = receiver.child_by_field_name("attribute")?;
    matches!(text(module, source), "dt" | "datetime").then(|| {
        format!(
            "Prefer `current_datetime` to `datetime.{method}` to ensure consistent use of UTC timezone"
        )
    })
}

/// Names an import statement binds (`as` names win).
fn imported_names<'s>(node: Node<'_>, source: &'s str) -> Vec<&'s str> {
    // The first named child of `from x import ...` is the module.
    let skip = match node.kind() {
        "import_statement" => 0,
        "import_from_statement" => 1,
        _ => return Vec::new(),
    };
    named(node)
        .skip(skip)
        .filter_map(|alias| match alias.kind() {
            "aliased_import" => alias.child_by_field_name("alias"),
            "dotted_name" => Some(alias),
            _ => None,
        })
        .map(|name| text(name, source))
        .collect()
}

fn forbid_import_test_suite(node: Node<'_>, source: &str) -> Option<String> {
    imported_names(node, source).into_iter().find_map(|name| {
        ["Test", "test_"]
            .into_iter()
            .find(|prefix| name.starts_with(*prefix))
            .map(|prefix| {
                format!(
                    "Importing the test suite {name} may cause it to get run twice. \
                     Imported objects beginning with `{prefix}` are interpreted by pytest as test suites."
                )
            })
    })
}

fn forbid_test_suite_inheritance(node: Node<'_>, source: &str) -> Option<String> {
    const PREFIX: &str = "Test";
    if node.kind() != "class_definition" {
        return None;
    }
    if !text(node.child_by_field_name("name")?, source).starts_with(PREFIX) {
        return None;
    }
    let bases = node.child_by_field_name("superclasses")?;
    let base = named(bases)
        .filter(|base| base.kind() == "identifier")
        .map(|base| text(base, source))
        .find(|base| base.starts_with(PREFIX))?;
    Some(format!(
        "Inheriting the test suite {base} may cause it to get run twice. \
         Classes beginning with `{PREFIX}` are interpreted by pytest as test suites."
    ))
}

fn generator_expression(node: Node<'_>, source: &str) -> Option<String> {
    let name = called_name(node, source).filter(|name| matches!(*name, "map" | "filter"))?;
    Some(format!("use generator expression over the {name} function"))
}

fn no_import_libsigopt_compute(node: Node<'_>, source: &str) -> Option<String> {
    const COMPUTE: &str = "libsigopt.compute";
    let imports_compute = match node.kind() {
        "import_statement" => named(node)
            .filter_map(|alias| match alias.kind() {
                "aliased_import" => alias.child_by_field_name("name"),
                "dotted_name" => Some(alias),
                _ => None,
            })
            .any(|name| text(name, source) == COMPUTE),
        "import_from_statement" => node
            .child_by_field_name("module_name")
            .and_then(|module| match module.kind() {
                "relative_import" => named(module).find(|part| part.kind() == "dotted_name"),
                _ => Some(module),
            })
            .is_some_and(|module| text(module, source).starts_with(COMPUTE)),
        _ => false,
    };
    imports_compute.then(|| {
        "Should not import from libsigopt.compute, consider moving the class/method to \
         libsigopt.aux or libsigopt.views"
            .to_string()
    })
}

fn protobuf_methods(node: Node<'_>, source: &str) -> Option<String> {
    let (_, method) = method_call(node, source)?;
    matches!(method, "MergeFrom" | "CopyFrom").then(|| {
        format!(
            "Do not call `{method}` on protobufs - prefer the safer `{method}` in zigopt.protobuf.lib`"
        )
    })
}

/// Builtins that return one-shot iterators.
const ITERATORS: &[&str] = &["range", "zip", "map", "filter"];

fn iterator_call<'s>(node: Node<'_>, source: &'s str) -> Option<&'s str> {
    called_name(unparen(node), source).filter(|name| ITERATORS.contains(name))
}

fn safe_iterator(node: Node<'_>, source: &str) -> Option<String> {
    match node.kind() {
        "return_statement" => {
            let name = named(node).next().and_then(|value| iterator_call(value, source))?;
            Some(format!(
                "returning `{name}` is not allowed, suggest using `yield from` syntax \
                 or returning `zigopt.common.lists.safe_iterator`"
            ))
        }
        "binary_operator" => {
            let is_add = node
                .child_by_field_name("operator")
                .is_some_and(|op| op.kind() == "+");
            let adds_iterator = [
                node.child_by_field_name("left"),
                node.child_by_field_name("right"),
            ]
            .into_iter()
            .flatten()
            .any(|side| iterator_call(side, source).is_some());
            (is_add && adds_iterator).then(|| "adding iterators is not allowed".to_string())
        }
        _ => None,
    }
}

/// Parameter shape of a `def`.
#[derive(Debug, Default)]
struct Signature {
    /// Positional-or-keyword parameters (positional-only ones excluded).
    positional: usize,
    vararg: bool,
    kwarg: bool,
    keyword_only: usize,
}

impl Signature {
    fn of(parameters: Node<'_>) -> Self {
        let mut signature = Signature::default();
        let mut after_star = false;
        for param in named(parameters) {
            let kind = match param.kind() {
                "typed_parameter" => named(param).next().map_or("identifier", |inner| inner.kind()),
                kind => kind,
            };
            match kind {
                "list_splat_pattern" => {
                    signature.vararg = true;
                    after_star = true;
                }
                "dictionary_splat_pattern" => signature.kwarg = true,
                "keyword_separator" => after_star = true,
                "positional_separator" => signature.positional = 0,
                _ if after_star => signature.keyword_only += 1,
                _ => signature.positional += 1,
            }
        }
        signature
    }
}

fn safe_recursive(node: Node<'_>, source: &str) -> Result<Option<String>, Unsupported> {
    let Some(name) = called_name(node, source) else {
        return Ok(None);
    };
    let Some(function) = enclosing_function(node) else {
        return Ok(None);
    };
    let is_recursive = function
        .child_by_field_name("name")
        .is_some_and(|own| text(own, source) == name);
    if !is_recursive {
        return Ok(None);
    }
    let Some(parameters) = function.child_by_field_name("parameters") else {
        return Ok(None);
    };

    let signature = Signature::of(parameters);
    if signature.vararg {
        return Err(Unsupported("Linting for recursive calls with *args is not supported"));
    }
    if signature.kwarg {
        return Err(Unsupported("Linting for recursive calls with **kwargs is not supported"));
    }
    if signature.keyword_only > 0 {
        return Err(Unsupported(
            "Linting for recursive calls with keyword-only args is not supported",
        ));
    }

    let passed = node.child_by_field_name("arguments").map_or(0, |args| {
        if args.kind() == "generator_expression" {
            1
        } else {
            named(args).count()
        }
    });
    Ok((passed != signature.positional).then(|| {
        "Recursive call appears to be missing arguments. Specify all arguments for recursive calls."
            .to_string()
    }))
}

/// Decorators that make a generator function safe to call more than once,
/// or that drive control flow with `yield`.
const GENERATOR_DECORATORS: &[&str] = &[
    "generator_to_list",
    "generator_to_dict",
    "generator_to_safe_iterator",
    "unsafe_generator",
    "contextmanager",
    "fixture",
    "hookimpl",
];

/// `@pkg.name`, `@name` and `@name(...)` are all called `name`.
fn decorator_name<'s>(expression: Node<'_>, source: &'s str) -> Option<&'s str> {
    match expression.kind() {
        "attribute" => expression
            .child_by_field_name("attribute")
            .map(|attr| text(attr, source)),
        "identifier" => Some(text(expression, source)),
        "call" => decorator_name(expression.child_by_field_name("function")?, source),
        _ => None,
    }
}

fn safe_yield(node: Node<'_>, source: &str) -> Option<String> {
    if node.kind() != "yield" || !node.is_named() {
        return None;
    }
    let function = enclosing_function(node)?;

    let returns_value = Preorder::new(function)
        .filter(|inner| inner.kind() == "return_statement")
        .any(|ret| named(ret).next().is_some());
    if returns_value {
        return Some("Do not mix `return value` and `yield` in the same function".to_string());
    }

    let protected = function
        .parent()
        .filter(|parent| parent.kind() == "decorated_definition")
        .is_some_and(|definition| {
            named(definition)
                .filter(|child| child.kind() == "decorator")
                .filter_map(|decorator| named(decorator).next())
                .filter_map(|expression| decorator_name(expression, source))
                .any(|name| GENERATOR_DECORATORS.contains(&name))
        });
    (!protected).then(|| {
        "Functions with `yield` should be decorated with a `generator_to_X` function".to_string()
    })
}

/// `set(<comprehension>)` or `{x for x in ...}`.
fn is_comprehended_set(node: Node<'_>, source: &str) -> bool {
    let node = unparen(node);
    match node.kind() {
        "set_comprehension" => true,
        "call" => {
            called_name(node, source) == Some("set")
                && node.child_by_field_name("arguments").is_some_and(|args| {
                    args.kind() == "generator_expression"
                        || named(args).any(|arg| {
                            matches!(arg.kind(), "generator_expression" | "list_comprehension")
                        })
                })
        }
        _ => false,
    }
}

fn set_comparison(node: Node<'_>, source: &str) -> Option<String> {
    if node.kind() != "comparison_operator" {
        return None;
    }
    let parts: Vec<Node<'_>> = children(node)
        .filter(|child| child.kind() != "comment")
        .collect();
    let found = parts.iter().enumerate().any(|(i, op)| {
        if op.is_named() || !matches!(op.kind(), "<=" | ">=") {
            return false;
        }
        let left = parts[..i].iter().rev().find(|part| part.is_named());
        let right = parts[i + 1..].iter().find(|part| part.is_named());
        [left, right]
            .into_iter()
            .flatten()
            .any(|operand| is_comprehended_set(*operand, source))
    });
    found.then(|| "use any() and all() over comprehended set comparisons".to_string())
}

/// `(x,)` or a bare `x,`.
fn is_single_tuple(node: Node<'_>) -> bool {
    let node = unparen(node);
    matches!(node.kind(), "tuple" | "expression_list") && named(node).count() == 1
}

fn trailing_comma(node: Node<'_>) -> Option<String> {
    const MESSAGE: &str = "Prefer `tuple` for single-element tuples";
    let value = match node.kind() {
        // Annotated assignments are left alone.
        "assignment" if node.child_by_field_name("type").is_none() => {
            node.child_by_field_name("right")
        }
        "augmented_assignment" => node.child_by_field_name("right"),
        "return_statement" => named(node).next(),
        "yield" if node.is_named() => named(node).next(),
        "expression_statement" => {
            let mut values = named(node);
            let first = values.next();
            if values.next().is_some() {
                return None;
            }
            // `1,` keeps its comma directly under the statement.
            if first.is_some() && children(node).any(|child| child.kind() == ",") {
                return Some(MESSAGE.to_string());
            }
            first
        }
        _ => None,
    }?;
    is_single_tuple(value).then(|| MESSAGE.to_string())
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
