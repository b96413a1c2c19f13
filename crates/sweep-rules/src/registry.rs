//! Name → constructor table for every rule.

use serde_json::Value;
use sweep_config::ConfigError;

use crate::rule::{Configurable, Rule, RuleMeta};
use crate::rules::{
    complexity, jsx_bem_compound_naming, jsx_compound_part_export_naming, jsx_flat_owner_tree,
    jsx_on_handler_verb_suffix, jsx_on_noun_verb_handler_props, jsx_server_action_prop_suffix,
    max_custom_props, max_params, no_array_props, no_boolean_capability_props, no_componenttype_props,
    no_custom_kebab_case_props, no_element_props, no_exported_context_hooks,
    no_external_binding_mutation, no_handle_prefix_utils, no_handler_return_type, no_hook_jsx,
    no_inline_call_expressions, no_object_props, no_optional_props_without_defaults,
    no_param_reassign, no_pass_through_props, no_prefixed_prop_bundles, no_prop_drilling,
    no_render_helper_functions, no_set_prefix_utils, no_title_case_props, no_useless_hook,
    prefer_const,
};

type Build = fn(Option<&Value>) -> Result<Box<dyn Rule>, ConfigError>;

/// A registered rule: its metadata and how to build it from options.
#[derive(Debug, Clone, Copy)]
pub struct RuleEntry {
    pub meta: &'static RuleMeta,
    build: Build,
}

impl RuleEntry {
    /// Build the rule, validating `options` against its schema.
    pub fn build(&self, options: Option<&Value>) -> Result<Box<dyn Rule>, ConfigError> {
        (self.build)(options)
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.meta.name
    }
}

fn build<R: Configurable>(options: Option<&Value>) -> Result<Box<dyn Rule>, ConfigError> {
    Ok(Box::new(R::from_options(options)?))
}

const fn entry<R: Configurable>(meta: &'static RuleMeta) -> RuleEntry {
    RuleEntry {
        meta,
        build: build::<R>,
    }
}

static RULES: &[RuleEntry] = &[
    // core
    entry::<complexity::Complexity>(&complexity::META),
    entry::<no_external_binding_mutation::NoExternalBindingMutation>(&no_external_binding_mutation::META),
    entry::<max_params::MaxParams>(&max_params::META),
    entry::<no_param_reassign::NoParamReassign>(&no_param_reassign::META),
    entry::<prefer_const::PreferConst>(&prefer_const::META),
    entry::<no_inline_call_expressions::NoInlineCallExpressions>(&no_inline_call_expressions::META),
    // react
    entry::<no_title_case_props::NoTitleCaseProps>(&no_title_case_props::META),
    entry::<no_custom_kebab_case_props::NoCustomKebabCaseProps>(&no_custom_kebab_case_props::META),
    entry::<no_set_prefix_utils::NoSetPrefixUtils>(&no_set_prefix_utils::META),
    entry::<no_handle_prefix_utils::NoHandlePrefixUtils>(&no_handle_prefix_utils::META),
    entry::<no_useless_hook::NoUselessHook>(&no_useless_hook::META),
    entry::<no_hook_jsx::NoHookJsx>(&no_hook_jsx::META),
    entry::<no_exported_context_hooks::NoExportedContextHooks>(&no_exported_context_hooks::META),
    entry::<no_handler_return_type::NoHandlerReturnType>(&no_handler_return_type::META),
    entry::<jsx_server_action_prop_suffix::JsxServerActionPropSuffix>(&jsx_server_action_prop_suffix::META),
    entry::<jsx_on_handler_verb_suffix::JsxOnHandlerVerbSuffix>(&jsx_on_handler_verb_suffix::META),
    entry::<jsx_on_noun_verb_handler_props::JsxOnNounVerbHandlerProps>(&jsx_on_noun_verb_handler_props::META),
    entry::<no_render_helper_functions::NoRenderHelperFunctions>(&no_render_helper_functions::META),
    entry::<no_element_props::NoElementProps>(&no_element_props::META),
    entry::<no_componenttype_props::NoComponentTypeProps>(&no_componenttype_props::META),
    entry::<no_object_props::NoObjectProps>(&no_object_props::META),
    entry::<no_array_props::NoArrayProps>(&no_array_props::META),
    entry::<no_prefixed_prop_bundles::NoPrefixedPropBundles>(&no_prefixed_prop_bundles::META),
    entry::<no_optional_props_without_defaults::NoOptionalPropsWithoutDefaults>(
        &no_optional_props_without_defaults::META,
    ),
    entry::<no_boolean_capability_props::NoBooleanCapabilityProps>(&no_boolean_capability_props::META),
    entry::<max_custom_props::MaxCustomProps>(&max_custom_props::META),
    entry::<jsx_bem_compound_naming::JsxBemCompoundNaming>(&jsx_bem_compound_naming::META),
    entry::<jsx_compound_part_export_naming::JsxCompoundPartExportNaming>(
        &jsx_compound_part_export_naming::META,
    ),
    entry::<no_prop_drilling::NoPropDrilling>(&no_prop_drilling::META),
    entry::<no_pass_through_props::NoPassThroughProps>(&no_pass_through_props::META),
    entry::<jsx_flat_owner_tree::JsxFlatOwnerTree>(&jsx_flat_owner_tree::META),
];

/// Every registered rule, core rules first.
#[must_use]
pub fn all_rules() -> &'static [RuleEntry] {
    RULES
}

#[must_use]
pub fn find(name: &str) -> Option<&'static RuleEntry> {
    RULES.iter().find(|entry| entry.name() == name)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use serde_json::json;
    use sweep_core::RuleCategory;

    use super::*;

    #[test]
    fn names_are_unique_and_kebab_case() {
        let names: HashSet<&str> = all_rules().iter().map(RuleEntry::name).collect();
        assert_eq!(names.len(), all_rules().len());
        assert_eq!(all_rules().len(), 31);
        for name in names {
            assert!(name.chars().all(|c| c.is_ascii_lowercase() || c == '-'), "{name}");
        }
    }

    #[test]
    fn built_rules_report_their_own_meta() {
        for entry in all_rules() {
            let rule = entry.build(None).unwrap();
            assert_eq!(rule.meta().name, entry.name());
        }
    }

    #[test]
    fn core_rules_come_first() {
        let categories: Vec<RuleCategory> = all_rules().iter().map(|entry| entry.meta.category).collect();
        let first_react = categories.iter().position(|c| *c == RuleCategory::React).unwrap();
        assert!(categories[first_react..].iter().all(|c| *c == RuleCategory::React));
        assert_eq!(first_react, 6);
    }

    #[test]
    fn lookup_and_option_validation() {
        assert!(find("no-array-props").is_some());
        assert!(find("no_array_props").is_none());
        let entry = find("max-params").unwrap();
        assert!(entry.build(Some(&json!({"max": 2}))).is_ok());
        assert!(entry.build(Some(&json!({"max": "two"}))).is_err());
    }
}
