//! Every rule, one module each.

pub mod complexity;
pub mod jsx_bem_compound_naming;
pub mod jsx_compound_part_export_naming;
pub mod jsx_flat_owner_tree;
pub mod jsx_on_handler_verb_suffix;
pub mod jsx_on_noun_verb_handler_props;
pub mod jsx_server_action_prop_suffix;
pub mod max_custom_props;
pub mod max_params;
pub mod no_array_props;
pub mod no_boolean_capability_props;
pub mod no_componenttype_props;
pub mod no_custom_kebab_case_props;
pub mod no_element_props;
pub mod no_exported_context_hooks;
pub mod no_external_binding_mutation;
pub mod no_handle_prefix_utils;
pub mod no_handler_return_type;
pub mod no_hook_jsx;
pub mod no_inline_call_expressions;
pub mod no_object_props;
pub mod no_optional_props_without_defaults;
pub mod no_param_reassign;
pub mod no_pass_through_props;
pub mod no_prefixed_prop_bundles;
pub mod no_prop_drilling;
pub mod no_render_helper_functions;
pub mod no_set_prefix_utils;
pub mod no_title_case_props;
pub mod no_useless_hook;
pub mod prefer_const;
