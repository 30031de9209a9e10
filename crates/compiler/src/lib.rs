#![allow(non_snake_case)]
#![deny(unused_imports)]

pub mod ProcessCommonJSModules;
pub mod TransformAMDToCJSModule;
pub mod diagnostics;
mod find_vars;
pub mod ir;

#[cfg(test)]
mod testing;

pub use crate::ProcessCommonJSModules::{
    to_module_name, to_module_name_relative, CompilerInput, JsModule, ProcessCommonJsModules,
    DEFAULT_FILENAME_PREFIX,
};
pub use find_vars::{
    find_vars_declared_in_fn, find_vars_declared_in_script, AllVarsDeclaredInFunction, FxIndexSet,
};
