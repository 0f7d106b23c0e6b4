// RegPlot - core/variables.rs
//
// The variable catalogue: which log prefixes feed which table columns.
// Built-in specs are fixed; the inlet spec is added only when its prefix
// occurs in the log; user-defined extras come last.

use crate::core::model::VariableSpec;
use crate::util::constants as c;
use crate::util::error::ConfigError;

/// The always-present variables, in column order. `time` comes first.
pub fn builtin_variables() -> Vec<VariableSpec> {
    vec![
        VariableSpec::new(c::TIME, c::TIME_PREFIX),
        VariableSpec::new(c::SENSOR_VALUE, c::SENSOR_VALUE_PREFIX),
        VariableSpec::new(c::TARGET_VALUE, c::TARGET_VALUE_PREFIX),
        VariableSpec::new(c::ERROR, c::ERROR_PREFIX),
        VariableSpec::new(c::OUTPUT_SIGNAL, c::OUTPUT_SIGNAL_PREFIX),
    ]
}

/// The optional inlet-value variable.
pub fn inlet_variable() -> VariableSpec {
    VariableSpec::new(c::INLET_VALUE, c::INLET_VALUE_PREFIX)
}

/// Resolve the variables to scan `content` for.
///
/// The inlet spec joins when its prefix appears anywhere in the text,
/// not only at a line start. `extras` are appended unchanged and are
/// expected to have passed [`validate_extras`].
pub fn active_variables(content: &str, extras: &[VariableSpec]) -> Vec<VariableSpec> {
    let mut specs = builtin_variables();
    if content.contains(c::INLET_VALUE_PREFIX) {
        specs.push(inlet_variable());
    }
    specs.extend(extras.iter().cloned());
    specs
}

/// Turn user-defined `(name, prefix)` pairs into specs.
///
/// Entries with an empty name or prefix, or whose name or prefix is already
/// taken by a built-in (inlet included) or an earlier extra, are rejected.
/// Accepted entries keep their input order.
pub fn validate_extras<'a, I>(extras: I) -> (Vec<VariableSpec>, Vec<ConfigError>)
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut taken: Vec<VariableSpec> = builtin_variables();
    taken.push(inlet_variable());

    let mut accepted = Vec::new();
    let mut rejected = Vec::new();

    for (name, prefix) in extras {
        let reason = if name.trim().is_empty() {
            Some("name is empty".to_string())
        } else if prefix.is_empty() {
            Some("prefix is empty".to_string())
        } else if let Some(other) = taken.iter().find(|s| s.name == name) {
            Some(format!("name already used (prefix '{}')", other.prefix))
        } else if let Some(other) = taken.iter().find(|s| s.prefix == prefix) {
            Some(format!("prefix '{prefix}' already used by '{}'", other.name))
        } else {
            None
        };

        match reason {
            Some(reason) => rejected.push(ConfigError::InvalidVariable {
                name: name.to_string(),
                reason,
            }),
            None => {
                let spec = VariableSpec::new(name, prefix);
                taken.push(spec.clone());
                accepted.push(spec);
            }
        }
    }

    (accepted, rejected)
}
