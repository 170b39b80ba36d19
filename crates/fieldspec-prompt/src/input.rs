//! The retry-until-valid loop.

use fieldspec_model::{Result, Spec, SpecError, Value, presets};
use fieldspec_validate::{Verdict, is_valid};
use tracing::debug;

use crate::console::Console;

/// Repeatedly request a raw line until `spec` accepts it.
///
/// Each rejection echoes the spec's message and re-prompts; there is no
/// retry bound and no fallback to a default, so an out-of-policy value can
/// never slip through. If the input source ends first, the loop fails with
/// [`SpecError::InputClosed`] rather than manufacturing a value.
pub fn validate_input<C: Console>(
    console: &mut C,
    spec: &Spec,
    prompt: Option<&str>,
) -> Result<Option<Value>> {
    loop {
        let Some(line) = console.read_line(prompt)? else {
            return Err(SpecError::InputClosed);
        };
        match is_valid(line.as_str(), spec) {
            Verdict::Accepted(value) => {
                debug!(?value, "input accepted");
                return Ok(value);
            }
            Verdict::Rejected(echo) => {
                debug!(rejected = %echo, "input rejected");
                console.write_line(spec.message())?;
            }
        }
    }
}

/// Ask until the user answers with a boolean-like word and map it to a
/// `bool`; blank (when `or_blank`) maps to `None`.
pub fn true_false<C: Console>(
    console: &mut C,
    prompt: Option<&str>,
    or_blank: bool,
) -> Result<Option<bool>> {
    let spec = if or_blank {
        presets::BOOL_LIKE.clone().or_blank()
    } else {
        presets::BOOL_LIKE.clone()
    };
    let value = validate_input(console, &spec, prompt)?;
    Ok(value.map(|value| {
        !matches!(
            value,
            Value::Str(ref word) if matches!(word.as_str(), "f" | "false" | "n" | "no" | "0")
        )
    }))
}
