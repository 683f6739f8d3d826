//! Typed partial updates
//!
//! A PATCH body is a JSON array of `{"field": "...", "value": ...}`
//! operations. Each resource defines an enum of the fields it allows to be
//! patched. Operations are applied in order to the resource's full request
//! shape, which is then validated like a PUT body.

use validator::Validate;

use super::ApiError;

/// One field assignment on `T`.
pub trait FieldPatch<T> {
    fn apply(self, target: &mut T);
}

pub fn apply_patch<T, P>(mut target: T, ops: Vec<P>) -> Result<T, ApiError>
where
    T: Validate,
    P: FieldPatch<T>,
{
    for op in ops {
        op.apply(&mut target);
    }
    target.validate()?;
    Ok(target)
}
