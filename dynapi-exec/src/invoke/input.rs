use std::fmt;
use std::sync::Arc;

use uuid::Uuid;

use crate::invoke::OperationInstance;
use crate::resolve::ResolveError;

type ComputeFn<T> = dyn Fn(&OperationInstance) -> Result<T, ResolveError> + Send + Sync;

/// A value known up front, or one computed from the instance at execution time.
#[derive(Clone)]
pub enum InputValue<T> {
    Fixed(T),
    Computed(Arc<ComputeFn<T>>),
}

/// An input slot of the invocation primitive.
///
/// The `reference` identifies the slot; the descriptor and every instance built from it hold
/// clones of the same `Input`, so both see the same reference and the same computation.
#[derive(Clone)]
pub struct Input<T> {
    reference: Uuid,
    value: InputValue<T>,
}

impl<T: Clone> Input<T> {
    pub fn fixed(value: T) -> Self {
        Self {
            reference: Uuid::new_v4(),
            value: InputValue::Fixed(value),
        }
    }

    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&OperationInstance) -> Result<T, ResolveError> + Send + Sync + 'static,
    {
        Self {
            reference: Uuid::new_v4(),
            value: InputValue::Computed(Arc::new(f)),
        }
    }

    pub fn reference(&self) -> Uuid {
        self.reference
    }

    pub fn value(&self) -> &InputValue<T> {
        &self.value
    }

    pub fn is_computed(&self) -> bool {
        matches!(self.value, InputValue::Computed(_))
    }

    /// Computed inputs are re-evaluated on every call; nothing is cached.
    pub fn evaluate(&self, instance: &OperationInstance) -> Result<T, ResolveError> {
        match &self.value {
            InputValue::Fixed(v) => Ok(v.clone()),
            InputValue::Computed(f) => f(instance),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Input<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct("Input");
        d.field("reference", &self.reference);
        match &self.value {
            InputValue::Fixed(v) => d.field("fixed", v),
            InputValue::Computed(_) => d.field("computed", &"<fn>"),
        };
        d.finish()
    }
}
