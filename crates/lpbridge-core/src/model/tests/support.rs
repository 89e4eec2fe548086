use crate::model::Model;
use crate::types::{Bounds, Variable};

pub(super) fn free_variable() -> Variable {
    Variable::continuous(Bounds::free())
}

pub(super) fn single_variable_model() -> Model {
    let mut model = Model::new();
    model
        .new_float(0.0, 100.0)
        .expect("failed to add variable");
    model
}
