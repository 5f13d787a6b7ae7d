use serde::{Deserialize, Serialize};

/// Operator node in a net
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorDef {
    /// Instance name (may be empty)
    #[serde(default)]
    pub name: String,
    /// Operator type, e.g. "FC" or "Relu"
    pub op_type: String,
}

impl OperatorDef {
    pub fn new(name: impl Into<String>, op_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            op_type: op_type.into(),
        }
    }

    /// Anonymous operator of the given type
    pub fn of_type(op_type: impl Into<String>) -> Self {
        Self::new(String::new(), op_type)
    }
}

/// Net definition: a name plus operators in canonical execution order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetDef {
    pub name: String,
    pub ops: Vec<OperatorDef>,
}

impl NetDef {
    pub fn new(name: impl Into<String>, ops: Vec<OperatorDef>) -> Self {
        Self {
            name: name.into(),
            ops,
        }
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Node label used in per-node stats.
    ///
    /// Falls back to `"{op_type}_{index}"` for unnamed operators so labels
    /// stay distinct within a net.
    pub fn op_label(&self, index: usize) -> String {
        match self.ops.get(index) {
            Some(op) if !op.name.is_empty() => op.name.clone(),
            Some(op) => format!("{}_{}", op.op_type, index),
            None => String::new(),
        }
    }
}
